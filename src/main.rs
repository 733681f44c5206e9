use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tempfile::NamedTempFile;

mod editor;
mod spec;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "p4edit")]
#[command(about = "Friendly editor wrapper for Perforce spec forms", long_about = None)]
struct Cli {
    /// Spec file handed over by p4 (client spec, change spec, or similar).
    #[arg(value_name = "FILE")]
    spec: String,

    /// Print the saved spec on stdout instead of rewriting the file.
    #[arg(long)]
    stdout: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Missing configuration fails before any file is touched.
    let real_editor = editor::resolve()?;

    let spec_in = read_spec_lines(Path::new(&cli.spec))?;

    // 1) Collapse redundant view mappings; the kind tag rides along for the
    //    way back.
    let spec::FriendlySpec { kind, lines } = spec::friendlify(&spec_in)?;

    // 2) Hand the friendly version to the editor via a temp file (removed on
    //    drop, success and error paths alike).
    let tmp = NamedTempFile::new().context("create temp spec file")?;
    fs::write(tmp.path(), render_spec(&lines))
        .with_context(|| format!("write temp spec file {}", tmp.path().display()))?;

    editor::launch(&real_editor, tmp.path())?;

    // 3) Expand the edited result back to what p4 understands.
    let edited = read_spec_lines(tmp.path())?;
    let spec_out = spec::unfriendlify(&edited, kind)?;

    if cli.stdout {
        print!("{}", render_spec(&spec_out));
    } else {
        fs::write(&cli.spec, render_spec(&spec_out))
            .with_context(|| format!("write spec file {}", cli.spec))?;
    }

    Ok(())
}

/// Read a spec as lines, stripping trailing spaces and line endings.
fn read_spec_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read spec file {}", path.display()))?;
    Ok(text
        .lines()
        .map(|line| line.trim_end_matches([' ', '\r']).to_string())
        .collect())
}

/// Join lines into file contents with a single trailing newline.
fn render_spec(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
