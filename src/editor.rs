//! External editor resolution and invocation.

use std::env;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, bail};

use crate::Result;

/// Resolve the editor command from `EDITOR`. Unset or empty is a
/// configuration error.
pub fn resolve() -> Result<String> {
    match env::var("EDITOR") {
        Ok(cmd) if !cmd.is_empty() => Ok(cmd),
        _ => bail!("EDITOR must be set"),
    }
}

/// Run the editor on `path` and block until it exits. Non-zero exit is fatal.
pub fn launch(editor: &str, path: &Path) -> Result<()> {
    let status = Command::new(editor)
        .arg(path)
        .status()
        .with_context(|| format!("spawn editor {}", editor))?;
    if !status.success() {
        bail!("editor {} exited with {}", editor, status);
    }
    Ok(())
}
