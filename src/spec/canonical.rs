//! Inverse transform: expand friendly view mappings back to canonical form.
//!
//! The editor session ends with mappings like:
//!
//! ```text
//! \t//depot/some/dir/...
//! ```
//!
//! which `p4` will not accept. Each one is rebuilt into the two-path form
//! using the spec's declared client name:
//!
//! ```text
//! \t//depot/some/dir/... //myclient/some/dir/...
//! ```

use regex::Regex;

use crate::Result;
use crate::spec::kind::SpecKind;
use crate::spec::{CANONICAL_MAPPING, CLIENT_LINE, FRIENDLY_MAPPING, VIEW_HEADER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Spec,
    View,
}

/// Expand friendly mappings using the kind tag produced by
/// [`friendlify`](crate::spec::friendlify).
///
/// With no kind the lines pass through untouched. The `SpecKind` match is
/// exhaustive, so a new kind cannot be added without deciding its inverse
/// here.
pub fn unfriendlify(lines: &[String], kind: Option<SpecKind>) -> Result<Vec<String>> {
    match kind {
        None => Ok(lines.to_vec()),
        Some(SpecKind::Client) => expand_client_view(lines),
    }
}

fn expand_client_view(lines: &[String]) -> Result<Vec<String>> {
    let client_re = Regex::new(CLIENT_LINE)?;
    let view_re = Regex::new(VIEW_HEADER)?;
    let canonical_re = Regex::new(CANONICAL_MAPPING)?;
    let friendly_re = Regex::new(FRIENDLY_MAPPING)?;

    let mut out = Vec::with_capacity(lines.len());
    let mut client_name: Option<String> = None;
    let mut state = State::Spec;

    for line in lines {
        // Same retry shape as the forward scan: a line that ends the view
        // section is handled again under Spec rules.
        loop {
            match state {
                State::Spec => {
                    if let Some(caps) = client_re.captures(line) {
                        client_name = Some(caps[1].to_string());
                    } else if view_re.is_match(line) {
                        state = State::View;
                    }
                    out.push(line.clone());
                    break;
                }
                State::View => {
                    // Canonical first: the friendly pattern's greedy path
                    // capture would also match a two-path line.
                    if canonical_re.is_match(line) {
                        out.push(line.clone());
                    } else if let Some(caps) = friendly_re.captures(line) {
                        match client_name.as_deref() {
                            Some(client) => {
                                let depot = &caps[1];
                                let depot_path = &caps[2];
                                out.push(format!(
                                    "\t//{}/{} //{}/{}",
                                    depot, depot_path, client, depot_path
                                ));
                            }
                            None => {
                                eprintln!(
                                    "WARN: no Client: name declared before mapping {:?}; leaving it as written",
                                    line
                                );
                                out.push(line.clone());
                            }
                        }
                    } else if line.starts_with("\t//") {
                        // Other mapping syntaxes stay as written.
                        out.push(line.clone());
                    } else {
                        state = State::Spec;
                        continue;
                    }
                    break;
                }
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEADER: &str = "# A Perforce Client Specification.";

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn expand(raw: &[&str]) -> Vec<String> {
        unfriendlify(&lines(raw), Some(SpecKind::Client)).unwrap()
    }

    #[test]
    fn friendly_mapping_expands_with_declared_name() {
        let out = expand(&[
            HEADER,
            "Client:\tmyclient",
            "View:",
            "\t//depot/foo/bar",
        ]);
        assert_eq!(out[3], "\t//depot/foo/bar //myclient/foo/bar");
    }

    #[test]
    fn canonical_mapping_passes_through() {
        let out = expand(&[
            HEADER,
            "Client:\tmyclient",
            "View:",
            "\t//depot/foo/bar //otherclient/elsewhere/bar",
        ]);
        assert_eq!(out[3], "\t//depot/foo/bar //otherclient/elsewhere/bar");
    }

    #[test]
    fn exclusion_mapping_passes_through_and_ends_view() {
        let out = expand(&[
            HEADER,
            "Client:\tmyclient",
            "View:",
            "\t-//depot/skip/...",
            "\t//depot/after/...",
        ]);
        assert_eq!(out[3], "\t-//depot/skip/...");
        // Back in Spec state, so the next friendly line is not expanded.
        assert_eq!(out[4], "\t//depot/after/...");
    }

    #[test]
    fn friendly_mapping_without_declared_name_is_kept() {
        let out = expand(&[HEADER, "View:", "\t//depot/foo/bar"]);
        assert_eq!(out[2], "\t//depot/foo/bar");
    }

    #[test]
    fn blank_line_ends_view_section() {
        let out = expand(&[
            HEADER,
            "Client:\tmyclient",
            "View:",
            "\t//depot/a",
            "",
            "\t//depot/b",
        ]);
        assert_eq!(
            out,
            lines(&[
                HEADER,
                "Client:\tmyclient",
                "View:",
                "\t//depot/a //myclient/a",
                "",
                "\t//depot/b",
            ])
        );
    }

    #[test]
    fn redeclared_client_name_applies_to_later_view_block() {
        let out = expand(&[
            HEADER,
            "Client:\tfirst",
            "View:",
            "\t//depot/a",
            "Client:\tsecond",
            "View:",
            "\t//depot/b",
        ]);
        assert_eq!(
            out,
            lines(&[
                HEADER,
                "Client:\tfirst",
                "View:",
                "\t//depot/a //first/a",
                "Client:\tsecond",
                "View:",
                "\t//depot/b //second/b",
            ])
        );
    }

    #[test]
    fn no_kind_passes_through() {
        let input = lines(&["some", "arbitrary", "text"]);
        assert_eq!(unfriendlify(&input, None).unwrap(), input);
    }
}
