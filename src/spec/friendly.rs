//! Forward transform: collapse redundant client view mappings.
//!
//! A view line maps a depot path to a client workspace path:
//!
//! ```text
//! \t//depot/some/dir/... //myclient/some/dir/...
//! ```
//!
//! When the client side just repeats the depot path under the spec's own
//! client name, the right-hand side carries no information and the line
//! collapses to:
//!
//! ```text
//! \t//depot/some/dir/...
//! ```

use regex::Regex;

use crate::Result;
use crate::spec::kind::{self, SpecKind};
use crate::spec::{CANONICAL_MAPPING, CLIENT_LINE, VIEW_HEADER};

/// Per-line scanner state. `View` is entered at the `View:` section header
/// and left on the first line that is not a canonical mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Spec,
    View,
}

/// Friendlified spec: the kind tag plus the rewritten lines. The tag must be
/// handed back to [`unfriendlify`](crate::spec::unfriendlify) unchanged.
#[derive(Debug, Clone)]
pub struct FriendlySpec {
    pub kind: Option<SpecKind>,
    pub lines: Vec<String>,
}

/// Collapse redundant view mappings in a client spec.
///
/// Unrecognized spec kinds (and empty input) pass through untouched with no
/// kind. Within a recognized spec, any line outside the narrow mapping
/// grammar is copied through verbatim; malformed input is never an error.
pub fn friendlify(lines: &[String]) -> Result<FriendlySpec> {
    let Some(spec_kind) = kind::classify(lines) else {
        return Ok(FriendlySpec {
            kind: None,
            lines: lines.to_vec(),
        });
    };

    let client_re = Regex::new(CLIENT_LINE)?;
    let view_re = Regex::new(VIEW_HEADER)?;
    let canonical_re = Regex::new(CANONICAL_MAPPING)?;

    let mut out = Vec::with_capacity(lines.len());
    let mut client_name: Option<String> = None;
    let mut state = State::Spec;

    for line in lines {
        // A line that ends the view section is handled again under Spec
        // rules, hence the retry loop (a `Client:` line there re-declares
        // the name, a second `View:` re-enters the section).
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
                    let Some(caps) = canonical_re.captures(line) else {
                        state = State::Spec;
                        continue;
                    };
                    let depot = &caps[1];
                    let depot_path = &caps[2];
                    let client = &caps[3];
                    let client_path = &caps[4];
                    if depot_path == client_path && Some(client) == client_name.as_deref() {
                        out.push(format!("\t//{}/{}", depot, depot_path));
                    } else {
                        out.push(line.clone());
                    }
                    break;
                }
            }
        }
    }

    Ok(FriendlySpec {
        kind: Some(spec_kind),
        lines: out,
    })
}
