//! Spec kind classification.
//!
//! `p4` hands its editor several spec flavors (client spec, change spec,
//! label spec, ...). Only the client spec gets a friendly rewrite; everything
//! else passes through untouched, tagged with no kind.

/// First line of a client spec as printed by the server.
pub const CLIENT_SPEC_HEADER: &str = "# A Perforce Client Specification.";

/// Which transform applies to a spec document.
///
/// Decided once when the raw spec is first scanned, then carried alongside
/// the transformed lines so the inverse scan never has to re-derive it from
/// possibly user-edited text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecKind {
    /// Client workspace mapping spec.
    Client,
}

/// Classify a spec by its first line. Empty input has no kind.
pub fn classify(lines: &[String]) -> Option<SpecKind> {
    let first = lines.first()?;
    if first.starts_with(CLIENT_SPEC_HEADER) {
        return Some(SpecKind::Client);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn client_spec_header_is_recognized_by_prefix() {
        let spec = lines(&["# A Perforce Client Specification.", "Client:\tx"]);
        assert_eq!(classify(&spec), Some(SpecKind::Client));

        // Prefix match, not full-line equality.
        let spec = lines(&["# A Perforce Client Specification.  Use 'p4 help client'."]);
        assert_eq!(classify(&spec), Some(SpecKind::Client));
    }

    #[test]
    fn other_first_lines_have_no_kind() {
        assert_eq!(classify(&lines(&["# A Perforce Change Specification."])), None);
        assert_eq!(classify(&lines(&["Client:\tx"])), None);
        assert_eq!(classify(&[]), None);
    }
}
