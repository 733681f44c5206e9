//! Spec transforms: collapse and expand client view mappings.
//!
//! This module is intentionally separate from file handling and the editor
//! subprocess. It owns:
//! - SpecKind (classification tag carried between the two transforms)
//! - friendlify / unfriendlify line scanners

pub mod canonical;
pub mod friendly;
pub mod kind;

pub use canonical::unfriendlify;
pub use friendly::{FriendlySpec, friendlify};
pub use kind::SpecKind;

// Line grammars shared by the two scanners. These are byte-exact contracts
// with the spec format `p4` prints and reads back; widening any of them risks
// rewriting lines the server would reject.
pub(crate) const CLIENT_LINE: &str = r"^Client:\s+(.*)$";
pub(crate) const VIEW_HEADER: &str = r"^View:\s*$";

// Canonical mapping: depot path captured up to the ` //` that opens the
// client path. Segment tokens allow letters, digits, underscore, hyphen.
pub(crate) const CANONICAL_MAPPING: &str = r"^\t//([a-zA-Z0-9_-]+)/(.*) //([a-zA-Z0-9_-]+)/(.*)$";

// Friendly mapping: a single depot path, rest of line greedy. Note this also
// matches canonical lines; callers must test CANONICAL_MAPPING first.
pub(crate) const FRIENDLY_MAPPING: &str = r"^\t//([a-zA-Z0-9_-]+)/(.*)$";
