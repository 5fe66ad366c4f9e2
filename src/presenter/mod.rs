//! Rendering of `show` output and the terminal transcript.

pub mod show;
pub mod transcript;

use serde::{Deserialize, Serialize};

pub use transcript::Transcript;

/// How `show access-lists` labels each list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AclLabelPolicy {
    /// Every list is labelled "Standard IP access list".
    #[default]
    Uniform,
    /// Numbers 100-199 are labelled "Extended IP access list".
    ByRange,
}

/// Presentation settings shared by every session of a process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenterOptions {
    pub acl_labels: AclLabelPolicy,
    /// Maximum transcript length in lines. Unbounded when unset.
    pub transcript_limit: Option<usize>,
}
