//! Viewer operations invoked by the host's command layer.
//!
//! Every operation runs to completion, touches only visible records, and
//! reports its result as an [`Outcome`]. Notices go through [`crate::host::Host`].

pub mod clipboard;
pub mod delete;
pub mod filter;
pub mod select;

/// Result of running an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation ran; state may have changed
    Finished,
    /// Nothing to operate on; state is unchanged
    Cancelled,
}

impl Outcome {
    pub fn is_finished(self) -> bool {
        matches!(self, Outcome::Finished)
    }
}
