//! Copy-to-clipboard with an ordered list of fallbacks.
//!
//! Each strategy is tried in turn until one succeeds. Failures are logged and
//! swallowed; the caller only learns which strategy (if any) worked.

use crate::error::ClipboardError;

pub trait CopyStrategy {
    fn name(&self) -> &'static str;

    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { strategy: &'static str },
    Failed,
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool { matches!(self, CopyOutcome::Copied { .. }) }
}

pub fn copy_with_fallback(text: &str, strategies: &mut [&mut dyn CopyStrategy]) -> CopyOutcome {
    for strategy in strategies.iter_mut() {
        match strategy.copy(text) {
            Ok(()) => {
                tracing::debug!(strategy = strategy.name(), "copied to clipboard");
                return CopyOutcome::Copied { strategy: strategy.name() };
            }
            Err(err) => tracing::warn!(%err, "copy strategy failed, trying next"),
        }
    }
    tracing::error!("every copy strategy failed");
    CopyOutcome::Failed
}
