//! Operator-visible diagnostics.

use crate::error::LoadError;

/// Report a failed region load. Logged through `tracing`, and mirrored to the
/// browser console when built with `wasm-console`.
pub(crate) fn report_load_error(err: &LoadError) {
    tracing::error!(%err, "error loading region data; map renders without regions");

    #[cfg(feature = "wasm-console")]
    web_sys::console::error_1(&format!("Error loading GeoJSON: {err}").into());
}
