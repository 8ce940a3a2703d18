pub mod consulates;
pub mod contact;
pub mod inspect;
pub mod replay;

use anyhow::{Context, Result};
use consulmap::ViewConfig;

use crate::cli::Cli;

pub(crate) fn load_config(cli: &Cli) -> Result<ViewConfig> {
    match &cli.config {
        Some(path) => ViewConfig::from_path(path)
            .with_context(|| format!("[config] failed to load {}", path.display())),
        None => Ok(ViewConfig::default()),
    }
}
