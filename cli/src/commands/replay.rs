use anyhow::{Context, Result};
use consulmap::{CommandQueue, MapEvent, RegionSource, ViewSession};
use serde_json::json;

use super::load_config;

/// Print one JSON line per event: whether it was handled, the render
/// commands it produced and the tooltip state afterwards.
pub fn run(cli: &crate::cli::Cli, args: &crate::cli::ReplayArgs) -> Result<()> {
    let config = load_config(cli)?;

    let text = std::fs::read_to_string(&args.events)
        .with_context(|| format!("[replay] failed to read {}", args.events.display()))?;
    let events: Vec<MapEvent> = serde_json::from_str(&text)
        .with_context(|| format!("[replay] {} is not a JSON array of events", args.events.display()))?;

    let mut session = ViewSession::new(config, CommandQueue::new());
    if let Err(err) = session.load_from(&RegionSource::parse(&args.data)) {
        // Same as the page: keep going without regions.
        eprintln!("[replay] continuing without regions: {err}");
    }
    let setup = session.backend_mut().drain();
    println!("{}", json!({ "setup": setup }));

    if cli.verbose > 0 { eprintln!("[replay] {} events", events.len()); }
    for event in events {
        let handled = session.handle(event.clone());
        let commands = session.backend_mut().drain();
        println!("{}", json!({
            "event": event,
            "handled": handled,
            "commands": commands,
            "tooltip": session.tooltip().state(),
        }));
    }
    Ok(())
}
