use std::collections::BTreeMap;

use anyhow::{Context, Result};
use consulmap::{CommandQueue, RegionSource, ViewSession};

use super::load_config;

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::InspectArgs) -> Result<()> {
    let config = load_config(cli)?;
    let location = args.data.clone().unwrap_or_else(|| config.data_url.clone());

    if cli.verbose > 0 { eprintln!("[inspect] loading regions from {location}"); }
    let mut session = ViewSession::new(config, CommandQueue::new());
    session.load_from(&RegionSource::parse(&location))
        .with_context(|| format!("[inspect] failed to load {location}"))?;

    let consulates = session.consulates();
    let Some(regions) = session.regions() else { return Ok(()) };
    let mut per_consulate: BTreeMap<String, usize> = BTreeMap::new();

    for (id, region) in regions.iter() {
        let consulate = match region.consulate {
            Some(c) => consulates.get(c).display_name.clone(),
            None => format!("{} (unresolved)", region.consulate_label),
        };
        println!("{:<22} {:<28} {}", region.name, consulate, region.fill_color);
        if args.popups {
            if let Some(popup) = session.popup(id) {
                println!("    {}", popup.html);
            }
        }
        *per_consulate.entry(consulate).or_default() += 1;
    }

    println!();
    println!("{} regions", regions.len());
    for (consulate, count) in per_consulate {
        println!("  {consulate}: {count}");
    }
    Ok(())
}
