use anyhow::Result;
use consulmap::ConsulateTable;

pub fn run(_cli: &crate::cli::Cli) -> Result<()> {
    for (_, consulate) in ConsulateTable::builtin().iter() {
        println!("{:<14} {:<16} {}  {}", consulate.id, consulate.display_name, consulate.color, consulate.website_url);
    }
    Ok(())
}
