use std::path::PathBuf;

/// Consulate map CLI: inspect region data and replay pointer sessions headlessly
#[derive(clap::Parser, Debug)]
#[command(name = "consulmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// View configuration (JSON); defaults apply when omitted
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Load a region file and list each region with its consulate
    Inspect(InspectArgs),

    /// Replay a JSON list of map events and print the render commands
    Replay(ReplayArgs),

    /// Copy the contact address to the clipboard
    Contact(ContactArgs),

    /// List the consulate reference table
    Consulates,
}

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// Region feature collection (path or http(s) URL); defaults to the config's data_url
    pub data: Option<String>,

    /// Print each region's popup HTML as well
    #[arg(long)]
    pub popups: bool,
}

#[derive(clap::Args, Debug)]
pub struct ReplayArgs {
    /// Region feature collection (path or http(s) URL)
    pub data: String,

    /// JSON array of events, e.g. [{"type":"pointerEnter","region":"Texas","x":10,"y":20}]
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub events: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ContactArgs {
    /// Address to copy instead of the configured one
    pub email: Option<String>,
}
