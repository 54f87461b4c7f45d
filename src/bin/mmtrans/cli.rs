use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mmic_translator::Axis;

#[derive(Parser)]
#[command(
    name = "mmtrans",
    about = "Inspect and route molecular-modeling schema translators",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by all commands.
#[derive(Args)]
pub struct GlobalOptions {
    /// Router configuration (registry, priority, environment)
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "MMTRANS_CONFIG",
        global = true
    )]
    pub config: Option<PathBuf>,

    /// Plugins to try first when several claim an extension, repeatable
    #[arg(
        short,
        long,
        value_name = "PLUGIN",
        value_delimiter = ',',
        action = clap::ArgAction::Append,
        global = true
    )]
    pub priority: Vec<String>,

    /// Only consider these plugins, repeatable; unregistered ids are listed without a toolkit
    #[arg(
        long = "only",
        value_name = "PLUGIN",
        value_delimiter = ',',
        action = clap::ArgAction::Append,
        global = true
    )]
    pub candidates: Vec<String>,

    /// Plain output without tables (for scripting)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// List registered translators and whether they are installed
    #[command(visible_alias = "ls")]
    Plugins,

    /// Show the extension maps installed translators declare for an axis
    #[command(visible_alias = "m")]
    Maps(MapsArgs),

    /// Pick the translator for an extension or file
    #[command(visible_alias = "r")]
    Resolve(ResolveArgs),
}

#[derive(Args)]
pub struct MapsArgs {
    /// Capability axis, e.g. mol-read, ff-write, traj-read
    #[arg(value_name = "AXIS")]
    pub axis: Axis,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Capability axis, e.g. mol-read, ff-write, traj-read
    #[arg(value_name = "AXIS")]
    pub axis: Axis,

    /// File extension (pdb, .gro) or a file path
    #[arg(value_name = "EXT|FILE")]
    pub target: String,
}

pub fn parse() -> Cli {
    Cli::parse()
}
