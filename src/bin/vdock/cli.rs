use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "vdock",
    about = "Split, sort and re-index molecular docking results",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load docking results and write one PDB file per output collection
    #[command(visible_alias = "l")]
    Load(LoadArgs),

    /// Load docking results and print the entry table
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),
}

impl Command {
    pub fn quiet(&self) -> bool {
        match self {
            Command::Load(args) => args.io.quiet,
            Command::Inspect(args) => args.io.quiet,
        }
    }
}

/// Input options shared by all commands.
#[derive(Args)]
pub struct IoOptions {
    /// Input file (stdin if omitted, requires --infmt and --name)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Input format (inferred from extension if not specified)
    #[arg(long = "infmt", value_name = "FORMAT")]
    pub input_format: Option<InputFormat>,

    /// Session defaults (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Load options shared by all commands.
#[derive(Args)]
#[command(next_help_heading = "Loading")]
pub struct LoadOptions {
    /// Collection name (defaults to the input file name)
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// How entries are split into collections
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<Mode>,
}

#[derive(Args)]
pub struct LoadArgs {
    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub load: LoadOptions,

    /// Output directory for <collection>.pdb files
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub load: LoadOptions,

    #[command(flatten)]
    pub edit: EditOptions,

    /// Print entries as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
#[command(next_help_heading = "Editing")]
pub struct EditOptions {
    /// Remove the entry at INDEX (0-based, applied in order), repeatable
    #[arg(long = "remove", value_name = "INDEX", action = ArgAction::Append)]
    pub remove: Vec<usize>,

    /// Keep ordinals and cluster ranks as they are when removing
    #[arg(long)]
    pub no_renumber: bool,

    /// Sort entries by this annotation field
    #[arg(short, long, value_name = "FIELD")]
    pub sort: Option<String>,

    /// Sort in descending order
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InputFormat {
    /// SwissDock cluster file (PDB with REMARK scores)
    #[value(alias = "pdb")]
    Dock4,
    /// UCSF ChimeraX web-data manifest
    Chimerax,
}

#[derive(Clone, Copy, Debug, ValueEnum, Default)]
pub enum Mode {
    /// All entries in one collection
    #[default]
    #[value(name = "all-one", alias = "0")]
    AllOne,
    /// Only the first entry of each cluster (ClusterRank 0)
    #[value(name = "first-of-cluster", alias = "1")]
    FirstOfCluster,
    /// One collection per cluster
    #[value(name = "all-by-cluster", alias = "2")]
    AllByCluster,
}

pub fn parse() -> Cli {
    Cli::parse()
}
