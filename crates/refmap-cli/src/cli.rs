use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "refmap",
    about = "Manage remotes and their fetch/push refspecs",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Remotes file to operate on
    #[arg(
        long,
        global = true,
        env = "REFMAP_CONFIG",
        default_value = ".refmap/remotes.toml"
    )]
    pub config: PathBuf,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List, add, or remove remotes
    Remote(RemoteArgs),
    /// Inspect and edit a remote's refspecs
    Refspec(RefspecArgs),
}

#[derive(Args)]
pub struct RemoteArgs {
    #[command(subcommand)]
    pub action: Option<RemoteAction>,
}

#[derive(Subcommand)]
pub enum RemoteAction {
    /// List remote names
    List,
    /// Add a remote with the default fetch refspec
    Add { name: String, url: String },
    /// Remove a remote
    Remove { name: String },
}

#[derive(Args)]
pub struct RefspecArgs {
    #[command(subcommand)]
    pub action: RefspecAction,
}

#[derive(Subcommand)]
pub enum RefspecAction {
    /// List a remote's refspecs with their indices
    List { remote: String },
    /// Append a refspec (fetch unless --push)
    Add {
        remote: String,
        spec: String,
        #[arg(long)]
        push: bool,
    },
    /// Remove the refspec at an index
    Remove { remote: String, index: usize },
    /// Remove every refspec
    Clear { remote: String },
    /// Show where a reference maps through the remote's refspecs
    Map {
        remote: String,
        reference: String,
        #[arg(long)]
        push: bool,
    },
}
