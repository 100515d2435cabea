use clap::{Parser, Subcommand};

#[derive(Debug, Parser, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct CLI {
    /// Show debug output
    #[clap(short, long, global = true)]
    pub(crate) verbose: bool,
    #[command(subcommand)]
    pub(crate) command: GobrewCommand,
}

#[derive(Debug, Subcommand, Clone, PartialEq)]
pub enum GobrewCommand {
    /// List installed versions. The current one is marked with `*`
    Ls,
    /// List versions available to install
    LsRemote,
    /// Download and install a version into `versions/<version>`. Does nothing if it is installed
    Install {
        version: String,
    },
    /// Make an installed version the current one
    Use {
        version: String,
    },
    /// Remove an installed version. The current version cannot be removed
    Uninstall {
        version: String,
    },
    /// Print the current version
    Current,
}
