//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// kubecfg - Inspect, merge and edit kubeconfig files
#[derive(Parser, Debug)]
#[command(name = "kubecfg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Kubeconfig path list, separated like PATH (defaults to ~/.kube/config)
    #[arg(long, global = true, env = "KUBECONFIG")]
    pub kubeconfig: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the current context name
    CurrentContext,

    /// List contexts, marking the current one
    GetContexts {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the merged kubeconfig as YAML
    View {
        /// Only show the current context and what it references
        #[arg(long)]
        minify: bool,
    },

    /// Print the server of the cluster a context points at
    Cluster {
        /// Context to resolve (defaults to the current context)
        #[arg(long)]
        context: Option<String>,
    },

    /// Print the bearer token of the user a context points at
    Token {
        /// Context to resolve (defaults to the current context)
        #[arg(long)]
        context: Option<String>,
    },

    /// Set the current context in the first kubeconfig file
    UseContext {
        /// Name of the context to select
        name: String,
    },

    /// Set a user's token in the first kubeconfig file
    ///
    /// Other credential fields of an existing user are kept.
    SetCredentials {
        /// Name of the user entry
        name: String,

        /// Bearer token to store
        #[arg(long)]
        token: String,
    },

    /// Merge two kubeconfig files
    ///
    /// Entries from OVERLAY are appended after BASE's. BASE keeps its
    /// current context when it has one.
    ///
    /// Examples:
    ///   kubecfg merge extra.yaml ~/.kube/config
    ///   kubecfg merge extra.yaml base.yaml -o merged.yaml
    Merge {
        /// File whose entries are appended
        overlay: PathBuf,

        /// File providing the starting document
        base: PathBuf,

        /// Write the result here instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
