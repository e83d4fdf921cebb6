use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Overrides, MODE_ENV, RELAY_URL_ENV, UPSTREAM_URL_ENV};
use crate::provisioning::domain::BackendMode;

/// Relay server and command-line dashboard for InfraBot
#[derive(Parser, Debug)]
#[command(name = "infrabot-relay")]
#[command(version)]
#[command(
    about = "Relay natural-language infrastructure requests to the InfraBot service",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./infrabot-relay.config.yml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log relay internals to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the relay HTTP server
    Serve(ServeArgs),

    /// List InfraBot projects under a parent directory
    Projects(ClientArgs),

    /// Initialize a new project under the parent directory
    Init {
        /// Project name; the project is created at <parent-dir>/<name>
        name: String,

        #[command(flatten)]
        client: ClientArgs,
    },

    /// Describe a component in plain language and have it generated
    Create {
        /// What to build, e.g. "an S3 bucket with versioning"
        prompt: String,

        /// Project working directory the component belongs to
        #[arg(short, long)]
        project: Option<String>,

        /// Also print the generated Terraform code
        #[arg(long)]
        show_code: bool,

        #[command(flatten)]
        client: ClientArgs,
    },
}

#[derive(ClapArgs, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(long)]
    pub port: Option<u16>,

    /// Base URL of the InfraBot service
    #[arg(long, env = UPSTREAM_URL_ENV)]
    pub upstream_url: Option<String>,

    /// Backend mode: live or mock
    #[arg(long, env = MODE_ENV)]
    pub mode: Option<BackendMode>,

    /// Shorthand for --mode mock; wins over --mode
    #[arg(long)]
    pub mock: bool,
}

impl ServeArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            port: self.port,
            upstream_url: self.upstream_url.clone(),
            mode: if self.mock {
                Some(BackendMode::Mock)
            } else {
                self.mode
            },
        }
    }
}

#[derive(ClapArgs, Debug, Default)]
pub struct ClientArgs {
    /// Base URL of a running relay
    #[arg(long, env = RELAY_URL_ENV)]
    pub relay_url: Option<String>,

    /// Parent directory holding the projects
    #[arg(long)]
    pub parent_dir: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
