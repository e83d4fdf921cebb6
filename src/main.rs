use infrabot_relay::adapters::inbound::http::{AppState, RelayServer};
use infrabot_relay::adapters::outbound::console::{StderrNotifier, StderrSpinner};
use infrabot_relay::adapters::outbound::network::RelayHttpClient;
use infrabot_relay::application::dashboard::{
    generation_notes, summarize, Dashboard, SendOutcome,
};
use infrabot_relay::application::factories::RelayFactory;
use infrabot_relay::cli::{Args, ClientArgs, Command};
use infrabot_relay::config::{self, ClientSettings, ConfigFile, Settings};
use infrabot_relay::shared::{ExitCode, Result};
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Parse command-line arguments; clap exits with code 2 on invalid input
    let args = Args::parse_args();
    init_tracing(&args);

    match run(args).await {
        Ok(()) => process::exit(ExitCode::Success.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Logs go to stderr. The server defaults to `info`, the client commands to
/// `warn` so stdout stays clean. RUST_LOG overrides both.
fn init_tracing(args: &Args) {
    let default_level = match (&args.command, args.verbose) {
        (_, true) => "debug",
        (Command::Serve(_), false) => "info",
        _ => "warn",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> Result<()> {
    let file = load_config(args.config.as_deref())?;

    match args.command {
        Command::Serve(serve) => {
            let settings = Settings::resolve(&serve.overrides(), file.as_ref())?;
            serve_relay(settings).await
        }
        Command::Projects(client) => {
            let mut dashboard = open_dashboard(&client, file.as_ref())?;
            dashboard.projects.fetch_projects().await?;

            for project in dashboard.projects.projects() {
                println!("{}", project);
            }
            Ok(())
        }
        Command::Init { name, client } => {
            let mut dashboard = open_dashboard(&client, file.as_ref())?;
            let response = dashboard.projects.init_project(&name).await?;

            println!("{}", response.workdir);
            Ok(())
        }
        Command::Create {
            prompt,
            project,
            show_code,
            client,
        } => {
            let mut dashboard = open_dashboard(&client, file.as_ref())?;
            if let Some(project) = project {
                dashboard.projects.set_current_project(project);
            }

            let spinner = StderrSpinner::start("Generating component");
            let outcome = dashboard.send_message(prompt).await;
            spinner.finish();

            match outcome {
                SendOutcome::Created(response) => {
                    println!("{}", summarize(&response));
                    for note in generation_notes(&response) {
                        println!("{}", note);
                    }
                    if show_code {
                        println!("\n{}", response.terraform_code);
                    }
                    Ok(())
                }
                SendOutcome::Failed(message) => {
                    anyhow::bail!("Component creation failed: {}", message)
                }
                SendOutcome::Rejected => {
                    anyhow::bail!("Nothing was sent; pass a non-empty prompt and --project")
                }
            }
        }
    }
}

/// Loads the config file given with --config, or discovers one in the
/// working directory.
fn load_config(path: Option<&Path>) -> Result<Option<ConfigFile>> {
    match path {
        Some(path) => Ok(Some(config::load_config_from_path(path)?)),
        None => config::discover_config(&std::env::current_dir()?),
    }
}

async fn serve_relay(settings: Settings) -> Result<()> {
    let addr = settings.socket_addr()?;
    let relay = RelayFactory::create(settings.mode, &settings.upstream_url)?;

    eprintln!(
        "{}",
        RelayFactory::startup_message(settings.mode, &settings.upstream_url)
    );

    RelayServer::new(addr, AppState::new(relay)).run().await
}

fn open_dashboard(
    client: &ClientArgs,
    file: Option<&ConfigFile>,
) -> Result<Dashboard<RelayHttpClient, StderrNotifier>> {
    let settings = ClientSettings::resolve(client.relay_url.as_deref(), file)?;
    let api = RelayHttpClient::new(settings.relay_url.as_str())?;
    let dashboard = Dashboard::new(api, StderrNotifier::new());

    Ok(match &client.parent_dir {
        Some(dir) => dashboard.with_parent_dir(dir.as_str()),
        None => dashboard,
    })
}
