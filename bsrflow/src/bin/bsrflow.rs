use clap::{
    Parser,
    Subcommand,
};
use bsrcore::{
    settings::LibrarySettings,
    workflow::State,
};
use bsrflow::{
    platform::Builder as PlatformBuilder,
    Platform,
};
use bsrmodel::backend::db::{
    MigrationProfile,
    SqliteBackend,
};

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[clap(long, value_name = "BSRFLOW_DB_URL", env = "BSRFLOW_DB_URL")]
    bsrflow_db_url: String,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(arg_required_else_help = true)]
    Settings {
        #[command(subcommand)]
        cmd: SettingsCmd,
    },
    #[command(arg_required_else_help = true)]
    Request {
        #[command(subcommand)]
        cmd: RequestCmd,
    },
}

#[derive(Debug, Subcommand)]
enum SettingsCmd {
    /// Reports the configured default approvers
    Show,
    #[command(arg_required_else_help = true)]
    /// Sets the default approvers
    Set {
        librarian: String,
        library_convener: String,
    },
}

#[derive(Debug, Subcommand)]
enum RequestCmd {
    #[command(arg_required_else_help = true)]
    Create {
        title: String,
        #[clap(long)]
        requested_by: Option<String>,
        #[clap(long)]
        hod: Option<String>,
    },
    #[command(arg_required_else_help = true)]
    Show {
        id: i64,
    },
    List,
    #[command(arg_required_else_help = true)]
    Submit {
        id: i64,
    },
    #[command(arg_required_else_help = true)]
    Transition {
        id: i64,
        #[arg(value_enum)]
        state: State,
    },
    #[command(arg_required_else_help = true)]
    Status {
        id: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("bsrflow")
        .module("bsrmodel")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()
        .unwrap();

    let platform = PlatformBuilder::new()
        .platform(
            SqliteBackend::from_url(&args.bsrflow_db_url)
                .await?
                .run_migration_profile(MigrationProfile::Bsrflow)
                .await?
        )
        .build();

    match args.command {
        Commands::Settings { cmd } => {
            parse_settings(&platform, cmd).await?;
        },
        Commands::Request { cmd } => {
            parse_request(&platform, cmd).await?;
        },
    }

    Ok(())
}

async fn parse_settings<'p>(
    platform: &'p Platform,
    arg: SettingsCmd,
) -> anyhow::Result<()> {
    match arg {
        SettingsCmd::Show => {
            let settings = platform.get_settings().await?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        SettingsCmd::Set { librarian, library_convener } => {
            platform.put_settings(&LibrarySettings {
                default_librarian: librarian,
                default_library_convener: library_convener,
            }).await?;
            println!("updated the default approvers");
        }
    }
    Ok(())
}

async fn parse_request<'p>(
    platform: &'p Platform,
    arg: RequestCmd,
) -> anyhow::Result<()> {
    match arg {
        RequestCmd::Create { title, requested_by, hod } => {
            let request = platform.create_request(
                &title,
                requested_by.as_deref(),
                hod.as_deref(),
            ).await?;
            let id = request.id();
            println!("request created with id {id}");
        }
        RequestCmd::Show { id } => {
            let request = platform.get_request(id).await?;
            println!("{}", serde_json::to_string_pretty(&request.into_inner())?);
        }
        RequestCmd::List => {
            for request in platform.list_requests().await?.iter() {
                println!(
                    "{}\t{}\t{}",
                    request.id,
                    request.workflow_state,
                    request.title,
                );
            }
        }
        RequestCmd::Submit { id } => {
            let outcome = platform.submit_request(id).await?;
            println!("submitted request {id}: {outcome:?}");
        }
        RequestCmd::Transition { id, state } => {
            let outcome = platform.transition_request(id, state).await?;
            println!("transitioned request {id} to '{state}': {outcome:?}");
        }
        RequestCmd::Status { id } => {
            let request = platform.get_request(id).await?;
            println!("id: {}", request.id());
            println!("title: {}", request.title());
            println!("state: {}", request.workflow_state());
            for share in request.shares().await?.iter() {
                let permits = share.permits().iter()
                    .map(|permit| format!("{permit:?}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("shared with '{}': [{permits}]", share.user);
            }
            for task in request.tasks().await?.iter() {
                println!(
                    "task for '{}' [{}]: {}",
                    task.assigned_to,
                    task.status(),
                    task.description,
                );
            }
        }
    }
    Ok(())
}
