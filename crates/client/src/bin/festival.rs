use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use client::{AdminGate, AdminWriter, ApiClient, Store, render};
use storage::{
    dto::{
        event::NewEvent,
        filter::{EventFilter, ResultsFilter},
        group::NewGroup,
        result::NewResult,
    },
    models::EventCategory,
    services::points,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "festival")]
#[command(about = "Festival leaderboard, schedule and results", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(
        long,
        env = "FESTIVAL_API_URL",
        default_value = "http://localhost:8080",
        global = true
    )]
    api_url: String,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Group standings by total points
    Leaderboard,
    /// Events that have no results yet
    Events {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Published results per event
    Results {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long)]
        category: Option<EventCategory>,
    },
    /// Points awarded per category and position
    Criteria,
    Admin {
        #[arg(long, env = "FESTIVAL_ADMIN_EMAIL")]
        email: String,

        #[arg(long, env = "FESTIVAL_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,

        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Case-insensitive match on the event name
    #[arg(short, long)]
    search: Option<String>,

    #[arg(long)]
    stage: Option<String>,

    /// Day label such as 5-March
    #[arg(long)]
    date: Option<String>,
}

impl FilterArgs {
    fn into_event_filter(self) -> EventFilter {
        EventFilter {
            search: self.search,
            stage: self.stage,
            date: self.date,
        }
    }
}

#[derive(Subcommand)]
enum AdminAction {
    AddEvent {
        #[arg(long)]
        name: String,

        #[arg(long)]
        category: EventCategory,

        #[arg(long)]
        stage: String,

        /// RFC 3339 timestamp, e.g. 2025-03-05T18:00:00Z
        #[arg(long)]
        start_time: DateTime<Utc>,

        #[arg(long, default_value_t = storage::dto::event::default_max_winners())]
        max_winners: i32,
    },
    AddGroup {
        #[arg(long)]
        name: String,

        #[arg(long)]
        team_code: String,
    },
    AddResult {
        #[arg(long)]
        event_id: Uuid,

        #[arg(long)]
        group_id: Uuid,

        #[arg(long)]
        position: i32,

        #[arg(long)]
        participant: Option<String>,
    },
}

/// Fetch failures leave the store on its previous rows, so the view is still
/// printed after the warning.
fn warn_on_fetch_error(store: &Store) {
    if let Some(error) = store.snapshot().error {
        tracing::error!("Could not refresh festival data: {}", error);
    }
}

async fn run_admin(
    api: Arc<ApiClient>,
    store: Store,
    email: &str,
    password: &str,
    action: AdminAction,
) -> anyhow::Result<()> {
    let gate = AdminGate::new(api.clone());
    let _subscription = gate.watch();
    gate.probe().await;

    if !gate.sign_in(email, password).await {
        anyhow::bail!(
            "Sign in failed: {}",
            gate.sign_in_error().unwrap_or_default()
        );
    }

    tokio::join!(store.fetch_events(), store.fetch_groups());
    warn_on_fetch_error(&store);

    let writer = AdminWriter::new(api.clone(), store.clone());
    match action {
        AdminAction::AddEvent {
            name,
            category,
            stage,
            start_time,
            max_winners,
        } => {
            let mut event = NewEvent::new(name, category, stage, start_time);
            event.max_winners = max_winners;
            let created = writer
                .add_event(event)
                .await
                .context("Failed to add event")?;
            println!("Added event '{}' ({})", created.name, created.event_id);
        }
        AdminAction::AddGroup { name, team_code } => {
            let created = writer
                .add_group(NewGroup { name, team_code })
                .await
                .context("Failed to add group")?;
            println!("Added group '{}' ({})", created.name, created.group_id);
        }
        AdminAction::AddResult {
            event_id,
            group_id,
            position,
            participant,
        } => {
            let outcome = writer
                .add_result(NewResult {
                    event_id,
                    group_id,
                    position,
                    participant_name: participant,
                })
                .await
                .context("Failed to add result")?;

            match outcome {
                Some(result) => println!(
                    "Recorded position {} for {} points",
                    result.position, result.points
                ),
                None => println!("No event with id {}, nothing recorded", event_id),
            }
        }
    }

    if !gate.is_authenticated() {
        tracing::warn!("Session ended before sign out");
        return Ok(());
    }
    gate.sign_out().await.context("Failed to sign out")?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("festival={},client={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let api = Arc::new(ApiClient::new(&cli.api_url).context("Failed to build HTTP client")?);
    let store = Store::new(api.clone());
    tracing::debug!("Using festival API at {}", cli.api_url);

    match cli.command {
        Commands::Leaderboard => {
            store.fetch_groups().await;
            warn_on_fetch_error(&store);
            println!("{}", render::leaderboard(&store.leaderboard()));
        }
        Commands::Events { filter } => {
            tokio::join!(store.fetch_events(), store.fetch_results());
            warn_on_fetch_error(&store);

            let filter = filter.into_event_filter();
            println!("{}", render::events(&store.upcoming_events(&filter)));
            println!();
            println!("Dates:  {}", store.available_dates().join(", "));
            println!("Stages: {}", store.available_stages().join(", "));
        }
        Commands::Results { filter, category } => {
            store.fetch_all().await;
            warn_on_fetch_error(&store);

            let filter = filter.into_event_filter();
            let filter = ResultsFilter {
                search: filter.search,
                stage: filter.stage,
                date: filter.date,
                category,
            };
            println!("{}", render::results(&store.published_results(&filter)));
        }
        Commands::Criteria => {
            println!("{}", render::criteria(&points::criteria()));
        }
        Commands::Admin {
            email,
            password,
            action,
        } => {
            run_admin(api, store, &email, &password, action).await?;
        }
    }

    Ok(())
}
