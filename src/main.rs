//! Process entry: env + tracing bootstrap, then one of two front ends.
//!
//! `--mode chat` (default) drives the conversation interactively in the
//! terminal; `--mode api` serves the stateless REST API. Both share the
//! same completion client, built once from environment configuration —
//! the process refuses to start without `OPENAI_API_KEY`.

mod chat;

use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use ai_llm_service::health_service::HealthService;
use ai_llm_service::{OpenAiService, config::config_openai};
use api::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Interactive terminal conversation.
    Chat,
    /// Stateless REST API server.
    Api,
}

/// Menu Advisor - conversational menu recommendations.
#[derive(Debug, Parser)]
#[command(name = "menu-ai-backend", about = "Menu Advisor - run in chat or API mode")]
struct Args {
    /// Front end to launch.
    #[arg(long, value_enum, env = "MENU_ADVISOR_MODE", default_value = "chat")]
    mode: Mode,

    /// Bind host for API mode.
    #[arg(long, env = "MENU_ADVISOR_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Bind port for API mode.
    #[arg(long, env = "MENU_ADVISOR_PORT", default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if present.
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let args = Args::parse();

    // Fatal without OPENAI_API_KEY.
    let cfg = config_openai()?;
    info!(model = %cfg.model, endpoint = %cfg.endpoint, "completion service configured");

    let llm = Arc::new(OpenAiService::new(cfg.clone())?);

    // Best-effort startup probe; a down service is worth a warning, not an
    // aborted start.
    let health = HealthService::new(Some(10))?;
    let status = health.check(&cfg).await;
    if !status.ok {
        warn!(message = %status.message, "completion service probe failed at startup");
    }

    match args.mode {
        Mode::Api => {
            let addr = format!("{}:{}", args.host, args.port);
            info!(%addr, "starting REST API server");
            api::start(AppState::new(llm, cfg.model), &addr).await?;
        }
        Mode::Chat => {
            info!("starting interactive chat session");
            chat::run(llm.as_ref()).await?;
        }
    }

    Ok(())
}
