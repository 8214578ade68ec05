//! Free Fire Profile Bot
//!
//! Serves the `!info <uid>` command: fetches an account profile from the
//! remote Free Fire service and replies with a structured embed report.

mod clock;
mod config;
mod handlers;
mod health;
mod pipeline;
mod rate_limit;
mod session;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::handlers::Handler;
use crate::health::AppState;
use crate::pipeline::CommandPipeline;
use crate::rate_limit::RateLimiter;
use crate::session::SessionManager;

/// Free Fire Profile Bot CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/freefire-bot.toml")]
    config: String,

    /// Discord bot token (overrides config file)
    #[arg(long, env = "DISCORD_BOT_TOKEN")]
    bot_token: Option<String>,

    /// Free Fire service API key (overrides config file)
    #[arg(long, env = "FF_API_KEY")]
    api_key: Option<String>,

    /// Free Fire service user identifier (overrides config file)
    #[arg(long, env = "FF_USER_UID")]
    user_uid: Option<String>,

    /// Region code to query (overrides config file)
    #[arg(long, env = "FF_REGION")]
    region: Option<String>,

    /// Health check server port
    #[arg(long, env = "HEALTH_CHECK_PORT", default_value = "3001")]
    health_port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "freefire_bot=debug,freefire_api=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Free Fire Profile Bot");

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config = if std::path::Path::new(&args.config).exists() {
        info!("Loading config from file: {}", args.config);
        Config::from_file(&args.config)?
    } else {
        info!("Config file not found, loading from environment");
        Config::from_env()?
    };

    if let Some(bot_token) = args.bot_token {
        config.discord.bot_token = bot_token;
    }
    if let Some(api_key) = args.api_key {
        config.freefire.api_key = api_key;
    }
    if let Some(user_uid) = args.user_uid {
        config.freefire.user_uid = user_uid;
    }
    if let Some(region) = args.region {
        config.freefire.region = region;
    }

    info!("Region: {}", config.freefire.region);

    // Session lifecycle: the ready handler constructs the shared client
    let session = Arc::new(SessionManager::new());

    let limiter = config
        .freefire
        .rate_limit_enabled
        .then(|| RateLimiter::new(Duration::from_secs(config.freefire.cooldown_secs)));

    let pipeline = Arc::new(CommandPipeline::new(
        session.clone(),
        limiter,
        config.freefire.clone(),
    ));

    // Build serenity client
    let intents =
        GatewayIntents::GUILD_MESSAGES | GatewayIntents::DIRECT_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord.bot_token, intents)
        .event_handler(Handler)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create Discord client: {}", e))?;

    // Set up health check state before inserting into client data
    let health_state = AppState::new(session.clone());

    // Insert pipeline, session, and health state into client data
    {
        let mut data = client.data.write().await;
        data.insert::<CommandPipeline>(pipeline);
        data.insert::<SessionManager>(session.clone());
        data.insert::<AppState>(health_state.clone());
    }

    // Start health check server
    let health_port = args.health_port;
    tokio::spawn(async move {
        if let Err(e) = health::start_health_server(health_state, health_port).await {
            error!("Health server error: {}", e);
        }
    });

    // Graceful shutdown: close the session and all shards on SIGTERM or Ctrl+C.
    let shard_manager = client.shard_manager.clone();
    let session_for_shutdown = session.clone();
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let mut sigterm = signal(SignalKind::terminate()).expect("SIGTERM handler");
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = sigterm.recv() => {}
            }
        }
        #[cfg(not(unix))]
        {
            tokio::signal::ctrl_c().await.ok();
        }
        info!("Shutdown signal received, stopping Discord client...");
        session_for_shutdown.close();
        shard_manager.shutdown_all().await;
    });

    info!("Starting Discord gateway connection...");

    // Start the Discord client (blocks until all shards are stopped)
    client
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("Discord client error: {}", e))?;

    info!("Free Fire bot stopped");
    Ok(())
}
