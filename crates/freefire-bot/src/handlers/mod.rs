//! Serenity event handler implementation

use serenity::async_trait;
use serenity::builder::{CreateEmbed, CreateEmbedFooter, CreateMessage};
use serenity::gateway::{ConnectionStage, ShardStageUpdateEvent};
use serenity::model::channel::Message;
use serenity::model::colour::Colour;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tracing::{error, info, warn};

use crate::health::AppState;
use crate::pipeline::{CommandPipeline, Outcome};
use crate::session::SessionManager;

/// Prefix command served by this bot.
pub const COMMAND: &str = "!info";

pub struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("Discord bot connected as {}", ready.user.name);

        let data = ctx.data.read().await;

        // First connected event constructs the shared profile client;
        // later ready events (resumes, shard restarts) are no-ops.
        if let Some(session) = data.get::<SessionManager>() {
            session.mark_ready();
        }

        if let Some(health) = data.get::<AppState>() {
            health.set_bot_username(ready.user.name.to_string()).await;
        }
    }

    async fn shard_stage_update(&self, ctx: Context, event: ShardStageUpdateEvent) {
        if event.new != ConnectionStage::Disconnected {
            return;
        }

        info!("Gateway disconnected, closing profile session");
        let data = ctx.data.read().await;
        if let Some(session) = data.get::<SessionManager>() {
            session.close();
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        // Skip bot messages
        if msg.author.bot {
            return;
        }

        let Some(rest) = msg.content.strip_prefix(COMMAND) else {
            return;
        };
        // "!information" is not our command
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return;
        }
        let arg = rest.trim();

        let pipeline = {
            let data = ctx.data.read().await;
            match data.get::<CommandPipeline>() {
                Some(p) => p.clone(),
                None => {
                    error!("CommandPipeline not found in context data");
                    return;
                }
            }
        };

        let outcome = pipeline.handle(msg.author.id.get(), arg).await;

        match outcome {
            Outcome::Reply(text) => {
                if let Err(e) = msg.channel_id.say(&ctx.http, text).await {
                    warn!("Failed to send reply: {}", e);
                }
            }
            Outcome::Report(report) => {
                let embed = CreateEmbed::new()
                    .description(report.text)
                    .colour(Colour::new(report.accent_colour))
                    .footer(CreateEmbedFooter::new(report.footer));
                let builder = CreateMessage::new().embed(embed);
                if let Err(e) = msg.channel_id.send_message(&ctx.http, builder).await {
                    warn!("Failed to send report embed: {}", e);
                }
            }
        }
    }
}
