//! Command pipeline for `!info`.
//!
//! Ordered, short-circuiting: validation, rate limit, session, fetch,
//! extract, render. Every failure path resolves to a fixed reply; nothing
//! propagates past `handle`.

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod pipeline_tests;

use std::sync::Arc;

use serenity::prelude::TypeMapKey;
use tracing::{debug, warn};

use freefire_api::{extract, render};
use freefire_types::{ProfileQuery, Report};

use crate::config::FreeFireConfig;
use crate::rate_limit::{Decision, RateLimiter};
use crate::session::SessionManager;

pub const MSG_INVALID_UID: &str = "❌ UID must be numeric";
pub const MSG_THROTTLED: &str = "⏳ Slow down, try again in a few seconds";
pub const MSG_STARTING: &str = "⚠️ Bot is starting, try again";
pub const MSG_SERVICE_DOWN: &str = "⚠️ Free Fire service unavailable";

/// Result of one invocation: a report for delivery, or a plain reply.
#[derive(Debug)]
pub enum Outcome {
    Report(Report),
    Reply(&'static str),
}

/// Orchestrates one profile lookup per inbound command event.
pub struct CommandPipeline {
    session: Arc<SessionManager>,
    limiter: Option<RateLimiter>,
    freefire: FreeFireConfig,
}

impl TypeMapKey for CommandPipeline {
    type Value = Arc<CommandPipeline>;
}

impl CommandPipeline {
    /// `limiter: None` disables rate limiting (every call is allowed).
    pub fn new(
        session: Arc<SessionManager>,
        limiter: Option<RateLimiter>,
        freefire: FreeFireConfig,
    ) -> Self {
        Self {
            session,
            limiter,
            freefire,
        }
    }

    /// Run the pipeline for one invocation.
    pub async fn handle(&self, user_id: u64, arg: &str) -> Outcome {
        if arg.is_empty() || !arg.chars().all(|c| c.is_ascii_digit()) {
            return Outcome::Reply(MSG_INVALID_UID);
        }

        if let Some(limiter) = &self.limiter {
            if limiter.check(user_id) == Decision::Throttled {
                debug!("Throttled !info from user {}", user_id);
                return Outcome::Reply(MSG_THROTTLED);
            }
        }

        let client = match self.session.current() {
            Ok(client) => client,
            Err(_) => return Outcome::Reply(MSG_STARTING),
        };

        let query = ProfileQuery::new(
            arg,
            &self.freefire.region,
            &self.freefire.user_uid,
            &self.freefire.api_key,
        );

        let raw = match client.fetch(&query).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Profile fetch for uid {} failed: {}", arg, e);
                return Outcome::Reply(MSG_SERVICE_DOWN);
            }
        };

        let view = extract(&raw, arg, &self.freefire.region);
        Outcome::Report(render(&view))
    }
}
