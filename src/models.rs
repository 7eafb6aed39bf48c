use std::sync::Arc;

use poise::serenity_prelude::ChannelId;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::questions::QuestionPool;
use crate::store::GuildStore;

/// A single future posting, removed after it fires.
///
/// `run_at` stays a string in the model so that one malformed timestamp is a
/// per-entry parse failure at tick time instead of poisoning the whole file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneShot {
    /// ISO-8601 instant with explicit UTC offset
    pub run_at: String,
    /// Zero-based question override; `None` means "next in order"
    #[serde(default)]
    pub q_idx: Option<usize>,
}

/// Per-guild QOTD configuration and posting state
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GuildSchedule {
    /// Channel questions are posted to; unset until configured
    #[serde(default)]
    pub channel_id: Option<ChannelId>,
    /// Daily posting time, "HH:MM" 24-hour in the reference timezone
    #[serde(default)]
    pub time_hhmm: Option<String>,
    /// Whether daily posting is active
    #[serde(default)]
    pub enabled: bool,
    /// Cursor into the question order, wraps at the end of a full cycle
    #[serde(default)]
    pub current_index: usize,
    /// Optional shuffled play order over the whole pool
    #[serde(default)]
    pub order: Option<Vec<usize>>,
    /// Reference-timezone calendar date ("YYYY-MM-DD") of the last daily post
    #[serde(default)]
    pub last_post_date: Option<String>,
    /// Pending one-time postings
    #[serde(default)]
    pub one_shot_schedules: Vec<OneShot>,
}

/// Bot state shared between command handlers and the scheduler
pub struct Data {
    /// Guild schedules behind a single lock: command handlers and the
    /// scheduler tick rewrite the whole store on save, so their mutations
    /// must never interleave.
    pub store: Mutex<GuildStore>,
    /// The embedded question bank
    pub pool: QuestionPool,
}

impl Data {
    /// Create a new Data instance from a loaded store and question pool
    pub fn new(store: GuildStore, pool: QuestionPool) -> Self {
        Self {
            store: Mutex::new(store),
            pool,
        }
    }
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Arc<Data>, Error>;
