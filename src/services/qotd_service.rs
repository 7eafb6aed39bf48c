/// QOTD service - schedule mutations invoked by the command surface.
///
/// Every operation takes the store lock for its whole duration, including
/// the persistence write, so command handlers and the scheduler tick never
/// interleave on the shared state.
use chrono::{DateTime, Timelike};
use chrono_tz::Tz;
use poise::serenity_prelude::{ChannelId, GuildId};
use tracing::{error, info};

use crate::models::{Data, OneShot};
use crate::notifier::Notifier;
use crate::selector;
use crate::store::GuildStore;
use crate::utils::timezone::{format_reference, next_occurrence, reference_now};
use crate::utils::validation::{parse_time_string, ValidationError};

/// Read-only snapshot of a guild's QOTD configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GuildStatus {
    pub channel_id: Option<ChannelId>,
    pub time_hhmm: Option<String>,
    pub enabled: bool,
    /// 1-based position of the next question in the cycle
    pub next_position: usize,
    pub pool_size: usize,
    pub pending_one_shots: usize,
}

/// A pending one-shot entry as shown to users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOneShot {
    /// 1-based position, the handle `cancel` takes
    pub position: usize,
    /// Formatted firing time, or the raw stored string when unparsable
    pub when: String,
    pub q_idx: Option<usize>,
}

/// Service for QOTD schedule operations
pub struct QotdService<'a> {
    data: &'a Data,
}

impl<'a> QotdService<'a> {
    /// Create a new QOTD service
    pub fn new(data: &'a Data) -> Self {
        Self { data }
    }

    /// Set the channel questions are posted to
    pub async fn set_channel(&self, guild_id: GuildId, channel_id: ChannelId) {
        let mut store = self.data.store.lock().await;
        store.get_or_create(guild_id).channel_id = Some(channel_id);
        persist(&store);
        info!("Guild {} set QOTD channel to {}", guild_id, channel_id);
    }

    /// Set the daily posting time. Clears the last-post marker so a changed
    /// time can still fire today. Returns the normalized "HH:MM" string.
    pub async fn set_time(&self, guild_id: GuildId, hhmm: &str) -> Result<String, ValidationError> {
        let time = parse_time_string(hhmm)?;
        let normalized = format!("{:02}:{:02}", time.hour(), time.minute());

        let mut store = self.data.store.lock().await;
        let schedule = store.get_or_create(guild_id);
        schedule.time_hhmm = Some(normalized.clone());
        schedule.last_post_date = None;
        persist(&store);
        info!("Guild {} set daily QOTD time to {}", guild_id, normalized);
        Ok(normalized)
    }

    /// Enable daily posting; requires a configured channel
    pub async fn enable(&self, guild_id: GuildId) -> Result<(), ValidationError> {
        let mut store = self.data.store.lock().await;
        let schedule = store.get_or_create(guild_id);
        if schedule.channel_id.is_none() {
            return Err(ValidationError::MissingChannel);
        }
        schedule.enabled = true;
        persist(&store);
        info!("Guild {} enabled daily QOTD", guild_id);
        Ok(())
    }

    /// Disable daily posting
    pub async fn disable(&self, guild_id: GuildId) {
        let mut store = self.data.store.lock().await;
        store.get_or_create(guild_id).enabled = false;
        persist(&store);
        info!("Guild {} disabled daily QOTD", guild_id);
    }

    /// Schedule a one-time posting at the next occurrence of (hh, mm) in
    /// the reference timezone. `question_number` is the user-facing 1-based
    /// number, clamped into the pool. Returns the scheduled instant.
    pub async fn schedule_once(
        &self,
        guild_id: GuildId,
        hhmm: &str,
        question_number: Option<usize>,
    ) -> Result<DateTime<Tz>, ValidationError> {
        self.schedule_once_at(guild_id, hhmm, question_number, reference_now())
            .await
    }

    /// Schedule-once body with an injected clock
    pub(crate) async fn schedule_once_at(
        &self,
        guild_id: GuildId,
        hhmm: &str,
        question_number: Option<usize>,
        now: DateTime<Tz>,
    ) -> Result<DateTime<Tz>, ValidationError> {
        let mut store = self.data.store.lock().await;
        let schedule = store.get_or_create(guild_id);
        if schedule.channel_id.is_none() {
            return Err(ValidationError::MissingChannel);
        }

        let time = parse_time_string(hhmm)?;
        let target = next_occurrence(now, time)?;
        let q_idx =
            question_number.map(|n| n.saturating_sub(1).min(self.data.pool.len() - 1));

        schedule.one_shot_schedules.push(OneShot {
            run_at: target.to_rfc3339(),
            q_idx,
        });
        persist(&store);
        info!("Guild {} scheduled a one-shot QOTD for {}", guild_id, target);
        Ok(target)
    }

    /// Pending one-shot postings, 1-based, in creation order
    pub async fn list_pending(&self, guild_id: GuildId) -> Vec<PendingOneShot> {
        let store = self.data.store.lock().await;
        let Some(schedule) = store.get(guild_id) else {
            return Vec::new();
        };
        schedule
            .one_shot_schedules
            .iter()
            .enumerate()
            .map(|(i, entry)| PendingOneShot {
                position: i + 1,
                when: DateTime::parse_from_rfc3339(&entry.run_at)
                    .map(format_reference)
                    .unwrap_or_else(|_| entry.run_at.clone()),
                q_idx: entry.q_idx,
            })
            .collect()
    }

    /// Cancel a pending one-shot by its 1-based position
    pub async fn cancel(&self, guild_id: GuildId, position: usize) -> Result<(), ValidationError> {
        let mut store = self.data.store.lock().await;
        let pending = store
            .get(guild_id)
            .map(|s| s.one_shot_schedules.len())
            .unwrap_or(0);
        if position == 0 || position > pending {
            return Err(ValidationError::InvalidScheduleIndex {
                given: position,
                pending,
            });
        }
        // The bounds check above guarantees the schedule exists
        if let Some(schedule) = store.get_mut(guild_id) {
            schedule.one_shot_schedules.remove(position - 1);
        }
        persist(&store);
        info!("Guild {} cancelled one-shot schedule #{}", guild_id, position);
        Ok(())
    }

    /// Post the next question immediately, bypassing the schedule
    pub async fn force_fire_now(
        &self,
        guild_id: GuildId,
        notifier: &dyn Notifier,
    ) -> Result<(), ValidationError> {
        let mut store = self.data.store.lock().await;
        let schedule = store.get_or_create(guild_id);
        let Some(channel_id) = schedule.channel_id else {
            return Err(ValidationError::MissingChannel);
        };

        let question = selector::next_question(schedule, &self.data.pool).to_string();
        info!("Guild {} force-posting a QOTD", guild_id);
        if let Err(e) = notifier.deliver(channel_id, &question).await {
            error!("Failed to deliver QOTD in guild {}: {}", guild_id, e);
        }
        persist(&store);
        Ok(())
    }

    /// Question the next daily or force-fire would post, without advancing
    pub async fn preview(&self, guild_id: GuildId) -> String {
        let mut store = self.data.store.lock().await;
        let schedule = store.get_or_create(guild_id);
        selector::peek_question(schedule, &self.data.pool).to_string()
    }

    /// Install a fresh random play order and restart the cycle
    pub async fn shuffle(&self, guild_id: GuildId) {
        let mut store = self.data.store.lock().await;
        let schedule = store.get_or_create(guild_id);
        schedule.order = Some(selector::shuffled_order(self.data.pool.len()));
        schedule.current_index = 0;
        persist(&store);
        info!("Guild {} shuffled its question order", guild_id);
    }

    /// Snapshot of the guild's configuration
    pub async fn status(&self, guild_id: GuildId) -> GuildStatus {
        let mut store = self.data.store.lock().await;
        let schedule = store.get_or_create(guild_id);
        GuildStatus {
            channel_id: schedule.channel_id,
            time_hhmm: schedule.time_hhmm.clone(),
            enabled: schedule.enabled,
            next_position: schedule.current_index % self.data.pool.len() + 1,
            pool_size: self.data.pool.len(),
            pending_one_shots: schedule.one_shot_schedules.len(),
        }
    }
}

/// Write-through persistence. A failed write is logged and the in-memory
/// state stays canonical; the next successful mutation rewrites the file.
fn persist(store: &GuildStore) {
    if let Err(e) = store.save() {
        error!("Failed to persist guild schedules: {}", e);
    }
}
