use chrono::{DateTime, Timelike};
use chrono_tz::Tz;
use poise::serenity_prelude::GuildId;
use tracing::{error, info, warn};

use crate::models::Data;
use crate::notifier::Notifier;
use crate::questions::QuestionPool;
use crate::selector;
use crate::store::GuildStore;
use crate::utils::timezone::{reference_date, reference_now};
use crate::utils::validation::parse_time_string;

/// Run one scheduler pass over every guild at the current reference time
pub async fn run_qotd_tick(data: &Data, notifier: &dyn Notifier) {
    run_qotd_tick_at(data, notifier, reference_now()).await;
}

/// Tick body with an injected clock. Holds the store lock for the whole
/// pass so configuration commands cannot interleave with firing.
pub(crate) async fn run_qotd_tick_at(data: &Data, notifier: &dyn Notifier, now: DateTime<Tz>) {
    let today = reference_date(now);
    let mut store = data.store.lock().await;

    for guild_id in store.guild_ids() {
        let one_shot_changed =
            run_one_shot_pass(&mut store, &data.pool, notifier, guild_id, now).await;
        let daily_changed =
            run_daily_pass(&mut store, &data.pool, notifier, guild_id, now, &today).await;

        // Delivery happened above; persisting after it means a crash in
        // between duplicates a post on restart rather than losing one.
        if one_shot_changed || daily_changed {
            if let Err(e) = store.save() {
                error!("Failed to persist schedules for guild {}: {}", guild_id, e);
            }
        }
    }
}

/// Fire and remove every due one-shot for a guild. Returns whether the
/// pending set changed.
async fn run_one_shot_pass(
    store: &mut GuildStore,
    pool: &QuestionPool,
    notifier: &dyn Notifier,
    guild_id: GuildId,
    now: DateTime<Tz>,
) -> bool {
    let Some(schedule) = store.get_mut(guild_id) else {
        return false;
    };
    if schedule.one_shot_schedules.is_empty() {
        return false;
    }

    // Split into entries that fire now and entries that stay pending.
    // Unparsable timestamps are dropped outright: retrying them would jam
    // the queue forever, and the warning leaves an operator trail.
    let before = schedule.one_shot_schedules.len();
    let now_fixed = now.fixed_offset();
    let mut due = Vec::new();
    let mut pending = Vec::new();
    for entry in schedule.one_shot_schedules.drain(..) {
        match DateTime::parse_from_rfc3339(&entry.run_at) {
            Ok(run_at) if run_at <= now_fixed => due.push(entry),
            Ok(_) => pending.push(entry),
            Err(e) => warn!(
                "Dropping one-shot with malformed run_at '{}' in guild {}: {}",
                entry.run_at, guild_id, e
            ),
        }
    }
    let changed = pending.len() != before;
    schedule.one_shot_schedules = pending;

    let channel_id = schedule.channel_id;
    for entry in due {
        // Fire-at-most-once: the entry is already out of the pending set,
        // whatever happens to its delivery below.
        let Some(channel_id) = channel_id else {
            warn!(
                "Dropping due one-shot in guild {}: no channel configured",
                guild_id
            );
            continue;
        };
        let question = match entry.q_idx {
            Some(idx) => selector::question_at(pool, idx).to_string(),
            None => selector::next_question(schedule, pool).to_string(),
        };
        info!("Posting one-shot QOTD in guild {}", guild_id);
        if let Err(e) = notifier.deliver(channel_id, &question).await {
            error!(
                "Failed to deliver one-shot QOTD in guild {}: {}",
                guild_id, e
            );
        }
    }

    changed
}

/// Fire the daily question when the configured minute matches and it has
/// not already fired today. Returns whether state changed.
async fn run_daily_pass(
    store: &mut GuildStore,
    pool: &QuestionPool,
    notifier: &dyn Notifier,
    guild_id: GuildId,
    now: DateTime<Tz>,
    today: &str,
) -> bool {
    let Some(schedule) = store.get_mut(guild_id) else {
        return false;
    };
    if !schedule.enabled {
        return false;
    }
    let (Some(time_str), Some(channel_id)) = (schedule.time_hhmm.clone(), schedule.channel_id)
    else {
        return false;
    };

    let time = match parse_time_string(&time_str) {
        Ok(time) => time,
        Err(_) => {
            warn!(
                "Guild {} has an unparsable daily time '{}', skipping",
                guild_id, time_str
            );
            return false;
        }
    };

    if now.hour() != time.hour() || now.minute() != time.minute() {
        return false;
    }
    if schedule.last_post_date.as_deref() == Some(today) {
        return false;
    }

    let question = selector::next_question(schedule, pool).to_string();
    info!("Posting daily QOTD in guild {}", guild_id);
    if let Err(e) = notifier.deliver(channel_id, &question).await {
        // The date marker still advances below, so a broken channel is not
        // hammered on every tick for the rest of the day.
        error!("Failed to deliver daily QOTD in guild {}: {}", guild_id, e);
    }
    schedule.last_post_date = Some(today.to_string());

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OneShot;
    use crate::notifier::test_support::CollectingNotifier;
    use crate::services::qotd_service::QotdService;
    use crate::utils::timezone::REFERENCE_TZ;
    use chrono::TimeZone;
    use poise::serenity_prelude::ChannelId;

    const ABC: &[&str] = &["A", "B", "C"];

    fn test_data(dir: &tempfile::TempDir) -> Data {
        let store = GuildStore::load(dir.path().join("qotd_data.json"));
        Data::new(store, crate::questions::QuestionPool::new(ABC))
    }

    fn guild() -> GuildId {
        GuildId::new(1)
    }

    fn channel() -> ChannelId {
        ChannelId::new(7)
    }

    fn aug4(h: u32, m: u32, s: u32) -> DateTime<Tz> {
        REFERENCE_TZ.with_ymd_and_hms(2026, 8, 4, h, m, s).unwrap()
    }

    async fn configure_daily(data: &Data, hhmm: &str) {
        let mut store = data.store.lock().await;
        let schedule = store.get_or_create(guild());
        schedule.channel_id = Some(channel());
        schedule.time_hhmm = Some(hhmm.to_string());
        schedule.enabled = true;
    }

    async fn add_one_shot(data: &Data, run_at: &str, q_idx: Option<usize>) {
        let mut store = data.store.lock().await;
        let schedule = store.get_or_create(guild());
        schedule.channel_id = Some(channel());
        schedule.one_shot_schedules.push(OneShot {
            run_at: run_at.to_string(),
            q_idx,
        });
    }

    #[tokio::test]
    async fn test_daily_fires_exactly_once_per_day() {
        let dir = tempfile::tempdir().unwrap();
        let data = test_data(&dir);
        let notifier = CollectingNotifier::default();
        configure_daily(&data, "21:00").await;

        // Several ticks land inside the configured minute
        run_qotd_tick_at(&data, &notifier, aug4(21, 0, 3)).await;
        run_qotd_tick_at(&data, &notifier, aug4(21, 0, 18)).await;
        run_qotd_tick_at(&data, &notifier, aug4(21, 0, 48)).await;

        assert_eq!(notifier.deliveries(), vec![(channel(), "A".to_string())]);
        {
            let store = data.store.lock().await;
            let schedule = store.get(guild()).unwrap();
            assert_eq!(schedule.last_post_date.as_deref(), Some("2026-08-04"));
            assert_eq!(schedule.current_index, 1);
        }

        // The next day fires again with the next question
        let next_day = REFERENCE_TZ.with_ymd_and_hms(2026, 8, 5, 21, 0, 9).unwrap();
        run_qotd_tick_at(&data, &notifier, next_day).await;
        assert_eq!(
            notifier.deliveries(),
            vec![(channel(), "A".to_string()), (channel(), "B".to_string())]
        );
    }

    #[tokio::test]
    async fn test_daily_skips_outside_the_configured_minute() {
        let dir = tempfile::tempdir().unwrap();
        let data = test_data(&dir);
        let notifier = CollectingNotifier::default();
        configure_daily(&data, "21:00").await;

        run_qotd_tick_at(&data, &notifier, aug4(20, 59, 59)).await;
        run_qotd_tick_at(&data, &notifier, aug4(21, 1, 0)).await;

        assert!(notifier.deliveries().is_empty());
        let store = data.store.lock().await;
        assert_eq!(store.get(guild()).unwrap().last_post_date, None);
    }

    #[tokio::test]
    async fn test_daily_requires_enabled_time_and_channel() {
        let dir = tempfile::tempdir().unwrap();
        let data = test_data(&dir);
        let notifier = CollectingNotifier::default();

        {
            let mut store = data.store.lock().await;
            let schedule = store.get_or_create(guild());
            schedule.channel_id = Some(channel());
            schedule.time_hhmm = Some("21:00".to_string());
            schedule.enabled = false;
        }
        run_qotd_tick_at(&data, &notifier, aug4(21, 0, 0)).await;
        assert!(notifier.deliveries().is_empty());

        {
            let mut store = data.store.lock().await;
            let schedule = store.get_or_create(guild());
            schedule.enabled = true;
            schedule.channel_id = None;
        }
        run_qotd_tick_at(&data, &notifier, aug4(21, 0, 0)).await;
        assert!(notifier.deliveries().is_empty());
    }

    #[tokio::test]
    async fn test_daily_delivery_failure_still_marks_the_day() {
        let dir = tempfile::tempdir().unwrap();
        let data = test_data(&dir);
        let notifier = CollectingNotifier::failing();
        configure_daily(&data, "21:00").await;

        run_qotd_tick_at(&data, &notifier, aug4(21, 0, 0)).await;
        run_qotd_tick_at(&data, &notifier, aug4(21, 0, 30)).await;

        // One attempt, no same-day retry against a broken channel
        assert_eq!(notifier.deliveries().len(), 1);
        let store = data.store.lock().await;
        assert_eq!(
            store.get(guild()).unwrap().last_post_date.as_deref(),
            Some("2026-08-04")
        );
    }

    #[tokio::test]
    async fn test_due_one_shot_fires_and_is_removed() {
        let dir = tempfile::tempdir().unwrap();
        let data = test_data(&dir);
        let notifier = CollectingNotifier::default();
        add_one_shot(&data, &aug4(10, 0, 0).to_rfc3339(), None).await;

        run_qotd_tick_at(&data, &notifier, aug4(10, 0, 12)).await;

        assert_eq!(notifier.deliveries(), vec![(channel(), "A".to_string())]);
        let store = data.store.lock().await;
        assert!(store.get(guild()).unwrap().one_shot_schedules.is_empty());
    }

    #[tokio::test]
    async fn test_future_one_shot_stays_pending() {
        let dir = tempfile::tempdir().unwrap();
        let data = test_data(&dir);
        let notifier = CollectingNotifier::default();
        add_one_shot(&data, &aug4(23, 0, 0).to_rfc3339(), None).await;

        run_qotd_tick_at(&data, &notifier, aug4(10, 0, 0)).await;

        assert!(notifier.deliveries().is_empty());
        let store = data.store.lock().await;
        assert_eq!(store.get(guild()).unwrap().one_shot_schedules.len(), 1);
    }

    #[tokio::test]
    async fn test_one_shot_override_resolves_by_clamped_index() {
        let dir = tempfile::tempdir().unwrap();
        let data = test_data(&dir);
        let notifier = CollectingNotifier::default();
        {
            // A moved cursor must not influence the override
            let mut store = data.store.lock().await;
            store.get_or_create(guild()).current_index = 2;
        }
        add_one_shot(&data, &aug4(10, 0, 0).to_rfc3339(), Some(99)).await;

        run_qotd_tick_at(&data, &notifier, aug4(10, 0, 5)).await;

        assert_eq!(notifier.deliveries(), vec![(channel(), "C".to_string())]);
        let store = data.store.lock().await;
        // Explicit overrides leave the cursor alone
        assert_eq!(store.get(guild()).unwrap().current_index, 2);
    }

    #[tokio::test]
    async fn test_one_shot_without_override_advances_the_cursor() {
        let dir = tempfile::tempdir().unwrap();
        let data = test_data(&dir);
        let notifier = CollectingNotifier::default();
        add_one_shot(&data, &aug4(9, 0, 0).to_rfc3339(), None).await;
        add_one_shot(&data, &aug4(9, 30, 0).to_rfc3339(), None).await;

        run_qotd_tick_at(&data, &notifier, aug4(10, 0, 0)).await;

        assert_eq!(
            notifier.deliveries(),
            vec![(channel(), "A".to_string()), (channel(), "B".to_string())]
        );
    }

    #[tokio::test]
    async fn test_malformed_one_shot_is_dropped_without_delivery() {
        let dir = tempfile::tempdir().unwrap();
        let data = test_data(&dir);
        let notifier = CollectingNotifier::default();
        add_one_shot(&data, "yesterday at noon", None).await;

        run_qotd_tick_at(&data, &notifier, aug4(10, 0, 0)).await;

        assert!(notifier.deliveries().is_empty());
        let service = QotdService::new(&data);
        assert!(service.list_pending(guild()).await.is_empty());
    }

    #[tokio::test]
    async fn test_one_shot_delivery_failure_still_removes_the_entry() {
        let dir = tempfile::tempdir().unwrap();
        let data = test_data(&dir);
        let notifier = CollectingNotifier::failing();
        add_one_shot(&data, &aug4(10, 0, 0).to_rfc3339(), None).await;

        run_qotd_tick_at(&data, &notifier, aug4(10, 0, 10)).await;
        run_qotd_tick_at(&data, &notifier, aug4(10, 0, 25)).await;

        // One attempt: fire-at-most-once, not at-least-once
        assert_eq!(notifier.deliveries().len(), 1);
        let store = data.store.lock().await;
        assert!(store.get(guild()).unwrap().one_shot_schedules.is_empty());
    }

    #[tokio::test]
    async fn test_due_one_shot_without_channel_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let data = test_data(&dir);
        let notifier = CollectingNotifier::default();
        {
            let mut store = data.store.lock().await;
            let schedule = store.get_or_create(guild());
            schedule.one_shot_schedules.push(OneShot {
                run_at: aug4(10, 0, 0).to_rfc3339(),
                q_idx: None,
            });
        }

        run_qotd_tick_at(&data, &notifier, aug4(10, 0, 10)).await;

        assert!(notifier.deliveries().is_empty());
        let store = data.store.lock().await;
        assert!(store.get(guild()).unwrap().one_shot_schedules.is_empty());
    }

    #[tokio::test]
    async fn test_tick_changes_are_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qotd_data.json");
        let data = Data::new(
            GuildStore::load(&path),
            crate::questions::QuestionPool::new(ABC),
        );
        let notifier = CollectingNotifier::default();
        configure_daily(&data, "21:00").await;
        {
            let store = data.store.lock().await;
            store.save().unwrap();
        }

        run_qotd_tick_at(&data, &notifier, aug4(21, 0, 0)).await;

        let reloaded = GuildStore::load(&path);
        let schedule = reloaded.get(guild()).unwrap();
        assert_eq!(schedule.last_post_date.as_deref(), Some("2026-08-04"));
        assert_eq!(schedule.current_index, 1);
    }
}
