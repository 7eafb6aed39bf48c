use std::sync::Arc;

use poise::serenity_prelude as serenity;
use tokio::time::{Duration, interval};
use tracing::info;

use super::qotd_tasks::run_qotd_tick;
use crate::constants::TICK_INTERVAL_SECS;
use crate::models::Data;
use crate::notifier::DiscordNotifier;

/// Start the schedule manager that checks for due QOTD posts
pub fn start_schedule_manager(http: Arc<serenity::Http>, data: Arc<Data>) {
    tokio::spawn(async move {
        info!(
            "Schedule manager started (checking every {}s)",
            TICK_INTERVAL_SECS
        );

        let notifier = DiscordNotifier::new(http);
        let mut ticker = interval(Duration::from_secs(TICK_INTERVAL_SECS));

        loop {
            ticker.tick().await;
            run_qotd_tick(&data, &notifier).await;
        }
    });
}
