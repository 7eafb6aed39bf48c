use std::sync::Arc;

use async_trait::async_trait;
use poise::serenity_prelude::{
    self as serenity, AutoArchiveDuration, ChannelId, Colour, CreateEmbed, CreateEmbedFooter,
    CreateMessage, CreateThread,
};
use tracing::debug;

use crate::constants::{QOTD_FOOTER, QOTD_TITLE, THREAD_NAME};
use crate::models::Error;

/// Delivery capability the scheduler and commands post through. Failures
/// are reported to the caller, which logs them; nothing here retries.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a question to a channel
    async fn deliver(&self, channel_id: ChannelId, question: &str) -> Result<(), Error>;
}

/// Posts questions as Discord embeds and opens an answer thread under each
pub struct DiscordNotifier {
    http: Arc<serenity::Http>,
}

impl DiscordNotifier {
    pub fn new(http: Arc<serenity::Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn deliver(&self, channel_id: ChannelId, question: &str) -> Result<(), Error> {
        let embed = CreateEmbed::new()
            .title(QOTD_TITLE)
            .description(question)
            .colour(Colour::BLURPLE)
            .footer(CreateEmbedFooter::new(QOTD_FOOTER));
        let message = CreateMessage::new().embed(embed);

        let sent = channel_id.send_message(&self.http, message).await?;

        // Threads need extra permissions in some channels; the post itself
        // is the deliverable, so a failed thread is only worth a debug line.
        let thread = CreateThread::new(THREAD_NAME).auto_archive_duration(AutoArchiveDuration::OneHour);
        if let Err(e) = sent
            .channel_id
            .create_thread_from_message(&self.http, sent.id, thread)
            .await
        {
            debug!("Could not create answer thread in {}: {}", channel_id, e);
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use super::*;

    /// Records deliveries instead of talking to Discord
    #[derive(Default)]
    pub struct CollectingNotifier {
        pub sent: Mutex<Vec<(ChannelId, String)>>,
        /// When set, every delivery reports failure (after recording)
        pub fail: bool,
    }

    impl CollectingNotifier {
        pub fn failing() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        pub fn deliveries(&self) -> Vec<(ChannelId, String)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Notifier for CollectingNotifier {
        async fn deliver(&self, channel_id: ChannelId, question: &str) -> Result<(), Error> {
            self.sent
                .lock()
                .unwrap()
                .push((channel_id, question.to_string()));
            if self.fail {
                return Err("delivery refused".into());
            }
            Ok(())
        }
    }
}
