use poise::serenity_prelude::{ChannelType, CreateEmbed, GuildChannel};

use crate::{
    models::{Context, Error},
    notifier::DiscordNotifier,
    services::qotd_service::QotdService,
    utils::messages::{build_schedule_line, build_status_message, format_error, format_info, format_success},
    utils::validation::require_guild,
};

/// Configure the daily MDickie question of the day (Manage Server required)
#[poise::command(
    slash_command,
    required_permissions = "MANAGE_GUILD",
    subcommands(
        "set_channel",
        "set_time",
        "start",
        "stop",
        "schedule_once",
        "list_schedules",
        "cancel_schedule",
        "next_now",
        "preview",
        "shuffle",
        "status"
    ),
    subcommand_required
)]
pub async fn qotd(_ctx: Context<'_>) -> Result<(), Error> {
    Ok(())
}

/// All QOTD replies are configuration feedback, visible to the caller only
async fn reply_ephemeral(ctx: Context<'_>, content: String) -> Result<(), Error> {
    ctx.send(poise::CreateReply::default().content(content).ephemeral(true))
        .await?;
    Ok(())
}

/// Set the channel for QOTD posts
#[poise::command(slash_command)]
async fn set_channel(
    ctx: Context<'_>,
    #[description = "Channel where questions will be posted"] channel: GuildChannel,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx.guild_id())?;

    if channel.kind != ChannelType::Text {
        return reply_ephemeral(ctx, format_error("The QOTD channel must be a text channel!"))
            .await;
    }

    QotdService::new(ctx.data()).set_channel(guild_id, channel.id).await;
    reply_ephemeral(
        ctx,
        format_success(&format!("QOTD channel set to <#{}>", channel.id)),
    )
    .await
}

/// Set the daily QOTD time (Asia/Kolkata) in HH:MM (24h)
#[poise::command(slash_command)]
async fn set_time(
    ctx: Context<'_>,
    #[description = "Time in HH:MM (24-hour), e.g. 21:00"] hhmm: String,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx.guild_id())?;

    match QotdService::new(ctx.data()).set_time(guild_id, &hhmm).await {
        Ok(time) => {
            reply_ephemeral(
                ctx,
                format_success(&format!("Daily QOTD time set to **{} (Asia/Kolkata)**", time)),
            )
            .await
        }
        Err(e) => reply_ephemeral(ctx, format_error(&e.to_string())).await,
    }
}

/// Enable daily QOTD posting
#[poise::command(slash_command)]
async fn start(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = require_guild(ctx.guild_id())?;

    match QotdService::new(ctx.data()).enable(guild_id).await {
        Ok(()) => reply_ephemeral(ctx, format_success("Daily QOTD enabled.")).await,
        Err(e) => reply_ephemeral(ctx, format_error(&e.to_string())).await,
    }
}

/// Disable daily QOTD posting
#[poise::command(slash_command)]
async fn stop(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = require_guild(ctx.guild_id())?;

    QotdService::new(ctx.data()).disable(guild_id).await;
    reply_ephemeral(ctx, "⏸️ Daily QOTD disabled.".to_string()).await
}

/// Schedule a one-time QOTD at HH:MM (Asia/Kolkata)
#[poise::command(slash_command)]
async fn schedule_once(
    ctx: Context<'_>,
    #[description = "Time in HH:MM (24-hour)"] hhmm: String,
    #[description = "Question number (1-250); defaults to next in order"] question: Option<u32>,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx.guild_id())?;

    let service = QotdService::new(ctx.data());
    match service
        .schedule_once(guild_id, &hhmm, question.map(|n| n as usize))
        .await
    {
        Ok(target) => {
            reply_ephemeral(
                ctx,
                format!(
                    "🗓️ One-time QOTD scheduled for **{}**",
                    target.format("%Y-%m-%d %H:%M %Z")
                ),
            )
            .await
        }
        Err(e) => reply_ephemeral(ctx, format_error(&e.to_string())).await,
    }
}

/// List upcoming one-time QOTD schedules
#[poise::command(slash_command)]
async fn list_schedules(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = require_guild(ctx.guild_id())?;

    let pending = QotdService::new(ctx.data()).list_pending(guild_id).await;
    if pending.is_empty() {
        return reply_ephemeral(ctx, format_info("No one-time QOTD schedules.")).await;
    }

    let lines: Vec<String> = pending
        .iter()
        .map(|entry| build_schedule_line(entry.position, &entry.when, entry.q_idx))
        .collect();
    reply_ephemeral(ctx, lines.join("\n")).await
}

/// Cancel a one-time schedule by its number from /qotd list_schedules
#[poise::command(slash_command)]
async fn cancel_schedule(
    ctx: Context<'_>,
    #[description = "Schedule number to cancel"] index: u32,
) -> Result<(), Error> {
    let guild_id = require_guild(ctx.guild_id())?;

    match QotdService::new(ctx.data()).cancel(guild_id, index as usize).await {
        Ok(()) => reply_ephemeral(ctx, format_success("Schedule removed.")).await,
        Err(e) => reply_ephemeral(ctx, format_error(&e.to_string())).await,
    }
}

/// Post the next QOTD immediately
#[poise::command(slash_command)]
async fn next_now(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = require_guild(ctx.guild_id())?;

    let notifier = DiscordNotifier::new(ctx.serenity_context().http.clone());
    match QotdService::new(ctx.data())
        .force_fire_now(guild_id, &notifier)
        .await
    {
        Ok(()) => reply_ephemeral(ctx, format_success("QOTD posted.")).await,
        Err(e) => reply_ephemeral(ctx, format_error(&e.to_string())).await,
    }
}

/// Preview the next QOTD without posting
#[poise::command(slash_command)]
async fn preview(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = require_guild(ctx.guild_id())?;

    let question = QotdService::new(ctx.data()).preview(guild_id).await;
    ctx.send(
        poise::CreateReply::default()
            .embed(
                CreateEmbed::new()
                    .title("Preview MDickie QOTD")
                    .description(question),
            )
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

/// Shuffle the order of upcoming questions
#[poise::command(slash_command)]
async fn shuffle(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = require_guild(ctx.guild_id())?;

    QotdService::new(ctx.data()).shuffle(guild_id).await;
    reply_ephemeral(ctx, "🔀 Shuffled question order.".to_string()).await
}

/// Show QOTD configuration for this server
#[poise::command(slash_command)]
async fn status(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = require_guild(ctx.guild_id())?;

    let status = QotdService::new(ctx.data()).status(guild_id).await;
    let channel = status.channel_id.map(|id| format!("<#{}>", id));
    reply_ephemeral(
        ctx,
        build_status_message(
            channel.as_deref(),
            status.time_hhmm.as_deref(),
            status.enabled,
            status.next_position,
            status.pool_size,
            status.pending_one_shots,
        ),
    )
    .await
}
