use tracing::{error, info};

use crate::models::{Context, Error};
use crate::utils::message_formatter::build_greeting;
use crate::utils::messages::{build_store_error, format_info};

/// Subscribe this channel to the daily timetable
#[poise::command(slash_command)]
pub async fn subscribe(ctx: Context<'_>) -> Result<(), Error> {
    let channel_id = ctx.channel_id();

    match ctx.data().subscribe(channel_id) {
        Ok(true) => {
            info!("Channel {} subscribed to the daily timetable", channel_id);
            let mention = format!("<@{}>", ctx.author().id);
            let notify_time = ctx.data().notify_time.format("%H:%M").to_string();
            ctx.say(build_greeting(
                &mention,
                &notify_time,
                ctx.data().timezone.name(),
            ))
            .await?;
        }
        Ok(false) => {
            ctx.say(format_info("This channel is already subscribed.")).await?;
        }
        Err(e) => {
            error!("Failed to save subscriber {}: {}", channel_id, e);
            ctx.say(build_store_error()).await?;
        }
    }

    Ok(())
}
