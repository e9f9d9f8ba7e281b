use std::sync::Arc;

use poise::serenity_prelude::{self as serenity, CreateMessage};
use tracing::{error, info};

use crate::models::Data;

/// Send today's timetable to every subscribed channel
///
/// The message is built once; a failed send is logged and never aborts
/// the rest of the batch.
pub async fn run_daily_broadcast(
    http: &Arc<serenity::Http>,
    data: &Data,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let message = data.today_message()?;

    let recipients = data.subscriber_ids();
    if recipients.is_empty() {
        info!("No subscribers, skipping daily broadcast");
        return Ok(());
    }

    info!("Broadcasting today's timetable to {} channel(s)", recipients.len());

    let mut sent = 0usize;
    for channel_id in recipients {
        let builder = CreateMessage::new().content(message.as_str());
        match channel_id.send_message(http, builder).await {
            Ok(_) => sent += 1,
            Err(e) => {
                error!("Failed to send timetable to channel {}: {}", channel_id, e);
            }
        }
    }

    info!("Daily broadcast completed ({} sent)", sent);
    Ok(())
}
