use tracing::error;

use crate::models::{Context, Error};
use crate::utils::messages::build_store_error;

/// Show today's timetable
#[poise::command(slash_command)]
pub async fn today(ctx: Context<'_>) -> Result<(), Error> {
    match ctx.data().today_message() {
        Ok(message) => {
            ctx.say(message).await?;
        }
        Err(e) => {
            error!("Failed to build today's timetable: {}", e);
            ctx.say(build_store_error()).await?;
        }
    }

    Ok(())
}
