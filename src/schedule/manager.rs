use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use poise::serenity_prelude as serenity;
use tokio::time::{Duration, sleep};
use tracing::{error, info};

use super::notify_tasks::run_daily_broadcast;
use crate::models::Data;

/// Start the schedule manager that runs the daily broadcast
///
/// The cron expression is fixed for the lifetime of the process; it is
/// built at startup from the configured notify time and timezone.
pub fn start_schedule_manager(ctx: Arc<serenity::Http>, data: Arc<Data>, cron_expression: String) {
    tokio::spawn(async move {
        info!("Schedule manager started (cron: '{}')", cron_expression);

        let schedule = match cron::Schedule::from_str(&cron_expression) {
            Ok(schedule) => schedule,
            Err(e) => {
                error!("Invalid cron expression '{}': {}", cron_expression, e);
                return;
            }
        };

        loop {
            let Some(wait_duration) = next_wait_duration(&schedule) else {
                error!("No upcoming occurrence for cron '{}', stopping", cron_expression);
                break;
            };

            info!(
                "Next daily broadcast in {} minutes",
                wait_duration.as_secs() / 60
            );
            sleep(wait_duration).await;

            if let Err(e) = run_daily_broadcast(&ctx, &data).await {
                error!("Failed to run daily broadcast: {}", e);
            }
        }

        info!("Schedule manager stopped");
    });
}

/// Wait duration until the next cron occurrence
fn next_wait_duration(schedule: &cron::Schedule) -> Option<Duration> {
    let now = Utc::now();
    schedule
        .upcoming(Utc)
        .next()
        .map(|next_time| (next_time - now).to_std().unwrap_or(Duration::from_secs(60)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wait_duration_daily_cron() {
        let schedule = cron::Schedule::from_str("0 0 8 * * *").unwrap();
        let wait = next_wait_duration(&schedule).unwrap();
        // At most 24 hours away
        assert!(wait <= Duration::from_secs(24 * 60 * 60));
    }

    #[test]
    fn test_generated_cron_expressions_parse() {
        for (minute, hour) in [(0, 0), (30, 8), (59, 23)] {
            let expr = format!("0 {} {} * * *", minute, hour);
            assert!(cron::Schedule::from_str(&expr).is_ok());
        }
    }
}
