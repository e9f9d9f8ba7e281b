mod commands;
mod constants;
mod models;
mod schedule;
mod store;
mod utils;

use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info};

use crate::{
    commands::{subscribe, today},
    constants::{
        DEFAULT_NOTIFY_TIME, DEFAULT_SCHEDULE_FILE, DEFAULT_SUBSCRIBERS_FILE, DEFAULT_TIMEZONE,
        LOG_DIRECTIVE,
    },
    models::Data,
    schedule::start_schedule_manager,
    store::{ScheduleStore, SubscriberStore},
    utils::timezone::{daily_cron_expression, parse_time_string, parse_timezone},
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    initialize_logging();

    // Load configuration from environment
    let config = match load_configuration() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Convert the local broadcast time to a UTC cron expression
    let cron_expression = match daily_cron_expression(config.notify_time, &config.timezone) {
        Ok(expr) => expr,
        Err(e) => {
            error!("Failed to build broadcast schedule: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize bot data
    let data = Data::new(
        ScheduleStore::new(&config.schedule_file),
        SubscriberStore::new(&config.subscribers_file),
        config.notify_time,
        config.timezone,
    );

    // Load existing subscribers from file
    data.load_from_store();

    // Create and start the bot
    if let Err(e) = start_bot(config.discord_token, data, cron_expression, config.dev_guild_id).await
    {
        error!("Bot error: {}", e);
        std::process::exit(1);
    }
}

/// Configuration loaded from environment variables
struct Config {
    discord_token: String,
    schedule_file: String,
    subscribers_file: String,
    notify_time: chrono::NaiveTime,
    timezone: chrono_tz::Tz,
    dev_guild_id: Option<u64>,
}

/// Initialize the logging system
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().expect("valid log directive")),
        )
        .init();
}

/// Load configuration from environment variables
fn load_configuration() -> Result<Config, Box<dyn std::error::Error>> {
    let discord_token = std::env::var("DISCORD_TOKEN").map_err(|_| {
        "DISCORD_TOKEN environment variable not set. Set it with: export DISCORD_TOKEN=your_bot_token"
    })?;

    let schedule_file =
        std::env::var("SCHEDULE_FILE").unwrap_or_else(|_| DEFAULT_SCHEDULE_FILE.to_string());
    let subscribers_file =
        std::env::var("SUBSCRIBERS_FILE").unwrap_or_else(|_| DEFAULT_SUBSCRIBERS_FILE.to_string());

    let notify_time = parse_time_string(
        &std::env::var("NOTIFY_TIME").unwrap_or_else(|_| DEFAULT_NOTIFY_TIME.to_string()),
    )?;
    let timezone = parse_timezone(
        &std::env::var("TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string()),
    )?;

    // Optional: development guild ID for faster command registration
    let dev_guild_id = std::env::var("DEV_GUILD_ID")
        .ok()
        .and_then(|id| id.parse::<u64>().ok());

    if dev_guild_id.is_some() {
        info!("Development mode: Commands will be registered to guild only");
    }

    Ok(Config {
        discord_token,
        schedule_file,
        subscribers_file,
        notify_time,
        timezone,
        dev_guild_id,
    })
}

/// Create and start the Discord bot
async fn start_bot(
    token: String,
    data: Data,
    cron_expression: String,
    dev_guild_id: Option<u64>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Wrap data in Arc for sharing with the schedule manager
    let data_arc = Arc::new(data);
    let data_for_framework = Arc::clone(&data_arc);

    // Create framework
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![subscribe(), today()],
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            let http = ctx.http.clone();
            let data_clone = Arc::clone(&data_for_framework);

            // Start schedule manager
            start_schedule_manager(http, data_clone, cron_expression);
            info!("Schedule manager task started");

            Box::pin(async move {
                // Register commands based on dev_guild_id
                if let Some(guild_id) = dev_guild_id {
                    let guild = serenity::GuildId::new(guild_id);
                    info!("Registering commands in development guild: {}", guild_id);
                    poise::builtins::register_in_guild(ctx, &framework.options().commands, guild)
                        .await?;
                    info!(
                        "Commands registered in guild {} (instant updates)",
                        guild_id
                    );
                } else {
                    info!("Registering commands globally (may take up to 1 hour)");
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                    info!("Commands registered globally");
                }

                info!("Bot is ready!");

                // Return a new clone of the data
                Ok((*data_for_framework).clone())
            })
        })
        .build();

    // Create client with required intents
    let intents = serenity::GatewayIntents::non_privileged();

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    // Start the bot
    info!("Starting bot...");
    client.start().await?;

    Ok(())
}
