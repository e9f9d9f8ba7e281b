use std::sync::Arc;

use chrono::NaiveTime;
use chrono_tz::Tz;
use dashmap::DashSet;
use poise::serenity_prelude::ChannelId;

use crate::store::{ScheduleStore, StoreError, SubscriberStore};
use crate::utils::datetime::current_weekday_name;
use crate::utils::message_formatter::build_day_message;

/// Bot state shared across all handlers
#[derive(Clone)]
pub struct Data {
    /// Weekly schedule file
    pub schedule: ScheduleStore,
    /// Subscriber list file
    pub subscribers: SubscriberStore,
    /// In-memory mirror of the subscriber set
    subscriber_cache: Arc<DashSet<ChannelId>>,
    /// Local wall-clock time of the daily broadcast
    pub notify_time: NaiveTime,
    /// Timezone of the daily broadcast
    pub timezone: Tz,
}

impl Data {
    pub fn new(
        schedule: ScheduleStore,
        subscribers: SubscriberStore,
        notify_time: NaiveTime,
        timezone: Tz,
    ) -> Self {
        Self {
            schedule,
            subscribers,
            subscriber_cache: Arc::new(DashSet::new()),
            notify_time,
            timezone,
        }
    }

    /// Load the subscriber set from disk into memory
    pub fn load_from_store(&self) {
        match self.subscribers.load() {
            Ok(ids) => {
                for id in ids {
                    // ChannelId rejects 0, so a hand-edited file must not reach it
                    if id == 0 {
                        tracing::warn!("Ignoring invalid subscriber id 0");
                        continue;
                    }
                    self.subscriber_cache.insert(ChannelId::new(id));
                }
                tracing::info!("Loaded {} subscriber(s) from file", self.subscriber_cache.len());
            }
            Err(e) => {
                tracing::warn!("Failed to load subscribers from file: {}", e);
            }
        }
    }

    /// Subscribe a channel, persisting it when new
    ///
    /// Returns whether the channel was newly subscribed.
    pub fn subscribe(&self, channel_id: ChannelId) -> Result<bool, StoreError> {
        let added = self.subscribers.add(channel_id.get())?;
        if added {
            self.subscriber_cache.insert(channel_id);
        }
        Ok(added)
    }

    /// Snapshot of the current subscriber set
    pub fn subscriber_ids(&self) -> Vec<ChannelId> {
        self.subscriber_cache.iter().map(|id| *id).collect()
    }

    /// Build today's formatted timetable message
    pub fn today_message(&self) -> Result<String, StoreError> {
        let day = current_weekday_name(&self.timezone);
        let raw = self.schedule.entries_for(day)?;
        Ok(build_day_message(day, raw.as_deref()))
    }
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
