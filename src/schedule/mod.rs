/// Daily broadcast scheduling modules
mod manager;
mod notify_tasks;

pub use manager::start_schedule_manager;
