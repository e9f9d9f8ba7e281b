/// Slash command modules
mod subscribe;
mod today;

pub use subscribe::subscribe;
pub use today::today;
