pub mod app;
pub mod daily_status;
pub mod events;
pub mod health;
pub mod messages;
pub mod notes;
pub mod workouts;
