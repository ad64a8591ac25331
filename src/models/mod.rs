pub mod daily_status;
pub mod event;
pub mod message;
pub mod note;
pub mod workout;
