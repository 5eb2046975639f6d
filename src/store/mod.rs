pub mod log;
pub mod uploads;
