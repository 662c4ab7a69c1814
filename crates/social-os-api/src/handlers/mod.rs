pub mod analyze;
pub mod health;
pub mod publish;
pub mod uploads;
