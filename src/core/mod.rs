pub mod checker;
pub mod fetcher;
pub mod notify;
pub mod report;

pub use crate::domain::model::{AvailabilityRecord, CheckOutcome, MailOutcome, Report};
pub use crate::domain::ports::Notifier;
pub use crate::utils::error::Result;
