pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{mail::MailConfig, CliConfig};
pub use core::{checker::CheckEngine, fetcher::AvailabilityClient, notify::SmtpNotifier};
pub use domain::model::{CheckOutcome, MailOutcome, Report};
pub use domain::ports::Notifier;
pub use utils::error::{CheckError, Result};
