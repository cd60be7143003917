use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Mail address error: {0}")]
    MailAddressError(#[from] lettre::address::AddressError),

    #[error("Mail message error: {0}")]
    MailMessageError(#[from] lettre::error::Error),

    #[error("Mail transport error: {0}")]
    MailTransportError(#[from] lettre::transport::smtp::Error),
}

impl CheckError {
    /// A short hint printed to the user next to the error message.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ApiError(_) => {
                "Check network connectivity and that the availability endpoint is reachable"
            }
            Self::SerializationError(_) => {
                "The feed answered with an unexpected shape; rerun with --verbose to inspect it"
            }
            Self::ConfigError { .. } => {
                "Create the mail configuration file or point --config at an existing one"
            }
            Self::InvalidConfigValueError { .. } => "Fix the rejected value and run again",
            Self::MailAddressError(_) => {
                "Check the \"mail\" address in the mail configuration file"
            }
            Self::MailMessageError(_) => "Check the mail configuration fields",
            Self::MailTransportError(_) => {
                "Verify the SMTP host, port and credentials in the mail configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
