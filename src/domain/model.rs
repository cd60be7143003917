use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    pub answer: FeedAnswer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedAnswer {
    pub availability: Vec<AvailabilityRecord>,
}

/// One feed entry: a SKU (`reference` in the wire format) and its
/// availability status per zone, in feed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    pub reference: String,
    pub zones: Vec<ZoneAvailability>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneAvailability {
    pub zone: String,
    pub availability: String,
}

/// Rendered report text plus the number of zones counted as orderable.
#[derive(Debug, Clone)]
pub struct Report {
    pub text: String,
    pub available_total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailOutcome {
    NotRequested,
    Sent,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Nothing orderable: no report is emitted at all.
    NothingAvailable,
    Reported {
        available_total: usize,
        mail: MailOutcome,
    },
}
