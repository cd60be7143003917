use crate::domain::model::Report;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Delivery seam for a rendered report. The SMTP notifier is the production
/// implementation; tests plug in recording or failing stubs.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn deliver(&self, report: &Report) -> Result<()>;
}
