use crate::core::fetcher::AvailabilityClient;
use crate::core::report;
use crate::domain::model::{CheckOutcome, MailOutcome};
use crate::domain::ports::Notifier;
use crate::utils::error::Result;

pub struct CheckEngine<N: Notifier> {
    client: AvailabilityClient,
    notifier: Option<N>,
}

impl<N: Notifier> CheckEngine<N> {
    pub fn new(client: AvailabilityClient, notifier: Option<N>) -> Self {
        Self { client, notifier }
    }

    /// Fetch, build the report, dispatch it. When nothing is orderable the
    /// run stays completely quiet. A fetch failure aborts the run; a mail
    /// failure does not, the report is already on stdout by then.
    pub async fn run(&self, models: &[String]) -> Result<CheckOutcome> {
        let records = self.client.fetch(models).await?;

        let report = report::build(&records);
        if report.available_total == 0 {
            tracing::debug!("no orderable server, nothing to emit");
            return Ok(CheckOutcome::NothingAvailable);
        }

        // stdout carries the report text and nothing else
        print!("{}", report.text);

        let mail = match &self.notifier {
            None => MailOutcome::NotRequested,
            Some(notifier) => match notifier.deliver(&report).await {
                Ok(()) => {
                    tracing::info!("report mailed");
                    MailOutcome::Sent
                }
                Err(e) => {
                    tracing::error!("mail delivery failed: {}", e);
                    eprintln!("❌ Mail delivery failed: {}", e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    MailOutcome::Failed
                }
            },
        };

        Ok(CheckOutcome::Reported {
            available_total: report.available_total,
            mail,
        })
    }
}
