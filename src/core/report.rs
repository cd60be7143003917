use crate::domain::catalog;
use crate::domain::model::{AvailabilityRecord, Report};

/// Availability classification: a zone counts as orderable unless the feed
/// reports it as exactly "unavailable" or "unknown". Every other status
/// string (e.g. "1H-low", "72H") means the server can be ordered there, and
/// the raw status text is printed as-is. Both the count and the rendered
/// text go through this one predicate.
pub fn is_orderable(status: &str) -> bool {
    status != "unavailable" && status != "unknown"
}

/// "N server(s) is/are available on Kimsufi", shared by the report summary
/// line and the mail subject. `1` reads "server is", everything else
/// (including 0) reads "servers are".
pub fn summary_sentence(total: usize) -> String {
    format!(
        "{} server{} {} available on Kimsufi",
        total,
        plural_suffix(total),
        plural_verb(total),
    )
}

fn plural_suffix(total: usize) -> &'static str {
    if total == 1 {
        ""
    } else {
        "s"
    }
}

fn plural_verb(total: usize) -> &'static str {
    if total == 1 {
        "is"
    } else {
        "are"
    }
}

/// Renders one section per record (model name, `=` underline, one
/// "city : status" line per zone in feed order) followed by the summary
/// block. Pure function: the same records yield byte-identical text.
pub fn build(records: &[AvailabilityRecord]) -> Report {
    let mut text = String::new();
    let mut total = 0;

    for record in records {
        let model = catalog::model_for(&record.reference).unwrap_or("unknown");
        text.push_str(&format!("\n{}\n", model));
        text.push_str(&format!("{}\n", "=".repeat(model.len())));

        for zone in &record.zones {
            if is_orderable(&zone.availability) {
                total += 1;
            }
            text.push_str(&format!(
                "{} : {}\n",
                catalog::city_for(&zone.zone),
                zone.availability
            ));
        }
    }

    text.push_str(&format!(
        "\n=======\nRESULT : {}\n=======\n",
        summary_sentence(total)
    ));

    Report {
        text,
        available_total: total,
    }
}
