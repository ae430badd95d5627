use painttracker::tracker::progress::{percent, ProgressSummary};

pub fn format_percent(ratio: f64) -> String {
    format!("{}%", percent(ratio))
}

/// e.g. `3/10 done • 42%`
pub fn format_summary(summary: &ProgressSummary) -> String {
    format!(
        "{}/{} done • {}",
        summary.done,
        summary.total,
        format_percent(summary.progress)
    )
}
