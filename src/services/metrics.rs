//! Metric definitions editor. Append-only; no update or delete.

use super::session::{MetricDefinition, SessionError, SessionState};

pub const MISSING_FIELDS: &str = "Please fill in all fields";

#[must_use]
pub fn list_metrics(session: &SessionState) -> &[MetricDefinition] {
    &session.metrics
}

/// Append a metric with `id = len + 1`.
///
/// `sample_sql` is required but not stored.
///
/// # Errors
///
/// Returns a validation error if any field is empty.
pub fn add_metric(
    session: &mut SessionState,
    name: &str,
    description: &str,
    sample_sql: &str,
) -> Result<MetricDefinition, SessionError> {
    if name.is_empty() || description.is_empty() || sample_sql.is_empty() {
        tracing::warn!("metric submission with missing fields");
        return Err(SessionError::validation(MISSING_FIELDS));
    }

    let metric = MetricDefinition {
        id: session.metrics.len() + 1,
        name: name.to_owned(),
        description: description.to_owned(),
    };
    session.metrics.push(metric.clone());
    tracing::info!(id = metric.id, name, "metric added");
    Ok(metric)
}
