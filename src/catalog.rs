//! Mock data catalog: selectable models, languages, and the seed metrics.

use crate::services::session::MetricDefinition;

pub const DEFAULT_MODEL: &str = "GPT-4";
pub const DEFAULT_LANGUAGE: &str = "English";

pub const MODELS: &[&str] = &["GPT-4", "GPT-3.5 Turbo", "Claude 2", "Llama 2"];

pub const LANGUAGES: &[&str] = &["English", "Spanish", "French", "German", "Chinese"];

const SEED_METRICS: &[(&str, &str)] = &[
    ("Revenue", "Total revenue recognized in the selected period"),
    ("Active Users", "Distinct users with at least one session in the period"),
    ("Conversion Rate", "Share of visitors who completed a purchase"),
];

#[must_use]
pub fn is_known_model(name: &str) -> bool {
    MODELS.contains(&name)
}

#[must_use]
pub fn is_known_language(name: &str) -> bool {
    LANGUAGES.contains(&name)
}

/// Metrics every new session starts with, ids `1..=3`.
#[must_use]
pub fn seed_metrics() -> Vec<MetricDefinition> {
    SEED_METRICS
        .iter()
        .enumerate()
        .map(|(i, (name, description))| MetricDefinition {
            id: i + 1,
            name: (*name).to_owned(),
            description: (*description).to_owned(),
        })
        .collect()
}
