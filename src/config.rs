use anyhow::{ensure, Context, Result};
use dioxus::logger::tracing::warn;

pub const DEFAULT_TITLE: &str = "Smart Agriculture Dashboard";
pub const DEFAULT_CHART_LABEL: &str = "Temperature";
pub const DEFAULT_IRRIGATION_LEAD_MINUTES: i64 = 60;
/// One week.
pub const MAX_IRRIGATION_LEAD_MINUTES: i64 = 7 * 24 * 60;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// App bar text
    pub title: String,
    /// Series name shown on the trend chart
    pub chart_label: String,
    /// How far ahead of "now" the placeholder irrigation is scheduled
    pub irrigation_lead_minutes: i64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            chart_label: DEFAULT_CHART_LABEL.to_string(),
            irrigation_lead_minutes: DEFAULT_IRRIGATION_LEAD_MINUTES,
        }
    }
}

impl DashboardConfig {
    /// Environment config, or the defaults (with a warning) when any value is bad.
    pub fn load_or_default() -> Self {
        Self::from_lookup_or_default(|key| std::env::var(key).ok())
    }

    pub fn from_lookup_or_default<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(lookup).unwrap_or_else(|e| {
            warn!("[config] {e:#}; using defaults");
            Self::default()
        })
    }

    /// Builds the config from any key lookup; unset or blank keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();
        if let Some(title) = get("AGRI_DASHBOARD_TITLE") {
            cfg.title = title;
        }
        if let Some(label) = get("AGRI_CHART_LABEL") {
            cfg.chart_label = label;
        }
        if let Some(lead) = get("AGRI_IRRIGATION_LEAD_MINUTES") {
            let minutes: i64 = lead
                .trim()
                .parse()
                .with_context(|| format!("AGRI_IRRIGATION_LEAD_MINUTES is not an integer: {lead:?}"))?;
            ensure!(
                (0..=MAX_IRRIGATION_LEAD_MINUTES).contains(&minutes),
                "AGRI_IRRIGATION_LEAD_MINUTES must be within 0..={MAX_IRRIGATION_LEAD_MINUTES}, got {minutes}"
            );
            cfg.irrigation_lead_minutes = minutes;
        }
        Ok(cfg)
    }
}
