use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReading {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    #[serde(alias = "soil_moisture")]
    pub soil_moisture: Option<f64>,
    pub pressure: Option<f64>,
    pub timestamp: Option<String>, // ISO-8601
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationEvent {
    #[serde(alias = "scheduled_time")]
    pub scheduled_time: Option<String>, // ISO-8601
    #[serde(alias = "duration_minutes")]
    pub duration_minutes: Option<u32>,
    pub status: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub name: String,
    pub confidence: f64, // 0.0..=1.0, not clamped
    pub suitable_conditions: String,
}

/// Parallel sequences fed to the trend chart. `labels` and `data` are
/// expected to have the same length; nothing here checks it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    pub label: String,
}

impl CropRecommendation {
    pub fn new(name: &str, confidence: f64, suitable_conditions: &str) -> Self {
        Self {
            name: name.to_string(),
            confidence,
            suitable_conditions: suitable_conditions.to_string(),
        }
    }
}
