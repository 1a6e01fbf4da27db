//! Response bodies of the agriculture backend API, decoded into the types
//! the cards take as props.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::shared::types::{CropRecommendation, IrrigationEvent, SensorReading};

/// `GET /api/sensors/current`
pub fn decode_current_sensors(json: &str) -> Result<SensorReading> {
    serde_json::from_str(json).context("decoding current sensor payload")
}

#[derive(Debug, Clone, Deserialize)]
struct CropRecommendationResponse {
    recommended_crops: Vec<CropRecommendation>,
}

/// `GET /api/predictions/crop-recommendation`
pub fn decode_crop_recommendations(json: &str) -> Result<Vec<CropRecommendation>> {
    let resp: CropRecommendationResponse =
        serde_json::from_str(json).context("decoding crop recommendation payload")?;
    Ok(resp.recommended_crops)
}

#[derive(Debug, Clone, Deserialize)]
struct NextIrrigation {
    scheduled_time: Option<String>,
    duration_minutes: Option<u32>,
    reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct IrrigationResponse {
    next_irrigation: Option<NextIrrigation>,
    current_status: Option<String>,
}

impl From<IrrigationResponse> for IrrigationEvent {
    fn from(resp: IrrigationResponse) -> Self {
        let next = resp.next_irrigation;
        Self {
            scheduled_time: next.as_ref().and_then(|n| n.scheduled_time.clone()),
            duration_minutes: next.as_ref().and_then(|n| n.duration_minutes),
            status: resp.current_status,
            reason: next.and_then(|n| n.reason),
        }
    }
}

/// `GET /api/predictions/irrigation`
pub fn decode_irrigation(json: &str) -> Result<IrrigationEvent> {
    let resp: IrrigationResponse =
        serde_json::from_str(json).context("decoding irrigation payload")?;
    Ok(resp.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_sensors_body() {
        let body = r#"{
            "temperature": 25.5,
            "humidity": 65.0,
            "soil_moisture": 45.0,
            "pressure": 1013.2,
            "timestamp": "2024-05-26T05:12:44.120311"
        }"#;
        let r = decode_current_sensors(body).unwrap();
        assert_eq!(r.temperature, Some(25.5));
        assert_eq!(r.soil_moisture, Some(45.0));
        assert_eq!(r.timestamp.as_deref(), Some("2024-05-26T05:12:44.120311"));
    }

    #[test]
    fn crop_recommendation_body_keeps_order() {
        let body = r#"{
            "recommended_crops": [
                {"name": "Tomato", "confidence": 0.85, "suitable_conditions": "Current soil conditions are optimal for tomatoes"},
                {"name": "Bell Pepper", "confidence": 0.75, "suitable_conditions": "Good conditions, but monitor soil moisture"}
            ],
            "timestamp": "2024-05-26T05:12:44.120311"
        }"#;
        let crops = decode_crop_recommendations(body).unwrap();
        assert_eq!(crops.len(), 2);
        assert_eq!(crops[0].name, "Tomato");
        assert_eq!(crops[1].confidence, 0.75);
    }

    #[test]
    fn irrigation_body_takes_status_from_current_status() {
        let body = r#"{
            "next_irrigation": {
                "scheduled_time": "2024-05-26T06:00:00Z",
                "duration_minutes": 30,
                "reason": "Soil moisture below optimal level"
            },
            "current_status": "Monitoring",
            "timestamp": "2024-05-26T05:12:44.120311"
        }"#;
        let ev = decode_irrigation(body).unwrap();
        assert_eq!(ev.scheduled_time.as_deref(), Some("2024-05-26T06:00:00Z"));
        assert_eq!(ev.duration_minutes, Some(30));
        assert_eq!(ev.status.as_deref(), Some("Monitoring"));
        assert_eq!(ev.reason.as_deref(), Some("Soil moisture below optimal level"));
    }

    #[test]
    fn irrigation_without_next_event_is_all_missing_but_status() {
        let ev = decode_irrigation(r#"{"current_status": "Idle"}"#).unwrap();
        assert_eq!(ev.scheduled_time, None);
        assert_eq!(ev.duration_minutes, None);
        assert_eq!(ev.status.as_deref(), Some("Idle"));
    }

    #[test]
    fn malformed_body_reports_which_payload() {
        let err = decode_crop_recommendations("{\"recommended_crops\": 3}").unwrap_err();
        assert!(err.to_string().contains("crop recommendation"));
    }
}
