use anyhow::Result;
use chrono::{DateTime, Duration, SecondsFormat, Utc};

use crate::config::{DashboardConfig, DEFAULT_IRRIGATION_LEAD_MINUTES};
use crate::shared::payloads::{decode_crop_recommendations, decode_current_sensors, decode_irrigation};
use crate::shared::ranking::top_recommendations;
use crate::shared::types::{CropRecommendation, HistoricalSeries, IrrigationEvent, SensorReading};

/// Everything one dashboard render needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub sensor: SensorReading,
    pub history: HistoricalSeries,
    pub crops: Vec<CropRecommendation>,
    pub irrigation: IrrigationEvent,
}

fn iso(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `now` plus `minutes`, or plus the default lead when that would overflow.
fn irrigation_time(now: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    let after = |m: i64| Duration::try_minutes(m).and_then(|d| now.checked_add_signed(d));
    after(minutes)
        .or_else(|| after(DEFAULT_IRRIGATION_LEAD_MINUTES))
        .unwrap_or(now)
}

impl DashboardSnapshot {
    /// Fixed demo values; the sensor reading is stamped `now` and the
    /// irrigation is scheduled `irrigation_lead_minutes` after it.
    pub fn placeholder(now: DateTime<Utc>, cfg: &DashboardConfig) -> Self {
        let sensor = SensorReading {
            temperature: Some(25.5),
            humidity: Some(65.0),
            soil_moisture: Some(45.0),
            pressure: Some(1013.2),
            timestamp: Some(iso(now)),
        };

        let history = HistoricalSeries {
            labels: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            data: vec![24.0, 25.0, 23.0, 26.0, 27.0, 25.0, 24.0],
            label: cfg.chart_label.clone(),
        };

        let crops = top_recommendations(vec![
            CropRecommendation::new("Tomato", 0.85, "Optimal for tomatoes."),
            CropRecommendation::new("Bell Pepper", 0.75, "Good, but monitor soil moisture."),
        ]);

        let irrigation = IrrigationEvent {
            scheduled_time: Some(iso(irrigation_time(now, cfg.irrigation_lead_minutes))),
            duration_minutes: Some(30),
            status: Some("Scheduled".into()),
            reason: Some("Soil moisture below optimal level".into()),
        };

        Self {
            sensor,
            history,
            crops,
            irrigation,
        }
    }

    /// Builds a snapshot from raw backend response bodies. The history
    /// endpoint has no series format, so the series is passed in.
    pub fn from_payloads(
        sensors_json: &str,
        crops_json: &str,
        irrigation_json: &str,
        history: HistoricalSeries,
    ) -> Result<Self> {
        Ok(Self {
            sensor: decode_current_sensors(sensors_json)?,
            history,
            crops: top_recommendations(decode_crop_recommendations(crops_json)?),
            irrigation: decode_irrigation(irrigation_json)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 26, 5, 0, 0).unwrap()
    }

    #[test]
    fn placeholder_timestamps_follow_now() {
        let snap = DashboardSnapshot::placeholder(fixed_now(), &DashboardConfig::default());
        assert_eq!(snap.sensor.timestamp.as_deref(), Some("2024-05-26T05:00:00.000Z"));
        assert_eq!(
            snap.irrigation.scheduled_time.as_deref(),
            Some("2024-05-26T06:00:00.000Z")
        );
    }

    #[test]
    fn placeholder_lead_time_comes_from_config() {
        let cfg = DashboardConfig {
            irrigation_lead_minutes: 150,
            ..DashboardConfig::default()
        };
        let snap = DashboardSnapshot::placeholder(fixed_now(), &cfg);
        assert_eq!(
            snap.irrigation.scheduled_time.as_deref(),
            Some("2024-05-26T07:30:00.000Z")
        );
    }

    #[test]
    fn placeholder_series_is_paired() {
        let snap = DashboardSnapshot::placeholder(fixed_now(), &DashboardConfig::default());
        assert_eq!(snap.history.labels.len(), snap.history.data.len());
        assert_eq!(snap.history.label, "Temperature");
        assert_eq!(snap.crops.len(), 2);
        assert_eq!(snap.crops[0].name, "Tomato");
        assert_eq!(snap.irrigation.duration_minutes, Some(30));
    }

    #[test]
    fn from_payloads_ranks_crops() {
        let sensors = r#"{"temperature": 22.0, "humidity": 50.0}"#;
        let crops = r#"{"recommended_crops": [
            {"name": "Corn", "confidence": 0.3, "suitable_conditions": "ok"},
            {"name": "Rice", "confidence": 0.05, "suitable_conditions": "too dry"},
            {"name": "Wheat", "confidence": 0.92, "suitable_conditions": "great"}
        ]}"#;
        let irrigation = r#"{"next_irrigation": null, "current_status": "Monitoring"}"#;
        let snap =
            DashboardSnapshot::from_payloads(sensors, crops, irrigation, HistoricalSeries::default())
                .unwrap();
        let names: Vec<_> = snap.crops.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Wheat", "Corn"]);
        assert_eq!(snap.sensor.pressure, None);
        assert_eq!(snap.irrigation.status.as_deref(), Some("Monitoring"));
    }

    #[test]
    fn from_payloads_propagates_decode_errors() {
        let res = DashboardSnapshot::from_payloads("not json", "{}", "{}", HistoricalSeries::default());
        assert!(res.is_err());
    }

    #[test]
    fn huge_lead_time_falls_back_instead_of_overflowing() {
        for minutes in [999_999_999_999, i64::MAX, i64::MIN] {
            let cfg = DashboardConfig {
                irrigation_lead_minutes: minutes,
                ..DashboardConfig::default()
            };
            let snap = DashboardSnapshot::placeholder(fixed_now(), &cfg);
            assert_eq!(
                snap.irrigation.scheduled_time.as_deref(),
                Some("2024-05-26T06:00:00.000Z"),
                "{minutes}"
            );
        }
    }

    #[test]
    fn overflow_near_the_end_of_time_keeps_now() {
        let end = DateTime::<Utc>::MAX_UTC;
        assert_eq!(irrigation_time(end, 60), end);
    }
}
