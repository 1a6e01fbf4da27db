pub mod payloads;
pub mod ranking;
pub mod snapshot;
pub mod types;

pub use snapshot::DashboardSnapshot;
pub use payloads::{decode_crop_recommendations, decode_current_sensors, decode_irrigation};
pub use types::{CropRecommendation, HistoricalSeries, IrrigationEvent, SensorReading};
