pub mod crop_recommendations;
pub mod historical_chart;
pub mod irrigation_schedule;
pub mod layout;
pub mod sensor_data_card;

pub use crop_recommendations::CropRecommendations;
pub use historical_chart::HistoricalChart;
pub use irrigation_schedule::IrrigationSchedule;
pub use layout::DashboardLayout;
pub use sensor_data_card::SensorDataCard;
