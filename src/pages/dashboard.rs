use chrono::Utc;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::{
    CropRecommendations, DashboardLayout, HistoricalChart, IrrigationSchedule, SensorDataCard,
};
use crate::config::DashboardConfig;
use crate::shared::DashboardSnapshot;

/// The only page: placeholder data, four cards, fixed order.
#[allow(non_snake_case)]
#[component]
pub fn Dashboard() -> Element {
    let cfg = try_use_context::<DashboardConfig>().unwrap_or_default();
    let snap = DashboardSnapshot::placeholder(Utc::now(), &cfg);
    debug!(
        "[dashboard] snapshot built: {} history points, {} crops",
        snap.history.data.len(),
        snap.crops.len()
    );

    rsx! {
        DashboardLayout {
            SensorDataCard { reading: snap.sensor }
            HistoricalChart {
                labels: snap.history.labels,
                data: snap.history.data,
                label: snap.history.label,
            }
            CropRecommendations { recommendations: snap.crops }
            IrrigationSchedule { event: snap.irrigation }
        }
    }
}
