use dioxus::prelude::*;

use crate::shared::SensorReading;
use crate::utils::format::{format_reading, format_timestamp};

#[allow(non_snake_case)]
#[component]
pub fn SensorDataCard(reading: SensorReading) -> Element {
    let temperature = format_reading(reading.temperature);
    let humidity = format_reading(reading.humidity);
    let soil_moisture = format_reading(reading.soil_moisture);
    let pressure = format_reading(reading.pressure);
    let updated = format_timestamp(reading.timestamp.as_deref());

    rsx! {
        // Card
        section { class: "w-full rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-6 space-y-2",
            h2 { class: "text-lg font-medium text-slate-200", "Real-Time Sensor Data" }
            p { class: "text-slate-300 tabular-nums", "Temperature: {temperature} °C" }
            p { class: "text-slate-300 tabular-nums", "Humidity: {humidity} %" }
            p { class: "text-slate-300 tabular-nums", "Soil Moisture: {soil_moisture} %" }
            p { class: "text-slate-300 tabular-nums", "Pressure: {pressure} hPa" }
            if let Some(ts) = &reading.timestamp {
                time { class: "text-xs text-slate-400", datetime: "{ts}", "Last updated: {updated}" }
            } else {
                span { class: "text-xs text-slate-400", "Last updated: {updated}" }
            }
        }
    }
}
