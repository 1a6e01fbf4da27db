use dioxus::prelude::*;

use crate::shared::IrrigationEvent;
use crate::utils::format::{format_timestamp, or_placeholder};

#[allow(non_snake_case)]
#[component]
pub fn IrrigationSchedule(event: IrrigationEvent) -> Element {
    let scheduled = format_timestamp(event.scheduled_time.as_deref());
    // Unit suffix is always there, even for "--"
    let duration = or_placeholder(event.duration_minutes);
    let status = or_placeholder(event.status.as_deref());
    let reason = or_placeholder(event.reason.as_deref());

    rsx! {
        section { class: "w-full rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-6 space-y-2",
            h2 { class: "text-lg font-medium text-slate-200", "Irrigation Schedule" }
            p { class: "text-slate-300", "Next Scheduled: {scheduled}" }
            p { class: "text-slate-300 tabular-nums", "Duration: {duration} minutes" }
            p { class: "text-slate-300", "Status: {status}" }
            p { class: "text-slate-400", "Reason: {reason}" }
        }
    }
}
