use dioxus::prelude::*;

use crate::utils::format::format_number;

/// Pixel positions for the first `n` values inside the plot area.
fn plot_points(data: &[f64], n: usize, width: f32, height: f32, padding: f32) -> Vec<(f32, f32)> {
    let values = &data[..n];
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = if (max - min).abs() < f64::EPSILON { 1.0 } else { max - min };
    let step = if n > 1 {
        (width - padding * 2.0) / (n - 1) as f32
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = if n > 1 { padding + i as f32 * step } else { width / 2.0 };
            let frac = ((v - min) / span) as f32;
            let y = padding + (height - frac * height);
            (x, y)
        })
        .collect()
}

#[allow(non_snake_case)]
#[component]
pub fn HistoricalChart(labels: Vec<String>, data: Vec<f64>, label: String) -> Element {
    // Hovered point index (for tooltip)
    let mut hovered = use_signal(|| Option::<usize>::None);
    // Visual params
    let height = 160.0f32;
    let padding = 24.0f32;
    let width = 640.0f32;
    // labels[i] pairs with data[i]; the longer side is cut to the shorter
    let n = labels.len().min(data.len());
    let points = plot_points(&data, n, width, height, padding);
    let view_box = format!("0 0 {} {}", width, height + padding * 2.0);
    let line_points = points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");

    rsx! {
        section { class: "rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-6 space-y-3",
            div { class: "flex items-end justify-between",
                h2 { class: "text-lg font-medium text-slate-200", "Historical Trend" }
                div { class: "text-xs text-slate-400", "{label}" }
            }
            div { class: "w-full overflow-x-auto",
                svg { class: "block min-w-full", view_box: "{view_box}", width: "100%", height: "{(height + padding * 2.0).to_string()}",
                    line { x1: "{padding}", y1: "{padding + height}", x2: "{width - padding}", y2: "{padding + height}", stroke: "#1f2937", stroke_width: "1" }
                    if n > 1 {
                        polyline { class: "text-emerald-400", points: "{line_points}", fill: "none", stroke: "currentColor", stroke_width: "2" }
                    }
                    {
                        points.iter().enumerate().map(|(i, (x, y))| {
                            rsx!{ circle {
                                key: "{i}", class: "text-emerald-400", cx: "{x}", cy: "{y}", r: "4", fill: "currentColor",
                                onmouseenter: move |_| *hovered.write() = Some(i),
                                onmouseleave: move |_| *hovered.write() = None,
                                ontouchstart: move |_| *hovered.write() = Some(i),
                                ontouchend: move |_| *hovered.write() = None,
                            }}
                        })
                    }
                    {
                        points.iter().zip(labels.iter()).enumerate().map(|(i, ((x, _), l))| {
                            rsx!{ text { key: "label-{i}", x: "{x}", y: "{height + padding + 16.0}", text_anchor: "middle", class: "text-slate-400 fill-current text-[10px]", "{l}" } }
                        })
                    }
                    {
                        match *hovered.read() {
                            Some(i) if i < n => {
                                let (x, y) = points[i];
                                let title = format!("{}: {}", labels[i], format_number(data[i]));
                                let cw = 7.0f32; // approx char width at 11px
                                let tip_w = (title.len() as f32 * cw + 16.0).min(width - padding * 2.0);
                                let tip_h = 22.0f32;
                                let tip_x = (x - tip_w / 2.0).clamp(padding, (width - padding) - tip_w);
                                let tip_y = (y - 10.0 - tip_h).max(4.0);
                                rsx!{ g { key: "tooltip",
                                    rect { x: "{tip_x}", y: "{tip_y}", width: "{tip_w}", height: "{tip_h}", rx: "6", fill: "#0f172a", stroke: "#334155", stroke_width: "1" }
                                    text { x: "{tip_x + 8.0}", y: "{tip_y + 15.0}", class: "fill-current text-[11px] text-slate-200", "{title}" }
                                }}
                            }
                            _ => rsx!{ Fragment {} }
                        }
                    }
                }
            }
        }
    }
}
