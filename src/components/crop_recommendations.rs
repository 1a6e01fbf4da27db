use dioxus::prelude::*;

use crate::shared::CropRecommendation;
use crate::utils::format::format_confidence;

/// Rows come out in the order given; ranking is the caller's job.
#[allow(non_snake_case)]
#[component]
pub fn CropRecommendations(recommendations: Vec<CropRecommendation>) -> Element {
    rsx! {
        section { class: "w-full rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-6 space-y-2",
            h2 { class: "text-lg font-medium text-slate-200", "Crop Recommendations" }
            ul { class: "divide-y divide-slate-800",
                for (idx, rec) in recommendations.iter().enumerate() {
                    li { key: "{idx}", class: "py-2",
                        p { class: "text-slate-200", "{rec.name} ({format_confidence(rec.confidence)})" }
                        p { class: "text-sm text-slate-400", "{rec.suitable_conditions}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(recommendations: Vec<CropRecommendation>) -> String {
        dioxus_ssr::render_element(rsx! { CropRecommendations { recommendations: recommendations } })
    }

    #[test]
    fn one_row_per_entry_in_input_order() {
        let html = render(vec![
            CropRecommendation::new("Bell Pepper", 0.75, "Good, but monitor soil moisture."),
            CropRecommendation::new("Tomato", 0.85, "Optimal for tomatoes."),
        ]);
        assert_eq!(html.matches("<li").count(), 2, "{html}");
        let pepper = html.find("Bell Pepper (75.0%)").expect("pepper row");
        let tomato = html.find("Tomato (85.0%)").expect("tomato row");
        assert!(pepper < tomato, "rows were reordered: {html}");
        assert!(html.contains("Optimal for tomatoes."), "{html}");
    }

    #[test]
    fn empty_list_has_no_rows() {
        let html = render(vec![]);
        assert_eq!(html.matches("<li").count(), 0, "{html}");
        assert!(html.contains("Crop Recommendations"), "{html}");
    }

    #[test]
    fn confidence_edges() {
        let html = render(vec![
            CropRecommendation::new("Full", 1.0, ""),
            CropRecommendation::new("None", 0.0, ""),
            CropRecommendation::new("Over", 1.2, ""),
        ]);
        assert!(html.contains("Full (100.0%)"), "{html}");
        assert!(html.contains("None (0.0%)"), "{html}");
        assert!(html.contains("Over (120.0%)"), "{html}");
    }
}
