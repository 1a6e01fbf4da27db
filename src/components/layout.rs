use dioxus::prelude::*;

use crate::config::DashboardConfig;

/// App bar plus a padded content container.
#[allow(non_snake_case)]
#[component]
pub fn DashboardLayout(children: Element) -> Element {
    let title = try_use_context::<DashboardConfig>()
        .map(|cfg| cfg.title)
        .unwrap_or_else(|| DashboardConfig::default().title);

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100",
            header { class: "w-full border-b border-slate-800 bg-slate-900 px-6 py-4",
                h1 { class: "text-xl font-semibold tracking-tight text-slate-200", "{title}" }
            }
            main { class: "w-full max-w-5xl mx-auto p-6 mt-4 space-y-6", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_children_under_the_header() {
        let html = dioxus_ssr::render_element(rsx! {
            DashboardLayout { p { "child content" } }
        });
        let header = html.find("Smart Agriculture Dashboard").expect("title");
        let child = html.find("child content").expect("child");
        assert!(header < child, "{html}");
        assert!(html.contains("<main"), "{html}");
    }

    #[allow(non_snake_case)]
    #[component]
    fn WithConfig() -> Element {
        use_context_provider(|| DashboardConfig {
            title: "Greenhouse 1".into(),
            ..DashboardConfig::default()
        });
        rsx! { DashboardLayout { "body" } }
    }

    #[test]
    fn title_comes_from_provided_config() {
        let html = dioxus_ssr::render_element(rsx! { WithConfig {} });
        assert!(html.contains("Greenhouse 1"), "{html}");
        assert!(!html.contains("Smart Agriculture Dashboard"), "{html}");
    }
}
