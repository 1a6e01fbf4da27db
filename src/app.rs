use dioxus::prelude::*;

use crate::pages::Dashboard;
use crate::{FAVICON, TAILWIND_CSS};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Dashboard {},
}

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    // main() stores the loaded config before launch; fall back for hosts that skip it
    let cfg = use_context_provider(|| crate::LOADED_CONFIG.get().cloned().unwrap_or_default());

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Meta { name: "theme-color", content: "#020618" } // slate-950
        document::Meta { name: "color-scheme", content: "dark" }
        document::Title { "{cfg.title}" }
        Router::<Route> {}
    }
}
