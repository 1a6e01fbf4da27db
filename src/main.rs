use dioxus::logger::tracing::info;

use agri_dashboard::{app, DashboardConfig, LOADED_CONFIG};

fn main() {
    #[cfg(feature = "desktop")]
    {
        dotenvy::dotenv().ok();
        agri_dashboard::utils::logging::init_tracing();
    }
    #[cfg(not(feature = "desktop"))]
    dioxus::logger::initialize_default();

    let cfg = DashboardConfig::load_or_default();
    info!(
        "[config] title={:?} chart_label={:?} irrigation_lead={}min",
        cfg.title, cfg.chart_label, cfg.irrigation_lead_minutes
    );
    let _ = LOADED_CONFIG.set(cfg);

    dioxus::launch(app::App);
}
