use dioxus::prelude::*;
use once_cell::sync::OnceCell;

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod shared;
pub mod utils;

pub use config::DashboardConfig;
pub use shared::DashboardSnapshot;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Set once by the binary before launch; read by `App` when it provides context.
pub static LOADED_CONFIG: OnceCell<DashboardConfig> = OnceCell::new();
