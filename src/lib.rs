// ============================================================================
// PRODUCT FORM PWA - RUST PURO + YEW
// ============================================================================
// - Components: render y eventos del DOM
// - Hooks: estado del componente (Yew)
// - ViewModels: validación, plan de envío, previews, toast
// - Services: SOLO comunicación con la API
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod components;
pub mod config;
pub mod errors;
pub mod hooks;
pub mod models;
pub mod services;
pub mod utils;
pub mod viewmodels;

use crate::components::App;
use crate::config::CONFIG;

/// Inicializa panic hook + logging y monta la app en el `<body>`
pub fn start() {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Info
    } else {
        log::Level::Error
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!(
        "🚀 Product form starting ({}, API: {})",
        CONFIG.environment,
        CONFIG.api_base
    );

    yew::Renderer::<App>::new().render();
}
