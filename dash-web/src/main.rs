use dash_web::{config, App};
use tracing::info;

#[cfg(not(target_arch = "wasm32"))]
fn configure_logging() {
    use tracing_subscriber::prelude::*;

    // Default to info level if RUST_LOG not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    // On wasm the Dioxus launcher installs its own console logger
    #[cfg(not(target_arch = "wasm32"))]
    configure_logging();

    let panel_config = config::load_panel_config();
    info!(
        breakpoint_px = panel_config.breakpoint_px,
        "Starting dashboard"
    );

    dioxus::LaunchBuilder::new()
        .with_context_provider(move || Box::new(panel_config.clone()))
        .launch(App);
}
