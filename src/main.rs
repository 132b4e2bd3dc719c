//! Click Bloom
//!
//! Every click on the page blooms a short-lived, randomly colored greeting marker.

mod app;
mod components;
mod constants;
mod engine;
mod hotkeys;
mod state;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Initialize logging (RUST_LOG overrides the default filter)
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Click Bloom")
                .with_inner_size(LogicalSize::new(1024.0, 720.0))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    tracing::info!("launching click bloom");

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
