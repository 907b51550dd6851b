//! Storefront GUI - Main Entry Point
//!
//! Native desktop client for the product search and shopping assistant service

use eframe::egui;
use storefront_gui::api::ApiClient;
use storefront_gui::config::Config;
use storefront_gui::controller::Controller;
use storefront_gui::state::AppState;
use storefront_gui::ui::render_app_layout;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    // Network tasks run here; the runtime must outlive the window
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let client = ApiClient::new(&config.http)?;
    info!(base_url = %client.base_url(), "Storefront service client ready");
    let handle = runtime.handle().clone();

    // Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Storefront")
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Storefront",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let controller = Controller::new(client, handle).with_repaint(cc.egui_ctx.clone());
            Box::new(StorefrontApp::new(controller))
        }),
    )
    .map_err(|e| anyhow::anyhow!("GUI terminated with an error: {}", e))?;

    info!("Window closed, shutting down");
    Ok(())
}

/// Main application struct
/// Owns the coordinator state and the controller that runs its commands
struct StorefrontApp {
    /// Canonical products, filters, chat, and panel drafts
    state: AppState,
    /// Executes network commands and collects their results
    controller: Controller,
}

impl StorefrontApp {
    /// Create the application and issue the mount-time product fetch
    fn new(controller: Controller) -> Self {
        let mut state = AppState::new();
        controller.dispatch_all(state.initial_load());
        Self { state, controller }
    }
}

impl eframe::App for StorefrontApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Fold finished requests into the state before drawing
        self.controller.pump(&mut self.state);

        let commands = render_app_layout(ctx, &mut self.state);
        self.controller.dispatch_all(commands);
    }
}
