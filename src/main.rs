// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod bidding;
mod catalog;
mod charts;
mod config;
mod error;
mod page;
mod simulation;
mod ui;

use app::MtaDemo;
use config::Config;
use iced::Theme;
use simulation::{SimUpdate, SimulationManager};
use std::sync::mpsc;

fn main() -> iced::Result {
    // On Windows, force wgpu to use Vulkan backend instead of DirectX 12
    // This prevents "INVALID_SUBRESOURCE_STATE" errors with D3D12 resource state transitions
    #[cfg(target_os = "windows")]
    std::env::set_var("WGPU_BACKEND", "vulkan");

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // A broken config never blocks the demo
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        Config::default()
    });

    // Create a channel for updates from the bidding-session worker to the UI thread
    let (update_sender, update_receiver) = mpsc::channel::<SimUpdate>();

    // Create the session worker
    let (manager, command_sender) = SimulationManager::new(update_sender, config.bid_step_millis);

    // Spawn a thread to pace bidding sessions without blocking the UI
    std::thread::spawn(move || {
        manager.run();
    });

    iced::application(
        "MTA | Mineral Trading Africa",
        MtaDemo::update,
        MtaDemo::view,
    )
    .subscription(MtaDemo::subscription)
    .theme(|_| Theme::Light)
    .window_size((config.window_width, config.window_height))
    .run_with(move || MtaDemo::new(update_receiver, command_sender))
}
