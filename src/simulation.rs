//! # Bidding Session Worker Module
//!
//! Drives the paced spot-bidding simulation off the UI thread. The UI sends
//! commands over an mpsc channel; the worker emits progress updates back
//! over a second channel, which the UI drains from a timer subscription.
//!
//! ## Key Components
//! - `SimulationManager`: Manages the worker thread and command processing
//! - `SimCommand`: Commands sent from UI to the worker
//! - `SimUpdate`: Updates sent from the worker to the UI
//!
//! A session advances in five fixed 20% increments, one per configured step
//! delay, then declares the demo's hard-coded winning outcome. The outcome
//! never depends on the entered bid parameters.

use crate::bidding::{SESSION_STEPS, SESSION_STEP_PERCENT};
use crate::error::SimulationError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

#[derive(Debug, Clone)]
pub enum SimCommand {
    Start,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimUpdate {
    /// Session progress in percent, one of 20/40/60/80/100.
    Progress(u8),
    /// Session finished; the winning outcome may be announced.
    Complete,
}

/// Manages the bidding-session worker thread.
///
/// Runs in a dedicated thread with its own Tokio runtime so the paced
/// delays never block the UI thread. Each session carries its own stop
/// flag for cancellation between increments.
pub struct SimulationManager {
    command_receiver: mpsc::Receiver<SimCommand>,
    update_sender: mpsc::Sender<SimUpdate>,
    step_duration: Duration,
}

impl SimulationManager {
    /// Creates a new SimulationManager.
    ///
    /// Returns the manager and a sender for issuing commands from the UI
    /// thread.
    pub fn new(
        update_sender: mpsc::Sender<SimUpdate>,
        step_millis: u64,
    ) -> (Self, mpsc::Sender<SimCommand>) {
        let (command_sender, command_receiver) = mpsc::channel();

        let manager = SimulationManager {
            command_receiver,
            update_sender,
            step_duration: Duration::from_millis(step_millis),
        };

        (manager, command_sender)
    }

    /// Runs the worker loop.
    ///
    /// This should be called in a spawned thread. It will block until the
    /// command channel is closed.
    pub fn run(self) {
        let rt = match Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                let error = SimulationError::RuntimeCreation(e.to_string());
                log::error!("{}", error);
                return;
            }
        };

        let mut stop_flag: Option<Arc<AtomicBool>> = None;

        // Wait for session commands
        while let Ok(command) = self.command_receiver.recv() {
            match command {
                SimCommand::Start => {
                    log::info!("Bidding desk: opening session");

                    // A superseded session must stop emitting before the
                    // new one starts
                    if let Some(flag) = stop_flag.take() {
                        flag.store(true, Ordering::Relaxed);
                    }

                    let should_stop = Arc::new(AtomicBool::new(false));
                    stop_flag = Some(should_stop.clone());

                    let sender = self.update_sender.clone();
                    let step = self.step_duration;

                    // Spawn the session task instead of blocking so Cancel
                    // commands are still processed mid-session
                    rt.spawn(run_session(sender, should_stop, step));
                }
                SimCommand::Cancel => {
                    log::info!("Bidding desk: session cancelled");
                    if let Some(flag) = stop_flag.take() {
                        flag.store(true, Ordering::Relaxed);
                    }
                }
            }
        }

        log::info!("Bidding desk: command channel closed, shutting down");
    }
}

/// One simulated bidding session: five paced increments, then completion.
/// A set stop flag ends the session silently between increments.
pub async fn run_session(
    sender: mpsc::Sender<SimUpdate>,
    should_stop: Arc<AtomicBool>,
    step: Duration,
) {
    for round in 1..=SESSION_STEPS {
        tokio::time::sleep(step).await;
        if should_stop.load(Ordering::Relaxed) {
            return;
        }
        let percent = round * SESSION_STEP_PERCENT;
        if sender.send(SimUpdate::Progress(percent)).is_err() {
            log::warn!("{}", SimulationError::UpdateChannelClosed);
            return;
        }
    }
    if should_stop.load(Ordering::Relaxed) {
        return;
    }
    let _ = sender.send(SimUpdate::Complete);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_manager_creation() {
        let (update_sender, _update_receiver) = mpsc::channel();
        let (_manager, command_sender) = SimulationManager::new(update_sender, 500);

        // Verify we can send commands
        assert!(command_sender.send(SimCommand::Cancel).is_ok());
    }

    #[tokio::test]
    async fn test_session_emits_fixed_sequence() {
        let (sender, receiver) = mpsc::channel();
        let should_stop = Arc::new(AtomicBool::new(false));

        run_session(sender, should_stop, Duration::from_millis(1)).await;

        let updates: Vec<SimUpdate> = receiver.try_iter().collect();
        assert_eq!(
            updates,
            [
                SimUpdate::Progress(20),
                SimUpdate::Progress(40),
                SimUpdate::Progress(60),
                SimUpdate::Progress(80),
                SimUpdate::Progress(100),
                SimUpdate::Complete,
            ]
        );
    }

    #[tokio::test]
    async fn test_cancelled_session_emits_nothing() {
        let (sender, receiver) = mpsc::channel();
        let should_stop = Arc::new(AtomicBool::new(true));

        run_session(sender, should_stop, Duration::from_millis(1)).await;

        assert!(receiver.try_iter().next().is_none());
    }
}
