use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use log::info;

use crate::api::RosterApi;
use crate::flows::handle_command;
use crate::state::{Delta, ProviderCommand};

/// Runs roster requests off the UI thread, one command at a time.
///
/// The thread exits once the command channel closes or the UI stops
/// listening for deltas.
pub fn spawn_roster_provider(
    api: Box<dyn RosterApi>,
    tx: Sender<Delta>,
    cmd_rx: Receiver<ProviderCommand>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        info!("roster provider started");
        while let Ok(cmd) = cmd_rx.recv() {
            for delta in handle_command(api.as_ref(), cmd) {
                if tx.send(delta).is_err() {
                    info!("roster provider stopping: ui gone");
                    return;
                }
            }
        }
        info!("roster provider stopped");
    })
}
