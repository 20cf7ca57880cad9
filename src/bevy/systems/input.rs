//! Frontend command intake
//!
//! Commands queued by the Tauri handlers are drained once per frame in
//! `PreUpdate`: navigation goes to the `Page` state, everything else is
//! re-sent as a [`PageInput`] message for the active page's controller.

use bevy::prelude::*;

use crate::bevy::resources::CommandQueueRes;
use crate::interaction::{PageController, PageInput};
use crate::route::Page;
use crate::tauri_bridge::shared_state::ViewerCommand;

/// Drain the shared command queue into state changes and page inputs
pub fn drain_viewer_commands(
    queue: Res<CommandQueueRes>,
    page: Res<State<Page>>,
    mut next_page: ResMut<NextState<Page>>,
    mut inputs: MessageWriter<PageInput>,
) {
    let commands = match queue.0.drain() {
        Ok(commands) => commands,
        Err(err) => {
            warn!("Dropping frontend commands: {err}");
            return;
        }
    };

    let mut navigating = false;
    for command in commands {
        match command {
            ViewerCommand::Navigate(target) => {
                if target != *page.get() || navigating {
                    info!("Navigating to {target}");
                    next_page.set(target);
                    navigating = true;
                }
            }
            // aimed at the page we are leaving, which is gone next frame
            ViewerCommand::Input(input) if navigating => {
                debug!("Dropping {input:?} queued behind a navigation");
            }
            ViewerCommand::Input(input) => {
                inputs.write(input);
            }
        }
    }
}

/// Feed this frame's page inputs to the active controller
pub fn apply_page_input<C: PageController>(
    mut inputs: MessageReader<PageInput>,
    mut controller: ResMut<C>,
) {
    for input in inputs.read() {
        controller.handle(*input);
    }
}
