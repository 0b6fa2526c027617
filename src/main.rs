use log::{error, info};

mod driver;
mod game;
mod panel;

use driver::GameDriver;
use panel::{console::ConsolePanel, PanelError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::try_init().unwrap_or(());

    let panel = ConsolePanel::new();
    let mut driver = GameDriver::new(panel, rand::thread_rng());
    match driver.play() {
        Err(PanelError::Closed) => {
            // The player closed stdin, the host analog of pulling the plug
            info!("Input stream closed, exiting");
            Ok(())
        }
        Err(e) => {
            error!("An error occurred: {:?}", e);
            Err(e.into())
        }
        Ok(()) => Ok(()),
    }
}
