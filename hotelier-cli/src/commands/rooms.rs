//! Rooms command implementation.
//!
//! Lists the room pool built from the resolved configuration.

use crate::error::CliError;
use crate::utils::{formatter_for, open_hotel, GlobalOptions};
use clap::Args;
use hotelier::{OutputFormat, RoomView};

/// List the configured room pool.
#[derive(Args)]
pub struct RoomsCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "HOTELIER_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

impl RoomsCommand {
    /// Execute the rooms command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let hotel = open_hotel(global)?;
        let rooms = RoomView::collect(&hotel);
        log::debug!("listing {} room(s)", rooms.len());

        let output = formatter_for(self.format).format_rooms(&rooms)?;
        println!("{output}");
        Ok(())
    }
}
