//! Hotel command implementation.
//!
//! This module implements the `hotel` command group, which manages the
//! hotel collection: registering hotels, updating them, and listing
//! their room availability.

use crate::error::CliError;
use crate::utils::{build_coordinator, occupancy_summary, parse_record_id, GlobalOptions};
use clap::{Args, Subcommand};
use lodge::{Hotel, HotelPatch};
use std::io::Write;

/// Manage hotel records.
#[derive(Args)]
pub struct HotelCommand {
    #[command(subcommand)]
    action: HotelAction,
}

/// Actions on the hotel collection.
#[derive(Subcommand)]
enum HotelAction {
    /// Register a new hotel
    Add {
        /// Hotel name
        name: String,

        /// State the hotel is located in
        state: String,

        /// Total number of rooms
        #[arg(long, value_name = "COUNT")]
        rooms: u32,
    },

    /// Delete a hotel record
    Rm {
        /// Id of the hotel to delete
        id: u64,
    },

    /// Show one hotel record
    Show {
        /// Id of the hotel to display
        id: u64,
    },

    /// Update fields of a hotel record
    Set {
        /// Id of the hotel to update
        id: u64,

        /// New hotel name
        #[arg(long)]
        name: Option<String>,

        /// New state
        #[arg(long)]
        state: Option<String>,

        /// New total room count (occupied rooms are preserved)
        #[arg(long, value_name = "COUNT")]
        rooms: Option<u32>,
    },

    /// List all hotels
    List,
}

impl HotelCommand {
    /// Execute the hotel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let coordinator = build_coordinator(global)?;
        let hotels = coordinator.hotels();

        match self.action {
            HotelAction::Add { name, state, rooms } => {
                let hotel = hotels.create(&name, &state, rooms)?;
                println!(
                    "Registered hotel {} ({} in {}), {} room(s)",
                    hotel.id, hotel.name, hotel.state, hotel.total_rooms
                );
            }
            HotelAction::Rm { id } => {
                let id = parse_record_id(id)?;
                hotels.delete(id)?;
                println!("Deleted hotel {id}");
            }
            HotelAction::Show { id } => {
                let hotel = hotels.find_by_id(parse_record_id(id)?)?;
                print_hotel(&hotel);
            }
            HotelAction::Set {
                id,
                name,
                state,
                rooms,
            } => {
                let mut patch = HotelPatch::new();
                if let Some(name) = name {
                    patch = patch.with_name(name);
                }
                if let Some(state) = state {
                    patch = patch.with_state(state);
                }
                if let Some(rooms) = rooms {
                    patch = patch.with_total_rooms(rooms);
                }
                if patch.is_empty() {
                    return Err(CliError::InvalidArguments(
                        "nothing to change (pass --name, --state or --rooms)".to_string(),
                    ));
                }

                let hotel = hotels.modify(parse_record_id(id)?, patch)?;
                println!("Updated hotel {}: {}", hotel.id, occupancy_summary(&hotel));
            }
            HotelAction::List => {
                let hotels = hotels.list()?;
                print_hotel_table(&hotels)?;
            }
        }

        Ok(())
    }
}

/// Print a single hotel record.
fn print_hotel(hotel: &Hotel) {
    println!("Hotel {}", hotel.id);
    println!("  Name:      {}", hotel.name);
    println!("  State:     {}", hotel.state);
    println!("  Rooms:     {}", hotel.total_rooms);
    println!("  Available: {}", hotel.available_rooms);
    println!("  Occupied:  {}", hotel.occupied_rooms());
}

/// Print hotels as a tab-separated table.
fn print_hotel_table(hotels: &[Hotel]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "ID\tNAME\tSTATE\tAVAILABLE\tTOTAL")?;
    for hotel in hotels {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}",
            hotel.id, hotel.name, hotel.state, hotel.available_rooms, hotel.total_rooms
        )?;
    }

    Ok(())
}
