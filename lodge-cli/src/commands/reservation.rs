//! Reservation command implementation.
//!
//! This module implements the `reservation` command group. Booking and
//! cancelling go through the coordinator so the referenced hotel's room
//! counter stays in step with the reservation collection.

use crate::error::CliError;
use crate::utils::{
    build_coordinator, format_timestamp, occupancy_summary, parse_record_id, GlobalOptions,
};
use clap::{Args, Subcommand};
use lodge::Reservation;
use std::io::Write;

/// Book and cancel reservations.
#[derive(Args)]
pub struct ReservationCommand {
    #[command(subcommand)]
    action: ReservationAction,
}

/// Actions on the reservation collection.
#[derive(Subcommand)]
enum ReservationAction {
    /// Book a room for a customer
    Book {
        /// Id of the customer booking the room
        #[arg(long, value_name = "ID")]
        customer: u64,

        /// Id of the hotel to book in
        #[arg(long, value_name = "ID")]
        hotel: u64,
    },

    /// Cancel a reservation and free its room
    Cancel {
        /// Id of the reservation to cancel
        id: u64,
    },

    /// Show one reservation record
    Show {
        /// Id of the reservation to display
        id: u64,
    },

    /// List all reservations
    List,
}

impl ReservationCommand {
    /// Execute the reservation command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let coordinator = build_coordinator(global)?;

        match self.action {
            ReservationAction::Book { customer, hotel } => {
                let customer = parse_record_id(customer)?;
                let hotel = parse_record_id(hotel)?;

                let reservation = coordinator.create(customer, hotel)?;
                let booked = coordinator.hotels().find_by_id(reservation.hotel_id)?;
                println!(
                    "Booked reservation {} for customer {} at {}: {}",
                    reservation.id,
                    reservation.customer_id,
                    booked.name,
                    occupancy_summary(&booked)
                );
            }
            ReservationAction::Cancel { id } => {
                let id = parse_record_id(id)?;
                let reservation = coordinator.find_by_id(id)?;
                coordinator.cancel(id)?;
                println!(
                    "Cancelled reservation {} (hotel {})",
                    reservation.id, reservation.hotel_id
                );
            }
            ReservationAction::Show { id } => {
                let reservation = coordinator.find_by_id(parse_record_id(id)?)?;
                print_reservation(&reservation);
            }
            ReservationAction::List => {
                let reservations = coordinator.list()?;
                print_reservation_table(&reservations)?;
            }
        }

        Ok(())
    }
}

/// Print a single reservation record.
fn print_reservation(reservation: &Reservation) {
    println!("Reservation {}", reservation.id);
    println!("  Customer: {}", reservation.customer_id);
    println!("  Hotel:    {}", reservation.hotel_id);
    println!("  Created:  {}", format_timestamp(reservation.created_at));
}

/// Print reservations as a tab-separated table.
fn print_reservation_table(reservations: &[Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "ID\tCUSTOMER\tHOTEL\tCREATED")?;
    for reservation in reservations {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}",
            reservation.id,
            reservation.customer_id,
            reservation.hotel_id,
            format_timestamp(reservation.created_at)
        )?;
    }

    Ok(())
}
