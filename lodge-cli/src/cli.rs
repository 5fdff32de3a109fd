//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CustomerCommand, HotelCommand, ReservationCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for keeping hotel, customer and reservation records.
#[derive(Parser)]
#[command(name = "lodge")]
#[command(version, about = "Keep hotel, customer and reservation records", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the storage directory location
    #[arg(long, value_name = "PATH", global = true, env = "LODGE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Manage hotel records
    Hotel(HotelCommand),

    /// Manage customer records
    Customer(CustomerCommand),

    /// Book and cancel reservations
    Reservation(ReservationCommand),
}
