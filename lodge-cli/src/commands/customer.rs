//! Customer command implementation.
//!
//! This module implements the `customer` command group for registering,
//! updating and listing customer records.

use crate::error::CliError;
use crate::utils::{build_coordinator, parse_record_id, GlobalOptions};
use clap::{Args, Subcommand};
use lodge::{Customer, CustomerPatch};
use std::io::Write;

/// Manage customer records.
#[derive(Args)]
pub struct CustomerCommand {
    #[command(subcommand)]
    action: CustomerAction,
}

/// Actions on the customer collection.
#[derive(Subcommand)]
enum CustomerAction {
    /// Register a new customer
    Add {
        /// Customer name
        name: String,

        /// Contact email
        #[arg(long)]
        email: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,
    },

    /// Delete a customer record
    Rm {
        /// Id of the customer to delete
        id: u64,
    },

    /// Show one customer record
    Show {
        /// Id of the customer to display
        id: u64,
    },

    /// Update fields of a customer record
    Set {
        /// Id of the customer to update
        id: u64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New contact email
        #[arg(long)]
        email: Option<String>,

        /// New contact phone number
        #[arg(long)]
        phone: Option<String>,
    },

    /// List all customers
    List,
}

impl CustomerCommand {
    /// Execute the customer command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let coordinator = build_coordinator(global)?;
        let customers = coordinator.customers();

        match self.action {
            CustomerAction::Add { name, email, phone } => {
                let customer = customers.create(&name, &email, &phone)?;
                println!("Registered customer {} ({})", customer.id, customer.name);
            }
            CustomerAction::Rm { id } => {
                let id = parse_record_id(id)?;
                customers.delete(id)?;
                println!("Deleted customer {id}");
            }
            CustomerAction::Show { id } => {
                let customer = customers.find_by_id(parse_record_id(id)?)?;
                print_customer(&customer);
            }
            CustomerAction::Set {
                id,
                name,
                email,
                phone,
            } => {
                let mut patch = CustomerPatch::new();
                if let Some(name) = name {
                    patch = patch.with_name(name);
                }
                if let Some(email) = email {
                    patch = patch.with_email(email);
                }
                if let Some(phone) = phone {
                    patch = patch.with_phone(phone);
                }
                if patch.is_empty() {
                    return Err(CliError::InvalidArguments(
                        "nothing to change (pass --name, --email or --phone)".to_string(),
                    ));
                }

                let customer = customers.modify(parse_record_id(id)?, patch)?;
                println!("Updated customer {} ({})", customer.id, customer.name);
            }
            CustomerAction::List => {
                let customers = customers.list()?;
                print_customer_table(&customers)?;
            }
        }

        Ok(())
    }
}

/// Print a single customer record.
fn print_customer(customer: &Customer) {
    println!("Customer {}", customer.id);
    println!("  Name:  {}", customer.name);
    println!("  Email: {}", customer.email);
    println!("  Phone: {}", customer.phone);
}

/// Print customers as a tab-separated table.
fn print_customer_table(customers: &[Customer]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "ID\tNAME\tEMAIL\tPHONE")?;
    for customer in customers {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}",
            customer.id, customer.name, customer.email, customer.phone
        )?;
    }

    Ok(())
}
