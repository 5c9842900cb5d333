//! Staffdir CLI - employee directory administration
//!
//! Thin client over the Staffdir REST API: list and manage departments and
//! employees, search by name, and seed a demo dataset.

mod api;
mod config;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Confirm;
use std::collections::HashMap;
use uuid::Uuid;

use api::StaffdirClient;
use config::Config;

#[derive(Parser)]
#[command(name = "staffdir")]
#[command(about = "Staffdir CLI - employee directory administration", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Department operations
    Departments {
        #[command(subcommand)]
        action: DepartmentAction,
    },

    /// Employee operations
    Employees {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Seed the demo dataset (dental practice departments and staff)
    Seed {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum DepartmentAction {
    /// List all departments
    List,
    /// Create a department
    Create {
        /// Department name
        name: String,
        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a department (fails while employees reference it)
    Remove {
        /// Department ID
        id: Uuid,
    },
}

#[derive(Subcommand)]
enum EmployeeAction {
    /// List all employees
    List,
    /// Search employees by first or last name
    Search {
        /// Search term (case-insensitive substring)
        term: String,
    },
    /// Create an employee
    Create {
        /// First name
        first_name: String,
        /// Last name
        last_name: String,
        /// Department ID
        #[arg(long)]
        department: Uuid,
        /// Email address
        #[arg(long)]
        email: Option<String>,
        /// Phone number
        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete an employee
    Remove {
        /// Employee ID
        id: Uuid,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the API base URL
    SetUrl {
        /// Base URL, e.g. http://localhost:8000
        url: String,
    },
}

/// Demo dataset: a small dental practice directory
const SEED_DEPARTMENTS: [(&str, &str); 5] = [
    ("General Dentistry", "General dental care and checkups"),
    ("Pediatric Dentistry", "Dental care for children"),
    ("Restorative Dentistry", "Restoration of damaged teeth"),
    ("Surgery", "Oral surgical procedures"),
    ("Orthodontics", "Braces and teeth alignment"),
];

const SEED_EMPLOYEES: [(&str, &str, &str); 10] = [
    ("Alfred", "Christensen", "General Dentistry"),
    ("John", "Dudley", "General Dentistry"),
    ("Janet", "Doe", "General Dentistry"),
    ("Francisco", "Willard", "Pediatric Dentistry"),
    ("Sarah", "Alvarez", "Pediatric Dentistry"),
    ("Lisa", "Harris", "Restorative Dentistry"),
    ("Danny", "Perez", "Restorative Dentistry"),
    ("Constance", "Smith", "Surgery"),
    ("Leslie", "Roche", "Orthodontics"),
    // Lisa works in two departments
    ("Lisa", "Harris", "Orthodontics"),
];

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let client = StaffdirClient::new(&config.base_url);

    match cli.command {
        Commands::Departments { action } => match action {
            DepartmentAction::List => list_departments(&client).await?,
            DepartmentAction::Create { name, description } => {
                let department = client
                    .create_department(&name, description.as_deref())
                    .await?;
                println!(
                    "{} {} ({})",
                    "Created department".green(),
                    department.name.bold(),
                    department.id
                );
            }
            DepartmentAction::Remove { id } => {
                client.delete_department(id).await?;
                println!("{} {}", "Deleted department".green(), id);
            }
        },

        Commands::Employees { action } => match action {
            EmployeeAction::List => {
                let employees = client.list_employees().await?;
                print_employees(&employees);
            }
            EmployeeAction::Search { term } => {
                let employees = client.search_employees(&term).await?;
                if employees.is_empty() {
                    println!("{}", "No matching employees".yellow());
                } else {
                    print_employees(&employees);
                }
            }
            EmployeeAction::Create {
                first_name,
                last_name,
                department,
                email,
                phone,
            } => {
                let employee = client
                    .create_employee(
                        &first_name,
                        &last_name,
                        department,
                        email.as_deref(),
                        phone.as_deref(),
                    )
                    .await?;
                println!(
                    "{} {} ({})",
                    "Created employee".green(),
                    employee.full_name.bold(),
                    employee.id
                );
            }
            EmployeeAction::Remove { id } => {
                client.delete_employee(id).await?;
                println!("{} {}", "Deleted employee".green(), id);
            }
        },

        Commands::Seed { yes } => seed(&client, yes).await?,

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("Config file: {:?}", Config::config_path()?);
                println!("Base URL:    {}", config.base_url);
            }
            ConfigAction::SetUrl { url } => {
                let mut config = config;
                config.set_base_url(url);
                config.save()?;
                println!("{} {}", "Base URL set to".green(), config.base_url);
            }
        },
    }

    Ok(())
}

async fn list_departments(client: &StaffdirClient) -> Result<()> {
    let departments = client.list_departments().await?;

    if departments.is_empty() {
        println!("{}", "No departments yet".yellow());
        return Ok(());
    }

    for department in departments {
        let description = department.description.unwrap_or_default();
        println!(
            "{}  {}  {}",
            department.id.to_string().dimmed(),
            department.name.bold(),
            description.dimmed()
        );
    }

    Ok(())
}

fn print_employees(employees: &[api::EmployeeDto]) {
    for employee in employees {
        let department = employee
            .department
            .as_ref()
            .map(|d| d.name.as_str())
            .unwrap_or("(no department)");
        let contact = employee
            .email
            .as_deref()
            .or(employee.phone.as_deref())
            .unwrap_or("-");
        let status = if employee.is_active {
            "active".green()
        } else {
            "inactive".red()
        };
        println!(
            "{}  {}  {}  {}  [{}]",
            employee.id.to_string().dimmed(),
            employee.full_name.bold(),
            department,
            contact.dimmed(),
            status
        );
    }
}

async fn seed(client: &StaffdirClient, yes: bool) -> Result<()> {
    if !client.health().await.unwrap_or(false) {
        bail!("Staffdir API is not reachable; check `staffdir config show`");
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Seed the demo dataset? Running twice creates duplicate employees")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Seeding cancelled".yellow());
            return Ok(());
        }
    }

    // Reuse departments that already exist so the seed is re-runnable
    let mut department_ids: HashMap<String, Uuid> = client
        .list_departments()
        .await?
        .into_iter()
        .map(|d| (d.name, d.id))
        .collect();

    for (name, description) in SEED_DEPARTMENTS {
        if department_ids.contains_key(name) {
            println!("{} {}", "Department exists:".dimmed(), name);
            continue;
        }
        let department = client.create_department(name, Some(description)).await?;
        println!("{} {}", "Created department".green(), department.name.bold());
        department_ids.insert(department.name, department.id);
    }

    for (first_name, last_name, department_name) in SEED_EMPLOYEES {
        let Some(&department_id) = department_ids.get(department_name) else {
            bail!("Seed department missing: {department_name}");
        };
        let employee = client
            .create_employee(first_name, last_name, department_id, None, None)
            .await?;
        println!(
            "{} {} ({})",
            "Created employee".green(),
            employee.full_name.bold(),
            department_name
        );
    }

    println!("{}", "Seeding complete".green().bold());
    Ok(())
}
