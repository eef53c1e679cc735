//! Command-line interface for `alianza_rust`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::logging;

/// `alianza_rust` (aps) - Help-request intake and tracking console.
#[derive(Parser, Debug)]
#[command(name = "aps")]
#[command(
    author,
    version,
    about = "NGO help-request intake and tracking console (JSON store + CLI)",
    long_about = None,
    after_help = "Non-invasive: no daemons, no database, no external integrations."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize an alianza workspace
    Init(InitArgs),

    /// Submit a new help request through the intake wizard
    Submit(SubmitArgs),

    /// Look up a request by its ticket number
    Track(TrackArgs),

    /// List help requests
    List(ListArgs),

    /// Show request details
    Show(ShowArgs),

    /// Change a request's status
    Status(StatusArgs),

    /// Aggregate request statistics
    Stats,

    /// Load the demo dataset
    Seed,

    /// Wipe all stored requests and the ticket index
    Clear(ClearArgs),

    /// Show version information
    Version,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing workspace
    #[arg(long)]
    pub force: bool,

    /// Ticket prefix for this workspace (default: APS)
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Field values for the intake wizard. Everything is optional at the
/// parser level; required-field enforcement is the wizard's job and is
/// reported per field.
#[derive(Args, Debug, Default)]
pub struct SubmitArgs {
    /// Requester name
    #[arg(long)]
    pub name: Option<String>,

    /// Age bracket (menor-18, 18-25, 26-35, 36-45, 46-60, mayor-60)
    #[arg(long)]
    pub age: Option<String>,

    /// Contact phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Contact email
    #[arg(long)]
    pub email: Option<String>,

    /// Municipality of residence
    #[arg(long)]
    pub municipality: Option<String>,

    /// Neighborhood
    #[arg(long)]
    pub neighborhood: Option<String>,

    /// Street address (collected, never persisted)
    #[arg(long)]
    pub address: Option<String>,

    /// Help type (violencia-fisica, asesoria-legal, refugio-temporal, ...)
    #[arg(long = "help-type")]
    pub help_type: Option<String>,

    /// Urgency level (emergencia, urgente, normal)
    #[arg(long)]
    pub urgency: Option<String>,

    /// Free-text violence type
    #[arg(long = "violence-type")]
    pub violence_type: Option<String>,

    /// Description of the situation
    #[arg(long)]
    pub description: Option<String>,

    /// First time seeking help
    #[arg(long = "first-time")]
    pub first_time: bool,

    /// Children in the household
    #[arg(long = "has-children")]
    pub has_children: bool,

    /// Shelter need (si, tal-vez, no)
    #[arg(long = "needs-shelter")]
    pub needs_shelter: Option<String>,

    /// Preferred contact channel (llamada, whatsapp, email, presencial)
    #[arg(long = "contact")]
    pub preferred_contact: Option<String>,

    /// Best time window for a call (manana, tarde, noche, cualquier)
    #[arg(long = "best-time")]
    pub best_time_to_call: Option<String>,

    /// Whether calling is safe (si, solo-ciertos-horarios, no)
    #[arg(long = "safe-to-call")]
    pub safe_to_call: Option<String>,
}

#[derive(Args, Debug)]
pub struct TrackArgs {
    /// Ticket number (whitespace and case are normalized)
    pub ticket: String,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Filter by status (repeatable)
    #[arg(long = "status")]
    pub status: Vec<String>,

    /// Filter by help type (repeatable)
    #[arg(long = "help-type")]
    pub help_type: Vec<String>,

    /// Filter by municipality (case-insensitive)
    #[arg(long)]
    pub municipality: Option<String>,

    /// Maximum number of rows
    #[arg(long)]
    pub limit: Option<usize>,

    /// Sort field (created_at, updated_at, name, urgency)
    #[arg(long)]
    pub sort: Option<String>,

    /// Reverse the sort order
    #[arg(long)]
    pub reverse: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Request ids or ticket numbers
    #[arg(required = true)]
    pub references: Vec<String>,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Request id or ticket number
    pub reference: String,

    /// New status (pending, in_progress, resolved)
    pub status: String,
}

#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Confirm the wipe
    #[arg(long)]
    pub yes: bool,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let mode = commands::OutputMode {
        json: cli.json,
        quiet: cli.quiet,
    };

    match cli.command {
        Some(Commands::Init(args)) => commands::init::execute(&args)?,
        Some(Commands::Submit(args)) => commands::submit::execute(&args, mode)?,
        Some(Commands::Track(args)) => commands::track::execute(&args, mode)?,
        Some(Commands::List(args)) => commands::list::execute(&args, mode)?,
        Some(Commands::Show(args)) => commands::show::execute(&args, mode)?,
        Some(Commands::Status(args)) => commands::status::execute(&args, mode)?,
        Some(Commands::Stats) => commands::stats::execute(mode)?,
        Some(Commands::Seed) => commands::seed::execute(mode)?,
        Some(Commands::Clear(args)) => commands::clear::execute(&args)?,
        Some(Commands::Version) => {
            println!("aps {}", env!("CARGO_PKG_VERSION"));
        }
        None => println!("aps - Help-request intake console. Use --help for usage."),
    }

    Ok(())
}
