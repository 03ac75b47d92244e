use crate::export::{ExportCollection, ExportFormat};
use crate::models::{ContactStatus, Currency, DealStage, Language, Theme};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for minicrm
/// A small CRM for contacts, deals and activities, kept in SQLite
#[derive(Parser)]
#[command(
    name = "minicrm",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small single-user CRM: contacts, deals, activities and settings in a local SQLite store",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage contacts
    Contact {
        #[command(subcommand)]
        action: ContactAction,
    },

    /// Manage deals and the pipeline board
    Deal {
        #[command(subcommand)]
        action: DealAction,
    },

    /// Recent activity feed
    Activity {
        #[command(subcommand)]
        action: ActivityAction,
    },

    /// Show or change user settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Dashboard figures
    Stats {
        #[arg(long, help = "Show the reporting figures (companies, averages, win rate)")]
        insights: bool,
    },

    /// Export the store to JSON, or one collection to CSV
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, help = "Collection to write (CSV only, default: contacts)")]
        collection: Option<ExportCollection>,

        #[arg(long, short = 'f', help = "Overwrite the file without asking")]
        force: bool,
    },

    /// Replace the store content with a JSON export
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite the file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ContactAction {
    /// List contacts, newest first
    List {
        #[arg(long, short, help = "Filter by name, email or company")]
        search: Option<String>,
    },

    /// Show one contact and its deals
    Show { id: String },

    /// Create a contact
    Add(ContactFields),

    /// Change fields of a contact (an empty value clears phone, company or avatar)
    Edit {
        id: String,

        #[command(flatten)]
        fields: ContactEditFields,
    },

    /// Delete a contact
    Del {
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Args)]
pub struct ContactFields {
    #[arg(long = "first-name")]
    pub first_name: String,

    #[arg(long = "last-name")]
    pub last_name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long, value_enum, default_value = "lead")]
    pub status: ContactStatus,

    #[arg(long, help = "Avatar image URL")]
    pub avatar: Option<String>,
}

#[derive(Args)]
pub struct ContactEditFields {
    #[arg(long = "first-name")]
    pub first_name: Option<String>,

    #[arg(long = "last-name")]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long, value_enum)]
    pub status: Option<ContactStatus>,

    #[arg(long)]
    pub avatar: Option<String>,
}

#[derive(Subcommand)]
pub enum DealAction {
    /// List deals, newest first
    List {
        #[arg(long, value_enum, help = "Only deals in this stage")]
        stage: Option<DealStage>,

        #[arg(long = "contact", value_name = "ID", help = "Only deals of this contact")]
        contact: Option<String>,

        #[arg(long, help = "Show the pipeline board grouped by stage")]
        board: bool,
    },

    /// Show one deal
    Show { id: String },

    /// Create a deal
    Add(DealFields),

    /// Change fields of a deal (any stage may follow any other)
    Edit {
        id: String,

        #[command(flatten)]
        fields: DealEditFields,
    },

    /// Delete a deal
    Del {
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Args)]
pub struct DealFields {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub value: f64,

    #[arg(long, value_enum, default_value = "prospecting")]
    pub stage: DealStage,

    #[arg(long = "contact", value_name = "ID", default_value = "")]
    pub contact_id: String,

    #[arg(long)]
    pub company: String,

    #[arg(long = "close", value_name = "YYYY-MM-DD", help = "Expected close date")]
    pub expected_close: String,

    #[arg(long, default_value_t = 50)]
    pub probability: u8,
}

#[derive(Args)]
pub struct DealEditFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub value: Option<f64>,

    #[arg(long, value_enum)]
    pub stage: Option<DealStage>,

    #[arg(long = "contact", value_name = "ID")]
    pub contact_id: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long = "close", value_name = "YYYY-MM-DD")]
    pub expected_close: Option<String>,

    #[arg(long)]
    pub probability: Option<u8>,
}

#[derive(Subcommand)]
pub enum ActivityAction {
    /// Show the most recent activities
    List,

    /// Record an activity by hand
    Add {
        #[arg(long = "type", value_name = "TYPE", help = "e.g. email_sent, task_completed")]
        kind: String,

        #[arg(long)]
        text: String,
    },
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the current settings
    Show,

    /// Change one or more settings
    Set {
        #[arg(long, value_enum)]
        theme: Option<Theme>,

        #[arg(long = "company-name")]
        company_name: Option<String>,

        #[arg(long)]
        notifications: Option<bool>,

        #[arg(long = "email-alerts")]
        email_alerts: Option<bool>,

        #[arg(long, value_enum)]
        currency: Option<Currency>,

        #[arg(long, value_enum)]
        language: Option<Language>,
    },
}
