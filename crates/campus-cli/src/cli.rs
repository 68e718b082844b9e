//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "campus",
    version,
    about = "Back office client for students, fees and inquiries",
    long_about = "Lists, edits and summarises student records, fee payments and \n\
                  inquiry tickets held by the campus back office API."
)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(flatten)]
    pub color: colorchoice_clap::Color,

    /// Set log level explicitly (overrides -v/-q)
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// API base URL, including the /api prefix (overrides the settings file)
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Settings file to use instead of the platform default
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show headline numbers and recent activity
    Dashboard,

    /// Manage student records
    #[command(subcommand)]
    Students(StudentsCommand),

    /// Review fees and record payments
    #[command(subcommand)]
    Fees(FeesCommand),

    /// Work the inquiry queue
    #[command(subcommand)]
    Inquiries(InquiriesCommand),

    /// Inspect or change stored settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Search and status filter shared by the list commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Case-insensitive substring to search for
    #[arg(long, short = 's', value_name = "TEXT")]
    pub search: Option<String>,

    /// Only show records with this status ("all" shows everything)
    #[arg(long, value_name = "STATUS")]
    pub status: Option<String>,
}

#[derive(Subcommand)]
pub enum StudentsCommand {
    /// List students
    List(ListArgs),

    /// Show one student
    Show {
        id: i64,
    },

    /// Add a student
    Add(StudentFields),

    /// Change fields on an existing student
    Edit {
        id: i64,

        #[command(flatten)]
        fields: StudentFields,
    },

    /// Delete a student
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Student fields. On `add` the required ones must be given; on `edit`
/// only the given ones change.
#[derive(Args, Debug, Clone, Default)]
pub struct StudentFields {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date_of_birth: Option<String>,

    /// Male, Female or Other
    #[arg(long)]
    pub gender: Option<String>,

    #[arg(long)]
    pub course: Option<String>,

    /// Active, Inactive or Graduated
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Subcommand)]
pub enum FeesCommand {
    /// List fees with collection totals
    List(ListArgs),

    /// Change the status of a fee
    SetStatus {
        id: i64,

        /// Paid, Pending or Overdue
        status: String,
    },

    /// Record a payment against a fee
    Pay {
        id: i64,

        /// Amount paid, e.g. 250 or 99.50
        #[arg(long)]
        amount: String,

        /// Payment method, e.g. Cash or Card
        #[arg(long)]
        method: String,
    },
}

#[derive(Subcommand)]
pub enum InquiriesCommand {
    /// List inquiries with status counts
    List(ListArgs),

    /// Submit an inquiry
    Add(InquiryFields),

    /// Change the status of an inquiry
    SetStatus {
        id: i64,

        /// Open, In_Progress, Resolved or Closed
        status: String,
    },

    /// Send a response to an inquiry
    Respond {
        id: i64,

        text: String,
    },

    /// Delete an inquiry
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct InquiryFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub subject: Option<String>,

    #[arg(long)]
    pub message: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the settings in effect
    Show,

    /// Store a new API base URL
    SetBaseUrl {
        url: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_payment() {
        let cli = Cli::parse_from([
            "campus", "fees", "pay", "3", "--amount", "99.50", "--method", "Card",
        ]);
        let Command::Fees(FeesCommand::Pay { id, amount, method }) = cli.command else {
            panic!("expected fees pay");
        };
        assert_eq!(id, 3);
        assert_eq!(amount, "99.50");
        assert_eq!(method, "Card");
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::parse_from([
            "campus",
            "students",
            "list",
            "--status",
            "active",
            "--base-url",
            "http://api.test/api",
        ]);
        assert_eq!(cli.base_url.as_deref(), Some("http://api.test/api"));
        let Command::Students(StudentsCommand::List(args)) = cli.command else {
            panic!("expected students list");
        };
        assert_eq!(args.status.as_deref(), Some("active"));
    }
}
