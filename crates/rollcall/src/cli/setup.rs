use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rollcallapp::model::Status;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Styled terminal output (colours when the terminal supports them)
    #[default]
    Term,
    /// Same layout, never coloured
    Text,
    /// Structured JSON of the same data
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "rollcall",
    bin_name = "rollcall",
    version,
    disable_help_subcommand = true,
    about = "Staff attendance and leave dashboard",
    long_about = None,
    after_help = "Records only live for the duration of a `rollcall session`.\nOne-shot commands work on the sample records (unless --no-sample)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Term, help_heading = "Options")]
    pub output: OutputMode,

    /// Config file (defaults to rollcall.toml in the user config directory)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Start with an empty record store
    #[arg(long, global = true, help_heading = "Options")]
    pub no_sample: bool,

    /// Verbose logging on stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// The date window and department a view is computed over.
///
/// With neither date the window is today. With one date it is that single day.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowArgs {
    /// First day of the window (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<NaiveDate>,

    /// Last day of the window (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<NaiveDate>,

    /// Only this department code
    #[arg(long, value_name = "CODE")]
    pub dept: Option<String>,
}

impl WindowArgs {
    /// Resolves the optional ends against `today`.
    pub fn range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match (self.from, self.to) {
            (Some(from), Some(to)) => (from, to),
            (Some(day), None) | (None, Some(day)) => (day, day),
            (None, None) => (today, today),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Status counts and the filtered records (default)
    #[command(alias = "ls", display_order = 1)]
    List(WindowArgs),

    /// Status counts only
    #[command(display_order = 2)]
    Summary(WindowArgs),

    /// Write the filtered records to a CSV file
    #[command(display_order = 3)]
    Export {
        #[command(flatten)]
        window: WindowArgs,

        /// Directory to write the report into
        #[arg(long, value_name = "PATH")]
        dir: Option<PathBuf>,
    },

    /// Print-friendly report, never coloured
    #[command(display_order = 4)]
    Print {
        #[command(flatten)]
        window: WindowArgs,

        /// Write the report to this file instead of stdout
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// List the departments
    #[command(alias = "depts", display_order = 5)]
    Departments,

    /// Interactive session where records can be added (reads a script from piped stdin)
    #[command(display_order = 6)]
    Session(WindowArgs),
}

/// One line typed inside `rollcall session`.
#[derive(Parser, Debug)]
#[command(
    name = "session",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_help_flag = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [ARGS]"
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Add a record: add <NAME...> --from DATE --to DATE [--dept CODE] [--status STATUS]
    Add {
        /// Person's name
        name: Vec<String>,

        /// Department code (defaults to the configured default department)
        #[arg(long, short)]
        dept: Option<String>,

        /// office, medical-leave (mc), annual-leave, public-holiday, external-assignment
        #[arg(long, short, default_value = "office")]
        status: Status,

        /// Start date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        from: String,

        /// End date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        to: String,

        #[arg(long, default_value = "")]
        location: String,

        #[arg(long, default_value = "")]
        program: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Move the window: filter <FROM> [TO]
    Filter { from: NaiveDate, to: Option<NaiveDate> },

    /// Restrict to a department, or show all when no code is given
    Dept { code: Option<String> },

    /// Counts and records in the current window
    #[command(alias = "ls")]
    List,

    /// Counts in the current window
    Summary,

    /// Write the current view to CSV
    Export {
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Print-friendly report of the current view
    Print {
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// List the departments
    Departments,

    /// Back to today, all departments
    Reset,

    /// Show session commands
    Help,

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

/// Splits a session line into words. Single or double quotes group words; a backslash
/// escapes the next character outside single quotes.
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"'), '\\') | (None, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => return Err("Trailing backslash".to_string()),
            },
            (Some(_), c) => current.push(c),
            (None, '"') | (None, '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("Unclosed {} quote", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
