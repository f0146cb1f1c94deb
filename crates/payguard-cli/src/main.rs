mod errors;
mod logging;
mod parser;
mod rules_doc;
mod runner;
mod writer;

use clap::{Parser, Subcommand, ValueEnum};
use payguard_core::{Domain, Filter};

/// Output format for import results
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Print tables to standard output (human-readable)
    Stdout,
    /// Print the import summary as JSON
    Json,
}

/// Upload format to work with
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DomainArg {
    /// Employee onboarding
    Employee,
    /// One-off earnings and deductions
    AdditionalPay,
    /// Performance-linked variable pay
    VariablePay,
}

impl From<DomainArg> for Domain {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::Employee => Domain::Employee,
            DomainArg::AdditionalPay => Domain::AdditionalPay,
            DomainArg::VariablePay => Domain::VariablePay,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "payguard",
    version,
    author = "PayGuard Contributors",
    about = "PayGuard CLI - Bulk import validation for HR and payroll CSV files",
    long_about = "PayGuard validates bulk-upload CSV files for employee onboarding, additional pay \
                  and variable pay before they reach the system of record. Every row is checked \
                  against the rules of its format and invalid rows are reported with every rule \
                  they break.\n\n\
                  Example usage:\n  \
                  payguard template employee --out templates/\n  \
                  payguard validate employee employees.csv --filter error --export-errors"
)]
struct Args {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Output format for import results
    #[arg(short, long, value_enum, default_value = "stdout", global = true)]
    output: OutputFormat,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// Enable debug mode with detailed error backtraces and stack traces
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug, Clone)]
struct PreviewArgs {
    /// Which records to show: all, valid or error
    #[arg(short, long, default_value = "all")]
    filter: Filter,

    /// Preview page to show, starting at 1
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Write the invalid records and their errors to a CSV report
    #[arg(long)]
    export_errors: bool,

    /// Directory or file for the error report (overrides [output] dir)
    #[arg(long, value_name = "PATH")]
    out: Option<String>,

    /// Save the valid records as JSON lines to FILE
    #[arg(long, value_name = "FILE")]
    save: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the CSV template of a format
    Template {
        #[arg(value_enum)]
        domain: DomainArg,

        /// Directory or file to write to (overrides [output] dir)
        #[arg(long, value_name = "PATH")]
        out: Option<String>,
    },
    /// Validate an upload and preview its records
    Validate {
        #[arg(value_enum)]
        domain: DomainArg,

        /// CSV file to validate
        file: String,

        #[command(flatten)]
        preview: PreviewArgs,
    },
    /// Validate the built-in demo data of a format
    Demo {
        #[arg(value_enum)]
        domain: DomainArg,

        #[command(flatten)]
        preview: PreviewArgs,
    },
    /// Validate an upload again every time it changes
    Watch {
        #[arg(value_enum)]
        domain: DomainArg,

        /// CSV file to watch
        file: String,

        #[command(flatten)]
        preview: PreviewArgs,
    },
    /// Print the rules of a format
    Rules {
        #[arg(value_enum)]
        domain: DomainArg,
    },
}

fn main() {
    let args = Args::parse();

    // Enable backtraces in debug mode
    if args.debug {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
    logging::init(&args.log_level);

    match runner::run(args) {
        Ok(true) => {}
        // Invalid records were found
        Ok(false) => std::process::exit(2),
        Err(err) => {
            if std::env::var("RUST_BACKTRACE").is_ok() {
                eprintln!("Error: {:?}", err);
            } else {
                eprintln!("Error: {:#}", err);
                eprintln!("\nHint: Run with --debug flag for detailed stack traces");
            }
            std::process::exit(1);
        }
    }
}
