use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use valsep_core::{Entry, ExtractPolicy, TotalsReport};

mod screen;
mod session;

use session::{sort_for_display, ProcessOutcome, Session};

#[derive(Parser, Debug)]
#[command(name = "valsep", version, about = "Separate +-prefixed value lines and total them")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive paste-and-total screen (default)
    Run {
        /// How to treat lines without a parseable amount
        #[arg(long, value_enum, default_value_t = PolicyArg::Skip)]
        policy: PolicyArg,
    },

    /// One-shot: read text from a file or stdin, print tables and totals
    Process {
        /// Input file (reads stdin when omitted)
        #[arg(long)]
        file: Option<PathBuf>,

        /// How to treat lines without a parseable amount
        #[arg(long, value_enum, default_value_t = PolicyArg::Skip)]
        policy: PolicyArg,

        /// Emit a JSON document instead of tables
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Drop lines with no digit run (canonical)
    Skip,
    /// Keep such lines with amount 0 (historical)
    ZeroFill,
}

impl From<PolicyArg> for ExtractPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Skip => ExtractPolicy::SkipUnmatched,
            PolicyArg::ZeroFill => ExtractPolicy::ZeroFill,
        }
    }
}

#[derive(Serialize)]
struct ProcessOutput {
    positive: Vec<Entry>,
    other: Vec<Entry>,
    report: TotalsReport,
    messages: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => screen::run(ExtractPolicy::default()),
        Some(Command::Run { policy }) => screen::run(policy.into()),
        Some(Command::Process { file, policy, json }) => process_once(file, policy.into(), json),
    }
}

fn process_once(file: Option<PathBuf>, policy: ExtractPolicy, json: bool) -> Result<()> {
    let raw = match &file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => std::io::read_to_string(std::io::stdin()).context("reading stdin")?,
    };

    let mut session = Session::new();
    if session.process(&raw) == ProcessOutcome::EmptyInput {
        bail!("input is empty; nothing to process");
    }

    let (positive, other) = session.entries(policy)?;
    let report = TotalsReport::build(&positive, &other);

    if json {
        let messages = report.messages();
        let out = ProcessOutput {
            positive,
            other,
            report,
            messages,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if !positive.is_empty() {
        print_table("Positive (+) Entries", &positive);
        if !other.is_empty() {
            print_table("Other Entries", &other);
        }
    } else if !other.is_empty() {
        print_table("All Entries", &other);
    }

    for msg in report.messages() {
        println!("{}", msg);
    }

    Ok(())
}

fn print_table(title: &str, entries: &[Entry]) {
    println!("{}", title);
    println!("{:<44} {:>12}", "Entry", "Amount");
    for entry in sort_for_display(entries.to_vec()) {
        println!("{:<44} {:>12}", entry.text, entry.amount);
    }
    println!();
}
