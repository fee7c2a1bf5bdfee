mod batch;
mod cli;
mod command;
mod error;
mod git;
mod logging;
mod progress;
mod prompt;
mod refs;
mod report;
mod select;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::command::{Sweep, SweepOptions};
use crate::git::ShellGit;
use crate::progress::BarProgress;
use crate::prompt::ConsolePrompter;
use crate::report::{ConsoleReporter, Reporter};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let reporter = ConsoleReporter::new(cli.json);
    if let Err(err) = run(cli, reporter.clone()) {
        reporter.error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli, reporter: ConsoleReporter) -> Result<()> {
    let mut sweep = Sweep {
        git: ShellGit::new(cli.repo),
        prompter: ConsolePrompter::new(cli.yes),
        progress: BarProgress::default(),
        reporter,
        options: SweepOptions {
            remote: cli.remote,
            dry_run: cli.dry_run,
            json: cli.json,
        },
    };

    match cli.command {
        Commands::Select { kind } => sweep.select(kind)?,
        Commands::Regex { kind, patterns } => sweep.regex(kind, &patterns)?,
    }
    Ok(())
}
