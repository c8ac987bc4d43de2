use crate::cli::Cli;
use crate::domain::constants::{CONFORMS_MESSAGE, MUTANT_COUNT, REPORTS_DIR};
use crate::domain::models::{MutantOutcome, RunReport};
use crate::services::build::run_build;
use crate::services::layout::Layout;
use crate::services::output::print_one;
use crate::services::report::{archive_reports, read_verdict};
use crate::services::staging::{clear_scratch, ensure_scratch, install_spec, stage_mutant};
use std::path::Path;

/// Drives the whole batch: install the specification, stage and build each
/// mutant in ascending index order, archive its report tree, scrape the
/// verdict, then empty the scratch directory and print the summary.
pub fn handle_run(cli: &Cli) -> anyhow::Result<()> {
    let layout = Layout::new(std::env::current_dir()?);

    if !cli.json {
        println!("Copying the current model to mutation directory.");
    }
    install_spec(&layout)?;
    ensure_scratch(&layout)?;

    let mut outcomes = Vec::with_capacity(MUTANT_COUNT);
    for index in 1..=MUTANT_COUNT {
        if !cli.json {
            println!("Running tests on Mutant {}:", index);
        }
        let jar = layout.mutant_jar(index);
        match run_mutant(&layout, index, &jar) {
            Ok(outcome) => {
                if !cli.json {
                    match &outcome.diagnostic {
                        Some(text) => println!("{}", text),
                        None => println!("{}", CONFORMS_MESSAGE),
                    }
                }
                outcomes.push(outcome);
            }
            Err(err) if cli.fail_fast => return Err(err),
            Err(err) => {
                // Keep going: one broken mutant build must not keep the rest
                // of the batch from being attempted.
                if !cli.json {
                    eprintln!("Mutant {} run failed: {:#}", index, err);
                }
                outcomes.push(MutantOutcome::failed(index, jar.display().to_string(), &err));
            }
        }
    }

    clear_scratch(&layout)?;
    let report = RunReport {
        reports_dir: REPORTS_DIR.to_string(),
        outcomes,
    };
    print_one(cli.json, report, |_| {
        format!(
            "All experiments executed. Reports for each mutant are saved in \"{}/\" directory.",
            REPORTS_DIR
        )
    })
}

fn run_mutant(layout: &Layout, index: usize, jar: &Path) -> anyhow::Result<MutantOutcome> {
    stage_mutant(layout, jar)?;
    let status = run_build(layout)?;
    archive_reports(layout, index)?;
    let verdict = read_verdict(layout)?;
    Ok(MutantOutcome::from_verdict(
        index,
        jar.display().to_string(),
        status.code(),
        verdict,
    ))
}
