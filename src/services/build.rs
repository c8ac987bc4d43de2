use crate::services::layout::Layout;
use anyhow::Context;
use std::process::Command;

/// Runs `gradlew clean build -p Mutants/` and waits for it to finish.
///
/// Stdout and stderr are piped and dropped; the only diagnostics this
/// pipeline consumes are the ones Gradle writes into the HTML report. The
/// exit status is returned so the run report can record it, but callers do
/// not gate on it either.
pub fn run_build(layout: &Layout) -> anyhow::Result<std::process::ExitStatus> {
    let launcher = layout.launcher();
    let output = Command::new(&launcher)
        .args(["clean", "build", "-p"])
        .arg(layout.project_dir())
        .current_dir(layout.root())
        .output()
        .with_context(|| format!("invoke build launcher {}", launcher.display()))?;
    Ok(output.status)
}
