//! Fixed paths and markers of the mutation workspace.
//!
//! Everything the runner touches lives at these well-known locations relative
//! to the working directory; there is no configuration layer on top.

/// Number of pre-built mutant archives in the batch, indexed 1..=MUTANT_COUNT.
pub const MUTANT_COUNT: usize = 5;

/// Specification test suite copied into the mutation project before each run.
pub const SPEC_SOURCE: &str =
    "src/test/scala/at/tugraz/ist/qs2022/MessageBoardSpecification.scala";

/// Destination directory for the specification copy (must pre-exist).
pub const SPEC_DEST_DIR: &str = "Mutants/src/test/scala/at/tugraz/ist/qs2022";

/// Directory holding the pre-built mutant jars, named `mbMutant{i}.jar`.
pub const MUTANT_JAR_DIR: &str = "Mutants/mutantsJars";

/// Single-slot staging directory; holds at most one mutant jar at a time.
pub const SCRATCH_DIR: &str = "Mutants/currentMutant";

/// Gradle project directory passed to the launcher via `-p`.
pub const PROJECT_DIR: &str = "Mutants";

pub const LAUNCHER_UNIX: &str = "Mutants/gradlew";
pub const LAUNCHER_WINDOWS: &str = "Mutants/gradlew.bat";

/// Report tree Gradle regenerates on every build.
pub const REPORT_TREE: &str = "Mutants/build/reports/tests";

/// The one report page scraped for a verdict after each build.
pub const REPORT_HTML: &str = "Mutants/build/reports/tests/test/classes/at.tugraz.ist.qs2022.MessageBoardSpecificationTest.html";

/// Root of the per-mutant report archive, one `mutant{i}` subdirectory each.
pub const REPORTS_DIR: &str = "Mutants/reports";

/// Marker immediately preceding the diagnostic text in a failing report.
pub const OUTPUT_INTRO: &str = "<h2>Standard output</h2>\n<span class=\"code\">\n<pre>! ";

/// Marker terminating the diagnostic text.
pub const OUTPUT_END: &str = "</pre>";

/// Printed when the report carries no diagnostic (the mutant survived).
pub const CONFORMS_MESSAGE: &str = "Mutant conforms to the model.";
