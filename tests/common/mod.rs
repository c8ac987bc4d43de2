use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const REPORT_HTML: &str =
    "Mutants/build/reports/tests/test/classes/at.tugraz.ist.qs2022.MessageBoardSpecificationTest.html";

/// Isolated mutation workspace: five dummy mutant jars, the specification
/// file, and a fake `gradlew` that fabricates the HTML report from fixture
/// files instead of running a real build.
pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        make_fixture_workspace(&root);
        Self { _tmp: tmp, root }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("mutrun");
        cmd.current_dir(&self.root);
        cmd
    }

    /// Report HTML the fake gradlew serves for every mutant.
    pub fn set_report(&self, html: &str) {
        fs::write(self.root.join("Mutants/fixture-report.html"), html)
            .expect("write fixture report");
    }

    /// Report HTML served only while `mbMutant{index}.jar` is staged.
    pub fn set_report_for(&self, index: usize, html: &str) {
        let name = format!("Mutants/fixture-report-mbMutant{}.html", index);
        fs::write(self.root.join(name), html).expect("write per-mutant fixture report");
    }

    pub fn scratch_dir(&self) -> PathBuf {
        self.root.join("Mutants/currentMutant")
    }

    pub fn mutant_report_dir(&self, index: usize) -> PathBuf {
        self.root.join(format!("Mutants/reports/mutant{}", index))
    }

    pub fn gradlew_invocations(&self) -> usize {
        fs::read_to_string(self.root.join("Mutants/gradlew-invocations.log"))
            .map(|log| log.lines().count())
            .unwrap_or(0)
    }
}

pub fn conforming_report() -> String {
    "<html><body><h2>Tests</h2>\n<pre>all tests passed</pre></body></html>".to_string()
}

pub fn detected_report(diagnostic: &str) -> String {
    format!(
        "<html><body><h2>Standard output</h2>\n<span class=\"code\">\n<pre>! {}</pre>\n</span></body></html>",
        diagnostic
    )
}

fn make_fixture_workspace(root: &Path) {
    fs::create_dir_all(root.join("src/test/scala/at/tugraz/ist/qs2022"))
        .expect("create spec source dir");
    fs::write(
        root.join("src/test/scala/at/tugraz/ist/qs2022/MessageBoardSpecification.scala"),
        "// specification suite fixture\n",
    )
    .expect("write spec source");

    fs::create_dir_all(root.join("Mutants/src/test/scala/at/tugraz/ist/qs2022"))
        .expect("create spec dest dir");
    fs::create_dir_all(root.join("Mutants/mutantsJars")).expect("create jar dir");
    for index in 1..=5 {
        fs::write(
            root.join(format!("Mutants/mutantsJars/mbMutant{}.jar", index)),
            format!("jar bytes for mutant {}\n", index),
        )
        .expect("write mutant jar");
    }

    write_fake_gradlew(root);
}

/// The stand-in build: logs its argument list, rebuilds the report tree, and
/// copies in the fixture HTML (per-staged-jar override first, then the shared
/// default). Producing no report at all models a broken build.
fn write_fake_gradlew(root: &Path) {
    let script = format!(
        r#"#!/bin/sh
echo "$@" >> Mutants/gradlew-invocations.log
rm -rf Mutants/build
jar=$(ls Mutants/currentMutant 2>/dev/null | head -n 1)
src="Mutants/fixture-report-${{jar%.jar}}.html"
[ -f "$src" ] || src=Mutants/fixture-report.html
if [ -f "$src" ]; then
  mkdir -p "$(dirname {report})"
  cp "$src" "{report}"
fi
"#,
        report = REPORT_HTML
    );
    let path = root.join("Mutants/gradlew");
    fs::write(&path, script).expect("write fake gradlew");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("mark gradlew executable");
    }
}
