use crate::domain::constants::{
    LAUNCHER_UNIX, LAUNCHER_WINDOWS, MUTANT_JAR_DIR, PROJECT_DIR, REPORTS_DIR, REPORT_HTML,
    REPORT_TREE, SCRATCH_DIR, SPEC_DEST_DIR, SPEC_SOURCE,
};
use std::path::{Path, PathBuf};

/// The fixed relative layout of the mutation workspace, anchored at a root
/// directory (the working directory in production, a temp dir in tests).
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn spec_source(&self) -> PathBuf {
        self.root.join(SPEC_SOURCE)
    }

    pub fn spec_dest_dir(&self) -> PathBuf {
        self.root.join(SPEC_DEST_DIR)
    }

    /// Pre-built mutant archive for a 1-based batch index.
    pub fn mutant_jar(&self, index: usize) -> PathBuf {
        self.root
            .join(MUTANT_JAR_DIR)
            .join(format!("mbMutant{}.jar", index))
    }

    pub fn scratch_dir(&self) -> PathBuf {
        self.root.join(SCRATCH_DIR)
    }

    pub fn project_dir(&self) -> PathBuf {
        self.root.join(PROJECT_DIR)
    }

    /// Gradle wrapper path, `.bat` variant on Windows hosts.
    pub fn launcher(&self) -> PathBuf {
        if cfg!(windows) {
            self.root.join(LAUNCHER_WINDOWS)
        } else {
            self.root.join(LAUNCHER_UNIX)
        }
    }

    pub fn report_tree(&self) -> PathBuf {
        self.root.join(REPORT_TREE)
    }

    pub fn report_html(&self) -> PathBuf {
        self.root.join(REPORT_HTML)
    }

    /// Archive directory for one mutant's report tree.
    pub fn mutant_report_dir(&self, index: usize) -> PathBuf {
        self.root.join(REPORTS_DIR).join(format!("mutant{}", index))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
