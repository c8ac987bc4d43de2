use crate::services::layout::Layout;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Copies the specification suite into the mutation project, keeping the file
/// name. Both the source file and the destination directory must pre-exist.
pub fn install_spec(layout: &Layout) -> anyhow::Result<PathBuf> {
    let source = layout.spec_source();
    let file_name = source
        .file_name()
        .context("specification source has no file name")?;
    let dest = layout.spec_dest_dir().join(file_name);
    std::fs::copy(&source, &dest)
        .with_context(|| format!("copy specification {} -> {}", source.display(), dest.display()))?;
    Ok(dest)
}

pub fn ensure_scratch(layout: &Layout) -> anyhow::Result<()> {
    let dir = layout.scratch_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("create scratch directory {}", dir.display()))
}

/// Removes every immediate child of the scratch directory.
pub fn clear_scratch(layout: &Layout) -> anyhow::Result<usize> {
    let dir = layout.scratch_dir();
    let mut removed = 0usize;
    for entry in std::fs::read_dir(&dir)
        .with_context(|| format!("read scratch directory {}", dir.display()))?
    {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            std::fs::remove_dir_all(entry.path())?;
        } else {
            std::fs::remove_file(entry.path())?;
        }
        removed += 1;
    }
    Ok(removed)
}

/// Clears the scratch directory and copies one mutant archive into it.
/// Steady-state invariant: the scratch dir holds exactly the staged jar.
pub fn stage_mutant(layout: &Layout, jar: &Path) -> anyhow::Result<PathBuf> {
    clear_scratch(layout)?;
    let file_name = jar.file_name().context("mutant archive has no file name")?;
    let dest = layout.scratch_dir().join(file_name);
    std::fs::copy(jar, &dest)
        .with_context(|| format!("copy mutant archive {} -> {}", jar.display(), dest.display()))?;
    Ok(dest)
}
