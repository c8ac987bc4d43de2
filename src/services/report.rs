use crate::domain::constants::{OUTPUT_END, OUTPUT_INTRO};
use crate::domain::models::Verdict;
use crate::services::layout::Layout;
use anyhow::Context;
use std::path::Path;

/// Copies the freshly generated report tree into the per-mutant archive
/// directory, merging with whatever a previous run left there.
pub fn archive_reports(layout: &Layout, index: usize) -> anyhow::Result<()> {
    let src = layout.report_tree();
    let dst = layout.mutant_report_dir(index);
    copy_dir_all(&src, &dst)
        .with_context(|| format!("archive report tree {} -> {}", src.display(), dst.display()))
}

fn copy_dir_all(src: &Path, dst: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let to = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_all(&entry.path(), &to)?;
        } else {
            std::fs::copy(entry.path(), to)?;
        }
    }
    Ok(())
}

/// Reads the well-known report page and scrapes it for a verdict.
pub fn read_verdict(layout: &Layout) -> anyhow::Result<Verdict> {
    let path = layout.report_html();
    let html = std::fs::read_to_string(&path)
        .with_context(|| format!("read report {}", path.display()))?;
    Ok(extract_verdict(&html))
}

/// Best-effort capture of the free-text diagnostic embedded in the report:
/// the text between the intro marker and the next `</pre>`. No marker means
/// the suite reported nothing, i.e. the mutant survived.
pub fn extract_verdict(html: &str) -> Verdict {
    match html.find(OUTPUT_INTRO) {
        Some(at) => {
            let rest = &html[at + OUTPUT_INTRO.len()..];
            let text = match rest.find(OUTPUT_END) {
                Some(end) => &rest[..end],
                None => rest,
            };
            Verdict::Detected(text.to_string())
        }
        None => Verdict::Survived,
    }
}
