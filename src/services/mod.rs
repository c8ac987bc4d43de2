//! Service layer containing the pipeline's side-effect helpers.
//!
//! ## Service map
//! - `layout.rs` — the fixed mutation-workspace paths, rooted at one directory.
//! - `staging.rs` — spec install + single-slot scratch directory handling.
//! - `build.rs` — Gradle wrapper invocation (platform launcher selection).
//! - `report.rs` — report tree archiving + HTML verdict scraping.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep the command handler thin; delegate to services.

pub mod build;
pub mod layout;
pub mod output;
pub mod report;
pub mod staging;
