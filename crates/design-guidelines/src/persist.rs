use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::info;

use design_core::docgen::{self, PageContext};
use design_core::model::DesignSystem;

use crate::error::AppError;

/// Where a persisted design system landed on disk.
#[derive(Debug, Clone)]
pub struct PersistResult {
    pub design_system_dir: PathBuf,
    pub master_file: PathBuf,
    pub page_file: Option<PathBuf>,
}

/// Write `design-system/<project-slug>/MASTER.md` and, when a page context
/// is given, `pages/<page-slug>.md` under `output_dir`.
///
/// Existing files are overwritten; calling again with a refined system is
/// the normal iteration flow. The `pages/` directory is created either way
/// so later page-specific calls have a stable layout to write into.
pub fn persist_design_system(
    ds: &DesignSystem,
    page: Option<&PageContext>,
    output_dir: &Path,
) -> Result<PersistResult, AppError> {
    let design_system_dir = output_dir
        .join("design-system")
        .join(slugify(&ds.project_name));
    let pages_dir = design_system_dir.join("pages");

    fs::create_dir_all(&pages_dir)
        .map_err(|e| AppError::Persist(format!("failed to create {}: {e}", pages_dir.display())))?;

    let master_file = design_system_dir.join("MASTER.md");
    fs::write(&master_file, docgen::format_master_md(ds)).map_err(|e| {
        AppError::Persist(format!("failed to write {}: {e}", master_file.display()))
    })?;

    let page_file = match page {
        Some(context) => {
            let file = pages_dir.join(format!("{}.md", slugify(&context.name)));
            fs::write(&file, docgen::format_page_md(ds, context))
                .map_err(|e| AppError::Persist(format!("failed to write {}: {e}", file.display())))?;
            Some(file)
        }
        None => None,
    };

    info!(
        dir = %design_system_dir.display(),
        page = page_file.is_some(),
        "design system persisted"
    );

    Ok(PersistResult {
        design_system_dir,
        master_file,
        page_file,
    })
}

/// Lowercase with whitespace runs collapsed to single dashes.
fn slugify(name: &str) -> String {
    let whitespace = Regex::new(r"\s+").expect("valid regex");
    whitespace
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_system;
    use design_core::page::{Layout, PageType};
    use tempfile::TempDir;

    #[test]
    fn writes_master_under_the_project_slug() {
        let dir = TempDir::new().unwrap();
        let ds = sample_system();

        let result = persist_design_system(&ds, None, dir.path()).unwrap();

        let expected_dir = dir.path().join("design-system").join("acme-analytics");
        assert_eq!(result.design_system_dir, expected_dir);
        assert_eq!(result.master_file, expected_dir.join("MASTER.md"));
        assert!(result.page_file.is_none());

        let text = fs::read_to_string(&result.master_file).unwrap();
        assert!(text.starts_with("# Design System Master File"));
        assert!(text.contains("**Project:** Acme Analytics"));
        assert!(text.contains("`#F97316`"));

        // pages/ exists even when no page override was requested
        assert!(expected_dir.join("pages").is_dir());
    }

    #[test]
    fn writes_page_override_when_a_context_is_given() {
        let dir = TempDir::new().unwrap();
        let ds = sample_system();
        let context = PageContext {
            name: "checkout flow".to_string(),
            page_type: PageType::Checkout,
            layout: Layout::SingleColumn,
        };

        let result = persist_design_system(&ds, Some(&context), dir.path()).unwrap();

        let page_file = result.page_file.expect("page file created");
        assert_eq!(
            page_file,
            result.design_system_dir.join("pages").join("checkout-flow.md")
        );
        let text = fs::read_to_string(&page_file).unwrap();
        assert!(text.starts_with("# Checkout Flow Page Overrides"));
        assert!(text.contains("Checkout"));
        assert!(text.contains("Single column"));
    }

    #[test]
    fn repeated_persists_overwrite_in_place() {
        let dir = TempDir::new().unwrap();
        let mut ds = sample_system();

        persist_design_system(&ds, None, dir.path()).unwrap();
        ds.style.name = "Glassmorphism".to_string();
        let second = persist_design_system(&ds, None, dir.path()).unwrap();

        let text = fs::read_to_string(&second.master_file).unwrap();
        assert!(text.contains("**Style:** Glassmorphism"));
        assert!(!text.contains("**Style:** Minimalism"));
    }

    #[test]
    fn slugs_collapse_whitespace_runs() {
        assert_eq!(slugify("Acme Analytics"), "acme-analytics");
        assert_eq!(slugify("My   Cool\tApp"), "my-cool-app");
        assert_eq!(slugify("FINTECH"), "fintech");
    }
}
