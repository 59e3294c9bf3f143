//! Compact tool-result text.
//!
//! Summaries stay terse on purpose: the full design system rides in the
//! structured response, so the text block only carries what a model needs
//! to decide whether to refine the query.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use design_core::docgen::split_anti_patterns;
use design_core::model::{domain_spec, DesignSystem, Row};
use design_core::search::{SearchResult, StackSearchResult};

use crate::persist::PersistResult;

/// Summary flavor for the `design_system` tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Markdown,
    Ascii,
}

const ASCII_CHECKLIST: &[&str] = &[
    "[ ] No emojis as icons (use SVG: Heroicons/Lucide)",
    "[ ] cursor-pointer on all clickable elements",
    "[ ] Hover states with smooth transitions (150-300ms)",
    "[ ] Light mode: text contrast 4.5:1 minimum",
    "[ ] Focus states visible for keyboard nav",
    "[ ] prefers-reduced-motion respected",
    "[ ] Responsive: 375px, 768px, 1024px, 1440px",
];

pub fn design_system_summary(
    ds: &DesignSystem,
    persisted: Option<&PersistResult>,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Markdown => markdown_summary(ds, persisted),
        OutputFormat::Ascii => ascii_summary(ds, persisted),
    }
}

/// One line per decision, pipe-separated where two belong together.
fn markdown_summary(ds: &DesignSystem, persisted: Option<&PersistResult>) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Design System: {}", ds.project_name));
    lines.push(format!(
        "Style: {} | Pattern: {}",
        ds.style.name, ds.pattern.name
    ));
    lines.push(format!(
        "Colors: primary={} secondary={} cta={} bg={} text={}",
        ds.colors.primary, ds.colors.secondary, ds.colors.cta, ds.colors.background, ds.colors.text
    ));
    lines.push(format!(
        "Typography: {} / {} ({})",
        ds.typography.heading, ds.typography.body, ds.typography.mood
    ));
    if !ds.anti_patterns.is_empty() {
        lines.push(format!("Anti-patterns: {}", ds.anti_patterns));
    }
    if let Some(result) = persisted {
        lines.push(format!("Saved: {}", result.master_file.display()));
    }
    lines.push("Refine query or call again to explore alternatives.".to_string());
    lines.join("\n")
}

/// Sectioned plain-text view, empty fields skipped.
fn ascii_summary(ds: &DesignSystem, persisted: Option<&PersistResult>) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Design System: {} ({})",
        ds.project_name, ds.category
    ));
    lines.push(String::new());

    lines.push("Pattern".to_string());
    lines.push(format!("  Name: {}", ds.pattern.name));
    if !ds.pattern.conversion.is_empty() {
        lines.push(format!("  Conversion: {}", ds.pattern.conversion));
    }
    if !ds.pattern.cta_placement.is_empty() {
        lines.push(format!("  CTA: {}", ds.pattern.cta_placement));
    }
    lines.push(format!("  Sections: {}", ds.pattern.sections));
    lines.push(String::new());

    lines.push("Style".to_string());
    lines.push(format!("  {} ({})", ds.style.name, ds.style.kind));
    if !ds.style.keywords.is_empty() {
        lines.push(format!("  Keywords: {}", ds.style.keywords));
    }
    if !ds.style.best_for.is_empty() {
        lines.push(format!("  Best For: {}", ds.style.best_for));
    }
    if !ds.style.performance.is_empty() {
        lines.push(format!(
            "  Performance: {} | Accessibility: {}",
            ds.style.performance, ds.style.accessibility
        ));
    }
    lines.push(String::new());

    lines.push("Colors".to_string());
    lines.push(format!("  Primary:    {}", ds.colors.primary));
    lines.push(format!("  Secondary:  {}", ds.colors.secondary));
    lines.push(format!("  CTA:        {}", ds.colors.cta));
    lines.push(format!("  Background: {}", ds.colors.background));
    lines.push(format!("  Text:       {}", ds.colors.text));
    if !ds.colors.notes.is_empty() {
        lines.push(format!("  Notes: {}", ds.colors.notes));
    }
    lines.push(String::new());

    lines.push("Typography".to_string());
    lines.push(format!("  Heading: {}", ds.typography.heading));
    lines.push(format!("  Body: {}", ds.typography.body));
    if !ds.typography.mood.is_empty() {
        lines.push(format!("  Mood: {}", ds.typography.mood));
    }
    if !ds.typography.google_fonts_url.is_empty() {
        lines.push(format!("  Fonts: {}", ds.typography.google_fonts_url));
    }

    if !ds.key_effects.is_empty() {
        lines.push(String::new());
        lines.push("Effects".to_string());
        lines.push(format!("  {}", ds.key_effects));
    }

    if !ds.anti_patterns.is_empty() {
        lines.push(String::new());
        lines.push("Anti-Patterns".to_string());
        for item in split_anti_patterns(&ds.anti_patterns) {
            lines.push(format!("  ✗ {item}"));
        }
    }

    lines.push(String::new());
    lines.push("Pre-Delivery Checklist".to_string());
    for item in ASCII_CHECKLIST {
        lines.push(format!("  {item}"));
    }

    if let Some(result) = persisted {
        lines.push(String::new());
        lines.push(format!("Saved: {}", result.master_file.display()));
        if let Some(page) = &result.page_file {
            lines.push(format!("Page: {}", page.display()));
        }
    }

    lines.join("\n")
}

pub fn search_summary(result: &SearchResult) -> String {
    let mut lines = vec![format!(
        "Domain: {} | Found: {} results",
        result.domain, result.count
    )];
    let columns = domain_spec(&result.domain)
        .map(|spec| spec.output_columns)
        .unwrap_or_default();
    for row in &result.results {
        lines.push(row_summary(row, columns));
    }
    lines.join("\n")
}

pub fn stack_summary(result: &StackSearchResult) -> String {
    let mut lines = vec![format!(
        "Stack: {} | Found: {} results",
        result.stack, result.count
    )];
    for row in &result.results {
        let guideline = row.get("Guideline").map(String::as_str).unwrap_or("");
        let severity = row.get("Severity").map(String::as_str).unwrap_or("");
        let do_text = row.get("Do").map(String::as_str).unwrap_or("");
        lines.push(format!(
            "{guideline} ({severity}): {}",
            truncate(do_text, 100)
        ));
    }
    lines.join("\n")
}

/// First four projected columns as "key: value" pairs, values capped at 80
/// characters. Column order follows the domain schema, not hash order.
fn row_summary(row: &Row, columns: &[&str]) -> String {
    columns
        .iter()
        .filter_map(|&col| {
            row.get(col)
                .map(|value| format!("{col}: {}", truncate(value, 80)))
        })
        .take(4)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// First `max` characters of `value`.
fn truncate(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}
