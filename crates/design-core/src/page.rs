/// Page archetype and layout inference for override documents.
///
/// Both helpers are pure keyword matchers over free text. They always
/// return a named default rather than failing, so callers can feed them
/// arbitrary page names and raw search output.
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::Row;

/// Page archetypes recognized when writing page-specific overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
pub enum PageType {
    Dashboard,
    Checkout,
    Settings,
    Landing,
    Auth,
    Pricing,
    Blog,
    Product,
    Search,
    Empty,
    General,
}

impl PageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Dashboard => "Dashboard",
            PageType::Checkout => "Checkout",
            PageType::Settings => "Settings",
            PageType::Landing => "Landing",
            PageType::Auth => "Auth",
            PageType::Pricing => "Pricing",
            PageType::Blog => "Blog",
            PageType::Product => "Product",
            PageType::Search => "Search",
            PageType::Empty => "Empty",
            PageType::General => "General",
        }
    }
}

impl std::fmt::Display for PageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Archetype keyword sets, in tie-break priority order.
const PAGE_KEYWORDS: &[(PageType, &[&str])] = &[
    (
        PageType::Dashboard,
        &["dashboard", "admin", "analytics", "metrics", "kpi", "monitoring"],
    ),
    (
        PageType::Checkout,
        &["checkout", "cart", "payment", "billing", "order summary"],
    ),
    (
        PageType::Settings,
        &["settings", "preferences", "account", "profile", "configuration"],
    ),
    (
        PageType::Landing,
        &["landing", "homepage", "home page", "hero", "marketing"],
    ),
    (
        PageType::Auth,
        &["login", "log in", "signup", "sign up", "sign in", "register", "password"],
    ),
    (
        PageType::Pricing,
        &["pricing", "plans", "tiers", "subscription"],
    ),
    (PageType::Blog, &["blog", "article", "post", "editorial", "news"]),
    (
        PageType::Product,
        &["product", "detail", "listing", "catalog", "gallery"],
    ),
    (
        PageType::Search,
        &["search", "results", "filters", "browse", "discovery"],
    ),
    (
        PageType::Empty,
        &["empty", "no results", "404", "not found", "zero state"],
    ),
];

/// Infer the page archetype from free-form context.
///
/// Counts keyword hits per archetype (substring, lowercased); the highest
/// positive count wins and ties keep the earlier archetype. When nothing
/// matches, the top style result's "Best For" field gets the same
/// treatment before giving up and returning [`PageType::General`].
pub fn detect_page_type(context: &str, style_results: &[Row]) -> PageType {
    if let Some(page) = best_archetype(context) {
        return page;
    }

    style_results
        .first()
        .and_then(|row| row.get("Best For"))
        .and_then(|best_for| best_archetype(best_for))
        .unwrap_or(PageType::General)
}

fn best_archetype(text: &str) -> Option<PageType> {
    let t = text.to_lowercase();
    let mut best = None;
    let mut best_score = 0;

    for &(page, keywords) in PAGE_KEYWORDS {
        let score = keywords.iter().filter(|&&kw| t.contains(kw)).count();
        if score > best_score {
            best_score = score;
            best = Some(page);
        }
    }

    best
}

/// Layout presets attached to page overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
pub enum Layout {
    DenseGrid,
    SingleColumn,
    Standard,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::DenseGrid => "Dense grid",
            Layout::SingleColumn => "Single column",
            Layout::Standard => "Standard",
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the layout from style search output.
///
/// Data-dense vocabulary anywhere in the results wins over minimal
/// single-column vocabulary; everything else is the standard preset.
/// Empty input is standard.
pub fn infer_layout(style_results: &[Row]) -> Layout {
    if style_results.is_empty() {
        return Layout::Standard;
    }

    let dense_re =
        Regex::new(r"(?i)\b(dense|data-?heavy|grid|table|dashboard|analytics)").expect("valid regex");
    let single_re =
        Regex::new(r"(?i)\b(minimal|single-?column|focused|editorial|whitespace)").expect("valid regex");

    let text: String = style_results
        .iter()
        .flat_map(|row| row.values())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    if dense_re.is_match(&text) {
        Layout::DenseGrid
    } else if single_re.is_match(&text) {
        Layout::SingleColumn
    } else {
        Layout::Standard
    }
}
