/// Query routing and ranked search over the indexed corpus.
use serde::{Deserialize, Serialize};

use crate::loader::{Collection, SearchIndices};
use crate::model::Row;

/// Keyword hints for routing a query to a domain, in priority order.
/// Ties go to the earlier entry; no hits at all fall through to "style".
const DOMAIN_KEYWORDS: &[(&str, &[&str])] = &[
    ("color", &["color", "palette", "hex", "#", "rgb"]),
    (
        "chart",
        &["chart", "graph", "visualization", "trend", "bar", "pie", "scatter", "heatmap", "funnel"],
    ),
    (
        "landing",
        &["landing", "page", "cta", "conversion", "hero", "testimonial", "pricing", "section"],
    ),
    (
        "product",
        &[
            "saas",
            "ecommerce",
            "e-commerce",
            "fintech",
            "healthcare",
            "gaming",
            "portfolio",
            "crypto",
            "dashboard",
        ],
    ),
    (
        "style",
        &[
            "style",
            "design",
            "ui",
            "minimalism",
            "glassmorphism",
            "neumorphism",
            "brutalism",
            "dark mode",
            "flat",
            "aurora",
            "prompt",
            "css",
            "implementation",
            "variable",
            "checklist",
            "tailwind",
        ],
    ),
    (
        "ux",
        &[
            "ux",
            "usability",
            "accessibility",
            "wcag",
            "touch",
            "scroll",
            "animation",
            "keyboard",
            "navigation",
            "mobile",
        ],
    ),
    ("typography", &["font", "typography", "heading", "serif", "sans"]),
    (
        "icons",
        &["icon", "icons", "lucide", "heroicons", "symbol", "glyph", "pictogram", "svg icon"],
    ),
    (
        "react",
        &[
            "react",
            "next.js",
            "nextjs",
            "suspense",
            "memo",
            "usecallback",
            "useeffect",
            "rerender",
            "bundle",
            "waterfall",
            "barrel",
            "dynamic import",
            "rsc",
            "server component",
        ],
    ),
    (
        "web",
        &[
            "aria",
            "focus",
            "outline",
            "semantic",
            "virtualize",
            "autocomplete",
            "form",
            "input type",
            "preconnect",
        ],
    ),
];

/// Ranked search response for a knowledge domain.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SearchResult {
    pub domain: String,
    pub query: String,
    /// Source CSV file, or "" when the domain had no collection.
    pub file: String,
    pub count: usize,
    pub results: Vec<Row>,
}

/// Ranked search response for a framework stack guide.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct StackSearchResult {
    /// Always "stack", distinguishing these results from domain searches.
    pub domain: String,
    pub stack: String,
    pub query: String,
    pub file: String,
    pub count: usize,
    pub results: Vec<Row>,
}

/// Pick the most relevant domain for a free-form query by counting keyword
/// hits. Substring matching on the lowercased query, strictly-greater wins.
pub fn detect_domain(query: &str) -> &'static str {
    let q = query.to_lowercase();
    let mut best_domain = "style";
    let mut best_score = 0;

    for &(domain, keywords) in DOMAIN_KEYWORDS {
        let score = keywords.iter().filter(|&&kw| q.contains(kw)).count();
        if score > best_score {
            best_score = score;
            best_domain = domain;
        }
    }

    best_domain
}

/// Search one domain, auto-detecting it when `domain` is `None`.
///
/// Returns up to `max_results` rows with a strictly positive score, best
/// first, projected onto the domain's output columns. Never fails: an
/// unknown domain or a query with no matches yields an empty result set.
pub fn search_domain(
    query: &str,
    domain: Option<&str>,
    max_results: usize,
    indices: &SearchIndices,
) -> SearchResult {
    let resolved = domain.unwrap_or_else(|| detect_domain(query));

    let Some(collection) = indices.domain(resolved) else {
        return SearchResult {
            domain: resolved.to_string(),
            query: query.to_string(),
            file: String::new(),
            count: 0,
            results: Vec::new(),
        };
    };

    let results = ranked_rows(collection, query, max_results);

    SearchResult {
        domain: resolved.to_string(),
        query: query.to_string(),
        file: collection.file.to_string(),
        count: results.len(),
        results,
    }
}

/// Search one framework stack guide.
pub fn search_stack(
    query: &str,
    stack: &str,
    max_results: usize,
    indices: &SearchIndices,
) -> StackSearchResult {
    let Some(collection) = indices.stack(stack) else {
        return StackSearchResult {
            domain: "stack".to_string(),
            stack: stack.to_string(),
            query: query.to_string(),
            file: String::new(),
            count: 0,
            results: Vec::new(),
        };
    };

    let results = ranked_rows(collection, query, max_results);

    StackSearchResult {
        domain: "stack".to_string(),
        stack: stack.to_string(),
        query: query.to_string(),
        file: collection.file.to_string(),
        count: results.len(),
        results,
    }
}

/// Top rows by BM25 score, stopping at the first non-positive score and
/// projecting each row onto the collection's output columns.
fn ranked_rows(collection: &Collection, query: &str, max_results: usize) -> Vec<Row> {
    let ranked = collection.ranker.score(query);
    let mut results = Vec::new();

    for (idx, score) in ranked {
        if score <= 0.0 || results.len() >= max_results {
            break;
        }
        results.push(project(&collection.rows[idx], collection.output_columns));
    }

    results
}

/// Copy only the output columns that actually exist in the row.
fn project(row: &Row, columns: &[&str]) -> Row {
    let mut output = Row::with_capacity(columns.len());
    for col in columns {
        if let Some(value) = row.get(*col) {
            output.insert((*col).to_string(), value.clone());
        }
    }
    output
}
