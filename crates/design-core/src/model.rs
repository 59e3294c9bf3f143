/// Data model for the design knowledge corpus.
///
/// Each knowledge domain is one CSV file with a fixed set of columns used
/// for indexing (`search_columns`) and a fixed set returned to callers
/// (`output_columns`). Stack guides share one column layout across files.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One CSV record, keyed by header name. Missing fields parse as "".
pub type Row = HashMap<String, String>;

/// Static description of one searchable knowledge domain.
#[derive(Debug, Clone, Copy)]
pub struct DomainSpec {
    /// Short name used in tool calls, e.g. "style" or "color".
    pub name: &'static str,
    /// CSV file path relative to the data directory.
    pub file: &'static str,
    /// Columns concatenated into the indexed document for each row.
    pub search_columns: &'static [&'static str],
    /// Columns projected into search results.
    pub output_columns: &'static [&'static str],
}

/// Static description of one framework stack guide.
#[derive(Debug, Clone, Copy)]
pub struct StackSpec {
    pub name: &'static str,
    pub file: &'static str,
}

/// All knowledge domains, in detection priority order.
pub const DOMAINS: &[DomainSpec] = &[
    DomainSpec {
        name: "color",
        file: "colors.csv",
        search_columns: &["Product Type", "Notes"],
        output_columns: &[
            "Product Type",
            "Primary (Hex)",
            "Secondary (Hex)",
            "CTA (Hex)",
            "Background (Hex)",
            "Text (Hex)",
            "Notes",
        ],
    },
    DomainSpec {
        name: "chart",
        file: "charts.csv",
        search_columns: &["Data Type", "Keywords", "Best Chart Type", "Accessibility Notes"],
        output_columns: &[
            "Data Type",
            "Keywords",
            "Best Chart Type",
            "Secondary Options",
            "Color Guidance",
            "Accessibility Notes",
            "Library Recommendation",
            "Interactive Level",
        ],
    },
    DomainSpec {
        name: "landing",
        file: "landing.csv",
        search_columns: &["Pattern Name", "Keywords", "Conversion Optimization", "Section Order"],
        output_columns: &[
            "Pattern Name",
            "Keywords",
            "Section Order",
            "Primary CTA Placement",
            "Color Strategy",
            "Conversion Optimization",
        ],
    },
    DomainSpec {
        name: "product",
        file: "products.csv",
        search_columns: &[
            "Product Type",
            "Keywords",
            "Primary Style Recommendation",
            "Key Considerations",
        ],
        output_columns: &[
            "Product Type",
            "Keywords",
            "Primary Style Recommendation",
            "Secondary Styles",
            "Landing Page Pattern",
            "Dashboard Style (if applicable)",
            "Color Palette Focus",
        ],
    },
    DomainSpec {
        name: "style",
        file: "styles.csv",
        search_columns: &["Style Category", "Keywords", "Best For", "Type", "AI Prompt Keywords"],
        output_columns: &[
            "Style Category",
            "Type",
            "Keywords",
            "Primary Colors",
            "Effects & Animation",
            "Best For",
            "Performance",
            "Accessibility",
            "Framework Compatibility",
            "Complexity",
            "AI Prompt Keywords",
            "CSS/Technical Keywords",
            "Implementation Checklist",
            "Design System Variables",
        ],
    },
    DomainSpec {
        name: "ux",
        file: "ux-guidelines.csv",
        search_columns: &["Category", "Issue", "Description", "Platform"],
        output_columns: &[
            "Category",
            "Issue",
            "Platform",
            "Description",
            "Do",
            "Don't",
            "Code Example Good",
            "Code Example Bad",
            "Severity",
        ],
    },
    DomainSpec {
        name: "typography",
        file: "typography.csv",
        search_columns: &[
            "Font Pairing Name",
            "Category",
            "Mood/Style Keywords",
            "Best For",
            "Heading Font",
            "Body Font",
        ],
        output_columns: &[
            "Font Pairing Name",
            "Category",
            "Heading Font",
            "Body Font",
            "Mood/Style Keywords",
            "Best For",
            "Google Fonts URL",
            "CSS Import",
            "Tailwind Config",
            "Notes",
        ],
    },
    DomainSpec {
        name: "icons",
        file: "icons.csv",
        search_columns: &["Category", "Icon Name", "Keywords", "Best For"],
        output_columns: &[
            "Category",
            "Icon Name",
            "Keywords",
            "Library",
            "Import Code",
            "Usage",
            "Best For",
            "Style",
        ],
    },
    DomainSpec {
        name: "react",
        file: "react-performance.csv",
        search_columns: &["Category", "Issue", "Keywords", "Description"],
        output_columns: &[
            "Category",
            "Issue",
            "Platform",
            "Description",
            "Do",
            "Don't",
            "Code Example Good",
            "Code Example Bad",
            "Severity",
        ],
    },
    DomainSpec {
        name: "web",
        file: "web-interface.csv",
        search_columns: &["Category", "Issue", "Keywords", "Description"],
        output_columns: &[
            "Category",
            "Issue",
            "Platform",
            "Description",
            "Do",
            "Don't",
            "Code Example Good",
            "Code Example Bad",
            "Severity",
        ],
    },
];

/// Columns indexed for every stack guide.
pub const STACK_SEARCH_COLUMNS: &[&str] = &["Category", "Guideline", "Description", "Do", "Don't"];

/// Columns returned from stack guide searches.
pub const STACK_OUTPUT_COLUMNS: &[&str] = &[
    "Category",
    "Guideline",
    "Description",
    "Do",
    "Don't",
    "Code Good",
    "Code Bad",
    "Severity",
    "Docs URL",
];

/// All supported framework stacks.
pub const STACKS: &[StackSpec] = &[
    StackSpec { name: "html-tailwind", file: "stacks/html-tailwind.csv" },
    StackSpec { name: "react", file: "stacks/react.csv" },
    StackSpec { name: "nextjs", file: "stacks/nextjs.csv" },
    StackSpec { name: "vue", file: "stacks/vue.csv" },
    StackSpec { name: "svelte", file: "stacks/svelte.csv" },
    StackSpec { name: "swiftui", file: "stacks/swiftui.csv" },
    StackSpec { name: "react-native", file: "stacks/react-native.csv" },
    StackSpec { name: "flutter", file: "stacks/flutter.csv" },
    StackSpec { name: "shadcn", file: "stacks/shadcn.csv" },
    StackSpec { name: "jetpack-compose", file: "stacks/jetpack-compose.csv" },
    StackSpec { name: "astro", file: "stacks/astro.csv" },
    StackSpec { name: "nuxtjs", file: "stacks/nuxtjs.csv" },
    StackSpec { name: "nuxt-ui", file: "stacks/nuxt-ui.csv" },
];

/// Look up a domain spec by name.
pub fn domain_spec(name: &str) -> Option<&'static DomainSpec> {
    DOMAINS.iter().find(|d| d.name == name)
}

/// Look up a stack spec by name.
pub fn stack_spec(name: &str) -> Option<&'static StackSpec> {
    STACKS.iter().find(|s| s.name == name)
}

/// Landing page pattern picked for a design system.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PagePattern {
    pub name: String,
    /// Section order, e.g. "Hero > Features > CTA".
    pub sections: String,
    pub cta_placement: String,
    pub color_strategy: String,
    pub conversion: String,
}

/// Visual style picked for a design system.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct StyleChoice {
    pub name: String,
    /// Style family, e.g. "Modern" or "Experimental".
    pub kind: String,
    pub effects: String,
    pub keywords: String,
    pub best_for: String,
    pub performance: String,
    pub accessibility: String,
}

/// Color palette picked for a design system. All values are hex strings.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub cta: String,
    pub background: String,
    pub text: String,
    pub notes: String,
}

/// Font pairing picked for a design system.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TypographyChoice {
    pub heading: String,
    pub body: String,
    pub mood: String,
    pub best_for: String,
    pub google_fonts_url: String,
    pub css_import: String,
}

/// A complete design system recommendation.
///
/// Every field is always populated: lookups that find nothing fall back to
/// documented defaults rather than leaving holes.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DesignSystem {
    /// Display name, uppercased from the query when not supplied.
    pub project_name: String,
    /// Product category resolved from the corpus, "General" when unknown.
    pub category: String,
    pub pattern: PagePattern,
    pub style: StyleChoice,
    pub colors: ColorPalette,
    pub typography: TypographyChoice,
    /// Effects from the chosen style, or the reasoning rule's defaults.
    pub key_effects: String,
    /// "+"-separated list of things to avoid for this category.
    pub anti_patterns: String,
    /// Conditional guidance keyed by situation, from the reasoning rule.
    pub decision_rules: HashMap<String, String>,
    pub severity: String,
}
