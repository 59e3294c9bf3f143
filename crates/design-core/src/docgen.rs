/// Markdown assembly for persisted design systems.
///
/// The master document carries the global rules; page override documents
/// carry per-page deltas plus the inferred archetype and layout preset.
/// Override files always win over the master, and the preambles say so.
use chrono::Utc;

use crate::model::DesignSystem;
use crate::page::{Layout, PageType};

/// Inference results attached to a page override document.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Raw page name as given by the caller, e.g. "checkout-flow".
    pub name: String,
    pub page_type: PageType,
    pub layout: Layout,
}

const MASTER_PREAMBLE: &str = "\
# Design System Master File

> **LOGIC:** When building a specific page, first check `design-system/pages/[page-name].md`.
> If that file exists, its rules **override** this Master file.
> If not, strictly follow the rules below.

---

";

const SPACING_TABLE: &str = "\
### Spacing Variables

| Token | Value | Usage |
|-------|-------|-------|
| `--space-xs` | `4px` / `0.25rem` | Tight gaps |
| `--space-sm` | `8px` / `0.5rem` | Icon gaps, inline spacing |
| `--space-md` | `16px` / `1rem` | Standard padding |
| `--space-lg` | `24px` / `1.5rem` | Section padding |
| `--space-xl` | `32px` / `2rem` | Large gaps |
| `--space-2xl` | `48px` / `3rem` | Section margins |
| `--space-3xl` | `64px` / `4rem` | Hero padding |

";

const STATIC_ANTI_PATTERNS: &str = "\
- ❌ **Emojis as icons** — Use SVG icons (Heroicons, Lucide, Simple Icons)
- ❌ **Missing cursor:pointer** — All clickable elements must have cursor:pointer
- ❌ **Layout-shifting hovers** — Avoid scale transforms that shift layout
- ❌ **Low contrast text** — Maintain 4.5:1 minimum contrast ratio
- ❌ **Instant state changes** — Always use transitions (150-300ms)
- ❌ **Invisible focus states** — Focus states must be visible for a11y

";

const CHECKLIST: &str = "\
## Pre-Delivery Checklist

- [ ] No emojis used as icons (use SVG instead)
- [ ] All icons from consistent icon set (Heroicons/Lucide)
- [ ] `cursor-pointer` on all clickable elements
- [ ] Hover states with smooth transitions (150-300ms)
- [ ] Light mode: text contrast 4.5:1 minimum
- [ ] Focus states visible for keyboard navigation
- [ ] `prefers-reduced-motion` respected
- [ ] Responsive: 375px, 768px, 1024px, 1440px
- [ ] No content hidden behind fixed navbars
- [ ] No horizontal scroll on mobile
";

/// Render the master document for a design system.
pub fn format_master_md(ds: &DesignSystem) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str(MASTER_PREAMBLE);
    out.push_str(&format!("**Project:** {}\n", ds.project_name));
    out.push_str(&format!("**Generated:** {}\n", timestamp()));
    out.push_str(&format!("**Category:** {}\n", ds.category));
    out.push_str("\n---\n\n");

    out.push_str("## Global Rules\n\n");
    out.push_str("### Color Palette\n\n");
    out.push_str("| Role | Hex | CSS Variable |\n");
    out.push_str("|------|-----|--------------|\n");
    out.push_str(&format!("| Primary | `{}` | `--color-primary` |\n", ds.colors.primary));
    out.push_str(&format!("| Secondary | `{}` | `--color-secondary` |\n", ds.colors.secondary));
    out.push_str(&format!("| CTA/Accent | `{}` | `--color-cta` |\n", ds.colors.cta));
    out.push_str(&format!("| Background | `{}` | `--color-background` |\n", ds.colors.background));
    out.push_str(&format!("| Text | `{}` | `--color-text` |\n", ds.colors.text));
    out.push('\n');
    if !ds.colors.notes.is_empty() {
        out.push_str(&format!("**Color Notes:** {}\n\n", ds.colors.notes));
    }

    out.push_str("### Typography\n\n");
    out.push_str(&format!("- **Heading Font:** {}\n", ds.typography.heading));
    out.push_str(&format!("- **Body Font:** {}\n", ds.typography.body));
    if !ds.typography.mood.is_empty() {
        out.push_str(&format!("- **Mood:** {}\n", ds.typography.mood));
    }
    if !ds.typography.google_fonts_url.is_empty() {
        out.push_str(&format!(
            "- **Google Fonts:** [{} + {}]({})\n",
            ds.typography.heading, ds.typography.body, ds.typography.google_fonts_url
        ));
    }
    out.push('\n');
    if !ds.typography.css_import.is_empty() {
        out.push_str("**CSS Import:**\n```css\n");
        out.push_str(&ds.typography.css_import);
        out.push_str("\n```\n\n");
    }

    out.push_str(SPACING_TABLE);

    out.push_str("---\n\n## Style Guidelines\n\n");
    out.push_str(&format!("**Style:** {}\n\n", ds.style.name));
    if !ds.style.keywords.is_empty() {
        out.push_str(&format!("**Keywords:** {}\n\n", ds.style.keywords));
    }
    if !ds.style.best_for.is_empty() {
        out.push_str(&format!("**Best For:** {}\n\n", ds.style.best_for));
    }
    if !ds.key_effects.is_empty() {
        out.push_str(&format!("**Key Effects:** {}\n\n", ds.key_effects));
    }

    out.push_str("### Page Pattern\n\n");
    out.push_str(&format!("**Pattern Name:** {}\n\n", ds.pattern.name));
    if !ds.pattern.conversion.is_empty() {
        out.push_str(&format!("- **Conversion Strategy:** {}\n", ds.pattern.conversion));
    }
    if !ds.pattern.cta_placement.is_empty() {
        out.push_str(&format!("- **CTA Placement:** {}\n", ds.pattern.cta_placement));
    }
    out.push_str(&format!("- **Section Order:** {}\n\n", ds.pattern.sections));

    out.push_str("---\n\n## Component Specs\n\n### Buttons\n\n");
    out.push_str("```css\n.btn-primary {\n");
    out.push_str(&format!("  background: {};\n", ds.colors.cta));
    out.push_str("  color: white;\n");
    out.push_str("  padding: 12px 24px;\n");
    out.push_str("  border-radius: 8px;\n");
    out.push_str("  font-weight: 600;\n");
    out.push_str("  transition: all 200ms ease;\n");
    out.push_str("  cursor: pointer;\n");
    out.push_str("}\n```\n\n");

    out.push_str("---\n\n## Anti-Patterns (Do NOT Use)\n\n");
    for item in split_anti_patterns(&ds.anti_patterns) {
        out.push_str(&format!("- ❌ {item}\n"));
    }
    out.push('\n');
    out.push_str(STATIC_ANTI_PATTERNS);

    out.push_str("---\n\n");
    out.push_str(CHECKLIST);

    out
}

/// Render a page-specific override document.
pub fn format_page_md(ds: &DesignSystem, page: &PageContext) -> String {
    let mut out = String::with_capacity(1024);

    out.push_str(&format!("# {} Page Overrides\n\n", title_case(&page.name)));
    out.push_str(&format!("> **PROJECT:** {}\n", ds.project_name));
    out.push_str(&format!("> **Generated:** {}\n\n", timestamp()));
    out.push_str(
        "> ⚠️ **IMPORTANT:** Rules in this file **override** the Master file (`design-system/MASTER.md`).\n",
    );
    out.push_str("> Only deviations from the Master are documented here.\n\n");
    out.push_str("---\n\n");

    out.push_str("## Page-Specific Rules\n\n");
    out.push_str(&format!("**Detected Archetype:** {}\n", page.page_type));
    out.push_str(&format!("**Layout Preset:** {}\n\n", page.layout));

    out.push_str("### Layout Overrides\n\n");
    out.push_str(layout_hint(page.layout));
    out.push_str("\n\n");

    out.push_str("### Color Overrides\n\n");
    out.push_str("- No overrides — use Master colors\n\n");

    out.push_str("### Typography Overrides\n\n");
    out.push_str("- No overrides — use Master typography\n\n");

    out.push_str("## Recommendations\n\n");
    if let Some(hint) = archetype_hint(page.page_type) {
        out.push_str(hint);
        out.push('\n');
    }
    out.push_str("- Refer to MASTER.md for all design rules\n");
    out.push_str("- Add specific overrides as needed for this page\n");

    out
}

/// Split a "+"-separated anti-pattern cell into trimmed non-empty items.
pub fn split_anti_patterns(raw: &str) -> Vec<&str> {
    raw.split('+').map(str::trim).filter(|s| !s.is_empty()).collect()
}

fn layout_hint(layout: Layout) -> &'static str {
    match layout {
        Layout::DenseGrid => {
            "- Tighten spacing for data density: tables, compact cards, persistent filters"
        }
        Layout::SingleColumn => "- Single focused column; remove sidebars and secondary CTAs",
        Layout::Standard => "- No overrides — use Master layout",
    }
}

fn archetype_hint(page_type: PageType) -> Option<&'static str> {
    match page_type {
        PageType::Dashboard => {
            Some("- Prioritize scannability: tabular numerals, right-aligned metric columns")
        }
        PageType::Checkout => {
            Some("- Reserve the CTA color for the payment action; mute everything else")
        }
        PageType::Settings => Some("- Group controls by frequency of use; destructive actions last"),
        PageType::Landing => Some("- Repeat the primary CTA after each major section"),
        PageType::Auth => Some("- Single column, minimal fields, no competing navigation"),
        PageType::Pricing => Some("- Highlight exactly one recommended tier"),
        PageType::Blog => Some("- Keep line length between 60 and 75 characters"),
        PageType::Product => Some("- Gallery left, buy box right on desktop; stacked on mobile"),
        PageType::Search => Some("- Keep filters visible; show result counts before results"),
        PageType::Empty => Some("- Pair every empty state with one clear next action"),
        PageType::General => None,
    }
}

/// "YYYY-MM-DD HH:MM:SS" in UTC.
fn timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Replace "-"/"_" with spaces and uppercase the first letter of each word.
fn title_case(name: &str) -> String {
    let spaced = name.replace(['-', '_'], " ");
    let mut out = String::with_capacity(spaced.len());
    let mut boundary = true;

    for c in spaced.chars() {
        if boundary && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
            boundary = false;
        } else {
            if !c.is_alphanumeric() {
                boundary = true;
            }
            out.push(c);
        }
    }

    out
}
