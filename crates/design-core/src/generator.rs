/// Multi-stage design system generation.
///
/// A query is resolved to a product category, the category to a reasoning
/// rule, and the rule's style priorities steer searches across the style,
/// color, typography, and landing collections. Every stage degrades to
/// documented defaults, so generation always produces a complete system.
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::csv;
use crate::error::CoreError;
use crate::loader::SearchIndices;
use crate::model::{ColorPalette, DesignSystem, PagePattern, Row, StyleChoice, TypographyChoice};
use crate::search::search_domain;

/// Layout and style guidance for one product category, parsed from the
/// reasoning table.
#[derive(Debug, Clone)]
pub struct ReasoningRule {
    pub pattern: String,
    /// Style names in preference order, split from a "+"-separated cell.
    pub style_priority: Vec<String>,
    pub color_mood: String,
    pub typography_mood: String,
    pub key_effects: String,
    pub anti_patterns: String,
    pub decision_rules: HashMap<String, String>,
    pub severity: String,
}

impl ReasoningRule {
    /// Conservative defaults for categories the table does not cover.
    fn fallback() -> Self {
        Self {
            pattern: "Hero + Features + CTA".to_string(),
            style_priority: vec!["Minimalism".to_string(), "Flat Design".to_string()],
            color_mood: "Professional".to_string(),
            typography_mood: "Clean".to_string(),
            key_effects: "Subtle hover transitions".to_string(),
            anti_patterns: String::new(),
            decision_rules: HashMap::new(),
            severity: "MEDIUM".to_string(),
        }
    }

    fn from_row(row: &Row) -> Self {
        // A cell that is not valid JSON degrades to no decision rules.
        let decision_rules = row
            .get("Decision_Rules")
            .and_then(|raw| serde_json::from_str::<HashMap<String, String>>(raw).ok())
            .unwrap_or_default();

        Self {
            pattern: field(row, "Recommended_Pattern"),
            style_priority: field(row, "Style_Priority")
                .split('+')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            color_mood: field(row, "Color_Mood"),
            typography_mood: field(row, "Typography_Mood"),
            key_effects: field(row, "Key_Effects"),
            anti_patterns: field(row, "Anti_Patterns"),
            decision_rules,
            severity: field_or(row, "Severity", "MEDIUM"),
        }
    }
}

/// Generates design system recommendations from the reasoning table and
/// the shared search indices.
#[derive(Debug)]
pub struct DesignSystemGenerator {
    rules: Vec<Row>,
}

impl DesignSystemGenerator {
    /// Read the reasoning table from `data_dir`. Rows are kept raw and
    /// parsed into rules per lookup.
    pub fn new(data_dir: &Path) -> Result<Self, CoreError> {
        let path = data_dir.join("ui-reasoning.csv");
        let text = fs::read_to_string(&path).map_err(|source| CoreError::Read {
            file: path.display().to_string(),
            source,
        })?;
        let rules = csv::parse_rows(&text);
        debug!(rules = rules.len(), "loaded reasoning table");
        Ok(Self { rules })
    }

    /// Resolve a product category to its reasoning rule.
    ///
    /// Tries, in order: case-insensitive exact match, substring match in
    /// either direction, then keyword overlap on the category split at
    /// "/" and "-". Falls back to defaults when nothing matches.
    fn find_rule(&self, category: &str) -> ReasoningRule {
        let cat = category.to_lowercase();

        for row in &self.rules {
            if field(row, "UI_Category").to_lowercase() == cat {
                return ReasoningRule::from_row(row);
            }
        }

        for row in &self.rules {
            let ui_cat = field(row, "UI_Category").to_lowercase();
            if ui_cat.contains(&cat) || cat.contains(&ui_cat) {
                return ReasoningRule::from_row(row);
            }
        }

        for row in &self.rules {
            let ui_cat = field(row, "UI_Category").to_lowercase();
            let hit = ui_cat
                .replace(['/', '-'], " ")
                .split_whitespace()
                .any(|kw| kw.chars().count() > 2 && cat.contains(kw));
            if hit {
                return ReasoningRule::from_row(row);
            }
        }

        ReasoningRule::fallback()
    }

    /// Pick the style row that best fits the priority list.
    ///
    /// A direct name overlap with an earlier priority wins outright.
    /// Otherwise rows are scored per priority keyword: 10 for a hit in
    /// "Style Category", 3 in "Keywords", 1 anywhere else in the row.
    /// Ties keep the earliest row.
    fn select_best_match(results: &[Row], priorities: &[String]) -> Row {
        let Some(first) = results.first() else {
            return Row::new();
        };
        if priorities.is_empty() {
            return first.clone();
        }

        for priority in priorities {
            let p = priority.to_lowercase().trim().to_string();
            for result in results {
                let style_name = field(result, "Style Category").to_lowercase();
                if p.contains(&style_name) || style_name.contains(&p) {
                    return result.clone();
                }
            }
        }

        let mut best_score = -1i64;
        let mut best = first;

        for result in results {
            let serialized = serde_json::to_string(result)
                .unwrap_or_default()
                .to_lowercase();
            let mut score = 0i64;
            for priority in priorities {
                let kw = priority.to_lowercase().trim().to_string();
                if field(result, "Style Category").to_lowercase().contains(&kw) {
                    score += 10;
                } else if field(result, "Keywords").to_lowercase().contains(&kw) {
                    score += 3;
                } else if serialized.contains(&kw) {
                    score += 1;
                }
            }
            if score > best_score {
                best_score = score;
                best = result;
            }
        }

        best.clone()
    }

    /// Generate a complete design system for a query.
    pub fn generate(
        &self,
        query: &str,
        project_name: Option<&str>,
        indices: &SearchIndices,
    ) -> DesignSystem {
        let product = search_domain(query, Some("product"), 1, indices);
        let category = product
            .results
            .first()
            .and_then(|row| row.get("Product Type"))
            .cloned()
            .unwrap_or_else(|| "General".to_string());

        let reasoning = self.find_rule(&category);

        // Seed the style search with the rule's top two priorities.
        let style_query = if reasoning.style_priority.is_empty() {
            query.to_string()
        } else {
            let take = reasoning.style_priority.len().min(2);
            format!("{} {}", query, reasoning.style_priority[..take].join(" "))
        };

        let style_result = search_domain(&style_query, Some("style"), 3, indices);
        let color_result = search_domain(query, Some("color"), 2, indices);
        let typography_result = search_domain(query, Some("typography"), 2, indices);
        let landing_result = search_domain(query, Some("landing"), 2, indices);

        let best_style = Self::select_best_match(&style_result.results, &reasoning.style_priority);
        let best_color = color_result.results.first().cloned().unwrap_or_default();
        let best_typography = typography_result.results.first().cloned().unwrap_or_default();
        let best_landing = landing_result.results.first().cloned().unwrap_or_default();

        let style_effects = field(&best_style, "Effects & Animation");
        let key_effects = if style_effects.is_empty() {
            reasoning.key_effects.clone()
        } else {
            style_effects.clone()
        };

        let pattern = PagePattern {
            name: field_or(&best_landing, "Pattern Name", &reasoning.pattern),
            sections: field_or(&best_landing, "Section Order", "Hero > Features > CTA"),
            cta_placement: field_or(&best_landing, "Primary CTA Placement", "Above fold"),
            color_strategy: field(&best_landing, "Color Strategy"),
            conversion: field(&best_landing, "Conversion Optimization"),
        };

        let style = StyleChoice {
            name: field_or(&best_style, "Style Category", "Minimalism"),
            kind: field_or(&best_style, "Type", "General"),
            effects: style_effects,
            keywords: field(&best_style, "Keywords"),
            best_for: field(&best_style, "Best For"),
            performance: field(&best_style, "Performance"),
            accessibility: field(&best_style, "Accessibility"),
        };

        let colors = ColorPalette {
            primary: field_or(&best_color, "Primary (Hex)", "#2563EB"),
            secondary: field_or(&best_color, "Secondary (Hex)", "#3B82F6"),
            cta: field_or(&best_color, "CTA (Hex)", "#F97316"),
            background: field_or(&best_color, "Background (Hex)", "#F8FAFC"),
            text: field_or(&best_color, "Text (Hex)", "#1E293B"),
            notes: field(&best_color, "Notes"),
        };

        let typography = TypographyChoice {
            heading: field_or(&best_typography, "Heading Font", "Inter"),
            body: field_or(&best_typography, "Body Font", "Inter"),
            mood: field_or(&best_typography, "Mood/Style Keywords", &reasoning.typography_mood),
            best_for: field(&best_typography, "Best For"),
            google_fonts_url: field(&best_typography, "Google Fonts URL"),
            css_import: field(&best_typography, "CSS Import"),
        };

        debug!(%category, style = %style.name, "generated design system");

        DesignSystem {
            project_name: project_name
                .map(str::to_string)
                .unwrap_or_else(|| query.to_uppercase()),
            category,
            pattern,
            style,
            colors,
            typography,
            key_effects,
            anti_patterns: reasoning.anti_patterns,
            decision_rules: reasoning.decision_rules,
            severity: reasoning.severity,
        }
    }
}

/// Row field by key, "" when the key is absent.
fn field(row: &Row, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}

/// Row field by key, falling back only when the key is absent. An empty
/// value present in the row is kept as-is.
fn field_or(row: &Row, key: &str, fallback: &str) -> String {
    row.get(key).cloned().unwrap_or_else(|| fallback.to_string())
}
