//! Shared fixtures for the crate's tests.

use std::collections::HashMap;

use design_core::model::{
    ColorPalette, DesignSystem, PagePattern, StyleChoice, TypographyChoice,
};

pub(crate) fn sample_system() -> DesignSystem {
    DesignSystem {
        project_name: "Acme Analytics".to_string(),
        category: "SaaS Dashboard".to_string(),
        pattern: PagePattern {
            name: "Hero-Led SaaS".to_string(),
            sections: "Hero > Social Proof > Features > Pricing > CTA".to_string(),
            cta_placement: "Above fold in hero".to_string(),
            color_strategy: "High contrast CTA".to_string(),
            conversion: "Social proof early".to_string(),
        },
        style: StyleChoice {
            name: "Minimalism".to_string(),
            kind: "Modern".to_string(),
            effects: "Subtle hover transitions".to_string(),
            keywords: "clean simple whitespace".to_string(),
            best_for: "SaaS dashboards and developer tools".to_string(),
            performance: "Excellent".to_string(),
            accessibility: "High".to_string(),
        },
        colors: ColorPalette {
            primary: "#2563EB".to_string(),
            secondary: "#3B82F6".to_string(),
            cta: "#F97316".to_string(),
            background: "#F8FAFC".to_string(),
            text: "#1E293B".to_string(),
            notes: "Blue conveys trust".to_string(),
        },
        typography: TypographyChoice {
            heading: "Inter".to_string(),
            body: "Inter".to_string(),
            mood: "Professional".to_string(),
            best_for: "Product UI".to_string(),
            google_fonts_url: "https://fonts.google.com/specimen/Inter".to_string(),
            css_import: String::new(),
        },
        key_effects: "Subtle hover transitions".to_string(),
        anti_patterns: "Heavy gradients + Autoplay video".to_string(),
        decision_rules: HashMap::new(),
        severity: "HIGH".to_string(),
    }
}
