//! Small fixture corpus shared by tests across modules.
use std::fs;
use std::path::Path;

use crate::loader::{load_indices, SearchIndices};
use crate::model::STACKS;

const STYLES: &str = "Style Category,Type,Keywords,Primary Colors,Effects & Animation,Best For,Performance,Accessibility,Framework Compatibility,Complexity,AI Prompt Keywords,CSS/Technical Keywords,Implementation Checklist,Design System Variables
Minimalism,Modern,clean simple whitespace professional,#FFFFFF #111111,Subtle hover transitions,SaaS dashboards and developer tools,Excellent,High contrast text,All,Low,minimal clean,utility classes,Reduce noise first,--radius: 8px
Glassmorphism,Modern,frosted glass blur translucent,#8EC5FC #E0C3FC,Backdrop blur with soft borders,Fintech dashboards and hero sections,Moderate,Needs contrast care,React Vue,Medium,glass blur,backdrop-filter,Layer translucency carefully,--glass-blur: 12px
Dark Mode,Modern,dark night low-light developer,#0F172A #38BDF8,Glow accents on hover,Developer tools and analytics,Excellent,Target AA contrast,All,Low,dark theme,color-scheme dark,Define dark tokens,--bg: #0F172A
";

const COLORS: &str = "Product Type,Primary (Hex),Secondary (Hex),CTA (Hex),Background (Hex),Text (Hex),Notes
SaaS Dashboard,#2563EB,#3B82F6,#F97316,#F8FAFC,#1E293B,Trustworthy blue with orange action color
Beauty/Spa,#D4A5A5,#EAD7D7,#B76E79,#FDF8F5,#4A3F3F,Soft rose tones for calm wellness feel
Developer Tools,#0EA5E9,#111827,#22D3EE,#0B1120,#E2E8F0,High contrast dark scheme for terminals
";

const TYPOGRAPHY: &str = "Font Pairing Name,Category,Heading Font,Body Font,Mood/Style Keywords,Best For,Google Fonts URL,CSS Import,Tailwind Config,Notes
Inter + Inter,Sans,Inter,Inter,clean neutral professional,SaaS dashboards,https://fonts.google.com/specimen/Inter,@import Inter,fontFamily.sans,System-adjacent default
Playfair + Lato,Serif,Playfair Display,Lato,elegant luxury editorial,Beauty and boutique brands,https://fonts.google.com/specimen/Playfair+Display,@import Playfair,fontFamily.serif,Use sparingly at large sizes
";

const LANDING: &str = "Pattern Name,Keywords,Section Order,Primary CTA Placement,Color Strategy,Conversion Optimization
Hero-Led SaaS,saas dashboard conversion trial,Hero > Social Proof > Features > Pricing > CTA,Above fold in hero,Primary on CTA only,Single CTA repeated after pricing
Story-Led Boutique,boutique story brand spa,Hero > Story > Gallery > Testimonials > CTA,After story section,Soft neutrals with accent CTA,Lead with imagery before ask
";

const PRODUCTS: &str = "Product Type,Keywords,Primary Style Recommendation,Secondary Styles,Landing Page Pattern,Dashboard Style (if applicable),Color Palette Focus,Key Considerations
SaaS Dashboard,saas dashboard analytics metrics b2b,Minimalism,Dark Mode,Hero-Led SaaS,Dense data grid,Blue with orange CTA,Data density and trust
Beauty/Spa,beauty spa wellness salon massage,Soft UI Pastel,Organic/Natural,Story-Led Boutique,,Rose and cream neutrals,Calm over urgency
Developer Tools,developer tools cli terminal api sdk,Dark Mode,Minimalism,Hero-Led SaaS,Terminal-style panels,Dark with cyan accent,Keyboard-first workflows
";

const UX: &str = "Category,Issue,Platform,Description,Do,Don't,Code Example Good,Code Example Bad,Severity
Touch Targets,Small tap areas,Mobile,Touch targets under 44px are hard to hit,Use min 44x44 px targets,Stack tiny icon buttons,min-height: 44px,height: 20px,HIGH
";

const CHARTS: &str = "Data Type,Keywords,Best Chart Type,Secondary Options,Color Guidance,Accessibility Notes,Library Recommendation,Interactive Level
Time Series,trend over time metrics,Line chart,Area chart,One hue per series,Label axes directly,Recharts,Medium
";

const ICONS: &str = "Category,Icon Name,Keywords,Library,Import Code,Usage,Best For,Style
Navigation,menu,hamburger menu navigation,lucide,import Menu from lucide-react,<Menu />,Mobile navigation,Outline
";

const REACT_PERF: &str = "Category,Issue,Keywords,Platform,Description,Do,Don't,Code Example Good,Code Example Bad,Severity
Rendering,Unstable list keys,key index rerender list,React,Index keys break reconciliation,Use stable ids as keys,Use the array index,key={item.id},key={i},HIGH
";

const WEB_INTERFACE: &str = "Category,Issue,Keywords,Platform,Description,Do,Don't,Code Example Good,Code Example Bad,Severity
Forms,Missing input labels,label aria form input,Web,Unlabeled inputs break screen readers,Pair every label with an id,Rely on placeholder text,<label for=email>,<input placeholder=Email>,HIGH
";

const UI_REASONING: &str = r#"UI_Category,Recommended_Pattern,Style_Priority,Color_Mood,Typography_Mood,Key_Effects,Anti_Patterns,Decision_Rules,Severity
SaaS Dashboard,Hero-Led SaaS,Minimalism + Dark Mode,Trustworthy Blue,Clean,Subtle hover transitions,Heavy gradients + Autoplay video,"{""data_density"":""Prefer dense tables over cards""}",HIGH
Beauty/Spa,Story-Led Boutique,Soft UI Pastel + Organic/Natural,Calm Rose,Elegant,Gentle fades,Neon colors + Dark backgrounds,{},MEDIUM
"#;

const STACK_HEADER: &str =
    "Category,Guideline,Description,Do,Don't,Code Good,Code Bad,Severity,Docs URL\n";

const STACK_REACT: &str = "Category,Guideline,Description,Do,Don't,Code Good,Code Bad,Severity,Docs URL
State,Derive state during render,Compute derived values inline instead of mirroring props in state,Compute in render,Copy props into state,const full = a + b,setState(a + b),MEDIUM,https://react.dev/learn
";

/// Write a compact but fully loadable corpus under `dir`.
pub(crate) fn write_corpus(dir: &Path) {
    fs::create_dir_all(dir.join("stacks")).expect("create stacks dir");

    let files: &[(&str, &str)] = &[
        ("styles.csv", STYLES),
        ("colors.csv", COLORS),
        ("typography.csv", TYPOGRAPHY),
        ("landing.csv", LANDING),
        ("products.csv", PRODUCTS),
        ("ux-guidelines.csv", UX),
        ("charts.csv", CHARTS),
        ("icons.csv", ICONS),
        ("react-performance.csv", REACT_PERF),
        ("web-interface.csv", WEB_INTERFACE),
        ("ui-reasoning.csv", UI_REASONING),
    ];
    for (name, content) in files {
        fs::write(dir.join(name), content).expect("write domain csv");
    }

    for spec in STACKS {
        let content = if spec.name == "react" {
            STACK_REACT
        } else {
            STACK_HEADER
        };
        fs::write(dir.join(spec.file), content).expect("write stack csv");
    }
}

/// Build indices over the fixture corpus. The TempDir must stay alive as
/// long as the indices are used.
pub(crate) fn corpus() -> (tempfile::TempDir, SearchIndices) {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_corpus(tmp.path());
    let indices = load_indices(tmp.path()).expect("load fixture corpus");
    (tmp, indices)
}
