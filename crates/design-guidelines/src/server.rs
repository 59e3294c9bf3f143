/// MCP server implementation for the design knowledge base.
///
/// Exposes three tools:
/// - `design_system`: Generate a full design-system recommendation
/// - `ui_search`: Ranked search over one knowledge domain
/// - `ui_stack_guide`: Framework-specific implementation guidance
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, warn};

use design_core::docgen::PageContext;
use design_core::generator::DesignSystemGenerator;
use design_core::loader::SearchIndices;
use design_core::model::{domain_spec, stack_spec, DesignSystem, DOMAINS, STACKS};
use design_core::page::{detect_page_type, infer_layout};
use design_core::search::{search_domain, search_stack, SearchResult, StackSearchResult};

use crate::config::Config;
use crate::persist::persist_design_system;
use crate::render::{self, OutputFormat};
use crate::settings::Settings;

#[derive(Clone)]
pub struct DesignServer {
    indices: Arc<SearchIndices>,
    generator: Arc<DesignSystemGenerator>,
    settings: Settings,
    config: Config,
    tool_router: ToolRouter<DesignServer>,
}

impl DesignServer {
    pub fn new(
        indices: Arc<SearchIndices>,
        generator: Arc<DesignSystemGenerator>,
        settings: Settings,
        config: Config,
    ) -> Self {
        Self {
            indices,
            generator,
            settings,
            config,
            tool_router: Self::tool_router(),
        }
    }

    /// Page archetype and layout, inferred from the page name plus the top
    /// style rows for the query.
    fn page_context(&self, query: &str, page: &str) -> PageContext {
        let style = search_domain(query, Some("style"), 3, &self.indices);
        PageContext {
            name: page.to_string(),
            page_type: detect_page_type(page, &style.results),
            layout: infer_layout(&style.results),
        }
    }

    /// Stack to append guidance for: explicit param wins, then the settings
    /// default. A bad explicit name is an error; a bad default is ignored.
    fn resolve_stack(&self, param: Option<String>) -> Result<Option<String>, String> {
        if let Some(name) = param {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Ok(None);
            }
            if stack_spec(&name).is_none() {
                return Err(unknown_stack(&name));
            }
            return Ok(Some(name));
        }

        match &self.settings.default_stack {
            Some(name) if stack_spec(name).is_some() => Ok(Some(name.clone())),
            Some(name) => {
                warn!(stack = %name, "ignoring unknown default_stack from settings");
                Ok(None)
            }
            None => Ok(None),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct DesignSystemParams {
    /// Descriptive query: product type, industry, mood, keywords.
    query: String,
    /// Display name for the generated system; defaults to the uppercased query.
    project_name: Option<String>,
    /// Stack whose implementation guidance to append (e.g. "react", "flutter").
    stack: Option<String>,
    /// Summary flavor, "markdown" or "ascii".
    format: Option<OutputFormat>,
    /// Write MASTER.md (and any page override) under design-system/.
    persist: Option<bool>,
    /// Page name to generate a page-specific override file for, e.g. "checkout".
    page: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct UiSearchParams {
    /// Search keywords.
    query: String,
    /// Knowledge domain; auto-detected from the query when omitted.
    domain: Option<String>,
    /// Maximum rows to return, default 3.
    max_results: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct StackGuideParams {
    /// What you need guidance on.
    query: String,
    /// Stack name, e.g. "react", "nextjs", "flutter".
    stack: String,
    /// Maximum rows to return, default 3.
    max_results: Option<u32>,
}

#[derive(Debug, serde::Serialize, JsonSchema)]
struct PersistedFiles {
    master: String,
    page: Option<String>,
}

#[derive(Debug, serde::Serialize, JsonSchema)]
struct DesignSystemResponse {
    summary: String,
    query: String,
    design_system: DesignSystem,
    stack_guidance: Option<StackSearchResult>,
    persisted: Option<PersistedFiles>,
}

#[derive(Debug, serde::Serialize, JsonSchema)]
struct SearchResponse {
    summary: String,
    result: SearchResult,
}

#[derive(Debug, serde::Serialize, JsonSchema)]
struct StackGuideResponse {
    summary: String,
    result: StackSearchResult,
}

#[tool_router]
impl DesignServer {
    #[tool(
        description = "Generate a tailored UI/UX design system by searching curated data: styles, color palettes, font pairings, reasoning rules, and landing patterns. Returns the recommended pattern, style, colors, typography, effects, and anti-patterns. Call again with a refined query to explore alternatives. Set persist to save MASTER.md (plus a page override when page is given) under design-system/."
    )]
    async fn design_system(
        &self,
        Parameters(params): Parameters<DesignSystemParams>,
    ) -> Result<Json<DesignSystemResponse>, String> {
        let query = params.query.trim().to_string();
        if query.is_empty() {
            return Err("query must not be empty".to_string());
        }

        let stack = self.resolve_stack(params.stack)?;

        let ds = self
            .generator
            .generate(&query, params.project_name.as_deref(), &self.indices);

        let persisted = if params.persist.unwrap_or(false) {
            let page = params
                .page
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty());
            let page_context = page.map(|p| self.page_context(&query, p));
            let result =
                persist_design_system(&ds, page_context.as_ref(), &self.config.output_dir)
                    .map_err(|e| format!("persist failed: {e}"))?;
            Some(result)
        } else {
            None
        };

        let stack_guidance = stack.map(|name| search_stack(&query, &name, 3, &self.indices));

        let format = params.format.unwrap_or(self.settings.default_format);
        let summary = render::design_system_summary(&ds, persisted.as_ref(), format);

        info!(
            %query,
            category = %ds.category,
            persisted = persisted.is_some(),
            "design system generated"
        );

        let persisted = persisted.map(|result| PersistedFiles {
            master: result.master_file.display().to_string(),
            page: result.page_file.map(|p| p.display().to_string()),
        });

        Ok(Json(DesignSystemResponse {
            summary,
            query,
            design_system: ds,
            stack_guidance,
            persisted,
        }))
    }

    #[tool(
        description = "Search the UI/UX knowledge base by domain. Domains: style, color, typography, chart, landing, product, ux, icons, react (performance), web (interface guidelines). Auto-detects the domain from the query when omitted."
    )]
    async fn ui_search(
        &self,
        Parameters(params): Parameters<UiSearchParams>,
    ) -> Result<Json<SearchResponse>, String> {
        let query = params.query.trim().to_string();
        if query.is_empty() {
            return Err("query must not be empty".to_string());
        }

        if let Some(domain) = params.domain.as_deref() {
            if domain_spec(domain).is_none() {
                let available: Vec<&str> = DOMAINS.iter().map(|d| d.name).collect();
                return Err(format!(
                    "unknown domain: '{domain}'. Available domains: {}",
                    available.join(", ")
                ));
            }
        }

        let max_results = params.max_results.unwrap_or(3).min(50) as usize;
        let result = search_domain(&query, params.domain.as_deref(), max_results, &self.indices);
        let summary = render::search_summary(&result);

        Ok(Json(SearchResponse { summary, result }))
    }

    #[tool(
        description = "Get implementation guidelines for a specific tech stack. Covers best practices, Do/Don't patterns, and code examples."
    )]
    async fn ui_stack_guide(
        &self,
        Parameters(params): Parameters<StackGuideParams>,
    ) -> Result<Json<StackGuideResponse>, String> {
        let query = params.query.trim().to_string();
        if query.is_empty() {
            return Err("query must not be empty".to_string());
        }
        let stack = params.stack.trim().to_string();
        if stack.is_empty() {
            return Err("stack must not be empty".to_string());
        }
        if stack_spec(&stack).is_none() {
            return Err(unknown_stack(&stack));
        }

        let max_results = params.max_results.unwrap_or(3).min(50) as usize;
        let result = search_stack(&query, &stack, max_results, &self.indices);
        let summary = render::stack_summary(&result);

        Ok(Json(StackGuideResponse { summary, result }))
    }
}

fn unknown_stack(name: &str) -> String {
    let available: Vec<&str> = STACKS.iter().map(|s| s.name).collect();
    format!(
        "unknown stack: '{name}'. Available stacks: {}",
        available.join(", ")
    )
}

#[tool_handler]
impl ServerHandler for DesignServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "design-guidelines".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Curated UI/UX design knowledge server. Use design_system to generate \
                 a complete recommendation (pattern, style, colors, typography, \
                 anti-patterns) for a product described in the query, ui_search to \
                 query individual knowledge domains, and ui_stack_guide for \
                 framework-specific implementation guidance."
                    .to_string(),
            ),
        }
    }
}
