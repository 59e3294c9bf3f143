mod config;
mod error;
mod persist;
mod render;
mod server;
mod settings;
#[cfg(test)]
mod testutil;

use std::sync::Arc;

use rmcp::{ServiceExt, transport::stdio};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use design_core::generator::DesignSystemGenerator;
use design_core::loader::load_indices;
use server::DesignServer;
use settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing to stderr (stdout is reserved for MCP JSON-RPC)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting design-guidelines MCP server");

    // 1. Load config from environment
    let config = Config::from_env()?;
    info!(
        data_dir = %config.data_dir.display(),
        output_dir = %config.output_dir.display(),
        "configuration loaded"
    );

    // 2. Load optional per-project settings
    let settings = Settings::load(&config.settings_dir);
    info!(
        auto_inject = settings.auto_inject_design_system,
        default_stack = settings.default_stack.as_deref().unwrap_or("none"),
        "settings loaded"
    );

    // 3. Parse and index the CSV knowledge base
    let indices = Arc::new(load_indices(&config.data_dir)?);
    info!(
        domains = indices.domain_count(),
        stacks = indices.stack_count(),
        rows = indices.row_count(),
        "knowledge base indexed"
    );

    // 4. Load the reasoning rules behind the generator
    let generator = Arc::new(DesignSystemGenerator::new(&config.data_dir)?);
    info!("design system generator ready");

    // 5. Build MCP server and serve on stdio
    let server = DesignServer::new(indices, generator, settings, config);

    info!("MCP server ready, serving on stdio");
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!(error = %e, "MCP server error");
    })?;

    service.waiting().await?;
    info!("MCP server shut down");
    Ok(())
}
