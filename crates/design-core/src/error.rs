/// Error types for corpus loading.
///
/// These errors can only occur while collections are being built at startup.
/// The search and generation paths never fail: unknown collections, queries
/// with no matches, and rows with missing fields all degrade to well-defined
/// empty or default outputs.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("data directory not found: {0}")]
    MissingData(String),

    #[error("failed to read {file}")]
    Read {
        file: String,
        #[source]
        source: std::io::Error,
    },
}
