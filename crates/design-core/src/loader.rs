/// Corpus loading and indexing.
///
/// Every domain and stack CSV is read once at startup, parsed, and fitted
/// with its own BM25 ranker. The resulting [`SearchIndices`] is immutable
/// and shared by reference for the life of the process.
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::bm25::Bm25;
use crate::csv;
use crate::error::CoreError;
use crate::model::{Row, DOMAINS, STACKS, STACK_OUTPUT_COLUMNS, STACK_SEARCH_COLUMNS};

/// One loaded and indexed CSV collection.
#[derive(Debug, Clone)]
pub struct Collection {
    /// Source file path relative to the data directory.
    pub file: &'static str,
    pub rows: Vec<Row>,
    pub ranker: Bm25,
    pub search_columns: &'static [&'static str],
    pub output_columns: &'static [&'static str],
}

impl Collection {
    fn load(
        data_dir: &Path,
        file: &'static str,
        search_columns: &'static [&'static str],
        output_columns: &'static [&'static str],
    ) -> Result<Self, CoreError> {
        let path = data_dir.join(file);
        let text = fs::read_to_string(&path).map_err(|source| CoreError::Read {
            file: path.display().to_string(),
            source,
        })?;
        let rows = csv::parse_rows(&text);

        if !rows.is_empty() {
            let known = search_columns.iter().any(|col| rows[0].contains_key(*col));
            if !known {
                warn!(file, "no search columns present in header, nothing will match");
            }
        }

        let documents: Vec<String> = rows
            .iter()
            .map(|row| {
                search_columns
                    .iter()
                    .map(|col| row.get(*col).map(String::as_str).unwrap_or(""))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();

        let mut ranker = Bm25::default();
        ranker.fit(&documents);

        Ok(Self {
            file,
            rows,
            ranker,
            search_columns,
            output_columns,
        })
    }
}

/// Immutable set of all indexed collections, built once at startup.
#[derive(Debug, Clone)]
pub struct SearchIndices {
    domains: HashMap<&'static str, Collection>,
    stacks: HashMap<&'static str, Collection>,
}

impl SearchIndices {
    pub fn domain(&self, name: &str) -> Option<&Collection> {
        self.domains.get(name)
    }

    pub fn stack(&self, name: &str) -> Option<&Collection> {
        self.stacks.get(name)
    }

    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }

    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }

    /// Total indexed rows across every collection, for startup logging.
    pub fn row_count(&self) -> usize {
        self.domains
            .values()
            .chain(self.stacks.values())
            .map(|c| c.rows.len())
            .sum()
    }
}

/// Load and index every domain and stack collection under `data_dir`.
pub fn load_indices(data_dir: &Path) -> Result<SearchIndices, CoreError> {
    if !data_dir.is_dir() {
        return Err(CoreError::MissingData(data_dir.display().to_string()));
    }

    let mut domains = HashMap::with_capacity(DOMAINS.len());
    for spec in DOMAINS {
        let collection = Collection::load(
            data_dir,
            spec.file,
            spec.search_columns,
            spec.output_columns,
        )?;
        debug!(domain = spec.name, rows = collection.rows.len(), "indexed domain");
        domains.insert(spec.name, collection);
    }

    let mut stacks = HashMap::with_capacity(STACKS.len());
    for spec in STACKS {
        let collection = Collection::load(
            data_dir,
            spec.file,
            STACK_SEARCH_COLUMNS,
            STACK_OUTPUT_COLUMNS,
        )?;
        debug!(stack = spec.name, rows = collection.rows.len(), "indexed stack");
        stacks.insert(spec.name, collection);
    }

    Ok(SearchIndices { domains, stacks })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    #[test]
    fn missing_data_dir_is_an_error() {
        let err = load_indices(Path::new("/nonexistent/corpus")).unwrap_err();
        assert!(matches!(err, CoreError::MissingData(_)));
    }

    #[test]
    fn loads_and_indexes_fixture_corpus() {
        let (_tmp, indices) = testutil::corpus();
        assert_eq!(indices.domain_count(), DOMAINS.len());
        assert_eq!(indices.stack_count(), STACKS.len());

        let style = indices.domain("style").unwrap();
        assert_eq!(style.file, "styles.csv");
        assert_eq!(style.rows.len(), 3);
        assert_eq!(style.ranker.len(), 3);
        assert!(indices.domain("nonsense").is_none());
    }

    #[test]
    fn missing_file_reports_its_path() {
        let tmp = tempfile::tempdir().unwrap();
        testutil::write_corpus(tmp.path());
        fs::remove_file(tmp.path().join("charts.csv")).unwrap();

        let err = load_indices(tmp.path()).unwrap_err();
        match err {
            CoreError::Read { file, .. } => assert!(file.contains("charts.csv")),
            other => panic!("unexpected error: {other}"),
        }
    }

    // Exercises the real corpus when running from the workspace. Skips
    // quietly if the data directory is not present.
    #[test]
    fn loads_real_corpus_when_present() {
        let dir = Path::new("../../data");
        if !dir.is_dir() {
            return;
        }

        let indices = load_indices(dir).unwrap();
        assert_eq!(indices.domain_count(), DOMAINS.len());
        assert_eq!(indices.stack_count(), STACKS.len());
        assert!(indices.row_count() > 50);
        for spec in DOMAINS {
            let collection = indices.domain(spec.name).unwrap();
            assert!(!collection.rows.is_empty(), "{} has no rows", spec.name);
        }
    }
}
