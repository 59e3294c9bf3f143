/// BM25 ranking over a fixed corpus of short documents.
///
/// Each collection fits one ranker at load time; scoring never mutates
/// state, so a fitted ranker can be shared freely across calls.
use std::collections::{HashMap, HashSet};

const DEFAULT_K1: f64 = 1.5;
const DEFAULT_B: f64 = 0.75;

#[derive(Debug, Clone)]
pub struct Bm25 {
    k1: f64,
    b: f64,
    corpus: Vec<Vec<String>>,
    doc_lengths: Vec<usize>,
    avgdl: f64,
    idf: HashMap<String, f64>,
    n: usize,
}

impl Default for Bm25 {
    fn default() -> Self {
        Self::new(DEFAULT_K1, DEFAULT_B)
    }
}

impl Bm25 {
    pub fn new(k1: f64, b: f64) -> Self {
        Self {
            k1,
            b,
            corpus: Vec::new(),
            doc_lengths: Vec::new(),
            avgdl: 0.0,
            idf: HashMap::new(),
            n: 0,
        }
    }

    /// Lowercase the text, turn every character that is not alphanumeric,
    /// underscore, or whitespace into a space, split on whitespace runs,
    /// and drop tokens of two characters or fewer.
    pub fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect::<String>()
            .split_whitespace()
            .filter(|w| w.chars().count() > 2)
            .map(str::to_string)
            .collect()
    }

    /// Build the index from an ordered sequence of document strings.
    ///
    /// Replaces all previously fitted state. Fitting an empty corpus leaves
    /// the ranker in a state where `score` returns no entries.
    pub fn fit(&mut self, documents: &[String]) {
        self.corpus = documents.iter().map(|doc| Self::tokenize(doc)).collect();
        self.n = self.corpus.len();
        self.doc_lengths = self.corpus.iter().map(Vec::len).collect();
        self.avgdl = 0.0;
        self.idf = HashMap::new();
        if self.n == 0 {
            return;
        }

        self.avgdl = self.doc_lengths.iter().sum::<usize>() as f64 / self.n as f64;

        let mut doc_freqs: HashMap<&str, usize> = HashMap::new();
        for doc in &self.corpus {
            let mut seen: HashSet<&str> = HashSet::new();
            for word in doc {
                if seen.insert(word.as_str()) {
                    *doc_freqs.entry(word.as_str()).or_insert(0) += 1;
                }
            }
        }

        let n = self.n as f64;
        for (word, freq) in doc_freqs {
            let df = freq as f64;
            self.idf
                .insert(word.to_string(), ((n - df + 0.5) / (df + 0.5) + 1.0).ln());
        }
    }

    /// Score every fitted document against the query.
    ///
    /// Returns one `(document_index, score)` pair per document, sorted by
    /// descending score; ties keep ascending document order. Query tokens
    /// outside the fitted vocabulary contribute nothing, and documents
    /// sharing no terms with the query get a 0 entry rather than being
    /// dropped.
    pub fn score(&self, query: &str) -> Vec<(usize, f64)> {
        let query_tokens = Self::tokenize(query);
        let mut scores: Vec<(usize, f64)> = Vec::with_capacity(self.n);

        for (idx, doc) in self.corpus.iter().enumerate() {
            let doc_len = self.doc_lengths[idx] as f64;
            let mut term_freqs: HashMap<&str, usize> = HashMap::new();
            for word in doc {
                *term_freqs.entry(word.as_str()).or_insert(0) += 1;
            }

            let mut score = 0.0;
            for token in &query_tokens {
                if let Some(idf) = self.idf.get(token.as_str()) {
                    let tf = term_freqs.get(token.as_str()).copied().unwrap_or(0) as f64;
                    let numerator = tf * (self.k1 + 1.0);
                    let denominator =
                        tf + self.k1 * (1.0 - self.b + self.b * doc_len / self.avgdl);
                    score += idf * (numerator / denominator);
                }
            }

            scores.push((idx, score));
        }

        // Stable sort: equal scores stay in document order, so output is
        // deterministic for identical input.
        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scores
    }

    /// Number of documents the ranker was fitted on.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}
