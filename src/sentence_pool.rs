use std::path::Path;
use anyhow::Result;
use log::debug;
use rand::Rng;

use crate::errors::SampleError;
use crate::file_utils::FileManager;
use crate::sampler;

// @module: Persisted sentence pool and sampling entry points

// @struct: In-memory view of the flat sentence pool file
#[derive(Debug)]
pub struct SentencePool {
    // @field: One sentence per pool file line, in file order
    sentences: Vec<String>,
}

impl SentencePool {
    /// Create an empty pool
    pub fn new() -> Self {
        SentencePool { sentences: Vec::new() }
    }

    /// Create a pool from already extracted sentences
    pub fn from_sentences(sentences: Vec<String>) -> Self {
        SentencePool { sentences }
    }

    /// Add one sentence to the pool
    pub fn push(&mut self, sentence: String) {
        self.sentences.push(sentence);
    }

    /// Add a batch of sentences to the pool
    pub fn extend(&mut self, sentences: Vec<String>) {
        self.sentences.extend(sentences);
    }

    /// Load a pool from its flat file, one sentence per line.
    ///
    /// Lines are kept exactly as stored so the file round-trips; the pool
    /// file is the only persisted artifact and is never rewritten, only
    /// appended to.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = FileManager::read_to_string(&path)?;
        let sentences: Vec<String> = content.lines().map(|line| line.to_string()).collect();

        debug!("Loaded {} sentences from {:?}", sentences.len(), path.as_ref());

        Ok(SentencePool { sentences })
    }

    /// Append freshly extracted sentences to a pool file, creating it if
    /// needed. Existing content is left untouched.
    pub fn append_to_file<P: AsRef<Path>>(path: P, sentences: &[String]) -> Result<()> {
        FileManager::append_lines(&path, sentences)?;

        debug!("Appended {} sentences to {:?}", sentences.len(), path.as_ref());

        Ok(())
    }

    /// Number of sentences in the pool
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the pool holds no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Borrow the pooled sentences
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Pick one random sentence whose byte length fits the window
    pub fn pick<R: Rng + ?Sized>(&self, min: i64, max: i64, rng: &mut R) -> Result<String, SampleError> {
        sampler::pick(&self.sentences, min, max, rng)
    }

    /// Generate a random paragraph whose byte length fits the window
    pub fn generate<R: Rng + ?Sized>(&self, min: i64, max: i64, rng: &mut R) -> Result<String, SampleError> {
        sampler::generate(&self.sentences, min, max, rng)
    }
}

impl Default for SentencePool {
    fn default() -> Self {
        Self::new()
    }
}
