use std::fs;
use std::path::Path;
use regex::Regex;
use once_cell::sync::Lazy;
use log::{debug, warn};

use crate::errors::ExtractError;
use crate::subtitle_processor::SubtitleCollection;

// @module: Sentence reconstruction from subtitle entries

/// Minimum byte length a cleaned line must exceed to take part in
/// sentence reconstruction. Shorter lines are usually broken-off titles
/// or interjections and would produce false sentence starts.
pub const MINIMUM_LINE_LENGTH: usize = 8;

// @const: Noise stripped from the front of a cleaned line: a lone speaker
// tag ("DIANNE M. ANDERSON:"), a speaker prefix ("Narrator: They ran"),
// a dialogue dash, or a bracketed stage direction ("[sirens]")
static LINE_NOISE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+:$|.+: |-|\[.+\])").unwrap()
});

// @const: Signatures of malformed subtitle sources: residual narrator
// tags, lines with no lowercase at all, or leading markup tags
static MALFORMED_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(>> Narrator:|Narrator:|^[^a-z]+$|</?.+?>)").unwrap()
});

// @const: A line can start a sentence if it opens with a capital letter or
// a digit and does not end with a double quote
static SENTENCE_START_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[A-Z0-9].+[^"]$"#).unwrap()
});

// @const: A line (or accumulated run of lines) ends a sentence on the
// usual terminal punctuation
static SENTENCE_END_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(\?|!|\.|")$"#).unwrap()
});

// @struct: Extracts complete sentences from parsed subtitle documents
pub struct SentenceExtractor;

impl SentenceExtractor {
    /// Extract complete sentences from a parsed subtitle collection.
    ///
    /// Each entry's display lines are joined with a single space and the
    /// usual subtitle noise is stripped from the front. A single line that
    /// still looks malformed afterwards rejects the whole document: such
    /// sources tend to corrupt every sentence rebuilt from the same file,
    /// so nothing is salvaged from them.
    ///
    /// Lengths here and in the sampling window are byte lengths.
    pub fn extract(collection: &SubtitleCollection) -> Result<Vec<String>, ExtractError> {
        let mut lines = Vec::new();

        for entry in &collection.entries {
            let joined = entry.text.replace('\n', " ");
            let cleaned = LINE_NOISE_REGEX.replace(&joined, "").to_string();

            // Malformed check comes before the length filter: even a short
            // offender like "42" discards the document
            if MALFORMED_LINE_REGEX.is_match(&cleaned) {
                return Err(ExtractError::DocumentRejected { line: cleaned });
            }

            if cleaned.len() > MINIMUM_LINE_LENGTH {
                lines.push(cleaned);
            }
        }

        let mut sentences = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            if !SENTENCE_START_REGEX.is_match(line) {
                continue;
            }

            if SENTENCE_END_REGEX.is_match(line) {
                sentences.push(line.clone());
                continue;
            }

            // Greedily append following lines until the accumulated text is
            // terminal. Exhausting the lines first discards the fragment.
            // The outer scan still resumes at the next line, so overlapping
            // spans are possible and kept.
            let mut current = line.clone();
            for next in &lines[index + 1..] {
                current.push(' ');
                current.push_str(next);

                if SENTENCE_END_REGEX.is_match(&current) {
                    sentences.push(current);
                    break;
                }
            }
        }

        debug!("Extracted {} sentences from {} entries in {:?}",
               sentences.len(), collection.entries.len(), collection.source_file);

        Ok(sentences)
    }

    /// Extract sentences straight from an SRT file on disk
    pub fn extract_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ExtractError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)?;
        let entries = SubtitleCollection::parse_srt_string(&content)
            .map_err(|e| ExtractError::Parse(e.to_string()))?;

        let collection = SubtitleCollection {
            source_file: path.to_path_buf(),
            entries,
        };

        Self::extract(&collection)
    }

    /// Extract sentences from a batch of SRT files.
    ///
    /// Files that fail to parse or get rejected are logged and skipped;
    /// the remaining files still contribute their sentences.
    pub fn extract_all<P: AsRef<Path>>(paths: &[P]) -> Vec<String> {
        let mut all = Vec::new();

        for path in paths {
            match Self::extract_from_file(path) {
                Ok(sentences) => all.extend(sentences),
                Err(e) => {
                    warn!("Skipping {:?}: {}", path.as_ref(), e);
                }
            }
        }

        all
    }
}
