/*!
 * Common test utilities for the subcorpus test suite
 */

use std::path::PathBuf;
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample subtitle file for testing.
/// Every entry is a complete sentence, so stripping it yields three lines.
pub fn create_test_subtitle(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = r#"1
00:00:01,000 --> 00:00:04,000
This is a test subtitle.

2
00:00:05,000 --> 00:00:09,000
It contains multiple entries.

3
00:00:10,000 --> 00:00:14,000
For testing purposes.
"#;
    create_test_file(dir, filename, content)
}

/// Creates a subtitle file whose middle entry is in ALL CAPS, which marks
/// the whole document as malformed
pub fn create_rejected_subtitle(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = r#"1
00:00:01,000 --> 00:00:04,000
The evidence pointed one way.

2
00:00:05,000 --> 00:00:09,000
THE KILLER RETURNS

3
00:00:10,000 --> 00:00:14,000
Nobody saw it coming.
"#;
    create_test_file(dir, filename, content)
}

/// Creates a pool file with one sentence per line
pub fn create_test_pool(dir: &PathBuf, filename: &str, sentences: &[&str]) -> Result<PathBuf> {
    let mut content = String::new();
    for sentence in sentences {
        content.push_str(sentence);
        content.push('\n');
    }
    create_test_file(dir, filename, &content)
}
