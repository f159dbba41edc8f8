/*!
 * Integration tests for the corpus building and sampling workflow
 */

use std::fs;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

use subcorpus::app_config::Config;
use subcorpus::app_controller::Controller;
use subcorpus::sentence_pool::SentencePool;
use crate::common;

/// Test the full strip, pick and generate cycle over real files
#[test]
fn test_corpus_workflow_withFullProcess_shouldSucceed() -> Result<()> {
    // Create a temporary directory for testing
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    // 1. Write two subtitle files, one of them with a split sentence and
    //    a speaker prefix that must be cleaned up
    common::create_test_subtitle(&dir, "clean.srt")?;
    let split_content = r#"1
00:00:01,000 --> 00:00:04,000
Narrator: The trial lasted three weeks.

2
00:00:05,000 --> 00:00:09,000
The detective opened the door

3
00:00:10,000 --> 00:00:14,000
and found the missing evidence.
"#;
    common::create_test_file(&dir, "split.srt", split_content)?;

    // 2. Strip the whole directory into a pool file
    let pool_file = temp_dir.path().join("pool.txt");
    let mut config = Config::default();
    config.pool_file = pool_file.to_string_lossy().to_string();
    let controller = Controller::with_config(config)?;

    let (sentence_count, error_count) = controller.run_strip(&[dir], None)?;

    assert_eq!(error_count, 0, "No file should fail");
    assert_eq!(sentence_count, 5, "Three clean sentences plus two from the split file");

    // 3. Verify the cleaned and reconstructed sentences landed in the pool
    let content = fs::read_to_string(&pool_file)?;
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines.contains(&"The trial lasted three weeks."),
            "Speaker prefix should be stripped");
    assert!(lines.contains(&"The detective opened the door and found the missing evidence."),
            "Split sentence should be reconstructed");

    // 4. Load the pool and pick a single sentence inside a window
    let pool = SentencePool::load(&pool_file)?;
    assert_eq!(pool.len(), 5);

    let mut rng = StdRng::seed_from_u64(42);
    let picked = pool.pick(20, 120, &mut rng)?;
    assert!(picked.len() > 20 && picked.len() < 120);
    assert!(pool.sentences().contains(&picked));

    // 5. Generate a paragraph through the controller entry point
    let paragraph = controller.run_generate(None, Some(40), Some(280))?;
    assert!(paragraph.len() > 40 && paragraph.len() <= 280,
            "Paragraph of {} bytes should fall inside the window", paragraph.len());

    Ok(())
}

/// Test that a rejected source contributes nothing to the pool
#[test]
fn test_corpus_workflow_withRejectedSource_shouldNotPolluteThePool() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_subtitle(&dir, "clean.srt")?;
    common::create_rejected_subtitle(&dir, "allcaps.srt")?;

    let pool_file = temp_dir.path().join("pool.txt");
    let mut config = Config::default();
    config.pool_file = pool_file.to_string_lossy().to_string();
    let controller = Controller::with_config(config)?;

    let (sentence_count, error_count) = controller.run_strip(&[dir], None)?;

    assert_eq!(sentence_count, 3);
    assert_eq!(error_count, 1);

    // Even the well-formed entries of the rejected file stay out
    let content = fs::read_to_string(&pool_file)?;
    assert!(!content.contains("The evidence pointed one way."));
    assert!(!content.contains("KILLER"));

    Ok(())
}

/// Test that repeated stripping accumulates instead of overwriting
#[test]
fn test_corpus_workflow_withRepeatedStrip_shouldAccumulate() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let subtitle = common::create_test_subtitle(&dir, "episode.srt")?;

    let pool_file = temp_dir.path().join("pool.txt");
    let mut config = Config::default();
    config.pool_file = pool_file.to_string_lossy().to_string();
    let controller = Controller::with_config(config)?;

    controller.run_strip(&[subtitle.clone()], None)?;
    controller.run_strip(&[subtitle], None)?;

    let content = fs::read_to_string(&pool_file)?;
    assert_eq!(content.lines().count(), 6, "Second strip should append, not replace");

    Ok(())
}
