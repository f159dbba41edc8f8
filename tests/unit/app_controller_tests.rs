/*!
 * Tests for application controller functionality
 */

use std::fs;
use anyhow::Result;
use subcorpus::app_config::{Config, PickConfig};
use subcorpus::app_controller::Controller;
use crate::common;

/// Build a config whose pool file lives inside the given directory
fn config_with_pool(pool_file: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.pool_file = pool_file.to_string_lossy().to_string();
    config
}

/// Test creating a controller with the default configuration
#[test]
fn test_new_for_test_shouldCreateController() -> Result<()> {
    let controller = Controller::new_for_test()?;
    assert!(controller.is_initialized());
    Ok(())
}

/// Test creating a controller with a specific configuration
#[test]
fn test_with_config_withValidConfig_shouldCreateController() -> Result<()> {
    let config = Config::default();
    let controller = Controller::with_config(config)?;
    assert!(controller.is_initialized());
    Ok(())
}

/// Test stripping a directory of subtitle files into the configured pool
#[test]
fn test_run_strip_withSubtitleDirectory_shouldAppendToPool() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_subtitle(&dir, "one.srt")?;
    common::create_test_subtitle(&dir, "two.srt")?;

    let pool_file = temp_dir.path().join("pool.txt");
    let controller = Controller::with_config(config_with_pool(&pool_file))?;

    let (sentence_count, error_count) = controller.run_strip(&[dir], None)?;

    assert_eq!(sentence_count, 6);
    assert_eq!(error_count, 0);

    // The pool file holds one sentence per line
    let content = fs::read_to_string(&pool_file)?;
    assert_eq!(content.lines().count(), 6);

    Ok(())
}

/// Test that an explicit output path wins over the configured pool
#[test]
fn test_run_strip_withExplicitOutput_shouldWriteThere() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let subtitle = common::create_test_subtitle(&dir, "one.srt")?;

    let configured_pool = temp_dir.path().join("configured.txt");
    let explicit_pool = temp_dir.path().join("explicit.txt");
    let controller = Controller::with_config(config_with_pool(&configured_pool))?;

    controller.run_strip(&[subtitle], Some(explicit_pool.as_path()))?;

    assert!(explicit_pool.exists());
    assert!(!configured_pool.exists());

    Ok(())
}

/// Test that a rejected subtitle file is counted but does not abort the batch
#[test]
fn test_run_strip_withRejectedFile_shouldCountError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_subtitle(&dir, "good.srt")?;
    common::create_rejected_subtitle(&dir, "rejected.srt")?;

    let pool_file = temp_dir.path().join("pool.txt");
    let controller = Controller::with_config(config_with_pool(&pool_file))?;

    let (sentence_count, error_count) = controller.run_strip(&[dir], None)?;

    assert_eq!(sentence_count, 3);
    assert_eq!(error_count, 1);

    // Nothing from the rejected document leaks into the pool
    let content = fs::read_to_string(&pool_file)?;
    assert_eq!(content.lines().count(), 3);
    assert!(!content.contains("KILLER"));

    Ok(())
}

/// Test that a missing input path is an error
#[test]
fn test_run_strip_withMissingInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let pool_file = temp_dir.path().join("pool.txt");
    let controller = Controller::with_config(config_with_pool(&pool_file))?;

    let result = controller.run_strip(&[temp_dir.path().join("missing.srt")], None);

    assert!(result.is_err());

    Ok(())
}

/// Test that a directory without subtitle files is an error
#[test]
fn test_run_strip_withNoSubtitles_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(&dir, "notes.txt", "not a subtitle")?;

    let pool_file = temp_dir.path().join("pool.txt");
    let controller = Controller::with_config(config_with_pool(&pool_file))?;

    let result = controller.run_strip(&[dir], None);

    assert!(result.is_err());

    Ok(())
}

/// Test picking from an explicit pool file
#[test]
fn test_run_pick_withPoolFile_shouldReturnSentence() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let sentences = [
        "The jury returned after lunch.",
        "Nobody expected the verdict.",
    ];
    let pool_file = common::create_test_pool(&temp_dir.path().to_path_buf(), "pool.txt", &sentences)?;

    let controller = Controller::new_for_test()?;
    let picked = controller.run_pick(Some(pool_file.as_path()), Some(-1), Some(-1))?;

    assert!(sentences.contains(&picked.as_str()));

    Ok(())
}

/// Test that picking from a missing pool file fails
#[test]
fn test_run_pick_withMissingPool_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let pool_file = temp_dir.path().join("missing.txt");
    let controller = Controller::with_config(config_with_pool(&pool_file))?;

    let result = controller.run_pick(None, Some(-1), Some(-1));

    assert!(result.is_err());

    Ok(())
}

/// Test that unset bounds fall back to the configured pick window
#[test]
fn test_run_pick_withConfiguredDefaults_shouldUseConfigWindow() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let pool_file = common::create_test_pool(&temp_dir.path().to_path_buf(), "pool.txt", &[
        "Too small for the window.",
        "This sentence is the only one that can fall inside the configured window.",
    ])?;

    let mut config = config_with_pool(&pool_file);
    config.pick = PickConfig { min_length: 40, max_length: 100 };
    let controller = Controller::with_config(config)?;

    // Only one sentence fits, so the draw is deterministic
    let picked = controller.run_pick(None, None, None)?;

    assert_eq!(picked, "This sentence is the only one that can fall inside the configured window.");

    Ok(())
}

/// Test generating a paragraph from an explicit pool file
#[test]
fn test_run_generate_withPoolFile_shouldRespectBounds() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let pool_file = common::create_test_pool(&temp_dir.path().to_path_buf(), "pool.txt", &[
        "The jury returned after lunch.",
        "Nobody expected the verdict.",
        "The witness changed her story.",
    ])?;

    let controller = Controller::new_for_test()?;
    let paragraph = controller.run_generate(Some(pool_file.as_path()), Some(20), Some(280))?;

    assert!(paragraph.len() > 20 && paragraph.len() <= 280);

    Ok(())
}
