use anyhow::Result;
use log::{error, warn, info};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};
use crate::app_config::Config;
use crate::sentence_extractor::SentenceExtractor;
use crate::sentence_pool::SentencePool;
use crate::file_utils::{FileManager, FileType};

// @module: Application controller for corpus building and sampling

/// Main application controller for the sentence corpus workflow
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let controller = Self {
            config,
        };

        Ok(controller)
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.pool_file.is_empty()
    }

    /// Strip sentences out of a set of subtitle inputs and append them to
    /// the pool file. Inputs can be single SRT files or directories that are
    /// searched recursively. Returns the number of appended sentences and
    /// the number of files that failed.
    ///
    /// Files that fail to parse or get rejected are logged and skipped so
    /// one bad source never aborts the batch.
    pub fn run_strip(&self, inputs: &[PathBuf], output: Option<&Path>) -> Result<(usize, usize)> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        let subtitle_files = self.collect_subtitle_files(inputs)?;

        // If no subtitle files found, return error
        if subtitle_files.is_empty() {
            return Err(anyhow::anyhow!("No subtitle files found in the given inputs"));
        }

        // Create a progress bar for batch processing
        let progress_bar = ProgressBar::new(subtitle_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message("Stripping subtitles");

        // Track success and failure counts
        let mut all_sentences = Vec::new();
        let mut success_count = 0;
        let mut error_count = 0;

        // Process each subtitle file
        for subtitle_file in subtitle_files.iter() {
            // Get the file name for display
            let file_name = subtitle_file.file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());

            // Update the progress bar to show current file
            progress_bar.set_message(format!("Stripping: {}", file_name));

            match SentenceExtractor::extract_from_file(subtitle_file) {
                Ok(sentences) => {
                    all_sentences.extend(sentences);
                    success_count += 1;
                },
                Err(e) => {
                    error!("Error processing file {}: {}", file_name, e);
                    error_count += 1;
                }
            }

            progress_bar.inc(1);
        }

        progress_bar.finish_with_message("Stripping complete");

        // Append the whole batch in one pass
        let pool_path = self.pool_path(output);
        SentencePool::append_to_file(&pool_path, &all_sentences)?;

        // Calculate and display the total elapsed time
        let duration = start_time.elapsed();

        // Give summary results - important for batch operations
        info!("Stripping completed: {} sentences from {} files, {} errors - Duration: {}",
             all_sentences.len(), success_count, error_count,
             Self::format_duration(duration));

        Ok((all_sentences.len(), error_count))
    }

    /// Pick one random sentence from the pool file.
    /// Bounds left unset fall back to the configured pick window.
    pub fn run_pick(&self, pool_file: Option<&Path>, min: Option<i64>, max: Option<i64>) -> Result<String> {
        let pool_path = self.pool_path(pool_file);

        if !FileManager::file_exists(&pool_path) {
            return Err(anyhow::anyhow!("Pool file does not exist: {:?}", pool_path));
        }

        let pool = SentencePool::load(&pool_path)?;

        let min = min.unwrap_or(self.config.pick.min_length);
        let max = max.unwrap_or(self.config.pick.max_length);

        let mut rng = rand::rng();
        let sentence = pool.pick(min, max, &mut rng)?;

        Ok(sentence)
    }

    /// Generate a random paragraph from the pool file.
    /// Bounds left unset fall back to the configured generate window.
    pub fn run_generate(&self, pool_file: Option<&Path>, min: Option<i64>, max: Option<i64>) -> Result<String> {
        let pool_path = self.pool_path(pool_file);

        if !FileManager::file_exists(&pool_path) {
            return Err(anyhow::anyhow!("Pool file does not exist: {:?}", pool_path));
        }

        let pool = SentencePool::load(&pool_path)?;

        let min = min.unwrap_or(self.config.generate.min_length);
        let max = max.unwrap_or(self.config.generate.max_length);

        let mut rng = rand::rng();
        let paragraph = pool.generate(min, max, &mut rng)?;

        Ok(paragraph)
    }

    /// Resolve the pool file path, preferring an explicit argument over the
    /// configured default
    fn pool_path(&self, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(&self.config.pool_file),
        }
    }

    /// Expand the given inputs into a flat list of subtitle files.
    /// Directories are searched recursively for SRT files; unsupported
    /// single files are skipped with a warning.
    fn collect_subtitle_files(&self, inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut subtitle_files = Vec::new();

        for input in inputs {
            if FileManager::dir_exists(input) {
                let mut files = FileManager::find_files(input, "srt")?;
                subtitle_files.append(&mut files);
            } else if FileManager::file_exists(input) {
                match FileManager::detect_file_type(input)? {
                    FileType::Subtitle => subtitle_files.push(input.clone()),
                    FileType::Unknown => {
                        warn!("Skipping unsupported file: {:?}", input);
                    }
                }
            } else {
                return Err(anyhow::anyhow!("Input does not exist: {:?}", input));
            }
        }

        Ok(subtitle_files)
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
