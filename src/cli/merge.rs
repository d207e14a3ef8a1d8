// merge.rs - Merge configuration file with CLI arguments

use std::str::FromStr;

use crate::cli::{Args, Config};
use crate::core::ReturnTimeMode;

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Result<Self, String> {
        // Input/Output: config values fill the positional slots left empty
        let slots = [config.k.map(|k| k.to_string()), config.input, config.output];
        for value in slots.into_iter().skip(self.positional.len()) {
            match value {
                Some(value) => self.positional.push(value),
                None => break,
            }
        }

        // Mode (only when neither switch was given on the command line)
        if !self.pairwise && !self.reverse_complement {
            if let Some(mode) = config.mode {
                match ReturnTimeMode::from_str(&mode)? {
                    ReturnTimeMode::Same => {}
                    ReturnTimeMode::Pairwise => self.pairwise = true,
                    ReturnTimeMode::ReverseComplement => self.reverse_complement = true,
                }
            }
        }

        // Performance (only override defaults)
        if self.threads.is_none() {
            self.threads = config.threads;
        }
        if self.chunk_size.is_none() {
            self.chunk_size = config.chunk_size;
        }

        // Record filtering
        if self.include_records.is_none() {
            self.include_records = config.include_records;
        }
        if self.exclude_records.is_none() {
            self.exclude_records = config.exclude_records;
        }

        // Flags (config only sets if not explicitly set)
        if !self.skip_invalid && config.skip_invalid.unwrap_or(false) {
            self.skip_invalid = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        Ok(self)
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        self.merge_with_config(config)
    }
}
