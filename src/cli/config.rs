// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub k: Option<usize>,
    pub input: Option<String>,
    pub output: Option<String>,

    // Return time mode: same, pairwise, reverse-complement
    pub mode: Option<String>,

    // Performance
    pub threads: Option<usize>,
    pub chunk_size: Option<usize>,

    // Record filtering
    pub include_records: Option<String>,
    pub exclude_records: Option<String>,

    // Flags
    pub skip_invalid: Option<bool>,
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config = Self::from_toml(&content)
            .map_err(|e| format!("{} ('{}')", e, path.display()))?;

        eprintln!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# rtd.toml - Configuration file for rtd
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# k-mer length
k = 3

# Input FASTA file
input = "/path/to/sequences.fasta"

# Output JSONL file (omit or use "stdout" to write to standard output)
output = "rtd.jsonl"

# =============================================================================
# RETURN TIME MODE
# =============================================================================

# same: distance from each k-mer to its own next occurrence
# pairwise: distance from each k-mer to the next occurrence of every k-mer
# reverse-complement: distance to the next reverse complement (DNA only)
mode = "same"

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
threads = 8

# Records processed per parallel batch
chunk_size = 1000

# =============================================================================
# RECORD FILTERING
# =============================================================================

# Include only records whose id matches regex pattern
# include_records = "chr.*"

# Exclude records whose id matches regex pattern
# exclude_records = "scaffold.*"

# =============================================================================
# FLAGS
# =============================================================================

# Skip records that fail validation instead of aborting
skip_invalid = false

# Validate inputs without computation (dry run)
dry_run = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config = Config::from_toml(&Config::generate_sample()).unwrap();
        assert_eq!(config.k, Some(3));
        assert_eq!(config.mode.as_deref(), Some("same"));
        assert_eq!(config.threads, Some(8));
        assert_eq!(config.include_records, None);
        assert_eq!(config.skip_invalid, Some(false));
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml("k = 5\nmode = \"pairwise\"\n").unwrap();
        assert_eq!(config.k, Some(5));
        assert_eq!(config.input, None);
        assert!(Config::from_toml("k = \"five\"").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rtd.toml");
        std::fs::write(&path, "k = 4\ninput = \"reads.fa\"\nmode = \"rc\"\n").unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.k, Some(4));
        assert_eq!(config.input.as_deref(), Some("reads.fa"));
        assert_eq!(config.mode.as_deref(), Some("rc"));
        assert!(Config::from_file(dir.path().join("missing.toml")).is_err());
    }
}
