// validation.rs - Input validation utilities

use regex::Regex;

use crate::cli::args::Args;
use crate::core::{contains_rna, ReturnTimeMode};
use crate::data::RecordFilter;

/// Records computed per parallel batch when neither CLI nor config sets it
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

#[derive(Debug)]
pub struct ValidationResult {
    pub k: usize,
    pub input: String,
    pub mode: ReturnTimeMode,
    pub chunk_size: usize,
    pub record_filter: RecordFilter,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    if args.positional.len() > 3 {
        return Err(format!(
            "Unexpected argument '{}': usage is rtd <k> <input> [<output>]",
            args.positional[3]
        ));
    }

    let k = args.k()?.ok_or("<k> is required")?;
    if k == 0 {
        return Err("k-mer length must be at least 1".to_string());
    }

    let input = args.input().ok_or("<input> is required")?.to_string();
    if !std::path::Path::new(&input).is_file() {
        return Err(format!("Input FASTA file not found: {}", input));
    }

    // Validate mode
    let mode = ReturnTimeMode::from_flags(args.pairwise, args.reverse_complement)
        .map_err(|e| format!("--pairwise and --reverse-complement cannot be combined ({})", e))?;

    let chunk_size = args.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE);
    if chunk_size == 0 {
        return Err("--chunk-size must be at least 1".to_string());
    }
    if args.benchmark && args.benchmark_max_k == 0 {
        return Err("--benchmark-max-k must be at least 1".to_string());
    }
    if let Some(0) = args.threads {
        return Err("--threads must be at least 1".to_string());
    }

    // Compile regex patterns
    let include = if let Some(pattern) = &args.include_records {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid include_records regex: {}", e))?)
    } else {
        None
    };

    let exclude = if let Some(pattern) = &args.exclude_records {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid exclude_records regex: {}", e))?)
    } else {
        None
    };

    Ok(ValidationResult {
        k,
        input,
        mode,
        chunk_size,
        record_filter: RecordFilter::new(include, exclude),
    })
}

/// Check that a record can be processed in the selected mode.
///
/// Reverse complements are only defined for DNA, so records carrying U are
/// rejected here before they reach the engine.
pub fn validate_record(sequence: &[u8], mode: ReturnTimeMode) -> Result<(), String> {
    if mode == ReturnTimeMode::ReverseComplement && contains_rna(sequence) {
        return Err(
            "reverse complement return times are undefined for RNA sequences (found base U)"
                .to_string(),
        );
    }
    Ok(())
}
