// mod.rs - Input data module

pub mod fasta;

// Re-export main types for convenience
pub use fasta::{read_records, FastaRecord, FastaRecords, RecordFilter};
