// mod.rs - JSONL report writer

use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::core::DistributionMap;

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent).map_err(|e| {
            format!(
                "Failed to create parent directory '{}': {}",
                parent.display(),
                e
            )
        })?;
    }
    Ok(())
}

/// One report line: the record id followed by its summary values
#[derive(Serialize)]
struct RecordReport<'a> {
    id: &'a str,
    #[serde(flatten)]
    distribution: &'a DistributionMap,
}

/// Render a record's distribution as a single JSON object (no trailing newline)
pub fn to_json_line(id: &str, distribution: &DistributionMap) -> Result<String, String> {
    serde_json::to_string(&RecordReport { id, distribution })
        .map_err(|e| format!("Failed to serialize record '{}': {}", id, e))
}

/// Line-delimited JSON writer, one object per record
pub struct ReportWriter {
    writer: Box<dyn Write>,
    destination: String,
    records_written: usize,
}

impl ReportWriter {
    /// Open the report destination; `None` or `"stdout"` writes to standard output
    pub fn create(output: Option<&str>) -> Result<Self, String> {
        match output {
            None | Some("stdout") => Ok(Self::from_writer(
                Box::new(BufWriter::new(io::stdout())),
                "stdout",
            )),
            Some(file_path) => {
                ensure_parent_dir(file_path)?;
                let file = File::create(file_path)
                    .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
                Ok(Self::from_writer(Box::new(BufWriter::new(file)), file_path))
            }
        }
    }

    pub fn from_writer(writer: Box<dyn Write>, destination: &str) -> Self {
        Self {
            writer,
            destination: destination.to_string(),
            records_written: 0,
        }
    }

    pub fn write_record(&mut self, id: &str, distribution: &DistributionMap) -> Result<(), String> {
        let line = to_json_line(id, distribution)?;
        writeln!(self.writer, "{}", line).map_err(|e| format!("Write error: {}", e))?;
        self.records_written += 1;
        Ok(())
    }

    pub fn records_written(&self) -> usize {
        self.records_written
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Flush buffered lines and return the number of records written
    pub fn finish(mut self) -> Result<usize, String> {
        self.writer
            .flush()
            .map_err(|e| format!("Flush error: {}", e))?;
        Ok(self.records_written)
    }
}
