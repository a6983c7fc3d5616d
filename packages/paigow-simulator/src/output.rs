//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::metrics::{CsvSummaryRow, GameMetrics};
use crate::types::OutputFormat;

pub struct OutputWriter {
    jsonl_writer: Option<BufWriter<File>>,
    csv_writer: csv::Writer<BufWriter<File>>,
    jsonl_path: Option<PathBuf>,
    csv_path: PathBuf,
}

/// Refuses to open a file that already exists.
fn create_fresh(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

/// `simulation_<UTC timestamp>`, suffixed with a counter when an earlier run
/// already left files under that name.
fn run_stem(dir: &Path, format: &OutputFormat) -> String {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)
        .unwrap_or_else(|_| "unknown".to_string())
        .replace(':', "-");
    let base = format!("simulation_{timestamp}");
    let taken = |stem: &str| {
        dir.join(format!("{stem}_summary.csv")).exists()
            || (matches!(format, OutputFormat::Jsonl) && dir.join(format!("{stem}.jsonl")).exists())
    };
    if !taken(&base) {
        return base;
    }
    (1u32..)
        .map(|n| format!("{base}_{n}"))
        .find(|stem| !taken(stem))
        .unwrap_or_else(|| base.clone())
}

impl OutputWriter {
    pub fn new(output_dir: &str, format: &OutputFormat) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let stem = run_stem(dir, format);

        let (jsonl_writer, jsonl_path) = match format {
            OutputFormat::Jsonl => {
                let path = dir.join(format!("{stem}.jsonl"));
                (Some(BufWriter::new(create_fresh(&path)?)), Some(path))
            }
            OutputFormat::Csv => (None, None),
        };

        // The summary is written for every format; serialize() emits the header.
        let csv_path = dir.join(format!("{stem}_summary.csv"));
        let csv_writer = csv::Writer::from_writer(BufWriter::new(create_fresh(&csv_path)?));

        Ok(Self {
            jsonl_writer,
            csv_writer,
            jsonl_path,
            csv_path,
        })
    }

    pub fn write_game(&mut self, metrics: &GameMetrics) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(ref mut writer) = self.jsonl_writer {
            let json = serde_json::to_string(metrics)?;
            writeln!(writer, "{json}")?;
        }

        let row: CsvSummaryRow = metrics.into();
        self.csv_writer.serialize(&row)?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(ref mut writer) = self.jsonl_writer {
            writer.flush()?;
        }
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (Option<&PathBuf>, &PathBuf) {
        (self.jsonl_path.as_ref(), &self.csv_path)
    }
}
