//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::{csv_header, csv_record, GameMetrics};
use crate::types::OutputFormat;

pub struct OutputWriter {
    format: OutputFormat,
    games_writer: Option<Box<dyn Write + Send>>,
    csv_writer: Option<csv::Writer<BufWriter<File>>>,
    /// Games held back for the single JSON array.
    pending: Vec<serde_json::Value>,
    games_path: PathBuf,
    csv_path: PathBuf,
}

impl OutputWriter {
    pub fn new(
        output_dir: &str,
        format: &OutputFormat,
        compress: bool,
        seats: usize,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let extension = match format {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        };
        let filename = format!("simulation_{timestamp}.{extension}");
        let (games_writer, games_path): (Box<dyn Write + Send>, PathBuf) = if compress {
            let gz_path = dir.join(format!("{filename}.gz"));
            let writer = BufWriter::new(GzEncoder::new(
                File::create(&gz_path)?,
                Compression::default(),
            ));
            (Box::new(writer), gz_path)
        } else {
            let path = dir.join(&filename);
            (Box::new(BufWriter::new(create_truncated(&path)?)), path)
        };

        // The CSV summary is always written uncompressed.
        let csv_path = dir.join(format!("simulation_{timestamp}_summary.csv"));
        let mut csv_writer = csv::Writer::from_writer(BufWriter::new(create_truncated(&csv_path)?));
        csv_writer.write_record(csv_header(seats))?;

        Ok(Self {
            format: format.clone(),
            games_writer: Some(games_writer),
            csv_writer: Some(csv_writer),
            pending: Vec::new(),
            games_path,
            csv_path,
        })
    }

    pub fn write_game(&mut self, metrics: &GameMetrics) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Jsonl => {
                if let Some(ref mut writer) = self.games_writer {
                    let json = serde_json::to_string(metrics)?;
                    writeln!(writer, "{json}")?;
                    writer.flush()?;
                }
            }
            OutputFormat::Json => self.pending.push(serde_json::to_value(metrics)?),
        }

        if let Some(ref mut writer) = self.csv_writer {
            writer.write_record(csv_record(metrics))?;
            writer.flush()?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(mut writer) = self.games_writer.take() {
            if matches!(self.format, OutputFormat::Json) {
                serde_json::to_writer_pretty(&mut writer, &self.pending)?;
                writeln!(writer)?;
            }
            writer.flush()?;
            // Dropping the writer finishes the gzip stream.
            drop(writer);
        }
        if let Some(ref mut writer) = self.csv_writer {
            writer.flush()?;
        }
        Ok(())
    }

    pub fn output_paths(&self) -> (&Path, &Path) {
        (&self.games_path, &self.csv_path)
    }
}

fn create_truncated(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}
