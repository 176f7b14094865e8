//! # Mood Sorter
//!
//! Labels text and audio files and files them into label directories.

use super::files::{
    available_path, build_output_path, is_same_file, iter_input_files, move_or_copy, FileKind,
};
use crate::config::SorterSettings;
use crate::error::{MoodError, Result};
use crate::sentiment::{AnalysisResult, SentimentAnalyzer, SentimentLabel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Report file written into the output root
pub const REPORT_FILE_NAME: &str = "datamood-report.json";

/// Speech-to-text collaborator.
///
/// Implementations wrap whatever recognizer the deployment has; the sorter
/// only needs the recognized text.
pub trait Transcriber: Send + Sync {
    fn transcribe(&self, path: &Path) -> Result<String>;
}

/// Outcome of analyzing one file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAnalysis {
    pub path: PathBuf,
    pub kind: FileKind,
    /// `None` for unknown files
    pub label: Option<SentimentLabel>,
    /// Directory name the file is sorted into
    pub bucket: String,
    /// Recognized text of an audio file
    pub transcript: Option<String>,
    pub result: Option<AnalysisResult>,
    /// Why an audio file fell back to neutral
    pub note: Option<String>,
}

impl FileAnalysis {
    fn labelled(path: &Path, kind: FileKind, result: AnalysisResult) -> Self {
        Self {
            path: path.to_path_buf(),
            kind,
            label: Some(result.label),
            bucket: result.label.dir_name().to_string(),
            transcript: None,
            result: Some(result),
            note: None,
        }
    }

    fn neutral_fallback(path: &Path, note: String) -> Self {
        Self {
            path: path.to_path_buf(),
            kind: FileKind::Audio,
            label: Some(SentimentLabel::Neutral),
            bucket: SentimentLabel::Neutral.dir_name().to_string(),
            transcript: None,
            result: None,
            note: Some(note),
        }
    }
}

/// One sorted file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortRecord {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub kind: FileKind,
    pub bucket: String,
    pub label: Option<SentimentLabel>,
    pub percentage: Option<f64>,
    pub moved: bool,
    pub sorted_at: DateTime<Utc>,
}

/// A file that could not be sorted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Result of sorting a file or directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortSummary {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub records: Vec<SortRecord>,
    pub failures: Vec<SortFailure>,
    /// Files per bucket
    pub counts: BTreeMap<String, usize>,
}

impl SortSummary {
    pub fn sorted(&self) -> usize {
        self.records.len()
    }

    pub fn count(&self, bucket: &str) -> usize {
        self.counts.get(bucket).copied().unwrap_or(0)
    }

    /// Write the summary as pretty JSON into `dir`
    pub fn write_report(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir).map_err(|e| MoodError::io(dir, e))?;
        let path = dir.join(REPORT_FILE_NAME);
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| MoodError::Serialize(e.to_string()))?;
        std::fs::write(&path, json).map_err(|e| MoodError::io(&path, e))?;
        Ok(path)
    }
}

/// Analyzes files and sorts them into `output_dir/<label>/`
pub struct MoodSorter {
    analyzer: SentimentAnalyzer,
    transcriber: Option<Box<dyn Transcriber>>,
    settings: SorterSettings,
}

impl Default for MoodSorter {
    fn default() -> Self {
        Self::new(SentimentAnalyzer::new(), SorterSettings::default())
    }
}

impl MoodSorter {
    pub fn new(analyzer: SentimentAnalyzer, settings: SorterSettings) -> Self {
        Self {
            analyzer,
            transcriber: None,
            settings,
        }
    }

    /// Enable audio input
    pub fn with_transcriber(mut self, transcriber: impl Transcriber + 'static) -> Self {
        self.transcriber = Some(Box::new(transcriber));
        self
    }

    pub fn analyzer(&self) -> &SentimentAnalyzer {
        &self.analyzer
    }

    pub fn settings(&self) -> &SorterSettings {
        &self.settings
    }

    /// Analyze a plain string
    pub fn analyze_text(&self, text: &str) -> AnalysisResult {
        self.analyzer.analyze(text)
    }

    /// Analyze one file according to its kind
    pub fn analyze_file(&self, path: &Path) -> Result<FileAnalysis> {
        if !path.is_file() {
            return Err(MoodError::InputNotFound(path.to_path_buf()));
        }

        match FileKind::of(path) {
            FileKind::Text => {
                let text = std::fs::read_to_string(path).map_err(|e| MoodError::io(path, e))?;
                Ok(FileAnalysis::labelled(
                    path,
                    FileKind::Text,
                    self.analyzer.analyze(&text),
                ))
            }
            FileKind::Audio => Ok(self.analyze_audio(path)),
            FileKind::Unknown => {
                warn!(path = %path.display(), "unsupported file type");
                Ok(FileAnalysis {
                    path: path.to_path_buf(),
                    kind: FileKind::Unknown,
                    label: None,
                    bucket: self.settings.unknown_bucket.clone(),
                    transcript: None,
                    result: None,
                    note: None,
                })
            }
        }
    }

    fn analyze_audio(&self, path: &Path) -> FileAnalysis {
        let Some(transcriber) = &self.transcriber else {
            warn!(path = %path.display(), "no transcriber configured, labelling audio neutral");
            return FileAnalysis::neutral_fallback(path, "no transcriber configured".to_string());
        };

        let transcript = match transcriber.transcribe(path) {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                warn!(path = %path.display(), "transcription produced no text");
                return FileAnalysis::neutral_fallback(path, "no speech recognized".to_string());
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "transcription failed");
                return FileAnalysis::neutral_fallback(path, e.to_string());
            }
        };

        let mut analysis =
            FileAnalysis::labelled(path, FileKind::Audio, self.analyzer.analyze(&transcript));
        analysis.transcript = Some(transcript);
        analysis
    }

    /// Analyze `path` and copy or move it into its label directory.
    ///
    /// A name already taken in the bucket gets a numeric suffix, so files
    /// with the same name from different directories are all kept.
    pub fn sort_file(&self, path: &Path, output_root: &Path) -> Result<SortRecord> {
        let analysis = self.analyze_file(path)?;
        let planned = build_output_path(output_root, &analysis.bucket, path);
        if is_same_file(path, &planned) {
            return Err(MoodError::SameFile(path.to_path_buf()));
        }

        let destination = available_path(&planned);
        if destination != planned {
            warn!(
                source = %path.display(),
                taken = %planned.display(),
                destination = %destination.display(),
                "destination name taken, using a suffixed name"
            );
        }
        move_or_copy(path, &destination, self.settings.move_files)?;

        info!(
            source = %path.display(),
            destination = %destination.display(),
            bucket = %analysis.bucket,
            "sorted file"
        );

        Ok(SortRecord {
            source: path.to_path_buf(),
            destination,
            kind: analysis.kind,
            bucket: analysis.bucket,
            label: analysis.label,
            percentage: analysis.result.map(|r| r.percentage),
            moved: self.settings.move_files,
            sorted_at: Utc::now(),
        })
    }

    /// Sort a file or every file below a directory into the configured
    /// output directory. Per-file failures are collected, not fatal.
    ///
    /// Files already below the output directory are skipped, whatever
    /// spelling the input and output paths use.
    pub fn sort_path(&self, input: &Path) -> Result<SortSummary> {
        let output_root = self.settings.output_dir.clone();
        let started_at = Utc::now();
        let files = iter_input_files(input)?;

        let resolved_root = std::fs::canonicalize(&output_root).ok();
        let in_output = |file: &Path| {
            file.starts_with(&output_root)
                || resolved_root.as_ref().is_some_and(|root| {
                    std::fs::canonicalize(file).is_ok_and(|resolved| resolved.starts_with(root))
                })
        };

        let mut records = Vec::new();
        let mut failures = Vec::new();
        let mut counts = BTreeMap::new();

        for file in files.iter().filter(|f| !in_output(f.as_path())) {
            match self.sort_file(file, &output_root) {
                Ok(record) => {
                    *counts.entry(record.bucket.clone()).or_insert(0) += 1;
                    records.push(record);
                }
                Err(e) => {
                    warn!(path = %file.display(), error = %e, "failed to sort file");
                    failures.push(SortFailure {
                        path: file.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        let summary = SortSummary {
            input: input.to_path_buf(),
            output_dir: output_root,
            started_at,
            finished_at: Utc::now(),
            records,
            failures,
            counts,
        };

        if self.settings.write_report {
            let report = summary.write_report(&summary.output_dir)?;
            info!(path = %report.display(), "wrote sort report");
        }

        info!(
            sorted = summary.sorted(),
            failed = summary.failures.len(),
            "sorting finished"
        );
        Ok(summary)
    }
}
