//! # Sorter Module
//!
//! File-level layer around the analyzer: classify inputs, label them and
//! copy or move them into per-label directories.

mod files;
mod mood_sorter;

pub use files::{
    available_path, build_output_path, is_same_file, iter_input_files, move_or_copy, FileKind,
    AUDIO_EXTENSIONS, TEXT_EXTENSIONS,
};
pub use mood_sorter::{
    FileAnalysis, MoodSorter, SortFailure, SortRecord, SortSummary, Transcriber, REPORT_FILE_NAME,
};
