//! # Mood Sorting Demo
//!
//! Writes a few sample files into a scratch directory, sorts them by label
//! and prints the resulting layout.

use anyhow::Result;
use datamood::{
    logging::init_with_level, MoodSorter, SentimentAnalyzer, SorterSettings, Transcriber,
};
use std::fs;
use std::path::Path;

/// Stands in for a real speech recognizer
struct CannedTranscriber;

impl Transcriber for CannedTranscriber {
    fn transcribe(&self, path: &Path) -> datamood::Result<String> {
        let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        Ok(match name {
            "call_happy" => "정말 감사합니다 너무 만족스러워요".to_string(),
            _ => String::new(),
        })
    }
}

fn main() -> Result<()> {
    init_with_level("info");

    let root = std::env::temp_dir().join("datamood-demo");
    let inbox = root.join("inbox");
    let output = root.join("sorted");
    if root.exists() {
        fs::remove_dir_all(&root)?;
    }
    fs::create_dir_all(inbox.join("nested"))?;

    fs::write(inbox.join("review_1.txt"), "이 영화 정말 너무 재미있었어요")?;
    fs::write(inbox.join("review_2.txt"), "완전 최악이에요")?;
    fs::write(inbox.join("nested/review_3.txt"), "오늘 회의는 세 시에 시작합니다")?;
    fs::write(inbox.join("call_happy.wav"), [0u8; 44])?;
    fs::write(inbox.join("call_silent.wav"), [0u8; 44])?;
    fs::write(inbox.join("photo.png"), [0u8; 8])?;

    let settings = SorterSettings {
        output_dir: output.clone(),
        write_report: true,
        ..Default::default()
    };
    let sorter =
        MoodSorter::new(SentimentAnalyzer::new(), settings).with_transcriber(CannedTranscriber);

    let summary = sorter.sort_path(&inbox)?;

    println!("\n=== Sorted {} files ===\n", summary.sorted());
    for record in &summary.records {
        println!(
            "{:<28} -> {}",
            record.source.strip_prefix(&inbox).unwrap_or(&record.source).display(),
            record.destination.strip_prefix(&output).unwrap_or(&record.destination).display()
        );
    }

    println!("\nPer bucket:");
    for (bucket, count) in &summary.counts {
        println!("  {bucket:<20} {count}");
    }
    println!("\nReport: {}", output.join(datamood::sorter::REPORT_FILE_NAME).display());

    Ok(())
}
