//! # Sentiment Analysis Demo
//!
//! Scores a handful of Korean reviews and prints the rule trace.

use datamood::{EngineConfig, SentimentAnalyzer, TextPreprocessor, Tokenizer};

fn main() {
    println!("=== Korean Sentiment Analysis Demo ===\n");

    let analyzer = SentimentAnalyzer::new();

    let texts = [
        "이 영화 정말 너무 재미있었어요",
        "완전 최악이에요",
        "서비스가 별로 좋지 않았습니다",
        "가격은 비싸지만 품질은 꽤 좋아요",
        "배송이 조금 느렸는데 그런대로 괜찮았어요",
        "오늘 회의는 세 시에 시작합니다",
        "   ",
    ];

    println!("Analyzing {} texts...\n", texts.len());
    println!("{}", "=".repeat(70));

    for text in texts {
        let result = analyzer.analyze(text);

        println!("\nText: \"{}\"", text);
        println!("{}", "-".repeat(60));
        println!("  Tokens: {}", result.tokens.join(" | "));
        println!("  Label: {} ({})", result.label.korean(), result.label);
        println!("  Score: {:.2}", result.score);
        println!("  Percentage: {:.1}%", result.percentage);
        println!(
            "  Sentiment words: {}/{}",
            result.sentiment_word_count, result.total_word_count
        );
        for line in &result.trace {
            println!("    {line}");
        }
    }

    println!("\n{}", "=".repeat(70));

    // Same text under the five-label preset
    println!("\n=== Legacy Preset ===\n");
    let legacy = match SentimentAnalyzer::from_config(&EngineConfig::legacy()) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("invalid preset: {e}");
            return;
        }
    };
    for text in ["가격은 비싸지만 품질은 꽤 좋아요", "좋아요"] {
        let canonical = analyzer.analyze(text);
        let result = legacy.analyze(text);
        println!(
            "\"{}\": canonical {} ({:.1}%), legacy {} ({:.1}%)",
            text, canonical.label, canonical.percentage, result.label, result.percentage
        );
    }

    // Tokenizer on its own
    println!("\n=== Tokenizer Demo ===\n");
    let raw = "@reviewer 진짜 최고예요!! https://example.com";
    let clean = TextPreprocessor::new().preprocess(raw);
    println!("Raw text: \"{}\"", raw);
    println!("Preprocessed: \"{}\"", clean);
    let tokens = datamood::RuleTokenizer::new().tokenize(raw);
    for token in tokens {
        println!("  {:<10} {:?}", token.text, token.pos);
    }

    println!("\n=== Analysis Complete ===");
}
