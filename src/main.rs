//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::ChatlensError;
use chatlens::analytics::AnalyticsSummary;
use chatlens::cli::{Args, ReportFormat};
use chatlens::conversation::{Conversation, ConversationStats};
use chatlens::output;
use chatlens::parse::parse_file;
use chatlens::perf::PerfLog;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    let mut perf = PerfLog::with_capacity(64);

    // Print header
    println!("🔍 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Inputs:  {}", args.inputs.join(", "));
    println!("📅 Period:  {}", args.period);
    if let Some(ref output) = args.output {
        println!("💾 Output:  {} ({})", output, args.format);
    }
    println!();

    // Step 1: Parse every input file; unrecognized files are reported, not fatal
    let mut conversations: Vec<Conversation> = Vec::new();
    for input in &args.inputs {
        println!("⏳ Parsing {}...", input);
        let content = std::fs::read_to_string(input)?;

        let parse_start = Instant::now();
        let parsed = parse_file(&content, file_name_of(input));
        perf.record(format!("parse {}", input), parse_start.elapsed());

        if parsed.is_empty() {
            println!("   ⚠️  Format not recognized, skipping");
        } else {
            let messages: usize = parsed.iter().map(|c| c.message_count).sum();
            println!(
                "   Found {} conversation(s), {} messages ({:.2}s)",
                parsed.len(),
                messages,
                parse_start.elapsed().as_secs_f64()
            );
        }
        conversations.extend(parsed);
    }

    if conversations.is_empty() {
        let path = args.inputs.first().map(|i| Path::new(i).to_path_buf());
        return Err(ChatlensError::unrecognized_format(path));
    }

    // Step 2: Optional per-conversation statistics
    if args.stats {
        println!();
        println!("📋 Conversations:");
        for conv in &conversations {
            let stats = ConversationStats::for_conversation(conv);
            println!(
                "   {} [{}] - {} messages, {} words",
                conv.display_name(),
                conv.platform,
                stats.total_messages,
                stats.total_words
            );
            for participant in &stats.participants {
                println!(
                    "      {}: {} messages, {} words",
                    participant,
                    stats.messages_by_participant.get(participant).unwrap_or(&0),
                    stats.words_by_participant.get(participant).unwrap_or(&0)
                );
            }
        }
    }

    // Step 3: Analytics
    println!();
    println!("📊 Computing analytics...");
    let summary = perf.time("analytics", || {
        AnalyticsSummary::generate_with(&conversations, args.period.into(), args.words)
    });
    print_summary(&summary);

    // Step 4: Optional report file
    if let Some(ref output_path) = args.output {
        println!();
        println!("💾 Writing {}...", output_path);
        let write_start = Instant::now();
        match args.format {
            ReportFormat::Json => output::write_json(&summary, output_path)?,
            ReportFormat::Csv => {
                output::write_timeline_csv(&summary.timeline, output_path)?;
                let words_path = words_csv_path(output_path);
                output::write_word_frequency_csv(&summary.word_frequency, &words_path)?;
                println!("   Word table: {}", words_path);
            }
        }
        perf.record("write report", write_start.elapsed());
        println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());
    }

    // Performance stats
    let total_time = total_start.elapsed();
    println!();
    println!("⚡ Performance:");
    for measurement in perf.iter() {
        println!(
            "   {:<24} {:.3}s",
            measurement.label,
            measurement.duration.as_secs_f64()
        );
    }
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());

    Ok(())
}

/// Prints the headline analytics numbers.
fn print_summary(summary: &AnalyticsSummary) {
    println!("   Messages:   {}", summary.total_messages());
    println!(
        "   Mood score: {} (+{} / -{})",
        summary.emotional_metrics.mood_score,
        summary.emotional_metrics.positive_score,
        summary.emotional_metrics.negative_score
    );
    println!("   Emojis:     {}", summary.emotional_metrics.total_emojis);

    if let Some(busiest) = summary.hourly_activity.iter().max_by_key(|h| h.count) {
        if busiest.count > 0 {
            println!("   Peak hour:  {:02}:00 ({} messages)", busiest.hour, busiest.count);
        }
    }

    let top_words: Vec<&str> = summary
        .word_frequency
        .iter()
        .take(5)
        .map(|w| w.word.as_str())
        .collect();
    if !top_words.is_empty() {
        println!("   Top words:  {}", top_words.join(", "));
    }
}

/// Extracts the file name component used for conversation naming.
fn file_name_of(input: &str) -> &str {
    Path::new(input)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(input)
}

/// Derives the word-table path written next to a CSV timeline report.
fn words_csv_path(output_path: &str) -> String {
    let path = Path::new(output_path);
    match (path.file_stem().and_then(|s| s.to_str()), path.extension().and_then(|e| e.to_str())) {
        (Some(stem), Some(ext)) => {
            path.with_file_name(format!("{stem}_words.{ext}"))
                .to_string_lossy()
                .into_owned()
        }
        _ => format!("{output_path}_words"),
    }
}
