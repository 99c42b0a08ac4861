//! Example: Using chatlens as a library
//!
//! This example demonstrates how to use chatlens in your own projects.
//!
//! Run with: cargo run --example library_usage

use chatlens::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== chatlens Library Usage Examples ===\n");

    // Example 1: Parse a single-platform transcript
    println!("1. Parsing a WhatsApp transcript:");
    let content = "[WhatsApp]\n\
        [15/05/2025, 09:40] Alice : Hello there\n\
        [15/05/2025, 09:41] Bob : Hi Alice! quelle journée magnifique\n\
        [15/05/2025, 21:12] Alice : Bonne nuit 😘\n";

    let conversations = parse_file(content, "chat.txt");
    let conv = &conversations[0];
    println!(
        "   {} [{}]: {} messages, {} words, participants: {:?}",
        conv.display_name(),
        conv.platform,
        conv.message_count,
        conv.word_count,
        conv.participants
    );

    // Example 2: Parse a multi-format file
    println!("\n2. Parsing a multi-format file:");
    let multi = "[Multi]\n\
        [WhatsApp](Team A)\n\
        [15/05/2025, 09:40] Alice : Hello there\n\
        [Discord](Team B)\n\
        [15/05/2025, 10:00] Carol : hey\n";

    for conv in parse_file(multi, "combined.lov") {
        println!(
            "   {} [{}]: {} message(s)",
            conv.display_name(),
            conv.platform,
            conv.message_count
        );
    }

    // Example 3: Per-conversation statistics
    println!("\n3. Per-conversation statistics:");
    let stats = ConversationStats::for_conversation(conv);
    for participant in &stats.participants {
        println!(
            "   {}: {} messages, {} words",
            participant,
            stats.messages_by_participant[participant],
            stats.words_by_participant[participant]
        );
    }

    // Example 4: Analytics
    println!("\n4. Analytics summary:");
    let summary = AnalyticsSummary::generate(&conversations);
    println!("   Mood score: {}", summary.emotional_metrics.mood_score);
    println!("   Emojis: {}", summary.emotional_metrics.total_emojis);
    println!(
        "   Timeline buckets: {:?}",
        summary
            .timeline
            .iter()
            .map(|e| (e.date.as_str(), e.messages))
            .collect::<Vec<_>>()
    );
    if let Some(top) = summary.word_frequency.first() {
        println!("   Top word: {} ({}x, {:?})", top.word, top.count, top.category);
    }

    // Example 5: Weekly timeline
    println!("\n5. Weekly timeline:");
    for entry in generate_timeline(&conversations, TimelinePeriod::Week) {
        println!("   week of {}: {} messages", entry.date, entry.messages);
    }

    // Example 6: Storage round trip
    println!("\n6. Storage round trip:");
    let records: Vec<ConversationRecord> =
        conversations.iter().map(ConversationRecord::from).collect();
    let json = serde_json::to_string(&records)?;
    println!("   Serialized {} bytes", json.len());

    let loaded: Vec<ConversationRecord> = serde_json::from_str(&json)?;
    let (restored, quarantined) = restore_all(loaded);
    println!(
        "   Restored {} conversation(s), quarantined {}",
        restored.len(),
        quarantined.len()
    );

    println!("\n=== Examples complete! ===");
    Ok(())
}
