//! Property-based tests for chatlens.
//!
//! These tests generate random transcripts and messages to check the
//! invariants the rest of the system leans on.

use proptest::prelude::*;

use chatlens::analytics::{analyze_emotions, generate_word_cloud, hourly_activity};
use chatlens::conversation::Conversation;
use chatlens::message::Message;
use chatlens::parse::parse_file;
use chatlens::platform::Platform;
use chrono::NaiveDate;

/// Generate a random in-range timestamp (2020-2029, minute precision).
fn arb_timestamp() -> impl Strategy<Value = chrono::NaiveDateTime> {
    (2020i32..2030, 1u32..13, 1u32..29, 0u32..24, 0u32..60).prop_map(
        |(year, month, day, hour, minute)| {
            NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(hour, minute, 0)
                .unwrap()
        },
    )
}

/// Generate a random Message using fast strategies (no regex!)
fn arb_message() -> impl Strategy<Value = Message> {
    (
        // Fast: select from predefined senders
        prop::sample::select(vec![
            "Alice".to_string(),
            "Bob".to_string(),
            "Chloé".to_string(),
            "User123".to_string(),
            "Иван".to_string(),
        ]),
        // Fast: select from predefined contents
        prop::sample::select(vec![
            "Hello".to_string(),
            "Hi there!".to_string(),
            "quelle journée magnifique".to_string(),
            "je suis triste".to_string(),
            "Good morning".to_string(),
            "Test message 123".to_string(),
            "🎉🔥 emoji".to_string(),
            "x".to_string(),
            "love love love".to_string(),
        ]),
        arb_timestamp(),
        0usize..10_000,
    )
        .prop_map(|(sender, content, timestamp, ordinal)| {
            Message::text(format!("whatsapp-{ordinal}"), timestamp, sender, content)
        })
}

/// Generate a vector of random messages
fn arb_messages(max_len: usize) -> impl Strategy<Value = Vec<Message>> {
    prop::collection::vec(arb_message(), 0..max_len)
}

/// Generate random transcript text mixing valid and garbage lines
fn arb_transcript() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            // Valid message lines
            (1u32..29, 1u32..13, 0u32..24, 0u32..60).prop_map(|(d, m, h, min)| format!(
                "[{d}/{m}/2025, {h}:{min:02}] Alice : message at {h}:{min:02}"
            )),
            // Garbage
            Just("not a message line".to_string()),
            Just(String::new()),
            Just("[WhatsApp]".to_string()),
            Just("[15/05/2025, 99:99] Bad : clock".to_string()),
        ],
        0..40,
    )
    .prop_map(|lines| format!("[WhatsApp]\n{}", lines.join("\n")))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // CONVERSATION BUILDER PROPERTIES
    // ============================================

    /// Messages come out sorted non-decreasing by timestamp
    #[test]
    fn build_sorts_messages(messages in arb_messages(30)) {
        let conv = Conversation::build(messages, "chat.txt", Platform::WhatsApp);
        for pair in conv.messages.windows(2) {
            prop_assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    /// Derived fields agree with the message sequence
    #[test]
    fn build_derived_fields_consistent(messages in arb_messages(30)) {
        let conv = Conversation::build(messages, "chat.txt", Platform::WhatsApp);

        prop_assert_eq!(conv.message_count, conv.messages.len());

        let expected_words: usize = conv.messages.iter().map(Message::word_count).sum();
        prop_assert_eq!(conv.word_count, expected_words);

        if !conv.messages.is_empty() {
            prop_assert_eq!(conv.start_date, conv.messages[0].timestamp);
            prop_assert_eq!(conv.end_date, conv.messages[conv.messages.len() - 1].timestamp);
            prop_assert!(conv.start_date <= conv.end_date);
        }
    }

    /// Participants are exactly the distinct senders
    #[test]
    fn build_participants_are_distinct_senders(messages in arb_messages(30)) {
        let conv = Conversation::build(messages, "chat.txt", Platform::WhatsApp);

        let mut seen = std::collections::HashSet::new();
        for p in &conv.participants {
            prop_assert!(seen.insert(p.clone()), "duplicate participant {}", p);
        }
        for msg in &conv.messages {
            prop_assert!(conv.participants.contains(&msg.sender));
        }
    }

    // ============================================
    // PARSER PROPERTIES
    // ============================================

    /// parse_file never panics and produces internally consistent output
    #[test]
    fn parse_never_panics(content in arb_transcript()) {
        let conversations = parse_file(&content, "random.txt");
        for conv in &conversations {
            prop_assert_eq!(conv.message_count, conv.messages.len());
            for msg in &conv.messages {
                prop_assert!(!msg.content.trim().is_empty());
            }
        }
    }

    /// Parsing twice produces identical results
    #[test]
    fn parse_is_deterministic(content in arb_transcript()) {
        let first = parse_file(&content, "random.txt");
        let second = parse_file(&content, "random.txt");
        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            prop_assert_eq!(&a.messages, &b.messages);
        }
    }

    /// Arbitrary junk input never panics, whatever the bytes
    #[test]
    fn parse_arbitrary_text_never_panics(content in ".*") {
        let _ = parse_file(&content, "junk.txt");
    }

    // ============================================
    // ANALYTICS PROPERTIES
    // ============================================

    /// Hourly activity is always 24 slots summing to the message count
    #[test]
    fn hourly_is_total_preserving(messages in arb_messages(40)) {
        let total = messages.len();
        let conv = Conversation::build(messages, "chat.txt", Platform::WhatsApp);
        let hourly = hourly_activity(std::slice::from_ref(&conv));

        prop_assert_eq!(hourly.len(), 24);
        let sum: usize = hourly.iter().map(|h| h.count).sum();
        prop_assert_eq!(sum, total);
    }

    /// Mood score stays within [-100, 100]
    #[test]
    fn mood_score_bounded(messages in arb_messages(40)) {
        let conv = Conversation::build(messages, "chat.txt", Platform::WhatsApp);
        let metrics = analyze_emotions(std::slice::from_ref(&conv));
        prop_assert!((-100..=100).contains(&metrics.mood_score));
    }

    /// Word cloud entries respect the filters and the ordering contract
    #[test]
    fn word_cloud_respects_contract(messages in arb_messages(40), limit in 1usize..20) {
        let conv = Conversation::build(messages, "chat.txt", Platform::WhatsApp);
        let cloud = generate_word_cloud(std::slice::from_ref(&conv), limit);

        prop_assert!(cloud.len() <= limit);
        for entry in &cloud {
            prop_assert!(entry.word.chars().count() > 2);
            prop_assert!(!chatlens::analytics::words::STOP_WORDS.contains(&entry.word.as_str()));
            prop_assert!(entry.count > 0);
        }
        for pair in cloud.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }
}
