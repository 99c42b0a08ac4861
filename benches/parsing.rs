//! Benchmarks for chatlens parsing and analytics operations.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- single_format`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatlens::analytics::{
    AnalyticsSummary, TimelinePeriod, analyze_emotions, generate_timeline, generate_word_cloud,
    hourly_activity, participant_activity,
};
use chatlens::conversation::Conversation;
use chatlens::parse::parse_file;

// =============================================================================
// Test Data Generators
// =============================================================================

const SENDERS: &[&str] = &["Alice", "Bob", "Chloé", "Dmitri"];

const PHRASES: &[&str] = &[
    "quelle journée magnifique",
    "rien de spécial aujourd'hui",
    "love this idea, on y va",
    "je suis un peu fatigue ce soir",
    "see https://example.com : details inside",
    "Emoji check 😀🔥🚀",
];

fn generate_whatsapp_txt(count: usize) -> String {
    let mut lines = Vec::with_capacity(count + 1);
    lines.push("[WhatsApp]".to_string());
    for i in 0..count {
        let sender = SENDERS[i % SENDERS.len()];
        let phrase = PHRASES[i % PHRASES.len()];
        let day = (i % 28) + 1;
        let month = (i / 28 % 12) + 1;
        lines.push(format!(
            "[{}/{}/2025, {}:{:02}] {} : {} #{}",
            day,
            month,
            i % 24,
            i % 60,
            sender,
            phrase,
            i
        ));
    }
    lines.join("\n")
}

fn generate_multi_txt(count: usize) -> String {
    let sections = [
        ("WhatsApp", "Team A"),
        ("Insta", "Summer Trip"),
        ("Discord", "Guild"),
        ("SMS", "Family"),
    ];
    let per_section = count.div_ceil(sections.len());

    let mut lines = vec!["[Multi]".to_string()];
    let mut written = 0usize;
    for (token, name) in sections {
        lines.push(format!("[{token}]({name})"));
        for _ in 0..per_section {
            if written == count {
                break;
            }
            let sender = SENDERS[written % SENDERS.len()];
            let phrase = PHRASES[written % PHRASES.len()];
            lines.push(format!(
                "[{}/{}/2025, {}:{:02}] {} : {} #{}",
                (written % 28) + 1,
                (written / 28 % 12) + 1,
                written % 24,
                written % 60,
                sender,
                phrase,
                written
            ));
            written += 1;
        }
    }
    lines.join("\n")
}

fn parsed_conversations(count: usize) -> Vec<Conversation> {
    parse_file(&generate_whatsapp_txt(count), "bench.txt")
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_single_format_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_format_parsing");

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let content = generate_whatsapp_txt(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| {
                let conversations = parse_file(black_box(content), "bench.txt");
                black_box(conversations)
            });
        });
    }

    group.finish();
}

fn bench_multi_format_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_format_parsing");

    for size in [100_usize, 1_000, 10_000] {
        let content = generate_multi_txt(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| {
                let conversations = parse_file(black_box(content), "bench.lov");
                black_box(conversations)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Analytics Benchmarks
// =============================================================================

fn bench_timeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline");

    for size in [1_000_usize, 10_000] {
        let conversations = parsed_conversations(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &conversations,
            |b, conversations| {
                b.iter(|| {
                    let timeline =
                        generate_timeline(black_box(conversations), TimelinePeriod::Day);
                    black_box(timeline)
                });
            },
        );
    }

    group.finish();
}

fn bench_sentiment(c: &mut Criterion) {
    let mut group = c.benchmark_group("sentiment");

    for size in [1_000_usize, 10_000] {
        let conversations = parsed_conversations(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &conversations,
            |b, conversations| {
                b.iter(|| black_box(analyze_emotions(black_box(conversations))));
            },
        );
    }

    group.finish();
}

fn bench_word_cloud(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_cloud");

    for size in [1_000_usize, 10_000] {
        let conversations = parsed_conversations(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &conversations,
            |b, conversations| {
                b.iter(|| black_box(generate_word_cloud(black_box(conversations), 50)));
            },
        );
    }

    group.finish();
}

fn bench_full_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_summary");

    for size in [1_000_usize, 10_000] {
        let conversations = parsed_conversations(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &conversations,
            |b, conversations| {
                b.iter(|| black_box(AnalyticsSummary::generate(black_box(conversations))));
            },
        );
    }

    group.finish();
}

fn bench_hourly_and_participants(c: &mut Criterion) {
    let conversations = parsed_conversations(10_000);

    c.bench_function("hourly_activity_10k", |b| {
        b.iter(|| black_box(hourly_activity(black_box(&conversations))));
    });

    c.bench_function("participant_activity_10k", |b| {
        b.iter(|| black_box(participant_activity(black_box(&conversations))));
    });
}

criterion_group!(
    benches,
    bench_single_format_parsing,
    bench_multi_format_parsing,
    bench_timeline,
    bench_sentiment,
    bench_word_cloud,
    bench_full_summary,
    bench_hourly_and_participants
);
criterion_main!(benches);
