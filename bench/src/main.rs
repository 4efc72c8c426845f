use std::env;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use algos::{BM, KMP, RabinKarp, StringSearch};

// Configuration
const TEXT_FILES: &[&str] = &["data/article1.txt", "data/article2.txt"];

const PATTERNS: &[(&str, &str)] = &[
    ("example", "Present"),
    ("nonexistentpattern", "Absent"),
];

const ALGORITHMS: &[&str] = &["bm", "kmp", "rabin-karp"];

/// Calls per measured cell.
const RUNS: u32 = 100;

#[derive(Debug)]
struct ResultEntry {
    algo: &'static str,
    pattern: &'static str,
    pattern_class: &'static str,
    file: String,
    duration: Duration,
    found: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Starting Substring Search Benchmark ---");

    // Positional args override the default text files
    let args: Vec<String> = env::args().skip(1).collect();
    let files: Vec<String> = if args.is_empty() {
        TEXT_FILES.iter().map(|s| s.to_string()).collect()
    } else {
        args
    };

    let mut results: Vec<ResultEntry> = Vec::new();

    for file in &files {
        println!("> Loading {}", file);
        let text = fs::read_to_string(file)?;

        for (pattern, class) in PATTERNS {
            for algo in ALGORITHMS {
                println!("> Running {} on pattern '{}' ({})", algo, pattern, class);

                let (duration, found) = time_search(algo, &text, pattern);

                results.push(ResultEntry {
                    algo,
                    pattern,
                    pattern_class: class,
                    file: file.clone(),
                    duration,
                    found,
                });
            }
        }
    }

    print_summary_table(&results);
    check_agreement(&results);

    Ok(())
}

/// Runs `find` RUNS times and reports the total elapsed time together with
/// the (identical across runs) search result.
fn time_search(algo: &str, text: &str, pattern: &str) -> (Duration, Option<usize>) {
    fn run<S: StringSearch>(text: &str, pattern: &str) -> (Duration, Option<usize>) {
        let mut found = None;
        let start = Instant::now();
        for _ in 0..RUNS {
            found = S::find(std::hint::black_box(text), std::hint::black_box(pattern));
        }
        (start.elapsed(), found)
    }

    match algo {
        "bm" => run::<BM>(text, pattern),
        "kmp" => run::<KMP>(text, pattern),
        "rabin-karp" => run::<RabinKarp>(text, pattern),
        other => unreachable!("unknown algorithm {other}"),
    }
}

fn print_summary_table(results: &[ResultEntry]) {
    println!("\n\n{:=^80}", format!(" RESULTS ({} runs per cell) ", RUNS));
    println!(
        "{:<12} | {:<20} | {:<8} | {:<18} | {:>12}",
        "Algorithm", "Pattern", "Class", "File", "Time (µs)"
    );
    println!("{:-^80}", "");

    for entry in results {
        let micros = entry.duration.as_nanos() as f64 / 1000.0;

        let short_file = Path::new(&entry.file)
            .file_name()
            .unwrap_or_default()
            .to_string_lossy();

        println!(
            "{:<12} | {:<20} | {:<8} | {:<18} | {:>12.2}",
            entry.algo, entry.pattern, entry.pattern_class, short_file, micros
        );
    }
    println!("{:=^80}", " END ");
}

/// All three algorithms must return the same index for the same cell; a
/// disagreement means a matcher is broken, so say so loudly.
fn check_agreement(results: &[ResultEntry]) {
    let mut ok = true;

    for pair in results.chunks(ALGORITHMS.len()) {
        let expected = pair[0].found;
        for entry in &pair[1..] {
            if entry.found != expected {
                ok = false;
                eprintln!(
                    "! Mismatch on {} / '{}': {} returned {:?}, {} returned {:?}",
                    entry.file, entry.pattern, pair[0].algo, expected, entry.algo, entry.found
                );
            }
        }
    }

    if ok {
        println!("All algorithms agree on every (file, pattern) cell.");
    }
}
