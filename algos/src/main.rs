use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use algos::{BM, KMP, RabinKarp, StringSearch};
use clap::Parser;

#[derive(Debug, Clone, clap::ValueEnum)]
enum Algorithm {
    Kmp,
    Bm,
    RabinKarp,
}

/// Example:
/// cargo run --release --bin string-search -- -t data/article1.txt -t data/article2.txt --pattern "example" -a bm --measure-time
#[derive(Debug, clap::Parser)]
#[command(
    name = "string-search",
    about = "Run a substring search algorithm on one pattern and one or more texts"
)]
struct Cli {
    #[arg(short, long, value_enum)]
    algo: Algorithm,

    #[arg(short = 't', long = "text", value_name = "TEXT", required = true)]
    texts: Vec<PathBuf>,

    #[arg(
        long,
        conflicts_with = "pattern_file",
        required_unless_present = "pattern_file"
    )]
    pattern: Option<String>,

    #[arg(
        long = "pattern-file",
        value_name = "PATTERN_FILE",
        conflicts_with = "pattern",
        required_unless_present = "pattern"
    )]
    pattern_file: Option<PathBuf>,

    /// Report only the first occurrence instead of all matches
    #[arg(long)]
    first: bool,

    /// Optional output file; if omitted, results are written to stdout
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Measure and print execution time for the search algorithm
    #[arg(long)]
    measure_time: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    let pattern = load_pattern(&cli)?;
    if pattern.is_empty() {
        return Err("Pattern must not be empty".into());
    }

    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    writeln!(
        out,
        "# algorithm={:?}, pattern-length={}",
        cli.algo,
        pattern.len()
    )?;

    for text_path in &cli.texts {
        let text = load_text(text_path)?;

        let (matches, duration) = run_algorithm(&cli, &text, &pattern);

        writeln!(out, "text={:?}", text_path)?;

        if let Some(d) = duration {
            writeln!(out, "execution_time: {}ns", d.as_nanos())?;
        }

        writeln!(out, "matches: {:?}", matches)?;
        writeln!(out)?;
    }

    Ok(())
}

fn load_pattern(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(ref pat) = cli.pattern {
        Ok(pat.clone())
    } else if let Some(ref path) = cli.pattern_file {
        load_text(path)
    } else {
        Err("Either --pattern or --pattern-file must be provided".into())
    }
}

fn load_text(path: &PathBuf) -> Result<String, Box<dyn std::error::Error>> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        let mut file = File::open(path)?;
        let mut buf = String::new();
        file.read_to_string(&mut buf)?;
        Ok(buf)
    }
}

fn run_algorithm(cli: &Cli, text: &str, pattern: &str) -> (Vec<usize>, Option<Duration>) {
    let start = cli.measure_time.then(Instant::now);

    let result = if cli.first {
        let first = match cli.algo {
            Algorithm::Kmp => KMP::find(text, pattern),
            Algorithm::Bm => BM::find(text, pattern),
            Algorithm::RabinKarp => RabinKarp::find(text, pattern),
        };
        first.into_iter().collect()
    } else {
        match cli.algo {
            Algorithm::Kmp => KMP::find_all(text, pattern),
            Algorithm::Bm => BM::find_all(text, pattern),
            Algorithm::RabinKarp => RabinKarp::find_all(text, pattern),
        }
    };

    let duration = start.map(|s| s.elapsed());

    (result, duration)
}
