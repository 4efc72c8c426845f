use bisect::{Bound, upper_bound};
use clap::Parser;

/// Example:
/// cargo run --bin bisect -- --target 5.0
#[derive(Debug, clap::Parser)]
#[command(
    name = "bisect",
    about = "Upper-bound binary search over a sorted list of numbers"
)]
struct Cli {
    /// Value to look up
    #[arg(long, default_value_t = 5.0)]
    target: f64,

    /// Sorted values to search; defaults to the demo array
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    values: Option<Vec<f64>>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let values = cli
        .values
        .unwrap_or_else(|| vec![1.2, 2.5, 3.7, 4.8, 6.0, 7.3]);

    if values.windows(2).any(|w| w[0] > w[1]) {
        return Err("values must be sorted in ascending order".into());
    }

    let result = upper_bound(&values, cli.target);

    println!("iterations: {}", result.iterations);
    match result.bound {
        Bound::Exact(v) => println!("exact match: {v}"),
        Bound::Above(v) => println!("upper bound: {v}"),
        Bound::Unbounded => println!("upper bound: none (target exceeds all values)"),
    }

    Ok(())
}
