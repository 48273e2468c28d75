//! Latency benchmark for the intent pipeline.
//!
//! Measures the average cost of classifying one command line sequentially
//! and through the batch API, after checking that both paths agree.

use intent_inference::{BatchConfig, IntentModel, Prediction};
use log::{error, info};
use std::time::Instant;

const COMMANDS: [&str; 8] = [
    "turn on led",
    "turn off led",
    "switch the lamp on now",
    "disable the light",
    "activate power",
    "",
    "kindly illuminate the hallway",
    "turn the led on now off off off",
];

/// Performance measurement structure
#[derive(Debug)]
struct PerformanceResults {
    method: String,
    total_time_ns: u128,
    average_time_ns: u128,
    num_lines: u64,
}

impl PerformanceResults {
    fn new(method: String, total_time_ns: u128, num_lines: u64) -> Self {
        Self {
            method,
            total_time_ns,
            average_time_ns: total_time_ns / num_lines as u128,
            num_lines,
        }
    }

    fn speedup(&self, baseline: &PerformanceResults) -> f64 {
        baseline.average_time_ns as f64 / self.average_time_ns.max(1) as f64
    }
}

fn create_lines(num_lines: usize) -> Vec<String> {
    (0..num_lines)
        .map(|i| COMMANDS[i % COMMANDS.len()].to_string())
        .collect()
}

/// Runs `benchmark_fn` `rounds` times; each run classifies `lines_per_round` lines.
fn benchmark_method<F>(
    name: &str,
    rounds: u32,
    lines_per_round: usize,
    mut benchmark_fn: F,
) -> PerformanceResults
where
    F: FnMut(),
{
    info!("Benchmarking {} ({} rounds)...", name, rounds);

    // Warm-up
    for _ in 0..2 {
        benchmark_fn();
    }

    let start = Instant::now();
    for _ in 0..rounds {
        benchmark_fn();
    }
    let duration = start.elapsed();

    PerformanceResults::new(
        name.to_string(),
        duration.as_nanos(),
        rounds as u64 * lines_per_round as u64,
    )
}

fn verify_outputs_match(sequential: &[Prediction], batch: &[Prediction]) -> bool {
    if sequential.len() != batch.len() {
        return false;
    }
    for (i, (expected, actual)) in sequential.iter().zip(batch.iter()).enumerate() {
        if expected != actual {
            error!(
                "Prediction mismatch at line {}: sequential={:?}, batch={:?}",
                i, expected, actual
            );
            return false;
        }
    }
    true
}

fn main() {
    env_logger::init();

    let rounds = 20;
    let lines = create_lines(50_000);
    let model = IntentModel::builtin();

    info!("Verifying batch and sequential predictions agree...");
    let sequential: Vec<Prediction> = lines.iter().map(|line| model.predict(line)).collect();
    let batch = match model.infer_batch(&lines, BatchConfig::new()) {
        Ok(output) => output,
        Err(e) => {
            error!("Batch inference failed: {}", e);
            std::process::exit(1);
        }
    };
    if !verify_outputs_match(&sequential, batch.as_slice()) {
        std::process::exit(1);
    }

    let sequential_results = benchmark_method("Sequential predict", rounds, lines.len(), || {
        for line in &lines {
            std::hint::black_box(model.predict(line));
        }
    });

    let single_thread_results =
        benchmark_method("Batch (1 thread)", rounds, lines.len(), || {
            let output = model
                .infer_batch(&lines, BatchConfig::new().with_threads(1))
                .expect("Batch inference failed");
            std::hint::black_box(output);
        });

    let threads = BatchConfig::new().get_threads();
    let parallel_results = benchmark_method(
        &format!("Batch ({} threads)", threads),
        rounds,
        lines.len(),
        || {
            let output = model
                .infer_batch(&lines, BatchConfig::new())
                .expect("Batch inference failed");
            std::hint::black_box(output);
        },
    );

    println!("\n{}", "=".repeat(80));
    println!("Detailed Results");
    println!("{}", "=".repeat(80));

    for result in [&sequential_results, &single_thread_results, &parallel_results] {
        println!("\n{}", result.method);
        println!("   Average time per line: {} ns", result.average_time_ns);
        println!(
            "   Total time: {:.3} ms",
            result.total_time_ns as f64 / 1_000_000.0
        );
        println!("   Lines classified: {}", result.num_lines);
        if result.method != sequential_results.method {
            println!(
                "   Speedup vs sequential: {:.2}x",
                result.speedup(&sequential_results)
            );
        }
    }

    println!("\n{}", "=".repeat(80));
}
