//! LayoutLua Benchmark Runner

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

mod benchmarks;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub name: String,
    pub category: String,
    pub iterations: u32,
    pub mean_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub throughput: Option<Throughput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Throughput {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub version: String,
    pub results: Vec<BenchmarkResult>,
    /// Total mean time per category
    pub categories: BTreeMap<String, f64>,
}

pub fn run_benchmark<F>(name: &str, category: &str, iterations: u32, mut f: F) -> BenchmarkResult
where
    F: FnMut(),
{
    let mut times: Vec<Duration> = Vec::with_capacity(iterations as usize);
    f(); // Warmup
    for _ in 0..iterations {
        let start = Instant::now();
        f();
        times.push(start.elapsed());
    }
    let times_ms: Vec<f64> = times.iter().map(|d| d.as_secs_f64() * 1000.0).collect();
    let mean_ms = times_ms.iter().sum::<f64>() / times_ms.len().max(1) as f64;
    let min_ms = times_ms.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_ms = times_ms.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    BenchmarkResult {
        name: name.to_string(),
        category: category.to_string(),
        iterations,
        mean_ms,
        min_ms,
        max_ms,
        throughput: None,
    }
}

/// Run a benchmark and report how many items per second it processed
pub fn run_benchmark_with_items<F>(name: &str, category: &str, iterations: u32, items: u64, f: F) -> BenchmarkResult
where
    F: FnMut(),
{
    let mut result = run_benchmark(name, category, iterations, f);
    result.throughput = Some(Throughput {
        value: (items as f64 * 1000.0) / result.mean_ms,
        unit: "items/s".to_string(),
    });
    result
}

fn print_report(report: &BenchmarkReport) {
    println!("\n======== LayoutLua Benchmark Report ========");
    println!("Version: {}", report.version);
    let mut current_cat = "";
    for r in &report.results {
        if r.category != current_cat {
            current_cat = r.category.as_str();
            println!("--- {} ---", current_cat);
        }
        print!("  {:<40} {:>8.3}ms [{:.3} .. {:.3}]", r.name, r.mean_ms, r.min_ms, r.max_ms);
        if let Some(ref tp) = r.throughput {
            print!(" {:.0} {}", tp.value, tp.unit);
        }
        println!();
    }
    println!("\nTotal: {} benchmarks", report.results.len());
}

fn main() -> Result<()> {
    let json_only = std::env::args().any(|a| a == "--json-only");

    let mut results = Vec::new();
    results.extend(benchmarks::export::run_all());
    results.extend(benchmarks::decode::run_all());

    let mut categories = BTreeMap::new();
    for r in &results {
        *categories.entry(r.category.clone()).or_insert(0.0) += r.mean_ms;
    }

    let report = BenchmarkReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        results,
        categories,
    };

    if json_only {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}
