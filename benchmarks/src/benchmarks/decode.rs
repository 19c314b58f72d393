//! Layout decoding benchmarks

use super::sample_layout;
use crate::{run_benchmark_with_items, BenchmarkResult};
use layoutlua_core::Layout;

const CATEGORY: &str = "Decode";
const ITERATIONS: u32 = 50;

pub fn run_all() -> Vec<BenchmarkResult> {
    vec![bench_from_value(), bench_from_json_str()]
}

fn bench_from_value() -> BenchmarkResult {
    let value = serde_json::to_value(sample_layout(5000)).unwrap_or_default();
    run_benchmark_with_items("Decode from Value (5000 items)", CATEGORY, ITERATIONS, 5000, || {
        std::hint::black_box(Layout::from_value(&value));
    })
}

fn bench_from_json_str() -> BenchmarkResult {
    let json = serde_json::to_string(&sample_layout(5000)).unwrap_or_default();
    run_benchmark_with_items("Decode from JSON text (5000 items)", CATEGORY, ITERATIONS, 5000, || {
        std::hint::black_box(Layout::from_json_str(&json).ok());
    })
}
