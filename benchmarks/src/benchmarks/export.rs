//! Export benchmarks

use super::sample_layout;
use crate::{run_benchmark_with_items, BenchmarkResult};
use layoutlua_core::{lint, ExportConfig, Exporter};

const CATEGORY: &str = "Export";
const ITERATIONS: u32 = 100;

pub fn run_all() -> Vec<BenchmarkResult> {
    vec![
        bench_export(100),
        bench_export(5000),
        bench_export_strict(5000),
        bench_lint(5000),
    ]
}

fn bench_export(count: usize) -> BenchmarkResult {
    let layout = sample_layout(count);
    let name = format!("Export layout ({} items)", count);
    run_benchmark_with_items(&name, CATEGORY, ITERATIONS, count as u64, || {
        std::hint::black_box(layoutlua_core::export(&layout));
    })
}

fn bench_export_strict(count: usize) -> BenchmarkResult {
    let layout = sample_layout(count);
    let exporter = Exporter::new(ExportConfig::strict());
    let name = format!("Export strict ({} items)", count);
    run_benchmark_with_items(&name, CATEGORY, ITERATIONS, count as u64, || {
        std::hint::black_box(exporter.export(&layout));
    })
}

fn bench_lint(count: usize) -> BenchmarkResult {
    let layout = sample_layout(count);
    let name = format!("Lint layout ({} items)", count);
    run_benchmark_with_items(&name, CATEGORY, ITERATIONS, count as u64, || {
        std::hint::black_box(lint(&layout));
    })
}
