//! Shared-walk benchmarks.
//!
//! Benchmarks: one shared walk vs. four parallel walks over a stylesheet tree.
//! Run with: cargo bench -p tokenaudit-analysis --bench walk_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tempfile::TempDir;
use tokenaudit_analysis::ScanAggregator;
use tokenaudit_core::AuditRules;

/// Create a temp directory with N stylesheets and N/4 scripts.
fn create_test_files(count: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    for i in 0..count {
        let subdir = dir.path().join(format!("dir_{:03}", i / 100));
        std::fs::create_dir_all(&subdir).ok();
        let css = format!(
            ".c{i} {{ color: #{:03x}; margin: {}px 8px; font-size: {}px; font-family: 'IBM Plex Sans', sans-serif; }}\n",
            i % 4096,
            i % 50,
            12 + i % 20,
        );
        std::fs::write(subdir.join(format!("f_{i:05}.css")), css).unwrap();
        if i % 4 == 0 {
            std::fs::write(subdir.join(format!("f_{i:05}.ts")), "export const c = '#fff';\n").unwrap();
        }
    }
    dir
}

fn aggregate_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    group.sample_size(10);
    let rules = AuditRules::carbon();

    for size in [500, 2000] {
        let dir = create_test_files(size);
        for parallel in [false, true] {
            let label = if parallel { "parallel" } else { "shared" };
            group.bench_with_input(BenchmarkId::new(label, size), &size, |b, _| {
                b.iter(|| {
                    ScanAggregator::new(&rules)
                        .parallel(parallel)
                        .run(dir.path())
                        .unwrap()
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, aggregate_walk);
criterion_main!(benches);
