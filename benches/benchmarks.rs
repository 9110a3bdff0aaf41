//! Performance benchmarks for flattener

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use flattener::test_utils::TestTree;
use flattener::{ExtensionFilter, TraversalConfig, flatten_to_writer};
use std::collections::BTreeSet;
use std::io;

const RUST_SOURCE: &str = r#"//! Module documentation

use std::path::Path;

/// Main function documentation
fn main() {
    println!("Hello, world!");
}
"#;

const PYTHON_SOURCE: &str = r#"import os

def main():
    print("Hello, world!")
"#;

/// Build a tree with `count` files spread over ten subdirectories.
fn create_tree_with_files(count: usize) -> TestTree {
    let tree = TestTree::new();
    for i in 0..count {
        let dir = format!("pkg_{}", i % 10);
        if i % 2 == 0 {
            tree.add_file(&format!("{}/file_{}.rs", dir, i), RUST_SOURCE);
        } else {
            tree.add_file(&format!("{}/file_{}.py", dir, i), PYTHON_SOURCE);
        }
    }
    tree.add_file(".git/config", "[core]\n");
    tree
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    let small = create_tree_with_files(10);
    let small_config = TraversalConfig::new(small.path());
    group.bench_function("small_tree_10_files", |b| {
        b.iter(|| flatten_to_writer(black_box(&small_config), io::sink()))
    });

    let medium = create_tree_with_files(100);
    let medium_config = TraversalConfig::new(medium.path());
    group.bench_function("medium_tree_100_files", |b| {
        b.iter(|| flatten_to_writer(black_box(&medium_config), io::sink()))
    });

    let large = create_tree_with_files(500);
    let large_config = TraversalConfig::new(large.path());
    group.bench_function("large_tree_500_files", |b| {
        b.iter(|| flatten_to_writer(black_box(&large_config), io::sink()))
    });

    let filtered_config = TraversalConfig::new(large.path()).with_include([".py"]);
    group.bench_function("large_tree_include_py", |b| {
        b.iter(|| flatten_to_writer(black_box(&filtered_config), io::sink()))
    });

    group.finish();
}

fn bench_extension_filter(c: &mut Criterion) {
    let include: BTreeSet<String> = [".rs", ".py", ".js", ".ts", ".go"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let exclude: BTreeSet<String> = [".git", ".lock"].iter().map(|s| s.to_string()).collect();
    let filter = ExtensionFilter::new(Some(include), Some(exclude));

    let mut group = c.benchmark_group("extension_filter");

    group.bench_function("included", |b| {
        b.iter(|| filter.is_included(black_box(".rs")))
    });

    group.bench_function("not_included", |b| {
        b.iter(|| filter.is_included(black_box(".md")))
    });

    group.bench_function("excluded_dir_name", |b| {
        b.iter(|| filter.is_excluded(black_box(".git")))
    });

    group.finish();
}

criterion_group!(benches, bench_flatten, bench_extension_filter);
criterion_main!(benches);
