use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use java_precheck::{Dictionary, RuleOptions, Validator, validate};

/// Generate a class body with a given share of broken lines
fn generate_java_source(methods: usize, scenario: &str) -> String {
    let mut lines = vec!["public class Generated {".to_string()];

    for i in 0..methods {
        lines.push(format!("    // helper {}", i));
        lines.push(format!("    static int helper{}(int[] values) {{", i));

        match scenario {
            "all_valid" => {
                lines.push(format!("        int total = values[0] + {};", i));
                lines.push("        System.out.println(total);".to_string());
                lines.push("        return total;".to_string());
            }
            "missing_semicolons" => {
                lines.push(format!("        int total = values[0] + {}", i));
                lines.push("        System.out.println(total)".to_string());
                lines.push("        return total;".to_string());
            }
            "misspellings" => {
                lines.push(format!("        int total = values[0] + {};", i));
                lines.push("        Sytem . out . prntln ( total ) ;".to_string());
                lines.push("        retrn total;".to_string());
            }
            _ => {
                lines.push(format!("        int total = values[0] + {}", i));
                lines.push("        voyd x = total".to_string());
                lines.push("        return total;".to_string());
            }
        }

        lines.push("    }".to_string());
    }

    lines.push("    public static void main(String[] args) {".to_string());
    lines.push("        System.out.println(helper0(new int[] { 1 }));".to_string());
    lines.push("    }".to_string());
    lines.push("}".to_string());
    lines.join("\n")
}

/// Benchmark validation with different error densities
fn bench_validation_error_density(c: &mut Criterion) {
    let scenarios = ["all_valid", "missing_semicolons", "misspellings", "mixed_errors"];

    let mut group = c.benchmark_group("validation_error_density");

    for scenario in scenarios {
        let content = generate_java_source(1_000, scenario);

        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("scenario", scenario),
            &content,
            |b, content| b.iter(|| black_box(validate(black_box(content)))),
        );
    }

    group.finish();
}

/// Benchmark validation scalability with different file sizes
fn bench_validation_scalability(c: &mut Criterion) {
    let sizes = [10, 100, 1_000, 10_000];

    let mut group = c.benchmark_group("validation_scalability");

    for size in sizes {
        let content = generate_java_source(size, "mixed_errors");

        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::new("methods", size), &content, |b, content| {
            b.iter(|| black_box(validate(black_box(content))))
        });
    }

    group.finish();
}

/// Benchmark the cost of configured dictionary additions and next-line braces
fn bench_configured_validator(c: &mut Criterion) {
    let validator = Validator::new(
        Dictionary::builtin().with_additions((0..200).map(|i| (format!("typo{}", i), "fixed"))),
        RuleOptions {
            next_line_braces: true,
        },
    );
    let content = generate_java_source(1_000, "misspellings");

    c.bench_function("configured_validator", |b| {
        b.iter(|| black_box(validator.validate(black_box(&content))))
    });
}

criterion_group!(
    benches,
    bench_validation_error_density,
    bench_validation_scalability,
    bench_configured_validator
);
criterion_main!(benches);
