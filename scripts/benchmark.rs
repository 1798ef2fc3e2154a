use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use wiener_paths::math_utils::{per_second, time_ms};
use wiener_paths::paths::{generate_paths, generate_paths_par};
use wiener_paths::rng::{seed_rng_from_u64, RngFactory};
use wiener_paths::stats::TerminalSummary;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    arch: String,
    cpu_cores: usize,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            arch: env::consts::ARCH.to_string(),
            cpu_cores: num_cpus::get(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    steps: usize,
    ensemble: usize,
    time_ms: f64,
    throughput_increments_per_sec: f64,
    mean_square: f64,
    std_error: f64,
}

impl BenchmarkResult {
    fn new(
        name: &str,
        steps: usize,
        ensemble: usize,
        time_ms: f64,
        summary: &TerminalSummary,
    ) -> Self {
        BenchmarkResult {
            name: name.to_string(),
            steps,
            ensemble,
            time_ms,
            // NaN when the run was too fast for the clock
            throughput_increments_per_sec: per_second(steps * ensemble, time_ms)
                .unwrap_or(f64::NAN),
            mean_square: summary.mean_square,
            std_error: summary.std_error,
        }
    }
}

fn run_generation_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    let sizes = [(500, 100), (500, 10_000), (252, 20_000), (10_000, 1_000)];
    let horizon = 1.0;
    let seed = 42;

    for &(steps, ensemble) in &sizes {
        println!("Benchmarking N = {}, N_ens = {}...", steps, ensemble);

        let mut rng = seed_rng_from_u64(seed);
        let (paths, elapsed) = time_ms(|| generate_paths(horizon, steps, ensemble, &mut rng));
        let summary = TerminalSummary::from_paths(&paths.expect("Valid arguments"));
        results.push(BenchmarkResult::new("Sequential", steps, ensemble, elapsed, &summary));

        let factory = RngFactory::new(seed);
        let (paths, elapsed) = time_ms(|| generate_paths_par(horizon, steps, ensemble, &factory));
        let summary = TerminalSummary::from_paths(&paths.expect("Valid arguments"));
        results.push(BenchmarkResult::new("Parallel", steps, ensemble, elapsed, &summary));
    }

    results
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);

    writeln!(file, "# System Information")?;
    writeln!(file, "# OS: {} ({})", system_info.os, system_info.arch)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "#")?;

    writeln!(
        file,
        "Benchmark,Steps,Ensemble,Time_ms,Throughput_increments_per_sec,Mean_square,Std_error"
    )?;
    for result in results {
        writeln!(
            file,
            "{},{},{},{:.2},{:.0},{:.6},{:.6}",
            result.name,
            result.steps,
            result.ensemble,
            result.time_ms,
            result.throughput_increments_per_sec,
            result.mean_square,
            result.std_error
        )?;
    }

    file.flush()
}

fn main() {
    println!("wiener-paths Benchmark Suite");
    println!("============================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {} ({})", system_info.os, system_info.arch);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let results = run_generation_benchmarks();

    println!("\n{:=<88}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<88}", "");
    println!(
        "{:<12} {:>8} {:>10} {:>12} {:>18} {:>10} {:>10}",
        "Benchmark", "Steps", "Ensemble", "Time (ms)", "Increments/s", "E[W(T)^2]", "Std Err"
    );
    println!("{:-<88}", "");
    for result in &results {
        println!(
            "{:<12} {:>8} {:>10} {:>12.2} {:>18.0} {:>10.4} {:>10.4}",
            result.name,
            result.steps,
            result.ensemble,
            result.time_ms,
            result.throughput_increments_per_sec,
            result.mean_square,
            result.std_error
        );
    }
    println!("{:=<88}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    match write_results_to_csv(&results, &system_info, &filename) {
        Ok(()) => println!("\nResults saved to: {}", filename),
        Err(e) => {
            eprintln!("error: cannot write {}: {}", filename, e);
            std::process::exit(1);
        }
    }

    println!("\nTo reproduce these results:");
    println!("1. Set RUSTFLAGS: {}", system_info.rustc_flags);
    println!("2. Run: cargo run --bin benchmark --release");
    println!("3. Ensure {} CPU threads available", system_info.rayon_threads);
}
