// tests/parallel_generation_test.rs
use wiener_paths::paths::{generate_paths_par, PathConfig};
use wiener_paths::rng::RngFactory;
use wiener_paths::stats::TerminalSummary;

#[test]
fn test_parallel_shapes_and_initial_condition() {
    let paths = generate_paths_par(1.0, 500, 100, &RngFactory::new(0)).expect("Valid arguments");

    assert_eq!(paths.w().dim(), (100, 501));
    assert_eq!(paths.dw().dim(), (100, 500));
    assert!(paths.w().column(0).iter().all(|&w| w == 0.0));
}

#[test]
fn test_parallel_is_reproducible() {
    let a = generate_paths_par(1.0, 128, 64, &RngFactory::new(77)).expect("Valid arguments");
    let b = generate_paths_par(1.0, 128, 64, &RngFactory::new(77)).expect("Valid arguments");
    assert_eq!(a, b);

    let c = generate_paths_par(1.0, 128, 64, &RngFactory::new(78)).expect("Valid arguments");
    assert_ne!(a, c);
}

#[test]
fn test_parallel_is_independent_of_thread_count() {
    let factory = RngFactory::new(31);
    let many = generate_paths_par(1.0, 100, 200, &factory).expect("Valid arguments");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .expect("Thread pool");
    let single = pool
        .install(|| generate_paths_par(1.0, 100, 200, &factory))
        .expect("Valid arguments");

    assert_eq!(many, single);
}

#[test]
fn test_parallel_terminal_statistics() {
    let cfg = PathConfig {
        horizon: 1.0,
        steps: 100,
        ensemble: 4_000,
        seed: 12345,
    };
    let paths = cfg.generate_par().expect("Valid configuration");
    let summary = TerminalSummary::from_paths(&paths);

    println!("\nParallel ensemble summary: {:?}", summary);

    assert!(summary.mean.abs() < 0.1, "E[W(T)] should be ~0, got {}", summary.mean);
    assert!(
        (summary.variance - 1.0).abs() < 0.1,
        "Var[W(T)] should be ~T, got {}",
        summary.variance
    );
    assert!(
        (summary.mean_square - 1.0).abs() < 0.1,
        "E[W(T)^2] should be ~T, got {}",
        summary.mean_square
    );
}

#[test]
fn test_parallel_rejects_invalid_arguments() {
    let factory = RngFactory::new(0);
    assert!(generate_paths_par(1.0, 0, 1, &factory).is_err());
    assert!(generate_paths_par(0.0, 10, 1, &factory).is_err());
    assert!(generate_paths_par(f64::NAN, 10, 1, &factory).is_err());
    assert!(generate_paths_par(1.0, 10, 0, &factory).is_err());
}
