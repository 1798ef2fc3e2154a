// tests/path_properties_test.rs
use wiener_paths::error::PathError;
use wiener_paths::paths::{generate_paths, generate_paths_default};
use wiener_paths::rng::{self, ReplaySource};
use wiener_paths::stats::mean_square_terminal;

#[test]
fn test_shapes_for_various_requests() {
    let mut rng = rng::seed_rng_from_u64(1);

    for &(t, n, n_ens) in &[(1.0, 1, 1), (0.5, 7, 3), (10.0, 100, 1), (1.0, 3, 50)] {
        let paths = generate_paths(t, n, n_ens, &mut rng).expect("Valid arguments");
        assert_eq!(paths.w().dim(), (n_ens, n + 1), "W shape for {:?}", (t, n, n_ens));
        assert_eq!(paths.dw().dim(), (n_ens, n), "dW shape for {:?}", (t, n, n_ens));
    }
}

#[test]
fn test_every_path_starts_at_zero() {
    let mut rng = rng::seed_rng_from_u64(2);
    let paths = generate_paths(3.0, 250, 40, &mut rng).expect("Valid arguments");

    for k in 0..40 {
        assert_eq!(paths.w()[[k, 0]], 0.0, "W[{}, 0] must be exactly zero", k);
    }
}

#[test]
fn test_cumulative_sum_identity() {
    let mut rng = rng::seed_rng_from_u64(3);
    let n = 200;
    let n_ens = 25;
    let paths = generate_paths(1.0, n, n_ens, &mut rng).expect("Valid arguments");
    let (w, dw) = paths.into_parts();

    for k in 0..n_ens {
        for j in 1..=n {
            assert_eq!(
                w[[k, j]],
                w[[k, j - 1]] + dw[[k, j - 1]],
                "W[{k}, {j}] != W[{k}, {}] + dW[{k}, {}]",
                j - 1,
                j - 1
            );
        }
    }
}

#[test]
fn test_terminal_mean_square_tracks_horizon() {
    // Same constants as the classic driver: seed 0, T = 1, N = 500, N_ens = 100
    let mut rng = rng::seed_rng_from_u64(0);
    let paths = generate_paths(1.0, 500, 100, &mut rng).expect("Valid arguments");

    let estimate = mean_square_terminal(&paths);
    println!("\nE[W(1)^2] estimate with 100 paths: {}", estimate);

    assert!(
        (0.5..=1.5).contains(&estimate),
        "Mean of W(T)^2 ({}) outside [0.5, 1.5] for T = 1",
        estimate
    );
}

#[test]
fn test_mean_square_scales_with_horizon() {
    let mut rng = rng::seed_rng_from_u64(4);

    for &t in &[0.25, 4.0] {
        let paths = generate_paths(t, 50, 4_000, &mut rng).expect("Valid arguments");
        let ratio = mean_square_terminal(&paths) / t;
        assert!(
            (ratio - 1.0).abs() < 0.1,
            "E[W(T)^2]/T should be ~1 for T = {}, got {}",
            t,
            ratio
        );
    }
}

#[test]
fn test_increment_variance_matches_dt() {
    let mut rng = rng::seed_rng_from_u64(5);
    let paths = generate_paths(2.0, 50, 2_000, &mut rng).expect("Valid arguments");
    let dt = paths.dt();

    let n = paths.dw().len() as f64;
    let mean = paths.dw().sum() / n;
    let variance = paths.dw().iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

    assert!(mean.abs() < 0.01, "Increment mean should be ~0, got {}", mean);
    assert!(
        (variance / dt - 1.0).abs() < 0.05,
        "Increment variance should be ~dt = {}, got {}",
        dt,
        variance
    );
}

#[test]
fn test_determinism_under_fixed_seed() {
    let mut rng1 = rng::seed_rng_from_u64(2024);
    let mut rng2 = rng::seed_rng_from_u64(2024);

    let a = generate_paths(1.0, 100, 10, &mut rng1).expect("Valid arguments");
    let b = generate_paths(1.0, 100, 10, &mut rng2).expect("Valid arguments");
    assert_eq!(a, b);

    // The second draw from the same generator is a fresh, different batch
    let c = generate_paths(1.0, 100, 10, &mut rng1).expect("Valid arguments");
    assert_ne!(a.dw(), c.dw());
}

#[test]
fn test_invalid_arguments() {
    let mut rng = rng::seed_rng_from_u64(0);

    let cases: [(f64, usize, usize, &str); 6] = [
        (1.0, 0, 1, "steps"),
        (0.0, 10, 1, "horizon"),
        (-1.0, 10, 1, "horizon"),
        (1.0, 10, 0, "ensemble"),
        // dt = T / N rounds to zero
        (5e-324, 10, 1, "horizon"),
        (1.0, usize::MAX / 4, 2, "steps"),
    ];

    for (t, n, n_ens, expected) in cases {
        match generate_paths(t, n, n_ens, &mut rng) {
            Err(PathError::InvalidArgument { parameter, .. }) => {
                assert_eq!(parameter, expected, "wrong parameter for {:?}", (t, n, n_ens))
            }
            other => panic!("expected InvalidArgument for {:?}, got {:?}", (t, n, n_ens), other),
        }
    }
}

#[test]
fn test_stubbed_increments_scenario() {
    let mut source = ReplaySource::new(vec![0.1, -0.2, 0.3, 0.05]);
    let paths = generate_paths_default(1.0, 4, &mut source).expect("Valid arguments");

    let expected = [0.0, 0.1, -0.1, 0.2, 0.25];
    for (j, &want) in expected.iter().enumerate() {
        let got = paths.w()[[0, j]];
        assert!((got - want).abs() < 1e-12, "W[0, {}] = {}, expected {}", j, got, want);
    }
}

#[test]
fn test_increments_drive_euler_stepping() {
    // dX = σ dW with X_0 = 0 stepped on dW must land on σ W at every grid point
    let sigma = 0.3;
    let mut rng = rng::seed_rng_from_u64(6);
    let paths = generate_paths(1.0, 64, 3, &mut rng).expect("Valid arguments");

    for k in 0..3 {
        let mut x = 0.0;
        for j in 0..64 {
            x += sigma * paths.dw()[[k, j]];
            let target = sigma * paths.w()[[k, j + 1]];
            assert!((x - target).abs() < 1e-12, "X and σW diverged at step {}", j + 1);
        }
    }
}
