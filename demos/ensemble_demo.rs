use wiener_paths::output::write_paths_to_csv;
use wiener_paths::paths::generate_paths;
use wiener_paths::rng::seed_rng_from_u64;
use wiener_paths::stats::{mean_square_terminal, TerminalSummary};

fn main() {
    println!("Brownian Ensemble Demo");
    println!("======================\n");

    let mut rng = seed_rng_from_u64(0);

    let t = 1.0;
    let n = 500;
    let n_ens = 100;

    // 1. One ensemble of paths
    println!("1. Generating {} paths with {} steps over [0, {}]...", n_ens, n, t);
    let paths = match generate_paths(t, n, n_ens, &mut rng) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("   Error: {}", e);
            std::process::exit(2);
        }
    };
    println!("   W shape:  {:?}", paths.w().dim());
    println!("   dW shape: {:?}", paths.dw().dim());

    // 2. Monte Carlo check of E[W(T)^2] = T
    println!("\n2. Terminal statistics...");
    println!("   mean W(T)^2 = {:.6}", mean_square_terminal(&paths));
    let summary = TerminalSummary::from_paths(&paths);
    println!(
        "   {:.6} ± {:.6} against exact {}",
        summary.mean_square, summary.std_error, summary.expected_mean_square
    );

    // 3. Plot-ready export: one column per path, first column is time
    println!("\n3. Exporting paths for plotting...");
    let filename = "brownian_paths.csv";
    match write_paths_to_csv(filename, &paths) {
        Ok(()) => println!("   ✓ Wrote {} ({} rows x {} paths)", filename, n + 1, n_ens),
        Err(e) => println!("   Error writing {}: {}", filename, e),
    }

    // 4. Rejected requests
    println!("\n4. Invalid requests...");
    for &(t, n, n_ens) in &[(1.0, 0, 1), (0.0, 10, 1), (1.0, 10, 0), (5e-324, 10, 1)] {
        match generate_paths(t, n, n_ens, &mut rng) {
            Ok(_) => println!("   Unexpected: ({}, {}, {}) should have failed!", t, n, n_ens),
            Err(e) => println!("   ✓ Caught error: {}", e),
        }
    }

    println!("\nDemo complete.");
}
