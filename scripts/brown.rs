use std::env;
use std::process;
use wiener_paths::cli::{self, CliOptions};
use wiener_paths::error::PathError;
use wiener_paths::output::Outputs;
use wiener_paths::stats::{mean_square_terminal, TerminalSummary};

const EXIT_IO: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn main() {
    let opts = match cli::parse_args(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(e) => fail_usage(&e),
    };

    if opts.help {
        println!("{}", cli::USAGE);
        return;
    }

    run(&opts);
}

fn run(opts: &CliOptions) {
    let cfg = &opts.config;
    let result = if opts.parallel {
        cfg.generate_par()
    } else {
        cfg.generate()
    };
    let paths = match result {
        Ok(paths) => paths,
        Err(e) => fail_usage(&e),
    };

    if let Err(e) = opts.write_exports(&paths) {
        eprintln!("error: {}", e);
        process::exit(EXIT_IO);
    }

    println!("{}", mean_square_terminal(&paths));

    if !opts.outputs.contains(Outputs::SUMMARY) {
        return;
    }

    let summary = TerminalSummary::from_paths(&paths);
    println!();
    println!("Brownian ensemble");
    println!("  horizon T:        {}", cfg.horizon);
    println!("  steps N:          {} (dt = {:.6})", cfg.steps, cfg.dt());
    println!("  ensemble N_ens:   {}", cfg.ensemble);
    let streams = if opts.parallel { " (parallel streams)" } else { "" };
    println!("  seed:             {}{}", cfg.seed, streams);
    println!("  mean W(T):        {:.6}", summary.mean);
    println!("  var W(T):         {:.6}", summary.variance);
    println!(
        "  mean W(T)^2:      {:.6} ± {:.6} (exact {})",
        summary.mean_square, summary.std_error, summary.expected_mean_square
    );
    if let Some(p) = summary.p_value() {
        println!("  p-value vs T:     {:.4}", p);
    }

    if cfg.ensemble < 30 {
        eprintln!(
            "WARNING!: ensemble of {} paths is too small for a reliable Monte Carlo estimate.",
            cfg.ensemble
        );
    } else if !summary.within_sigma(3.0) {
        eprintln!("WARNING!: mean W(T)^2 is more than 3 standard errors away from T.");
    }
}

fn fail_usage(e: &PathError) -> ! {
    eprintln!("error: {}", e);
    if matches!(e, PathError::InvalidConfiguration { .. }) {
        eprintln!("{}", cli::USAGE);
    }
    process::exit(EXIT_USAGE);
}
