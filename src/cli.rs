// src/cli.rs
//! Argument handling for the `brown` driver

use crate::error::{PathError, PathResult};
use crate::output::{self, Outputs};
use crate::paths::{BrownianPaths, PathConfig};
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_PATHS_FILE: &str = "brownian_paths.csv";
pub const DEFAULT_INCREMENTS_FILE: &str = "brownian_increments.csv";

pub const USAGE: &str = "\
usage: brown [--horizon T] [--steps N] [--ensemble N_ENS] [--seed SEED]
             [--paths] [--csv FILE] [--dw] [--increments FILE]
             [--parallel] [--quiet]

  --horizon T        simulated time span (default 1.0)
  --steps N          number of time steps (default 500)
  --ensemble N_ENS   number of independent paths (default 100)
  --seed SEED        random seed (default 0)
  --paths            write the time grid and paths to brownian_paths.csv
  --csv FILE         same as --paths, written to FILE
  --dw               write the increments to brownian_increments.csv
  --increments FILE  same as --dw, written to FILE
  --parallel         one random stream per path, rows generated in parallel
  --quiet            print only the terminal mean square";

#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub config: PathConfig,
    /// Selects what is written; the file names below are only used when
    /// the matching flag is set
    pub outputs: Outputs,
    pub paths_file: PathBuf,
    pub increments_file: PathBuf,
    pub parallel: bool,
    pub help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            config: PathConfig::default(),
            outputs: Outputs::SUMMARY,
            paths_file: PathBuf::from(DEFAULT_PATHS_FILE),
            increments_file: PathBuf::from(DEFAULT_INCREMENTS_FILE),
            parallel: false,
            help: false,
        }
    }
}

/// Parse driver flags (program name already stripped)
///
/// The resulting configuration is validated, so a successful parse can be
/// handed straight to the generator.
pub fn parse_args<I, S>(args: I) -> PathResult<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut opts = CliOptions::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--horizon" => opts.config.horizon = parse_value(&flag, args.next())?,
            "--steps" => opts.config.steps = parse_value(&flag, args.next())?,
            "--ensemble" => opts.config.ensemble = parse_value(&flag, args.next())?,
            "--seed" => opts.config.seed = parse_value(&flag, args.next())?,
            "--paths" => opts.outputs |= Outputs::PATHS,
            "--csv" => {
                opts.paths_file = PathBuf::from(require_value(&flag, args.next())?);
                opts.outputs |= Outputs::PATHS;
            }
            "--dw" => opts.outputs |= Outputs::INCREMENTS,
            "--increments" => {
                opts.increments_file = PathBuf::from(require_value(&flag, args.next())?);
                opts.outputs |= Outputs::INCREMENTS;
            }
            "--parallel" => opts.parallel = true,
            "--quiet" => opts.outputs.remove(Outputs::SUMMARY),
            "-h" | "--help" => opts.help = true,
            other => {
                return Err(PathError::InvalidConfiguration {
                    field: other.to_string(),
                    reason: "unknown flag".to_string(),
                })
            }
        }
    }

    if !opts.help {
        opts.config.validate()?;
    }
    Ok(opts)
}

impl CliOptions {
    /// Write every CSV export selected in `outputs`, returning the files written
    ///
    /// Errors carry the offending file name in their message.
    pub fn write_exports(&self, paths: &BrownianPaths) -> io::Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        if self.outputs.contains(Outputs::PATHS) {
            output::write_paths_to_csv(&self.paths_file, paths)
                .map_err(|e| with_file(&self.paths_file, e))?;
            written.push(self.paths_file.clone());
        }
        if self.outputs.contains(Outputs::INCREMENTS) {
            output::write_increments_to_csv(&self.increments_file, paths)
                .map_err(|e| with_file(&self.increments_file, e))?;
            written.push(self.increments_file.clone());
        }
        Ok(written)
    }
}

fn with_file(file: &Path, e: io::Error) -> io::Error {
    io::Error::new(e.kind(), format!("cannot write {}: {}", file.display(), e))
}

fn require_value(flag: &str, value: Option<String>) -> PathResult<String> {
    value.ok_or_else(|| PathError::InvalidConfiguration {
        field: flag.to_string(),
        reason: "missing value".to_string(),
    })
}

fn parse_value<T: FromStr>(flag: &str, value: Option<String>) -> PathResult<T> {
    let raw = require_value(flag, value)?;
    raw.parse().map_err(|_| PathError::InvalidConfiguration {
        field: flag.to_string(),
        reason: format!("cannot parse '{}'", raw),
    })
}
