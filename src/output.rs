// src/output.rs
use crate::paths::BrownianPaths;
use bitflags::bitflags;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

bitflags! {
    /// What a driver run emits besides the terminal mean square
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Outputs: u32 {
        const SUMMARY    = 1 << 0;
        const PATHS      = 1 << 1;
        const INCREMENTS = 1 << 2;
    }
}

/// One row per time-grid point: `t,path_0,...,path_{N_ens-1}`
pub fn write_paths<W: Write>(out: &mut W, paths: &BrownianPaths) -> io::Result<()> {
    write_header(out, "t", paths.ensemble_size())?;
    let grid = paths.time_grid();
    for (j, t) in grid.iter().enumerate() {
        write!(out, "{}", t)?;
        for w in paths.w().column(j) {
            write!(out, ",{}", w)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// One row per step: `step,path_0,...,path_{N_ens-1}`
pub fn write_increments<W: Write>(out: &mut W, paths: &BrownianPaths) -> io::Result<()> {
    write_header(out, "step", paths.ensemble_size())?;
    for j in 0..paths.steps() {
        write!(out, "{}", j)?;
        for dw in paths.dw().column(j) {
            write!(out, ",{}", dw)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_header<W: Write>(out: &mut W, first: &str, ensemble: usize) -> io::Result<()> {
    write!(out, "{}", first)?;
    for k in 0..ensemble {
        write!(out, ",path_{}", k)?;
    }
    writeln!(out)
}

pub fn write_paths_to_csv<P: AsRef<Path>>(filename: P, paths: &BrownianPaths) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    write_paths(&mut file, paths)?;
    file.flush()
}

pub fn write_increments_to_csv<P: AsRef<Path>>(
    filename: P,
    paths: &BrownianPaths,
) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    write_increments(&mut file, paths)?;
    file.flush()
}
