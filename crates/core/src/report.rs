//! Text output for finished (or intermediate) grids
//!
//! The format is one line per row, top to bottom, one digit per cell
//! (`0` dead, `1` alive), every row newline-terminated, no header.

use crate::core_types::Grid;
use crate::error::LifeError;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Serialize `grid` as rows of digits
///
/// # Errors
///
/// Propagates any error from `writer`.
pub fn write_grid<W: Write>(grid: &Grid, writer: &mut W) -> io::Result<()> {
    let mut line = Vec::with_capacity(grid.width() + 1);
    for row in grid.rows() {
        line.clear();
        line.extend(row.iter().map(|cell| cell.as_digit()));
        line.push(b'\n');
        writer.write_all(&line)?;
    }
    Ok(())
}

/// Destination for grid snapshots
pub trait GridSink {
    /// Emit a grid, optionally labelled with the generation it belongs to
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::Io`] if the grid cannot be written.
    fn emit(&mut self, grid: &Grid, generation: Option<u64>) -> Result<(), LifeError>;
}

/// Writes the grid to a file, replacing any previous contents
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Sink writing to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Output file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GridSink for FileSink {
    fn emit(&mut self, grid: &Grid, _generation: Option<u64>) -> Result<(), LifeError> {
        let file = File::create(&self.path).map_err(|e| LifeError::io_at(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        write_grid(grid, &mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| LifeError::io_at(&self.path, e))?;

        info!(
            "Wrote {}x{} grid to {}",
            grid.height(),
            grid.width(),
            self.path.display()
        );
        Ok(())
    }
}

/// Framed grid dump for interactive inspection
///
/// ```text
/// t:3
/// -----
/// 00100
/// ...
/// -----
///
/// ```
///
/// The `t:` line only appears when a generation is given.
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl ConsoleSink<io::Stdout> {
    /// Console sink on standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Console sink on any writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_framed(&mut self, grid: &Grid, generation: Option<u64>) -> io::Result<()> {
        let rule = "-".repeat(grid.width());
        let mut out = BufWriter::new(&mut self.writer);
        if let Some(generation) = generation {
            writeln!(out, "t:{generation}")?;
        }
        writeln!(out, "{rule}")?;
        write_grid(grid, &mut out)?;
        writeln!(out, "{rule}")?;
        writeln!(out)?;
        out.flush()
    }
}

impl<W: Write> GridSink for ConsoleSink<W> {
    fn emit(&mut self, grid: &Grid, generation: Option<u64>) -> Result<(), LifeError> {
        self.write_framed(grid, generation).map_err(LifeError::from)
    }
}
