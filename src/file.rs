// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::csv::write_row;
use crate::error::ScrapeError;
use crate::extract::DataSet;

/// Create the missing directory components of the output path's parent.
pub fn ensure_parent_dir(path: &Path) -> Result<(), ScrapeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("path exists but is not a directory: {}", dir.display()),
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Write header row + records as comma-separated CSV. Creates or truncates
/// the file; flushed before the caller reports success.
pub fn write_dataset(path: &Path, data: &DataSet) -> Result<(), ScrapeError> {
    ensure_parent_dir(path)?;
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_row(&mut out, &data.headers, ',')?;
    for row in &data.rows {
        write_row(&mut out, row, ',')?;
    }
    out.flush()?;
    Ok(())
}
