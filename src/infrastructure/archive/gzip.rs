//! Gzip compression of saved archives
//!
//! The runtime always writes a plain tar. With `--gzip` we stream it through
//! a gzip encoder into a temp file in the same directory, rename that to
//! `<name>.tar.gz`, and drop the plain tar.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::NamedTempFile;

use crate::domain::services::gz_path;
use crate::error::{ImagesError, ImagesResult};

/// Compress `tar_path` to `<tar_path>.gz` and remove the original.
pub fn gzip_in_place(tar_path: &Path) -> ImagesResult<PathBuf> {
    let target = gz_path(tar_path);
    compress(tar_path, &target).map_err(|source| ImagesError::Compress {
        path: tar_path.to_path_buf(),
        source,
    })?;
    Ok(target)
}

fn compress(source: &Path, target: &Path) -> io::Result<()> {
    let dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut input = BufReader::new(File::open(source)?);
    let temp = NamedTempFile::new_in(dir)?;

    let mut encoder = GzEncoder::new(BufWriter::new(temp), Compression::default());
    io::copy(&mut input, &mut encoder)?;
    let mut writer = encoder.finish()?;
    writer.flush()?;
    let temp = writer.into_inner().map_err(|e| e.into_error())?;

    temp.persist(target).map_err(|e| e.error)?;
    std::fs::remove_file(source)?;
    Ok(())
}
