//! Committing a finished byte buffer to disk.

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use tracing::debug;

use crate::errors::ConvertError;

fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.flush()
}

/// Creates or truncates `path` and fills it with exactly `bytes`: no header,
/// no padding.
///
/// Only called once the whole dump has been validated, so a bad dump never
/// touches an existing image. Symlinks, hard links, ownership and mode of an
/// existing image are kept.
pub fn write_image(path: &Path, bytes: &[u8]) -> Result<(), ConvertError> {
    debug!(path = %path.display(), bytes = bytes.len(), "committing image");
    write_file(path, bytes).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}
