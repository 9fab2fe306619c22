use std::fs::File;
use std::io::prelude::*;
use std::io::{self, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::errors::ConvertError;
use crate::image::write_image;
use crate::record::{parse_record, OutOfRange, Record};

/// Splits a `\n` terminated chunk into the lines it holds, treating `\r\n`
/// and a lone `\r` as terminators as well.
fn split_lines(chunk: &str) -> impl Iterator<Item = &str> {
    chunk.strip_suffix('\r').unwrap_or(chunk).split('\r')
}

/// Folds a text dump into a byte buffer, one byte per valid record.
///
/// `path` is only used to label read errors.
pub fn collect_bytes<R: BufRead>(reader: R, path: &Path) -> Result<Vec<u8>, ConvertError> {
    let read_error = |source: io::Error| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut bytes = vec![];
    let mut line_number = 0;
    for chunk in reader.split(b'\n') {
        let chunk = chunk.map_err(read_error)?;
        let chunk = String::from_utf8(chunk)
            .map_err(|e| read_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        for line in split_lines(&chunk) {
            line_number += 1;
            match parse_record(line) {
                Ok(Record::Byte(byte)) => bytes.push(byte),
                Ok(Record::Blank) | Ok(Record::Short) | Ok(Record::NotNumeric) => {}
                Err(OutOfRange { value }) => {
                    return Err(ConvertError::OutOfRange {
                        line: line_number,
                        value,
                    })
                }
            }
        }
    }
    Ok(bytes)
}

pub fn read_bytes(path: &Path) -> Result<Vec<u8>, ConvertError> {
    debug!(path = %path.display(), "reading dump");
    let file = File::open(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    collect_bytes(BufReader::new(file), path)
}

/// Reads `config.input`, and only once every line has been validated
/// replaces `config.output` with the image. Returns the image length.
pub fn convert(config: &Config) -> Result<usize, ConvertError> {
    let bytes = read_bytes(&config.input)?;
    write_image(&config.output, &bytes)?;
    info!(
        bytes = bytes.len(),
        output = %config.output.display(),
        "image written"
    );
    Ok(bytes.len())
}
