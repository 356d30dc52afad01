use super::error::IoError;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

fn io_error(path: &Path, source: std::io::Error) -> IoError {
    IoError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn json_error(path: &Path, source: serde_json::Error) -> IoError {
    IoError::Json {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads a JSON document, decompressing it first if the file name ends in `.gz`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, IoError> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let reader: Box<dyn Read> = if is_gzip(path) {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    serde_json::from_reader(reader).map_err(|e| json_error(path, e))
}

/// Writes a JSON document, gzip-compressing it if the file name ends in `.gz`.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), IoError> {
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    if is_gzip(path) {
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        serde_json::to_writer(&mut encoder, value).map_err(|e| json_error(path, e))?;
        let mut inner = encoder.finish().map_err(|e| io_error(path, e))?;
        inner.flush().map_err(|e| io_error(path, e))
    } else {
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, value).map_err(|e| json_error(path, e))?;
        writer.flush().map_err(|e| io_error(path, e))
    }
}
