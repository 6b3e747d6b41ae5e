//! Reads requests and signals from, and writes results to, a file or the standard streams.
use moving_window::Real;
use serde::Serialize;
use serde_json::Value;
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub(crate) enum SignalIoError {
    #[error("Cannot open {0}: {1}")]
    Open(PathBuf, io::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses a single JSON value from the reader.
pub(crate) fn read_json<R: Read>(reader: R) -> Result<Value, SignalIoError> {
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}

/// Parses a single JSON value from the file, or from stdin if no path is given.
#[instrument(skip_all, level = "debug", fields(path = ?path), err(level = "warn"))]
pub(crate) fn read_input(path: Option<&Path>) -> Result<Value, SignalIoError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| SignalIoError::Open(path.to_owned(), e))?;
            read_json(file)
        }
        None => {
            debug!("Reading from stdin");
            read_json(io::stdin().lock())
        }
    }
}

/// The output of a command, written as a JSON array.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct Output(pub(crate) Vec<Real>);

/// Writes the output as JSON, followed by a newline.
pub(crate) fn write_json<W: Write>(
    writer: W,
    output: &Output,
    pretty: bool,
) -> Result<(), SignalIoError> {
    let mut writer = BufWriter::new(writer);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, output)?;
    } else {
        serde_json::to_writer(&mut writer, output)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes the output to the file, or to stdout if no path is given.
#[instrument(
    skip_all,
    level = "debug",
    fields(path = ?path, len = output.0.len()),
    err(level = "warn")
)]
pub(crate) fn write_output(
    path: Option<&Path>,
    output: &Output,
    pretty: bool,
) -> Result<(), SignalIoError> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| SignalIoError::Open(path.to_owned(), e))?;
            write_json(file, output, pretty)
        }
        None => write_json(io::stdout().lock(), output, pretty),
    }
}
