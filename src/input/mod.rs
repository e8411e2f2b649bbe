use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;

pub mod frames;

pub use frames::{Frame, load_frames};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error at {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("frame {frame}: expected at least {expected} landmarks, got {actual}")]
    ShortLandmarkSet {
        frame: usize,
        expected: usize,
        actual: usize,
    },
    #[error("frame {frame}, landmark {landmark}: {msg}")]
    InvalidLandmark {
        frame: usize,
        landmark: usize,
        msg: String,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Reads the whole file, gunzipping when the name ends in `.gz`.
pub fn read_maybe_gz(path: &Path) -> Result<String, InputError> {
    let file = File::open(path)?;
    let mut out = String::new();
    if path.extension().is_some_and(|ext| ext == "gz") {
        MultiGzDecoder::new(BufReader::new(file)).read_to_string(&mut out)?;
    } else {
        BufReader::new(file).read_to_string(&mut out)?;
    }
    Ok(out)
}
