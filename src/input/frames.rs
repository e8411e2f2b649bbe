use std::path::Path;

use serde::Deserialize;

use crate::input::{InputError, read_maybe_gz};
use crate::model::landmarks::{BodyJoints, LANDMARK_COUNT, Landmark, MIN_LANDMARKS};

/// One detector output. `landmarks` is `None` when no body was detected.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: usize,
    /// Seconds since the start of the stream.
    pub t: f64,
    pub landmarks: Option<Vec<Landmark>>,
}

impl Frame {
    pub fn joints(&self) -> Option<BodyJoints> {
        self.landmarks
            .as_deref()
            .map(BodyJoints::from_landmarks)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFrame {
    #[serde(default)]
    t: Option<f64>,
    landmarks: Vec<RawLandmark>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLandmark {
    Array(Vec<f64>),
    Object {
        x: f64,
        y: f64,
        #[serde(default)]
        z: Option<f64>,
        #[serde(default)]
        visibility: Option<f64>,
    },
}

pub fn load_frames(path: &Path, fps: f64) -> Result<Vec<Frame>, InputError> {
    let text = read_maybe_gz(path)?;
    let frames = parse_frames(&text, fps)?;
    let detected = frames.iter().filter(|f| f.landmarks.is_some()).count();
    tracing::info!(
        path = %path.display(),
        frames = frames.len(),
        detected,
        "loaded landmark frames"
    );
    Ok(frames)
}

/// Accepts a JSON array of frames or JSON Lines (one frame object per line).
pub fn parse_frames(text: &str, fps: f64) -> Result<Vec<Frame>, InputError> {
    if !(fps > 0.0) {
        return Err(InputError::InvalidInput(format!(
            "fps must be positive, got {fps}"
        )));
    }

    let raw = if text.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<RawFrame>>(text).map_err(|source| InputError::Parse {
            location: format!("line {}, column {}", source.line(), source.column()),
            source,
        })?
    } else {
        let mut out = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let frame = serde_json::from_str::<RawFrame>(line).map_err(|source| {
                InputError::Parse {
                    location: format!("line {}", line_no + 1),
                    source,
                }
            })?;
            out.push(frame);
        }
        out
    };

    let mut frames = Vec::with_capacity(raw.len());
    let mut last_t = f64::NEG_INFINITY;
    for (index, frame) in raw.into_iter().enumerate() {
        let t = frame.t.unwrap_or(index as f64 / fps);
        if t < last_t {
            tracing::warn!(frame = index, t, previous = last_t, "frame timestamp goes backwards");
        }
        last_t = t;
        let landmarks = convert_landmarks(index, frame.landmarks)?;
        frames.push(Frame {
            index,
            t,
            landmarks,
        });
    }
    Ok(frames)
}

fn convert_landmarks(
    frame: usize,
    raw: Vec<RawLandmark>,
) -> Result<Option<Vec<Landmark>>, InputError> {
    if raw.is_empty() {
        return Ok(None);
    }
    if raw.len() < MIN_LANDMARKS {
        return Err(InputError::ShortLandmarkSet {
            frame,
            expected: MIN_LANDMARKS,
            actual: raw.len(),
        });
    }
    if raw.len() > LANDMARK_COUNT {
        tracing::debug!(
            frame,
            count = raw.len(),
            "frame has more landmarks than the body layout; extras are ignored"
        );
    }

    let mut out = Vec::with_capacity(raw.len());
    for (landmark, item) in raw.into_iter().enumerate() {
        let lm = match item {
            RawLandmark::Array(values) => match values.as_slice() {
                [x, y] => Landmark::new(*x, *y),
                [x, y, z] => Landmark {
                    z: Some(*z),
                    ..Landmark::new(*x, *y)
                },
                [x, y, z, v] => Landmark {
                    x: *x,
                    y: *y,
                    z: Some(*z),
                    visibility: Some(*v),
                },
                _ => {
                    return Err(InputError::InvalidLandmark {
                        frame,
                        landmark,
                        msg: format!("expected 2 to 4 coordinates, got {}", values.len()),
                    });
                }
            },
            RawLandmark::Object {
                x,
                y,
                z,
                visibility,
            } => Landmark { x, y, z, visibility },
        };
        out.push(lm);
    }
    Ok(Some(out))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/frames.rs"]
mod tests;
