use std::fmt;

use serde::Serialize;

use crate::error::EvalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shape {
    pub height: usize,
    pub width: usize,
}

impl Shape {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// Decoded image as handed over by a loader: row-major, channel-last integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
    pub values: Vec<i64>,
}

impl RawImage {
    pub fn new(
        height: usize,
        width: usize,
        channels: usize,
        values: Vec<i64>,
    ) -> Result<Self, EvalError> {
        let expected = buffer_len(height, width, channels, values.len())?;
        if channels == 0 || values.len() != expected {
            return Err(EvalError::InvalidBuffer {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            height,
            width,
            channels,
            values,
        })
    }

    pub fn to_mask(&self) -> Mask {
        Mask {
            shape: Shape::new(self.height, self.width),
            pixels: collapse_channels(&self.values, self.channels),
        }
    }
}

/// Binary mask. Multi-channel input is summed per pixel before the boolean cast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    shape: Shape,
    pixels: Vec<bool>,
}

impl Mask {
    pub fn from_bools(height: usize, width: usize, pixels: Vec<bool>) -> Result<Self, EvalError> {
        let expected = buffer_len(height, width, 1, pixels.len())?;
        if pixels.len() != expected {
            return Err(EvalError::InvalidBuffer {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            shape: Shape::new(height, width),
            pixels,
        })
    }

    pub fn from_values<T>(height: usize, width: usize, values: &[T]) -> Result<Self, EvalError>
    where
        T: Copy + Into<i64>,
    {
        Self::from_channels(height, width, 1, values)
    }

    pub fn from_channels<T>(
        height: usize,
        width: usize,
        channels: usize,
        values: &[T],
    ) -> Result<Self, EvalError>
    where
        T: Copy + Into<i64>,
    {
        let expected = buffer_len(height, width, channels, values.len())?;
        if channels == 0 || values.len() != expected {
            return Err(EvalError::InvalidBuffer {
                expected,
                actual: values.len(),
            });
        }
        let widened = values.iter().map(|&v| v.into()).collect::<Vec<i64>>();
        Ok(Self {
            shape: Shape::new(height, width),
            pixels: collapse_channels(&widened, channels),
        })
    }

    /// Builds a mask from nested rows, mostly for fixtures.
    pub fn from_rows<T>(rows: &[Vec<T>]) -> Result<Self, EvalError>
    where
        T: Copy + Into<i64>,
    {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut flat: Vec<i64> = Vec::with_capacity(height * width);
        for row in rows {
            if row.len() != width {
                return Err(EvalError::InvalidBuffer {
                    expected: width,
                    actual: row.len(),
                });
            }
            flat.extend(row.iter().map(|&v| v.into()));
        }
        Self::from_values(height, width, &flat)
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    pub fn get(&self, y: usize, x: usize) -> Option<bool> {
        if y >= self.shape.height || x >= self.shape.width {
            return None;
        }
        self.pixels.get(y * self.shape.width + x).copied()
    }

    pub fn count_positive(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    pub fn inverted(&self) -> Mask {
        Mask {
            shape: self.shape,
            pixels: self.pixels.iter().map(|&p| !p).collect(),
        }
    }
}

/// Element count for `height x width x channels`; dimensions whose product
/// overflows can never match a real buffer.
fn buffer_len(
    height: usize,
    width: usize,
    channels: usize,
    actual: usize,
) -> Result<usize, EvalError> {
    height
        .checked_mul(width)
        .and_then(|pixels| pixels.checked_mul(channels))
        .ok_or(EvalError::InvalidBuffer {
            expected: usize::MAX,
            actual,
        })
}

// Summed in i128 so extreme channel values cannot wrap to zero.
fn collapse_channels(values: &[i64], channels: usize) -> Vec<bool> {
    values
        .chunks_exact(channels)
        .map(|px| px.iter().map(|&v| i128::from(v)).sum::<i128>() != 0)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/mask.rs"]
mod tests;
