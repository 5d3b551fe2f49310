use std::io::BufRead;
use std::path::Path;

use crate::input::open::open_maybe_gz;
use crate::input::{LoadError, MaskDecoder};
use crate::model::mask::RawImage;

/// Plain-text pixel grid, optionally gzipped.
///
/// One image row per line, pixels separated by whitespace, channels of a
/// pixel separated by commas (`0,0,255`). Blank lines and lines starting
/// with `#` are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextGridDecoder;

impl MaskDecoder for TextGridDecoder {
    fn decode(&self, path: &Path) -> Result<RawImage, LoadError> {
        let mut reader = open_maybe_gz(path)?;
        let mut buf = String::new();
        let mut values = Vec::new();
        let mut width: Option<usize> = None;
        let mut channels: Option<usize> = None;
        let mut height = 0usize;
        let mut line_no = 0usize;

        loop {
            buf.clear();
            let read = reader.read_line(&mut buf)?;
            if read == 0 {
                break;
            }
            line_no += 1;
            let line = buf.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut row_width = 0usize;
            for token in line.split_whitespace() {
                let mut pixel_channels = 0usize;
                for part in token.split(',') {
                    let v = part.parse::<i64>().map_err(|_| LoadError::Parse {
                        path: path.to_path_buf(),
                        msg: format!("line {line_no}: invalid pixel value '{part}'"),
                    })?;
                    values.push(v);
                    pixel_channels += 1;
                }
                match channels {
                    None => channels = Some(pixel_channels),
                    Some(c) if c != pixel_channels => {
                        return Err(LoadError::Parse {
                            path: path.to_path_buf(),
                            msg: format!(
                                "line {line_no}: expected {c} channels, found {pixel_channels}"
                            ),
                        });
                    }
                    Some(_) => {}
                }
                row_width += 1;
            }

            match width {
                None => width = Some(row_width),
                Some(w) if w != row_width => {
                    return Err(LoadError::Parse {
                        path: path.to_path_buf(),
                        msg: format!("line {line_no}: expected {w} pixels, found {row_width}"),
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let (Some(width), Some(channels)) = (width, channels) else {
            return Err(LoadError::Parse {
                path: path.to_path_buf(),
                msg: "image is empty".to_string(),
            });
        };

        RawImage::new(height, width, channels, values).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            msg: e.to_string(),
        })
    }
}
