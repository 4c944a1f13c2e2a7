//! Framebuffer capture to plain-text PPM (`P3`) files.
//!
//! A capture reads the colour buffer of a [`ReadBack`] context once and writes it as:
//!
//! ```text
//! P3
//! <width> <height>
//! 255
//! <r> <g> <b> <r> <g> <b> ...
//! ```
//!
//! with one line per image row, visual top row first. Every channel value is followed by a single space and every row
//! by a newline.

use crate::{
    context::{ReadBack, RowOrder, CHANNELS},
    error::{CaptureError, Result},
};
use log::{debug, info, warn};
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

/// The maximum channel value declared in the header.
pub const MAX_CHANNEL_VALUE: u8 = u8::MAX;

/// A single capture: the region to read back and where to write it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CaptureRequest {
    pub width: usize,
    pub height: usize,
    pub path: PathBuf,
}

impl CaptureRequest {
    pub fn new(width: usize, height: usize, path: impl Into<PathBuf>) -> Self {
        Self {
            width,
            height,
            path: path.into(),
        }
    }

    /// Number of bytes a read-back of this request produces.
    ///
    /// Fails with [`CaptureError::InvalidArgument`] when either dimension is zero or the size overflows.
    pub fn sample_count(&self) -> Result<usize> {
        if self.width == 0 || self.height == 0 {
            return Err(CaptureError::InvalidArgument(format!(
                "capture size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        self.width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(|| {
                CaptureError::InvalidArgument(format!(
                    "capture size {}x{} is too large",
                    self.width, self.height
                ))
            })
    }
}

/// Read back a `width` x `height` region of `ctx` and write it to `path` as a plain-text PPM image.
///
/// The size is not checked against the real framebuffer: callers normally query it right before capturing. Any part
/// of the region outside of the framebuffer comes out as whatever the backend returns there.
///
/// The file is created or truncated and written in place. If writing fails part way, the file is removed again.
pub fn capture<C: ReadBack + ?Sized>(
    ctx: &C,
    width: usize,
    height: usize,
    path: impl AsRef<Path>,
) -> Result<()> {
    capture_request(ctx, &CaptureRequest::new(width, height, path.as_ref()))
}

/// Like [`capture`], taking a prepared [`CaptureRequest`].
pub fn capture_request<C: ReadBack + ?Sized>(ctx: &C, request: &CaptureRequest) -> Result<()> {
    let len = request.sample_count()?;
    let size = [request.width, request.height];

    let fb_size = ctx.framebuffer_size();
    if fb_size != size {
        warn!(
            "Capturing {}x{} from a {}x{} framebuffer",
            size[0], size[1], fb_size[0], fb_size[1]
        );
    }

    let mut pixels = ctx.read_pixels(size);
    if pixels.len() != len {
        debug!("Read-back returned {} bytes, expected {}", pixels.len(), len);
        pixels.resize(len, 0);
    }

    let row_order = ctx.row_order();
    write_in_place(&request.path, |out| encode_ppm(&pixels, size, row_order, out))?;

    info!(
        "Wrote {}x{} capture to {}",
        size[0],
        size[1],
        request.path.display()
    );
    Ok(())
}

/// Encode an RGB pixel buffer as a plain-text PPM image.
///
/// `pixels` holds `width * height` RGB triplets, rows stored in `row_order`. Rows are emitted visual top first, so a
/// [`RowOrder::BottomUp`] buffer is flipped. A short buffer produces short rows; nothing is validated.
pub fn encode_ppm<W: Write + ?Sized>(
    pixels: &[u8],
    [width, height]: [usize; 2],
    row_order: RowOrder,
    out: &mut W,
) -> io::Result<()> {
    write!(out, "P3\n{} {}\n{}\n", width, height, MAX_CHANNEL_VALUE)?;

    let row_len = width * CHANNELS;
    for i in 0..height {
        let row = match row_order {
            RowOrder::BottomUp => height - i - 1,
            RowOrder::TopDown => i,
        };
        let start = row * row_len;
        let end = (start + row_len).min(pixels.len());
        for sample in pixels.get(start..end).unwrap_or(&[]) {
            write!(out, "{} ", sample)?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Create or truncate `path` and write it in one pass, removing it again if anything fails.
///
/// Writing in place keeps the destination's permissions and any symlink at `path`.
fn write_in_place<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let io_err = |source: io::Error| CaptureError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let written = {
        let mut out = BufWriter::new(file);
        let result = write(&mut out).and_then(|()| out.flush());
        result
    };

    written.map_err(|err| {
        if let Err(rm_err) = fs::remove_file(path) {
            warn!("Failed to remove partial capture {}: {}", path.display(), rm_err);
        }
        io_err(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(pixels: &[u8], size: [usize; 2], row_order: RowOrder) -> String {
        let mut out = Vec::new();
        encode_ppm(pixels, size, row_order, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn single_row() {
        assert_eq!(
            encode(&[10, 20, 30, 40, 50, 60], [2, 1], RowOrder::BottomUp),
            "P3\n2 1\n255\n10 20 30 40 50 60 \n"
        );
    }

    #[test]
    fn bottom_up_rows_are_flipped() {
        let pixels = [1, 1, 1, 2, 2, 2];
        assert_eq!(
            encode(&pixels, [1, 2], RowOrder::BottomUp),
            "P3\n1 2\n255\n2 2 2 \n1 1 1 \n"
        );
        assert_eq!(
            encode(&pixels, [1, 2], RowOrder::TopDown),
            "P3\n1 2\n255\n1 1 1 \n2 2 2 \n"
        );
    }

    #[test]
    fn short_buffers_produce_short_rows() {
        assert_eq!(
            encode(&[5, 6, 7], [1, 2], RowOrder::BottomUp),
            "P3\n1 2\n255\n\n5 6 7 \n"
        );
    }

    #[test]
    fn zero_sized_requests_are_rejected() {
        for &(w, h) in &[(0, 1), (1, 0), (0, 0)] {
            let err = CaptureRequest::new(w, h, "x.ppm").sample_count().unwrap_err();
            assert!(matches!(err, CaptureError::InvalidArgument(_)), "{:?}", err);
        }
        assert!(matches!(
            CaptureRequest::new(usize::MAX, 2, "x.ppm").sample_count(),
            Err(CaptureError::InvalidArgument(_))
        ));
        assert_eq!(CaptureRequest::new(4, 3, "x.ppm").sample_count().unwrap(), 36);
    }

    #[test]
    fn failed_writes_leave_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ppm");
        std::fs::write(&path, "old").unwrap();

        let err = write_in_place(&path, |out| {
            out.write_all(b"P3\n")?;
            Err(io::Error::new(io::ErrorKind::Other, "read-back lost"))
        })
        .unwrap_err();

        assert!(err.is_io(), "{:?}", err);
        assert!(!path.exists());
    }
}
