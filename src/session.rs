use crate::{capture::capture, context::ReadBack, error::Result};
use log::{error, info};
use std::path::{Path, PathBuf};

/// File name prefix used by [`Session::default`].
pub const DEFAULT_PREFIX: &str = "framegrab-ss";

/// Extension of every screenshot file.
pub const EXTENSION: &str = "ppm";

/// Caller-side screenshot state: where screenshots go and which number comes next.
///
/// Screenshots are named `{prefix}{id}.ppm`, `id` counting up from 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    prefix: String,
    dir: PathBuf,
    next_id: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl Session {
    /// Create a session writing to the current directory.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            dir: PathBuf::from("."),
            next_id: 0,
        }
    }

    /// Write screenshots into `dir` instead of the current directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of screenshots taken successfully so far.
    pub fn captured(&self) -> u32 {
        self.next_id
    }

    /// The path the next screenshot will be written to.
    pub fn next_path(&self) -> PathBuf {
        self.dir.join(format!("{}{}.{}", self.prefix, self.next_id, EXTENSION))
    }

    /// Capture the whole current framebuffer of `ctx` to [`Session::next_path`].
    ///
    /// The counter only advances when the capture succeeds, so numbering has no gaps.
    pub fn screenshot<C: ReadBack + ?Sized>(&mut self, ctx: &C) -> Result<PathBuf> {
        let [width, height] = ctx.framebuffer_size();
        let path = self.next_path();

        info!("Capture Window {}", self.next_id);
        match capture(ctx, width, height, &path) {
            Ok(()) => {
                self.next_id += 1;
                Ok(path)
            }
            Err(err) => {
                error!("Screenshot {} failed: {}", self.next_id, err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_the_counter() {
        let session = Session::new("Assignment0-ss").in_dir("shots");
        assert_eq!(session.captured(), 0);
        assert_eq!(session.next_path(), Path::new("shots").join("Assignment0-ss0.ppm"));
        assert_eq!(session.dir(), Path::new("shots"));
    }

    #[test]
    fn default_writes_to_the_working_directory() {
        let session = Session::default();
        assert_eq!(session.next_path(), Path::new(".").join("framegrab-ss0.ppm"));
    }
}
