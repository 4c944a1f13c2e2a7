//! A tiny software-rendered triangle with framebuffer dumps to plain-text PPM.
//!
//! The crate has two halves:
//!
//! - A small rasterizer ([`Pipeline`], [`Triangles`], [`Buffer2d`]) drawing into a [`SoftContext`], whose colour
//!   buffer is laid out bottom row first like an OpenGL framebuffer.
//! - [`capture`], which reads back the colour buffer of any [`ReadBack`] context and writes it as a `P3` image, top
//!   row first. A [`Session`] owns the screenshot counter and names the files.
//!
//! ```no_run
//! use framegrab::{scene, Session};
//!
//! let mut ctx = scene::context();
//! let mut session = Session::new("triangle-ss");
//!
//! scene::render(&mut ctx);
//! let path = session.screenshot(&ctx)?;
//! println!("Wrote {}", path.display());
//! # Ok::<(), framegrab::CaptureError>(())
//! ```

#[cfg(feature = "image")]
extern crate image_ as image;

pub mod buffer;
pub mod capture;
pub mod context;
pub mod error;
pub mod math;
pub mod pipeline;
pub mod rasterizer;
pub mod scene;
pub mod session;
pub mod target;

// Reexports
pub use crate::{
    buffer::Buffer2d,
    capture::{capture, capture_request, encode_ppm, CaptureRequest},
    context::{ReadBack, RowOrder, SoftContext},
    error::{CaptureError, Result},
    pipeline::Pipeline,
    rasterizer::{CullMode, Triangles},
    session::Session,
    target::Target,
};
