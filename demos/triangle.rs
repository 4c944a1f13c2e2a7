use anyhow::{Context, Result};
use clap::Parser;
use framegrab::{scene, Session, SoftContext};
use std::path::PathBuf;

/// Render the triangle scene headlessly and dump screenshots as plain-text PPM.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of frames to render
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Frames (counting from 0) after which a screenshot is taken
    #[arg(long, value_delimiter = ',', default_value = "0")]
    capture: Vec<u32>,

    #[arg(long, default_value_t = scene::SCREEN_SIZE[0])]
    width: usize,

    #[arg(long, default_value_t = scene::SCREEN_SIZE[1])]
    height: usize,

    /// Screenshot file name prefix
    #[arg(long, default_value = "triangle-ss")]
    prefix: String,

    /// Directory screenshots are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut ctx = SoftContext::new([args.width, args.height]).with_clear_color(scene::CLEAR_COLOR);
    let mut session = Session::new(args.prefix).in_dir(args.out_dir);

    for frame in 0..args.frames {
        scene::render(&mut ctx);

        if args.capture.contains(&frame) {
            let path = session
                .screenshot(&ctx)
                .with_context(|| format!("Screenshot after frame {} failed", frame))?;
            println!("{}", path.display());
        }
    }

    log::info!("Rendered {} frames, {} screenshots", args.frames, session.captured());
    Ok(())
}
