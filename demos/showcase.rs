//! Showcase: All five regions in a bordered layout.
//!
//! Demonstrates:
//! - Fixed-height North/South and fixed-width West/East regions
//! - Toggling regions at runtime with n/w/c/e/s
//! - Re-layout on terminal resize
//!
//! Logs go to a file (`--log-file`, default `debug.log`), filtered by `RUST_LOG`.

use clap::Parser;
use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;
use termborder::{
    BorderKind, BorderLayout, Engine, InputEvent, KeyCode, OverflowPolicy, RegionId, Rgb, Size,
    Style, Text,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "showcase", about = "Five-region border layout demo")]
struct Args {
    /// Width of the West and East regions.
    #[arg(long, default_value_t = 24)]
    fixed_width: i32,

    /// Height of the North and South regions.
    #[arg(long, default_value_t = 4)]
    fixed_height: i32,

    /// Clamp regions to zero instead of passing negative sizes through.
    #[arg(long)]
    clamp: bool,

    /// File the log is written to.
    #[arg(long, default_value = "debug.log")]
    log_file: String,

    /// Hide the size line under each region's text.
    #[arg(long)]
    no_annotate: bool,
}

const CENTER_TEXT: &str = "Center component\n  - type [n/s/e/w/c] to show/hide regions";

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let log_file = File::create(&args.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let overflow = if args.clamp {
        OverflowPolicy::Clamp
    } else {
        OverflowPolicy::Passthrough
    };
    let style = Style::new()
        .with_border(BorderKind::Normal)
        .with_border_fg(Rgb::TEAL)
        .with_size_annotation(!args.no_annotate);

    let mut layout = BorderLayout::builder()
        .region(RegionId::North, Text::new("North component"), 0, args.fixed_height)
        .region(RegionId::West, Text::new("West component"), args.fixed_width, 0)
        .region(RegionId::Center, Text::new(CENTER_TEXT), 0, 0)
        .region(RegionId::East, Text::new("East component"), args.fixed_width, 0)
        .region(RegionId::South, Text::new("South component"), 0, args.fixed_height)
        .style(style)
        .overflow(overflow)
        .build();

    let mut engine = Engine::new()?;
    info!(size = %engine.size(), "showcase started");
    layout.resize(engine.size());
    engine.draw(&layout.view())?;

    while engine.is_running() {
        let Some(event) = engine.wait_input(Duration::from_millis(250)) else {
            continue;
        };

        match &event {
            InputEvent::Key { code, modifiers } => match code {
                KeyCode::Esc | KeyCode::Char('q') => engine.stop(),
                KeyCode::Char('c') if modifiers.control => engine.stop(),
                KeyCode::Char(c) if !modifiers.any() => {
                    if let Some(region) = RegionId::from_initial(*c) {
                        debug!(%region, "toggle requested");
                        layout.toggle(&[region]);
                        engine.clear_screen()?;
                    }
                }
                _ => {}
            },
            InputEvent::Resize { width, height } => {
                engine.handle_resize(*width, *height);
                layout.resize(Size::from_terminal(*width, *height));
            }
            InputEvent::Shutdown => engine.stop(),
            InputEvent::Error(message) => {
                tracing::warn!(%message, "input error");
                engine.stop();
            }
            _ => {}
        }

        if engine.is_running() {
            engine.draw(&layout.view())?;
        }
    }

    info!("showcase finished");
    Ok(())
}
