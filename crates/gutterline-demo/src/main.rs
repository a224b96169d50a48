//! Gutterline demo: renders the breakpoint and line number gutters for a text
//! file on stdout, driving the editor the way a GUI host would.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use gutterline_editor::{
    CodeEditor, InMemoryDocument, Modifiers, MouseButton, Point, TextHost, WheelEvent,
};
use gutterline_settings::GutterSettings;

mod canvas;
mod logging;

use canvas::TextCanvas;
use logging::LoggingConfig;

/// One wheel notch as reported by most mice.
const WHEEL_NOTCH: f32 = 120.0;

#[derive(Parser, Debug)]
#[command(name = "gutterline")]
#[command(author, version, about = "Render a code editor's line number and breakpoint gutters")]
struct Cli {
    /// Text file to show; a short sample program is used when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Toggle a breakpoint on this 1-based line (repeatable)
    #[arg(short, long = "breakpoint", value_name = "LINE")]
    breakpoints: Vec<usize>,

    /// 1-based line to scroll to the top of the viewport
    #[arg(long, default_value_t = 1)]
    scroll_to: usize,

    /// Ctrl+wheel notches to apply; negative values zoom out
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    zoom: i32,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 640.0)]
    width: f32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 320.0)]
    height: f32,

    /// Settings file; defaults to the user's gutterline settings
    #[arg(long, env = "GUTTERLINE_SETTINGS")]
    settings: Option<PathBuf>,

    /// Write the current settings to the settings file and exit
    #[arg(long)]
    write_settings: bool,

    /// Log every click, zoom and width change
    #[arg(short, long)]
    verbose: bool,

    /// Also write JSON logs to the log directory
    #[arg(long)]
    json_logs: bool,
}

const SAMPLE: &str = "\
main:
    addi a0, zero, 10
    addi a1, zero, 0
loop:
    add a1, a1, a0
    addi a0, a0, -1
    bnez a0, loop
    mv a0, a1
    ret";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = if cli.verbose {
        LoggingConfig::verbose()
    } else {
        LoggingConfig::default()
    };
    config.enable_json_logs = cli.json_logs;
    let _log_guard = logging::init(config)?;

    let settings = match &cli.settings {
        Some(path) => GutterSettings::load_from(path)?,
        None => GutterSettings::load()?,
    };

    if cli.write_settings {
        match &cli.settings {
            Some(path) => settings.save_to(path)?,
            None => settings.save()?,
        }
        return Ok(());
    }

    let text = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {:?}", path))?,
        None => SAMPLE.to_string(),
    };

    let mut doc = InMemoryDocument::from_text(&text).with_size(cli.width, cli.height);
    let mut editor = CodeEditor::new(&settings, &mut doc);
    editor.on_resize(&mut doc);

    for line in &cli.breakpoints {
        let Some(block) = line.checked_sub(1) else {
            tracing::warn!(line, "Line numbers start at 1");
            continue;
        };
        // Clicks land in the middle of the row.
        let y = doc.block_top(block) + doc.content_offset().y + doc.block_height(block) / 2.0;
        if editor
            .on_breakpoint_mouse_press(&doc, Point::new(1.0, y), MouseButton::Left)
            .is_none()
        {
            tracing::warn!(line, block_count = doc.block_count(), "Line is past the end of the document");
        }
    }

    // Space the notches past the debounce window so each one counts.
    let notch_gap = settings.zoom.debounce() + Duration::from_millis(1);
    let start = Instant::now();
    let delta = if cli.zoom < 0 { -WHEEL_NOTCH } else { WHEEL_NOTCH };
    for notch in 0..cli.zoom.unsigned_abs() {
        let event = WheelEvent::new(delta, Modifiers::control());
        editor.on_wheel(&mut doc, &event, start + notch_gap * notch);
    }

    doc.scroll_to_block(cli.scroll_to.saturating_sub(1));
    let viewport = doc.viewport_rect();
    editor.on_update_request(&mut doc, viewport, 0.0);

    let mut canvas = TextCanvas::new(doc.text_line_height(), doc.visible_block_capacity());
    let clip = editor.breakpoint_gutter().panel().local_rect();
    editor.paint_breakpoint_gutter(&doc, clip, &mut canvas);
    let clip = editor.line_number_gutter().panel().local_rect();
    editor.paint_line_numbers(&doc, clip, &mut canvas);

    tracing::info!(
        font_size = editor.font().point_size,
        sidebar_width = editor.sidebar_width(),
        breakpoints = editor.breakpoints().len(),
        "Rendered gutters"
    );
    print!("{}", canvas.render(&doc));

    Ok(())
}
