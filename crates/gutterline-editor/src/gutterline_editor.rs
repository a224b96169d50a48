//! Gutterline Editor - gutters for a host text widget
//!
//! This crate provides the sidebar of a code editor:
//! - A breakpoint strip with a right-click menu
//! - Right-aligned line numbers that widen with the document
//! - Ctrl+wheel font zoom with a short debounce
//! - An optional current-line highlight
//!
//! The text widget itself stays with the host and is reached through
//! [`TextHost`]; drawing goes through [`Painter`].

pub mod breakpoint_gutter;
pub mod breakpoints;
pub mod code_editor;
pub mod document;
pub mod geometry;
pub mod gutter;
pub mod hit_test;
pub mod host;
pub mod input;
pub mod layout;
pub mod line_numbers;
pub mod paint;
pub mod zoom;

pub use breakpoint_gutter::{BreakpointGutter, ContextMenu, CursorStyle, FOUNDERS_ROCK, GutterAction};
pub use breakpoints::{BreakpointSet, ToggleMode};
pub use code_editor::{CodeEditor, EditorState, MEDALIST};
pub use document::InMemoryDocument;
pub use geometry::{Color, LinearGradient, Point, Rect};
pub use gutter::{Damage, GutterPanel};
pub use hit_test::block_at;
pub use host::{LineHighlight, TextHost};
pub use input::{Modifiers, MouseButton, WheelEvent};
pub use layout::{VisibleLine, VisibleLines, lines_in_band};
pub use line_numbers::{LineNumberGutter, digit_count};
pub use paint::{DisplayList, Fill, PaintCommand, Painter, TextAlign};
pub use zoom::{FontSpec, FontZoom, ZoomOutcome};
