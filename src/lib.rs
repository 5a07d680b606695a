//! # emote-console
//!
//! Emote formatting library for styled browser console logging.
//!
//! Developers call a console-logging function with plain text containing
//! emote tokens (e.g. `"hello Smile world"`), and the tokens render as small
//! inline background-image emotes via the console's printf-style `%c`
//! styling directives. This crate provides platform-agnostic data structures
//! and logic for:
//! - Describing emote images (inline payload + aspect ratio) in a validated table
//! - Detecting the host console renderer from environment signals
//! - Formatting text into `%c`/`%s` templates with styled emote placeholders
//! - Guarding the console-wide installation slot
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for emote descriptors
//! - `json` - Load emote descriptor tables from JSON strings
//! - `web` - Enable web/WASM navigator detection and console dispatch
//!
//! ## Example
//!
//! ```rust
//! use emote_console::{
//!     EmoteDescriptor, EmoteFormatter, EmoteTable, FormatOutcome, FormatterConfig, Renderer,
//! };
//!
//! let table = EmoteTable::from_entries([(
//!     "Smile".to_string(),
//!     EmoteDescriptor::new("data:image/png;base64,c21pbGU=".to_string()),
//! )])
//! .unwrap();
//!
//! let mut formatter =
//!     EmoteFormatter::new(table, FormatterConfig::for_renderer(Renderer::Chromium));
//!
//! match formatter.format("hello Smile world") {
//!     FormatOutcome::Styled(message) => {
//!         // Hand message.template and message.args to the console sink.
//!         assert_eq!(message.template, "%c%s %c%s %c%s");
//!     }
//!     FormatOutcome::PassThrough => {
//!         // Print the raw input as-is.
//!     }
//! }
//! ```

pub mod console;
mod descriptor;
mod formatter;
mod renderer;
mod sizing;

pub use console::{ConsoleRegistry, InstallError};
pub use descriptor::{EmoteDescriptor, EmoteTable, TableError};
pub use formatter::{
    EmoteFormatter, FormatOutcome, FormatSegment, FormattedMessage, FormatterConfig, ResolvedEmote,
};
pub use renderer::Renderer;
pub use sizing::EmoteSizing;

#[cfg(feature = "web")]
pub use console::web::{chat, detect_renderer, log_formatted};
