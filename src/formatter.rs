//! Emote-aware console message formatting.

use std::collections::HashMap;

use crate::{EmoteSizing, EmoteTable, Renderer};

/// Formatter configuration, supplied once at construction.
#[derive(Clone, Debug, Default)]
pub struct FormatterConfig {
    /// Pixel sizing parameters
    pub sizing: EmoteSizing,
    /// Target console renderer; `None` selects the generic fallback styling
    pub renderer: Option<Renderer>,
}

impl FormatterConfig {
    /// Create a config targeting a specific renderer with default sizing.
    pub fn for_renderer(renderer: Renderer) -> Self {
        Self {
            sizing: EmoteSizing::default(),
            renderer: Some(renderer),
        }
    }
}

/// A lazily resolved emote, cached for the formatter's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedEmote {
    /// Token name this emote was resolved for
    pub name: String,
    /// Aspect ratio multiplied by the size modifier
    pub effective_ratio: f64,
    /// Pre-rendered CSS fragment for the `%c` placeholder
    pub style: String,
}

/// One contiguous piece of a formatted message.
#[derive(Clone, Debug, PartialEq)]
pub enum FormatSegment {
    /// A run of literal words, re-joined with single spaces
    Text(String),
    /// A single emote reference
    Emote(ResolvedEmote),
}

/// A `%c%s` template plus its flat, positionally consumed argument list.
///
/// The host console substitutes each `%c` with the next style argument and
/// each `%s` with the next text argument, in call order; `args` therefore
/// always holds exactly two entries per template pair.
#[derive(Clone, Debug, PartialEq)]
pub struct FormattedMessage {
    /// Template of `%c%s` pairs joined by single spaces
    pub template: String,
    /// Interleaved style/text arguments
    pub args: Vec<String>,
}

/// Result of a formatting call.
///
/// `PassThrough` is a boundary contract, not an error: empty or
/// whitespace-only input should be printed raw by the caller instead of
/// going through a styled template.
#[derive(Clone, Debug, PartialEq)]
pub enum FormatOutcome {
    /// Input produced a styled template/argument pair
    Styled(FormattedMessage),
    /// Input should be printed unformatted by the caller
    PassThrough,
}

impl FormatOutcome {
    /// Returns the styled message, or `None` for pass-through.
    pub fn styled(self) -> Option<FormattedMessage> {
        match self {
            FormatOutcome::Styled(message) => Some(message),
            FormatOutcome::PassThrough => None,
        }
    }
}

/// Formats console messages, replacing known emote tokens with styled
/// background-image placeholders.
///
/// Owns the descriptor table and a per-token resolution cache. The cache is
/// keyed by token name only: the first resolve of a token fixes its size
/// modifier, and later resolves of the same token with a different modifier
/// return the originally cached value. Callers depend on this, so changing
/// the keying needs explicit sign-off rather than a quiet fix.
///
/// ## Example
///
/// ```rust
/// use emote_console::{
///     EmoteDescriptor, EmoteFormatter, EmoteTable, FormatOutcome, FormatterConfig, Renderer,
/// };
///
/// let table = EmoteTable::from_entries([(
///     "Smile".to_string(),
///     EmoteDescriptor::new("data:image/png;base64,c21pbGU=".to_string()),
/// )])
/// .unwrap();
///
/// let mut formatter = EmoteFormatter::new(table, FormatterConfig::for_renderer(Renderer::Chromium));
///
/// match formatter.format("hello Smile world") {
///     FormatOutcome::Styled(message) => {
///         assert_eq!(message.template, "%c%s %c%s %c%s");
///         assert_eq!(message.args.len(), 6);
///     }
///     FormatOutcome::PassThrough => unreachable!(),
/// }
/// ```
#[derive(Clone, Debug)]
pub struct EmoteFormatter {
    table: EmoteTable,
    sizing: EmoteSizing,
    renderer: Option<Renderer>,
    cache: HashMap<String, ResolvedEmote>,
}

impl EmoteFormatter {
    /// Create a formatter over a descriptor table.
    ///
    /// Never fails: an unrecognized renderer logs a warning and the
    /// formatter keeps working through the generic fallback styling.
    pub fn new(table: EmoteTable, config: FormatterConfig) -> Self {
        if config.renderer.is_none() {
            log::warn!(
                "console renderer not recognized; emotes use fallback styling \
                 (force a renderer in the config if they render correctly)"
            );
        }

        Self {
            table,
            sizing: config.sizing,
            renderer: config.renderer,
            cache: HashMap::new(),
        }
    }

    /// The renderer this formatter styles for (`None` = fallback path).
    #[inline]
    pub fn renderer(&self) -> Option<Renderer> {
        self.renderer
    }

    /// The descriptor table backing this formatter.
    #[inline]
    pub fn table(&self) -> &EmoteTable {
        &self.table
    }

    /// Resolve a token into its styling record, caching on first use.
    ///
    /// Returns `None` when the token is not in the descriptor table. A
    /// cached entry is returned as-is regardless of `modifier` (see the
    /// type-level note on cache keying).
    pub fn resolve(&mut self, token: &str, modifier: f64) -> Option<ResolvedEmote> {
        if let Some(cached) = self.cache.get(token) {
            return Some(cached.clone());
        }

        let descriptor = self.table.get(token)?;
        let ratio = descriptor.ratio();
        let style = self
            .sizing
            .style_fragment(self.renderer, &descriptor.image_data, ratio, modifier);

        let resolved = ResolvedEmote {
            name: token.to_string(),
            effective_ratio: ratio * modifier,
            style,
        };
        self.cache.insert(token.to_string(), resolved.clone());

        Some(resolved)
    }

    /// Split input into literal-text runs and emote segments.
    ///
    /// Words split on single spaces and consecutive spaces collapse.
    /// Adjacent literal words merge into one run; each emote token starts
    /// its own segment and never merges with neighbors.
    pub fn segment(&mut self, input: &str) -> Vec<FormatSegment> {
        let mut segments: Vec<FormatSegment> = Vec::new();

        for word in input.split(' ').filter(|w| !w.is_empty()) {
            if self.table.contains(word) {
                // contains() above guarantees resolve() finds the token.
                if let Some(emote) = self.resolve(word, 1.0) {
                    segments.push(FormatSegment::Emote(emote));
                }
            } else {
                match segments.last_mut() {
                    Some(FormatSegment::Text(run)) => {
                        run.push(' ');
                        run.push_str(word);
                    }
                    _ => segments.push(FormatSegment::Text(word.to_string())),
                }
            }
        }

        segments
    }

    /// Format an input string into a styled console message.
    ///
    /// Empty and whitespace-only input yield [`FormatOutcome::PassThrough`];
    /// the caller prints the raw value in that case. Literal runs get an
    /// empty style and their joined words as text; emotes get their CSS
    /// fragment and a pure-whitespace text sized to the emote's width.
    pub fn format(&mut self, input: &str) -> FormatOutcome {
        if input.trim().is_empty() {
            return FormatOutcome::PassThrough;
        }

        let segments = self.segment(input);
        let mut pairs = Vec::with_capacity(segments.len());
        let mut args = Vec::with_capacity(segments.len() * 2);

        for segment in segments {
            pairs.push("%c%s");
            match segment {
                FormatSegment::Text(run) => {
                    args.push(String::new());
                    args.push(run);
                }
                FormatSegment::Emote(emote) => {
                    let padding = self.sizing.padding_run(emote.effective_ratio);
                    args.push(emote.style);
                    args.push(padding);
                }
            }
        }

        FormatOutcome::Styled(FormattedMessage {
            template: pairs.join(" "),
            args,
        })
    }
}
