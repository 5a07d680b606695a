//! Pixel sizing, whitespace padding, and CSS styling for inline emotes.

use crate::Renderer;

/// Emote sizing configuration and calculations.
///
/// Console text styling cannot reserve real image width, so an emote's
/// on-screen footprint is approximated two ways: the CSS fragment sizes the
/// background image in pixels, and the printed placeholder text is a run of
/// space characters scaled to the emote's aspect ratio.
#[derive(Clone, Debug)]
pub struct EmoteSizing {
    /// Base emote height in pixels
    pub emote_size: f64,
    /// Approximate width of one space character in pixels
    pub space_unit: f64,
}

impl Default for EmoteSizing {
    fn default() -> Self {
        Self {
            emote_size: 21.0,
            space_unit: 6.5,
        }
    }
}

impl EmoteSizing {
    /// Create a new EmoteSizing with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emote height in pixels for a given size modifier.
    #[inline]
    pub fn pixel_height(&self, modifier: f64) -> f64 {
        self.emote_size * modifier
    }

    /// Emote width in pixels for a given aspect ratio and size modifier.
    #[inline]
    pub fn pixel_width(&self, ratio: f64, modifier: f64) -> f64 {
        self.emote_size * ratio * modifier
    }

    /// Build the whitespace run printed in place of an emote's text.
    ///
    /// The run length is derived from the emote's pixel width: with
    /// `count = ceil(width / space_unit) + 1`, the run holds `count - 1`
    /// space characters.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use emote_console::EmoteSizing;
    ///
    /// // ceil(21 / 6.5) + 1 = 5, yielding 4 spaces
    /// let sizing = EmoteSizing::default();
    /// assert_eq!(sizing.padding_run(1.0), "    ");
    /// ```
    pub fn padding_run(&self, effective_ratio: f64) -> String {
        let count = ((self.emote_size * effective_ratio) / self.space_unit).ceil() as usize + 1;
        " ".repeat(count.saturating_sub(1))
    }

    /// Build the CSS fragment that styles one emote placeholder.
    ///
    /// Chromium devtools respect `line-height` on styled console spans, so
    /// that is the only sizing declaration they get. Firefox and any
    /// unrecognized renderer need an explicit inline-flex box with the
    /// width padded by 10 pixels. Both variants paint the emote as a
    /// non-repeating background image behind transparent text.
    pub fn style_fragment(
        &self,
        renderer: Option<Renderer>,
        image_data: &str,
        ratio: f64,
        modifier: f64,
    ) -> String {
        let height = self.pixel_height(modifier);
        let width = self.pixel_width(ratio, modifier);

        let size = match renderer {
            Some(Renderer::Chromium) => format!("line-height: {}px; ", height),
            _ => format!(
                "display: inline-flex; height: {}px; width: {}px; ",
                height,
                width + 10.0
            ),
        };

        format!(
            "color: transparent; {}background: url('{}'); background-size: {}px; background-repeat: no-repeat;",
            size, image_data, width
        )
    }
}
