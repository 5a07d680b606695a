//! Host console renderer detection.

/// Class of host console environment whose styling quirks determine
/// which CSS strategy is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Renderer {
    /// Chromium-family devtools (Chrome, Edge, Brave, ...)
    Chromium,
    /// Firefox devtools
    Firefox,
}

impl Renderer {
    /// Classify the host environment from its observable signals.
    ///
    /// `has_chrome_object` reports whether the global `chrome` object exists
    /// (present in Chromium-family browsers only); `user_agent` is matched
    /// case-insensitively. Returns `None` for unrecognized environments,
    /// which downstream styling treats as the generic fallback.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use emote_console::Renderer;
    ///
    /// let ua = "Mozilla/5.0 (X11; Linux x86_64; rv:115.0) Gecko/20100101 Firefox/115.0";
    /// assert_eq!(Renderer::from_signals(ua, false), Some(Renderer::Firefox));
    /// ```
    pub fn from_signals(user_agent: &str, has_chrome_object: bool) -> Option<Self> {
        let ua = user_agent.to_ascii_lowercase();
        if has_chrome_object || ua.contains("chrome") {
            Some(Renderer::Chromium)
        } else if ua.contains("firefox") {
            Some(Renderer::Firefox)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Renderer::Chromium => write!(f, "chromium"),
            Renderer::Firefox => write!(f, "firefox"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                             (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const FIREFOX_UA: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:115.0) Gecko/20100101 Firefox/115.0";
    const SAFARI_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                             AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15";

    #[test]
    fn test_detect_chromium_from_user_agent() {
        assert_eq!(
            Renderer::from_signals(CHROME_UA, false),
            Some(Renderer::Chromium)
        );
    }

    #[test]
    fn test_detect_chromium_from_chrome_object() {
        // The chrome global wins even when the UA says nothing useful.
        assert_eq!(
            Renderer::from_signals("some embedded webview", true),
            Some(Renderer::Chromium)
        );
    }

    #[test]
    fn test_detect_firefox() {
        assert_eq!(
            Renderer::from_signals(FIREFOX_UA, false),
            Some(Renderer::Firefox)
        );
    }

    #[test]
    fn test_unrecognized_environment() {
        assert_eq!(Renderer::from_signals(SAFARI_UA, false), None);
        assert_eq!(Renderer::from_signals("", false), None);
    }

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(
            Renderer::from_signals("CHROME/99", false),
            Some(Renderer::Chromium)
        );
        assert_eq!(
            Renderer::from_signals("FIREFOX/99", false),
            Some(Renderer::Firefox)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Renderer::Chromium.to_string(), "chromium");
        assert_eq!(Renderer::Firefox.to_string(), "firefox");
    }
}
