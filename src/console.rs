//! Console installation guard and browser bindings.

use crate::EmoteFormatter;

/// Error type for formatter installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallError {
    /// The installation slot is already occupied
    AlreadyInstalled,
}

impl std::fmt::Display for InstallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstallError::AlreadyInstalled => {
                write!(f, "An emote formatter is already installed")
            }
        }
    }
}

impl std::error::Error for InstallError {}

/// Explicit registry for the single console-wide formatter installation.
///
/// The host console has one formatter slot; installing into an occupied
/// slot is refused rather than overwriting, so whichever formatter got
/// there first keeps serving.
#[derive(Clone, Debug, Default)]
pub struct ConsoleRegistry {
    slot: Option<EmoteFormatter>,
}

impl ConsoleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a formatter is currently installed.
    #[inline]
    pub fn is_installed(&self) -> bool {
        self.slot.is_some()
    }

    /// Install a formatter into the registry.
    ///
    /// An occupied slot logs a warning and returns
    /// [`InstallError::AlreadyInstalled`]; the existing formatter is left
    /// untouched.
    pub fn install(&mut self, formatter: EmoteFormatter) -> Result<(), InstallError> {
        if self.slot.is_some() {
            log::warn!("emote formatter already installed; skipping installation");
            return Err(InstallError::AlreadyInstalled);
        }
        self.slot = Some(formatter);
        Ok(())
    }

    /// Get the installed formatter.
    pub fn formatter(&self) -> Option<&EmoteFormatter> {
        self.slot.as_ref()
    }

    /// Get the installed formatter mutably (formatting needs cache access).
    pub fn formatter_mut(&mut self) -> Option<&mut EmoteFormatter> {
        self.slot.as_mut()
    }
}

/// Web-specific bindings for renderer detection and console dispatch.
#[cfg(feature = "web")]
pub mod web {
    use wasm_bindgen::JsValue;

    use crate::{EmoteFormatter, FormatOutcome, FormattedMessage, Renderer};

    /// Detect the console renderer from the live browser environment.
    ///
    /// Combines the window `chrome` property (a Chromium-only global) with
    /// the navigator user-agent string. Returns `None` outside a window
    /// context or in unrecognized browsers.
    pub fn detect_renderer() -> Option<Renderer> {
        let window = web_sys::window()?;
        let has_chrome_object =
            js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("chrome")).unwrap_or(false);
        let user_agent = window.navigator().user_agent().unwrap_or_default();

        Renderer::from_signals(&user_agent, has_chrome_object)
    }

    /// Dispatch a formatted message to the browser console.
    ///
    /// The template goes first; the style/text arguments follow and are
    /// consumed positionally by the console's `%c`/`%s` substitution.
    pub fn log_formatted(message: &FormattedMessage) {
        let array = js_sys::Array::new();
        array.push(&JsValue::from_str(&message.template));
        for arg in &message.args {
            array.push(&JsValue::from_str(arg));
        }
        web_sys::console::log(&array);
    }

    /// Format and print one input value.
    ///
    /// This is the callable a host attaches to its console surface.
    /// Non-string inputs and pass-through strings are printed raw, matching
    /// plain `console.log` behavior.
    pub fn chat(formatter: &mut EmoteFormatter, input: &JsValue) {
        match input.as_string() {
            Some(text) => match formatter.format(&text) {
                FormatOutcome::Styled(message) => log_formatted(&message),
                FormatOutcome::PassThrough => web_sys::console::log_1(input),
            },
            None => web_sys::console::log_1(input),
        }
    }
}
