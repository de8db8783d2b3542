// crates/core/src/request.rs
use chars_counter_shared_kernel::{CharsCounterError, MatchCount, Param, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::counter::{count_chars, count_chars_in_range, count_chars_with_limit};

/// Which of the three scans a request runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "mode")]
pub enum CountMode {
    /// Whole text.
    #[default]
    Full,
    /// Inclusive `start..=end` window.
    Range { start: isize, end: isize },
    /// Window with an early-termination cap.
    Limited { start: isize, end: isize, limit: isize },
}

impl CountMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Range { .. } => "range",
            Self::Limited { .. } => "limited",
        }
    }
}

/// Count call whose text and character set may be missing.
///
/// Front ends that collect inputs piecemeal (command-line flags, FFI) build
/// one of these and let [`execute`](Self::execute) report absent inputs as
/// invalid arguments before any range checks run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountRequest<'a> {
    pub text: Option<&'a str>,
    pub chars: Option<&'a [char]>,
    pub mode: CountMode,
}

impl<'a> CountRequest<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn text(mut self, text: &'a str) -> Self {
        self.text = Some(text);
        self
    }

    #[must_use]
    pub const fn chars(mut self, chars: &'a [char]) -> Self {
        self.chars = Some(chars);
        self
    }

    #[must_use]
    pub const fn range(mut self, start: isize, end: isize) -> Self {
        self.mode = CountMode::Range { start, end };
        self
    }

    #[must_use]
    pub const fn limited(mut self, start: isize, end: isize, limit: isize) -> Self {
        self.mode = CountMode::Limited { start, end, limit };
        self
    }

    /// Runs the scan selected by [`mode`](Self::mode).
    ///
    /// # Errors
    ///
    /// [`CharsCounterError::InvalidArgument`] when `text` or `chars` is
    /// missing (text is checked first), otherwise whatever the selected scan
    /// reports.
    pub fn execute(&self) -> Result<MatchCount> {
        let text = self.text.ok_or(CharsCounterError::invalid_argument(Param::Text))?;
        let chars = self.chars.ok_or(CharsCounterError::invalid_argument(Param::Chars))?;
        debug!(mode = self.mode.name(), text_len = text.len(), set = chars.len(), "executing count");

        match self.mode {
            CountMode::Full => Ok(count_chars(text, chars)),
            CountMode::Range { start, end } => count_chars_in_range(text, chars, start, end),
            CountMode::Limited { start, end, limit } => {
                count_chars_with_limit(text, chars, start, end, limit)
            }
        }
    }
}
