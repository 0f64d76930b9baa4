//! Option-list parsing
//!
//! Reads a textual option list into a [`Request`]. One option per line:
//!
//! ```text
//! # backscatter receiver
//! device=AD9361
//! platform=XILINX
//! ADC_DMA_EXAMPLE
//! HAVE_VERBOSE_MESSAGES=1
//! HAVE_DEBUG_MESSAGES=0
//! ```
//!
//! `NAME` alone requests the option on, `NAME=VALUE` takes a boolean
//! (`1/0`, `y/n`, `yes/no`, `true/false`). `device`, `platform` and
//! `adc_transfer_mode` select one member of their group. Later lines
//! override earlier ones.

use heapless::Vec;

use crate::error::{ConfigError, ParseError, ParseErrorKind};
use crate::request::Request;
use crate::types::{AdcTransferMode, DeviceVariant, OptionKey, Platform};

/// Maximum line length
pub const MAX_LINE_LEN: usize = 96;

/// Streaming option-list parser, fed one byte at a time
pub struct OptionListParser {
    /// Current line
    buffer: Vec<u8, MAX_LINE_LEN>,
    /// Current line exceeded the buffer
    overflow: bool,
    /// 1-based number of the current line
    line: usize,
    /// Options collected so far
    request: Request,
}

impl OptionListParser {
    /// Create a parser starting from an empty request
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_from(Request::new())
    }

    /// Create a parser that overrides `base`
    #[must_use]
    pub const fn starting_from(base: Request) -> Self {
        Self {
            buffer: Vec::new(),
            overflow: false,
            line: 1,
            request: base,
        }
    }

    /// Feed a byte to the parser
    ///
    /// # Errors
    ///
    /// Returns the error for a line when its terminating `\n` arrives.
    pub fn feed(&mut self, byte: u8) -> Result<(), ParseError> {
        match byte {
            b'\n' => {
                let result = self.end_line();
                self.line += 1;
                result
            }
            // Ignore CR of CRLF endings
            b'\r' => Ok(()),
            _ => {
                if self.buffer.push(byte).is_err() {
                    self.overflow = true;
                }
                Ok(())
            }
        }
    }

    /// Feed a chunk of bytes, stopping at the first error
    ///
    /// # Errors
    ///
    /// See [`OptionListParser::feed`].
    pub fn feed_all(&mut self, bytes: &[u8]) -> Result<(), ParseError> {
        bytes.iter().try_for_each(|&b| self.feed(b))
    }

    /// Parse any unterminated last line and return the collected request
    ///
    /// # Errors
    ///
    /// Returns the error for the final line, if any.
    pub fn finish(mut self) -> Result<Request, ParseError> {
        self.end_line()?;
        Ok(self.request)
    }

    /// Options collected so far
    #[must_use]
    pub const fn request(&self) -> &Request {
        &self.request
    }

    /// Parse and clear the current line
    fn end_line(&mut self) -> Result<(), ParseError> {
        let result = if self.overflow {
            Err(ParseErrorKind::LineTooLong)
        } else {
            match core::str::from_utf8(&self.buffer) {
                Ok(text) => apply_line(&mut self.request, text),
                Err(_) => Err(ParseErrorKind::InvalidUtf8),
            }
        };
        self.buffer.clear();
        self.overflow = false;
        result.map_err(|kind| ParseError {
            line: self.line,
            kind,
        })
    }
}

impl Default for OptionListParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a complete option list
///
/// # Errors
///
/// The first malformed line, with its line number.
pub fn parse(text: &str) -> Result<Request, ParseError> {
    parse_onto(Request::new(), text)
}

/// Parse an option list on top of `base`
///
/// # Errors
///
/// The first malformed line, with its line number.
pub fn parse_onto(base: Request, text: &str) -> Result<Request, ParseError> {
    let mut parser = OptionListParser::starting_from(base);
    parser.feed_all(text.as_bytes())?;
    parser.finish()
}

/// Apply one line to `request`
fn apply_line(request: &mut Request, line: &str) -> Result<(), ParseErrorKind> {
    let content = line.split('#').next().unwrap_or("").trim();
    if content.is_empty() {
        return Ok(());
    }

    let (name, value) = match content.split_once('=') {
        Some((name, value)) => (name.trim(), Some(value.trim())),
        None => (content, None),
    };

    if name.eq_ignore_ascii_case("device") {
        let token = value.filter(|v| !v.is_empty()).ok_or(ParseErrorKind::MissingValue)?;
        let variant = DeviceVariant::from_token(token).ok_or_else(|| ConfigError::unknown_option(token))?;
        request.select_device(variant);
    } else if name.eq_ignore_ascii_case("platform") {
        let token = value.filter(|v| !v.is_empty()).ok_or(ParseErrorKind::MissingValue)?;
        let platform = Platform::from_token(token).ok_or_else(|| ConfigError::unknown_option(token))?;
        request.select_platform(platform);
    } else if name.eq_ignore_ascii_case("adc_transfer_mode") {
        let token = value.filter(|v| !v.is_empty()).ok_or(ParseErrorKind::MissingValue)?;
        let mode = AdcTransferMode::from_token(token).ok_or_else(|| ConfigError::unknown_option(token))?;
        request.select_adc_transfer_mode(mode);
    } else {
        let key = OptionKey::from_name(name).ok_or_else(|| ConfigError::unknown_option(name))?;
        let on = match value {
            None => true,
            Some(v) => parse_bool(v).ok_or(ParseErrorKind::InvalidValue)?,
        };
        request.set(key, on);
    }
    Ok(())
}

/// Parse a boolean option value
fn parse_bool(value: &str) -> Option<bool> {
    const TRUE: [&str; 4] = ["1", "y", "yes", "true"];
    const FALSE: [&str; 4] = ["0", "n", "no", "false"];

    if TRUE.iter().any(|t| value.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if FALSE.iter().any(|f| value.eq_ignore_ascii_case(f)) {
        Some(false)
    } else {
        None
    }
}
