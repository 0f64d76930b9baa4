//! Errors reported while building and resolving a configuration

use core::fmt;

use heapless::String;

use crate::types::Group;

/// Longest option name kept in an error, in bytes
pub const MAX_NAME_LEN: usize = 32;

/// Owned copy of an offending option name
pub type OptionName = String<MAX_NAME_LEN>;

/// Resolution failure. Terminal for the call; the caller corrects the
/// request and resolves again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A "choose exactly one" group had zero or several active members
    ExclusivityViolation(Group),
    /// The option name is not part of the catalogue
    UnknownOption(OptionName),
}

impl ConfigError {
    /// Build a [`ConfigError::UnknownOption`], truncating long names on a
    /// character boundary
    #[must_use]
    pub fn unknown_option(name: &str) -> Self {
        let mut owned = OptionName::new();
        for ch in name.chars() {
            if owned.push(ch).is_err() {
                break;
            }
        }
        Self::UnknownOption(owned)
    }

    /// Group at fault, for exclusivity violations
    #[must_use]
    pub const fn group(&self) -> Option<Group> {
        match self {
            Self::ExclusivityViolation(group) => Some(*group),
            Self::UnknownOption(_) => None,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExclusivityViolation(group) => {
                write!(f, "exactly one {group} option must be selected")
            }
            Self::UnknownOption(name) => write!(f, "unknown option `{name}`"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ConfigError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::ExclusivityViolation(group) => {
                defmt::write!(f, "ExclusivityViolation({})", group);
            }
            Self::UnknownOption(name) => defmt::write!(f, "UnknownOption({=str})", name.as_str()),
        }
    }
}

/// What went wrong on an option-list line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Unknown option name or enum value
    Config(ConfigError),
    /// `device=`/`platform=`/`adc_transfer_mode=` without a value
    MissingValue,
    /// Value is not a recognized boolean
    InvalidValue,
    /// Line is not valid UTF-8
    InvalidUtf8,
    /// Line exceeds the parser buffer
    LineTooLong,
}

impl From<ConfigError> for ParseErrorKind {
    fn from(e: ConfigError) -> Self {
        ParseErrorKind::Config(e)
    }
}

/// Option-list parse failure with its 1-based line number
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// Line the error was found on
    pub line: usize,
    /// Error detail
    pub kind: ParseErrorKind,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            ParseErrorKind::Config(e) => write!(f, "{e}"),
            ParseErrorKind::MissingValue => f.write_str("missing value"),
            ParseErrorKind::InvalidValue => f.write_str("invalid boolean value"),
            ParseErrorKind::InvalidUtf8 => f.write_str("invalid UTF-8"),
            ParseErrorKind::LineTooLong => f.write_str("line too long"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ParseError {
    fn format(&self, f: defmt::Formatter) {
        match &self.kind {
            ParseErrorKind::Config(e) => defmt::write!(f, "line {}: {}", self.line, e),
            ParseErrorKind::MissingValue => defmt::write!(f, "line {}: missing value", self.line),
            ParseErrorKind::InvalidValue => defmt::write!(f, "line {}: invalid value", self.line),
            ParseErrorKind::InvalidUtf8 => defmt::write!(f, "line {}: invalid UTF-8", self.line),
            ParseErrorKind::LineTooLong => defmt::write!(f, "line {}: line too long", self.line),
        }
    }
}
