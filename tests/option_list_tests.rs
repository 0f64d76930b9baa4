//! Option List Parser Tests
//!
//! Tests for the `NAME=VALUE` option-list format.
//! Run with: cargo test --no-default-features --features std --test option_list_tests

use ad936x_config::error::{ConfigError, ParseErrorKind};
use ad936x_config::option_list::{parse, parse_onto, OptionListParser};
use ad936x_config::request::Request;
use ad936x_config::resolver::resolve;
use ad936x_config::types::{AdcTransferMode, DeviceVariant, Feature, Platform};

/// The shipped app_config.h, as an option list
const BACKSCATTER: &str = "\
# backscatter receiver
HAVE_SPLIT_GAIN_TABLE=0   # split_gain_table_mode_enable = 0
HAVE_TDD_SYNTH_TABLE=0    # FDD, not TDD

AD9361_DEVICE=1
AD9364_DEVICE=0
AD9363A_DEVICE=0

XILINX_PLATFORM
ADC_DMA_EXAMPLE
HAVE_VERBOSE_MESSAGES
";

// ============================================================================
// Whole Document Tests
// ============================================================================

#[test]
fn test_parse_backscatter_header() {
    let request = parse(BACKSCATTER).unwrap();
    assert_eq!(request, Request::backscatter());
}

#[test]
fn test_parse_then_resolve() {
    let config = resolve(&parse(BACKSCATTER).unwrap()).unwrap();
    assert!(config.is_device_variant(DeviceVariant::Ad9361));
    assert!(config.is_feature_enabled(Feature::VerboseMessages));
}

#[test]
fn test_parse_empty() {
    assert_eq!(parse("").unwrap(), Request::new());
    assert_eq!(parse("\n\n# nothing\n").unwrap(), Request::new());
}

#[test]
fn test_crlf_line_endings() {
    let request = parse("device=AD9364\r\nplatform=linux\r\nadc_transfer_mode=dma_irq\r\n").unwrap();
    let config = resolve(&request).unwrap();
    assert_eq!(config.device(), DeviceVariant::Ad9364);
    assert_eq!(config.platform(), Platform::Linux);
    assert_eq!(config.adc_transfer_mode(), AdcTransferMode::DmaIrq);
}

#[test]
fn test_missing_trailing_newline() {
    let request = parse("IIO_SUPPORT").unwrap();
    assert!(request.get(Feature::IioSupport.key()));
}

// ============================================================================
// Value Tests
// ============================================================================

#[test]
fn test_boolean_spellings() {
    let request = parse("FMCOMMS5=yes\nADI_RF_SOM=TRUE\nDAC_DMA_EXAMPLE=y\nIIO_SUPPORT=no\n").unwrap();
    assert!(request.get(Feature::Fmcomms5.key()));
    assert!(request.get(Feature::AdiRfSom.key()));
    assert!(request.get(Feature::DacDma.key()));
    assert!(!request.get(Feature::IioSupport.key()));
}

#[test]
fn test_whitespace_trimmed() {
    let request = parse("   HAVE_DEBUG_MESSAGES  =  1  \n").unwrap();
    assert!(request.get(Feature::DebugMessages.key()));
}

#[test]
fn test_later_line_overrides() {
    let request = parse("HAVE_VERBOSE_MESSAGES=1\nHAVE_VERBOSE_MESSAGES=0\n").unwrap();
    assert!(!request.get(Feature::VerboseMessages.key()));
}

#[test]
fn test_enum_selection_replaces_member() {
    let request = parse("AD9361_DEVICE\nAD9364_DEVICE\ndevice=AD9363A\n").unwrap();
    assert!(!request.get(DeviceVariant::Ad9361.key()));
    assert!(!request.get(DeviceVariant::Ad9364.key()));
    assert!(request.get(DeviceVariant::Ad9363a.key()));
}

#[test]
fn test_parse_onto_base() {
    let request = parse_onto(Request::backscatter(), "platform=ALTERA\nIIO_SUPPORT\n").unwrap();
    let config = resolve(&request).unwrap();
    assert!(config.is_platform(Platform::Altera));
    // IIO build drops the message toggles
    assert!(!config.is_feature_enabled(Feature::VerboseMessages));
    assert!(config.was_adjusted(Feature::VerboseMessages));
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_unknown_option_reports_line() {
    let err = parse("AD9361_DEVICE\nUSE_LIBIIO\n").unwrap_err();
    assert_eq!(err.line, 2);
    assert_eq!(
        err.kind,
        ParseErrorKind::Config(ConfigError::unknown_option("USE_LIBIIO"))
    );
    assert_eq!(err.to_string(), "line 2: unknown option `USE_LIBIIO`");
}

#[test]
fn test_unknown_enum_value() {
    let err = parse("device=AD9371\n").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::Config(ConfigError::unknown_option("AD9371"))
    );
}

#[test]
fn test_missing_enum_value() {
    let err = parse("platform=\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingValue);
    let err = parse("device\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingValue);
}

#[test]
fn test_invalid_boolean() {
    let err = parse("\n\nIIO_SUPPORT=maybe\n").unwrap_err();
    assert_eq!(err.line, 3);
    assert_eq!(err.kind, ParseErrorKind::InvalidValue);
}

#[test]
fn test_invalid_utf8() {
    let mut parser = OptionListParser::new();
    let err = parser.feed_all(&[0xFF, 0xFE, b'\n']).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidUtf8);
}

#[test]
fn test_line_too_long() {
    let line = format!("{}\n", "A".repeat(200));
    let err = parse(&line).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::LineTooLong);
    assert_eq!(err.line, 1);
}

// ============================================================================
// Streaming Tests
// ============================================================================

#[test]
fn test_byte_by_byte_feed() {
    let mut parser = OptionListParser::default();
    for byte in BACKSCATTER.bytes() {
        parser.feed(byte).unwrap();
    }
    assert_eq!(parser.finish().unwrap(), Request::backscatter());
}

#[test]
fn test_request_visible_while_streaming() {
    let mut parser = OptionListParser::new();
    parser.feed_all(b"TDD_SWITCH_STATE_EXAMPLE\nHAVE_TDD").unwrap();
    assert!(parser.request().get(Feature::TddSwitchState.key()));
    assert!(!parser.request().get(Feature::TddSynthTable.key()));
}
