//! AD936x Build Configuration Resolver
//!
//! Selects which transceiver variant, target platform and optional driver
//! subsystems the AD9361-family driver stack is built with, and checks that
//! the selection is consistent before any driver code path is chosen.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Cargo features      option list text      Request builder   │
//! │  (config)            (option_list)         (request)         │
//! ├──────────────────────────────────────────────────────────────┤
//! │                 Request (requested options)                  │
//! ├──────────────────────────────────────────────────────────────┤
//! │  resolver: exclusive groups → prerequisite table → snapshot  │
//! ├──────────────────────────────────────────────────────────────┤
//! │     EffectiveConfiguration (read-only, driver bring-up)      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use ad936x_config::prelude::*;
//!
//! let config = resolve(&Request::backscatter()).unwrap();
//! assert!(config.is_device_variant(DeviceVariant::Ad9361));
//! assert!(config.is_platform(Platform::Xilinx));
//! assert!(config.is_feature_enabled(Feature::VerboseMessages));
//! assert!(!config.is_feature_enabled(Feature::DebugMessages));
//! ```
//!
//! # Design Principles
//!
//! - **Immutable-by-default**: resolution returns a fresh value, never
//!   mutates one
//! - **Type-driven design**: exclusive groups are enums, so a resolved
//!   configuration names exactly one member
//! - **Explicit error handling**: all fallible operations return `Result`

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Logging macros (defmt on target, stdout in unit tests)
pub mod logging;

/// Option catalogue: device variants, platforms, toggles
pub mod types;

/// Errors reported by this crate
pub mod error;

/// Requested option set
pub mod request;

/// Option-list text format
pub mod option_list;

/// Configuration resolution
pub mod resolver;

/// Build-time configuration from Cargo features
pub mod config;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and functions.

    pub use crate::config::{build_request, resolve_build};
    pub use crate::error::{ConfigError, ParseError, ParseErrorKind};
    pub use crate::request::Request;
    pub use crate::resolver::{resolve, Adjustment, EffectiveConfiguration};
    pub use crate::types::{
        AdcTransferMode, DeviceVariant, Feature, FeatureSet, Group, OptionKey, Platform,
    };
}
