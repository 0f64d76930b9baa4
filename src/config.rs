//! Build-time configuration
//!
//! The Cargo features of this crate mirror the macros of the driver's
//! `app_config.h`. [`build_request`] collects the enabled ones into a
//! [`Request`]; [`resolve_build`] resolves it once at bring-up.

use crate::error::ConfigError;
use crate::request::Request;
use crate::resolver::{resolve, EffectiveConfiguration};
use crate::types::{DeviceVariant, Feature, OptionKey, Platform};
use crate::{log_info, log_warn};

/// Options selected by Cargo features, in catalogue order
const BUILD_OPTIONS: [(OptionKey, bool); OptionKey::COUNT] = [
    (OptionKey::Device(DeviceVariant::Ad9361), cfg!(feature = "ad9361")),
    (OptionKey::Device(DeviceVariant::Ad9364), cfg!(feature = "ad9364")),
    (OptionKey::Device(DeviceVariant::Ad9363a), cfg!(feature = "ad9363a")),
    (OptionKey::Platform(Platform::Windows), cfg!(feature = "platform-windows")),
    (OptionKey::Platform(Platform::Xilinx), cfg!(feature = "platform-xilinx")),
    (OptionKey::Platform(Platform::Altera), cfg!(feature = "platform-altera")),
    (OptionKey::Platform(Platform::Linux), cfg!(feature = "platform-linux")),
    (OptionKey::Feature(Feature::SplitGainTable), cfg!(feature = "split-gain-table")),
    (OptionKey::Feature(Feature::TddSynthTable), cfg!(feature = "tdd-synth-table")),
    (OptionKey::Feature(Feature::AdcDma), cfg!(feature = "adc-dma")),
    (OptionKey::Feature(Feature::AdcDmaIrq), cfg!(feature = "adc-dma-irq")),
    (OptionKey::Feature(Feature::AxiAdcNotPresent), cfg!(feature = "axi-adc-not-present")),
    (OptionKey::Feature(Feature::DacDma), cfg!(feature = "dac-dma")),
    (OptionKey::Feature(Feature::TddSwitchState), cfg!(feature = "tdd-switch-state")),
    (OptionKey::Feature(Feature::IioSupport), cfg!(feature = "iio")),
    (OptionKey::Feature(Feature::VerboseMessages), cfg!(feature = "verbose-messages")),
    (OptionKey::Feature(Feature::DebugMessages), cfg!(feature = "debug-messages")),
    (OptionKey::Feature(Feature::Fmcomms5), cfg!(feature = "fmcomms5")),
    (OptionKey::Feature(Feature::AdiRfSom), cfg!(feature = "adi-rf-som")),
    (OptionKey::Feature(Feature::AdiRfSomCmos), cfg!(feature = "adi-rf-som-cmos")),
];

/// Request assembled from the enabled Cargo features
#[must_use]
pub const fn build_request() -> Request {
    let mut request = Request::new();
    let mut i = 0;
    while i < BUILD_OPTIONS.len() {
        let (key, on) = BUILD_OPTIONS[i];
        request = request.with(key, on);
        i += 1;
    }
    request
}

/// Cargo feature name that selects `key`
#[must_use]
pub const fn feature_name(key: OptionKey) -> &'static str {
    match key {
        OptionKey::Device(DeviceVariant::Ad9361) => "ad9361",
        OptionKey::Device(DeviceVariant::Ad9364) => "ad9364",
        OptionKey::Device(DeviceVariant::Ad9363a) => "ad9363a",
        OptionKey::Platform(Platform::Windows) => "platform-windows",
        OptionKey::Platform(Platform::Xilinx) => "platform-xilinx",
        OptionKey::Platform(Platform::Altera) => "platform-altera",
        OptionKey::Platform(Platform::Linux) => "platform-linux",
        OptionKey::Feature(Feature::SplitGainTable) => "split-gain-table",
        OptionKey::Feature(Feature::TddSynthTable) => "tdd-synth-table",
        OptionKey::Feature(Feature::AdcDma) => "adc-dma",
        OptionKey::Feature(Feature::AdcDmaIrq) => "adc-dma-irq",
        OptionKey::Feature(Feature::AxiAdcNotPresent) => "axi-adc-not-present",
        OptionKey::Feature(Feature::DacDma) => "dac-dma",
        OptionKey::Feature(Feature::TddSwitchState) => "tdd-switch-state",
        OptionKey::Feature(Feature::IioSupport) => "iio",
        OptionKey::Feature(Feature::VerboseMessages) => "verbose-messages",
        OptionKey::Feature(Feature::DebugMessages) => "debug-messages",
        OptionKey::Feature(Feature::Fmcomms5) => "fmcomms5",
        OptionKey::Feature(Feature::AdiRfSom) => "adi-rf-som",
        OptionKey::Feature(Feature::AdiRfSomCmos) => "adi-rf-som-cmos",
    }
}

/// Resolve the configuration this crate was built with
///
/// # Errors
///
/// [`ConfigError::ExclusivityViolation`] when the enabled features do not
/// select exactly one device variant, platform and ADC transfer mode.
pub fn resolve_build() -> Result<EffectiveConfiguration, ConfigError> {
    match resolve(&build_request()) {
        Ok(config) => {
            log_info!(
                "build configuration: {} on {}, ADC {}",
                config.device(),
                config.platform(),
                config.adc_transfer_mode()
            );
            Ok(config)
        }
        Err(e) => {
            log_warn!("build configuration rejected: {}", e);
            Err(e)
        }
    }
}
