//! Configuration Resolver
//!
//! Validates a [`Request`] and reduces it to one immutable
//! [`EffectiveConfiguration`]. Single pass, no state across calls:
//!
//! 1. every exclusive group must have exactly one member requested
//! 2. the prerequisite table is walked in order; a toggle whose
//!    prerequisite is unmet is forced off and an [`Adjustment`] recorded
//! 3. all other toggles pass through unchanged

use core::fmt;

use heapless::Vec;

use crate::error::ConfigError;
use crate::request::Request;
use crate::types::{AdcTransferMode, DeviceVariant, Feature, FeatureSet, Group, OptionKey, Platform};
use crate::{log_debug, log_warn};

/// `dependent` is only honoured while `requires` has value `state`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Prerequisite {
    /// Toggle that may be forced off
    pub dependent: Feature,
    /// Toggle it depends on
    pub requires: Feature,
    /// Value `requires` must have
    pub state: bool,
}

impl Prerequisite {
    /// Whether the prerequisite holds for `features`
    #[must_use]
    pub const fn is_met(&self, features: FeatureSet) -> bool {
        features.contains(self.requires) == self.state
    }
}

impl fmt::Display for Prerequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.state { "on" } else { "off" };
        write!(f, "{} requires {} {}", self.dependent, self.requires, state)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Prerequisite {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} requires {}={}", self.dependent, self.requires, self.state);
    }
}

/// Prerequisites in evaluation order. Entries for a toggle come after the
/// entries that decide its prerequisite.
pub const PREREQUISITES: [Prerequisite; 3] = [
    Prerequisite {
        dependent: Feature::VerboseMessages,
        requires: Feature::IioSupport,
        state: false,
    },
    Prerequisite {
        dependent: Feature::DebugMessages,
        requires: Feature::IioSupport,
        state: false,
    },
    Prerequisite {
        dependent: Feature::DebugMessages,
        requires: Feature::VerboseMessages,
        state: true,
    },
];

/// Upper bound on recorded adjustments (one per table entry)
pub const MAX_ADJUSTMENTS: usize = PREREQUISITES.len();

/// A requested toggle that resolution forced off
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Adjustment {
    /// Toggle that was forced off
    pub feature: Feature,
    /// The unmet prerequisite
    pub prerequisite: Prerequisite,
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} forced off ({})", self.feature, self.prerequisite)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Adjustment {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} forced off ({})", self.feature, self.prerequisite);
    }
}

/// Fully resolved, internally consistent build configuration (immutable)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EffectiveConfiguration {
    device: DeviceVariant,
    platform: Platform,
    adc_transfer_mode: AdcTransferMode,
    features: FeatureSet,
    adjustments: Vec<Adjustment, MAX_ADJUSTMENTS>,
}

impl EffectiveConfiguration {
    /// Whether the build targets `variant`
    #[must_use]
    pub const fn is_device_variant(&self, variant: DeviceVariant) -> bool {
        self.device as u8 == variant as u8
    }

    /// Whether the build links against `platform`
    #[must_use]
    pub const fn is_platform(&self, platform: Platform) -> bool {
        self.platform as u8 == platform as u8
    }

    /// Final value of a toggle
    #[must_use]
    pub const fn is_feature_enabled(&self, feature: Feature) -> bool {
        self.features.contains(feature)
    }

    /// Final value of any option
    #[must_use]
    pub const fn is_enabled(&self, key: OptionKey) -> bool {
        match key {
            OptionKey::Device(v) => self.is_device_variant(v),
            OptionKey::Platform(p) => self.is_platform(p),
            OptionKey::Feature(f) => self.is_feature_enabled(f),
        }
    }

    /// Selected device variant
    #[must_use]
    pub const fn device(&self) -> DeviceVariant {
        self.device
    }

    /// Selected platform
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Selected ADC transfer mode
    #[must_use]
    pub const fn adc_transfer_mode(&self) -> AdcTransferMode {
        self.adc_transfer_mode
    }

    /// All enabled toggles
    #[must_use]
    pub const fn features(&self) -> FeatureSet {
        self.features
    }

    /// Enabled toggles in declaration order
    pub fn enabled_features(&self) -> impl Iterator<Item = Feature> {
        self.features.iter()
    }

    /// Toggles forced off during resolution
    #[must_use]
    pub fn adjustments(&self) -> &[Adjustment] {
        &self.adjustments
    }

    /// Whether `feature` was requested but forced off
    #[must_use]
    pub fn was_adjusted(&self, feature: Feature) -> bool {
        self.adjustments.iter().any(|a| a.feature == feature)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for EffectiveConfiguration {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "{} on {}, ADC {}, {} toggles, {} adjusted",
            self.device,
            self.platform,
            self.adc_transfer_mode,
            self.features.len(),
            self.adjustments.len()
        );
    }
}

/// Resolve a request into an effective configuration
///
/// # Errors
///
/// [`ConfigError::ExclusivityViolation`] for the first group (device
/// variant, platform, ADC transfer mode) without exactly one requested
/// member.
pub fn resolve(request: &Request) -> Result<EffectiveConfiguration, ConfigError> {
    let device = exactly_one(request, Group::DeviceVariant, &DeviceVariant::ALL, DeviceVariant::key)?;
    let platform = exactly_one(request, Group::Platform, &Platform::ALL, Platform::key)?;
    let adc_transfer_mode = exactly_one(
        request,
        Group::AdcTransferMode,
        &AdcTransferMode::ALL,
        AdcTransferMode::key,
    )?;

    let mut features: FeatureSet = Feature::ALL
        .into_iter()
        .filter(|f| request.get(f.key()))
        .collect();

    let mut adjustments = Vec::new();
    for prerequisite in &PREREQUISITES {
        if features.contains(prerequisite.dependent) && !prerequisite.is_met(features) {
            features = features.without(prerequisite.dependent);
            let adjustment = Adjustment {
                feature: prerequisite.dependent,
                prerequisite: *prerequisite,
            };
            log_warn!("{}", adjustment);
            // At most one entry per table row, so this never overflows
            let _ = adjustments.push(adjustment);
        }
    }

    log_debug!("resolved {} on {}, ADC {}", device, platform, adc_transfer_mode);

    Ok(EffectiveConfiguration {
        device,
        platform,
        adc_transfer_mode,
        features,
        adjustments,
    })
}

/// The single member of `members` requested on
fn exactly_one<T: Copy>(
    request: &Request,
    group: Group,
    members: &[T],
    key: fn(T) -> OptionKey,
) -> Result<T, ConfigError> {
    let mut chosen = None;
    for &member in members {
        if request.get(key(member)) {
            if chosen.is_some() {
                return Err(ConfigError::ExclusivityViolation(group));
            }
            chosen = Some(member);
        }
    }
    chosen.ok_or(ConfigError::ExclusivityViolation(group))
}
