//! Requested option set
//!
//! A [`Request`] is the resolver input: for every recognized option, whether
//! the caller asked for it. Options never mentioned count as off, the same
//! way an undefined macro does.

use core::fmt;

use crate::error::ConfigError;
use crate::types::{AdcTransferMode, DeviceVariant, Feature, Group, OptionKey, Platform};

/// Requested value of every recognized option
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Request {
    /// One bit per [`OptionKey::index`]
    bits: u32,
}

impl Request {
    /// Request with every option off
    #[must_use]
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// The backscatter receiver's shipped configuration: AD9361 on Xilinx,
    /// polled ADC DMA, verbose messages, everything else off
    #[must_use]
    pub const fn backscatter() -> Self {
        Self::new()
            .with(OptionKey::Device(DeviceVariant::Ad9361), true)
            .with(OptionKey::Platform(Platform::Xilinx), true)
            .with(OptionKey::Feature(Feature::AdcDma), true)
            .with(OptionKey::Feature(Feature::VerboseMessages), true)
    }

    /// Builder form of [`Request::set`]
    #[must_use]
    pub const fn with(self, key: OptionKey, on: bool) -> Self {
        let bit = 1 << key.index();
        if on {
            Self { bits: self.bits | bit }
        } else {
            Self { bits: self.bits & !bit }
        }
    }

    /// Request `key` on or off
    pub fn set(&mut self, key: OptionKey, on: bool) {
        *self = self.with(key, on);
    }

    /// Request an option by its header macro name
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownOption`] if `name` is not a recognized macro.
    pub fn set_named(&mut self, name: &str, on: bool) -> Result<(), ConfigError> {
        let key = OptionKey::from_name(name).ok_or_else(|| ConfigError::unknown_option(name))?;
        self.set(key, on);
        Ok(())
    }

    /// Whether `key` was requested on
    #[must_use]
    pub const fn get(&self, key: OptionKey) -> bool {
        self.bits & (1 << key.index()) != 0
    }

    /// Select one device variant, clearing the others
    pub fn select_device(&mut self, variant: DeviceVariant) {
        self.clear_group(Group::DeviceVariant);
        self.set(variant.key(), true);
    }

    /// Select one platform, clearing the others
    pub fn select_platform(&mut self, platform: Platform) {
        self.clear_group(Group::Platform);
        self.set(platform.key(), true);
    }

    /// Select one ADC transfer mode, clearing the others
    pub fn select_adc_transfer_mode(&mut self, mode: AdcTransferMode) {
        self.clear_group(Group::AdcTransferMode);
        self.set(mode.key(), true);
    }

    /// Turn off every member of `group`
    pub fn clear_group(&mut self, group: Group) {
        for key in OptionKey::all().filter(|k| k.group() == Some(group)) {
            self.set(key, false);
        }
    }

    /// Options requested on, in catalogue order
    pub fn requested(&self) -> impl Iterator<Item = OptionKey> + '_ {
        OptionKey::all().filter(move |k| self.get(*k))
    }

    /// Number of members of `group` requested on
    #[must_use]
    pub fn count_in(&self, group: Group) -> usize {
        self.requested().filter(|k| k.group() == Some(group)).count()
    }
}

impl FromIterator<OptionKey> for Request {
    fn from_iter<I: IntoIterator<Item = OptionKey>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |req, key| req.with(key, true))
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for key in self.requested() {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(key.name())?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Request {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Request({=u32:#x})", self.bits);
    }
}

/// Serialized as the list of requested macro names
#[cfg(feature = "serde")]
impl serde::Serialize for Request {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.requested().map(OptionKey::name))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Request {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(RequestVisitor)
    }
}

/// Builds a [`Request`] from a sequence of macro names
#[cfg(feature = "serde")]
struct RequestVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for RequestVisitor {
    type Value = Request;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of option macro names")
    }

    fn visit_seq<A: serde::de::SeqAccess<'de>>(self, mut seq: A) -> Result<Request, A::Error> {
        let mut request = Request::new();
        while let Some(MacroName(key)) = seq.next_element()? {
            request.set(key, true);
        }
        Ok(request)
    }
}

/// One option key, spelled as its header macro
#[cfg(feature = "serde")]
struct MacroName(OptionKey);

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MacroName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(MacroNameVisitor)
    }
}

#[cfg(feature = "serde")]
struct MacroNameVisitor;

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for MacroNameVisitor {
    type Value = MacroName;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an option macro name")
    }

    fn visit_str<E: serde::de::Error>(self, name: &str) -> Result<MacroName, E> {
        OptionKey::from_name(name)
            .map(MacroName)
            .ok_or_else(|| E::custom(ConfigError::unknown_option(name)))
    }
}
