//! Option catalogue shared across the resolver
//!
//! Every `app_config.h` macro the driver stack understands is represented
//! here as a typed key. Exclusive macro groups become enums so that a
//! resolved configuration can only ever name one member.

use core::fmt;

/// Transceiver part number the build targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceVariant {
    /// AD9361 (2x2, 70 MHz - 6 GHz)
    Ad9361,
    /// AD9364 (1x1, 70 MHz - 6 GHz)
    Ad9364,
    /// AD9363A (2x2, 325 MHz - 3.8 GHz)
    Ad9363a,
}

impl DeviceVariant {
    /// All device variants in declaration order
    pub const ALL: [Self; 3] = [Self::Ad9361, Self::Ad9364, Self::Ad9363a];

    /// Header macro selecting this variant
    #[must_use]
    pub const fn macro_name(self) -> &'static str {
        match self {
            Self::Ad9361 => "AD9361_DEVICE",
            Self::Ad9364 => "AD9364_DEVICE",
            Self::Ad9363a => "AD9363A_DEVICE",
        }
    }

    /// Part number without the macro suffix
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Ad9361 => "AD9361",
            Self::Ad9364 => "AD9364",
            Self::Ad9363a => "AD9363A",
        }
    }

    /// Number of receive/transmit channel pairs
    #[must_use]
    pub const fn channels(self) -> u8 {
        match self {
            Self::Ad9361 | Self::Ad9363a => 2,
            Self::Ad9364 => 1,
        }
    }

    /// Option key for this variant
    #[must_use]
    pub const fn key(self) -> OptionKey {
        OptionKey::Device(self)
    }

    /// Look up a variant by macro name or (case-insensitive) part number
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| {
            v.macro_name() == token || v.short_name().eq_ignore_ascii_case(token)
        })
    }
}

impl fmt::Display for DeviceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for DeviceVariant {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.short_name());
    }
}

/// Hardware/OS environment the build links against
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Platform {
    /// Windows host with a USB/serial bridge
    Windows,
    /// Xilinx Zynq / MicroBlaze
    Xilinx,
    /// Altera Nios II / SoC
    Altera,
    /// Linux userspace
    Linux,
}

impl Platform {
    /// All platforms in declaration order
    pub const ALL: [Self; 4] = [Self::Windows, Self::Xilinx, Self::Altera, Self::Linux];

    /// Header macro selecting this platform
    #[must_use]
    pub const fn macro_name(self) -> &'static str {
        match self {
            Self::Windows => "WINDOWS_PLATFORM",
            Self::Xilinx => "XILINX_PLATFORM",
            Self::Altera => "ALTERA_PLATFORM",
            Self::Linux => "LINUX_PLATFORM",
        }
    }

    /// Platform name without the macro suffix
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Windows => "WINDOWS",
            Self::Xilinx => "XILINX",
            Self::Altera => "ALTERA",
            Self::Linux => "LINUX",
        }
    }

    /// Option key for this platform
    #[must_use]
    pub const fn key(self) -> OptionKey {
        OptionKey::Platform(self)
    }

    /// Look up a platform by macro name or (case-insensitive) short name
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| {
            p.macro_name() == token || p.short_name().eq_ignore_ascii_case(token)
        })
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Platform {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.short_name());
    }
}

/// How received samples leave the AXI ADC core
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdcTransferMode {
    /// DMA transfer, completion polled
    DmaPolling,
    /// DMA transfer, completion signalled by interrupt
    DmaIrq,
    /// No AXI ADC core in the bitstream
    NotPresent,
}

impl AdcTransferMode {
    /// All transfer modes in declaration order
    pub const ALL: [Self; 3] = [Self::DmaPolling, Self::DmaIrq, Self::NotPresent];

    /// Feature flag that selects this mode
    #[must_use]
    pub const fn feature(self) -> Feature {
        match self {
            Self::DmaPolling => Feature::AdcDma,
            Self::DmaIrq => Feature::AdcDmaIrq,
            Self::NotPresent => Feature::AxiAdcNotPresent,
        }
    }

    /// Short name used in option lists
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::DmaPolling => "DMA_POLLING",
            Self::DmaIrq => "DMA_IRQ",
            Self::NotPresent => "NOT_PRESENT",
        }
    }

    /// Option key for this mode
    #[must_use]
    pub const fn key(self) -> OptionKey {
        OptionKey::Feature(self.feature())
    }

    /// Look up a mode by macro name or (case-insensitive) short name
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| {
            m.feature().macro_name() == token || m.short_name().eq_ignore_ascii_case(token)
        })
    }
}

impl fmt::Display for AdcTransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for AdcTransferMode {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.short_name());
    }
}

/// Boolean driver toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Feature {
    /// Split Rx gain table
    SplitGainTable,
    /// Synthesizer lookup table for TDD operation
    TddSynthTable,
    /// ADC samples via polled DMA
    AdcDma,
    /// ADC samples via interrupt-driven DMA
    AdcDmaIrq,
    /// Bitstream carries no AXI ADC core
    AxiAdcNotPresent,
    /// DAC samples via DMA instead of the DDS
    DacDma,
    /// TDD ENSM switch-state handling
    TddSwitchState,
    /// IIO daemon support
    IioSupport,
    /// Error and warning prints
    VerboseMessages,
    /// Debug prints
    DebugMessages,
    /// FMCOMMS5 dual-transceiver board
    Fmcomms5,
    /// ADI RF SOM board
    AdiRfSom,
    /// ADI RF SOM board, CMOS data interface
    AdiRfSomCmos,
}

impl Feature {
    /// All features in declaration order
    pub const ALL: [Self; 13] = [
        Self::SplitGainTable,
        Self::TddSynthTable,
        Self::AdcDma,
        Self::AdcDmaIrq,
        Self::AxiAdcNotPresent,
        Self::DacDma,
        Self::TddSwitchState,
        Self::IioSupport,
        Self::VerboseMessages,
        Self::DebugMessages,
        Self::Fmcomms5,
        Self::AdiRfSom,
        Self::AdiRfSomCmos,
    ];

    /// Header macro for this toggle
    #[must_use]
    pub const fn macro_name(self) -> &'static str {
        match self {
            Self::SplitGainTable => "HAVE_SPLIT_GAIN_TABLE",
            Self::TddSynthTable => "HAVE_TDD_SYNTH_TABLE",
            Self::AdcDma => "ADC_DMA_EXAMPLE",
            Self::AdcDmaIrq => "ADC_DMA_IRQ_EXAMPLE",
            Self::AxiAdcNotPresent => "AXI_ADC_NOT_PRESENT",
            Self::DacDma => "DAC_DMA_EXAMPLE",
            Self::TddSwitchState => "TDD_SWITCH_STATE_EXAMPLE",
            Self::IioSupport => "IIO_SUPPORT",
            Self::VerboseMessages => "HAVE_VERBOSE_MESSAGES",
            Self::DebugMessages => "HAVE_DEBUG_MESSAGES",
            Self::Fmcomms5 => "FMCOMMS5",
            Self::AdiRfSom => "ADI_RF_SOM",
            Self::AdiRfSomCmos => "ADI_RF_SOM_CMOS",
        }
    }

    /// Bit position inside a [`FeatureSet`]
    #[must_use]
    pub const fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// Exclusive group this toggle belongs to, if any
    #[must_use]
    pub const fn group(self) -> Option<Group> {
        match self {
            Self::AdcDma | Self::AdcDmaIrq | Self::AxiAdcNotPresent => {
                Some(Group::AdcTransferMode)
            }
            _ => None,
        }
    }

    /// Option key for this toggle
    #[must_use]
    pub const fn key(self) -> OptionKey {
        OptionKey::Feature(self)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.macro_name())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Feature {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.macro_name());
    }
}

/// Set of enabled toggles
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FeatureSet(u16);

impl FeatureSet {
    /// Empty set
    pub const EMPTY: Self = Self(0);

    /// Check membership
    #[must_use]
    pub const fn contains(self, feature: Feature) -> bool {
        self.0 & feature.bit() != 0
    }

    /// Return a copy with `feature` added
    #[must_use]
    pub const fn with(self, feature: Feature) -> Self {
        Self(self.0 | feature.bit())
    }

    /// Return a copy with `feature` removed
    #[must_use]
    pub const fn without(self, feature: Feature) -> Self {
        Self(self.0 & !feature.bit())
    }

    /// Number of enabled toggles
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// True when no toggle is enabled
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Enabled toggles in declaration order
    pub fn iter(self) -> impl Iterator<Item = Feature> {
        Feature::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

/// Every toggle as `macro name -> enabled`, in declaration order
#[cfg(feature = "serde")]
impl serde::Serialize for FeatureSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            Feature::ALL
                .into_iter()
                .map(|f| (f.macro_name(), self.contains(f))),
        )
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

/// "Choose exactly one" option group
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Group {
    /// `AD9361_DEVICE` / `AD9364_DEVICE` / `AD9363A_DEVICE`
    DeviceVariant,
    /// `*_PLATFORM`
    Platform,
    /// `ADC_DMA_EXAMPLE` / `ADC_DMA_IRQ_EXAMPLE` / `AXI_ADC_NOT_PRESENT`
    AdcTransferMode,
}

impl Group {
    /// All groups, in the order the resolver checks them
    pub const ALL: [Self; 3] = [Self::DeviceVariant, Self::Platform, Self::AdcTransferMode];

    /// Human readable group name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DeviceVariant => "device variant",
            Self::Platform => "platform",
            Self::AdcTransferMode => "ADC transfer mode",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Group {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.name());
    }
}

/// Any recognized configuration option
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionKey {
    /// Member of the device variant group
    Device(DeviceVariant),
    /// Member of the platform group
    Platform(Platform),
    /// Boolean toggle (including the ADC transfer mode members)
    Feature(Feature),
}

impl OptionKey {
    /// Number of recognized options
    pub const COUNT: usize = DeviceVariant::ALL.len() + Platform::ALL.len() + Feature::ALL.len();

    /// Every recognized option: device variants, then platforms, then toggles
    #[must_use]
    pub fn all() -> impl Iterator<Item = Self> {
        DeviceVariant::ALL
            .into_iter()
            .map(Self::Device)
            .chain(Platform::ALL.into_iter().map(Self::Platform))
            .chain(Feature::ALL.into_iter().map(Self::Feature))
    }

    /// Header macro name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Device(v) => v.macro_name(),
            Self::Platform(p) => p.macro_name(),
            Self::Feature(f) => f.macro_name(),
        }
    }

    /// Look up an option by its exact header macro name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().find(|k| k.name() == name)
    }

    /// Exclusive group this option belongs to, if any
    #[must_use]
    pub const fn group(self) -> Option<Group> {
        match self {
            Self::Device(_) => Some(Group::DeviceVariant),
            Self::Platform(_) => Some(Group::Platform),
            Self::Feature(f) => f.group(),
        }
    }

    /// Dense index in `0..COUNT`
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Device(v) => v as usize,
            Self::Platform(p) => DeviceVariant::ALL.len() + p as usize,
            Self::Feature(f) => DeviceVariant::ALL.len() + Platform::ALL.len() + f as usize,
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for OptionKey {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.name());
    }
}
