//! Types Module Tests
//!
//! Tests for the option catalogue (device variants, platforms, toggles).
//! Run with: cargo test --no-default-features --features std --test types_tests

use ad936x_config::types::{
    AdcTransferMode, DeviceVariant, Feature, FeatureSet, Group, OptionKey, Platform,
};

// =============================================================================
// Option Name Tests
// =============================================================================

#[test]
fn test_option_count() {
    assert_eq!(OptionKey::COUNT, 20);
    assert_eq!(OptionKey::all().count(), OptionKey::COUNT);
}

#[test]
fn test_header_macro_names_recognized() {
    // Every macro the shipped app_config.h mentions
    let names = [
        "AD9361_DEVICE",
        "AD9364_DEVICE",
        "AD9363A_DEVICE",
        "WINDOWS_PLATFORM",
        "XILINX_PLATFORM",
        "ALTERA_PLATFORM",
        "LINUX_PLATFORM",
        "HAVE_SPLIT_GAIN_TABLE",
        "HAVE_TDD_SYNTH_TABLE",
        "ADC_DMA_EXAMPLE",
        "DAC_DMA_EXAMPLE",
        "ADC_DMA_IRQ_EXAMPLE",
        "AXI_ADC_NOT_PRESENT",
        "TDD_SWITCH_STATE_EXAMPLE",
        "IIO_SUPPORT",
        "HAVE_VERBOSE_MESSAGES",
        "HAVE_DEBUG_MESSAGES",
        "FMCOMMS5",
        "ADI_RF_SOM",
        "ADI_RF_SOM_CMOS",
    ];
    for name in names {
        let key = OptionKey::from_name(name);
        assert!(key.is_some(), "{name} should be recognized");
        assert_eq!(key.unwrap().name(), name);
    }
}

#[test]
fn test_from_name_is_exact() {
    assert_eq!(OptionKey::from_name("ad9361_device"), None);
    assert_eq!(OptionKey::from_name(" AD9361_DEVICE"), None);
    assert_eq!(OptionKey::from_name("USE_LIBIIO"), None);
    assert_eq!(OptionKey::from_name(""), None);
}

#[test]
fn test_macro_names_unique() {
    let keys: Vec<OptionKey> = OptionKey::all().collect();
    for (i, a) in keys.iter().enumerate() {
        for b in &keys[i + 1..] {
            assert_ne!(a.name(), b.name());
        }
    }
}

#[test]
fn test_index_dense() {
    let mut seen = [false; OptionKey::COUNT];
    for key in OptionKey::all() {
        assert!(!seen[key.index()], "{key} shares an index");
        seen[key.index()] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

// =============================================================================
// Group Membership Tests
// =============================================================================

#[test]
fn test_device_variants_in_device_group() {
    for v in DeviceVariant::ALL {
        assert_eq!(v.key().group(), Some(Group::DeviceVariant));
    }
}

#[test]
fn test_platforms_in_platform_group() {
    for p in Platform::ALL {
        assert_eq!(p.key().group(), Some(Group::Platform));
    }
}

#[test]
fn test_adc_modes_in_adc_group() {
    assert_eq!(Feature::AdcDma.group(), Some(Group::AdcTransferMode));
    assert_eq!(Feature::AdcDmaIrq.group(), Some(Group::AdcTransferMode));
    assert_eq!(Feature::AxiAdcNotPresent.group(), Some(Group::AdcTransferMode));
}

#[test]
fn test_independent_toggles_have_no_group() {
    let grouped = Feature::ALL.iter().filter(|f| f.group().is_some()).count();
    assert_eq!(grouped, AdcTransferMode::ALL.len());
    assert_eq!(Feature::DacDma.group(), None);
    assert_eq!(Feature::IioSupport.group(), None);
    assert_eq!(Feature::Fmcomms5.group(), None);
}

#[test]
fn test_group_display_names() {
    assert_eq!(Group::DeviceVariant.to_string(), "device variant");
    assert_eq!(Group::Platform.to_string(), "platform");
    assert_eq!(Group::AdcTransferMode.to_string(), "ADC transfer mode");
}

// =============================================================================
// Enum Token Tests
// =============================================================================

#[test]
fn test_device_from_token() {
    assert_eq!(DeviceVariant::from_token("AD9361"), Some(DeviceVariant::Ad9361));
    assert_eq!(DeviceVariant::from_token("ad9363a"), Some(DeviceVariant::Ad9363a));
    assert_eq!(DeviceVariant::from_token("AD9364_DEVICE"), Some(DeviceVariant::Ad9364));
    assert_eq!(DeviceVariant::from_token("AD9371"), None);
}

#[test]
fn test_device_channels() {
    assert_eq!(DeviceVariant::Ad9361.channels(), 2);
    assert_eq!(DeviceVariant::Ad9364.channels(), 1);
    assert_eq!(DeviceVariant::Ad9363a.channels(), 2);
}

#[test]
fn test_platform_from_token() {
    assert_eq!(Platform::from_token("xilinx"), Some(Platform::Xilinx));
    assert_eq!(Platform::from_token("LINUX_PLATFORM"), Some(Platform::Linux));
    assert_eq!(Platform::from_token("MICROBLAZE"), None);
}

#[test]
fn test_adc_mode_from_token() {
    assert_eq!(AdcTransferMode::from_token("dma_irq"), Some(AdcTransferMode::DmaIrq));
    assert_eq!(
        AdcTransferMode::from_token("ADC_DMA_EXAMPLE"),
        Some(AdcTransferMode::DmaPolling)
    );
    assert_eq!(
        AdcTransferMode::from_token("AXI_ADC_NOT_PRESENT"),
        Some(AdcTransferMode::NotPresent)
    );
    assert_eq!(AdcTransferMode::from_token("PIO"), None);
}

#[test]
fn test_adc_mode_feature_mapping() {
    assert_eq!(AdcTransferMode::DmaPolling.feature(), Feature::AdcDma);
    assert_eq!(AdcTransferMode::DmaIrq.feature(), Feature::AdcDmaIrq);
    assert_eq!(AdcTransferMode::NotPresent.feature(), Feature::AxiAdcNotPresent);
}

// =============================================================================
// FeatureSet Tests
// =============================================================================

#[test]
fn test_feature_set_with_without() {
    let set = FeatureSet::EMPTY.with(Feature::IioSupport).with(Feature::DacDma);
    assert!(set.contains(Feature::IioSupport));
    assert!(set.contains(Feature::DacDma));
    assert!(!set.contains(Feature::VerboseMessages));
    assert_eq!(set.len(), 2);

    let set = set.without(Feature::IioSupport);
    assert!(!set.contains(Feature::IioSupport));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_feature_set_iter_in_declaration_order() {
    let set: FeatureSet = [Feature::DebugMessages, Feature::SplitGainTable, Feature::AdcDma]
        .into_iter()
        .collect();
    let order: Vec<Feature> = set.iter().collect();
    assert_eq!(
        order,
        vec![Feature::SplitGainTable, Feature::AdcDma, Feature::DebugMessages]
    );
}

#[test]
fn test_feature_set_empty() {
    assert!(FeatureSet::EMPTY.is_empty());
    assert_eq!(FeatureSet::default(), FeatureSet::EMPTY);
    assert!(!FeatureSet::EMPTY.with(Feature::Fmcomms5).is_empty());
}
