use super::*;
use crate::color::lms::Deficiency;

#[test]
fn starts_with_identity() {
    let registry = FilterRegistry::new();
    assert_eq!(registry.mode(), FilterMode::Identity);
    assert_eq!(*registry.active(), Filter::Identity);
}

#[test]
fn select_key_installs_the_documented_transform() {
    let mut registry = FilterRegistry::new();
    assert!(registry.select_key("toDeuteranopia"));

    let mut data = vec![200u8, 100, 50, 255];
    registry.active().apply(&mut data);
    assert_eq!(data, vec![153, 121, 42, 255]);
}

#[test]
fn unknown_key_keeps_the_prior_filter() {
    let mut registry = FilterRegistry::new();
    registry.select(FilterMode::Daltonize(Deficiency::Protanope));

    assert!(!registry.select_key("sobel"));
    assert_eq!(registry.mode(), FilterMode::Daltonize(Deficiency::Protanope));
    assert_eq!(*registry.active(), Filter::Daltonize(Deficiency::Protanope));
}

#[test]
fn reselecting_the_same_mode_is_idempotent() {
    let mut registry = FilterRegistry::new();
    registry.select(FilterMode::SpectrumShift);
    let first = *registry.active();

    registry.select(FilterMode::SpectrumShift);
    assert_eq!(*registry.active(), first);

    let mut a = vec![200u8, 100, 50, 255];
    let mut b = a.clone();
    first.apply(&mut a);
    registry.active().apply(&mut b);
    assert_eq!(a, b);
}

#[test]
fn daltonize_variant_suffix_selects_the_deficiency() {
    let mut registry = FilterRegistry::new();
    assert!(registry.select_key("daltonize:tritanope"));
    assert_eq!(registry.mode(), FilterMode::Daltonize(Deficiency::Tritanope));

    assert!(registry.select_key("daltonize"));
    assert_eq!(
        registry.mode(),
        FilterMode::Daltonize(Deficiency::Deuteranope)
    );
}
