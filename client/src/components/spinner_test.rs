use super::*;

#[test]
fn each_preset_maps_to_a_distinct_class() {
    let classes = [SpinnerSize::Small.class(), SpinnerSize::Medium.class(), SpinnerSize::Large.class()];
    assert_eq!(classes[0], "spinner--small");
    assert_eq!(classes[1], "spinner--medium");
    assert_eq!(classes[2], "spinner--large");
    assert_ne!(classes[0], classes[1]);
    assert_ne!(classes[1], classes[2]);
}

#[test]
fn default_preset_is_medium() {
    assert_eq!(SpinnerSize::default(), SpinnerSize::Medium);
}
