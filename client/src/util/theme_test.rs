use super::*;

#[test]
fn css_variables_mirror_fields_in_order() {
    let theme = Theme {
        primary: "#111111".to_owned(),
        secondary: "#222222".to_owned(),
        accent: "#333333".to_owned(),
        font: "serif".to_owned(),
    };
    let vars = css_variables(&theme);
    assert_eq!(vars[0], ("--color-primary", "#111111".to_owned()));
    assert_eq!(vars[1], ("--color-secondary", "#222222".to_owned()));
    assert_eq!(vars[2], ("--color-accent", "#333333".to_owned()));
    assert_eq!(vars[3], ("--font-body", "serif".to_owned()));
}

#[test]
fn every_theme_field_has_a_custom_property() {
    let vars = css_variables(&Theme::default());
    assert_eq!(vars.len(), THEME_VARS.len());
}
