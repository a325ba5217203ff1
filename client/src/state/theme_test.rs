use super::*;

#[test]
fn accent_only_patch_leaves_other_fields_unchanged() {
    let mut theme = Theme::default();
    let before = theme.clone();
    theme.apply_patch(&ThemePatch { accent: Some("#111111".to_owned()), ..ThemePatch::default() });
    assert_eq!(theme.accent, "#111111");
    assert_eq!(theme.primary, before.primary);
    assert_eq!(theme.secondary, before.secondary);
    assert_eq!(theme.font, before.font);
}

#[test]
fn empty_patch_is_a_no_op() {
    let mut theme = Theme::default();
    let before = theme.clone();
    theme.apply_patch(&ThemePatch::default());
    assert_eq!(theme, before);
}

#[test]
fn full_patch_replaces_every_field() {
    let mut theme = Theme::default();
    theme.apply_patch(&ThemePatch {
        primary: Some("#000001".to_owned()),
        secondary: Some("#000002".to_owned()),
        accent: Some("#000003".to_owned()),
        font: Some("serif".to_owned()),
    });
    assert_eq!(theme.primary, "#000001");
    assert_eq!(theme.secondary, "#000002");
    assert_eq!(theme.accent, "#000003");
    assert_eq!(theme.font, "serif");
}

#[test]
fn invalid_values_pass_through_unchanged() {
    // Garbage in, garbage out: the store does not validate tokens.
    let mut theme = Theme::default();
    theme.apply_patch(&ThemePatch { primary: Some("not-a-color".to_owned()), ..ThemePatch::default() });
    assert_eq!(theme.primary, "not-a-color");
}

#[test]
fn patches_compose_with_last_write_winning() {
    let mut theme = Theme::default();
    theme.apply_patch(&ThemePatch { accent: Some("#aaaaaa".to_owned()), ..ThemePatch::default() });
    theme.apply_patch(&ThemePatch { accent: Some("#bbbbbb".to_owned()), ..ThemePatch::default() });
    assert_eq!(theme.accent, "#bbbbbb");
}
