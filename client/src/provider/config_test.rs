use super::*;

fn config() -> ProviderConfig {
    ProviderConfig::from_parts("https://auth.example.com", "anon-key").expect("config should build")
}

#[test]
fn from_parts_rejects_blank_url() {
    assert_eq!(ProviderConfig::from_parts("", "key"), None);
    assert_eq!(ProviderConfig::from_parts("   ", "key"), None);
}

#[test]
fn from_parts_rejects_blank_key() {
    assert_eq!(ProviderConfig::from_parts("https://auth.example.com", ""), None);
    assert_eq!(ProviderConfig::from_parts("https://auth.example.com", "  "), None);
}

#[test]
fn from_parts_strips_trailing_slash() {
    let config = ProviderConfig::from_parts("https://auth.example.com/", "key").expect("config should build");
    assert_eq!(config.url, "https://auth.example.com");
}

#[test]
fn authorize_url_carries_provider_and_redirect() {
    let url = config().authorize_url(OAuthProvider::Google, "https://shop.example.com");
    assert_eq!(
        url,
        "https://auth.example.com/auth/v1/authorize?provider=google&redirect_to=https://shop.example.com"
    );
}

#[test]
fn user_and_logout_urls() {
    assert_eq!(config().user_url(), "https://auth.example.com/auth/v1/user");
    assert_eq!(config().logout_url(), "https://auth.example.com/auth/v1/logout");
}

#[test]
fn object_urls_include_bucket_and_path() {
    assert_eq!(
        config().object_url("avatars", "u1/avatar"),
        "https://auth.example.com/storage/v1/object/avatars/u1/avatar"
    );
    assert_eq!(
        config().public_object_url("avatars", "u1/avatar"),
        "https://auth.example.com/storage/v1/object/public/avatars/u1/avatar"
    );
}
