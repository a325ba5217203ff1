use std::sync::{Arc, Mutex};

use futures::executor::block_on;

use super::*;

fn recording_callback() -> (AuthCallback, Arc<Mutex<Vec<AuthEvent>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    let callback: AuthCallback = Arc::new(move |event: &AuthEvent| {
        sink.lock().expect("event sink poisoned").push(event.clone());
    });
    (callback, events)
}

// =============================================================================
// Backend selection
// =============================================================================

#[test]
fn degraded_client_reports_degraded() {
    assert!(ProviderClient::degraded().is_degraded());
}

#[test]
fn live_client_reports_not_degraded() {
    let config = config::ProviderConfig::from_parts("https://auth.example.com", "key").expect("config should build");
    assert!(!ProviderClient::live(config).is_degraded());
}

// =============================================================================
// Degraded behavior through the trait
// =============================================================================

#[test]
fn degraded_sign_in_resolves_with_nonempty_error() {
    let client = ProviderClient::degraded();
    let err = block_on(client.sign_in_with_oauth(OAuthProvider::Google)).expect_err("sign-in should error");
    assert!(!err.to_string().is_empty());
}

#[test]
fn degraded_get_user_is_absent() {
    let client = ProviderClient::degraded();
    assert_eq!(block_on(client.get_user()), None);
}

#[test]
fn degraded_upload_errors_and_public_url_is_empty() {
    let client = ProviderClient::degraded();
    let result = block_on(client.upload("avatars", "u1/avatar", vec![1, 2, 3], "image/png"));
    assert!(result.is_err());
    assert_eq!(client.public_url("avatars", "u1/avatar"), "");
}

// =============================================================================
// Subscription lifecycle
// =============================================================================

#[test]
fn degraded_subscribe_primes_with_signed_out() {
    let client = ProviderClient::degraded();
    let (callback, events) = recording_callback();
    let _subscription = client.subscribe(callback);
    assert_eq!(*events.lock().expect("event sink poisoned"), vec![AuthEvent::SignedOut]);
}

#[test]
fn sign_out_notifies_subscribers() {
    let client = ProviderClient::degraded();
    let (callback, events) = recording_callback();
    let _subscription = client.subscribe(callback);
    block_on(client.sign_out());
    assert_eq!(events.lock().expect("event sink poisoned").len(), 2);
}

#[test]
fn unsubscribe_stops_delivery() {
    let client = ProviderClient::degraded();
    let (callback, events) = recording_callback();
    let subscription = client.subscribe(callback);
    subscription.unsubscribe();
    block_on(client.sign_out());
    // Only the priming event was seen.
    assert_eq!(events.lock().expect("event sink poisoned").len(), 1);
}

#[test]
fn multiple_subscribers_each_receive_events() {
    let client = ProviderClient::degraded();
    let (first_callback, first_events) = recording_callback();
    let (second_callback, second_events) = recording_callback();
    let _first = client.subscribe(first_callback);
    let _second = client.subscribe(second_callback);
    block_on(client.sign_out());
    // Priming broadcasts to the whole registry, so each subscriber sees at
    // least its own prime plus the sign-out.
    assert!(first_events.lock().expect("event sink poisoned").len() >= 2);
    assert!(second_events.lock().expect("event sink poisoned").len() >= 2);
}

#[test]
fn clones_share_the_subscriber_registry() {
    let client = ProviderClient::degraded();
    let clone = client.clone();
    let (callback, events) = recording_callback();
    let _subscription = client.subscribe(callback);
    block_on(clone.sign_out());
    assert_eq!(events.lock().expect("event sink poisoned").len(), 2);
}
