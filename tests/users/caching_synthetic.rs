use std::time::Duration;

use enka_rs::{CacheMode, DEFAULT_CACHE_TTL, RequestContext};
use httpmock::Method::GET;
use httpmock::MockServer;

use crate::common::{self, CountingCache};

#[tokio::test]
async fn user_resources_are_cached_for_five_minutes() {
    let server = MockServer::start();

    let profile = server.mock(|when, then| {
        when.method(GET).path("/api/profile/Algoinde");
        then.status(200).body(common::fixture("user_profile.json"));
    });
    let hoyos = server.mock(|when, then| {
        when.method(GET).path("/api/profile/Algoinde/hoyos");
        then.status(200).body(common::fixture("hoyos.json"));
    });
    let hoyo = server.mock(|when, then| {
        when.method(GET).path("/api/profile/Algoinde/hoyos/4Wjv2e");
        then.status(200).body(common::fixture("hoyo.json"));
    });
    let builds = server.mock(|when, then| {
        when.method(GET).path("/api/profile/Algoinde/hoyos/4Wjv2e/builds");
        then.status(200).body(common::fixture("builds.json"));
    });

    let cache = CountingCache::new();
    let client = common::cached_client(&server, cache.clone());
    let ctx = RequestContext::default();
    let users = client.users();

    for _ in 0..2 {
        users.profile(&ctx, "Algoinde").await.unwrap();
        users.hoyos(&ctx, "Algoinde").await.unwrap();
        users.hoyo(&ctx, "Algoinde", "4Wjv2e").await.unwrap();
        users.builds(&ctx, "Algoinde", "4Wjv2e").await.unwrap();
    }

    profile.assert_calls(1);
    hoyos.assert_calls(1);
    hoyo.assert_calls(1);
    builds.assert_calls(1);

    assert_eq!(DEFAULT_CACHE_TTL, Duration::from_secs(300));
    assert_eq!(
        cache.sets(),
        vec![
            ("user/Algoinde".to_string(), DEFAULT_CACHE_TTL),
            ("user/Algoinde/hoyos".to_string(), DEFAULT_CACHE_TTL),
            ("user/Algoinde/hoyos/4Wjv2e".to_string(), DEFAULT_CACHE_TTL),
            ("user/Algoinde/hoyos/4Wjv2e/builds".to_string(), DEFAULT_CACHE_TTL),
        ]
    );
}

#[tokio::test]
async fn refresh_mode_updates_cached_user() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/profile/Algoinde");
        then.status(200).body(common::fixture("user_profile.json"));
    });

    let cache = CountingCache::new();
    let client = common::cached_client(&server, cache.clone());
    let ctx = RequestContext::default();

    client.users().profile(&ctx, "Algoinde").await.unwrap();
    client
        .users()
        .cache_mode(CacheMode::Refresh)
        .profile(&ctx, "Algoinde")
        .await
        .unwrap();
    client.users().profile(&ctx, "Algoinde").await.unwrap();

    mock.assert_calls(2);
    assert_eq!(cache.sets().len(), 2);
}

#[tokio::test]
async fn usernames_with_separators_get_distinct_keys() {
    let server = MockServer::start();

    // "{}" decodes both as a profile and as an empty hoyo map.
    let any = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("{}");
    });

    let cache = CountingCache::new();
    let client = common::cached_client(&server, cache.clone());
    let ctx = RequestContext::default();

    client.users().profile(&ctx, "a/hoyos").await.unwrap();
    client.users().hoyos(&ctx, "a").await.unwrap();

    any.assert_calls(2);

    let keys: Vec<String> = cache.sets().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["user/a%2Fhoyos".to_string(), "user/a/hoyos".to_string()]);
}
