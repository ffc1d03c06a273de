use std::time::{Duration, Instant};

use enka_rs::{EnkaError, RequestContext, Resource};
use httpmock::Method::GET;
use httpmock::MockServer;

use crate::common;

const UID: &str = "618285856";

#[tokio::test]
async fn persistent_429_exhausts_budget_as_rate_limited() {
    let server = MockServer::start();

    let fail_mock = server.mock(|when, then| {
        when.method(GET).path(format!("/api/uid/{UID}"));
        then.status(429).header("Retry-After", "0").body("slow down");
    });

    let client = common::client(&server);
    let err = client
        .genshin()
        .profile(&RequestContext::default(), UID)
        .await
        .unwrap_err();

    fail_mock.assert_calls(3);
    match err {
        EnkaError::RateLimited {
            url,
            attempts,
            last_status,
        } => {
            assert!(url.contains("/api/uid/618285856"));
            assert_eq!(attempts, 3);
            assert_eq!(last_status, 429);
        }
        other => panic!("expected RateLimited, got {other:?}"),
    }
}

#[tokio::test]
async fn persistent_500_is_reported_as_rate_limited() {
    let server = MockServer::start();

    // 500 ignores Retry-After; the 10ms default delay from the test builder applies.
    let fail_mock = server.mock(|when, then| {
        when.method(GET).path(format!("/api/uid/{UID}"));
        then.status(500).header("Retry-After", "120");
    });

    let started = Instant::now();
    let err = common::client(&server)
        .genshin()
        .profile(&RequestContext::default(), UID)
        .await
        .unwrap_err();

    fail_mock.assert_calls(3);
    assert!(started.elapsed() < Duration::from_secs(60));
    assert!(matches!(
        err,
        EnkaError::RateLimited {
            attempts: 3,
            last_status: 500,
            ..
        }
    ));
}

#[tokio::test]
async fn persistent_503_with_garbage_retry_after_falls_back() {
    let server = MockServer::start();

    let fail_mock = server.mock(|when, then| {
        when.method(GET).path("/api/hsr/uid/800000000");
        then.status(503).header("Retry-After", "soon-ish");
    });

    let err = common::client(&server)
        .hsr()
        .profile(&RequestContext::default(), "800000000")
        .await
        .unwrap_err();

    fail_mock.assert_calls(3);
    assert!(matches!(
        err,
        EnkaError::RateLimited {
            last_status: 503,
            ..
        }
    ));
}

#[tokio::test]
async fn custom_budget_is_respected() {
    let server = MockServer::start();

    let fail_mock = server.mock(|when, then| {
        when.method(GET).path(format!("/api/uid/{UID}"));
        then.status(503);
    });

    let client = common::builder(&server).max_attempts(5).build().unwrap();
    let err = client
        .genshin()
        .profile(&RequestContext::default(), UID)
        .await
        .unwrap_err();

    fail_mock.assert_calls(5);
    assert!(matches!(err, EnkaError::RateLimited { attempts: 5, .. }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn rate_limit_then_success_waits_retry_after() {
    let server = MockServer::start_async().await;
    let path = format!("/api/uid/{UID}");

    let limited = server
        .mock_async(|when, then| {
            when.method(GET).path(path.clone());
            then.status(429).header("Retry-After", "1");
        })
        .await;

    let client = common::client(&server);
    let started = Instant::now();
    let task = tokio::spawn(async move {
        client
            .genshin()
            .profile(&RequestContext::default(), UID)
            .await
    });

    // Swap the 429 for a 200 once the first attempt has landed.
    let deadline = Instant::now() + Duration::from_secs(5);
    while limited.calls_async().await < 1 {
        assert!(Instant::now() < deadline, "first attempt never arrived");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    limited.delete_async().await;
    let ok = server
        .mock_async(|when, then| {
            when.method(GET).path(path.clone());
            then.status(200)
                .header("content-type", "application/json")
                .body(common::fixture("genshin_profile.json"));
        })
        .await;

    let profile = task.await.unwrap().unwrap();
    let elapsed = started.elapsed();

    ok.assert_calls_async(1).await;
    assert!(elapsed >= Duration::from_secs(1), "waited only {elapsed:?}");
    assert_eq!(profile.player_info.nickname, "Algoinde");
}

#[tokio::test]
async fn retries_disabled_surface_status_specific_errors() {
    let server = MockServer::start();

    let internal = server.mock(|when, then| {
        when.method(GET).path("/api/uid/111111111");
        then.status(500);
    });
    let unavailable = server.mock(|when, then| {
        when.method(GET).path("/api/uid/222222222");
        then.status(503).header("Retry-After", "0");
    });
    let limited = server.mock(|when, then| {
        when.method(GET).path("/api/uid/333333333");
        then.status(429);
    });

    let client = common::builder(&server).retry_enabled(false).build().unwrap();
    let ctx = RequestContext::default();
    let genshin = client.genshin();

    let e500 = genshin.profile(&ctx, "111111111").await.unwrap_err();
    let e503 = genshin.profile(&ctx, "222222222").await.unwrap_err();
    let e429 = genshin.profile(&ctx, "333333333").await.unwrap_err();

    internal.assert_calls(1);
    unavailable.assert_calls(1);
    limited.assert_calls(1);
    assert!(matches!(e500, EnkaError::ServerError { .. }), "{e500:?}");
    assert!(matches!(e503, EnkaError::ServiceUnavailable { .. }), "{e503:?}");
    assert!(
        matches!(e429, EnkaError::RateLimited { attempts: 1, last_status: 429, .. }),
        "{e429:?}"
    );
}

#[tokio::test]
async fn fetch_with_retry_is_usable_directly() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/profile/Algoinde");
        then.status(200).body(common::fixture("user_profile.json"));
    });

    let client = common::client(&server);
    let url = common::base_url(&server).join("profile/Algoinde").unwrap();
    let value: serde_json::Value = client
        .fetch_with_retry(&RequestContext::default(), url)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(value["username"], "Algoinde");
    // Direct fetches never touch resource-level keys.
    assert_eq!(Resource::User { username: "Algoinde" }.cache_key(), "user/Algoinde");
}
