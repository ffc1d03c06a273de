use enka_rs::{EnkaClient, EnkaError, RequestContext};
use httpmock::Method::GET;
use httpmock::MockServer;

use crate::common;

#[tokio::test]
async fn non_retryable_statuses_fail_after_one_attempt() {
    let server = MockServer::start();

    let bad_request = server.mock(|when, then| {
        when.method(GET).path("/api/uid/100000001");
        then.status(400);
    });
    let maintenance = server.mock(|when, then| {
        when.method(GET).path("/api/uid/100000002");
        then.status(424).body("maintenance");
    });
    let teapot = server.mock(|when, then| {
        when.method(GET).path("/api/uid/100000003");
        then.status(418);
    });

    let client = common::client(&server);
    let ctx = RequestContext::default();
    let genshin = client.genshin();

    let e400 = genshin.profile(&ctx, "100000001").await.unwrap_err();
    let e424 = genshin.profile(&ctx, "100000002").await.unwrap_err();
    let e418 = genshin.profile(&ctx, "100000003").await.unwrap_err();

    bad_request.assert_calls(1);
    maintenance.assert_calls(1);
    teapot.assert_calls(1);

    assert!(matches!(e400, EnkaError::BadRequest { .. }), "{e400:?}");
    assert!(e400.is_invalid_identifier());
    assert!(matches!(e424, EnkaError::Maintenance { .. }), "{e424:?}");
    match e418 {
        EnkaError::Status { status, url } => {
            assert_eq!(status, 418);
            assert!(url.ends_with("/api/uid/100000003"));
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn not_found_is_translated_per_game() {
    let server = MockServer::start();

    let paths = ["/api/uid/618285856", "/api/hsr/uid/800000000", "/api/zzz/uid/1300000000"];
    let mocks: Vec<_> = paths
        .iter()
        .map(|path| {
            server.mock(|when, then| {
                when.method(GET).path(*path);
                then.status(404);
            })
        })
        .collect();

    let client = common::client(&server);
    let ctx = RequestContext::default();

    let genshin = client.genshin().profile(&ctx, "618285856").await.unwrap_err();
    let hsr = client.hsr().profile(&ctx, "800000000").await.unwrap_err();
    let zzz = client.zzz().profile(&ctx, "1300000000").await.unwrap_err();

    for mock in &mocks {
        mock.assert_calls(1);
    }
    for err in [&genshin, &hsr, &zzz] {
        assert!(err.is_not_found(), "{err:?}");
    }
    assert!(matches!(genshin, EnkaError::PlayerNotFound { ref uid } if uid == "618285856"));
    assert!(matches!(zzz, EnkaError::PlayerNotFound { ref uid } if uid == "1300000000"));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error_without_retry() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/uid/618285856");
        then.status(200).body("{\"playerInfo\": ");
    });

    let err = common::client(&server)
        .genshin()
        .profile(&RequestContext::default(), "618285856")
        .await
        .unwrap_err();

    mock.assert_calls(1);
    assert!(matches!(err, EnkaError::Decode { .. }), "{err:?}");
}

#[tokio::test]
async fn transport_failure_is_returned_immediately() {
    // Nothing listens on port 1.
    let client = EnkaClient::builder()
        .base_url(url::Url::parse("http://127.0.0.1:1/api/").unwrap())
        .build()
        .unwrap();

    let err = client
        .genshin()
        .profile(&RequestContext::default(), "618285856")
        .await
        .unwrap_err();

    assert!(matches!(err, EnkaError::Http(_)), "{err:?}");
}
