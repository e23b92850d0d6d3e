use backlot_client::{AccessToken, ApiClient, ApiError};
use backlot_model::{
    MediaAttachment, NewVideoAd, ResourceId, ResourceStatus, VideoAdType,
};
use httpmock::MockServer;
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.base_url(), AccessToken::new("test-token"))
        .expect("client construction")
}

#[tokio::test]
async fn list_movies_sends_token_and_decodes_array() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/admin/movies")
            .header("x-access-protected", "test-token");
        then.status(200).json_body(json!([
            {"_id": "m1", "movieName": "Night Harvest", "url": "/movies/night-harvest"},
            {"_id": "m2", "movieName": "Paper Moon", "url": "/movies/paper-moon"}
        ]));
    });

    let movies = client_for(&server).list_movies().await.unwrap();

    mock.assert();
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[1].name, "Paper Moon");
}

#[tokio::test]
async fn carousel_listing_unwraps_envelope() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/get-carousel-images");
        then.status(200).json_body(json!({
            "carousels": [{
                "_id": "c1",
                "title": "Night Harvest",
                "cast": "A. Rao",
                "description": "Festival banner",
                "url": "/movies/night-harvest",
                "rating": "U/A",
                "mobileImage": "/carousel/nh-m.png",
                "desktopImage": "/carousel/nh-d.png"
            }]
        }));
    });

    let entries = client_for(&server).list_carousel_entries().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id.as_str(), "c1");
}

#[tokio::test]
async fn status_update_posts_exact_body_once() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/admin/update-ad-status")
            .header("x-access-protected", "test-token")
            .json_body(json!({"adId": "a1", "status": "disabled"}));
        then.status(200);
    });

    client_for(&server)
        .set_advertisement_status(&ResourceId::from("a1"), ResourceStatus::Disabled)
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn video_ad_create_is_multipart() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/admin/add-ad-video")
            .header("x-access-protected", "test-token");
        then.status(200);
    });

    let draft = NewVideoAd {
        title: "Diwali spot".into(),
        ad_type: VideoAdType::Trailer,
        redirect_url: "https://client.example/landing".into(),
        video: MediaAttachment::new("spot.mp4", "video/mp4", vec![0, 1, 2, 3]),
    };
    client_for(&server).add_video_ad(draft).await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn delete_issues_one_request_to_the_id_path() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/admin/delete-video-ad/v7");
        then.status(200);
    });

    client_for(&server)
        .delete_video_ad(&ResourceId::from("v7"))
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn unauthorized_maps_to_auth_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/get-all-advertisements");
        then.status(401);
    });

    let err = client_for(&server).list_advertisements().await.unwrap_err();
    assert!(matches!(err, ApiError::Auth));
}

#[tokio::test]
async fn client_errors_map_to_rejected() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/admin/update-video-ad-status");
        then.status(400).body("bad ad id");
    });

    let err = client_for(&server)
        .set_video_ad_status(&ResourceId::from("nope"), ResourceStatus::Active)
        .await
        .unwrap_err();
    match err {
        ApiError::Rejected { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "bad ad id");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn server_errors_map_to_server() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/get-all-ad-videos");
        then.status(502).body("upstream down");
    });

    let err = client_for(&server).list_video_ads().await.unwrap_err();
    assert!(matches!(err, ApiError::Server { status: 502, .. }));
}

#[tokio::test]
async fn malformed_success_body_maps_to_decode() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/get-all-advertisements");
        then.status(200).json_body(json!({"advertisements": [{"_id": "a1"}]}));
    });

    let err = client_for(&server).list_advertisements().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn media_urls_live_under_the_public_prefix() {
    let client = ApiClient::new("http://cdn.test:9000", AccessToken::new("t")).unwrap();
    assert_eq!(
        client.media_url("/carousel/banner.png"),
        "http://cdn.test:9000/public/carousel/banner.png"
    );
    assert_eq!(
        client.media_url("carousel/banner.png"),
        "http://cdn.test:9000/public/carousel/banner.png"
    );
}
