//! Screen controllers exercised against a mock admin API.

use backlot_client::{AccessToken, ApiClient, ApiError};
use backlot_model::{MediaAttachment, ResourceStatus};
use backlotctl::screens::{
    AdvertisementScreen, CarouselScreen, SubmitError, VideoAdScreen, advertisements, carousel,
    video_ads,
};
use httpmock::MockServer;
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.base_url(), AccessToken::new("test-token"))
        .expect("client construction")
}

fn ad_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "adTitle": "Festival teaser",
        "adURL": "https://client.example/landing",
        "adStatus": status,
        "adPosition": "trending",
        "adClickCount": 3
    })
}

fn png(name: &str) -> MediaAttachment {
    MediaAttachment::new(name, "image/png", vec![1, 2, 3])
}

#[tokio::test]
async fn status_change_completes_before_the_refetch_and_is_reflected() {
    let server = MockServer::start_async().await;
    let mut list_mock = server.mock(|when, then| {
        when.method(GET).path("/api/admin/get-all-advertisements");
        then.status(200)
            .json_body(json!({"advertisements": [ad_json("a1", "active")]}));
    });

    let mut screen = AdvertisementScreen::new(client_for(&server), 5);
    screen.refresh().await;
    assert_eq!(screen.list.items()[0].status, ResourceStatus::Active);

    // After the update the backend reports the new status.
    list_mock.delete();
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/get-all-advertisements");
        then.status(200)
            .json_body(json!({"advertisements": [ad_json("a1", "disabled")]}));
    });
    let update_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/admin/update-ad-status")
            .json_body(json!({"adId": "a1", "status": "disabled"}));
        then.status(200);
    });

    let id = screen.list.items()[0].id.clone();
    screen
        .set_status(&id, ResourceStatus::Disabled)
        .await
        .unwrap();

    update_mock.assert();
    assert_eq!(screen.list.items()[0].status, ResourceStatus::Disabled);
}

#[tokio::test]
async fn failed_status_update_leaves_prior_state_unchanged() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/get-all-advertisements");
        then.status(200)
            .json_body(json!({"advertisements": [ad_json("a1", "active")]}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/admin/update-ad-status");
        then.status(500).body("boom");
    });

    let mut screen = AdvertisementScreen::new(client_for(&server), 5);
    screen.refresh().await;
    let id = screen.list.items()[0].id.clone();

    let err = screen
        .set_status(&id, ResourceStatus::Disabled)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Server { .. }));
    // No refetch happened; the list still shows the old status.
    assert_eq!(screen.list.items()[0].status, ResourceStatus::Active);
}

#[tokio::test]
async fn carousel_delete_removes_exactly_that_id_locally() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/get-carousel-images");
        then.status(200).json_body(json!({"carousels": [
            {"_id": "c1", "title": "One", "url": "/movies/one"},
            {"_id": "c2", "title": "Two", "url": "/movies/two"}
        ]}));
    });
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/admin/delete-carousel-image/c1");
        then.status(200);
    });

    let mut screen = CarouselScreen::new(client_for(&server), 5);
    screen.refresh().await;
    assert_eq!(screen.list.len(), 2);

    let id = screen.list.items()[0].id.clone();
    screen.delete(&id).await.unwrap();

    delete_mock.assert();
    assert_eq!(screen.list.len(), 1);
    assert_eq!(screen.list.items()[0].id.as_str(), "c2");
}

#[tokio::test]
async fn carousel_submit_sends_the_movie_url_and_resets_the_draft() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/movies");
        then.status(200).json_body(json!([
            {"_id": "m1", "movieName": "Night Harvest", "url": "/movies/night-harvest"}
        ]));
    });
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/admin/add-carousel-images")
            .header("x-access-protected", "test-token");
        then.status(200);
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/get-carousel-images");
        then.status(200).json_body(json!({"carousels": []}));
    });

    let mut screen = CarouselScreen::new(client_for(&server), 5);
    screen.load_movies().await.unwrap();
    assert!(screen.select_movie(screen.movies()[0].id.clone()));

    screen.form.set_field(carousel::FIELD_TITLE, "Night Harvest");
    screen.form.set_field(carousel::FIELD_CAST, "A. Rao");
    screen.form.set_field(carousel::FIELD_DESCRIPTION, "Festival banner");
    screen.form.set_field(carousel::FIELD_RATING, "U/A");
    screen
        .form
        .stage_attachment(carousel::SLOT_MOBILE, png("m.png"))
        .unwrap();
    screen
        .form
        .stage_attachment(carousel::SLOT_DESKTOP, png("d.png"))
        .unwrap();

    screen.submit().await.unwrap();

    create_mock.assert();
    assert!(screen.form.is_empty());
    assert!(screen.selected_movie().is_none());
}

#[tokio::test]
async fn failed_submit_leaves_the_draft_exactly_as_entered() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/movies");
        then.status(200).json_body(json!([
            {"_id": "m1", "movieName": "Night Harvest", "url": "/movies/night-harvest"}
        ]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/admin/add-carousel-images");
        then.status(500).body("disk full");
    });

    let mut screen = CarouselScreen::new(client_for(&server), 5);
    screen.load_movies().await.unwrap();
    screen.select_movie(screen.movies()[0].id.clone());
    screen.form.set_field(carousel::FIELD_TITLE, "Night Harvest");
    screen.form.set_field(carousel::FIELD_CAST, "A. Rao");
    screen.form.set_field(carousel::FIELD_DESCRIPTION, "Festival banner");
    screen.form.set_field(carousel::FIELD_RATING, "U/A");
    screen
        .form
        .stage_attachment(carousel::SLOT_MOBILE, png("m.png"))
        .unwrap();
    screen
        .form
        .stage_attachment(carousel::SLOT_DESKTOP, png("d.png"))
        .unwrap();

    let err = screen.submit().await.unwrap_err();
    assert!(matches!(err, SubmitError::Api(ApiError::Server { .. })));
    assert_eq!(screen.form.value(carousel::FIELD_TITLE), "Night Harvest");
    assert!(screen.form.attachment(carousel::SLOT_MOBILE).is_some());
    assert!(screen.selected_movie().is_some());
}

#[tokio::test]
async fn blocked_submit_never_reaches_the_network() {
    let server = MockServer::start_async().await;
    let create_mock = server.mock(|when, then| {
        when.method(POST).path("/api/admin/add-advertisement");
        then.status(200);
    });

    let mut screen = AdvertisementScreen::new(client_for(&server), 5);
    screen.form.set_field(advertisements::FIELD_TITLE, "Incomplete");

    let err = screen.submit().await.unwrap_err();
    assert!(matches!(err, SubmitError::Blocked(_)));
    create_mock.assert_hits(0);
}

#[tokio::test]
async fn video_ad_delete_refetches_the_collection() {
    let server = MockServer::start_async().await;
    let mut list_mock = server.mock(|when, then| {
        when.method(GET).path("/api/admin/get-all-ad-videos");
        then.status(200).json_body(json!({"allVideoAdvertisements": [
            {"_id": "v1", "adTitle": "Spot one", "status": "active"},
            {"_id": "v2", "adTitle": "Spot two", "status": "active"}
        ]}));
    });
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/admin/delete-video-ad/v1");
        then.status(200);
    });

    let mut screen = VideoAdScreen::new(client_for(&server), 5);
    screen.refresh().await;
    assert_eq!(screen.list.len(), 2);

    list_mock.delete();
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/get-all-ad-videos");
        then.status(200).json_body(json!({"allVideoAdvertisements": [
            {"_id": "v2", "adTitle": "Spot two", "status": "active"}
        ]}));
    });

    let id = screen.list.items()[0].id.clone();
    screen.delete(&id).await.unwrap();

    delete_mock.assert();
    assert_eq!(screen.list.len(), 1);
    assert_eq!(screen.list.items()[0].id.as_str(), "v2");
}

#[tokio::test]
async fn clearing_the_video_ad_type_discards_the_staged_video() {
    let server = MockServer::start_async().await;
    let mut screen = VideoAdScreen::new(client_for(&server), 5);

    screen.set_ad_type(Some(backlot_model::VideoAdType::Trailer));
    assert_eq!(
        screen.upload_hint(),
        "Please add a short video which is not longer than 6 seconds"
    );
    screen
        .stage_video(MediaAttachment::new("spot.mp4", "video/mp4", vec![1]))
        .unwrap();
    assert!(screen.form.attachment(video_ads::SLOT_VIDEO).is_some());

    screen.set_ad_type(None);
    assert!(screen.form.attachment(video_ads::SLOT_VIDEO).is_none());
    assert_eq!(screen.upload_hint(), "Choose a video ad type to add");
}

#[tokio::test]
async fn list_fetch_failure_becomes_a_screen_level_error_state() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/get-all-advertisements");
        then.status(502).body("upstream down");
    });

    let mut screen = AdvertisementScreen::new(client_for(&server), 5);
    screen.refresh().await;
    assert!(screen.list.error().is_some());
    assert!(screen.list.items().is_empty());
}
