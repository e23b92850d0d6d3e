//! Typed wrapper over the admin API.
//!
//! One client instance serves every screen. The base origin is fixed
//! at construction, the access token is passed in explicitly (never
//! read from ambient state), and every call attaches it as the
//! protected header. No retries: a failed call surfaces once and the
//! operator's repeated action is the retry mechanism.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use backlot_model::{
    Advertisement, CarouselImage, MediaAttachment, Movie, NewAdvertisement, NewCarouselEntry,
    NewVideoAd, ResourceId, ResourceStatus, VideoAd, format_wire_date,
};

use crate::error::{ApiError, ApiResult};
use crate::token::AccessToken;

/// Header carrying the opaque operator token on every protected call.
pub const HEADER_ACCESS_TOKEN: &str = "x-access-protected";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Admin API client with authentication support.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    token: AccessToken,
}

impl ApiClient {
    /// Create a client bound to one API origin and one access token.
    pub fn new(base_url: &str, token: AccessToken) -> ApiResult<Self> {
        let base_url = Url::parse(base_url)?;
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::Network)?;

        tracing::debug!(origin = %base_url, "admin API client created");

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Build a full URL for an admin endpoint path.
    fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}api/admin/{}", self.base_url, path)
    }

    /// Absolute URL for a media path the backend returned.
    ///
    /// The backend stores creatives as relative paths and serves them
    /// under its static `/public` prefix.
    pub fn media_url(&self, relative: &str) -> String {
        if relative.starts_with('/') {
            format!("{}public{}", self.base_url, relative)
        } else {
            format!("{}public/{}", self.base_url, relative)
        }
    }

    fn protected(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header(HEADER_ACCESS_TOKEN, self.token.as_str())
    }

    /// Execute a request whose 2xx body decodes into `T`.
    async fn execute_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await.map_err(ApiError::Network)?;
        let response = Self::check_status(response).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// Execute a request where only the status code matters.
    async fn execute_ok(&self, request: RequestBuilder) -> ApiResult<()> {
        let response = request.send().await.map_err(ApiError::Network)?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Map non-success statuses onto the error taxonomy.
    async fn check_status(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            tracing::warn!(%status, "protected call rejected");
            return Err(ApiError::Auth);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());

        if status.is_client_error() {
            Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            })
        } else {
            Err(ApiError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }

    // Movies

    /// List the movies available for carousel linking.
    pub async fn list_movies(&self) -> ApiResult<Vec<Movie>> {
        let url = self.endpoint("movies");
        tracing::debug!(%url, "listing movies");
        let request = self.protected(self.client.get(&url));
        self.execute_json(request).await
    }

    // Carousel

    /// List the carousel banner entries.
    pub async fn list_carousel_entries(&self) -> ApiResult<Vec<CarouselImage>> {
        let url = self.endpoint("get-carousel-images");
        tracing::debug!(%url, "listing carousel entries");
        let request = self.protected(self.client.get(&url));
        let envelope: CarouselListResponse = self.execute_json(request).await?;
        Ok(envelope.carousels)
    }

    /// Create a carousel entry from a submitted draft.
    pub async fn add_carousel_entry(&self, entry: NewCarouselEntry) -> ApiResult<()> {
        let form = Form::new()
            .text("title", entry.title)
            .text("cast", entry.cast)
            .text("description", entry.description)
            .text("url", entry.url)
            .text("rating", entry.rating)
            .part("mobileImage", attachment_part(entry.mobile_image)?)
            .part("desktopImage", attachment_part(entry.desktop_image)?);

        let url = self.endpoint("add-carousel-images");
        tracing::debug!(%url, "creating carousel entry");
        let request = self.protected(self.client.post(&url)).multipart(form);
        self.execute_ok(request).await
    }

    /// Delete one carousel entry by id.
    pub async fn delete_carousel_entry(&self, id: &ResourceId) -> ApiResult<()> {
        let url = self.endpoint(&format!("delete-carousel-image/{id}"));
        tracing::debug!(%url, "deleting carousel entry");
        let request = self.protected(self.client.delete(&url));
        self.execute_ok(request).await
    }

    // Display advertisements

    /// List all display advertisements.
    pub async fn list_advertisements(&self) -> ApiResult<Vec<Advertisement>> {
        let url = self.endpoint("get-all-advertisements");
        tracing::debug!(%url, "listing advertisements");
        let request = self.protected(self.client.get(&url));
        let envelope: AdvertisementListResponse = self.execute_json(request).await?;
        Ok(envelope.advertisements)
    }

    /// Create a display advertisement from a submitted draft.
    pub async fn add_advertisement(&self, ad: NewAdvertisement) -> ApiResult<()> {
        let form = Form::new()
            .text("title", ad.title)
            .text("url", ad.url)
            .text("clientAddress", ad.client_address)
            .text("clientName", ad.client_name)
            .text("clientContact", ad.client_contact)
            .text("startDate", format_wire_date(ad.start_date))
            .text("endDate", format_wire_date(ad.end_date))
            .text("adPosition", ad.position.as_str())
            .part("mobileImage", attachment_part(ad.mobile_image)?)
            .part("desktopImage", attachment_part(ad.desktop_image)?);

        let url = self.endpoint("add-advertisement");
        tracing::debug!(%url, "creating advertisement");
        let request = self.protected(self.client.post(&url)).multipart(form);
        self.execute_ok(request).await
    }

    /// Flip a display advertisement between active and disabled.
    pub async fn set_advertisement_status(
        &self,
        id: &ResourceId,
        status: ResourceStatus,
    ) -> ApiResult<()> {
        let url = self.endpoint("update-ad-status");
        tracing::debug!(%url, %id, %status, "updating advertisement status");
        let body = StatusUpdateRequest {
            ad_id: id.as_str(),
            status,
        };
        let request = self.protected(self.client.post(&url)).json(&body);
        self.execute_ok(request).await
    }

    // Video advertisements

    /// List all video advertisements.
    pub async fn list_video_ads(&self) -> ApiResult<Vec<VideoAd>> {
        let url = self.endpoint("get-all-ad-videos");
        tracing::debug!(%url, "listing video ads");
        let request = self.protected(self.client.get(&url));
        let envelope: VideoAdListResponse = self.execute_json(request).await?;
        Ok(envelope.video_ads)
    }

    /// Create a video advertisement from a submitted draft.
    pub async fn add_video_ad(&self, ad: NewVideoAd) -> ApiResult<()> {
        let form = Form::new()
            .part("adVideo", attachment_part(ad.video)?)
            .text("title", ad.title)
            .text("adType", ad.ad_type.as_str())
            .text("adRedirectURL", ad.redirect_url);

        let url = self.endpoint("add-ad-video");
        tracing::debug!(%url, "creating video ad");
        let request = self.protected(self.client.post(&url)).multipart(form);
        self.execute_ok(request).await
    }

    /// Flip a video advertisement between active and disabled.
    pub async fn set_video_ad_status(
        &self,
        id: &ResourceId,
        status: ResourceStatus,
    ) -> ApiResult<()> {
        let url = self.endpoint("update-video-ad-status");
        tracing::debug!(%url, %id, %status, "updating video ad status");
        let body = StatusUpdateRequest {
            ad_id: id.as_str(),
            status,
        };
        let request = self.protected(self.client.post(&url)).json(&body);
        self.execute_ok(request).await
    }

    /// Delete one video advertisement by id.
    pub async fn delete_video_ad(&self, id: &ResourceId) -> ApiResult<()> {
        let url = self.endpoint(&format!("delete-video-ad/{id}"));
        tracing::debug!(%url, "deleting video ad");
        let request = self.protected(self.client.delete(&url));
        self.execute_ok(request).await
    }
}

/// Stage an attachment as a multipart binary part.
fn attachment_part(attachment: MediaAttachment) -> ApiResult<Part> {
    let MediaAttachment {
        file_name,
        mime,
        bytes,
    } = attachment;
    Part::bytes(bytes)
        .file_name(file_name.clone())
        .mime_str(&mime)
        .map_err(|source| ApiError::InvalidAttachment {
            name: file_name,
            source,
        })
}

#[derive(serde::Deserialize)]
struct CarouselListResponse {
    carousels: Vec<CarouselImage>,
}

#[derive(serde::Deserialize)]
struct AdvertisementListResponse {
    advertisements: Vec<Advertisement>,
}

#[derive(serde::Deserialize)]
struct VideoAdListResponse {
    #[serde(rename = "allVideoAdvertisements")]
    video_ads: Vec<VideoAd>,
}

#[derive(Serialize)]
struct StatusUpdateRequest<'a> {
    #[serde(rename = "adId")]
    ad_id: &'a str,
    status: ResourceStatus,
}
