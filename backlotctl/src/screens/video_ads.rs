use backlot_client::{ApiClient, ApiResult};
use backlot_model::{
    MediaAttachment, MediaCategory, NewVideoAd, ResourceId, ResourceStatus, VideoAd, VideoAdType,
};

use crate::screens::SubmitError;
use crate::workflow::{AttachmentSlot, FieldSpec, FormDraft, ResourceList};

pub const FIELD_TITLE: &str = "title";
pub const FIELD_REDIRECT_URL: &str = "adRedirectURL";
pub const SLOT_VIDEO: &str = "adVideo";

/// Video-ad administration: upload spots, list them, flip status,
/// delete.
#[derive(Debug)]
pub struct VideoAdScreen {
    client: ApiClient,
    pub list: ResourceList<VideoAd>,
    pub form: FormDraft,
    ad_type: Option<VideoAdType>,
}

impl VideoAdScreen {
    pub fn new(client: ApiClient, page_size: usize) -> Self {
        let form = FormDraft::new(
            vec![
                FieldSpec::required(FIELD_TITLE, "Ad Title"),
                FieldSpec::required(FIELD_REDIRECT_URL, "Ad Redirect URL"),
            ],
            vec![AttachmentSlot {
                name: SLOT_VIDEO,
                label: "Ad Video",
                category: MediaCategory::Video,
            }],
        );

        Self {
            client,
            list: ResourceList::new(page_size),
            form,
            ad_type: None,
        }
    }

    pub fn ad_type(&self) -> Option<VideoAdType> {
        self.ad_type
    }

    /// Pick an ad format. Clearing the type also clears any staged
    /// video, since the length guidance it was chosen under no longer
    /// applies.
    pub fn set_ad_type(&mut self, ad_type: Option<VideoAdType>) {
        self.ad_type = ad_type;
        if ad_type.is_none() {
            self.form.clear_attachment(SLOT_VIDEO);
        }
    }

    /// Guidance line shown above the upload prompt.
    pub fn upload_hint(&self) -> &'static str {
        match self.ad_type {
            Some(ad_type) => ad_type.upload_hint(),
            None => "Choose a video ad type to add",
        }
    }

    pub fn stage_video(&mut self, video: MediaAttachment) -> Result<(), String> {
        self.form.stage_attachment(SLOT_VIDEO, video)
    }

    pub async fn refresh(&mut self) {
        self.list.begin_refresh();
        let outcome = self.client.list_video_ads().await;
        self.list.resolve(outcome);
    }

    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let ad_type = self
            .ad_type
            .ok_or_else(|| SubmitError::Blocked("Video Ad Type is required.".to_string()))?;
        if let Some((label, message)) = self.form.blocking_errors().into_iter().next() {
            return Err(SubmitError::Blocked(format!("{label}: {message}")));
        }

        let ad = NewVideoAd {
            title: self.form.value(FIELD_TITLE).to_string(),
            ad_type,
            redirect_url: self.form.value(FIELD_REDIRECT_URL).to_string(),
            video: self
                .form
                .attachment(SLOT_VIDEO)
                .cloned()
                .ok_or_else(|| SubmitError::Blocked("Ad Video is required.".to_string()))?,
        };

        self.client.add_video_ad(ad).await?;

        self.form.reset();
        self.ad_type = None;
        self.refresh().await;
        Ok(())
    }

    pub async fn set_status(&mut self, id: &ResourceId, status: ResourceStatus) -> ApiResult<()> {
        self.client.set_video_ad_status(id, status).await?;
        self.refresh().await;
        Ok(())
    }

    /// Delete one video ad; on success the collection is refetched.
    pub async fn delete(&mut self, id: &ResourceId) -> ApiResult<()> {
        self.client.delete_video_ad(id).await?;
        self.refresh().await;
        Ok(())
    }
}
