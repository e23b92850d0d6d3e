use chrono::NaiveDate;

use backlot_client::{ApiClient, ApiResult};
use backlot_model::{
    AdPosition, Advertisement, MediaCategory, NewAdvertisement, ResourceId, ResourceStatus,
    default_campaign_window,
};

use crate::screens::SubmitError;
use crate::workflow::{AttachmentSlot, FieldRule, FieldSpec, FormDraft, ResourceList};

pub const FIELD_TITLE: &str = "title";
pub const FIELD_URL: &str = "url";
pub const FIELD_CLIENT_NAME: &str = "clientName";
pub const FIELD_CLIENT_ADDRESS: &str = "clientAddress";
pub const FIELD_CLIENT_CONTACT: &str = "clientContact";
pub const FIELD_CLIENT_EMAIL: &str = "clientEmail";
pub const FIELD_POSITION: &str = "adPosition";
pub const SLOT_MOBILE: &str = "mobileImage";
pub const SLOT_DESKTOP: &str = "desktopImage";

const POSITION_OPTIONS: &[&str] = &["trending", "upcoming", "topfive"];

/// Display-ad administration: create campaigns, list them, and flip
/// them between active and disabled.
#[derive(Debug)]
pub struct AdvertisementScreen {
    client: ApiClient,
    pub list: ResourceList<Advertisement>,
    pub form: FormDraft,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl AdvertisementScreen {
    pub fn new(client: ApiClient, page_size: usize) -> Self {
        let form = FormDraft::new(
            vec![
                FieldSpec::required(FIELD_TITLE, "Advertisement Title"),
                FieldSpec::required(FIELD_URL, "Advertisement URL"),
                FieldSpec::required(FIELD_CLIENT_NAME, "Client Name"),
                FieldSpec::required(FIELD_CLIENT_ADDRESS, "Client Address"),
                FieldSpec::required(FIELD_CLIENT_CONTACT, "Client Contact Number")
                    .with_rule(FieldRule::Phone),
                // Collected and validated, but the create endpoint
                // does not accept it; it never joins the payload.
                FieldSpec::required(FIELD_CLIENT_EMAIL, "Client Email")
                    .with_rule(FieldRule::Email),
                FieldSpec::required(FIELD_POSITION, "Advertisement Position")
                    .with_rule(FieldRule::OneOf(POSITION_OPTIONS)),
            ],
            vec![
                AttachmentSlot {
                    name: SLOT_MOBILE,
                    label: "Mobile Ad Image",
                    category: MediaCategory::Image,
                },
                AttachmentSlot {
                    name: SLOT_DESKTOP,
                    label: "Desktop Ad Image",
                    category: MediaCategory::Image,
                },
            ],
        );

        let (start_date, end_date) = default_campaign_window();
        Self {
            client,
            list: ResourceList::new(page_size),
            form,
            start_date,
            end_date,
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn set_start_date(&mut self, date: NaiveDate) {
        self.start_date = date;
    }

    pub fn set_end_date(&mut self, date: NaiveDate) {
        self.end_date = date;
    }

    pub async fn refresh(&mut self) {
        self.list.begin_refresh();
        let outcome = self.client.list_advertisements().await;
        self.list.resolve(outcome);
    }

    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        if let Some((label, message)) = self.form.blocking_errors().into_iter().next() {
            return Err(SubmitError::Blocked(format!("{label}: {message}")));
        }
        let position: AdPosition = self
            .form
            .value(FIELD_POSITION)
            .trim()
            .parse()
            .map_err(|_| SubmitError::Blocked("Advertisement Position is required.".to_string()))?;

        let ad = NewAdvertisement {
            title: self.form.value(FIELD_TITLE).to_string(),
            url: self.form.value(FIELD_URL).to_string(),
            client_name: self.form.value(FIELD_CLIENT_NAME).to_string(),
            client_address: self.form.value(FIELD_CLIENT_ADDRESS).to_string(),
            client_contact: self.form.value(FIELD_CLIENT_CONTACT).to_string(),
            start_date: self.start_date,
            end_date: self.end_date,
            position,
            mobile_image: self
                .form
                .attachment(SLOT_MOBILE)
                .cloned()
                .ok_or_else(|| SubmitError::Blocked("Mobile Ad Image is required.".to_string()))?,
            desktop_image: self
                .form
                .attachment(SLOT_DESKTOP)
                .cloned()
                .ok_or_else(|| SubmitError::Blocked("Desktop Ad Image is required.".to_string()))?,
        };

        self.client.add_advertisement(ad).await?;

        self.form.reset();
        let (start, end) = default_campaign_window();
        self.start_date = start;
        self.end_date = end;
        self.refresh().await;
        Ok(())
    }

    /// Issue the status update and, only after it completes
    /// successfully, reload the collection. Reselecting the current
    /// status still issues the call.
    pub async fn set_status(&mut self, id: &ResourceId, status: ResourceStatus) -> ApiResult<()> {
        self.client.set_advertisement_status(id, status).await?;
        self.refresh().await;
        Ok(())
    }
}
