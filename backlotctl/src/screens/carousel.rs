use backlot_client::{ApiClient, ApiResult};
use backlot_model::{CarouselImage, MediaCategory, Movie, NewCarouselEntry, ResourceId};

use crate::screens::SubmitError;
use crate::workflow::{AttachmentSlot, FieldSpec, FormDraft, ResourceList};

/// Field and slot names shared with the shell's prompts.
pub const FIELD_TITLE: &str = "title";
pub const FIELD_CAST: &str = "cast";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_RATING: &str = "rating";
pub const SLOT_MOBILE: &str = "mobileImage";
pub const SLOT_DESKTOP: &str = "desktopImage";

/// Carousel banner administration: create entries linked to a movie,
/// list them, delete them. Carousel entries have no status lifecycle.
#[derive(Debug)]
pub struct CarouselScreen {
    client: ApiClient,
    movies: Vec<Movie>,
    pub list: ResourceList<CarouselImage>,
    pub form: FormDraft,
    selected_movie: Option<ResourceId>,
}

impl CarouselScreen {
    pub fn new(client: ApiClient, page_size: usize) -> Self {
        let form = FormDraft::new(
            vec![
                FieldSpec::required(FIELD_TITLE, "Video Title"),
                FieldSpec::required(FIELD_CAST, "Cast"),
                FieldSpec::required(FIELD_DESCRIPTION, "Description"),
                FieldSpec::required(FIELD_RATING, "Rating"),
            ],
            vec![
                AttachmentSlot {
                    name: SLOT_MOBILE,
                    label: "Mobile Image",
                    category: MediaCategory::Image,
                },
                AttachmentSlot {
                    name: SLOT_DESKTOP,
                    label: "Desktop Image",
                    category: MediaCategory::Image,
                },
            ],
        );

        Self {
            client,
            movies: Vec::new(),
            list: ResourceList::new(page_size),
            form,
            selected_movie: None,
        }
    }

    /// Fetch the movie list the create form links against.
    pub async fn load_movies(&mut self) -> ApiResult<()> {
        self.movies = self.client.list_movies().await?;
        Ok(())
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Remember the movie choice; the id is only a local selection
    /// key, never sent to the backend.
    pub fn select_movie(&mut self, id: ResourceId) -> bool {
        let known = self.movies.iter().any(|movie| movie.id == id);
        if known {
            self.selected_movie = Some(id);
        }
        known
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        let id = self.selected_movie.as_ref()?;
        self.movies.iter().find(|movie| &movie.id == id)
    }

    /// Reload the full collection, re-entering the list state machine.
    pub async fn refresh(&mut self) {
        self.list.begin_refresh();
        let outcome = self.client.list_carousel_entries().await;
        self.list.resolve(outcome);
    }

    /// Submit the draft as a multipart create request.
    ///
    /// The linked movie's URL is resolved from the locally cached
    /// movie list at submit time; if that cache has gone stale the
    /// submitted URL may not match the movie the server would pick
    /// today. Known fragility, kept as-is.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        if let Some((label, message)) = self.form.blocking_errors().into_iter().next() {
            return Err(SubmitError::Blocked(format!("{label}: {message}")));
        }
        let movie = self
            .selected_movie()
            .ok_or_else(|| SubmitError::Blocked("Movie is required.".to_string()))?;

        let entry = NewCarouselEntry {
            title: self.form.value(FIELD_TITLE).to_string(),
            cast: self.form.value(FIELD_CAST).to_string(),
            description: self.form.value(FIELD_DESCRIPTION).to_string(),
            url: movie.url.clone(),
            rating: self.form.value(FIELD_RATING).to_string(),
            mobile_image: self
                .form
                .attachment(SLOT_MOBILE)
                .cloned()
                .ok_or_else(|| SubmitError::Blocked("Mobile Image is required.".to_string()))?,
            desktop_image: self
                .form
                .attachment(SLOT_DESKTOP)
                .cloned()
                .ok_or_else(|| SubmitError::Blocked("Desktop Image is required.".to_string()))?,
        };

        self.client.add_carousel_entry(entry).await?;

        // Success: discard the draft and reload the collection. A
        // failed create falls through above with the draft intact.
        self.form.reset();
        self.selected_movie = None;
        self.refresh().await;
        Ok(())
    }

    /// Delete one entry; on success the entry is removed locally
    /// rather than refetching.
    pub async fn delete(&mut self, id: &ResourceId) -> ApiResult<()> {
        self.client.delete_carousel_entry(id).await?;
        self.list.remove_local(|entry| &entry.id == id);
        Ok(())
    }
}
