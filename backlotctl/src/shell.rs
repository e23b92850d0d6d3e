//! Interactive menu shell.
//!
//! Owns screen selection and drives the screen controllers; all
//! terminal I/O for the console lives here. Prompts render on stderr
//! so stdout stays clean for piped output.

use anyhow::Result;
use dialoguer::console::Term;
use dialoguer::{Confirm, Input, Select};

use backlot_client::ApiClient;
use backlot_model::{
    MediaAttachment, ResourceKind, ResourceStatus, VideoAdType, mime_for_path, parse_wire_date,
};

use crate::screens::{AdvertisementScreen, CarouselScreen, VideoAdScreen};
use crate::workflow::FormDraft;

#[derive(Debug, Clone, Copy, PartialEq)]
enum MenuItem {
    AddCarousel,
    ManageCarousel,
    AddAdvertisement,
    ManageAds,
    AddVideoAd,
    ManageVideoAds,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 7] = [
        MenuItem::AddCarousel,
        MenuItem::ManageCarousel,
        MenuItem::AddAdvertisement,
        MenuItem::ManageAds,
        MenuItem::AddVideoAd,
        MenuItem::ManageVideoAds,
        MenuItem::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuItem::AddCarousel => "Add Carousel",
            MenuItem::ManageCarousel => "Manage Carousel",
            MenuItem::AddAdvertisement => "Add Advertisement",
            MenuItem::ManageAds => "Manage Advertisements",
            MenuItem::AddVideoAd => "Add Video Ad",
            MenuItem::ManageVideoAds => "Manage Video Ads",
            MenuItem::Quit => "Quit",
        }
    }
}

/// Top-level navigation loop.
pub async fn run(client: ApiClient, page_size: usize) -> Result<()> {
    let mut carousel = CarouselScreen::new(client.clone(), page_size);
    let mut ads = AdvertisementScreen::new(client.clone(), page_size);
    let mut video_ads = VideoAdScreen::new(client.clone(), page_size);

    loop {
        let labels: Vec<&str> = MenuItem::ALL.iter().map(|item| item.label()).collect();
        let choice = Select::new()
            .with_prompt("Backlot admin console")
            .items(&labels)
            .default(0)
            .interact_on(&Term::stderr())?;

        match MenuItem::ALL[choice] {
            MenuItem::AddCarousel => add_carousel(&mut carousel).await?,
            MenuItem::ManageCarousel => manage_carousel(&client, &mut carousel).await?,
            MenuItem::AddAdvertisement => add_advertisement(&mut ads).await?,
            MenuItem::ManageAds => manage_ads(&mut ads).await?,
            MenuItem::AddVideoAd => add_video_ad(&mut video_ads).await?,
            MenuItem::ManageVideoAds => manage_video_ads(&mut video_ads).await?,
            MenuItem::Quit => return Ok(()),
        }
    }
}

/// Prompt for every text field, re-validating on each entry the way
/// the form recomputes errors on every change.
fn fill_form(form: &mut FormDraft) -> Result<()> {
    let specs: Vec<_> = form.fields().to_vec();
    for spec in specs {
        loop {
            let entered: String = Input::new()
                .with_prompt(spec.label)
                .allow_empty(true)
                .default(form.value(spec.name).to_string())
                .interact_text_on(&Term::stderr())?;
            form.set_field(spec.name, entered);
            match form.field_error(spec.name) {
                Some(message) => eprintln!("  {message}"),
                None => break,
            }
        }
    }
    Ok(())
}

/// Prompt for a file path and stage it into the named slot.
fn stage_attachment_prompt(form: &mut FormDraft, slot: &'static str, label: &str) -> Result<()> {
    loop {
        let path: String = Input::new()
            .with_prompt(format!("{label} (file path)"))
            .interact_text_on(&Term::stderr())?;
        let path = std::path::PathBuf::from(path.trim());
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                eprintln!("  Could not read {}: {err}", path.display());
                continue;
            }
        };
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
            .to_string();
        let attachment = MediaAttachment::new(file_name, mime_for_path(&path), bytes);
        match form.stage_attachment(slot, attachment) {
            Ok(()) => return Ok(()),
            Err(message) => eprintln!("  {message}"),
        }
    }
}

fn prompt_wire_date(label: &str, current: chrono::NaiveDate) -> Result<chrono::NaiveDate> {
    loop {
        let entered: String = Input::new()
            .with_prompt(format!("{label} (DD/MM/YYYY)"))
            .default(backlot_model::format_wire_date(current))
            .interact_text_on(&Term::stderr())?;
        match parse_wire_date(&entered) {
            Ok(date) => return Ok(date),
            Err(_) => eprintln!("  Date must be in DD/MM/YYYY format."),
        }
    }
}

fn prompt_status(current: ResourceStatus) -> Result<ResourceStatus> {
    let labels: Vec<&str> = ResourceStatus::ALL.iter().map(|s| s.as_str()).collect();
    let default = ResourceStatus::ALL
        .iter()
        .position(|s| *s == current)
        .unwrap_or(0);
    let choice = Select::new()
        .with_prompt("Set status")
        .items(&labels)
        .default(default)
        .interact_on(&Term::stderr())?;
    Ok(ResourceStatus::ALL[choice])
}

/// Shared list navigation actions. Forward/back only appear when the
/// pager can actually move that way.
enum ListAction {
    Next,
    Previous,
    Pick(usize),
    Refresh,
    Back,
}

fn prompt_list_action(
    page_len: usize,
    can_back: bool,
    can_forward: bool,
    pick_label: Option<&str>,
) -> Result<ListAction> {
    let mut labels: Vec<String> = Vec::new();
    let mut actions: Vec<ListAction> = Vec::new();
    if let Some(pick) = pick_label {
        for index in 0..page_len {
            labels.push(format!("{pick} entry #{}", index + 1));
            actions.push(ListAction::Pick(index));
        }
    }
    if can_forward {
        labels.push("Next page".to_string());
        actions.push(ListAction::Next);
    }
    if can_back {
        labels.push("Previous page".to_string());
        actions.push(ListAction::Previous);
    }
    labels.push("Refresh".to_string());
    actions.push(ListAction::Refresh);
    labels.push("Back".to_string());
    actions.push(ListAction::Back);

    let choice = Select::new()
        .items(&labels)
        .default(labels.len() - 1)
        .interact_on(&Term::stderr())?;
    Ok(actions.swap_remove(choice))
}

fn render_list_header<T>(list: &crate::workflow::ResourceList<T>, kind: ResourceKind) {
    if list.is_loading() {
        eprintln!("Loading...");
    } else if let Some(error) = list.error() {
        eprintln!("Error: {error}");
    } else if list.is_empty() {
        eprintln!("No {} available.", kind.label_plural());
    } else {
        eprintln!(
            "{} {}, page {}/{}",
            list.len(),
            kind.label_plural(),
            list.pager().current_page(),
            list.pager().total_pages(list.len())
        );
    }
}

async fn add_carousel(screen: &mut CarouselScreen) -> Result<()> {
    if let Err(err) = screen.load_movies().await {
        eprintln!("Could not load movies: {err}");
        return Ok(());
    }
    if screen.movies().is_empty() {
        eprintln!("No movies available to link against.");
        return Ok(());
    }

    fill_form(&mut screen.form)?;

    let names: Vec<String> = screen.movies().iter().map(|m| m.name.clone()).collect();
    let choice = Select::new()
        .with_prompt("Movie")
        .items(&names)
        .default(0)
        .interact_on(&Term::stderr())?;
    let movie_id = screen.movies()[choice].id.clone();
    screen.select_movie(movie_id);

    stage_attachment_prompt(&mut screen.form, crate::screens::carousel::SLOT_MOBILE, "Mobile Image")?;
    stage_attachment_prompt(&mut screen.form, crate::screens::carousel::SLOT_DESKTOP, "Desktop Image")?;

    match screen.submit().await {
        Ok(()) => eprintln!("Carousel added successfully!"),
        Err(err) => eprintln!("Failed to add carousel: {err}"),
    }
    Ok(())
}

async fn manage_carousel(client: &ApiClient, screen: &mut CarouselScreen) -> Result<()> {
    screen.refresh().await;
    loop {
        render_list_header(&screen.list, ResourceKind::CarouselImage);
        for (index, entry) in screen.list.current_page().iter().enumerate() {
            eprintln!(
                "  #{} {} | rating {} | {}",
                index + 1,
                entry.title,
                entry.rating,
                client.media_url(&entry.desktop_image)
            );
        }
        let action = prompt_list_action(
            screen.list.current_page().len(),
            screen.list.pager().can_go_back(),
            screen.list.pager().can_go_forward(screen.list.len()),
            Some("Delete"),
        )?;
        match action {
            ListAction::Next => screen.list.go_forward(),
            ListAction::Previous => screen.list.go_back(),
            ListAction::Pick(index) => {
                let Some(entry) = screen.list.current_page().get(index) else {
                    continue;
                };
                let id = entry.id.clone();
                if let Err(err) = screen.delete(&id).await {
                    eprintln!("Failed to delete the carousel image: {err}");
                }
            }
            ListAction::Refresh => screen.refresh().await,
            ListAction::Back => return Ok(()),
        }
    }
}

async fn add_advertisement(screen: &mut AdvertisementScreen) -> Result<()> {
    fill_form(&mut screen.form)?;
    let start = prompt_wire_date("Start Date", screen.start_date())?;
    screen.set_start_date(start);
    let end = prompt_wire_date("End Date", screen.end_date())?;
    screen.set_end_date(end);

    stage_attachment_prompt(
        &mut screen.form,
        crate::screens::advertisements::SLOT_MOBILE,
        "Mobile Ad Image",
    )?;
    stage_attachment_prompt(
        &mut screen.form,
        crate::screens::advertisements::SLOT_DESKTOP,
        "Desktop Ad Image",
    )?;

    match screen.submit().await {
        Ok(()) => eprintln!("Advertisement added successfully."),
        Err(err) => eprintln!("Something went wrong: {err}"),
    }
    Ok(())
}

async fn manage_ads(screen: &mut AdvertisementScreen) -> Result<()> {
    screen.refresh().await;
    loop {
        render_list_header(&screen.list, ResourceKind::Advertisement);
        for (index, ad) in screen.list.current_page().iter().enumerate() {
            eprintln!(
                "  #{} {} | {} | {} | clicks {}",
                index + 1,
                ad.title,
                ad.status,
                ad.position.label(),
                ad.click_count
            );
        }
        let action = prompt_list_action(
            screen.list.current_page().len(),
            screen.list.pager().can_go_back(),
            screen.list.pager().can_go_forward(screen.list.len()),
            Some("Set status for"),
        )?;
        match action {
            ListAction::Next => screen.list.go_forward(),
            ListAction::Previous => screen.list.go_back(),
            ListAction::Pick(index) => {
                let Some(ad) = screen.list.current_page().get(index) else {
                    continue;
                };
                let (id, current) = (ad.id.clone(), ad.status);
                let status = prompt_status(current)?;
                if let Err(err) = screen.set_status(&id, status).await {
                    eprintln!("Error updating ad status: {err}");
                }
            }
            ListAction::Refresh => screen.refresh().await,
            ListAction::Back => return Ok(()),
        }
    }
}

async fn add_video_ad(screen: &mut VideoAdScreen) -> Result<()> {
    let labels: Vec<&str> = VideoAdType::ALL.iter().map(|t| t.label()).collect();
    let choice = Select::new()
        .with_prompt("Video Ad Type")
        .items(&labels)
        .default(0)
        .interact_on(&Term::stderr())?;
    screen.set_ad_type(Some(VideoAdType::ALL[choice]));
    eprintln!("{}", screen.upload_hint());

    fill_form(&mut screen.form)?;
    stage_attachment_prompt(
        &mut screen.form,
        crate::screens::video_ads::SLOT_VIDEO,
        "Ad Video",
    )?;

    match screen.submit().await {
        Ok(()) => eprintln!("Video submitted successfully!"),
        Err(err) => eprintln!("Failed to submit video ad: {err}"),
    }
    Ok(())
}

async fn manage_video_ads(screen: &mut VideoAdScreen) -> Result<()> {
    screen.refresh().await;
    loop {
        render_list_header(&screen.list, ResourceKind::VideoAd);
        for (index, ad) in screen.list.current_page().iter().enumerate() {
            eprintln!(
                "  #{} {} | {} | frequency {}",
                index + 1,
                ad.title,
                ad.status,
                ad.frequency
            );
        }
        let action = prompt_list_action(
            screen.list.current_page().len(),
            screen.list.pager().can_go_back(),
            screen.list.pager().can_go_forward(screen.list.len()),
            Some("Manage"),
        )?;
        match action {
            ListAction::Next => screen.list.go_forward(),
            ListAction::Previous => screen.list.go_back(),
            ListAction::Pick(index) => {
                let Some(ad) = screen.list.current_page().get(index) else {
                    continue;
                };
                let (id, current) = (ad.id.clone(), ad.status);
                let ops = ["Set status", "Delete"];
                let op = Select::new()
                    .items(&ops)
                    .default(0)
                    .interact_on(&Term::stderr())?;
                if op == 0 {
                    let status = prompt_status(current)?;
                    if let Err(err) = screen.set_status(&id, status).await {
                        eprintln!("Error updating video ad status: {err}");
                    }
                } else {
                    let confirmed = Confirm::new()
                        .with_prompt("Are you sure you want to delete this video ad?")
                        .default(false)
                        .interact_on(&Term::stderr())?;
                    if confirmed {
                        if let Err(err) = screen.delete(&id).await {
                            eprintln!("Error deleting video ad: {err}");
                        }
                    }
                }
            }
            ListAction::Refresh => screen.refresh().await,
            ListAction::Back => return Ok(()),
        }
    }
}
