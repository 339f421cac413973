//! Admin panel handlers.
//!
//! Every mutation follows the same cycle: load the document, apply a pure
//! update function, persist the whole document, redirect back to the panel
//! with an outcome flag. A rejected update never writes — the store still
//! holds exactly what was loaded.

use axum::{
    extract::{Multipart, Path, Query, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use crate::admin::updates::{self, NewProject, ProjectEdit, UpdateError};
use crate::admin::views::{render_panel, AdminTab, Notice};
use crate::content::handlers::read_resume_field;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PanelQuery {
    pub tab: Option<String>,
    pub edit: Option<u64>,
    pub saved: Option<String>,
    pub uploaded: Option<String>,
    pub error: Option<String>,
}

/// GET /admin
pub async fn panel(
    State(state): State<AppState>,
    Query(q): Query<PanelQuery>,
) -> Result<Html<String>, AppError> {
    let doc = state.store.load().await?;
    let tab = AdminTab::parse(q.tab.as_deref());
    let notice = match (q.error, q.uploaded, q.saved) {
        (Some(code), _, _) => Some(Notice::Error(code)),
        (_, Some(_), _) => Some(Notice::Uploaded),
        (_, _, Some(_)) => Some(Notice::Saved),
        _ => None,
    };
    Ok(Html(render_panel(
        &state.config.site_name,
        &doc,
        tab,
        q.edit,
        notice.as_ref(),
    )))
}

fn saved(tab: &str) -> Redirect {
    Redirect::to(&format!("/admin?tab={tab}&saved=1"))
}

fn rejected(tab: &str, err: &UpdateError, edit: Option<u64>) -> Redirect {
    let target = match edit {
        Some(id) => format!("/admin?tab={tab}&edit={id}&error={}", err.code()),
        None => format!("/admin?tab={tab}&error={}", err.code()),
    };
    Redirect::to(&target)
}

// ────────────────────────────────────────────────────────────────────────────
// Profiles (posted from the public gate's manage mode)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AddProfileForm {
    pub name: String,
}

/// POST /profiles
pub async fn add_profile(
    State(state): State<AppState>,
    Form(form): Form<AddProfileForm>,
) -> Result<Redirect, AppError> {
    let doc = state.store.load().await?;
    state
        .store
        .save(&updates::add_profile(doc, &form.name))
        .await?;
    Ok(Redirect::to("/?manage=1"))
}

#[derive(Deserialize)]
pub struct DeleteProfileForm {
    pub id: u64,
}

/// POST /profiles/delete
pub async fn delete_profile(
    State(state): State<AppState>,
    Form(form): Form<DeleteProfileForm>,
) -> Result<Redirect, AppError> {
    let doc = state.store.load().await?;
    state
        .store
        .save(&updates::delete_profile(doc, form.id))
        .await?;
    Ok(Redirect::to("/?manage=1"))
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AddProjectForm {
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub github_url: String,
    pub row_id: u64,
}

/// POST /admin/projects
pub async fn add_project(
    State(state): State<AppState>,
    Form(form): Form<AddProjectForm>,
) -> Result<Redirect, AppError> {
    let doc = state.store.load().await?;
    let project = NewProject {
        title: form.title,
        image: form.image,
        github_url: form.github_url,
    };
    match updates::add_project(doc, form.row_id, project) {
        Ok(doc) => {
            state.store.save(&doc).await?;
            Ok(saved("projects"))
        }
        Err(err) => Ok(rejected("projects", &err, None)),
    }
}

#[derive(Deserialize)]
pub struct EditProjectForm {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub technologies: String,
    #[serde(default)]
    pub use_cases: String,
    #[serde(default)]
    pub future_scope: String,
    #[serde(default)]
    pub contributors: String,
    #[serde(default)]
    pub recommendations: String,
}

/// POST /admin/projects/:id/edit
pub async fn edit_project(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Form(form): Form<EditProjectForm>,
) -> Result<Redirect, AppError> {
    let doc = state.store.load().await?;
    let edit = ProjectEdit {
        description: form.description,
        live_url: form.live_url,
        technologies: form.technologies,
        use_cases: form.use_cases,
        future_scope: form.future_scope,
        contributors: form.contributors,
        recommendations: form.recommendations,
    };
    match updates::edit_project(doc, id, edit) {
        Ok(doc) => {
            state.store.save(&doc).await?;
            Ok(saved("projects"))
        }
        // Keep the edit form open so the admin can fix the input.
        Err(err) => Ok(rejected("projects", &err, Some(id))),
    }
}

/// POST /admin/projects/:id/delete
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Redirect, AppError> {
    let doc = state.store.load().await?;
    state.store.save(&updates::delete_project(doc, id)).await?;
    Ok(saved("projects"))
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AddSkillForm {
    pub name: String,
    pub level: u8,
    pub category: String,
}

/// POST /admin/skills
pub async fn add_skill(
    State(state): State<AppState>,
    Form(form): Form<AddSkillForm>,
) -> Result<Redirect, AppError> {
    let doc = state.store.load().await?;
    state
        .store
        .save(&updates::add_skill(doc, &form.name, form.level, &form.category))
        .await?;
    Ok(saved("skills"))
}

/// POST /admin/skills/:id/delete
pub async fn delete_skill(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Redirect, AppError> {
    let doc = state.store.load().await?;
    state.store.save(&updates::delete_skill(doc, id)).await?;
    Ok(saved("skills"))
}

// ────────────────────────────────────────────────────────────────────────────
// About
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct IntroForm {
    #[serde(default)]
    pub intro: String,
}

/// POST /admin/about/intro
pub async fn set_intro(
    State(state): State<AppState>,
    Form(form): Form<IntroForm>,
) -> Result<Redirect, AppError> {
    let doc = state.store.load().await?;
    state.store.save(&updates::set_intro(doc, &form.intro)).await?;
    Ok(saved("about"))
}

#[derive(Deserialize)]
pub struct PictureForm {
    pub url: String,
}

/// POST /admin/about/picture
pub async fn set_picture(
    State(state): State<AppState>,
    Form(form): Form<PictureForm>,
) -> Result<Redirect, AppError> {
    let doc = state.store.load().await?;
    state
        .store
        .save(&updates::set_profile_picture(doc, &form.url))
        .await?;
    Ok(saved("about"))
}

/// POST /admin/about/picture/delete
pub async fn delete_picture(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let doc = state.store.load().await?;
    state
        .store
        .save(&updates::clear_profile_picture(doc))
        .await?;
    Ok(saved("about"))
}

#[derive(Deserialize)]
pub struct TimelineForm {
    pub year: String,
    pub title: String,
    #[serde(default)]
    pub desc: String,
}

/// POST /admin/about/timeline
pub async fn add_timeline(
    State(state): State<AppState>,
    Form(form): Form<TimelineForm>,
) -> Result<Redirect, AppError> {
    let doc = state.store.load().await?;
    state
        .store
        .save(&updates::add_timeline_entry(
            doc, &form.year, &form.title, &form.desc,
        ))
        .await?;
    Ok(saved("about"))
}

/// POST /admin/about/timeline/:index/delete
pub async fn delete_timeline(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Redirect, AppError> {
    let doc = state.store.load().await?;
    state
        .store
        .save(&updates::delete_timeline_entry(doc, index))
        .await?;
    Ok(saved("about"))
}

// ────────────────────────────────────────────────────────────────────────────
// Resume upload
// ────────────────────────────────────────────────────────────────────────────

/// POST /admin/resume
/// Same storage path as POST /api/upload, but speaks redirect + banner
/// instead of JSON.
pub async fn upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Redirect, AppError> {
    let Some(bytes) = read_resume_field(&mut multipart).await? else {
        return Ok(Redirect::to("/admin?tab=about&error=resume"));
    };
    state
        .store
        .save_resume(&state.config.upload_dir, &bytes)
        .await?;
    Ok(Redirect::to("/admin?tab=about&uploaded=1"))
}
