//! Pure update functions over the content document.
//!
//! Every admin mutation is `Document -> Result<Document, UpdateError>` (or
//! plain `Document -> Document` where nothing can fail): the handler loads
//! the document, applies one of these, and persists the whole result. A
//! rejected update leaves the caller's document exactly as loaded.

use thiserror::Error;

use crate::models::content::{Contributor, Document, Item, Profile, Skill, TimelineEntry};

/// Avatars handed to new profiles, rotated by id.
pub const AVATAR_POOL: [&str; 3] = [
    "images/year_2023.png",
    "images/year_2024.png",
    "images/year_2025.png",
];

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Category row {0} not found")]
    RowNotFound(u64),

    #[error("Project {0} not found")]
    ProjectNotFound(u64),

    #[error("Invalid JSON format for contributors")]
    InvalidContributors(#[source] serde_json::Error),
}

impl UpdateError {
    /// Stable short code carried through the redirect query string and
    /// mapped back to a banner message by the panel view.
    pub fn code(&self) -> &'static str {
        match self {
            UpdateError::RowNotFound(_) => "row",
            UpdateError::ProjectNotFound(_) => "project",
            UpdateError::InvalidContributors(_) => "contributors",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Profiles
// ────────────────────────────────────────────────────────────────────────────

pub fn add_profile(mut doc: Document, name: &str) -> Document {
    let id = doc.next_id();
    let avatar = AVATAR_POOL[id as usize % AVATAR_POOL.len()];
    doc.profiles.push(Profile {
        id,
        name: name.trim().to_string(),
        avatar: avatar.to_string(),
    });
    doc
}

/// Removing an id that is not present is a no-op, matching delete-by-filter
/// semantics everywhere in the panel.
pub fn delete_profile(mut doc: Document, id: u64) -> Document {
    doc.profiles.retain(|p| p.id != id);
    doc
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

pub struct NewProject {
    pub title: String,
    pub image: String,
    pub github_url: String,
}

/// Appends a new item to the row identified by `row_id`. Detail fields start
/// empty and are filled in through the edit form.
pub fn add_project(
    mut doc: Document,
    row_id: u64,
    project: NewProject,
) -> Result<Document, UpdateError> {
    let id = doc.next_id();
    let row = doc
        .row_mut(row_id)
        .ok_or(UpdateError::RowNotFound(row_id))?;
    row.items.push(Item {
        id,
        title: project.title,
        image: project.image,
        github_url: project.github_url,
        ..Item::default()
    });
    Ok(doc)
}

/// Raw form input for a project edit. Lists arrive as the text the admin
/// typed and are parsed here, so parse rules live next to the mutation.
pub struct ProjectEdit {
    pub description: String,
    pub live_url: String,
    /// Comma-separated.
    pub technologies: String,
    /// Newline-separated.
    pub use_cases: String,
    pub future_scope: String,
    /// A JSON array of `{name, avatar, githubUrl}`. Invalid JSON aborts the
    /// whole save.
    pub contributors: String,
    /// Comma-separated item ids; non-numeric entries are dropped.
    pub recommendations: String,
}

pub fn edit_project(
    mut doc: Document,
    id: u64,
    edit: ProjectEdit,
) -> Result<Document, UpdateError> {
    // Parse before touching the document so a rejection is a clean abort.
    let contributors = parse_contributors(&edit.contributors)?;

    let item = doc.item_mut(id).ok_or(UpdateError::ProjectNotFound(id))?;
    item.description = edit.description;
    item.live_url = edit.live_url;
    item.technologies = parse_comma_list(&edit.technologies);
    item.use_cases = parse_line_list(&edit.use_cases);
    item.future_scope = edit.future_scope;
    item.contributors = contributors;
    item.recommendations = parse_id_list(&edit.recommendations);
    Ok(doc)
}

pub fn delete_project(mut doc: Document, id: u64) -> Document {
    for row in &mut doc.rows {
        row.items.retain(|i| i.id != id);
    }
    doc
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

pub fn add_skill(mut doc: Document, name: &str, level: u8, category: &str) -> Document {
    let id = doc.next_id();
    doc.skills.push(Skill {
        id,
        name: name.trim().to_string(),
        level: level.min(100),
        category: category.trim().to_string(),
    });
    doc
}

pub fn delete_skill(mut doc: Document, id: u64) -> Document {
    doc.skills.retain(|s| s.id != id);
    doc
}

// ────────────────────────────────────────────────────────────────────────────
// About
// ────────────────────────────────────────────────────────────────────────────

pub fn set_intro(mut doc: Document, intro: &str) -> Document {
    doc.about.intro = intro.to_string();
    doc
}

pub fn set_profile_picture(mut doc: Document, url: &str) -> Document {
    doc.about.profile_picture = url.trim().to_string();
    doc
}

pub fn clear_profile_picture(mut doc: Document) -> Document {
    doc.about.profile_picture = String::new();
    doc
}

pub fn add_timeline_entry(mut doc: Document, year: &str, title: &str, desc: &str) -> Document {
    doc.about.timeline.push(TimelineEntry {
        year: year.trim().to_string(),
        title: title.trim().to_string(),
        desc: desc.to_string(),
    });
    doc
}

/// Deletes by positional index; out-of-range is a no-op. Index-based
/// deletion can remove the wrong entry under concurrent edits from two
/// tabs — accepted for single-admin use.
pub fn delete_timeline_entry(mut doc: Document, index: usize) -> Document {
    if index < doc.about.timeline.len() {
        doc.about.timeline.remove(index);
    }
    doc
}

// ────────────────────────────────────────────────────────────────────────────
// Field parsing
// ────────────────────────────────────────────────────────────────────────────

fn parse_comma_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_line_list(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_id_list(input: &str) -> Vec<u64> {
    input
        .split(',')
        .filter_map(|s| s.trim().parse::<u64>().ok())
        .collect()
}

fn parse_contributors(input: &str) -> Result<Vec<Contributor>, UpdateError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(input).map_err(UpdateError::InvalidContributors)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
