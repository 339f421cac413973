//! Server-side HTML for the tabbed admin panel.
//!
//! Tabs are a pure view toggle over the query string; every form posts to a
//! dedicated endpoint and lands back here via redirect, with outcome flags
//! (`saved`, `uploaded`, `error`) rendered as banners.

use crate::models::content::{Document, Item, Row, Skill};
use crate::render::{esc, page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Projects,
    Skills,
    About,
}

impl AdminTab {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("skills") => AdminTab::Skills,
            Some("about") => AdminTab::About,
            _ => AdminTab::Projects,
        }
    }

    fn slug(self) -> &'static str {
        match self {
            AdminTab::Projects => "projects",
            AdminTab::Skills => "skills",
            AdminTab::About => "about",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AdminTab::Projects => "Projects",
            AdminTab::Skills => "Skills",
            AdminTab::About => "About",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Notice {
    Saved,
    Uploaded,
    /// Carries the short error code from the redirect query string.
    Error(String),
}

impl Notice {
    fn banner(&self) -> String {
        match self {
            Notice::Saved => {
                "<div class=\"banner ok\" id=\"admin-banner\">Saved successfully!</div>".to_string()
            }
            Notice::Uploaded => {
                // The static script hides this one after a few seconds.
                "<div class=\"banner ok\" id=\"resume-status\">Resume uploaded successfully!</div>"
                    .to_string()
            }
            Notice::Error(code) => format!(
                "<div class=\"banner error\" id=\"admin-banner\">{}</div>",
                error_message(code),
            ),
        }
    }
}

fn error_message(code: &str) -> &'static str {
    match code {
        "contributors" => "Invalid JSON format for contributors! Nothing was saved.",
        "project" => "Project not found! Nothing was saved.",
        "row" => "Category not found! Nothing was saved.",
        "resume" => "Please select a file to upload.",
        _ => "Something went wrong. Nothing was saved.",
    }
}

pub fn render_panel(
    site_name: &str,
    doc: &Document,
    tab: AdminTab,
    edit: Option<u64>,
    notice: Option<&Notice>,
) -> String {
    let banner = notice.map(Notice::banner).unwrap_or_default();

    let tabs = [AdminTab::Projects, AdminTab::Skills, AdminTab::About]
        .iter()
        .map(|t| {
            let class = if *t == tab { " class=\"active\"" } else { "" };
            format!(
                "<a{class} href=\"/admin?tab={slug}\">{label}</a>",
                slug = t.slug(),
                label = t.label(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let content = match tab {
        AdminTab::Projects => projects_tab(doc, edit),
        AdminTab::Skills => skills_tab(doc),
        AdminTab::About => about_tab(doc),
    };

    let body = format!(
        "<header class=\"admin-head\">\n\
         <h1>{site} Admin</h1>\n\
         <a href=\"/\">View Site</a>\n\
         </header>\n\
         {banner}\n\
         <nav class=\"tabs\">\n{tabs}\n</nav>\n\
         <section class=\"tab-content\">\n{content}</section>\n\
         <script src=\"/js/admin.js\" defer></script>",
        site = esc(site_name),
    );
    page(site_name, "Admin", &body)
}

// ────────────────────────────────────────────────────────────────────────────
// Projects tab
// ────────────────────────────────────────────────────────────────────────────

fn projects_tab(doc: &Document, edit: Option<u64>) -> String {
    let mut listing = String::new();
    for row in &doc.rows {
        for item in &row.items {
            listing.push_str(&project_entry(row, item));
        }
    }

    let categories = doc
        .rows
        .iter()
        .map(|row| {
            format!(
                "<option value=\"{id}\">{title}</option>",
                id = row.id,
                title = esc(&row.title),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let editor = match edit.and_then(|id| doc.item(id)) {
        Some(item) => edit_form(item),
        None => "<p id=\"edit-prompt\">Select a project above to edit its details.</p>"
            .to_string(),
    };

    format!(
        "<div id=\"items-list\">\n{listing}</div>\n\
         <h2>Add Project</h2>\n\
         <form id=\"add-project-form\" method=\"post\" action=\"/admin/projects\">\n\
         <input name=\"title\" placeholder=\"Title\" required>\n\
         <input name=\"image\" placeholder=\"Image URL\" required>\n\
         <input name=\"github_url\" placeholder=\"GitHub URL\">\n\
         <select name=\"row_id\">\n{categories}\n</select>\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n\
         <h2>Edit Project</h2>\n\
         {editor}\n",
    )
}

fn project_entry(row: &Row, item: &Item) -> String {
    format!(
        "<div class=\"item-entry\">\n\
         <img src=\"{image}\" alt=\"\" width=\"64\" height=\"36\">\n\
         <div><h4>{title}</h4><span class=\"muted\">{row_title}</span></div>\n\
         <a class=\"edit\" href=\"/admin?tab=projects&edit={id}\">Edit</a>\n\
         <form method=\"post\" action=\"/admin/projects/{id}/delete\" \
         onsubmit=\"return confirm('Delete this project?')\">\n\
         <button type=\"submit\" class=\"delete\">Delete</button>\n\
         </form>\n\
         </div>\n",
        image = esc(&item.image),
        title = esc(&item.title),
        row_title = esc(&row.title),
        id = item.id,
    )
}

fn edit_form(item: &Item) -> String {
    let contributors = if item.contributors.is_empty() {
        String::new()
    } else {
        serde_json::to_string_pretty(&item.contributors).unwrap_or_default()
    };
    let recommendations = item
        .recommendations
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "<form id=\"edit-project-form\" method=\"post\" action=\"/admin/projects/{id}/edit\">\n\
         <h3>Editing: {title}</h3>\n\
         <label>Description\n<textarea name=\"description\">{description}</textarea>\n</label>\n\
         <label>Live URL\n<input name=\"live_url\" value=\"{live_url}\">\n</label>\n\
         <label>Technologies (comma separated)\n\
         <input name=\"technologies\" value=\"{technologies}\">\n</label>\n\
         <label>Use cases (one per line)\n\
         <textarea name=\"use_cases\">{use_cases}</textarea>\n</label>\n\
         <label>Future scope\n<input name=\"future_scope\" value=\"{future_scope}\">\n</label>\n\
         <label>Contributors (JSON array)\n\
         <textarea name=\"contributors\">{contributors}</textarea>\n</label>\n\
         <label>Recommended project ids (comma separated)\n\
         <input name=\"recommendations\" value=\"{recommendations}\">\n</label>\n\
         <button type=\"submit\">Save Changes</button>\n\
         <a href=\"/admin?tab=projects\">Cancel</a>\n\
         </form>",
        id = item.id,
        title = esc(&item.title),
        description = esc(&item.description),
        live_url = esc(&item.live_url),
        technologies = esc(&item.technologies.join(", ")),
        use_cases = esc(&item.use_cases.join("\n")),
        future_scope = esc(&item.future_scope),
        contributors = esc(&contributors),
        recommendations = recommendations,
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Skills tab
// ────────────────────────────────────────────────────────────────────────────

fn skills_tab(doc: &Document) -> String {
    let listing = doc
        .skills
        .iter()
        .map(skill_entry)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<div id=\"skills-list\">\n{listing}\n</div>\n\
         <h2>Add Skill</h2>\n\
         <form id=\"add-skill-form\" method=\"post\" action=\"/admin/skills\">\n\
         <input name=\"name\" placeholder=\"Name\" required>\n\
         <input name=\"level\" type=\"number\" min=\"0\" max=\"100\" placeholder=\"Level\" required>\n\
         <input name=\"category\" placeholder=\"Category\" required>\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n",
    )
}

fn skill_entry(skill: &Skill) -> String {
    format!(
        "<div class=\"skill-entry\">\n\
         <div><strong>{name}</strong> <span class=\"muted\">({level}%)</span> \
         <span class=\"pill\">{category}</span></div>\n\
         <form method=\"post\" action=\"/admin/skills/{id}/delete\" \
         onsubmit=\"return confirm('Delete skill?')\">\n\
         <button type=\"submit\" class=\"delete\">Delete</button>\n\
         </form>\n\
         </div>",
        name = esc(&skill.name),
        level = skill.level,
        category = esc(&skill.category),
        id = skill.id,
    )
}

// ────────────────────────────────────────────────────────────────────────────
// About tab
// ────────────────────────────────────────────────────────────────────────────

fn about_tab(doc: &Document) -> String {
    let about = &doc.about;

    let picture = if about.profile_picture.trim().is_empty() {
        "<p id=\"no-profile-pic\" class=\"muted\">No profile picture set</p>".to_string()
    } else {
        format!(
            "<img id=\"current-profile-pic\" src=\"{src}\" alt=\"Profile picture\" width=\"96\">\n\
             <form method=\"post\" action=\"/admin/about/picture/delete\" \
             onsubmit=\"return confirm('Remove profile picture?')\">\n\
             <button type=\"submit\" class=\"delete\">Remove</button>\n\
             </form>",
            src = esc(&about.profile_picture),
        )
    };

    let timeline = about
        .timeline
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            format!(
                "<div class=\"timeline-row\">\n\
                 <div><span class=\"year\">{year}</span>: {title}</div>\n\
                 <form method=\"post\" action=\"/admin/about/timeline/{idx}/delete\" \
                 onsubmit=\"return confirm('Delete event?')\">\n\
                 <button type=\"submit\" class=\"delete\">Delete</button>\n\
                 </form>\n\
                 </div>",
                year = esc(&entry.year),
                title = esc(&entry.title),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let resume_status = match &doc.resume_url {
        Some(url) if !url.trim().is_empty() => format!(
            "<span id=\"resume-info\" class=\"ok\">&#10003; Resume uploaded</span>\n\
             <a href=\"{url}\" target=\"_blank\">View Resume</a>",
            url = esc(url),
        ),
        _ => "<span id=\"resume-info\" class=\"muted\">No resume uploaded</span>".to_string(),
    };

    format!(
        "<h2>Intro</h2>\n\
         <form id=\"about-intro-form\" method=\"post\" action=\"/admin/about/intro\">\n\
         <textarea name=\"intro\">{intro}</textarea>\n\
         <button type=\"submit\">Save Intro</button>\n\
         </form>\n\
         <h2>Profile Picture</h2>\n\
         {picture}\n\
         <form id=\"profile-pic-form\" method=\"post\" action=\"/admin/about/picture\">\n\
         <input name=\"url\" placeholder=\"Image URL\" value=\"{picture_url}\" required>\n\
         <button type=\"submit\">Set Picture</button>\n\
         </form>\n\
         <h2>Timeline</h2>\n\
         <div id=\"timeline-list\">\n{timeline}\n</div>\n\
         <form id=\"add-timeline-form\" method=\"post\" action=\"/admin/about/timeline\">\n\
         <input name=\"year\" placeholder=\"Year\" required>\n\
         <input name=\"title\" placeholder=\"Title\" required>\n\
         <input name=\"desc\" placeholder=\"Description\">\n\
         <button type=\"submit\">Add Event</button>\n\
         </form>\n\
         <h2>Resume</h2>\n\
         <div class=\"resume-row\">\n{resume_status}\n</div>\n\
         <form id=\"upload-resume-form\" method=\"post\" action=\"/admin/resume\" \
         enctype=\"multipart/form-data\">\n\
         <input type=\"file\" name=\"resume\" accept=\"application/pdf\" required>\n\
         <button type=\"submit\">Upload Resume</button>\n\
         </form>\n",
        intro = esc(&about.intro),
        picture_url = esc(&about.profile_picture),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
