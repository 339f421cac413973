//! Server-side HTML for the public pages.
//!
//! Each page is a pure function `(&Document, ...) -> String`. The static
//! script only animates what is already in the markup: hero rotation reads
//! the embedded slide payload, modals are pre-rendered hidden, skill bars
//! carry their target width as a data attribute.

use serde::Serialize;

use crate::models::content::{Document, Item, Profile, Row, Social, TimelineEntry};
use crate::render::{esc, icons, page, script_safe_json};
use crate::site::catalog::{find_visible_item, hero_items, skills_by_category, visible_rows};

/// A GitHub URL the original data uses as a "none" placeholder.
fn linkable_github(url: &str) -> bool {
    let url = url.trim();
    !url.is_empty() && url != "#"
}

fn profile_query(profile: Option<&Profile>) -> String {
    match profile {
        Some(p) => format!("?profile={}", p.id),
        None => String::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared chrome
// ────────────────────────────────────────────────────────────────────────────

fn navbar(site_name: &str, doc: &Document, active: Option<&Profile>, current: &str) -> String {
    let q = profile_query(active);
    let links = ["browse", "skills", "about"]
        .iter()
        .map(|p| {
            let label = match *p {
                "browse" => "Browse",
                "skills" => "Skills",
                _ => "About",
            };
            let class = if *p == current { " class=\"active\"" } else { "" };
            format!("<a{class} href=\"/{p}{q}\">{label}</a>")
        })
        .collect::<Vec<_>>()
        .join("\n");

    let menu = match active {
        Some(profile) => {
            let mut entries = String::from(
                "<a class=\"manage-link\" href=\"/\">Manage Profiles</a>\n",
            );
            for p in doc.profiles.iter().filter(|p| p.id != profile.id) {
                entries.push_str(&format!(
                    "<a class=\"switch-profile\" href=\"/browse?profile={id}\">\
                     <img src=\"{avatar}\" alt=\"\" width=\"24\" height=\"24\"> {name}</a>\n",
                    id = p.id,
                    avatar = esc(&p.avatar),
                    name = esc(&p.name),
                ));
            }
            entries.push_str("<a id=\"sign-out\" href=\"/\">Sign out</a>\n");
            format!(
                "<div class=\"profile-menu\">\n\
                 <img id=\"nav-avatar\" src=\"{avatar}\" alt=\"{name}\" width=\"32\" height=\"32\">\n\
                 <div class=\"dropdown\">\n{entries}</div>\n\
                 </div>",
                avatar = esc(&profile.avatar),
                name = esc(&profile.name),
            )
        }
        None => String::new(),
    };

    format!(
        "<nav id=\"navbar\">\n\
         <a class=\"brand\" href=\"/browse{q}\">{site}</a>\n\
         <div class=\"nav-links\">\n{links}\n</div>\n\
         {menu}\n\
         </nav>",
        site = esc(site_name),
    )
}

fn footer(site_name: &str, socials: &[Social]) -> String {
    let mut links = String::new();
    for social in socials {
        links.push_str(&social_link(social));
        links.push('\n');
    }
    format!(
        "<footer>\n\
         <div class=\"socials\">\n{links}</div>\n\
         <p>&copy; {site}. All Rights Reserved.</p>\n\
         </footer>",
        site = esc(site_name),
    )
}

/// Icon for a known platform, text pill for anything else.
fn social_link(social: &Social) -> String {
    let inner = match icons::social_icon(&social.platform) {
        Some(icon) => icon.to_string(),
        None => format!("<span class=\"pill\">{}</span>", esc(&social.platform)),
    };
    format!(
        "<a href=\"{url}\" title=\"{platform}\">{inner}</a>",
        url = esc(&social.url),
        platform = esc(&social.platform),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Profile gate
// ────────────────────────────────────────────────────────────────────────────

pub fn render_gate(site_name: &str, doc: &Document, manage: bool) -> String {
    let mut tiles = String::new();
    for profile in &doc.profiles {
        if manage {
            tiles.push_str(&format!(
                "<form class=\"profile-tile manage\" method=\"post\" action=\"/profiles/delete\" \
                 onsubmit=\"return confirm('Delete this profile?')\">\n\
                 <input type=\"hidden\" name=\"id\" value=\"{id}\">\n\
                 <button type=\"submit\">\n\
                 <img src=\"{avatar}\" alt=\"{name}\">\n\
                 <span>{name}</span>\n\
                 </button>\n\
                 </form>\n",
                id = profile.id,
                avatar = esc(&profile.avatar),
                name = esc(&profile.name),
            ));
        } else {
            tiles.push_str(&format!(
                "<a class=\"profile-tile\" href=\"/browse?profile={id}\" \
                 data-profile-id=\"{id}\" data-profile-name=\"{name}\">\n\
                 <img src=\"{avatar}\" alt=\"{name}\">\n\
                 <span>{name}</span>\n\
                 </a>\n",
                id = profile.id,
                avatar = esc(&profile.avatar),
                name = esc(&profile.name),
            ));
        }
    }

    let add_form = if manage {
        "<form id=\"add-profile\" method=\"post\" action=\"/profiles\">\n\
         <input name=\"name\" placeholder=\"Name for new profile (e.g. 2026)\" required>\n\
         <button type=\"submit\">Add Profile</button>\n\
         </form>\n"
    } else {
        ""
    };
    let (toggle_href, toggle_label) = if manage { ("/", "Done") } else { ("/?manage=1", "Manage Profiles") };

    let body = format!(
        "<main class=\"gate\">\n\
         <h1>Who's watching?</h1>\n\
         <div id=\"profile-list\">\n{tiles}</div>\n\
         {add_form}\
         <a id=\"manage-toggle\" href=\"{toggle_href}\">{toggle_label}</a>\n\
         </main>",
    );
    page(site_name, "Select Profile", &body)
}

// ────────────────────────────────────────────────────────────────────────────
// Browse page
// ────────────────────────────────────────────────────────────────────────────

/// Slide payload embedded for the hero rotation script.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HeroSlide<'a> {
    id: u64,
    title: &'a str,
    image: &'a str,
    github_url: &'a str,
    desc: String,
}

pub fn render_browse(site_name: &str, doc: &Document, profile: &Profile) -> String {
    let rows = visible_rows(doc, profile.id);
    let pool = hero_items(&rows);

    let mut sections = String::new();
    for row in &rows {
        let mut cards = String::new();
        for item in &row.items {
            cards.push_str(&item_card(item));
        }
        sections.push_str(&format!(
            "<section class=\"row\">\n\
             <h2>{title}</h2>\n\
             <div class=\"row-strip\">\n{cards}</div>\n\
             </section>\n",
            title = esc(&row.title),
        ));
    }

    let mut modals = String::new();
    for item in &pool {
        modals.push_str(&item_modal(item, &rows));
    }

    let body = format!(
        "{nav}\n\
         {hero}\n\
         <main id=\"rows-container\">\n{sections}</main>\n\
         {modals}\n\
         {footer}",
        nav = navbar(site_name, doc, Some(profile), "browse"),
        hero = hero_section(&pool, profile),
        footer = footer(site_name, &doc.about.socials),
    );
    page(site_name, "Browse", &body)
}

fn item_card(item: &Item) -> String {
    let github = if linkable_github(&item.github_url) {
        format!(
            "<a class=\"card-github\" href=\"{url}\" target=\"_blank\" title=\"View Code\">{icon}</a>\n",
            url = esc(&item.github_url),
            icon = icons::GITHUB,
        )
    } else {
        String::new()
    };
    format!(
        "<div class=\"card\">\n\
         <img src=\"{image}\" alt=\"{title}\" loading=\"lazy\">\n\
         <div class=\"card-overlay\">\n\
         <h3>{title}</h3>\n\
         <button class=\"open-modal-btn\" data-project-id=\"{id}\" aria-label=\"More info\">&#9650;</button>\n\
         {github}\
         </div>\n\
         </div>\n",
        image = esc(&item.image),
        title = esc(&item.title),
        id = item.id,
    )
}

/// Hero banner seeded with the first slide; the rotation script takes over
/// from the embedded payload, cycling every 5 seconds.
fn hero_section(pool: &[&Item], profile: &Profile) -> String {
    let slides: Vec<HeroSlide> = pool
        .iter()
        .map(|item| HeroSlide {
            id: item.id,
            title: &item.title,
            image: &item.image,
            github_url: &item.github_url,
            desc: format!("Featured project from your {} timeline.", profile.name),
        })
        .collect();
    let payload =
        script_safe_json(&serde_json::to_string(&slides).unwrap_or_else(|_| "[]".to_string()));

    let Some(first) = pool.first() else {
        return "<header id=\"hero\" class=\"empty\"></header>".to_string();
    };
    let github = if linkable_github(&first.github_url) {
        format!(
            "<a id=\"hero-github\" href=\"{url}\" target=\"_blank\">{icon} GitHub</a>",
            url = esc(&first.github_url),
            icon = icons::GITHUB,
        )
    } else {
        String::new()
    };

    format!(
        "<header id=\"hero\">\n\
         <img id=\"hero-image\" src=\"{image}\" alt=\"\">\n\
         <div class=\"hero-meta\">\n\
         <h1 id=\"hero-title\">{title}</h1>\n\
         <p id=\"hero-desc\">Featured project from your {name} timeline.</p>\n\
         <div class=\"hero-buttons\">\n\
         <button id=\"hero-more-info-btn\" data-project-id=\"{id}\">More Info</button>\n\
         {github}\n\
         </div>\n\
         </div>\n\
         <script id=\"hero-data\" type=\"application/json\">{payload}</script>\n\
         </header>",
        image = esc(&first.image),
        title = esc(&first.title),
        name = esc(&profile.name),
        id = first.id,
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Detail modal
// ────────────────────────────────────────────────────────────────────────────

fn item_modal(item: &Item, rows: &[&Row]) -> String {
    let mut links = String::new();
    if !item.live_url.trim().is_empty() {
        links.push_str(&format!(
            "<a class=\"live-demo\" href=\"{url}\" target=\"_blank\">Live Demo</a>\n",
            url = esc(&item.live_url),
        ));
    }
    if linkable_github(&item.github_url) {
        links.push_str(&format!(
            "<a class=\"github\" href=\"{url}\" target=\"_blank\">{icon} GitHub</a>\n",
            url = esc(&item.github_url),
            icon = icons::GITHUB,
        ));
    }

    let description = if item.description.trim().is_empty() {
        "No description available.".to_string()
    } else {
        esc(&item.description)
    };

    let tech = if item.technologies.is_empty() {
        "<span class=\"muted\">No technologies listed</span>".to_string()
    } else {
        item.technologies
            .iter()
            .map(|t| format!("<span class=\"tag\">{}</span>", esc(t)))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let use_cases = if item.use_cases.is_empty() {
        String::new()
    } else {
        let lis = item
            .use_cases
            .iter()
            .map(|uc| format!("<li>{}</li>", esc(uc)))
            .collect::<Vec<_>>()
            .join("\n");
        format!("<div class=\"use-cases\">\n<h3>Use Cases</h3>\n<ul>\n{lis}\n</ul>\n</div>\n")
    };

    let future_scope = if item.future_scope.trim().is_empty() {
        String::new()
    } else {
        format!(
            "<div class=\"future-scope\">\n<h3>Future Scope</h3>\n<p>{}</p>\n</div>\n",
            esc(&item.future_scope),
        )
    };

    let contributors = if item.contributors.is_empty() {
        String::new()
    } else {
        let entries = item
            .contributors
            .iter()
            .map(|c| {
                format!(
                    "<a href=\"{url}\" target=\"_blank\">\
                     <img src=\"{avatar}\" alt=\"\" width=\"32\" height=\"32\"> {name}</a>",
                    url = esc(&c.github_url),
                    avatar = esc(&c.avatar),
                    name = esc(&c.name),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "<div class=\"contributors\">\n<h3>Contributors</h3>\n{entries}\n</div>\n"
        )
    };

    // Recommendations resolve against the visible rows; dangling ids are
    // skipped. Mini-cards reopen the modal of the target item.
    let recommendations = if item.recommendations.is_empty() {
        String::new()
    } else {
        let cards = item
            .recommendations
            .iter()
            .filter_map(|rec_id| find_visible_item(rows, *rec_id))
            .map(|rec| {
                format!(
                    "<button class=\"mini-card open-modal-btn\" data-project-id=\"{id}\">\n\
                     <img src=\"{image}\" alt=\"\">\n\
                     <h4>{title}</h4>\n\
                     </button>",
                    id = rec.id,
                    image = esc(&rec.image),
                    title = esc(&rec.title),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "<div class=\"recommendations\">\n<h3>More Like This</h3>\n\
             <div class=\"rec-grid\">\n{cards}\n</div>\n</div>\n"
        )
    };

    format!(
        "<div class=\"modal\" id=\"modal-{id}\" hidden>\n\
         <div class=\"modal-backdrop\" data-close-modal></div>\n\
         <div class=\"modal-content\">\n\
         <button class=\"modal-close\" data-close-modal aria-label=\"Close\">&times;</button>\n\
         <img class=\"modal-banner\" src=\"{image}\" alt=\"\">\n\
         <div class=\"modal-body\">\n\
         <h2>{title}</h2>\n\
         <div class=\"modal-links\">\n{links}</div>\n\
         <p class=\"description\">{description}</p>\n\
         <div class=\"technologies\">\n<h3>Technologies</h3>\n{tech}\n</div>\n\
         {use_cases}\
         {future_scope}\
         {contributors}\
         {recommendations}\
         </div>\n\
         </div>\n\
         </div>\n",
        id = item.id,
        image = esc(&item.image),
        title = esc(&item.title),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Skills page
// ────────────────────────────────────────────────────────────────────────────

pub fn render_skills(site_name: &str, doc: &Document, profile: Option<&Profile>) -> String {
    let mut grid = String::new();
    for (category, skills) in skills_by_category(&doc.skills) {
        let mut bars = String::new();
        for skill in skills {
            bars.push_str(&format!(
                "<div class=\"skill\">\n\
                 <div class=\"skill-label\"><span>{name}</span><span>{level}%</span></div>\n\
                 <div class=\"skill-track\">\
                 <div class=\"skill-fill\" style=\"width:0%\" data-width=\"{level}%\"></div>\
                 </div>\n\
                 </div>\n",
                name = esc(&skill.name),
                level = skill.level,
            ));
        }
        grid.push_str(&format!(
            "<section class=\"skill-group\">\n<h2>{category}</h2>\n{bars}</section>\n",
            category = esc(category),
        ));
    }

    let body = format!(
        "{nav}\n\
         <main class=\"skills\">\n\
         <h1>Skills</h1>\n\
         <div id=\"skills-grid\">\n{grid}</div>\n\
         </main>",
        nav = navbar(site_name, doc, profile, "skills"),
    );
    page(site_name, "Skills", &body)
}

// ────────────────────────────────────────────────────────────────────────────
// About page
// ────────────────────────────────────────────────────────────────────────────

pub fn render_about(site_name: &str, doc: &Document, profile: Option<&Profile>) -> String {
    let about = &doc.about;

    let photo = if about.profile_picture.trim().is_empty() {
        String::new()
    } else {
        format!(
            "<img id=\"about-photo\" src=\"{}\" alt=\"Profile picture\">\n",
            esc(&about.profile_picture),
        )
    };

    let socials = about
        .socials
        .iter()
        .map(social_link)
        .collect::<Vec<_>>()
        .join("\n");

    let resume = match &doc.resume_url {
        Some(url) if !url.trim().is_empty() => format!(
            "<div id=\"resume-container\">\n\
             <a href=\"{url}\" target=\"_blank\">View Resume</a>\n\
             <a href=\"{url}\" download>Download Resume</a>\n\
             </div>\n",
            url = esc(url),
        ),
        _ => String::new(),
    };

    let timeline = about
        .timeline
        .iter()
        .map(timeline_entry)
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        "{nav}\n\
         <main class=\"about\">\n\
         <h1>About</h1>\n\
         {photo}\
         <p id=\"about-intro\">{intro}</p>\n\
         <div id=\"social-links\">\n{socials}\n</div>\n\
         {resume}\
         <div id=\"timeline-container\">\n{timeline}\n</div>\n\
         </main>",
        nav = navbar(site_name, doc, profile, "about"),
        intro = esc(&about.intro),
    );
    page(site_name, "About", &body)
}

fn timeline_entry(entry: &TimelineEntry) -> String {
    format!(
        "<div class=\"timeline-entry\">\n\
         <div class=\"year\">{year}</div>\n\
         <h3>{title}</h3>\n\
         <p>{desc}</p>\n\
         </div>",
        year = esc(&entry.year),
        title = esc(&entry.title),
        desc = esc(&entry.desc),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_doc() -> Document {
        serde_json::from_value(json!({
            "profiles": [
                {"id": 1, "name": "Recruiter", "avatar": "images/a1.png"},
                {"id": 2, "name": "Friend", "avatar": "images/a2.png"}
            ],
            "rows": [
                {"id": 10, "title": "A", "profileIds": [1], "items": [
                    {"id": 1, "title": "Alpha", "image": "alpha.png", "githubUrl": "#"}
                ]},
                {"id": 11, "title": "B", "items": [
                    {"id": 2, "title": "Beta", "image": "beta.png",
                     "githubUrl": "https://github.com/x/beta",
                     "recommendations": [1, 404]}
                ]}
            ],
            "skills": [
                {"id": 20, "name": "Rust", "level": 90, "category": "Languages"}
            ],
            "about": {
                "intro": "Hello there",
                "profilePicture": "",
                "timeline": [{"year": "2024", "title": "Started", "desc": "First job"}],
                "socials": [
                    {"platform": "GitHub", "url": "https://github.com/x"},
                    {"platform": "Mastodon", "url": "https://example.social/@x"}
                ]
            },
            "resumeUrl": "uploads/resume.pdf"
        }))
        .unwrap()
    }

    #[test]
    fn test_gate_lists_every_profile_tile() {
        let doc = sample_doc();
        let html = render_gate("Showreel", &doc, false);
        assert!(html.contains("Recruiter"));
        assert!(html.contains("/browse?profile=2"));
        assert!(!html.contains("action=\"/profiles/delete\""));
    }

    #[test]
    fn test_gate_manage_mode_shows_delete_and_add() {
        let doc = sample_doc();
        let html = render_gate("Showreel", &doc, true);
        assert!(html.contains("action=\"/profiles/delete\""));
        assert!(html.contains("action=\"/profiles\""));
        assert!(html.contains(">Done<"));
    }

    #[test]
    fn test_browse_filters_rows_by_profile() {
        let doc = sample_doc();
        let friend = doc.profile(2).unwrap();
        let html = render_browse("Showreel", &doc, friend);
        assert!(html.contains("Beta"));
        assert!(!html.contains("Alpha"));
    }

    #[test]
    fn test_browse_embeds_hero_slides_for_visible_items_only() {
        let doc = sample_doc();
        let friend = doc.profile(2).unwrap();
        let html = render_browse("Showreel", &doc, friend);
        assert!(html.contains("id=\"hero-data\""));
        assert!(html.contains("Featured project from your Friend timeline."));
        // One slide: the hidden row's item never enters the pool.
        assert!(!html.contains("alpha.png"));
    }

    #[test]
    fn test_card_omits_github_link_for_placeholder_url() {
        let doc = sample_doc();
        let rows = visible_rows(&doc, 1);
        let alpha = find_visible_item(&rows, 1).unwrap();
        let beta = find_visible_item(&rows, 2).unwrap();
        assert!(!item_card(alpha).contains("card-github"));
        assert!(item_card(beta).contains("card-github"));
    }

    #[test]
    fn test_modal_renders_target_item_not_sibling() {
        let doc = sample_doc();
        let rows = visible_rows(&doc, 1);
        let beta = find_visible_item(&rows, 2).unwrap();
        let html = item_modal(beta, &rows);
        assert!(html.contains("id=\"modal-2\""));
        assert!(html.contains("<h2>Beta</h2>"));
        assert!(!html.contains("<h2>Alpha</h2>"));
    }

    #[test]
    fn test_modal_recommendations_skip_dangling_ids() {
        let doc = sample_doc();
        let rows = visible_rows(&doc, 1);
        let beta = find_visible_item(&rows, 2).unwrap();
        let html = item_modal(beta, &rows);
        // id 1 resolves, id 404 is skipped silently.
        assert!(html.contains("data-project-id=\"1\""));
        assert!(!html.contains("data-project-id=\"404\""));
    }

    #[test]
    fn test_modal_escapes_document_text() {
        let rows: Vec<&Row> = vec![];
        let item: Item = serde_json::from_value(json!({
            "id": 7, "title": "<script>alert(1)</script>", "image": ""
        }))
        .unwrap();
        let html = item_modal(&item, &rows);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_skills_page_carries_target_widths() {
        let doc = sample_doc();
        let html = render_skills("Showreel", &doc, None);
        assert!(html.contains("<h2>Languages</h2>"));
        assert!(html.contains("data-width=\"90%\""));
        assert!(html.contains("style=\"width:0%\""));
    }

    #[test]
    fn test_about_unknown_platform_falls_back_to_pill() {
        let doc = sample_doc();
        let html = render_about("Showreel", &doc, None);
        assert!(html.contains("<span class=\"pill\">Mastodon</span>"));
        assert!(html.contains("viewBox=\"0 0 24 24\"")); // GitHub icon resolved
    }

    #[test]
    fn test_about_resume_links_follow_resume_url() {
        let mut doc = sample_doc();
        let with = render_about("Showreel", &doc, None);
        assert!(with.contains("View Resume"));
        assert!(with.contains("uploads/resume.pdf"));

        doc.resume_url = None;
        let without = render_about("Showreel", &doc, None);
        assert!(!without.contains("View Resume"));
    }

    #[test]
    fn test_about_timeline_in_stored_order() {
        let doc = sample_doc();
        let html = render_about("Showreel", &doc, None);
        assert!(html.contains("2024"));
        assert!(html.contains("First job"));
    }
}
