use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The whole-site content document. Persisted as a single JSON file and
/// replaced wholesale on every mutation.
///
/// Deserialization is lenient: every field defaults when absent, and unknown
/// fields are captured in `extra` so a typed load → save round-trip never
/// drops data the admin API wrote as raw JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub profiles: Vec<Profile>,
    pub rows: Vec<Row>,
    pub skills: Vec<Skill>,
    pub about: About,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A named viewing context selected by the visitor. Used only to filter
/// which rows the browse page shows — never a server-side session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub id: u64,
    pub name: String,
    pub avatar: String,
}

/// A titled, horizontally scrollable collection of project items.
/// `profile_ids` absent means the row is visible to every profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Row {
    /// Unique row key. Rows persisted before this field existed load as 0
    /// and get an id assigned by `Document::assign_row_ids`.
    pub id: u64,
    pub title: String,
    pub items: Vec<Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_ids: Option<Vec<u64>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub id: u64,
    pub title: String,
    pub image: String,
    pub github_url: String,
    pub description: String,
    pub live_url: String,
    pub technologies: Vec<String>,
    pub use_cases: Vec<String>,
    pub future_scope: String,
    pub contributors: Vec<Contributor>,
    /// Ids of other items. Dangling ids are tolerated and skipped at render.
    pub recommendations: Vec<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contributor {
    pub name: String,
    pub avatar: String,
    pub github_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub id: u64,
    pub name: String,
    /// 0–100. Accepts a JSON string as well — older documents stored the
    /// form value verbatim.
    #[serde(deserialize_with = "de_level")]
    pub level: u8,
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct About {
    pub intro: String,
    pub profile_picture: String,
    pub timeline: Vec<TimelineEntry>,
    pub socials: Vec<Social>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineEntry {
    pub year: String,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Social {
    pub platform: String,
    pub url: String,
}

impl Document {
    /// Next free id, shared across profiles, rows, items, and skills.
    /// Monotonic per document: always `max(existing) + 1`, never reused
    /// while the entity holding the max still exists.
    pub fn next_id(&self) -> u64 {
        let profile_max = self.profiles.iter().map(|p| p.id).max().unwrap_or(0);
        let skill_max = self.skills.iter().map(|s| s.id).max().unwrap_or(0);
        let row_max = self
            .rows
            .iter()
            .flat_map(|r| std::iter::once(r.id).chain(r.items.iter().map(|i| i.id)))
            .max()
            .unwrap_or(0);
        profile_max.max(skill_max).max(row_max) + 1
    }

    /// Assigns ids to rows that loaded without one. Deterministic for a
    /// given document, so unsaved assignments are stable across requests.
    pub fn assign_row_ids(&mut self) {
        let mut next = self.next_id();
        for row in &mut self.rows {
            if row.id == 0 {
                row.id = next;
                next += 1;
            }
        }
    }

    /// Looks an item up by id across every row. Item ids are unique across
    /// the whole document, so the first hit is the only hit.
    pub fn item(&self, id: u64) -> Option<&Item> {
        self.rows.iter().flat_map(|r| r.items.iter()).find(|i| i.id == id)
    }

    pub fn item_mut(&mut self, id: u64) -> Option<&mut Item> {
        self.rows
            .iter_mut()
            .flat_map(|r| r.items.iter_mut())
            .find(|i| i.id == id)
    }

    pub fn row_mut(&mut self, id: u64) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    pub fn profile(&self, id: u64) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }
}

fn de_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LevelRepr {
        Num(u64),
        Text(String),
    }

    let level = match LevelRepr::deserialize(deserializer)? {
        LevelRepr::Num(n) => n,
        LevelRepr::Text(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| serde::de::Error::custom("skill level must be a number"))?,
    };
    Ok(level.min(100) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_next_id_spans_all_entity_kinds() {
        let doc: Document = serde_json::from_value(json!({
            "profiles": [{"id": 3, "name": "A", "avatar": ""}],
            "rows": [{"id": 4, "title": "R", "items": [{"id": 9, "title": "P", "image": ""}]}],
            "skills": [{"id": 7, "name": "Rust", "level": 80, "category": "Languages"}]
        }))
        .unwrap();
        assert_eq!(doc.next_id(), 10);
    }

    #[test]
    fn test_next_id_on_empty_document_is_one() {
        assert_eq!(Document::default().next_id(), 1);
    }

    #[test]
    fn test_assign_row_ids_fills_only_missing_ids() {
        let mut doc: Document = serde_json::from_value(json!({
            "rows": [
                {"id": 2, "title": "Kept", "items": []},
                {"title": "Legacy", "items": []}
            ]
        }))
        .unwrap();
        doc.assign_row_ids();
        assert_eq!(doc.rows[0].id, 2);
        assert_eq!(doc.rows[1].id, 3);
    }

    #[test]
    fn test_item_lookup_is_unambiguous_across_rows() {
        let doc: Document = serde_json::from_value(json!({
            "rows": [
                {"id": 10, "title": "A", "items": [{"id": 1, "title": "First", "image": ""}]},
                {"id": 11, "title": "B", "items": [{"id": 2, "title": "Second", "image": ""}]}
            ]
        }))
        .unwrap();
        assert_eq!(doc.item(2).unwrap().title, "Second");
        assert!(doc.item(99).is_none());
    }

    #[test]
    fn test_skill_level_accepts_string_and_clamps() {
        let skill: Skill =
            serde_json::from_value(json!({"id": 1, "name": "JS", "level": "85", "category": "Web"}))
                .unwrap();
        assert_eq!(skill.level, 85);

        let skill: Skill =
            serde_json::from_value(json!({"id": 2, "name": "Go", "level": 400, "category": "Web"}))
                .unwrap();
        assert_eq!(skill.level, 100);
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let raw = json!({
            "profiles": [],
            "rows": [{"id": 1, "title": "R", "items": [], "accentColor": "red"}],
            "legacyTheme": "dark"
        });
        let doc: Document = serde_json::from_value(raw).unwrap();
        let back = serde_json::to_value(&doc).unwrap();
        assert_eq!(back["legacyTheme"], "dark");
        assert_eq!(back["rows"][0]["accentColor"], "red");
    }

    #[test]
    fn test_resume_url_absent_until_set() {
        let doc = Document::default();
        let back = serde_json::to_value(&doc).unwrap();
        assert!(back.get("resumeUrl").is_none());
    }
}
