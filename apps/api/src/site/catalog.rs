//! Pure queries over the document that drive the public pages.
//!
//! Everything here is a plain function over borrowed data so the browse
//! filtering, modal lookup, and skills grouping rules stay testable without
//! touching the store or the HTTP layer.

use crate::models::content::{Document, Item, Row, Skill};

/// Rows visible to a profile: rows with no `profileIds` restriction, plus
/// rows that list the profile explicitly.
pub fn visible_rows(doc: &Document, profile_id: u64) -> Vec<&Row> {
    doc.rows
        .iter()
        .filter(|row| match &row.profile_ids {
            None => true,
            Some(ids) => ids.contains(&profile_id),
        })
        .collect()
}

/// The hero rotation pool: every item of every visible row, flattened in
/// display order.
pub fn hero_items<'a>(rows: &[&'a Row]) -> Vec<&'a Item> {
    rows.iter().flat_map(|row| row.items.iter()).collect()
}

/// Looks an item up by id across the visible rows. Used for the detail
/// modal and for resolving recommendations — ids that resolve to nothing
/// (hidden or deleted items) are simply skipped by callers.
pub fn find_visible_item<'a>(rows: &[&'a Row], id: u64) -> Option<&'a Item> {
    rows.iter()
        .flat_map(|row| row.items.iter())
        .find(|item| item.id == id)
}

/// Groups the flat skill list by category, preserving first-seen category
/// order and the in-category order of the document.
pub fn skills_by_category(skills: &[Skill]) -> Vec<(&str, Vec<&Skill>)> {
    let mut groups: Vec<(&str, Vec<&Skill>)> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|(cat, _)| *cat == skill.category) {
            Some((_, members)) => members.push(skill),
            None => groups.push((skill.category.as_str(), vec![skill])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc_with_restricted_rows() -> Document {
        serde_json::from_value(json!({
            "rows": [
                {"id": 10, "title": "A", "profileIds": [1], "items": [
                    {"id": 1, "title": "Alpha", "image": ""}
                ]},
                {"id": 11, "title": "B", "items": [
                    {"id": 2, "title": "Beta", "image": ""}
                ]}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_restricted_row_hidden_from_other_profiles() {
        let doc = doc_with_restricted_rows();
        let rows = visible_rows(&doc, 2);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "B");
    }

    #[test]
    fn test_listed_profile_sees_both_rows() {
        let doc = doc_with_restricted_rows();
        let rows = visible_rows(&doc, 1);
        let titles: Vec<_> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
    }

    #[test]
    fn test_hero_pool_flattens_visible_rows_in_order() {
        let doc = doc_with_restricted_rows();
        let rows = visible_rows(&doc, 1);
        let ids: Vec<_> = hero_items(&rows).iter().map(|i| i.id).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn test_lookup_matches_exactly_one_item() {
        let doc = doc_with_restricted_rows();
        let rows = visible_rows(&doc, 1);
        let item = find_visible_item(&rows, 2).unwrap();
        assert_eq!(item.title, "Beta");
        assert!(find_visible_item(&rows, 404).is_none());
    }

    #[test]
    fn test_lookup_does_not_see_hidden_rows() {
        let doc = doc_with_restricted_rows();
        let rows = visible_rows(&doc, 2);
        assert!(find_visible_item(&rows, 1).is_none());
    }

    #[test]
    fn test_skills_group_in_first_seen_category_order() {
        let skills: Vec<Skill> = serde_json::from_value(json!([
            {"id": 1, "name": "Rust", "level": 90, "category": "Languages"},
            {"id": 2, "name": "Docker", "level": 70, "category": "Tooling"},
            {"id": 3, "name": "Go", "level": 60, "category": "Languages"}
        ]))
        .unwrap();

        let groups = skills_by_category(&skills);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Languages");
        assert_eq!(groups[1].0, "Tooling");
        let langs: Vec<_> = groups[0].1.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(langs, ["Rust", "Go"]);
    }

    #[test]
    fn test_empty_skill_list_yields_no_groups() {
        assert!(skills_by_category(&[]).is_empty());
    }
}
