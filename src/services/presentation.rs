//! Read-side shaping for the public pages: portfolio grid ordering, the
//! grouped media view, text preview truncation, and the project-detail
//! carousel. Pure functions over fetched models, no I/O.

use crate::entities::{media_items, projects};
use chrono::{DateTime, NaiveDate, Utc};

pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// Effective date used to order projects: the explicit `project_date` when
/// it parses, otherwise the server-stamped `created_at`.
pub fn project_sort_date(project: &projects::Model) -> DateTime<Utc> {
    if let Some(ref date) = project.project_date
        && let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        && let Some(midnight) = day.and_hms_opt(0, 0, 0)
    {
        return midnight.and_utc();
    }
    project.created_at
}

/// Most recent first. Stable: ties keep the original fetch order.
pub fn sort_projects_by_date(mut projects: Vec<projects::Model>) -> Vec<projects::Model> {
    projects.sort_by(|a, b| project_sort_date(b).cmp(&project_sort_date(a)));
    projects
}

/// The two most recent projects, by the same date policy as the grid.
pub fn recent_projects(projects: Vec<projects::Model>) -> Vec<projects::Model> {
    sort_projects_by_date(projects).into_iter().take(2).collect()
}

#[derive(Debug, Clone, serde::Serialize, utoipa::ToSchema)]
pub struct MediaGroup {
    /// Project id, or `None` for the unassigned bucket.
    pub project_id: Option<String>,
    pub label: String,
    pub items: Vec<media_items::Model>,
}

/// Groups media by project id. Items without a project land in a trailing
/// "Unassigned" bucket. Group order follows first appearance.
pub fn group_media_by_project(items: Vec<media_items::Model>) -> Vec<MediaGroup> {
    let mut groups: Vec<MediaGroup> = Vec::new();
    let mut unassigned: Vec<media_items::Model> = Vec::new();

    for item in items {
        match item.project_id.clone() {
            Some(pid) => {
                if let Some(group) = groups
                    .iter_mut()
                    .find(|g| g.project_id.as_deref() == Some(pid.as_str()))
                {
                    group.items.push(item);
                } else {
                    let label = item
                        .project_name
                        .clone()
                        .unwrap_or_else(|| pid.clone());
                    groups.push(MediaGroup {
                        project_id: Some(pid),
                        label,
                        items: vec![item],
                    });
                }
            }
            None => unassigned.push(item),
        }
    }

    if !unassigned.is_empty() {
        groups.push(MediaGroup {
            project_id: None,
            label: UNASSIGNED_LABEL.to_string(),
            items: unassigned,
        });
    }

    groups
}

/// Clips text to roughly `max_chars` at a trimmed boundary with an ellipsis.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if !needs_truncation(text, max_chars) {
        return text.to_string();
    }
    let clipped: String = text.chars().take(max_chars).collect();
    format!("{}...", clipped.trim_end())
}

pub fn needs_truncation(text: &str, max_chars: usize) -> bool {
    text.chars().count() > max_chars
}

/// Index model for the project-detail media carousel. Navigation wraps
/// circularly; Home/End jump to the ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn first(&mut self) {
        self.index = 0;
    }

    pub fn last(&mut self) {
        if self.len > 0 {
            self.index = self.len - 1;
        }
    }

    /// Maps DOM key names to navigation. Returns false for unhandled keys.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "ArrowLeft" => self.prev(),
            "ArrowRight" => self.next(),
            "Home" => self.first(),
            "End" => self.last(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn project(name: &str, project_date: Option<&str>, created_at: DateTime<Utc>) -> projects::Model {
        projects::Model {
            id: format!("id-{name}"),
            name: name.to_string(),
            description: String::new(),
            technologies: serde_json::json!([]),
            image_url: None,
            featured_media_id: None,
            live_url: None,
            github_url: None,
            project_date: project_date.map(|s| s.to_string()),
            created_at,
            updated_at: created_at,
        }
    }

    fn media(id: &str, project_id: Option<&str>, project_name: Option<&str>) -> media_items::Model {
        let now = Utc::now();
        media_items::Model {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            media_type: "image".to_string(),
            url: format!("https://cdn.example/{id}"),
            thumbnail: None,
            project_id: project_id.map(|s| s.to_string()),
            project_name: project_name.map(|s| s.to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_sort_prefers_project_date_descending() {
        let created = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        let sorted = sort_projects_by_date(vec![
            project("older", Some("2024-01-15"), created),
            project("newer", Some("2024-03-10"), created),
        ]);
        assert_eq!(sorted[0].name, "newer");
        assert_eq!(sorted[1].name, "older");
    }

    #[test]
    fn test_sort_falls_back_to_created_at() {
        let early = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let sorted = sort_projects_by_date(vec![
            project("dated", Some("2024-03-10"), early),
            project("undated", None, late),
        ]);
        // The undated project's created_at (2025) beats the explicit 2024 date
        assert_eq!(sorted[0].name, "undated");
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let created = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        let sorted = sort_projects_by_date(vec![
            project("first", Some("2024-03-10"), created),
            project("second", Some("2024-03-10"), created),
        ]);
        assert_eq!(sorted[0].name, "first");
        assert_eq!(sorted[1].name, "second");
    }

    #[test]
    fn test_unparseable_date_falls_back_to_created_at() {
        let created = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        let p = project("odd", Some("not-a-date"), created);
        assert_eq!(project_sort_date(&p), created);
    }

    #[test]
    fn test_recent_projects_takes_two() {
        let created = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        let recent = recent_projects(vec![
            project("a", Some("2024-01-01"), created),
            project("b", Some("2024-03-01"), created),
            project("c", Some("2024-02-01"), created),
        ]);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].name, "b");
        assert_eq!(recent[1].name, "c");
    }

    #[test]
    fn test_grouping_places_orphans_under_unassigned() {
        let groups = group_media_by_project(vec![
            media("m1", Some("p1"), Some("Alpha")),
            media("m2", None, None),
            media("m3", Some("p1"), Some("Alpha")),
            media("m4", Some("p2"), Some("Beta")),
        ]);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].label, "Alpha");
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[1].label, "Beta");

        let unassigned = groups.last().unwrap();
        assert_eq!(unassigned.label, UNASSIGNED_LABEL);
        assert!(unassigned.project_id.is_none());
        assert_eq!(unassigned.items.len(), 1);
        assert_eq!(unassigned.items[0].id, "m2");
    }

    #[test]
    fn test_grouping_without_orphans_has_no_unassigned_bucket() {
        let groups = group_media_by_project(vec![media("m1", Some("p1"), Some("Alpha"))]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "Alpha");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 200), "short");
        assert!(!needs_truncation("short", 200));

        let long = "x".repeat(250);
        let clipped = truncate_text(&long, 200);
        assert!(clipped.ends_with("..."));
        assert_eq!(clipped.chars().count(), 203);
        assert!(needs_truncation(&long, 200));

        // Trailing whitespace is trimmed before the ellipsis
        let spaced = format!("{} {}", "a".repeat(199), "b".repeat(50));
        assert_eq!(truncate_text(&spaced, 200), format!("{}...", "a".repeat(199)));
    }

    #[test]
    fn test_carousel_wraps_both_directions() {
        let mut c = Carousel::new(3);
        assert_eq!(c.index(), 0);
        c.prev();
        assert_eq!(c.index(), 2); // wraps backwards to the last slide
        c.next();
        assert_eq!(c.index(), 0); // and forwards back to the first
        c.next();
        c.next();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_carousel_key_navigation() {
        let mut c = Carousel::new(4);
        assert!(c.handle_key("End"));
        assert_eq!(c.index(), 3);
        assert!(c.handle_key("Home"));
        assert_eq!(c.index(), 0);
        assert!(c.handle_key("ArrowLeft"));
        assert_eq!(c.index(), 3);
        assert!(c.handle_key("ArrowRight"));
        assert_eq!(c.index(), 0);
        assert!(!c.handle_key("Enter"));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_carousel_empty_is_inert() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        c.last();
        assert_eq!(c.index(), 0);
    }
}
