use crate::domain::common::{AggregateRoot, StatusCode};
use crate::shared::badge::BadgeVariant;
use crate::shared::list_filter::Searchable;
use crate::shared::scope::{BusinessScoped, UnitId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Номер проекта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectId(pub u32);

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Planning,
    OnHold,
    Completed,
    Cancelled,
}

impl StatusCode for ProjectStatus {
    fn code(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Planning => "planning",
            ProjectStatus::OnHold => "on-hold",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Planning => "Planning",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Cancelled => "Cancelled",
        }
    }

    fn badge(&self) -> BadgeVariant {
        match self {
            ProjectStatus::Active => BadgeVariant::Default,
            ProjectStatus::Completed => BadgeVariant::Outline,
            ProjectStatus::OnHold | ProjectStatus::Planning => BadgeVariant::Secondary,
            ProjectStatus::Cancelled => BadgeVariant::Destructive,
        }
    }

    fn all() -> &'static [Self] {
        &[
            ProjectStatus::Active,
            ProjectStatus::Planning,
            ProjectStatus::OnHold,
            ProjectStatus::Completed,
            ProjectStatus::Cancelled,
        ]
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Проект внутри бизнеса
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Название бизнеса для отображения
    pub business: String,
    pub business_id: UnitId,
    pub status: ProjectStatus,
    /// 0..=100
    pub progress: u8,
    pub budget: f64,
    /// YYYY-MM-DD
    pub start_date: String,
    /// YYYY-MM-DD
    pub end_date: String,
    pub manager: String,
    pub team: u32,
    pub description: String,
}

impl Project {
    pub fn start(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d").ok()
    }

    pub fn end(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.end_date, "%Y-%m-%d").ok()
    }

    /// Длительность в днях; `None` если даты не разбираются
    pub fn duration_days(&self) -> Option<i64> {
        Some((self.end()? - self.start()?).num_days())
    }

    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}

impl AggregateRoot for Project {
    type Id = ProjectId;

    fn id(&self) -> ProjectId {
        self.id
    }

    fn code(&self) -> String {
        format!("PRJ-{:03}", self.id.0)
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "project"
    }

    fn element_name() -> &'static str {
        "Project"
    }

    fn list_name() -> &'static str {
        "Projects"
    }
}

impl Searchable for Project {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.business]
    }
}

impl BusinessScoped for Project {
    fn business_id(&self) -> &UnitId {
        &self.business_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_project::seed;

    #[test]
    fn test_status_codes_round_trip() {
        for status in ProjectStatus::all() {
            assert_eq!(ProjectStatus::from_code(status.code()), Some(*status));
        }
        assert_eq!(ProjectStatus::from_code("archived"), None);
        assert_eq!(ProjectStatus::OnHold.badge(), BadgeVariant::Secondary);
        assert_eq!(ProjectStatus::Completed.badge(), BadgeVariant::Outline);
    }

    #[test]
    fn test_serde_uses_status_codes() {
        let json = serde_json::to_value(ProjectStatus::OnHold).unwrap();
        assert_eq!(json, "on-hold");
        let project = &seed::projects()[0];
        let json = serde_json::to_value(project).unwrap();
        assert_eq!(json["businessId"], "business-1");
        assert_eq!(json["startDate"], "2023-03-15");
    }

    #[test]
    fn test_search_by_name_or_business() {
        let projects = seed::projects();
        let fleet = &projects[1];
        assert!(fleet.matches_search("fleet"));
        assert!(fleet.matches_search("rápidos"));
        assert!(!fleet.matches_search("norte"));
        assert!(!fleet.matches_search("Ana"));
    }

    #[test]
    fn test_duration() {
        let projects = seed::projects();
        assert_eq!(projects[2].duration_days(), Some(101));
        assert_eq!(projects[0].code(), "PRJ-001");
        assert_eq!(Project::full_name(), "a001_project");
    }
}
