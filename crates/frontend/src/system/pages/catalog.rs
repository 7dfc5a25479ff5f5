//! Статические каталоги карточек для страниц отчётов и настроек.

use contracts::shared::scope::{ScopeRegistry, UnitId};

/// Что открывает кнопка карточки отчёта
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Chart,
    Document,
}

impl ReportKind {
    pub fn action_label(&self) -> &'static str {
        match self {
            ReportKind::Chart => "View Chart",
            ReportKind::Document => "View Report",
        }
    }

    pub fn action_icon(&self) -> &'static str {
        match self {
            ReportKind::Chart => "bar-chart",
            ReportKind::Document => "file-text",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Только для отчётов
    pub kind: Option<ReportKind>,
}

/// Вкладка каталога
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSection {
    pub code: &'static str,
    pub label: &'static str,
    pub cards: Vec<CatalogCard>,
}

impl CatalogSection {
    pub fn find<'a>(sections: &'a [CatalogSection], code: &str) -> Option<&'a CatalogSection> {
        sections.iter().find(|s| s.code == code)
    }
}

/// (code, label) вкладок; значения `'static`, чтобы view не держал заимствование
pub fn section_tabs(sections: &[CatalogSection]) -> Vec<(&'static str, &'static str)> {
    sections.iter().map(|s| (s.code, s.label)).collect()
}

/// Бизнесы внутри выбранной компании: (id, name)
pub fn business_options(registry: &ScopeRegistry, selected: &UnitId) -> Vec<(String, String)> {
    registry
        .businesses_in_scope(selected)
        .into_iter()
        .filter_map(|id| registry.resolve(id))
        .map(|u| (u.id.as_str().to_string(), u.name.clone()))
        .collect()
}

/// Периоды отчётов: (value, label)
pub const DATE_RANGES: &[(&str, &str)] = &[
    ("week", "Last Week"),
    ("month", "Last Month"),
    ("quarter", "Last Quarter"),
    ("year", "Last Year"),
    ("custom", "Custom Range"),
];

pub const DEFAULT_DATE_RANGE: &str = "month";

fn report(
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    kind: ReportKind,
) -> CatalogCard {
    CatalogCard { title, description, icon, kind: Some(kind) }
}

fn setting(title: &'static str, description: &'static str, icon: &'static str) -> CatalogCard {
    CatalogCard { title, description, icon, kind: None }
}

pub fn report_sections() -> Vec<CatalogSection> {
    use ReportKind::{Chart, Document};
    vec![
        CatalogSection {
            code: "operational",
            label: "Operational",
            cards: vec![
                report("Project Performance", "Overview of project status, progress, and budget variance", "bar-chart", Chart),
                report("Resource Utilization", "Analysis of resource allocation and efficiency", "line-chart", Chart),
                report("Operational KPIs", "Key performance indicators for operational efficiency", "pie-chart", Chart),
                report("Project Timeline Report", "Detailed timeline analysis of all active projects", "file-text", Document),
                report("Delivery Performance", "On-time delivery metrics and analysis", "file-text", Document),
                report("Operational Costs", "Breakdown of operational costs by category", "file-text", Document),
            ],
        },
        CatalogSection {
            code: "financial",
            label: "Financial",
            cards: vec![
                report("Revenue Analysis", "Revenue breakdown by business unit and project", "bar-chart", Chart),
                report("Expense Trends", "Monthly expense trends and forecasts", "line-chart", Chart),
                report("Profit Margins", "Profit margin analysis by business and project", "pie-chart", Chart),
                report("Cash Flow Statement", "Detailed cash flow analysis and projections", "file-text", Document),
                report("Balance Sheet", "Consolidated balance sheet for all businesses", "file-text", Document),
                report("Income Statement", "Detailed income statement with comparative analysis", "file-text", Document),
            ],
        },
        CatalogSection {
            code: "inventory",
            label: "Inventory",
            cards: vec![
                report("Inventory Turnover", "Analysis of inventory turnover rates by category", "bar-chart", Chart),
                report("Stock Level Trends", "Historical stock level trends and forecasts", "line-chart", Chart),
                report("Inventory Value", "Inventory value distribution by warehouse", "pie-chart", Chart),
                report("Low Stock Alert Report", "Items approaching or below minimum stock levels", "file-text", Document),
                report("Inventory Movement", "Detailed report of all inventory movements", "file-text", Document),
                report("Warehouse Utilization", "Space utilization analysis by warehouse", "file-text", Document),
            ],
        },
        CatalogSection {
            code: "suppliers",
            label: "Suppliers",
            cards: vec![
                report("Supplier Performance", "Performance metrics for all active suppliers", "bar-chart", Chart),
                report("Purchase Trends", "Purchase volume trends by supplier", "line-chart", Chart),
                report("Supplier Spend", "Spend distribution across suppliers", "pie-chart", Chart),
                report("Supplier Evaluation", "Detailed supplier evaluation and ratings", "file-text", Document),
                report("Delivery Compliance", "Supplier delivery compliance analysis", "file-text", Document),
                report("Price Variance", "Price variance analysis by supplier and category", "file-text", Document),
            ],
        },
    ]
}

pub fn settings_sections() -> Vec<CatalogSection> {
    vec![
        CatalogSection {
            code: "organization",
            label: "Organization",
            cards: vec![
                setting("Company Profile", "Manage your company information, logo, and business details", "building"),
                setting("Business Units", "Configure and manage your business units and departments", "building"),
                setting("Locations", "Manage warehouses, offices, and other physical locations", "globe"),
                setting("Document Templates", "Customize templates for invoices, purchase orders, and reports", "file-text"),
                setting("Fiscal Configuration", "Set up fiscal years, periods, and tax configurations", "credit-card"),
                setting("Notification Settings", "Configure email notifications and alerts for your organization", "bell"),
            ],
        },
        CatalogSection {
            code: "users",
            label: "Users & Permissions",
            cards: vec![
                setting("User Management", "Add, edit, and manage user accounts and profiles", "users"),
                setting("Role Management", "Define and configure user roles and responsibilities", "shield"),
                setting("Permission Matrix", "Set up detailed permissions for each role and module", "shield"),
                setting("Access Control", "Configure access control for different business units", "shield"),
                setting("Authentication Settings", "Configure login methods, MFA, and security policies", "shield"),
                setting("Audit Logs", "View and export user activity and system audit logs", "file-text"),
            ],
        },
        CatalogSection {
            code: "system",
            label: "System",
            cards: vec![
                setting("General Settings", "Configure system-wide settings and preferences", "settings"),
                setting("Module Configuration", "Enable, disable, and configure system modules", "settings"),
                setting("Workflow Management", "Configure approval workflows and business processes", "workflow"),
                setting("Data Management", "Manage data imports, exports, and backup settings", "database"),
                setting("Email Configuration", "Set up email servers and notification templates", "mail"),
                setting("System Maintenance", "Schedule maintenance tasks and system updates", "settings"),
            ],
        },
        CatalogSection {
            code: "integrations",
            label: "Integrations",
            cards: vec![
                setting("API Configuration", "Manage API keys, webhooks, and integration settings", "settings"),
                setting("Payment Gateways", "Configure payment processors and financial integrations", "credit-card"),
                setting("External Systems", "Connect to external ERP, CRM, and other business systems", "database"),
                setting("Data Synchronization", "Configure data sync settings with external systems", "database"),
                setting("Third-Party Services", "Manage connections to third-party services and tools", "globe"),
                setting("Integration Logs", "View and troubleshoot integration activity logs", "file-text"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::scope::ScopeConfig;
    use std::collections::HashSet;

    #[test]
    fn test_every_section_has_six_cards() {
        for section in report_sections().iter().chain(settings_sections().iter()) {
            assert_eq!(section.cards.len(), 6, "{}", section.code);
        }
    }

    #[test]
    fn test_reports_have_kind_settings_do_not() {
        assert!(report_sections()
            .iter()
            .flat_map(|s| s.cards.iter())
            .all(|c| c.kind.is_some()));
        assert!(settings_sections()
            .iter()
            .flat_map(|s| s.cards.iter())
            .all(|c| c.kind.is_none()));
    }

    #[test]
    fn test_section_codes_unique_and_findable() {
        let sections = report_sections();
        let codes: HashSet<_> = sections.iter().map(|s| s.code).collect();
        assert_eq!(codes.len(), sections.len());
        assert_eq!(CatalogSection::find(&sections, "financial").map(|s| s.label), Some("Financial"));
        assert!(CatalogSection::find(&sections, "payroll").is_none());
    }

    #[test]
    fn test_section_tabs_keep_order() {
        let tabs = section_tabs(&settings_sections());
        assert_eq!(
            tabs,
            vec![
                ("organization", "Organization"),
                ("users", "Users & Permissions"),
                ("system", "System"),
                ("integrations", "Integrations"),
            ]
        );
        assert_eq!(section_tabs(&report_sections())[3], ("suppliers", "Suppliers"));
    }

    #[test]
    fn test_business_options_follow_selection() {
        let (registry, _, _) = ScopeConfig::embedded().unwrap().build().unwrap();
        let ids = |selected: &str| -> Vec<String> {
            business_options(&registry, &UnitId::from(selected))
                .into_iter()
                .map(|(id, _)| id)
                .collect()
        };
        assert_eq!(ids("group-1"), vec!["business-1", "business-2"]);
        assert_eq!(ids("business-3"), vec!["business-3"]);
        assert_eq!(ids("all").len(), 3);
        assert!(ids("project-1").is_empty());
        assert_eq!(
            business_options(&registry, &UnitId::from("group-2")),
            vec![("business-3".to_string(), "Transportes Rápidos".to_string())]
        );
    }

    #[test]
    fn test_default_date_range_is_listed() {
        assert!(DATE_RANGES.iter().any(|(v, _)| *v == DEFAULT_DATE_RANGE));
        assert_eq!(ReportKind::Document.action_label(), "View Report");
    }
}
