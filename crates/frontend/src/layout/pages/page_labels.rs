//! Page labels - единственный источник правды для заголовков страниц.
//!
//! Ключ страницы совпадает с пунктом меню: `"projects"`, `"purchases/orders"`.
//! Пункты подменю открывают родительскую страницу.

/// Top-level page of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppPage {
    Dashboard,
    Projects,
    Purchases,
    Inventory,
    Suppliers,
    Accounting,
    Reports,
    Settings,
}

impl AppPage {
    pub fn all() -> [AppPage; 8] {
        [
            AppPage::Dashboard,
            AppPage::Projects,
            AppPage::Purchases,
            AppPage::Inventory,
            AppPage::Suppliers,
            AppPage::Accounting,
            AppPage::Reports,
            AppPage::Settings,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            AppPage::Dashboard => "dashboard",
            AppPage::Projects => "projects",
            AppPage::Purchases => "purchases",
            AppPage::Inventory => "inventory",
            AppPage::Suppliers => "suppliers",
            AppPage::Accounting => "accounting",
            AppPage::Reports => "reports",
            AppPage::Settings => "settings",
        }
    }

    /// Resolves a menu key; `"inventory/stock"` → Inventory, unknown → Dashboard
    pub fn from_key(key: &str) -> AppPage {
        let root = key
            .trim_matches('/')
            .split('/')
            .next()
            .unwrap_or_default();
        Self::all()
            .into_iter()
            .find(|page| page.key() == root)
            .unwrap_or(AppPage::Dashboard)
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppPage::Dashboard => "Dashboard",
            AppPage::Projects => "Projects",
            AppPage::Purchases => "Purchases",
            AppPage::Inventory => "Inventory",
            AppPage::Suppliers => "Suppliers",
            AppPage::Accounting => "Accounting",
            AppPage::Reports => "Reports",
            AppPage::Settings => "Settings",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AppPage::Dashboard => "Welcome to your ERP dashboard.",
            AppPage::Projects => "Manage and track all your logistics projects.",
            AppPage::Purchases => "Manage purchase orders, requirements, and receptions.",
            AppPage::Inventory => "Manage your stock, warehouses, and inventory movements.",
            AppPage::Suppliers => "Manage your suppliers, contacts, and evaluations.",
            AppPage::Accounting => "Manage financial transactions, ledgers, and statements.",
            AppPage::Reports => "Access operational, financial, and management reports.",
            AppPage::Settings => "Configure your organization, users, and system settings.",
        }
    }
}

/// Возвращает читаемый заголовок для ключа пункта меню.
pub fn page_label_for_key(key: &str) -> &'static str {
    match key {
        "projects/new" => "Create Project",
        "projects/calendar" => "Project Calendar",
        "purchases/requirements" => "Requirements",
        "purchases/orders" => "Purchase Orders",
        "purchases/receptions" => "Receptions",
        "inventory/stock" => "Stock",
        "inventory/movements" => "Movements",
        "inventory/warehouses" => "Warehouses",
        "accounting/transactions" => "Transactions",
        "accounting/ledger" => "Ledger",
        "accounting/statements" => "Financial Statements",
        "reports/operational" => "Operational",
        "reports/management" => "Management",
        "reports/export" => "Export Data",
        "settings/organization" => "Organization",
        "settings/users" => "Users & Permissions",
        "settings/system" => "System Configuration",
        "projects" => "All Projects",
        other => AppPage::from_key(other).title(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_keys_round_trip() {
        for page in AppPage::all() {
            assert_eq!(AppPage::from_key(page.key()), page);
        }
    }

    #[test]
    fn test_sub_keys_open_parent_page() {
        assert_eq!(AppPage::from_key("purchases/orders"), AppPage::Purchases);
        assert_eq!(AppPage::from_key("projects/new"), AppPage::Projects);
        assert_eq!(AppPage::from_key("accounting/ledger"), AppPage::Accounting);
        assert_eq!(AppPage::from_key("/settings/users"), AppPage::Settings);
    }

    #[test]
    fn test_unknown_key_falls_back_to_dashboard() {
        assert_eq!(AppPage::from_key(""), AppPage::Dashboard);
        assert_eq!(AppPage::from_key("warehouse"), AppPage::Dashboard);
        assert_eq!(AppPage::from_key("crm/leads"), AppPage::Dashboard);
    }

    #[test]
    fn test_labels() {
        assert_eq!(page_label_for_key("settings/users"), "Users & Permissions");
        assert_eq!(page_label_for_key("projects"), "All Projects");
        assert_eq!(page_label_for_key("suppliers"), "Suppliers");
        assert_eq!(page_label_for_key("nope"), "Dashboard");
    }
}
