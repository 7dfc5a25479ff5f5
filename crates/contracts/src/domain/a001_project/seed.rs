use super::aggregate::{Project, ProjectId, ProjectStatus};

/// Demo projects shown on the dashboard
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: ProjectId(1),
            name: "Warehouse Expansion".into(),
            business: "Logística Norte".into(),
            business_id: "business-1".into(),
            status: ProjectStatus::Active,
            progress: 75,
            budget: 450000.0,
            start_date: "2023-03-15".into(),
            end_date: "2023-09-30".into(),
            manager: "Carlos Mendoza".into(),
            team: 8,
            description: "Expansion of the main warehouse to increase storage capacity".into(),
        },
        Project {
            id: ProjectId(2),
            name: "Fleet Modernization".into(),
            business: "Transportes Rápidos".into(),
            business_id: "business-3".into(),
            status: ProjectStatus::OnHold,
            progress: 30,
            budget: 280000.0,
            start_date: "2023-02-01".into(),
            end_date: "2023-08-15".into(),
            manager: "Ana Gutiérrez".into(),
            team: 5,
            description: "Replacement of 15 transport vehicles with newer models".into(),
        },
        Project {
            id: ProjectId(3),
            name: "Inventory System Upgrade".into(),
            business: "Logística Norte".into(),
            business_id: "business-1".into(),
            status: ProjectStatus::Active,
            progress: 60,
            budget: 120000.0,
            start_date: "2023-04-10".into(),
            end_date: "2023-07-20".into(),
            manager: "Roberto Sánchez".into(),
            team: 4,
            description: "Implementation of new inventory tracking software".into(),
        },
        Project {
            id: ProjectId(4),
            name: "New Distribution Center".into(),
            business: "Logística Sur".into(),
            business_id: "business-2".into(),
            status: ProjectStatus::Completed,
            progress: 100,
            budget: 850000.0,
            start_date: "2022-09-01".into(),
            end_date: "2023-05-30".into(),
            manager: "María Fernández".into(),
            team: 12,
            description: "Construction and setup of new distribution center in the south region".into(),
        },
        Project {
            id: ProjectId(5),
            name: "Supply Chain Optimization".into(),
            business: "Transportes Rápidos".into(),
            business_id: "business-3".into(),
            status: ProjectStatus::Active,
            progress: 45,
            budget: 75000.0,
            start_date: "2023-05-01".into(),
            end_date: "2023-08-30".into(),
            manager: "Javier López".into(),
            team: 3,
            description: "Analysis and optimization of the current supply chain processes".into(),
        },
        Project {
            id: ProjectId(6),
            name: "Logistics Software Integration".into(),
            business: "Logística Sur".into(),
            business_id: "business-2".into(),
            status: ProjectStatus::Planning,
            progress: 10,
            budget: 180000.0,
            start_date: "2023-07-01".into(),
            end_date: "2023-12-15".into(),
            manager: "Patricia Ramírez".into(),
            team: 6,
            description: "Integration of new logistics software with existing systems".into(),
        },
        Project {
            id: ProjectId(7),
            name: "Warehouse Automation".into(),
            business: "Logística Norte".into(),
            business_id: "business-1".into(),
            status: ProjectStatus::Planning,
            progress: 5,
            budget: 320000.0,
            start_date: "2023-08-15".into(),
            end_date: "2024-02-28".into(),
            manager: "Eduardo Torres".into(),
            team: 7,
            description: "Implementation of automated systems in the main warehouse".into(),
        },
    ]
}
