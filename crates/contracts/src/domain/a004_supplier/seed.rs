use super::aggregate::{Supplier, SupplierStatus};

pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: "SUP-001".into(),
            name: "Aceros Industriales S.A.".into(),
            category: "Raw Materials".into(),
            rating: 4,
            status: SupplierStatus::Active,
            contact: "Juan Pérez".into(),
            email: "jperez@acerosindustriales.com".into(),
            phone: "+52 55 1234 5678".into(),
            address: "Av. Industrial 123, Ciudad de México".into(),
            total_orders: 28,
            last_order: Some("2023-06-15".into()),
            payment_terms: "Net 30".into(),
        },
        Supplier {
            id: "SUP-002".into(),
            name: "Transportes Logísticos".into(),
            category: "Transportation".into(),
            rating: 3,
            status: SupplierStatus::Active,
            contact: "María González".into(),
            email: "mgonzalez@translog.com".into(),
            phone: "+52 55 8765 4321".into(),
            address: "Calle Transporte 456, Guadalajara".into(),
            total_orders: 15,
            last_order: Some("2023-06-10".into()),
            payment_terms: "Net 15".into(),
        },
        Supplier {
            id: "SUP-003".into(),
            name: "Sistemas Integrados S.A.".into(),
            category: "Technology".into(),
            rating: 5,
            status: SupplierStatus::Active,
            contact: "Roberto Sánchez".into(),
            email: "rsanchez@sistemasint.com".into(),
            phone: "+52 55 2468 1357".into(),
            address: "Av. Tecnología 789, Monterrey".into(),
            total_orders: 12,
            last_order: Some("2023-06-18".into()),
            payment_terms: "Net 45".into(),
        },
        Supplier {
            id: "SUP-004".into(),
            name: "Constructora Moderna".into(),
            category: "Construction".into(),
            rating: 4,
            status: SupplierStatus::Inactive,
            contact: "Carlos Ramírez".into(),
            email: "cramirez@constructmod.com".into(),
            phone: "+52 55 1357 2468".into(),
            address: "Calle Construcción 321, Puebla".into(),
            total_orders: 8,
            last_order: Some("2023-05-25".into()),
            payment_terms: "Net 30".into(),
        },
        Supplier {
            id: "SUP-005".into(),
            name: "Consultores Logísticos".into(),
            category: "Consulting".into(),
            rating: 2,
            status: SupplierStatus::Blacklisted,
            contact: "Ana Martínez".into(),
            email: "amartinez@consultlog.com".into(),
            phone: "+52 55 9876 5432".into(),
            address: "Av. Consultoría 654, Querétaro".into(),
            total_orders: 3,
            last_order: Some("2023-04-12".into()),
            payment_terms: "Advance Payment".into(),
        },
        Supplier {
            id: "SUP-006".into(),
            name: "Software Solutions Inc.".into(),
            category: "Technology".into(),
            rating: 4,
            status: SupplierStatus::Pending,
            contact: "John Smith".into(),
            email: "jsmith@softwaresol.com".into(),
            phone: "+1 555 123 4567".into(),
            address: "Tech Avenue 987, San Francisco, CA".into(),
            total_orders: 0,
            last_order: None,
            payment_terms: "Net 30".into(),
        },
    ]
}
