use super::aggregate::{PurchaseOrder, PurchaseOrderStatus};

pub fn purchase_orders() -> Vec<PurchaseOrder> {
    vec![
        PurchaseOrder {
            id: "PO-2023-001".into(),
            reference: "REQ-2023-042".into(),
            supplier: "Aceros Industriales S.A.".into(),
            date: "2023-06-15".into(),
            delivery_date: "2023-07-05".into(),
            status: PurchaseOrderStatus::Approved,
            total: 45000.0,
            currency: "USD".into(),
            items: 12,
            project: "Warehouse Expansion".into(),
            requestor: "Carlos Mendoza".into(),
            business_id: "business-1".into(),
        },
        PurchaseOrder {
            id: "PO-2023-002".into(),
            reference: "REQ-2023-043".into(),
            supplier: "Transportes Logísticos".into(),
            date: "2023-06-16".into(),
            delivery_date: "2023-06-30".into(),
            status: PurchaseOrderStatus::Received,
            total: 12500.0,
            currency: "USD".into(),
            items: 3,
            project: "Fleet Modernization".into(),
            requestor: "Ana Gutiérrez".into(),
            business_id: "business-3".into(),
        },
        PurchaseOrder {
            id: "PO-2023-003".into(),
            reference: "REQ-2023-044".into(),
            supplier: "Sistemas Integrados S.A.".into(),
            date: "2023-06-18".into(),
            delivery_date: "2023-07-10".into(),
            status: PurchaseOrderStatus::Pending,
            total: 28000.0,
            currency: "USD".into(),
            items: 5,
            project: "Inventory System Upgrade".into(),
            requestor: "Roberto Sánchez".into(),
            business_id: "business-1".into(),
        },
        PurchaseOrder {
            id: "PO-2023-004".into(),
            reference: "REQ-2023-045".into(),
            supplier: "Constructora Moderna".into(),
            date: "2023-06-20".into(),
            delivery_date: "2023-08-15".into(),
            status: PurchaseOrderStatus::Partial,
            total: 85000.0,
            currency: "USD".into(),
            items: 8,
            project: "New Distribution Center".into(),
            requestor: "María Fernández".into(),
            business_id: "business-2".into(),
        },
        PurchaseOrder {
            id: "PO-2023-005".into(),
            reference: "REQ-2023-046".into(),
            supplier: "Consultores Logísticos".into(),
            date: "2023-06-22".into(),
            delivery_date: "2023-07-15".into(),
            status: PurchaseOrderStatus::Approved,
            total: 18500.0,
            currency: "USD".into(),
            items: 2,
            project: "Supply Chain Optimization".into(),
            requestor: "Javier López".into(),
            business_id: "business-3".into(),
        },
        PurchaseOrder {
            id: "PO-2023-006".into(),
            reference: "REQ-2023-047".into(),
            supplier: "Software Solutions Inc.".into(),
            date: "2023-06-25".into(),
            delivery_date: "2023-08-01".into(),
            status: PurchaseOrderStatus::Cancelled,
            total: 32000.0,
            currency: "USD".into(),
            items: 1,
            project: "Logistics Software Integration".into(),
            requestor: "Patricia Ramírez".into(),
            business_id: "business-2".into(),
        },
    ]
}
