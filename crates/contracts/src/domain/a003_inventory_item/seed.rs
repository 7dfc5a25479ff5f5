use super::aggregate::{InventoryItem, StockStatus};

pub fn inventory_items() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: "INV-001".into(),
            code: "RM-1001".into(),
            name: "Steel Beams".into(),
            category: "Raw Materials".into(),
            stock: 250,
            unit: "tons".into(),
            value: 125000.0,
            status: StockStatus::InStock,
            location: "Warehouse A - Section 3".into(),
            min_stock: 100,
            max_stock: 300,
            last_movement: "2023-06-15".into(),
            business_id: "business-1".into(),
        },
        InventoryItem {
            id: "INV-002".into(),
            code: "EQ-2034".into(),
            name: "Forklift".into(),
            category: "Equipment".into(),
            stock: 5,
            unit: "units".into(),
            value: 175000.0,
            status: StockStatus::InStock,
            location: "Warehouse B - Section 1".into(),
            min_stock: 2,
            max_stock: 8,
            last_movement: "2023-05-20".into(),
            business_id: "business-1".into(),
        },
        InventoryItem {
            id: "INV-003".into(),
            code: "SP-3045".into(),
            name: "Packaging Materials".into(),
            category: "Supplies".into(),
            stock: 1200,
            unit: "boxes".into(),
            value: 24000.0,
            status: StockStatus::LowStock,
            location: "Warehouse A - Section 5".into(),
            min_stock: 1500,
            max_stock: 5000,
            last_movement: "2023-06-18".into(),
            business_id: "business-1".into(),
        },
        InventoryItem {
            id: "INV-004".into(),
            code: "RM-1078".into(),
            name: "Aluminum Sheets".into(),
            category: "Raw Materials".into(),
            stock: 0,
            unit: "sheets".into(),
            value: 0.0,
            status: StockStatus::OutOfStock,
            location: "Warehouse A - Section 2".into(),
            min_stock: 50,
            max_stock: 200,
            last_movement: "2023-06-01".into(),
            business_id: "business-2".into(),
        },
        InventoryItem {
            id: "INV-005".into(),
            code: "EQ-2089".into(),
            name: "Conveyor Belt".into(),
            category: "Equipment".into(),
            stock: 12,
            unit: "units".into(),
            value: 36000.0,
            status: StockStatus::InStock,
            location: "Warehouse C - Section 4".into(),
            min_stock: 5,
            max_stock: 15,
            last_movement: "2023-06-10".into(),
            business_id: "business-2".into(),
        },
        InventoryItem {
            id: "INV-006".into(),
            code: "SP-3102".into(),
            name: "Safety Helmets".into(),
            category: "Supplies".into(),
            stock: 350,
            unit: "units".into(),
            value: 10500.0,
            status: StockStatus::OverStock,
            location: "Warehouse B - Section 3".into(),
            min_stock: 100,
            max_stock: 300,
            last_movement: "2023-06-12".into(),
            business_id: "business-3".into(),
        },
        InventoryItem {
            id: "INV-007".into(),
            code: "RM-1125".into(),
            name: "Concrete Mix".into(),
            category: "Raw Materials".into(),
            stock: 180,
            unit: "bags".into(),
            value: 9000.0,
            status: StockStatus::InStock,
            location: "Warehouse A - Section 1".into(),
            min_stock: 100,
            max_stock: 500,
            last_movement: "2023-06-20".into(),
            business_id: "business-3".into(),
        },
    ]
}
