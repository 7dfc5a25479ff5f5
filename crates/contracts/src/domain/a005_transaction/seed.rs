use super::aggregate::{Transaction, TransactionStatus, TransactionType};

pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "TRX-001".into(),
            date: "2023-06-15".into(),
            description: "Client Payment - Project #1234".into(),
            kind: TransactionType::Income,
            amount: 45000.0,
            currency: "USD".into(),
            status: TransactionStatus::Completed,
            reference: "INV-2023-042".into(),
            account: "Accounts Receivable".into(),
            project: "Warehouse Expansion".into(),
            business: "Logística Norte".into(),
            business_id: "business-1".into(),
        },
        Transaction {
            id: "TRX-002".into(),
            date: "2023-06-14".into(),
            description: "Equipment Purchase".into(),
            kind: TransactionType::Expense,
            amount: 12500.0,
            currency: "USD".into(),
            status: TransactionStatus::Completed,
            reference: "PO-2023-001".into(),
            account: "Equipment Expenses".into(),
            project: "Fleet Modernization".into(),
            business: "Transportes Rápidos".into(),
            business_id: "business-3".into(),
        },
        Transaction {
            id: "TRX-003".into(),
            date: "2023-06-12".into(),
            description: "Warehouse to Distribution Center".into(),
            kind: TransactionType::Transfer,
            amount: 8000.0,
            currency: "USD".into(),
            status: TransactionStatus::Pending,
            reference: "TRF-2023-015".into(),
            account: "Internal Transfers".into(),
            project: "Supply Chain Optimization".into(),
            business: "Logística Norte".into(),
            business_id: "business-1".into(),
        },
        Transaction {
            id: "TRX-004".into(),
            date: "2023-06-10".into(),
            description: "Monthly Rent".into(),
            kind: TransactionType::Expense,
            amount: 5500.0,
            currency: "USD".into(),
            status: TransactionStatus::Completed,
            reference: "RENT-2023-06".into(),
            account: "Rent Expenses".into(),
            project: String::new(),
            business: "Logística Sur".into(),
            business_id: "business-2".into(),
        },
        Transaction {
            id: "TRX-005".into(),
            date: "2023-06-08".into(),
            description: "Client Payment - Project #1235".into(),
            kind: TransactionType::Income,
            amount: 28000.0,
            currency: "USD".into(),
            status: TransactionStatus::Pending,
            reference: "INV-2023-043".into(),
            account: "Accounts Receivable".into(),
            project: "Inventory System Upgrade".into(),
            business: "Logística Norte".into(),
            business_id: "business-1".into(),
        },
        Transaction {
            id: "TRX-006".into(),
            date: "2023-06-05".into(),
            description: "Inventory Adjustment".into(),
            kind: TransactionType::Adjustment,
            amount: 3200.0,
            currency: "USD".into(),
            status: TransactionStatus::Completed,
            reference: "ADJ-2023-008".into(),
            account: "Inventory Adjustments".into(),
            project: String::new(),
            business: "Logística Sur".into(),
            business_id: "business-2".into(),
        },
        Transaction {
            id: "TRX-007".into(),
            date: "2023-06-03".into(),
            description: "Supplier Payment".into(),
            kind: TransactionType::Expense,
            amount: 15800.0,
            currency: "USD".into(),
            status: TransactionStatus::Reconciled,
            reference: "PAY-2023-025".into(),
            account: "Accounts Payable".into(),
            project: "New Distribution Center".into(),
            business: "Logística Sur".into(),
            business_id: "business-2".into(),
        },
    ]
}
