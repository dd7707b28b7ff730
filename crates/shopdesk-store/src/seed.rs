//! # Demo Data
//!
//! The data a fresh dashboard starts with.
//!
//! ## Contents
//! - 6 products across Cloth, Gadgets, Bag, Beverages and Bakery, each
//!   with an EAN-13 barcode
//! - 1 completed sale (John Doe, 2 × Hair Towel)
//! - 1 supplier, 2 customers
//! - No purchases

use chrono::NaiveDate;

use shopdesk_core::{Customer, Product, Sale, SaleItem, SaleStatus, Supplier};

use crate::store::Store;

/// (id, name, price in cents, stock, category, barcode)
const PRODUCTS: &[(&str, &str, i64, i64, &str, &str)] = &[
    ("1", "Hair Towel", 11500, 100, "Cloth", "1234567890123"),
    ("2", "Kitchen Faucet", 75000, 50, "Gadgets", "2345678901234"),
    ("3", "Luxury wallet", 24500, 30, "Bag", "3456789012345"),
    ("4", "Gadgets", 80000, 75, "Gadgets", "4567890123456"),
    ("5", "Coca Cola", 250, 200, "Beverages", "5678901234567"),
    ("6", "Bread", 120, 150, "Bakery", "6789012345678"),
];

fn demo_products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|&(id, name, price_cents, stock, category, barcode)| {
            Product::new(id, name, price_cents, stock, category).with_barcode(barcode)
        })
        .collect()
}

fn demo_sales(products: &[Product]) -> Vec<Sale> {
    let items: Vec<SaleItem> = products
        .iter()
        .filter(|p| p.id == "1")
        .map(|p| SaleItem::snapshot(p, 2))
        .collect();
    let total_cents = items.iter().map(|i| i.total_cents).sum::<i64>();

    vec![Sale {
        id: "1".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap_or_default(),
        customer: "John Doe".to_string(),
        items,
        total_cents,
        status: SaleStatus::Completed,
    }]
}

fn demo_suppliers() -> Vec<Supplier> {
    vec![Supplier {
        id: "1".to_string(),
        name: "ABC Distributors".to_string(),
        contact: "+1234567890".to_string(),
        email: "abc@dist.com".to_string(),
        address: "123 Main St".to_string(),
        balance_cents: 0,
    }]
}

fn demo_customers() -> Vec<Customer> {
    let customer = |id: &str, name: &str, phone: &str, email: &str, address: &str| Customer {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        address: address.to_string(),
        due_amount_cents: 0,
    };

    vec![
        customer("1", "John Doe", "+1234567890", "john@email.com", "456 Oak St"),
        customer("2", "Jane Smith", "+1234567891", "jane@email.com", "789 Pine St"),
    ]
}

impl Store {
    /// A store pre-filled with the demo catalog, on the dashboard page.
    pub fn with_demo_data() -> Self {
        let products = demo_products();
        let sales = demo_sales(&products);
        Store::from_collections(products, sales, Vec::new(), demo_suppliers(), demo_customers())
    }
}
