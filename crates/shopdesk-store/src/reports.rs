//! # Reports
//!
//! Read-only aggregates behind the Dashboard and Reports pages.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Figure              Source                                             │
//! │  ──────              ──────                                             │
//! │  total sales         Σ sale.total                                       │
//! │  avg. order value    total sales ÷ sale count (0 with no sales)         │
//! │  total purchases     Σ purchase.total                                   │
//! │  gross profit        total sales − total purchases                      │
//! │  stock value         Σ product.price × product.stock                    │
//! │  low stock           product.stock ≤ threshold                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use shopdesk_core::{Money, Product, Purchase, Sale, Supplier};

use crate::store::Store;

// =============================================================================
// Aggregates
// =============================================================================

pub fn total_sales(sales: &[Sale]) -> Money {
    sales.iter().map(Sale::total).sum()
}

pub fn total_purchases(purchases: &[Purchase]) -> Money {
    purchases.iter().map(Purchase::total).sum()
}

/// Mean sale total, rounded half away from zero to the cent. Zero when
/// there are no sales.
pub fn average_order_value(sales: &[Sale]) -> Money {
    if sales.is_empty() {
        return Money::zero();
    }

    let total = i128::from(total_sales(sales).cents());
    let count = sales.len() as i128;
    let half = count / 2;
    let average = if total >= 0 {
        (total + half) / count
    } else {
        (total - half) / count
    };
    Money::from_cents(average as i64)
}

/// Number of sales dated `day`.
pub fn sales_on(sales: &[Sale], day: NaiveDate) -> usize {
    sales.iter().filter(|s| s.date == day).count()
}

/// Retail value of everything on the shelf.
pub fn stock_value(products: &[Product]) -> Money {
    products
        .iter()
        .map(|p| p.price().multiply_quantity(p.stock))
        .sum()
}

/// Products at or below `threshold` units, in catalog order.
pub fn low_stock(products: &[Product], threshold: i64) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.stock <= threshold)
        .cloned()
        .collect()
}

pub fn category_count(products: &[Product]) -> usize {
    products
        .iter()
        .map(|p| p.category.as_str())
        .collect::<BTreeSet<_>>()
        .len()
}

pub fn supplier_balance(suppliers: &[Supplier]) -> Money {
    suppliers
        .iter()
        .map(|s| Money::from_cents(s.balance_cents))
        .sum()
}

// =============================================================================
// Summaries
// =============================================================================

/// Dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardSummary {
    pub total_sales: Money,
    pub order_count: usize,
    pub average_order_value: Money,
    pub today_order_count: usize,
    pub product_count: usize,
    pub customer_count: usize,
    pub supplier_count: usize,
    pub low_stock: Vec<Product>,
}

/// Reports page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportSummary {
    pub total_sales: Money,
    pub total_purchases: Money,
    /// May be negative.
    pub gross_profit: Money,
    pub stock_value: Money,
    pub category_count: usize,
    pub supplier_balance: Money,
    pub low_stock_count: usize,
}

impl Store {
    pub fn dashboard(&self, today: NaiveDate, low_stock_threshold: i64) -> DashboardSummary {
        DashboardSummary {
            total_sales: total_sales(&self.sales),
            order_count: self.sales.len(),
            average_order_value: average_order_value(&self.sales),
            today_order_count: sales_on(&self.sales, today),
            product_count: self.products.len(),
            customer_count: self.customers.len(),
            supplier_count: self.suppliers.len(),
            low_stock: low_stock(&self.products, low_stock_threshold),
        }
    }

    pub fn report(&self, low_stock_threshold: i64) -> ReportSummary {
        let sales = total_sales(&self.sales);
        let purchases = total_purchases(&self.purchases);

        ReportSummary {
            total_sales: sales,
            total_purchases: purchases,
            gross_profit: sales - purchases,
            stock_value: stock_value(&self.products),
            category_count: category_count(&self.products),
            supplier_balance: supplier_balance(&self.suppliers),
            low_stock_count: low_stock(&self.products, low_stock_threshold).len(),
        }
    }
}
