//! # Supplier & Customer Commands
//!
//! The "New Supplier" and "Supplier List" pages, plus the customer list the
//! terminal's customer picker reads.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use shopdesk_core::{Customer, Supplier};

use crate::error::ApiError;
use crate::state::StoreState;

fn id_or_generated(id: Option<String>) -> String {
    id.filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Fields from the "New Supplier" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewSupplier {
    pub id: Option<String>,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub address: String,
    pub balance_cents: i64,
}

impl From<NewSupplier> for Supplier {
    fn from(input: NewSupplier) -> Self {
        Supplier {
            id: id_or_generated(input.id),
            name: input.name,
            contact: input.contact,
            email: input.email,
            address: input.address,
            balance_cents: input.balance_cents,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewCustomer {
    pub id: Option<String>,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub due_amount_cents: i64,
}

impl From<NewCustomer> for Customer {
    fn from(input: NewCustomer) -> Self {
        Customer {
            id: id_or_generated(input.id),
            name: input.name,
            phone: input.phone,
            email: input.email,
            address: input.address,
            due_amount_cents: input.due_amount_cents,
        }
    }
}

pub fn add_supplier(store: &StoreState, input: NewSupplier) -> Result<Supplier, ApiError> {
    debug!(name = %input.name, "add_supplier command");
    let supplier = Supplier::from(input);
    store.with_store_mut(|s| s.add_supplier(supplier.clone()))?;
    Ok(supplier)
}

pub fn list_suppliers(store: &StoreState) -> Vec<Supplier> {
    debug!("list_suppliers command");
    store.with_store(|s| s.suppliers().to_vec())
}

pub fn add_customer(store: &StoreState, input: NewCustomer) -> Result<Customer, ApiError> {
    debug!(name = %input.name, "add_customer command");
    let customer = Customer::from(input);
    store.with_store_mut(|s| s.add_customer(customer.clone()))?;
    Ok(customer)
}

pub fn list_customers(store: &StoreState) -> Vec<Customer> {
    debug!("list_customers command");
    store.with_store(|s| s.customers().to_vec())
}
