//! # Store
//!
//! The single owner of the store's collections and the active cart.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Collection   Insert              Update            Delete              │
//! │  ──────────   ──────              ──────            ──────              │
//! │  products     add_product         update_product    delete_product      │
//! │  sales        add_sale            (immutable)       (never)             │
//! │  purchases    add_purchase        (immutable)       (never)             │
//! │  suppliers    add_supplier        -                 -                   │
//! │  customers    add_customer        -                 -                   │
//! │  cart         add_to_cart         set_cart_quantity remove_from_cart    │
//! │                                                     clear_cart          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation either fails without touching state or installs a fresh
//! snapshot of the collection it changed. Nothing else is copied.

use std::sync::Arc;

use tracing::debug;

use shopdesk_core::validation::{
    validate_customer, validate_id, validate_product, validate_supplier,
};
use shopdesk_core::{
    Cart, CartLine, CoreError, CoreResult, Customer, Page, Product, ProductPatch, Purchase, Sale,
    Supplier,
};

/// Entities kept in an id-unique collection.
pub trait Identified: Clone {
    /// Name used in `NotFound` / `DuplicateId` errors.
    const ENTITY: &'static str;

    fn id(&self) -> &str;
}

impl Identified for Product {
    const ENTITY: &'static str = "Product";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Sale {
    const ENTITY: &'static str = "Sale";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Purchase {
    const ENTITY: &'static str = "Purchase";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Supplier {
    const ENTITY: &'static str = "Supplier";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Customer {
    const ENTITY: &'static str = "Customer";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Builds the next snapshot of `collection` with `item` appended.
fn appended<T: Identified>(collection: &[T], item: T) -> CoreResult<Arc<Vec<T>>> {
    if collection.iter().any(|existing| existing.id() == item.id()) {
        return Err(CoreError::duplicate(T::ENTITY, item.id()));
    }

    let mut next = Vec::with_capacity(collection.len() + 1);
    next.extend_from_slice(collection);
    next.push(item);
    Ok(Arc::new(next))
}

fn position<T: Identified>(collection: &[T], id: &str) -> CoreResult<usize> {
    collection
        .iter()
        .position(|entry| entry.id() == id)
        .ok_or_else(|| CoreError::not_found(T::ENTITY, id))
}

/// In-memory state for one store.
///
/// ## Usage
/// ```rust
/// use shopdesk_core::Product;
/// use shopdesk_store::Store;
///
/// let mut store = Store::new();
/// store.add_product(Product::new("1", "Hair Towel", 11500, 100, "Cloth")).unwrap();
///
/// let before = store.products();
/// store.delete_product("1").unwrap();
///
/// assert_eq!(before.len(), 1);          // old snapshot is untouched
/// assert!(store.products().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Store {
    current_page: Page,
    pub(crate) products: Arc<Vec<Product>>,
    pub(crate) sales: Arc<Vec<Sale>>,
    pub(crate) purchases: Arc<Vec<Purchase>>,
    pub(crate) suppliers: Arc<Vec<Supplier>>,
    pub(crate) customers: Arc<Vec<Customer>>,
    pub(crate) cart: Arc<Cart>,
}

impl Store {
    /// Creates an empty store showing the dashboard.
    pub fn new() -> Self {
        Store::default()
    }

    /// Installs prepared collections without validation (seed data).
    pub(crate) fn from_collections(
        products: Vec<Product>,
        sales: Vec<Sale>,
        purchases: Vec<Purchase>,
        suppliers: Vec<Supplier>,
        customers: Vec<Customer>,
    ) -> Self {
        Store {
            current_page: Page::default(),
            products: Arc::new(products),
            sales: Arc::new(sales),
            purchases: Arc::new(purchases),
            suppliers: Arc::new(suppliers),
            customers: Arc::new(customers),
            cart: Arc::new(Cart::new()),
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn set_current_page(&mut self, page: Page) {
        debug!(%page, "set_current_page");
        self.current_page = page;
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Current product snapshot.
    pub fn products(&self) -> Arc<Vec<Product>> {
        Arc::clone(&self.products)
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Adds a product with a caller-supplied id.
    pub fn add_product(&mut self, product: Product) -> CoreResult<()> {
        debug!(id = %product.id, name = %product.name, "add_product");
        validate_product(&product)?;
        self.products = appended(&self.products, product)?;
        Ok(())
    }

    /// Merges `patch` into the product and returns the updated record.
    ///
    /// The patched product is validated before it replaces the old one.
    /// Cart lines and historical sales keep their own copies.
    pub fn update_product(&mut self, id: &str, patch: ProductPatch) -> CoreResult<Product> {
        debug!(id = %id, ?patch, "update_product");
        let index = position(&self.products, id)?;

        let mut updated = self.products[index].clone();
        updated.apply(patch);
        validate_product(&updated)?;

        let mut next = self.products.as_ref().clone();
        next[index] = updated.clone();
        self.products = Arc::new(next);
        Ok(updated)
    }

    /// Removes the product and returns it.
    ///
    /// Sales, purchases and cart lines that mention the product are left
    /// as they are.
    pub fn delete_product(&mut self, id: &str) -> CoreResult<Product> {
        debug!(id = %id, "delete_product");
        let index = position(&self.products, id)?;

        let mut next = self.products.as_ref().clone();
        let removed = next.remove(index);
        self.products = Arc::new(next);
        Ok(removed)
    }

    // =========================================================================
    // Sales & Purchases (append-only)
    // =========================================================================

    pub fn sales(&self) -> Arc<Vec<Sale>> {
        Arc::clone(&self.sales)
    }

    /// Appends a fully formed sale. Totals and stock are not checked.
    pub fn add_sale(&mut self, sale: Sale) -> CoreResult<()> {
        debug!(id = %sale.id, total = %sale.total(), "add_sale");
        validate_id(&sale.id)?;
        self.sales = appended(&self.sales, sale)?;
        Ok(())
    }

    pub fn purchases(&self) -> Arc<Vec<Purchase>> {
        Arc::clone(&self.purchases)
    }

    /// Appends a fully formed purchase. Stock is not incremented.
    pub fn add_purchase(&mut self, purchase: Purchase) -> CoreResult<()> {
        debug!(id = %purchase.id, total = %purchase.total(), "add_purchase");
        validate_id(&purchase.id)?;
        self.purchases = appended(&self.purchases, purchase)?;
        Ok(())
    }

    // =========================================================================
    // Suppliers & Customers
    // =========================================================================

    pub fn suppliers(&self) -> Arc<Vec<Supplier>> {
        Arc::clone(&self.suppliers)
    }

    pub fn supplier(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }

    pub fn add_supplier(&mut self, supplier: Supplier) -> CoreResult<()> {
        debug!(id = %supplier.id, name = %supplier.name, "add_supplier");
        validate_supplier(&supplier)?;
        self.suppliers = appended(&self.suppliers, supplier)?;
        Ok(())
    }

    pub fn customers(&self) -> Arc<Vec<Customer>> {
        Arc::clone(&self.customers)
    }

    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn add_customer(&mut self, customer: Customer) -> CoreResult<()> {
        debug!(id = %customer.id, name = %customer.name, "add_customer");
        validate_customer(&customer)?;
        self.customers = appended(&self.customers, customer)?;
        Ok(())
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Current cart snapshot.
    pub fn cart(&self) -> Arc<Cart> {
        Arc::clone(&self.cart)
    }

    /// Runs `f` on a copy of the cart and installs it only if `f` succeeds.
    fn update_cart<R>(&mut self, f: impl FnOnce(&mut Cart) -> CoreResult<R>) -> CoreResult<R> {
        let mut next = self.cart.as_ref().clone();
        let result = f(&mut next)?;
        self.cart = Arc::new(next);
        Ok(result)
    }

    /// Adds `quantity` of `product`, merging with an existing line.
    pub fn add_to_cart(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        debug!(product_id = %product.id, quantity = %quantity, "add_to_cart");
        self.update_cart(|cart| cart.add(product, quantity))
    }

    /// Sets the line for `product_id` to exactly `quantity`.
    ///
    /// Zero or less removes the line. A positive quantity needs the product
    /// in the catalog, since the line is rebuilt from it.
    pub fn set_cart_quantity(&mut self, product_id: &str, quantity: i64) -> CoreResult<()> {
        debug!(product_id = %product_id, quantity = %quantity, "set_cart_quantity");

        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return Ok(());
        }

        let product = self
            .product(product_id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(Product::ENTITY, product_id))?;

        self.update_cart(|cart| cart.set_quantity(&product, quantity))
    }

    /// Removes the line for `product_id` if present.
    ///
    /// Leaves the snapshot untouched when there is nothing to remove.
    pub fn remove_from_cart(&mut self, product_id: &str) -> Option<CartLine> {
        debug!(product_id = %product_id, "remove_from_cart");
        self.cart.line(product_id)?;
        self.update_cart(|cart| Ok(cart.remove(product_id))).ok().flatten()
    }

    pub fn clear_cart(&mut self) {
        debug!(lines = self.cart.item_count(), "clear_cart");
        self.cart = Arc::new(Cart::new());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
