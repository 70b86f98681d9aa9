//! # Storage Layer
//!
//! [`Inventory`] is the single owner of every [`Product`]. It keeps them in
//! insertion order together with the next id to hand out, and is the only
//! thing allowed to change them: callers get clones or a read-only slice.
//!
//! ## Ids
//!
//! Ids come from a counter that only moves forward. It is separate from the
//! number of products held, so deleting a product and adding a new one never
//! reuses the deleted id, and never collides with a product that survived.
//!
//! ## Persistence
//!
//! - [`csv`]: the quoted CSV dialect (writer and state-machine reader)
//! - [`fs`]: whole-file reads and atomic writes
//!
//! `save` and `load` are whole-file operations. `load` replaces the in-memory
//! contents entirely, and only after the file has been read, so a file that
//! cannot be opened leaves the inventory exactly as it was.
//!
//! Lookups are linear scans; inventories are expected to be small.

use crate::error::{InventoryError, Result};
use crate::model::Product;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::debug;

pub mod csv;
pub mod fs;

/// Outcome of [`Inventory::load`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub struct Inventory {
    products: Vec<Product>,
    next_id: u32,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// The id the next `create` will assign.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Adds a product under a freshly assigned id and returns that id.
    /// Any id already on `product` is ignored.
    ///
    /// Fails with `IdsExhausted` once the counter has no successor left, so an
    /// id is never handed out twice.
    pub fn create(&mut self, product: Product) -> Result<u32> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(InventoryError::IdsExhausted)?;

        let mut product = product;
        product.id = id;
        self.products.push(product);
        Ok(id)
    }

    pub fn read(&self, id: u32) -> Result<Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(InventoryError::NotFound(id))
    }

    /// Replaces every field except the id, keeping the product's position.
    pub fn update(&mut self, id: u32, fields: &Product) -> Result<()> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(InventoryError::NotFound(id))?;
        product.overwrite_fields(fields);
        Ok(())
    }

    pub fn delete(&mut self, id: u32) -> Result<()> {
        let pos = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(InventoryError::NotFound(id))?;
        self.products.remove(pos);
        Ok(())
    }

    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Case-sensitive substring match on the name. The empty string matches
    /// every product.
    pub fn find_by_name(&self, needle: &str) -> Vec<Product> {
        self.filtered(|p| p.name.contains(needle))
    }

    /// Exact, case-sensitive match on the category.
    pub fn find_by_category(&self, category: &str) -> Vec<Product> {
        self.filtered(|p| p.category == category)
    }

    pub fn count(&self) -> usize {
        self.products.len()
    }

    pub fn total_value(&self) -> f64 {
        self.products.iter().map(Product::total_value).sum()
    }

    pub fn low_stock(&self, threshold: u32) -> Vec<Product> {
        self.filtered(|p| p.is_low_stock(threshold))
    }

    /// Summed stock value per category, ordered by category name.
    pub fn value_by_category(&self) -> BTreeMap<String, f64> {
        let mut values = BTreeMap::new();
        for product in &self.products {
            *values.entry(product.category.clone()).or_insert(0.0) += product.total_value();
        }
        values
    }

    /// Number of products per category, ordered by category name.
    pub fn count_by_category(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for product in &self.products {
            *counts.entry(product.category.clone()).or_insert(0) += 1;
        }
        counts
    }

    fn filtered<F>(&self, pred: F) -> Vec<Product>
    where
        F: Fn(&Product) -> bool,
    {
        self.products.iter().filter(|p| pred(p)).cloned().collect()
    }

    /// Writes every product to `path` in the inventory CSV dialect.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write_atomic(path, &csv::encode(&self.products))?;
        debug!(path = %path.display(), products = self.products.len(), "Saved inventory");
        Ok(())
    }

    /// Replaces the whole inventory with the contents of `path`.
    ///
    /// Malformed rows are skipped and counted in the report. So is any row
    /// repeating an id already read from the same file, and any row whose id
    /// leaves no room for a successor.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadReport> {
        let path = path.as_ref();
        let text = fs::read_text(path)?;
        let decoded = csv::decode(&text);

        let mut products = Vec::with_capacity(decoded.products.len());
        let mut seen = HashSet::new();
        let mut next_id = 1;
        let mut skipped = decoded.skipped;

        for product in decoded.products {
            let Some(successor) = product.id.checked_add(1) else {
                skipped += 1;
                continue;
            };
            if !seen.insert(product.id) {
                skipped += 1;
                continue;
            }
            next_id = next_id.max(successor);
            products.push(product);
        }

        self.products = products;
        self.next_id = next_id;

        let report = LoadReport {
            loaded: self.products.len(),
            skipped,
        };
        debug!(
            path = %path.display(),
            loaded = report.loaded,
            skipped = report.skipped,
            next_id = self.next_id,
            "Loaded inventory"
        );
        Ok(report)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct InventoryFixture {
        pub inventory: Inventory,
    }

    impl Default for InventoryFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl InventoryFixture {
        pub fn new() -> Self {
            Self {
                inventory: Inventory::new(),
            }
        }

        pub fn with_products(mut self, count: usize) -> Self {
            for i in 0..count {
                let product = Product::new(
                    format!("Test Product {}", i + 1),
                    "General",
                    1.0 + i as f64,
                    (i as u32 + 1) * 5,
                )
                .with_description(format!("Description for product {}", i + 1));
                self.inventory
                    .create(product)
                    .expect("fixture ids fit in u32");
            }
            self
        }

        pub fn with_product(
            mut self,
            name: &str,
            category: &str,
            price: f64,
            quantity: u32,
        ) -> Self {
            self.inventory
                .create(Product::new(name, category, price, quantity))
                .expect("fixture ids fit in u32");
            self
        }
    }
}
