use crate::error::{InventoryError, Result};
use serde::Serialize;
use std::fmt;

/// One product entry.
///
/// The `id` is owned by the [`Inventory`](crate::store::Inventory) holding the
/// product: it is assigned on creation and never changed afterwards, so it is
/// readable from outside the crate but not settable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub(crate) id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub description: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            category: category.into(),
            price,
            quantity,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Unit price times quantity, unrounded.
    pub fn total_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Strictly below the threshold; a quantity equal to it is not low.
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.quantity < threshold
    }

    /// Checks the fields a user fills in by hand.
    ///
    /// The store itself never calls this; callers that take free-form input
    /// should run it before `create` or `update`.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push("name cannot be empty");
        }
        if self.category.trim().is_empty() {
            problems.push("category cannot be empty");
        }
        if !self.price.is_finite() || self.price < 0.0 {
            problems.push("price must be a non-negative number");
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(InventoryError::Invalid(problems.join(", ")))
        }
    }

    /// Copies every user-editable field from `other`, leaving `id` alone.
    pub(crate) fn overwrite_fields(&mut self, other: &Product) {
        self.name = other.name.clone();
        self.category = other.category.clone();
        self.price = other.price;
        self.quantity = other.quantity;
        self.description = other.description.clone();
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Category: {}, Price: ${:.2}, Quantity: {}",
            self.id, self.name, self.category, self.price, self.quantity
        )
    }
}
