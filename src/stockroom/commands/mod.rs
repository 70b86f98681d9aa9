use crate::config::StockroomConfig;
use crate::model::Product;
use crate::store::LoadReport;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod low_stock;
pub mod search;
pub mod stats;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct StockroomPaths {
    pub home: PathBuf,
    pub data_file: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Aggregate figures over the whole inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryStats {
    pub count: usize,
    pub total_value: f64,
    pub value_by_category: BTreeMap<String, f64>,
    pub count_by_category: BTreeMap<String, usize>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listed_products: Vec<Product>,
    pub stats: Option<InventoryStats>,
    pub load_report: Option<LoadReport>,
    pub config: Option<StockroomConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_stats(mut self, stats: InventoryStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_load_report(mut self, report: LoadReport) -> Self {
        self.load_report = Some(report);
        self
    }

    pub fn with_config(mut self, config: StockroomConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Field changes for one product. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub id: u32,
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<u32>,
    pub description: Option<String>,
}

impl ProductUpdate {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
            && self.description.is_none()
    }

    /// Returns `current` with the requested changes applied.
    pub fn apply_to(&self, current: &Product) -> Product {
        let mut next = current.clone();
        if let Some(name) = &self.name {
            next.name = name.clone();
        }
        if let Some(category) = &self.category {
            next.category = category.clone();
        }
        if let Some(price) = self.price {
            next.price = price;
        }
        if let Some(quantity) = self.quantity {
            next.quantity = quantity;
        }
        if let Some(description) = &self.description {
            next.description = description.clone();
        }
        next
    }
}
