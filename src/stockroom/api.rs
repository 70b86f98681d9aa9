//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It owns the [`Inventory`] plus the file it is persisted to.
//!
//! - Queries dispatch straight to `commands::*` and never touch the disk.
//! - Mutations dispatch, and on success write the inventory back to the data
//!   file. A failed command leaves both memory and file unchanged.
//!
//! Business logic belongs in `commands/*.rs`; presentation belongs to the
//! client.

use crate::commands;
use crate::error::Result;
use crate::model::Product;
use crate::store::Inventory;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub struct InventoryApi {
    inventory: Inventory,
    paths: StockroomPaths,
}

impl InventoryApi {
    pub fn new(inventory: Inventory, paths: StockroomPaths) -> Self {
        Self { inventory, paths }
    }

    /// Loads the data file named in `paths`. A missing file is an empty
    /// inventory, not an error.
    pub fn open(paths: StockroomPaths) -> Result<Self> {
        let mut inventory = Inventory::new();
        if paths.data_file.exists() {
            let report = inventory.load(&paths.data_file)?;
            if report.skipped > 0 {
                warn!(
                    path = %paths.data_file.display(),
                    skipped = report.skipped,
                    "Skipped malformed rows in inventory file"
                );
            }
        } else {
            debug!(path = %paths.data_file.display(), "No inventory file yet, starting empty");
        }
        Ok(Self::new(inventory, paths))
    }

    pub fn add_product(&mut self, product: Product) -> Result<commands::CmdResult> {
        let result = commands::create::run(&mut self.inventory, product)?;
        self.persist()?;
        Ok(result)
    }

    pub fn view_products(&self, ids: &[u32]) -> Result<commands::CmdResult> {
        commands::view::run(&self.inventory, ids)
    }

    pub fn update_product(
        &mut self,
        update: &commands::ProductUpdate,
    ) -> Result<commands::CmdResult> {
        let result = commands::update::run(&mut self.inventory, update)?;
        if !result.affected_products.is_empty() {
            self.persist()?;
        }
        Ok(result)
    }

    pub fn delete_products(&mut self, ids: &[u32]) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.inventory, ids)?;
        self.persist()?;
        Ok(result)
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.inventory)
    }

    pub fn search_by_name(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::by_name(&self.inventory, term)
    }

    pub fn search_by_category(&self, category: &str) -> Result<commands::CmdResult> {
        commands::search::by_category(&self.inventory, category)
    }

    pub fn low_stock(&self, threshold: u32) -> Result<commands::CmdResult> {
        commands::low_stock::run(&self.inventory, threshold)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.inventory)
    }

    pub fn export(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.inventory, path)
    }

    /// Replaces the inventory with `path`'s contents and persists the result.
    pub fn import(&mut self, path: &Path) -> Result<commands::CmdResult> {
        let result = commands::import::run(&mut self.inventory, path)?;
        self.persist()?;
        Ok(result)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn paths(&self) -> &StockroomPaths {
        &self.paths
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.paths.data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        self.inventory.save(&self.paths.data_file)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{
    CmdMessage, CmdResult, InventoryStats, MessageLevel, ProductUpdate, StockroomPaths,
};
