//! Read-only access to the orders awaiting delivery.
//!
//! The clustering core consumes a snapshot through [`OrderLocationSource`]
//! and never writes back.

mod memory;
mod snapshot;

pub use self::memory::InMemorySource;
pub use self::snapshot::{JsonSnapshotSource, OrderRecord, Snapshot};

use crate::error::SourceError;
use crate::models::{BagCatalog, PendingOrder};

/// Supplier of paid, undelivered orders and the bag-type catalog
pub trait OrderLocationSource {
    /// Every paid, undelivered order that has coordinates
    fn undelivered_orders(&self) -> Result<Vec<PendingOrder>, SourceError>;

    /// The current bag-type catalog
    fn bag_catalog(&self) -> Result<BagCatalog, SourceError>;
}

impl<S: OrderLocationSource + ?Sized> OrderLocationSource for &S {
    fn undelivered_orders(&self) -> Result<Vec<PendingOrder>, SourceError> {
        (**self).undelivered_orders()
    }

    fn bag_catalog(&self) -> Result<BagCatalog, SourceError> {
        (**self).bag_catalog()
    }
}
