// Models module - exports all model types

mod bag;
mod cluster;
mod coordinates;
mod location;
mod order;

// Re-export model types
pub use self::bag::{BagCatalog, BagType};
pub use self::cluster::{Cluster, ClusterParams, GroupedOrders, Seeding};
pub use self::coordinates::{Coordinates, ParseCoordinatesError};
pub use self::location::Location;
pub use self::order::{OrderStatus, PendingOrder};

// Common type aliases for improved code readability
pub type OrderId = u64;
pub type BagTypeId = u32;
pub type Litres = u64;
