use crate::error::SourceError;
use crate::models::{BagCatalog, BagType, OrderStatus, PendingOrder};
use crate::source::OrderLocationSource;

/// Source backed by orders held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    orders: Vec<(OrderStatus, PendingOrder)>,
    catalog: BagCatalog,
}

impl InMemorySource {
    /// Builder-style variant of [`InMemorySource::add_bag_type`]
    pub fn with_bag_type(mut self, bag_type: BagType) -> Self {
        self.add_bag_type(bag_type);
        self
    }

    /// Builder-style variant of [`InMemorySource::add_order`]
    pub fn with_order(mut self, status: OrderStatus, order: PendingOrder) -> Self {
        self.add_order(status, order);
        self
    }

    pub fn add_bag_type(&mut self, bag_type: BagType) {
        self.catalog.insert(bag_type);
    }

    pub fn add_order(&mut self, status: OrderStatus, order: PendingOrder) {
        self.orders.push((status, order));
    }
}

impl OrderLocationSource for InMemorySource {
    fn undelivered_orders(&self) -> Result<Vec<PendingOrder>, SourceError> {
        Ok(self
            .orders
            .iter()
            .filter(|(status, _)| status.is_pending_delivery())
            .map(|(_, order)| order.clone())
            .collect())
    }

    fn bag_catalog(&self) -> Result<BagCatalog, SourceError> {
        Ok(self.catalog.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    #[test]
    fn test_only_paid_orders_are_returned() {
        let at = Coordinates::new(50.0, 30.0);
        let source = InMemorySource::default()
            .with_bag_type(BagType::new(1, "Small", 20))
            .with_order(OrderStatus::Paid, PendingOrder::new(1, at))
            .with_order(OrderStatus::New, PendingOrder::new(2, at))
            .with_order(OrderStatus::Delivered, PendingOrder::new(3, at))
            .with_order(OrderStatus::Paid, PendingOrder::new(4, at));

        let ids: Vec<u64> = source
            .undelivered_orders()
            .unwrap()
            .iter()
            .map(|o| o.id)
            .collect();

        assert_eq!(ids, vec![1, 4]);
        assert_eq!(source.bag_catalog().unwrap().capacity_of(1), Some(20));
    }
}
