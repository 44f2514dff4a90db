use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing::{debug, trace};

use structkit_designer::PlannerConfig;

use crate::line_item::BillOfMaterials;
use crate::price_book::PriceBook;

/// Hash of the serialized model and price book.
pub fn content_hash(config: &PlannerConfig, book: &PriceBook) -> u64 {
    let mut hasher = DefaultHasher::new();
    match serde_json::to_string(&(config, book)) {
        Ok(json) => json.hash(&mut hasher),
        Err(_) => format!("{:?}{:?}", config, book).hash(&mut hasher),
    }
    hasher.finish()
}

/// Keeps the last bill and recalculates only when the model or prices change.
#[derive(Debug, Default, Clone)]
pub struct TakeoffCache {
    content_hash: u64,
    bill: Option<BillOfMaterials>,
    hits: u64,
    misses: u64,
}

impl TakeoffCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn needs_update(&self, new_hash: u64) -> bool {
        self.content_hash != new_hash || self.bill.is_none()
    }

    pub fn get_or_calculate(&mut self, config: &PlannerConfig, book: &PriceBook) -> &BillOfMaterials {
        let new_hash = content_hash(config, book);
        if self.needs_update(new_hash) {
            self.misses += 1;
            debug!(hash = new_hash, "Recalculating bill of materials");
            self.content_hash = new_hash;
            self.bill = Some(crate::calculate(config, book));
        } else {
            self.hits += 1;
            trace!(hash = new_hash, "Bill of materials cache hit");
        }
        self.bill.get_or_insert_with(BillOfMaterials::default)
    }

    /// Last calculated bill, if any.
    pub fn bill(&self) -> Option<&BillOfMaterials> {
        self.bill.as_ref()
    }

    pub fn invalidate(&mut self) {
        self.bill = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use structkit_designer::{catalog, Planner, PlannerKind, RoomSpec};

    #[test]
    fn test_cache_hits_until_model_changes() {
        let mut planner = Planner::new(PlannerConfig::new(PlannerKind::Kitchen, RoomSpec::new(12.0, 10.0, 8.0)));
        planner.add_item(catalog::find("base-24").unwrap().clone(), 0.0, 0.0);
        let book = PriceBook::default();
        let mut cache = TakeoffCache::new();

        let first = cache.get_or_calculate(planner.config(), &book).clone();
        let second = cache.get_or_calculate(planner.config(), &book).clone();
        assert_eq!(first, second);
        assert_eq!((cache.hits(), cache.misses()), (1, 1));

        planner.add_item(catalog::find("base-12").unwrap().clone(), 24.0, 0.0);
        let third = cache.get_or_calculate(planner.config(), &book).clone();
        assert_ne!(first, third);
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn test_price_change_invalidates() {
        let config = PlannerConfig::default();
        let mut book = PriceBook::default();
        let mut cache = TakeoffCache::new();
        let before = cache.get_or_calculate(&config, &book).total();
        book.set_price("concrete-yd", 500.0);
        let after = cache.get_or_calculate(&config, &book).total();
        assert!(after > before);
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn test_invalidate_forces_recalculation() {
        let config = PlannerConfig::default();
        let book = PriceBook::default();
        let mut cache = TakeoffCache::new();
        cache.get_or_calculate(&config, &book);
        cache.invalidate();
        assert!(cache.bill().is_none());
        cache.get_or_calculate(&config, &book);
        assert_eq!(cache.misses(), 2);
    }
}
