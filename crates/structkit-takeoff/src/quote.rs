//! Hand-off to quote generation.
//!
//! Quoting itself lives outside this workspace. It receives the derived line
//! items, the grand total and a copy of the model they were derived from.

use serde::{Deserialize, Serialize};

use structkit_designer::PlannerConfig;

use crate::line_item::{BillOfMaterials, MaterialLineItem};
use crate::price_book::PriceBook;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialsOutput {
    pub line_items: Vec<MaterialLineItem>,
    pub total_cost: f64,
    pub config: PlannerConfig,
}

impl MaterialsOutput {
    pub fn new(config: &PlannerConfig, bill: BillOfMaterials) -> Self {
        let total_cost = bill.total();
        Self {
            line_items: bill.line_items,
            total_cost,
            config: config.clone(),
        }
    }

    /// Runs the take-off and packages the result.
    pub fn from_config(config: &PlannerConfig, book: &PriceBook) -> Self {
        Self::new(config, crate::calculate(config, book))
    }
}

/// Consumer of a materials output, e.g. a CRM quote builder.
pub trait QuoteGenerator {
    type Quote;
    type Error;

    fn generate(&self, materials: &MaterialsOutput) -> Result<Self::Quote, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Markup(f64);

    impl QuoteGenerator for Markup {
        type Quote = f64;
        type Error = String;

        fn generate(&self, materials: &MaterialsOutput) -> Result<f64, String> {
            if materials.line_items.is_empty() {
                return Err("nothing to quote".to_string());
            }
            Ok((materials.total_cost * self.0 * 100.0).round() / 100.0)
        }
    }

    #[test]
    fn test_output_carries_total_and_config() {
        let config = PlannerConfig::default();
        let output = MaterialsOutput::from_config(&config, &PriceBook::default());
        let bill = crate::calculate(&config, &PriceBook::default());
        assert_eq!(output.total_cost, bill.total());
        assert_eq!(output.config, config);
        assert_eq!(output.line_items.len(), bill.len());
    }

    #[test]
    fn test_generator_consumes_output() {
        let output = MaterialsOutput::from_config(&PlannerConfig::default(), &PriceBook::default());
        let quote = Markup(1.2).generate(&output).unwrap();
        assert!(quote > output.total_cost);

        let mut empty = output.clone();
        empty.line_items.clear();
        assert!(Markup(1.2).generate(&empty).is_err());
    }
}
