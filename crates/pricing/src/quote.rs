//! Sale price quotation: market rate + volumetric premium + transport + tax.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use oildesk_core::Grade;

use crate::oracle::{PriceOracle, PricePair};

/// Fixed commercial rates applied on top of the market price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    /// kg per metric tonne (mass → volume conversion numerator).
    pub mass_to_volume: f64,
    /// Premium charged per litre.
    pub premium_per_litre: f64,
    /// Transport cost per kilometre.
    pub transport_per_km: f64,
    /// Tax applied to the subtotal (e.g. 0.05 for 5% IGST).
    pub tax_rate: f64,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            mass_to_volume: 1000.0,
            premium_per_litre: 10.0,
            transport_per_km: 12.0,
            tax_rate: 0.05,
        }
    }
}

/// A quoted sale price. A snapshot, never persisted by the engine itself;
/// callers decide when to record it (the sales desk fixes it at booking).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Total price, rounded to the nearest whole currency unit.
    pub total: i64,
    /// Price per litre, rounded to two decimals. Zero for degenerate input.
    pub per_litre: f64,
}

impl Quote {
    pub fn zero() -> Self {
        Self {
            total: 0,
            per_litre: 0.0,
        }
    }
}

/// Computes sale quotes from the injected oracle and a tariff.
///
/// Re-quoting the same inputs can differ only because the oracle's
/// day-dependent baseline moved; everything else is pure arithmetic.
#[derive(Clone)]
pub struct PricingEngine {
    oracle: Arc<dyn PriceOracle>,
    tariff: Tariff,
}

impl PricingEngine {
    pub fn new(oracle: Arc<dyn PriceOracle>) -> Self {
        Self::with_tariff(oracle, Tariff::default())
    }

    pub fn with_tariff(oracle: Arc<dyn PriceOracle>, tariff: Tariff) -> Self {
        Self { oracle, tariff }
    }

    pub fn tariff(&self) -> Tariff {
        self.tariff
    }

    /// Full price board for the day (oracle passthrough).
    pub fn board(&self, day_of_year: u32) -> Vec<(Grade, PricePair)> {
        self.oracle.board(day_of_year)
    }

    /// Quote a sale of `quantity_mt` tonnes of `grade` hauled `distance_km`.
    ///
    /// Non-positive quantity or distance yields the explicit degenerate
    /// `(0, 0)` quote rather than an error.
    pub fn quote(&self, grade: Grade, quantity_mt: f64, distance_km: f64, day_of_year: u32) -> Quote {
        if quantity_mt <= 0.0 || distance_km <= 0.0 {
            return Quote::zero();
        }

        let market = self.oracle.price(grade, day_of_year).current;
        let base_value = market * quantity_mt;
        let litres = quantity_mt * self.tariff.mass_to_volume / grade.density();
        let premium = litres * self.tariff.premium_per_litre;
        let transport = distance_km * self.tariff.transport_per_km;
        let subtotal = base_value + premium + transport;
        let total = (subtotal * (1.0 + self.tariff.tax_rate)).round() as i64;

        let per_litre = if litres > 0.0 {
            (total as f64 / litres * 100.0).round() / 100.0
        } else {
            0.0
        };

        Quote { total, per_litre }
    }
}

impl core::fmt::Debug for PricingEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PricingEngine")
            .field("tariff", &self.tariff)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Oracle pinned to one flat price for every grade and day.
    struct FlatOracle(f64);

    impl PriceOracle for FlatOracle {
        fn price(&self, _grade: Grade, _day_of_year: u32) -> PricePair {
            PricePair {
                current: self.0,
                previous: self.0 * 0.99,
            }
        }
    }

    fn engine(price: f64) -> PricingEngine {
        PricingEngine::new(Arc::new(FlatOracle(price)))
    }

    #[test]
    fn worked_example_crude_degummed() {
        // 10 MT at 80000/MT over 100 km, density 0.92:
        //   base 800000, litres 10869.57, premium 108695.65, transport 1200,
        //   subtotal 909895.65, +5% tax = 955390.43 -> 955390 total.
        let quote = engine(80000.0).quote(Grade::CrudeDegummed, 10.0, 100.0, 1);
        assert_eq!(quote.total, 955_390);
        assert_eq!(quote.per_litre, 87.9);
    }

    #[test]
    fn worked_example_palm() {
        // 5 MT at 75000/MT over 50 km, density 0.915 -> 451757 total.
        let quote = engine(75000.0).quote(Grade::Palm, 5.0, 50.0, 1);
        assert_eq!(quote.total, 451_757);
        assert_eq!(quote.per_litre, 82.67);
    }

    #[test]
    fn degenerate_inputs_quote_zero() {
        let engine = engine(80000.0);
        assert_eq!(engine.quote(Grade::Palm, 0.0, 100.0, 1), Quote::zero());
        assert_eq!(engine.quote(Grade::Palm, 10.0, 0.0, 1), Quote::zero());
        assert_eq!(engine.quote(Grade::Palm, -1.0, -5.0, 1), Quote::zero());
    }

    #[test]
    fn day_moves_the_simulated_quote() {
        let engine = PricingEngine::new(Arc::new(crate::SimulatedFeed::new()));
        let early = engine.quote(Grade::CrudeSunflower, 10.0, 100.0, 10);
        let late = engine.quote(Grade::CrudeSunflower, 10.0, 100.0, 200);
        assert!(late.total > early.total);
    }

    proptest! {
        /// Quote total grows with quantity, all else fixed.
        #[test]
        fn total_monotonic_in_quantity(
            q1 in 0.1f64..500.0,
            bump in 0.1f64..500.0,
            d in 1.0f64..5000.0,
        ) {
            let engine = engine(80000.0);
            let lo = engine.quote(Grade::CrudeDegummed, q1, d, 1);
            let hi = engine.quote(Grade::CrudeDegummed, q1 + bump, d, 1);
            prop_assert!(hi.total > lo.total);
        }

        /// Quote total never decreases with distance, all else fixed.
        #[test]
        fn total_monotonic_in_distance(
            q in 0.1f64..500.0,
            d1 in 1.0f64..5000.0,
            bump in 1.0f64..5000.0,
        ) {
            let engine = engine(80000.0);
            let near = engine.quote(Grade::CrudeDegummed, q, d1, 1);
            let far = engine.quote(Grade::CrudeDegummed, q, d1 + bump, 1);
            prop_assert!(far.total >= near.total);
        }
    }
}
