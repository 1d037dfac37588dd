use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::Serialize;

/// Inclusive price range of a segment in the market's currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PriceBand {
    pub min: u64,
    pub max: u64,
}

impl PriceBand {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn overlaps(&self, budget_min: u64, budget_max: u64) -> bool {
        !(self.max < budget_min || self.min > budget_max)
    }
}

/// Markets whose reasoning runs against a reduced reference budget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegionPricing {
    pub reference_budget_multiplier: Decimal,
    /// Checked in order; the first one found in a price string is kept.
    pub currency_markers: Vec<String>,
    pub rounding_unit: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MarketProfile {
    pub market: String,
    pub currency: String,
    pub available_models: BTreeMap<String, BTreeSet<String>>,
    pub segment_price_bands: BTreeMap<String, PriceBand>,
    pub region_pricing: Option<RegionPricing>,
    pub advisory: Option<String>,
}

impl MarketProfile {
    pub fn price_band(&self, segment: &str) -> Option<PriceBand> {
        self.segment_price_bands.get(segment).copied()
    }

    /// Case-insensitive substring match of `token` against catalog brands.
    pub fn has_brand_matching(&self, token: &str) -> bool {
        let needle = token.to_lowercase();
        self.available_models.keys().any(|brand| brand.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use super::{MarketProfile, PriceBand};

    #[test]
    fn touching_bounds_overlap() {
        let band = PriceBand::new(15_000, 25_000);
        assert!(band.overlaps(25_000, 50_000));
        assert!(band.overlaps(5_000, 15_000));
        assert!(!band.overlaps(25_001, 50_000));
        assert!(!band.overlaps(1_000, 14_999));
    }

    #[test]
    fn brand_match_is_case_insensitive_substring() {
        let profile = MarketProfile {
            market: "Test".to_string(),
            currency: "USD".to_string(),
            available_models: BTreeMap::from([(
                "Mercedes-Benz".to_string(),
                BTreeSet::from(["C-Class".to_string()]),
            )]),
            segment_price_bands: BTreeMap::new(),
            region_pricing: None,
            advisory: None,
        };

        assert!(profile.has_brand_matching("mercedes"));
        assert!(profile.has_brand_matching("BENZ"));
        assert!(!profile.has_brand_matching("BMW"));
    }
}
