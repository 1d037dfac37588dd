mod markets;

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;

use crate::domain::market::{MarketProfile, PriceBand, RegionPricing};
use crate::errors::DomainError;

use self::markets::{MarketTable, MARKETS};

pub trait MarketCatalog: Send + Sync {
    fn market_profile(&self, market: &str) -> Result<MarketProfile, DomainError>;

    fn market_names(&self) -> Vec<String>;
}

/// Catalog backed by the compiled-in market tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticMarketCatalog {
    region_pricing: RegionPricingMode,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum RegionPricingMode {
    #[default]
    Enabled,
    Disabled,
}

impl StaticMarketCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same tables, but no market carries a reference-budget multiplier.
    pub fn without_region_pricing() -> Self {
        Self { region_pricing: RegionPricingMode::Disabled }
    }

    fn find(market: &str) -> Option<&'static MarketTable> {
        let wanted = market.trim();
        MARKETS.iter().find(|table| table.name.eq_ignore_ascii_case(wanted))
    }
}

impl MarketCatalog for StaticMarketCatalog {
    fn market_profile(&self, market: &str) -> Result<MarketProfile, DomainError> {
        let table =
            Self::find(market).ok_or_else(|| DomainError::UnknownMarket(market.to_string()))?;
        let mut profile = build_profile(table);
        if self.region_pricing == RegionPricingMode::Disabled {
            profile.region_pricing = None;
        }
        Ok(profile)
    }

    fn market_names(&self) -> Vec<String> {
        MARKETS.iter().map(|table| table.name.to_string()).collect()
    }
}

fn build_profile(table: &MarketTable) -> MarketProfile {
    // Some tables list a brand once per segment; models are merged.
    let mut available_models: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for (brand, models) in table.models {
        available_models
            .entry((*brand).to_string())
            .or_default()
            .extend(models.iter().map(|model| (*model).to_string()));
    }

    let segment_price_bands = table
        .bands
        .iter()
        .map(|(segment, min, max)| ((*segment).to_string(), PriceBand::new(*min, *max)))
        .collect();

    let region_pricing = table.region_pricing.as_ref().map(|pricing| RegionPricing {
        reference_budget_multiplier: Decimal::new(pricing.multiplier.0, pricing.multiplier.1),
        currency_markers: pricing
            .currency_markers
            .iter()
            .map(|marker| (*marker).to_string())
            .collect(),
        rounding_unit: pricing.rounding_unit,
    });

    MarketProfile {
        market: table.name.to_string(),
        currency: table.currency.to_string(),
        available_models,
        segment_price_bands,
        region_pricing,
        advisory: table.advisory.map(str::to_string),
    }
}
