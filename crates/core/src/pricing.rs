use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::market::RegionPricing;
use crate::domain::proposal::SegmentProposal;
use crate::domain::request::BudgetRequest;
use crate::domain::verdict::Verdict;

const MAX_DIGITS: usize = 28;

/// Converts between a market's real prices and the reference budget the
/// reasoning service works against.
#[derive(Clone, Copy, Debug)]
pub struct PriceNormalizer<'a> {
    pricing: &'a RegionPricing,
    fallback_currency: &'a str,
}

impl<'a> PriceNormalizer<'a> {
    pub fn new(pricing: &'a RegionPricing, fallback_currency: &'a str) -> Self {
        Self { pricing, fallback_currency }
    }

    /// Budget divided by the multiplier, rounded to whole units.
    pub fn reference_budget(&self, budget: u64) -> u64 {
        let multiplier = self.pricing.reference_budget_multiplier;
        if multiplier <= Decimal::ZERO {
            return budget;
        }

        Decimal::from(budget)
            .checked_div(multiplier)
            .map(|value| value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|value| value.to_u64())
            .unwrap_or(budget)
    }

    pub fn reference_request(&self, request: &BudgetRequest) -> BudgetRequest {
        request.with_budget(
            self.reference_budget(request.min_budget),
            self.reference_budget(request.max_budget),
        )
    }

    /// `"1,500,000 TRY"` becomes `"~1,900,000 TRY"` at 1.25 with a 100,000 unit.
    /// Text without digits, or too large to scale, is returned unchanged.
    pub fn normalize_price(&self, price: &str) -> String {
        let digits: String = price.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return price.to_string();
        }

        match self.scale(&digits) {
            Some(scaled) => format!("~{} {}", format_thousands(scaled), self.detect_marker(price)),
            None => price.to_string(),
        }
    }

    /// Rewrites every suggestion price and the winning price in place.
    /// Returns how many strings changed.
    pub fn normalize_result(
        &self,
        proposals: &mut [SegmentProposal],
        verdict: &mut Verdict,
    ) -> usize {
        let mut changed = 0;
        let prices = proposals
            .iter_mut()
            .flat_map(|proposal| proposal.suggestions.iter_mut())
            .map(|suggestion| &mut suggestion.price)
            .chain(std::iter::once(&mut verdict.winning_car_price));

        for price in prices {
            let normalized = self.normalize_price(price);
            if normalized != *price {
                *price = normalized;
                changed += 1;
            }
        }
        changed
    }

    fn scale(&self, digits: &str) -> Option<u64> {
        if digits.len() > MAX_DIGITS {
            return None;
        }
        let value = digits.parse::<Decimal>().ok()?;
        let scaled = value.checked_mul(self.pricing.reference_budget_multiplier)?;
        let unit = Decimal::from(self.pricing.rounding_unit.max(1));

        scaled
            .checked_div(unit)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(unit)?
            .to_u64()
    }

    fn detect_marker(&self, price: &str) -> &str {
        self.pricing
            .currency_markers
            .iter()
            .find(|marker| price.contains(marker.as_str()))
            .map(String::as_str)
            .unwrap_or(self.fallback_currency)
    }
}

/// `1900000` as `"1,900,000"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{format_thousands, PriceNormalizer};
    use crate::domain::market::RegionPricing;
    use crate::domain::proposal::{CarSuggestion, SegmentProposal};
    use crate::domain::request::BudgetRequest;
    use crate::domain::segment::{BudgetStatus, SEGMENTS};
    use crate::domain::verdict::Verdict;

    fn turkey() -> RegionPricing {
        RegionPricing {
            reference_budget_multiplier: Decimal::new(125, 2),
            currency_markers: vec!["TRY".to_string(), "TL".to_string(), "₺".to_string()],
            rounding_unit: 100_000,
        }
    }

    #[test]
    fn scales_and_rounds_to_the_unit() {
        let pricing = turkey();
        let normalizer = PriceNormalizer::new(&pricing, "TRY");

        assert_eq!(normalizer.normalize_price("1,500,000 TRY"), "~1,900,000 TRY");
        assert_eq!(normalizer.normalize_price("₺2.000.000"), "~2,500,000 ₺");
        assert_eq!(normalizer.normalize_price("1 640 000 TL"), "~2,100,000 TL");
        assert_eq!(normalizer.normalize_price("980000"), "~1,200,000 TRY");
    }

    #[test]
    fn midpoint_rounds_away_from_zero() {
        let pricing = turkey();
        let normalizer = PriceNormalizer::new(&pricing, "TRY");

        // 1,160,000 * 1.25 = 1,450,000
        assert_eq!(normalizer.normalize_price("1,160,000 TRY"), "~1,500,000 TRY");
    }

    #[test]
    fn text_without_digits_passes_through() {
        let pricing = turkey();
        let normalizer = PriceNormalizer::new(&pricing, "TRY");

        assert_eq!(normalizer.normalize_price("Price on request"), "Price on request");
        assert_eq!(normalizer.normalize_price(""), "");
        let huge = "9".repeat(40);
        assert_eq!(normalizer.normalize_price(&huge), huge);
    }

    #[test]
    fn normalization_is_deterministic() {
        let pricing = turkey();
        let normalizer = PriceNormalizer::new(&pricing, "TRY");
        let first = normalizer.normalize_price("3,333,333 TRY");
        for _ in 0..10 {
            assert_eq!(normalizer.normalize_price("3,333,333 TRY"), first);
        }
    }

    #[test]
    fn reference_request_divides_the_budget() {
        let pricing = turkey();
        let normalizer = PriceNormalizer::new(&pricing, "TRY");
        let request =
            BudgetRequest::new(1_000_000, 2_500_000, "city car", "Turkey", "TRY").expect("request");

        let reference = normalizer.reference_request(&request);
        assert_eq!(reference.min_budget, 800_000);
        assert_eq!(reference.max_budget, 2_000_000);
        assert_eq!(reference.market, "Turkey");
        assert_eq!(normalizer.reference_budget(1), 1);
    }

    #[test]
    fn rewrites_every_price_in_a_result() {
        let pricing = turkey();
        let normalizer = PriceNormalizer::new(&pricing, "TRY");
        let mut proposals = vec![SegmentProposal::new(
            &SEGMENTS[3],
            BudgetStatus::InBudget,
            vec![
                CarSuggestion { price: "1,500,000 TRY".to_string(), ..CarSuggestion::default() },
                CarSuggestion { price: "n/a".to_string(), ..CarSuggestion::default() },
            ],
            "See suggestions list",
        )];
        let mut verdict =
            Verdict { winning_car_price: "1,500,000 TL".to_string(), ..Verdict::default() };

        let changed = normalizer.normalize_result(&mut proposals, &mut verdict);
        assert_eq!(changed, 2);
        assert_eq!(proposals[0].suggestions[0].price, "~1,900,000 TRY");
        assert_eq!(proposals[0].suggestions[1].price, "n/a");
        assert_eq!(verdict.winning_car_price, "~1,900,000 TL");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(1_900_000), "1,900,000");
    }
}
