use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a segment's price band sits relative to the client's budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetStatus {
    #[default]
    InBudget,
    TooExpensive,
    TooCheap,
    Unavailable,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InBudget => "in-budget",
            Self::TooExpensive => "too-expensive",
            Self::TooCheap => "too-cheap",
            Self::Unavailable => "unavailable",
        }
    }

    pub fn is_in_budget(&self) -> bool {
        matches!(self, Self::InBudget)
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SegmentDefinition {
    pub name: &'static str,
    pub icon: &'static str,
    /// Comma-separated brand tokens, matched as substrings of catalog brands.
    pub brands: &'static str,
    pub focus: &'static str,
}

impl SegmentDefinition {
    pub fn brand_tokens(&self) -> impl Iterator<Item = &'static str> {
        self.brands.split(',').map(str::trim).filter(|token| !token.is_empty())
    }
}

pub const SEGMENTS: [SegmentDefinition; 6] = [
    SegmentDefinition {
        name: "Ultra-Luxury",
        icon: "💎",
        brands: "Porsche, Maserati, Range Rover, Bentley, Lamborghini, Ferrari, Rolls-Royce",
        focus: "ultra-luxury segment",
    },
    SegmentDefinition {
        name: "Premium",
        icon: "⭐",
        brands: "BMW, Mercedes-Benz, Audi, Lexus, Volvo, Genesis, Jaguar, Alfa Romeo",
        focus: "premium brands",
    },
    SegmentDefinition {
        name: "Upper-Mainstream",
        icon: "🎯",
        brands: "Volkswagen, Mazda, Subaru, Peugeot, Skoda, SEAT, Cupra, Volvo",
        focus: "upper-mainstream segment",
    },
    SegmentDefinition {
        name: "Mainstream",
        icon: "🔧",
        brands: "Toyota, Honda, Hyundai, Kia, Nissan, Ford, Mazda, Suzuki",
        focus: "reliable mainstream brands",
    },
    SegmentDefinition {
        name: "Budget",
        icon: "💸",
        brands: "Dacia, Fiat, Renault, Opel, Citroën, Vauxhall, Mitsubishi",
        focus: "budget-friendly segment",
    },
    SegmentDefinition {
        name: "Electric",
        icon: "⚡",
        brands: "Tesla, BYD, MG, Polestar, Togg, Rivian, Lucid",
        focus: "electric and hybrid vehicles",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SegmentClassification {
    pub segment: SegmentDefinition,
    pub status: BudgetStatus,
}

impl SegmentClassification {
    pub fn new(segment: SegmentDefinition, status: BudgetStatus) -> Self {
        Self { segment, status }
    }

    pub fn name(&self) -> &'static str {
        self.segment.name
    }
}

#[cfg(test)]
mod tests {
    use super::{BudgetStatus, SEGMENTS};

    #[test]
    fn segment_names_are_unique() {
        let mut names = SEGMENTS.iter().map(|segment| segment.name).collect::<Vec<_>>();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SEGMENTS.len());
    }

    #[test]
    fn brand_tokens_are_trimmed() {
        let tokens = SEGMENTS[1].brand_tokens().collect::<Vec<_>>();
        assert_eq!(tokens.first(), Some(&"BMW"));
        assert!(tokens.contains(&"Alfa Romeo"));
        assert!(tokens.iter().all(|token| token.trim() == *token));
    }

    #[test]
    fn budget_status_uses_kebab_case_on_the_wire() {
        let encoded = serde_json::to_string(&BudgetStatus::TooExpensive).expect("serialize");
        assert_eq!(encoded, "\"too-expensive\"");
        assert_eq!(BudgetStatus::TooCheap.to_string(), "too-cheap");
    }
}
