use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical go/no-go rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "NO GO")]
    NoGo,
    #[serde(rename = "CAUTION")]
    Caution,
    #[serde(rename = "ACCEPTABLE")]
    Acceptable,
    #[serde(rename = "STRONG")]
    Strong,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::NoGo => "NO GO",
            Verdict::Caution => "CAUTION",
            Verdict::Acceptable => "ACCEPTABLE",
            Verdict::Strong => "STRONG",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An ordered threshold table mapping a metric onto verdict buckets.
///
/// Each tier is `(lower_bound, verdict)`, sorted ascending. A value takes the
/// verdict of the highest tier whose lower bound it reaches (inclusive lower,
/// exclusive upper); values below every bound take `floor`.
#[derive(Debug, Clone, Copy)]
pub struct VerdictScale {
    pub floor: Verdict,
    pub tiers: &'static [(Decimal, Verdict)],
}

impl VerdictScale {
    pub fn classify(&self, value: Decimal) -> Verdict {
        self.tiers
            .iter()
            .take_while(|(lower_bound, _)| value >= *lower_bound)
            .last()
            .map(|(_, verdict)| *verdict)
            .unwrap_or(self.floor)
    }
}

/// Net profit margin: higher is better.
pub const PROFIT_MARGIN_SCALE: VerdictScale = VerdictScale {
    floor: Verdict::NoGo,
    tiers: &[
        (dec!(0.05), Verdict::Caution),
        (dec!(0.07), Verdict::Acceptable),
        (dec!(0.10), Verdict::Strong),
    ],
};

/// Land cost ratio: lower is better.
pub const LAND_COST_SCALE: VerdictScale = VerdictScale {
    floor: Verdict::Strong,
    tiers: &[
        (dec!(0.20), Verdict::Acceptable),
        (dec!(0.25), Verdict::Caution),
        (dec!(0.30), Verdict::NoGo),
    ],
};

pub fn profit_verdict(net_profit_margin: Decimal) -> Verdict {
    PROFIT_MARGIN_SCALE.classify(net_profit_margin)
}

pub fn land_verdict(land_cost_ratio: Decimal) -> Verdict {
    LAND_COST_SCALE.classify(land_cost_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_profit_tiers() {
        assert_eq!(profit_verdict(dec!(-0.20)), Verdict::NoGo);
        assert_eq!(profit_verdict(Decimal::ZERO), Verdict::NoGo);
        assert_eq!(profit_verdict(dec!(0.0499)), Verdict::NoGo);
        assert_eq!(profit_verdict(dec!(0.06)), Verdict::Caution);
        assert_eq!(profit_verdict(dec!(0.085)), Verdict::Acceptable);
        assert_eq!(profit_verdict(dec!(0.25)), Verdict::Strong);
    }

    #[test]
    fn test_profit_boundaries_inclusive_lower() {
        assert_eq!(profit_verdict(dec!(0.05)), Verdict::Caution);
        assert_eq!(profit_verdict(dec!(0.07)), Verdict::Acceptable);
        assert_eq!(profit_verdict(dec!(0.10)), Verdict::Strong);
    }

    #[test]
    fn test_land_tiers() {
        assert_eq!(land_verdict(Decimal::ZERO), Verdict::Strong);
        assert_eq!(land_verdict(dec!(0.1999)), Verdict::Strong);
        assert_eq!(land_verdict(dec!(0.2178)), Verdict::Acceptable);
        assert_eq!(land_verdict(dec!(0.27)), Verdict::Caution);
        assert_eq!(land_verdict(dec!(0.45)), Verdict::NoGo);
    }

    #[test]
    fn test_land_boundaries_inclusive_lower() {
        assert_eq!(land_verdict(dec!(0.20)), Verdict::Acceptable);
        assert_eq!(land_verdict(dec!(0.25)), Verdict::Caution);
        assert_eq!(land_verdict(dec!(0.30)), Verdict::NoGo);
    }

    #[test]
    fn test_custom_scale() {
        const TWO_TIER: VerdictScale = VerdictScale {
            floor: Verdict::Caution,
            tiers: &[(dec!(1), Verdict::Strong)],
        };
        assert_eq!(TWO_TIER.classify(dec!(0.99)), Verdict::Caution);
        assert_eq!(TWO_TIER.classify(dec!(1)), Verdict::Strong);
    }

    #[test]
    fn test_verdict_labels() {
        assert_eq!(serde_json::to_string(&Verdict::NoGo).unwrap(), "\"NO GO\"");
        assert_eq!(Verdict::Acceptable.to_string(), "ACCEPTABLE");
        let parsed: Verdict = serde_json::from_str("\"CAUTION\"").unwrap();
        assert_eq!(parsed, Verdict::Caution);
    }
}
