use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::DealEconomicsError;
use crate::types::{ensure_amount, Money};
use crate::DealResult;

// ---------------------------------------------------------------------------
// Ownership policy
// ---------------------------------------------------------------------------

/// Relationship between the deal's owner and the building organisation.
///
/// Gates the asset-management line of the fixed per-house schedule. Also
/// deserializes from the legacy `true`/`false` related-owner flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "OwnershipField")]
pub enum OwnershipRelation {
    #[default]
    Independent,
    RelatedParty,
}

impl From<bool> for OwnershipRelation {
    fn from(is_related_owner: bool) -> Self {
        if is_related_owner {
            OwnershipRelation::RelatedParty
        } else {
            OwnershipRelation::Independent
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OwnershipField {
    Flag(bool),
    Tag(OwnershipTag),
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum OwnershipTag {
    Independent,
    RelatedParty,
}

impl From<OwnershipField> for OwnershipRelation {
    fn from(field: OwnershipField) -> Self {
        match field {
            OwnershipField::Flag(flag) => flag.into(),
            OwnershipField::Tag(OwnershipTag::Independent) => OwnershipRelation::Independent,
            OwnershipField::Tag(OwnershipTag::RelatedParty) => OwnershipRelation::RelatedParty,
        }
    }
}

// ---------------------------------------------------------------------------
// Fee schedule
// ---------------------------------------------------------------------------

/// Organisation-level flat fees charged on every house.
///
/// Missing fields in a configuration file fall back to the standard schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    pub warranty_reserve: Money,
    pub builders_risk_insurance: Money,
    pub po_fee: Money,
    pub pm_fee: Money,
    pub utility_hookup: Money,
    pub base_builder_fee: Money,
    /// Charged only on related-party deals
    pub asset_management_fee: Money,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        FeeSchedule {
            warranty_reserve: dec!(2500),
            builders_risk_insurance: dec!(1890),
            po_fee: dec!(3000),
            pm_fee: dec!(4500),
            utility_hookup: dec!(6000),
            base_builder_fee: dec!(18000),
            asset_management_fee: dec!(5000),
        }
    }
}

/// A single named line of the per-house schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeLineItem {
    pub name: String,
    pub amount: Money,
}

impl FeeSchedule {
    /// Every line must be a non-negative amount within `MAX_AMOUNT`.
    pub fn validate(&self) -> DealResult<()> {
        for (field, value) in [
            ("warranty_reserve", self.warranty_reserve),
            ("builders_risk_insurance", self.builders_risk_insurance),
            ("po_fee", self.po_fee),
            ("pm_fee", self.pm_fee),
            ("utility_hookup", self.utility_hookup),
            ("base_builder_fee", self.base_builder_fee),
            ("asset_management_fee", self.asset_management_fee),
        ] {
            ensure_amount(field, value).map_err(|e| {
                DealEconomicsError::ConfigError(format!("fee schedule: {e}"))
            })?;
        }
        Ok(())
    }

    /// Line items that apply to a deal with the given ownership.
    pub fn line_items(&self, relation: OwnershipRelation) -> Vec<FeeLineItem> {
        let mut items = vec![
            FeeLineItem {
                name: "Warranty Reserve".into(),
                amount: self.warranty_reserve,
            },
            FeeLineItem {
                name: "Builder's Risk Insurance".into(),
                amount: self.builders_risk_insurance,
            },
            FeeLineItem {
                name: "PO Fee".into(),
                amount: self.po_fee,
            },
            FeeLineItem {
                name: "PM Fee".into(),
                amount: self.pm_fee,
            },
            FeeLineItem {
                name: "Utility Hookup".into(),
                amount: self.utility_hookup,
            },
            FeeLineItem {
                name: "Base Builder Fee".into(),
                amount: self.base_builder_fee,
            },
        ];
        if relation == OwnershipRelation::RelatedParty {
            items.push(FeeLineItem {
                name: "Asset Management Fee".into(),
                amount: self.asset_management_fee,
            });
        }
        items
    }
}

/// Total fixed per-house fees for a deal.
pub fn fixed_per_house_fee(schedule: &FeeSchedule, relation: OwnershipRelation) -> Money {
    schedule
        .line_items(relation)
        .iter()
        .map(|item| item.amount)
        .sum::<Decimal>()
}
