use serde::{Deserialize, Serialize};
use savor_store::PricingSettings;

/// Fixed charges applied on top of the cart subtotal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingRules {
    pub delivery_fee: f64,
    pub tax_rate: f64,
    pub currency: String,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self::from(&PricingSettings::default())
    }
}

impl From<&PricingSettings> for PricingRules {
    fn from(settings: &PricingSettings) -> Self {
        Self {
            delivery_fee: settings.delivery_fee,
            tax_rate: settings.tax_rate,
            currency: settings.currency.clone(),
        }
    }
}

impl PricingRules {
    pub fn new(delivery_fee: f64, tax_rate: f64) -> Self {
        Self {
            delivery_fee,
            tax_rate,
            currency: "USD".to_string(),
        }
    }

    /// Derive the full breakdown for a subtotal
    pub fn totals_for(&self, subtotal: f64) -> CartTotals {
        let tax = subtotal * self.tax_rate;
        CartTotals {
            subtotal,
            delivery_fee: self.delivery_fee,
            tax,
            total: subtotal + self.delivery_fee + tax,
        }
    }
}

/// Cost breakdown shown in the cart drawer and the checkout summary.
/// Derived from the line items on every read, never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub tax: f64,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_breakdown() {
        let rules = PricingRules::new(4.0, 0.1);
        let totals = rules.totals_for(20.0);

        assert_eq!(totals.subtotal, 20.0);
        assert_eq!(totals.delivery_fee, 4.0);
        assert_eq!(totals.tax, 20.0 * 0.1);
        assert_eq!(totals.total, 20.0 + 4.0 + 20.0 * 0.1);
    }

    #[test]
    fn test_empty_subtotal_pays_delivery_only() {
        let rules = PricingRules::default();
        let totals = rules.totals_for(0.0);

        assert_eq!(totals.tax, 0.0);
        assert_eq!(totals.total, rules.delivery_fee);
    }

    #[test]
    fn test_from_settings() {
        let settings = PricingSettings {
            delivery_fee: 1.5,
            tax_rate: 0.2,
            currency: "EUR".to_string(),
        };
        let rules = PricingRules::from(&settings);

        assert_eq!(rules.delivery_fee, 1.5);
        assert_eq!(rules.tax_rate, 0.2);
        assert_eq!(rules.currency, "EUR");
    }
}
