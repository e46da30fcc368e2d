//! Bill calculation for a dosa counter.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Extra charge per dosa for a spicy order.
pub const SPICY_SURCHARGE: u32 = 10;

/// The dosas on the menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DosaType {
    Plain,
    Masala,
    Onion,
    Butter,
    Paper,
    Cheese,
}

impl DosaType {
    pub const ALL: [DosaType; 6] = [
        DosaType::Plain,
        DosaType::Masala,
        DosaType::Onion,
        DosaType::Butter,
        DosaType::Paper,
        DosaType::Cheese,
    ];

    /// Menu price in rupees, before any surcharge.
    pub fn base_price(&self) -> u32 {
        match self {
            Self::Plain => 40,
            Self::Masala => 60,
            Self::Onion => 50,
            Self::Butter => 70,
            Self::Paper => 90,
            Self::Cheese => 80,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Masala => "masala",
            Self::Onion => "onion",
            Self::Butter => "butter",
            Self::Paper => "paper",
            Self::Cheese => "cheese",
        }
    }
}

impl Display for DosaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a name that is not on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown dosa type: {0}")]
pub struct UnknownDosa(pub String);

impl FromStr for DosaType {
    type Err = UnknownDosa;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dosa| dosa.name() == s)
            .ok_or_else(|| UnknownDosa(s.to_string()))
    }
}

/// A calculated bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DosaOrder {
    #[serde(rename = "type")]
    pub dosa_type: DosaType,
    pub quantity: f64,
    pub price_per_dosa: u32,
    pub total: f64,
}

impl Display for DosaOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} x {} dosa @ Rs {} = Rs {}",
            self.quantity, self.dosa_type, self.price_per_dosa, self.total
        )
    }
}

/// Calculate the bill for an order.
///
/// Returns `None` if the type is not on the menu, or if the quantity is
/// not a finite positive number.
pub fn calculate_dosa_order(dosa_type: &str, quantity: f64, is_spicy: bool) -> Option<DosaOrder> {
    let dosa_type = dosa_type.parse::<DosaType>().ok()?;
    if !quantity.is_finite() || quantity <= 0.0 {
        return None;
    }

    let surcharge = if is_spicy { SPICY_SURCHARGE } else { 0 };
    let price_per_dosa = dosa_type.base_price() + surcharge;
    Some(DosaOrder {
        dosa_type,
        quantity,
        price_per_dosa,
        total: f64::from(price_per_dosa) * quantity,
    })
}

/// An order with the counter's defaults: one dosa, not spicy.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    dosa_type: String,
    quantity: f64,
    is_spicy: bool,
}

impl OrderRequest {
    pub fn new(dosa_type: impl Into<String>) -> Self {
        Self {
            dosa_type: dosa_type.into(),
            quantity: 1.0,
            is_spicy: false,
        }
    }

    pub fn quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn spicy(mut self, is_spicy: bool) -> Self {
        self.is_spicy = is_spicy;
        self
    }

    pub fn calculate(&self) -> Option<DosaOrder> {
        calculate_dosa_order(&self.dosa_type, self.quantity, self.is_spicy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spicy_masala() {
        assert_eq!(
            calculate_dosa_order("masala", 2.0, true),
            Some(DosaOrder {
                dosa_type: DosaType::Masala,
                quantity: 2.0,
                price_per_dosa: 70,
                total: 140.0,
            })
        );
    }

    #[test]
    fn defaults() {
        assert_eq!(
            OrderRequest::new("plain").calculate(),
            Some(DosaOrder {
                dosa_type: DosaType::Plain,
                quantity: 1.0,
                price_per_dosa: 40,
                total: 40.0,
            })
        );
    }

    #[test]
    fn whole_menu() {
        for dosa in DosaType::ALL {
            for quantity in [1.0, 2.0, 7.0] {
                for is_spicy in [false, true] {
                    let order = calculate_dosa_order(dosa.name(), quantity, is_spicy).unwrap();
                    let expected_price =
                        dosa.base_price() + if is_spicy { SPICY_SURCHARGE } else { 0 };
                    assert_eq!(order.price_per_dosa, expected_price);
                    assert_eq!(order.total, f64::from(expected_price) * quantity);
                }
            }
        }
    }

    #[test]
    fn invalid_orders() {
        assert_eq!(OrderRequest::new("dosa-that-does-not-exist").calculate(), None);
        assert_eq!(OrderRequest::new("Masala").calculate(), None);
        assert_eq!(OrderRequest::new("").calculate(), None);
        assert_eq!(OrderRequest::new("plain").quantity(0.0).calculate(), None);
        assert_eq!(OrderRequest::new("plain").quantity(-3.0).calculate(), None);
        assert_eq!(OrderRequest::new("plain").quantity(f64::NAN).calculate(), None);
        assert_eq!(
            OrderRequest::new("plain").quantity(f64::INFINITY).calculate(),
            None
        );
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("cheese".parse::<DosaType>(), Ok(DosaType::Cheese));
        assert_eq!(
            "rava".parse::<DosaType>(),
            Err(UnknownDosa("rava".to_string()))
        );

        let order = OrderRequest::new("onion")
            .quantity(3.0)
            .spicy(true)
            .calculate()
            .unwrap();
        assert_eq!(order.to_string(), "3 x onion dosa @ Rs 60 = Rs 180");
    }

    #[test]
    fn serializes_like_a_bill() {
        let order = calculate_dosa_order("paper", 1.0, false).unwrap();
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "paper",
                "quantity": 1.0,
                "pricePerDosa": 90,
                "total": 90.0,
            })
        );
    }
}
