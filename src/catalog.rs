//! Product slides shown by the carousel and the price text derived from them.

use serde::{Deserialize, Serialize};

/// One carousel panel: an image reference, a display name and a unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Display name shown as the slide title.
    pub name: String,
    /// Image reference (path or URL). Not loaded by the carousel itself.
    pub image: String,
    /// Unit price in whole currency units.
    pub price: u64,
}

impl Slide {
    pub fn new(name: impl Into<String>, image: impl Into<String>, price: u64) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            price,
        }
    }
}

/// Slides used when the config file does not list any.
pub fn default_catalog() -> Vec<Slide> {
    vec![
        Slide::new("Acai Dessert", "assets/img/acai-dessert.jpg", 10),
        Slide::new("Brownie", "assets/img/brownie.jpg", 8),
        Slide::new("Chocolate Cake", "assets/img/choco-cake.jpg", 12),
        Slide::new("Pavlova Canelle", "assets/img/pavlova_canelle.jpg", 11),
        Slide::new("Berry Tart", "assets/img/tart-berry.jpg", 9),
    ]
}

/// Formats unit and total prices with a currency symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormat {
    symbol: String,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self::new("€")
    }
}

impl PriceFormat {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// `€10 / piece` for a single item, `3 × €10 = €30` otherwise.
    pub fn quote(&self, unit_price: u64, quantity: u64) -> String {
        if quantity == 1 {
            format!("{}{} / piece", self.symbol, unit_price)
        } else {
            format!(
                "{} × {}{} = {}{}",
                quantity,
                self.symbol,
                unit_price,
                self.symbol,
                line_total(unit_price, quantity)
            )
        }
    }
}

/// Total for `quantity` items, saturating instead of overflowing.
pub fn line_total(unit_price: u64, quantity: u64) -> u64 {
    unit_price.saturating_mul(quantity)
}

/// Receipt produced when the current slide is bought.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub name: String,
    pub quantity: u64,
    pub unit_price: u64,
    pub total: u64,
}

impl Purchase {
    pub fn new(slide: &Slide, quantity: u64) -> Self {
        Self {
            name: slide.name.clone(),
            quantity,
            unit_price: slide.price,
            total: line_total(slide.price, quantity),
        }
    }

    /// Short confirmation line for the status area.
    pub fn summary(&self, format: &PriceFormat) -> String {
        format!(
            "Thanks for your purchase: {} × {} ({}{})",
            self.quantity,
            self.name,
            format.symbol(),
            self.total
        )
    }
}
