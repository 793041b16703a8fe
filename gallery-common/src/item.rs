use crate::PricingOption;

/// One catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub creator: String,
    pub image_path: String,
    pub pricing_option: PricingOption,
    /// Only meaningful for `PricingOption::Paid`
    pub price: Option<f64>,
}

impl Item {
    /// Label shown in the card's price slot
    pub fn price_label(&self) -> String {
        match self.pricing_option {
            PricingOption::Paid => match self.price {
                Some(price) => format!("${price:.2}"),
                None => PricingOption::Paid.label().to_string(),
            },
            PricingOption::Free => "Free".to_string(),
            PricingOption::ViewOnly => "View Only".to_string(),
        }
    }
}
