use std::fmt;

/// Pricing category of a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PricingOption {
    Paid,
    Free,
    ViewOnly,
}

impl PricingOption {
    /// Every category, in wire order. Drives the toggle row.
    pub const ALL: [PricingOption; 3] = [
        PricingOption::Paid,
        PricingOption::Free,
        PricingOption::ViewOnly,
    ];

    /// Integer used on the wire and in the `pricing` query parameter
    pub fn code(self) -> u8 {
        match self {
            PricingOption::Paid => 0,
            PricingOption::Free => 1,
            PricingOption::ViewOnly => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(PricingOption::Paid),
            1 => Some(PricingOption::Free),
            2 => Some(PricingOption::ViewOnly),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PricingOption::Paid => "Paid",
            PricingOption::Free => "Free",
            PricingOption::ViewOnly => "View Only",
        }
    }
}

impl fmt::Display for PricingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Set of active pricing categories.
///
/// Keeps insertion order so the `pricing` query parameter serializes the
/// categories in the order the user picked them. Membership is all the
/// filter engine cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricingFilters(Vec<PricingOption>);

impl PricingFilters {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, option: PricingOption) -> bool {
        self.0.contains(&option)
    }

    /// Add the option if missing, otherwise remove it.
    pub fn toggle(&mut self, option: PricingOption) {
        if let Some(pos) = self.0.iter().position(|o| *o == option) {
            self.0.remove(pos);
        } else {
            self.0.push(option);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = PricingOption> + '_ {
        self.0.iter().copied()
    }

    /// Comma-joined wire codes, e.g. `0,2`
    pub fn to_param(&self) -> String {
        self.0
            .iter()
            .map(|o| o.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<PricingOption> for PricingFilters {
    fn from_iter<I: IntoIterator<Item = PricingOption>>(iter: I) -> Self {
        let mut filters = PricingFilters::new();
        for option in iter {
            if !filters.contains(option) {
                filters.0.push(option);
            }
        }
        filters
    }
}
