use serde::Serialize;

/// Prices strictly above `above` (when set) and at most `up_to` (when set).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    pub above: Option<f64>,
    pub up_to: Option<f64>,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        self.above.map_or(true, |lo| price > lo) && self.up_to.map_or(true, |hi| price <= hi)
    }
}

/// One histogram bar, labelled `"{min}-{max}"` or `"{min}-above"`.
///
/// `min` is the label's lower bound. A boundary price like 100 belongs to
/// the bucket whose `max` it equals, so `101-200` covers `(100, 200]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBucket {
    pub min: u32,
    pub max: Option<u32>,
}

pub const PRICE_BUCKETS: [PriceBucket; 10] = [
    PriceBucket { min: 0, max: Some(100) },
    PriceBucket { min: 101, max: Some(200) },
    PriceBucket { min: 201, max: Some(300) },
    PriceBucket { min: 301, max: Some(400) },
    PriceBucket { min: 401, max: Some(500) },
    PriceBucket { min: 501, max: Some(600) },
    PriceBucket { min: 601, max: Some(700) },
    PriceBucket { min: 701, max: Some(800) },
    PriceBucket { min: 801, max: Some(900) },
    PriceBucket { min: 901, max: None },
];

impl PriceBucket {
    pub fn label(&self) -> String {
        match self.max {
            Some(max) => format!("{}-{}", self.min, max),
            None => format!("{}-above", self.min),
        }
    }

    pub fn range(&self) -> PriceRange {
        PriceRange {
            above: self.min.checked_sub(1).map(f64::from),
            up_to: self.max.map(f64::from),
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.range().contains(price)
    }
}

/// The bucket a price falls into. Always `Some` for non-negative prices.
pub fn bucket_for(price: f64) -> Option<&'static PriceBucket> {
    PRICE_BUCKETS.iter().find(|b| b.contains(price))
}
