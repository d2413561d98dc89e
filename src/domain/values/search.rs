use crate::domain::entities::transaction::Transaction;

/// Free-text search over title, description and price.
///
/// The text matches as a substring of the title or the description, with
/// Unicode case folding on both sides (see [`contains_folded`]). When it
/// also parses as a number, a price exactly equal to that number matches
/// too. Blank text matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchTerm {
    text: String,
    lowered: String,
    amount: Option<f64>,
}

impl SearchTerm {
    pub fn new(text: &str) -> Self {
        let text = text.trim().to_string();
        let amount = text.parse::<f64>().ok().filter(|v| v.is_finite());
        Self {
            lowered: text.to_lowercase(),
            text,
            amount,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn amount(&self) -> Option<f64> {
        self.amount
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        if self.is_empty() {
            return true;
        }
        contains_folded(&tx.title, &self.lowered)
            || contains_folded(&tx.description, &self.lowered)
            || self.amount == Some(tx.price)
    }

    /// The search text, already lowercased.
    pub fn lowered(&self) -> &str {
        &self.lowered
    }
}

/// Case-insensitive substring test shared by every store adapter.
/// Characters carry no pattern meaning.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
