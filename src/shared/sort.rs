use std::cmp::Ordering;

//
// ──────────────────────────────────────────────────────────
// Sort keys of the form "field" / "-field"
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl SortKey {
    /// A leading `-` means descending. Parsing never fails; a field the
    /// caller does not recognise simply leaves the order untouched.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.strip_prefix('-') {
            Some(field) => Self {
                field: field.to_string(),
                direction: SortDirection::Descending,
            },
            None => Self {
                field: raw.to_string(),
                direction: SortDirection::Ascending,
            },
        }
    }

    pub fn is_field(&self, name: &str) -> bool {
        self.field == name
    }

    /// Stable sort: records with equal keys keep their catalog order.
    pub fn apply_by<T, K, F>(&self, items: &mut [T], key: F)
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        let direction = self.direction;
        items.sort_by(|a, b| {
            let ordering: Ordering = key(a).cmp(&key(b));
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

impl From<&str> for SortKey {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
