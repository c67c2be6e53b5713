use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate id in catalog: {0}")]
    DuplicateId(String),

    #[error("Duplicate title in catalog: {0}")]
    DuplicateTitle(String),

    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },
}

/// Ids must be unique for the lifetime of a catalog.
pub fn ensure_unique_ids<'a, I>(ids: I) -> Result<(), CatalogError>
where
    I: IntoIterator<Item = &'a str>,
{
    first_duplicate(ids).map_or(Ok(()), |id| Err(CatalogError::DuplicateId(id.to_string())))
}

/// Exact comparison: titles differing only in case are distinct.
pub fn ensure_unique_titles<'a, I>(titles: I) -> Result<(), CatalogError>
where
    I: IntoIterator<Item = &'a str>,
{
    first_duplicate(titles)
        .map_or(Ok(()), |title| Err(CatalogError::DuplicateTitle(title.to_string())))
}

fn first_duplicate<'a, I>(values: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    values.into_iter().find(|value| !seen.insert(*value))
}
