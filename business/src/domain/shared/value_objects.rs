use std::cmp::Ordering;

use num_traits::Zero;

use crate::domain::errors::ValidationError;

/// Identifier of an item, assigned by the item store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a cart, assigned by the cart store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CartId(u64);

impl CartId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated `offset`/`limit` window over a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    offset: usize,
    limit: usize,
}

impl Pagination {
    /// Rejects a negative offset and a limit that is not strictly positive.
    pub fn new(offset: i64, limit: i64) -> Result<Self, ValidationError> {
        if limit <= 0 {
            return Err(ValidationError::InvalidPagination);
        }
        let offset = usize::try_from(offset).map_err(|_| ValidationError::InvalidPagination)?;
        let limit = usize::try_from(limit).map_err(|_| ValidationError::InvalidPagination)?;
        Ok(Self { offset, limit })
    }

    /// Returns at most `limit` elements starting at `offset`.
    pub fn apply<T>(&self, values: impl IntoIterator<Item = T>) -> Vec<T> {
        values
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect()
    }
}

/// Inclusive lower/upper bounds where each side is optional.
///
/// A side is applied whenever it is present, including a bound of zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T> Bounds<T>
where
    T: PartialOrd + Zero + Copy,
{
    /// Returns `None` when a supplied bound is negative or cannot be ordered (NaN).
    pub fn non_negative(min: Option<T>, max: Option<T>) -> Option<Self> {
        let is_valid = |bound: Option<T>| match bound {
            None => true,
            Some(value) => matches!(
                value.partial_cmp(&T::zero()),
                Some(Ordering::Equal | Ordering::Greater)
            ),
        };

        if is_valid(min) && is_valid(max) {
            Some(Self { min, max })
        } else {
            None
        }
    }

    pub fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}
