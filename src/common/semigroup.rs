// src/common/semigroup.rs
//! Associative merge used to accumulate errors

/// Types with an associative `combine`.
///
/// Implementations must satisfy
/// `a.combine(b).combine(c) == a.combine(b.combine(c))`.
pub trait Semigroup {
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
