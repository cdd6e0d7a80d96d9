// src/common/non_empty.rs
//! Ordered sequence that always holds at least one element.
//!
//! Used as the error side of [`Outcome`](super::outcome::Outcome): a failed
//! validation always carries one or more descriptors, in the order the
//! validators ran. Duplicates are kept.

use serde::{Serialize, Serializer};
use std::fmt;

use super::semigroup::Semigroup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmpty<E> {
    head: E,
    tail: Vec<E>,
}

impl<E> NonEmpty<E> {
    /// Sequence holding exactly one element
    pub fn single(head: E) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// Builds a sequence from a `Vec`, returning `None` when it is empty
    pub fn from_vec(items: Vec<E>) -> Option<Self> {
        let mut items = items.into_iter();
        let head = items.next()?;
        Some(Self {
            head,
            tail: items.collect(),
        })
    }

    pub fn first(&self) -> &E {
        &self.head
    }

    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    pub fn push(&mut self, item: E) {
        self.tail.push(item);
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Applies `f` to every element, keeping order
    pub fn map<F, G>(self, mut f: G) -> NonEmpty<F>
    where
        G: FnMut(E) -> F,
    {
        NonEmpty {
            head: f(self.head),
            tail: self.tail.into_iter().map(f).collect(),
        }
    }

    pub fn into_vec(self) -> Vec<E> {
        let mut items = Vec::with_capacity(1 + self.tail.len());
        items.push(self.head);
        items.extend(self.tail);
        items
    }
}

impl<E> Semigroup for NonEmpty<E> {
    fn combine(mut self, other: Self) -> Self {
        self.tail.reserve(other.tail.len() + 1);
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

impl<E> IntoIterator for NonEmpty<E> {
    type Item = E;
    type IntoIter = std::iter::Chain<std::iter::Once<E>, std::vec::IntoIter<E>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<E: fmt::Display> fmt::Display for NonEmpty<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join(", "))
    }
}

impl<E: Serialize> Serialize for NonEmpty<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}
