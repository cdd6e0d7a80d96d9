// src/common/combinators.rs
//! Combining independent outcomes.
//!
//! `Tupled` turns a tuple of 2 to 8 outcomes into one outcome of a tuple,
//! folding left to right with [`Outcome::zip_with`]. Errors therefore come
//! out in the position order of the tuple, whatever fails.
//!
//! For a number of outcomes only known at runtime, collect an iterator into
//! `Outcome<E, Vec<A>>`.

use super::non_empty::NonEmpty;
use super::outcome::Outcome;
use super::semigroup::Semigroup;

/// Combines a tuple of independent outcomes into one
pub trait Tupled {
    type Output;

    fn tupled(self) -> Self::Output;
}

/// Appends one element to the end of a tuple.
///
/// Lets the left fold in [`Tupled`] grow its accumulator one position at a
/// time without any intermediate nesting.
pub trait Append<Z> {
    type Output;

    fn append(self, last: Z) -> Self::Output;
}

macro_rules! impl_append {
    ($($ty:ident),*) => {
        impl<$($ty,)* Z> Append<Z> for ($($ty,)*) {
            type Output = ($($ty,)* Z,);

            #[allow(non_snake_case)]
            fn append(self, last: Z) -> Self::Output {
                let ($($ty,)*) = self;
                ($($ty,)* last,)
            }
        }
    };
}

impl_append!();
impl_append!(A);
impl_append!(A, B);
impl_append!(A, B, C);
impl_append!(A, B, C, D);
impl_append!(A, B, C, D, F);
impl_append!(A, B, C, D, F, G);
impl_append!(A, B, C, D, F, G, H);

macro_rules! impl_tupled {
    ($($name:ident: $ty:ident),+) => {
        impl<E, $($ty),+> Tupled for ($(Outcome<E, $ty>,)+) {
            type Output = Outcome<E, ($($ty,)+)>;

            fn tupled(self) -> Self::Output {
                let ($($name,)+) = self;
                let combined = Outcome::valid(());
                $(
                    let combined = combined.zip_with($name, Append::append);
                )+
                combined
            }
        }
    };
}

impl_tupled!(a: A, b: B);
impl_tupled!(a: A, b: B, c: C);
impl_tupled!(a: A, b: B, c: C, d: D);
impl_tupled!(a: A, b: B, c: C, d: D, f: F);
impl_tupled!(a: A, b: B, c: C, d: D, f: F, g: G);
impl_tupled!(a: A, b: B, c: C, d: D, f: F, g: G, h: H);
impl_tupled!(a: A, b: B, c: C, d: D, f: F, g: G, h: H, i: I);

/// Collects outcomes in iteration order.
///
/// Every failing item contributes its errors; an empty iterator is valid.
impl<E, A> FromIterator<Outcome<E, A>> for Outcome<E, Vec<A>> {
    fn from_iter<T: IntoIterator<Item = Outcome<E, A>>>(iter: T) -> Self {
        let mut values = Vec::new();
        let mut errors: Option<NonEmpty<E>> = None;

        for outcome in iter {
            match outcome {
                Outcome::Valid(value) => values.push(value),
                Outcome::Invalid(found) => {
                    errors = Some(match errors {
                        Some(collected) => collected.combine(found),
                        None => found,
                    });
                }
            }
        }

        match errors {
            Some(errors) => Outcome::Invalid(errors),
            None => Outcome::Valid(values),
        }
    }
}
