//! Lazy, pull-based value sequences.
//!
//! A [`Sequence`] is the universal input of a reduction. Once `next` returns
//! `None` the sequence is exhausted and every later call must return `None`
//! as well; wrap sources that cannot promise this in [`Fuse`].

pub mod chunk;
pub mod ext;
pub mod fuse;
pub mod iter;
pub mod split;

pub use chunk::Chunk;
pub use ext::SequenceExt;
pub use fuse::Fuse;
pub use iter::Iter;
pub use split::Split;

#[must_use = "sequences do nothing unless pulled"]
pub trait Sequence {
    type Item;

    /// Pulls the next value, `None` once the sequence is exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        S::next(*self)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        S::size_hint(*self)
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        S::next(self)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        S::size_hint(self)
    }
}

pub trait IntoSequence {
    type Sequence: Sequence;

    fn into_sequence(self) -> Self::Sequence;
}

/// A sequence backed by an [`Iterator`].
#[derive(Debug, Clone)]
pub struct IteratorSequence<I> {
    iterator: I,
}

impl<I: Iterator> From<I> for IteratorSequence<I> {
    fn from(value: I) -> Self {
        Self { iterator: value }
    }
}

impl<I: Iterator> Sequence for IteratorSequence<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iterator.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iterator.size_hint()
    }
}

impl<I: Iterator> IntoIterator for IteratorSequence<I> {
    type Item = I::Item;
    type IntoIter = I;

    fn into_iter(self) -> I {
        self.iterator
    }
}

impl<I: IntoIterator> IntoSequence for I {
    type Sequence = IteratorSequence<I::IntoIter>;

    fn into_sequence(self) -> Self::Sequence {
        self.into_iter().into()
    }
}

/// A sequence driven by a zero-argument callable.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

/// Builds a sequence that calls `f` for every pull.
///
/// The callable is responsible for never producing a value after it has
/// returned `None`; use [`SequenceExt::fuse`] when that is not guaranteed.
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn { f }
}

impl<T, F> Sequence for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        (self.f)()
    }
}

impl<T, F> IntoIterator for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        Iter { sequence: self }
    }
}
