use super::{fuse::Fuse, iter::Iter, split::Split, Sequence};
use crate::{execution, reducer::Reducer, transducer::Transducer};

/// Extension trait for [`Sequence`].
pub trait SequenceExt: Sequence {
    /// Stops pulling from the source after its first `None`.
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse {
            sequence: self,
            done: false,
        }
    }

    /// Pulls the head eagerly while keeping it available downstream.
    ///
    /// # Examples
    ///
    /// ```
    /// use transduce_core::prelude::*;
    ///
    /// let split = vec![3, 4].into_sequence().split();
    /// assert_eq!(split.head(), Some(&3));
    ///
    /// let (head, mut rest) = split.into_parts();
    /// assert_eq!(head, Some(3));
    /// assert_eq!(rest.next(), Some(4));
    /// ```
    fn split(self) -> Split<Self>
    where
        Self: Sized,
    {
        Split::new(self)
    }

    fn iter(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter { sequence: self }
    }

    /// Drives this sequence through a pre-assembled reducer.
    fn reduce<R>(self, reducer: R) -> R::Acc
    where
        Self: Sized,
        R: Reducer<Self::Item>,
    {
        execution::reduce(self, reducer)
    }

    /// Assembles `xform` around `reducer` and drives this sequence through it.
    ///
    /// # Examples
    ///
    /// ```
    /// use transduce_core::{comp, prelude::*, reducer::collect, transform::{filter, map}};
    ///
    /// let evens: Vec<i32> = (0..5)
    ///     .into_sequence()
    ///     .transduce(
    ///         &comp!(map(|x: i32| x + 1), filter(|x: &i32| x % 2 == 0)),
    ///         collect(),
    ///     );
    /// assert_eq!(evens, vec![2, 4]);
    /// ```
    fn transduce<X, R>(self, xform: &X, reducer: R) -> <X::Output as Reducer<Self::Item>>::Acc
    where
        Self: Sized,
        X: Transducer<R>,
        X::Output: Reducer<Self::Item>,
    {
        execution::run(self, reducer, xform)
    }
}

impl<S: Sequence + ?Sized> SequenceExt for S {}
