//! How value-inspecting transformations look at an incoming value.
//!
//! [`ByValue`] hands the callback the value itself. [`ByHead`] treats the value
//! as a nested sequence, splits off its head for the callback, and passes the
//! reassembled [`Split`] on, so no element of the nested sequence is lost.

use core::marker::PhantomData;

use crate::sequence::{Sequence, SequenceExt, Split};

pub trait Probe<T> {
    /// The value forwarded after probing.
    type Value;
    type Verdict;

    /// Returns the value to forward and the callback's verdict, `None` when
    /// there was nothing to inspect.
    fn probe(&mut self, value: T) -> (Self::Value, Option<Self::Verdict>);
}

/// Names the verdict type of a probe independently of the probed value, for
/// transformations that keep the last verdict as state.
pub trait ProbeKey {
    type Key;
}

pub struct ByValue<F, V> {
    f: F,
    _verdict: PhantomData<fn() -> V>,
}

impl<F, V> ByValue<F, V> {
    pub fn new(f: F) -> Self {
        Self {
            f,
            _verdict: PhantomData,
        }
    }
}

impl<F: Clone, V> Clone for ByValue<F, V> {
    fn clone(&self) -> Self {
        Self::new(self.f.clone())
    }
}

impl<T, F, V> Probe<T> for ByValue<F, V>
where
    F: FnMut(&T) -> V,
{
    type Value = T;
    type Verdict = V;

    #[inline]
    fn probe(&mut self, value: T) -> (T, Option<V>) {
        let verdict = (self.f)(&value);
        (value, Some(verdict))
    }
}

impl<F, V> ProbeKey for ByValue<F, V> {
    type Key = V;
}

pub struct ByHead<F, V> {
    f: F,
    _verdict: PhantomData<fn() -> V>,
}

impl<F, V> ByHead<F, V> {
    pub fn new(f: F) -> Self {
        Self {
            f,
            _verdict: PhantomData,
        }
    }
}

impl<F: Clone, V> Clone for ByHead<F, V> {
    fn clone(&self) -> Self {
        Self::new(self.f.clone())
    }
}

impl<S, F, V> Probe<S> for ByHead<F, V>
where
    S: Sequence,
    F: FnMut(&S::Item) -> V,
{
    type Value = Split<S>;
    type Verdict = V;

    #[inline]
    fn probe(&mut self, value: S) -> (Split<S>, Option<V>) {
        let split = value.split();
        let verdict = split.head().map(&mut self.f);
        (split, verdict)
    }
}

impl<F, V> ProbeKey for ByHead<F, V> {
    type Key = V;
}

#[cfg(test)]
mod tests {
    use super::{ByHead, ByValue, Probe};
    use crate::sequence::{Chunk, SequenceExt};

    #[test]
    fn by_value_sees_the_value() {
        let mut probe = ByValue::new(|x: &i32| *x > 1);
        assert_eq!(probe.probe(2), (2, Some(true)));
    }

    #[test]
    fn by_head_keeps_every_element() {
        let mut probe = ByHead::new(|x: &char| x.is_uppercase());
        let (split, verdict) = probe.probe(Chunk::from(vec!['A', 'b']));
        assert_eq!(verdict, Some(true));
        assert_eq!(split.iter().collect::<String>(), "Ab");

        let (split, verdict) = probe.probe(Chunk::<char>::from(Vec::new()));
        assert_eq!(verdict, None);
        assert_eq!(split.iter().count(), 0);
    }
}
