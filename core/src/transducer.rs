//! Transformation factories and their composition.

/// A factory that wraps one reducer into another.
///
/// `apply` takes `&self`: a transducer holds only its configuration and can
/// be applied any number of times. Stateful transformations allocate their
/// per-run state inside `apply`, so every assembled pipeline starts fresh.
pub trait Transducer<R> {
    type Output;

    fn apply(&self, next: R) -> Self::Output;
}

/// The empty transformation list.
impl<R> Transducer<R> for () {
    type Output = R;

    #[inline]
    fn apply(&self, next: R) -> R {
        next
    }
}

impl<R, X: Transducer<R> + ?Sized> Transducer<R> for &X {
    type Output = X::Output;

    #[inline]
    fn apply(&self, next: R) -> Self::Output {
        X::apply(*self, next)
    }
}

/// `outer` followed by `inner`: `outer` sees every value first.
#[derive(Debug, Clone, Copy)]
pub struct Comp<A, B> {
    outer: A,
    inner: B,
}

impl<A, B> Comp<A, B> {
    pub fn new(outer: A, inner: B) -> Self {
        Self { outer, inner }
    }
}

impl<R, A, B> Transducer<R> for Comp<A, B>
where
    B: Transducer<R>,
    A: Transducer<B::Output>,
{
    type Output = A::Output;

    #[inline]
    fn apply(&self, next: R) -> Self::Output {
        self.outer.apply(self.inner.apply(next))
    }
}

pub trait TransducerExt: Sized {
    /// Appends `inner` after `self`, so `self` still sees every value first.
    #[inline]
    fn then<B>(self, inner: B) -> Comp<Self, B> {
        Comp::new(self, inner)
    }
}

impl<X> TransducerExt for X {}

/// Composes transducers in reading order.
///
/// The first transducer listed becomes the outermost reducer, so it processes
/// each value first. `comp!()` is the empty transformation list.
///
/// # Examples
///
/// ```
/// use transduce_core::{comp, prelude::*, reducer::collect, transform::{filter, map}};
///
/// let xform = comp!(map(|x: i32| x * 10), filter(|x: &i32| *x > 15));
/// let out: Vec<i32> = run(vec![1, 2, 3].into_sequence(), collect(), &xform);
/// assert_eq!(out, vec![20, 30]);
/// ```
#[macro_export]
macro_rules! comp {
    () => {
        ()
    };
    ($x:expr $(,)?) => {
        $x
    };
    ($x:expr, $($rest:expr),+ $(,)?) => {
        $crate::transducer::Comp::new($x, $crate::comp!($($rest),+))
    };
}
