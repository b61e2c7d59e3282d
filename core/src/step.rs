/// Result of feeding one value into a [`Reducer`](crate::reducer::Reducer).
///
/// `Done` carries the accumulator together with the request to stop pulling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a step may ask the driver to stop"]
pub enum Step<A> {
    Continue(A),
    Done(A),
}

impl<A> Step<A> {
    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done(_))
    }

    #[inline]
    pub fn into_inner(self) -> A {
        match self {
            Step::Continue(acc) | Step::Done(acc) => acc,
        }
    }

    #[inline]
    pub fn map<B, F>(self, f: F) -> Step<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Step::Continue(acc) => Step::Continue(f(acc)),
            Step::Done(acc) => Step::Done(f(acc)),
        }
    }

    /// Chains another reduction onto a step that has not terminated.
    #[inline]
    pub fn and_then<F>(self, f: F) -> Step<A>
    where
        F: FnOnce(A) -> Step<A>,
    {
        match self {
            Step::Continue(acc) => f(acc),
            Step::Done(acc) => Step::Done(acc),
        }
    }

    /// Marks the step as terminating while keeping its accumulator.
    #[inline]
    pub fn done(self) -> Step<A> {
        Step::Done(self.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::Step;

    #[test]
    fn and_then_skips_after_done() {
        let step = Step::Done(1).and_then(|acc| Step::Continue(acc + 1));
        assert_eq!(step, Step::Done(1));

        let step = Step::Continue(1).and_then(|acc| Step::Done(acc + 1));
        assert_eq!(step, Step::Done(2));
    }

    #[test]
    fn map_keeps_variant() {
        assert_eq!(Step::Continue(2).map(|a| a * 3), Step::Continue(6));
        assert_eq!(Step::Done(2).map(|a| a * 3), Step::Done(6));
        assert!(Step::Continue(0).done().is_done());
    }
}
