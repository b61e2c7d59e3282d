use super::Sequence;

/// Bridges a [`Sequence`] back into an [`Iterator`].
#[derive(Debug, Clone)]
pub struct Iter<S> {
    pub(super) sequence: S,
}

impl<S: Sequence> Iterator for Iter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sequence.size_hint()
    }
}
