use super::{Iter, Sequence};

/// Guarantees that an exhausted sequence stays exhausted.
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless pulled"]
pub struct Fuse<S> {
    pub(super) sequence: S,
    pub(super) done: bool,
}

impl<S: Sequence> Sequence for Fuse<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.done {
            return None;
        }
        let next = self.sequence.next();
        if next.is_none() {
            self.done = true;
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            self.sequence.size_hint()
        }
    }
}

impl<S: Sequence> IntoIterator for Fuse<S> {
    type Item = S::Item;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        Iter { sequence: self }
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::{from_fn, Sequence, SequenceExt};

    #[test]
    fn no_resurrection_after_exhaustion() {
        let mut calls = 0;
        // Alternates between exhausted and producing.
        let flaky = from_fn(move || {
            calls += 1;
            if calls % 2 == 0 {
                None
            } else {
                Some(calls)
            }
        });
        let mut seq = flaky.fuse();
        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
        assert_eq!(seq.size_hint(), (0, Some(0)));
        assert_eq!(seq.into_iter().next(), None);
    }
}
