use core::fmt;

use super::{iter::Iter, Sequence};

/// A sequence whose first element has already been pulled.
///
/// The head stays inspectable through [`Split::head`] and is still yielded
/// first, so splitting never loses an element.
#[must_use = "sequences do nothing unless pulled"]
pub struct Split<S: Sequence> {
    head: Option<S::Item>,
    rest: S,
}

impl<S: Sequence> Split<S> {
    pub fn new(mut sequence: S) -> Self {
        Self {
            head: sequence.next(),
            rest: sequence,
        }
    }

    /// The split head, `None` if the sequence was empty or the head has since
    /// been pulled.
    pub fn head(&self) -> Option<&S::Item> {
        self.head.as_ref()
    }

    /// Separates the head from the remainder.
    pub fn into_parts(self) -> (Option<S::Item>, S) {
        (self.head, self.rest)
    }
}

impl<S: Sequence> Sequence for Split<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        match self.head.take() {
            Some(head) => Some(head),
            None => self.rest.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let head = usize::from(self.head.is_some());
        let (lower, upper) = self.rest.size_hint();
        (
            lower.saturating_add(head),
            upper.and_then(|u| u.checked_add(head)),
        )
    }
}

impl<S: Sequence> IntoIterator for Split<S> {
    type Item = S::Item;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        Iter { sequence: self }
    }
}

impl<S> fmt::Debug for Split<S>
where
    S: Sequence + fmt::Debug,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Split")
            .field("head", &self.head)
            .field("rest", &self.rest)
            .finish()
    }
}
