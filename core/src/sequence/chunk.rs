use std::vec::IntoIter;

use super::Sequence;

/// A nested sequence value emitted by the windowing transformations.
///
/// A chunk owns its elements outright, so nothing downstream can reach the
/// buffer it was filled from.
#[derive(Debug, Clone)]
pub struct Chunk<T> {
    items: IntoIter<T>,
}

impl<T> Chunk<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.len() == 0
    }

    /// The elements that have not been pulled yet.
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items.collect()
    }
}

impl<T> From<Vec<T>> for Chunk<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }
}

impl<T> Sequence for Chunk<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> IntoIterator for Chunk<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items
    }
}

impl<T: PartialEq> PartialEq for Chunk<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Chunk<T> {}

impl<T: PartialEq> PartialEq<[T]> for Chunk<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Chunk<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::Chunk;
    use crate::sequence::Sequence;

    #[test]
    fn pulls_shrink_the_remaining_slice() {
        let mut chunk = Chunk::from(vec![1, 2, 3]);
        assert_eq!(chunk.len(), 3);
        assert_eq!(chunk.next(), Some(1));
        assert_eq!(chunk.as_slice(), &[2, 3]);
        assert_eq!(chunk.size_hint(), (2, Some(2)));
        assert_eq!(chunk.into_vec(), vec![2, 3]);
    }

    #[test]
    fn compares_against_vectors() {
        assert_eq!(Chunk::from(vec!['a', 'b']), vec!['a', 'b']);
        assert!(Chunk::<u8>::from(Vec::new()).is_empty());
    }
}
