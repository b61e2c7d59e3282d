use core::marker::PhantomData;

use super::Reducer;
use crate::step::Step;

/// Appends every value into a growing collection.
#[must_use = "reducers do nothing unless driven"]
pub struct Collect<C> {
    _collection: PhantomData<fn() -> C>,
}

pub fn collect<C>() -> Collect<C> {
    Collect {
        _collection: PhantomData,
    }
}

impl<C> Clone for Collect<C> {
    fn clone(&self) -> Self {
        collect()
    }
}

impl<T, C> Reducer<T> for Collect<C>
where
    C: Default + Extend<T>,
{
    type Acc = C;

    fn init(&mut self) -> C {
        C::default()
    }

    fn reduce(&mut self, mut acc: C, item: T) -> Step<C> {
        acc.extend(Some(item));
        Step::Continue(acc)
    }

    fn complete(&mut self, acc: C) -> C {
        acc
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::collect;
    use crate::{reducer::Reducer, step::Step};

    #[test]
    fn extends_any_collection() {
        let mut set = collect::<BTreeSet<u8>>();
        let acc = Reducer::<u8>::init(&mut set);
        let acc = set.reduce(acc, 3).into_inner();
        let acc = set.reduce(acc, 1).into_inner();
        let acc = Reducer::<u8>::complete(&mut set, acc);
        assert_eq!(acc.into_iter().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn never_terminates() {
        let mut vec = collect::<Vec<i32>>();
        let acc = Reducer::<i32>::init(&mut vec);
        assert_eq!(vec.reduce(acc, 1), Step::Continue(vec![1]));
    }
}
