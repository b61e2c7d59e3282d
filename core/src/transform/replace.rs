use std::{collections::HashMap, hash::Hash, sync::Arc};

use crate::{reducer::Reducer, step::Step, transducer::Transducer};

#[derive(Debug)]
#[must_use = "transducers do nothing unless applied"]
pub struct Replace<T> {
    table: Arc<HashMap<T, T>>,
}

impl<T> Clone for Replace<T> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

/// Swaps values found in `pairs` for their mapped replacement, forwarding
/// every other value unchanged.
pub fn replace<T, I>(pairs: I) -> Replace<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = (T, T)>,
{
    Replace {
        table: Arc::new(pairs.into_iter().collect()),
    }
}

pub struct ReplaceReducer<R, T> {
    next: R,
    table: Arc<HashMap<T, T>>,
}

impl<R, T> Transducer<R> for Replace<T> {
    type Output = ReplaceReducer<R, T>;

    fn apply(&self, next: R) -> Self::Output {
        ReplaceReducer {
            next,
            table: Arc::clone(&self.table),
        }
    }
}

impl<T, R> Reducer<T> for ReplaceReducer<R, T>
where
    T: Eq + Hash + Clone,
    R: Reducer<T>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> R::Acc {
        self.next.init()
    }

    fn reduce(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        let value = match self.table.get(&item) {
            Some(replacement) => replacement.clone(),
            None => item,
        };
        self.next.reduce(acc, value)
    }

    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.next.complete(acc)
    }
}
