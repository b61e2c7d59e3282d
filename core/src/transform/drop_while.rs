use crate::{reducer::Reducer, step::Step, transducer::Transducer};

#[derive(Debug, Clone)]
#[must_use = "transducers do nothing unless applied"]
pub struct DropWhile<P> {
    predicate: P,
}

/// Discards values while `predicate` holds. From the first value that fails
/// it onwards, everything is forwarded without consulting the predicate.
pub fn drop_while<P>(predicate: P) -> DropWhile<P> {
    DropWhile { predicate }
}

pub struct DropWhileReducer<R, P> {
    next: R,
    predicate: Option<P>,
}

impl<R, P: Clone> Transducer<R> for DropWhile<P> {
    type Output = DropWhileReducer<R, P>;

    fn apply(&self, next: R) -> Self::Output {
        DropWhileReducer {
            next,
            predicate: Some(self.predicate.clone()),
        }
    }
}

impl<T, R, P> Reducer<T> for DropWhileReducer<R, P>
where
    R: Reducer<T>,
    P: FnMut(&T) -> bool,
{
    type Acc = R::Acc;

    fn init(&mut self) -> R::Acc {
        self.next.init()
    }

    fn reduce(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        match &mut self.predicate {
            Some(p) => {
                if p(&item) {
                    Step::Continue(acc)
                } else {
                    self.predicate = None;
                    self.next.reduce(acc, item)
                }
            }
            None => self.next.reduce(acc, item),
        }
    }

    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.next.complete(acc)
    }
}
