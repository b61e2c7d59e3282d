use core::{marker::PhantomData, mem};

use tracing::trace;

use crate::{
    error::{Error, Result},
    reducer::Reducer,
    sequence::Chunk,
    step::Step,
    transducer::Transducer,
};

#[must_use = "transducers do nothing unless applied"]
pub struct Chunks<T> {
    length: usize,
    _item: PhantomData<fn(T)>,
}

impl<T> Clone for Chunks<T> {
    fn clone(&self) -> Self {
        Self {
            length: self.length,
            _item: PhantomData,
        }
    }
}

/// Groups values into windows of `length`, forwarding each full window as a
/// [`Chunk`].
///
/// A partial window left over at completion is forwarded as a final, shorter
/// chunk unless something downstream has already terminated the run.
pub fn chunk<T>(length: usize) -> Result<Chunks<T>> {
    if length == 0 {
        return Err(Error::InvalidChunkLength(length));
    }
    Ok(Chunks {
        length,
        _item: PhantomData,
    })
}

pub struct ChunksReducer<R, T> {
    next: R,
    length: usize,
    buffer: Vec<T>,
    terminated: bool,
}

impl<R, T> Transducer<R> for Chunks<T> {
    type Output = ChunksReducer<R, T>;

    fn apply(&self, next: R) -> Self::Output {
        ChunksReducer {
            next,
            length: self.length,
            buffer: Vec::with_capacity(self.length),
            terminated: false,
        }
    }
}

impl<T, R> Reducer<T> for ChunksReducer<R, T>
where
    R: Reducer<Chunk<T>>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> R::Acc {
        self.next.init()
    }

    fn reduce(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        self.buffer.push(item);
        if self.buffer.len() < self.length {
            return Step::Continue(acc);
        }

        let window = mem::replace(&mut self.buffer, Vec::with_capacity(self.length));
        let step = self.next.reduce(acc, Chunk::from(window));
        self.terminated = step.is_done();
        step
    }

    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        let acc = if self.buffer.is_empty() || self.terminated {
            acc
        } else {
            let window = mem::take(&mut self.buffer);
            trace!(len = window.len(), "flushing partial chunk");
            self.next.reduce(acc, Chunk::from(window)).into_inner()
        };
        self.next.complete(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::chunk;
    use crate::{
        comp,
        error::Error,
        sequence::Chunk,
        transform::{map, take, tests::collect_vec},
    };

    #[test]
    fn full_windows_then_partial_flush() {
        let out: Vec<Chunk<i32>> = collect_vec(&chunk(2).unwrap(), 1..=5);
        assert_eq!(out, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn exact_multiple_has_no_flush() {
        let out: Vec<Chunk<i32>> = collect_vec(&chunk(3).unwrap(), 0..6);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn zero_length_is_rejected() {
        assert_eq!(chunk::<u8>(0).err(), Some(Error::InvalidChunkLength(0)));
    }

    #[test]
    fn downstream_termination_ends_the_run() {
        let xform = comp!(chunk(2).unwrap(), take(1));
        let out: Vec<Chunk<i32>> = collect_vec(&xform, 0..5);
        assert_eq!(out, vec![vec![0, 1]]);
    }

    #[test]
    fn upstream_termination_still_flushes() {
        let xform = comp!(
            take(3),
            chunk(2).unwrap(),
            map(|c: Chunk<i32>| c.into_vec())
        );
        let out: Vec<Vec<i32>> = collect_vec(&xform, 0..10);
        assert_eq!(out, vec![vec![0, 1], vec![2]]);
    }
}
