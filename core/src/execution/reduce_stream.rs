use core::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use futures_core::Stream;
use pin_project_lite::pin_project;
use tracing::trace;

use crate::{reducer::Reducer, step::Step};

pin_project! {
    /// Future returned by [`reduce_stream`].
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct ReduceStream<S, R, A> {
        #[pin]
        stream: S,
        reducer: R,
        acc: Option<A>,
    }
}

/// Drives an asynchronous stream through `reducer`.
///
/// Same guarantees as [`reduce`](super::reduce): polling stops as soon as a
/// reduction terminates and `complete` runs exactly once.
pub fn reduce_stream<S, R>(stream: S, mut reducer: R) -> ReduceStream<S, R, R::Acc>
where
    S: Stream,
    R: Reducer<S::Item>,
{
    let acc = reducer.init();
    ReduceStream {
        stream,
        reducer,
        acc: Some(acc),
    }
}

impl<S, R> Future for ReduceStream<S, R, R::Acc>
where
    S: Stream,
    R: Reducer<S::Item>,
{
    type Output = R::Acc;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        loop {
            let acc = this
                .acc
                .take()
                .expect("`ReduceStream` polled after completion");
            match this.stream.as_mut().poll_next(cx) {
                Poll::Pending => {
                    *this.acc = Some(acc);
                    return Poll::Pending;
                }
                Poll::Ready(Some(item)) => match this.reducer.reduce(acc, item) {
                    Step::Continue(acc) => *this.acc = Some(acc),
                    Step::Done(acc) => {
                        trace!("stream reduction terminated early");
                        return Poll::Ready(this.reducer.complete(acc));
                    }
                },
                Poll::Ready(None) => return Poll::Ready(this.reducer.complete(acc)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures_lite::{stream, StreamExt};

    use super::reduce_stream;
    use crate::{
        execution::assemble,
        reducer::{collect, completing, count},
        transform::{chunk, filter, take},
    };

    #[test]
    fn reduces_async_stream() {
        spin_on::spin_on(async {
            let reducer = assemble(&filter(|x: &i32| x % 3 == 0), collect::<Vec<i32>>());
            let out = reduce_stream(stream::iter(0..10), reducer).await;
            assert_eq!(out, vec![0, 3, 6, 9]);
        })
    }

    #[test]
    fn flushes_on_stream_end() {
        spin_on::spin_on(async {
            let xform = chunk(4).unwrap();
            let windows = reduce_stream(stream::iter(0..10), assemble(&xform, count())).await;
            assert_eq!(windows, 3);
        })
    }

    #[test]
    fn stops_polling_after_termination() {
        let polled = Cell::new(0);
        let completed = Cell::new(0);
        spin_on::spin_on(async {
            let source = stream::iter(0..).map(|x: u64| {
                polled.set(polled.get() + 1);
                x
            });
            let tally = completing(collect::<Vec<u64>>(), |acc: Vec<u64>| {
                completed.set(completed.get() + 1);
                acc
            });
            let out = reduce_stream(source, assemble(&take(3), tally)).await;
            assert_eq!(out, vec![0, 1, 2]);
        });
        assert_eq!(polled.get(), 3);
        assert_eq!(completed.get(), 1);
    }
}
