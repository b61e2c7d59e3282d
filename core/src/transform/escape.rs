use core::mem;

use tracing::debug;

use crate::{
    outlet::Outlet,
    probe::{ByHead, ByValue, Probe},
    reducer::Reducer,
    step::Step,
    transducer::Transducer,
};

#[must_use = "transducers do nothing unless applied"]
pub struct Escape<P, V> {
    probe: P,
    outlet: Outlet<V>,
    close_on_complete: bool,
}

impl<P: Clone, V> Clone for Escape<P, V> {
    fn clone(&self) -> Self {
        Self {
            probe: self.probe.clone(),
            outlet: self.outlet.clone(),
            close_on_complete: self.close_on_complete,
        }
    }
}

/// Diverts values satisfying `predicate` into `outlet` instead of forwarding
/// them.
///
/// With `close_on_complete` every pipeline assembled from this factory
/// attaches to the outlet, and the outlet is closed for every holder once the
/// last attached pipeline completes or is dropped. Sending into it afterwards
/// fails with [`Error::OutletClosed`](crate::Error::OutletClosed). The caller
/// owns that contract.
///
/// # Panics
///
/// The assembled reducer panics if the outlet rejects a diverted value, i.e.
/// it was closed or its receiver was dropped while the pipeline still ran.
pub fn escape<P, V>(
    predicate: P,
    outlet: Outlet<V>,
    close_on_complete: bool,
) -> Escape<ByValue<P, bool>, V> {
    Escape {
        probe: ByValue::new(predicate),
        outlet,
        close_on_complete,
    }
}

/// Like [`escape`] for nested sequence values, tested on their head.
///
/// Diverted values arrive in the outlet as the reassembled
/// [`Split`](crate::sequence::Split). Empty nested sequences are forwarded.
///
/// # Panics
///
/// See [`escape`].
pub fn escape_head<P, V>(
    predicate: P,
    outlet: Outlet<V>,
    close_on_complete: bool,
) -> Escape<ByHead<P, bool>, V> {
    Escape {
        probe: ByHead::new(predicate),
        outlet,
        close_on_complete,
    }
}

pub struct EscapeReducer<R, P, V> {
    next: R,
    probe: P,
    outlet: Outlet<V>,
    attached: bool,
}

impl<R, P: Clone, V> Transducer<R> for Escape<P, V> {
    type Output = EscapeReducer<R, P, V>;

    fn apply(&self, next: R) -> Self::Output {
        if self.close_on_complete {
            self.outlet.attach();
        }
        EscapeReducer {
            next,
            probe: self.probe.clone(),
            outlet: self.outlet.clone(),
            attached: self.close_on_complete,
        }
    }
}

impl<T, R, P, V> Reducer<T> for EscapeReducer<R, P, V>
where
    P: Probe<T, Value = V, Verdict = bool>,
    R: Reducer<V>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> R::Acc {
        self.next.init()
    }

    fn reduce(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        let (value, verdict) = self.probe.probe(item);
        if verdict != Some(true) {
            return self.next.reduce(acc, value);
        }
        if let Err(err) = self.outlet.send(value) {
            panic!("escape outlet rejected a diverted value: {err}");
        }
        Step::Continue(acc)
    }

    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        if mem::take(&mut self.attached) && self.outlet.detach() {
            debug!("escape closed its outlet on completion");
        }
        self.next.complete(acc)
    }
}

impl<R, P, V> Drop for EscapeReducer<R, P, V> {
    fn drop(&mut self) {
        if self.attached {
            self.outlet.detach();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{escape, escape_head};
    use crate::{
        comp,
        error::Error,
        outlet,
        reducer::{collect, Reducer},
        sequence::{Chunk, SequenceExt, Split},
        transducer::Transducer,
        transform::{chunk, map, tests::collect_vec},
    };

    #[test]
    fn diverts_matching_values() {
        let (tx, rx) = outlet::unbounded();
        let xform = escape(|x: &i32| *x < 0, tx.clone(), true);
        let out: Vec<i32> = collect_vec(&xform, [1, -1, 2, -2]);
        assert_eq!(out, vec![1, 2]);
        assert_eq!(rx.iter().collect::<Vec<_>>(), vec![-1, -2]);
        assert_eq!(tx.send(9), Err(Error::OutletClosed));
    }

    #[test]
    fn outlet_stays_open_without_close_flag() {
        let (tx, rx) = outlet::unbounded();
        let xform = escape(|s: &&str| s.starts_with('#'), tx.clone(), false);
        let out: Vec<&str> = collect_vec(&xform, ["a", "#b"]);
        assert_eq!(out, vec!["a"]);
        tx.send("#late").unwrap();
        drop(tx);
        drop(xform);
        assert_eq!(rx.iter().collect::<Vec<_>>(), vec!["#b", "#late"]);
    }

    #[test]
    fn head_escape_sends_whole_window() {
        let (tx, rx) = outlet::unbounded::<Split<Chunk<i32>>>();
        let xform = comp!(
            chunk(2).unwrap(),
            escape_head(|head: &i32| *head == 2, tx, true),
            map(|w: Split<Chunk<i32>>| w.iter().collect::<Vec<_>>())
        );
        let out: Vec<Vec<i32>> = collect_vec(&xform, 0..6);
        assert_eq!(out, vec![vec![0, 1], vec![4, 5]]);

        let escaped: Vec<Vec<i32>> = rx.iter().map(|w| w.iter().collect()).collect();
        assert_eq!(escaped, vec![vec![2, 3]]);
    }

    #[test]
    fn outlet_waits_for_every_pipeline() {
        let (tx, rx) = outlet::unbounded();
        let xform = escape(|x: &i32| *x < 0, tx.clone(), true);
        let mut first = xform.apply(collect::<Vec<i32>>());
        let mut second = xform.apply(collect::<Vec<i32>>());

        let acc = Reducer::<i32>::init(&mut first);
        let acc = Reducer::<i32>::reduce(&mut first, acc, -1).into_inner();
        assert!(Reducer::<i32>::complete(&mut first, acc).is_empty());
        assert!(!tx.is_closed());

        let acc = Reducer::<i32>::init(&mut second);
        let acc = Reducer::<i32>::reduce(&mut second, acc, -2).into_inner();
        let acc = Reducer::<i32>::reduce(&mut second, acc, 3).into_inner();
        assert_eq!(Reducer::<i32>::complete(&mut second, acc), vec![3]);
        assert!(tx.is_closed());
        assert_eq!(rx.iter().collect::<Vec<_>>(), vec![-1, -2]);
    }

    #[test]
    fn dropped_pipeline_releases_outlet() {
        let (tx, _rx) = outlet::unbounded::<i32>();
        let xform = escape(|x: &i32| *x < 0, tx.clone(), true);
        drop(xform.apply(collect::<Vec<i32>>()));
        assert!(tx.is_closed());
    }

    #[test]
    #[should_panic(expected = "escape outlet rejected")]
    fn sending_into_closed_outlet_is_fatal() {
        let (tx, _rx) = outlet::unbounded();
        tx.close();
        let _: Vec<i32> = collect_vec(&escape(|_: &i32| true, tx, false), [1]);
    }
}
