//! The side channel written by the escape transformations.
//!
//! An [`Outlet`] is owned by the caller and handed to `escape` by clone. The
//! engine only ever sends into it and, when asked to, closes it once the
//! pipelines writing into it have completed. Every assembled pipeline that
//! wants the outlet closed attaches to it, and the close happens when the
//! last attached pipeline detaches. Closing is shared by every clone and
//! happens at most once; later sends fail with [`Error::OutletClosed`].

use std::sync::{
    mpsc::{self, Receiver},
    Arc, Mutex, MutexGuard, PoisonError,
};

use tracing::debug;

use crate::error::{Error, Result};

enum Sender<T> {
    Unbounded(mpsc::Sender<T>),
    Bounded(mpsc::SyncSender<T>),
}

impl<T> Clone for Sender<T> {
    fn clone(&self) -> Self {
        match self {
            Sender::Unbounded(tx) => Sender::Unbounded(tx.clone()),
            Sender::Bounded(tx) => Sender::Bounded(tx.clone()),
        }
    }
}

struct Shared<T> {
    sender: Option<Sender<T>>,
    attached: usize,
}

pub struct Outlet<T> {
    shared: Arc<Mutex<Shared<T>>>,
}

impl<T> Clone for Outlet<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

/// An outlet that never blocks the driver.
pub fn unbounded<T>() -> (Outlet<T>, Receiver<T>) {
    let (tx, rx) = mpsc::channel();
    (Outlet::new(Sender::Unbounded(tx)), rx)
}

/// An outlet holding at most `capacity` undelivered values.
///
/// A full outlet blocks the sender, stalling the driver until the receiver
/// catches up. A capacity of zero makes every send a rendezvous.
pub fn bounded<T>(capacity: usize) -> (Outlet<T>, Receiver<T>) {
    let (tx, rx) = mpsc::sync_channel(capacity);
    (Outlet::new(Sender::Bounded(tx)), rx)
}

impl<T> Outlet<T> {
    fn new(sender: Sender<T>) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                sender: Some(sender),
                attached: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Shared<T>> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn send(&self, value: T) -> Result<()> {
        // Blocking sends must not hold the lock.
        let sender = self.lock().sender.clone().ok_or(Error::OutletClosed)?;
        let sent = match sender {
            Sender::Unbounded(tx) => tx.send(value).is_ok(),
            Sender::Bounded(tx) => tx.send(value).is_ok(),
        };
        if sent {
            Ok(())
        } else {
            Err(Error::OutletDisconnected)
        }
    }

    /// Closes the outlet for every clone. Returns `false` if it was already
    /// closed.
    pub fn close(&self) -> bool {
        let closed = self.lock().sender.take().is_some();
        if closed {
            debug!("outlet closed");
        }
        closed
    }

    pub fn is_closed(&self) -> bool {
        self.lock().sender.is_none()
    }

    /// Registers a pipeline that closes the outlet when it finishes.
    pub(crate) fn attach(&self) {
        self.lock().attached += 1;
    }

    /// Unregisters a pipeline, closing the outlet if no other attached
    /// pipeline is still running. Returns `true` if this call closed it.
    pub(crate) fn detach(&self) -> bool {
        let mut shared = self.lock();
        shared.attached = shared.attached.saturating_sub(1);
        if shared.attached > 0 {
            return false;
        }
        let closed = shared.sender.take().is_some();
        drop(shared);
        if closed {
            debug!("outlet closed by its last pipeline");
        }
        closed
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::{bounded, unbounded};
    use crate::error::Error;

    #[test]
    fn close_is_shared_and_idempotent() {
        let (outlet, rx) = unbounded();
        let other = outlet.clone();
        outlet.send(1).unwrap();
        assert!(other.close());
        assert!(!outlet.close());
        assert!(outlet.is_closed());
        assert_eq!(outlet.send(2), Err(Error::OutletClosed));
        assert_eq!(rx.iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn closes_when_last_pipeline_detaches() {
        let (outlet, rx) = unbounded();
        outlet.attach();
        outlet.attach();
        assert!(!outlet.detach());
        outlet.send(1).unwrap();
        assert!(outlet.detach());
        assert!(outlet.is_closed());
        assert_eq!(rx.iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn dropped_receiver_disconnects() {
        let (outlet, rx) = unbounded::<u8>();
        drop(rx);
        assert_eq!(outlet.send(1), Err(Error::OutletDisconnected));
    }

    #[test]
    fn bounded_outlet_hands_off_in_order() {
        let (outlet, rx) = bounded(1);
        let producer = thread::spawn(move || {
            for i in 0..5 {
                outlet.send(i).unwrap();
            }
            outlet.close();
        });
        assert_eq!(rx.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        producer.join().unwrap();
    }
}
