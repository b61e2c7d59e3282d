//! Composable, single-pass reduction pipelines.
//!
//! A pipeline is a chain of [`Reducer`](reducer::Reducer)s: transformations
//! from [`transform`] are [`Transducer`](transducer::Transducer) factories that
//! each wrap the next reducer, ending in a terminal reducer from [`reducer`].
//! [`execution`] assembles the chain and pulls a [`Sequence`](sequence::Sequence)
//! through it, honouring early termination and flushing buffered state exactly
//! once on completion.
//!
//! ```
//! use transduce_core::{
//!     comp,
//!     prelude::*,
//!     reducer::collect,
//!     sequence::Chunk,
//!     transform::{chunk, filter, map},
//! };
//!
//! let xform = comp!(
//!     map(|x: i32| x + 1),
//!     filter(|x: &i32| x % 2 == 0),
//!     chunk(2)?,
//! );
//! let windows: Vec<Chunk<i32>> = run((0..9).into_sequence(), collect(), &xform);
//! assert_eq!(windows, vec![vec![2, 4], vec![6, 8]]);
//! # Ok::<(), transduce_core::Error>(())
//! ```

pub mod error;
pub mod execution;
pub mod outlet;
pub mod probe;
pub mod reducer;
pub mod sequence;
pub mod step;
pub mod transducer;
pub mod transform;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::{
        execution::{reduce, run},
        reducer::Reducer,
        sequence::{IntoSequence, Sequence, SequenceExt},
        step::Step,
        transducer::{Comp, Transducer, TransducerExt},
    };
}
