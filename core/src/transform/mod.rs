//! The transformation library.
//!
//! Every constructor returns a reusable factory. Stateful transformations
//! (`chunk`, `chunk_by`, `dedupe`, `take`, `drop`, `take_nth`, ...) allocate
//! their counters, buffers and seen-sets when the factory is applied, so each
//! assembled pipeline starts from fresh state and none of it is shared.
//!
//! Constructors that validate their arguments return a [`Result`] and fail
//! before any pipeline is assembled.
//!
//! [`Result`]: crate::Result

pub mod chunk;
pub mod chunk_by;
pub mod dedupe;
pub mod drop;
pub mod drop_while;
pub mod escape;
pub mod filter;
pub mod keep;
pub mod map;
pub mod mapcat;
pub mod random_sample;
pub mod replace;
pub mod take;
pub mod take_nth;
pub mod take_while;

pub use self::{
    chunk::chunk,
    chunk_by::{chunk_by, chunk_by_head},
    dedupe::dedupe,
    drop::drop,
    drop_while::drop_while,
    escape::{escape, escape_head},
    filter::{filter, filter_head, remove},
    keep::{keep, keep_indexed},
    map::map,
    mapcat::{cat, mapcat},
    random_sample::{random_sample, random_sample_seeded},
    replace::replace,
    take::take,
    take_nth::take_nth,
    take_while::take_while,
};
