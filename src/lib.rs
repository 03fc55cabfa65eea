//! # Dynamic Array
//!
//! The `dyn_array` crate provides a `#[no_std]` growable array much like `std::Vec`,
//! built for code that wants to handle allocation failure instead of aborting on it.
//! Every operation that may allocate returns a [`DynArrResult`] describing exactly
//! what went wrong, so an out-of-memory condition can be told apart from a capacity
//! computation that overflowed.
//!
//! A few things set [`DynArr`] apart from the standard `Vec`:
//!
//! * Allocations are fallible. Instead of panicking, `push`, `reserve` and friends
//!   return an error with a [`reason`](types::DynArrErr::reason) the caller can act on.
//! * The first allocation is floored at a minimum capacity (the `MIN_CAP` const
//!   generic, default 4), which is also the floor [`DynArr::shrink`] will not go
//!   below. Small arrays stop reallocating almost immediately.
//! * Removal comes in two flavors: [`DynArr::del_fast`] fills the hole with the last
//!   element in O(1), [`DynArr::del_stable`] shifts the tail down and keeps the
//!   order.
//! * `DynArr` never runs element destructors. Removed values are moved back to the
//!   caller; everything else is dropped as raw bytes when the buffer is released.
//!   It is intended for plain data.
//!
//! # Feature Flags
//! * `std_alloc` (default) - Provides [`types::Global`], a wrapper implementing
//!   [`types::RawAllocator`] over the standard allocator, and the [`DynArray`]
//!   alias using it.
//!
//! * `alloc_api2` - Implements [`types::RawAllocator`] for every
//!   `allocator_api2::alloc::Allocator`, so custom allocators written against that
//!   crate work here without glue.
//!
//! * `debug_tag` - Stores a sentinel word next to the buffer bookkeeping and
//!   asserts it at the start of every mutating call. Catches use of a clobbered or
//!   foreign array at the cost of one word per array. A mismatch is a programmer
//!   error and panics; it is never reported through [`DynArrResult`].

#![no_std]

#[cfg(any(feature = "std_alloc", test))]
extern crate std;

mod dyn_array;
pub mod types;

pub use dyn_array::DynArr;
#[cfg(feature = "std_alloc")]
pub use dyn_array::DynArray;
pub use types::DynArrResult;
