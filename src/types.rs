//! Support types for [`DynArr`](crate::DynArr): the error taxonomy and the
//! allocator seam.
//!
//! The most important items are the [`RawAllocator`] trait and the
//! [`DynArrErr`] error type. If built with the `std_alloc` feature, the
//! [`Global`] wrapper over the standard allocator is also provided.

#[cfg(feature = "alloc_api2")]
mod alloc_api2;
mod alt_alloc;
mod errors;
#[cfg(feature = "std_alloc")]
mod std_alloc;

pub use alt_alloc::AllocError;
pub use alt_alloc::RawAllocator;
pub use errors::*;
#[cfg(feature = "std_alloc")]
pub use std_alloc::Global;
