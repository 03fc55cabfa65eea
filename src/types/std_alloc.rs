use core::ptr::NonNull;
use std::alloc;
use std::alloc::Layout;

use super::AllocError;
use super::RawAllocator;

/// This is basically a wrapper around the std global allocator APIs.
///
/// See:
/// <https://doc.rust-lang.org/std/alloc/struct.Global.html>
///
/// It exists because the allocator APIs are not stabilized yet. Note that
/// `std::alloc::alloc()` and friends require a non-zero layout size, which
/// this wrapper turns into an `AllocError` instead of undefined behavior.
/// `DynArr` never asks for a zero-size block, so the guard only matters for
/// direct users of the wrapper.
#[derive(Debug, Copy, Clone, Default)]
pub struct Global;

unsafe impl RawAllocator for Global {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        if layout.size() == 0 {
            return Err(AllocError);
        };
        let ptr = unsafe { alloc::alloc(layout) };
        let Some(ptr) = NonNull::new(ptr) else {
            return Err(AllocError);
        };
        return Ok(NonNull::slice_from_raw_parts(ptr, layout.size()));
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { alloc::dealloc(ptr.as_ptr(), layout) };
    }

    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        if new_layout.size() == 0 {
            return Err(AllocError);
        }
        let new = unsafe { alloc::realloc(old_ptr.as_ptr(), old_layout, new_layout.size()) };
        let Some(new) = NonNull::new(new) else {
            return Err(AllocError);
        };
        return Ok(NonNull::slice_from_raw_parts(new, new_layout.size()));
    }

    unsafe fn shrink(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        if new_layout.size() == 0 {
            return Err(AllocError);
        }
        let new = unsafe { alloc::realloc(old_ptr.as_ptr(), old_layout, new_layout.size()) };
        let Some(new) = NonNull::new(new) else {
            return Err(AllocError);
        };
        return Ok(NonNull::slice_from_raw_parts(new, new_layout.size()));
    }
}
