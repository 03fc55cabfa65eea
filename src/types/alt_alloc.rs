use core::alloc::Layout;
use core::error::Error;
use core::fmt;
use core::ptr::NonNull;

/// This indicates the underlying allocator could not satisfy a request.
///
/// It carries no detail on purpose: raw allocators generally cannot say
/// more than "no", and `DynArr` wraps it into its own error reason anyway.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AllocError;

impl Error for AllocError {}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("A memory allocation error occurred.")
    }
}

/// The rust allocator API is not stable yet. Therefore, this trait is the
/// seam a `DynArr` allocates through, and it can be implemented to wrap a
/// custom allocator in a no_std environment. It mirrors the shape of the
/// unstable allocator API:
/// <https://doc.rust-lang.org/std/alloc/trait.Allocator.html>
///
/// # Safety
/// Implementations must hand out blocks that stay valid until passed to
/// `deallocate`, and must honor the requested layout. `grow` and `shrink`
/// must leave the old block untouched and valid when they fail; when they
/// succeed the old pointer must no longer be used.
pub unsafe trait RawAllocator {
    /// Allocates a chunk of memory with the given layout.
    ///
    /// On success it returns a pointer to the allocated memory. The
    /// contents of the chunk are uninitialized.
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError>;

    /// Deallocates the chunk of memory pointed at by `ptr`.
    ///
    /// This memory must have been allocated by this allocator, and the
    /// layout must match the layout the chunk was allocated with.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Grows the chunk pointed at by `old_ptr` to the new layout,
    /// preserving the old contents. The new layout must not be smaller
    /// than the old one.
    ///
    /// The default does allocate, copy, free. Implementations that can
    /// reallocate in place should override it.
    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let new = self.allocate(new_layout)?;
        let ptr = new.cast::<u8>();

        unsafe { ptr.copy_from_nonoverlapping(old_ptr, old_layout.size()) };
        unsafe { self.deallocate(old_ptr, old_layout) };
        return Ok(new);
    }

    /// Shrinks the chunk pointed at by `old_ptr` to the new layout,
    /// preserving the first `new_layout.size()` bytes. The new layout must
    /// not be larger than the old one.
    unsafe fn shrink(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let new = self.allocate(new_layout)?;
        let ptr = new.cast::<u8>();

        unsafe { ptr.copy_from_nonoverlapping(old_ptr, new_layout.size()) };
        unsafe { self.deallocate(old_ptr, old_layout) };
        return Ok(new);
    }
}
