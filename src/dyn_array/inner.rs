use core::alloc::Layout;
use core::ptr::NonNull;

use super::growth::grow_size;
use crate::types::DynArrErr;
use crate::types::DynArrResult;
use crate::types::ErrorKind;
use crate::types::RawAllocator;

/// Sentinel stored per array when the `debug_tag` feature is on. A mutating
/// call that finds anything else is operating on clobbered memory.
#[cfg(feature = "debug_tag")]
pub(crate) const VALID_TAG: u32 = 0x4459_4E41;

/// Computes the layout for `capacity` elements of layout `elem`.
///
/// This is where the address-space bound lives: a byte count that overflows
/// `usize`, or exceeds `isize::MAX` (rust is pretty adamant about allocation
/// sizes staying under that), is a capacity overflow.
const fn layout_array(elem: Layout, capacity: usize) -> DynArrResult<Layout> {
    let lay = elem.pad_to_align();
    let Some(bytes) = capacity.checked_mul(lay.size()) else {
        return Err(DynArrErr::new(ErrorKind::CapacityOverflow));
    };
    if bytes > (isize::MAX as usize) {
        return Err(DynArrErr::new(ErrorKind::CapacityOverflow));
    }
    let Ok(lay) = Layout::from_size_align(bytes, elem.align()) else {
        return Err(DynArrErr::new(ErrorKind::LayoutFailure));
    };
    return Ok(lay);
}

/// The bookkeeping half of a `DynArr`: the buffer pointer, how many slots
/// it holds, and the allocator that owns the block.
///
/// `Inner` counts slots, never bytes, and knows nothing about the element
/// type beyond the `Layout` threaded into each call. It also does not track
/// the live length; that stays in `DynArr`.
pub(crate) struct Inner<A: RawAllocator> {
    ptr:      NonNull<u8>,
    capacity: usize,
    alloc:    A,
    #[cfg(feature = "debug_tag")]
    tag:      u32,
}

impl<A: RawAllocator> Inner<A> {
    /// The unallocated state: a dangling, well-aligned pointer and zero
    /// capacity. Nothing is freed from this state and nothing reads
    /// through the pointer.
    pub(crate) const fn new_in(alloc: A, align: usize) -> Self {
        let ptr = align as *mut u8;
        return Self {
            ptr:      unsafe { NonNull::new_unchecked(ptr) },
            capacity: 0,
            alloc:    alloc,
            #[cfg(feature = "debug_tag")]
            tag:      VALID_TAG,
        };
    }

    /// Allocates one block for exactly `capacity` slots. The `MIN_CAP`
    /// floor is applied by the caller. Zero-size layouts (ZSTs, or a zero
    /// capacity) never touch the allocator.
    pub(crate) fn with_capacity(alloc: A, capacity: usize, elem: Layout) -> DynArrResult<Self> {
        let layout = layout_array(elem, capacity)?;
        if layout.size() == 0 {
            return Ok(Self::new_in(alloc, elem.align()));
        }

        let Ok(ptr) = alloc.allocate(layout) else {
            return Err(DynArrErr::new(ErrorKind::AllocFailure));
        };

        return Ok(Self {
            ptr:      ptr.cast(),
            capacity: capacity,
            alloc:    alloc,
            #[cfg(feature = "debug_tag")]
            tag:      VALID_TAG,
        });
    }

    /// Slot capacity as the caller sees it. A ZST buffer is never
    /// allocated, so its capacity is only bounded by the length type.
    pub(crate) const fn capacity(&self, elem_size: usize) -> usize {
        if elem_size == 0 {
            return usize::MAX;
        }
        return self.capacity;
    }

    #[inline]
    pub(crate) const fn get_ptr(&self) -> *mut u8 {
        return self.ptr.as_ptr();
    }

    #[cfg(feature = "debug_tag")]
    #[inline]
    pub(crate) const fn is_tagged(&self) -> bool {
        return self.tag == VALID_TAG;
    }

    /// Makes room for at least `required` slots using the growth policy.
    /// No-op when the capacity already covers the request.
    pub(crate) fn grow_amortized(
        &mut self,
        required: usize,
        min_cap: usize,
        elem: Layout,
    ) -> DynArrResult<()> {
        if elem.size() == 0 || required <= self.capacity {
            return Ok(());
        }
        let Some(new_cap) = grow_size(self.capacity, required, min_cap) else {
            return Err(DynArrErr::new(ErrorKind::CapacityOverflow));
        };
        return self.grow_to(new_cap, elem);
    }

    /// Makes room for exactly `required` slots (floored at `min_cap` so an
    /// initialized buffer never sits below the minimum). No-op when the
    /// capacity already covers the request.
    pub(crate) fn grow_exact(
        &mut self,
        required: usize,
        min_cap: usize,
        elem: Layout,
    ) -> DynArrResult<()> {
        if elem.size() == 0 || required <= self.capacity {
            return Ok(());
        }
        let new_cap = if required < min_cap { min_cap } else { required };
        return self.grow_to(new_cap, elem);
    }

    /// Reallocates the block upward to `new_cap` slots. On failure the
    /// existing block and capacity are left exactly as they were.
    fn grow_to(&mut self, new_cap: usize, elem: Layout) -> DynArrResult<()> {
        let new_layout = layout_array(elem, new_cap)?;

        let ptr = if self.capacity == 0 {
            self.alloc.allocate(new_layout)
        } else {
            // The old layout was validated when the block was allocated.
            let old_layout = layout_array(elem, self.capacity)?;
            unsafe { self.alloc.grow(self.ptr, old_layout, new_layout) }
        };
        let Ok(ptr) = ptr else {
            return Err(DynArrErr::new(ErrorKind::AllocFailure));
        };

        self.ptr = ptr.cast();
        self.capacity = new_cap;
        return Ok(());
    }

    /// Reallocates the block downward to `new_cap` slots. No-op when the
    /// capacity is already at or below `new_cap`. On failure the original
    /// over-sized block stays valid and nothing is lost.
    pub(crate) fn shrink_to(&mut self, new_cap: usize, elem: Layout) -> DynArrResult<()> {
        if elem.size() == 0 || new_cap >= self.capacity {
            return Ok(());
        }
        let old_layout = layout_array(elem, self.capacity)?;
        let new_layout = layout_array(elem, new_cap)?;

        let Ok(ptr) = (unsafe { self.alloc.shrink(self.ptr, old_layout, new_layout) }) else {
            return Err(DynArrErr::new(ErrorKind::AllocFailure));
        };

        self.ptr = ptr.cast();
        self.capacity = new_cap;
        return Ok(());
    }

    /// Releases the block and returns to the unallocated state. Safe to
    /// call repeatedly; the unallocated state owns nothing.
    pub(crate) fn release(&mut self, elem: Layout) {
        if self.capacity == 0 {
            return;
        }
        let Ok(layout) = layout_array(elem, self.capacity) else {
            // The stored capacity was validated at allocation time.
            return;
        };
        unsafe { self.alloc.deallocate(self.ptr, layout) };

        self.ptr = unsafe { NonNull::new_unchecked(elem.align() as *mut u8) };
        self.capacity = 0;
    }
}
