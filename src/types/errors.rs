use core::error::Error;
use core::fmt;

/// This enum lets one figure out what kind of failure occurred during
/// a `DynArr` operation.
///
/// The overflow reasons are deliberately distinct from [`AllocFailure`]:
/// an overflowed capacity computation will never succeed no matter how much
/// memory is free, while an allocator failure may be worth retrying with a
/// smaller explicit reserve.
///
/// [`AllocFailure`]: ErrorKind::AllocFailure
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested capacity in bytes does not fit the address space.
    CapacityOverflow = 1,
    /// The element count itself would exceed `usize::MAX`.
    SizeOverflow,
    /// Failed to create an allocation layout for the requested capacity.
    LayoutFailure,
    /// The underlying allocator reported a failure.
    AllocFailure,
    /// Tried to take an element from an array with no elements.
    EmptyArray,
    /// The index is at or past the current length.
    IndexOutOfBounds,
}

/// A type alias for `Result<T, DynArrErr>`
pub type DynArrResult<T> = Result<T, DynArrErr>;

/// This is used to indicate an error during a `DynArr` operation.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DynArrErr(ErrorKind);

impl DynArrErr {
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        return Self(kind);
    }
    pub const fn reason(self) -> ErrorKind {
        return self.0;
    }
}

impl Error for DynArrErr {}

impl fmt::Display for DynArrErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ErrorKind::CapacityOverflow => f.write_str("Capacity in bytes overflowed."),
            ErrorKind::SizeOverflow => f.write_str("Element count overflowed."),
            ErrorKind::LayoutFailure => f.write_str("Failed to create layout."),
            ErrorKind::AllocFailure => f.write_str("An allocation failure occurred."),
            ErrorKind::EmptyArray => f.write_str("The array is empty."),
            ErrorKind::IndexOutOfBounds => f.write_str("Index is out of bounds."),
        }
    }
}
