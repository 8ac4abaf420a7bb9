/// Default decimal precision (five decimal places, roughly metre resolution)
pub const DEFAULT_PRECISION: u32 = 5;

/// Offset added to every emitted chunk so output stays printable ASCII
pub(crate) const CHAR_OFFSET: u8 = 63;

/// Low five bits of a chunk
pub(crate) const CHUNK_MASK: u64 = 0x1f;

/// Chunk bit marking that more chunks follow
pub(crate) const CONTINUATION_BIT: u64 = 0x20;
