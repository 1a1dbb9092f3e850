//! Host byte-order normalization for IDX header fields.
//!
//! Every multi-byte integer in an IDX file is stored most-significant
//! byte first, regardless of the host.

/// Interprets four bytes in file order as a host-order `u32`.
pub fn u32_from_file_bytes(bytes: [u8; 4]) -> u32 {
    u32::from_be_bytes(bytes)
}

/// Converts a `u32` read verbatim from file memory into host order.
/// No-op on big-endian hosts.
pub fn to_host_order(raw: u32) -> u32 {
    u32::from_be(raw)
}
