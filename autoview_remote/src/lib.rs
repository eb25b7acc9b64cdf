/*!
# Autoview Remote

Remote verification delegate client for `autoview_core`.

Ships batches of camera poses to an external renderer over a stream
socket and reads back per-pose visibility verdicts, implementing the
core crate's `VisibilityOracle` trait. The wire format is a fixed
layout with no handshake: an `i32` pose count, then `1 + 16·N` little-
endian `f32` values (foreground threshold scaled to `[0, 1]`, followed
by one row-major 4×4 transform per pose), answered by exactly `N`
verdict bytes.
*/

// Internal modules
mod client;
pub mod wire;

pub use client::RemoteDelegate;
