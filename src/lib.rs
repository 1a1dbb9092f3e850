//! Decoder for the MNIST IDX binary dataset format.
//!
//! Label and image files open with big-endian 32 bit headers (magic
//! numbers `0x00000801` and `0x00000803`) followed by a flat byte
//! payload. A load pulls the whole payload into one owned buffer;
//! individual records are then handed out by offset without copying.
//! Pixels use 0 for white paper and 255 for full ink.

pub mod dataset;
pub mod endian;
pub mod error;
pub mod header;
pub mod visualize;

pub use dataset::{load_images, load_labels, ImageView, Images, Labels};
pub use error::IdxError;
pub use visualize::{print_image, render};
