//! Loading IDX label and image files into owned collections.
//!
//! Each load opens the file, validates the header, then pulls the whole
//! payload into one contiguous buffer with a single bulk read. Records
//! are handed out afterwards by offset, without copying or re-parsing.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use log::debug;

use crate::error::IdxError;
use crate::header::{ImageHeader, LabelHeader};

/// A loaded label file: one byte per sample, digit values 0-9 for
/// MNIST proper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    data: Vec<u8>,
}

/// A loaded image file: `count` greyscale images of `rows` x `columns`
/// single-byte pixels, stored consecutively, row-major within each
/// image. 0 is white, 255 is black (ink intensity, not luminance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Images {
    count: usize,
    rows: usize,
    columns: usize,
    data: Vec<u8>,
}

/// A borrowed view of one image inside an [`Images`] buffer.
///
/// Carries no allocation of its own and cannot outlive the parent
/// collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageView<'a> {
    rows: usize,
    columns: usize,
    pixels: &'a [u8],
}

impl Labels {
    /// Number of labels in the collection.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns label `index`.
    ///
    /// Callers must keep `index < len()`; out-of-range indices panic.
    pub fn get(&self, index: usize) -> u8 {
        self.data[index]
    }

    /// The raw label bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Images {
    /// Number of images in the collection.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns a borrowed view of image `index`, without copying.
    ///
    /// Callers must keep `index < count()`; out-of-range indices panic.
    pub fn get(&self, index: usize) -> ImageView<'_> {
        let pixels_per_image = self.rows * self.columns;
        let start = index * pixels_per_image;
        ImageView {
            rows: self.rows,
            columns: self.columns,
            pixels: &self.data[start..start + pixels_per_image],
        }
    }

    /// The raw pixel bytes of every image, back to back.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<'a> ImageView<'a> {
    /// Wraps a row-major pixel slice. `pixels` must hold exactly
    /// `rows * columns` bytes.
    pub fn new(rows: usize, columns: usize, pixels: &'a [u8]) -> ImageView<'a> {
        assert_eq!(
            pixels.len(),
            rows * columns,
            "pixel slice does not match dimensions"
        );
        ImageView {
            rows,
            columns,
            pixels,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Pixel at (row, col); 0 is white paper, 255 is full ink.
    pub fn pixel(&self, row: usize, col: usize) -> u8 {
        self.pixels[row * self.columns + col]
    }

    /// The row-major pixel bytes of this image.
    pub fn pixels(&self) -> &'a [u8] {
        self.pixels
    }
}

/// Loads a label file.
///
/// The returned collection owns its buffer; the file handle is closed
/// before this returns, on the success path and on every failure path.
pub fn load_labels<P: AsRef<Path>>(path: P) -> Result<Labels, IdxError> {
    let path = path.as_ref();
    let mut reader = open(path)?;
    let header = LabelHeader::parse(&mut reader)?;
    let data = read_payload(&mut reader, header.item_count as usize)?;
    debug!("loaded {} labels from {}", data.len(), path.display());
    Ok(Labels { data })
}

/// Loads an image file.
///
/// The returned collection owns its buffer; the file handle is closed
/// before this returns, on the success path and on every failure path.
pub fn load_images<P: AsRef<Path>>(path: P) -> Result<Images, IdxError> {
    let path = path.as_ref();
    let mut reader = open(path)?;
    let header = ImageHeader::parse(&mut reader)?;

    let count = header.image_count as usize;
    let rows = header.row_count as usize;
    let columns = header.column_count as usize;
    let size = count
        .checked_mul(rows)
        .and_then(|n| n.checked_mul(columns))
        // a payload whose size overflows usize can never be allocated
        .ok_or(IdxError::AllocationFailure(usize::MAX))?;

    let data = read_payload(&mut reader, size)?;
    debug!(
        "loaded {} images of {}x{} pixels from {}",
        count,
        rows,
        columns,
        path.display()
    );
    Ok(Images {
        count,
        rows,
        columns,
        data,
    })
}

fn open(path: &Path) -> Result<BufReader<File>, IdxError> {
    if path.as_os_str().is_empty() {
        return Err(IdxError::InvalidPath);
    }
    let file = File::open(path).map_err(IdxError::OpenFailed)?;
    Ok(BufReader::new(file))
}

/// Allocates a buffer of exactly `size` bytes and fills it in one bulk
/// read from the current position. Reports how many bytes were
/// actually there when the file turns out shorter than the header
/// promised.
fn read_payload<R: Read>(reader: &mut R, size: usize) -> Result<Vec<u8>, IdxError> {
    let mut data = Vec::new();
    data.try_reserve_exact(size)
        .map_err(|_| IdxError::AllocationFailure(size))?;
    data.resize(size, 0);

    let mut filled = 0;
    while filled < size {
        match reader.read(&mut data[filled..]) {
            Ok(0) => {
                return Err(IdxError::TruncatedPayload {
                    expected: size,
                    read: filled,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(IdxError::Io(e)),
        }
    }
    Ok(data)
}
