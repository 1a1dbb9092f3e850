//! ASCII rendering of a single image, for eyeballing a dataset.

use crate::dataset::ImageView;

/// Renders an image as ASCII art, two characters per pixel: `##` where
/// the pixel is at or above `threshold`, two spaces where it is below.
/// Each pixel row ends with a newline and one blank line follows the
/// whole image.
pub fn render(image: &ImageView<'_>, threshold: u8) -> String {
    let mut out = String::with_capacity((image.columns() * 2 + 1) * image.rows() + 1);
    for row in 0..image.rows() {
        for col in 0..image.columns() {
            if image.pixel(row, col) >= threshold {
                out.push_str("##");
            } else {
                out.push_str("  ");
            }
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Prints a digit to stdout based on the given ink threshold.
pub fn print_image(image: &ImageView<'_>, threshold: u8) {
    print!("{}", render(image, threshold));
}
