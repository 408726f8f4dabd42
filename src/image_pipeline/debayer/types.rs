//! Types for debayering operations

/// Channel offsets inside one stored pixel.
pub const BLUE: usize = 0;
pub const GREEN: usize = 1;
pub const RED: usize = 2;

/// 8-bit RGB image produced by the debayer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Pixel data interleaved [B, G, R, B, G, R, ...], rows top to bottom
    pub data: Vec<u8>,
}

impl RgbImage {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * 3],
        }
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| (y * self.width + x) * 3)
    }

    /// The pixel at `(x, y)` as `[r, g, b]`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        self.offset(x, y)
            .map(|i| [self.data[i + RED], self.data[i + GREEN], self.data[i + BLUE]])
    }

    /// Writes `[r, g, b]` at `(x, y)`, returning false when off the image.
    pub fn set_pixel(&mut self, x: usize, y: usize, [r, g, b]: [u8; 3]) -> bool {
        match self.offset(x, y) {
            Some(i) => {
                self.data[i + RED] = r;
                self.data[i + GREEN] = g;
                self.data[i + BLUE] = b;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixels_are_stored_bgr() {
        let mut image = RgbImage::new(2, 1);

        assert!(image.set_pixel(1, 0, [10, 20, 30]));
        assert_eq!(image.data, vec![0, 0, 0, 30, 20, 10]);
        assert_eq!(image.pixel(1, 0), Some([10, 20, 30]));
    }

    #[test]
    fn test_pixel_access_is_bounds_checked() {
        let mut image = RgbImage::new(2, 2);

        assert_eq!(image.pixel(2, 0), None);
        assert_eq!(image.pixel(0, 2), None);
        assert!(!image.set_pixel(0, 2, [1, 1, 1]));
    }
}
