/// Decoded source image: flat row-major RGBA bytes, origin top-left.
/// Immutable once produced by the decoder.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn max_dimension(&self) -> usize {
        self.width.max(self.height)
    }

    /// Read the colour channels at a pixel coordinate.
    /// Out-of-range coordinates read as black, never a panic.
    pub fn rgb(&self, x: usize, y: usize) -> (u8, u8, u8) {
        if x >= self.width || y >= self.height {
            return (0, 0, 0);
        }
        let i = (y * self.width + x) * 4;
        match self.data.get(i..i + 3) {
            Some(px) => (px[0], px[1], px[2]),
            None => (0, 0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_row_major_rgba() {
        // 2x2: red, green / blue, white
        let data = vec![
            255, 0, 0, 255, 0, 255, 0, 255, //
            0, 0, 255, 255, 255, 255, 255, 255,
        ];
        let buffer = PixelBuffer::new(2, 2, data);
        assert_eq!(buffer.rgb(0, 0), (255, 0, 0));
        assert_eq!(buffer.rgb(1, 0), (0, 255, 0));
        assert_eq!(buffer.rgb(0, 1), (0, 0, 255));
        assert_eq!(buffer.rgb(1, 1), (255, 255, 255));
    }

    #[test]
    fn out_of_range_reads_black() {
        let buffer = PixelBuffer::new(1, 1, vec![10, 20, 30, 255]);
        assert_eq!(buffer.rgb(5, 0), (0, 0, 0));
        assert_eq!(buffer.rgb(0, 5), (0, 0, 0));
    }
}
