use crate::apt_pipeline::common::error::{ConversionError, Result};

/// Growable store of fixed-width scanlines.
///
/// Lines are appended in arrival order and never removed. Samples are kept
/// row-major in a single `Vec`, so `samples().len()` is always a multiple of `width()`.
#[derive(Debug, Clone)]
pub struct ChannelBuffer {
    width: usize,
    samples: Vec<u16>,
}

impl ChannelBuffer {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            samples: Vec::new(),
        }
    }

    pub fn with_capacity(width: usize, lines: usize) -> Self {
        Self {
            width,
            samples: Vec::with_capacity(width * lines),
        }
    }

    /// Appends a zeroed line and hands it back for the caller to fill.
    pub fn append_line(&mut self) -> &mut [u16] {
        let start = self.samples.len();
        self.samples.resize(start + self.width, 0);
        &mut self.samples[start..]
    }

    pub fn push_line(&mut self, line: &[u16]) -> Result<()> {
        if line.len() != self.width {
            return Err(ConversionError::LineWidthMismatch {
                expected: self.width,
                actual: line.len(),
            });
        }
        self.samples.extend_from_slice(line);
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.samples.len() / self.width
        }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&[u16]> {
        let start = index.checked_mul(self.width)?;
        self.samples.get(start..start + self.width)
    }

    pub fn lines(&self) -> impl ExactSizeIterator<Item = &[u16]> + DoubleEndedIterator {
        // chunks_exact panics on zero, an empty buffer of width 0 has no lines anyway
        self.samples.chunks_exact(self.width.max(1))
    }

    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [u16] {
        &mut self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_line_is_zeroed_and_writable() {
        let mut buffer = ChannelBuffer::new(4);
        buffer.append_line().copy_from_slice(&[1, 2, 3, 4]);
        let line = buffer.append_line();
        assert_eq!(line, &[0, 0, 0, 0]);
        line[2] = 9;

        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.samples(), &[1, 2, 3, 4, 0, 0, 9, 0]);
        assert_eq!(buffer.samples().len() % buffer.width(), 0);
    }

    #[test]
    fn test_push_line_rejects_wrong_width() {
        let mut buffer = ChannelBuffer::new(3);
        let result = buffer.push_line(&[1, 2]);
        assert!(matches!(
            result,
            Err(ConversionError::LineWidthMismatch { expected: 3, actual: 2 })
        ));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_line_access() {
        let mut buffer = ChannelBuffer::new(2);
        buffer.push_line(&[5, 6]).unwrap();
        buffer.push_line(&[7, 8]).unwrap();

        assert_eq!(buffer.line(1), Some(&[7u16, 8][..]));
        assert_eq!(buffer.line(2), None);
        assert_eq!(buffer.lines().rev().next(), Some(&[7u16, 8][..]));
    }

    #[test]
    fn test_many_lines_grow_without_losing_rows() {
        let mut buffer = ChannelBuffer::new(16);
        for i in 0..1000u16 {
            buffer.append_line()[0] = i;
        }
        assert_eq!(buffer.height(), 1000);
        assert_eq!(buffer.line(999).map(|l| l[0]), Some(999));
    }
}
