//! Stack-index encoding.
//!
//! Indices in `[0, stack_depth)` are rendered as fixed-width uppercase
//! base-16 strings. The width is the number of hex digits needed for the
//! highest index, so every label in one run lines up and pastes onto the
//! same name prefix. The reversed label sequence doubles as the probe
//! list for argument-count dispatch.

/// Encodes stack indices for one generation run.
#[derive(Debug, Clone)]
pub struct IndexCodec {
    stack_depth: usize,
    width: usize,
}

impl IndexCodec {
    /// `stack_depth` must be at least 1 (enforced by `GenerationConfig`).
    pub fn new(stack_depth: usize) -> Self {
        let width = format!("{:x}", stack_depth - 1).len();
        Self { stack_depth, width }
    }

    /// Number of hex digits in every emitted label.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Fixed-width uppercase hex rendering of `i`.
    pub fn hex(&self, i: usize) -> String {
        format!("{:01$X}", i, self.width)
    }

    /// Labels for `stack_depth-1 .. 0`, the descending probe sequence
    /// appended after the caller's arguments by the dispatch machinery.
    pub fn reversed_labels(&self) -> Vec<String> {
        (0..self.stack_depth).rev().map(|i| self.hex(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_covers_the_highest_index() {
        assert_eq!(IndexCodec::new(1).width(), 1);
        assert_eq!(IndexCodec::new(16).width(), 1);
        assert_eq!(IndexCodec::new(17).width(), 2);
        assert_eq!(IndexCodec::new(256).width(), 2);
        assert_eq!(IndexCodec::new(257).width(), 3);
    }

    #[test]
    fn hex_is_zero_padded_and_uppercase() {
        let codec = IndexCodec::new(256);
        assert_eq!(codec.hex(0), "00");
        assert_eq!(codec.hex(10), "0A");
        assert_eq!(codec.hex(255), "FF");
    }

    #[test]
    fn reversed_labels_count_down_to_zero() {
        let codec = IndexCodec::new(4);
        assert_eq!(codec.reversed_labels(), vec!["3", "2", "1", "0"]);
    }
}
