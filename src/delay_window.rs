//! Fixed-size lag buffer separating payload from a trailing checksum.

use heapless::Deque;

/// Holds the most recent `SIZE` bytes of a stream.
///
/// Once full, every pushed byte evicts the oldest one.
#[derive(Clone, Debug)]
pub struct DelayWindow<const SIZE: usize> {
    bytes: Deque<u8, SIZE>,
}

impl<const SIZE: usize> DelayWindow<SIZE> {
    /// Creates an empty window.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: Deque::new(),
        }
    }

    /// Pushes a byte, returning the evicted byte if the window was full.
    pub fn push(&mut self, byte: u8) -> Option<u8> {
        let evicted = if self.bytes.is_full() {
            self.bytes.pop_front()
        } else {
            None
        };

        let pushed = self.bytes.push_back(byte);
        debug_assert!(pushed.is_ok(), "window has room after eviction");
        evicted
    }

    /// Returns the byte that the next push will evict, if the window is full.
    #[must_use]
    pub fn next_evicted(&self) -> Option<u8> {
        if self.bytes.is_full() {
            self.bytes.front().copied()
        } else {
            None
        }
    }

    /// Returns the held bytes, oldest first, once the window is full.
    #[must_use]
    pub fn contents(&self) -> Option<[u8; SIZE]> {
        if !self.bytes.is_full() {
            return None;
        }

        let mut contents = [0; SIZE];

        for (target, byte) in contents.iter_mut().zip(self.bytes.iter()) {
            *target = *byte;
        }

        Some(contents)
    }

    /// Discards all held bytes.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}

impl<const SIZE: usize> Default for DelayWindow<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::DelayWindow;

    #[test]
    fn test_lag() {
        let mut window = DelayWindow::<2>::new();
        assert_eq!(window.push(0x01), None);
        assert_eq!(window.push(0x02), None);
        assert_eq!(window.push(0x03), Some(0x01));
        assert_eq!(window.push(0x04), Some(0x02));
        assert_eq!(window.contents(), Some([0x03, 0x04]));
    }

    #[test]
    fn test_next_evicted() {
        let mut window = DelayWindow::<2>::new();
        window.push(0x01);
        assert_eq!(window.next_evicted(), None);
        window.push(0x02);
        assert_eq!(window.next_evicted(), Some(0x01));
        assert_eq!(window.next_evicted(), Some(0x01));
        assert_eq!(window.push(0x03), Some(0x01));
        assert_eq!(window.next_evicted(), Some(0x02));
    }

    #[test]
    fn test_partial() {
        let mut window = DelayWindow::<2>::new();
        assert_eq!(window.contents(), None);
        assert_eq!(window.push(0xAB), None);
        assert_eq!(window.contents(), None);
        assert_eq!(window.push(0xCD), None);
        assert_eq!(window.contents(), Some([0xAB, 0xCD]));
    }

    #[test]
    fn test_clear() {
        let mut window = DelayWindow::<2>::new();
        window.push(0x01);
        window.push(0x02);
        window.clear();
        assert_eq!(window.contents(), None);
        assert_eq!(window.push(0x03), None);
    }

    #[test]
    fn test_wider_window() {
        let mut window = DelayWindow::<4>::new();
        let evicted: Vec<_> = (0..8).filter_map(|byte| window.push(byte)).collect();
        assert_eq!(evicted, [0, 1, 2, 3]);
        assert_eq!(window.contents(), Some([4, 5, 6, 7]));
    }
}
