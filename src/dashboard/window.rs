// Fixed-capacity FIFO buffer for chart series

use std::collections::VecDeque;

/// Points kept per chart series unless configured otherwise.
pub const DEFAULT_WINDOW_CAPACITY: usize = 20;

/// Append `point`, then drop the oldest entries until at most `capacity` remain.
pub fn append_bounded<T>(window: &mut VecDeque<T>, point: T, capacity: usize) {
    window.push_back(point);
    while window.len() > capacity {
        window.pop_front();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RollingWindow<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingWindow<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, point: T) {
        append_bounded(&mut self.items, point, self.capacity);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn oldest(&self) -> Option<&T> {
        self.items.front()
    }
}

impl<T: Clone> RollingWindow<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T> Default for RollingWindow<T> {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_bounded_evicts_oldest() {
        let mut window = VecDeque::new();
        for i in 0..5 {
            append_bounded(&mut window, i, 3);
        }
        assert_eq!(window, VecDeque::from(vec![2, 3, 4]));
    }

    #[test]
    fn append_bounded_trims_an_overfull_window() {
        let mut window: VecDeque<u32> = (0..10).collect();
        append_bounded(&mut window, 10, 4);
        assert_eq!(window, VecDeque::from(vec![7, 8, 9, 10]));
    }

    #[test]
    fn window_never_exceeds_capacity() {
        let mut window = RollingWindow::default();
        for i in 0..=DEFAULT_WINDOW_CAPACITY {
            window.push(i);
            assert!(window.len() <= DEFAULT_WINDOW_CAPACITY);
        }
        assert_eq!(window.len(), DEFAULT_WINDOW_CAPACITY);
        assert_eq!(window.oldest(), Some(&1));
        assert_eq!(window.latest(), Some(&DEFAULT_WINDOW_CAPACITY));
        assert!(!window.iter().any(|&v| v == 0));
    }

    #[test]
    fn window_below_capacity_keeps_everything() {
        let mut window = RollingWindow::new(5);
        window.push("a");
        window.push("b");
        assert_eq!(window.to_vec(), vec!["a", "b"]);
        assert_eq!(window.capacity(), 5);
    }
}
