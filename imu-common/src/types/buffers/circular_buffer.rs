use std::collections::VecDeque;

/// Circular buffer definition. Buffer holds at most `capacity` elements.
/// Once full, pushing a new element pops the oldest one out.
#[derive(Clone, Debug, PartialEq)]
pub struct CircularBuffer<T> {
    buffer: VecDeque<T>,
    capacity: usize,
}

impl<T: Clone> CircularBuffer<T> {
    /// Creates an empty CircularBuffer able to hold `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// New element `elem` is pushed. If the buffer was full, the oldest element is returned.
    pub fn push(&mut self, elem: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(elem);
        }
        let out = if self.buffer.len() == self.capacity {
            self.buffer.pop_front()
        } else {
            None
        };
        self.buffer.push_back(elem);
        out
    }

    /// Returns number of stored elements
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    /// Iterates from oldest to newest element.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let buffer: CircularBuffer<i32> = CircularBuffer::new(3);
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 3);
        assert!(buffer.is_empty());
        assert!(!buffer.is_full());
    }

    #[test]
    fn test_push() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(3);
        assert_eq!(buffer.push(1), None);
        assert_eq!(buffer.push(2), None);
        assert_eq!(buffer.push(3), None);
        assert!(buffer.is_full());
        assert_eq!(buffer.push(4), Some(1));
        assert_eq!(buffer.len(), 3);
        assert_eq!(
            buffer.buffer,
            vec![2, 3, 4].into_iter().collect::<VecDeque<_>>()
        );
    }

    #[test]
    fn test_iter_is_oldest_first() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(2);
        for i in 0..5 {
            buffer.push(i);
        }
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn test_zero_capacity() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(0);
        assert_eq!(buffer.push(7), Some(7));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(3);
        buffer.push(1);
        buffer.push(2);
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 3);
    }
}
