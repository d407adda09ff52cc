//! A small stack of candidate byte offsets used while assembling spans.

/// Last-in first-out stack of byte offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetStack {
    items: Vec<usize>,
}

impl OffsetStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stack from offsets sorted in descending order, so the smallest
    /// offset ends up on top.
    pub fn from_descending(offsets: Vec<usize>) -> Self {
        debug_assert!(offsets.windows(2).all(|w| w[0] >= w[1]));
        Self { items: offsets }
    }

    pub fn push(&mut self, offset: usize) {
        self.items.push(offset);
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<usize> {
        self.items.last().copied()
    }

    /// The offset at the bottom of the stack, i.e. the first one pushed.
    pub fn bottom(&self) -> Option<usize> {
        self.items.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate from the top of the stack to the bottom without popping.
    pub fn iter_top_down(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().rev().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stack() {
        let mut stack = OffsetStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_push_pop_order() {
        let mut stack = OffsetStack::new();
        stack.push(1);
        stack.push(5);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), Some(5));
        assert_eq!(stack.pop(), Some(5));
        assert_eq!(stack.pop(), Some(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_from_descending_puts_smallest_on_top() {
        let mut stack = OffsetStack::from_descending(vec![30, 20, 10]);
        assert_eq!(stack.peek(), Some(10));
        assert_eq!(stack.bottom(), Some(30));
        assert_eq!(stack.iter_top_down().collect::<Vec<_>>(), vec![10, 20, 30]);
        assert_eq!(stack.pop(), Some(10));
        assert_eq!(stack.peek(), Some(20));
    }
}
