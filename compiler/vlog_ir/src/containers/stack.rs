//! LIFO stack.

/// Last-in, first-out stack.
///
/// Besides the usual `push`/`pop`/`peek`, [`peek_second`](AstStack::peek_second)
/// returns the item directly below the top. Conditional compilation uses it to
/// inspect the enclosing level without popping the current one.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AstStack<T> {
    items: Vec<T>,
}

impl<T> AstStack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push an item onto the top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Top item, if any.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Mutable top item, if any.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Item directly below the top, if the stack holds at least two items.
    pub fn peek_second(&self) -> Option<&T> {
        let depth = self.items.len();
        if depth < 2 {
            return None;
        }
        self.items.get(depth - 2)
    }

    /// Number of items on the stack.
    #[inline]
    pub fn depth(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate from the top of the stack down.
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.items.iter().rev()
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for AstStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
