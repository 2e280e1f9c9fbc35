//! # Stack
//!
//! A generic last-in-first-out container.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │               push                                                      │
//! │   ┌───────┐ ────────────► ┌──────────┐ ──┐ push / pop (size > 1)        │
//! │   │ Empty │               │ NonEmpty │ ◄─┘                              │
//! │   └───────┘ ◄──────────── └──────────┘                                  │
//! │     │  ▲    pop (size==1)                                               │
//! │     │  │    clear                                                       │
//! │     └──┘                                                                │
//! │   pop / peek → CoreError::EmptyStack                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopkit_core::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! assert_eq!(stack.peek().unwrap(), &2);
//! assert_eq!(stack.pop().unwrap(), 2);
//! assert_eq!(stack.size(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Last-in-first-out container backed by a `Vec`.
///
/// The end of the vector is the top of the stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Puts `item` on top of the stack.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    ///
    /// ## Errors
    /// [`CoreError::EmptyStack`] when there is nothing to pop.
    pub fn pop(&mut self) -> CoreResult<T> {
        self.items
            .pop()
            .ok_or(CoreError::EmptyStack { operation: "pop" })
    }

    /// Returns the top item without removing it.
    ///
    /// ## Errors
    /// [`CoreError::EmptyStack`] when the stack holds nothing.
    pub fn peek(&self) -> CoreResult<&T> {
        self.items
            .last()
            .ok_or(CoreError::EmptyStack { operation: "peek" })
    }

    /// Returns true if the stack holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on the stack.
    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the top of the stack down to the bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev()
    }

    /// Consumes the stack, returning items bottom first.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

/// Items are pushed in iteration order, so the last one ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
