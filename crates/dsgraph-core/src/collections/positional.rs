//! Positional sequence with stable position handles
//!
//! Nodes live in an index arena and are linked by index, so a held
//! [`Position`] removes its element in O(1) without walking the list.
//! Freed node slots are recycled by later insertions.

/// Handle to one element of a [`PositionalList`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(usize);

#[derive(Debug, Clone)]
struct Node<T> {
    element: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly linked list over an index arena
#[derive(Debug, Clone)]
pub struct PositionalList<T> {
    nodes: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for PositionalList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PositionalList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append an element and return its position
    pub fn push_back(&mut self, element: T) -> Position {
        let node = Node {
            element,
            prev: self.tail,
            next: None,
        };
        let index = match self.free.pop() {
            Some(index) => {
                self.nodes[index] = Some(node);
                index
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };

        match self.tail {
            Some(tail) => {
                if let Some(tail_node) = self.nodes[tail].as_mut() {
                    tail_node.next = Some(index);
                }
            }
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
        Position(index)
    }

    /// Element stored at `position`, if the position is still live
    pub fn get(&self, position: Position) -> Option<&T> {
        self.nodes
            .get(position.0)
            .and_then(|slot| slot.as_ref())
            .map(|node| &node.element)
    }

    /// Unlink the element at `position`
    ///
    /// Returns `None` when the position was already removed.
    pub fn remove(&mut self, position: Position) -> Option<T> {
        let node = self.nodes.get_mut(position.0)?.take()?;

        match node.prev {
            Some(prev) => {
                if let Some(prev_node) = self.nodes[prev].as_mut() {
                    prev_node.next = node.next;
                }
            }
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => {
                if let Some(next_node) = self.nodes[next].as_mut() {
                    next_node.prev = node.prev;
                }
            }
            None => self.tail = node.prev,
        }

        self.free.push(position.0);
        self.len -= 1;
        Some(node.element)
    }

    /// Front-to-back iteration
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }
}

/// Iterator over a [`PositionalList`] in sequence order
pub struct Iter<'a, T> {
    list: &'a PositionalList<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.nodes.get(self.cursor?)?.as_ref()?;
        self.cursor = node.next;
        Some(&node.element)
    }
}

impl<'a, T> IntoIterator for &'a PositionalList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
