//! Containers consumed by the graph backends and algorithms
//!
//! - `positional`: ordered list with stable positions and O(1) removal
//! - `heap`: min-priority queue with locator-based decrease-key
//! - `union_find`: disjoint-set forest

pub mod heap;
pub mod positional;
pub mod union_find;

pub use heap::{AdaptablePriorityQueue, Locator};
pub use positional::{Position, PositionalList};
pub use union_find::UnionFind;
