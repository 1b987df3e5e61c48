//! Weighted edge payloads

use crate::error::Result;
use crate::graph::{Edge, Graph};

/// Edge payloads that carry a numeric weight
///
/// Required by Dijkstra and both spanning-tree algorithms. Implemented for
/// the primitive numeric types and for `(weight, label)` pairs.
pub trait Weighted {
    fn weight(&self) -> f64;
}

macro_rules! impl_weighted {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Weighted for $ty {
                #[inline]
                fn weight(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_weighted!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl<W: Weighted, T> Weighted for (W, T) {
    fn weight(&self) -> f64 {
        self.0.weight()
    }
}

impl<W: Weighted + ?Sized> Weighted for &W {
    fn weight(&self) -> f64 {
        (**self).weight()
    }
}

/// Weight of `edge` in `graph`
pub fn edge_weight<G>(graph: &G, edge: Edge) -> Result<f64>
where
    G: Graph + ?Sized,
    G::EdgeValue: Weighted,
{
    Ok(graph.edge_value(edge)?.weight())
}
