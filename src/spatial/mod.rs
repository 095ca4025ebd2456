mod quad_tree;
mod spatial_hash;
mod spatial_index;

pub use quad_tree::*;
pub use spatial_hash::*;
pub use spatial_index::*;
