mod rect;
mod vector_2d;

pub use rect::*;
pub use vector_2d::*;

#[cfg(test)]
mod rect_tests;
#[cfg(test)]
mod vector_2d_tests;
