// Library exports for heightuf
pub mod connectivity;
pub mod error;
pub mod pairs;
pub mod union_find;

pub use error::UnionFindError;
pub use union_find::HeightUnionFind;
