pub mod point;
pub mod vector;

// A surface normal is just a vector with a different transform rule in a
// full renderer (inverse-transpose instead of the forward matrix); since
// this crate never needs that distinction, `Normal` is kept as a plain
// alias rather than its own struct.
pub use self::vector::Vector as Normal;
