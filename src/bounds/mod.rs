//! Bounding volumes for closing off open scenes.

mod aabb;

pub use aabb::Aabb2;
