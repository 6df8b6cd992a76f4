pub mod cone;
pub mod cylinder;
pub mod finite_plane;
pub mod hyperboloid;
pub mod paraboloid;
pub mod plane;
pub mod quadric;
pub mod sphere;
pub mod tiled_plane;
