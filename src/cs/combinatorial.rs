pub mod simplex_points;

pub use simplex_points::{
    for_each_simplex_point, simplex_coordinates, simplex_point_count, simplex_points,
};
