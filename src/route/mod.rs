pub mod camera_fit;
pub mod geometry;
pub mod map_state;
pub mod normalize;

pub use camera_fit::{CameraFit, compute_camera_fit};
pub use geometry::{RouteGeometry, build_route_geometry};
pub use map_state::{MapState, Marker};
pub use normalize::normalize;
