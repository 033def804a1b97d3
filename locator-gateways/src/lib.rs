pub mod fixed_position;
pub mod ip_api;
pub mod opencage;
pub mod openstreetmap;
pub mod platform;

mod reverse;
