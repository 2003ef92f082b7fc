pub mod camera;
pub mod controller;
