pub mod camera;
pub mod config;
pub mod constants;
pub mod easing;
pub mod geometry;
pub mod lifecycle;
pub mod mapper;
pub mod motion;
pub mod pool;
pub mod scroll;
pub mod viewport;
pub mod world;

pub use camera::*;
pub use config::*;
pub use lifecycle::*;
pub use motion::*;
pub use pool::*;
pub use scroll::*;
pub use world::*;
