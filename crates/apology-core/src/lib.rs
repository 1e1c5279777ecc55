pub mod camera;
pub mod color;
pub mod constants;
pub mod controller;
pub mod error;
pub mod float;
pub mod instances;
pub mod layout;
pub mod picking;
pub mod scene;
pub mod sorry_text;
pub mod state;
pub mod timer;
pub mod view;

pub use camera::*;
pub use constants::*;
pub use controller::*;
pub use error::SceneError;
pub use scene::*;
pub use state::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
