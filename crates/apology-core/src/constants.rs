use std::time::Duration;

// Shared scene and interaction tuning constants used by the web frontend.

// Rewards per activation
pub const HEART_REWARD: u32 = 8;
pub const BIG_BUTTON_REWARD: u32 = 25;
pub const BUTTERFLY_REWARD: u32 = 15;

// How long the message panel stays up after each activation
pub const HEART_MESSAGE_DELAY: Duration = Duration::from_millis(3000);
pub const BIG_BUTTON_MESSAGE_DELAY: Duration = Duration::from_millis(5000);
pub const BUTTERFLY_MESSAGE_DELAY: Duration = Duration::from_millis(4000);

// Butterfly "excited" window after a click
pub const BUTTERFLY_EXCITED_DURATION: Duration = Duration::from_millis(1000);

// Sorry captions
pub const SORRY_TEXT_CAP: usize = 50;
pub const SORRY_TEXT_SPREAD: [f32; 3] = [10.0, 8.0, 8.0]; // full extent per axis, centered on origin
pub const SORRY_TEXT_FONT_SIZE: f32 = 0.3;
pub const TITLE_FONT_SIZE: f32 = 0.8;
pub const TITLE_TEXT: &str = "I'M SORRY PRI";

// Visual scaling
pub const HOVER_SCALE: f32 = 1.2;
pub const EXCITED_SCALE: f32 = 1.5;
pub const WING_OPACITY: f32 = 0.8;

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.0, 8.0];
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-3; // keeps the orbit off the poles
// Share of the pending drag applied per 60 Hz frame
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_SETTLE_EPSILON: f32 = 1e-5;

// Picking
pub const HEART_PICK_RADIUS: f32 = 0.5;
pub const BUTTERFLY_PICK_RADIUS: f32 = 0.45;

// Float animation phase offsets are drawn from [0, FLOAT_PHASE_RANGE)
pub const FLOAT_PHASE_RANGE: f32 = 10_000.0;

// Palette (sRGB hex)
pub const HEART_COLOR: u32 = 0xFF69B4;
pub const HEART_HOVER_COLOR: u32 = 0xFF1493;
pub const STEM_COLOR: u32 = 0x228B22;
pub const BLOOM_COLOR: u32 = 0xFF6347;
pub const PETAL_COLOR: u32 = 0xFF1493;
pub const BUTTERFLY_BODY_COLOR: u32 = 0x4A4A4A;
pub const WING_COLOR: u32 = 0x9370DB;
pub const WING_HOVER_COLOR: u32 = 0xFF69B4;
pub const WING_EXCITED_COLOR: u32 = 0xFFD700;
pub const TITLE_COLOR: u32 = 0xFF1493;
pub const SORRY_TEXT_COLOR: u32 = 0xFF69B4;
pub const BACKGROUND_COLOR: u32 = 0xFCE7F3; // pink-100 behind the scene

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const KEY_LIGHT_POS: [f32; 3] = [10.0, 10.0, 10.0];
pub const KEY_LIGHT_COLOR: u32 = 0xFFB6C1;
pub const KEY_LIGHT_INTENSITY: f32 = 1.0;
pub const FILL_LIGHT_POS: [f32; 3] = [-10.0, -10.0, -10.0];
pub const FILL_LIGHT_COLOR: u32 = 0xFF69B4;
pub const FILL_LIGHT_INTENSITY: f32 = 0.5;
