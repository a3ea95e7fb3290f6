// Shared tuning constants used by the core and both frontends.

// Camera
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_Z: f32 = 15.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const MIN_CAMERA_DISTANCE: f32 = 0.001; // floor for camera-to-depth distance

// Viewport containment
pub const VIEWPORT_MARGIN: f32 = 1.2; // inset from the visible edge at an object's depth
pub const MIN_TRAVEL: f32 = 0.5; // never sweep less than this half-distance

// Object pool
pub const DEPTH_SPREAD: f32 = 5.0; // depth drawn from [-spread/2, spread/2)
pub const DESKTOP_OBJECT_COUNT: usize = 28;
pub const COMPACT_OBJECT_COUNT: usize = 16;
pub const DESKTOP_VERTICAL_SPACING: f32 = 7.5;
pub const COMPACT_VERTICAL_SPACING: f32 = 6.5;
pub const DESKTOP_RADIAL_SEGMENTS: u32 = 16;
pub const COMPACT_RADIAL_SEGMENTS: u32 = 12;
pub const DESKTOP_TUBULAR_SEGMENTS: u32 = 110;
pub const COMPACT_TUBULAR_SEGMENTS: u32 = 56;

// Torus size variants as (ring radius, tube radius), cycled by creation order
pub const TORUS_VARIANTS: [(f32, f32); 6] = [
    (1.15, 0.36),
    (1.0, 0.32),
    (0.95, 0.28),
    (1.25, 0.40),
    (1.1, 0.34),
    (1.2, 0.30),
];

// Edge colours: even objects white, odd objects accent blue (#0066FF)
pub const WHITE_EDGE_RGB: [f32; 3] = [1.0, 1.0, 1.0];
pub const ACCENT_EDGE_RGB: [f32; 3] = [0.0, 0.4, 1.0];

// Visibility
pub const ACTIVE_EDGE_OPACITY: f32 = 0.95;
pub const IDLE_EDGE_OPACITY: f32 = 0.5;
pub const FILL_OPACITY: f32 = 0.0; // outline only
pub const ACTIVE_LOCAL_MIN: f32 = 0.02;
pub const ACTIVE_LOCAL_MAX: f32 = 0.98;

// Motion parameter ranges, expressed as (base, span) for uniform draws
pub const PHASE_MAX: f32 = 0.9;
pub const PHASE_RANDOM_SPAN: f32 = 0.4;
pub const PHASE_STAGGER_DIVISOR: f32 = 1.4; // index / (count * divisor)
pub const SPEED_RANGE: (f32, f32) = (0.8, 0.8);
pub const SPIN_RANGE: (f32, f32) = (0.6, 1.0);
pub const FLOAT_AMPLITUDE_RANGE: (f32, f32) = (0.12, 0.18);
pub const FLOAT_FREQUENCY_RANGE: (f32, f32) = (0.6, 1.2);
pub const JITTER_TRAVEL_FRACTION: f32 = 0.3;
pub const JITTER_MAX: f32 = 1.0;

// Mapper
pub const FLOAT_INDEX_PHASE: f32 = 0.13; // desynchronises neighbouring floats

// Frame loop
pub const SPIN_Z_PER_FRAME: f32 = 0.002; // radians added every frame

// Scroll coupling
pub const SCRUB_SECONDS: f32 = 1.0; // time for the applied progress to catch up
pub const SCRUB_SNAP_EPSILON: f32 = 1e-4;

// Device class
pub const COMPACT_MAX_WIDTH_PX: f64 = 768.0;
pub const DESKTOP_MAX_PIXEL_RATIO: f64 = 2.0;
pub const COMPACT_MAX_PIXEL_RATIO: f64 = 1.5;
