// World dimensions, in world units ("pixels"). Scaled onto the terminal at draw time.
pub const WORLD_WIDTH: f64 = 800.0;
pub const WORLD_HEIGHT: f64 = 600.0;

/// Ground level for the stickman's center.
pub const FLOOR_Y: f64 = 500.0;
/// The floor strip is drawn this far below `FLOOR_Y`.
pub const FLOOR_DRAW_OFFSET: f64 = 20.0;

// Frame timing
pub const TARGET_FPS: u32 = 60;
/// Largest `dt` handed to the update step (seconds), so a stall can't skip animation ahead.
pub const MAX_FRAME_DT: f64 = 0.1;

// Stickman kinematics (per frame, y grows downward, velocity is positive upward)
pub const GRAVITY: f64 = 1.0;
pub const JUMP_POWER: f64 = 18.0;
pub const WALK_SPEED: f64 = 0.5;
pub const STICKMAN_MAX_X: f64 = WORLD_WIDTH - 100.0;
pub const STICKMAN_START: (f64, f64) = (100.0, FLOOR_Y);
pub const STICKMAN_WIDTH: i32 = 48;
pub const STICKMAN_HEIGHT: i32 = 80;

// Run animation
pub const RUN_FRAME_COUNT: usize = 4;
pub const RUN_FRAME_SECONDS: f64 = 1.0 / 12.0;

// Box obstacle
pub const BOX_SPEED: f64 = 3.0;
pub const BOX_WRAP_X: f64 = -50.0;
pub const BOX_RESPAWN_X: f64 = WORLD_WIDTH + 50.0;
pub const BOX_START: (f64, f64) = (700.0, FLOOR_Y);
pub const BOX_WIDTH: i32 = 48;
pub const BOX_HEIGHT: i32 = 48;

// Collision tuning: how far the feet must sink into the box top, and how close
// to the floor the stickman must be, for an overlap to count as a hit.
pub const COLLISION_PENETRATION_MARGIN: i32 = 5;
pub const COLLISION_FLOOR_BAND: f64 = 20.0;

// Event log shown in the info panel
pub const EVENT_LOG_CAPACITY: usize = 6;
