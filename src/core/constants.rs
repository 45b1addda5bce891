// Shared tuning constants for the scoring tables and the particle field.

// Questionnaire layout
pub const QUESTIONS_PER_ABILITY: usize = 5;
pub const ABILITY_COUNT: usize = 14;
pub const QUESTION_COUNT: usize = QUESTIONS_PER_ABILITY * ABILITY_COUNT;
pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;
// Highest possible raw block sum (5 questions x 5 points)
pub const BLOCK_MAX_SUM: f32 = (QUESTIONS_PER_ABILITY as u8 * LIKERT_MAX) as f32;

// Interpretation
pub const SIGNIFICANT_SCORE: f32 = 70.0;

// Particle field
pub const POINT_COUNT: usize = 1000;
pub const MAX_LIFETIME_SEC: f32 = 5.0;

// Initial spawn band: tighter shell, smaller points
pub const SPAWN_RADIUS: f32 = 0.8;
pub const SPAWN_RADIUS_JITTER: f32 = 0.2; // full width of the band
pub const SPAWN_SIZE_MIN: f32 = 0.005;
pub const SPAWN_SIZE_SPAN: f32 = 0.02;

// Respawn band: expanded shell, larger points
pub const RESPAWN_RADIUS: f32 = 1.0;
pub const RESPAWN_RADIUS_JITTER: f32 = 0.3;
pub const RESPAWN_SIZE_MIN: f32 = 0.02;
pub const RESPAWN_SIZE_SPAN: f32 = 0.05;

// Fixed simulation step (the loop assumes ~60 Hz)
pub const FIXED_STEP_SEC: f32 = 0.016;

// Radial noise displacement
pub const NOISE_SCALE: f32 = 0.5;
pub const NOISE_AMPLITUDE: f32 = 0.1;
pub const PULSE_FREQUENCY: f32 = 5.0;
pub const PULSE_AMPLITUDE: f32 = 0.1;

// Connectivity
pub const CONNECT_DISTANCE: f32 = 0.5;
pub const MAX_CONNECTIONS: usize = 3;

// Interaction smoothing (per-frame lerp factors)
pub const INTERACTION_LERP: f32 = 0.1;
pub const PULSE_LERP: f32 = 0.2;
pub const ROTATION_LERP: f32 = 0.1;
pub const ROTATION_RANGE: f32 = std::f32::consts::FRAC_PI_2;
pub const ENGAGED_HOLD_SEC: f64 = 1.0;

// Colour phase oscillation speed
pub const COLOR_PHASE_SPEED: f32 = 0.05;
