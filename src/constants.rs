// Rendering and DOM constants for the web frontend.

// Camera
pub const CAMERA_Z: f32 = 2.5;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Background (#000033, linear)
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.033];

// Post-processing defaults
pub const BLOOM_STRENGTH: f32 = 1.5;
pub const BLOOM_THRESHOLD: f32 = 0.35;

// Formats
pub const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

// DOM element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const QUIZ_SECTION_ID: &str = "quiz-section";
pub const QUIZ_ID: &str = "quiz";
pub const QUESTIONS_ID: &str = "questions";
pub const PROGRESS_ID: &str = "quiz-progress";
pub const PROGRESS_LABEL_ID: &str = "quiz-progress-label";
pub const MESSAGE_ID: &str = "quiz-message";
pub const PREV_ID: &str = "quiz-prev";
pub const NEXT_ID: &str = "quiz-next";
pub const COMPLETE_ID: &str = "quiz-complete";
pub const DEV_ID: &str = "dev-mode";
pub const NAME_INPUT_ID: &str = "user-name";
pub const RESULTS_SECTION_ID: &str = "results-section";
pub const RESULTS_ID: &str = "results";
pub const IMAGE_ID: &str = "ai-image";
pub const IMAGE_STATUS_ID: &str = "ai-image-status";
pub const GENERATE_ID: &str = "generate-image";
pub const RESTART_ID: &str = "restart";

// Milliseconds an encouragement stays visible
pub const MESSAGE_HOLD_MS: i32 = 3000;

// Default relay base when the canvas carries no `data-api-base`
pub const DEFAULT_API_BASE: &str = "/api";
