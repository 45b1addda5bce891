pub mod categories;
pub mod connectivity;
pub mod constants;
pub mod interaction;
pub mod interpret;
pub mod particles;
pub mod parts;
pub mod payload;
pub mod prompt;
pub mod quiz;
pub mod scene;
pub mod scoring;

pub use categories::*;
pub use interaction::*;
pub use interpret::*;
pub use parts::*;
pub use payload::*;
pub use prompt::*;
pub use quiz::*;
pub use scene::*;
pub use scoring::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");
