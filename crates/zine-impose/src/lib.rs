pub mod compose;
pub mod constants;
pub mod generate;
pub mod layout;
mod options;
pub mod render;
mod stats;
pub mod text;
mod types;

pub use generate::{
    PDF_CONTENT_TYPE, ZineOutput, generate, generate_blocking, load_image, load_images,
    save_output,
};
pub use options::*;
pub use stats::calculate_statistics;
pub use types::*;
