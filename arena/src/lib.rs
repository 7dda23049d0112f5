mod input;
mod recording;
mod render;
pub use input::*;
pub use recording::*;
pub use render::*;
