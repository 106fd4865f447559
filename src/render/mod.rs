mod batch;
mod cull;
mod screen;

pub use batch::{Batch, BatchSprite, RenderTarget};
pub use cull::Viewport;
pub use screen::ScreenTarget;
