//! Gradient rendering for picker areas and sliders.
//!
//! - [`render_gradient`] - Synchronous, rayon-parallel bitmap rendering
//! - [`RenderWorker`] - Background thread that always renders the newest request
//!
//! The worker speaks through [`RenderMsg`] / [`RenderEvent`] channels and
//! stamps every request with a [`Generation`].

mod gradient;
mod handler;
mod messages;
mod worker;

pub use gradient::{
    BYTES_PER_PIXEL, Bitmap, GradientKind, GradientRequest, MAX_DIMENSION, render_gradient,
};
pub use handler::RenderHandler;
pub use messages::{Generation, RenderEvent, RenderMsg};
pub use worker::{RenderOutput, RenderWorker};
