//! Message types for caller <-> render worker communication.
//!
//! The caller sends [`RenderMsg`] commands, the worker answers with
//! [`RenderEvent`]s. Both sides stamp work with a [`Generation`] so results
//! of superseded requests can be recognized and dropped.

use okpick_core::Error;

use super::gradient::{Bitmap, GradientRequest};

/// Generation counter for invalidating stale results.
pub type Generation = u64;

/// Messages from the caller to the worker thread.
#[derive(Debug, Clone)]
pub enum RenderMsg {
    /// Render a gradient. Queued requests with a lower generation are skipped.
    Render {
        /// Generation assigned by the caller.
        generation: Generation,
        /// What to render.
        request: GradientRequest,
    },

    /// Stop the worker after the current job.
    Close,
}

/// Events from the worker thread to the caller.
#[derive(Debug)]
pub enum RenderEvent {
    /// Bitmap ready.
    Ready {
        /// Generation of the request this answers.
        generation: Generation,
        /// The request as rendered.
        request: GradientRequest,
        /// RGBA8 pixels.
        bitmap: Bitmap,
    },

    /// The request could not be rendered.
    Failed {
        /// Generation of the failed request.
        generation: Generation,
        /// Why rendering failed.
        error: Error,
    },
}

impl RenderEvent {
    /// Generation this event answers.
    pub fn generation(&self) -> Generation {
        match self {
            Self::Ready { generation, .. } | Self::Failed { generation, .. } => *generation,
        }
    }
}
