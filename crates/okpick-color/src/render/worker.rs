//! Caller side of the background render worker.
//!
//! [`RenderWorker`] owns the channels and the worker thread. Every
//! [`submit`](RenderWorker::submit) bumps the generation; results that arrive
//! for an older generation are dropped in [`poll`](RenderWorker::poll) and
//! [`wait`](RenderWorker::wait).
//!
//! # Example
//!
//! ```rust
//! use okpick_color::render::{GradientKind, GradientRequest, RenderWorker};
//! use okpick_core::{Color, ColorSpaceId};
//!
//! let mut worker = RenderWorker::spawn().unwrap();
//! let req = GradientRequest::new(
//!     ColorSpaceId::Okhsl,
//!     GradientKind::SaturationValue,
//!     Color::new(0.6, 0.0, 0.0),
//!     32,
//!     32,
//! );
//! worker.submit(req).unwrap();
//! let out = worker.wait().unwrap();
//! assert_eq!(out.bitmap.width, 32);
//! ```

use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError, channel};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use okpick_core::{Error, Result};
use tracing::{debug, trace};

use super::gradient::{Bitmap, GradientRequest};
use super::handler::RenderHandler;
use super::messages::{Generation, RenderEvent, RenderMsg};

/// A finished render for the current generation.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// Generation of the request.
    pub generation: Generation,
    /// The request as rendered.
    pub request: GradientRequest,
    /// RGBA8 pixels.
    pub bitmap: Bitmap,
}

/// Handle to the background render thread.
pub struct RenderWorker {
    tx: Sender<RenderMsg>,
    rx: Receiver<RenderEvent>,
    worker: Option<JoinHandle<()>>,
    generation: Generation,
}

impl RenderWorker {
    /// Spawns the worker thread.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the thread cannot be created.
    pub fn spawn() -> Result<Self> {
        let (tx_to_worker, rx_in_worker) = channel();
        let (tx_to_caller, rx_from_worker) = channel();

        let worker = thread::Builder::new()
            .name("okpick-render".into())
            .spawn(move || RenderHandler::new(rx_in_worker, tx_to_caller).run())?;

        debug!("render worker started");
        Ok(Self {
            tx: tx_to_worker,
            rx: rx_from_worker,
            worker: Some(worker),
            generation: 0,
        })
    }

    /// Generation of the most recent submission.
    #[inline]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Queues a request, superseding anything submitted before.
    pub fn submit(&mut self, request: GradientRequest) -> Result<Generation> {
        self.generation += 1;
        let generation = self.generation;
        self.tx
            .send(RenderMsg::Render { generation, request })
            .map_err(|_| Error::WorkerDisconnected)?;
        trace!(generation, "render request submitted");
        Ok(generation)
    }

    /// Returns the current result if it has arrived, without blocking.
    pub fn poll(&mut self) -> Result<Option<RenderOutput>> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(event) => {
                    if let Some(out) = self.accept(event)? {
                        latest = Some(out);
                    }
                }
                Err(TryRecvError::Empty) => return Ok(latest),
                Err(TryRecvError::Disconnected) => {
                    return match latest {
                        Some(out) => Ok(Some(out)),
                        None => Err(Error::WorkerDisconnected),
                    };
                }
            }
        }
    }

    /// Blocks until the result of the latest submission arrives.
    pub fn wait(&mut self) -> Result<RenderOutput> {
        loop {
            let event = self.rx.recv().map_err(|_| Error::WorkerDisconnected)?;
            if let Some(out) = self.accept(event)? {
                return Ok(out);
            }
        }
    }

    /// Like [`wait`](Self::wait) but gives up after `timeout`, returning `None`.
    pub fn wait_timeout(&mut self, timeout: Duration) -> Result<Option<RenderOutput>> {
        loop {
            match self.rx.recv_timeout(timeout) {
                Ok(event) => {
                    if let Some(out) = self.accept(event)? {
                        return Ok(Some(out));
                    }
                }
                Err(RecvTimeoutError::Timeout) => return Ok(None),
                Err(RecvTimeoutError::Disconnected) => return Err(Error::WorkerDisconnected),
            }
        }
    }

    /// Submits and waits in one step.
    pub fn render(&mut self, request: GradientRequest) -> Result<Bitmap> {
        self.submit(request)?;
        Ok(self.wait()?.bitmap)
    }

    /// Filters stale events and turns failures of the current generation
    /// into errors.
    fn accept(&self, event: RenderEvent) -> Result<Option<RenderOutput>> {
        if event.generation() < self.generation {
            trace!(stale = event.generation(), current = self.generation, "dropping stale result");
            return Ok(None);
        }
        match event {
            RenderEvent::Ready {
                generation,
                request,
                bitmap,
            } => Ok(Some(RenderOutput {
                generation,
                request,
                bitmap,
            })),
            RenderEvent::Failed { error, .. } => Err(error),
        }
    }

    /// Stops the worker and waits for the thread to exit.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        let _ = self.tx.send(RenderMsg::Close);
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                debug!("render worker panicked");
            }
        }
    }
}

impl Drop for RenderWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::GradientKind;
    use okpick_core::{Color, ColorSpaceId};

    fn req(kind: GradientKind, width: u32) -> GradientRequest {
        GradientRequest::new(ColorSpaceId::Okhsv, kind, Color::new(0.1, 0.9, 0.9), width, 4)
    }

    #[test]
    fn test_render_roundtrip() {
        let mut worker = RenderWorker::spawn().unwrap();
        let bmp = worker.render(req(GradientKind::Hue, 32)).unwrap();
        assert_eq!(bmp.width, 32);
        assert_eq!(bmp.pixels.len(), 32 * 4 * 4);
        worker.shutdown();
    }

    #[test]
    fn test_latest_generation_returned() {
        let mut worker = RenderWorker::spawn().unwrap();
        worker.submit(req(GradientKind::Hue, 8)).unwrap();
        worker.submit(req(GradientKind::Lightness, 12)).unwrap();
        let g = worker.submit(req(GradientKind::SaturationValue, 24)).unwrap();
        assert_eq!(g, 3);

        let out = worker.wait().unwrap();
        assert_eq!(out.generation, 3);
        assert_eq!(out.request.kind, GradientKind::SaturationValue);
        assert_eq!(out.bitmap.width, 24);
    }

    #[test]
    fn test_failure_is_error() {
        let mut worker = RenderWorker::spawn().unwrap();
        let err = worker.render(req(GradientKind::Hue, 0)).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { width: 0, .. }));
    }

    #[test]
    fn test_poll_eventually_ready() {
        let mut worker = RenderWorker::spawn().unwrap();
        worker.submit(req(GradientKind::Saturation, 16)).unwrap();
        let out = worker
            .wait_timeout(Duration::from_secs(10))
            .unwrap()
            .expect("render finished");
        assert_eq!(out.generation, 1);
        // nothing left afterwards
        assert!(worker.poll().unwrap().is_none());
    }
}
