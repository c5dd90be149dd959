//! Worker thread handler for gradient rendering.
//!
//! Runs off the caller's thread so a picker stays responsive while bitmaps
//! are produced. Requests are replace-only: before rendering, the handler
//! drains its queue and keeps only the newest request.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use tracing::{debug, trace, warn};

use super::gradient::{GradientRequest, render_gradient};
use super::messages::{Generation, RenderEvent, RenderMsg};

/// Worker thread handler.
pub struct RenderHandler {
    rx: Receiver<RenderMsg>,
    tx: Sender<RenderEvent>,
    rendered: u64,
    skipped: u64,
}

impl RenderHandler {
    /// Creates a new handler.
    pub fn new(rx: Receiver<RenderMsg>, tx: Sender<RenderEvent>) -> Self {
        Self {
            rx,
            tx,
            rendered: 0,
            skipped: 0,
        }
    }

    /// Main event loop. Returns when `Close` arrives or the caller hangs up.
    pub fn run(mut self) {
        while let Ok(msg) = self.rx.recv() {
            match msg {
                RenderMsg::Close => break,
                RenderMsg::Render { generation, request } => {
                    let (generation, request, close) = self.latest(generation, request);
                    self.render(generation, request);
                    if close {
                        break;
                    }
                }
            }
        }

        debug!(
            rendered = self.rendered,
            skipped = self.skipped,
            "render handler shutdown"
        );
    }

    /// Drains queued messages and returns the newest request, plus whether a
    /// `Close` was seen while draining.
    fn latest(
        &mut self,
        mut generation: Generation,
        mut request: GradientRequest,
    ) -> (Generation, GradientRequest, bool) {
        loop {
            match self.rx.try_recv() {
                Ok(RenderMsg::Render {
                    generation: g,
                    request: r,
                }) => {
                    self.skipped += 1;
                    if g >= generation {
                        trace!(superseded = generation, by = g, "skipping stale request");
                        generation = g;
                        request = r;
                    }
                }
                Ok(RenderMsg::Close) => return (generation, request, true),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => {
                    return (generation, request, false);
                }
            }
        }
    }

    fn render(&mut self, generation: Generation, request: GradientRequest) {
        trace!(
            generation,
            space = %request.space,
            kind = request.kind.name(),
            width = request.width,
            height = request.height,
            "rendering gradient"
        );

        let event = match render_gradient(&request) {
            Ok(bitmap) => {
                self.rendered += 1;
                RenderEvent::Ready {
                    generation,
                    request,
                    bitmap,
                }
            }
            Err(e) => {
                warn!(generation, error = %e, "gradient render failed");
                RenderEvent::Failed {
                    generation,
                    error: e,
                }
            }
        };

        if self.tx.send(event).is_err() {
            debug!(generation, "caller gone, dropping result");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::GradientKind;
    use okpick_core::{Color, ColorSpaceId};
    use std::sync::mpsc::channel;

    fn req(width: u32) -> GradientRequest {
        GradientRequest::new(
            ColorSpaceId::Okhsv,
            GradientKind::Hue,
            Color::new(0.0, 1.0, 1.0),
            width,
            2,
        )
    }

    #[test]
    fn test_newest_request_wins() {
        let (tx, rx) = channel();
        let (ev_tx, ev_rx) = channel();

        tx.send(RenderMsg::Render { generation: 1, request: req(8) }).unwrap();
        tx.send(RenderMsg::Render { generation: 2, request: req(16) }).unwrap();
        tx.send(RenderMsg::Close).unwrap();

        RenderHandler::new(rx, ev_tx).run();

        let events: Vec<RenderEvent> = ev_rx.try_iter().collect();
        assert_eq!(events.len(), 1);
        match &events[0] {
            RenderEvent::Ready { generation, bitmap, .. } => {
                assert_eq!(*generation, 2);
                assert_eq!(bitmap.width, 16);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_out_of_order_generation_ignored() {
        let (tx, rx) = channel();
        let (ev_tx, ev_rx) = channel();

        tx.send(RenderMsg::Render { generation: 5, request: req(8) }).unwrap();
        tx.send(RenderMsg::Render { generation: 3, request: req(4) }).unwrap();
        drop(tx);

        RenderHandler::new(rx, ev_tx).run();

        let events: Vec<RenderEvent> = ev_rx.try_iter().collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].generation(), 5);
    }

    #[test]
    fn test_failure_reported() {
        let (tx, rx) = channel();
        let (ev_tx, ev_rx) = channel();

        tx.send(RenderMsg::Render { generation: 1, request: req(0) }).unwrap();
        drop(tx);

        RenderHandler::new(rx, ev_tx).run();

        match ev_rx.recv().unwrap() {
            RenderEvent::Failed { generation, error } => {
                assert_eq!(generation, 1);
                assert!(matches!(error, okpick_core::Error::InvalidDimensions { .. }));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
}
