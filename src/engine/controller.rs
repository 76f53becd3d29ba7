//! Frame-change driven redraw of the vector overlay.
//!
//! The controller listens to the host's frame-change notifications and,
//! on each one, deletes every primitive it drew for the previous frame
//! before drawing the cached vectors of the new frame. Deletion always
//! completes before creation, so the host never shows a mix of frames.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::field::TrajectoryCache;
use crate::host::{FrameListener, SceneHost};
use crate::palette::Palette;
use crate::renderer::ArrowRenderer;

use super::handles::GraphicsHandleSet;

/// Redraw state. A redraw never suspends, so the controller is observed
/// `Idle` between notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    /// No redraw in progress.
    #[default]
    Idle,
    /// Deleting the previous frame's primitives or drawing the new ones.
    Redrawing,
}

/// Result of handling one frame change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawOutcome {
    /// The frame's vectors were drawn.
    Drawn {
        /// Primitives now on screen.
        primitives: usize,
    },
    /// No cached vector data for the frame; nothing was touched.
    NoCache,
}

/// Replaces the displayed arrows on every frame change.
pub struct FrameChangeController {
    cache: Arc<TrajectoryCache>,
    renderer: ArrowRenderer,
    palette: Palette,
    handles: GraphicsHandleSet,
    state: ControllerState,
    last_frame: Option<usize>,
}

impl FrameChangeController {
    /// Controller over a fully built cache.
    pub fn new(
        cache: Arc<TrajectoryCache>,
        renderer: ArrowRenderer,
        palette: Palette,
    ) -> Self {
        Self {
            cache,
            renderer,
            palette,
            handles: GraphicsHandleSet::new(),
            state: ControllerState::Idle,
            last_frame: None,
        }
    }

    /// Replace the displayed arrows with those of `frame`.
    ///
    /// Series are drawn in index order, each in
    /// `palette[series mod palette_len]`. A frame without cached data is a
    /// no-op; the previous arrows stay up and reference geometry keeps
    /// following the host's own frame counter.
    pub fn redraw(
        &mut self,
        host: &mut dyn SceneHost,
        frame: usize,
    ) -> RedrawOutcome {
        let Some(fields) = self.cache.get(frame) else {
            log::debug!("frame {frame}: no cached vectors");
            return RedrawOutcome::NoCache;
        };

        self.state = ControllerState::Redrawing;
        self.handles.clear(host);

        for (series, field) in fields.iter().enumerate() {
            let color = self.palette.color_for(series);
            for entry in field {
                let arrow = self.renderer.draw(host, entry, series, color);
                self.handles.push_arrow(series, arrow);
            }
        }

        self.last_frame = Some(frame);
        self.state = ControllerState::Idle;

        let primitives = self.handles.len();
        log::debug!(
            "frame {frame}: drew {primitives} primitives for {} series",
            fields.len()
        );
        RedrawOutcome::Drawn { primitives }
    }

    /// Delete every displayed arrow.
    pub fn clear(&mut self, host: &mut dyn SceneHost) {
        self.handles.clear(host);
        self.last_frame = None;
    }

    /// Current redraw state.
    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Primitives currently displayed.
    #[must_use]
    pub fn handles(&self) -> &GraphicsHandleSet {
        &self.handles
    }

    /// Frame whose arrows are displayed, if any.
    #[must_use]
    pub fn last_frame(&self) -> Option<usize> {
        self.last_frame
    }

    /// Cache the controller draws from.
    #[must_use]
    pub fn cache(&self) -> &Arc<TrajectoryCache> {
        &self.cache
    }
}

impl FrameListener for FrameChangeController {
    fn frame_changed(&mut self, host: &mut dyn SceneHost, frame: usize) {
        let _ = self.redraw(host, frame);
    }
}

/// Lets a caller keep a handle on a controller after subscribing it.
impl<L: FrameListener> FrameListener for Rc<RefCell<L>> {
    fn frame_changed(&mut self, host: &mut dyn SceneHost, frame: usize) {
        self.borrow_mut().frame_changed(host, frame);
    }
}
