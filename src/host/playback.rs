//! Frame-change notification source.
//!
//! Owns the host and steps its frame counter, invoking every subscribed
//! [`FrameListener`] synchronously after each change. Listeners run in
//! subscription order and each runs to completion before the next
//! notification can be delivered.

use super::{FrameListener, SceneHost};

/// Minimal frame sequencer over a host.
pub struct Playback<H: SceneHost> {
    host: H,
    listeners: Vec<Box<dyn FrameListener>>,
    total_frames: usize,
    looping: bool,
}

impl<H: SceneHost> Playback<H> {
    /// Sequencer over `total_frames` frames of `host`.
    pub fn new(host: H, total_frames: usize) -> Self {
        Self {
            host,
            listeners: Vec::new(),
            total_frames,
            looping: true,
        }
    }

    /// Register a listener for every subsequent frame change.
    ///
    /// Subscribing does not notify; call [`seek`](Self::seek) to draw the
    /// current frame.
    pub fn subscribe(&mut self, listener: Box<dyn FrameListener>) {
        self.listeners.push(listener);
    }

    /// Jump to `frame` and notify listeners.
    ///
    /// Returns `false` (and changes nothing) if `frame` is out of range.
    pub fn seek(&mut self, frame: usize) -> bool {
        if frame >= self.total_frames {
            log::debug!(
                "seek to frame {frame} ignored ({} frames)",
                self.total_frames
            );
            return false;
        }
        self.host.set_current_frame(frame);
        self.notify(frame);
        true
    }

    /// Advance one frame, wrapping to 0 when looping.
    ///
    /// Returns the new frame, or `None` at the end of a non-looping
    /// trajectory.
    pub fn step(&mut self) -> Option<usize> {
        if self.total_frames == 0 {
            return None;
        }

        let next = self.host.current_frame() + 1;
        let frame = if next < self.total_frames {
            next
        } else if self.looping {
            0
        } else {
            return None;
        };

        self.host.set_current_frame(frame);
        self.notify(frame);
        Some(frame)
    }

    fn notify(&mut self, frame: usize) {
        for listener in &mut self.listeners {
            listener.frame_changed(&mut self.host, frame);
        }
    }

    /// Enable or disable looping at the end of the trajectory.
    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Index of the current frame.
    pub fn current_frame(&self) -> usize {
        self.host.current_frame()
    }

    /// Total number of frames in the trajectory.
    pub fn total_frames(&self) -> usize {
        self.total_frames
    }

    /// Shared access to the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host (e.g. to move the camera).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
