//! Playback cursor over an [`Animation`]
//!
//! The cursor counts how many steps are on screen: `0` shows the snapshot
//! alone, `len` shows every step. Cancelling freezes the cursor and hides
//! further steps; it never touches the structure the animation explains.

use super::{Animation, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
    Finished,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct Playback {
    animation: Animation,
    shown: usize,
    state: PlaybackState,
}

impl Playback {
    /// Start playing from the first step. The steps are not generated until
    /// something asks for them.
    pub fn new(animation: Animation) -> Self {
        Playback {
            animation,
            shown: 0,
            state: PlaybackState::Playing,
        }
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Number of steps revealed so far
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// The most recently revealed step
    pub fn current(&self) -> Option<&Step> {
        self.shown
            .checked_sub(1)
            .and_then(|i| self.animation.step(i))
    }

    /// Reveal the next step. Returns it, or `None` once everything is shown
    /// or the playback was cancelled.
    pub fn advance(&mut self) -> Option<&Step> {
        if self.state == PlaybackState::Cancelled {
            return None;
        }
        if self.shown >= self.animation.len() {
            self.state = PlaybackState::Finished;
            return None;
        }
        self.shown += 1;
        if self.shown == self.animation.len() {
            self.state = PlaybackState::Finished;
        }
        self.current()
    }

    /// Hide the last revealed step. Stepping back pauses playback.
    pub fn retreat(&mut self) -> Option<&Step> {
        if self.state == PlaybackState::Cancelled || self.shown == 0 {
            return None;
        }
        self.shown -= 1;
        self.state = PlaybackState::Paused;
        self.current()
    }

    /// Back to the first step and playing again, even after a cancel
    pub fn restart(&mut self) {
        self.shown = 0;
        self.state = PlaybackState::Playing;
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == PlaybackState::Paused {
            self.state = if self.shown >= self.animation.len() {
                PlaybackState::Finished
            } else {
                PlaybackState::Playing
            };
        }
    }

    /// Play/pause; a finished animation starts over
    pub fn toggle(&mut self) {
        match self.state {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused => self.resume(),
            PlaybackState::Finished | PlaybackState::Cancelled => self.restart(),
        }
    }

    pub fn cancel(&mut self) {
        if self.state != PlaybackState::Finished {
            self.state = PlaybackState::Cancelled;
        }
    }

    /// Jump to the end
    pub fn finish(&mut self) {
        self.shown = self.animation.len();
        self.state = PlaybackState::Finished;
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Playing or paused
    pub fn is_active(&self) -> bool {
        matches!(self.state, PlaybackState::Playing | PlaybackState::Paused)
    }

    /// (shown, total)
    pub fn progress(&self) -> (usize, usize) {
        (self.shown, self.animation.len())
    }
}
