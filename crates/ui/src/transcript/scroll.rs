use purrsona_core::ScrollBehavior;

/// Fraction of the remaining distance covered per smooth-scroll frame
const SMOOTH_STEP_RATIO: f64 = 0.35;

/// Keeps the bottom-of-transcript marker in view
///
/// One anchor belongs to one transcript view. Content changes call
/// [`ScrollAnchor::request`]; the renderer resolves pending requests once per
/// frame against the marker line it just laid out, so any number of requests
/// between two frames collapse into a single scroll target. Manual scrolling
/// is honoured only until the next request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollAnchor {
    behavior: ScrollBehavior,
    offset: usize,
    target: usize,
    max_offset: usize,
    pending: bool,
    requests: u64,
}

impl ScrollAnchor {
    pub fn new(behavior: ScrollBehavior) -> Self {
        Self { behavior, offset: 0, target: 0, max_offset: 0, pending: false, requests: 0 }
    }

    /// Ask for the marker to be brought into view on the next frame
    pub fn request(&mut self) {
        self.requests += 1;
        self.pending = true;
        tracing::trace!(requests = self.requests, "scroll to marker requested");
    }

    /// Apply a pending request against this frame's layout
    ///
    /// `marker` is the line just past the last bubble, or `None` when no list
    /// is mounted. Returns whether a scroll target was set.
    pub fn resolve(&mut self, marker: Option<usize>, viewport_height: u16) -> bool {
        let Some(marker) = marker else {
            if self.pending {
                tracing::trace!("scroll marker not mounted, request dropped");
            }
            self.pending = false;
            return false;
        };

        self.max_offset = marker.saturating_sub(viewport_height as usize);
        self.offset = self.offset.min(self.max_offset);
        self.target = self.target.min(self.max_offset);

        if !self.pending {
            return false;
        }

        self.pending = false;
        self.target = self.max_offset;
        if self.behavior == ScrollBehavior::Instant {
            self.offset = self.target;
        }
        true
    }

    /// Advance one animation frame toward the target; returns whether it moved
    pub fn tick(&mut self) -> bool {
        if self.offset == self.target {
            return false;
        }

        match self.behavior {
            ScrollBehavior::Instant => self.offset = self.target,
            ScrollBehavior::Smooth => {
                let distance = self.offset.abs_diff(self.target);
                let step = ((distance as f64 * SMOOTH_STEP_RATIO).ceil() as usize).clamp(1, distance);
                if self.target > self.offset {
                    self.offset += step;
                } else {
                    self.offset -= step;
                }
            }
        }
        true
    }

    /// Scroll by `delta` lines (negative is up); no override is recorded
    pub fn scroll_by(&mut self, delta: i32) {
        let distance = delta.unsigned_abs() as usize;
        self.offset = if delta < 0 {
            self.offset.saturating_sub(distance)
        } else {
            self.offset.saturating_add(distance).min(self.max_offset)
        };
        self.target = self.offset;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn max_offset(&self) -> usize {
        self.max_offset
    }

    /// Number of logical scroll requests issued so far
    pub fn requests(&self) -> u64 {
        self.requests
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_settled(&self) -> bool {
        !self.pending && self.offset == self.target
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset == self.max_offset
    }

    pub fn behavior(&self) -> ScrollBehavior {
        self.behavior
    }
}

impl Default for ScrollAnchor {
    fn default() -> Self {
        Self::new(ScrollBehavior::default())
    }
}
