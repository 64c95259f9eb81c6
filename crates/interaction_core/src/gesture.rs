//! Drag-gesture tracking: turns raw pointer samples into translation and release velocity.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Vector};

/// Trailing window (in ms) used to estimate drag velocity.
pub const VELOCITY_WINDOW_MS: f64 = 100.0;

/// One pointer position reported by the host gesture layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    /// Horizontal pointer coordinate.
    pub x: f64,
    /// Vertical pointer coordinate.
    pub y: f64,
    /// Host timestamp in milliseconds.
    pub timestamp_ms: f64,
}

impl PointerSample {
    /// Creates a sample.
    pub const fn new(x: f64, y: f64, timestamp_ms: f64) -> Self {
        Self { x, y, timestamp_ms }
    }

    fn position(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Drag state delivered to interaction reducers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragGesture {
    /// Displacement since the drag began.
    pub translation: Vector,
    /// Estimated velocity in units per second.
    pub velocity: Vector,
}

#[derive(Debug, Clone, PartialEq)]
struct DragSession {
    start: PointerSample,
    last: PointerSample,
    recent: VecDeque<PointerSample>,
}

/// Tracks a single pointer drag from press to release.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DragTracker {
    session: Option<DragSession>,
}

impl DragTracker {
    /// Creates an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Starts a drag at `sample`, replacing any session still in progress.
    pub fn begin(&mut self, sample: PointerSample) {
        let mut recent = VecDeque::new();
        recent.push_back(sample);
        self.session = Some(DragSession {
            start: sample,
            last: sample,
            recent,
        });
    }

    /// Records a move and returns the current gesture, or `None` when no drag is active.
    pub fn update(&mut self, sample: PointerSample) -> Option<DragGesture> {
        let session = self.session.as_mut()?;
        session.record(sample);
        Some(session.gesture())
    }

    /// Records the release sample and finishes the drag.
    pub fn end(&mut self, sample: PointerSample) -> Option<DragGesture> {
        let gesture = self.update(sample)?;
        self.session = None;
        Some(gesture)
    }

    /// Aborts the drag, reporting the last known translation with zero velocity.
    pub fn cancel(&mut self) -> Option<DragGesture> {
        let session = self.session.take()?;
        Some(DragGesture {
            translation: session.translation(),
            velocity: Vector::ZERO,
        })
    }
}

impl DragSession {
    fn record(&mut self, sample: PointerSample) {
        self.last = sample;
        // Out-of-order samples move the pointer but stay out of the velocity window.
        let in_order = self
            .recent
            .back()
            .map_or(true, |newest| sample.timestamp_ms > newest.timestamp_ms);
        if !in_order {
            return;
        }
        self.recent.push_back(sample);
        let cutoff = sample.timestamp_ms - VELOCITY_WINDOW_MS;
        // Keep at least two samples so a slow final move still yields a velocity.
        while self.recent.len() > 2
            && self
                .recent
                .front()
                .is_some_and(|oldest| oldest.timestamp_ms < cutoff)
        {
            self.recent.pop_front();
        }
    }

    fn translation(&self) -> Vector {
        self.last.position().delta_from(self.start.position())
    }

    fn velocity(&self) -> Vector {
        let (Some(oldest), Some(latest)) = (self.recent.front(), self.recent.back()) else {
            return Vector::ZERO;
        };
        let elapsed_ms = latest.timestamp_ms - oldest.timestamp_ms;
        if elapsed_ms <= 0.0 {
            return Vector::ZERO;
        }
        latest
            .position()
            .delta_from(oldest.position())
            .scaled(1000.0 / elapsed_ms)
    }

    fn gesture(&self) -> DragGesture {
        DragGesture {
            translation: self.translation(),
            velocity: self.velocity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn update_without_begin_is_ignored() {
        let mut tracker = DragTracker::new();
        assert_eq!(tracker.update(PointerSample::new(10.0, 10.0, 0.0)), None);
        assert!(!tracker.is_active());
    }

    #[test]
    fn translation_is_measured_from_the_press_sample() {
        let mut tracker = DragTracker::new();
        tracker.begin(PointerSample::new(100.0, 200.0, 0.0));
        tracker.update(PointerSample::new(80.0, 210.0, 16.0));
        let gesture = tracker
            .update(PointerSample::new(40.0, 230.0, 32.0))
            .expect("active drag");

        assert_eq!(gesture.translation, Vector::new(-60.0, 30.0));
    }

    #[test]
    fn velocity_uses_trailing_window_only() {
        let mut tracker = DragTracker::new();
        tracker.begin(PointerSample::new(0.0, 0.0, 0.0));
        // Slow start, then a fast flick within the last 100 ms.
        tracker.update(PointerSample::new(0.0, 10.0, 400.0));
        tracker.update(PointerSample::new(0.0, 40.0, 450.0));
        let gesture = tracker
            .end(PointerSample::new(0.0, 130.0, 500.0))
            .expect("active drag");

        assert_eq!(gesture.velocity, Vector::new(0.0, 1200.0));
        assert_eq!(gesture.translation, Vector::new(0.0, 130.0));
        assert!(!tracker.is_active());
    }

    #[test]
    fn non_increasing_timestamps_report_zero_velocity() {
        let mut tracker = DragTracker::new();
        tracker.begin(PointerSample::new(0.0, 0.0, 10.0));
        let gesture = tracker
            .update(PointerSample::new(25.0, 0.0, 10.0))
            .expect("active drag");

        assert_eq!(gesture.translation, Vector::new(25.0, 0.0));
        assert_eq!(gesture.velocity, Vector::ZERO);
    }

    #[test]
    fn backwards_timestamp_moves_pointer_without_feeding_velocity() {
        let mut tracker = DragTracker::new();
        tracker.begin(PointerSample::new(0.0, 0.0, 0.0));
        tracker.update(PointerSample::new(0.0, 10.0, 50.0));
        let gesture = tracker
            .update(PointerSample::new(0.0, 100.0, 40.0))
            .expect("active drag");

        assert_eq!(gesture.translation, Vector::new(0.0, 100.0));
        assert_eq!(gesture.velocity, Vector::new(0.0, 200.0));

        let released = tracker
            .end(PointerSample::new(0.0, 100.0, 40.0))
            .expect("active drag");
        assert_eq!(released.velocity, Vector::new(0.0, 200.0));
    }

    #[test]
    fn repeated_timestamp_only_sample_reports_zero_velocity() {
        let mut tracker = DragTracker::new();
        tracker.begin(PointerSample::new(0.0, 0.0, 30.0));
        tracker.update(PointerSample::new(0.0, 40.0, 30.0));
        let gesture = tracker
            .update(PointerSample::new(0.0, 900.0, 20.0))
            .expect("active drag");

        assert_eq!(gesture.translation, Vector::new(0.0, 900.0));
        assert_eq!(gesture.velocity, Vector::ZERO);
    }

    #[test]
    fn cancel_keeps_translation_and_drops_velocity() {
        let mut tracker = DragTracker::new();
        tracker.begin(PointerSample::new(0.0, 0.0, 0.0));
        tracker.update(PointerSample::new(-90.0, 0.0, 20.0));

        let gesture = tracker.cancel().expect("active drag");
        assert_eq!(gesture.translation, Vector::new(-90.0, 0.0));
        assert_eq!(gesture.velocity, Vector::ZERO);
        assert_eq!(tracker.cancel(), None);
    }
}
