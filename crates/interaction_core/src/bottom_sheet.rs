//! Bottom sheet state machine: live drag height, nearest-detent snapping, and flick dismissal.
//!
//! Heights grow upward. A drag reports screen-space `delta_y` (positive downward), so the live
//! height is `container_height * detent.ratio() - delta_y`. On release a downward velocity above
//! the dismiss threshold hides the sheet and leaves the detent untouched; otherwise the sheet
//! snaps to the detent whose height is closest to where the drag left it, first detent winning
//! ties.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Downward release velocity (units per second) above which the sheet dismisses.
pub const DEFAULT_DISMISS_VELOCITY: f64 = 1000.0;

#[derive(Debug, Error, Clone, PartialEq)]
/// Invalid detent configuration.
pub enum DetentError {
    /// Ratio outside `(0, 1]`.
    #[error("detent ratio must lie in (0, 1], got {0}")]
    OutOfRange(f64),
    /// No detents supplied.
    #[error("a bottom sheet needs at least one detent")]
    Empty,
}

/// Fraction of the container height a sheet can rest at.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Detent(f64);

impl Detent {
    /// A quarter of the container.
    pub const SMALL: Self = Self(0.25);
    /// Half of the container.
    pub const MEDIUM: Self = Self(0.5);
    /// Nearly the full container.
    pub const LARGE: Self = Self(0.9);

    /// Creates a detent.
    ///
    /// # Panics
    ///
    /// Panics when `ratio` lies outside `(0, 1]`.
    pub fn new(ratio: f64) -> Self {
        match Self::try_from(ratio) {
            Ok(detent) => detent,
            Err(err) => panic!("{err}"),
        }
    }

    /// Height ratio in `(0, 1]`.
    pub fn ratio(self) -> f64 {
        self.0
    }

    /// Resting height inside a container of `container_height`.
    pub fn height_in(self, container_height: f64) -> f64 {
        container_height * self.0
    }
}

impl TryFrom<f64> for Detent {
    type Error = DetentError;

    fn try_from(ratio: f64) -> Result<Self, Self::Error> {
        if ratio > 0.0 && ratio <= 1.0 {
            Ok(Self(ratio))
        } else {
            Err(DetentError::OutOfRange(ratio))
        }
    }
}

impl From<Detent> for f64 {
    fn from(detent: Detent) -> Self {
        detent.0
    }
}

/// Non-empty, insertion-ordered set of detents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Detent>", into = "Vec<Detent>")]
pub struct DetentSet(Vec<Detent>);

impl DetentSet {
    /// Builds a set, dropping later duplicates.
    ///
    /// # Panics
    ///
    /// Panics when `detents` is empty.
    pub fn new(detents: impl IntoIterator<Item = Detent>) -> Self {
        match Self::try_from(detents.into_iter().collect::<Vec<_>>()) {
            Ok(set) => set,
            Err(err) => panic!("{err}"),
        }
    }

    /// Whether `detent` is a member.
    pub fn contains(&self, detent: Detent) -> bool {
        self.0.contains(&detent)
    }

    /// Detents in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Detent> + '_ {
        self.0.iter().copied()
    }

    /// Number of detents.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no detents. Construction rejects empty input, so this is `false`
    /// for every `DetentSet`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First detent in insertion order.
    pub fn first(&self) -> Detent {
        self.0[0]
    }

    /// Detent whose resting height is nearest `height`; the earliest detent wins ties.
    pub fn closest_to(&self, height: f64, container_height: f64) -> Detent {
        let mut closest = self.first();
        let mut min_distance = f64::INFINITY;
        for detent in self.iter() {
            let distance = (height - detent.height_in(container_height)).abs();
            if distance < min_distance {
                min_distance = distance;
                closest = detent;
            }
        }
        closest
    }
}

impl TryFrom<Vec<Detent>> for DetentSet {
    type Error = DetentError;

    fn try_from(detents: Vec<Detent>) -> Result<Self, Self::Error> {
        let mut unique: Vec<Detent> = Vec::with_capacity(detents.len());
        for detent in detents {
            if !unique.contains(&detent) {
                unique.push(detent);
            }
        }
        if unique.is_empty() {
            return Err(DetentError::Empty);
        }
        Ok(Self(unique))
    }
}

impl From<DetentSet> for Vec<Detent> {
    fn from(set: DetentSet) -> Self {
        set.0
    }
}

/// Caller-facing sheet options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BottomSheetConfig {
    /// Resting heights.
    pub detents: DetentSet,
    /// Detent shown on first presentation.
    pub initial_detent: Detent,
    /// Release velocity that dismisses the sheet.
    pub dismiss_velocity: f64,
    /// Whether the grab handle is rendered.
    pub show_handle: bool,
}

impl Default for BottomSheetConfig {
    fn default() -> Self {
        Self {
            detents: DetentSet::new([Detent::MEDIUM, Detent::LARGE]),
            initial_detent: Detent::MEDIUM,
            dismiss_velocity: DEFAULT_DISMISS_VELOCITY,
            show_handle: true,
        }
    }
}

/// Transient state for one sheet instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BottomSheetState {
    config: BottomSheetConfig,
    container_height: f64,
    current_detent: Detent,
    drag_offset: f64,
    dragging: bool,
    is_presented: bool,
}

impl BottomSheetState {
    /// Creates a hidden sheet resting at the configured initial detent.
    ///
    /// # Panics
    ///
    /// Panics when the initial detent is not one of the configured detents, or when
    /// `container_height` is not positive.
    pub fn new(config: BottomSheetConfig, container_height: f64) -> Self {
        assert!(
            config.detents.contains(config.initial_detent),
            "initial detent {:?} is not one of {:?}",
            config.initial_detent,
            config.detents
        );
        assert_container_height(container_height);
        Self {
            current_detent: config.initial_detent,
            config,
            container_height,
            drag_offset: 0.0,
            dragging: false,
            is_presented: false,
        }
    }

    /// Options in use.
    pub fn config(&self) -> &BottomSheetConfig {
        &self.config
    }

    /// Detent the sheet rests at.
    pub fn current_detent(&self) -> Detent {
        self.current_detent
    }

    /// Height delta applied by the drag in progress.
    pub fn drag_offset(&self) -> f64 {
        self.drag_offset
    }

    /// Whether the sheet is shown.
    pub fn is_presented(&self) -> bool {
        self.is_presented
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Height of the sheet's container.
    pub fn container_height(&self) -> f64 {
        self.container_height
    }

    /// Resting height of `detent` in the current container.
    pub fn detent_height(&self, detent: Detent) -> f64 {
        detent.height_in(self.container_height)
    }

    /// Live sheet height, unclamped while dragging.
    pub fn displayed_height(&self) -> f64 {
        self.detent_height(self.current_detent) + self.drag_offset
    }

    /// Updates the container height, for example after a viewport resize.
    ///
    /// # Panics
    ///
    /// Panics when `container_height` is not positive.
    pub fn set_container_height(&mut self, container_height: f64) {
        assert_container_height(container_height);
        self.container_height = container_height;
    }

    /// Shows the sheet at its current detent.
    pub fn present(&mut self) -> Option<SheetEffect> {
        if self.is_presented {
            return None;
        }
        self.is_presented = true;
        self.clear_drag();
        Some(SheetEffect::Presented)
    }

    /// Tracks a vertical drag; `delta_y` grows downward.
    pub fn drag_changed(&mut self, delta_y: f64) -> f64 {
        if self.is_presented {
            self.dragging = true;
            self.drag_offset = -delta_y;
        }
        self.displayed_height()
    }

    /// Settles a released drag.
    ///
    /// Only a drag in progress takes `delta_y` into account; a repeated release keeps the
    /// resting height and therefore the detent.
    pub fn drag_ended(&mut self, delta_y: f64, velocity_y: f64) -> Option<SheetEffect> {
        if !self.is_presented {
            return None;
        }
        if self.dragging {
            self.drag_offset = -delta_y;
        }
        let current_height = self.displayed_height();
        let effect = if velocity_y > self.config.dismiss_velocity {
            self.is_presented = false;
            SheetEffect::Dismissed
        } else {
            self.current_detent = self
                .config
                .detents
                .closest_to(current_height, self.container_height);
            SheetEffect::SettledAt(self.current_detent)
        };
        self.clear_drag();
        Some(effect)
    }

    /// Settles a drag the host aborted, as a zero-velocity release at the last position.
    pub fn drag_cancelled(&mut self) -> Option<SheetEffect> {
        let delta_y = -self.drag_offset;
        self.drag_ended(delta_y, 0.0)
    }

    /// Dismisses the sheet from a backdrop tap regardless of drag state.
    pub fn backdrop_tapped(&mut self) -> Option<SheetEffect> {
        self.dismiss()
    }

    /// Hides the sheet, keeping its detent for the next presentation.
    pub fn dismiss(&mut self) -> Option<SheetEffect> {
        if !self.is_presented {
            return None;
        }
        self.is_presented = false;
        self.clear_drag();
        Some(SheetEffect::Dismissed)
    }

    fn clear_drag(&mut self) {
        self.drag_offset = 0.0;
        self.dragging = false;
    }
}

fn assert_container_height(container_height: f64) {
    assert!(
        container_height.is_finite() && container_height > 0.0,
        "bottom sheet container height must be positive, got {container_height}"
    );
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Actions accepted by [`reduce_bottom_sheet`].
pub enum SheetAction {
    /// Caller asked to show the sheet.
    Present,
    /// Caller asked to hide the sheet.
    Dismiss,
    /// Vertical drag moved.
    DragChanged {
        /// Screen-space translation since the drag began, positive downward.
        delta_y: f64,
    },
    /// Drag released.
    DragEnded {
        /// Final screen-space translation.
        delta_y: f64,
        /// Release velocity, positive downward.
        velocity_y: f64,
    },
    /// Host gesture system aborted the drag.
    DragCancelled,
    /// Backdrop behind the sheet was tapped.
    BackdropTapped,
    /// Container was resized.
    ContainerResized {
        /// New container height.
        height: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Effect intents emitted by [`reduce_bottom_sheet`].
pub enum SheetEffect {
    /// Sheet became visible.
    Presented,
    /// Sheet came to rest at a detent.
    SettledAt(Detent),
    /// Sheet was hidden.
    Dismissed,
}

/// Applies a [`SheetAction`] and collects resulting effects.
pub fn reduce_bottom_sheet(
    state: &mut BottomSheetState,
    action: SheetAction,
) -> Vec<SheetEffect> {
    let effect = match action {
        SheetAction::Present => state.present(),
        SheetAction::Dismiss => state.dismiss(),
        SheetAction::DragChanged { delta_y } => {
            state.drag_changed(delta_y);
            None
        }
        SheetAction::DragEnded {
            delta_y,
            velocity_y,
        } => state.drag_ended(delta_y, velocity_y),
        SheetAction::DragCancelled => state.drag_cancelled(),
        SheetAction::BackdropTapped => state.backdrop_tapped(),
        SheetAction::ContainerResized { height } => {
            state.set_container_height(height);
            None
        }
    };
    effect.into_iter().collect()
}
