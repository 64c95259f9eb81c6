//! Swipeable row state machine: resistance-damped drag offset and open/closed settling.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width reserved for each revealed action button.
pub const DEFAULT_ACTION_WIDTH: f64 = 70.0;
/// Release translation beyond which a row settles fully open.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 100.0;
/// Fraction of drag movement applied past the fully open position.
pub const DEFAULT_RESISTANCE: f64 = 0.3;

/// Geometry tokens for a swipeable row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeRowConfig {
    /// Width of one action slot.
    pub action_width: f64,
    /// Release distance needed to settle open.
    pub swipe_threshold: f64,
    /// Damping multiplier applied past the fully open position.
    pub resistance: f64,
}

impl Default for SwipeRowConfig {
    fn default() -> Self {
        Self {
            action_width: DEFAULT_ACTION_WIDTH,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            resistance: DEFAULT_RESISTANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Side of the row an action lives on.
pub enum SwipeEdge {
    /// Revealed by dragging toward positive x.
    Leading,
    /// Revealed by dragging toward negative x.
    Trailing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Discrete row state derived from the offset.
pub enum RowPosition {
    /// Content covers both action groups.
    Closed,
    /// Leading actions fully revealed.
    LeadingOpen,
    /// Trailing actions fully revealed.
    TrailingOpen,
    /// A drag is in progress.
    Dragging,
}

impl RowPosition {
    /// Stable token for DOM state attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::LeadingOpen => "leading-open",
            Self::TrailingOpen => "trailing-open",
            Self::Dragging => "dragging",
        }
    }
}

/// Transient interaction state for one row instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwipeRowState {
    config: SwipeRowConfig,
    leading_action_count: usize,
    trailing_action_count: usize,
    offset: f64,
    last_translation: Option<f64>,
}

impl SwipeRowState {
    /// Creates a closed row.
    ///
    /// # Panics
    ///
    /// Panics when the action width is not positive, the threshold is negative, or the
    /// resistance lies outside `[0, 1]`.
    pub fn new(
        config: SwipeRowConfig,
        leading_action_count: usize,
        trailing_action_count: usize,
    ) -> Self {
        assert!(
            config.action_width.is_finite() && config.action_width > 0.0,
            "swipe action width must be positive, got {}",
            config.action_width
        );
        assert!(
            config.swipe_threshold.is_finite() && config.swipe_threshold >= 0.0,
            "swipe threshold must be non-negative, got {}",
            config.swipe_threshold
        );
        assert!(
            (0.0..=1.0).contains(&config.resistance),
            "swipe resistance must lie in [0, 1], got {}",
            config.resistance
        );
        Self {
            config,
            leading_action_count,
            trailing_action_count,
            offset: 0.0,
            last_translation: None,
        }
    }

    /// Current horizontal translation of the row content.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Geometry tokens in use.
    pub fn config(&self) -> SwipeRowConfig {
        self.config
    }

    /// Number of leading action slots.
    pub fn leading_action_count(&self) -> usize {
        self.leading_action_count
    }

    /// Number of trailing action slots.
    pub fn trailing_action_count(&self) -> usize {
        self.trailing_action_count
    }

    /// Offset at which every leading action is revealed.
    pub fn max_leading(&self) -> f64 {
        self.leading_action_count as f64 * self.config.action_width
    }

    /// Magnitude of the offset at which every trailing action is revealed.
    pub fn max_trailing(&self) -> f64 {
        self.trailing_action_count as f64 * self.config.action_width
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.last_translation.is_some()
    }

    /// Discrete position for the current offset.
    pub fn position(&self) -> RowPosition {
        if self.is_dragging() {
            RowPosition::Dragging
        } else if self.offset > 0.0 {
            RowPosition::LeadingOpen
        } else if self.offset < 0.0 {
            RowPosition::TrailingOpen
        } else {
            RowPosition::Closed
        }
    }

    /// Tracks a drag update and returns the new offset.
    pub fn drag_changed(&mut self, translation_x: f64) -> f64 {
        self.last_translation = Some(translation_x);
        let max_leading = self.max_leading();
        let max_trailing = self.max_trailing();

        self.offset = if translation_x > 0.0 && self.leading_action_count == 0 {
            0.0
        } else if translation_x < 0.0 && self.trailing_action_count == 0 {
            0.0
        } else if translation_x > max_leading {
            max_leading + (translation_x - max_leading) * self.config.resistance
        } else if translation_x < -max_trailing {
            -max_trailing + (translation_x + max_trailing) * self.config.resistance
        } else {
            translation_x
        };
        self.offset
    }

    /// Settles the row for a released drag and returns the resting offset.
    pub fn drag_ended(&mut self, translation_x: f64) -> f64 {
        self.last_translation = None;
        self.offset = if translation_x > self.config.swipe_threshold
            && self.leading_action_count > 0
        {
            self.max_leading()
        } else if translation_x < -self.config.swipe_threshold && self.trailing_action_count > 0 {
            -self.max_trailing()
        } else {
            0.0
        };
        self.offset
    }

    /// Settles a drag the host aborted, using the last translation it reported.
    pub fn drag_cancelled(&mut self) -> f64 {
        let translation_x = self.last_translation.unwrap_or(0.0);
        self.drag_ended(translation_x)
    }

    /// Replaces the number of action slots, closing the row when either side changes.
    pub fn set_action_counts(&mut self, leading_action_count: usize, trailing_action_count: usize) {
        if (leading_action_count, trailing_action_count)
            == (self.leading_action_count, self.trailing_action_count)
        {
            return;
        }
        self.leading_action_count = leading_action_count;
        self.trailing_action_count = trailing_action_count;
        self.reset();
    }

    /// Closes the row.
    pub fn reset(&mut self) {
        self.last_translation = None;
        self.offset = 0.0;
    }

    /// Validates an action tap and closes the row.
    ///
    /// # Errors
    ///
    /// Returns [`SwipeRowError::ActionNotFound`] when `index` is outside the slots on `edge`.
    pub fn invoke_action(&mut self, edge: SwipeEdge, index: usize) -> Result<(), SwipeRowError> {
        let count = match edge {
            SwipeEdge::Leading => self.leading_action_count,
            SwipeEdge::Trailing => self.trailing_action_count,
        };
        if index >= count {
            return Err(SwipeRowError::ActionNotFound { edge, index });
        }
        self.reset();
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Actions accepted by [`reduce_swipe_row`].
pub enum SwipeRowAction {
    /// Horizontal drag moved.
    DragChanged {
        /// Translation since the drag began.
        translation_x: f64,
    },
    /// Drag released.
    DragEnded {
        /// Final translation.
        translation_x: f64,
    },
    /// Host gesture system aborted the drag.
    DragCancelled,
    /// Close the row, for example when a sibling row opens.
    Reset,
    /// An action button was tapped.
    InvokeAction {
        /// Side the action lives on.
        edge: SwipeEdge,
        /// Slot index on that side.
        index: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Effect intents emitted by [`reduce_swipe_row`] for the UI layer to execute.
pub enum SwipeRowEffect {
    /// Row came to rest; the host animates toward `offset`.
    Settled {
        /// Resting offset.
        offset: f64,
        /// Resting position.
        position: RowPosition,
    },
    /// Run the caller callback bound to this slot.
    RunAction {
        /// Side the action lives on.
        edge: SwipeEdge,
        /// Slot index on that side.
        index: usize,
    },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Swipe row reducer errors.
pub enum SwipeRowError {
    /// The tapped action slot does not exist.
    #[error("no {edge:?} swipe action at index {index}")]
    ActionNotFound {
        /// Requested side.
        edge: SwipeEdge,
        /// Requested slot.
        index: usize,
    },
}

/// Applies a [`SwipeRowAction`] and collects resulting effects.
///
/// # Errors
///
/// Returns [`SwipeRowError::ActionNotFound`] for taps on missing slots; the state is unchanged.
pub fn reduce_swipe_row(
    state: &mut SwipeRowState,
    action: SwipeRowAction,
) -> Result<Vec<SwipeRowEffect>, SwipeRowError> {
    let mut effects = Vec::new();
    match action {
        SwipeRowAction::DragChanged { translation_x } => {
            state.drag_changed(translation_x);
        }
        SwipeRowAction::DragEnded { translation_x } => {
            state.drag_ended(translation_x);
            effects.push(settled(state));
        }
        SwipeRowAction::DragCancelled => {
            state.drag_cancelled();
            effects.push(settled(state));
        }
        SwipeRowAction::Reset => {
            state.reset();
            effects.push(settled(state));
        }
        SwipeRowAction::InvokeAction { edge, index } => {
            state.invoke_action(edge, index)?;
            effects.push(SwipeRowEffect::RunAction { edge, index });
            effects.push(settled(state));
        }
    }
    Ok(effects)
}

fn settled(state: &SwipeRowState) -> SwipeRowEffect {
    SwipeRowEffect::Settled {
        offset: state.offset(),
        position: state.position(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn row(leading: usize, trailing: usize) -> SwipeRowState {
        SwipeRowState::new(SwipeRowConfig::default(), leading, trailing)
    }

    #[test]
    fn tracks_one_to_one_inside_open_range() {
        let mut state = row(1, 2);

        assert_eq!(state.drag_changed(45.0), 45.0);
        assert_eq!(state.drag_changed(-120.0), -120.0);
        assert_eq!(state.position(), RowPosition::Dragging);
    }

    #[test]
    fn applies_resistance_past_fully_open() {
        let mut state = row(1, 1);

        assert_close(state.drag_changed(-100.0), -79.0);
        assert_close(state.drag_changed(170.0), 100.0);
    }

    #[test]
    fn empty_side_locks_offset_at_zero() {
        let mut state = row(0, 1);

        assert_eq!(state.drag_changed(40.0), 0.0);
        assert_eq!(state.drag_changed(400.0), 0.0);
        assert_eq!(state.drag_changed(-30.0), -30.0);
    }

    #[test]
    fn release_past_threshold_opens_fully() {
        let mut state = row(0, 2);
        state.drag_changed(-150.0);

        let effects =
            reduce_swipe_row(&mut state, SwipeRowAction::DragEnded { translation_x: -150.0 })
                .expect("drag end");

        assert_eq!(
            effects,
            vec![SwipeRowEffect::Settled {
                offset: -140.0,
                position: RowPosition::TrailingOpen,
            }]
        );
    }

    #[test]
    fn release_short_of_threshold_closes() {
        let mut state = row(1, 1);
        state.drag_changed(90.0);

        assert_eq!(state.drag_ended(90.0), 0.0);
        assert_eq!(state.position(), RowPosition::Closed);
    }

    #[test]
    fn release_past_threshold_toward_empty_side_closes() {
        let mut state = row(0, 1);

        assert_eq!(state.drag_ended(250.0), 0.0);
    }

    #[test]
    fn duplicate_drag_end_is_idempotent() {
        let mut state = row(2, 0);
        state.drag_changed(130.0);

        let first = state.drag_ended(130.0);
        let snapshot = state.clone();
        let second = state.drag_ended(130.0);

        assert_eq!(first, 140.0);
        assert_eq!(first, second);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn cancel_settles_from_last_translation() {
        let mut state = row(1, 0);
        state.drag_changed(120.0);

        let effects = reduce_swipe_row(&mut state, SwipeRowAction::DragCancelled).expect("cancel");

        assert_eq!(
            effects,
            vec![SwipeRowEffect::Settled {
                offset: 70.0,
                position: RowPosition::LeadingOpen,
            }]
        );
    }

    #[test]
    fn invoking_an_action_runs_it_once_then_closes() {
        let mut state = row(1, 2);
        state.drag_changed(-150.0);
        state.drag_ended(-150.0);

        let effects = reduce_swipe_row(
            &mut state,
            SwipeRowAction::InvokeAction {
                edge: SwipeEdge::Trailing,
                index: 1,
            },
        )
        .expect("invoke");

        assert_eq!(
            effects,
            vec![
                SwipeRowEffect::RunAction {
                    edge: SwipeEdge::Trailing,
                    index: 1,
                },
                SwipeRowEffect::Settled {
                    offset: 0.0,
                    position: RowPosition::Closed,
                },
            ]
        );
    }

    #[test]
    fn invoking_a_missing_action_leaves_state_untouched() {
        let mut state = row(1, 0);
        state.drag_ended(150.0);
        let before = state.clone();

        let err = reduce_swipe_row(
            &mut state,
            SwipeRowAction::InvokeAction {
                edge: SwipeEdge::Trailing,
                index: 0,
            },
        )
        .unwrap_err();

        assert_eq!(
            err,
            SwipeRowError::ActionNotFound {
                edge: SwipeEdge::Trailing,
                index: 0,
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn reset_closes_an_open_row_mid_drag() {
        let mut state = row(1, 1);
        state.drag_changed(50.0);

        reduce_swipe_row(&mut state, SwipeRowAction::Reset).expect("reset");

        assert_eq!(state.offset(), 0.0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn changing_action_counts_closes_the_row() {
        let mut state = row(1, 1);
        state.drag_ended(150.0);

        state.set_action_counts(1, 1);
        assert_eq!(state.offset(), 70.0);

        state.set_action_counts(2, 1);
        assert_eq!(state.offset(), 0.0);
        assert_eq!(state.max_leading(), 140.0);
    }

    #[test]
    #[should_panic(expected = "swipe resistance must lie in [0, 1]")]
    fn rejects_resistance_above_one() {
        SwipeRowState::new(
            SwipeRowConfig {
                resistance: 1.5,
                ..SwipeRowConfig::default()
            },
            1,
            1,
        );
    }
}
