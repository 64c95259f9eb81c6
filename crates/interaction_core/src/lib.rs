//! Headless geometry and interaction state machines for gesture-driven UI primitives.
//!
//! The crate owns the computed parts of three primitives: wrapped flow layout, swipeable rows,
//! and detent-snapping bottom sheets. Each one is a plain state value updated through a reducer
//! that returns effect intents, so any host UI layer can drive it from its own pointer events
//! and render the resulting geometry.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod bottom_sheet;
pub mod config;
pub mod flow_layout;
pub mod geometry;
pub mod gesture;
pub mod motion;
pub mod swipeable_row;

pub use bottom_sheet::{
    reduce_bottom_sheet, BottomSheetConfig, BottomSheetState, Detent, DetentError, DetentSet,
    SheetAction, SheetEffect, DEFAULT_DISMISS_VELOCITY,
};
pub use config::{ConfigError, FlowConfig, InteractionConfig, MotionConfig};
pub use flow_layout::{FlowArrangement, FlowLayout, Measurable, DEFAULT_FLOW_SPACING};
pub use geometry::{Point, Size, Vector};
pub use gesture::{DragGesture, DragTracker, PointerSample, VELOCITY_WINDOW_MS};
pub use motion::SpringCurve;
pub use swipeable_row::{
    reduce_swipe_row, RowPosition, SwipeEdge, SwipeRowAction, SwipeRowConfig, SwipeRowEffect,
    SwipeRowError, SwipeRowState, DEFAULT_ACTION_WIDTH, DEFAULT_RESISTANCE,
    DEFAULT_SWIPE_THRESHOLD,
};
