//! Leptos bindings and styling primitives for gesture-driven interaction components.
//!
//! The crate wires DOM pointer input into the headless state machines from
//! [`interaction_core`] and renders them as [`FlowLayout`], [`SwipeableRow`], and
//! [`BottomSheet`]. A small set of styling primitives shares the stable `data-ui-*` DOM
//! contract so CSS and tests can target component state without ad hoc class names.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod interaction;
mod primitives;

pub use interaction::{
    BottomSheet, BottomSheetController, FlowLayout, SwipeAction, SwipeRowController,
    SwipeableRow,
};
pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Cluster, Heading, LayoutAlign, LayoutGap,
    LayoutJustify, LayoutPadding, Panel, Stack, Text, TextRole, TextTone,
};

/// Convenience imports for application crates consuming the shared component set.
pub mod prelude {
    pub use crate::{
        Badge, BottomSheet, BottomSheetController, Button, ButtonSize, ButtonVariant, Cluster,
        FlowLayout, Heading, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, Panel, Stack,
        SwipeAction, SwipeRowController, SwipeableRow, Text, TextRole, TextTone,
    };
    pub use interaction_core::{
        BottomSheetConfig, Detent, DetentSet, InteractionConfig, RowPosition, SpringCurve,
        SwipeRowConfig,
    };
}
