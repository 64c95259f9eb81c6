//! Single-pass wrapped row layout for chip and tag collections.
//!
//! Elements are placed left to right and start a new row when the next one would overflow the
//! available width. An element is never split: one wider than the container sits alone at
//! `x = 0` on its own row.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size, Vector};

/// Default gap between elements and between rows.
pub const DEFAULT_FLOW_SPACING: f64 = 8.0;

/// Anything that can report its intrinsic size given unconstrained space.
pub trait Measurable {
    /// Intrinsic size of the element.
    fn measure(&self) -> Size;
}

impl Measurable for Size {
    fn measure(&self) -> Size {
        *self
    }
}

impl Measurable for (f64, f64) {
    fn measure(&self) -> Size {
        Size::new(self.0, self.1)
    }
}

impl<T: Measurable + ?Sized> Measurable for &T {
    fn measure(&self) -> Size {
        (**self).measure()
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowArrangement {
    /// Top-left position of each element, parallel to the input order.
    pub placements: Vec<Point>,
    /// Total content height.
    pub height: f64,
    /// Number of rows used.
    pub row_count: usize,
}

impl FlowArrangement {
    /// Returns the placements shifted into a parent bounds whose top-left is `origin`.
    pub fn translated(&self, origin: Point) -> Vec<Point> {
        let delta = Vector::new(origin.x, origin.y);
        self.placements
            .iter()
            .map(|placement| placement.offset(delta))
            .collect()
    }
}

/// Flow layout configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowLayout {
    spacing: f64,
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_FLOW_SPACING,
        }
    }
}

impl FlowLayout {
    /// Creates a layout with the given inter-element spacing.
    ///
    /// # Panics
    ///
    /// Panics when `spacing` is negative or not finite.
    pub fn new(spacing: f64) -> Self {
        assert!(
            spacing.is_finite() && spacing >= 0.0,
            "flow layout spacing must be finite and non-negative, got {spacing}"
        );
        Self { spacing }
    }

    /// Gap between elements and rows.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Places `elements` into rows no wider than `available_width`.
    ///
    /// # Panics
    ///
    /// Panics when `available_width` is negative or not finite.
    pub fn arrange<M: Measurable>(&self, elements: &[M], available_width: f64) -> FlowArrangement {
        assert!(
            available_width.is_finite() && available_width >= 0.0,
            "flow layout width must be finite and non-negative, got {available_width}"
        );

        let mut placements = Vec::with_capacity(elements.len());
        let mut cursor_x = 0.0_f64;
        let mut cursor_y = 0.0_f64;
        let mut row_height = 0.0_f64;
        let mut row_count = usize::from(!elements.is_empty());

        for element in elements {
            let size = element.measure();

            if cursor_x + size.width > available_width && cursor_x > 0.0 {
                cursor_x = 0.0;
                cursor_y += row_height + self.spacing;
                row_height = 0.0;
                row_count += 1;
            }

            placements.push(Point::new(cursor_x, cursor_y));
            row_height = row_height.max(size.height);
            cursor_x += size.width + self.spacing;
        }

        FlowArrangement {
            placements,
            height: cursor_y + row_height,
            row_count,
        }
    }

    /// Size the layout wants for a width proposal; an unspecified proposal lays out at zero width.
    pub fn size_that_fits<M: Measurable>(
        &self,
        elements: &[M],
        proposed_width: Option<f64>,
    ) -> Size {
        let width = proposed_width.unwrap_or(0.0);
        Size::new(width, self.arrange(elements, width).height)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn wraps_when_next_element_overflows() {
        let layout = FlowLayout::new(10.0);
        let elements = [(50.0, 20.0), (50.0, 20.0), (50.0, 20.0)];

        let result = layout.arrange(&elements, 120.0);

        assert_eq!(
            result.placements,
            vec![
                Point::new(0.0, 0.0),
                Point::new(60.0, 0.0),
                Point::new(0.0, 30.0)
            ]
        );
        assert_eq!(result.height, 50.0);
        assert_eq!(result.row_count, 2);
    }

    #[test]
    fn exact_fit_stays_on_the_row() {
        let layout = FlowLayout::new(10.0);
        let elements = [(55.0, 10.0), (55.0, 10.0)];

        let result = layout.arrange(&elements, 120.0);

        assert_eq!(result.placements[1], Point::new(65.0, 0.0));
        assert_eq!(result.row_count, 1);
    }

    #[test]
    fn over_wide_element_gets_its_own_row() {
        let layout = FlowLayout::new(8.0);
        let elements = [(40.0, 10.0), (300.0, 24.0), (40.0, 10.0)];

        let result = layout.arrange(&elements, 100.0);

        assert_eq!(
            result.placements,
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 18.0),
                Point::new(0.0, 50.0)
            ]
        );
        assert_eq!(result.height, 60.0);
        assert_eq!(result.row_count, 3);
    }

    #[test]
    fn row_height_is_tallest_child() {
        let layout = FlowLayout::default();
        let elements = [
            Size::new(30.0, 12.0),
            Size::new(30.0, 40.0),
            Size::new(30.0, 18.0),
            Size::new(30.0, 10.0),
        ];

        let result = layout.arrange(&elements, 100.0);

        // 30 + 8 + 30 + 8 + 30 = 106 > 100, so the third element wraps.
        assert_eq!(result.placements[2], Point::new(0.0, 48.0));
        assert_eq!(result.placements[3], Point::new(38.0, 48.0));
        assert_eq!(result.height, 66.0);
    }

    #[test]
    fn empty_input_has_zero_height() {
        let layout = FlowLayout::default();
        let result = layout.arrange::<Size>(&[], 320.0);

        assert_eq!(result, FlowArrangement::default());
    }

    #[test]
    fn size_that_fits_reports_proposal_width() {
        let layout = FlowLayout::new(4.0);
        let elements = [(20.0, 10.0), (20.0, 10.0)];

        assert_eq!(
            layout.size_that_fits(&elements, Some(30.0)),
            Size::new(30.0, 24.0)
        );
        assert_eq!(
            layout.size_that_fits(&elements, None),
            Size::new(0.0, 24.0)
        );
    }

    #[test]
    fn translated_offsets_every_placement() {
        let layout = FlowLayout::new(0.0);
        let result = layout.arrange(&[(10.0, 10.0), (10.0, 10.0)], 100.0);

        assert_eq!(
            result.translated(Point::new(5.0, 7.0)),
            vec![Point::new(5.0, 7.0), Point::new(15.0, 7.0)]
        );
    }

    #[test]
    #[should_panic(expected = "width must be finite and non-negative")]
    fn negative_width_is_a_programming_error() {
        FlowLayout::default().arrange(&[(1.0, 1.0)], -1.0);
    }
}
