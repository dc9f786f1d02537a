//! Window Layout
//!
//! Pure geometry for fixed-size rows. No DOM access here.

use std::ops::Range;

/// Where a scrolled-to item should land inside the viewport
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    /// Item at the top edge
    Start,
    /// Item in the middle of the viewport
    #[default]
    Center,
    /// Item at the bottom edge
    End,
    /// Scroll only as far as needed to make the item fully visible
    Auto,
}

/// Row geometry for a list whose rows all share one height
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowLayout {
    pub item_size: f64,
    pub overscan: usize,
}

impl WindowLayout {
    pub fn new(item_size: f64, overscan: usize) -> Self {
        Self { item_size, overscan }
    }

    /// Total scrollable height in pixels
    pub fn total_size(&self, item_count: usize) -> f64 {
        item_count as f64 * self.item_size
    }

    /// Pixel offset of the top edge of `index`
    pub fn offset_of(&self, index: usize) -> f64 {
        index as f64 * self.item_size
    }

    /// Half-open range of indices to render for the given scroll position,
    /// widened by `overscan` rows on each side.
    pub fn visible_range(&self, scroll_top: f64, viewport_height: f64, item_count: usize) -> Range<usize> {
        if item_count == 0 || self.item_size <= 0.0 {
            return 0..0;
        }
        let scroll_top = scroll_top.max(0.0);
        let viewport_height = viewport_height.max(0.0);

        let first = ((scroll_top / self.item_size).floor() as usize).min(item_count - 1);
        let last = (((scroll_top + viewport_height) / self.item_size).ceil() as usize).min(item_count);

        let start = first.saturating_sub(self.overscan);
        let end = (last.max(first + 1) + self.overscan).min(item_count);
        start..end
    }

    /// Largest valid scroll offset
    pub fn max_scroll(&self, viewport_height: f64, item_count: usize) -> f64 {
        (self.total_size(item_count) - viewport_height).max(0.0)
    }

    /// Scroll offset that brings `index` into view with the requested alignment.
    /// `current` is the present scroll position, used by [`Align::Auto`].
    pub fn scroll_offset(
        &self,
        index: usize,
        align: Align,
        current: f64,
        viewport_height: f64,
        item_count: usize,
    ) -> f64 {
        if item_count == 0 {
            return 0.0;
        }
        let index = index.min(item_count - 1);
        let top = self.offset_of(index);
        let bottom_aligned = top - viewport_height + self.item_size;

        let target = match align {
            Align::Start => top,
            Align::End => bottom_aligned,
            Align::Center => top - (viewport_height - self.item_size) / 2.0,
            Align::Auto => {
                if current > top {
                    top
                } else if current < bottom_aligned {
                    bottom_aligned
                } else {
                    current
                }
            }
        };
        target.clamp(0.0, self.max_scroll(viewport_height, item_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> WindowLayout {
        WindowLayout::new(50.0, 2)
    }

    #[test]
    fn test_visible_range_at_top() {
        // 200px viewport shows rows 0..4, plus 2 overscan below
        assert_eq!(layout().visible_range(0.0, 200.0, 100), 0..6);
    }

    #[test]
    fn test_visible_range_mid_scroll() {
        // scroll_top 1000 -> first row 20, viewport covers 20..24
        assert_eq!(layout().visible_range(1000.0, 200.0, 100), 18..26);
    }

    #[test]
    fn test_visible_range_partial_row() {
        // 1025 starts halfway into row 20 and ends halfway into row 24
        assert_eq!(layout().visible_range(1025.0, 200.0, 100), 18..27);
    }

    #[test]
    fn test_visible_range_clamped_to_count() {
        assert_eq!(layout().visible_range(4800.0, 400.0, 100), 94..100);
        assert_eq!(layout().visible_range(0.0, 1000.0, 3), 0..3);
    }

    #[test]
    fn test_visible_range_empty() {
        assert_eq!(layout().visible_range(0.0, 200.0, 0), 0..0);
    }

    #[test]
    fn test_visible_range_zero_viewport_still_renders_a_row() {
        let range = WindowLayout::new(50.0, 0).visible_range(0.0, 0.0, 10);
        assert_eq!(range, 0..1);
    }

    #[test]
    fn test_scroll_offset_start_and_end() {
        let l = layout();
        assert_eq!(l.scroll_offset(10, Align::Start, 0.0, 200.0, 100), 500.0);
        // bottom edge of row 10 (550) at bottom of viewport
        assert_eq!(l.scroll_offset(10, Align::End, 0.0, 200.0, 100), 350.0);
    }

    #[test]
    fn test_scroll_offset_center() {
        // row 10 top = 500, centred in 200px viewport -> 500 - 75
        assert_eq!(layout().scroll_offset(10, Align::Center, 0.0, 200.0, 100), 425.0);
    }

    #[test]
    fn test_scroll_offset_clamps() {
        let l = layout();
        assert_eq!(l.scroll_offset(0, Align::Center, 0.0, 200.0, 100), 0.0);
        // last row cannot scroll past max (5000 - 200)
        assert_eq!(l.scroll_offset(99, Align::Start, 0.0, 200.0, 100), 4800.0);
        // out of range index is treated as the last row
        assert_eq!(l.scroll_offset(500, Align::Start, 0.0, 200.0, 100), 4800.0);
    }

    #[test]
    fn test_scroll_offset_auto_keeps_visible_item() {
        let l = layout();
        // row 5 (250..300) already inside 200..400
        assert_eq!(l.scroll_offset(5, Align::Auto, 200.0, 200.0, 100), 200.0);
        // row 2 above the viewport -> align to start
        assert_eq!(l.scroll_offset(2, Align::Auto, 200.0, 200.0, 100), 100.0);
        // row 20 below -> align to end
        assert_eq!(l.scroll_offset(20, Align::Auto, 200.0, 200.0, 100), 850.0);
    }

    #[test]
    fn test_scroll_offset_short_list() {
        // everything fits, nothing to scroll
        assert_eq!(layout().scroll_offset(2, Align::End, 0.0, 400.0, 3), 0.0);
    }
}
