//! Screen-space geometry helpers shared by the layout engine and the screens.

use sdl2::rect::Rect;

/// Integer percentage of `value`, truncating like the rest of the layout math.
pub fn percent(value: i32, pct: i32) -> i32 {
    value * pct / 100
}

/// Point-in-rect test with inclusive edges on all four sides.
///
/// SDL's own `Rect::contains_point` excludes the right and bottom edges; hit
/// testing for click regions counts a click on the border as a hit.
pub fn contains_inclusive(rect: &Rect, x: i32, y: i32) -> bool {
    x >= rect.x()
        && x <= rect.x() + rect.width() as i32
        && y >= rect.y()
        && y <= rect.y() + rect.height() as i32
}

/// Centers an item of `item_w` x `item_h` inside an `area_w` x `area_h` area anchored at the origin.
pub fn center_rect(item_w: u32, item_h: u32, area_w: u32, area_h: u32) -> Rect {
    let x = (area_w as i32 - item_w as i32) / 2;
    let y = (area_h as i32 - item_h as i32) / 2;
    Rect::new(x, y, item_w, item_h)
}

/// Centers an item inside an arbitrary rectangle.
pub fn center_in(item_w: u32, item_h: u32, area: Rect) -> Rect {
    let inner = center_rect(item_w, item_h, area.width(), area.height());
    Rect::new(area.x() + inner.x(), area.y() + inner.y(), item_w, item_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_truncates() {
        assert_eq!(percent(800, 20), 160);
        assert_eq!(percent(799, 20), 159);
    }

    #[test]
    fn test_contains_inclusive_edges() {
        let rect = Rect::new(10, 20, 30, 40);
        assert!(contains_inclusive(&rect, 10, 20));
        assert!(contains_inclusive(&rect, 40, 60));
        assert!(!contains_inclusive(&rect, 41, 60));
        assert!(!contains_inclusive(&rect, 9, 30));
        assert!(!contains_inclusive(&rect, 20, 61));
    }

    #[test]
    fn test_center_rect() {
        let rect = center_rect(100, 50, 480, 400);
        assert_eq!(rect, Rect::new(190, 175, 100, 50));
    }

    #[test]
    fn test_center_in_offsets_by_area_origin() {
        let area = Rect::new(20, 600, 200, 100);
        let rect = center_in(60, 14, area);
        assert_eq!(rect, Rect::new(90, 643, 60, 14));
    }
}
