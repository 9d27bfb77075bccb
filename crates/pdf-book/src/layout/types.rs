//! Layout data types shared by the interior and cover engines

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Grow the rectangle by `amount` on every side
    pub fn outset(&self, amount: f32) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + 2.0 * amount,
            self.height + 2.0 * amount,
        )
    }

    /// Largest rectangle with the given aspect ratio that fits inside,
    /// centered on both axes.
    pub fn fit_centered(&self, source_width: f32, source_height: f32) -> Rect {
        if source_width <= 0.0 || source_height <= 0.0 {
            return *self;
        }
        let scale = (self.width / source_width).min(self.height / source_height);
        let width = source_width * scale;
        let height = source_height * scale;
        Rect::new(
            self.x + (self.width - width) / 2.0,
            self.y + (self.height - height) / 2.0,
            width,
            height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_centered_letterboxes_wide_source() {
        let frame = Rect::new(10.0, 20.0, 100.0, 100.0);
        let placed = frame.fit_centered(200.0, 100.0);
        assert_eq!(placed, Rect::new(10.0, 45.0, 100.0, 50.0));
    }

    #[test]
    fn fit_centered_pillarboxes_tall_source() {
        let frame = Rect::new(0.0, 0.0, 100.0, 50.0);
        let placed = frame.fit_centered(10.0, 10.0);
        assert_eq!(placed, Rect::new(25.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn fit_centered_ignores_empty_source() {
        let frame = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(frame.fit_centered(0.0, 10.0), frame);
    }
}
