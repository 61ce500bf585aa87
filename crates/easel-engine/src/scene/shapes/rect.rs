use crate::coords::Rect;
use crate::scene::{DrawCmd, DrawList};

impl DrawList {
    /// Records a filled rectangle.
    #[inline]
    pub fn fill_rect(&mut self, rect: Rect) {
        self.push(DrawCmd::FillRect(rect));
    }

    /// Records a one-pixel rectangle outline.
    #[inline]
    pub fn draw_rect(&mut self, rect: Rect) {
        self.push(DrawCmd::StrokeRect(rect));
    }
}
