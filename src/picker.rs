use macroquad::prelude::Vec2;

/// Pan/zoom state of the spritesheet picker viewport.
#[derive(Debug, Clone, Copy)]
pub struct PickerView {
    /// Screen-space offset of the sheet's top-left corner
    pub offset: Vec2,
    /// Magnification factor, kept within [1, 5]
    pub zoom: f32,
}

/// A tile cell identified under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePick {
    /// Sheet grid column
    pub gx: u32,
    /// Sheet grid row
    pub gy: u32,
    /// Linear id: `gy * tiles_per_row + gx`
    pub id: u32,
}

impl PickerView {
    /// A fresh view: no pan, 2x zoom.
    pub fn new() -> Self {
        PickerView {
            offset: Vec2::ZERO,
            zoom: 2.0,
        }
    }

    /// The sheet grid cell under a screen-space cursor, or `None` when the
    /// cursor is outside the sheet.
    pub fn tile_at(
        &self,
        cursor: Vec2,
        tile_size: u32,
        sheet_w: u32,
        sheet_h: u32,
    ) -> Option<TilePick> {
        let cell = tile_size as f32 * self.zoom;
        let gx = ((cursor.x - self.offset.x) / cell).floor() as i64;
        let gy = ((cursor.y - self.offset.y) / cell).floor() as i64;

        let cols = (sheet_w / tile_size) as i64;
        let rows = (sheet_h / tile_size) as i64;
        if gx < 0 || gy < 0 || gx >= cols || gy >= rows {
            return None;
        }

        Some(TilePick {
            gx: gx as u32,
            gy: gy as u32,
            id: (gy * cols + gx) as u32,
        })
    }

    /// Wheel zoom, clamped so the sheet stays legible.
    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta).clamp(1.0, 5.0);
    }

    /// Drag pan.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.offset += delta;
    }
}

impl Default for PickerView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::vec2;

    // 8 x 4 tiles of 64px
    const SHEET_W: u32 = 512;
    const SHEET_H: u32 = 256;

    #[test]
    fn linear_id_is_row_major() {
        let view = PickerView {
            offset: Vec2::ZERO,
            zoom: 1.0,
        };
        let pick = view.tile_at(vec2(130.0, 70.0), 64, SHEET_W, SHEET_H).unwrap();
        assert_eq!((pick.gx, pick.gy), (2, 1));
        assert_eq!(pick.id, 10);
    }

    #[test]
    fn pan_and_zoom_are_undone_before_the_grid_lookup() {
        let view = PickerView {
            offset: vec2(-64.0, 32.0),
            zoom: 2.0,
        };
        // screen (192, 160) -> view (256, 128) -> cell (2, 1) at 128px cells
        let pick = view.tile_at(vec2(192.0, 160.0), 64, SHEET_W, SHEET_H).unwrap();
        assert_eq!((pick.gx, pick.gy), (2, 1));
    }

    #[test]
    fn cursor_off_the_sheet_picks_nothing() {
        let view = PickerView {
            offset: Vec2::ZERO,
            zoom: 1.0,
        };
        assert_eq!(view.tile_at(vec2(-4.0, 10.0), 64, SHEET_W, SHEET_H), None);
        assert_eq!(view.tile_at(vec2(512.0, 10.0), 64, SHEET_W, SHEET_H), None);
        assert_eq!(view.tile_at(vec2(10.0, 300.0), 64, SHEET_W, SHEET_H), None);
    }

    #[test]
    fn zoom_stays_within_its_bounds() {
        let mut view = PickerView::new();
        for _ in 0..100 {
            view.zoom_by(0.1);
        }
        assert_eq!(view.zoom, 5.0);
        for _ in 0..100 {
            view.zoom_by(-0.1);
        }
        assert_eq!(view.zoom, 1.0);
    }
}
