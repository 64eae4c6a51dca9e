//! GameView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::SessionSnapshot;
use crate::term::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Cell, GRID_HEIGHT, GRID_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

// Arena palette
const ARENA_BG: Rgb = Rgb::new(50, 153, 213);
const SNAKE_BG: Rgb = Rgb::new(0, 0, 0);
const FOOD_BG: Rgb = Rgb::new(0, 255, 0);
const SPECIAL_BG: Rgb = Rgb::new(255, 255, 0);
const POISON_BG: Rgb = Rgb::new(213, 50, 80);
const POWER_UP_BG: Rgb = Rgb::new(255, 255, 255);
const OBSTACLE_BG: Rgb = Rgb::new(160, 32, 240);
const TEXT_FG: Rgb = Rgb::new(213, 50, 80);

/// A lightweight terminal renderer for the snake arena.
pub struct GameView {
    /// Arena cell width in terminal columns.
    cell_w: u16,
    /// Arena cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the snapshot (plus the persisted best score) into a framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, best: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let arena_w = GRID_WIDTH as u16 * self.cell_w;
        let arena_h = GRID_HEIGHT as u16 * self.cell_h;
        let frame_w = arena_w + 2;
        let frame_h = arena_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let arena = Style {
            bg: ARENA_BG,
            ..Style::default()
        };
        let border = Style {
            fg: Rgb::new(200, 200, 200),
            ..Style::default()
        };

        fb.fill_rect(start_x + 1, start_y + 1, arena_w, arena_h, ' ', arena);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Entities first, actor on top
        for &obstacle in &snap.obstacles {
            self.plot_cell(&mut fb, start_x, start_y, obstacle, OBSTACLE_BG);
        }
        self.plot_cell(&mut fb, start_x, start_y, snap.regular_food, FOOD_BG);
        if let Some(cell) = snap.special_food {
            self.plot_cell(&mut fb, start_x, start_y, cell, SPECIAL_BG);
        }
        if let Some(cell) = snap.poison_food {
            self.plot_cell(&mut fb, start_x, start_y, cell, POISON_BG);
        }
        if let Some(cell) = snap.power_up {
            self.plot_cell(&mut fb, start_x, start_y, cell, POWER_UP_BG);
        }
        for &segment in &snap.body {
            self.plot_cell(&mut fb, start_x, start_y, segment, SNAKE_BG);
        }

        self.draw_status(&mut fb, snap, best, start_x, start_y + frame_h);

        if snap.game_over {
            self.draw_game_over(&mut fb, start_x, start_y, frame_w, frame_h);
        }

        fb
    }

    /// Fill one arena cell. Cells outside the grid (a head that just left
    /// bounds) are clipped.
    fn plot_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, cell: Cell, bg: Rgb) {
        if cell.x < 0 || cell.x >= GRID_WIDTH || cell.y < 0 || cell.y >= GRID_HEIGHT {
            return;
        }
        let x = start_x + 1 + cell.x as u16 * self.cell_w;
        let y = start_y + 1 + cell.y as u16 * self.cell_h;
        let style = Style {
            bg,
            ..Style::default()
        };
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: Style,
    ) {
        for dx in 0..w {
            fb.set(x + dx, y, style.glyph('─'));
            fb.set(x + dx, y + h - 1, style.glyph('─'));
        }
        for dy in 0..h {
            fb.set(x, y + dy, style.glyph('│'));
            fb.set(x + w - 1, y + dy, style.glyph('│'));
        }
        fb.set(x, y, style.glyph('┌'));
        fb.set(x + w - 1, y, style.glyph('┐'));
        fb.set(x, y + h - 1, style.glyph('└'));
        fb.set(x + w - 1, y + h - 1, style.glyph('┘'));
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        best: u32,
        x: u16,
        y: u16,
    ) {
        let style = Style {
            fg: TEXT_FG,
            bold: true,
            ..Style::default()
        };
        let mut line = format!("Score: {}  High: {}", snap.score, best);
        if let Some(effect) = snap.effect {
            let filled = (snap.effect_remaining * 10.0).ceil() as usize;
            line.push_str(&format!(
                "  {} [{}{}]",
                effect.as_str(),
                "#".repeat(filled.min(10)),
                "-".repeat(10usize.saturating_sub(filled))
            ));
        }
        fb.put_str(x, y, &line, style);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let msg = "You Lost! Press C-Play Again or Q-Quit";
        let style = Style {
            fg: TEXT_FG,
            bg: ARENA_BG,
            bold: true,
        };
        let mx = x + w.saturating_sub(msg.len() as u16) / 2;
        let my = y + h / 2;
        fb.put_str(mx, my, msg, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PowerUp;

    // frame is 122x42 centered in a 130x46 viewport
    const START_X: u16 = 4;
    const START_Y: u16 = 2;

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot {
            body: vec![Cell::new(29, 20), Cell::new(30, 20)],
            head: Cell::new(30, 20),
            regular_food: Cell::new(5, 5),
            obstacles: vec![Cell::new(7, 7)],
            score: 1,
            speed: 15,
            ..SessionSnapshot::default()
        }
    }

    fn render(snap: &SessionSnapshot) -> FrameBuffer {
        GameView::default().render(snap, 9, Viewport::new(130, 46))
    }

    fn row_text(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width())
            .map(|x| fb.get(x, y).map(|g| g.ch).unwrap_or(' '))
            .collect()
    }

    fn bg_at(fb: &FrameBuffer, cell: Cell) -> Rgb {
        let x = START_X + 1 + cell.x as u16 * 2;
        let y = START_Y + 1 + cell.y as u16;
        fb.get(x, y).unwrap().style.bg
    }

    #[test]
    fn test_render_draws_status_line() {
        let fb = render(&snapshot());
        let found = (0..fb.height())
            .map(|y| row_text(&fb, y))
            .any(|row| row.contains("Score: 1  High: 9"));
        assert!(found);
    }

    #[test]
    fn test_render_colors_every_entity() {
        let mut snap = snapshot();
        snap.special_food = Some(Cell::new(10, 10));
        snap.poison_food = Some(Cell::new(12, 10));
        snap.power_up = Some(Cell::new(14, 10));
        let fb = render(&snap);

        assert_eq!(bg_at(&fb, snap.head), SNAKE_BG);
        assert_eq!(bg_at(&fb, Cell::new(29, 20)), SNAKE_BG);
        assert_eq!(bg_at(&fb, snap.regular_food), FOOD_BG);
        assert_eq!(bg_at(&fb, Cell::new(10, 10)), SPECIAL_BG);
        assert_eq!(bg_at(&fb, Cell::new(12, 10)), POISON_BG);
        assert_eq!(bg_at(&fb, Cell::new(14, 10)), POWER_UP_BG);
        assert_eq!(bg_at(&fb, Cell::new(7, 7)), OBSTACLE_BG);
        // An untouched cell shows the arena background
        assert_eq!(bg_at(&fb, Cell::new(40, 30)), ARENA_BG);
    }

    #[test]
    fn test_actor_draws_over_food() {
        let mut snap = snapshot();
        snap.regular_food = snap.head;
        let fb = render(&snap);
        assert_eq!(bg_at(&fb, snap.head), SNAKE_BG);
    }

    #[test]
    fn test_out_of_bounds_head_is_clipped() {
        let mut snap = snapshot();
        snap.head = Cell::new(GRID_WIDTH, 20);
        snap.body = vec![Cell::new(GRID_WIDTH - 1, 20), snap.head];
        // Must not panic or write outside the frame
        let fb = render(&snap);
        assert_eq!(fb.width(), 130);
    }

    #[test]
    fn test_game_over_overlay_present_only_after_death() {
        let mut snap = snapshot();
        snap.game_over = true;
        let fb = render(&snap);
        let found = (0..fb.height()).any(|y| row_text(&fb, y).contains("You Lost!"));
        assert!(found);

        let fb = render(&snapshot());
        let found = (0..fb.height()).any(|y| row_text(&fb, y).contains("You Lost!"));
        assert!(!found);
    }

    #[test]
    fn test_effect_bar_shown_while_active() {
        let mut snap = snapshot();
        snap.effect = Some(PowerUp::Slow);
        snap.effect_remaining = 0.5;
        let fb = render(&snap);
        let found = (0..fb.height()).any(|y| row_text(&fb, y).contains("slow [#####-----]"));
        assert!(found);
    }

    #[test]
    fn test_render_survives_tiny_viewport() {
        let fb = GameView::default().render(&snapshot(), 0, Viewport::new(10, 5));
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.height(), 5);
    }
}
