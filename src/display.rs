//! Rendering layer - all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state. No game logic is performed; this module only translates
//! state into terminal commands. The 800x600 logical playfield is
//! scaled to whatever cell grid the terminal offers.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::sim::{GameState, SessionPhase};

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::Yellow;
const C_PLAYER: Color = Color::Cyan;
const C_ENEMY: Color = Color::Green;
const C_BULLET: Color = Color::Yellow;
const C_BOMB: Color = Color::Red;
const C_HAZARD: Color = Color::DarkRed;
const C_HINT: Color = Color::DarkGrey;

/// Scales playfield coordinates to terminal cells
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Playfield point -> (col, row); row 0 is the HUD, row 1 the top border
    fn cell(&self, state: &GameState, x: f32, y: f32) -> (u16, u16) {
        let inner_w = self.cols.saturating_sub(2).max(1) as f32;
        let inner_h = self.rows.saturating_sub(3).max(1) as f32;
        let col = 1.0 + x / state.tuning.playfield_width * (inner_w - 1.0);
        let row = 2.0 + y / state.tuning.playfield_height * (inner_h - 1.0);
        (col as u16, row as u16)
    }
}

/// Render one complete frame
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    high_score: f64,
    view: Viewport,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view)?;
    draw_hazard_zone(out, state, view)?;
    draw_hud(out, state, high_score, view)?;

    out.queue(style::SetForegroundColor(C_BOMB))?;
    for bomb in &state.bombs {
        if bomb.is_visible(state.elapsed_ms) {
            let (c, r) = view.cell(state, bomb.pos.x, bomb.pos.y);
            out.queue(cursor::MoveTo(c, r))?;
            out.queue(Print("@"))?;
        }
    }

    out.queue(style::SetForegroundColor(C_ENEMY))?;
    for enemy in &state.enemies {
        let (c, r) = view.cell(state, enemy.pos.x, enemy.pos.y);
        out.queue(cursor::MoveTo(c, r))?;
        out.queue(Print("o"))?;
    }

    out.queue(style::SetForegroundColor(C_BULLET))?;
    for bullet in &state.bullets {
        let (c, r) = view.cell(state, bullet.pos.x, bullet.pos.y);
        out.queue(cursor::MoveTo(c, r))?;
        out.queue(Print("."))?;
    }

    draw_player(out, state, view)?;

    if state.phase == SessionPhase::Over {
        draw_game_over(out, state, high_score, view)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn draw_border<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("+{}+", "-".repeat(w.saturating_sub(2)))))?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.queue(Print(format!("+{}+", "-".repeat(w.saturating_sub(2)))))?;

    for row in 2..view.rows.saturating_sub(1) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("|"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("|"))?;
    }
    Ok(())
}

/// The hazard zone has no collision effect but is always marked
fn draw_hazard_zone<W: Write>(out: &mut W, state: &GameState, view: Viewport) -> std::io::Result<()> {
    let zone = state.tuning.hazard_zone;
    let (_, top) = view.cell(state, zone.x, zone.y);
    out.queue(style::SetForegroundColor(C_HAZARD))?;
    out.queue(cursor::MoveTo(1, top))?;
    out.queue(Print("~".repeat(view.cols.saturating_sub(2) as usize)))?;
    Ok(())
}

fn draw_hud<W: Write>(
    out: &mut W,
    state: &GameState,
    high_score: f64,
    view: Viewport,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(Print(format!(
        "Score: {}s  Best: {}s  Ammo: {}",
        state.score.floor(),
        high_score.floor(),
        state.ammo
    )))?;

    let hint = "rotate: arrows | fire: space | quit: q";
    let col = view.cols.saturating_sub(hint.len() as u16 + 1);
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(cursor::MoveTo(col, 0))?;
    out.queue(Print(hint))?;
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, state: &GameState, view: Viewport) -> std::io::Result<()> {
    let p = &state.player;
    let (c, r) = view.cell(state, p.pos.x, p.pos.y);

    // Pick a glyph for the nearest heading octant
    let octant = ((p.angle / std::f32::consts::FRAC_PI_4).round() as i32).rem_euclid(8);
    let glyph = match octant {
        0 => ">",
        1 => "\\",
        2 => "v",
        3 => "/",
        4 => "<",
        5 => "\\",
        6 => "^",
        _ => "/",
    };

    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(c, r))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    high_score: f64,
    view: Viewport,
) -> std::io::Result<()> {
    let lines = [
        "GAME OVER".to_string(),
        format!("Score: {}s", state.score.floor()),
        format!("Best: {}s", high_score.floor()),
        "r: restart | q: quit".to_string(),
    ];

    let mid_row = view.rows / 2;
    out.queue(style::SetForegroundColor(Color::White))?;
    for (i, line) in lines.iter().enumerate() {
        let col = (view.cols.saturating_sub(line.len() as u16)) / 2;
        out.queue(cursor::MoveTo(col, mid_row.saturating_sub(2) + i as u16))?;
        out.queue(Print(line))?;
    }
    Ok(())
}
