//! Scene description for every screen
//!
//! Menu text is centred horizontally using its rendered width; glyphs are
//! `GLYPH_ADVANCE` units wide at scale 1.

use glam::Vec2;

use super::{RenderService, colors};
use crate::sim::{GameState, Screen};

/// Horizontal advance of one glyph at scale 1
pub const GLYPH_ADVANCE: f32 = 24.0;

/// (text, vertical offset from arena centre, scale)
type Line = (&'static str, f32, f32);

const START_LINES: &[Line] = &[
    ("Welcome!", 150.0, 1.0),
    ("In this game, you (the blue box) must go around and", 100.0, 0.55),
    ("collect supplies (purple boxes) to build your ship", 50.0, 0.55),
    ("and fly away! You can control your box using the", 0.0, 0.55),
    ("arrow keys. Be careful collecting though, there are", -50.0, 0.55),
    ("enemies (red boxes) around that are trying to stop you!", -100.0, 0.55),
    ("Press c to continue", -150.0, 0.8),
];

const INFO_LINES: &[Line] = &[
    ("-= Lives =-", 150.0, 1.0),
    ("In this game you will start in a safe zone where no", 100.0, 0.55),
    ("enemies will spawn or move to. However, if you are", 50.0, 0.55),
    ("outside the zone and you hit an enemy, you will lose a", 0.0, 0.55),
    ("life. Your lives will be shown in how charged the battery", -50.0, 0.55),
    ("in the top left is, and its game over when you run out!", -100.0, 0.55),
    ("Press s to start!", -150.0, 0.8),
];

const SELECT_LINES: &[Line] = &[
    ("-= Press letter for difficulty =-", 100.0, 0.85),
    ("E - Easy", 50.0, 0.7),
    ("M - Medium", 0.0, 0.7),
    ("H - Hard", -50.0, 0.7),
    ("D - Death", -100.0, 0.7),
];

const WIN_LINES: &[Line] = &[
    ("You win!", 25.0, 1.0),
    ("Press R to play again", -25.0, 0.75),
];

const LOSE_LINES: &[Line] = &[
    ("You LOSE!", 25.0, 1.0),
    ("Press R to play again", -25.0, 0.75),
];

/// Width of `text` when drawn at `scale`
pub fn text_width(text: &str, scale: f32) -> f32 {
    GLYPH_ADVANCE * scale * text.chars().count() as f32
}

/// Left x that centres `text` in an arena `arena_width` wide
pub fn centered_x(text: &str, scale: f32, arena_width: f32) -> f32 {
    arena_width / 2.0 - text_width(text, scale) / 2.0
}

fn draw_lines<R: RenderService + ?Sized>(out: &mut R, lines: &[Line], arena: Vec2) {
    let centre_y = arena.y / 2.0;
    for &(text, dy, scale) in lines {
        let pos = Vec2::new(centered_x(text, scale, arena.x), centre_y + dy);
        out.draw_text(text, pos, scale, colors::TEXT);
    }
}

/// Emit draw calls for the current screen
pub fn draw_scene<R: RenderService + ?Sized>(state: &GameState, out: &mut R) {
    let arena = state.config.arena;
    match state.screen {
        Screen::Start => draw_lines(out, START_LINES, arena),
        Screen::Info => draw_lines(out, INFO_LINES, arena),
        Screen::Select => draw_lines(out, SELECT_LINES, arena),
        Screen::Over => draw_lines(out, WIN_LINES, arena),
        Screen::Lost => draw_lines(out, LOSE_LINES, arena),
        Screen::Playing(_) => draw_round(state, out),
    }
}

fn draw_round<R: RenderService + ?Sized>(state: &GameState, out: &mut R) {
    let arena = state.config.arena;

    for supply in state.supplies.iter().filter(|s| s.active) {
        out.draw_rect(supply.body.pos, supply.body.size(), supply.body.color());
    }
    for enemy in &state.enemies {
        out.draw_rect(enemy.body.pos, enemy.body.size(), enemy.body.color());
    }

    // Safe home strip, where the user spawns
    let zone = &state.config.safe_zone;
    out.draw_rect(
        (zone.min + zone.max) / 2.0,
        zone.max - zone.min,
        colors::HOME_STRIP,
    );

    let user = &state.user;
    out.draw_rect(user.pos, user.size(), user.color());

    // Battery: body, terminal, then the remaining charge cells top to bottom
    out.draw_rect(
        Vec2::new(30.0, arena.y - 90.0),
        Vec2::new(50.0, 130.0),
        colors::BATTERY,
    );
    out.draw_rect(
        Vec2::new(30.0, arena.y - 19.0),
        Vec2::new(25.0, 12.0),
        colors::BATTERY,
    );
    for (i, cell) in state.charges().iter().enumerate() {
        if !cell.visible {
            continue;
        }
        let color = if cell.critical {
            colors::CHARGE_CRITICAL
        } else {
            colors::CHARGE
        };
        out.draw_rect(
            Vec2::new(30.0, arena.y - 50.0 - 40.0 * i as f32),
            Vec2::splat(40.0),
            color,
        );
    }

    // Label on top of the user
    out.draw_text("YOU", user.pos + Vec2::new(-7.0, -1.0), 0.2, colors::TEXT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::renderer::{DrawCall, DrawRecorder};
    use crate::sim::{Supply, Tier};

    #[test]
    fn test_centering_uses_rendered_width() {
        // "Welcome!" at scale 1: 8 glyphs * 24 = 192 wide
        assert_eq!(text_width("Welcome!", 1.0), 192.0);
        assert_eq!(centered_x("Welcome!", 1.0, 800.0), 304.0);
        let x = centered_x("E - Easy", 0.7, 800.0);
        assert!((x + text_width("E - Easy", 0.7) / 2.0 - 400.0).abs() < 1e-3);
    }

    #[test]
    fn test_menu_screens_draw_text_only() {
        let mut state = GameState::new(1, GameConfig::default());
        for (screen, first) in [
            (Screen::Start, "Welcome!"),
            (Screen::Info, "-= Lives =-"),
            (Screen::Select, "-= Press letter for difficulty =-"),
            (Screen::Over, "You win!"),
            (Screen::Lost, "You LOSE!"),
        ] {
            state.screen = screen;
            let mut out = DrawRecorder::new();
            draw_scene(&state, &mut out);
            assert_eq!(out.texts().next(), Some(first));
            assert_eq!(out.rects().count(), 0);
        }
    }

    #[test]
    fn test_round_skips_collected_supplies() {
        let mut state = GameState::new(1, GameConfig::default());
        state.screen = Screen::Playing(Tier::Easy);
        state.supplies = vec![
            Supply::new(Vec2::new(100.0, 100.0)),
            Supply::new(Vec2::new(200.0, 100.0)),
        ];
        state.supplies[1].active = false;

        let mut out = DrawRecorder::new();
        draw_scene(&state, &mut out);
        // 1 supply + strip + user + battery body + terminal + 3 cells
        assert_eq!(out.rects().count(), 8);
        assert_eq!(out.texts().collect::<Vec<_>>(), vec!["YOU"]);
        assert!(out.calls().contains(&DrawCall::Rect {
            pos: Vec2::new(30.0, 300.0),
            size: Vec2::new(60.0, 600.0),
            color: colors::HOME_STRIP,
        }));
    }

    #[test]
    fn test_battery_reflects_lives() {
        let mut state = GameState::new(1, GameConfig::default());
        state.screen = Screen::Playing(Tier::Easy);
        state.lives = 1;

        let mut out = DrawRecorder::new();
        draw_scene(&state, &mut out);
        let cells: Vec<_> = out
            .calls()
            .iter()
            .filter_map(|c| match c {
                DrawCall::Rect { size, color, .. } if *size == Vec2::splat(40.0) => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(cells, vec![colors::CHARGE_CRITICAL]);
    }
}
