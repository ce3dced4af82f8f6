//! Turns simulation state into draw requests

use glam::Vec2;

use crate::{Renderer, Simulation, TextStyle};

const SCORE_TOP: f32 = 20.0;
const TITLE_LINE_HEIGHT: f32 = 60.0;
const BODY_LINE_HEIGHT: f32 = 28.0;
const LINE_PAD: f32 = 16.0;

/// Draw the playing field: paddles, ball, center line and scores
pub fn draw_frame<R: Renderer + ?Sized>(sim: &Simulation, renderer: &mut R) {
    let field = sim.field();
    renderer.clear();

    for paddle in [sim.player(), sim.opponent()].into_iter().flatten() {
        renderer.fill_rect(paddle.bounding_box());
    }
    if let Some(ball) = sim.ball() {
        renderer.fill_ellipse(ball.bounding_box());
    }

    let mid_x = field.width / 2.0;
    renderer.line(Vec2::new(mid_x, 0.0), Vec2::new(mid_x, field.height));

    let state = sim.match_state();
    renderer.text(
        &state.player_score.to_string(),
        Vec2::new(field.width / 4.0, SCORE_TOP),
        TextStyle::Score,
    );
    renderer.text(
        &state.opponent_score.to_string(),
        Vec2::new(field.width * 3.0 / 4.0, SCORE_TOP),
        TextStyle::Score,
    );
}

/// Clear the screen and stack `lines` around the field center, first as title
pub fn draw_center_text<R: Renderer + ?Sized>(sim: &Simulation, renderer: &mut R, lines: &[&str]) {
    let field = sim.field();
    renderer.clear();

    let mut y = field.height / 2.0;
    for (i, line) in lines.iter().enumerate() {
        let (style, height, pad) = if i == 0 {
            (TextStyle::Title, TITLE_LINE_HEIGHT, LINE_PAD)
        } else {
            (TextStyle::Body, BODY_LINE_HEIGHT, LINE_PAD / 2.0)
        };
        renderer.text(line, Vec2::new(field.width / 2.0, y), style);
        y += height + pad;
    }
}
