//! Canvas renderer drawing the field with braille dots

use game_core::{Aabb, Field, FrontendError, Renderer, TextStyle};
use glam::Vec2;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine};
use ratatui::widgets::Block;
use ratatui::{DefaultTerminal, Frame};

/// Spacing between the scanlines used to fill shapes, in field units
const FILL_STEP: f32 = 1.5;

const FOREGROUND: Color = Color::White;

/// One queued draw request, in field coordinates (Y down)
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(Aabb),
    Ellipse(Aabb),
    Line(Vec2, Vec2),
    Text(String, Vec2, TextStyle),
}

/// Queues draw requests and paints them on `present`
pub struct TuiRenderer {
    terminal: DefaultTerminal,
    field: Field,
    shapes: Vec<Shape>,
}

impl TuiRenderer {
    pub fn new(terminal: DefaultTerminal, field: Field) -> Self {
        Self {
            terminal,
            field,
            shapes: Vec::new(),
        }
    }
}

impl Renderer for TuiRenderer {
    fn clear(&mut self) {
        self.shapes.clear();
    }

    fn fill_rect(&mut self, rect: Aabb) {
        self.shapes.push(Shape::Rect(rect));
    }

    fn fill_ellipse(&mut self, rect: Aabb) {
        self.shapes.push(Shape::Ellipse(rect));
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        self.shapes.push(Shape::Line(from, to));
    }

    fn text(&mut self, text: &str, at: Vec2, style: TextStyle) {
        self.shapes.push(Shape::Text(text.to_string(), at, style));
    }

    fn present(&mut self) -> Result<(), FrontendError> {
        let field = self.field;
        let shapes = &self.shapes;
        self.terminal.draw(|frame| paint(frame, field, shapes))?;
        Ok(())
    }
}

fn paint(frame: &mut Frame, field: Field, shapes: &[Shape]) {
    let area = frame.area();
    let cell_width = cell_width(field, area);

    let canvas = Canvas::default()
        .block(Block::bordered().title(" pong "))
        .marker(Marker::Braille)
        .x_bounds([0.0, field.width as f64])
        .y_bounds([0.0, field.height as f64])
        .paint(|ctx| {
            for shape in shapes {
                draw_shape(ctx, field, cell_width, shape);
            }
        });
    frame.render_widget(canvas, area);
}

/// Field units covered by one terminal cell horizontally
fn cell_width(field: Field, area: Rect) -> f64 {
    let inner = area.width.saturating_sub(2).max(1);
    field.width as f64 / inner as f64
}

fn draw_shape(ctx: &mut Context, field: Field, cell_width: f64, shape: &Shape) {
    match shape {
        Shape::Rect(rect) => {
            for (y, x1, x2) in rect_rows(rect) {
                draw_segment(ctx, field, Vec2::new(x1, y), Vec2::new(x2, y));
            }
        }
        Shape::Ellipse(rect) => {
            for (y, x1, x2) in ellipse_rows(rect) {
                draw_segment(ctx, field, Vec2::new(x1, y), Vec2::new(x2, y));
            }
        }
        Shape::Line(from, to) => draw_segment(ctx, field, *from, *to),
        Shape::Text(text, at, style) => {
            let style = match style {
                TextStyle::Title => Style::default().fg(FOREGROUND).add_modifier(Modifier::BOLD),
                TextStyle::Score | TextStyle::Body => Style::default().fg(FOREGROUND),
            };
            let half = text.chars().count() as f64 * cell_width / 2.0;
            ctx.print(
                at.x as f64 - half,
                flip_y(field, at.y),
                Line::styled(text.clone(), style),
            );
        }
    }
}

fn draw_segment(ctx: &mut Context, field: Field, from: Vec2, to: Vec2) {
    ctx.draw(&CanvasLine {
        x1: from.x as f64,
        y1: flip_y(field, from.y),
        x2: to.x as f64,
        y2: flip_y(field, to.y),
        color: FOREGROUND,
    });
}

/// The canvas puts its origin bottom-left; the field's is top-left
fn flip_y(field: Field, y: f32) -> f64 {
    (field.height - y) as f64
}

/// Horizontal scanlines `(y, x_start, x_end)` covering a rectangle
pub fn rect_rows(rect: &Aabb) -> Vec<(f32, f32, f32)> {
    scan_ys(rect)
        .into_iter()
        .map(|y| (y, rect.left(), rect.right()))
        .collect()
}

/// Horizontal scanlines covering the ellipse inscribed in `rect`
pub fn ellipse_rows(rect: &Aabb) -> Vec<(f32, f32, f32)> {
    let center = rect.center();
    let radius = rect.size() * 0.5;
    if radius.x <= 0.0 || radius.y <= 0.0 {
        return Vec::new();
    }

    scan_ys(rect)
        .into_iter()
        .map(|y| {
            let t = ((y - center.y) / radius.y).clamp(-1.0, 1.0);
            let half = radius.x * (1.0 - t * t).sqrt();
            (y, center.x - half, center.x + half)
        })
        .collect()
}

fn scan_ys(rect: &Aabb) -> Vec<f32> {
    let mut ys = Vec::new();
    let mut y = rect.top();
    while y < rect.bottom() {
        ys.push(y);
        y += FILL_STEP;
    }
    ys.push(rect.bottom());
    ys
}
