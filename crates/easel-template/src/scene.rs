use easel_engine::coords::{Point, Rect};
use easel_engine::core::Scene;
use easel_engine::paint::Color;
use easel_engine::scene::DrawList;
use easel_engine::time::FrameState;

const BACKGROUND: Color = Color::rgb_u8(64, 64, 64);

const HOT_PINK: Color = Color::rgb_u8(255, 105, 180);
const GREEN: Color = Color::rgb_u8(0, 255, 0);
const YELLOW: Color = Color::rgb_u8(255, 255, 0);
const BLUE: Color = Color::rgb_u8(0, 0, 255);
const RED: Color = Color::rgb_u8(255, 0, 0);

const CENTER_SQUARE: Rect = Rect::new(350, 250, 100, 100);

/// Resting position of the orbiting square, before its per-frame offset.
const ORBIT_ORIGIN: Point = Point::new(375, 275);
const ORBIT_SIZE: i32 = 50;
const ORBIT_RADIUS: f64 = 50.0;
/// Radians advanced per frame.
const ORBIT_STEP: f64 = 0.05;

const CIRCLE_CENTER: Point = Point::new(200, 300);
const CIRCLE_RADIUS: i32 = 50;

const OUTLINE: Rect = Rect::new(550, 250, 100, 100);

const TRIANGLE_CENTER: Point = Point::new(600, 150);
const TRIANGLE_SIZE: i32 = 80;

/// The demo scene: a few static primitives plus one square circling the
/// window center.
#[derive(Debug, Default)]
pub struct TemplateScene;

impl TemplateScene {
    pub fn new() -> Self {
        Self
    }
}

impl Scene for TemplateScene {
    fn background(&self) -> Color {
        BACKGROUND
    }

    fn draw(&mut self, frame: FrameState, list: &mut DrawList) {
        list.set_draw_color(HOT_PINK);
        list.fill_rect(CENTER_SQUARE);

        let (dx, dy) = orbit_offset(frame);
        list.set_draw_color(GREEN);
        list.fill_rect(Rect::new(
            ORBIT_ORIGIN.x + dx,
            ORBIT_ORIGIN.y + dy,
            ORBIT_SIZE,
            ORBIT_SIZE,
        ));

        list.set_draw_color(YELLOW);
        list.fill_circle(CIRCLE_CENTER, CIRCLE_RADIUS);

        list.set_draw_color(BLUE);
        list.draw_rect(OUTLINE);

        list.set_draw_color(Color::WHITE);
        list.draw_line(Point::new(0, 300), Point::new(800, 300));
        list.draw_line(Point::new(400, 0), Point::new(400, 600));

        list.set_draw_color(RED);
        list.draw_closed_polyline(&triangle_vertices(TRIANGLE_CENTER, TRIANGLE_SIZE));
    }
}

/// Offset of the orbiting square at `frame`, rounded to the pixel grid.
fn orbit_offset(frame: FrameState) -> (i32, i32) {
    let phase = frame.phase(ORBIT_STEP);
    let dx = (ORBIT_RADIUS * phase.sin()).round() as i32;
    let dy = (ORBIT_RADIUS * phase.cos()).round() as i32;
    (dx, dy)
}

/// Apex-up isosceles triangle inscribed in a `size`×`size` box centered on `center`.
fn triangle_vertices(center: Point, size: i32) -> [Point; 3] {
    let half = size / 2;
    [
        Point::new(center.x, center.y - half),
        Point::new(center.x - half, center.y + half),
        Point::new(center.x + half, center.y + half),
    ]
}
