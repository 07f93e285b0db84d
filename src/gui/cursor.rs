use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Theme, mouse};

use crate::page::CursorMark;

const RING_RADIUS: f32 = 16.0;
const DOT_RADIUS: f32 = 4.0;

/// Overlay that draws the cursor ring and dot. Ignores every event, so the
/// widgets underneath still receive the pointer.
#[derive(Debug, Clone, Copy)]
pub struct CursorLayer {
    ring: CursorMark,
    dot: CursorMark,
}

impl CursorLayer {
    pub fn new(ring: CursorMark, dot: CursorMark) -> Self {
        Self { ring, dot }
    }
}

impl<Message> canvas::Program<Message> for CursorLayer {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let primary = theme.palette().primary;
        let mut frame = Frame::new(renderer, bounds.size());

        let ring = Path::circle(
            Point::new(self.ring.x, self.ring.y),
            RING_RADIUS * self.ring.scale,
        );
        frame.stroke(
            &ring,
            Stroke::default()
                .with_width(2.0)
                .with_color(Color { a: self.ring.opacity, ..primary }),
        );

        let dot = Path::circle(Point::new(self.dot.x, self.dot.y), DOT_RADIUS * self.dot.scale);
        frame.fill(&dot, Color { a: self.dot.opacity, ..primary });

        vec![frame.into_geometry()]
    }
}
