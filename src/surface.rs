//! Drawing surface abstraction.
//!
//! The stadium painter and the window chrome draw through the [`Surface`]
//! trait rather than a vello `Scene` directly. The production implementation,
//! [`SceneSurface`], encodes into a `Scene` under a fixed transform (the
//! letterboxed canvas fit, or identity for chrome). Tests use a recording
//! implementation that captures every primitive with its bounding box.

use vello::Scene;
use vello::kurbo::{Affine, Point, Shape, Stroke};
use vello::peniko::{Brush, Color, Fill, Mix};

use crate::text::Fonts;

/// Horizontal anchoring of a text run relative to its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// How a text run is drawn. `origin.y` is always the baseline.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub size: f64,
    pub color: Color,
    pub align: Align,
    pub mono: bool,
}

impl TextStyle {
    pub fn new(size: f64, color: Color) -> Self {
        Self {
            size,
            color,
            align: Align::Left,
            mono: false,
        }
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    pub fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    pub fn mono(mut self) -> Self {
        self.mono = true;
        self
    }
}

/// Something the renderer can paint vector primitives onto.
pub trait Surface {
    /// Fill `shape` with a solid color or gradient.
    fn fill(&mut self, brush: impl Into<Brush>, shape: &impl Shape);

    /// Stroke the outline of `shape` with a line of `width` logical pixels.
    fn stroke(&mut self, width: f64, brush: impl Into<Brush>, shape: &impl Shape);

    /// Draw a single line of text.
    fn text(&mut self, origin: Point, text: &str, style: TextStyle);

    /// Clip everything drawn until the matching [`Surface::pop_clip`] to `shape`.
    fn push_clip(&mut self, shape: &impl Shape);

    fn pop_clip(&mut self);
}

/// A [`Surface`] that encodes into a vello [`Scene`].
pub struct SceneSurface<'a> {
    scene: &'a mut Scene,
    fonts: &'a Fonts,
    transform: Affine,
}

impl<'a> SceneSurface<'a> {
    pub fn new(scene: &'a mut Scene, fonts: &'a Fonts) -> Self {
        Self {
            scene,
            fonts,
            transform: Affine::IDENTITY,
        }
    }

    /// Apply `transform` to everything drawn through this surface.
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }
}

impl Surface for SceneSurface<'_> {
    fn fill(&mut self, brush: impl Into<Brush>, shape: &impl Shape) {
        let brush = brush.into();
        self.scene
            .fill(Fill::NonZero, self.transform, &brush, None, shape);
    }

    fn stroke(&mut self, width: f64, brush: impl Into<Brush>, shape: &impl Shape) {
        let brush = brush.into();
        self.scene
            .stroke(&Stroke::new(width), self.transform, &brush, None, shape);
    }

    fn text(&mut self, origin: Point, text: &str, style: TextStyle) {
        self.fonts
            .draw(self.scene, self.transform, origin, text, style);
    }

    fn push_clip(&mut self, shape: &impl Shape) {
        self.scene
            .push_layer(Fill::NonZero, Mix::Normal, 1.0, self.transform, shape);
    }

    fn pop_clip(&mut self) {
        self.scene.pop_layer();
    }
}
