//! Text rendering: system fonts through skrifa glyph metrics, with a 5x7
//! bitmap fallback when no usable font file is installed.

use vello::kurbo::{Affine, Point, Rect};
use vello::peniko::{Fill, FontData};
use vello::{Glyph, Scene};

use crate::surface::{Align, TextStyle};

/// Fonts loaded once at startup.
#[derive(Default)]
pub struct Fonts {
    /// Proportional font for labels and titles.
    pub readable: Option<FontData>,
    /// Monospace font for the source listing.
    pub mono: Option<FontData>,
}

impl Fonts {
    pub fn load() -> Self {
        Self {
            readable: load_system_font(&[
                "Helvetica",
                "Arial",
                "DejaVuSans",
                "LiberationSans-Regular",
            ]),
            mono: load_system_font(&[
                "Menlo",
                "Monaco",
                "DejaVuSansMono",
                "LiberationMono-Regular",
            ]),
        }
    }

    fn pick(&self, mono: bool) -> Option<&FontData> {
        if mono {
            self.mono.as_ref().or(self.readable.as_ref())
        } else {
            self.readable.as_ref().or(self.mono.as_ref())
        }
    }

    /// Draw one line of text with its baseline at `origin.y`.
    pub fn draw(
        &self,
        scene: &mut Scene,
        transform: Affine,
        origin: Point,
        text: &str,
        style: TextStyle,
    ) {
        if text.is_empty() {
            return;
        }
        let shaped = self
            .pick(style.mono)
            .and_then(|font| shape_line(font, text, style.size).map(|s| (font, s)));

        match shaped {
            Some((font, (glyphs, width))) => {
                let x = origin.x - align_offset(style.align, width);
                scene
                    .draw_glyphs(font)
                    .font_size(style.size as f32)
                    .transform(transform * Affine::translate((x, origin.y)))
                    .brush(&style.color)
                    .draw(Fill::NonZero, glyphs.into_iter());
            }
            None => {
                let x = origin.x - align_offset(style.align, bitmap_width(text, style.size));
                draw_bitmap_text(scene, transform, Point::new(x, origin.y), text, style);
            }
        }
    }
}

fn align_offset(align: Align, width: f64) -> f64 {
    match align {
        Align::Left => 0.0,
        Align::Center => width / 2.0,
        Align::Right => width,
    }
}

/// Lay out a single line starting at x = 0 on the baseline.
/// Returns the glyphs and the total advance, or `None` if the font is unreadable.
fn shape_line(font: &FontData, text: &str, size: f64) -> Option<(Vec<Glyph>, f64)> {
    let font_ref = skrifa::FontRef::from_index(font.data.as_ref(), font.index).ok()?;

    use skrifa::MetadataProvider;
    let charmap = font_ref.charmap();
    let metrics = font_ref.glyph_metrics(
        skrifa::instance::Size::new(size as f32),
        skrifa::instance::LocationRef::default(),
    );

    let mut glyphs = Vec::with_capacity(text.len());
    let mut x = 0.0_f64;
    for ch in text.chars() {
        let gid = charmap.map(ch).unwrap_or_default();
        glyphs.push(Glyph {
            id: gid.to_u32(),
            x: x as f32,
            y: 0.0,
        });
        x += metrics.advance_width(gid).unwrap_or(size as f32 * 0.5) as f64;
    }
    Some((glyphs, x))
}

// --- Font loading ---

/// Try each font name in the common macOS and Linux font directories.
fn load_system_font(font_names: &[&str]) -> Option<FontData> {
    let dirs = [
        "/System/Library/Fonts/",
        "/System/Library/Fonts/Supplemental/",
        "/Library/Fonts/",
        "/usr/share/fonts/truetype/dejavu/",
        "/usr/share/fonts/truetype/liberation/",
        "/usr/share/fonts/truetype/",
        "/usr/share/fonts/TTF/",
    ];
    let extensions = ["ttf", "otf", "ttc"];

    for name in font_names {
        for dir in &dirs {
            for ext in &extensions {
                let path = format!("{dir}{name}.{ext}");
                if let Ok(data) = std::fs::read(&path) {
                    tracing::debug!(target: "text", %path, "loaded font");
                    return Some(FontData::new(data.into(), 0));
                }
            }
        }
    }
    None
}

// --- Bitmap fallback ---

// Cell proportions relative to the requested size.
const CELL_W: f64 = 0.5;
const CELL_H: f64 = 0.7;
const ADVANCE: f64 = 0.6;

fn bitmap_width(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * size * ADVANCE
}

fn draw_bitmap_text(
    scene: &mut Scene,
    transform: Affine,
    origin: Point,
    text: &str,
    style: TextStyle,
) {
    let cell_w = style.size * CELL_W;
    let cell_h = style.size * CELL_H;
    let px_w = cell_w / 5.0;
    let px_h = cell_h / 7.0;
    let top = origin.y - cell_h;

    for (i, ch) in text.chars().enumerate() {
        if ch == ' ' {
            continue;
        }
        let left = origin.x + i as f64 * style.size * ADVANCE;
        let rows = glyph_rows(ch.to_ascii_uppercase());
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..5 {
                if (bits >> (4 - col)) & 1 == 1 {
                    let x = left + col as f64 * px_w;
                    let y = top + row as f64 * px_h;
                    let rect = Rect::new(x, y, x + px_w, y + px_h);
                    scene.fill(Fill::NonZero, transform, style.color, None, &rect);
                }
            }
        }
    }
}

/// 5x7 patterns, one byte per row, bit 4 is the leftmost pixel.
fn glyph_rows(ch: char) -> [u8; 7] {
    match ch {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '.' => [0, 0, 0, 0, 0, 0b01100, 0b01100],
        ',' => [0, 0, 0, 0, 0b01100, 0b00100, 0b01000],
        ':' => [0, 0b01100, 0b01100, 0, 0b01100, 0b01100, 0],
        ';' => [0, 0b01100, 0b01100, 0, 0b01100, 0b00100, 0b01000],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        '[' => [0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110],
        ']' => [0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110],
        '{' => [0b00110, 0b00100, 0b00100, 0b01000, 0b00100, 0b00100, 0b00110],
        '}' => [0b01100, 0b00100, 0b00100, 0b00010, 0b00100, 0b00100, 0b01100],
        '<' => [0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => [0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        '=' => [0, 0, 0b11111, 0, 0b11111, 0, 0],
        '+' => [0, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0],
        '-' => [0, 0, 0, 0b11111, 0, 0, 0],
        '*' => [0, 0b00100, 0b10101, 0b01110, 0b10101, 0b00100, 0],
        '/' => [0, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0],
        '_' => [0, 0, 0, 0, 0, 0, 0b11111],
        '#' => [0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010],
        '|' => [0b00100; 7],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0, 0b00100],
        '"' => [0b01010, 0b01010, 0b01010, 0, 0, 0, 0],
        '\'' => [0b00100, 0b00100, 0b01000, 0, 0, 0, 0],
        '&' => [0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101],
        '?' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0, 0b00100],
        '%' => [0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011],
        _ => [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111],
    }
}
