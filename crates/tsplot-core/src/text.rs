// File: crates/tsplot-core/src/text.rs
// Summary: Text measurement trait plus a Skia textlayout shaper that measures and draws plot text.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Measures rendered text. Layout depends only on this trait, so it can be
/// computed with fixed metrics in tests and with real font metrics when rendering.
pub trait TextMeasure {
    /// Pixel width of the longest line of `text` at font size `size`.
    fn text_width(&self, text: &str, size: f32) -> f32;
}

/// Monospace metrics where every character advances `em_ratio * size` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvance {
    pub em_ratio: f32,
}

impl FixedAdvance {
    pub const fn new(em_ratio: f32) -> Self {
        Self { em_ratio }
    }
}

impl TextMeasure for FixedAdvance {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        let chars = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        chars as f32 * self.em_ratio * size
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // Scale labels are padded with spaces, so columns only line up in a monospaced face.
        ts.set_font_families(&["Consolas", "Roboto Mono", "Menlo", "DejaVu Sans Mono", "monospace"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(100_000.0);
        paragraph
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    pub fn draw_top_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        p.paint(canvas, (x, y));
    }
}

impl TextMeasure for TextShaper {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0));
        // width of the longest line
        p.longest_line()
    }
}
