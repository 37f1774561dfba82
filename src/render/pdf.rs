//! PDF drawing surface for payslips.
//!
//! A thin layer over `printpdf` that places text, filled rectangles and
//! rules in points from the bottom-left corner of a US Letter page. Text
//! is set in the built-in Helvetica faces, measured with their standard
//! AFM widths so amounts can be right-aligned and long values shortened.

use printpdf::{
    BuiltinFont, Color, Greyscale, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Pt, Rect,
};

use crate::error::{PayrollError, PayrollResult};

/// US Letter width in points.
pub const PAGE_WIDTH: f32 = 612.0;
/// US Letter height in points.
pub const PAGE_HEIGHT: f32 = 792.0;

const ELLIPSIS: &str = "...";

/// The two built-in faces used on a payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    /// Helvetica.
    Regular,
    /// Helvetica-Bold.
    Bold,
}

// Advance widths for ' '..='~' in 1/1000 em, from the Adobe core font AFMs.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width of Latin-1 letters, which the tables above do not cover.
const LATIN1_WIDTH: u16 = 556;

fn glyph_width(c: char, font: Font) -> u16 {
    let table = match font {
        Font::Regular => &HELVETICA_WIDTHS,
        Font::Bold => &HELVETICA_BOLD_WIDTHS,
    };
    match c {
        ' '..='~' => table[c as usize - ' ' as usize],
        _ => LATIN1_WIDTH,
    }
}

/// Width of `text` in points when set in `font` at `size`.
pub fn text_width(text: &str, font: Font, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(glyph_width(c, font))).sum();
    units as f32 * size / 1000.0
}

/// Replaces characters the built-in fonts cannot show with `?`.
///
/// The faces are WinAnsi-encoded; printable ASCII and Latin-1 are kept.
pub fn encodable_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            ' '..='~' | '\u{a0}'..='\u{ff}' => c,
            _ => '?',
        })
        .collect()
}

/// Shortens `text` with a trailing ellipsis so that it fits in `max_width`.
pub fn fit_text(text: &str, font: Font, size: f32, max_width: f32) -> String {
    let text = encodable_text(text);
    if text_width(&text, font, size) <= max_width {
        return text;
    }

    let budget = max_width - text_width(ELLIPSIS, font, size);
    let mut fitted = String::new();
    let mut width = 0.0;
    for c in text.chars() {
        width += f32::from(glyph_width(c, font)) * size / 1000.0;
        if width > budget {
            break;
        }
        fitted.push(c);
    }
    fitted.truncate(fitted.trim_end().len());
    fitted.push_str(ELLIPSIS);
    fitted
}

fn mm(points: f32) -> Mm {
    Mm::from(Pt(points))
}

fn grey(level: f32) -> Color {
    Color::Greyscale(Greyscale::new(level, None))
}

fn render_error(error: printpdf::Error) -> PayrollError {
    PayrollError::RenderError {
        message: error.to_string(),
    }
}

/// A PDF document under construction.
pub struct PdfPages {
    document: PdfDocumentReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl PdfPages {
    /// Starts an empty document with both faces registered.
    pub fn new(title: &str) -> PayrollResult<Self> {
        let document = PdfDocument::empty(title);
        let regular = document
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(render_error)?;
        let bold = document
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(render_error)?;

        Ok(Self {
            document,
            regular,
            bold,
        })
    }

    /// Appends a blank US Letter page and returns its canvas.
    pub fn add_page(&self) -> PageCanvas {
        let (page, layer) = self
            .document
            .add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Payslip");
        PageCanvas {
            layer: self.document.get_page(page).get_layer(layer),
            regular: self.regular.clone(),
            bold: self.bold.clone(),
        }
    }

    /// Serializes the document.
    pub fn finish(self) -> PayrollResult<Vec<u8>> {
        self.document.save_to_bytes().map_err(render_error)
    }
}

/// Drawing operations for one page.
pub struct PageCanvas {
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl PageCanvas {
    fn face(&self, font: Font) -> &IndirectFontRef {
        match font {
            Font::Regular => &self.regular,
            Font::Bold => &self.bold,
        }
    }

    /// Draws text with its baseline starting at (`x`, `y`).
    pub fn text(&self, font: Font, size: f32, x: f32, y: f32, text: &str) {
        self.layer
            .use_text(encodable_text(text), size, mm(x), mm(y), self.face(font));
    }

    /// Draws text so that it ends at `right`.
    pub fn text_right(&self, font: Font, size: f32, right: f32, y: f32, text: &str) {
        let text = encodable_text(text);
        let x = right - text_width(&text, font, size);
        self.text(font, size, x, y, &text);
    }

    /// Fills a rectangle with a grey level (0 black, 1 white).
    pub fn fill_rect(&self, x: f32, y: f32, width: f32, height: f32, level: f32) {
        self.layer.set_fill_color(grey(level));
        self.layer
            .add_rect(Rect::new(mm(x), mm(y), mm(x + width), mm(y + height)));
        self.layer.set_fill_color(grey(0.0));
    }

    /// Draws a straight rule `width` points thick.
    pub fn line(&self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32) {
        self.layer.set_outline_thickness(width);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(mm(x1), mm(y1)), false),
                (Point::new(mm(x2), mm(y2)), false),
            ],
            is_closed: false,
        });
    }
}

/// Extracts the text of each page, one line per drawn string.
#[cfg(test)]
pub(crate) fn page_texts(bytes: &[u8]) -> Vec<String> {
    let document = printpdf::lopdf::Document::load_mem(bytes).unwrap();
    document
        .get_pages()
        .keys()
        .map(|number| document.extract_text(&[*number]).unwrap())
        .collect()
}
