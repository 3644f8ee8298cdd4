//! PDF encoder: landscape tabular report via `printpdf`.
//!
//! Layout is deliberately simple: centered title, a few metadata lines
//! (export date, row count, currency total when the table has one), then
//! the table with a shaded header row repeated per page, alternating row
//! fill, and a page-number footer. Built-in Times faces only; no
//! embedded fonts.

#[cfg(test)]
#[path = "pdf_test.rs"]
mod pdf_test;

use chrono::Utc;
use printpdf::path::PaintMode;
use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, Rect, Rgb};
use serde_json::Value;

use super::ExportError;
use super::table::{Column, cell_text, currency_total};
use crate::util::format::{format_currency, format_date};

/// MIME type for the produced artifact.
pub const MIME: &str = "application/pdf";

// A4 landscape, millimetres.
const PAGE_W: f32 = 297.0;
const PAGE_H: f32 = 210.0;
const MARGIN: f32 = 14.0;
const ROW_H: f32 = 7.0;
const TABLE_TOP: f32 = PAGE_H - 55.0;
const TABLE_BOTTOM: f32 = 22.0;

const TITLE_SIZE: f32 = 20.0;
const META_SIZE: f32 = 11.0;
const HEADER_SIZE: f32 = 11.0;
const BODY_SIZE: f32 = 10.0;
const FOOTER_SIZE: f32 = 10.0;

/// Encode the table as a landscape PDF report.
pub fn to_pdf(title: &str, columns: &[Column], rows: &[Value]) -> Result<Vec<u8>, ExportError> {
    if columns.is_empty() {
        return Err(ExportError::NoColumns);
    }

    let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_W), Mm(PAGE_H), "report");
    let regular = doc
        .add_builtin_font(BuiltinFont::TimesRoman)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::TimesBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let mut current = doc.get_page(page).get_layer(layer);
    let mut page_number = 1;

    draw_title(&current, &bold, title, false);
    draw_meta(&current, &regular, columns, rows);
    draw_footer(&current, &regular, page_number);

    #[allow(clippy::cast_precision_loss)]
    let col_w = (PAGE_W - 2.0 * MARGIN) / columns.len() as f32;

    let mut y = TABLE_TOP;
    draw_header_row(&current, &bold, y, col_w, columns);
    y -= ROW_H;

    for (index, row) in rows.iter().enumerate() {
        if y < TABLE_BOTTOM {
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "report");
            current = doc.get_page(next_page).get_layer(next_layer);
            page_number += 1;

            draw_title(&current, &bold, title, true);
            draw_footer(&current, &regular, page_number);

            y = TABLE_TOP;
            draw_header_row(&current, &bold, y, col_w, columns);
            y -= ROW_H;
        }

        draw_row(
            &current,
            &regular,
            BODY_SIZE,
            y,
            col_w,
            stripe_fill(index),
            color(0, 0, 0),
            columns.iter().map(|c| cell_text(c, row)),
        );
        y -= ROW_H;
    }

    doc.save_to_bytes()
        .map_err(|e| ExportError::Pdf(e.to_string()))
}

/// Alternate body rows get a light fill, the rest stay unshaded.
fn stripe_fill(index: usize) -> Option<Color> {
    if index % 2 == 1 {
        Some(color(241, 245, 249))
    } else {
        None
    }
}

fn color(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

fn draw_title(
    layer: &printpdf::PdfLayerReference,
    font: &IndirectFontRef,
    title: &str,
    continued: bool,
) {
    let text = if continued {
        format!("{title} (continued)")
    } else {
        title.to_owned()
    };
    let x = (PAGE_W - text_width(&text, TITLE_SIZE)).max(MARGIN) / 2.0;
    layer.set_fill_color(color(44, 62, 80));
    layer.use_text(text, TITLE_SIZE, Mm(x), Mm(PAGE_H - 20.0), font);
}

fn draw_meta(
    layer: &printpdf::PdfLayerReference,
    font: &IndirectFontRef,
    columns: &[Column],
    rows: &[Value],
) {
    layer.set_fill_color(color(52, 73, 94));
    let mut y = PAGE_H - 30.0;
    let mut line = |text: String| {
        layer.use_text(text, META_SIZE, Mm(MARGIN), Mm(y), font);
        y -= 7.0;
    };

    line(format!("Exported: {}", format_date(Utc::now())));
    line(format!("Rows: {}", rows.len()));
    if let Some(total) = currency_total(columns, rows) {
        line(format!("Total amount: {}", format_currency(total)));
    }
}

/// Blue-filled header row with white column titles.
fn draw_header_row(
    layer: &printpdf::PdfLayerReference,
    font: &IndirectFontRef,
    y: f32,
    col_w: f32,
    columns: &[Column],
) {
    draw_row(
        layer,
        font,
        HEADER_SIZE,
        y,
        col_w,
        Some(color(41, 128, 185)),
        color(255, 255, 255),
        columns.iter().map(|c| c.title.clone()),
    );
}

#[allow(clippy::too_many_arguments)]
fn draw_row(
    layer: &printpdf::PdfLayerReference,
    font: &IndirectFontRef,
    size: f32,
    y: f32,
    col_w: f32,
    fill: Option<Color>,
    text_color: Color,
    cells: impl Iterator<Item = String>,
) {
    if let Some(fill) = fill {
        layer.set_fill_color(fill);
        layer.add_rect(
            Rect::new(
                Mm(MARGIN),
                Mm(y - 2.0),
                Mm(PAGE_W - MARGIN),
                Mm(y + ROW_H - 2.0),
            )
            .with_mode(PaintMode::Fill),
        );
    }

    layer.set_fill_color(text_color);
    for (i, cell) in cells.enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let x = MARGIN + col_w * i as f32;
        let text = clip_to_width(&cell, col_w - 2.0, size);
        layer.use_text(text, size, Mm(x), Mm(y), font);
    }
}

fn draw_footer(layer: &printpdf::PdfLayerReference, font: &IndirectFontRef, page_number: u32) {
    layer.set_fill_color(color(52, 73, 94));
    layer.use_text(
        format!("Page {page_number}"),
        FOOTER_SIZE,
        Mm(MARGIN),
        Mm(10.0),
        font,
    );
}

// Built-in fonts carry no metrics here, so width is approximated as half
// the point size per glyph (1 pt = 0.3528 mm).
fn text_width(text: &str, size: f32) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let glyphs = text.chars().count() as f32;
    glyphs * size * 0.5 * 0.3528
}

fn clip_to_width(text: &str, width_mm: f32, size: f32) -> String {
    let glyph_w = size * 0.5 * 0.3528;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let max_glyphs = (width_mm / glyph_w).max(1.0) as usize;
    if text.chars().count() <= max_glyphs {
        return text.to_owned();
    }
    let mut clipped: String = text.chars().take(max_glyphs.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}
