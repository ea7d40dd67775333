//! PDF export of the results table.
//!
//! Renders the header plus the single data row with printpdf's builtin
//! Helvetica fonts: grey bold white-text header, beige body, uniform black
//! grid, horizontally centered and vertically middled cells, 10pt type.
//! Output is an in-memory byte buffer scoped to one submission.

use printpdf::{BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb};
use tracing::debug;

use crate::types::PredictError;

use super::{TableRow, TABLE_HEADER};

// Letter landscape.
const PAGE_WIDTH_MM: f64 = 279.4;
const PAGE_HEIGHT_MM: f64 = 215.9;
const MARGIN_MM: f64 = 12.7;

const FONT_SIZE_PT: f64 = 10.0;
const LINE_HEIGHT_MM: f64 = 5.0;
const CELL_PADDING_MM: f64 = 2.0;

// Approximate Helvetica advance at 10pt, used for centering and wrapping.
const CHAR_WIDTH_MM: f64 = FONT_SIZE_PT * 0.5 * 0.3528;

/// Download name for the exported document.
pub fn pdf_filename(team_a: &str, team_b: &str) -> String {
    format!("{team_a}_vs_{team_b}_Betting_Predictions.pdf")
}

/// Render the results table (header + one data row) to PDF bytes.
pub fn render_pdf(row: &TableRow) -> Result<Vec<u8>, PredictError> {
    let (doc, page, layer) = PdfDocument::new(
        "Betting Predictions",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "table",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(render_err)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(render_err)?;

    let table_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
    let col_width = table_width / TABLE_HEADER.len() as f64;
    let max_chars = ((col_width - 2.0 * CELL_PADDING_MM) / CHAR_WIDTH_MM).floor() as usize;

    // Wrap every cell up front so row heights are known before drawing.
    let header_cells: Vec<Vec<String>> = TABLE_HEADER
        .iter()
        .map(|c| wrap_cell(c, max_chars))
        .collect();
    let body_cells: Vec<Vec<String>> = row.cells().iter().map(|c| wrap_cell(c, max_chars)).collect();

    let header_height = row_height(&header_cells);
    let body_height = row_height(&body_cells);

    let x0 = MARGIN_MM;
    let header_top = PAGE_HEIGHT_MM - MARGIN_MM;
    let body_top = header_top - header_height;
    let table_bottom = body_top - body_height;

    // Backgrounds first, then text, then the grid on top.
    set_fill(&layer, 0.50, 0.50, 0.50); // grey header
    fill_rect(&layer, x0, body_top, table_width, header_height);
    set_fill(&layer, 0.96, 0.96, 0.86); // beige body
    fill_rect(&layer, x0, table_bottom, table_width, body_height);

    set_fill(&layer, 0.96, 0.96, 0.96); // whitesmoke header text
    draw_row(&layer, &header_cells, &bold, x0, col_width, header_top, header_height);
    set_fill(&layer, 0.0, 0.0, 0.0);
    draw_row(&layer, &body_cells, &regular, x0, col_width, body_top, body_height);

    layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    layer.set_outline_thickness(1.0);
    for col in 0..=TABLE_HEADER.len() {
        let x = x0 + col as f64 * col_width;
        stroke_line(&layer, x, table_bottom, x, header_top);
    }
    for y in [table_bottom, body_top, header_top] {
        stroke_line(&layer, x0, y, x0 + table_width, y);
    }

    let mut bytes: Vec<u8> = Vec::new();
    {
        let mut writer = std::io::BufWriter::new(&mut bytes);
        doc.save(&mut writer).map_err(render_err)?;
    }
    debug!(bytes = bytes.len(), "PDF rendered");
    Ok(bytes)
}

fn render_err(e: printpdf::Error) -> PredictError {
    PredictError::Render(e.to_string())
}

/// Row height that fits the tallest wrapped cell, vertically padded.
fn row_height(cells: &[Vec<String>]) -> f64 {
    let lines = cells.iter().map(Vec::len).max().unwrap_or(1) as f64;
    lines * LINE_HEIGHT_MM + 2.0 * CELL_PADDING_MM
}

/// Greedy wrap on ", " boundaries; the separator stays with the left piece.
fn wrap_cell(text: &str, max_chars: usize) -> Vec<String> {
    if text.len() <= max_chars {
        return vec![text.to_string()];
    }
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for piece in text.split_inclusive(", ") {
        if !current.is_empty() && current.len() + piece.len() > max_chars {
            lines.push(current.trim_end().to_string());
            current = String::new();
        }
        current.push_str(piece);
    }
    if !current.is_empty() {
        lines.push(current.trim_end().to_string());
    }
    lines
}

fn set_fill(layer: &PdfLayerReference, r: f64, g: f64, b: f64) {
    layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
}

fn fill_rect(layer: &PdfLayerReference, x: f64, y: f64, w: f64, h: f64) {
    let shape = Line {
        points: vec![
            (Point::new(Mm(x), Mm(y)), false),
            (Point::new(Mm(x + w), Mm(y)), false),
            (Point::new(Mm(x + w), Mm(y + h)), false),
            (Point::new(Mm(x), Mm(y + h)), false),
        ],
        is_closed: true,
        has_fill: true,
        has_stroke: false,
        is_clipping_path: false,
    };
    layer.add_shape(shape);
}

fn stroke_line(layer: &PdfLayerReference, x0: f64, y0: f64, x1: f64, y1: f64) {
    let shape = Line {
        points: vec![
            (Point::new(Mm(x0), Mm(y0)), false),
            (Point::new(Mm(x1), Mm(y1)), false),
        ],
        is_closed: false,
        has_fill: false,
        has_stroke: true,
        is_clipping_path: false,
    };
    layer.add_shape(shape);
}

/// Write one row of wrapped cells, centered both ways within the row band
/// starting at `top` and extending `height` downwards.
fn draw_row(
    layer: &PdfLayerReference,
    cells: &[Vec<String>],
    font: &IndirectFontRef,
    x0: f64,
    col_width: f64,
    top: f64,
    height: f64,
) {
    for (col, lines) in cells.iter().enumerate() {
        let cell_x = x0 + col as f64 * col_width;
        let block_height = lines.len() as f64 * LINE_HEIGHT_MM;
        let mut baseline = top - (height - block_height) / 2.0 - LINE_HEIGHT_MM * 0.8;
        for line in lines {
            let text_width = line.chars().count() as f64 * CHAR_WIDTH_MM;
            let text_x = cell_x + (col_width - text_width).max(0.0) / 2.0;
            layer.use_text(line.clone(), FONT_SIZE_PT, Mm(text_x), Mm(baseline), font);
            baseline -= LINE_HEIGHT_MM;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> TableRow {
        TableRow {
            match_label: "Arsenal vs. Chelsea".to_string(),
            full_probs: "Over: 48.8%, Under: 73.0%".to_string(),
            ht_probs: "Over: 30.3%, Under: 89.9%".to_string(),
            sh_probs: "Over: 45.0%, Under: 80.3%".to_string(),
            recommended: "Under 2.5, Under 1.5 HT, Under 1.5 2H".to_string(),
            value: "Full: 0.24, HT: 0.62, 2H: 0.49".to_string(),
        }
    }

    #[test]
    fn test_filename_pattern() {
        assert_eq!(
            pdf_filename("Arsenal", "Chelsea"),
            "Arsenal_vs_Chelsea_Betting_Predictions.pdf"
        );
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render_pdf(&sample_row()).unwrap();
        assert!(bytes.len() > 500);
        assert_eq!(&bytes[..5], b"%PDF-");
    }

    #[test]
    fn test_wrap_short_cell_untouched() {
        assert_eq!(wrap_cell("Match", 20), vec!["Match"]);
    }

    #[test]
    fn test_wrap_splits_on_separators() {
        let lines = wrap_cell("Over: 48.8%, Under: 73.0%", 20);
        assert_eq!(lines, vec!["Over: 48.8%,", "Under: 73.0%"]);
    }

    #[test]
    fn test_wrap_three_segments() {
        let lines = wrap_cell("Full: 0.24, HT: 0.62, 2H: 0.49", 12);
        assert_eq!(lines, vec!["Full: 0.24,", "HT: 0.62,", "2H: 0.49"]);
    }

    #[test]
    fn test_row_height_tracks_tallest_cell() {
        let one = vec![vec!["a".to_string()]];
        let two = vec![vec!["a".to_string()], vec!["a".to_string(), "b".to_string()]];
        assert!(row_height(&two) > row_height(&one));
    }
}
