//! PDF rendering of a screening outcome.
//!
//! Produces a paginated A4 document with the same content and ordering as
//! the plain-text rendering. Returns the finished document as bytes so the
//! caller decides where they go (download, file, attachment).

use crate::details::PatientDetails;
use crate::text::{advice, date_line, headline, identity_line};
use crate::{ReportError, ReportResult};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use std::io::BufWriter;
use triage_core::{ScreeningOutcome, SymptomCatalog};

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const TOP_Y: Mm = Mm(280.0);
const BOTTOM_Y: Mm = Mm(20.0);
const WRAP_CHARS: usize = 90;

/// Cursor state for sequential line placement with page breaks.
struct PageCursor<'a> {
    doc: &'a printpdf::PdfDocumentReference,
    layer: PdfLayerReference,
    y: Mm,
}

impl<'a> PageCursor<'a> {
    fn write_line(&mut self, text: &str, size: f64, x: Mm, font: &IndirectFontRef, step: Mm) {
        if self.y.0 < BOTTOM_Y.0 {
            let (page, layer) = self.doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP_Y;
        }
        self.layer.use_text(text, size as f32, x, self.y, font);
        self.y -= step;
    }

    fn gap(&mut self, step: Mm) {
        self.y -= step;
    }
}

/// Renders a screening outcome as PDF bytes.
///
/// Content mirrors [`crate::text::render_text`]: title, date and identity
/// lines, verdict headline, advice, numbered reasons, precautions when
/// present, disclaimer footer. Long lines are word-wrapped; overflowing
/// content continues on a fresh page.
///
/// # Errors
///
/// Returns [`ReportError::PdfGeneration`] if font loading or document
/// serialisation fails. The screening outcome itself is unaffected; callers
/// may simply retry the export.
pub fn render_pdf(
    outcome: &ScreeningOutcome,
    catalog: &SymptomCatalog,
    details: &PatientDetails,
) -> ReportResult<Vec<u8>> {
    let title = format!("{} — Screening Summary", catalog.title().plain());
    let (doc, page1, layer1) = PdfDocument::new(&title, PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
    let layer = doc.get_page(page1).get_layer(layer1);

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::PdfGeneration(format!("font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::PdfGeneration(format!("font error: {e}")))?;

    let mut cursor = PageCursor {
        doc: &doc,
        layer,
        y: TOP_Y,
    };

    // Header
    for line in wrap_text(&title, WRAP_CHARS) {
        cursor.write_line(&line, 14.0, Mm(20.0), &bold, Mm(7.0));
    }
    cursor.write_line(&date_line(details), 9.0, Mm(20.0), &font, Mm(4.5));
    cursor.write_line(&identity_line(details), 9.0, Mm(20.0), &font, Mm(4.5));
    cursor.gap(Mm(6.0));

    // Verdict
    cursor.write_line("RESULT:", 11.0, Mm(20.0), &bold, Mm(6.0));
    for line in wrap_text(headline(&outcome.verdict), WRAP_CHARS) {
        cursor.write_line(&line, 10.0, Mm(25.0), &bold, Mm(5.0));
    }
    for line in wrap_text(advice(&outcome.verdict, catalog), WRAP_CHARS) {
        cursor.write_line(&line, 9.0, Mm(25.0), &font, Mm(4.5));
    }
    cursor.gap(Mm(4.0));

    // Reasons
    cursor.write_line("REASONS:", 11.0, Mm(20.0), &bold, Mm(6.0));
    let reasons = outcome.verdict.reasons();
    if reasons.is_empty() {
        cursor.write_line("  - (nothing selected)", 9.0, Mm(25.0), &font, Mm(4.5));
    } else {
        for (i, reason) in reasons.iter().enumerate() {
            let text = format!("  {}. {}", i + 1, reason.label.plain());
            for line in wrap_text(&text, WRAP_CHARS) {
                cursor.write_line(&line, 9.0, Mm(25.0), &font, Mm(4.5));
            }
            cursor.gap(Mm(1.0));
        }
    }

    // Precautions
    if !outcome.precautions.is_empty() {
        cursor.gap(Mm(4.0));
        cursor.write_line(
            "PRECAUTIONS BEFORE ANY PROCEDURE:",
            11.0,
            Mm(20.0),
            &bold,
            Mm(6.0),
        );
        for precaution in &outcome.precautions {
            let text = format!("  - {}", precaution.label.plain());
            for line in wrap_text(&text, WRAP_CHARS) {
                cursor.write_line(&line, 9.0, Mm(25.0), &font, Mm(4.5));
            }
        }
    }

    // Disclaimer footer
    cursor.gap(Mm(8.0));
    let note = format!("Note: {}", catalog.disclaimer().plain());
    for line in wrap_text(&note, WRAP_CHARS) {
        cursor.write_line(&line, 8.0, Mm(20.0), &font, Mm(4.0));
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ReportError::PdfGeneration(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ReportError::PdfGeneration(format!("buffer error: {e}")))
}

/// Word-wraps a line to at most `max_chars` characters per output line.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.len() + word.len() + 1 > max_chars && !current.is_empty() {
            lines.push(current.clone());
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
