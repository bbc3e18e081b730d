use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, Rgb};
use tracing::debug;

use crate::error::{ReportError, Result};
use crate::render::layout::{FontStyle, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, layout};
use crate::report::{Color, Document};

const LAYER_NAME: &str = "Layer 1";

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference) -> Result<Self> {
        let add = |font| doc.add_builtin_font(font).map_err(render_failure);
        Ok(Self {
            regular: add(BuiltinFont::Helvetica)?,
            bold: add(BuiltinFont::HelveticaBold)?,
            italic: add(BuiltinFont::HelveticaOblique)?,
        })
    }

    fn get(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
        }
    }
}

fn render_failure(e: impl std::fmt::Display) -> ReportError {
    ReportError::RenderFailure(e.to_string())
}

fn pdf_color(color: Color) -> printpdf::Color {
    printpdf::Color::Rgb(Rgb::new(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        None,
    ))
}

/// Lays out `document` and serializes it to PDF bytes.
///
/// # Errors
///
/// Returns [`ReportError::RenderFailure`] if the PDF backend rejects a font or
/// fails to serialize.
pub fn render_pdf(document: &Document) -> Result<Vec<u8>> {
    let pages = layout(document);
    debug!(pages = pages.len(), "Document laid out");

    let (doc, first_page, first_layer) = PdfDocument::new(
        document.title.clone(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        LAYER_NAME,
    );
    let fonts = Fonts::load(&doc)?;

    for page in &pages {
        let layer = if page.number == 1 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (p, l) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
            doc.get_page(p).get_layer(l)
        };

        for run in &page.runs {
            layer.set_fill_color(pdf_color(run.color));
            layer.use_text(
                run.text.clone(),
                run.size_pt,
                Mm(run.x_mm),
                Mm(run.y_mm),
                fonts.get(run.style),
            );
        }
    }

    doc.save_to_bytes().map_err(render_failure)
}

/// Renders `document` and writes it to `path`, replacing any existing file.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn write_pdf(document: &Document, path: &Path) -> Result<()> {
    let bytes = render_pdf(document)?;
    std::fs::write(path, &bytes)
        .map_err(|e| render_failure(format!("cannot write {}: {}", path.display(), e)))?;
    debug!(bytes = bytes.len(), "PDF written");
    Ok(())
}
