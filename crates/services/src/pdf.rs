use printpdf::{
    BuiltinFont, Color as PdfColor, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect,
    Rgb,
};
use quiz_core::model::Color;

use crate::chart::ChartLayout;
use crate::error::ReportError;
use crate::font_metrics::{FontFace, PT_TO_MM, text_width_mm};
use crate::report::{PageGeometry, ReportDocument, ReportItem, TextRun};

const LAYER_NAME: &str = "Report";
const CHART_LABEL_SIZE_PT: f64 = 10.0;
const CHART_VALUE_SIZE_PT: f64 = 9.0;
const CHART_LABEL_PADDING_MM: f64 = 2.0;
const BLACK: Color = Color::rgb(0, 0, 0);

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::Regular => &self.regular,
            FontFace::Bold => &self.bold,
        }
    }
}

fn pdf_error(err: impl std::fmt::Display) -> ReportError {
    ReportError::Pdf(err.to_string())
}

#[allow(clippy::cast_possible_truncation)]
fn mm(value: f64) -> Mm {
    Mm(value as f32)
}

fn fill(layer: &PdfLayerReference, color: Color) {
    let (r, g, b) = color.to_unit_rgb();
    layer.set_fill_color(PdfColor::Rgb(Rgb::new(r, g, b, None)));
}

/// Render the document.
///
/// # Errors
///
/// Returns `ReportError::Pdf` if fonts cannot be registered or the document
/// cannot be serialized.
pub fn render_pdf(document: &ReportDocument) -> Result<Vec<u8>, ReportError> {
    let geometry = document.geometry;
    let (pdf, first_page, first_layer) = PdfDocument::new(
        document.title.as_str(),
        mm(geometry.width),
        mm(geometry.height),
        LAYER_NAME,
    );
    let fonts = Fonts {
        regular: pdf
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?,
        bold: pdf
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?,
    };

    for (index, page) in document.pages.iter().enumerate() {
        let layer = if index == 0 {
            pdf.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_idx, layer_idx) =
                pdf.add_page(mm(geometry.width), mm(geometry.height), LAYER_NAME);
            pdf.get_page(page_idx).get_layer(layer_idx)
        };

        for item in &page.items {
            match item {
                ReportItem::Text(run) => draw_text(&layer, &fonts, geometry, run),
                ReportItem::Chart { left, top, chart } => {
                    draw_chart(&layer, &fonts, geometry, *left, *top, chart);
                }
            }
        }
    }

    pdf.save_to_bytes().map_err(pdf_error)
}

#[allow(clippy::cast_possible_truncation)]
fn draw_text(layer: &PdfLayerReference, fonts: &Fonts, geometry: PageGeometry, run: &TextRun) {
    fill(layer, BLACK);
    layer.use_text(
        run.text.as_str(),
        run.size_pt as f32,
        mm(run.x),
        mm(geometry.height - run.baseline),
        fonts.get(run.face),
    );
}

#[allow(clippy::cast_possible_truncation)]
fn draw_chart(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    geometry: PageGeometry,
    left: f64,
    top: f64,
    chart: &ChartLayout,
) {
    // Flip from top-down layout coordinates to PDF's bottom-up space.
    let to_pdf_y = |y: f64| geometry.height - (top + y);

    for bar in chart.bars() {
        if bar.bar_length > 0.0 {
            fill(layer, bar.color);
            let x0 = left + bar.bar_left;
            let rect = Rect::new(
                mm(x0),
                mm(to_pdf_y(bar.bar_top + bar.bar_height)),
                mm(x0 + bar.bar_length),
                mm(to_pdf_y(bar.bar_top)),
            );
            layer.add_rect(rect);
        }

        // Approximate vertical centring: a third of the em below the band centre.
        let label_baseline = bar.center_y() + CHART_LABEL_SIZE_PT * PT_TO_MM / 3.0;
        let label_width = text_width_mm(&bar.label, CHART_LABEL_SIZE_PT, FontFace::Bold);
        let label_x = (left + chart.plot_left() - CHART_LABEL_PADDING_MM - label_width).max(left);

        fill(layer, BLACK);
        layer.use_text(
            bar.label.as_str(),
            CHART_LABEL_SIZE_PT as f32,
            mm(label_x),
            mm(to_pdf_y(label_baseline)),
            &fonts.bold,
        );
        layer.use_text(
            bar.value.to_string(),
            CHART_VALUE_SIZE_PT as f32,
            mm(left + bar.bar_left + bar.bar_length + CHART_LABEL_PADDING_MM),
            mm(to_pdf_y(label_baseline)),
            &fonts.regular,
        );
    }
}
