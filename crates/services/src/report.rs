use quiz_core::QuizResults;
use quiz_core::model::CategoryCatalog;

use crate::chart::{ChartLayout, ChartSurface};
use crate::font_metrics::{FontFace, PT_TO_MM, text_width_mm, wrap_text};

pub const SUBTITLE: &str = "Here is how you prefer to think!";

const TITLE_SIZE_PT: f64 = 24.0;
const SUBTITLE_SIZE_PT: f64 = 16.0;
const HEADING_SIZE_PT: f64 = 14.0;
const BODY_SIZE_PT: f64 = 12.0;
const LINE_HEIGHT_FACTOR: f64 = 1.15;

const TITLE_GAP_MM: f64 = 10.0;
const SUBTITLE_GAP_MM: f64 = 5.0;
const CHART_HEIGHT_MM: f64 = 80.0;
const CHART_GAP_MM: f64 = 10.0;
const HEADING_GAP_MM: f64 = 6.0;
const BLOCK_GAP_MM: f64 = 9.0;

/// Page size in millimetres. Layout coordinates run from the top-left corner
/// and text positions are baselines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl PageGeometry {
    /// A4 portrait with 20 mm margins.
    pub const A4: PageGeometry = PageGeometry {
        width: 210.0,
        height: 297.0,
        margin: 20.0,
    };

    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.margin
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.height - self.margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::A4
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f64,
    pub baseline: f64,
    pub size_pt: f64,
    pub face: FontFace,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ReportItem {
    Text(TextRun),
    Chart {
        left: f64,
        top: f64,
        chart: ChartLayout,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportPage {
    pub items: Vec<ReportItem>,
}

impl ReportPage {
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> + '_ {
        self.items.iter().filter_map(|item| match item {
            ReportItem::Text(run) => Some(run),
            ReportItem::Chart { .. } => None,
        })
    }
}

/// A fully positioned report, ready for a renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub geometry: PageGeometry,
    pub pages: Vec<ReportPage>,
}

pub struct ReportLayout<'a> {
    catalog: &'a CategoryCatalog,
    geometry: PageGeometry,
}

impl<'a> ReportLayout<'a> {
    #[must_use]
    pub fn new(catalog: &'a CategoryCatalog) -> Self {
        Self {
            catalog,
            geometry: PageGeometry::A4,
        }
    }

    #[must_use]
    pub fn build(&self, results: &QuizResults) -> ReportDocument {
        let geometry = self.geometry;
        let mut cursor = PageCursor::new(geometry);

        let title = format!("Congratulations, {}!", results.participant);
        let title_size = fitted_size(
            &title,
            TITLE_SIZE_PT,
            FontFace::Bold,
            geometry.content_width(),
        );
        cursor.push_centered(&title, title_size, FontFace::Bold);
        cursor.y += TITLE_GAP_MM;
        cursor.push_centered(SUBTITLE, SUBTITLE_SIZE_PT, FontFace::Regular);
        cursor.y += SUBTITLE_GAP_MM;

        let surface = ChartSurface::new(geometry.content_width(), CHART_HEIGHT_MM, 1.0);
        let chart = ChartLayout::build(&results.scoreboard, self.catalog, surface);
        let top = cursor.y;
        cursor.current().items.push(ReportItem::Chart {
            left: geometry.margin,
            top,
            chart,
        });
        cursor.y += CHART_HEIGHT_MM + CHART_GAP_MM;

        let line_height = BODY_SIZE_PT * LINE_HEIGHT_FACTOR * PT_TO_MM;
        for (category, _) in results.scoreboard.iter() {
            let view = self.catalog.view(category);
            let lines = wrap_text(
                view.description,
                geometry.content_width(),
                BODY_SIZE_PT,
                FontFace::Regular,
            );

            // Extent from the heading baseline to the last description baseline.
            let extra_lines = u32::try_from(lines.len().saturating_sub(1)).unwrap_or(u32::MAX);
            let extent = if lines.is_empty() {
                0.0
            } else {
                HEADING_GAP_MM + f64::from(extra_lines) * line_height
            };
            if cursor.y + extent > geometry.bottom() && !cursor.at_top() {
                cursor.new_page();
            }

            cursor.push_left(view.display_name, HEADING_SIZE_PT, FontFace::Bold);
            for (i, line) in lines.into_iter().enumerate() {
                if i == 0 {
                    cursor.y += HEADING_GAP_MM;
                } else {
                    cursor.y += line_height;
                    if cursor.y > geometry.bottom() {
                        cursor.new_page();
                    }
                }
                cursor.push_left(&line, BODY_SIZE_PT, FontFace::Regular);
            }
            cursor.y += BLOCK_GAP_MM;
        }

        ReportDocument {
            title,
            geometry,
            pages: cursor.pages,
        }
    }
}

/// Largest size up to `max_pt` at which `text` fits in `width_mm`.
fn fitted_size(text: &str, max_pt: f64, face: FontFace, width_mm: f64) -> f64 {
    let width = text_width_mm(text, max_pt, face);
    if width <= width_mm {
        max_pt
    } else {
        max_pt * width_mm / width
    }
}

struct PageCursor {
    geometry: PageGeometry,
    pages: Vec<ReportPage>,
    y: f64,
}

impl PageCursor {
    fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: vec![ReportPage::default()],
            y: geometry.top(),
        }
    }

    fn current(&mut self) -> &mut ReportPage {
        if self.pages.is_empty() {
            self.pages.push(ReportPage::default());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn at_top(&self) -> bool {
        (self.y - self.geometry.top()).abs() < f64::EPSILON
    }

    fn new_page(&mut self) {
        self.pages.push(ReportPage::default());
        self.y = self.geometry.top();
    }

    fn push_left(&mut self, text: &str, size_pt: f64, face: FontFace) {
        let run = TextRun {
            text: text.to_owned(),
            x: self.geometry.margin,
            baseline: self.y,
            size_pt,
            face,
        };
        self.current().items.push(ReportItem::Text(run));
    }

    fn push_centered(&mut self, text: &str, size_pt: f64, face: FontFace) {
        let width = text_width_mm(text, size_pt, face);
        let run = TextRun {
            text: text.to_owned(),
            x: ((self.geometry.width - width) / 2.0).max(0.0),
            baseline: self.y,
            size_pt,
            face,
        };
        self.current().items.push(ReportItem::Text(run));
    }
}
