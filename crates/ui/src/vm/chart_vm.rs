use quiz_core::model::{CategoryCatalog, ScoreBoard};
use services::{AXIS_MAX, ChartLayout, ChartSurface};

/// Logical size of the on-screen chart in CSS pixels.
pub const CHART_WIDTH: f64 = 640.0;
pub const CHART_HEIGHT: f64 = 400.0;

const TICK_STEP: usize = 10;
const LABEL_GAP: f64 = 8.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartBarVm {
    pub label: String,
    pub tooltip: String,
    pub fill: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label_x: f64,
    pub text_y: f64,
    pub value_x: f64,
    pub value: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartTickVm {
    pub x: f64,
    pub label: String,
}

/// SVG-ready chart. `width_px`/`height_px` size the backing store while the
/// view box stays in logical units, so the drawing scales by the pixel ratio.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartVm {
    pub width_px: u32,
    pub height_px: u32,
    pub logical_width: f64,
    pub logical_height: f64,
    pub plot_left: f64,
    pub bars: Vec<ChartBarVm>,
    pub ticks: Vec<ChartTickVm>,
}

impl ChartVm {
    #[must_use]
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.logical_width, self.logical_height)
    }

    #[must_use]
    pub fn css_size(&self) -> String {
        format!(
            "width: {}px; height: {}px;",
            self.logical_width, self.logical_height
        )
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

#[must_use]
pub fn map_chart(scoreboard: &ScoreBoard, catalog: &CategoryCatalog, pixel_ratio: f64) -> ChartVm {
    let surface = ChartSurface::new(CHART_WIDTH, CHART_HEIGHT, pixel_ratio);
    let layout = ChartLayout::build(scoreboard, catalog, surface);

    let bars = layout
        .bars()
        .iter()
        .map(|bar| ChartBarVm {
            label: bar.label.clone(),
            tooltip: bar.tooltip(),
            fill: bar.color.to_hex(),
            x: bar.bar_left,
            y: bar.bar_top,
            width: bar.bar_length,
            height: bar.bar_height,
            label_x: layout.plot_left() - LABEL_GAP,
            text_y: bar.center_y(),
            value_x: bar.bar_left + bar.bar_length + LABEL_GAP / 2.0,
            value: bar.value,
        })
        .collect();

    let ticks = (0..=AXIS_MAX)
        .step_by(TICK_STEP)
        .map(|value| ChartTickVm {
            x: layout.plot_left() + layout.plot_width() * f64::from(value) / f64::from(AXIS_MAX),
            label: value.to_string(),
        })
        .collect();

    ChartVm {
        width_px: surface.backing_width(),
        height_px: surface.backing_height(),
        logical_width: surface.logical_width(),
        logical_height: surface.logical_height(),
        plot_left: layout.plot_left(),
        bars,
        ticks,
    }
}
