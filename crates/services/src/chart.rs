use quiz_core::model::{CategoryCatalog, CategoryId, Color, ScoreBoard};

/// Fixed upper bound of the value axis.
pub const AXIS_MAX: u32 = 40;

/// Share of the surface width reserved for category labels.
pub const LABEL_COLUMN_RATIO: f64 = 0.35;

/// Share of each category band covered by its bar.
pub const BAR_THICKNESS_RATIO: f64 = 0.72;

/// Drawing surface size plus the device pixel ratio.
///
/// The backing store is `logical * pixel_ratio` so output stays sharp on
/// high-density displays, while layout happens in logical units and the
/// drawing context is scaled by the same ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartSurface {
    logical_width: f64,
    logical_height: f64,
    pixel_ratio: f64,
}

impl ChartSurface {
    /// Non-finite or non-positive sizes become zero and ratios fall back to 1.0.
    #[must_use]
    pub fn new(logical_width: f64, logical_height: f64, pixel_ratio: f64) -> Self {
        let size = |value: f64| if value.is_finite() && value > 0.0 { value } else { 0.0 };
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        Self {
            logical_width: size(logical_width),
            logical_height: size(logical_height),
            pixel_ratio,
        }
    }

    #[must_use]
    pub fn logical_width(&self) -> f64 {
        self.logical_width
    }

    #[must_use]
    pub fn logical_height(&self) -> f64 {
        self.logical_height
    }

    #[must_use]
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    #[must_use]
    pub fn backing_width(&self) -> u32 {
        scale_to_pixels(self.logical_width, self.pixel_ratio)
    }

    #[must_use]
    pub fn backing_height(&self) -> u32 {
        scale_to_pixels(self.logical_height, self.pixel_ratio)
    }

    /// Scale applied to the drawing context so logical coordinates map onto
    /// the backing store.
    #[must_use]
    pub fn context_scale(&self) -> f64 {
        self.pixel_ratio
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_to_pixels(logical: f64, ratio: f64) -> u32 {
    let scaled = (logical * ratio).round();
    if scaled >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        scaled as u32
    }
}

/// One category bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub category: CategoryId,
    pub label: String,
    pub value: u32,
    pub color: Color,
    /// Top of the category band.
    pub band_top: f64,
    pub band_height: f64,
    pub bar_top: f64,
    pub bar_height: f64,
    /// Left edge of the bar (the axis origin).
    pub bar_left: f64,
    pub bar_length: f64,
}

impl Bar {
    /// Text shown when the bar is inspected.
    #[must_use]
    pub fn tooltip(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }

    /// Vertical centre of the band, used to place labels.
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.band_top + self.band_height / 2.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    surface: ChartSurface,
    plot_left: f64,
    plot_width: f64,
    bars: Vec<Bar>,
}

impl ChartLayout {
    /// Lay out one bar per scored category, in scoreboard order.
    #[must_use]
    pub fn build(
        scoreboard: &ScoreBoard,
        catalog: &CategoryCatalog,
        surface: ChartSurface,
    ) -> Self {
        let plot_left = surface.logical_width() * LABEL_COLUMN_RATIO;
        let plot_width = surface.logical_width() - plot_left;
        let count = scoreboard.len();
        let band_height = if count == 0 {
            0.0
        } else {
            surface.logical_height() / f64::from(u32::try_from(count).unwrap_or(u32::MAX))
        };
        let bar_height = band_height * BAR_THICKNESS_RATIO;

        let bars = scoreboard
            .iter()
            .enumerate()
            .map(|(row, (category, value))| {
                let view = catalog.view(category);
                if view.is_fallback {
                    tracing::warn!(%category, "no catalog entry for category; using fallback label");
                }
                let band_top = band_height * f64::from(u32::try_from(row).unwrap_or(u32::MAX));
                let clamped = f64::from(value.min(AXIS_MAX));
                Bar {
                    category,
                    label: view.display_name.to_owned(),
                    value,
                    color: view.color,
                    band_top,
                    band_height,
                    bar_top: band_top + (band_height - bar_height) / 2.0,
                    bar_height,
                    bar_left: plot_left,
                    bar_length: plot_width * clamped / f64::from(AXIS_MAX),
                }
            })
            .collect();

        Self {
            surface,
            plot_left,
            plot_width,
            bars,
        }
    }

    #[must_use]
    pub fn surface(&self) -> ChartSurface {
        self.surface
    }

    #[must_use]
    pub fn plot_left(&self) -> f64 {
        self.plot_left
    }

    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.plot_width
    }

    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Read every bar back as `"<label>: <value>"`.
    #[must_use]
    pub fn tooltips(&self) -> Vec<String> {
        self.bars.iter().map(Bar::tooltip).collect()
    }
}
