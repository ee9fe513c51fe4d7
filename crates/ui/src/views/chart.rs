use dioxus::document::eval;
use dioxus::prelude::*;

use crate::vm::ChartVm;

const TICK_LABEL_INSET: f64 = 4.0;

/// Device pixel ratio of the webview, or 1.0 when it cannot be read.
pub(crate) async fn read_pixel_ratio() -> f64 {
    match eval("return window.devicePixelRatio || 1;").join::<f64>().await {
        Ok(ratio) if ratio.is_finite() && ratio > 0.0 => ratio,
        Ok(_) => 1.0,
        Err(err) => {
            tracing::debug!(error = ?err, "device pixel ratio unavailable");
            1.0
        }
    }
}

#[component]
pub fn ChartView(chart: ChartVm) -> Element {
    let tick_y = chart.logical_height - TICK_LABEL_INSET;
    rsx! {
        figure { class: "chart",
            svg {
                class: "chart__svg",
                id: "results-chart",
                width: "{chart.width_px}",
                height: "{chart.height_px}",
                style: "{chart.css_size()}",
                view_box: "{chart.view_box()}",
                for tick in chart.ticks.iter() {
                    g { key: "tick-{tick.label}", class: "chart__tick",
                        line {
                            x1: "{tick.x}",
                            y1: "0",
                            x2: "{tick.x}",
                            y2: "{chart.logical_height}",
                        }
                        text { x: "{tick.x}", y: "{tick_y}", text_anchor: "middle", "{tick.label}" }
                    }
                }
                for bar in chart.bars.iter() {
                    g { key: "{bar.label}", class: "chart__bar",
                        title { "{bar.tooltip}" }
                        rect {
                            x: "{bar.x}",
                            y: "{bar.y}",
                            width: "{bar.width}",
                            height: "{bar.height}",
                            fill: "{bar.fill}",
                        }
                        text {
                            class: "chart__label",
                            x: "{bar.label_x}",
                            y: "{bar.text_y}",
                            text_anchor: "end",
                            dominant_baseline: "middle",
                            "{bar.label}"
                        }
                        text {
                            class: "chart__value",
                            x: "{bar.value_x}",
                            y: "{bar.text_y}",
                            dominant_baseline: "middle",
                            "{bar.value}"
                        }
                    }
                }
            }
        }
    }
}
