use dioxus::prelude::*;
use quiz_core::QuizResults;
use quiz_core::model::CategoryCatalog;
use services::report::SUBTITLE;

use crate::views::{ChartView, ViewError};
use crate::vm::map_chart;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportStatus {
    Idle,
    Saving,
    Saved(String),
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
struct CategoryBlock {
    name: String,
    description: String,
    color: String,
}

fn category_blocks(results: &QuizResults, catalog: &CategoryCatalog) -> Vec<CategoryBlock> {
    results
        .scoreboard
        .iter()
        .map(|(id, _)| {
            let view = catalog.view(id);
            CategoryBlock {
                name: view.display_name.to_owned(),
                description: view.description.to_owned(),
                color: view.color.to_hex(),
            }
        })
        .collect()
}

#[component]
pub fn ResultsPanel(
    results: QuizResults,
    catalog: CategoryCatalog,
    pixel_ratio: f64,
    export: ExportStatus,
    on_export: EventHandler<()>,
) -> Element {
    let chart = map_chart(&results.scoreboard, &catalog, pixel_ratio);
    let blocks = category_blocks(&results, &catalog);
    let saving = export == ExportStatus::Saving;

    rsx! {
        section { class: "results", id: "results-root",
            h2 { class: "results__title", "Congratulations, {results.participant}!" }
            p { class: "results__subtitle", "{SUBTITLE}" }
            if chart.is_empty() {
                p { class: "results__empty", "No answers were recorded." }
            } else {
                ChartView { chart }
            }
            div { class: "results__categories",
                for block in blocks {
                    article { key: "{block.name}", class: "category",
                        h3 { style: "color: {block.color};", "{block.name}" }
                        p { "{block.description}" }
                    }
                }
            }
            div { class: "results__export",
                button {
                    id: "export-button",
                    r#type: "button",
                    disabled: saving,
                    onclick: move |_| on_export.call(()),
                    "Download Results as PDF"
                }
                match export {
                    ExportStatus::Idle => rsx! {},
                    ExportStatus::Saving => rsx! {
                        p { class: "export-status", "Saving..." }
                    },
                    ExportStatus::Saved(path) => rsx! {
                        p { class: "export-status", "Saved to {path}" }
                    },
                    ExportStatus::Failed => rsx! {
                        p { class: "form-error", "{ViewError::ExportFailed.message()}" }
                    },
                }
            }
        }
    }
}
