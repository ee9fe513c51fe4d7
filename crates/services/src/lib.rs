#![forbid(unsafe_code)]

pub mod chart;
pub mod error;
pub mod font_metrics;
pub mod pdf;
pub mod quiz_service;
pub mod report;
pub mod report_service;
pub mod shuffle;

pub use chart::{AXIS_MAX, Bar, ChartLayout, ChartSurface};
pub use error::{QuizServiceError, ReportError};
pub use quiz_service::QuizService;
pub use report::{ReportDocument, ReportLayout};
pub use report_service::{ReportService, export_file_name};
