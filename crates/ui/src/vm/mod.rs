mod chart_vm;
mod quiz_vm;

pub use chart_vm::{
    CHART_HEIGHT, CHART_WIDTH, ChartBarVm, ChartTickVm, ChartVm, map_chart,
};
pub use quiz_vm::{QuizIntent, QuizOutcome, QuizVm, start_quiz};
