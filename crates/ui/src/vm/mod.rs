mod quiz_vm;
mod results_vm;
mod time_fmt;

pub use quiz_vm::{QuizScreenVm, SignalDisplay};
pub use results_vm::{ResultRowVm, ResultsVm, map_results};
pub use time_fmt::format_seconds;
