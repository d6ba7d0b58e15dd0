mod dashboard_vm;
mod quiz_vm;
mod results_vm;
mod time_fmt;

pub use dashboard_vm::DashboardVm;
pub use quiz_vm::{OptionVm, QuestionVm, QuizIntent, TimerVm, start_quiz};
pub use results_vm::{AnswerReviewVm, ResultsVm, map_answer_reviews};
pub use time_fmt::{format_datetime, format_percentage};
