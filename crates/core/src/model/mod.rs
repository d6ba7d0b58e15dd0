mod answers;
mod ids;
mod question;
mod result;
mod user;

pub use answers::AnswerSheet;
pub use ids::{ParseIdError, QuestionId, UserId};
pub use question::{
    OptionLetter, OptionLetterError, Question, QuizOverview, SECONDS_PER_QUESTION,
};
pub use result::{QuizResult, ResultSummary, ReviewOptions, ReviewRecord};
pub use user::{Dashboard, DashboardStats, User};
