mod answers;
mod dashboard;
mod feedback;
mod guard;
mod home;
mod login;
mod quiz;
mod quiz_confirm;
mod register;
mod results;
mod state;
mod upload;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use answers::AnswersView;
pub use dashboard::DashboardView;
pub use feedback::{Feedback, Flash, FlashKind, FlashMessage, LoadingOverlay, use_feedback_provider};
pub use guard::leave_on_error;
pub use home::HomeView;
pub use login::LoginView;
pub use quiz::QuizView;
pub use quiz_confirm::QuizConfirmView;
pub use register::RegisterView;
pub use results::ResultsView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use upload::UploadView;
