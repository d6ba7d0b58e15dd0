use quiz_core::model::Dashboard;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub email: String,
    pub is_admin: bool,
    pub question_count: u32,
    pub quiz_attempts: u32,
}

impl DashboardVm {
    #[must_use]
    pub fn has_questions(&self) -> bool {
        self.question_count > 0
    }
}

impl From<Dashboard> for DashboardVm {
    fn from(dashboard: Dashboard) -> Self {
        Self {
            email: dashboard.user.email,
            is_admin: dashboard.user.is_admin,
            question_count: dashboard.stats.question_count,
            quiz_attempts: dashboard.stats.quiz_attempts,
        }
    }
}
