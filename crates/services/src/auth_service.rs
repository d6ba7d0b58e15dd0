use std::sync::Arc;

use quiz_core::model::{Dashboard, User};
use quiz_core::validation::Credentials;

use crate::api::QuizBackend;
use crate::error::QuizError;

/// Login, registration and the page guards built on `GET /api/user`.
#[derive(Clone)]
pub struct AuthService {
    backend: Arc<dyn QuizBackend>,
}

impl AuthService {
    #[must_use]
    pub fn new(backend: Arc<dyn QuizBackend>) -> Self {
        Self { backend }
    }

    /// Create an account. The form is validated before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Validation` for bad input and `QuizError::Api` if
    /// the backend refuses the registration.
    pub async fn register(&self, email: &str, password: &str) -> Result<String, QuizError> {
        let credentials = Credentials::new(email.trim(), password);
        credentials.validate()?;
        let message = self.backend.register(&credentials).await?;
        log::info!("registered {}", credentials.email);
        Ok(message)
    }

    /// # Errors
    ///
    /// Returns `QuizError::Validation` for bad input and `QuizError::Api` for
    /// rejected credentials or transport failures.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, QuizError> {
        let credentials = Credentials::new(email.trim(), password);
        credentials.validate()?;
        let user = self.backend.login(&credentials).await?;
        log::info!("logged in as {}", user.email);
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns `QuizError::Api` if the backend call fails.
    pub async fn logout(&self) -> Result<(), QuizError> {
        self.backend.logout().await?;
        Ok(())
    }

    /// The logged-in user.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AuthRequired` on any failure of the check.
    pub async fn require_user(&self) -> Result<User, QuizError> {
        self.backend.current_user().await.map_err(|err| {
            log::debug!("auth check failed: {err}");
            QuizError::AuthRequired
        })
    }

    /// # Errors
    ///
    /// Returns `QuizError::AuthRequired` when logged out and
    /// `QuizError::AdminRequired` for non-admin users.
    pub async fn require_admin(&self) -> Result<User, QuizError> {
        let user = self.require_user().await?;
        if !user.is_admin {
            return Err(QuizError::AdminRequired);
        }
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns `QuizError::AuthRequired` when the session has expired and
    /// `QuizError::Api` for other failures.
    pub async fn dashboard(&self) -> Result<Dashboard, QuizError> {
        self.backend.dashboard().await.map_err(|err| {
            if err.is_unauthorized() {
                QuizError::AuthRequired
            } else {
                QuizError::Api(err)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::api::StubBackend;

    use super::*;

    fn service() -> (AuthService, StubBackend) {
        let stub = StubBackend::new();
        stub.add_user("admin@example.com", "admin123", true);
        stub.add_user("user@example.com", "secret1", false);
        (AuthService::new(Arc::new(stub.clone())), stub)
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_backend() {
        let (auth, stub) = service();
        stub.set_offline(true);

        let err = auth.login("not-an-email", "123").await.unwrap_err();
        let QuizError::Validation(errors) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(
            errors.messages(),
            [
                "email must be a valid email",
                "password must be at least 6 characters"
            ]
        );
    }

    #[tokio::test]
    async fn login_then_guards_pass() {
        let (auth, _) = service();
        let user = auth.login("admin@example.com", "admin123").await.unwrap();
        assert!(user.is_admin);
        assert_eq!(auth.require_admin().await.unwrap().email, user.email);
    }

    #[tokio::test]
    async fn wrong_password_surfaces_backend_message() {
        let (auth, _) = service();
        let err = auth.login("admin@example.com", "wrong-pass").await.unwrap_err();
        assert!(matches!(err, QuizError::Api(_)));
    }

    #[tokio::test]
    async fn guards_reject_anonymous_and_non_admin() {
        let (auth, _) = service();
        assert!(matches!(
            auth.require_user().await,
            Err(QuizError::AuthRequired)
        ));
        assert!(matches!(
            auth.dashboard().await,
            Err(QuizError::AuthRequired)
        ));

        auth.login("user@example.com", "secret1").await.unwrap();
        assert!(matches!(
            auth.require_admin().await,
            Err(QuizError::AdminRequired)
        ));

        auth.logout().await.unwrap();
        assert!(matches!(
            auth.require_user().await,
            Err(QuizError::AuthRequired)
        ));
    }
}
