//! Validated submission flow
//!
//! A [`FormController`] runs the schema locally, issues exactly one request
//! when the form is valid, and tracks the idle/pending/error state the user
//! sees. A second submit while one is pending is refused.

use std::future::Future;
use std::sync::Mutex;

use super::{FieldErrors, Schema};
use crate::error::{Error, Result};

/// Submission state of a form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Pending,
    Failed(String),
    Succeeded,
}

/// Outcome of a submit attempt that did not hit a request error
#[derive(Debug)]
pub enum Submission<T> {
    /// The schema failed; nothing was sent
    Rejected(FieldErrors),
    /// The request was sent and succeeded
    Completed(T),
}

/// Drives one form through validation and submission
#[derive(Debug, Default)]
pub struct FormController {
    state: Mutex<SubmitState>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmitState {
        self.lock().clone()
    }

    pub fn is_pending(&self) -> bool {
        *self.lock() == SubmitState::Pending
    }

    /// Validate `form` and, if valid, run `send` exactly once.
    ///
    /// Request failures move the controller to [`SubmitState::Failed`] and
    /// are returned to the caller; the form can be submitted again.
    pub async fn submit<F, T, S, Fut>(&self, form: &F, send: S) -> Result<Submission<T>>
    where
        F: Schema,
        S: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if self.is_pending() {
            return Err(Error::SubmissionPending);
        }

        if let Err(errors) = form.check() {
            log::debug!("Form rejected locally: {} field error(s)", errors.iter().count());
            return Ok(Submission::Rejected(errors));
        }

        self.begin()?;
        match send().await {
            Ok(value) => {
                self.set(SubmitState::Succeeded);
                Ok(Submission::Completed(value))
            }
            Err(err) => {
                self.set(SubmitState::Failed(failure_message(&err)));
                Err(err)
            }
        }
    }

    fn begin(&self) -> Result<()> {
        let mut state = self.lock();
        if *state == SubmitState::Pending {
            return Err(Error::SubmissionPending);
        }
        *state = SubmitState::Pending;
        Ok(())
    }

    fn set(&self, next: SubmitState) {
        *self.lock() = next;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SubmitState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Message shown next to a form whose request failed
pub fn failure_message(err: &Error) -> String {
    match err {
        Error::Api(api) => api.user_message(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::JobBuilder;
    use crate::client::{ApplicationsApi, AuthApi, MockJobBoardClient};
    use crate::error::{ApiError, GENERIC_FAILURE};
    use crate::form::{ApplicationForm, LoginForm};

    fn application() -> ApplicationForm {
        ApplicationForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            cv_link: String::new(),
            cover_letter: "c".repeat(80),
        }
    }

    #[tokio::test]
    async fn test_invalid_form_makes_no_call() {
        let mock = MockJobBoardClient::new();
        let controller = FormController::new();
        let form = LoginForm::default();

        let outcome = controller
            .submit(&form, || async {
                mock.login(&form.to_request()).await
            })
            .await
            .unwrap();

        match outcome {
            Submission::Rejected(errors) => {
                assert_eq!(errors.get("username"), Some("Username is required"));
                assert_eq!(errors.get("password"), Some("Password is required"));
            }
            Submission::Completed(_) => panic!("Expected rejection"),
        }
        assert_eq!(mock.call_counts().await.total(), 0);
        assert_eq!(controller.state(), SubmitState::Idle);
    }

    #[tokio::test]
    async fn test_short_cover_letter_blocked_locally() {
        let mock = MockJobBoardClient::new();
        let controller = FormController::new();
        let form = ApplicationForm {
            cover_letter: "too short".to_string(),
            ..application()
        };

        let outcome = controller
            .submit(&form, || async {
                mock.submit_application(&form.to_new_application("j1")).await
            })
            .await
            .unwrap();

        assert!(matches!(outcome, Submission::Rejected(ref e) if e.get("cover_letter").is_some()));
        assert_eq!(mock.call_counts().await.submit_application, 0);
    }

    #[tokio::test]
    async fn test_valid_application_sends_exactly_once() {
        let mock = MockJobBoardClient::new().with_jobs(vec![JobBuilder::new("j1").build()]);
        let controller = FormController::new();
        let form = application();

        let outcome = controller
            .submit(&form, || async {
                mock.submit_application(&form.to_new_application("j1")).await
            })
            .await
            .unwrap();

        assert!(matches!(outcome, Submission::Completed(())));
        assert_eq!(controller.state(), SubmitState::Succeeded);
        assert_eq!(mock.call_counts().await.submit_application, 1);
        assert_eq!(mock.sent().await.applications[0].job_id, "j1");
    }

    #[tokio::test]
    async fn test_state_is_pending_while_request_outstanding() {
        let controller = FormController::new();
        let form = application();

        controller
            .submit(&form, || async {
                assert!(controller.is_pending());
                // A second submit while pending is refused without sending
                let second = controller
                    .submit(&form, || async { Ok::<_, Error>(()) })
                    .await;
                assert!(matches!(second, Err(Error::SubmissionPending)));
                Ok(())
            })
            .await
            .unwrap();

        assert_eq!(controller.state(), SubmitState::Succeeded);
    }

    #[tokio::test]
    async fn test_failure_sets_error_state_and_allows_retry() {
        let mock = MockJobBoardClient::new().with_error(ApiError::BadRequest("nope".to_string()));
        let controller = FormController::new();
        let form = application();

        let err = controller
            .submit(&form, || async {
                mock.submit_application(&form.to_new_application("j1")).await
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::BadRequest(_))));
        assert_eq!(
            controller.state(),
            SubmitState::Failed(GENERIC_FAILURE.to_string())
        );

        // The error was consumed; resubmitting works
        let outcome = controller
            .submit(&form, || async {
                mock.submit_application(&form.to_new_application("j1")).await
            })
            .await
            .unwrap();
        assert!(matches!(outcome, Submission::Completed(())));
        assert_eq!(mock.call_counts().await.submit_application, 2);
    }
}
