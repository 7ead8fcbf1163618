use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, BearerToken, Permission},
};
use test_utils::{builder::TestBuilder, factory};

mod authenticate;
mod require;

/// Asserts that `result` is a 403 whose message names `level`.
fn assert_denied<T: std::fmt::Debug>(result: Result<T, AppError>, level: &str) {
    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(_, message))) => {
            assert!(message.contains(level), "unexpected message: {}", message)
        }
        other => panic!("expected AccessDenied, got {:?}", other),
    }
}
