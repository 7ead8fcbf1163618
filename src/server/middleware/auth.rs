//! Bearer-token authentication and object-level permission checks.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{admin::AdminRepository, document::DocumentRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::admin::AdminScope,
};

/// Raw token taken from the `Authorization` header.
///
/// Both `Bearer <token>` and `Token <token>` are accepted. Requests without one are
/// rejected with a 401 before the handler runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl BearerToken {
    /// Parses the value of an `Authorization` header.
    pub fn parse(header: &str) -> Option<Self> {
        let (scheme, token) = header.trim().split_once(' ')?;
        let token = token.trim();

        let known_scheme =
            scheme.eq_ignore_ascii_case("bearer") || scheme.eq_ignore_ascii_case("token");
        if !known_scheme || token.is_empty() {
            return None;
        }

        Some(Self(token.to_string()))
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(BearerToken::parse)
            .ok_or_else(|| AuthError::MissingToken.into())
    }
}

pub enum Permission {
    InstitutionAdmin(i32),
    SchoolAdmin(i32),
    DepartmentAdmin(i32),
    ClubAdmin(i32),
    /// Caller uploaded the document.
    DocumentOwner(i32),
    /// Caller owns the profile, or administers the profile's institution.
    SelfOrInstitutionAdmin {
        user_id: i32,
        institution_id: Option<i32>,
    },
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    token: &'a BearerToken,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, token: &'a BearerToken) -> Self {
        Self { db, token }
    }

    /// Resolves the token to its user.
    ///
    /// # Returns
    /// - `Ok(User)` - The token's owner
    /// - `Err(AuthError::InvalidToken)` - No account holds the token
    pub async fn authenticate(&self) -> Result<entity::user::Model, AppError> {
        UserRepository::new(self.db)
            .find_by_token(&self.token.0)
            .await?
            .ok_or_else(|| AuthError::InvalidToken.into())
    }

    /// Authenticates the caller and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding all permissions
    /// - `Err(AuthError::InvalidToken)` - Unknown token
    /// - `Err(AuthError::AccessDenied)` - First permission the user lacks
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user = self.authenticate().await?;

        self.authorize(&user, permissions).await?;

        Ok(user)
    }

    /// Checks every permission in order for an already authenticated user.
    ///
    /// Used when the permission depends on the caller, such as creating a profile for
    /// oneself or on behalf of another user.
    pub async fn authorize(
        &self,
        user: &entity::user::Model,
        permissions: &[Permission],
    ) -> Result<(), AppError> {
        for permission in permissions {
            match permission {
                Permission::InstitutionAdmin(id) => {
                    self.require_admin(user, AdminScope::Institution(*id)).await?
                }
                Permission::SchoolAdmin(id) => {
                    self.require_admin(user, AdminScope::School(*id)).await?
                }
                Permission::DepartmentAdmin(id) => {
                    self.require_admin(user, AdminScope::Department(*id)).await?
                }
                Permission::ClubAdmin(id) => {
                    self.require_admin(user, AdminScope::ClubSociety(*id)).await?
                }
                Permission::DocumentOwner(id) => {
                    let document = DocumentRepository::new(self.db).find_by_id(*id).await?;
                    let owns = document.is_some_and(|document| document.uploaded_by_id == Some(user.id));

                    if !owns {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "You must be the uploader of this document to perform this action."
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::SelfOrInstitutionAdmin {
                    user_id,
                    institution_id,
                } => {
                    if *user_id == user.id {
                        continue;
                    }

                    let is_admin = match institution_id {
                        Some(institution_id) => {
                            AdminRepository::new(self.db)
                                .is_admin(AdminScope::Institution(*institution_id), user.id)
                                .await?
                        }
                        None => false,
                    };

                    if !is_admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "You must own this profile or be an admin of its institution to perform this action."
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(())
    }

    async fn require_admin(
        &self,
        user: &entity::user::Model,
        scope: AdminScope,
    ) -> Result<(), AppError> {
        if AdminRepository::new(self.db).is_admin(scope, user.id).await? {
            return Ok(());
        }

        Err(AuthError::AccessDenied(
            user.id,
            format!(
                "You must be an admin of this {} to perform this action.",
                scope.level()
            ),
        )
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_schemes() {
        assert_eq!(
            BearerToken::parse("Bearer abc123"),
            Some(BearerToken("abc123".to_string()))
        );
        assert_eq!(
            BearerToken::parse("Token abc123"),
            Some(BearerToken("abc123".to_string()))
        );
    }

    #[test]
    fn rejects_other_schemes_and_empty_tokens() {
        assert_eq!(BearerToken::parse("Basic dXNlcjpwYXNz"), None);
        assert_eq!(BearerToken::parse("Bearer "), None);
        assert_eq!(BearerToken::parse("abc123"), None);
    }
}
