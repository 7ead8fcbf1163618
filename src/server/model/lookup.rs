//! Resolution of query-string lookups (`?id=` or `?name=`).

use crate::server::error::AppError;

/// What a lookup request asked for once its parameters are validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupTarget {
    Id(i32),
    Name(String),
}

impl LookupTarget {
    /// Validates lookup parameters, preferring `id` when both are given.
    ///
    /// `field` names the name-like parameter in the error message (`name` or `username`).
    pub fn from_query(id: Option<i32>, name: Option<String>, field: &str) -> Result<Self, AppError> {
        match (id, name.filter(|name| !name.trim().is_empty())) {
            (Some(id), _) => Ok(Self::Id(id)),
            (None, Some(name)) => Ok(Self::Name(name.trim().to_string())),
            (None, None) => Err(AppError::BadRequest(format!(
                "You must provide either the id or {} parameter for the lookup.",
                field
            ))),
        }
    }
}

/// Reduces the matches of a name lookup to at most one record.
///
/// # Returns
/// - `Ok(None)` - Nothing matched
/// - `Ok(Some(T))` - Exactly one match
/// - `Err(AppError::BadRequest)` - The name is ambiguous
pub fn single_match<T>(mut matches: Vec<T>, kind: &str, name: &str) -> Result<Option<T>, AppError> {
    match matches.len() {
        0 => Ok(None),
        1 => Ok(matches.pop()),
        count => Err(AppError::BadRequest(format!(
            "{} {}s named '{}' exist; use the id or narrow the lookup.",
            count, kind, name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_id_or_name() {
        let result = LookupTarget::from_query(None, Some("  ".to_string()), "name");

        match result {
            Err(AppError::BadRequest(msg)) => assert_eq!(
                msg,
                "You must provide either the id or name parameter for the lookup."
            ),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn prefers_id() {
        let target = LookupTarget::from_query(Some(3), Some("x".to_string()), "name").unwrap();

        assert_eq!(target, LookupTarget::Id(3));
    }

    #[test]
    fn rejects_ambiguous_names() {
        assert!(single_match(vec![1, 2], "course", "Maths").is_err());
        assert_eq!(single_match(vec![1], "course", "Maths").unwrap(), Some(1));
        assert_eq!(single_match(Vec::<i32>::new(), "course", "Maths").unwrap(), None);
    }
}
