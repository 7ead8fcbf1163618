//! Lightweight references to related records carried by domain models.

use std::collections::HashMap;

use crate::model::api::NamedRefDto;

/// Id and display name (or title) of a related record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRef {
    pub id: i32,
    pub name: String,
}

impl NamedRef {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn into_dto(self) -> NamedRefDto {
        NamedRefDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Id and username of a related user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub id: i32,
    pub username: String,
}

/// Usernames keyed by user id, fetched in one query and used to resolve user references.
#[derive(Debug, Clone, Default)]
pub struct Usernames(HashMap<i32, String>);

impl Usernames {
    pub fn new(map: HashMap<i32, String>) -> Self {
        Self(map)
    }

    /// Resolves an optional user id. Ids of deleted users resolve to `None`.
    pub fn get(&self, id: Option<i32>) -> Option<UserRef> {
        let id = id?;
        self.0.get(&id).map(|username| UserRef {
            id,
            username: username.clone(),
        })
    }

    /// Resolves a list of ids, sorted by username.
    pub fn all<I: IntoIterator<Item = i32>>(&self, ids: I) -> Vec<UserRef> {
        let mut users: Vec<UserRef> = ids.into_iter().filter_map(|id| self.get(Some(id))).collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        users
    }
}

/// Collects usernames of a list of user references.
pub fn usernames(users: Vec<UserRef>) -> Vec<String> {
    users.into_iter().map(|user| user.username).collect()
}

/// Converts a list of references into DTOs.
pub fn named_dtos(refs: Vec<NamedRef>) -> Vec<NamedRefDto> {
    refs.into_iter().map(NamedRef::into_dto).collect()
}
