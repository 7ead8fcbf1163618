use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::{Lookup, NamedRefDto};

/// Free-text profile of a club: description, whereabouts and social links.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default, PartialEq, Eq)]
pub struct ClubProfileDto {
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub tiktok: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub youtube: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ClubDto {
    pub id: i32,
    pub name: String,
    pub institution: Option<NamedRefDto>,
    #[serde(flatten)]
    pub profile: ClubProfileDto,
    pub created_by: Option<String>,
    pub admins: Vec<String>,
    pub members: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateClubDto {
    pub name: String,
    #[serde(default)]
    pub institution: Option<Lookup>,
    #[serde(flatten)]
    pub profile: ClubProfileDto,
    #[serde(default)]
    pub admins: Vec<Lookup>,
    #[serde(default)]
    pub members: Vec<Lookup>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateClubDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub admins: Vec<Lookup>,
    #[serde(default)]
    pub remove_admins: Vec<Lookup>,
    #[serde(default)]
    pub members: Vec<Lookup>,
    #[serde(default)]
    pub remove_members: Vec<Lookup>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct ClubQuery {
    /// Institution id or name
    pub institution: Option<String>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct ClubLookupQuery {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub institution: Option<String>,
}
