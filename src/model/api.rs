use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Reference to a related record, either by primary key or by name.
///
/// Users are referenced by username. Name matches are case-insensitive.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum Lookup {
    Id(i32),
    Name(String),
}

impl Lookup {
    /// Interprets a query-string value: digits are an id, anything else a name.
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<i32>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Name(value.trim().to_string()),
        }
    }
}

impl std::fmt::Display for Lookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Id and display name of a related record.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct NamedRefDto {
    pub id: i32,
    pub name: String,
}

/// Deserializes a present field into `Some`, including an explicit `null`.
///
/// Combined with `#[serde(default)]` on an `Option<Option<T>>` this distinguishes an
/// absent field (`None`) from one cleared with `null` (`Some(None)`).
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "deserialize_some")]
        head: Option<Option<Lookup>>,
    }

    #[test]
    fn lookup_accepts_id_or_name() {
        let id: Lookup = serde_json::from_str("7").unwrap();
        let name: Lookup = serde_json::from_str("\"Strathmore\"").unwrap();

        assert_eq!(id, Lookup::Id(7));
        assert_eq!(name, Lookup::Name("Strathmore".to_string()));
    }

    #[test]
    fn lookup_parse_treats_digits_as_id() {
        assert_eq!(Lookup::parse("42"), Lookup::Id(42));
        assert_eq!(Lookup::parse(" Nairobi "), Lookup::Name("Nairobi".to_string()));
    }

    #[test]
    fn patch_distinguishes_absent_from_null() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        let cleared: Patch = serde_json::from_str("{\"head\": null}").unwrap();
        let set: Patch = serde_json::from_str("{\"head\": \"alice\"}").unwrap();

        assert_eq!(absent.head, None);
        assert_eq!(cleared.head, Some(None));
        assert_eq!(set.head, Some(Some(Lookup::Name("alice".to_string()))));
    }
}
