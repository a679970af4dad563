use serde::{Deserialize, Deserializer, Serialize};

/// A prospective collaborator being ranked for a requesting user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    #[serde(
        rename = "displayName",
        alias = "display_name",
        alias = "full_name",
        default,
        deserialize_with = "null_as_default"
    )]
    pub display_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Instruments and skills. Shown to callers, never scored.
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
}

impl CandidateProfile {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            genres: Vec::new(),
            location: None,
            skills: Vec::new(),
        }
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }
}

/// Taste profile of the user initiating a collaborator search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestingUserProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl RequestingUserProfile {
    pub fn new<I, S>(genres: I, location: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            genres: genres.into_iter().map(Into::into).collect(),
            location: location.map(str::to_string),
        }
    }
}

/// The backend returns `null` for unset array and text columns
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
