//! Content records exchanged across the API boundary.
//!
//! All records are read-only from the client's perspective. Every field is
//! optional on the wire (`#[serde(default)]`) because documents are authored
//! outside this system and may be partial.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// A social network link shown next to the profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SocialLink {
    pub icon: String,
    pub link: String,
}

/// The portfolio owner. At most one is meaningful.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub role: String,
    /// Biography text.
    pub about: String,
    pub socials: Vec<SocialLink>,
    /// Résumé reference (URL or path).
    pub cv: String,
    /// File name offered when downloading the résumé.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Service {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// A gallery project. The extended fields are not guaranteed present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub title: String,
    pub description: String,
    /// Image reference (URL or public path).
    pub image: String,
    /// External link (live demo, article).
    pub link: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tech: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// Repository link.
    #[serde(skip_serializing_if = "Option::is_none", alias = "githubRepo")]
    pub github: Option<String>,
}

impl Project {
    /// Whether this record answers to `key`, either by document id or slug.
    pub fn matches(&self, key: &str) -> bool {
        self.id == key || self.slug.as_deref() == Some(key)
    }
}

// ---------------------------------------------------------------------------
// Education / experience
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Education {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub school: String,
    pub degree: String,
    pub period: String,
    pub location: String,
    pub details: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Experience {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    pub details: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_decodes_partial_document() {
        let json = r#"{"_id":"abc","title":"Bus reservation system","__v":0}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "abc");
        assert_eq!(project.title, "Bus reservation system");
        assert!(project.tech.is_empty());
        assert!(project.long_description.is_none());
    }

    #[test]
    fn project_extended_fields_use_camel_case() {
        let json = r#"{
            "_id": "bus",
            "longDescription": "Routes and fares.",
            "githubRepo": "https://github.com/example/bus",
            "tech": ["React"],
            "features": ["Seat selection"]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.long_description.as_deref(), Some("Routes and fares."));
        assert_eq!(project.github.as_deref(), Some("https://github.com/example/bus"));

        let out = serde_json::to_value(&project).unwrap();
        assert_eq!(out["longDescription"], "Routes and fares.");
        assert_eq!(out["_id"], "bus");
    }

    #[test]
    fn project_matches_id_or_slug() {
        let project = Project {
            id: "train-reservation".into(),
            slug: Some("train-reservation-system".into()),
            ..Default::default()
        };
        assert!(project.matches("train-reservation"));
        assert!(project.matches("train-reservation-system"));
        assert!(!project.matches("train"));
    }

    #[test]
    fn profile_accepts_plain_id_alias() {
        let profile: Profile =
            serde_json::from_str(r##"{"id":"p1","name":"Jo","socials":[{"icon":"x","link":"#"}]}"##)
                .unwrap();
        assert_eq!(profile.id, "p1");
        assert_eq!(profile.socials.len(), 1);
        assert!(profile.cv.is_empty());
    }
}
