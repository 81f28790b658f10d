//! Resume data model: the single input every portfolio theme renders from.
//!
//! The shape is produced by the AI parser and edited by the client, so
//! deserialisation is deliberately forgiving: missing keys and `null` become
//! defaults, and scalar values in text fields are kept as their text form.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeData {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(deserialize_with = "lenient::string")]
    pub website: String,
    #[serde(deserialize_with = "lenient::string")]
    pub linkedin: String,
    #[serde(deserialize_with = "lenient::string")]
    pub github: String,
    #[serde(deserialize_with = "lenient::string")]
    pub summary: String,
    #[serde(deserialize_with = "lenient::list")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "lenient::list")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    #[serde(deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(deserialize_with = "lenient::string")]
    pub role: String,
    #[serde(deserialize_with = "lenient::string")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub end_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    #[serde(deserialize_with = "lenient::string")]
    pub institution: String,
    #[serde(deserialize_with = "lenient::string")]
    pub degree: String,
    #[serde(deserialize_with = "lenient::string")]
    pub field: String,
    #[serde(deserialize_with = "lenient::string")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub technologies: Vec<String>,
}

/// The six contact fields, in the order every theme lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Website,
    LinkedIn,
    GitHub,
}

impl ContactKind {
    pub fn label(self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
            ContactKind::Location => "Location",
            ContactKind::Website => "Website",
            ContactKind::LinkedIn => "LinkedIn",
            ContactKind::GitHub => "GitHub",
        }
    }

    /// Link target for a contact value. Location is plain text.
    /// URLs are passed through untouched; callers escape, nothing validates schemes.
    pub fn href(self, value: &str) -> Option<String> {
        match self {
            ContactKind::Email => Some(format!("mailto:{value}")),
            ContactKind::Phone => Some(format!("tel:{value}")),
            ContactKind::Location => None,
            ContactKind::Website | ContactKind::LinkedIn | ContactKind::GitHub => {
                Some(value.to_string())
            }
        }
    }

    /// Whether the link leaves the page (opens in a new tab).
    pub fn is_external(self) -> bool {
        matches!(
            self,
            ContactKind::Website | ContactKind::LinkedIn | ContactKind::GitHub
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact<'a> {
    pub kind: ContactKind,
    pub value: &'a str,
}

impl ResumeData {
    /// Coerces loosely-typed JSON (LLM output, client edits) into a fully
    /// defaulted `ResumeData`. Only a wrong container shape is an error.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value)
    }

    /// Non-empty contact fields in display order.
    pub fn contacts(&self) -> impl Iterator<Item = Contact<'_>> {
        [
            (ContactKind::Email, self.email.as_str()),
            (ContactKind::Phone, self.phone.as_str()),
            (ContactKind::Location, self.location.as_str()),
            (ContactKind::Website, self.website.as_str()),
            (ContactKind::LinkedIn, self.linkedin.as_str()),
            (ContactKind::GitHub, self.github.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(kind, value)| Contact { kind, value })
    }

    pub fn has_contact(&self) -> bool {
        self.contacts().next().is_some()
    }

    /// Whether anything belongs in the page header.
    pub fn has_header(&self) -> bool {
        !self.name.is_empty() || !self.title.is_empty() || self.has_contact()
    }
}

/// Forgiving field deserialisers used by the resume model.
mod lenient {
    use super::*;
    use serde::de::Error;

    fn scalar_text(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(String::new()),
            other => {
                let kind = json_kind(&other);
                scalar_text(other)
                    .ok_or_else(|| D::Error::custom(format!("expected a string, found {kind}")))
            }
        }
    }

    pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => items
                .into_iter()
                .filter(|item| !item.is_null())
                .map(|item| {
                    let kind = json_kind(&item);
                    scalar_text(item).ok_or_else(|| {
                        D::Error::custom(format!("expected a list of strings, found {kind} item"))
                    })
                })
                .collect(),
            other => Err(D::Error::custom(format!(
                "expected a list, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: serde::de::DeserializeOwned,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => items
                .into_iter()
                .filter(|item| !item.is_null())
                .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
                .collect(),
            other => Err(D::Error::custom(format!(
                "expected a list, found {}",
                json_kind(&other)
            ))),
        }
    }

    fn json_kind(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let data = ResumeData::from_json(json!({ "name": "Jane Doe" })).unwrap();
        assert_eq!(data.name, "Jane Doe");
        assert_eq!(data.title, "");
        assert!(data.experience.is_empty());
        assert!(data.skills.is_empty());
    }

    #[test]
    fn test_null_document_is_empty_resume() {
        assert_eq!(ResumeData::from_json(Value::Null).unwrap(), ResumeData::default());
    }

    #[test]
    fn test_nulls_and_scalars_are_coerced() {
        let data = ResumeData::from_json(json!({
            "name": null,
            "phone": 5551234,
            "experience": [
                { "company": "Acme", "startDate": 2020, "endDate": null }
            ],
            "skills": ["Rust", null, 42],
            "projects": null
        }))
        .unwrap();

        assert_eq!(data.name, "");
        assert_eq!(data.phone, "5551234");
        assert_eq!(data.experience[0].start_date, "2020");
        assert_eq!(data.experience[0].end_date, "");
        assert_eq!(data.experience[0].role, "");
        assert_eq!(data.skills, vec!["Rust", "42"]);
        assert!(data.projects.is_empty());
    }

    #[test]
    fn test_wrong_container_shape_is_rejected() {
        assert!(ResumeData::from_json(json!({ "experience": "Acme" })).is_err());
        assert!(ResumeData::from_json(json!({ "skills": { "a": 1 } })).is_err());
        assert!(ResumeData::from_json(json!({ "name": ["a"] })).is_err());
    }

    #[test]
    fn test_camel_case_round_trip_names() {
        let data = ResumeData {
            education: vec![Education {
                start_date: "2016".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["education"][0]["startDate"], "2016");
        assert!(value.get("linkedin").is_some());
    }

    #[test]
    fn test_order_is_preserved() {
        let data = ResumeData::from_json(json!({
            "skills": ["Go", "Rust", "Go"],
            "experience": [{ "company": "B" }, { "company": "A" }]
        }))
        .unwrap();
        assert_eq!(data.skills, vec!["Go", "Rust", "Go"]);
        assert_eq!(data.experience[0].company, "B");
        assert_eq!(data.experience[1].company, "A");
    }

    #[test]
    fn test_contacts_skip_empty_and_keep_order() {
        let data = ResumeData {
            github: "https://github.com/jane".into(),
            email: "jane@x.com".into(),
            location: "Berlin".into(),
            ..Default::default()
        };
        let kinds: Vec<_> = data.contacts().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ContactKind::Email, ContactKind::Location, ContactKind::GitHub]
        );
        assert!(data.has_contact());
        assert!(data.has_header());
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let data = ResumeData {
            title: "   ".into(),
            ..Default::default()
        };
        assert!(data.has_header());
        assert!(!ResumeData::default().has_header());
    }

    #[test]
    fn test_contact_hrefs() {
        assert_eq!(
            ContactKind::Email.href("a@b.com").as_deref(),
            Some("mailto:a@b.com")
        );
        assert_eq!(ContactKind::Phone.href("+1 555").as_deref(), Some("tel:+1 555"));
        assert_eq!(ContactKind::Location.href("Paris"), None);
        assert!(ContactKind::GitHub.is_external());
        assert!(!ContactKind::Email.is_external());
    }
}
