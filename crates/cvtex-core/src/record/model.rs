use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

/// data.json schema - one person's CV
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Record {
    #[serde(deserialize_with = "text")]
    pub name_first: String,
    #[serde(deserialize_with = "text")]
    pub name_last: String,
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub github_url: String,
    #[serde(deserialize_with = "text")]
    pub github_label: String,
    #[serde(deserialize_with = "text")]
    pub website_url: String,
    #[serde(deserialize_with = "text")]
    pub website_label: String,
    #[serde(deserialize_with = "text")]
    pub email: String,
    #[serde(deserialize_with = "text")]
    pub headshot: String,
    #[serde(deserialize_with = "text")]
    pub address_line1: String,
    #[serde(deserialize_with = "text")]
    pub address_city: String,
    #[serde(deserialize_with = "text")]
    pub phone: String,
    #[serde(deserialize_with = "text")]
    pub country: String,
    #[serde(deserialize_with = "text")]
    pub dob: String,
    #[serde(deserialize_with = "text")]
    pub linkedin_url: String,
    #[serde(deserialize_with = "text")]
    pub linkedin_label: String,
    #[serde(deserialize_with = "text")]
    pub profile_summary: String,
    pub tech_logos: Vec<Logo>,
    pub skills: Vec<SkillGroup>,
    #[serde(deserialize_with = "texts")]
    pub languages: Vec<String>,
    pub employment: Vec<Employment>,
    pub education: Vec<Education>,
}

/// Image shown in the technology strip
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Logo {
    #[serde(deserialize_with = "text")]
    pub file: String,
    /// LaTeX length such as `14pt`, passed through verbatim
    #[serde(deserialize_with = "text")]
    pub height: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SkillGroup {
    #[serde(deserialize_with = "text")]
    pub category: String,
    #[serde(deserialize_with = "texts")]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Employment {
    #[serde(deserialize_with = "text")]
    pub role: String,
    #[serde(deserialize_with = "text")]
    pub location: String,
    #[serde(deserialize_with = "text")]
    pub period: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Education {
    #[serde(deserialize_with = "text")]
    pub degree: String,
    #[serde(deserialize_with = "text")]
    pub institution: String,
    #[serde(deserialize_with = "text")]
    pub period: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub description: Option<String>,
}

/// Common shape of employment and education items, as rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub period: &'a str,
    pub description: &'a str,
}

impl Employment {
    pub fn as_entry(&self) -> TimelineEntry<'_> {
        TimelineEntry {
            title: &self.role,
            subtitle: &self.location,
            period: &self.period,
            description: self.description.as_deref().unwrap_or_default(),
        }
    }
}

impl Education {
    pub fn as_entry(&self) -> TimelineEntry<'_> {
        TimelineEntry {
            title: &self.degree,
            subtitle: &self.institution,
            period: &self.period,
            description: self.description.as_deref().unwrap_or_default(),
        }
    }
}

/// A JSON scalar read as text (`5551234` and `"5551234"` are both accepted)
struct Text(String);

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TextVisitor;

        impl<'de> Visitor<'de> for TextVisitor {
            type Value = Text;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, number, boolean or null")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Text, E> {
                Ok(Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Text, E> {
                Ok(Text(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Text, E> {
                Ok(Text(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Text, E> {
                Ok(Text(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Text, E> {
                Ok(Text(float_text(v)))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Text, E> {
                Ok(Text(v.to_string()))
            }

            // `null` renders as nothing
            fn visit_unit<E: de::Error>(self) -> Result<Text, E> {
                Ok(Text(String::new()))
            }

            fn visit_none<E: de::Error>(self) -> Result<Text, E> {
                Ok(Text(String::new()))
            }

            fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Text, D::Error> {
                Text::deserialize(deserializer)
            }
        }

        deserializer.deserialize_any(TextVisitor)
    }
}

/// Whole floats keep their fraction (`1.0` stays `1.0`, not `1`)
fn float_text(v: f64) -> String {
    let text = v.to_string();
    if v.is_finite() && !text.contains(['.', 'e', 'E']) {
        format!("{text}.0")
    } else {
        text
    }
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Text::deserialize(deserializer).map(|t| t.0)
}

fn texts<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Vec::<Text>::deserialize(deserializer).map(|v| v.into_iter().map(|t| t.0).collect())
}

fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Option::<Text>::deserialize(deserializer).map(|t| t.map(|t| t.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars_are_coerced_to_text() {
        let logo: Logo = serde_json::from_value(json!({"file": "rust.png", "height": 14})).unwrap();
        assert_eq!(logo.height, "14");

        let group: SkillGroup =
            serde_json::from_value(json!({"category": "Years", "items": [3, 2.5, true]})).unwrap();
        assert_eq!(group.items, vec!["3", "2.5", "true"]);
    }

    #[test]
    fn test_description_is_optional() {
        let job: Employment = serde_json::from_value(json!({
            "role": "Engineer",
            "location": "Acme",
            "period": "2020 - 2024"
        }))
        .unwrap();
        assert_eq!(job.description, None);
        assert_eq!(job.as_entry().description, "");

        let school: Education = serde_json::from_value(json!({
            "degree": "BSc",
            "institution": "TU",
            "period": "2016",
            "description": null
        }))
        .unwrap();
        assert_eq!(school.as_entry().description, "");
    }

    #[test]
    fn test_timeline_entry_field_mapping() {
        let school: Education = serde_json::from_value(json!({
            "degree": "MSc Physics",
            "institution": "ETH",
            "period": "2014 - 2016",
            "description": "Thesis"
        }))
        .unwrap();
        let entry = school.as_entry();
        assert_eq!(entry.title, "MSc Physics");
        assert_eq!(entry.subtitle, "ETH");
        assert_eq!(entry.period, "2014 - 2016");
        assert_eq!(entry.description, "Thesis");
    }

    #[test]
    fn test_required_nested_field_is_enforced() {
        let err = serde_json::from_value::<Employment>(json!({
            "location": "Acme",
            "period": "2020"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("missing field `role`"));
    }

    #[test]
    fn test_objects_are_not_text() {
        let err = serde_json::from_value::<Logo>(json!({"file": {"a": 1}, "height": "1em"}))
            .unwrap_err();
        assert!(err.to_string().contains("a string, number, boolean or null"));
    }

    #[test]
    fn test_null_text_is_empty() {
        let group: SkillGroup =
            serde_json::from_value(json!({"category": null, "items": ["Rust", null]})).unwrap();
        assert_eq!(group.category, "");
        assert_eq!(group.items, vec!["Rust", ""]);
    }

    #[test]
    fn test_whole_floats_keep_fraction() {
        let logo: Logo =
            serde_json::from_value(json!({"file": "a.png", "height": 1.0})).unwrap();
        assert_eq!(logo.height, "1.0");

        let logo: Logo =
            serde_json::from_value(json!({"file": "a.png", "height": 12.5})).unwrap();
        assert_eq!(logo.height, "12.5");

        let logo: Logo = serde_json::from_value(json!({"file": "a.png", "height": 12})).unwrap();
        assert_eq!(logo.height, "12");
    }
}
