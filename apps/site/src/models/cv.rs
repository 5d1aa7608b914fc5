//! The CV document shape.
//!
//! Typed deserialization is the schema check: a document missing a field or
//! carrying a wrong type is rejected at the parse boundary and never reaches
//! the renderers. Every sequence keeps its document order, and the skills
//! mapping preserves the JSON object's key order via `IndexMap`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvDocument {
    pub personal_info: PersonalInfo,
    /// Camel-case category key, e.g. `programmingLanguages`, to skill names.
    pub skills: IndexMap<String, Vec<String>>,
    pub languages: Vec<LanguageSkill>,
    pub certifications: Vec<Certification>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub profile_image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub language: String,
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub period: String,
    pub position: String,
    pub company: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub period: String,
    pub details: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub links: ProjectLinks,
}

/// Either link may be absent; an empty string counts as absent too.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_document_parses() {
        let doc = fixtures::sample_document();
        assert_eq!(doc.personal_info.name, "Ada Quill");
        assert_eq!(doc.experience.len(), 1);
        assert_eq!(doc.projects.len(), 2);
    }

    #[test]
    fn test_skills_preserve_document_order() {
        let doc = fixtures::sample_document();
        let keys: Vec<&str> = doc.skills.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["programmingLanguages", "softSkills"]);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        // personalInfo.name removed: the parse boundary must fail closed.
        let mut value: serde_json::Value = serde_json::from_str(fixtures::SAMPLE_JSON).unwrap();
        value["personalInfo"]
            .as_object_mut()
            .unwrap()
            .remove("name");
        let result: Result<CvDocument, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(fixtures::SAMPLE_JSON).unwrap();
        value["languages"] = serde_json::json!("not a list");
        let result: Result<CvDocument, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn test_absent_links_default_to_none() {
        let raw = r#"{"name": "x", "description": "y", "technologies": [], "links": {}}"#;
        let project: Project = serde_json::from_str(raw).unwrap();
        assert!(project.links.demo.is_none());
        assert!(project.links.github.is_none());
    }
}
