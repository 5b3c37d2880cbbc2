//! Structured resume data — the sole input to the generation core.
//!
//! The wire shape (camelCase keys) matches both the AI extraction output and
//! the serialized blobs stored in the `portfolios` table, so a persisted
//! record round-trips without a migration step.
//!
//! INVARIANT: every sequence field defaults to empty on deserialization.
//! The renderers iterate unconditionally and never see an absent list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub profession: Option<Profession>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Skills,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
    /// Advisory styling hint from the extraction step. The generator derives
    /// the actual theme from the profession category instead of trusting this.
    pub portfolio_style: Option<PortfolioStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profession {
    pub category: String,
    pub specialization: String,
    pub experience_level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub year: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioStyle {
    pub template: String,
    pub color_scheme: String,
    pub layout: String,
}

impl ResumeData {
    /// Normalizes data at the ingestion boundary so the generator never has
    /// to handle degenerate optionals: whitespace-only optional strings become
    /// `None`, and a profession whose category is blank is dropped entirely.
    ///
    /// The AI extraction call is instructed, not enforced, to emit this shape;
    /// this is where that gap gets closed.
    pub fn normalize(&mut self) {
        normalize_opt(&mut self.personal_info.linkedin);
        normalize_opt(&mut self.personal_info.github);
        normalize_opt(&mut self.personal_info.website);

        if matches!(&self.profession, Some(p) if p.category.trim().is_empty()) {
            self.profession = None;
        }

        for entry in &mut self.education {
            normalize_opt(&mut entry.gpa);
        }
        for project in &mut self.projects {
            normalize_opt(&mut project.link);
        }
    }
}

fn normalize_opt(field: &mut Option<String>) {
    if let Some(value) = field {
        if value.trim().is_empty() {
            *field = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sequences_default_to_empty() {
        // The minimum the extraction step might emit — everything else absent.
        let json = r#"{"personalInfo": {"name": "Jane Doe"}}"#;
        let data: ResumeData = serde_json::from_str(json).unwrap();

        assert_eq!(data.personal_info.name, "Jane Doe");
        assert!(data.experience.is_empty());
        assert!(data.education.is_empty());
        assert!(data.projects.is_empty());
        assert!(data.certifications.is_empty());
        assert!(data.skills.technical.is_empty());
        assert!(data.skills.soft.is_empty());
        assert!(data.profession.is_none());
        assert_eq!(data.summary, "");
    }

    #[test]
    fn test_wire_shape_uses_camel_case_keys() {
        let json = r#"{
            "personalInfo": {"name": "Jane Doe", "email": "jane@example.com"},
            "profession": {
                "category": "Software Engineer",
                "specialization": "Backend",
                "experience_level": "Senior"
            },
            "portfolioStyle": {"template": "tech", "colorScheme": "blue-tech", "layout": "technical"}
        }"#;
        let data: ResumeData = serde_json::from_str(json).unwrap();

        let profession = data.profession.as_ref().unwrap();
        assert_eq!(profession.category, "Software Engineer");
        assert_eq!(profession.experience_level, "Senior");
        assert_eq!(data.portfolio_style.as_ref().unwrap().color_scheme, "blue-tech");

        // Round-trip keeps the camelCase keys
        let round_trip = serde_json::to_value(&data).unwrap();
        assert!(round_trip.get("personalInfo").is_some());
        assert!(round_trip.get("portfolioStyle").is_some());
    }

    #[test]
    fn test_normalize_blanks_empty_optionals() {
        let mut data = ResumeData {
            personal_info: PersonalInfo {
                name: "Jane Doe".to_string(),
                linkedin: Some("  ".to_string()),
                github: Some("https://github.com/jane".to_string()),
                ..Default::default()
            },
            profession: Some(Profession {
                category: "".to_string(),
                ..Default::default()
            }),
            projects: vec![ProjectEntry {
                name: "Demo".to_string(),
                link: Some("".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        data.normalize();

        assert!(data.personal_info.linkedin.is_none());
        assert_eq!(
            data.personal_info.github.as_deref(),
            Some("https://github.com/jane")
        );
        assert!(data.profession.is_none(), "blank category must be dropped");
        assert!(data.projects[0].link.is_none());
    }

    #[test]
    fn test_entry_order_is_preserved() {
        let json = r#"{
            "experience": [
                {"company": "First", "position": "A", "duration": "", "description": ""},
                {"company": "Second", "position": "B", "duration": "", "description": ""}
            ]
        }"#;
        let data: ResumeData = serde_json::from_str(json).unwrap();
        assert_eq!(data.experience[0].company, "First");
        assert_eq!(data.experience[1].company, "Second");
    }
}
