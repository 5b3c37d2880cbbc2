//! Profession classifier — infers a profession category from resume content
//! when the extraction step did not supply one.
//!
//! The rule list is ordered by priority and evaluated top to bottom; the first
//! matching rule wins. Specific engineering disciplines MUST be checked before
//! the generic "Engineer" rule, which is itself guarded against "train"
//! (train engineer is not an engineering discipline in this taxonomy).

use crate::models::resume::ResumeData;

/// The category returned when no rule matches.
pub const FALLBACK_CATEGORY: &str = "Professional";

/// Infers a profession category from job titles, education fields, and skills.
///
/// Total function: always returns a category string, never fails.
pub fn infer_profession(data: &ResumeData) -> &'static str {
    let corpus = build_corpus(data);
    classify_corpus(&corpus)
}

/// Builds the lowercase search corpus: all experience position titles, all
/// education field names, and all technical + soft skill strings.
fn build_corpus(data: &ResumeData) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.extend(data.experience.iter().map(|e| e.position.to_lowercase()));
    parts.extend(data.education.iter().map(|e| e.field.to_lowercase()));
    parts.extend(data.skills.technical.iter().map(|s| s.to_lowercase()));
    parts.extend(data.skills.soft.iter().map(|s| s.to_lowercase()));

    parts.join(" ")
}

/// Applies the ordered keyword-conjunction rules to an already-lowercased corpus.
fn classify_corpus(corpus: &str) -> &'static str {
    let has = |needle: &str| corpus.contains(needle);
    let engineer = has("engineer");

    // Software / tech — highest priority, also catches web/frontend/backend engineers
    if has("software")
        || has("developer")
        || has("programmer")
        || (engineer
            && (has("web")
                || has("frontend")
                || has("backend")
                || has("full stack")
                || has("fullstack")))
    {
        return "Software Engineer";
    }

    if has("civil") && engineer {
        return "Civil Engineer";
    }
    if (has("electrical") || has("electric")) && engineer {
        return "Electrical Engineer";
    }
    if (has("electronics") || has("telecommunication") || has("telecom") || has("ece") || has("etc"))
        && engineer
    {
        return "Electronics Engineer";
    }
    if has("mechanical") && engineer {
        return "Mechanical Engineer";
    }
    if has("chemical") && engineer {
        return "Chemical Engineer";
    }
    if (has("aerospace") || has("aeronautical") || has("aviation")) && engineer {
        return "Aerospace Engineer";
    }
    if (has("biomedical") || has("bioengineering") || has("bio")) && engineer {
        return "Biomedical Engineer";
    }
    if has("environmental") && engineer {
        return "Environmental Engineer";
    }
    if has("industrial") && engineer {
        return "Industrial Engineer";
    }
    if has("computer") && engineer {
        return "Computer Engineer";
    }
    if (has("petroleum") || has("oil") || has("gas")) && engineer {
        return "Petroleum Engineer";
    }
    if has("mining") && engineer {
        return "Mining Engineer";
    }
    if (has("materials") || has("metallurgical") || has("metallurgy")) && engineer {
        return "Materials Engineer";
    }
    if has("nuclear") && engineer {
        return "Nuclear Engineer";
    }
    if (has("agricultural") || has("agriculture")) && engineer {
        return "Agricultural Engineer";
    }
    if (has("marine") || has("naval") || has("ocean")) && engineer {
        return "Marine Engineer";
    }

    // Generic engineer, guarding against "train engineer". The guard is
    // narrow by design: it mirrors the observed rule set exactly.
    if engineer && !has("train") {
        return "Engineer";
    }

    if has("design") || has("graphic") || has("ui") || has("ux") {
        return "Designer";
    }
    if has("marketing") || has("sales") || has("business") {
        return "Marketing Professional";
    }
    if has("doctor") || has("medical") || has("nurse") || has("healthcare") {
        return "Healthcare Professional";
    }
    if has("teacher") || has("professor") || has("education") || has("academic") {
        return "Educator";
    }

    FALLBACK_CATEGORY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry, Skills};

    fn resume_with_position(position: &str) -> ResumeData {
        ResumeData {
            experience: vec![ExperienceEntry {
                position: position.to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_civil_beats_generic_engineer() {
        // Priority: "civil" + "engineer" must win over the generic rule even
        // though the corpus also satisfies the bare "engineer" predicate.
        let data = resume_with_position("Civil Structural Engineer");
        assert_eq!(infer_profession(&data), "Civil Engineer");
    }

    #[test]
    fn test_software_outranks_every_engineering_discipline() {
        // "software" is checked first, so a civil engineer who lists software
        // skills still classifies as Software Engineer. Order is the contract.
        let mut data = resume_with_position("Civil Engineer");
        data.skills = Skills {
            technical: vec!["Software Architecture".to_string()],
            soft: vec![],
        };
        assert_eq!(infer_profession(&data), "Software Engineer");
    }

    #[test]
    fn test_web_engineer_is_software() {
        let data = resume_with_position("Web Engineer");
        assert_eq!(infer_profession(&data), "Software Engineer");
    }

    #[test]
    fn test_developer_without_engineer_is_software() {
        let data = resume_with_position("Backend Developer");
        assert_eq!(infer_profession(&data), "Software Engineer");
    }

    #[test]
    fn test_generic_engineer_fallback() {
        let data = resume_with_position("Field Engineer");
        assert_eq!(infer_profession(&data), "Engineer");
    }

    #[test]
    fn test_train_engineer_guard() {
        let data = resume_with_position("Train Engineer");
        // Guard keeps the generic rule from firing; nothing else matches.
        assert_eq!(infer_profession(&data), "Professional");
    }

    #[test]
    fn test_education_field_contributes_to_corpus() {
        let data = ResumeData {
            education: vec![EducationEntry {
                field: "Mechanical Engineering".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        // "engineering" contains "engineer" as a substring.
        assert_eq!(infer_profession(&data), "Mechanical Engineer");
    }

    #[test]
    fn test_designer_classification() {
        let data = resume_with_position("Senior UX Researcher");
        assert_eq!(infer_profession(&data), "Designer");
    }

    #[test]
    fn test_marketing_classification() {
        let data = resume_with_position("Sales Lead");
        assert_eq!(infer_profession(&data), "Marketing Professional");
    }

    #[test]
    fn test_healthcare_classification() {
        let data = resume_with_position("Registered Nurse");
        assert_eq!(infer_profession(&data), "Healthcare Professional");
    }

    #[test]
    fn test_educator_classification() {
        let data = resume_with_position("History Professor");
        assert_eq!(infer_profession(&data), "Educator");
    }

    #[test]
    fn test_empty_resume_falls_back_to_professional() {
        let data = ResumeData::default();
        assert_eq!(infer_profession(&data), FALLBACK_CATEGORY);
    }

    #[test]
    fn test_classifier_is_deterministic() {
        let data = resume_with_position("Petroleum Reservoir Engineer");
        assert_eq!(infer_profession(&data), infer_profession(&data));
    }
}
