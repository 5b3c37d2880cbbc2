//! Prompt for the resume structuring LLM call.
//!
//! The prompt asks for the exact `ResumeData` wire shape. The model is
//! instructed, not enforced — `ResumeData::normalize` closes the gap at the
//! ingestion boundary.

pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"You are an expert resume analyzer and portfolio designer. Analyze the following resume text and extract structured information, then determine the person's profession and create a customized portfolio design.

Return ONLY a JSON object (no prose, no code fences) with the following structure:

{
  "personalInfo": {
    "name": "Full Name",
    "email": "email@example.com",
    "phone": "phone number",
    "location": "city, state/country",
    "linkedin": "linkedin url (if available)",
    "github": "github url (if available)",
    "website": "personal website (if available)"
  },
  "summary": "Professional summary or objective",
  "profession": {
    "category": "Primary profession (e.g., Software Engineer, Civil Engineer, Designer, Marketing Professional, Healthcare Professional, etc.)",
    "specialization": "Specific area of expertise (e.g., Frontend Development, Structural Engineering, UI/UX Design)",
    "experience_level": "Experience level (Junior, Mid-level, Senior, Lead, Executive)"
  },
  "experience": [
    {
      "company": "Company Name",
      "position": "Job Title",
      "duration": "Start Date - End Date",
      "description": "Job description",
      "achievements": ["achievement 1", "achievement 2"]
    }
  ],
  "education": [
    {
      "institution": "University/School Name",
      "degree": "Degree Type",
      "field": "Field of Study",
      "year": "Graduation Year",
      "gpa": "GPA (if available)"
    }
  ],
  "skills": {
    "technical": ["skill1", "skill2"],
    "soft": ["skill1", "skill2"]
  },
  "projects": [
    {
      "name": "Project Name",
      "description": "Project description",
      "technologies": ["tech1", "tech2"],
      "link": "project link (if available)"
    }
  ],
  "certifications": [
    {
      "name": "Certification Name",
      "issuer": "Issuing Organization",
      "date": "Date obtained"
    }
  ],
  "portfolioStyle": {
    "template": "tech | engineering | creative | business | medical | academic",
    "colorScheme": "blue-tech | green-engineering | purple-creative | orange-business | teal-medical | indigo-academic",
    "layout": "showcase | technical | professional | minimal | dynamic"
  }
}

Resume text:
{resume_text}

Analyze the resume thoroughly and determine the person's profession, specialization, and experience level. Choose appropriate portfolio styling that matches their field. If any field is not available, use an empty string or empty array as appropriate."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_has_resume_text_placeholder() {
        assert!(EXTRACTION_PROMPT_TEMPLATE.contains("{resume_text}"));
    }

    #[test]
    fn test_template_describes_wire_shape() {
        assert!(EXTRACTION_PROMPT_TEMPLATE.contains("\"personalInfo\""));
        assert!(EXTRACTION_PROMPT_TEMPLATE.contains("\"portfolioStyle\""));
        assert!(EXTRACTION_PROMPT_TEMPLATE.contains("\"experience_level\""));
    }
}
