//! HTML render pass — a fixed page skeleton (nav, hero, one section per
//! resume facet) with conditional inclusion driven by the data.
//!
//! Gating policy: experience / projects / education / certifications keep
//! their section containers in the DOM but hide them with
//! `style="display: none;"` when their sequence is empty. Skills and contact
//! always render and simply omit empty sub-lists. Nav links for gated
//! sections are dropped entirely when the section is empty.
//!
//! All user-supplied text passes through `esc` before interpolation; see
//! DESIGN.md for the escaping decision.

use crate::models::resume::ResumeData;

pub(crate) const FONTS_HREF: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=Fira+Code:wght@400;500;600&family=Poppins:wght@400;500;600;700&display=swap";

/// Renders the portfolio markup for the given data and effective profession
/// category. References `styles.css` / `script.js` by filename; the
/// standalone/preview variant strips that chrome and inlines instead.
pub fn render_html(data: &ResumeData, category: &str) -> String {
    let info = &data.personal_info;
    let name = esc(&info.name);

    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("  <title>{name} - Portfolio</title>\n"));
    html.push_str(&format!("  <link href=\"{FONTS_HREF}\" rel=\"stylesheet\">\n"));
    html.push_str("  <link rel=\"stylesheet\" href=\"styles.css\">\n");
    html.push_str("</head>\n<body>\n");

    render_nav(&mut html, data, &name);
    render_hero(&mut html, data, category, &name);

    html.push_str("  <div class=\"main-content\">\n\n");
    render_experience(&mut html, data);
    render_projects(&mut html, data);
    render_skills(&mut html, data);
    render_education(&mut html, data);
    render_certifications(&mut html, data);
    render_contact(&mut html, data);
    html.push_str("  </div>\n\n");

    html.push_str("  <script src=\"script.js\"></script>\n</body>\n</html>");
    html
}

fn render_nav(html: &mut String, data: &ResumeData, name: &str) {
    html.push_str("  <nav class=\"navbar\">\n    <div class=\"nav-container\">\n");
    html.push_str(&format!("      <div class=\"nav-logo\">{name}</div>\n"));
    html.push_str("      <ul class=\"nav-menu\">\n");
    html.push_str("        <li><a href=\"#about\">About</a></li>\n");
    if !data.experience.is_empty() {
        html.push_str("        <li><a href=\"#experience\">Experience</a></li>\n");
    }
    if !data.projects.is_empty() {
        html.push_str("        <li><a href=\"#projects\">Projects</a></li>\n");
    }
    html.push_str("        <li><a href=\"#skills\">Skills</a></li>\n");
    if !data.education.is_empty() {
        html.push_str("        <li><a href=\"#education\">Education</a></li>\n");
    }
    html.push_str("        <li><a href=\"#contact\">Contact</a></li>\n");
    html.push_str("      </ul>\n    </div>\n  </nav>\n\n");
}

fn render_hero(html: &mut String, data: &ResumeData, category: &str, name: &str) {
    let info = &data.personal_info;

    html.push_str("  <section id=\"about\" class=\"hero\">\n    <div class=\"hero-content\">\n");
    html.push_str(&format!("      <h1 class=\"hero-title\">{name}</h1>\n"));
    html.push_str(&format!(
        "      <h2 class=\"hero-subtitle\">{}</h2>\n",
        esc(category)
    ));
    html.push_str(&format!(
        "      <p class=\"hero-description\">{}</p>\n",
        esc(&data.summary)
    ));
    html.push_str("      <div class=\"hero-links\">\n");
    if !info.email.is_empty() {
        html.push_str(&format!(
            "        <a href=\"mailto:{}\" class=\"hero-link\">Email</a>\n",
            esc(&info.email)
        ));
    }
    if let Some(linkedin) = &info.linkedin {
        html.push_str(&format!(
            "        <a href=\"{}\" target=\"_blank\" class=\"hero-link\">LinkedIn</a>\n",
            esc(linkedin)
        ));
    }
    if let Some(github) = &info.github {
        html.push_str(&format!(
            "        <a href=\"{}\" target=\"_blank\" class=\"hero-link\">GitHub</a>\n",
            esc(github)
        ));
    }
    html.push_str("      </div>\n    </div>\n  </section>\n\n");
}

fn render_experience(html: &mut String, data: &ResumeData) {
    html.push_str(&section_open("experience", data.experience.is_empty()));
    html.push_str("      <h2 class=\"section-title\">Experience</h2>\n");
    html.push_str("      <div class=\"experience-list\">\n");
    for entry in &data.experience {
        html.push_str("        <div class=\"experience-item\">\n");
        html.push_str("          <div class=\"experience-header\">\n");
        html.push_str(&format!(
            "            <h3 class=\"experience-title\">{}</h3>\n",
            esc(&entry.position)
        ));
        html.push_str(&format!(
            "            <span class=\"experience-company\">{}</span>\n",
            esc(&entry.company)
        ));
        html.push_str(&format!(
            "            <span class=\"experience-duration\">{}</span>\n",
            esc(&entry.duration)
        ));
        html.push_str("          </div>\n");
        html.push_str(&format!(
            "          <p class=\"experience-description\">{}</p>\n",
            esc(&entry.description)
        ));
        if !entry.achievements.is_empty() {
            html.push_str("          <ul class=\"experience-achievements\">\n");
            for achievement in &entry.achievements {
                html.push_str(&format!("            <li>{}</li>\n", esc(achievement)));
            }
            html.push_str("          </ul>\n");
        }
        html.push_str("        </div>\n");
    }
    html.push_str("      </div>\n    </div>\n  </section>\n\n");
}

fn render_projects(html: &mut String, data: &ResumeData) {
    html.push_str(&section_open("projects", data.projects.is_empty()));
    html.push_str("      <h2 class=\"section-title\">Projects</h2>\n");
    html.push_str("      <div class=\"projects-grid\">\n");
    for project in &data.projects {
        html.push_str("        <div class=\"project-card\">\n");
        html.push_str(&format!(
            "          <h3 class=\"project-title\">{}</h3>\n",
            esc(&project.name)
        ));
        html.push_str(&format!(
            "          <p class=\"project-description\">{}</p>\n",
            esc(&project.description)
        ));
        html.push_str("          <div class=\"project-technologies\">\n");
        for tech in &project.technologies {
            html.push_str(&format!(
                "            <span class=\"tech-tag\">{}</span>\n",
                esc(tech)
            ));
        }
        html.push_str("          </div>\n");
        if let Some(link) = &project.link {
            html.push_str(&format!(
                "          <a href=\"{}\" target=\"_blank\" class=\"project-link\">View Project</a>\n",
                esc(link)
            ));
        }
        html.push_str("        </div>\n");
    }
    html.push_str("      </div>\n    </div>\n  </section>\n\n");
}

fn render_skills(html: &mut String, data: &ResumeData) {
    // Always rendered; empty sub-categories are omitted rather than hidden.
    html.push_str(&section_open("skills", false));
    html.push_str("      <h2 class=\"section-title\">Skills</h2>\n");
    html.push_str("      <div class=\"skills-grid\">\n");
    if !data.skills.technical.is_empty() {
        html.push_str("        <div class=\"skills-category\">\n");
        html.push_str("          <h3 class=\"skills-category-title\">Technical Skills</h3>\n");
        html.push_str("          <div class=\"skills-list\">\n");
        for skill in &data.skills.technical {
            html.push_str(&format!(
                "            <span class=\"skill-tag\">{}</span>\n",
                esc(skill)
            ));
        }
        html.push_str("          </div>\n        </div>\n");
    }
    if !data.skills.soft.is_empty() {
        html.push_str("        <div class=\"skills-category\">\n");
        html.push_str("          <h3 class=\"skills-category-title\">Soft Skills</h3>\n");
        html.push_str("          <div class=\"skills-list\">\n");
        for skill in &data.skills.soft {
            html.push_str(&format!(
                "            <span class=\"skill-tag soft\">{}</span>\n",
                esc(skill)
            ));
        }
        html.push_str("          </div>\n        </div>\n");
    }
    html.push_str("      </div>\n    </div>\n  </section>\n\n");
}

fn render_education(html: &mut String, data: &ResumeData) {
    html.push_str(&section_open("education", data.education.is_empty()));
    html.push_str("      <h2 class=\"section-title\">Education</h2>\n");
    html.push_str("      <div class=\"education-list\">\n");
    for entry in &data.education {
        html.push_str("        <div class=\"education-item\">\n");
        html.push_str(&format!(
            "          <h3 class=\"education-degree\">{} in {}</h3>\n",
            esc(&entry.degree),
            esc(&entry.field)
        ));
        html.push_str(&format!(
            "          <span class=\"education-institution\">{}</span>\n",
            esc(&entry.institution)
        ));
        html.push_str(&format!(
            "          <span class=\"education-year\">{}</span>\n",
            esc(&entry.year)
        ));
        if let Some(gpa) = &entry.gpa {
            html.push_str(&format!(
                "          <span class=\"education-gpa\">GPA: {}</span>\n",
                esc(gpa)
            ));
        }
        html.push_str("        </div>\n");
    }
    html.push_str("      </div>\n    </div>\n  </section>\n\n");
}

fn render_certifications(html: &mut String, data: &ResumeData) {
    html.push_str(&section_open("certifications", data.certifications.is_empty()));
    html.push_str("      <h2 class=\"section-title\">Certifications</h2>\n");
    html.push_str("      <div class=\"certifications-grid\">\n");
    for cert in &data.certifications {
        html.push_str("        <div class=\"certification-card\">\n");
        html.push_str(&format!(
            "          <h3 class=\"certification-name\">{}</h3>\n",
            esc(&cert.name)
        ));
        html.push_str(&format!(
            "          <p class=\"certification-issuer\">{}</p>\n",
            esc(&cert.issuer)
        ));
        html.push_str(&format!(
            "          <p class=\"certification-date\">{}</p>\n",
            esc(&cert.date)
        ));
        html.push_str("        </div>\n");
    }
    html.push_str("      </div>\n    </div>\n  </section>\n\n");
}

fn render_contact(html: &mut String, data: &ResumeData) {
    let info = &data.personal_info;

    html.push_str(&section_open("contact", false));
    html.push_str("      <h2 class=\"section-title\">Contact</h2>\n");
    html.push_str("      <div class=\"contact-info\">\n");
    if !info.email.is_empty() {
        html.push_str("        <div class=\"contact-item\">\n");
        html.push_str("          <span class=\"contact-label\">Email:</span>\n");
        html.push_str(&format!(
            "          <a href=\"mailto:{0}\">{0}</a>\n",
            esc(&info.email)
        ));
        html.push_str("        </div>\n");
    }
    if !info.phone.is_empty() {
        html.push_str("        <div class=\"contact-item\">\n");
        html.push_str("          <span class=\"contact-label\">Phone:</span>\n");
        html.push_str(&format!(
            "          <a href=\"tel:{0}\">{0}</a>\n",
            esc(&info.phone)
        ));
        html.push_str("        </div>\n");
    }
    if !info.location.is_empty() {
        html.push_str("        <div class=\"contact-item\">\n");
        html.push_str("          <span class=\"contact-label\">Location:</span>\n");
        html.push_str(&format!("          <span>{}</span>\n", esc(&info.location)));
        html.push_str("        </div>\n");
    }
    html.push_str("      </div>\n    </div>\n  </section>\n\n");
}

/// Opens a `<section>` plus its `.container`. Hidden sections stay in the DOM
/// so anchors and the scroll observer keep a stable set of targets.
fn section_open(id: &str, hidden: bool) -> String {
    let style = if hidden { " style=\"display: none;\"" } else { "" };
    format!("  <section id=\"{id}\" class=\"section\"{style}>\n    <div class=\"container\">\n")
}

/// Minimal HTML escaping for text and attribute positions.
fn esc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ExperienceEntry, PersonalInfo, ProjectEntry, Skills};

    fn sample_data() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: "555-0100".to_string(),
                location: "Lisbon, Portugal".to_string(),
                github: Some("https://github.com/janedoe".to_string()),
                ..Default::default()
            },
            summary: "Builds bridges.".to_string(),
            experience: vec![ExperienceEntry {
                company: "Acme".to_string(),
                position: "Civil Structural Engineer".to_string(),
                duration: "2019-2023".to_string(),
                description: "Bridge design".to_string(),
                achievements: vec!["Delivered on time".to_string()],
            }],
            skills: Skills {
                technical: vec!["AutoCAD".to_string()],
                soft: vec![],
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_html_contains_hero_and_name() {
        let html = render_html(&sample_data(), "Civil Engineer");
        assert!(html.contains("<h1 class=\"hero-title\">Jane Doe</h1>"));
        assert!(html.contains("<h2 class=\"hero-subtitle\">Civil Engineer</h2>"));
        assert!(html.contains("Civil Structural Engineer"));
    }

    #[test]
    fn test_empty_sections_are_hidden_not_omitted() {
        let html = render_html(&sample_data(), "Civil Engineer");
        // projects and education are empty in the fixture
        assert!(html.contains("<section id=\"projects\" class=\"section\" style=\"display: none;\">"));
        assert!(html.contains("<section id=\"education\" class=\"section\" style=\"display: none;\">"));
        // experience has an entry and must not be hidden
        assert!(html.contains("<section id=\"experience\" class=\"section\">"));
    }

    #[test]
    fn test_nav_links_drop_for_empty_sections() {
        let html = render_html(&sample_data(), "Civil Engineer");
        assert!(html.contains("<a href=\"#experience\">Experience</a>"));
        assert!(!html.contains("<a href=\"#projects\">Projects</a>"));
        assert!(!html.contains("<a href=\"#education\">Education</a>"));
        // skills and contact nav links are unconditional
        assert!(html.contains("<a href=\"#skills\">Skills</a>"));
        assert!(html.contains("<a href=\"#contact\">Contact</a>"));
    }

    #[test]
    fn test_skills_omits_empty_subcategory() {
        let html = render_html(&sample_data(), "Civil Engineer");
        assert!(html.contains("Technical Skills"));
        assert!(!html.contains("Soft Skills"), "empty soft list is omitted");
    }

    #[test]
    fn test_empty_resume_still_renders_skeleton() {
        let html = render_html(&ResumeData::default(), "Professional");
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("class=\"hero\""));
        assert!(html.contains("<section id=\"skills\""));
        assert!(html.contains("<section id=\"contact\""));
    }

    #[test]
    fn test_project_link_only_when_present() {
        let mut data = sample_data();
        data.projects = vec![
            ProjectEntry {
                name: "With link".to_string(),
                link: Some("https://example.com".to_string()),
                ..Default::default()
            },
            ProjectEntry {
                name: "Without link".to_string(),
                ..Default::default()
            },
        ];
        let html = render_html(&data, "Civil Engineer");
        assert_eq!(html.matches("View Project").count(), 1);
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut data = sample_data();
        data.personal_info.name = "Jane <script>alert(1)</script>".to_string();
        let html = render_html(&data, "Civil Engineer");
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("Jane &lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_esc_covers_attribute_breakout() {
        assert_eq!(esc(r#""><img src=x>"#), "&quot;&gt;&lt;img src=x&gt;");
        assert_eq!(esc("a & b"), "a &amp; b");
        assert_eq!(esc("plain"), "plain");
    }

    #[test]
    fn test_external_asset_references() {
        let html = render_html(&sample_data(), "Civil Engineer");
        assert!(html.contains("<link rel=\"stylesheet\" href=\"styles.css\">"));
        assert!(html.contains("<script src=\"script.js\"></script>"));
    }
}
