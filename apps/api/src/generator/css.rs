//! CSS render pass — a fixed stylesheet parameterized by the resolved theme.
//!
//! Static structure with color/font/gradient substitution only; no conditional
//! logic keyed on resume content. Alpha-suffixed occurrences like
//! `{primary_color}20` append a hex alpha channel to the substituted color.

use crate::generator::theme::ProfessionConfig;

/// Renders the portfolio stylesheet for one theme configuration.
pub fn render_css(config: &ProfessionConfig) -> String {
    CSS_TEMPLATE
        .replace("{font_family}", config.font_family)
        .replace("{bg_gradient}", config.bg_gradient)
        .replace("{primary_color}", config.primary_color)
        .replace("{secondary_color}", config.secondary_color)
        .replace("{accent_color}", config.accent_color)
}

const CSS_TEMPLATE: &str = r#"* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: {font_family};
  background: {bg_gradient};
  color: #e2e8f0;
  line-height: 1.6;
  padding-top: 0;
  margin: 0;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 2rem;
}

.main-content {
  position: relative;
  z-index: 2;
  background: {bg_gradient};
}

/* Navigation */
.navbar {
  position: fixed;
  top: 0;
  width: 100%;
  background: rgba(15, 23, 42, 0.95);
  backdrop-filter: blur(10px);
  z-index: 1000;
  padding: 1rem 0;
  transition: all 0.3s ease;
  height: 80px;
}

.nav-container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 2rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.nav-logo {
  font-size: 1.5rem;
  font-weight: 700;
  color: {primary_color};
  transition: color 0.3s ease;
}

.nav-logo:hover {
  color: {accent_color};
}

.nav-menu {
  display: flex;
  list-style: none;
  gap: 2rem;
}

.nav-menu a {
  color: #e2e8f0;
  text-decoration: none;
  font-weight: 500;
  transition: color 0.3s ease;
  position: relative;
}

.nav-menu a::after {
  content: '';
  position: absolute;
  bottom: -5px;
  left: 0;
  width: 0;
  height: 2px;
  background: {primary_color};
  transition: width 0.3s ease;
}

.nav-menu a:hover {
  color: {primary_color};
}

.nav-menu a:hover::after {
  width: 100%;
}

/* Hero Section */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding: 2rem;
  position: relative;
  overflow: hidden;
  padding-top: 100px;
  box-sizing: border-box;
}

.hero::before {
  content: '';
  position: absolute;
  top: 0;
  left: 0;
  right: 0;
  bottom: 0;
  background: radial-gradient(circle at 30% 20%, {primary_color}20 0%, transparent 50%),
              radial-gradient(circle at 70% 80%, {accent_color}20 0%, transparent 50%);
  z-index: -1;
}

.hero-content {
  max-width: 800px;
  z-index: 1;
}

.hero-title {
  font-size: 4rem;
  font-weight: 700;
  margin-bottom: 1rem;
  background: linear-gradient(135deg, {primary_color}, {accent_color});
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
  background-clip: text;
  animation: fadeInUp 1s ease-out;
}

.hero-subtitle {
  font-size: 1.5rem;
  color: {accent_color};
  margin-bottom: 2rem;
  font-weight: 600;
  animation: fadeInUp 1s ease-out 0.2s both;
}

.hero-description {
  font-size: 1.2rem;
  margin-bottom: 3rem;
  color: #cbd5e1;
  line-height: 1.8;
  animation: fadeInUp 1s ease-out 0.4s both;
}

.hero-links {
  display: flex;
  gap: 1.5rem;
  justify-content: center;
  flex-wrap: wrap;
  animation: fadeInUp 1s ease-out 0.6s both;
}

.hero-link {
  padding: 0.75rem 2rem;
  background: {primary_color};
  color: white;
  text-decoration: none;
  border-radius: 50px;
  font-weight: 600;
  transition: all 0.3s ease;
  box-shadow: 0 4px 15px {primary_color}40;
}

.hero-link:hover {
  background: {secondary_color};
  transform: translateY(-2px);
  box-shadow: 0 8px 25px {primary_color}60;
}

/* Sections */
.section {
  padding: 5rem 0;
  opacity: 0;
  transform: translateY(30px);
  transition: all 0.6s ease;
  scroll-margin-top: 100px;
  position: relative;
  z-index: 1;
}

.section.visible {
  opacity: 1;
  transform: translateY(0);
}

/* Ensure sections don't overlap with hero */
.section:first-of-type {
  margin-top: 0;
  padding-top: 6rem;
}

.section-title {
  font-size: 3rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 3rem;
  color: {primary_color};
  position: relative;
}

.section-title::after {
  content: '';
  position: absolute;
  bottom: -10px;
  left: 50%;
  transform: translateX(-50%);
  width: 80px;
  height: 4px;
  background: linear-gradient(90deg, {primary_color}, {accent_color});
  border-radius: 2px;
}

/* Experience */
.experience-list {
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.experience-item {
  background: rgba(255, 255, 255, 0.05);
  padding: 2rem;
  border-radius: 1rem;
  border-left: 4px solid {primary_color};
  transition: all 0.3s ease;
  backdrop-filter: blur(10px);
}

.experience-item:hover {
  transform: translateX(10px);
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
}

.experience-header {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  margin-bottom: 1rem;
}

.experience-title {
  font-size: 1.5rem;
  font-weight: 600;
  color: #f1f5f9;
}

.experience-company {
  color: {accent_color};
  font-weight: 600;
  font-size: 1.1rem;
}

.experience-duration {
  color: #94a3b8;
  font-size: 0.9rem;
  font-weight: 500;
}

.experience-description {
  margin-bottom: 1rem;
  color: #cbd5e1;
  line-height: 1.7;
}

.experience-achievements {
  list-style: none;
  padding-left: 0;
}

.experience-achievements li {
  position: relative;
  padding-left: 1.5rem;
  margin-bottom: 0.5rem;
  color: #cbd5e1;
}

.experience-achievements li::before {
  content: '\25B8';
  position: absolute;
  left: 0;
  color: {primary_color};
  font-weight: bold;
}

/* Projects */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(350px, 1fr));
  gap: 2rem;
}

.project-card {
  background: rgba(255, 255, 255, 0.05);
  padding: 2rem;
  border-radius: 1rem;
  transition: all 0.3s ease;
  backdrop-filter: blur(10px);
  border: 1px solid rgba(255, 255, 255, 0.1);
}

.project-card:hover {
  transform: translateY(-10px);
  box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
  border-color: {primary_color}50;
}

.project-title {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: 1rem;
  color: {primary_color};
}

.project-description {
  margin-bottom: 1.5rem;
  color: #cbd5e1;
  line-height: 1.6;
}

.project-technologies {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 1.5rem;
}

.tech-tag {
  padding: 0.25rem 0.75rem;
  background: {primary_color};
  color: white;
  border-radius: 20px;
  font-size: 0.8rem;
  font-weight: 500;
  transition: all 0.3s ease;
}

.tech-tag:hover {
  background: {accent_color};
  transform: scale(1.05);
}

.project-link {
  color: {accent_color};
  text-decoration: none;
  font-weight: 600;
  transition: color 0.3s ease;
}

.project-link:hover {
  color: {primary_color};
  text-decoration: underline;
}

/* Skills */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 2rem;
}

.skills-category {
  background: rgba(255, 255, 255, 0.05);
  padding: 2rem;
  border-radius: 1rem;
  backdrop-filter: blur(10px);
  transition: all 0.3s ease;
}

.skills-category:hover {
  transform: translateY(-5px);
  box-shadow: 0 15px 35px rgba(0, 0, 0, 0.2);
}

.skills-category-title {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: 1.5rem;
  color: {primary_color};
}

.skills-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
}

.skill-tag {
  padding: 0.5rem 1rem;
  background: {primary_color};
  color: white;
  border-radius: 25px;
  font-size: 0.9rem;
  font-weight: 500;
  transition: all 0.3s ease;
}

.skill-tag:hover {
  background: {accent_color};
  transform: scale(1.05);
}

.skill-tag.soft {
  background: rgba(255, 255, 255, 0.1);
  color: #e2e8f0;
  border: 1px solid rgba(255, 255, 255, 0.2);
}

.skill-tag.soft:hover {
  background: rgba(255, 255, 255, 0.2);
}

/* Education */
.education-list {
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.education-item {
  background: rgba(255, 255, 255, 0.05);
  padding: 2rem;
  border-radius: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  backdrop-filter: blur(10px);
  transition: all 0.3s ease;
}

.education-item:hover {
  transform: translateX(10px);
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
}

.education-degree {
  font-size: 1.5rem;
  font-weight: 600;
  color: #f1f5f9;
}

.education-institution {
  color: {accent_color};
  font-weight: 600;
  font-size: 1.1rem;
}

.education-year, .education-gpa {
  color: #94a3b8;
  font-size: 0.9rem;
}

/* Certifications */
.certifications-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
  gap: 1.5rem;
}

.certification-card {
  background: rgba(255, 255, 255, 0.05);
  padding: 1.5rem;
  border-radius: 1rem;
  backdrop-filter: blur(10px);
  border: 1px solid rgba(255, 255, 255, 0.1);
  transition: all 0.3s ease;
}

.certification-card:hover {
  transform: translateY(-5px);
  box-shadow: 0 15px 35px rgba(0, 0, 0, 0.2);
}

.certification-name {
  font-size: 1.1rem;
  font-weight: 600;
  color: #f1f5f9;
  margin-bottom: 0.5rem;
}

.certification-issuer {
  color: {accent_color};
  font-weight: 500;
  margin-bottom: 0.25rem;
}

.certification-date {
  color: #94a3b8;
  font-size: 0.9rem;
}

/* Contact */
.contact-info {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  max-width: 600px;
  margin: 0 auto;
}

.contact-item {
  display: flex;
  gap: 1rem;
  align-items: center;
  padding: 1rem;
  background: rgba(255, 255, 255, 0.05);
  border-radius: 0.5rem;
  backdrop-filter: blur(10px);
  transition: all 0.3s ease;
}

.contact-item:hover {
  background: rgba(255, 255, 255, 0.1);
  transform: translateX(5px);
}

.contact-label {
  font-weight: 600;
  color: {primary_color};
  min-width: 80px;
}

.contact-item a {
  color: #e2e8f0;
  text-decoration: none;
  transition: color 0.3s ease;
}

.contact-item a:hover {
  color: {accent_color};
}

/* Animations */
@keyframes fadeInUp {
  from {
    opacity: 0;
    transform: translateY(30px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

/* Responsive */
@media (max-width: 768px) {
  .hero-title {
    font-size: 2.5rem;
  }

  .nav-menu {
    display: none;
  }

  .navbar {
    height: 70px;
    padding: 0.75rem 0;
  }

  .hero {
    padding-top: 80px;
    min-height: calc(100vh - 10px);
  }

  .experience-header {
    flex-direction: column;
  }

  .projects-grid {
    grid-template-columns: 1fr;
  }

  .skills-grid {
    grid-template-columns: 1fr;
  }

  .container {
    padding: 0 1rem;
  }

  .section {
    padding: 4rem 0 3rem 0;
    scroll-margin-top: 80px;
  }

  .section:first-of-type {
    padding-top: 5rem;
  }
}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::theme::resolve_config;

    #[test]
    fn test_css_substitutes_theme_colors() {
        let css = render_css(&resolve_config("Civil Engineer"));
        assert!(css.contains("color: #059669"));
        assert!(css.contains("background: linear-gradient(135deg, #1f2937 0%, #111827 100%)"));
        assert!(!css.contains("{primary_color}"), "no unresolved placeholders");
        assert!(!css.contains("{font_family}"));
    }

    #[test]
    fn test_css_alpha_suffix_composes_with_color() {
        // `{primary_color}40` must become e.g. `#05966940` after substitution.
        let css = render_css(&resolve_config("Civil Engineer"));
        assert!(css.contains("box-shadow: 0 4px 15px #05966940"));
        assert!(css.contains("box-shadow: 0 8px 25px #05966960"));
    }

    #[test]
    fn test_css_carries_font_stack() {
        let css = render_css(&resolve_config("Software Engineer"));
        assert!(css.contains("font-family: 'Fira Code', 'JetBrains Mono', monospace;"));
    }

    #[test]
    fn test_css_structure_is_content_independent() {
        // Same category twice yields identical bytes.
        let a = render_css(&resolve_config("Designer"));
        let b = render_css(&resolve_config("Designer"));
        assert_eq!(a, b);
        // Structural rules present regardless of theme.
        assert!(a.contains(".navbar"));
        assert!(a.contains("@media (max-width: 768px)"));
        assert!(a.contains("@keyframes fadeInUp"));
    }
}
