//! Classic category: classic, professional, academic.

/// Serif typography shared by the classic family.
const SERIF_BASE: &str = r#"
.resume-container {
  font-family: var(--font-family, Georgia, 'Times New Roman', serif);
}
.resume-name,
.section-title {
  font-family: var(--heading-font, Georgia, 'Times New Roman', serif);
}
"#;

const CLASSIC: &str = r#"
.resume-container {
  padding: 8px 52px 32px 52px;
}
.resume-header {
  text-align: center;
  padding: 28px 0 14px 0;
  margin-bottom: 20px;
  border-bottom: 2px solid var(--text-color, #1f2937);
  background: none;
}
.resume-name {
  font-size: 2.1em;
  font-weight: 700;
  letter-spacing: 0.04em;
  margin: 0 0 8px 0;
}
.contact-info {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: 4px 14px;
  font-size: 0.9em;
}
.section-title {
  font-size: 1.1em;
  font-variant: small-caps;
  letter-spacing: 0.08em;
  color: var(--text-color, #1f2937);
  border-bottom: 1px solid var(--text-color, #1f2937);
  margin-bottom: 10px;
}
.experience-position {
  font-weight: 700;
}
.experience-company,
.education-institution {
  font-style: italic;
}
.skill-tag + .skill-tag::before {
  content: ", ";
}
"#;

const PROFESSIONAL: &str = r#"
.resume-container {
  padding: 0 0 32px 0;
}
.resume-header {
  display: flex;
  align-items: center;
  gap: 22px;
  padding: 26px 44px;
  margin-bottom: 24px;
  border-bottom: 4px solid var(--primary-color, #1e3a5f);
  background: #f8fafc;
}
.resume-name {
  font-size: 2em;
  font-weight: 700;
  color: var(--primary-color, #1e3a5f);
  margin: 0 0 6px 0;
}
.contact-info {
  display: flex;
  flex-wrap: wrap;
  gap: 4px 16px;
  font-size: 0.9em;
  color: #475569;
}
.photo-img {
  width: 96px;
  height: 96px;
  object-fit: cover;
  border-radius: var(--border-radius, 4px);
  border: 2px solid var(--primary-color, #1e3a5f);
}
.resume-section {
  padding: 0 44px;
}
.section-title {
  font-size: 1.1em;
  font-weight: 700;
  color: var(--primary-color, #1e3a5f);
  border-bottom: var(--border-width, 2px) var(--border-style, solid) var(--primary-color, #1e3a5f);
  padding-bottom: 3px;
  margin-bottom: 12px;
}
.experience-position {
  font-weight: 700;
  color: var(--secondary-color, #334155);
}
.experience-date,
.education-date,
.certification-date {
  color: #64748b;
}
"#;

const ACADEMIC: &str = r#"
.resume-container {
  padding: 8px 56px 32px 56px;
  text-align: justify;
}
.resume-header {
  text-align: center;
  padding: 24px 0 10px 0;
  margin-bottom: 18px;
  background: none;
}
.resume-name {
  font-size: 1.9em;
  font-weight: 400;
  margin: 0 0 6px 0;
}
.contact-info {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: 2px 12px;
  font-size: 0.88em;
}
.section-title {
  font-size: 1.05em;
  font-weight: 700;
  text-transform: uppercase;
  color: var(--text-color, #111827);
  border-bottom: 0.5px solid #6b7280;
  margin-bottom: 8px;
}
.experience-header,
.education-header {
  text-align: left;
}
.education-item {
  margin-bottom: 10px;
}
.education-gpa {
  font-style: italic;
}
"#;

pub fn classic_style() -> String {
    format!("{SERIF_BASE}{CLASSIC}")
}

pub fn professional_style() -> String {
    PROFESSIONAL.to_string()
}

pub fn academic_style() -> String {
    format!("{SERIF_BASE}{ACADEMIC}")
}
