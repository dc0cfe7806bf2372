//! Modern category: modern, minimalist, tech.

const MODERN: &str = r#"
.resume-container {
  padding: 0 0 32px 0;
}
.resume-header {
  display: flex;
  align-items: center;
  gap: 24px;
  padding: 32px 40px;
  margin-bottom: 28px;
  color: #ffffff;
  background: linear-gradient(135deg, var(--primary-color, #2563eb) 0%, var(--secondary-color, #1e40af) 100%);
}
.resume-name {
  font-size: 2.2em;
  font-weight: 700;
  letter-spacing: -0.02em;
  margin: 0 0 8px 0;
}
.contact-info {
  display: flex;
  flex-wrap: wrap;
  gap: 6px 18px;
  font-size: 0.9em;
  opacity: 0.95;
}
.photo-img {
  width: 104px;
  height: 104px;
  object-fit: cover;
  border-radius: 50%;
  border: 3px solid rgba(255, 255, 255, 0.85);
  flex-shrink: 0;
}
.resume-section {
  padding: 0 40px;
}
.section-title {
  font-size: 1.15em;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.06em;
  color: var(--primary-color, #2563eb);
  border-bottom: var(--border-width, 2px) var(--border-style, solid) var(--primary-color, #2563eb);
  padding-bottom: 4px;
  margin-bottom: 14px;
}
.experience-position {
  font-weight: 700;
  color: var(--secondary-color, #1e40af);
}
.experience-company {
  font-weight: 600;
}
.experience-date,
.education-date,
.certification-date {
  color: #6b7280;
  font-size: 0.9em;
  white-space: nowrap;
}
.skill-tag {
  background: #eff6ff;
  color: var(--secondary-color, #1e40af);
  border-radius: var(--border-radius, 4px);
  padding: 2px 10px;
}
"#;

const MINIMALIST: &str = r#"
.resume-container {
  padding: 8px 48px 32px 48px;
}
.resume-header {
  padding: 24px 0 16px 0;
  margin-bottom: 24px;
  border-bottom: 1px solid #e5e7eb;
  text-align: left;
  background: none;
}
.resume-name {
  font-size: 2em;
  font-weight: 300;
  letter-spacing: 0.02em;
  margin: 0 0 6px 0;
  color: var(--text-color, #111827);
}
.contact-info {
  display: flex;
  flex-wrap: wrap;
  gap: 4px 16px;
  font-size: 0.88em;
  color: #6b7280;
}
.section-title {
  font-size: 0.85em;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.14em;
  color: var(--text-color, #111827);
  border-bottom: none;
  margin-bottom: 12px;
}
.experience-position {
  font-weight: 600;
}
.experience-company,
.education-institution,
.certification-issuer {
  color: #4b5563;
}
.experience-date,
.education-date,
.certification-date {
  color: #9ca3af;
  font-size: 0.88em;
}
.skill-tag {
  padding: 0;
  background: none;
}
.skill-tag + .skill-tag::before {
  content: "· ";
  color: #9ca3af;
}
"#;

const TECH: &str = r###"
.resume-container {
  padding: 0 44px 32px 44px;
  font-family: var(--font-family, 'JetBrains Mono', 'Fira Code', Menlo, monospace);
}
.resume-header {
  padding: 28px 0 18px 0;
  margin-bottom: 22px;
  border-bottom: var(--border-width, 2px) var(--border-style, solid) var(--primary-color, #10b981);
  background: none;
}
.resume-name {
  font-size: 1.9em;
  font-weight: 700;
  margin: 0 0 6px 0;
  color: var(--primary-color, #10b981);
}
.resume-name::before {
  content: "> ";
  color: #9ca3af;
}
.contact-info {
  display: flex;
  flex-wrap: wrap;
  gap: 4px 18px;
  font-size: 0.85em;
}
.section-title {
  font-size: 1em;
  font-weight: 700;
  color: var(--primary-color, #10b981);
  border-bottom: 1px dashed #d1d5db;
  margin-bottom: 12px;
}
.section-title::before {
  content: "## ";
  color: #9ca3af;
}
.experience-position {
  font-weight: 700;
}
.experience-company {
  color: var(--secondary-color, #047857);
}
.experience-description li::marker {
  content: "▹ ";
  color: var(--primary-color, #10b981);
}
.skill-tag {
  font-size: 0.85em;
  border: 1px solid #d1d5db;
  border-radius: var(--border-radius, 3px);
  padding: 1px 8px;
  background: #f9fafb;
}
"###;

pub fn modern_style() -> String {
    MODERN.to_string()
}

pub fn minimalist_style() -> String {
    MINIMALIST.to_string()
}

pub fn tech_style() -> String {
    TECH.to_string()
}
