//! Creative category: creative, bold.

const CREATIVE: &str = r#"
.resume-container {
  padding: 0 0 32px 0;
}
.resume-header {
  position: relative;
  display: flex;
  align-items: center;
  gap: 26px;
  padding: 36px 44px 30px 44px;
  margin-bottom: 26px;
  color: #ffffff;
  background: linear-gradient(120deg, var(--primary-color, #db2777) 0%, var(--secondary-color, #7c3aed) 100%);
  border-radius: 0 0 var(--border-radius, 24px) var(--border-radius, 24px);
}
.resume-name {
  font-size: 2.3em;
  font-weight: 800;
  margin: 0 0 8px 0;
}
.contact-info {
  display: flex;
  flex-wrap: wrap;
  gap: 6px 16px;
  font-size: 0.9em;
}
.photo-img {
  width: 112px;
  height: 112px;
  object-fit: cover;
  border-radius: 28% 72% 55% 45% / 40% 40% 60% 60%;
  border: 4px solid rgba(255, 255, 255, 0.9);
}
.resume-section {
  padding: 0 44px;
}
.section-title {
  display: inline-block;
  font-size: 1.15em;
  font-weight: 800;
  color: var(--primary-color, #db2777);
  border-bottom: var(--border-width, 3px) var(--border-style, solid) var(--secondary-color, #7c3aed);
  padding-bottom: 2px;
  margin-bottom: 14px;
}
.experience-item {
  padding-left: 14px;
  border-left: 3px solid var(--primary-color, #db2777);
}
.experience-position {
  font-weight: 700;
  color: var(--secondary-color, #7c3aed);
}
.skill-tag {
  color: #ffffff;
  background: var(--primary-color, #db2777);
  border-radius: 999px;
  padding: 2px 12px;
}
"#;

const BOLD: &str = r#"
.resume-container {
  padding: 0 0 32px 0;
}
.resume-header {
  display: flex;
  align-items: center;
  gap: 28px;
  padding: 40px 44px;
  margin-bottom: 30px;
  color: #ffffff;
  background: var(--text-color, #111827);
  border-bottom: 10px solid var(--primary-color, #f59e0b);
}
.resume-name {
  font-size: 2.6em;
  font-weight: 900;
  text-transform: uppercase;
  letter-spacing: 0.03em;
  margin: 0 0 8px 0;
}
.contact-info {
  display: flex;
  flex-wrap: wrap;
  gap: 6px 18px;
  font-size: 0.9em;
  color: var(--primary-color, #f59e0b);
}
.photo-img {
  width: 120px;
  height: 120px;
  object-fit: cover;
  border: 5px solid var(--primary-color, #f59e0b);
}
.resume-section {
  padding: 0 44px;
}
.section-title {
  font-size: 1.3em;
  font-weight: 900;
  text-transform: uppercase;
  color: var(--text-color, #111827);
  border-bottom: var(--border-width, 4px) var(--border-style, solid) var(--primary-color, #f59e0b);
  margin-bottom: 14px;
}
.experience-position {
  font-size: 1.05em;
  font-weight: 800;
}
.experience-company {
  color: var(--secondary-color, #b45309);
  font-weight: 700;
}
.skill-tag {
  font-weight: 700;
  border: 2px solid var(--text-color, #111827);
  padding: 1px 10px;
}
"#;

pub fn creative_style() -> String {
    CREATIVE.to_string()
}

pub fn bold_style() -> String {
    BOLD.to_string()
}
