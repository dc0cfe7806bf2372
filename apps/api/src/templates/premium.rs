//! Premium category: executive, elegant.

const EXECUTIVE: &str = r#"
.resume-container {
  padding: 0 0 36px 0;
}
.resume-header {
  display: flex;
  align-items: center;
  gap: 28px;
  padding: 38px 52px;
  margin-bottom: 30px;
  color: #f8fafc;
  background: linear-gradient(160deg, var(--primary-color, #0f172a) 0%, var(--secondary-color, #334155) 100%);
  border-bottom: 3px solid #c9a227;
}
.resume-name {
  font-family: var(--heading-font, 'Playfair Display', Georgia, serif);
  font-size: 2.4em;
  font-weight: 700;
  letter-spacing: 0.02em;
  margin: 0 0 10px 0;
}
.contact-info {
  display: flex;
  flex-wrap: wrap;
  gap: 6px 20px;
  font-size: 0.9em;
  color: #e2e8f0;
}
.photo-img {
  width: 118px;
  height: 118px;
  object-fit: cover;
  border-radius: 50%;
  border: 3px solid #c9a227;
}
.resume-section {
  padding: 0 52px;
}
.section-title {
  font-family: var(--heading-font, 'Playfair Display', Georgia, serif);
  font-size: 1.2em;
  font-weight: 700;
  letter-spacing: 0.05em;
  color: var(--primary-color, #0f172a);
  border-bottom: var(--border-width, 1px) var(--border-style, solid) #c9a227;
  padding-bottom: 5px;
  margin-bottom: 16px;
}
.experience-position {
  font-weight: 700;
  color: var(--primary-color, #0f172a);
}
.experience-company {
  color: #8a6d1d;
  font-weight: 600;
}
.summary-text {
  font-size: 1.05em;
  border-left: 3px solid #c9a227;
  padding-left: 14px;
}
.skill-tag {
  border: 1px solid #c9a227;
  border-radius: var(--border-radius, 2px);
  padding: 1px 10px;
}
"#;

const ELEGANT: &str = r#"
.resume-container {
  padding: 12px 56px 36px 56px;
  font-family: var(--font-family, 'Lato', 'Helvetica Neue', Arial, sans-serif);
}
.resume-header {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
  gap: 14px;
  padding: 30px 0 22px 0;
  margin-bottom: 26px;
  border-bottom: var(--border-width, 1px) var(--border-style, solid) var(--primary-color, #9d7c5b);
  background: none;
}
.resume-name {
  font-family: var(--heading-font, 'Cormorant Garamond', Georgia, serif);
  font-size: 2.6em;
  font-weight: 500;
  letter-spacing: 0.12em;
  text-transform: uppercase;
  color: var(--text-color, #292524);
  margin: 0 0 6px 0;
}
.contact-info {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: 4px 18px;
  font-size: 0.86em;
  letter-spacing: 0.04em;
  color: #78716c;
}
.photo-img {
  width: 100px;
  height: 100px;
  object-fit: cover;
  border-radius: 50%;
  border: 1px solid var(--primary-color, #9d7c5b);
  padding: 4px;
}
.section-title {
  font-family: var(--heading-font, 'Cormorant Garamond', Georgia, serif);
  font-size: 1.25em;
  font-weight: 500;
  text-align: center;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--primary-color, #9d7c5b);
  border-bottom: none;
  margin-bottom: 14px;
}
.section-title::after {
  content: "";
  display: block;
  width: 48px;
  margin: 6px auto 0 auto;
  border-bottom: var(--border-width, 1px) var(--border-style, solid) var(--primary-color, #9d7c5b);
}
.experience-position {
  font-weight: 600;
  letter-spacing: 0.02em;
}
.experience-company {
  font-style: italic;
  color: var(--secondary-color, #57534e);
}
.skill-tag {
  letter-spacing: 0.04em;
}
.skill-tag + .skill-tag::before {
  content: " / ";
  color: var(--primary-color, #9d7c5b);
}
"#;

pub fn executive_style() -> String {
    EXECUTIVE.to_string()
}

pub fn elegant_style() -> String {
    ELEGANT.to_string()
}
