//! Resume renderer.
//!
//! Section order is fixed: header → summary → work experience → education →
//! skills → certifications → languages. A section is emitted only when its
//! backing data has something to show. Markup is built with `maud::html!`
//! and user text is spliced as `Text`; only stylesheets go in raw.

use std::collections::HashSet;

use maud::{html, Markup};

use crate::customization::Customization;
use crate::models::resume::{
    Certification, Education, LanguageSkill, PersonalInfo, ResumeRecord, SkillGroup,
    WorkExperience,
};
use crate::render::{document_shell, print_base_css, RenderedDocument, Text};
use crate::templates::TemplateDefinition;

const DATE_SEPARATOR: &str = " — ";

/// Renders `record` with `template` into a complete HTML document.
///
/// The record's customization override, when present, is merged over the
/// default customization and layered after the template CSS.
pub fn render_resume_to_html(record: &ResumeRecord, template: &TemplateDefinition) -> RenderedDocument {
    let mut css = print_base_css();
    css.push_str(RESUME_BASE);
    css.push_str(&template.css());
    if let Some(over) = &record.customization {
        css.push_str(&Customization::from_override(over).to_css_variables());
    }

    let body = html! {
        div class={ "resume-container template-" (template.key) } data-export-root {
            (render_header(&record.personal_info, template.supports_photo))
            (render_summary(&record.summary))
            (render_experience(&record.work_experience))
            (render_education(&record.education))
            (render_skills(&record.skills))
            (render_certifications(&record.certifications))
            (render_languages(&record.languages))
        }
    };

    let name = record.personal_info.full_name.trim();
    let title = if name.is_empty() {
        "Resume".to_string()
    } else {
        format!("{name} - Resume")
    };

    RenderedDocument::new(document_shell(&title, &css, body))
}

/// `"{start} — {end}"`, degrading to whichever side is present.
pub fn format_date_range(start: Option<&str>, end: Option<&str>) -> String {
    let start = start.map(str::trim).filter(|s| !s.is_empty());
    let end = end.map(str::trim).filter(|s| !s.is_empty());
    match (start, end) {
        (Some(s), Some(e)) => format!("{s}{DATE_SEPARATOR}{e}"),
        (Some(s), None) => s.to_string(),
        (None, Some(e)) => e.to_string(),
        (None, None) => String::new(),
    }
}

/// True for a `data:image/...` URI. Remote URLs are never embedded.
pub fn is_embeddable_image(uri: &str) -> bool {
    let uri = uri.trim();
    const PREFIX: &str = "data:image/";
    uri.len() > PREFIX.len()
        && uri
            .get(..PREFIX.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(PREFIX))
        && !uri.chars().any(char::is_whitespace)
}

fn non_blank(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

fn section(kind: &str, title: &str, content: Markup) -> Markup {
    html! {
        section class={ "resume-section " (kind) "-section" } data-export-section=(kind) {
            h2.section-title { (title) }
            (content)
        }
    }
}

fn render_header(info: &PersonalInfo, supports_photo: bool) -> Markup {
    let photo = info
        .photo
        .as_deref()
        .filter(|p| supports_photo && is_embeddable_image(p))
        .map(str::trim);
    let name = non_blank(&info.full_name);
    let contacts: Vec<(&str, &str)> = [
        ("email", Some(info.email.as_str())),
        ("phone", Some(info.phone.as_str())),
        ("location", Some(info.location.as_str())),
        ("linkedin", info.linked_in.as_deref()),
        ("website", info.website.as_deref()),
    ]
    .into_iter()
    .filter_map(|(kind, value)| value.and_then(non_blank).map(|v| (kind, v)))
    .collect();

    // Nothing visible: no header section at all.
    if name.is_none() && contacts.is_empty() && photo.is_none() {
        return html! {};
    }

    html! {
        header class="resume-header" data-export-section="header" {
            @if let Some(src) = photo {
                img class="photo-img" src=(Text(src)) alt=(Text(name.unwrap_or_default()));
            }
            div.header-content {
                @if let Some(name) = name {
                    h1.resume-name { (Text(name)) }
                }
                @if !contacts.is_empty() {
                    div.contact-info {
                        @for (kind, value) in &contacts {
                            span class={ "contact-item contact-" (kind) } { (Text(value)) }
                        }
                    }
                }
            }
        }
    }
}

fn render_summary(summary: &str) -> Markup {
    let Some(summary) = non_blank(summary) else {
        return html! {};
    };
    section(
        "summary",
        "Professional Summary",
        html! { p.summary-text { (Text(summary)) } },
    )
}

fn render_experience(jobs: &[WorkExperience]) -> Markup {
    if jobs.is_empty() {
        return html! {};
    }
    let items = html! {
        @for job in jobs {
            @let dates = format_date_range(Some(&job.start_date), job.effective_end());
            // A true list, never <br>-joined text: ATS parsers and break-inside
            // rules both key on <li>.
            @let bullets: Vec<&str> = job.description.iter().filter_map(|d| non_blank(d)).collect();
            div.experience-item {
                div.experience-header {
                    div {
                        div.experience-position { (Text(job.position.trim())) }
                        div.experience-company {
                            (Text(job.company.trim()))
                            @if let Some(location) = job.location.as_deref().and_then(non_blank) {
                                span.experience-location { " · " (Text(location)) }
                            }
                        }
                    }
                    @if !dates.is_empty() {
                        div.experience-date { (Text(&dates)) }
                    }
                }
                @if !bullets.is_empty() {
                    ul.experience-description {
                        @for bullet in &bullets {
                            li { (Text(bullet)) }
                        }
                    }
                }
            }
        }
    };
    section("experience", "Work Experience", items)
}

fn degree_line(entry: &Education) -> String {
    match entry.field.as_deref().and_then(non_blank) {
        Some(field) => format!("{} in {}", entry.degree.trim(), field),
        None => entry.degree.trim().to_string(),
    }
}

fn render_education(entries: &[Education]) -> Markup {
    if entries.is_empty() {
        return html! {};
    }
    let items = html! {
        @for entry in entries {
            @let dates = format_date_range(entry.start_date.as_deref(), entry.end_date.as_deref());
            div.education-item {
                div.education-header {
                    div {
                        div.education-degree { (Text(&degree_line(entry))) }
                        div.education-institution { (Text(entry.institution.trim())) }
                    }
                    @if !dates.is_empty() {
                        div.education-date { (Text(&dates)) }
                    }
                }
                @if let Some(gpa) = entry.gpa.as_deref().and_then(non_blank) {
                    div.education-gpa { "GPA: " (Text(gpa)) }
                }
            }
        }
    };
    section("education", "Education", items)
}

/// Trimmed, de-duplicated items in first-seen order.
fn distinct_items(group: &SkillGroup) -> Vec<&str> {
    let mut seen = HashSet::new();
    group
        .items
        .iter()
        .filter_map(|item| non_blank(item))
        .filter(|item| seen.insert(item.to_lowercase()))
        .collect()
}

fn render_skills(groups: &[SkillGroup]) -> Markup {
    let groups: Vec<(&SkillGroup, Vec<&str>)> = groups
        .iter()
        .map(|g| (g, distinct_items(g)))
        .filter(|(_, items)| !items.is_empty())
        .collect();
    if groups.is_empty() {
        return html! {};
    }
    let grid = html! {
        div.skills-grid {
            @for (group, items) in &groups {
                div.skill-category {
                    @if let Some(category) = non_blank(&group.category) {
                        div.skill-category-name { (Text(category)) }
                    }
                    ul.skill-items {
                        @for item in items {
                            li.skill-tag { (Text(item)) }
                        }
                    }
                }
            }
        }
    };
    section("skills", "Skills", grid)
}

fn certification_date(cert: &Certification) -> String {
    let date = cert.date.trim();
    match cert.expiry_date.as_deref().and_then(non_blank) {
        Some(expiry) if date.is_empty() => format!("Expires {expiry}"),
        Some(expiry) => format!("{date} (expires {expiry})"),
        None => date.to_string(),
    }
}

fn render_certifications(certs: &[Certification]) -> Markup {
    if certs.is_empty() {
        return html! {};
    }
    let items = html! {
        @for cert in certs {
            @let date = certification_date(cert);
            div.certification-item {
                div {
                    div.certification-name { (Text(cert.name.trim())) }
                    @if let Some(issuer) = non_blank(&cert.issuer) {
                        div.certification-issuer { (Text(issuer)) }
                    }
                }
                @if !date.is_empty() {
                    div.certification-date { (Text(&date)) }
                }
            }
        }
    };
    section("certifications", "Certifications", items)
}

fn render_languages(languages: &[LanguageSkill]) -> Markup {
    let languages: Vec<&LanguageSkill> = languages
        .iter()
        .filter(|l| non_blank(&l.language).is_some())
        .collect();
    if languages.is_empty() {
        return html! {};
    }
    let list = html! {
        ul.language-list {
            @for lang in &languages {
                li.language-item {
                    span.language-name { (Text(lang.language.trim())) }
                    @if let Some(level) = non_blank(&lang.proficiency) {
                        span.language-proficiency { (Text(level)) }
                    }
                }
            }
        }
    };
    section("languages", "Languages", list)
}

/// Structural layout shared by every template; templates add visual identity.
const RESUME_BASE: &str = r#"
body {
  font-family: var(--font-family, 'Inter', 'Helvetica Neue', Arial, sans-serif);
  font-size: var(--font-size, 11pt);
  line-height: var(--line-height, 1.5);
}
.resume-container {
  width: 100%;
  max-width: 210mm;
  margin: 0 auto;
  background: var(--background-color, #ffffff);
  color: var(--text-color, #1f2937);
}
.header-content { flex: 1; min-width: 0; }
.resume-name { line-height: 1.15; }
.contact-item { white-space: nowrap; }
.resume-section { margin-bottom: var(--section-spacing, 24px); }
.section-title { margin-top: 0; break-after: avoid; page-break-after: avoid; }
.summary-text { margin: 0; }
.experience-item, .education-item, .certification-item {
  margin-bottom: 14px;
  break-inside: avoid;
  page-break-inside: avoid;
}
.experience-item:last-child, .education-item:last-child, .certification-item:last-child {
  margin-bottom: 0;
}
.experience-header, .education-header, .certification-item {
  display: flex;
  justify-content: space-between;
  align-items: baseline;
  gap: 12px;
}
.experience-description {
  margin: 6px 0 0 0;
  padding-left: 18px;
}
.experience-description li {
  margin-bottom: 3px;
  break-inside: avoid;
  page-break-inside: avoid;
}
.skills-grid { display: flex; flex-direction: column; gap: 8px; }
.skill-category { break-inside: avoid; page-break-inside: avoid; }
.skill-category-name { font-weight: 600; margin-bottom: 4px; }
.skill-items {
  display: flex;
  flex-wrap: wrap;
  gap: 6px;
  list-style: none;
  margin: 0;
  padding: 0;
}
.language-list {
  display: flex;
  flex-wrap: wrap;
  gap: 6px 24px;
  list-style: none;
  margin: 0;
  padding: 0;
}
.language-item { break-inside: avoid; page-break-inside: avoid; }
.language-name { font-weight: 600; }
.language-proficiency { margin-left: 6px; color: #6b7280; }
.language-proficiency::before { content: "("; }
.language-proficiency::after { content: ")"; }
"#;


#[cfg(test)]
mod tests {
    use super::*;
    use crate::customization::CustomizationOverride;
    use crate::templates::get_template_style;

    fn template(key: &str) -> &'static TemplateDefinition {
        get_template_style(key).unwrap()
    }

    fn full_record() -> ResumeRecord {
        ResumeRecord {
            personal_info: PersonalInfo {
                full_name: "Jane Doe".to_string(),
                email: "jane@x.com".to_string(),
                phone: "+1 555 0100".to_string(),
                location: "Berlin".to_string(),
                linked_in: Some("linkedin.com/in/jane".to_string()),
                website: None,
                photo: Some("data:image/png;base64,iVBORw0KGgo=".to_string()),
            },
            summary: "Senior analyst.".to_string(),
            work_experience: vec![
                WorkExperience {
                    company: "Acme".to_string(),
                    position: "Lead Analyst".to_string(),
                    location: Some("Remote".to_string()),
                    start_date: "2021".to_string(),
                    end_date: Some("2023".to_string()),
                    current: true,
                    description: vec!["Built models".to_string(), "  ".to_string()],
                },
                WorkExperience {
                    company: "Globex".to_string(),
                    position: "Analyst".to_string(),
                    location: None,
                    start_date: "2018".to_string(),
                    end_date: Some("2021".to_string()),
                    current: false,
                    description: vec![],
                },
            ],
            education: vec![Education {
                institution: "TU Berlin".to_string(),
                degree: "MSc".to_string(),
                field: Some("Statistics".to_string()),
                gpa: Some("1.3".to_string()),
                start_date: Some("2016".to_string()),
                end_date: Some("2018".to_string()),
            }],
            skills: vec![SkillGroup {
                category: "Tools".to_string(),
                items: vec!["SQL".to_string(), "Python".to_string(), "sql".to_string()],
            }],
            certifications: vec![Certification {
                name: "CFA".to_string(),
                issuer: "CFA Institute".to_string(),
                date: "2020".to_string(),
                expiry_date: None,
            }],
            languages: vec![LanguageSkill {
                language: "German".to_string(),
                proficiency: "Native".to_string(),
            }],
            customization: None,
        }
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let html = render_resume_to_html(&full_record(), template("modern"));
        let html = html.as_str();
        let order = [
            "data-export-section=\"header\"",
            "data-export-section=\"summary\"",
            "data-export-section=\"experience\"",
            "data-export-section=\"education\"",
            "data-export-section=\"skills\"",
            "data-export-section=\"certifications\"",
            "data-export-section=\"languages\"",
        ];
        let positions: Vec<usize> = order.iter().map(|m| html.find(m).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_escapes_every_user_field() {
        let payload = r#"<script>alert("x")</script> & 'quote'"#;
        let escaped = "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#39;quote&#39;";
        let p = || payload.to_string();

        let mut record = full_record();
        let info = &mut record.personal_info;
        info.full_name = p();
        info.email = p();
        info.phone = p();
        info.location = p();
        info.linked_in = Some(p());
        info.website = Some(p());
        record.summary = p();

        let job = &mut record.work_experience[0];
        job.company = p();
        job.position = p();
        job.location = Some(p());
        job.start_date = p();
        job.end_date = Some(p());
        job.current = false;
        job.description = vec![p()];

        let edu = &mut record.education[0];
        edu.institution = p();
        edu.degree = p();
        edu.field = Some(p());
        edu.gpa = Some(p());
        edu.start_date = Some(p());
        edu.end_date = Some(p());

        record.skills[0].category = p();
        record.skills[0].items = vec![p()];

        let cert = &mut record.certifications[0];
        cert.name = p();
        cert.issuer = p();
        cert.date = p();
        cert.expiry_date = Some(p());

        record.languages[0].language = p();
        record.languages[0].proficiency = p();

        let injected = 27;
        let html = render_resume_to_html(&record, template("modern"));
        let html = html.as_str();

        assert!(!html.contains("<script"));
        assert!(!html.contains("</script>"));
        assert!(!html.contains(r#"("x")"#));
        assert!(!html.contains("'quote'"));
        assert!(html.matches(escaped).count() >= injected);
    }

    #[test]
    fn test_quote_in_photo_uri_stays_inside_attribute() {
        let mut record = full_record();
        record.personal_info.photo = Some("data:image/png;base64,AAA\"onerror=\"alert(1)".to_string());
        let html = render_resume_to_html(&record, template("modern"));
        let html = html.as_str();
        assert!(html.contains("src=\"data:image/png;base64,AAA&quot;onerror=&quot;alert(1)\""));
        assert!(!html.contains("onerror=\""));
    }

    #[test]
    fn test_blank_personal_info_omits_header() {
        let html = render_resume_to_html(&ResumeRecord::default(), template("modern"));
        let html = html.as_str();
        assert_eq!(html.matches("data-export-section").count(), 0);
        assert!(!html.contains("<header"));
        assert!(html.contains("data-export-root"));
    }

    #[test]
    fn test_photo_alone_keeps_header() {
        let record = ResumeRecord {
            personal_info: PersonalInfo {
                photo: Some("data:image/png;base64,iVBORw0KGgo=".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let with_photo = render_resume_to_html(&record, template("modern"));
        assert_eq!(with_photo.as_str().matches("data-export-section=\"header\"").count(), 1);
        // Photo-less templates never show it, so nothing is left to head the page.
        let without = render_resume_to_html(&record, template("minimalist"));
        assert!(!without.as_str().contains("data-export-section"));
    }

    #[test]
    fn test_empty_experience_omits_section() {
        let mut record = full_record();
        record.work_experience.clear();
        let html = render_resume_to_html(&record, template("modern"));
        assert!(!html.as_str().contains("Work Experience"));
        assert!(!html.as_str().contains("data-export-section=\"experience\""));
    }

    #[test]
    fn test_minimalist_summary_without_experience() {
        let record = ResumeRecord {
            personal_info: PersonalInfo {
                full_name: "Jane Doe".to_string(),
                ..Default::default()
            },
            summary: "Senior analyst.".to_string(),
            ..Default::default()
        };
        let html = render_resume_to_html(&record, template("minimalist"));
        let html = html.as_str();
        assert!(html.contains("data-export-section=\"summary\""));
        assert!(html.contains("<p class=\"summary-text\">Senior analyst.</p>"));
        assert!(!html.contains("data-export-section=\"experience\""));
        assert!(!html.contains("data-export-section=\"education\""));
        assert!(!html.contains("data-export-section=\"skills\""));
        assert!(!html.contains("data-export-section=\"certifications\""));
        assert!(!html.contains("data-export-section=\"languages\""));
        assert!(!html.contains("class=\"contact-info\""));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut record = full_record();
        record.customization = Some(CustomizationOverride {
            primary_color: Some("#123456".to_string()),
            ..Default::default()
        });
        let a = render_resume_to_html(&record, template("executive"));
        let b = render_resume_to_html(&record, template("executive"));
        assert_eq!(a.as_str().as_bytes(), b.as_str().as_bytes());
    }

    #[test]
    fn test_current_role_renders_present() {
        let html = render_resume_to_html(&full_record(), template("modern"));
        assert!(html.as_str().contains("2021 — Present"));
        assert!(!html.as_str().contains("2021 — 2023"));
        assert!(html.as_str().contains("2018 — 2021"));
    }

    #[test]
    fn test_bullets_are_list_items() {
        let html = render_resume_to_html(&full_record(), template("modern"));
        let html = html.as_str();
        assert!(html.contains("<ul class=\"experience-description\"><li>Built models</li></ul>"));
        assert!(!html.contains("<br"));
    }

    #[test]
    fn test_photo_only_for_photo_templates() {
        let record = full_record();
        let with_photo = render_resume_to_html(&record, template("modern"));
        assert!(with_photo.as_str().contains("<img class=\"photo-img\""));
        let without = render_resume_to_html(&record, template("minimalist"));
        assert!(!without.as_str().contains("<img"));
    }

    #[test]
    fn test_remote_photo_urls_are_dropped() {
        let mut record = full_record();
        record.personal_info.photo = Some("https://tracker.example/p.png".to_string());
        let html = render_resume_to_html(&record, template("modern"));
        assert!(!html.as_str().contains("<img"));
    }

    #[test]
    fn test_embeddable_image() {
        assert!(is_embeddable_image("data:image/png;base64,iVBORw0KGgo="));
        assert!(is_embeddable_image("DATA:IMAGE/jpeg;base64,/9j/4AAQ"));
        assert!(!is_embeddable_image("https://example.com/me.png"));
        assert!(!is_embeddable_image("data:text/html;base64,PHNjcmlwdD4="));
        assert!(!is_embeddable_image("data:image/"));
        assert!(!is_embeddable_image("data:image/png;base64,AA A"));
    }

    #[test]
    fn test_skills_deduplicated_case_insensitively() {
        let html = render_resume_to_html(&full_record(), template("modern"));
        let html = html.as_str();
        assert_eq!(html.matches("<li class=\"skill-tag\">").count(), 2);
        assert!(html.contains("<li class=\"skill-tag\">SQL</li>"));
    }

    #[test]
    fn test_customization_block_only_when_overridden() {
        let mut record = full_record();
        let plain = render_resume_to_html(&record, template("modern"));
        assert!(!plain.as_str().contains(":root {"));

        record.customization = Some(CustomizationOverride::default());
        let custom = render_resume_to_html(&record, template("modern"));
        assert!(custom.as_str().contains(":root {"));
        assert!(custom.as_str().contains("--primary-color: #2563eb;"));
    }

    #[test]
    fn test_embeds_print_hints() {
        let html = render_resume_to_html(&full_record(), template("classic"));
        assert!(html.as_str().contains("@page"));
        assert!(html.as_str().contains("print-color-adjust: exact"));
        assert!(html.as_str().contains("data-export-root"));
    }

    #[test]
    fn test_date_range_formats() {
        assert_eq!(format_date_range(Some("2020"), Some("Present")), "2020 — Present");
        assert_eq!(format_date_range(Some("2020"), None), "2020");
        assert_eq!(format_date_range(None, Some("2021")), "2021");
        assert_eq!(format_date_range(Some(" "), None), "");
    }
}
