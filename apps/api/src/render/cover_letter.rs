//! Cover-letter structure inference and rendering.
//!
//! A cover letter is stored as one free-form blob. `parse_cover_letter` infers
//! header / recipient / salutation / body / footer from line patterns, and
//! `render_cover_letter_to_html` formats the result. Parsing is tolerant:
//! without a recognisable header everything stays in the body, and without a
//! closing phrase near the end no footer is produced.

use lazy_static::lazy_static;
use maud::html;
use regex::Regex;
use serde::Serialize;

use crate::render::{document_shell, print_base_css, RenderedDocument, Text};

/// Closing phrases are only searched for among this many trailing lines.
const FOOTER_WINDOW: usize = 6;
const MAX_HEADER_LINES: usize = 6;
const MAX_HEADER_LINE_LEN: usize = 80;

lazy_static! {
    static ref CLOSING_PATTERN: Regex = Regex::new(
        r"(?i)^(sincerely|sincerely yours|yours sincerely|yours truly|yours faithfully|faithfully|best regards|kind regards|warm regards|warmest regards|regards|best wishes|best|respectfully|respectfully yours|cordially|thank you|thanks|with gratitude|with appreciation)\s*[,.!]?$"
    )
    .unwrap();

    static ref RECIPIENT_PATTERN: Regex = Regex::new(r"(?i)^(to|dear)\b").unwrap();

    static ref SALUTATION_PATTERN: Regex = Regex::new(r"(?i)^dear\b").unwrap();

    static ref CONTACT_PATTERN: Regex = Regex::new(
        r"(?i)([\w.+-]+@[\w-]+\.[\w.-]+|\+?\d[\d\s().-]{6,}\d|https?://|www\.|linkedin\.com|github\.com)"
    )
    .unwrap();

    static ref NAME_PATTERN: Regex =
        Regex::new(r"^\p{Lu}[\p{L}'.-]*(\s+\p{Lu}[\p{L}'.-]*){0,3}$").unwrap();

    static ref BULLET_PATTERN: Regex = Regex::new(r"^[•\-*]\s+(.+)$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum BodyBlock {
    Paragraph(String),
    BulletList(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverLetterFooter {
    pub closing: String,
    pub signature: Vec<String>,
}

/// The inferred structure of a cover letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverLetterSections {
    pub header: Vec<String>,
    pub recipient: Vec<String>,
    pub salutation: Option<String>,
    pub body: Vec<BodyBlock>,
    pub footer: Option<CoverLetterFooter>,
}

impl CoverLetterSections {
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
            && self.recipient.is_empty()
            && self.salutation.is_none()
            && self.body.is_empty()
            && self.footer.is_none()
    }
}

pub fn parse_cover_letter(content: &str) -> CoverLetterSections {
    let lines: Vec<&str> = content.lines().map(str::trim).collect();
    let mut sections = CoverLetterSections::default();

    // Footer: the last closing phrase within the trailing window.
    let mut body_end = lines.len();
    let non_empty: Vec<usize> = (0..lines.len()).filter(|&i| !lines[i].is_empty()).collect();
    let window = &non_empty[non_empty.len().saturating_sub(FOOTER_WINDOW)..];
    if let Some(&closing_at) = window.iter().rev().find(|&&i| CLOSING_PATTERN.is_match(lines[i])) {
        let signature = lines[closing_at + 1..]
            .iter()
            .filter(|l| !l.is_empty())
            .map(|l| l.to_string())
            .collect();
        sections.footer = Some(CoverLetterFooter {
            closing: lines[closing_at].to_string(),
            signature,
        });
        body_end = closing_at;
    }

    let mut pos = skip_blank(&lines, 0, body_end);

    // Header: a short contact-like block at the very top.
    let header_end = block_end(&lines, pos, body_end);
    if looks_like_header(&lines[pos..header_end]) {
        sections.header = lines[pos..header_end].iter().map(|l| l.to_string()).collect();
        pos = skip_blank(&lines, header_end, body_end);

        // Recipient blocks start with "To" or "Dear".
        while pos < body_end && RECIPIENT_PATTERN.is_match(lines[pos]) {
            let end = block_end(&lines, pos, body_end);
            for (offset, line) in lines[pos..end].iter().enumerate() {
                if sections.salutation.is_none() && SALUTATION_PATTERN.is_match(line) {
                    sections.salutation = Some(line.to_string());
                    // Anything after the salutation in the same block is body.
                    if offset + 1 < end - pos {
                        pos += offset + 1;
                        sections.body = parse_body(&lines[pos..body_end]);
                        return sections;
                    }
                } else if sections.salutation.is_none() {
                    sections.recipient.push(line.to_string());
                } else {
                    break;
                }
            }
            pos = skip_blank(&lines, end, body_end);
            if sections.salutation.is_some() {
                break;
            }
        }
    }

    sections.body = parse_body(&lines[pos..body_end]);
    sections
}

fn skip_blank(lines: &[&str], mut pos: usize, end: usize) -> usize {
    while pos < end && lines[pos].is_empty() {
        pos += 1;
    }
    pos
}

fn block_end(lines: &[&str], start: usize, end: usize) -> usize {
    let mut pos = start;
    while pos < end && !lines[pos].is_empty() {
        pos += 1;
    }
    pos
}

fn looks_like_header(block: &[&str]) -> bool {
    if block.is_empty()
        || block.len() > MAX_HEADER_LINES
        || block.iter().any(|l| l.chars().count() > MAX_HEADER_LINE_LEN)
        || RECIPIENT_PATTERN.is_match(block[0])
    {
        return false;
    }
    // Needs a contact line, either on top or somewhere under a name line.
    let contact_at = block.iter().position(|l| CONTACT_PATTERN.is_match(l));
    match contact_at {
        Some(0) => true,
        Some(_) => NAME_PATTERN.is_match(block[0]),
        None => false,
    }
}

fn parse_body(lines: &[&str]) -> Vec<BodyBlock> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut bullets: Vec<String> = Vec::new();

    fn flush_paragraph(paragraph: &mut Vec<&str>, blocks: &mut Vec<BodyBlock>) {
        if !paragraph.is_empty() {
            blocks.push(BodyBlock::Paragraph(paragraph.join(" ")));
            paragraph.clear();
        }
    }
    fn flush_bullets(bullets: &mut Vec<String>, blocks: &mut Vec<BodyBlock>) {
        if !bullets.is_empty() {
            blocks.push(BodyBlock::BulletList(std::mem::take(bullets)));
        }
    }

    for line in lines {
        if line.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_bullets(&mut bullets, &mut blocks);
        } else if let Some(item) = BULLET_PATTERN.captures(line).and_then(|c| c.get(1)) {
            flush_paragraph(&mut paragraph, &mut blocks);
            bullets.push(item.as_str().trim().to_string());
        } else {
            flush_bullets(&mut bullets, &mut blocks);
            paragraph.push(line);
        }
    }
    flush_paragraph(&mut paragraph, &mut blocks);
    flush_bullets(&mut bullets, &mut blocks);
    blocks
}

/// Renders a cover-letter blob into a complete HTML document.
pub fn render_cover_letter_to_html(content: &str) -> RenderedDocument {
    let sections = parse_cover_letter(content);

    let mut css = print_base_css();
    css.push_str(COVER_LETTER_CSS);

    let body = html! {
        div.cover-letter-container data-export-root {
            @if !sections.header.is_empty() {
                header.cover-letter-header data-export-section="header" {
                    @for (i, line) in sections.header.iter().enumerate() {
                        @if i == 0 {
                            div.sender-name { (Text(line)) }
                        } @else {
                            div.sender-line { (Text(line)) }
                        }
                    }
                }
            }
            @if !sections.recipient.is_empty() {
                section.cover-letter-recipient data-export-section="recipient" {
                    @for line in &sections.recipient {
                        div.recipient-line { (Text(line)) }
                    }
                }
            }
            @if sections.salutation.is_some() || !sections.body.is_empty() {
                section.cover-letter-body data-export-section="body" {
                    @if let Some(salutation) = &sections.salutation {
                        p.salutation { (Text(salutation)) }
                    }
                    @for block in &sections.body {
                        @match block {
                            BodyBlock::Paragraph(text) => { p { (Text(text)) } }
                            BodyBlock::BulletList(items) => {
                                ul.cover-letter-list {
                                    @for item in items {
                                        li { (Text(item)) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            @if let Some(footer) = &sections.footer {
                footer.cover-letter-footer data-export-section="footer" {
                    p.closing { (Text(&footer.closing)) }
                    @for line in &footer.signature {
                        div.signature { (Text(line)) }
                    }
                }
            }
        }
    };

    let title = sections
        .header
        .first()
        .map(|name| format!("{name} - Cover Letter"))
        .unwrap_or_else(|| "Cover Letter".to_string());
    RenderedDocument::new(document_shell(&title, &css, body))
}

const COVER_LETTER_CSS: &str = r#"
body {
  font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif;
  font-size: 11pt;
  line-height: 1.6;
}
.cover-letter-container {
  width: 100%;
  max-width: 210mm;
  margin: 0 auto;
  padding: 12px 8px;
  color: #1f2937;
}
.cover-letter-header {
  margin-bottom: 28px;
  padding-bottom: 14px;
  border-bottom: 2px solid #2563eb;
}
.sender-name { font-size: 1.6em; font-weight: 700; color: #1e3a8a; }
.sender-line { font-size: 0.92em; color: #4b5563; }
.cover-letter-recipient { margin-bottom: 22px; }
.recipient-line { line-height: 1.45; }
.cover-letter-body p { margin: 0 0 12px 0; text-align: justify; }
.cover-letter-body .salutation { margin-bottom: 14px; text-align: left; }
.cover-letter-list { margin: 0 0 12px 0; padding-left: 20px; }
.cover-letter-list li { margin-bottom: 4px; break-inside: avoid; page-break-inside: avoid; }
.cover-letter-header, .cover-letter-recipient, .cover-letter-footer {
  break-inside: avoid;
  page-break-inside: avoid;
}
.cover-letter-footer { margin-top: 26px; }
.cover-letter-footer .closing { margin: 0 0 28px 0; }
.signature { font-weight: 600; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Doe\njane@x.com\n\nTo\nAcme Corp,\n\nDear Hiring Manager,\n\nI am writing...\n\nSincerely,\nJane Doe";

    #[test]
    fn test_infers_all_sections() {
        let sections = parse_cover_letter(SAMPLE);
        assert_eq!(sections.header, vec!["Jane Doe", "jane@x.com"]);
        assert!(sections.recipient.contains(&"Acme Corp,".to_string()));
        assert_eq!(sections.salutation.as_deref(), Some("Dear Hiring Manager,"));
        assert_eq!(
            sections.body,
            vec![BodyBlock::Paragraph("I am writing...".to_string())]
        );
        let footer = sections.footer.unwrap();
        assert_eq!(footer.closing, "Sincerely,");
        assert_eq!(footer.signature, vec!["Jane Doe"]);
    }

    #[test]
    fn test_no_header_keeps_everything_in_body() {
        let text = "I am excited to apply for the analyst role.\nIt matches my background.\n\nThank you for your consideration of my application today.";
        let sections = parse_cover_letter(text);
        assert!(sections.header.is_empty());
        assert!(sections.recipient.is_empty());
        assert!(sections.footer.is_none());
        assert_eq!(sections.body.len(), 2);
        assert_eq!(
            sections.body[0],
            BodyBlock::Paragraph(
                "I am excited to apply for the analyst role. It matches my background."
                    .to_string()
            )
        );
    }

    #[test]
    fn test_title_cased_opener_is_not_a_header() {
        let text = "Application For Analyst Role\nI am writing to apply for the role.\n\nSincerely,\nJane";
        let sections = parse_cover_letter(text);
        assert!(sections.header.is_empty());
        assert_eq!(
            sections.body,
            vec![BodyBlock::Paragraph(
                "Application For Analyst Role I am writing to apply for the role.".to_string()
            )]
        );
        let html = render_cover_letter_to_html(text);
        assert!(!html.as_str().contains("data-export-section=\"header\""));
    }

    #[test]
    fn test_name_with_contact_below_address_is_a_header() {
        let text = "Jane Doe\n12 Main Street\njane@x.com\n\nDear Team,\n\nHello.";
        assert_eq!(
            parse_cover_letter(text).header,
            vec!["Jane Doe", "12 Main Street", "jane@x.com"]
        );
        // Name-like lines with no contact line under them.
        let text = "Analyst Application\nSecond Line Here\n\nDear Team,\n\nHello.";
        assert!(parse_cover_letter(text).header.is_empty());
    }

    #[test]
    fn test_closing_outside_window_is_not_a_footer() {
        let mut text = String::from("Regards,\n");
        for i in 0..8 {
            text.push_str(&format!("Paragraph line {i}.\n"));
        }
        let sections = parse_cover_letter(&text);
        assert!(sections.footer.is_none());
    }

    #[test]
    fn test_detects_bullets_in_body() {
        let text = "Jane Doe\njane@x.com\n\nDear Team,\n\nHighlights:\n• Led migration\n- Cut costs 20%\n* Mentored five engineers\n\nBest regards,\nJane";
        let sections = parse_cover_letter(text);
        assert_eq!(
            sections.body,
            vec![
                BodyBlock::Paragraph("Highlights:".to_string()),
                BodyBlock::BulletList(vec![
                    "Led migration".to_string(),
                    "Cut costs 20%".to_string(),
                    "Mentored five engineers".to_string(),
                ]),
            ]
        );
        assert_eq!(sections.footer.unwrap().closing, "Best regards,");
    }

    #[test]
    fn test_salutation_followed_by_text_in_same_block() {
        let text = "Jane Doe\n+49 30 1234567\n\nDear Ms. Smith,\nI would love to join.\n\nThanks,\nJane";
        let sections = parse_cover_letter(text);
        assert_eq!(sections.salutation.as_deref(), Some("Dear Ms. Smith,"));
        assert_eq!(
            sections.body,
            vec![BodyBlock::Paragraph("I would love to join.".to_string())]
        );
        assert!(sections.footer.is_some());
    }

    #[test]
    fn test_empty_content() {
        let sections = parse_cover_letter("");
        assert!(sections.is_empty());
        let html = render_cover_letter_to_html("   \n\n");
        assert!(!html.as_str().contains("data-export-section"));
        assert!(html.as_str().contains("data-export-root"));
    }

    #[test]
    fn test_render_escapes_and_marks_sections() {
        let text = "Jane Doe\n<jane@x.com>\n\nDear \"Team\",\n\n<b>I & you</b>\n\nSincerely,\nJane";
        let html = render_cover_letter_to_html(text);
        let html = html.as_str();
        assert!(html.contains("<div class=\"sender-line\">&lt;jane@x.com&gt;</div>"));
        assert!(html.contains("Dear &quot;Team&quot;,"));
        assert!(html.contains("<p>&lt;b&gt;I &amp; you&lt;/b&gt;</p>"));
        assert!(!html.contains("<b>"));
        for section in ["header", "body", "footer"] {
            assert!(html.contains(&format!("data-export-section=\"{section}\"")));
        }
        assert!(html.contains("@page"));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render_cover_letter_to_html(SAMPLE), render_cover_letter_to_html(SAMPLE));
    }
}
