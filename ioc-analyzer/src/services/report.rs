//! Heuristic conversion of model output into the HTML incident report.
//!
//! The text is cut into sections at blank lines. Each section is matched
//! against the known labels in priority order; anything unlabeled becomes a
//! plain paragraph. Model text is inserted as-is, without escaping.

use once_cell::sync::Lazy;
use regex::Regex;

pub const TITLE_BLOCK: &str = r#"<div class="text-center"><h1>IOC Analysis</h1></div>"#;
pub const DETAILS_HEADING: &str = "<h2>Incident Details:</h2>";

const SECTION_SEPARATOR: &str = "\n\n";

/// "1. text" up to the end of the line; the number is kept.
static NUMBERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.\s+[^\n]*").expect("numbered item pattern"));

/// "- text" up to the end of the line; only the text is kept.
static BULLET_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-\s+([^\n]*)").expect("bullet item pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    NatureOfThreat,
    Impact,
    MitigationStrategies,
}

/// Evaluated top to bottom; the first matching prefix wins.
const LABEL_RULES: &[(&str, Label)] = &[
    ("Nature of Threat:", Label::NatureOfThreat),
    ("Impact:", Label::Impact),
    ("Mitigation Strategies:", Label::MitigationStrategies),
];

/// One blank-line separated block of model output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section<'a> {
    NatureOfThreat(&'a str),
    Impact(&'a str),
    MitigationStrategies {
        numbered: Vec<&'a str>,
        bulleted: Vec<&'a str>,
    },
    Paragraph(&'a str),
}

impl<'a> Section<'a> {
    pub fn classify(raw: &'a str) -> Self {
        let Some((prefix, label)) = LABEL_RULES
            .iter()
            .find(|(prefix, _)| raw.starts_with(prefix))
        else {
            return Section::Paragraph(raw);
        };

        match label {
            Label::NatureOfThreat => Section::NatureOfThreat(remainder(raw, prefix)),
            Label::Impact => Section::Impact(remainder(raw, prefix)),
            Label::MitigationStrategies => Section::MitigationStrategies {
                numbered: NUMBERED_ITEM.find_iter(raw).map(|m| m.as_str()).collect(),
                bulleted: BULLET_ITEM
                    .captures_iter(raw)
                    .filter_map(|c| c.get(1))
                    .map(|m| m.as_str().trim())
                    .collect(),
            },
        }
    }

    fn render_into(&self, html: &mut String) {
        match self {
            Section::NatureOfThreat(body) => {
                html.push_str("<h3>Nature of Threat:</h3><p>");
                html.push_str(body);
                html.push_str("</p>");
            }
            Section::Impact(body) => {
                html.push_str("<h3>Impact:</h3><p style='font-size: 1.2em; color: red;'>");
                html.push_str(body);
                html.push_str("</p>");
            }
            Section::MitigationStrategies { numbered, bulleted } => {
                html.push_str("<h3>Mitigation Strategies:</h3>");
                if numbered.is_empty() && bulleted.is_empty() {
                    return;
                }
                html.push_str("<ol>");
                for item in numbered {
                    html.push_str("<li><strong>");
                    html.push_str(item);
                    html.push_str("</strong></li>");
                }
                for item in bulleted {
                    html.push_str("<li>");
                    html.push_str(item);
                    html.push_str("</li>");
                }
                html.push_str("</ol>");
            }
            Section::Paragraph(raw) => {
                html.push_str("<p>");
                html.push_str(raw);
                html.push_str("</p>");
            }
        }
    }
}

/// Text after the first ": ". A label written without the space is
/// stripped directly instead.
fn remainder<'a>(section: &'a str, label: &str) -> &'a str {
    match section.split_once(": ") {
        Some((_, rest)) => rest,
        None => section[label.len()..].trim_start(),
    }
}

/// Render the model's answer as the report fragment shown on the page.
///
/// `_ioc` is accepted from the request but not rendered.
pub fn render_report(response_text: &str, _ioc: Option<&str>) -> String {
    let mut html = String::with_capacity(response_text.len() + 256);
    html.push_str(TITLE_BLOCK);
    html.push_str(DETAILS_HEADING);

    for raw in response_text.split(SECTION_SEPARATOR) {
        Section::classify(raw).render_into(&mut html);
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Nature of Threat: Phishing\n\nImpact: High\n\nMitigation Strategies: 1. Patch systems\n- Train staff";

    fn header() -> String {
        format!("{}{}", TITLE_BLOCK, DETAILS_HEADING)
    }

    #[test]
    fn report_starts_with_title_and_heading() {
        for text in ["", "anything", SAMPLE, "Impact: none"] {
            assert!(render_report(text, None).starts_with(&header()));
        }
    }

    #[test]
    fn unlabeled_paragraphs_keep_their_order() {
        let html = render_report("First finding.\n\nSecond finding.", None);
        assert_eq!(
            html,
            format!("{}<p>First finding.</p><p>Second finding.</p>", header())
        );
    }

    #[test]
    fn labeled_sections_render_their_blocks() {
        let html = render_report(SAMPLE, None);

        assert_eq!(
            html,
            format!(
                "{}{}{}{}",
                header(),
                "<h3>Nature of Threat:</h3><p>Phishing</p>",
                "<h3>Impact:</h3><p style='font-size: 1.2em; color: red;'>High</p>",
                "<h3>Mitigation Strategies:</h3><ol><li><strong>1. Patch systems</strong></li><li>Train staff</li></ol>",
            )
        );
    }

    #[test]
    fn numbered_items_precede_bullets() {
        let section = Section::classify(
            "Mitigation Strategies:\n- Rotate keys\n1. Isolate host\n-   Notify users  \n2. Reimage",
        );

        assert_eq!(
            section,
            Section::MitigationStrategies {
                numbered: vec!["1. Isolate host", "2. Reimage"],
                bulleted: vec!["Rotate keys", "Notify users"],
            }
        );

        let mut html = String::new();
        section.render_into(&mut html);
        assert!(html.find("Isolate host").unwrap() < html.find("Rotate keys").unwrap());
    }

    #[test]
    fn mitigation_without_items_has_no_list() {
        let html = render_report("Mitigation Strategies: keep calm", None);
        assert!(html.ends_with("<h3>Mitigation Strategies:</h3>"));
        assert!(!html.contains("<ol>"));
    }

    #[test]
    fn partial_labels_fall_through_to_paragraph() {
        for raw in [
            "Nature of threat: lowercase",
            "The Impact: mid-sentence",
            "**Impact:** markdown",
            "Mitigation: short label",
        ] {
            assert_eq!(Section::classify(raw), Section::Paragraph(raw));
        }
    }

    #[test]
    fn empty_sections_still_get_a_paragraph() {
        let html = render_report("a\n\n\n\nb", None);
        assert_eq!(html, format!("{}<p>a</p><p></p><p>b</p>", header()));

        assert_eq!(render_report("", None), format!("{}<p></p>", header()));
    }

    #[test]
    fn remainder_starts_after_first_colon_space() {
        assert_eq!(
            Section::classify("Impact: Critical: data exfiltration"),
            Section::Impact("Critical: data exfiltration")
        );
        assert_eq!(
            Section::classify("Nature of Threat:Ransomware"),
            Section::NatureOfThreat("Ransomware")
        );
    }

    #[test]
    fn model_text_is_not_escaped() {
        let html = render_report("<script>alert(1)</script>", None);
        assert!(html.ends_with("<p><script>alert(1)</script></p>"));
    }

    #[test]
    fn ioc_does_not_change_output() {
        assert_eq!(
            render_report(SAMPLE, Some("44d88612fea8a8f36de82e1278abb02f")),
            render_report(SAMPLE, None)
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render_report(SAMPLE, None), render_report(SAMPLE, None));
    }
}
