use indexmap::IndexMap;

use crate::models::cv::{Certification, CvDocument, LanguageSkill};

use super::escape::escape;
use super::urls::qr_image_url;

/// Sidebar container: skills by category, languages, certifications, and the
/// portfolio QR block.
pub fn render_sidebar(doc: &CvDocument) -> String {
    format!(
        r#"<div class="section">
    <h3 class="section-title"><i class="fas fa-code"></i> Technical Skills</h3>
    {skills}
</div>
<div class="section">
    <h3 class="section-title"><i class="fas fa-globe"></i> Languages</h3>
    {languages}
</div>
<div class="section">
    <h3 class="section-title"><i class="fas fa-award"></i> Certifications</h3>
    {certifications}
</div>
<div class="qr-code">
    <img src="{qr}" alt="QR Code to Portfolio">
    <div class="qr-text">Scan to view my portfolio</div>
</div>"#,
        skills = skills_html(&doc.skills),
        languages = languages_html(&doc.languages),
        certifications = certifications_html(&doc.certifications),
        qr = escape(&qr_image_url(&doc.personal_info.portfolio)),
    )
}

/// Turns a camel-case category key into a display title: a space before each
/// internal uppercase letter, first character capitalized.
/// `programmingLanguages` → `Programming Languages`.
pub fn humanize_category(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else {
            if ch.is_uppercase() {
                out.push(' ');
            }
            out.push(ch);
        }
    }
    out
}

fn skills_html(skills: &IndexMap<String, Vec<String>>) -> String {
    let mut html = String::new();
    for (category, list) in skills {
        let tags: String = list
            .iter()
            .map(|skill| format!(r#"<span class="skill-tag">{}</span>"#, escape(skill)))
            .collect();
        html.push_str(&format!(
            r#"<div class="skill-category">
    <h4>{title}</h4>
    <div class="skills-list">{tags}</div>
</div>"#,
            title = escape(&humanize_category(category)),
        ));
    }
    html
}

fn languages_html(languages: &[LanguageSkill]) -> String {
    languages
        .iter()
        .map(|lang| {
            format!(
                r#"<div class="language-item">
    <span class="language-name">{language}</span>
    <span class="language-level">{level}</span>
</div>"#,
                language = escape(&lang.language),
                level = escape(&lang.level),
            )
        })
        .collect()
}

fn certifications_html(certifications: &[Certification]) -> String {
    certifications
        .iter()
        .map(|cert| {
            format!(
                r#"<div class="certification-item">
    <div class="certification-name">{name}</div>
    <div class="certification-org">{issuer}</div>
</div>"#,
                name = escape(&cert.name),
                issuer = escape(&cert.issuer),
            )
        })
        .collect()
}
