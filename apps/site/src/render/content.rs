use crate::models::cv::{CvDocument, EducationEntry, ExperienceEntry, Project, ProjectLinks};

use super::escape::escape;

/// Main-content container: experience timeline, education, projects.
pub fn render_content(doc: &CvDocument) -> String {
    format!(
        r#"<div class="section">
    <h3 class="section-title"><i class="fas fa-briefcase"></i> Professional Experience</h3>
    {experience}
</div>
<div class="section">
    <h3 class="section-title"><i class="fas fa-graduation-cap"></i> Education</h3>
    {education}
</div>
<div class="section">
    <h3 class="section-title"><i class="fas fa-project-diagram"></i> Notable Projects</h3>
    {projects}
</div>"#,
        experience = experience_html(&doc.experience),
        education = education_html(&doc.education),
        projects = projects_html(&doc.projects),
    )
}

fn experience_html(experience: &[ExperienceEntry]) -> String {
    experience
        .iter()
        .map(|exp| {
            let achievements: String = exp
                .achievements
                .iter()
                .map(|a| format!("<li>{}</li>", escape(a)))
                .collect();
            format!(
                r#"<div class="timeline-item">
    <div class="timeline-date">{period}</div>
    <h4 class="timeline-title">{position}</h4>
    <div class="timeline-subtitle">{company}</div>
    <p>{description}</p>
    <ul>{achievements}</ul>
</div>"#,
                period = escape(&exp.period),
                position = escape(&exp.position),
                company = escape(&exp.company),
                description = escape(&exp.description),
            )
        })
        .collect()
}

fn education_html(education: &[EducationEntry]) -> String {
    education
        .iter()
        .map(|edu| {
            format!(
                r#"<div class="education-item">
    <div class="education-degree">{degree}</div>
    <div class="education-school">{school}</div>
    <div class="education-date">{period}</div>
    <p>{details}</p>
</div>"#,
                degree = escape(&edu.degree),
                school = escape(&edu.school),
                period = escape(&edu.period),
                details = escape(&edu.details),
            )
        })
        .collect()
}

fn projects_html(projects: &[Project]) -> String {
    projects
        .iter()
        .map(|project| {
            let tech: String = project
                .technologies
                .iter()
                .map(|t| format!(r#"<span class="tech-tag">{}</span>"#, escape(t)))
                .collect();
            format!(
                r#"<div class="project-item">
    <div class="project-title">
        <span>{name}</span>
        <div class="project-links">{links}</div>
    </div>
    <div class="project-description">{description}</div>
    <div class="project-tech">{tech}</div>
</div>"#,
                name = escape(&project.name),
                links = project_links_html(&project.links),
                description = escape(&project.description),
            )
        })
        .collect()
}

/// Each anchor renders only when its link is present and non-empty; an
/// absent link produces no element at all.
fn project_links_html(links: &ProjectLinks) -> String {
    let mut html = String::new();
    if let Some(demo) = links.demo.as_deref().filter(|s| !s.is_empty()) {
        html.push_str(&format!(
            r#"<a href="{}" class="project-link">Live Demo</a>"#,
            escape(demo)
        ));
    }
    if let Some(github) = links.github.as_deref().filter(|s| !s.is_empty()) {
        html.push_str(&format!(
            r#"<a href="{}" class="project-link">GitHub</a>"#,
            escape(github)
        ));
    }
    html
}
