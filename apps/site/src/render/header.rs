use crate::models::cv::PersonalInfo;

use super::escape::escape;
use super::urls::maps_search_url;

/// Header container: photo, name, title, summary, and the contact row.
/// The location links out to a map search; email gets a mailto anchor.
pub fn render_header(info: &PersonalInfo) -> String {
    format!(
        r#"<img src="{profile}" alt="Profile Photo" class="profile-img">
<div class="header-info">
    <h1 class="name">{name}</h1>
    <p class="title">{title}</p>
    <p class="summary">{summary}</p>
    <div class="contact-info">
        <div class="contact-item">
            <i class="fas fa-envelope"></i>
            <span><a class="social-link" href="mailto:{email}">{email}</a></span>
        </div>
        <div class="contact-item">
            <i class="fas fa-phone"></i>
            <span>{phone}</span>
        </div>
        <div class="contact-item">
            <i class="fas fa-map-marker-alt"></i>
            <span><a class="social-link" href="{maps}" target="_blank">{location}</a></span>
        </div>
        <div class="contact-item">
            <i class="fab fa-linkedin"></i>
            <span><a class="social-link" href="{linkedin}" target="_blank">{linkedin}</a></span>
        </div>
        <div class="contact-item">
            <i class="fab fa-github"></i>
            <span><a class="social-link" href="{github}" target="_blank">{github}</a></span>
        </div>
    </div>
</div>"#,
        profile = escape(&info.profile_image),
        name = escape(&info.name),
        title = escape(&info.title),
        summary = escape(&info.summary),
        email = escape(&info.email),
        phone = escape(&info.phone),
        maps = escape(&maps_search_url(&info.location)),
        location = escape(&info.location),
        linkedin = escape(&info.linkedin),
        github = escape(&info.github),
    )
}
