//! Page skeleton assembly.
//!
//! The skeleton carries the fixed containers (`loading`, `header`,
//! `mainContent` with `sidebar` and `content` inside) and the theme toggle.
//! The header and main content start hidden and are revealed only on a
//! successful load; on failure the loading slot holds the error message and
//! the containers stay hidden. The print control is attached last and only
//! on the success path.

use crate::theme::ThemePreference;

use super::RenderedSections;

/// Shown in the loading slot when the document load fails.
pub const LOAD_ERROR_MESSAGE: &str =
    "Error loading CV data. Please check if the JSON file exists.";

/// Successful load: sections slotted in, containers revealed, print control
/// attached.
pub fn assemble_page(sections: &RenderedSections, theme: ThemePreference) -> String {
    shell(ShellSlots {
        theme,
        loading_content: "<p>Loading CV data...</p>",
        loading_display: "none",
        header: &sections.header,
        header_display: "flex",
        sidebar: &sections.sidebar,
        content: &sections.content,
        main_display: "grid",
        print_control: PRINT_CONTROL,
    })
}

/// Failed load: the loading slot carries the fixed error message and the
/// section containers remain hidden.
pub fn assemble_error_page(theme: ThemePreference) -> String {
    let loading = format!("<p>{LOAD_ERROR_MESSAGE}</p>");
    shell(ShellSlots {
        theme,
        loading_content: &loading,
        loading_display: "block",
        header: "",
        header_display: "none",
        sidebar: "",
        content: "",
        main_display: "none",
        print_control: "",
    })
}

/// Floating control whose only behavior is invoking the platform print
/// function.
const PRINT_CONTROL: &str =
    r#"<button class="print-button" onclick="window.print()"><i class="fas fa-print"></i> Print CV</button>"#;

struct ShellSlots<'a> {
    theme: ThemePreference,
    loading_content: &'a str,
    loading_display: &'a str,
    header: &'a str,
    header_display: &'a str,
    sidebar: &'a str,
    content: &'a str,
    main_display: &'a str,
    print_control: &'a str,
}

fn shell(slots: ShellSlots<'_>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{theme}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>CV</title>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css">
    <style>{style}</style>
</head>
<body>
    <form class="theme-toggle" method="post" action="/theme/toggle">
        <button id="themeToggle" type="submit" aria-label="Toggle light and dark theme">
            <i class="fas fa-circle-half-stroke"></i>
        </button>
    </form>
    <div class="container">
        <div id="loading" class="loading" style="display: {loading_display}">{loading_content}</div>
        <header id="header" class="header" style="display: {header_display}">{header}</header>
        <div id="mainContent" class="main-content" style="display: {main_display}">
            <aside id="sidebar" class="sidebar">{sidebar}</aside>
            <main id="content" class="content">{content}</main>
        </div>
    </div>
    {print_control}
</body>
</html>
"#,
        theme = slots.theme.as_str(),
        style = STYLE,
        loading_display = slots.loading_display,
        loading_content = slots.loading_content,
        header_display = slots.header_display,
        header = slots.header,
        main_display = slots.main_display,
        sidebar = slots.sidebar,
        content = slots.content,
        print_control = slots.print_control,
    )
}

const STYLE: &str = r#"
:root {
    --primary: #2563eb;
    --bg: #f5f6f8;
    --surface: #ffffff;
    --text: #1f2430;
    --muted: #5b6372;
    --border: #d9dde4;
    --tag-bg: #e8edf7;
}
[data-theme="dark"] {
    --primary: #60a5fa;
    --bg: #14161c;
    --surface: #1d2028;
    --text: #e8eaf0;
    --muted: #9aa2b1;
    --border: #2e323d;
    --tag-bg: #262c3a;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: 'Segoe UI', sans-serif; background: var(--bg); color: var(--text); line-height: 1.5; }
a { color: var(--primary); text-decoration: none; }
.container { max-width: 1000px; margin: 0 auto; padding: 24px; }
.loading { text-align: center; padding: 48px 0; color: var(--muted); }
.theme-toggle { position: fixed; top: 16px; right: 16px; z-index: 1000; }
.theme-toggle button { background: var(--surface); color: var(--text); border: 1px solid var(--border); border-radius: 50%; width: 40px; height: 40px; cursor: pointer; }
.header { gap: 24px; align-items: center; background: var(--surface); border: 1px solid var(--border); border-radius: 8px; padding: 24px; margin-bottom: 24px; }
.profile-img { width: 128px; height: 128px; border-radius: 50%; object-fit: cover; }
.name { font-size: 1.8rem; }
.title { color: var(--primary); font-weight: 600; }
.summary { color: var(--muted); margin: 8px 0; }
.contact-info { display: flex; flex-wrap: wrap; gap: 8px 20px; font-size: 0.9rem; }
.contact-item i { color: var(--primary); margin-right: 6px; }
.main-content { grid-template-columns: 280px 1fr; gap: 24px; }
.sidebar, .content { background: var(--surface); border: 1px solid var(--border); border-radius: 8px; padding: 20px; }
.section { margin-bottom: 24px; }
.section-title { color: var(--primary); border-bottom: 1px solid var(--border); padding-bottom: 6px; margin-bottom: 12px; }
.skill-category h4 { margin: 10px 0 6px; }
.skills-list { display: flex; flex-wrap: wrap; gap: 6px; }
.skill-tag, .tech-tag { background: var(--tag-bg); color: var(--text); border-radius: 4px; padding: 2px 8px; font-size: 0.85rem; }
.language-item { display: flex; justify-content: space-between; padding: 4px 0; }
.language-level { color: var(--muted); }
.certification-item { margin-bottom: 10px; }
.certification-org { color: var(--muted); font-size: 0.9rem; }
.qr-code { text-align: center; margin-top: 16px; }
.qr-text { color: var(--muted); font-size: 0.85rem; margin-top: 6px; }
.timeline-item { border-left: 2px solid var(--border); padding: 0 0 16px 16px; }
.timeline-date { color: var(--muted); font-size: 0.9rem; }
.timeline-subtitle { color: var(--primary); margin-bottom: 6px; }
.timeline-item ul { margin: 6px 0 0 20px; }
.education-item { margin-bottom: 14px; }
.education-school { color: var(--primary); }
.education-date { color: var(--muted); font-size: 0.9rem; }
.project-item { margin-bottom: 18px; }
.project-title { display: flex; justify-content: space-between; align-items: baseline; font-weight: 600; }
.project-links a { margin-left: 10px; font-size: 0.9rem; }
.project-tech { margin-top: 6px; display: flex; flex-wrap: wrap; gap: 6px; }
.print-button { position: fixed; bottom: 20px; right: 90px; padding: 10px 15px; background: var(--primary); color: white; border: none; border-radius: 5px; cursor: pointer; box-shadow: 0 2px 10px rgba(0,0,0,0.1); z-index: 1000; }
@media print {
    .theme-toggle, .print-button { display: none; }
    body { background: white; }
}
@media (max-width: 760px) {
    .main-content { grid-template-columns: 1fr; }
    .header { flex-direction: column; text-align: center; }
}
"#;
