//! Markup generation.
//!
//! Every function here is a pure projection from a slice of the CV document
//! into an HTML fragment. The page has three fixed containers (header,
//! sidebar, main content); `render_sections` fills all three in order, and
//! `page` slots them into the skeleton.

pub(crate) mod escape;
mod content;
mod header;
pub mod page;
mod sidebar;
pub mod urls;

pub use content::render_content;
pub use header::render_header;
pub use sidebar::render_sidebar;

use crate::models::cv::CvDocument;

/// The three container fragments, rendered once per process.
#[derive(Debug, Clone)]
pub struct RenderedSections {
    pub header: String,
    pub sidebar: String,
    pub content: String,
}

/// Projects the whole document: header, then sidebar, then main content.
pub fn render_sections(doc: &CvDocument) -> RenderedSections {
    RenderedSections {
        header: render_header(&doc.personal_info),
        sidebar: render_sidebar(doc),
        content: render_content(doc),
    }
}

#[cfg(test)]
mod tests {
    use crate::models::cv::fixtures::sample_document;

    use super::*;

    #[test]
    fn test_all_three_containers_are_rendered() {
        let sections = render_sections(&sample_document());
        assert!(sections.header.contains("Ada Quill"));
        assert!(sections.sidebar.contains("Programming Languages"));
        assert!(sections.content.contains("Senior Engineer"));
    }
}
