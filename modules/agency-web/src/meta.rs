use agency_common::ClientRecord;

use crate::templates::html_escape;

pub const CLIENT_NOT_FOUND_TITLE: &str = "Client not found";

/// Title/description/image exposed to crawlers and link previews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
    pub image_path: Option<String>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            image_path: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn for_client(record: &ClientRecord, assets_prefix: &str) -> Self {
        Self {
            title: record.name.clone(),
            description: Some(record.short_description.clone()),
            image_path: Some(asset_path(assets_prefix, &record.image)),
        }
    }

    /// Fixed metadata for a client slug that didn't resolve.
    pub fn client_not_found() -> Self {
        Self::new(CLIENT_NOT_FOUND_TITLE)
    }

    /// `<title>`, description and OpenGraph tags for the document head.
    pub fn head_tags(&self, site_name: &str) -> String {
        let mut tags = format!(
            "<title>{} | {}</title>\n<meta property=\"og:title\" content=\"{}\">\n<meta property=\"og:site_name\" content=\"{}\">",
            html_escape(&self.title),
            html_escape(site_name),
            html_escape(&self.title),
            html_escape(site_name),
        );
        if let Some(description) = &self.description {
            let d = html_escape(description);
            tags.push_str(&format!(
                "\n<meta name=\"description\" content=\"{d}\">\n<meta property=\"og:description\" content=\"{d}\">"
            ));
        }
        if let Some(image) = &self.image_path {
            tags.push_str(&format!(
                "\n<meta property=\"og:image\" content=\"{}\">",
                html_escape(image)
            ));
        }
        tags
    }
}

pub fn asset_path(assets_prefix: &str, file: &str) -> String {
    format!("{}/{}", assets_prefix.trim_end_matches('/'), file.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> ClientRecord {
        ClientRecord {
            id: 1,
            name: "Acme \"Corp\"".to_string(),
            image: "acme.png".to_string(),
            short_description: "Rebrand & relaunch".to_string(),
            long_description: "Long".to_string(),
            essential_variable: "Retail".to_string(),
            date_projects: "2023-01-01".to_string(),
        }
    }

    #[test]
    fn client_meta_comes_from_record() {
        let meta = PageMeta::for_client(&acme(), "/images/");
        assert_eq!(meta.title, "Acme \"Corp\"");
        assert_eq!(meta.description.as_deref(), Some("Rebrand & relaunch"));
        assert_eq!(meta.image_path.as_deref(), Some("/images/acme.png"));
    }

    #[test]
    fn not_found_meta_has_title_only() {
        let meta = PageMeta::client_not_found();
        assert_eq!(meta.title, CLIENT_NOT_FOUND_TITLE);
        assert!(meta.description.is_none());
        assert!(meta.image_path.is_none());

        let tags = meta.head_tags("Studio");
        assert!(tags.contains("<title>Client not found | Studio</title>"));
        assert!(!tags.contains("og:image"));
        assert!(!tags.contains("name=\"description\""));
    }

    #[test]
    fn head_tags_are_escaped() {
        let tags = PageMeta::for_client(&acme(), "/images").head_tags("Studio");
        assert!(tags.contains("<title>Acme &quot;Corp&quot; | Studio</title>"));
        assert!(tags.contains(r#"<meta name="description" content="Rebrand &amp; relaunch">"#));
        assert!(tags.contains(r#"<meta property="og:image" content="/images/acme.png">"#));
    }
}
