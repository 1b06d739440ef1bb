use super::SiteSettings;
use crate::meta::PageMeta;
use crate::templates::build_page;

pub fn render_not_found(site: &SiteSettings, path: &str) -> String {
    let content = r#"<div class="not-found">
    <h1>404</h1>
    <p style="color:#4b5563;margin-bottom:24px;">This page doesn't exist.</p>
    <a href="/" class="cta">Go home</a>
</div>"#;

    build_page(&site.name, path, &PageMeta::new("Page not found"), content)
}
