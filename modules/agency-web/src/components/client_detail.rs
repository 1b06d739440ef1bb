use agency_common::ClientRecord;

use super::{client_to_view, SiteSettings};
use crate::meta::PageMeta;
use crate::templates::{build_page, html_escape};

/// Case-study page for one resolved client. Each record field appears once.
pub fn render_client_detail(site: &SiteSettings, record: &ClientRecord) -> String {
    let client = client_to_view(record, site);

    let content = format!(
        r#"<div class="container client-detail">
    <a href="/clients" style="font-size:13px;text-decoration:none;color:#2563eb;">&larr; All clients</a>
    <article class="reveal">
        <span class="tag">{category}</span>
        <h1>{name}</h1>
        <img src="{src}" alt="">
        <p class="lead">{summary}</p>
        <p>{body}</p>
        <dl>
            <dt>Project date</dt><dd>{date}</dd>
            <dt>Client no.</dt><dd>{id}</dd>
        </dl>
    </article>
</div>"#,
        category = html_escape(&client.category),
        name = html_escape(&client.name),
        src = html_escape(&client.image_src),
        summary = html_escape(&client.short_description),
        body = html_escape(&client.long_description),
        date = html_escape(&client.project_date),
        id = client.id,
    );

    let path = client.href.clone();
    let meta = PageMeta::for_client(record, &site.assets_prefix);
    build_page(&site.name, &path, &meta, &content)
}

/// Terminal state for a slug that matched no client.
pub fn render_client_not_found(site: &SiteSettings, path: &str) -> String {
    let content = r#"<div class="not-found">
    <h1>404</h1>
    <p style="color:#4b5563;margin-bottom:24px;">We couldn't find that client.</p>
    <a href="/clients" class="cta">Back to all clients</a>
</div>"#;

    build_page(&site.name, path, &PageMeta::client_not_found(), content)
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{record, site};
    use super::*;
    use crate::meta::CLIENT_NOT_FOUND_TITLE;

    fn body(html: &str) -> &str {
        let start = html.find("<main>").unwrap();
        let end = html.find("</main>").unwrap();
        &html[start..end]
    }

    #[test]
    fn renders_every_field_once() {
        let mut rec = record(42, "Blue Harbor Hotels");
        rec.essential_variable = "Hospitality".to_string();
        rec.short_description = "Booking flow redesign".to_string();
        rec.long_description = "Rebuilt reservations end to end.".to_string();
        let html = render_client_detail(&site(), &rec);
        let main = body(&html);

        assert_eq!(main.matches("Blue Harbor Hotels").count(), 1);
        assert_eq!(main.matches("Hospitality").count(), 1);
        assert_eq!(main.matches(&rec.short_description).count(), 1);
        assert_eq!(main.matches(&rec.long_description).count(), 1);
        assert_eq!(main.matches("/images/client-42.svg").count(), 1);
        assert_eq!(main.matches("09/14/2023").count(), 1);
        assert_eq!(main.matches("<dd>42</dd>").count(), 1);
    }

    #[test]
    fn head_carries_client_metadata() {
        let rec = record(1, "Acme Corp");
        let html = render_client_detail(&site(), &rec);
        assert!(html.contains("<title>Acme Corp | Studio</title>"));
        assert!(html.contains(r#"<meta property="og:image" content="/images/client-1.svg">"#));
        assert!(html.contains(r#"<meta name="description" content="Acme Corp in one line">"#));
        assert!(html.contains(r#"<header class="site-header">"#));
    }

    #[test]
    fn not_found_exposes_fixed_title_only() {
        let html = render_client_not_found(&site(), "/clients/nope");
        assert!(html.contains(&format!("<title>{CLIENT_NOT_FOUND_TITLE} | Studio</title>")));
        assert!(!html.contains("og:image"));
        assert!(!html.contains("og:description"));
    }
}
