use agency_common::ClientDirectory;

use super::{client_to_view, SiteSettings};
use crate::meta::PageMeta;
use crate::templates::{build_page, html_escape};

/// Every client as a card linking to its detail page, in dataset order.
pub fn render_clients_list(site: &SiteSettings, directory: &ClientDirectory) -> String {
    let mut cards = String::new();

    if directory.is_empty() {
        cards.push_str(r#"<p style="color:#6b7280;text-align:center;padding:40px;">No clients to show yet.</p>"#);
    }

    for (i, record) in directory.records().iter().enumerate() {
        let client = client_to_view(record, site);
        cards.push_str(&format!(
            r#"<a href="{href}" class="client-card reveal" style="animation-delay:{delay}ms;">
    <img src="{src}" alt="{name}" loading="lazy">
    <div class="body">
        <span class="tag">{category}</span>
        <h3>{name}</h3>
        <p>{summary}</p>
    </div>
</a>"#,
            href = html_escape(&client.href),
            delay = (i % 6) * 80,
            src = html_escape(&client.image_src),
            name = html_escape(&client.name),
            category = html_escape(&client.category),
            summary = html_escape(&client.short_description),
        ));
    }

    let content = format!(
        r#"<div class="container">
    <h1 style="margin-bottom:8px;">Our clients</h1>
    <p style="color:#4b5563;margin-bottom:24px;">A selection of the teams we have worked with.</p>
    <div class="client-grid">{cards}</div>
</div>"#
    );

    let meta = PageMeta::new("Clients")
        .with_description(format!("Client work by {}.", site.name));
    build_page(&site.name, "/clients", &meta, &content)
}
