use crate::meta::PageMeta;
use crate::shell::{render_footer, render_header, should_show_shell};

/// Wrap page content in the full HTML document.
///
/// The nav/footer shell is decided from `path` on every render.
pub fn build_page(site_name: &str, path: &str, meta: &PageMeta, content: &str) -> String {
    let (header, footer) = if should_show_shell(path) {
        (render_header(site_name, path), render_footer(site_name))
    } else {
        (String::new(), String::new())
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{head}
<style>
*{{margin:0;padding:0;box-sizing:border-box;}}
body{{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;color:#111827;background:#fafafa;}}
a{{color:inherit;}}
.site-header{{background:#111827;color:#fff;padding:14px 32px;display:flex;align-items:center;justify-content:space-between;}}
.site-header .brand{{font-size:18px;font-weight:700;text-decoration:none;color:#fff;}}
.site-header nav a{{color:#9ca3af;text-decoration:none;margin-left:24px;font-size:14px;}}
.site-header nav a:hover,.site-header nav a.active{{color:#fff;}}
.site-footer{{border-top:1px solid #e5e7eb;padding:32px;display:flex;justify-content:space-between;font-size:13px;color:#6b7280;margin-top:48px;}}
.site-footer nav a{{margin-left:16px;text-decoration:none;}}
.container{{max-width:1040px;margin:0 auto;padding:32px 24px;}}
.hero{{padding:96px 24px;text-align:center;background:linear-gradient(135deg,#111827,#1f2937);color:#fff;}}
.hero h1{{font-size:48px;line-height:1.1;margin-bottom:16px;}}
.hero p{{font-size:18px;color:#d1d5db;max-width:640px;margin:0 auto 32px;}}
.reveal{{animation:reveal .6s ease-out both;}}
@keyframes reveal{{from{{opacity:0;transform:translateY(16px);}}to{{opacity:1;transform:none;}}}}
.cta{{display:inline-block;padding:12px 28px;background:#f59e0b;color:#111827;border-radius:999px;font-weight:600;text-decoration:none;}}
.pillars{{display:grid;grid-template-columns:repeat(auto-fit,minmax(220px,1fr));gap:20px;}}
.pillar{{background:#fff;border:1px solid #e5e7eb;border-radius:12px;padding:24px;}}
.pillar h3{{font-size:17px;margin-bottom:8px;}}
.pillar p{{font-size:14px;color:#4b5563;}}
.marquee{{overflow:hidden;padding:32px 0;}}
.marquee-track{{display:flex;gap:32px;width:max-content;animation:marquee 30s linear infinite;}}
.marquee-track img{{height:60px;width:auto;}}
@keyframes marquee{{from{{transform:translateX(0);}}to{{transform:translateX(-50%);}}}}
.client-grid{{display:grid;grid-template-columns:repeat(auto-fill,minmax(280px,1fr));gap:20px;}}
.client-card{{display:block;background:#fff;border:1px solid #e5e7eb;border-radius:12px;overflow:hidden;text-decoration:none;}}
.client-card:hover{{border-color:#9ca3af;}}
.client-card img{{width:100%;height:160px;object-fit:cover;background:#111827;}}
.client-card .body{{padding:16px;}}
.client-card h3{{font-size:17px;margin-bottom:6px;}}
.client-card p{{font-size:14px;color:#4b5563;}}
.tag{{display:inline-block;padding:2px 10px;border-radius:999px;font-size:11px;font-weight:600;text-transform:uppercase;background:#fef3c7;color:#92400e;margin-bottom:8px;}}
.client-detail img{{width:100%;max-height:360px;object-fit:cover;border-radius:12px;background:#111827;margin:16px 0;}}
.client-detail .lead{{font-size:18px;color:#374151;margin-bottom:16px;}}
.client-detail dl{{display:grid;grid-template-columns:160px 1fr;gap:8px;font-size:14px;margin:24px 0;}}
.client-detail dt{{color:#6b7280;}}
.not-found{{text-align:center;padding:120px 24px;}}
.not-found h1{{font-size:64px;margin-bottom:8px;}}
</style>
</head>
<body>
{header}
<main>
{content}
</main>
{footer}
</body>
</html>"#,
        head = meta.head_tags(site_name),
    )
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
