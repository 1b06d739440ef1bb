//! Navigation/footer chrome shared by the site's pages.

use crate::templates::html_escape;

/// Top-level nav sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Clients,
}

struct NavItem {
    section: Section,
    label: &'static str,
    href: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { section: Section::Home, label: "Home", href: "/" },
    NavItem { section: Section::Clients, label: "Clients", href: "/clients" },
];

impl Section {
    pub fn from_path(path: &str) -> Option<Self> {
        match route_segments(path).as_slice() {
            [] => Some(Section::Home),
            ["clients", ..] => Some(Section::Clients),
            _ => None,
        }
    }
}

fn route_segments(path: &str) -> Vec<&str> {
    path.trim_start_matches('/')
        .trim_end_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whether the nav/footer wrap the page at `path`.
///
/// Only the site's own route shapes (`/`, `/clients`, `/clients/{slug}`) get
/// the shell; anything else is a stray URL and its 404 renders bare.
pub fn should_show_shell(path: &str) -> bool {
    let inner = path.trim_start_matches('/').trim_end_matches('/');
    if inner.is_empty() {
        return true;
    }
    let segments: Vec<&str> = inner.split('/').collect();
    match segments.as_slice() {
        ["clients"] => true,
        ["clients", slug] => !slug.is_empty(),
        _ => false,
    }
}

pub fn render_header(site_name: &str, path: &str) -> String {
    let active = Section::from_path(path);
    let links: String = NAV_ITEMS
        .iter()
        .map(|item| {
            let class = if Some(item.section) == active {
                r#" class="active" aria-current="page""#
            } else {
                ""
            };
            format!(r#"<a href="{}"{class}>{}</a>"#, item.href, item.label)
        })
        .collect();

    format!(
        r#"<header class="site-header">
    <a href="/" class="brand">{site}</a>
    <nav>{links}</nav>
</header>"#,
        site = html_escape(site_name),
    )
}

pub fn render_footer(site_name: &str) -> String {
    format!(
        r#"<footer class="site-footer">
    <p>{site}: strategy, design and engineering for growing brands.</p>
    <nav><a href="/">Home</a><a href="/clients">Clients</a></nav>
</footer>"#,
        site = html_escape(site_name),
    )
}
