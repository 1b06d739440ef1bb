use agency_common::ClientDirectory;

use super::{client_to_view, ClientView, SiteSettings};
use crate::meta::PageMeta;
use crate::templates::{build_page, html_escape};

struct ServicePillar {
    title: &'static str,
    blurb: &'static str,
}

const SERVICES: &[ServicePillar] = &[
    ServicePillar {
        title: "Strategy",
        blurb: "Research, positioning and roadmaps that tie every release to a business goal.",
    },
    ServicePillar {
        title: "Design",
        blurb: "Brand systems and product interfaces that stay consistent from pitch deck to checkout.",
    },
    ServicePillar {
        title: "Engineering",
        blurb: "Fast, accessible websites and apps built to be maintained by your own team.",
    },
    ServicePillar {
        title: "Growth",
        blurb: "Analytics, experimentation and content that keep a launch moving after day one.",
    },
];

/// Landing page: hero, service pillars and the client logo marquee.
pub fn render_home(site: &SiteSettings, directory: &ClientDirectory) -> String {
    let clients: Vec<ClientView> = directory
        .records()
        .iter()
        .map(|r| client_to_view(r, site))
        .collect();

    let pillars: String = SERVICES
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                r#"<div class="pillar reveal" style="animation-delay:{delay}ms;"><h3>{title}</h3><p>{blurb}</p></div>"#,
                delay = i * 120,
                title = p.title,
                blurb = p.blurb,
            )
        })
        .collect();

    let content = format!(
        r#"<section class="hero">
    <h1 class="reveal">We build digital products people come back to.</h1>
    <p class="reveal" style="animation-delay:120ms;">{site} partners with ambitious teams on strategy, design and engineering, from first sketch to the thousandth release.</p>
    <a href="/clients" class="cta">See our clients</a>
</section>
<section class="container">
    <h2 style="margin-bottom:20px;">What we do</h2>
    <div class="pillars">{pillars}</div>
</section>
{marquee}"#,
        site = html_escape(&site.name),
        marquee = render_marquee(&clients),
    );

    let meta = PageMeta::new(site.name.clone())
        .with_description("Strategy, design and engineering for growing brands.");
    build_page(&site.name, "/", &meta, &content)
}

/// Logos scroll on a CSS loop; the set is rendered twice so the track wraps seamlessly.
fn render_marquee(clients: &[ClientView]) -> String {
    if clients.is_empty() {
        return String::new();
    }

    let logos: String = clients
        .iter()
        .map(|c| {
            format!(
                r#"<a href="{href}"><img src="{src}" alt="{name}" loading="lazy"></a>"#,
                href = c.href,
                src = html_escape(&c.image_src),
                name = html_escape(&c.name),
            )
        })
        .collect();

    format!(
        r#"<section class="marquee" aria-label="Clients">
    <div class="marquee-track">{logos}<span aria-hidden="true" style="display:contents;">{logos}</span></div>
</section>"#
    )
}
