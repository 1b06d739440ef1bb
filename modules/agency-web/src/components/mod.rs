use chrono::{Locale, NaiveTime, TimeZone, Utc};

use agency_common::{ClientRecord, Config};

use crate::meta::asset_path;

pub mod client_detail;
pub mod clients_list;
pub mod home;
pub mod not_found;

pub use client_detail::{render_client_detail, render_client_not_found};
pub use clients_list::render_clients_list;
pub use home::render_home;
pub use not_found::render_not_found;

/// URL prefix the image directory is served under.
pub const ASSETS_PREFIX: &str = "/images";

/// Site-wide presentation settings.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub name: String,
    pub date_locale: Locale,
    pub assets_prefix: String,
}

impl SiteSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            name: config.site_name.clone(),
            date_locale: config.date_locale,
            assets_prefix: ASSETS_PREFIX.to_string(),
        }
    }
}

// --- View Models ---

#[derive(Debug, Clone, PartialEq)]
pub struct ClientView {
    pub id: i64,
    pub name: String,
    pub href: String,
    pub image_src: String,
    pub short_description: String,
    pub long_description: String,
    pub category: String,
    pub project_date: String,
}

pub fn client_to_view(record: &ClientRecord, site: &SiteSettings) -> ClientView {
    ClientView {
        id: record.id,
        name: record.name.clone(),
        href: client_href(record),
        image_src: asset_path(&site.assets_prefix, &record.image),
        short_description: record.short_description.clone(),
        long_description: record.long_description.clone(),
        category: record.essential_variable.clone(),
        project_date: format_project_date(record, site.date_locale),
    }
}

pub fn client_href(record: &ClientRecord) -> String {
    format!("/clients/{}", record.slug())
}

/// Locale's short date form (`%x`); unparseable dates are shown as written.
pub fn format_project_date(record: &ClientRecord, locale: Locale) -> String {
    match record.project_date() {
        Some(date) => Utc
            .from_utc_datetime(&date.and_time(NaiveTime::MIN))
            .format_localized("%x", locale)
            .to_string(),
        None => record.date_projects.clone(),
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{record, site};
    use super::*;

    #[test]
    fn view_links_to_slug_route() {
        let view = client_to_view(&record(4, "Ferro & Sons"), &site());
        assert_eq!(view.href, "/clients/ferro-sons");
        assert_eq!(view.image_src, "/images/client-4.svg");
        assert_eq!(view.category, "Retail");
    }

    #[test]
    fn date_uses_locale_convention() {
        let rec = record(1, "Acme");
        assert_eq!(format_project_date(&rec, Locale::en_US), "09/14/2023");
        assert_eq!(format_project_date(&rec, Locale::fr_FR), "14/09/2023");
    }

    #[test]
    fn unparseable_date_is_shown_verbatim() {
        let mut rec = record(1, "Acme");
        rec.date_projects = "Spring 2023".to_string();
        assert_eq!(format_project_date(&rec, Locale::en_US), "Spring 2023");
    }
}
