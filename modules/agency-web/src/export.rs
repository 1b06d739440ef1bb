//! Static pre-render of the whole site into a directory tree.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::components::{
    render_client_detail, render_clients_list, render_home, render_not_found,
};
use crate::routes::AppState;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages: usize,
    pub skipped_slugs: usize,
    pub assets: usize,
}

/// Write `/`, `/clients`, one page per distinct client slug, `404.html`, and
/// a copy of the image assets under `out`.
pub fn export_site(state: &AppState, assets_dir: &Path, out: &Path) -> Result<ExportSummary> {
    let mut summary = ExportSummary::default();

    write_page(out, "index.html", &render_home(&state.site, &state.directory))?;
    write_page(
        out,
        "clients/index.html",
        &render_clients_list(&state.site, &state.directory),
    )?;
    write_page(out, "404.html", &render_not_found(&state.site, "/404"))?;
    summary.pages += 3;

    let mut seen = HashSet::new();
    for slug in state.directory.enumerate_slugs() {
        if slug.is_empty() || !seen.insert(slug.clone()) {
            warn!(slug = %slug, "Skipping unreachable client page");
            summary.skipped_slugs += 1;
            continue;
        }
        let Some(record) = state.directory.resolve(&slug) else {
            continue;
        };
        write_page(
            out,
            &format!("clients/{slug}/index.html"),
            &render_client_detail(&state.site, record),
        )?;
        summary.pages += 1;
    }

    summary.assets = copy_assets(assets_dir, &out.join("images"))?;

    info!(
        pages = summary.pages,
        assets = summary.assets,
        skipped = summary.skipped_slugs,
        out = %out.display(),
        "Static export complete"
    );
    Ok(summary)
}

fn write_page(out: &Path, relative: &str, html: &str) -> Result<()> {
    let target = out.join(relative);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(&target, html).with_context(|| format!("writing {}", target.display()))
}

fn copy_assets(from: &Path, to: &Path) -> Result<usize> {
    if !from.is_dir() {
        warn!(dir = %from.display(), "Assets directory missing, exporting without images");
        return Ok(0);
    }
    fs::create_dir_all(to).with_context(|| format!("creating {}", to.display()))?;

    let mut copied = 0;
    for entry in fs::read_dir(from).with_context(|| format!("reading {}", from.display()))? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            fs::copy(entry.path(), to.join(entry.file_name()))
                .with_context(|| format!("copying {}", entry.path().display()))?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::fixtures::{record, site};
    use agency_common::ClientDirectory;

    fn state() -> AppState {
        AppState {
            directory: ClientDirectory::new(vec![
                record(1, "Acme Corp"),
                record(2, "Acme  Corp!"),
                record(3, "Globex"),
                record(4, "???"),
            ]),
            site: site(),
        }
    }

    #[test]
    fn writes_one_page_per_distinct_slug() {
        let out = tempfile::tempdir().unwrap();
        let summary = export_site(&state(), Path::new("missing-assets"), out.path()).unwrap();

        assert_eq!(summary.pages, 5);
        assert_eq!(summary.skipped_slugs, 2);
        assert_eq!(summary.assets, 0);

        assert!(out.path().join("index.html").is_file());
        assert!(out.path().join("clients/index.html").is_file());
        assert!(out.path().join("404.html").is_file());
        assert!(out.path().join("clients/globex/index.html").is_file());

        let acme = fs::read_to_string(out.path().join("clients/acme-corp/index.html")).unwrap();
        assert!(acme.contains("<dd>1</dd>"));
    }

    #[test]
    fn copies_image_assets() {
        let assets = tempfile::tempdir().unwrap();
        fs::write(assets.path().join("client-1.svg"), "<svg/>").unwrap();
        let out = tempfile::tempdir().unwrap();

        let summary = export_site(&state(), assets.path(), out.path()).unwrap();
        assert_eq!(summary.assets, 1);
        assert!(out.path().join("images/client-1.svg").is_file());
    }
}
