use std::collections::HashMap;
use std::io::Write;

use folio::animation::{self, Bounds, ElementId, Timeline, Timing, TriggerRegistry, Vars};
use folio::config::Config;
use folio::page::Page;
use tempfile::NamedTempFile;

/// Viewport height used by the trigger tests.
pub const VIEWPORT: f32 = 1000.0;

/// Window height of the default config, which the page starts out with.
pub const DEFAULT_VIEWPORT: f32 = 860.0;

/// A page with every section mounted, built from the default config.
pub fn mounted_page() -> Page {
    mounted_page_with(&Config::default())
}

pub fn mounted_page_with(config: &Config) -> Page {
    let mut page = Page::new(animation::init(), config);
    page.mount_all();
    page
}

pub fn registry() -> TriggerRegistry {
    TriggerRegistry::new(animation::init())
}

/// Element geometry from (name, top, height) triples.
pub fn bounds_map(entries: &[(&str, f32, f32)]) -> HashMap<ElementId, Bounds> {
    entries
        .iter()
        .map(|(name, top, height)| (ElementId::new(*name), Bounds::new(*top, *height)))
        .collect()
}

/// One-second linear fade-in of `target` from opacity 0.
pub fn fade_in(target: &str) -> Timeline {
    Timeline::builder()
        .from(
            [ElementId::new(target)],
            Vars::new().opacity(0.0),
            Timing::secs(1.0).ease(folio::animation::Ease::Linear),
        )
        .build()
}

/// Writes `content` to a temporary `.toml` file.
/// The file is removed when dropped.
pub fn write_config(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp config file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp config file");
    file
}

/// Runs the page clock until the smooth scroll settles; returns the last
/// offset it produced.
pub fn settle_scroll(page: &mut Page) -> Option<f32> {
    let mut last = None;
    for _ in 0..100 {
        match page.tick(0.05) {
            Some(y) => last = Some(y),
            None => break,
        }
    }
    last
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}
