// System status display: library stats and settings summary.

use anyhow::Result;

use crate::config::Settings;
use crate::store::models::ContentKind;
use crate::store::InMemoryStore;

/// Display library and settings status to the terminal.
pub fn show(store: &InMemoryStore, library_path: &str) -> Result<()> {
    println!("Library: {} ({} items)", library_path, store.item_count());
    println!(
        "Published: {} posts, {} pages",
        store.published_count(ContentKind::Post),
        store.published_count(ContentKind::Page),
    );

    let settings: Settings = crate::store::SettingsStore::link_settings(store)?;
    println!("Language: {}", settings.language.as_str());
    match settings.trigger_mode {
        crate::config::TriggerMode::Interval => println!(
            "Trigger: every {} minutes",
            settings.interval_minutes
        ),
        mode => println!("Trigger: {}", mode.as_str()),
    }
    println!(
        "Scoring: top {} candidates, {} excluded, {} boosts",
        settings.max_candidates,
        settings.excluded_ids.len(),
        settings.boost_entries.len(),
    );

    Ok(())
}
