//! Persisted settings: spacing, typography, and layout options.
//!
//! Each settings group lives in its own JSON file under the platform
//! data directory (`~/.local/share/shakudo/` on Linux). Reads are
//! fail-soft: a missing or corrupt file falls back to defaults so the
//! app always starts. Writes happen on every mutation and are logged
//! but never propagated, matching the rest of the app's persistence.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ShakudoError;
use crate::model::{
    default_spacing, default_typography, Breakpoint, BreakpointSet, LayoutConfig, PreviewHeight,
    SpacingConfig, SpacingField, TypographyConfig, TypographyUpdate,
};

const SPACING_FILE: &str = "spacing.json";
const TYPOGRAPHY_FILE: &str = "typography.json";
const LAYOUT_FILE: &str = "layout.json";

const EXPORT_VERSION: &str = "1.0";

/// In-memory settings with write-through persistence.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    pub spacing: BreakpointSet<SpacingConfig>,
    pub typography: BreakpointSet<TypographyConfig>,
    pub layout: LayoutConfig,
    dir: Option<PathBuf>,
}

/// Stored typography shape. Older versions saved a single flat config
/// for all breakpoints; reading one migrates it to per-breakpoint.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TypographyRecord {
    PerBreakpoint(BreakpointSet<TypographyConfig>),
    Flat(TypographyConfig),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument<'a> {
    spacing: &'a BreakpointSet<SpacingConfig>,
    typography: &'a BreakpointSet<TypographyConfig>,
    layout: &'a LayoutConfig,
    export_date: String,
    version: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportDocument {
    spacing: Option<BreakpointSet<SpacingConfig>>,
    typography: Option<TypographyRecord>,
    layout: Option<LayoutConfig>,
}

impl SettingsStore {
    /// Load from the platform data directory.
    pub fn load() -> Self {
        Self::load_from(data_dir())
    }

    /// Load from an explicit directory, or pure defaults when `None`.
    pub fn load_from(dir: Option<PathBuf>) -> Self {
        let mut store = Self {
            spacing: default_spacing(),
            typography: default_typography(),
            layout: LayoutConfig::default(),
            dir,
        };

        if let Some(spacing) = store.read_json::<BreakpointSet<SpacingConfig>>(SPACING_FILE) {
            store.spacing = spacing;
        }
        match store.read_json::<TypographyRecord>(TYPOGRAPHY_FILE) {
            Some(TypographyRecord::PerBreakpoint(set)) => store.typography = set,
            Some(TypographyRecord::Flat(config)) => {
                tracing::info!("migrating flat typography settings to per-breakpoint");
                store.typography = BreakpointSet::uniform(config);
                store.save_typography();
            }
            None => {}
        }
        if let Some(layout) = store.read_json::<LayoutConfig>(LAYOUT_FILE) {
            store.layout = layout;
        }
        store
    }

    // ── Mutation ────────────────────────────────────────────────────

    pub fn set_spacing(&mut self, breakpoint: Breakpoint, field: SpacingField, value: u32) {
        field.set(self.spacing.get_mut(breakpoint), value);
        self.save_spacing();
    }

    /// Apply a typography change. Global updates (font family, line
    /// heights, letter spacings) broadcast to every breakpoint; size
    /// and weight changes stay on the edited one.
    pub fn apply_typography(&mut self, breakpoint: Breakpoint, update: TypographyUpdate) {
        if update.is_global() {
            self.typography.for_each_mut(|config| update.apply(config));
        } else {
            update.apply(self.typography.get_mut(breakpoint));
        }
        self.save_typography();
    }

    pub fn set_preview_height(&mut self, height: PreviewHeight) {
        self.layout.preview_height = height;
        self.save_layout();
    }

    pub fn set_show_measurements(&mut self, show: bool) {
        self.layout.show_distance_measurement = show;
        self.save_layout();
    }

    pub fn reset_to_defaults(&mut self) {
        self.spacing = default_spacing();
        self.typography = default_typography();
        self.layout = LayoutConfig::default();
        self.save_spacing();
        self.save_typography();
        self.save_layout();
    }

    // ── Export / import ─────────────────────────────────────────────

    /// All settings as a pretty-printed JSON document.
    pub fn export_json(&self) -> Result<String, ShakudoError> {
        let document = ExportDocument {
            spacing: &self.spacing,
            typography: &self.typography,
            layout: &self.layout,
            export_date: chrono::Utc::now().to_rfc3339(),
            version: EXPORT_VERSION,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Suggested file name for an export, e.g. `shakudo-config-2026-08-29.json`.
    pub fn export_file_name(&self) -> String {
        format!("shakudo-config-{}.json", chrono::Local::now().format("%Y-%m-%d"))
    }

    /// Replace settings from an exported document. Spacing and
    /// typography are required; layout is merged only when present.
    /// On any error the current settings are left untouched.
    pub fn import_json(&mut self, json: &str) -> Result<(), ShakudoError> {
        let document: ImportDocument = serde_json::from_str(json)
            .map_err(|e| ShakudoError::Import(format!("not a settings document: {e}")))?;

        let spacing = document
            .spacing
            .ok_or_else(|| ShakudoError::Import("missing \"spacing\" settings".into()))?;
        let typography = match document
            .typography
            .ok_or_else(|| ShakudoError::Import("missing \"typography\" settings".into()))?
        {
            TypographyRecord::PerBreakpoint(set) => set,
            TypographyRecord::Flat(config) => BreakpointSet::uniform(config),
        };

        self.spacing = spacing;
        self.typography = typography;
        if let Some(layout) = document.layout {
            self.layout = layout;
        }
        self.save_spacing();
        self.save_typography();
        self.save_layout();
        Ok(())
    }

    // ── Persistence ─────────────────────────────────────────────────

    fn read_json<T: serde::de::DeserializeOwned>(&self, file: &str) -> Option<T> {
        let path = self.dir.as_ref()?.join(file);
        let content = std::fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("ignoring corrupt settings file {}: {e}", path.display());
                None
            }
        }
    }

    fn save_spacing(&self) {
        self.write_json(SPACING_FILE, &self.spacing);
    }

    fn save_typography(&self) {
        self.write_json(TYPOGRAPHY_FILE, &self.typography);
    }

    fn save_layout(&self) {
        self.write_json(LAYOUT_FILE, &self.layout);
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) {
        let Some(dir) = self.dir.as_ref() else {
            return;
        };
        if let Err(e) = std::fs::create_dir_all(dir) {
            tracing::warn!("failed to create settings dir {}: {e}", dir.display());
            return;
        }
        let path = dir.join(file);
        match serde_json::to_string_pretty(value) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    tracing::warn!("failed to save {}: {e}", path.display());
                }
            }
            Err(e) => tracing::warn!("failed to serialize {file}: {e}"),
        }
    }
}

fn data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "shakudo").map(|dirs| dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FontFamily;

    fn temp_store() -> (tempfile::TempDir, SettingsStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::load_from(Some(dir.path().to_path_buf()));
        (dir, store)
    }

    #[test]
    fn starts_with_defaults_when_empty() {
        let (_dir, store) = temp_store();
        assert_eq!(store.spacing, default_spacing());
        assert_eq!(store.typography, default_typography());
        assert!(!store.layout.show_distance_measurement);
        assert_eq!(store.layout.preview_height, PreviewHeight::Auto);
    }

    #[test]
    fn mutations_survive_reload() {
        let (dir, mut store) = temp_store();
        store.set_spacing(Breakpoint::Tablet, SpacingField::MajorSections, 56);
        store.apply_typography(Breakpoint::Mobile, TypographyUpdate::H1Size(40));
        store.set_preview_height(PreviewHeight::Px(900));

        let reloaded = SettingsStore::load_from(Some(dir.path().to_path_buf()));
        assert_eq!(reloaded.spacing.tablet.major_sections, 56);
        assert_eq!(reloaded.typography.mobile.h1_size, 40);
        assert_eq!(reloaded.layout.preview_height, PreviewHeight::Px(900));
    }

    #[test]
    fn reset_restores_and_persists_defaults() {
        let (dir, mut store) = temp_store();
        store.set_spacing(Breakpoint::Desktop, SpacingField::MajorSections, 72);
        store.apply_typography(Breakpoint::Tablet, TypographyUpdate::H2Size(52));
        store.set_preview_height(PreviewHeight::Px(640));
        store.set_show_measurements(true);

        store.reset_to_defaults();
        assert_eq!(store.spacing, default_spacing());
        assert_eq!(store.typography, default_typography());
        assert_eq!(store.layout, LayoutConfig::default());

        let reloaded = SettingsStore::load_from(Some(dir.path().to_path_buf()));
        assert_eq!(reloaded.spacing, default_spacing());
        assert_eq!(reloaded.typography, default_typography());
        assert_eq!(reloaded.layout, LayoutConfig::default());
    }

    #[test]
    fn global_typography_updates_broadcast() {
        let (_dir, mut store) = temp_store();
        store.apply_typography(
            Breakpoint::Desktop,
            TypographyUpdate::FontFamily(FontFamily::Default),
        );
        store.apply_typography(Breakpoint::Tablet, TypographyUpdate::HeadingLineHeight(1.3));
        store.apply_typography(Breakpoint::Desktop, TypographyUpdate::H2Size(44));

        for &bp in Breakpoint::ALL {
            let config = store.typography.get(bp);
            assert_eq!(config.font_family, FontFamily::Default);
            assert_eq!(config.heading_line_height, 1.3);
        }
        assert_eq!(store.typography.desktop.h2_size, 44);
        assert_eq!(store.typography.tablet.h2_size, 49);
    }

    #[test]
    fn flat_typography_file_is_migrated() {
        let dir = tempfile::tempdir().unwrap();
        let mut flat = TypographyConfig::default();
        flat.h1_size = 72;
        std::fs::write(
            dir.path().join(TYPOGRAPHY_FILE),
            serde_json::to_string(&flat).unwrap(),
        )
        .unwrap();

        let store = SettingsStore::load_from(Some(dir.path().to_path_buf()));
        for &bp in Breakpoint::ALL {
            assert_eq!(store.typography.get(bp).h1_size, 72);
        }
        // The migrated shape is written back immediately.
        let rewritten = std::fs::read_to_string(dir.path().join(TYPOGRAPHY_FILE)).unwrap();
        assert!(rewritten.contains("\"desktop\""));
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SPACING_FILE), "{not json").unwrap();
        let store = SettingsStore::load_from(Some(dir.path().to_path_buf()));
        assert_eq!(store.spacing, default_spacing());
    }

    #[test]
    fn export_then_import_round_trips() {
        let (_dir, mut store) = temp_store();
        store.set_spacing(Breakpoint::Desktop, SpacingField::H1ToContent, 40);
        store.apply_typography(Breakpoint::Mobile, TypographyUpdate::P1Size(18));
        store.set_preview_height(PreviewHeight::Px(800));
        let exported = store.export_json().unwrap();
        assert!(exported.contains("\"exportDate\""));
        assert!(exported.contains("\"version\": \"1.0\""));
        assert!(exported.contains("\"h1ToContent\": 40"));

        let (_dir2, mut other) = temp_store();
        other.import_json(&exported).unwrap();
        assert_eq!(other.spacing, store.spacing);
        assert_eq!(other.typography, store.typography);
        assert_eq!(other.layout, store.layout);
    }

    #[test]
    fn import_rejects_incomplete_documents() {
        let (_dir, mut store) = temp_store();
        store.set_spacing(Breakpoint::Desktop, SpacingField::MajorSections, 64);

        let err = store.import_json("{\"spacing\": null}").unwrap_err();
        assert!(matches!(err, ShakudoError::Import(_)));
        let err = store.import_json("not json at all").unwrap_err();
        assert!(matches!(err, ShakudoError::Import(_)));
        // Failed imports leave existing settings alone.
        assert_eq!(store.spacing.desktop.major_sections, 64);
    }

    #[test]
    fn import_accepts_legacy_flat_typography() {
        let (_dir, mut store) = temp_store();
        let document = format!(
            "{{\"spacing\": {}, \"typography\": {}}}",
            serde_json::to_string(&default_spacing()).unwrap(),
            serde_json::to_string(&TypographyConfig::default()).unwrap(),
        );
        store.import_json(&document).unwrap();
        assert_eq!(store.typography, default_typography());
    }

    #[test]
    fn export_file_name_is_dated() {
        let (_dir, store) = temp_store();
        let name = store.export_file_name();
        assert!(name.starts_with("shakudo-config-"));
        assert!(name.ends_with(".json"));
    }
}
