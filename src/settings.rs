//! Scene settings and quality presets
//!
//! Persisted in LocalStorage on web; read from a JSON file by the native runner.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Upper bound on objects per variant accepted from settings
pub const MAX_OBJECTS_PER_KIND: usize = 50;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum live particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 150,
            QualityPreset::Medium => 600,
            QualityPreset::High => 2000,
        }
    }

    /// Whether nebulae get the (expensive) canvas blur filter
    pub fn nebula_blur(&self) -> bool {
        match self {
            QualityPreset::Low => false,
            QualityPreset::Medium => true,
            QualityPreset::High => true,
        }
    }
}

/// Scene settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Emit particles at all
    pub particles: bool,
    /// Soft-edge blur on nebulae
    pub blur: bool,
    /// Objects created for each of the four variants
    pub objects_per_kind: usize,
    /// Chance per object update of emitting a particle (0.0 - 1.0)
    pub spawn_chance: f32,
    /// Opacity of the per-frame black overlay (0.0 - 1.0); lower means longer trails
    pub trail_alpha: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            blur: true,
            objects_per_kind: OBJECTS_PER_KIND,
            spawn_chance: SPAWN_CHANCE,
            trail_alpha: TRAIL_ALPHA,
        }
    }
}

/// Values picked out of a URL query string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOverrides {
    /// At least one setting changed
    pub changed: bool,
    /// Fixed RNG seed requested via `seed=`
    pub seed: Option<u64>,
}

impl Settings {
    /// Create settings from a quality preset (applies preset defaults)
    pub fn from_preset(preset: QualityPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a quality preset
    ///
    /// `blur` keeps its value; `nebula_blur` combines it with the preset.
    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    /// Effective nebula blur radius, if any
    pub fn nebula_blur(&self) -> Option<f32> {
        (self.blur && self.quality.nebula_blur()).then_some(NEBULA_BLUR_PX)
    }

    /// Clamp out-of-range values
    pub fn sanitize(&mut self) {
        if !self.spawn_chance.is_finite() {
            self.spawn_chance = SPAWN_CHANCE;
        }
        if !self.trail_alpha.is_finite() {
            self.trail_alpha = TRAIL_ALPHA;
        }
        self.spawn_chance = self.spawn_chance.clamp(0.0, 1.0);
        self.trail_alpha = self.trail_alpha.clamp(0.0, 1.0);
        self.objects_per_kind = self.objects_per_kind.min(MAX_OBJECTS_PER_KIND);
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Apply `key=value` pairs from a URL query string (leading `?` optional)
    ///
    /// Recognized keys: `quality`, `seed`, `per_kind`, `trail`, `spawn`,
    /// `particles`, `blur`. Unknown keys and unparsable values are ignored.
    pub fn apply_query(&mut self, query: &str) -> QueryOverrides {
        let mut overrides = QueryOverrides::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let changed = match key {
                "quality" => QualityPreset::from_str(value)
                    .map(|preset| self.apply_preset(preset))
                    .is_some(),
                "seed" => {
                    overrides.seed = value.parse().ok();
                    false
                }
                "per_kind" => value.parse::<usize>().map(|n| self.objects_per_kind = n).is_ok(),
                "trail" => value.parse::<f32>().map(|a| self.trail_alpha = a).is_ok(),
                "spawn" => value.parse::<f32>().map(|c| self.spawn_chance = c).is_ok(),
                "particles" => value.parse::<bool>().map(|b| self.particles = b).is_ok(),
                "blur" => value.parse::<bool>().map(|b| self.blur = b).is_ok(),
                _ => false,
            };
            if changed {
                log::debug!("Query override {}={}", key, value);
            } else if key != "seed" {
                log::warn!("Ignoring query parameter {:?}", pair);
            }
            overrides.changed |= changed;
        }

        self.sanitize();
        overrides
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "starfield_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Stored settings are invalid ({}), using defaults", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                    log::warn!("Failed to save settings");
                } else {
                    log::info!("Settings saved");
                }
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }

    /// Load settings from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cannot read {}: {}, using defaults", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_scene_constants() {
        let s = Settings::default();
        assert_eq!(s.objects_per_kind, 5);
        assert_eq!(s.spawn_chance, 0.1);
        assert_eq!(s.trail_alpha, 0.1);
        assert_eq!(s.nebula_blur(), Some(5.0));
        assert_eq!(s.max_particles(), 600);
    }

    #[test]
    fn test_low_preset_disables_blur() {
        let s = Settings::from_preset(QualityPreset::Low);
        assert_eq!(s.nebula_blur(), None);
        assert_eq!(s.max_particles(), 150);
    }

    #[test]
    fn test_leaving_low_preset_restores_blur() {
        let mut s = Settings::default();
        s.apply_query("quality=low");
        assert_eq!(s.nebula_blur(), None);
        s.apply_query("quality=high");
        assert_eq!(s.quality, QualityPreset::High);
        assert!(s.blur);
        assert_eq!(s.nebula_blur(), Some(5.0));
    }

    #[test]
    fn test_blur_flag_off_wins_over_preset() {
        let mut s = Settings::from_preset(QualityPreset::High);
        s.apply_query("blur=false");
        assert_eq!(s.nebula_blur(), None);
    }

    #[test]
    fn test_particles_off_caps_at_zero() {
        let s = Settings {
            particles: false,
            ..Default::default()
        };
        assert_eq!(s.max_particles(), 0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{"quality":"High","trail_alpha":0.25}"#).unwrap();
        assert_eq!(s.quality, QualityPreset::High);
        assert_eq!(s.trail_alpha, 0.25);
        assert_eq!(s.objects_per_kind, 5);
    }

    #[test]
    fn test_json_values_are_clamped() {
        let s = Settings::from_json(r#"{"spawn_chance":4.0,"objects_per_kind":1000}"#).unwrap();
        assert_eq!(s.spawn_chance, 1.0);
        assert_eq!(s.objects_per_kind, MAX_OBJECTS_PER_KIND);
    }

    #[test]
    fn test_native_load_is_default() {
        let s = Settings::load();
        s.save();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{not json").is_err());
    }

    #[test]
    fn test_query_overrides() {
        let mut s = Settings::default();
        let o = s.apply_query("?quality=low&seed=42&per_kind=2&trail=0.3&bogus=1");
        assert!(o.changed);
        assert_eq!(o.seed, Some(42));
        assert_eq!(s.quality, QualityPreset::Low);
        assert_eq!(s.objects_per_kind, 2);
        assert_eq!(s.trail_alpha, 0.3);
    }

    #[test]
    fn test_query_seed_only_is_not_a_change() {
        let mut s = Settings::default();
        let o = s.apply_query("seed=7");
        assert!(!o.changed);
        assert_eq!(o.seed, Some(7));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_empty_query() {
        let mut s = Settings::default();
        assert_eq!(s.apply_query(""), QueryOverrides::default());
    }
}
