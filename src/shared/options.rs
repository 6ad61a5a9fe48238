//! Zentrale Konfiguration für den Automaten-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::layout::{
    LayoutMetrics, ARROW_PADDING, CURVE_LABEL_OFFSET, CURVE_SIZE, CURVE_TENSION, NODE_RADIUS,
    SELF_LOOP_ANGLE_DEG, SELF_LOOP_DISTANCE, SELF_LOOP_LABEL_OFFSET,
};
use serde::{Deserialize, Serialize};

// ── Einfügen ────────────────────────────────────────────────────────

/// Versatz eingefügter Objekte relativ zur Kopie.
pub const PASTE_OFFSET: [f32; 2] = [20.0, 20.0];

// ── Raster ──────────────────────────────────────────────────────────

/// Rasterweite für Snap-to-Grid.
pub const GRID_SPACING: f32 = 50.0;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `automaton_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Zustände & Pfeile ───────────────────────────────────────
    /// Radius eines Zustands
    pub node_radius: f32,
    /// Abstand Pfeilspitze ↔ Zustandsrand
    pub arrow_padding: f32,
    /// Ausbuchtung gebogener Transitionen
    pub curve_size: f32,
    /// Zusätzlicher Label-Abstand gebogener Transitionen
    pub curve_label_offset: f32,
    /// Spline-Spannung gebogener Transitionen
    pub curve_tension: f32,
    /// Öffnungswinkel der Selbstschleife in Grad
    pub self_loop_angle_deg: f32,
    /// Höhe der Selbstschleife
    pub self_loop_distance: f32,
    /// Label-Abstand über der Selbstschleife
    pub self_loop_label_offset: f32,

    // ── Editieren ───────────────────────────────────────────────
    /// Versatz beim Einfügen [x, y]
    pub paste_offset: [f32; 2],
    /// Neue Zustände am Raster ausrichten
    pub snap_to_grid: bool,
    /// Rasterweite
    pub grid_spacing: f32,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Anzahl Undo-Schritte (None = unbegrenzt)
    pub history_max_depth: Option<usize>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            node_radius: NODE_RADIUS,
            arrow_padding: ARROW_PADDING,
            curve_size: CURVE_SIZE,
            curve_label_offset: CURVE_LABEL_OFFSET,
            curve_tension: CURVE_TENSION,
            self_loop_angle_deg: SELF_LOOP_ANGLE_DEG,
            self_loop_distance: SELF_LOOP_DISTANCE,
            self_loop_label_offset: SELF_LOOP_LABEL_OFFSET,

            paste_offset: PASTE_OFFSET,
            snap_to_grid: false,
            grid_spacing: GRID_SPACING,

            history_max_depth: None,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("automaton_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("automaton_editor.toml")
    }

    /// Maße für die Pfeil-Geometrie
    pub fn layout_metrics(&self) -> LayoutMetrics {
        LayoutMetrics {
            node_radius: self.node_radius,
            arrow_padding: self.arrow_padding,
            curve_size: self.curve_size,
            curve_label_offset: self.curve_label_offset,
            curve_tension: self.curve_tension,
            self_loop_angle_deg: self.self_loop_angle_deg,
            self_loop_distance: self.self_loop_distance,
            self_loop_label_offset: self.self_loop_label_offset,
        }
    }

    /// Versatz beim Einfügen als Vektor
    pub fn paste_offset_vec(&self) -> glam::Vec2 {
        glam::Vec2::from(self.paste_offset)
    }

    /// Richtet eine Position am Raster aus, falls aktiviert.
    pub fn snap_position(&self, position: glam::Vec2) -> glam::Vec2 {
        if !self.snap_to_grid || self.grid_spacing <= 0.0 {
            return position;
        }
        (position / self.grid_spacing).round() * self.grid_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn defaults_match_layout_constants() {
        let options = EditorOptions::default();
        assert_eq!(options.layout_metrics(), LayoutMetrics::default());
        assert_eq!(options.history_max_depth, None);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let options: EditorOptions =
            toml::from_str("snap_to_grid = true\ngrid_spacing = 25.0\n").expect("TOML erwartet");
        assert!(options.snap_to_grid);
        assert_eq!(options.grid_spacing, 25.0);
        assert_eq!(options.node_radius, NODE_RADIUS);
    }

    #[test]
    fn snap_position_rounds_to_grid() {
        let mut options = EditorOptions::default();
        assert_eq!(options.snap_position(Vec2::new(74.0, 26.0)), Vec2::new(74.0, 26.0));
        options.snap_to_grid = true;
        assert_eq!(options.snap_position(Vec2::new(74.0, 26.0)), Vec2::new(50.0, 50.0));
        assert_eq!(options.snap_position(Vec2::new(-80.0, 0.0)), Vec2::new(-100.0, 0.0));
    }

    #[test]
    fn toml_round_trip_keeps_values() {
        let mut options = EditorOptions::default();
        options.history_max_depth = Some(50);
        options.curve_size = 55.0;
        let text = toml::to_string_pretty(&options).expect("Serialisierung");
        let back: EditorOptions = toml::from_str(&text).expect("Deserialisierung");
        assert_eq!(back, options);
    }
}
