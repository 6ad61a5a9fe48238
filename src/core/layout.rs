//! Pfeil-Geometrie für Transitionen (gerade, gebogen, Selbstschleife).
//!
//! Die Geometrie ist reine Berechnung aus den Endpunkt-Positionen, der
//! Darstellungsart und dem Label. `LayoutCache` rechnet nur neu, wenn sich
//! eine dieser Eingaben geändert hat.

use super::{Graph, LayoutPriority, Transition, TransitionId};
use glam::Vec2;
use std::collections::HashMap;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_8};

/// Zustands-Radius
pub const NODE_RADIUS: f32 = 30.0;
/// Abstand zwischen Pfeilspitze und Zustandsrand
pub const ARROW_PADDING: f32 = 5.0;
/// Ausbuchtung gebogener Pfeile (Abstand Kontrollpunkt zur Mitte)
pub const CURVE_SIZE: f32 = 40.0;
/// Zusätzlicher Label-Abstand über `CURVE_SIZE` hinaus
pub const CURVE_LABEL_OFFSET: f32 = 20.0;
/// Spline-Spannung gebogener Pfeile
pub const CURVE_TENSION: f32 = 0.5;
/// Öffnungswinkel der Selbstschleife in Grad
pub const SELF_LOOP_ANGLE_DEG: f32 = 60.0;
/// Höhe der Selbstschleife über dem Zustandsrand
pub const SELF_LOOP_DISTANCE: f32 = 30.0;
/// Label-Abstand über dem Scheitel der Selbstschleife
pub const SELF_LOOP_LABEL_OFFSET: f32 = 20.0;

/// Art des berechneten Pfeils
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKind {
    Straight,
    Curve,
    SelfLoop,
}

/// Maße für die Pfeil-Berechnung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub node_radius: f32,
    pub arrow_padding: f32,
    pub curve_size: f32,
    pub curve_label_offset: f32,
    pub curve_tension: f32,
    pub self_loop_angle_deg: f32,
    pub self_loop_distance: f32,
    pub self_loop_label_offset: f32,
}

impl Default for LayoutMetrics {
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
        }
    }
}

/// Fertige Pfeil-Geometrie einer Transition
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowLayout {
    /// Art des Pfeils
    pub kind: ArrowKind,
    /// Stützpunkte des Splines (letzter Punkt = Pfeilspitze)
    pub points: Vec<Vec2>,
    /// Spline-Spannung (0 = Polylinie)
    pub tension: f32,
    /// Position des Labels
    pub label_position: Vec2,
    /// Label-Text (`ε` und Symbole, komma-getrennt)
    pub label_text: String,
}

/// Baut den Label-Text einer Transition.
///
/// `ε` zuerst (falls gesetzt), danach die Symbole der Tokens in Reihenfolge.
/// Tokens, die nicht im Alphabet stehen, werden übersprungen.
pub fn label_text(graph: &Graph, transition: &Transition) -> String {
    let epsilon = transition.is_epsilon.then_some("ε");
    let symbols = transition
        .tokens
        .iter()
        .filter_map(|id| graph.token(id))
        .map(|t| t.symbol.as_str());
    epsilon.into_iter().chain(symbols).collect::<Vec<_>>().join(",")
}

/// Berechnet die Pfeil-Geometrie aus Positionen und Darstellungsart.
pub fn compute(
    source: Vec2,
    dest: Vec2,
    is_self_loop: bool,
    priority: LayoutPriority,
    label_text: String,
    metrics: &LayoutMetrics,
) -> ArrowLayout {
    if is_self_loop {
        return self_loop(source, label_text, metrics);
    }
    match priority {
        LayoutPriority::Straight => straight(source, dest, label_text, metrics),
        LayoutPriority::Curve => curve(source, dest, label_text, metrics),
    }
}

/// Geometrie für eine Transition im Graphen (`None` bei unbekannten Endpunkten)
pub fn layout_for(graph: &Graph, transition: &Transition, metrics: &LayoutMetrics) -> Option<ArrowLayout> {
    let source = graph.state(&transition.source)?.position;
    let dest = graph.state(&transition.dest)?.position;
    Some(compute(
        source,
        dest,
        transition.is_self_loop(),
        transition.layout_priority,
        label_text(graph, transition),
        metrics,
    ))
}

fn self_loop(center: Vec2, label_text: String, m: &LayoutMetrics) -> ArrowLayout {
    let angle = m.self_loop_angle_deg.to_radians();
    let (sin, cos) = angle.sin_cos();
    let r = m.node_radius;
    let d = m.self_loop_distance;
    let apex = Vec2::new(center.x, center.y - r - 1.5 * d);

    let points = vec![
        Vec2::new(center.x + r * cos, center.y - r * sin),
        Vec2::new(center.x + (r + d) * cos, center.y - (r + d) * sin),
        apex,
        Vec2::new(center.x - (r + d) * cos, center.y - (r + d) * sin),
        Vec2::new(
            center.x - (r + m.arrow_padding) * cos,
            center.y - (r + m.arrow_padding) * sin,
        ),
    ];

    ArrowLayout {
        kind: ArrowKind::SelfLoop,
        points,
        tension: 0.0,
        label_position: apex - Vec2::new(0.0, m.self_loop_label_offset),
        label_text,
    }
}

fn straight(source: Vec2, dest: Vec2, label_text: String, m: &LayoutMetrics) -> ArrowLayout {
    let v = (dest - source).normalize_or_zero() * (m.node_radius + m.arrow_padding);
    let start = source + v;
    let end = dest - v;

    ArrowLayout {
        kind: ArrowKind::Straight,
        points: vec![source, end],
        tension: 0.0,
        label_position: (start + end) * 0.5,
        label_text,
    }
}

fn curve(source: Vec2, dest: Vec2, label_text: String, m: &LayoutMetrics) -> ArrowLayout {
    let delta = dest - source;
    let theta = delta.y.atan2(delta.x);
    let normal = Vec2::from_angle(theta + FRAC_PI_2);
    let mid = (source + dest) * 0.5;

    let start = source + Vec2::from_angle(theta + FRAC_PI_8) * m.node_radius;
    let control = mid + normal * m.curve_size;
    let end = dest - Vec2::from_angle(theta - FRAC_PI_8) * (m.node_radius + m.arrow_padding);

    ArrowLayout {
        kind: ArrowKind::Curve,
        points: vec![start, control, end],
        tension: m.curve_tension,
        label_position: mid + normal * (m.curve_size + m.curve_label_offset),
        label_text,
    }
}

/// Eingaben, von denen die Geometrie abhängt
#[derive(Debug, Clone, PartialEq)]
struct LayoutInputs {
    source: Vec2,
    dest: Vec2,
    is_self_loop: bool,
    priority: LayoutPriority,
    label_text: String,
}

/// Cache der Pfeil-Geometrie pro Transition.
///
/// Eine Transition wird nur neu berechnet, wenn sich eine Endpunkt-Position,
/// die Darstellungsart oder das Label geändert hat.
#[derive(Debug, Clone, Default)]
pub struct LayoutCache {
    metrics: LayoutMetrics,
    entries: HashMap<TransitionId, (LayoutInputs, ArrowLayout)>,
}

impl LayoutCache {
    /// Erstellt einen leeren Cache mit den gegebenen Maßen
    pub fn new(metrics: LayoutMetrics) -> Self {
        Self {
            metrics,
            entries: HashMap::new(),
        }
    }

    /// Aktuelle Maße
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Setzt neue Maße; bei Änderung wird der Cache verworfen
    pub fn set_metrics(&mut self, metrics: LayoutMetrics) {
        if self.metrics != metrics {
            self.metrics = metrics;
            self.entries.clear();
        }
    }

    /// Bringt den Cache auf den Stand des Graphen.
    ///
    /// Gibt die Anzahl neu berechneter Transitionen zurück.
    pub fn refresh(&mut self, graph: &Graph) -> usize {
        self.entries
            .retain(|id, _| graph.transition(id).is_some());

        let mut recomputed = 0;
        for transition in graph.transitions() {
            let (Some(source), Some(dest)) = (
                graph.state(&transition.source),
                graph.state(&transition.dest),
            ) else {
                continue;
            };
            let inputs = LayoutInputs {
                source: source.position,
                dest: dest.position,
                is_self_loop: transition.is_self_loop(),
                priority: transition.layout_priority,
                label_text: label_text(graph, transition),
            };
            if self
                .entries
                .get(&transition.id)
                .is_some_and(|(cached, _)| *cached == inputs)
            {
                continue;
            }
            let layout = compute(
                inputs.source,
                inputs.dest,
                inputs.is_self_loop,
                inputs.priority,
                inputs.label_text.clone(),
                &self.metrics,
            );
            self.entries.insert(transition.id.clone(), (inputs, layout));
            recomputed += 1;
        }
        recomputed
    }

    /// Gecachte Geometrie einer Transition (nach `refresh`)
    pub fn get(&self, id: &TransitionId) -> Option<&ArrowLayout> {
        self.entries.get(id).map(|(_, layout)| layout)
    }

    /// Anzahl gecachter Einträge
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Cache leer?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Verwirft alle Einträge
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
