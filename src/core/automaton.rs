//! Projektion des Editor-Graphen auf einen ausführbaren DFA und dessen Validierung.
//!
//! Der DFA arbeitet auf Labels und Symbolen statt auf IDs. Einträge mit
//! unbekannten IDs werden bei der Projektion übersprungen.

use super::{Graph, StateId, TokenId};
use indexmap::IndexSet;
use std::fmt;

/// Eine Symbol-Transition im DFA
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfaTransition {
    pub source: String,
    pub symbol: String,
    pub dest: String,
}

/// Eine ε-Transition im DFA (nur für die Validierung relevant)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfaEpsilon {
    pub source: String,
    pub dest: String,
}

/// Label-basierte Sicht auf den Automaten
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dfa {
    /// Eingabe-Alphabet (Symbole in Alphabet-Reihenfolge, Duplikate möglich)
    pub alphabet: Vec<String>,
    /// Zustands-Labels in Reihenfolge (Duplikate möglich)
    pub states: Vec<String>,
    /// Label des Start-Zustands
    pub start: Option<String>,
    /// Labels der akzeptierenden Zustände
    pub accept: Vec<String>,
    /// Symbol-Transitionen (eine pro Token einer Editor-Transition)
    pub transitions: Vec<DfaTransition>,
    /// ε-Transitionen
    pub epsilon_transitions: Vec<DfaEpsilon>,
}

fn state_label<'a>(graph: &'a Graph, id: &StateId) -> Option<&'a str> {
    graph.state(id).map(|s| s.label.as_str())
}

fn token_symbol<'a>(graph: &'a Graph, id: &TokenId) -> Option<&'a str> {
    graph.token(id).map(|t| t.symbol.as_str())
}

/// Projiziert den Graphen auf einen DFA.
pub fn project(graph: &Graph) -> Dfa {
    let mut dfa = Dfa {
        alphabet: graph.alphabet().map(|t| t.symbol.clone()).collect(),
        states: graph.states().map(|s| s.label.clone()).collect(),
        start: graph
            .start_state()
            .and_then(|id| state_label(graph, id))
            .map(str::to_string),
        accept: graph
            .states()
            .filter(|s| s.is_accept)
            .map(|s| s.label.clone())
            .collect(),
        ..Dfa::default()
    };

    for transition in graph.transitions() {
        let (Some(source), Some(dest)) = (
            state_label(graph, &transition.source),
            state_label(graph, &transition.dest),
        ) else {
            continue;
        };
        for token_id in &transition.tokens {
            let Some(symbol) = token_symbol(graph, token_id) else {
                continue;
            };
            dfa.transitions.push(DfaTransition {
                source: source.to_string(),
                symbol: symbol.to_string(),
                dest: dest.to_string(),
            });
        }
        if transition.is_epsilon {
            dfa.epsilon_transitions.push(DfaEpsilon {
                source: source.to_string(),
                dest: dest.to_string(),
            });
        }
    }

    dfa
}

impl Dfa {
    /// Eindeutige Zustands-Labels in Reihenfolge
    pub fn unique_states(&self) -> IndexSet<&str> {
        self.states.iter().map(String::as_str).collect()
    }

    /// Eindeutige, nicht-leere Symbole in Reihenfolge
    pub fn unique_symbols(&self) -> IndexSet<&str> {
        self.alphabet
            .iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Alle Ziele, die von `state` mit `symbol` erreicht werden
    pub fn targets<'a>(&'a self, state: &'a str, symbol: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.transitions
            .iter()
            .filter(move |t| t.source == state && t.symbol == symbol)
            .map(|t| t.dest.as_str())
    }

    /// Erstes Ziel für `(state, symbol)`
    pub fn next_state(&self, state: &str, symbol: &str) -> Option<&str> {
        self.transitions
            .iter()
            .find(|t| t.source == state && t.symbol == symbol)
            .map(|t| t.dest.as_str())
    }

    /// Akzeptierender Zustand?
    pub fn is_accept(&self, state: &str) -> bool {
        self.accept.iter().any(|a| a == state)
    }

    /// Deterministisch: keine ε-Transitionen und höchstens ein Ziel pro Paar
    pub fn is_deterministic(&self) -> bool {
        if !self.epsilon_transitions.is_empty() {
            return false;
        }
        let states = self.unique_states();
        let symbols = self.unique_symbols();
        states
            .iter()
            .all(|state| symbols.iter().all(|symbol| self.targets(state, symbol).count() <= 1))
    }

    /// Von `start` aus über Symbol-Transitionen erreichbare Zustände
    pub fn reachable_states(&self) -> IndexSet<&str> {
        let mut reached: IndexSet<&str> = IndexSet::new();
        let Some(start) = self.start.as_deref() else {
            return reached;
        };
        reached.insert(start);
        let mut cursor = 0;
        while let Some(&current) = reached.get_index(cursor) {
            for t in self.transitions.iter().filter(|t| t.source == current) {
                reached.insert(t.dest.as_str());
            }
            cursor += 1;
        }
        reached
    }
}

/// Schweregrad eines Validierungs-Befunds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Einzelner, unabhängiger Befund der DFA-Validierung
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFinding {
    /// Kein Start-Zustand gesetzt
    MissingStartState,
    /// Zustand hat für ein Symbol keine ausgehende Transition
    MissingTransition { state: String, symbol: String },
    /// Zustand hat für ein Symbol mehrere ausgehende Transitionen
    AmbiguousTransition {
        state: String,
        symbol: String,
        targets: Vec<String>,
    },
    /// ε-Transition in einem DFA
    EpsilonTransition { source: String, dest: String },
    /// Symbol kommt mehrfach im Alphabet vor
    DuplicateSymbol { symbol: String },
    /// Alphabet enthält ein leeres Symbol
    EmptySymbol,
    /// Zustand ist vom Start aus nicht erreichbar
    UnreachableState { state: String },
    /// Akzeptierender Zustand ist vom Start aus nicht erreichbar
    UnreachableAcceptState { state: String },
    /// Mehrere Zustände tragen dasselbe Label
    DuplicateStateLabel { label: String },
}

impl ValidationFinding {
    /// Schweregrad
    pub fn severity(&self) -> Severity {
        match self {
            Self::UnreachableAcceptState { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Ist der Befund ein Fehler (nicht nur eine Warnung)?
    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for ValidationFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStartState => write!(f, "Kein Start-Zustand gesetzt"),
            Self::MissingTransition { state, symbol } => {
                write!(f, "Zustand \"{state}\" hat keine Transition für \"{symbol}\"")
            }
            Self::AmbiguousTransition {
                state,
                symbol,
                targets,
            } => write!(
                f,
                "Zustand \"{state}\" hat mehrere Transitionen für \"{symbol}\": {}",
                targets.join(", ")
            ),
            Self::EpsilonTransition { source, dest } => {
                write!(f, "ε-Transition von \"{source}\" nach \"{dest}\" ist im DFA nicht erlaubt")
            }
            Self::DuplicateSymbol { symbol } => {
                write!(f, "Symbol \"{symbol}\" kommt mehrfach im Alphabet vor")
            }
            Self::EmptySymbol => write!(f, "Alphabet enthält ein leeres Symbol"),
            Self::UnreachableState { state } => {
                write!(f, "Zustand \"{state}\" ist nicht erreichbar")
            }
            Self::UnreachableAcceptState { state } => {
                write!(f, "Akzeptierender Zustand \"{state}\" ist nicht erreichbar")
            }
            Self::DuplicateStateLabel { label } => {
                write!(f, "Label \"{label}\" wird von mehreren Zuständen benutzt")
            }
        }
    }
}

/// Prüft den DFA und sammelt alle Befunde (bricht nie vorzeitig ab).
pub fn validate(dfa: &Dfa) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();

    if dfa.start.is_none() {
        findings.push(ValidationFinding::MissingStartState);
    }

    let mut seen_labels = IndexSet::new();
    let mut reported_labels = IndexSet::new();
    for label in &dfa.states {
        if !seen_labels.insert(label.as_str()) && reported_labels.insert(label.as_str()) {
            findings.push(ValidationFinding::DuplicateStateLabel {
                label: label.clone(),
            });
        }
    }

    let mut seen_symbols = IndexSet::new();
    let mut reported_symbols = IndexSet::new();
    let mut has_empty = false;
    for symbol in &dfa.alphabet {
        if symbol.is_empty() {
            has_empty = true;
            continue;
        }
        if !seen_symbols.insert(symbol.as_str()) && reported_symbols.insert(symbol.as_str()) {
            findings.push(ValidationFinding::DuplicateSymbol {
                symbol: symbol.clone(),
            });
        }
    }
    if has_empty {
        findings.push(ValidationFinding::EmptySymbol);
    }

    let symbols = dfa.unique_symbols();
    for state in dfa.unique_states() {
        for symbol in &symbols {
            let targets: Vec<String> = dfa.targets(state, symbol).map(str::to_string).collect();
            match targets.len() {
                0 => findings.push(ValidationFinding::MissingTransition {
                    state: state.to_string(),
                    symbol: symbol.to_string(),
                }),
                1 => {}
                _ => findings.push(ValidationFinding::AmbiguousTransition {
                    state: state.to_string(),
                    symbol: symbol.to_string(),
                    targets,
                }),
            }
        }
    }

    for epsilon in &dfa.epsilon_transitions {
        findings.push(ValidationFinding::EpsilonTransition {
            source: epsilon.source.clone(),
            dest: epsilon.dest.clone(),
        });
    }

    // Ohne Start-Zustand ist Erreichbarkeit nicht definiert
    if dfa.start.is_some() {
        let reachable = dfa.reachable_states();
        for state in dfa.unique_states() {
            if reachable.contains(state) {
                continue;
            }
            if dfa.is_accept(state) {
                findings.push(ValidationFinding::UnreachableAcceptState {
                    state: state.to_string(),
                });
            } else {
                findings.push(ValidationFinding::UnreachableState {
                    state: state.to_string(),
                });
            }
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    /// q0 --a--> q1 --a--> q1, Start q0, q1 akzeptierend
    fn simple_graph() -> Graph {
        let mut graph = Graph::new();
        let q0 = graph.add_state("q0", Vec2::ZERO).id;
        let q1 = graph.add_state("q1", Vec2::new(100.0, 0.0)).id;
        let a = graph.add_token();
        graph.set_token_symbol(&a.id, "a");
        graph.add_transition(&q0, &q1, false, [a.id.clone()]);
        graph.add_transition(&q1, &q1, false, [a.id.clone()]);
        graph.set_start(Some(&q0));
        graph.set_accept(&q1, true);
        graph
    }

    #[test]
    fn test_project_uses_labels_and_symbols() {
        let dfa = project(&simple_graph());
        assert_eq!(dfa.alphabet, vec!["a"]);
        assert_eq!(dfa.states, vec!["q0", "q1"]);
        assert_eq!(dfa.start.as_deref(), Some("q0"));
        assert_eq!(dfa.accept, vec!["q1"]);
        assert_eq!(dfa.transitions.len(), 2);
        assert_eq!(dfa.next_state("q0", "a"), Some("q1"));
        assert!(dfa.epsilon_transitions.is_empty());
    }

    #[test]
    fn test_complete_dfa_has_no_findings() {
        let dfa = project(&simple_graph());
        assert!(validate(&dfa).is_empty());
        assert!(dfa.is_deterministic());
    }

    #[test]
    fn test_missing_start_skips_reachability() {
        let mut graph = simple_graph();
        graph.set_start(None);
        let findings = validate(&project(&graph));
        assert_eq!(findings, vec![ValidationFinding::MissingStartState]);
    }

    #[test]
    fn test_missing_and_ambiguous_transitions() {
        let mut graph = Graph::new();
        let q0 = graph.add_state("q0", Vec2::ZERO).id;
        let q1 = graph.add_state("q1", Vec2::ZERO).id;
        let q2 = graph.add_state("q2", Vec2::ZERO).id;
        let a = graph.add_token();
        graph.set_token_symbol(&a.id, "a");
        graph.add_transition(&q0, &q1, false, [a.id.clone()]);
        graph.add_transition(&q0, &q2, false, [a.id.clone()]);
        graph.set_start(Some(&q0));

        let dfa = project(&graph);
        let findings = validate(&dfa);

        assert!(findings.contains(&ValidationFinding::AmbiguousTransition {
            state: "q0".into(),
            symbol: "a".into(),
            targets: vec!["q1".into(), "q2".into()],
        }));
        assert!(findings.contains(&ValidationFinding::MissingTransition {
            state: "q1".into(),
            symbol: "a".into(),
        }));
        assert!(findings.contains(&ValidationFinding::MissingTransition {
            state: "q2".into(),
            symbol: "a".into(),
        }));
        assert!(!dfa.is_deterministic());
    }

    #[test]
    fn test_epsilon_transition_is_reported() {
        let mut graph = simple_graph();
        let q0 = graph.states().next().map(|s| s.id.clone()).expect("q0");
        graph.add_transition(&q0, &q0, true, []);

        let findings = validate(&project(&graph));
        assert!(findings.contains(&ValidationFinding::EpsilonTransition {
            source: "q0".into(),
            dest: "q0".into(),
        }));
    }

    #[test]
    fn test_alphabet_findings() {
        let mut graph = simple_graph();
        let dup = graph.add_token();
        graph.set_token_symbol(&dup.id, "a");
        graph.add_token();

        let findings = validate(&project(&graph));
        assert!(findings.contains(&ValidationFinding::DuplicateSymbol { symbol: "a".into() }));
        assert!(findings.contains(&ValidationFinding::EmptySymbol));
        // Leere Symbole erzeugen keine MissingTransition-Befunde
        assert!(!findings.iter().any(|f| matches!(
            f,
            ValidationFinding::MissingTransition { symbol, .. } if symbol.is_empty()
        )));
    }

    #[test]
    fn test_unreachable_states_and_severity() {
        let mut graph = simple_graph();
        let lost = graph.add_state("lost", Vec2::ZERO).id;
        let lost_accept = graph.add_state("lost_accept", Vec2::ZERO).id;
        graph.set_accept(&lost_accept, true);
        // Transition ohne Tokens zählt nicht für die Erreichbarkeit
        graph.add_transition(&lost, &lost_accept, false, []);

        let findings = validate(&project(&graph));
        let unreachable = ValidationFinding::UnreachableState {
            state: "lost".into(),
        };
        let unreachable_accept = ValidationFinding::UnreachableAcceptState {
            state: "lost_accept".into(),
        };
        assert!(findings.contains(&unreachable));
        assert!(findings.contains(&unreachable_accept));
        assert_eq!(unreachable.severity(), Severity::Error);
        assert_eq!(unreachable_accept.severity(), Severity::Warning);
    }

    #[test]
    fn test_duplicate_state_label_reported_once() {
        let mut graph = simple_graph();
        graph.add_state("q1", Vec2::ZERO);
        graph.add_state("q1", Vec2::ZERO);

        let findings = validate(&project(&graph));
        let count = findings
            .iter()
            .filter(|f| matches!(f, ValidationFinding::DuplicateStateLabel { .. }))
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_project_skips_unknown_tokens() {
        let mut graph = simple_graph();
        let token = graph.alphabet().next().map(|t| t.id.clone()).expect("Token");
        graph.remove_token(&token);
        let dfa = project(&graph);
        assert!(dfa.transitions.is_empty());
        assert!(dfa.alphabet.is_empty());
    }
}
