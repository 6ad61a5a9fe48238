//! Schrittweise Ausführung eines DFA auf einer Symbolfolge.

use super::Dfa;
use std::fmt;

/// Status eines Laufs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    NotStarted,
    InProgress,
    Accepted,
    Rejected,
    /// Kein Start-Zustand oder nicht deterministisch
    InvalidDfa,
    /// Eingabe enthält Symbole, die nicht im Alphabet sind
    InvalidInputTokens,
}

impl RunStatus {
    /// Lauf beendet (keine weiteren Schritte möglich)?
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::NotStarted | Self::InProgress)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotStarted => "Nicht gestartet",
            Self::InProgress => "Läuft",
            Self::Accepted => "Akzeptiert",
            Self::Rejected => "Abgelehnt",
            Self::InvalidDfa => "Ungültiger DFA",
            Self::InvalidInputTokens => "Ungültige Eingabe-Symbole",
        };
        f.write_str(text)
    }
}

/// Schrittmaschine über einem projizierten DFA
#[derive(Debug, Clone)]
pub struct DfaRunner<'a> {
    dfa: &'a Dfa,
    input: Vec<String>,
    position: usize,
    current: Option<&'a str>,
    status: RunStatus,
}

impl<'a> DfaRunner<'a> {
    /// Bereitet einen Lauf vor und prüft DFA und Eingabe.
    pub fn new(dfa: &'a Dfa, input: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let input: Vec<String> = input.into_iter().map(Into::into).collect();

        let status = if dfa.start.is_none() || !dfa.is_deterministic() {
            RunStatus::InvalidDfa
        } else if input.iter().any(|s| !dfa.alphabet.contains(s)) {
            RunStatus::InvalidInputTokens
        } else {
            RunStatus::NotStarted
        };

        Self {
            dfa,
            input,
            position: 0,
            current: None,
            status,
        }
    }

    /// Aktueller Status
    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Label des aktuellen Zustands (nach dem ersten Schritt)
    pub fn current_state(&self) -> Option<&str> {
        self.current
    }

    /// Anzahl bereits verarbeiteter Symbole
    pub fn position(&self) -> usize {
        self.position
    }

    /// Führt einen Schritt aus (ein Symbol). Am Ende der Eingabe wird
    /// anhand des aktuellen Zustands akzeptiert oder abgelehnt.
    pub fn step(&mut self) -> RunStatus {
        if self.status.is_terminal() {
            return self.status;
        }

        let current = match self.current {
            Some(current) => current,
            None => {
                let Some(start) = self.dfa.start.as_deref() else {
                    self.status = RunStatus::InvalidDfa;
                    return self.status;
                };
                self.current = Some(start);
                start
            }
        };

        if let Some(symbol) = self.input.get(self.position) {
            match self.dfa.next_state(current, symbol) {
                Some(next) => {
                    self.current = Some(next);
                    self.position += 1;
                    self.status = RunStatus::InProgress;
                }
                None => {
                    self.status = RunStatus::Rejected;
                    return self.status;
                }
            }
        }

        if self.position == self.input.len() {
            self.status = match self.current {
                Some(state) if self.dfa.is_accept(state) => RunStatus::Accepted,
                _ => RunStatus::Rejected,
            };
        }
        self.status
    }

    /// Läuft bis zu einem Endstatus
    pub fn run_until_conclusion(&mut self) -> RunStatus {
        while !self.status.is_terminal() {
            self.step();
        }
        self.status
    }
}

/// Führt eine Eingabe komplett aus
pub fn run(dfa: &Dfa, input: impl IntoIterator<Item = impl Into<String>>) -> RunStatus {
    DfaRunner::new(dfa, input).run_until_conclusion()
}

/// Zerlegt eine Zeichenkette in Ein-Zeichen-Symbole
pub fn split_symbols(input: &str) -> Vec<String> {
    input.chars().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DfaEpsilon, DfaTransition};

    fn t(source: &str, symbol: &str, dest: &str) -> DfaTransition {
        DfaTransition {
            source: source.into(),
            symbol: symbol.into(),
            dest: dest.into(),
        }
    }

    /// Akzeptiert Wörter über {a, b} mit gerader Anzahl `a`
    fn even_a() -> Dfa {
        Dfa {
            alphabet: vec!["a".into(), "b".into()],
            states: vec!["even".into(), "odd".into()],
            start: Some("even".into()),
            accept: vec!["even".into()],
            transitions: vec![
                t("even", "a", "odd"),
                t("even", "b", "even"),
                t("odd", "a", "even"),
                t("odd", "b", "odd"),
            ],
            epsilon_transitions: vec![],
        }
    }

    #[test]
    fn test_accepts_and_rejects() {
        let dfa = even_a();
        assert_eq!(run(&dfa, split_symbols("abab")), RunStatus::Accepted);
        assert_eq!(run(&dfa, split_symbols("ab")), RunStatus::Rejected);
        assert_eq!(run(&dfa, Vec::<String>::new()), RunStatus::Accepted);
    }

    #[test]
    fn test_step_by_step() {
        let dfa = even_a();
        let mut runner = DfaRunner::new(&dfa, ["a", "a"]);
        assert_eq!(runner.status(), RunStatus::NotStarted);
        assert_eq!(runner.current_state(), None);

        assert_eq!(runner.step(), RunStatus::InProgress);
        assert_eq!(runner.current_state(), Some("odd"));
        assert_eq!(runner.step(), RunStatus::Accepted);
        assert_eq!(runner.current_state(), Some("even"));
        assert_eq!(runner.position(), 2);
        // Weitere Schritte ändern nichts
        assert_eq!(runner.step(), RunStatus::Accepted);
    }

    #[test]
    fn test_invalid_input_tokens() {
        let dfa = even_a();
        assert_eq!(run(&dfa, ["a", "c"]), RunStatus::InvalidInputTokens);
    }

    #[test]
    fn test_invalid_dfa_without_start() {
        let mut dfa = even_a();
        dfa.start = None;
        assert_eq!(run(&dfa, ["a"]), RunStatus::InvalidDfa);
    }

    #[test]
    fn test_invalid_dfa_when_nondeterministic() {
        let mut dfa = even_a();
        dfa.transitions.push(t("even", "a", "even"));
        assert_eq!(run(&dfa, ["b"]), RunStatus::InvalidDfa);

        let mut dfa = even_a();
        dfa.epsilon_transitions.push(DfaEpsilon {
            source: "even".into(),
            dest: "odd".into(),
        });
        assert_eq!(run(&dfa, ["b"]), RunStatus::InvalidDfa);
    }

    #[test]
    fn test_missing_transition_rejects_at_step() {
        let dfa = Dfa {
            alphabet: vec!["a".into()],
            states: vec!["q0".into(), "q1".into()],
            start: Some("q0".into()),
            accept: vec!["q1".into()],
            transitions: vec![t("q0", "a", "q1")],
            epsilon_transitions: vec![],
        };
        assert_eq!(run(&dfa, ["a"]), RunStatus::Accepted);
        assert_eq!(run(&dfa, ["a", "a"]), RunStatus::Rejected);
    }
}
