//! Integrationstests für Laden und Speichern von Automaten-Snapshots.

use automaton_editor::json::parse_snapshot;
use automaton_editor::{
    load_snapshot, write_snapshot, AppCommand, AppController, AppState, Graph, LayoutPriority,
    RunStatus, SnapshotError, StateId, TransitionId,
};
use glam::Vec2;

#[test]
fn test_load_simple_fixture_preserves_ids() {
    let json = include_str!("fixtures/simple_automaton.json");
    let mut graph = Graph::new();
    load_snapshot(&mut graph, json).expect("Fixture muss laden");

    assert_eq!(graph.state_count(), 2);
    assert_eq!(graph.token_count(), 1);
    assert_eq!(graph.transition_count(), 1);
    assert_eq!(graph.start_state(), Some(&StateId::new("s-start")));

    let accept = graph.state(&StateId::new("s-accept")).expect("Zustand");
    assert!(accept.is_accept);
    assert_eq!(accept.position, Vec2::new(300.0, 100.0));
    assert_eq!(accept.label, "q1");

    let t = graph
        .transition(&TransitionId::new("t-a"))
        .expect("Transition");
    assert_eq!(t.tokens.len(), 1);
    assert!(!t.is_epsilon);
}

#[test]
fn test_save_then_load_reproduces_snapshot() {
    let json = include_str!("fixtures/even_a.json");
    let mut graph = Graph::new();
    load_snapshot(&mut graph, json).expect("Fixture muss laden");

    let written = write_snapshot(&graph).expect("Schreiben");
    let mut reloaded = Graph::new();
    load_snapshot(&mut reloaded, &written).expect("Neu laden");

    assert_eq!(
        parse_snapshot(&written).expect("parse"),
        parse_snapshot(&write_snapshot(&reloaded).expect("Schreiben")).expect("parse")
    );
    assert_eq!(
        parse_snapshot(&written).expect("parse"),
        parse_snapshot(json).expect("parse")
    );
}

#[test]
fn test_load_applies_pairing_rule() {
    let json = include_str!("fixtures/even_a.json");
    let mut graph = Graph::new();
    load_snapshot(&mut graph, json).expect("Fixture muss laden");

    let priority = |id: &str| {
        graph
            .transition(&TransitionId::new(id))
            .map(|t| t.layout_priority)
    };
    assert_eq!(priority("t0"), Some(LayoutPriority::Curve));
    assert_eq!(priority("t1"), Some(LayoutPriority::Curve));
    // Schleifen bleiben gerade
    assert_eq!(priority("t2"), Some(LayoutPriority::Straight));
    assert_eq!(priority("t3"), Some(LayoutPriority::Straight));
}

#[test]
fn test_loaded_even_a_automaton_runs() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_command(
            &mut state,
            AppCommand::LoadJson {
                json: include_str!("fixtures/even_a.json").to_string(),
            },
        )
        .expect("Laden");

    controller
        .handle_command(&mut state, AppCommand::ValidateAutomaton)
        .expect("Validieren");
    assert!(state.last_findings.is_empty(), "{:?}", state.last_findings);

    for (word, expected) in [
        ("", RunStatus::Accepted),
        ("aa", RunStatus::Accepted),
        ("abab", RunStatus::Accepted),
        ("a", RunStatus::Rejected),
        ("bab", RunStatus::Rejected),
        ("ac", RunStatus::InvalidInputTokens),
    ] {
        controller
            .handle_command(
                &mut state,
                AppCommand::TestString {
                    input: word.to_string(),
                },
            )
            .expect("Test");
        assert_eq!(
            state.last_test.as_ref().map(|t| t.status),
            Some(expected),
            "Wort {word:?}"
        );
    }
}

#[test]
fn test_load_resets_history_and_continues_labels() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_command(
            &mut state,
            AppCommand::AddState {
                position: Vec2::ZERO,
            },
        )
        .expect("Add");
    assert!(state.can_undo());

    controller
        .handle_command(
            &mut state,
            AppCommand::LoadJson {
                json: include_str!("fixtures/simple_automaton.json").to_string(),
            },
        )
        .expect("Laden");
    assert!(!state.can_undo());

    controller
        .handle_command(
            &mut state,
            AppCommand::AddState {
                position: Vec2::new(500.0, 0.0),
            },
        )
        .expect("Add");
    let label = state.graph.states().last().map(|s| s.label.clone());
    assert_eq!(label.as_deref(), Some("q2"));
}

#[test]
fn test_invalid_snapshot_leaves_graph_untouched() {
    let mut graph = Graph::new();
    load_snapshot(&mut graph, include_str!("fixtures/simple_automaton.json")).expect("Laden");
    let before = write_snapshot(&graph).expect("Schreiben");

    let dangling = r#"{
        "states": [{ "id": "a", "x": 0, "y": 0, "label": "q0" }],
        "transitions": [{ "id": "t", "source": "a", "dest": "fehlt" }]
    }"#;
    let err = load_snapshot(&mut graph, dangling).expect_err("muss scheitern");
    assert!(matches!(err, SnapshotError::DanglingEndpoint { .. }));

    let duplicate = r#"{
        "states": [
            { "id": "a", "x": 0, "y": 0, "label": "q0" },
            { "id": "a", "x": 1, "y": 1, "label": "q1" }
        ]
    }"#;
    let err = load_snapshot(&mut graph, duplicate).expect_err("muss scheitern");
    assert!(matches!(err, SnapshotError::DuplicateId { .. }));

    assert!(matches!(
        load_snapshot(&mut graph, "kein json"),
        Err(SnapshotError::Json(_))
    ));

    assert_eq!(write_snapshot(&graph).expect("Schreiben"), before);
}

#[test]
fn test_save_and_load_file_via_controller() {
    let dir = std::env::temp_dir().join(format!("automaton_editor_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis");
    let path = dir.join("gespeichert.json");
    let path_str = path.to_string_lossy().to_string();

    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_command(
            &mut state,
            AppCommand::LoadJson {
                json: include_str!("fixtures/even_a.json").to_string(),
            },
        )
        .expect("Laden");

    // Ohne bekannten Pfad schlägt Save fehl
    assert!(controller
        .handle_command(&mut state, AppCommand::SaveFile { path: None })
        .is_err());

    controller
        .handle_command(
            &mut state,
            AppCommand::SaveFile {
                path: Some(path_str.clone()),
            },
        )
        .expect("Speichern");
    assert_eq!(state.current_file_path.as_deref(), Some(path_str.as_str()));

    let mut other = AppState::new();
    controller
        .handle_command(&mut other, AppCommand::LoadFile { path: path_str })
        .expect("Datei laden");
    assert_eq!(
        write_snapshot(&other.graph).expect("Schreiben"),
        write_snapshot(&state.graph).expect("Schreiben")
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_load_label_at_counter_limit_does_not_overflow() {
    let json = r#"{
        "states": [
            { "id": "s", "x": 0, "y": 0, "label": "q18446744073709551615" },
            { "id": "t", "x": 50, "y": 0, "label": "q4" }
        ],
        "startState": "s"
    }"#;
    let mut graph = Graph::new();
    load_snapshot(&mut graph, json).expect("Label ist ein gültiger String");
    assert_eq!(graph.state_count(), 2);
    assert_eq!(graph.next_state_label(), "q5");
}

#[test]
fn test_load_rejects_coordinates_outside_f32_range() {
    let mut graph = Graph::new();
    load_snapshot(&mut graph, include_str!("fixtures/simple_automaton.json")).expect("Laden");
    let before = write_snapshot(&graph).expect("Schreiben");

    let huge = r#"{
        "states": [{ "id": "a", "x": 1e39, "y": 0, "label": "q0" }]
    }"#;
    let err = load_snapshot(&mut graph, huge).expect_err("muss scheitern");
    assert!(matches!(
        err,
        SnapshotError::NonFiniteCoordinate { ref state, .. } if state == "a"
    ));
    assert_eq!(write_snapshot(&graph).expect("Schreiben"), before);
}

#[test]
fn test_written_snapshot_always_reloads() {
    let json = r#"{
        "states": [{ "id": "a", "x": -3.5e38, "y": 0.123456789012, "label": "q0" }]
    }"#;
    let mut graph = Graph::new();
    load_snapshot(&mut graph, json).expect("Laden");
    let written = write_snapshot(&graph).expect("Schreiben");

    let mut reloaded = Graph::new();
    load_snapshot(&mut reloaded, &written).expect("Geschriebenes muss ladbar sein");
    assert_eq!(write_snapshot(&reloaded).expect("Schreiben"), written);
}

#[test]
fn test_save_refuses_non_finite_position() {
    let mut graph = Graph::new();
    let id = graph.add_state("q0", Vec2::new(f32::MAX, 0.0)).id;
    graph.translate_states(std::slice::from_ref(&id), Vec2::new(f32::MAX, 0.0));
    assert!(graph.state(&id).is_some_and(|s| s.position.x.is_infinite()));

    assert!(matches!(
        write_snapshot(&graph),
        Err(SnapshotError::NonFiniteCoordinate { .. })
    ));
}
