#![no_main]

use automaton_editor::Graph;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let mut graph = Graph::new();
        if automaton_editor::load_snapshot(&mut graph, text).is_ok() {
            // Geladene Graphen müssen sich schreiben und wieder laden lassen
            let written = automaton_editor::write_snapshot(&graph)
                .expect("geladener Graph muss schreibbar sein");
            let mut reloaded = Graph::new();
            automaton_editor::load_snapshot(&mut reloaded, &written)
                .expect("geschriebener Snapshot muss ladbar sein");
            assert_eq!(
                automaton_editor::write_snapshot(&reloaded).ok().as_deref(),
                Some(written.as_str())
            );
        }
    }
});
