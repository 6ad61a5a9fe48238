//! Automaton Editor (Kommandozeile).
//!
//! Lädt einen Automaten aus JSON, validiert ihn und testet Wörter.
//! Alle Schritte laufen über den `AppController`, wie bei einer GUI.
//!
//! Aufruf: `Automaton-Editor <datei.json> [--validate] [--test WORT]... [--save PFAD]`

use automaton_editor::{AppCommand, AppController, AppState, EditorOptions};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

/// Geparste Kommandozeile
#[derive(Debug, Default)]
struct CliArgs {
    input: Option<String>,
    validate: bool,
    words: Vec<String>,
    save_path: Option<String>,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--validate" => parsed.validate = true,
                "--test" => {
                    let word = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--test erwartet ein Wort"))?;
                    parsed.words.push(word);
                }
                "--save" => {
                    let path = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--save erwartet einen Pfad"))?;
                    parsed.save_path = Some(path);
                }
                other if other.starts_with("--") => {
                    anyhow::bail!("Unbekannte Option: {}", other);
                }
                _ => {
                    if parsed.input.replace(arg).is_some() {
                        anyhow::bail!("Nur eine Eingabedatei erlaubt");
                    }
                }
            }
        }
        Ok(parsed)
    }
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Automaton Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let args = CliArgs::parse(std::env::args().skip(1))?;

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(options);
        let mut controller = AppController::new();

        if let Some(path) = args.input {
            controller.handle_command(&mut state, AppCommand::LoadFile { path })?;
        }

        if args.validate {
            controller.handle_command(&mut state, AppCommand::ValidateAutomaton)?;
            if state.last_findings.is_empty() {
                println!("Automat ist gültig");
            }
            for finding in &state.last_findings {
                println!("{:?}: {}", finding.severity(), finding);
            }
        }

        for word in args.words {
            controller.handle_command(&mut state, AppCommand::TestString { input: word })?;
            if let Some(result) = &state.last_test {
                println!("\"{}\": {}", result.input, result.status);
            }
        }

        if let Some(path) = args.save_path {
            controller.handle_command(&mut state, AppCommand::SaveFile { path: Some(path) })?;
        }

        Ok(())
    }
}
