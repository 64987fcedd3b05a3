//! RPS Arena entry point
//!
//! Web: wires up whichever page is loaded. Native: plays a session in the
//! terminal against a JSON-file store.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

    log::info!("RPS Arena starting...");
    rps_arena::platform::web::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("RPS Arena (native) starting...");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| rps_arena::consts::DEFAULT_STORE_PATH.to_string());
    native::run(rps_arena::platform::storage::FileStore::open(path));
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::io::{self, BufRead, Write};

    use rps_arena::platform::storage::FileStore;
    use rps_arena::platform::{now_iso, random_seed};
    use rps_arena::session::{FormState, PlaySession, SetupPage};
    use rps_arena::settings::{Avatar, Difficulty, Theme};
    use rps_arena::sim::{Move, RandomPicker};

    const HELP: &str = "Commands: rock|paper|scissors (r/p/s), reset, scores, clear, quit";

    fn prompt(lines: &mut impl Iterator<Item = String>, question: &str) -> Option<String> {
        print!("{} ", question);
        let _ = io::stdout().flush();
        lines.next().map(|l| l.trim().to_string())
    }

    /// Ask for each setting until the form validates and is saved
    fn setup(store: FileStore, lines: &mut impl Iterator<Item = String>) -> Option<FileStore> {
        let mut page = SetupPage::new(store);
        if let Some(greeting) = page.greeting() {
            println!("{}", greeting);
            return Some(page.into_store());
        }

        println!("No saved settings, let's set up a player.");
        while page.form_state() == FormState::Unvalidated {
            page.set_name(prompt(lines, "Name:")?);

            let avatars: Vec<&str> = Avatar::ALL.iter().map(|a| a.as_str()).collect();
            let answer = prompt(lines, &format!("Avatar ({}):", avatars.join("/")))?;
            if let Some(avatar) = Avatar::from_str(&answer) {
                page.set_avatar(avatar);
            }

            let answer = prompt(lines, "Difficulty (easy/normal/hard) [normal]:")?;
            if let Some(difficulty) = Difficulty::from_str(&answer) {
                page.set_difficulty(difficulty);
            }

            let answer = prompt(lines, "Theme (light/dark) [light]:")?;
            if let Some(theme) = Theme::from_str(&answer) {
                page.set_theme(theme);
            }

            if page.form_state() == FormState::Unvalidated {
                println!("A name and a known avatar are required.");
            }
        }

        page.save();
        println!("{}", page.greeting().unwrap_or_default());
        page.start()?;
        Some(page.into_store())
    }

    fn print_scores(session: &PlaySession<FileStore, RandomPicker>) {
        let score = session.score();
        println!(
            "Player {} | CPU {} | Ties {}",
            score.player_wins, score.cpu_wins, score.ties
        );
        for round in &score.history {
            println!("  {}", round);
        }
        println!("Highscores:");
        for line in session.highscore_lines() {
            println!("  {}", line);
        }
    }

    pub fn run(store: FileStore) {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines().map_while(Result::ok);

        let Some(store) = setup(store, &mut lines) else {
            println!("Setup cancelled.");
            return;
        };
        let Some(mut session) = PlaySession::start(store, RandomPicker::new(random_seed())) else {
            println!("Settings could not be read back; run setup again.");
            return;
        };

        println!("Difficulty: {}", session.difficulty_label());
        println!("{}", HELP);

        while let Some(input) = prompt(&mut lines, ">") {
            match input.as_str() {
                "" => continue,
                "quit" | "q" | "exit" => break,
                "reset" => {
                    session.reset();
                    println!("Scores reset.");
                }
                "scores" => print_scores(&session),
                "clear" => {
                    session.clear_highscores();
                    println!("Highscores cleared.");
                }
                other => match Move::from_str(other) {
                    Some(mv) => {
                        let round = session.play(mv);
                        println!("{}", round);
                    }
                    None => println!("{}", HELP),
                },
            }
        }

        if let Some(record) = session.end_session(&now_iso()) {
            println!("Recorded {} win(s) for {}.", record.score, record.name);
        }
    }
}
