use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::ui::app::App;
use crate::ui::input::{parse_command, Command, HELP};
use crate::ui::render::render;

/// Whether the command loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Bootstrap the app and run the stdin command loop until `quit`,
/// end of input, or Ctrl-C.
pub async fn run(mut app: App) -> std::io::Result<()> {
    let _fetch = app.bootstrap(|state| {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", render(state));
        let _ = stdout.flush();
    });
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                if handle_line(&app, &line) == Flow::Quit {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        }
    }

    Ok(())
}

/// Apply one typed line to the app. Printing is the only side effect
/// besides dispatch.
pub fn handle_line(app: &App, line: &str) -> Flow {
    match parse_command(line) {
        Ok(Command::Add(id)) => {
            if !app.add_to_cart(id) {
                println!("No product with id {} in the catalog", id);
            }
            Flow::Continue
        }
        Ok(Command::Remove(id)) => {
            app.remove_from_cart(id);
            Flow::Continue
        }
        Ok(Command::State) => {
            match serde_json::to_string_pretty(&*app.state()) {
                Ok(json) => println!("{}", json),
                Err(err) => tracing::error!(error = %err, "Failed to serialize state"),
            }
            Flow::Continue
        }
        Ok(Command::Help) => {
            println!("{}", HELP);
            Flow::Continue
        }
        Ok(Command::Quit) => Flow::Quit,
        Err(err) => {
            println!("{}. {}", err, HELP);
            Flow::Continue
        }
    }
}
