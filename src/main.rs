pub mod board;
pub mod constants;
pub mod game;
pub mod gui;
pub mod r#move;
pub mod move_gen;
pub mod movelist;
pub mod tui;

fn main() {
    if std::env::args().any(|arg| arg == "--tui") {
        tui::run();
    } else if let Err(err) = gui::run() {
        eprintln!("failed to start the GUI: {err}");
        std::process::exit(1);
    }
}
