//! opgrid - graphical editor for custom FM operator algorithms.
//! Uses winit + glutin + glow + imgui-rs for the GUI.
//!
//! Usage:
//!   opgrid
//!   opgrid "c2: 3>1 4>2" --feedback "3>3"

use std::env;

use opgrid::app::Editor;
use opgrid::ui::GuiState;

use og_ir::{parse_algorithm, parse_feedback, CustomAlgorithm, CustomFeedback};
use og_master::{InstrumentDocument, SessionConfig};
use tracing::{error, info};
use winit::event_loop::EventLoop;

fn main() {
    opgrid::init_logging();

    let document = match document_from_args() {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Usage: opgrid [\"<algorithm>\"] [--feedback \"<feedback>\"]");
            std::process::exit(1);
        }
    };

    let event_loop = EventLoop::new().unwrap_or_else(|e| {
        error!("failed to create event loop: {e}");
        std::process::exit(1);
    });

    let mut editor = Editor::new(GuiState::new(document, SessionConfig::default()));
    if let Err(e) = event_loop.run_app(&mut editor) {
        error!("event loop exited with error: {e}");
    }
}

fn document_from_args() -> Result<InstrumentDocument, og_ir::NotationError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let feedback_at = args.iter().position(|a| a == "--feedback");

    let algorithm = match args.first().filter(|_| feedback_at != Some(0)) {
        Some(text) => parse_algorithm(text)?,
        None => CustomAlgorithm::new(),
    };
    let feedback = match feedback_at.and_then(|i| args.get(i + 1)) {
        Some(text) => parse_feedback(text)?,
        None => CustomFeedback::new(),
    };
    info!(algorithm = %algorithm, feedback = %feedback, "opening instrument");
    Ok(InstrumentDocument::new(algorithm, feedback))
}
