use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use bddgen::generator::Stage;

use super::styling::{failed, pending, section_heading, succeeded};

/// Spinner for the three generation phases, drawn on stderr
pub struct GenerationProgress {
    current: Option<(Stage, ProgressBar)>,
}

impl GenerationProgress {
    pub fn new() -> Self {
        eprintln!("{}", section_heading("⚙️", "Phases"));
        Self { current: None }
    }

    pub fn advance(&mut self, stage: Stage) {
        if let Some((previous, pb)) = self.current.take() {
            pb.finish_with_message(succeeded(format!("{} ✓", done_label(previous))).to_string());
        }
        let pb = create_spinner(pending(running_label(stage)).to_string());
        self.current = Some((stage, pb));
    }

    pub fn finish(mut self) {
        if let Some((stage, pb)) = self.current.take() {
            pb.finish_with_message(succeeded(format!("{} ✓", done_label(stage))).to_string());
        }
        eprintln!();
    }

    pub fn abandon(mut self) {
        if let Some((stage, pb)) = self.current.take() {
            pb.abandon_with_message(failed(format!("{} ✗", running_label(stage))).to_string());
        }
        eprintln!();
    }
}

fn running_label(stage: Stage) -> &'static str {
    match stage {
        Stage::BuildPrompt => "Phase 1/3: Building prompt",
        Stage::Complete => "Phase 2/3: Calling Gemini and generating scenarios",
        Stage::Process => "Phase 3/3: Validating scenarios",
    }
}

fn done_label(stage: Stage) -> &'static str {
    match stage {
        Stage::BuildPrompt => "Phase 1/3: Prompt built",
        Stage::Complete => "Phase 2/3: Scenarios generated",
        Stage::Process => "Phase 3/3: Scenarios validated",
    }
}

fn create_spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_draw_target(ProgressDrawTarget::stderr());
    if let Ok(style) = ProgressStyle::default_spinner().template("  {msg} {spinner}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
