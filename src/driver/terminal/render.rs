use crate::game::{easter_egg::EASTER_EGG_MESSAGE, GameView};

/// Width of the strength bar in characters.
const BAR_WIDTH: usize = 20;

/// Draw the strength bar for a progress percentage.
pub fn strength_bar(progress: f64) -> String {
    let filled = ((progress.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Render the game as plain text.
pub fn text(view: &GameView) -> String {
    let mut lines = vec![
        format!(
            "Rules satisfied: {}/{} | Impossibility: {}",
            view.satisfied, view.total, view.difficulty
        ),
        format!(
            "Strength: {} {:.0}%",
            strength_bar(view.progress),
            view.progress
        ),
    ];
    lines.extend(
        view.rules
            .iter()
            .map(|rule| format!("  {} {}", rule.status.icon(), rule.text)),
    );
    lines.push(
        if view.submit_enabled {
            "[ :submit ] ready"
        } else {
            "[ :submit ] locked"
        }
        .to_owned(),
    );
    lines.push(view.narration.to_string());
    if view.easter_egg {
        lines.push(EASTER_EGG_MESSAGE.to_owned());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
