use trivia_core::model::NavigationEvent;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultScreenVm {
    pub headline: String,
    pub detail: String,
    pub action_label: &'static str,
}

/// Copy for the screen reached through `event`.
#[must_use]
pub fn map_result_screen(event: NavigationEvent) -> ResultScreenVm {
    match event {
        NavigationEvent::Won {
            target_count,
            cleared_count,
        } => ResultScreenVm {
            headline: "Congratulations!".to_string(),
            detail: format!("You answered {cleared_count} out of {target_count} questions correctly."),
            action_label: "Next Match",
        },
        NavigationEvent::Lost => ResultScreenVm {
            headline: "Game Over".to_string(),
            detail: "That was not the right answer.".to_string(),
            action_label: "Try Again",
        },
    }
}
