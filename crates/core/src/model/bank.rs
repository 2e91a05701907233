use crate::model::pool::QuestionPool;
use crate::model::question::Question;

// First answer of each entry is the correct one.
const DEFAULT_QUESTIONS: [(&str, [&str; 4]); 10] = [
    (
        "What is Android Jetpack?",
        ["all of these", "tools", "documentation", "libraries"],
    ),
    (
        "Base class for Layout?",
        ["ViewGroup", "ViewSet", "ViewCollection", "ViewRoot"],
    ),
    (
        "Layout for complex Screens?",
        ["ConstraintLayout", "GridLayout", "LinearLayout", "FrameLayout"],
    ),
    (
        "Pushing structured data into a Layout?",
        ["Data Binding", "Data Pushing", "Set Text", "OnClick"],
    ),
    (
        "Inflate layout in fragments?",
        ["onCreateView", "onActivityCreated", "onCreateLayout", "onInflateLayout"],
    ),
    (
        "Build system for Android?",
        ["Gradle", "Graddle", "Grodle", "Groyle"],
    ),
    (
        "Android vector format?",
        ["VectorDrawable", "AndroidVectorDrawable", "DrawableVector", "AndroidVector"],
    ),
    (
        "Android Navigation Component?",
        ["NavController", "NavCentral", "NavMaster", "NavSwitcher"],
    ),
    (
        "Registers app with launcher?",
        ["intent-filter", "app-registry", "launcher-registry", "app-launcher"],
    ),
    (
        "Mark a layout for Data Binding?",
        ["<layout>", "<binding>", "<data-binding>", "<dbinding>"],
    ),
];

/// The built-in Android trivia questions, in source order.
#[must_use]
pub fn default_pool() -> QuestionPool {
    let questions = DEFAULT_QUESTIONS
        .iter()
        .filter_map(|(text, answers)| Question::new(*text, *answers).ok())
        .collect();
    QuestionPool::new(questions)
}
