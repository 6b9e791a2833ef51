use reedline::{Prompt, PromptEditMode, PromptHistorySearch};
use std::borrow::Cow;

/// Minimal prompt carrying a fixed label.
///
/// The menu uses two flavors: the selection prompt and an empty one for
/// "press any key" acknowledgments.
pub struct MenuPrompt {
    label: &'static str,
}

impl MenuPrompt {
    pub fn choice() -> Self {
        Self {
            label: "Enter choice: ",
        }
    }

    pub fn ack() -> Self {
        Self { label: "" }
    }
}

impl Prompt for MenuPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.label)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(".. ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        _history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        Cow::Borrowed("(search) ")
    }
}
