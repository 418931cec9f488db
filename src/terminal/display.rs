use std::cell::Cell;
use std::rc::Rc;

use crate::content::questions::{QuestionBook, QuestionEntry};
use crate::signal::store::{ActivationStore, Subscription};

pub const DEFAULT_PROMPT: &str = "$ ask_ai_whisperers --about";
pub const WINDOW_TITLE: &str = "~/ai_whisperers/terminal";

/// Frames the answer block takes to fade in after a change.
const REVEAL_FRAMES: u32 = 12;

/// Answer block derived from the active question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerBlock<'a> {
    pub entry: &'a QuestionEntry,
    /// `$ cat <slug>.txt` line shown above the answer.
    pub command: String,
}

/// `cat` target for a question: first 15 characters, lowercased, whitespace runs as `_`.
pub fn answer_slug(question: &str) -> String {
    let head: String = question.chars().take(15).collect::<String>().to_lowercase();
    let mut out = String::with_capacity(head.len());
    let mut in_space = false;
    for ch in head.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

/// Terminal panel. Holds no state of its own beyond a reveal counter; the shown answer is always
/// looked up from the store and the book.
pub struct TerminalDisplay {
    store: ActivationStore,
    book: Rc<QuestionBook>,
    prompt: String,
    changed: Rc<Cell<bool>>,
    reveal_frame: u32,
    _subscription: Subscription,
}

impl std::fmt::Debug for TerminalDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalDisplay")
            .field("active", &self.store.current())
            .field("prompt", &self.prompt)
            .field("reveal_frame", &self.reveal_frame)
            .finish()
    }
}

impl TerminalDisplay {
    pub fn new(store: ActivationStore, book: Rc<QuestionBook>) -> Self {
        let changed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&changed);
        let subscription = store.subscribe(move |c| {
            if c.changed() {
                flag.set(true);
            }
        });
        Self {
            store,
            book,
            prompt: DEFAULT_PROMPT.to_owned(),
            changed,
            reveal_frame: REVEAL_FRAMES,
            _subscription: subscription,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The entry to show, if the active id names a known question.
    pub fn answer(&self) -> Option<AnswerBlock<'_>> {
        let id = self.store.current()?;
        let entry = self.book.get(&id)?;
        Some(AnswerBlock {
            entry,
            command: format!("$ cat {}.txt", answer_slug(&entry.question)),
        })
    }

    /// Opacity of the answer block, rising from 0 to 1 over a few frames after each change.
    pub fn reveal(&self) -> f64 {
        f64::from(self.reveal_frame) / f64::from(REVEAL_FRAMES)
    }

    /// Advance the reveal animation by one frame.
    pub fn tick(&mut self) {
        if self.changed.replace(false) {
            self.reveal_frame = 0;
        }
        self.reveal_frame = (self.reveal_frame + 1).min(REVEAL_FRAMES);
    }

    /// Plain-text rendering of the panel.
    pub fn lines(&self) -> Vec<String> {
        let mut out = vec![
            format!("⬤ ⬤ ⬤  {WINDOW_TITLE}"),
            String::new(),
            format!("{}█", self.prompt),
        ];
        if let Some(block) = self.answer() {
            out.push(String::new());
            out.push(block.command);
            out.extend(block.entry.answer.lines().map(str::to_owned));
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/terminal/display.rs"]
mod tests;
