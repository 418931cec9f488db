use std::collections::HashSet;
use std::path::Path;

use crate::foundation::error::{WhisperError, WhisperResult};

/// One Q&A record shown around the terminal.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuestionEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
}

impl QuestionEntry {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Ordered, read-only list of questions with unique ids.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct QuestionBook {
    entries: Vec<QuestionEntry>,
}

impl QuestionBook {
    /// Validate and wrap `entries`. Ids must be non-empty and unique.
    pub fn new(entries: Vec<QuestionEntry>) -> WhisperResult<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for e in &entries {
            if e.id.trim().is_empty() {
                return Err(WhisperError::validation("question id must be non-empty"));
            }
            if !seen.insert(e.id.as_str()) {
                return Err(WhisperError::validation(format!(
                    "duplicate question id '{}'",
                    e.id
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn from_json_str(s: &str) -> WhisperResult<Self> {
        let entries: Vec<QuestionEntry> = serde_json::from_str(s)?;
        Self::new(entries)
    }

    pub fn from_json_file(path: &Path) -> WhisperResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            WhisperError::validation(format!("read question book '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }

    pub fn entries(&self) -> &[QuestionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&QuestionEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn ids(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.id.clone()).collect()
    }
}

impl<'de> serde::Deserialize<'de> for QuestionBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<QuestionEntry>::deserialize(deserializer)?;
        Self::new(entries).map_err(serde::de::Error::custom)
    }
}

impl Default for QuestionBook {
    fn default() -> Self {
        Self {
            entries: default_entries(),
        }
    }
}

fn default_entries() -> Vec<QuestionEntry> {
    vec![
        QuestionEntry::new(
            "what-is-this",
            "What is this?",
            "AI Whisperers is a community of curious builders, thinkers, tinkerers, and founders \
             exploring the edge of human-machine interaction. We host conversations, design \
             experiments, and build tools that help people better understand and collaborate \
             with AI, and each other.",
        ),
        QuestionEntry::new(
            "what-do-you-do",
            "What kind of stuff do you do?",
            "We host meetups and salons about technical intuition, prompt engineering, and agent \
             workflows.\n\n\
             We build prototypes, like voice agents, treasure hunts, or language learning \
             challenges using AI.\n\n\
             We create spaces, online and offline, where it's safe to explore \"dumb questions\" \
             and hard-to-articulate insights.\n\n\
             We often say: \"We help people learn how to talk to strangers, and machines.\"",
        ),
        QuestionEntry::new(
            "whats-the-vibe",
            "What's the vibe?",
            "Terminal aesthetic meets curiosity lab.\n\n\
             Half hacker space, half philosophical dojo.\n\n\
             We value intuition, skepticism, and a willingness to experiment.\n\n\
             Everyone here is still learning. If you feel like you don't \"know enough,\" you're \
             already one of us.",
        ),
        QuestionEntry::new(
            "how-to-join",
            "How do I join?",
            "ask the person who sent you this website how to get involved",
        ),
        QuestionEntry::new(
            "whos-behind",
            "Who's behind this?",
            "AI Whisperers was started by Stewart Alsop, host of the Crazy Wisdom podcast, along \
             with a growing group of AI practitioners, developers, and explorers around the \
             world. It's a decentralized network of people who believe in building with \
             integrity, skepticism, and curiosity.",
        ),
        QuestionEntry::new(
            "what-makes-different",
            "What makes it different?",
            "Not a hypefest. We care more about asking good questions than showing off flashy \
             demos.\n\n\
             Not just for devs. You don't need to be a 10x engineer. You just need to be curious \
             and willing to learn.\n\n\
             Not just theory. We're builders. We try things. We break things. We reflect and \
             iterate.",
        ),
        QuestionEntry::new(
            "what-done-so-far",
            "What have you done so far?",
            "Hosted meetups in Argentina, Brazil, and online\n\n\
             Built real-world treasure hunts that teach people how to interact with AI in \
             public\n\n\
             Ran sessions on hallucinations, JSON outputs, and agent UX\n\n\
             Started building an LLM-powered FAQ trained on everything we say and share",
        ),
        QuestionEntry::new(
            "whats-the-goal",
            "What's the goal?",
            "To make critical thinking and human connection the default when building with AI.\n\n\
             We're not trying to create a product.\n\
             We're trying to create a culture.",
        ),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/content/questions.rs"]
mod tests;
