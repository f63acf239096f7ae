//! Test doubles shared by the article, pipeline and service suites.

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::GenerationPreset;
use crate::generation::TextGenerator;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub prompt: String,
    pub preset: GenerationPreset,
}

type Responder = Box<dyn Fn(&str) -> Result<String> + Send + Sync>;

/// Answers each prompt through a closure and records every call in order.
pub struct ScriptedGenerator {
    responder: Responder,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedGenerator {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&str) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Outline prompts get three headers, talking-point prompts get three points that mention
    /// their header, everything else gets a paragraph echoing the prompt kind.
    pub fn article_fixture() -> Self {
        Self::new(|prompt| {
            if prompt.contains(" headers for a technical article") {
                Ok("1. Why Testing Matters\n2. Writing Unit Tests\n3. Practicing TDD\n".to_string())
            } else if prompt.contains("talking points") {
                let header = titled_subject(prompt);
                Ok(format!(
                    "1. {header} basics\n2. {header} pitfalls\n3. {header} tooling"
                ))
            } else if prompt.starts_with("Write a technical article") {
                Ok("Complete article body.".to_string())
            } else if prompt.contains("introduction paragraph with") {
                Ok("Intro paragraph.".to_string())
            } else if prompt.contains("conclusion paragraph") {
                Ok("Conclusion paragraph.".to_string())
            } else {
                Ok("Body paragraph.".to_string())
            }
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn prompts_containing(&self, needle: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.prompt.contains(needle))
            .count()
    }
}

fn titled_subject(prompt: &str) -> String {
    prompt
        .split_once("titled ")
        .and_then(|(_, rest)| rest.split_once(" with a "))
        .map(|(subject, _)| subject.to_string())
        .unwrap_or_default()
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str, preset: &GenerationPreset) -> Result<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            preset: *preset,
        });
        (self.responder)(prompt)
    }
}
