//! The content record shapes of the built-in topic variants.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub key_points: Option<Vec<String>>,
    #[serde(default)]
    pub mdn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CodeExample {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Example {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principle {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mechanism: Option<String>,
    #[serde(default)]
    pub key_points: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Comparison {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<ComparisonItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ComparisonItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pros: Option<Vec<String>>,
    #[serde(default)]
    pub cons: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BestPractice {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub practices: Option<Vec<Practice>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Practice {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Checklist {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Option<Vec<ChecklistItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChecklistItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LiveCode {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub css: Option<String>,
    #[serde(default)]
    pub js: Option<String>,
    #[serde(default = "enabled")]
    pub editable: bool,
    #[serde(default)]
    pub autorun: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Playground {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SplitView {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub left: Pane,
    #[serde(default)]
    pub right: Pane,
}

/// One side of a split view: either code (shown escaped) or markup (shown
/// as-is).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Pane {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TabContent {
    #[serde(default)]
    pub tabs: Vec<Tab>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Tab {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualDemo {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub controls: Option<Vec<Control>>,
    #[serde(default)]
    pub demo_html: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Control {
    #[serde(rename = "type")]
    pub kind: ControlKind,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub property: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub min: Value,
    #[serde(default)]
    pub max: Value,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub options: Vec<ControlOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Slider,
    Color,
    Select,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ControlOption {
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ColorPalette {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub colors: Vec<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Color {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ComponentDemo {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub preview: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub script: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PropsTable {
    #[serde(default)]
    pub props: Vec<Prop>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Prop {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub default: Value,
    #[serde(default)]
    pub description: String,
}

// quizzes

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: Choice,
    #[serde(default)]
    pub explanation: Option<Explanation>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizMulti {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answers: Vec<Choice>,
    #[serde(default)]
    pub explanation: Option<Explanation>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizBool {
    #[serde(default)]
    pub question: String,
    pub correct_answer: bool,
    #[serde(default)]
    pub explanation: Option<Explanation>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizCode {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: Choice,
    #[serde(default)]
    pub explanation: Option<Explanation>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// An answer key: either the zero-origin option index, or the option's
/// letter label as displayed ("A", "B", …).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Choice {
    Index(usize),
    Letter(String),
}

impl Choice {
    pub fn index(&self) -> Option<usize> {
        match self {
            Choice::Index(i) => Some(*i),
            Choice::Letter(letter) => {
                let mut chars = letter
                    .trim()
                    .chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
                    }
                    _ => None,
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Explanation {
    Text(String),
    Detailed(Detail),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Detail {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub points: Option<Vec<String>>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub sections: Option<Vec<DetailSection>>,
}

impl Detail {
    /// The explanation's text, from `content` if given, else `description`.
    pub fn body(&self) -> Option<&str> {
        self.content
            .as_deref()
            .or(self
                .description
                .as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DetailSection {
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub points: Option<Vec<String>>,
}

impl DetailSection {
    pub fn heading(&self) -> Option<&str> {
        self.subtitle
            .as_deref()
            .or(self
                .title
                .as_deref())
    }

    pub fn body(&self) -> Option<&str> {
        self.text
            .as_deref()
            .or(self
                .content
                .as_deref())
    }
}

fn enabled() -> bool {
    true
}

/// Display form of a scalar JSON value: strings without their quotes, other
/// scalars as written, null as nothing.
pub fn scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
