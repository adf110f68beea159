//! Quiz rendering. Every option carries its correctness in a `data-correct`
//! attribute, and the same correctness vector is handed to the runtime, so
//! answers are visible to anyone who inspects the page.

use super::topics::{anchor, list};
use super::{escape, Context};
use crate::content::{
    Choice, Explanation, Quiz, QuizBool, QuizCode, QuizMulti, TopicItem,
};
use crate::runtime::{QuizKind, QuizWidget, Widget};

/// Badge shown for a quiz's declared difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty {
    pub class: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

const EASY: Difficulty = Difficulty {
    class: "easy",
    icon: "🟢",
    label: "Easy",
};

const MEDIUM: Difficulty = Difficulty {
    class: "medium",
    icon: "🟡",
    label: "Medium",
};

const HARD: Difficulty = Difficulty {
    class: "hard",
    icon: "🔴",
    label: "Hard",
};

/// Unrecognised levels are shown as medium.
pub fn difficulty(level: &str) -> Difficulty {
    match level {
        "easy" => EASY,
        "hard" => HARD,
        _ => MEDIUM,
    }
}

/// Option label by position: A, B, C, …
pub fn letter(index: usize) -> char {
    u32::try_from(index)
        .ok()
        .and_then(|i| i.checked_add(65))
        .and_then(char::from_u32)
        .unwrap_or('?')
}

fn correctness(count: usize, answers: &[Choice]) -> Vec<bool> {
    let answers: Vec<usize> = answers
        .iter()
        .filter_map(Choice::index)
        .collect();
    (0..count)
        .map(|i| answers.contains(&i))
        .collect()
}

fn header(topic: &TopicItem, icon: &str, suffix: &str, meta: &str) -> String {
    format!(
        "<div class=\"quiz-header\">\n<h2 class=\"topic-title\">{} {}{}</h2>\n<div class=\"quiz-meta\">{}</div>\n</div>\n",
        icon,
        escape(&topic.title),
        suffix,
        meta
    )
}

fn meta(level: &Option<String>, extra: &[&str], tags: &Option<Vec<String>>) -> String {
    let mut output = String::new();
    if let Some(level) = level {
        let badge = difficulty(level);
        output.push_str(&format!(
            "<span class=\"difficulty-badge {}\">{} {}</span>",
            badge.class, badge.icon, badge.label
        ));
    }
    for tag in extra {
        output.push_str(&format!("<span class=\"quiz-tag\">{}</span>", tag));
    }
    if let Some(tags) = tags {
        for tag in tags {
            output.push_str(&format!("<span class=\"quiz-tag\">{}</span>", escape(tag)));
        }
    }
    output
}

fn options(id: &str, input: &str, labels: &[String], correct: &[bool], lettered: bool) -> String {
    let mut output = String::from("<div class=\"quiz-options\">\n");
    for (i, (label, correct)) in labels
        .iter()
        .zip(correct)
        .enumerate()
    {
        let (option, marker) = if lettered {
            let letter = letter(i);
            (
                format!(" data-option=\"{}\"", letter),
                format!("<span class=\"option-letter\">{}</span>\n", letter),
            )
        } else {
            (String::new(), String::new())
        };
        output.push_str(&format!(
            "<label class=\"quiz-option\"{} data-index=\"{}\">\n<input type=\"{}\" name=\"quiz-{}\" value=\"{}\" data-correct=\"{}\">\n{}<span class=\"option-text\">{}</span>\n</label>\n",
            option,
            i,
            input,
            id,
            i,
            correct,
            marker,
            escape(label)
        ));
    }
    output.push_str("</div>\n");
    output
}

fn explanation(explanation: &Option<Explanation>) -> String {
    let explanation = match explanation {
        Some(explanation) => explanation,
        None => return String::new(),
    };

    let (title, body) = match explanation {
        Explanation::Text(text) => (None, format!("<p>{}</p>\n", escape(text))),
        Explanation::Detailed(detail) => {
            let mut body = String::new();
            if let Some(content) = detail.body() {
                body.push_str(&format!("<p>{}</p>\n", escape(content)));
            }
            if let Some(points) = &detail.points {
                body.push_str(&list(points));
            }
            if let Some(code) = &detail.code {
                body.push_str(&format!("<pre><code>{}</code></pre>\n", escape(code)));
            }
            for section in detail
                .sections
                .iter()
                .flatten()
            {
                body.push_str("<div class=\"explanation-section\">\n");
                if let Some(subtitle) = section.heading() {
                    body.push_str(&format!("<h5>{}</h5>\n", escape(subtitle)));
                }
                if let Some(text) = section.body() {
                    body.push_str(&format!("<p>{}</p>\n", escape(text)));
                }
                if let Some(points) = &section.points {
                    body.push_str(&list(points));
                }
                if let Some(code) = &section.code {
                    body.push_str(&format!("<pre><code>{}</code></pre>\n", escape(code)));
                }
                body.push_str("</div>\n");
            }
            (
                detail
                    .title
                    .as_deref(),
                body,
            )
        }
    };

    format!(
        "<div class=\"explanation\">\n<div class=\"explanation-header\">💡 {}</div>\n<div class=\"explanation-content\">\n{}</div>\n</div>\n",
        escape(title.unwrap_or("Explanation")),
        body
    )
}

struct Parts<'a> {
    class: &'a str,
    kind: QuizKind,
    header: String,
    question: String,
    options: String,
    explanation: String,
}

fn assemble(context: &Context, topic: &TopicItem, id: String, correct: Vec<bool>, parts: Parts) -> String {
    let data = match parts.kind {
        QuizKind::Single => "single",
        QuizKind::Multi => "multi",
        QuizKind::Bool => "bool",
    };
    let output = format!(
        "<div class=\"topic-section {}\"{} data-quiz-id=\"{}\" data-quiz-type=\"{}\">\n{}<div class=\"quiz-question\">\n{}{}<button class=\"btn-check-answer\" data-quiz=\"{}\">Check answer</button>\n<div class=\"quiz-feedback\" style=\"display: none;\">\n<div class=\"feedback-content\"></div>\n{}</div>\n</div>\n</div>\n",
        parts.class,
        anchor(topic),
        id,
        data,
        parts.header,
        parts.question,
        parts.options,
        id,
        parts.explanation
    );
    context.wire(Widget::Quiz(QuizWidget::new(id, parts.kind, correct)));
    output
}

fn question(text: &str) -> String {
    format!("<p class=\"question-text\">{}</p>\n", escape(text))
}

pub(super) fn single(context: &Context, topic: &TopicItem, content: &Quiz) -> String {
    let id = context.generate_id();
    let correct = correctness(
        content
            .options
            .len(),
        std::slice::from_ref(&content.correct_answer),
    );
    let parts = Parts {
        class: "quiz-section",
        kind: QuizKind::Single,
        header: header(topic, "❓", "", &meta(&content.difficulty, &[], &content.tags)),
        question: question(&content.question),
        options: options(&id, "radio", &content.options, &correct, true),
        explanation: explanation(&content.explanation),
    };
    assemble(context, topic, id, correct, parts)
}

pub(super) fn multi(context: &Context, topic: &TopicItem, content: &QuizMulti) -> String {
    let id = context.generate_id();
    let correct = correctness(
        content
            .options
            .len(),
        &content.correct_answers,
    );
    let parts = Parts {
        class: "quiz-section",
        kind: QuizKind::Multi,
        header: header(topic, "❓", " (multiple choice)", ""),
        question: question(&content.question),
        options: options(&id, "checkbox", &content.options, &correct, true),
        explanation: explanation(&content.explanation),
    };
    assemble(context, topic, id, correct, parts)
}

pub(super) fn boolean(context: &Context, topic: &TopicItem, content: &QuizBool) -> String {
    let id = context.generate_id();
    let correct = vec![content.correct_answer, !content.correct_answer];
    let labels = ["✓ True".to_string(), "✗ False".to_string()];
    let parts = Parts {
        class: "quiz-section",
        kind: QuizKind::Bool,
        header: header(topic, "❓", " (true or false)", ""),
        question: question(&content.question),
        options: options(&id, "radio", &labels, &correct, false),
        explanation: explanation(&content.explanation),
    };
    assemble(context, topic, id, correct, parts)
}

pub(super) fn code(context: &Context, topic: &TopicItem, content: &QuizCode) -> String {
    let id = context.generate_id();
    let correct = correctness(
        content
            .options
            .len(),
        std::slice::from_ref(&content.correct_answer),
    );
    let mut prompt = question(&content.question);
    prompt.push_str(&context.code_block(
        &content.code,
        content
            .language
            .as_deref(),
    ));
    let parts = Parts {
        class: "quiz-section quiz-code-section",
        kind: QuizKind::Single,
        header: header(
            topic,
            "💻",
            "",
            &meta(&content.difficulty, &["Code"], &content.tags),
        ),
        question: prompt,
        options: options(&id, "radio", &content.options, &correct, true),
        explanation: explanation(&content.explanation),
    };
    assemble(context, topic, id, correct, parts)
}
