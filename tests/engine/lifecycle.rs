#[cfg(test)]
mod lifecycle {
    use lectern::content::{self, ContentDocument};
    use std::path::Path;
    use lectern::dom::{Head, Page, Slot};
    use lectern::engine::{Configuration, Engine, LAYOUT_SIDEBAR};
    use lectern::rendering::Ids;
    use serde_json::json;

    fn document(value: serde_json::Value) -> ContentDocument {
        serde_json::from_value(value).unwrap()
    }

    fn lesson() -> ContentDocument {
        document(json!({
            "section": { "title": "Basics", "icon": "📘" },
            "topics": [
                { "type": "concept", "title": "Elements", "content": { "description": "Tags" } },
                { "type": "tab-content", "title": "Kinds", "content": { "tabs": [{ "title": "A", "content": "a" }] } },
                { "type": "quiz", "title": "Check", "content": { "question": "?", "options": ["x", "y"], "correctAnswer": 1 } }
            ],
            "navigation": {
                "prev": { "title": "Intro", "url": "intro.html" },
                "next": { "title": "Forms", "url": "forms.html" }
            }
        }))
    }

    fn sidebar_lesson() -> ContentDocument {
        document(json!({
            "section": { "title": "Arrays", "layout": { "type": "sidebar", "sidebarSticky": true } },
            "topics": [{ "type": "concept", "title": "map" }],
            "sidebar": { "title": "Try it", "examples": [{ "title": "Log", "code": "console.log(1)", "runnable": true }] }
        }))
    }

    /// Remove the generated part of random ids so that two renders can be
    /// compared.
    fn normalise(html: &str) -> String {
        let mut result = String::new();
        let mut rest = html;
        while let Some(i) = rest.find("id-") {
            result.push_str(&rest[..i + 3]);
            rest = &rest[i + 3..];
            let generated = rest
                .char_indices()
                .take_while(|(_, c)| c.is_ascii_alphanumeric())
                .map(|(i, c)| i + c.len_utf8())
                .last()
                .unwrap_or(0);
            rest = &rest[generated..];
        }
        result.push_str(rest);
        result
    }

    #[test]
    fn rendering_twice_replaces() {
        let mut engine = Engine::new(Configuration::new(), Page::new());
        engine.init(lesson());
        let first = engine
            .gateway()
            .content()
            .unwrap()
            .to_string();
        let widgets = engine
            .runtime()
            .len();

        engine.render();
        let page = engine.gateway();
        let second = page
            .content()
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(normalise(&first), normalise(second));
        assert_eq!(
            page.navigation()
                .unwrap()
                .matches("class=\"navigation\"")
                .count(),
            1
        );
        assert_eq!(
            engine
                .runtime()
                .len(),
            widgets
        );
    }

    #[test]
    fn init_replaces_document() {
        let mut engine = Engine::new(Configuration::new(), Page::new()).with_ids(Ids::sequential());
        engine.init(lesson());
        engine.init(document(json!({
            "section": { "title": "Empty" },
            "topics": []
        })));

        let page = engine.gateway();
        assert_eq!(page.title(), Some("Empty"));
        assert_eq!(page.content(), Some(""));
        assert_eq!(page.navigation(), Some(""));
        assert!(engine
            .runtime()
            .is_empty());
        assert_eq!(
            engine
                .document()
                .topics
                .len(),
            0
        );
    }

    #[test]
    fn sidebar_layout_then_standard() {
        let mut engine = Engine::new(Configuration::new(), Page::new()).with_ids(Ids::sequential());

        engine.init(sidebar_lesson());
        engine.init(sidebar_lesson());
        let page = engine.gateway();
        let classes = page
            .container_classes()
            .unwrap();
        assert_eq!(
            classes
                .iter()
                .filter(|c| *c == LAYOUT_SIDEBAR)
                .count(),
            1
        );
        let (class, html) = page
            .sidebar()
            .unwrap();
        assert_eq!(class, "sidebar-panel sidebar-sticky");
        assert!(html.contains("sidebar-ex-0"));

        engine.init(lesson());
        let page = engine.gateway();
        assert_eq!(page.sidebar(), None);
        assert_eq!(
            page.container_classes()
                .unwrap(),
            &["container".to_string()]
        );
    }

    #[test]
    fn page_without_navigation() {
        let page = Page::new().without(Slot::Navigation);
        let mut engine = Engine::new(Configuration::new(), page);
        engine.init(lesson());
        assert_eq!(
            engine
                .gateway()
                .navigation(),
            None
        );
        assert!(engine
            .gateway()
            .content()
            .unwrap()
            .contains("concept-section"));
    }

    #[test]
    fn untyped_topic_does_not_block_the_rest() {
        let source = r#"{"topics":[{"type":"concept","title":"Good"},{"title":"No type"},{"type":7,"title":null}]}"#;
        let document = content::parse(Path::new("lesson.json"), source).unwrap();

        let mut engine = Engine::new(Configuration::new(), Page::new());
        engine.init(document);
        let html = engine
            .gateway()
            .content()
            .unwrap();
        assert!(html.contains("concept-section"));
        assert!(html.contains("<h2 class=\"topic-title\">No type</h2>"));
        assert!(html.contains("Unknown type: 7"));
        assert_eq!(
            html.matches("unknown-topic")
                .count(),
            2
        );
    }

    #[test]
    fn static_page_output() {
        let mut engine = Engine::new(Configuration::new(), Page::new()).with_ids(Ids::sequential());
        engine.init(sidebar_lesson());

        let head = Head {
            title: "Arrays".to_string(),
            subject: "javascript".to_string(),
            stylesheet: Some("styles/lesson.css".to_string()),
            theme: vec![],
        };
        let html = engine
            .into_gateway()
            .to_html(&head)
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Arrays</title>"));
        assert!(html.contains("<body data-subject=\"javascript\">"));
        assert!(html.contains("<div class=\"container layout-sidebar\">"));
        assert!(html.contains("<aside class=\"sidebar-panel sidebar-sticky\">"));
        assert!(!html.contains(":root"));
    }
}
