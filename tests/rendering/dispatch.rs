#[cfg(test)]
mod dispatch {
    use lectern::content::TopicItem;
    use lectern::dom::Page;
    use lectern::engine::{Configuration, Engine};
    use lectern::rendering::{escape, Context, Ids, Variant};
    use serde_json::json;

    fn engine(configuration: Configuration<Page>) -> Engine<Page> {
        Engine::new(configuration, Page::new()).with_ids(Ids::sequential())
    }

    #[test]
    fn unknown_types_fall_back() {
        let engine = engine(Configuration::new());
        let features = engine
            .settings()
            .features;
        let ids = Ids::sequential();
        let context = Context::new(&features, &ids);

        for kind in ["timeline", "Quiz", "", "<script>", "quiz-essay"] {
            let topic = TopicItem::new(kind, "Something new", json!({ "anything": [1, 2, 3] }));
            let html = engine.render_topic(&context, &topic);
            assert!(html.contains("unknown-topic"), "no fallback for {:?}", kind);
            assert!(html.contains(&format!("Unknown type: {}", escape(kind))));
        }
    }

    #[test]
    fn every_builtin_resolves() {
        let engine = engine(Configuration::new());
        let features = engine
            .settings()
            .features;
        let ids = Ids::sequential();
        let context = Context::new(&features, &ids);

        for variant in Variant::ALL {
            let topic = TopicItem::new(variant.tag(), "Title", json!({}));
            let html = engine.render_topic(&context, &topic);
            assert!(!html.contains("unknown-topic"), "{} fell back", variant);
        }
    }

    #[test]
    fn custom_handler_overrides_builtin() {
        let engine = engine(
            Configuration::new()
                .with_type("quiz", |_, topic| format!("<div class=\"my-quiz\">{}</div>", topic.title)),
        );
        let features = engine
            .settings()
            .features;
        let ids = Ids::sequential();
        let context = Context::new(&features, &ids);

        let topic = TopicItem::new(
            "quiz",
            "Custom",
            json!({ "question": "?", "options": ["a"], "correctAnswer": 0 }),
        );
        let html = engine.render_topic(&context, &topic);
        assert_eq!(html, "<div class=\"my-quiz\">Custom</div>");
        assert!(context
            .into_widgets()
            .is_empty());
    }

    #[test]
    fn later_registration_wins() {
        let engine = engine(
            Configuration::new()
                .with_type("timeline", |_, _| "first".to_string())
                .with_type("timeline", |_, _| "second".to_string()),
        );
        let features = engine
            .settings()
            .features;
        let ids = Ids::sequential();
        let context = Context::new(&features, &ids);

        let topic = TopicItem::new("timeline", "History", json!(null));
        assert_eq!(engine.render_topic(&context, &topic), "second");
    }

    #[test]
    fn custom_handlers_can_wire_widgets() {
        use lectern::runtime::{TabGroup, Widget};

        let mut engine = engine(Configuration::new().with_type("steps", |context: &Context, _: &TopicItem| {
            let id = context.generate_id();
            context.wire(Widget::Tabs(TabGroup::new(id.clone(), 2)));
            format!("<div data-tab-group=\"{}\"></div>", id)
        }));
        engine.init(
            serde_json::from_value(json!({
                "topics": [{ "type": "steps", "title": "Steps" }]
            }))
            .unwrap(),
        );

        assert!(engine
            .runtime()
            .tab_group("id-1")
            .is_some());
    }
}
