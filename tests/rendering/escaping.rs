#[cfg(test)]
mod escaping {
    use lectern::content::TopicItem;
    use lectern::engine::Features;
    use lectern::rendering::{render_variant, Context, Ids, Variant};
    use serde_json::json;

    fn render(variant: Variant, content: serde_json::Value) -> String {
        let features = Features::default();
        let ids = Ids::sequential();
        let context = Context::new(&features, &ids);
        let topic = TopicItem::new(variant.tag(), "<b>Title</b>", content);
        render_variant(&context, variant, &topic)
    }

    #[test]
    fn titles_are_escaped_everywhere() {
        for variant in Variant::ALL {
            let html = render(variant, json!({ "question": "?", "correctAnswer": 0 }));
            assert!(!html.contains("<b>Title</b>"), "{} leaked markup", variant);
        }
    }

    #[test]
    fn text_fields_are_escaped() {
        let html = render(
            Variant::Comparison,
            json!({
                "description": "a < b",
                "items": [{ "name": "<x>", "pros": ["\"quoted\""], "cons": ["it's"] }]
            }),
        );
        assert!(html.contains("a &lt; b"));
        assert!(html.contains("&lt;x&gt;"));
        assert!(html.contains("&quot;quoted&quot;"));
        assert!(html.contains("it&#039;s"));
    }

    #[test]
    fn authored_markup_is_kept() {
        let html = render(
            Variant::TabContent,
            json!({ "tabs": [{ "title": "<i>One</i>", "content": "<em>kept</em>" }] }),
        );
        assert!(html.contains("<em>kept</em>"));
        assert!(html.contains("&lt;i&gt;One&lt;/i&gt;"));
    }

    #[test]
    fn code_is_normalised_before_display() {
        let features = Features {
            syntax_highlight: false,
            ..Features::default()
        };
        let ids = Ids::sequential();
        let context = Context::new(&features, &ids);
        let topic = TopicItem::new(
            "code-example",
            "Template literals",
            json!({ "examples": [
                { "title": "js", "code": "`${a} \\${b}`", "language": "js" },
                { "title": "json", "code": "{\"a\":1}", "language": "json" }
            ]}),
        );

        let html = render_variant(&context, Variant::CodeExample, &topic);
        assert!(html.contains("`${a} ${b}`"));
        assert!(html.contains("{\n  &quot;a&quot;: 1\n}"));
    }
}
