#[cfg(test)]
mod sandboxes {
    use lectern::dom::{Lang, Page, Target};
    use lectern::engine::{Configuration, Engine, Settings};
    use lectern::rendering::Ids;
    use lectern::runtime::{Action, Outcome};
    use serde_json::json;

    fn engine(settings: Settings, page: Page, document: serde_json::Value) -> Engine<Page> {
        let mut engine = Engine::new(Configuration::from_settings(settings), page).with_ids(Ids::sequential());
        engine.init(serde_json::from_value(document).unwrap());
        engine
    }

    fn frame(engine: &Engine<Page>, target: &Target) -> Option<String> {
        engine
            .gateway()
            .element(target)
            .and_then(|element| {
                element
                    .frame
                    .clone()
            })
    }

    fn live_code() -> serde_json::Value {
        json!({
            "topics": [{
                "type": "live-code",
                "title": "Hello",
                "content": { "html": "<p>hi</p>", "css": "", "js": "" }
            }]
        })
    }

    fn sidebar() -> serde_json::Value {
        json!({
            "section": { "title": "Arrays", "layout": { "type": "sidebar" } },
            "topics": [],
            "sidebar": {
                "title": "Try it",
                "examples": [
                    { "title": "Log", "code": "console.log(1 + 1)", "runnable": true }
                ]
            }
        })
    }

    #[test]
    fn running_live_code_writes_preview() {
        let mut engine = engine(Settings::default(), Page::new(), live_code());
        let preview = Target::PreviewFrame {
            topic: "id-1".to_string(),
        };
        assert_eq!(frame(&engine, &preview), None);

        let outcome = engine.dispatch(&Action::RunLiveCode {
            topic: "id-1".to_string(),
        });
        assert_eq!(outcome, Outcome::Handled);

        let document = frame(&engine, &preview).unwrap();
        assert!(document.starts_with("<!DOCTYPE html>"));
        let body = &document[document
            .find("<body>")
            .unwrap()..];
        assert!(body.contains("<p>hi</p>"));
    }

    #[test]
    fn edited_code_is_used() {
        let mut engine = engine(Settings::default(), Page::new(), live_code());
        engine
            .gateway_mut()
            .type_into(
                &Target::Editor {
                    topic: "id-1".to_string(),
                    lang: Lang::Css,
                },
                "p { color: red; }",
            );
        engine.dispatch(&Action::RunLiveCode {
            topic: "id-1".to_string(),
        });

        let document = frame(
            &engine,
            &Target::PreviewFrame {
                topic: "id-1".to_string(),
            },
        )
        .unwrap();
        assert!(document.contains("<style>p { color: red; }</style>"));
        assert!(document.contains("<p>hi</p>"));
    }

    #[test]
    fn live_preview_can_be_disabled() {
        let settings: Settings = serde_json::from_value(json!({ "features": { "livePreview": false } })).unwrap();
        let mut engine = engine(settings, Page::new(), live_code());

        assert!(!engine
            .gateway()
            .content()
            .unwrap()
            .contains("preview-frame"));
        let outcome = engine.dispatch(&Action::RunLiveCode {
            topic: "id-1".to_string(),
        });
        assert_eq!(outcome, Outcome::Ignored);
    }

    #[test]
    fn sidebar_examples_run_sandboxed_by_default() {
        let mut engine = engine(Settings::default(), Page::new(), sidebar());
        let outcome = engine.dispatch(&Action::RunExample {
            example: "sidebar-ex-0".to_string(),
        });
        assert_eq!(outcome, Outcome::Handled);

        let document = frame(
            &engine,
            &Target::ExampleFrame {
                example: "sidebar-ex-0".to_string(),
            },
        )
        .unwrap();
        assert!(document.contains("(0, eval)(\"console.log(1 + 1)\")"));
    }

    #[test]
    fn trusted_examples_use_host_evaluation() {
        let settings: Settings = serde_json::from_value(json!({ "features": { "trustedExamples": true } })).unwrap();
        let page = Page::new().with_evaluator(|code| {
            if code.contains("throw") {
                Err("<boom>".to_string())
            } else {
                Ok(vec!["2".to_string()])
            }
        });
        let mut engine = engine(settings, page, sidebar());
        assert!(!engine
            .gateway()
            .sidebar()
            .unwrap()
            .1
            .contains("example-frame"));

        engine.dispatch(&Action::RunExample {
            example: "sidebar-ex-0".to_string(),
        });
        let output = engine
            .gateway()
            .element(&Target::ExampleOutput {
                example: "sidebar-ex-0".to_string(),
            })
            .and_then(|element| {
                element
                    .inner_html
                    .clone()
            })
            .unwrap();
        assert!(output.contains("output-success"));
        assert!(output.contains("<pre>2</pre>"));
    }

    #[test]
    fn trusted_example_errors_are_escaped() {
        let settings: Settings = serde_json::from_value(json!({ "features": { "trustedExamples": true } })).unwrap();
        let page = Page::new().with_evaluator(|_| Err("<boom>".to_string()));
        let mut engine = engine(settings, page, sidebar());

        engine.dispatch(&Action::RunExample {
            example: "sidebar-ex-0".to_string(),
        });
        let output = engine
            .gateway()
            .element(&Target::ExampleOutput {
                example: "sidebar-ex-0".to_string(),
            })
            .and_then(|element| {
                element
                    .inner_html
                    .clone()
            })
            .unwrap();
        assert!(output.contains("output-error"));
        assert!(output.contains("&lt;boom&gt;"));
    }

    #[test]
    fn code_runner_can_be_disabled() {
        let settings: Settings = serde_json::from_value(json!({ "features": { "codeRunner": false } })).unwrap();
        let mut engine = engine(settings, Page::new(), sidebar());
        let outcome = engine.dispatch(&Action::RunExample {
            example: "sidebar-ex-0".to_string(),
        });
        assert_eq!(outcome, Outcome::Ignored);
    }
}
