#[cfg(test)]
mod tabs {
    use lectern::dom::{CodePanel, Page, Target};
    use lectern::engine::{Configuration, Engine, Settings};
    use lectern::rendering::Ids;
    use lectern::runtime::{Action, Outcome};
    use serde_json::json;

    fn engine(settings: Settings, document: serde_json::Value) -> Engine<Page> {
        let mut engine = Engine::new(Configuration::from_settings(settings), Page::new()).with_ids(Ids::sequential());
        engine.init(serde_json::from_value(document).unwrap());
        engine
    }

    fn tabs(title: &str) -> serde_json::Value {
        json!({
            "type": "tab-content",
            "title": title,
            "content": { "tabs": [
                { "title": "One", "content": "1" },
                { "title": "Two", "content": "2" },
                { "title": "Three", "content": "3" }
            ]}
        })
    }

    fn header(group: &str, index: usize) -> Target {
        Target::TabHeader {
            group: group.to_string(),
            index,
        }
    }

    fn panel(group: &str, index: usize) -> Target {
        Target::TabPanel {
            group: group.to_string(),
            index,
        }
    }

    #[test]
    fn groups_do_not_interfere() {
        let mut engine = engine(
            Settings::default(),
            json!({ "topics": [tabs("First"), tabs("Second")] }),
        );

        let outcome = engine.dispatch(&Action::SelectTab {
            group: "id-1".to_string(),
            index: 1,
        });
        assert_eq!(outcome, Outcome::Handled);

        let page = engine.gateway();
        for i in 0..3 {
            assert_eq!(page.has_class(&header("id-1", i), "active"), i == 1);
            assert_eq!(page.has_class(&panel("id-1", i), "active"), i == 1);
            assert!(page
                .element(&header("id-2", i))
                .is_none());
        }
        assert_eq!(
            engine
                .runtime()
                .tab_group("id-2")
                .unwrap()
                .active(),
            0
        );
    }

    #[test]
    fn out_of_range_tab_ignored() {
        let mut engine = engine(Settings::default(), json!({ "topics": [tabs("Only")] }));
        let outcome = engine.dispatch(&Action::SelectTab {
            group: "id-1".to_string(),
            index: 3,
        });
        assert_eq!(outcome, Outcome::Ignored);
    }

    #[test]
    fn code_tabs_switch() {
        let mut engine = engine(
            Settings::default(),
            json!({ "topics": [{
                "type": "component-demo",
                "title": "Counter",
                "content": { "template": "<button/>", "script": "export default {}" }
            }]}),
        );

        engine.dispatch(&Action::SelectCode {
            demo: "id-1".to_string(),
            panel: CodePanel::Script,
        });
        let page = engine.gateway();
        let tab = |panel| Target::CodeTab {
            demo: "id-1".to_string(),
            panel,
        };
        assert!(page.has_class(&tab(CodePanel::Script), "active"));
        assert!(!page.has_class(&tab(CodePanel::Template), "active"));
    }

    #[test]
    fn swatch_copies_with_toast() {
        let mut engine = engine(
            Settings::default(),
            json!({ "topics": [{
                "type": "color-palette",
                "title": "Brand",
                "content": { "colors": [{ "name": "Green", "value": "#42b883" }] }
            }]}),
        );

        let outcome = engine.dispatch(&Action::CopyColor {
            value: "#42b883".to_string(),
        });
        assert_eq!(outcome, Outcome::Handled);
        let page = engine.gateway();
        assert_eq!(page.clipboard(), Some("#42b883"));
        assert_eq!(page.toasts()[0].message, "Copied: #42b883");
    }

    #[test]
    fn copy_can_be_disabled() {
        let settings: Settings = serde_json::from_value(json!({ "features": { "copyCode": false } })).unwrap();
        let mut engine = engine(
            settings,
            json!({ "topics": [{
                "type": "color-palette",
                "title": "Brand",
                "content": { "colors": [{ "name": "Green", "value": "#42b883" }] }
            }]}),
        );

        let outcome = engine.dispatch(&Action::CopyColor {
            value: "#42b883".to_string(),
        });
        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(
            engine
                .gateway()
                .clipboard(),
            None
        );
    }

    #[test]
    fn demo_controls_update_preview() {
        let mut engine = engine(
            Settings::default(),
            json!({ "topics": [{
                "type": "visual-demo",
                "title": "Corners",
                "content": {
                    "controls": [{ "type": "slider", "label": "Radius", "property": "border-radius", "value": 4, "min": 0, "max": 40, "unit": "px" }],
                    "demoHtml": "<div class=\"box\"></div>"
                }
            }]}),
        );

        let outcome = engine.dispatch(&Action::AdjustControl {
            demo: "id-1".to_string(),
            property: "border-radius".to_string(),
            value: "20".to_string(),
        });
        assert_eq!(outcome, Outcome::Handled);

        let page = engine.gateway();
        let label = page
            .element(&Target::ControlValue {
                demo: "id-1".to_string(),
                property: "border-radius".to_string(),
            })
            .unwrap();
        assert_eq!(label.text, Some("20px".to_string()));
    }
}
