#[cfg(test)]
mod quizzes {
    use lectern::dom::{Page, Target};
    use lectern::engine::{Configuration, Engine};
    use lectern::rendering::Ids;
    use lectern::runtime::{Action, Outcome, QuizState, PROMPT};
    use serde_json::json;

    fn engine(topic: serde_json::Value) -> Engine<Page> {
        let mut engine = Engine::new(Configuration::new(), Page::new()).with_ids(Ids::sequential());
        engine.init(serde_json::from_value(json!({ "topics": [topic] })).unwrap());
        engine
    }

    fn option(index: usize) -> Target {
        Target::QuizOption {
            quiz: "id-1".to_string(),
            index,
        }
    }

    fn submit() -> Action {
        Action::CheckAnswer {
            quiz: "id-1".to_string(),
        }
    }

    fn state(engine: &Engine<Page>) -> QuizState {
        engine
            .runtime()
            .quiz("id-1")
            .unwrap()
            .state()
    }

    fn single() -> serde_json::Value {
        json!({
            "type": "quiz",
            "title": "Letters",
            "content": { "question": "Which?", "options": ["A", "B", "C", "D"], "correctAnswer": 2 }
        })
    }

    #[test]
    fn no_selection_prompts_and_changes_nothing() {
        let mut engine = engine(single());

        assert_eq!(engine.dispatch(&submit()), Outcome::Prompted);
        assert_eq!(state(&engine), QuizState::Unanswered);

        let page = engine.gateway();
        assert_eq!(page.alerts(), &[PROMPT.to_string()]);
        for i in 0..4 {
            assert!(page
                .element(&option(i))
                .is_none());
        }
        assert!(page
            .element(&Target::QuizFeedback {
                quiz: "id-1".to_string()
            })
            .is_none());
    }

    #[test]
    fn correct_answer_end_to_end() {
        let mut engine = engine(single());
        assert!(engine
            .gateway()
            .content()
            .unwrap()
            .contains("data-quiz-id=\"id-1\""));

        engine
            .gateway_mut()
            .check(&option(2));
        assert_eq!(engine.dispatch(&submit()), Outcome::Handled);
        assert_eq!(state(&engine), QuizState::Answered { passed: true });

        let page = engine.gateway();
        let feedback = page
            .element(&Target::QuizFeedbackContent {
                quiz: "id-1".to_string(),
            })
            .unwrap();
        assert_eq!(feedback.inner_html, Some("✅ Correct!".to_string()));
        assert!(page.has_class(
            &Target::QuizFeedback {
                quiz: "id-1".to_string()
            },
            "correct"
        ));

        for i in 0..4 {
            assert!(page.is_disabled(&option(i)));
            assert_eq!(page.has_class(&option(i), "correct"), i == 2);
            assert!(!page.has_class(&option(i), "wrong"));
        }
        assert!(page.is_disabled(&Target::QuizSubmit {
            quiz: "id-1".to_string()
        }));
    }

    #[test]
    fn wrong_answer_marks_both() {
        let mut engine = engine(single());
        engine
            .gateway_mut()
            .check(&option(0));
        engine.dispatch(&submit());

        assert_eq!(state(&engine), QuizState::Answered { passed: false });
        let page = engine.gateway();
        assert!(page.has_class(&option(0), "wrong"));
        assert!(page.has_class(&option(2), "correct"));
    }

    #[test]
    fn answered_is_terminal() {
        let mut engine = engine(single());
        engine
            .gateway_mut()
            .check(&option(1));
        engine.dispatch(&submit());

        engine
            .gateway_mut()
            .uncheck(&option(1));
        engine
            .gateway_mut()
            .check(&option(2));
        assert_eq!(engine.dispatch(&submit()), Outcome::Ignored);
        assert_eq!(state(&engine), QuizState::Answered { passed: false });
    }

    #[test]
    fn multi_choice_exact_set() {
        let topic = json!({
            "type": "quiz-multi",
            "title": "Void",
            "content": { "question": "Which?", "options": ["br", "p", "img", "div"], "correctAnswers": [0, 2] }
        });

        let cases: [(&[usize], bool); 5] = [
            (&[0, 2], true),
            (&[0], false),
            (&[0, 1, 2], false),
            (&[1, 3], false),
            (&[], false),
        ];
        for (selection, passed) in cases {
            let mut engine = engine(topic.clone());
            for i in selection {
                engine
                    .gateway_mut()
                    .check(&option(*i));
            }
            assert_eq!(engine.dispatch(&submit()), Outcome::Handled);
            assert_eq!(
                state(&engine),
                QuizState::Answered { passed },
                "selection {:?}",
                selection
            );
        }
    }

    #[test]
    fn multi_failure_counts_correct_options() {
        let mut engine = engine(json!({
            "type": "quiz-multi",
            "title": "Void",
            "content": { "question": "Which?", "options": ["br", "p", "img"], "correctAnswers": [0, 2] }
        }));
        engine
            .gateway_mut()
            .check(&option(0));
        engine.dispatch(&submit());

        let feedback = engine
            .gateway()
            .element(&Target::QuizFeedbackContent {
                quiz: "id-1".to_string(),
            })
            .and_then(|element| {
                element
                    .inner_html
                    .clone()
            })
            .unwrap();
        assert!(feedback.contains("there are 2 correct options"));
    }

    #[test]
    fn boolean_quiz() {
        let mut engine = engine(json!({
            "type": "quiz-bool",
            "title": "Doctype",
            "content": { "question": "Required?", "correctAnswer": false }
        }));

        assert_eq!(engine.dispatch(&submit()), Outcome::Prompted);

        // option 1 is "False"
        engine
            .gateway_mut()
            .check(&option(1));
        engine.dispatch(&submit());
        assert_eq!(state(&engine), QuizState::Answered { passed: true });
    }

    #[test]
    fn rerender_resets_quizzes() {
        let mut engine = engine(single());
        engine
            .gateway_mut()
            .check(&option(2));
        engine.dispatch(&submit());

        engine.render();

        // a fresh id, and nothing carried over on the page
        assert!(engine
            .runtime()
            .quiz("id-1")
            .is_none());
        assert_eq!(
            engine
                .runtime()
                .quiz("id-2")
                .map(|quiz| quiz.state()),
            Some(QuizState::Unanswered)
        );
        assert!(!engine
            .gateway()
            .is_disabled(&option(2)));
    }
}
