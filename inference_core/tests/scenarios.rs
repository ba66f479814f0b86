//! End-to-end sessions over small weather knowledge bases.

use inference_core::{
    Answer, ControllerState, InferenceController, Outcome, PresentedQuestion, Result, Step,
};
use knowledge_rules::{KnowledgeBase, KnowledgeError, TriState};

const WEATHER: &str = r#"{
    "rules": [
        {"antecedent": {"Sunny": 1, "Warm": 1}, "consequent": {"GoodDay": 1}}
    ],
    "facts": [
        {"name": "Sunny", "value": -1},
        {"name": "Warm", "value": -1},
        {"name": "GoodDay", "value": -1}
    ],
    "questions": [
        {"name": "weather", "question": "What is the weather like?",
         "uniselect": false, "asked": false, "options": ["Sunny", "Warm"]}
    ],
    "goals": ["GoodDay"]
}"#;

fn answer_with(
    options: &'static [&'static str],
) -> impl FnMut(&PresentedQuestion) -> Result<Answer> {
    move |_| Ok(Answer::many(options.iter().copied()))
}

#[test]
fn test_both_options_reach_goal() {
    let kb = KnowledgeBase::from_json_str(WEATHER).unwrap();
    let mut controller = InferenceController::with_defaults(kb).unwrap();

    let outcome = controller.run(&mut answer_with(&["Sunny", "Warm"])).unwrap();

    assert_eq!(
        outcome,
        Outcome::GoalReached {
            goal: "GoodDay".to_string()
        }
    );
    assert_eq!(controller.state(), ControllerState::GoalReached);
}

#[test]
fn test_one_option_fails_without_other_questions() {
    let kb = KnowledgeBase::from_json_str(WEATHER).unwrap();
    let mut controller = InferenceController::with_defaults(kb).unwrap();

    let outcome = controller.run(&mut answer_with(&["Sunny"])).unwrap();

    assert_eq!(outcome, Outcome::NoGoalReachable);
    assert_eq!(controller.state(), ControllerState::FailedNoQuestion);
    let facts = controller.knowledge_base().facts();
    assert_eq!(facts.get("Sunny").unwrap(), TriState::True);
    assert_eq!(facts.get("Warm").unwrap(), TriState::False);
    assert_eq!(facts.get("GoodDay").unwrap(), TriState::Unknown);
}

#[test]
fn test_later_question_only_offers_unknown_options() {
    let source = WEATHER.replace(
        r#""options": ["Sunny", "Warm"]}"#,
        r#""options": ["Sunny"]},
        {"name": "again", "question": "Anything else?",
         "uniselect": true, "options": ["Sunny", "Warm"]}"#,
    );
    let kb = KnowledgeBase::from_json_str(&source).unwrap();
    let mut controller = InferenceController::with_defaults(kb).unwrap();

    let Step::Ask(first) = controller.advance().unwrap() else {
        panic!("expected the first question");
    };
    assert_eq!(first.name, "weather");
    controller.submit(Answer::one("Sunny")).unwrap();

    let Step::Ask(second) = controller.advance().unwrap() else {
        panic!("expected the second question");
    };
    assert_eq!(second.name, "again");
    assert_eq!(second.options, vec!["Warm"]);

    // Index 0 of the presented list is "Warm", not the declared "Sunny".
    let picked = second.select_indices(&[0]).unwrap();
    controller.submit(Answer::Selected(picked)).unwrap();

    assert_eq!(
        controller.advance().unwrap(),
        Step::Finished(Outcome::GoalReached {
            goal: "GoodDay".to_string()
        })
    );
}

#[test]
fn test_fully_resolved_question_is_skipped() {
    let source = WEATHER
        .replace(r#"{"name": "Sunny", "value": -1}"#, r#"{"name": "Sunny", "value": 1}"#)
        .replace(r#"{"name": "Warm", "value": -1}"#, r#"{"name": "Warm", "value": 0}"#);
    let kb = KnowledgeBase::from_json_str(&source).unwrap();
    let mut controller = InferenceController::with_defaults(kb).unwrap();

    assert_eq!(
        controller.advance().unwrap(),
        Step::Finished(Outcome::NoGoalReachable)
    );
    assert!(!controller.knowledge_base().questions()[0].is_asked());
}

#[test]
fn test_malformed_rule_fails_before_inference() {
    let source = WEATHER.replace(r#"{"Sunny": 1, "Warm": 1}"#, r#"{"Foo": 1, "Warm": 1}"#);
    let err = KnowledgeBase::from_json_str(&source).unwrap_err();
    assert!(matches!(err, KnowledgeError::UnknownFact { ref name, .. } if name == "Foo"));
}

#[test]
fn test_identical_sessions_end_identically() {
    let run = || {
        let kb = KnowledgeBase::from_json_str(WEATHER).unwrap();
        let mut controller = InferenceController::with_defaults(kb).unwrap();
        controller.run(&mut answer_with(&["Warm", "Sunny"])).unwrap();
        controller.into_knowledge_base().facts().snapshot()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_several_true_goals_report_first_declared_fact() {
    let source = r#"{
        "rules": [],
        "facts": [
            {"name": "Low", "value": 1},
            {"name": "High", "value": 1}
        ],
        "questions": [],
        "goals": ["High", "Low"]
    }"#;
    let kb = KnowledgeBase::from_json_str(source).unwrap();
    let mut controller = InferenceController::with_defaults(kb).unwrap();

    assert_eq!(
        controller.advance().unwrap(),
        Step::Finished(Outcome::GoalReached {
            goal: "Low".to_string()
        })
    );
}
