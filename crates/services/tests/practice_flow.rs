use std::collections::HashSet;

use services::{QuestionBank, TrainerService};
use trainer_core::model::{QuestionId, TopicName};
use trainer_core::time::fixed_clock;

/// Bank with eight questions per topic; every answer is "yes".
fn build_bank(topics: &[&str]) -> QuestionBank {
    let mut records = Vec::new();
    let mut id = 0;
    for topic in topics {
        for i in 0..8 {
            id += 1;
            records.push(format!(
                r#"{{"id": {id}, "topic": "{topic}", "question": "{topic} #{i}", "options": ["yes", "no"], "answer": "yes"}}"#
            ));
        }
    }
    let json = format!("[{}]", records.join(","));
    QuestionBank::from_json_str(&json).unwrap()
}

#[test]
fn diagnostic_then_personalized_practice() {
    let bank = build_bank(&["geography", "history", "science"]);
    let mut service = TrainerService::new(bank).with_clock(fixed_clock());

    // Diagnostic over the whole bank: miss everything in history, get
    // half of geography, ace science.
    let mut quiz = service.start_diagnostic(24).unwrap();
    let mut geography_seen = 0;
    while !quiz.is_complete() {
        let question = quiz.current_question().unwrap().clone();
        let choice = match question.topic().as_str() {
            "history" => "no",
            "geography" => {
                geography_seen += 1;
                if geography_seen % 2 == 0 { "no" } else { "yes" }
            }
            _ => "yes",
        };
        service.submit_answer(&mut quiz, choice).unwrap();
        service.advance(&mut quiz).unwrap();
    }
    assert_eq!(quiz.score(), 8 + 4);

    // History (0%) ranks below geography (50%); science (100%) is not weak.
    let stats = service.topic_stats();
    assert_eq!(stats.total_attempts(), 24);
    let weak = service.weakest_topics(3);
    assert_eq!(
        weak,
        vec![
            TopicName::new("history").unwrap(),
            TopicName::new("geography").unwrap()
        ]
    );

    // Practice session: 10 questions, ~70% from the weak topics, no
    // repeated question ids.
    let mut practice = service.start_practice(10).unwrap();
    assert_eq!(practice.total_questions(), 10);

    let mut ids = HashSet::new();
    let mut from_weak = 0;
    while !practice.is_complete() {
        let question = practice.current_question().unwrap().clone();
        assert!(ids.insert(question.id()), "duplicate question in session");
        if weak.contains(question.topic()) {
            from_weak += 1;
        }
        service.submit_answer(&mut practice, "yes").unwrap();
        service.advance(&mut practice).unwrap();
    }
    assert_eq!(ids.len(), 10);
    assert_eq!(from_weak, 7);

    // Practice attempts keep feeding the same log.
    assert_eq!(service.attempts().len(), 34);
}

#[test]
fn practice_before_any_attempts_is_a_uniform_mix() {
    let bank = build_bank(&["art", "music"]);
    let service = TrainerService::new(bank).with_clock(fixed_clock());

    assert!(service.weakest_topics(3).is_empty());

    let practice = service.start_practice(6).unwrap();
    assert_eq!(practice.total_questions(), 6);
}

#[test]
fn oversized_practice_returns_the_whole_bank_once() {
    let bank = build_bank(&["art"]);
    let mut service = TrainerService::new(bank).with_clock(fixed_clock());

    let mut quiz = service.start_diagnostic(8).unwrap();
    while !quiz.is_complete() {
        service.submit_answer(&mut quiz, "no").unwrap();
        service.advance(&mut quiz).unwrap();
    }

    let mut practice = service.start_practice(50).unwrap();
    assert_eq!(practice.total_questions(), 8);

    let mut ids: HashSet<QuestionId> = HashSet::new();
    while !practice.is_complete() {
        let id = practice.current_question().unwrap().id();
        assert!(ids.insert(id));
        service.submit_answer(&mut practice, "yes").unwrap();
        service.advance(&mut practice).unwrap();
    }
    assert_eq!(ids.len(), 8);
}
