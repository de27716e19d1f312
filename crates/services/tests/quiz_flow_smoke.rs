use std::sync::{Arc, Mutex};
use std::time::Duration;

use quiz_core::model::{Question, QuestionBank, QuizParams, QuizSettings};
use services::quiz::handoff::{ANSWERS_KEY, TIME_SPENT_KEY};
use services::{Destination, QuestionView, QuizController, QuizDisplay, QuizResults};
use storage::{InMemorySessionStore, SessionStore};
use tokio::sync::mpsc::{self, UnboundedSender};

#[derive(Default)]
struct Shared {
    selection: Option<String>,
    navigations: Vec<Destination>,
    readouts: Vec<u32>,
}

/// Display that reports each rendered question and its options to a driver task.
struct ChannelDisplay {
    shared: Arc<Mutex<Shared>>,
    rendered: Option<UnboundedSender<(usize, Vec<String>)>>,
}

impl QuizDisplay for ChannelDisplay {
    fn render_question(&mut self, view: &QuestionView<'_>) {
        self.shared.lock().unwrap().selection = None;
        if let Some(tx) = &self.rendered {
            let _ = tx.send((view.number - 1, view.options.to_vec()));
        }
    }

    fn render_remaining(&mut self, remaining: u32) {
        self.shared.lock().unwrap().readouts.push(remaining);
    }

    fn selection(&self) -> Option<String> {
        self.shared.lock().unwrap().selection.clone()
    }

    fn alert(&mut self, message: &str) {
        panic!("unexpected alert: {message}");
    }

    fn navigate(&mut self, destination: Destination) {
        self.shared.lock().unwrap().navigations.push(destination);
    }
}

fn bank() -> QuestionBank {
    let questions = (0..12).map(|n| {
        let options = vec![format!("first {n}"), format!("second {n}")];
        let answer = options[n % 2].clone();
        Question::new(format!("Question {n}"), options, answer).unwrap()
    });
    let mut bank = QuestionBank::new();
    bank.insert("general", "easy", questions);
    bank
}

fn params() -> QuizParams {
    QuizParams::new("general", "easy").unwrap()
}

#[tokio::test(start_paused = true)]
async fn answering_every_question_hands_off_results() {
    let store = InMemorySessionStore::new();
    let shared = Arc::new(Mutex::new(Shared::default()));
    let (rendered_tx, mut rendered_rx) = mpsc::unbounded_channel();
    let display = ChannelDisplay {
        shared: Arc::clone(&shared),
        rendered: Some(rendered_tx),
    };

    let controller = QuizController::load(
        params(),
        &bank(),
        Arc::new(store.clone()),
        QuizSettings::default(),
        display,
    )
    .unwrap();
    let handle = controller.handle();

    let driver = async {
        let mut answered = 0;
        while let Some((question, options)) = rendered_rx.recv().await {
            tokio::time::sleep(Duration::from_millis(2500)).await;
            shared.lock().unwrap().selection = options.first().cloned();
            assert!(handle.submit(question));
            answered += 1;
        }
        answered
    };

    let (results, answered) = tokio::join!(controller.run(), driver);
    let results = results.unwrap();

    assert_eq!(answered, 10);
    assert_eq!(results.total, 10);
    assert_eq!(results.elapsed_seconds, vec![2; 10]);
    let expected_score = results
        .questions
        .iter()
        .filter(|q| q.correct_answer() == q.options()[0])
        .count();
    assert_eq!(results.score, expected_score);
    assert!(results.answers.iter().all(Option::is_some));

    assert_eq!(shared.lock().unwrap().navigations, [Destination::Results]);
    assert_eq!(QuizResults::load(&store).unwrap(), results);
}

#[tokio::test(start_paused = true)]
async fn unanswered_quiz_times_out_question_by_question() {
    let store = InMemorySessionStore::new();
    let shared = Arc::new(Mutex::new(Shared::default()));
    let display = ChannelDisplay {
        shared: Arc::clone(&shared),
        rendered: None,
    };
    let settings = QuizSettings::new(3, 30, Duration::from_secs(1)).unwrap();

    let controller =
        QuizController::load(params(), &bank(), Arc::new(store.clone()), settings, display)
            .unwrap();
    let started = tokio::time::Instant::now();
    let results = controller.run().await.unwrap();

    assert_eq!(started.elapsed(), Duration::from_secs(90));
    assert_eq!(results.score, 0);
    assert_eq!(store.require_item(ANSWERS_KEY).unwrap(), "[null,null,null]");
    assert_eq!(store.require_item(TIME_SPENT_KEY).unwrap(), "[30,30,30]");

    let shared = shared.lock().unwrap();
    assert_eq!(shared.navigations, [Destination::Results]);
    assert_eq!(shared.readouts.iter().filter(|r| **r == 0).count(), 3);
}
