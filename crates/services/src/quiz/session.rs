use std::fmt;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use trivia_core::Clock;
use trivia_core::model::{
    ANSWERS_PER_QUESTION, NavigationEvent, NavigationMailbox, PoolError, Question, QuestionPool,
    QuizPhase,
};

use super::observers::{ObserverId, ObserverList};
use super::shuffle::Shuffle;
use super::snapshot::{QuizProgress, QuizSnapshot};
use crate::error::QuizError;

//
// ─── SUBMIT OUTCOME ────────────────────────────────────────────────────────────
//

/// What a single `submit_answer` call did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was selected; the session is unchanged.
    NoSelection,
    /// Correct answer, next question is on screen.
    Advanced { question_index: usize },
    Won {
        target_count: usize,
        cleared_count: usize,
    },
    Lost,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One play-through over a shuffled question pool.
///
/// The session presents `target_count` questions in pool order, each with its
/// answers in a fresh random order. A wrong answer ends it as `Lost`; clearing
/// every question ends it as `Won`. Either way a single `NavigationEvent` is
/// posted and the session accepts no further answers.
pub struct QuizSession {
    pool: QuestionPool,
    rng: StdRng,
    clock: Clock,
    phase: QuizPhase,
    question_index: usize,
    presented: usize,
    shuffled_answers: [String; ANSWERS_PER_QUESTION],
    target_count: usize,
    navigation: NavigationMailbox,
    observers: ObserverList,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Shuffle `pool` and present its first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidPool` if the pool is empty.
    pub fn start(pool: QuestionPool, shuffle: Shuffle) -> Result<Self, QuizError> {
        Self::start_with_clock(pool, shuffle, Clock::default())
    }

    /// Like [`QuizSession::start`], stamping start/finish times from `clock`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidPool` if the pool is empty.
    pub fn start_with_clock(
        mut pool: QuestionPool,
        shuffle: Shuffle,
        clock: Clock,
    ) -> Result<Self, QuizError> {
        if pool.is_empty() {
            return Err(PoolError::Empty.into());
        }

        let mut rng = shuffle.rng();
        pool.shuffle(&mut rng);
        let target_count = pool.target_count();

        let mut session = Self {
            pool,
            rng,
            clock,
            phase: QuizPhase::InProgress,
            question_index: 0,
            presented: 0,
            shuffled_answers: Default::default(),
            target_count,
            navigation: NavigationMailbox::new(),
            observers: ObserverList::default(),
            started_at: clock.now(),
            finished_at: None,
        };
        session.present_question();

        tracing::debug!(
            pool_size = session.pool.len(),
            target_count,
            ?shuffle,
            "quiz session started"
        );
        Ok(session)
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Number of questions answered correctly so far.
    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    #[must_use]
    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// The pool in its shuffled session order.
    #[must_use]
    pub fn pool(&self) -> &QuestionPool {
        &self.pool
    }

    /// The question currently (or, once finished, last) on screen.
    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.pool.questions()[self.presented]
    }

    /// Answers of the current question in display order.
    #[must_use]
    pub fn shuffled_answers(&self) -> &[String; ANSWERS_PER_QUESTION] {
        &self.shuffled_answers
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress::new(self.question_index, self.target_count, self.phase)
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            phase: self.phase,
            question_text: self.current_question().text().to_owned(),
            answers: self.shuffled_answers.clone(),
            question_index: self.question_index,
            target_count: self.target_count,
        }
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Wall time of a finished session.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.finished_at.map(|at| at - self.started_at)
    }

    /// Submit the answer at `selection` (an index into `shuffled_answers`).
    ///
    /// `None` means nothing is selected and leaves the session untouched.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Finished` if the session already reached `Won` or `Lost`.
    /// Returns `QuizError::OutOfRange` if the index is not a valid answer slot.
    pub fn submit_answer(&mut self, selection: Option<usize>) -> Result<SubmitOutcome, QuizError> {
        let Some(index) = selection else {
            return Ok(SubmitOutcome::NoSelection);
        };

        if self.is_finished() {
            tracing::warn!(phase = ?self.phase, index, "answer submitted to a finished session");
            return Err(QuizError::Finished);
        }

        let Some(chosen) = self.shuffled_answers.get(index) else {
            return Err(QuizError::OutOfRange {
                index,
                len: ANSWERS_PER_QUESTION,
            });
        };

        if !self.current_question().is_correct(chosen) {
            self.finish(QuizPhase::Lost, NavigationEvent::Lost);
            return Ok(SubmitOutcome::Lost);
        }

        self.question_index += 1;
        if self.question_index < self.target_count {
            self.present_question();
            return Ok(SubmitOutcome::Advanced {
                question_index: self.question_index,
            });
        }

        let (target_count, cleared_count) = (self.target_count, self.question_index);
        self.finish(
            QuizPhase::Won,
            NavigationEvent::Won {
                target_count,
                cleared_count,
            },
        );
        Ok(SubmitOutcome::Won {
            target_count,
            cleared_count,
        })
    }

    /// Hand out the pending navigation event. Returns `Some` at most once per session.
    pub fn take_navigation(&mut self) -> Option<NavigationEvent> {
        self.navigation.take()
    }

    #[must_use]
    pub fn pending_navigation(&self) -> Option<&NavigationEvent> {
        self.navigation.peek()
    }

    /// Register `callback`; it receives the current snapshot right away and
    /// again after every change to the session.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&QuizSnapshot) + Send + 'static,
    ) -> ObserverId {
        let id = self.observers.add(Box::new(callback));
        let snapshot = self.snapshot();
        self.observers.notify_last(&snapshot);
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn present_question(&mut self) {
        let Some(question) = self.pool.get(self.question_index) else {
            return;
        };
        let mut answers = question.answers().clone();
        answers.shuffle(&mut self.rng);

        self.presented = self.question_index;
        self.shuffled_answers = answers;
        self.notify();
    }

    fn finish(&mut self, phase: QuizPhase, event: NavigationEvent) {
        self.phase = phase;
        let finished_at = self.clock.now();
        self.finished_at = Some(finished_at);
        self.navigation.post(event);

        tracing::info!(
            ?phase,
            cleared = self.question_index,
            target = self.target_count,
            elapsed_ms = self.clock.elapsed_since(self.started_at).num_milliseconds(),
            "quiz session finished"
        );
        self.notify();
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.observers.notify(&snapshot);
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("pool_len", &self.pool.len())
            .field("phase", &self.phase)
            .field("question_index", &self.question_index)
            .field("target_count", &self.target_count)
            .field("started_at", &self.started_at)
            .field("finished_at", &self.finished_at)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use trivia_core::time::{fixed_clock, fixed_now};

    fn pool_of(n: usize) -> QuestionPool {
        let questions = (0..n)
            .map(|i| {
                Question::new(
                    format!("Question {i}"),
                    [
                        format!("right {i}"),
                        format!("wrong {i}a"),
                        format!("wrong {i}b"),
                        format!("wrong {i}c"),
                    ],
                )
                .unwrap()
            })
            .collect();
        QuestionPool::new(questions)
    }

    fn start(n: usize, seed: u64) -> QuizSession {
        QuizSession::start_with_clock(pool_of(n), Shuffle::Seeded(seed), fixed_clock()).unwrap()
    }

    fn correct_index(session: &QuizSession) -> usize {
        let correct = session.current_question().correct_answer();
        session
            .shuffled_answers()
            .iter()
            .position(|a| a == correct)
            .unwrap()
    }

    fn wrong_index(session: &QuizSession) -> usize {
        (correct_index(session) + 1) % ANSWERS_PER_QUESTION
    }

    #[test]
    fn start_sets_target_count_and_first_question() {
        for (n, target) in [(1, 1), (2, 1), (4, 2), (5, 3), (10, 3)] {
            let session = start(n, 1);
            assert_eq!(session.target_count(), target, "pool of {n}");
            assert_eq!(session.question_index(), 0);
            assert_eq!(session.phase(), QuizPhase::InProgress);
            assert_eq!(
                session.current_question(),
                &session.pool().questions()[0]
            );
        }
    }

    #[test]
    fn empty_pool_is_rejected() {
        let err = QuizSession::start(QuestionPool::default(), Shuffle::Seeded(1)).unwrap_err();
        assert_eq!(err, QuizError::InvalidPool(PoolError::Empty));
    }

    #[test]
    fn shuffled_answers_are_a_permutation() {
        for seed in 0..20 {
            let session = start(3, seed);
            let mut shown = session.shuffled_answers().to_vec();
            let mut source = session.current_question().answers().to_vec();
            shown.sort();
            source.sort();
            assert_eq!(shown, source, "seed {seed}");
        }
    }

    #[test]
    fn two_correct_answers_win_a_pool_of_four() {
        let mut session = start(4, 9);
        assert_eq!(session.target_count(), 2);

        let first = session.current_question().clone();
        let outcome = session.submit_answer(Some(correct_index(&session))).unwrap();
        assert_eq!(outcome, SubmitOutcome::Advanced { question_index: 1 });
        assert_eq!(session.phase(), QuizPhase::InProgress);
        assert_ne!(session.current_question(), &first);
        assert_eq!(session.pending_navigation(), None);

        let outcome = session.submit_answer(Some(correct_index(&session))).unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Won {
                target_count: 2,
                cleared_count: 2
            }
        );
        assert_eq!(session.phase(), QuizPhase::Won);
        assert_eq!(
            session.take_navigation(),
            Some(NavigationEvent::Won {
                target_count: 2,
                cleared_count: 2
            })
        );
        assert_eq!(session.take_navigation(), None);
    }

    #[test]
    fn wrong_answer_loses_immediately_and_keeps_index() {
        let mut session = start(4, 3);
        let outcome = session.submit_answer(Some(wrong_index(&session))).unwrap();
        assert_eq!(outcome, SubmitOutcome::Lost);
        assert_eq!(session.phase(), QuizPhase::Lost);
        assert_eq!(session.question_index(), 0);
        assert_eq!(session.take_navigation(), Some(NavigationEvent::Lost));
    }

    #[test]
    fn finished_session_rejects_answers_without_resignaling() {
        let mut session = start(4, 3);
        session.submit_answer(Some(wrong_index(&session))).unwrap();
        assert_eq!(session.take_navigation(), Some(NavigationEvent::Lost));

        for index in 0..ANSWERS_PER_QUESTION {
            assert_eq!(
                session.submit_answer(Some(index)).unwrap_err(),
                QuizError::Finished
            );
        }
        assert_eq!(session.take_navigation(), None);
        assert_eq!(session.phase(), QuizPhase::Lost);
    }

    #[test]
    fn no_selection_is_a_no_op() {
        let mut session = start(4, 5);
        let before = session.snapshot();
        let outcome = session.submit_answer(None).unwrap();
        assert_eq!(outcome, SubmitOutcome::NoSelection);
        assert_eq!(session.snapshot(), before);
        assert_eq!(session.pending_navigation(), None);
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let mut session = start(4, 5);
        let before = session.snapshot();
        let err = session.submit_answer(Some(4)).unwrap_err();
        assert_eq!(err, QuizError::OutOfRange { index: 4, len: 4 });
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn single_question_pool_wins_after_one_answer() {
        let mut session = start(1, 2);
        let outcome = session.submit_answer(Some(correct_index(&session))).unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Won {
                target_count: 1,
                cleared_count: 1
            }
        );
        assert_eq!(session.progress().remaining, 0);
        assert!(session.progress().is_finished);
    }

    #[test]
    fn observers_follow_every_change() {
        let mut session = start(6, 4);
        let seen: Arc<Mutex<Vec<QuizSnapshot>>> = Arc::default();
        let sink = Arc::clone(&seen);
        let id = session.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot.clone()));

        assert_eq!(seen.lock().unwrap().len(), 1);
        assert_eq!(seen.lock().unwrap()[0], session.snapshot());

        session.submit_answer(None).unwrap();
        assert_eq!(seen.lock().unwrap().len(), 1);

        session.submit_answer(Some(correct_index(&session))).unwrap();
        {
            let seen = seen.lock().unwrap();
            assert_eq!(seen.len(), 2);
            assert_eq!(seen[1].question_index, 1);
            assert_eq!(seen[1].progress().question_number(), 2);
            assert_eq!(seen[1].question_text, session.current_question().text());
        }

        assert!(session.unsubscribe(id));
        assert!(!session.unsubscribe(id));
        session.submit_answer(Some(wrong_index(&session))).unwrap();
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn observers_see_terminal_phase() {
        let mut session = start(2, 8);
        let phases: Arc<Mutex<Vec<QuizPhase>>> = Arc::default();
        let sink = Arc::clone(&phases);
        session.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot.phase));

        session.submit_answer(Some(correct_index(&session))).unwrap();
        assert_eq!(
            *phases.lock().unwrap(),
            vec![QuizPhase::InProgress, QuizPhase::Won]
        );
    }

    #[test]
    fn timestamps_come_from_clock() {
        let mut session = start(2, 8);
        assert_eq!(session.started_at(), fixed_now());
        assert_eq!(session.finished_at(), None);
        assert_eq!(session.elapsed(), None);

        session.submit_answer(Some(wrong_index(&session))).unwrap();
        assert_eq!(session.finished_at(), Some(fixed_now()));
        assert_eq!(session.elapsed(), Some(Duration::zero()));
    }

    #[test]
    fn same_seed_same_order() {
        let a = start(10, 42);
        let b = start(10, 42);
        assert_eq!(a.pool(), b.pool());
        assert_eq!(a.shuffled_answers(), b.shuffled_answers());
    }
}
