// src/app/session.rs
//
// Estado de la sesión de quiz: una máquina de estados sin dependencias de egui.

use crate::answer_utils::{NormalizationScope, matches_any_form};
use crate::config::AnswerCheckMode;
use crate::data::FilterCatalog;
use crate::error::QuizError;
use crate::filters::SelectedFilters;
use crate::model::{CheckAnswerRequest, CheckAnswerResponse, QuizQuestion, QuizResponse, WordType};
use crate::query::QuestionRequest;
use crate::view_models::{Feedback, QuestionView, QuizVisibility};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum QuizPhase {
    #[default]
    Idle,
    Loading,
    QuestionDisplayed,
    AnswerSubmitted,
    Failed {
        title: String,
        detail: String,
    },
}

/// Petición de pregunta pendiente de enviar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub request_id: u64,
    pub path: String,
    /// `None` en el endpoint sin filtros.
    pub word_type: Option<WordType>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CheckTicket {
    pub request_id: u64,
    pub body: CheckAnswerRequest,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// No hay pregunta o la respuesta está vacía.
    Ignored,
    Checked(Feedback),
    /// La comprobación se delega en el servidor.
    Remote(CheckTicket),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnterAction {
    Submit,
    NextQuestion,
    Nothing,
}

#[derive(Debug, Default)]
pub struct QuizSession {
    phase: QuizPhase,
    question: Option<QuizQuestion>,
    question_word_type: Option<WordType>,
    pub input: String,
    feedback: Option<Feedback>,
    check_error: Option<String>,
    next_request_id: u64,
    latest_fetch: Option<u64>,
    latest_word_type: Option<WordType>,
    pending_check: Option<u64>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    pub fn question(&self) -> Option<&QuizQuestion> {
        self.question.as_ref()
    }

    pub fn question_view(&self) -> Option<QuestionView> {
        self.question
            .as_ref()
            .map(|question| QuestionView::for_word_type(question, self.question_word_type))
    }

    /// Tipo de palabra pedido para la pregunta actual.
    pub fn question_word_type(&self) -> Option<WordType> {
        self.question_word_type
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn check_error(&self) -> Option<&str> {
        self.check_error.as_deref()
    }

    pub fn is_checking(&self) -> bool {
        self.pending_check.is_some()
    }

    fn next_id(&mut self) -> u64 {
        self.next_request_id += 1;
        self.next_request_id
    }

    /// Pasa a `Loading` y devuelve la petición a lanzar.
    ///
    /// Un tipo de palabra no soportado deja la sesión en `Failed` sin lanzar nada.
    pub fn begin_fetch(
        &mut self,
        catalog: &FilterCatalog,
        selected: &SelectedFilters,
        unfiltered: bool,
    ) -> Result<FetchTicket, QuizError> {
        let request = if unfiltered {
            Ok(QuestionRequest::unfiltered())
        } else {
            QuestionRequest::from_filters(catalog, selected)
        };

        self.feedback = None;
        self.check_error = None;
        self.pending_check = None;

        let request = match request {
            Ok(request) => request,
            Err(err) => {
                log::warn!("No se puede pedir pregunta: {err}");
                self.latest_fetch = None;
                self.fail(&err);
                return Err(err);
            }
        };

        let request_id = self.next_id();
        self.latest_fetch = Some(request_id);
        self.latest_word_type = request.word_type;
        self.phase = QuizPhase::Loading;
        log::info!("Pidiendo pregunta #{request_id}: {}", request.path);

        Ok(FetchTicket {
            request_id,
            path: request.path,
            word_type: request.word_type,
        })
    }

    /// Aplica la respuesta del servidor. Devuelve `false` si la respuesta ya no
    /// corresponde a la última petición y se descarta.
    pub fn complete_fetch(&mut self, request_id: u64, result: Result<QuizResponse, QuizError>) -> bool {
        if self.latest_fetch != Some(request_id) {
            log::debug!("Descartando respuesta antigua #{request_id}");
            return false;
        }
        self.latest_fetch = None;

        match result {
            Ok(QuizResponse::Question(question)) => {
                log::info!("Pregunta #{request_id}: \"{}\"", question.base);
                self.question = Some(question);
                self.question_word_type = self.latest_word_type.take();
                self.input.clear();
                self.phase = QuizPhase::QuestionDisplayed;
            }
            Ok(QuizResponse::Error { error }) => {
                log::warn!("El servidor devolvió error: {error}");
                self.fail(&QuizError::Server(error));
            }
            Err(err) => {
                log::error!("Fallo al pedir pregunta #{request_id}: {err}");
                self.fail(&err);
            }
        }
        true
    }

    fn fail(&mut self, err: &QuizError) {
        let (title, detail) = err.user_message();
        self.question = None;
        self.question_word_type = None;
        self.latest_word_type = None;
        self.phase = QuizPhase::Failed {
            title: title.to_string(),
            detail,
        };
    }

    pub fn can_submit(&self) -> bool {
        self.phase == QuizPhase::QuestionDisplayed && self.pending_check.is_none()
    }

    pub fn submit_answer(&mut self, mode: AnswerCheckMode, scope: NormalizationScope) -> SubmitOutcome {
        if !self.can_submit() {
            return SubmitOutcome::Ignored;
        }
        let Some(question) = self.question.as_ref() else {
            return SubmitOutcome::Ignored;
        };
        let user_answer = self.input.trim().to_string();
        if user_answer.is_empty() {
            return SubmitOutcome::Ignored;
        }

        match mode {
            AnswerCheckMode::Local => {
                let feedback = Feedback {
                    correct: matches_any_form(&user_answer, &question.form, scope),
                    user_answer,
                    correct_answer: question.form.clone(),
                };
                log::debug!("Respuesta comprobada: correcta = {}", feedback.correct);
                self.feedback = Some(feedback.clone());
                self.check_error = None;
                self.phase = QuizPhase::AnswerSubmitted;
                SubmitOutcome::Checked(feedback)
            }
            AnswerCheckMode::Server => {
                let body = CheckAnswerRequest {
                    answer: user_answer,
                    correct_answer: question.form.clone(),
                };
                let request_id = self.next_id();
                self.pending_check = Some(request_id);
                self.check_error = None;
                SubmitOutcome::Remote(CheckTicket { request_id, body })
            }
        }
    }

    pub fn complete_check(
        &mut self,
        request_id: u64,
        result: Result<CheckAnswerResponse, QuizError>,
    ) -> bool {
        if self.pending_check != Some(request_id) {
            log::debug!("Descartando comprobación antigua #{request_id}");
            return false;
        }
        self.pending_check = None;

        match result {
            Ok(response) => {
                let user_answer = if response.user_answer.is_empty() {
                    self.input.trim().to_string()
                } else {
                    response.user_answer
                };
                let correct_answer = if response.correct_answer.is_empty() {
                    self.question
                        .as_ref()
                        .map(|q| q.form.clone())
                        .unwrap_or_default()
                } else {
                    response.correct_answer
                };
                self.feedback = Some(Feedback {
                    correct: response.correct,
                    user_answer,
                    correct_answer,
                });
                self.phase = QuizPhase::AnswerSubmitted;
            }
            Err(err) => {
                log::error!("Fallo al comprobar respuesta: {err}");
                self.check_error = Some("Error checking answer. Please try again.".to_string());
            }
        }
        true
    }

    /// Enter envía mientras se ve "Enviar"; después pide la siguiente pregunta.
    pub fn enter_action(&self) -> EnterAction {
        let visibility = self.visibility();
        if visibility.submit {
            EnterAction::Submit
        } else if visibility.next {
            EnterAction::NextQuestion
        } else {
            EnterAction::Nothing
        }
    }

    pub fn visibility(&self) -> QuizVisibility {
        let base = QuizVisibility {
            toolbar: true,
            ..Default::default()
        };
        match &self.phase {
            QuizPhase::Idle => base,
            QuizPhase::Loading => QuizVisibility {
                loading: true,
                ..base
            },
            QuizPhase::QuestionDisplayed => QuizVisibility {
                question: true,
                submit: true,
                feedback: self.check_error.is_some(),
                ..base
            },
            QuizPhase::AnswerSubmitted => QuizVisibility {
                question: true,
                feedback: true,
                next: true,
                ..base
            },
            QuizPhase::Failed { .. } => QuizVisibility {
                question: true,
                ..base
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter_catalog;
    use crate::error::FETCH_FAILED;
    use crate::filters::FilterState;
    use crate::model::WordType;

    fn luna() -> QuizQuestion {
        QuizQuestion {
            base: "lūna".into(),
            g_case: "nom".into(),
            quant: "pl".into(),
            gender: "lun".into(),
            declen: Some("1st".into()),
            form: "lūna/lūnā".into(),
            ..Default::default()
        }
    }

    fn start(session: &mut QuizSession) -> FetchTicket {
        let filters = FilterState::new(WordType::Noun).read();
        session.begin_fetch(filter_catalog(), &filters, false).unwrap()
    }

    fn displayed() -> QuizSession {
        let mut session = QuizSession::new();
        let ticket = start(&mut session);
        assert!(session.complete_fetch(ticket.request_id, Ok(QuizResponse::Question(luna()))));
        session
    }

    #[test]
    fn fetch_moves_through_loading_to_question() {
        let mut session = QuizSession::new();
        assert_eq!(session.phase(), &QuizPhase::Idle);
        let ticket = start(&mut session);
        assert!(ticket.path.starts_with("/noun-quiz-question"));
        assert_eq!(session.phase(), &QuizPhase::Loading);
        assert!(session.visibility().loading);

        session.complete_fetch(ticket.request_id, Ok(QuizResponse::Question(luna())));
        assert_eq!(session.phase(), &QuizPhase::QuestionDisplayed);
        let visibility = session.visibility();
        assert!(visibility.question && visibility.submit && !visibility.next);
    }

    #[test]
    fn doubled_vowels_match_split_candidates() {
        let mut session = displayed();
        session.input = "luuna".into();
        let outcome = session.submit_answer(AnswerCheckMode::Local, NormalizationScope::UserOnly);
        let SubmitOutcome::Checked(feedback) = outcome else {
            panic!("esperaba comprobación local");
        };
        assert!(feedback.correct);
        assert_eq!(feedback.user_answer, "luuna");
        assert_eq!(feedback.correct_answer, "lūna/lūnā");
        assert_eq!(session.phase(), &QuizPhase::AnswerSubmitted);

        let visibility = session.visibility();
        assert!(visibility.next && !visibility.submit && visibility.feedback);
    }

    #[test]
    fn wrong_answer_is_marked_incorrect() {
        let mut session = displayed();
        session.input = "lunoti".into();
        match session.submit_answer(AnswerCheckMode::Local, NormalizationScope::UserOnly) {
            SubmitOutcome::Checked(feedback) => assert!(!feedback.correct),
            other => panic!("resultado inesperado: {other:?}"),
        }
    }

    #[test]
    fn blank_answer_is_ignored() {
        let mut session = displayed();
        session.input = "   ".into();
        assert_eq!(
            session.submit_answer(AnswerCheckMode::Local, NormalizationScope::UserOnly),
            SubmitOutcome::Ignored
        );
        assert_eq!(session.phase(), &QuizPhase::QuestionDisplayed);
    }

    #[test]
    fn http_500_shows_error_and_keeps_toolbar() {
        let mut session = QuizSession::new();
        let ticket = start(&mut session);
        session.complete_fetch(ticket.request_id, Err(QuizError::Status(500)));

        assert_eq!(
            session.phase(),
            &QuizPhase::Failed {
                title: "Error".into(),
                detail: FETCH_FAILED.into(),
            }
        );
        let visibility = session.visibility();
        assert!(visibility.toolbar);
        assert!(visibility.question);
        assert!(!visibility.loading && !visibility.submit);
    }

    #[test]
    fn server_error_message_is_shown() {
        let mut session = QuizSession::new();
        let ticket = start(&mut session);
        session.complete_fetch(
            ticket.request_id,
            Ok(QuizResponse::Error {
                error: "No quiz question found".into(),
            }),
        );
        assert_eq!(
            session.phase(),
            &QuizPhase::Failed {
                title: "Error loading quiz".into(),
                detail: "No quiz question found".into(),
            }
        );
    }

    #[test]
    fn unsupported_word_type_fails_without_request() {
        let mut session = QuizSession::new();
        let selected = SelectedFilters {
            word_type: Some("verb".into()),
            ..Default::default()
        };
        let result = session.begin_fetch(filter_catalog(), &selected, false);
        assert!(result.is_err());
        assert!(matches!(session.phase(), QuizPhase::Failed { .. }));
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut session = QuizSession::new();
        let first = start(&mut session);
        let second = start(&mut session);

        let mut newer = luna();
        newer.base = "vala".into();
        assert!(session.complete_fetch(second.request_id, Ok(QuizResponse::Question(newer))));
        assert!(!session.complete_fetch(first.request_id, Ok(QuizResponse::Question(luna()))));
        assert_eq!(session.question().unwrap().base, "vala");
    }

    #[test]
    fn unfiltered_uses_legacy_endpoint() {
        let mut session = QuizSession::new();
        let ticket = session
            .begin_fetch(filter_catalog(), &SelectedFilters::default(), true)
            .unwrap();
        assert_eq!(ticket.path, "/quiz-question");
        assert_eq!(ticket.word_type, None);
    }

    #[test]
    fn requested_word_type_picks_question_layout() {
        // Adjetivo sin grado ni posición: solo el tipo pedido dice cómo mostrarlo
        let adjective = QuizQuestion {
            base: "kasta".into(),
            g_case: "nom".into(),
            quant: "pl".into(),
            gender: "lun".into(),
            form: "kasti".into(),
            ..Default::default()
        };
        let mut session = QuizSession::new();
        let filters = FilterState::new(WordType::Adjective).read();
        let ticket = session.begin_fetch(filter_catalog(), &filters, false).unwrap();
        assert_eq!(ticket.word_type, Some(WordType::Adjective));

        session.complete_fetch(ticket.request_id, Ok(QuizResponse::Question(adjective.clone())));
        assert_eq!(session.question_word_type(), Some(WordType::Adjective));
        let view = session.question_view().unwrap();
        assert!(view.prompt.starts_with("What is the\n"));
        assert!(view.details.iter().any(|(label, _)| *label == "Adj Class"));

        // El mismo registro pedido como sustantivo usa el formato de sustantivo
        let ticket = start(&mut session);
        session.complete_fetch(ticket.request_id, Ok(QuizResponse::Question(adjective)));
        assert_eq!(session.question_word_type(), Some(WordType::Noun));
        assert_eq!(
            session.question_view().unwrap().prompt,
            "What is the nom, pl of \"kasta\"?"
        );
    }

    #[test]
    fn server_check_round_trip() {
        let mut session = displayed();
        session.input = " lūnā ".into();
        let SubmitOutcome::Remote(ticket) =
            session.submit_answer(AnswerCheckMode::Server, NormalizationScope::UserOnly)
        else {
            panic!("esperaba comprobación remota");
        };
        assert_eq!(ticket.body.answer, "lūnā");
        assert!(session.is_checking());
        assert!(!session.can_submit());

        session.complete_check(
            ticket.request_id,
            Ok(CheckAnswerResponse {
                correct: true,
                user_answer: "lūnā".into(),
                correct_answer: "lūna/lūnā".into(),
            }),
        );
        assert_eq!(session.phase(), &QuizPhase::AnswerSubmitted);
        assert!(session.feedback().unwrap().correct);
    }

    #[test]
    fn failed_server_check_keeps_question() {
        let mut session = displayed();
        session.input = "lūna".into();
        let SubmitOutcome::Remote(ticket) =
            session.submit_answer(AnswerCheckMode::Server, NormalizationScope::UserOnly)
        else {
            panic!("esperaba comprobación remota");
        };
        session.complete_check(ticket.request_id, Err(QuizError::Network("down".into())));
        assert_eq!(session.phase(), &QuizPhase::QuestionDisplayed);
        assert_eq!(session.check_error(), Some("Error checking answer. Please try again."));
        assert!(session.visibility().feedback);
        assert!(session.can_submit());
    }

    #[test]
    fn enter_submits_then_moves_on() {
        let mut session = displayed();
        assert_eq!(session.enter_action(), EnterAction::Submit);
        session.input = "lūna".into();
        session.submit_answer(AnswerCheckMode::Local, NormalizationScope::UserOnly);
        assert_eq!(session.enter_action(), EnterAction::NextQuestion);
        assert_eq!(QuizSession::new().enter_action(), EnterAction::Nothing);
    }
}
