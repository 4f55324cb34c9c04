use super::*;
use crate::data::filter_catalog;
use crate::localization::UiLanguage;
use crate::model::{FilterCategory, WordType};
use crate::query::{CHECK_ANSWER_ENDPOINT, LOCALIZATION_PATH};
use crate::remote::RemoteEvent;

impl QuizApp {
    /// Lee los filtros y lanza la petición de una pregunta nueva.
    pub fn start_new_quiz(&mut self) {
        let selected = self.filters.read();
        let ticket = match self
            .session
            .begin_fetch(filter_catalog(), &selected, self.settings.ignore_filters)
        {
            Ok(ticket) => ticket,
            // La sesión ya muestra el error
            Err(_) => return,
        };
        let url = self.settings.url_for(&ticket.path);
        self.remote.fetch_question(url, ticket.request_id);
    }

    pub fn submit_answer(&mut self) {
        let outcome = self
            .session
            .submit_answer(self.settings.answer_check, self.settings.normalization);
        if let SubmitOutcome::Remote(ticket) = outcome {
            let url = self.settings.url_for(CHECK_ANSWER_ENDPOINT);
            self.remote.check_answer(url, ticket.request_id, ticket.body);
        }
    }

    pub fn handle_enter(&mut self) {
        match self.session.enter_action() {
            EnterAction::Submit => self.submit_answer(),
            EnterAction::NextQuestion => self.start_new_quiz(),
            EnterAction::Nothing => {}
        }
    }

    pub fn toggle_filter(&mut self, category: FilterCategory, code: &str) {
        self.filters.toggle(category, code);
    }

    pub fn select_word_type(&mut self, word_type: WordType) {
        self.filters.select_word_type(word_type);
    }

    pub fn request_localization(&mut self) {
        let url = self.settings.url_for(LOCALIZATION_PATH);
        self.remote.fetch_localization(url);
    }

    pub fn cambiar_idioma(&mut self) {
        self.settings.ui_language = match self.settings.ui_language {
            UiLanguage::En => UiLanguage::Vl,
            UiLanguage::Vl => UiLanguage::En,
        };
    }

    /// Aplica el borrador de la URL del servidor.
    pub fn apply_server_url(&mut self) {
        let draft = self.server_url_draft.trim().to_string();
        if draft != self.settings.server_url {
            log::info!("Nuevo servidor del quiz: {draft}");
            self.settings.server_url = draft;
            self.request_localization();
        }
    }

    /// Vacía las respuestas que hayan llegado desde el último frame.
    pub fn poll_remote(&mut self) {
        while let Some(event) = self.remote.try_recv() {
            match event {
                RemoteEvent::Question { request_id, result } => {
                    self.session.complete_fetch(request_id, result);
                }
                RemoteEvent::Check { request_id, result } => {
                    self.session.complete_check(request_id, result);
                }
                RemoteEvent::Localization(Ok(table)) => self.localization.merge(table),
                RemoteEvent::Localization(Err(err)) => {
                    log::warn!("Sin localization.json del servidor, se usa la copia embebida: {err}");
                }
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::config::AnswerCheckMode;
    use crate::error::FETCH_FAILED;
    use crate::remote::test_support::{client, json_response, serve_once};
    use std::time::{Duration, Instant};

    fn app_for(server_url: String) -> QuizApp {
        let settings = QuizSettings {
            server_url,
            ..Default::default()
        };
        QuizApp::with_settings(settings, RemoteClient::with_http_client(client()))
    }

    fn poll_until(app: &mut QuizApp, done: impl Fn(&QuizApp) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while !done(app) {
            assert!(Instant::now() < deadline, "la sesión no avanzó");
            std::thread::sleep(Duration::from_millis(10));
            app.poll_remote();
        }
    }

    #[test]
    fn server_error_status_keeps_toolbar_visible() {
        let base = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".into(),
        );
        let mut app = app_for(base);
        app.start_new_quiz();
        assert_eq!(app.session.phase(), &QuizPhase::Loading);

        poll_until(&mut app, |app| app.session.phase() != &QuizPhase::Loading);
        assert_eq!(
            app.session.phase(),
            &QuizPhase::Failed {
                title: "Error".into(),
                detail: FETCH_FAILED.into(),
            }
        );
        assert!(app.session.visibility().toolbar);
    }

    #[test]
    fn question_then_enter_submits_and_enter_again_refetches() {
        let base = serve_once(json_response(
            r#"{"base":"lūna","g_case":"nom","quant":"pl","gender":"lun","declen":"1st","form":"lūna/lūnā"}"#,
        ));
        let mut app = app_for(base);
        app.start_new_quiz();
        poll_until(&mut app, |app| app.session.phase() == &QuizPhase::QuestionDisplayed);

        app.session.input = "luuna".into();
        app.handle_enter();
        assert_eq!(app.session.phase(), &QuizPhase::AnswerSubmitted);
        assert!(app.session.feedback().unwrap().correct);

        // El servidor de prueba ya cerró: la siguiente petición acaba en error
        app.handle_enter();
        assert_eq!(app.session.phase(), &QuizPhase::Loading);
    }

    #[test]
    fn server_side_check_uses_check_endpoint() {
        let base = serve_once(json_response(
            r#"{"correct":true,"user_answer":"vali","correct_answer":"vali"}"#,
        ));
        let mut app = app_for(base);
        app.settings.answer_check = AnswerCheckMode::Server;

        // Se simula una pregunta ya mostrada
        let ticket = app
            .session
            .begin_fetch(filter_catalog(), &app.filters.read(), false)
            .unwrap();
        app.session.complete_fetch(
            ticket.request_id,
            Ok(crate::model::QuizResponse::Question(crate::model::QuizQuestion {
                base: "vala".into(),
                form: "vali".into(),
                ..Default::default()
            })),
        );

        app.session.input = "vali".into();
        app.submit_answer();
        assert!(app.session.is_checking());
        poll_until(&mut app, |app| app.session.phase() == &QuizPhase::AnswerSubmitted);
        assert!(app.session.feedback().unwrap().correct);
    }

    #[test]
    fn word_type_switch_changes_endpoint() {
        let mut app = app_for("http://127.0.0.1:9".into());
        app.select_word_type(WordType::Adjective);
        let ticket = app
            .session
            .begin_fetch(filter_catalog(), &app.filters.read(), app.settings.ignore_filters)
            .unwrap();
        assert!(ticket.path.starts_with("/adj-quiz-question"));
    }

    #[test]
    fn new_server_url_reloads_localization_from_it() {
        let base = serve_once(json_response(
            r#"{"submit": {"en": "Send", "vl": "Sagon"}, "greeting": {"en": "Rytsas!", "vl": "Rytsas!"}}"#,
        ));
        let mut app = app_for("http://127.0.0.1:9".into());
        assert_eq!(app.t("submit"), "Submit");

        app.server_url_draft = format!("  {base}  ");
        app.apply_server_url();
        assert_eq!(app.settings.server_url, base);

        poll_until(&mut app, |app| app.t("submit") == "Send");
        assert_eq!(app.t("greeting"), "Rytsas!");
        // Las claves que el servidor no trae siguen con la copia embebida
        assert_eq!(app.t("correct"), "Correct!");
        app.cambiar_idioma();
        assert_eq!(app.t("submit"), "Sagon");
    }

    #[test]
    fn unchanged_server_url_is_not_reapplied() {
        let mut app = app_for("http://127.0.0.1:9".into());
        app.server_url_draft = "http://127.0.0.1:9".into();
        app.apply_server_url();
        assert_eq!(app.settings.server_url, "http://127.0.0.1:9");
        std::thread::sleep(Duration::from_millis(50));
        assert!(app.remote.try_recv().is_none());
    }

    #[test]
    fn language_toggle_switches_texts() {
        let mut app = app_for("http://127.0.0.1:9".into());
        assert_eq!(app.t("correct"), "Correct!");
        app.cambiar_idioma();
        assert_eq!(app.t("correct"), "Kessa!");
    }
}
