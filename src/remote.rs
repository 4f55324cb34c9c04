// src/remote.rs
//
// Peticiones HTTP al servidor del quiz. En nativo cada petición corre en un
// hilo con reqwest bloqueante; en WASM se usa fetch del navegador. El resultado
// vuelve por un canal que la app vacía en cada frame.

use crate::error::QuizError;
use crate::localization::Localization;
use crate::model::{CheckAnswerRequest, CheckAnswerResponse, QuizResponse};
use serde::de::DeserializeOwned;
use std::sync::mpsc::{Receiver, Sender, channel};

#[derive(Debug)]
pub enum RemoteEvent {
    Question {
        request_id: u64,
        result: Result<QuizResponse, QuizError>,
    },
    Check {
        request_id: u64,
        result: Result<CheckAnswerResponse, QuizError>,
    },
    Localization(Result<Localization, QuizError>),
}

pub struct RemoteClient {
    tx: Sender<RemoteEvent>,
    rx: Receiver<RemoteEvent>,
    repaint: Option<egui::Context>,
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::blocking::Client,
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, QuizError> {
    serde_json::from_str(text).map_err(|err| QuizError::Decode(err.to_string()))
}

fn decode_localization(text: &str) -> Result<Localization, QuizError> {
    Localization::from_json(text).map_err(|err| QuizError::Decode(err.to_string()))
}

impl RemoteClient {
    /// `repaint` despierta a egui cuando llega una respuesta.
    pub fn new(repaint: Option<egui::Context>) -> Self {
        let (tx, rx) = channel();
        Self {
            tx,
            rx,
            repaint,
            #[cfg(not(target_arch = "wasm32"))]
            http: reqwest::blocking::Client::new(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_http_client(http: reqwest::blocking::Client) -> Self {
        let mut client = Self::new(None);
        client.http = http;
        client
    }

    pub fn try_recv(&self) -> Option<RemoteEvent> {
        self.rx.try_recv().ok()
    }

    pub fn fetch_question(&self, url: String, request_id: u64) {
        log::debug!("GET {url}");
        #[cfg(not(target_arch = "wasm32"))]
        {
            let http = self.http.clone();
            self.spawn(move || RemoteEvent::Question {
                request_id,
                result: native::get_text(&http, &url).and_then(|text| decode(&text)),
            });
        }
        #[cfg(target_arch = "wasm32")]
        self.spawn(async move {
            RemoteEvent::Question {
                request_id,
                result: web::fetch_text("GET", &url, None)
                    .await
                    .and_then(|text| decode(&text)),
            }
        });
    }

    pub fn check_answer(&self, url: String, request_id: u64, body: CheckAnswerRequest) {
        log::debug!("POST {url}");
        #[cfg(not(target_arch = "wasm32"))]
        {
            let http = self.http.clone();
            self.spawn(move || RemoteEvent::Check {
                request_id,
                result: native::post_json(&http, &url, &body).and_then(|text| decode(&text)),
            });
        }
        #[cfg(target_arch = "wasm32")]
        self.spawn(async move {
            let result = match serde_json::to_string(&body) {
                Ok(payload) => web::fetch_text("POST", &url, Some(payload))
                    .await
                    .and_then(|text| decode(&text)),
                Err(err) => Err(QuizError::Decode(err.to_string())),
            };
            RemoteEvent::Check { request_id, result }
        });
    }

    pub fn fetch_localization(&self, url: String) {
        log::debug!("GET {url}");
        #[cfg(not(target_arch = "wasm32"))]
        {
            let http = self.http.clone();
            self.spawn(move || {
                RemoteEvent::Localization(
                    native::get_text(&http, &url).and_then(|text| decode_localization(&text)),
                )
            });
        }
        #[cfg(target_arch = "wasm32")]
        self.spawn(async move {
            RemoteEvent::Localization(
                web::fetch_text("GET", &url, None)
                    .await
                    .and_then(|text| decode_localization(&text)),
            )
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() -> RemoteEvent + Send + 'static,
    {
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        std::thread::spawn(move || {
            let event = job();
            if tx.send(event).is_err() {
                log::debug!("La app ya no escucha respuestas");
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn<F>(&self, job: F)
    where
        F: std::future::Future<Output = RemoteEvent> + 'static,
    {
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let event = job.await;
            let _ = tx.send(event);
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod native {
    use super::*;
    use reqwest::blocking::{Client, Response};
    use serde::Serialize;

    fn read_body(response: Response) -> Result<String, QuizError> {
        let status = response.status();
        if !status.is_success() {
            return Err(QuizError::Status(status.as_u16()));
        }
        response
            .text()
            .map_err(|err| QuizError::Network(err.to_string()))
    }

    pub fn get_text(client: &Client, url: &str) -> Result<String, QuizError> {
        let response = client
            .get(url)
            .send()
            .map_err(|err| QuizError::Network(err.to_string()))?;
        read_body(response)
    }

    pub fn post_json<B: Serialize>(client: &Client, url: &str, body: &B) -> Result<String, QuizError> {
        let response = client
            .post(url)
            .json(body)
            .send()
            .map_err(|err| QuizError::Network(err.to_string()))?;
        read_body(response)
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use crate::error::QuizError;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    fn js_err(context: &str, err: JsValue) -> QuizError {
        QuizError::Network(format!("{context}: {err:?}"))
    }

    pub async fn fetch_text(method: &str, url: &str, body: Option<String>) -> Result<String, QuizError> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = &body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|err| js_err("No se pudo crear request fetch", err))?;
        if body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(|err| js_err("No se pudo asignar headers", err))?;
        }

        let window =
            web_sys::window().ok_or_else(|| QuizError::Network("No existe window".into()))?;
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|err| js_err("Fetch falló", err))?;
        let response: Response = value
            .dyn_into()
            .map_err(|_| QuizError::Network("La respuesta fetch no es un Response".into()))?;

        if !response.ok() {
            return Err(QuizError::Status(response.status()));
        }

        let text = JsFuture::from(response.text().map_err(|err| js_err("Body ilegible", err))?)
            .await
            .map_err(|err| js_err("Body ilegible", err))?;
        text.as_string()
            .ok_or_else(|| QuizError::Decode("response.text() no devolvió string".into()))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) mod test_support {
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Servidor de un solo uso: lee la petición completa y responde `response`.
    pub(crate) fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = stream.read(&mut buf).unwrap_or(0);
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if let Some(end) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    let head = String::from_utf8_lossy(&request[..end]).to_lowercase();
                    let body_len = head
                        .lines()
                        .find_map(|l| l.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if request.len() >= end + 4 + body_len {
                        break;
                    }
                }
            }
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        });
        format!("http://{addr}")
    }

    pub(crate) fn json_response(body: &str) -> String {
        format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        )
    }

    pub(crate) fn client() -> reqwest::blocking::Client {
        reqwest::blocking::Client::builder().no_proxy().build().unwrap()
    }
}
