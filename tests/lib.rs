//! Shared fixtures for the chartfeed behavior tests.

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use chartfeed_core::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Transport double scripted per URL fragment.
///
/// Routes are checked in registration order against the request URL, so
/// register the more specific fragment first when one contains another.
/// Unmatched requests answer 404.
#[derive(Debug, Default)]
pub struct ScriptedHttpClient {
    routes: Vec<(String, Result<HttpResponse, HttpError>)>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, fragment: &str, response: Result<HttpResponse, HttpError>) -> Self {
        self.routes.push((fragment.to_owned(), response));
        self
    }

    pub fn ok(self, fragment: &str, body: &str) -> Self {
        self.on(fragment, Ok(HttpResponse::ok_json(body)))
    }

    pub fn status(self, fragment: &str, status: u16, body: &str) -> Self {
        self.on(
            fragment,
            Ok(HttpResponse {
                status,
                body: body.to_owned(),
            }),
        )
    }

    pub fn fail(self, fragment: &str, message: &str) -> Self {
        self.on(fragment, Err(HttpError::new(message)))
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request.url.clone());

        let response = self
            .routes
            .iter()
            .find(|(fragment, _)| request.url.contains(fragment))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| {
                Ok(HttpResponse {
                    status: 404,
                    body: String::from("not found"),
                })
            });
        Box::pin(async move { response })
    }
}

/// JSON body for a symbol-list endpoint.
pub fn symbol_list_body(symbols: &[&str]) -> String {
    let entries = symbols
        .iter()
        .map(|symbol| format!(r#"{{"symbol": "{symbol}"}}"#))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{entries}]")
}

/// JSON body for a bars endpoint from `(time, close)` pairs; open/high/low
/// are derived so each bar is internally consistent.
pub fn bars_body(points: &[(i64, f64)]) -> String {
    let bars = points
        .iter()
        .map(|(time, close)| {
            format!(
                r#"{{"time": {time}, "open": {open}, "high": {high}, "low": {low}, "close": {close}, "volume": 100}}"#,
                open = close - 0.5,
                high = close + 1.0,
                low = close - 1.0,
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{bars}]")
}
