use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::http::{HttpClient, HttpResponse, TransportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
enum Route {
    Respond(HttpResponse),
    Fail(String),
}

/// Canned responses keyed by method and URL. Unrouted requests fail as if
/// the host were unreachable.
#[derive(Debug, Default)]
pub struct FakeHttp {
    routes: HashMap<(Method, String), Route>,
    requests: Mutex<Vec<Request>>,
}

impl FakeHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(
        mut self,
        method: Method,
        url: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        let response = HttpResponse {
            status,
            body: body.into(),
        };
        self.routes
            .insert((method, url.into()), Route::Respond(response));
        self
    }

    pub fn fail(mut self, method: Method, url: impl Into<String>, message: &str) -> Self {
        self.routes
            .insert((method, url.into()), Route::Fail(message.to_owned()));
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    fn handle(&self, request: Request) -> Result<HttpResponse, TransportError> {
        let route = self
            .routes
            .get(&(request.method, request.url.clone()))
            .cloned();
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);

        match route {
            Some(Route::Respond(response)) => Ok(response),
            Some(Route::Fail(message)) => Err(TransportError::Connection(message)),
            None => Err(TransportError::Connection(format!("no route to {url}"))),
        }
    }
}

#[async_trait]
impl HttpClient for FakeHttp {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.handle(Request {
            method: Method::Get,
            url: url.to_owned(),
            body: None,
        })
    }

    async fn put(&self, url: &str, body: &Value) -> Result<HttpResponse, TransportError> {
        self.handle(Request {
            method: Method::Put,
            url: url.to_owned(),
            body: Some(body.clone()),
        })
    }
}
