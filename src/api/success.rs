use actix_web::{http::StatusCode, HttpResponse};
use std::borrow::Cow;

/// Key under which the payload of an envelope is emitted.
#[derive(serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Payload<T: serde::Serialize> {
    Data(T),
    File(T),
    Token(T),
}

#[derive(serde::Serialize)]
pub struct SuccessData<T: serde::Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Cow<'static, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(flatten)]
    pub payload: Option<Payload<T>>,
}

pub struct Success<T: serde::Serialize> {
    pub status: StatusCode,
    pub body: SuccessData<T>,
}

impl<T: serde::Serialize> Success<T> {
    fn with_payload(status: StatusCode, payload: Option<Payload<T>>) -> Self {
        Self { status, body: SuccessData { success: true, message: None, count: None, payload } }
    }

    pub fn ok(data: Option<T>) -> Self {
        Self::with_payload(StatusCode::OK, data.map(Payload::Data))
    }

    pub fn created(data: Option<T>) -> Self {
        Self::with_payload(StatusCode::CREATED, data.map(Payload::Data))
    }

    pub fn file(file: T) -> Self {
        Self::with_payload(StatusCode::OK, Some(Payload::File(file)))
    }

    pub fn token(token: T) -> Self {
        Self::with_payload(StatusCode::OK, Some(Payload::Token(token)))
    }

    pub fn message<M>(mut self, msg: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        self.body.message = Some(msg.into());
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.body.count = Some(count);
        self
    }
}

impl<T: serde::Serialize> Success<Vec<T>> {
    /// Wraps a list and reports its length alongside it.
    pub fn list(items: Vec<T>) -> Self {
        let count = items.len();
        Self::ok(Some(items)).count(count)
    }
}

impl<T: serde::Serialize> actix_web::Responder for Success<T> {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _req: &actix_web::HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::build(self.status).json(self.body)
    }
}
