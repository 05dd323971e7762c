use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Body {
    Json(serde_json::Value),
}

impl Body {
    pub fn json<T>(value: &T) -> serde_json::Result<Body>
    where
        T: Serialize,
    {
        Ok(Body::Json(serde_json::to_value(value)?))
    }
}

#[derive(Debug, Clone)]
pub struct HttpRequestBuilder {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Body>,
}

impl HttpRequestBuilder {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        HttpRequestBuilder {
            method,
            url: url.into(),
            headers: vec![],
            body: None,
        }
    }

    pub fn header(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn bearer_auth(&mut self, token: &str) -> &mut Self {
        self.header(
            reqwest::header::AUTHORIZATION.as_str(),
            format!("Bearer {}", token),
        )
    }

    pub fn body(&mut self, body: Body) -> &mut Self {
        self.body = Some(body);
        self
    }
}
