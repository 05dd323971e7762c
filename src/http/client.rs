use super::{
    request::{Body, HttpRequestBuilder},
    request_builder::{Get, InitBuilder, Post, RequestBuilder},
    response::Response,
};
use anyhow::Result;

#[derive(Clone, Debug)]
pub struct Client(reqwest::Client);

impl Client {
    pub fn new() -> Client {
        Client(reqwest::Client::new())
    }

    pub async fn send(&self, request: HttpRequestBuilder) -> Result<Response> {
        let mut builder = self.0.request(request.method.into(), &request.url);

        for (key, value) in request.headers {
            builder = builder.header(key, value);
        }

        if let Some(Body::Json(json)) = request.body {
            builder = builder.json(&json);
        }

        let request = builder.build()?;
        log::debug!("{} {}", request.method(), request.url());

        let response = self.0.execute(request).await?;
        let response = Response::read(response).await?;
        log::debug!("responded with status {}", response.status());

        Ok(response)
    }
}

pub trait ClientRequestBuilder {
    fn get(&self, url: impl Into<String>) -> RequestBuilder<Get>;
    fn post(&self, url: impl Into<String>) -> RequestBuilder<Post>;
}

impl ClientRequestBuilder for Client {
    fn get(&self, url: impl Into<String>) -> RequestBuilder<Get> {
        InitBuilder::get(self.clone(), url)
    }

    fn post(&self, url: impl Into<String>) -> RequestBuilder<Post> {
        InitBuilder::post(self.clone(), url)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
