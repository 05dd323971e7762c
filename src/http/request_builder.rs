use super::{
    client::Client,
    request::{Body, HttpRequestBuilder, Method},
    response::Response,
};
use anyhow::Result;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};

const GITHUB_API_VERSION: &str = "2022-11-28";
const GITHUB_JSON_MEDIA_TYPE: &str = "application/vnd.github+json";
const USER_AGENT_NAME: &str = "hubplus";

pub trait RequestType {}
pub struct Get;
pub struct Post;

impl RequestType for Get {}
impl RequestType for Post {}

pub struct InitBuilder {}

impl InitBuilder {
    pub fn get(client: Client, url: impl Into<String>) -> RequestBuilder<Get> {
        RequestBuilder {
            _marker: std::marker::PhantomData,
            client,
            builder: HttpRequestBuilder::new(Method::Get, url),
        }
    }

    pub fn post(client: Client, url: impl Into<String>) -> RequestBuilder<Post> {
        RequestBuilder {
            client,
            _marker: std::marker::PhantomData,
            builder: HttpRequestBuilder::new(Method::Post, url),
        }
    }
}

pub struct RequestBuilder<T: RequestType> {
    _marker: std::marker::PhantomData<T>,
    client: Client,
    pub builder: HttpRequestBuilder,
}

impl<T> RequestBuilder<T>
where
    T: RequestType,
{
    pub async fn send(self) -> Result<Response> {
        self.client.send(self.builder).await
    }

    pub fn json_content_headers(mut self, token: &str) -> Self {
        self.builder
            .bearer_auth(token)
            .header(ACCEPT.as_str(), GITHUB_JSON_MEDIA_TYPE)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(USER_AGENT.as_str(), USER_AGENT_NAME)
            .header(CONTENT_TYPE.as_str(), "application/json");

        self
    }
}

impl RequestBuilder<Post> {
    pub fn body(mut self, body: Body) -> Self {
        self.builder.body(body);
        self
    }
}
