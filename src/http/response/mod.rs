use super::Error;
use serde::de::DeserializeOwned;

#[derive(Debug)]
pub struct Response {
    status: u16,
    text: String,
    next: Option<String>,
}

impl Response {
    pub async fn read(value: reqwest::Response) -> Result<Response, Error> {
        let status = value.status().as_u16();
        let next = value
            .headers()
            .get(reqwest::header::LINK)
            .and_then(|link| link.to_str().ok())
            .and_then(parse_next_link);

        let text = value
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        Ok(Response { status, text, next })
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// URL of the following page, when the server paginates.
    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// Decodes a successful payload; any non-2xx status is an error.
    pub fn json<T>(self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        if !self.is_success() {
            return Err(Error::GenericResponseError {
                status: self.status,
                message: self.text,
            });
        }

        serde_json::from_str::<T>(&self.text).map_err(|cause| Error::ParseResponseError { cause })
    }
}

/// Picks the `rel="next"` target out of a `Link` header such as
/// `<https://api/x?page=2>; rel="next", <https://api/x?page=5>; rel="last"`.
pub fn parse_next_link(header: &str) -> Option<String> {
    header
        .split(',')
        .find(|part| {
            part.split(';')
                .skip(1)
                .any(|param| param.trim() == r#"rel="next""#)
        })
        .and_then(|part| {
            let (target, _) = part.split_once(';')?;
            let url = target.trim().strip_prefix('<')?.strip_suffix('>')?;
            Some(url.to_owned())
        })
}
