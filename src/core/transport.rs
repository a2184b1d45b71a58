//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

//! Plain https GET requests with manually followed redirects.

use crate::error::{Error, LastError};
use crate::util::anyerror::Fault;
use curl::easy::Easy;
use log::debug;
use std::time::Duration;
use url::Url;

pub const RESPONSE_OKAY: u32 = 200;

/// Maximum number of redirects followed for a single request.
pub const MAX_REDIRECTS: usize = 5;

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("iconfetch/", env!("CARGO_PKG_VERSION"));

/// A single, unfollowed http response.
#[derive(Debug, PartialEq, Clone)]
pub struct Response {
    status: u32,
    location: Option<String>,
    body: Vec<u8>,
}

impl Response {
    pub fn new(status: u32) -> Self {
        Self {
            status,
            location: None,
            body: Vec::new(),
        }
    }

    pub fn body(mut self, bytes: &[u8]) -> Self {
        self.body = bytes.to_vec();
        self
    }

    pub fn location(mut self, url: &str) -> Self {
        self.location = Some(url.to_string());
        self
    }

    pub fn get_status(&self) -> u32 {
        self.status
    }

    pub fn get_location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

/// Performs one GET request without following redirects.
pub trait Transport {
    fn get(&mut self, url: &str) -> Result<Response, Fault>;
}

/// Sends requests through libcurl, reusing one handle across requests.
pub struct CurlTransport {
    easy: Easy,
}

impl CurlTransport {
    pub fn new() -> Result<Self, Fault> {
        let mut easy = Easy::new();
        // redirects are resolved by `fetch` to keep the hop count bounded
        easy.follow_location(false)?;
        easy.connect_timeout(CONNECT_TIMEOUT)?;
        easy.useragent(USER_AGENT)?;
        Ok(Self { easy })
    }
}

impl Transport for CurlTransport {
    fn get(&mut self, url: &str) -> Result<Response, Fault> {
        let mut body_bytes = Vec::new();
        self.easy.url(url)?;
        {
            let mut transfer = self.easy.transfer();
            transfer.write_function(|data| {
                body_bytes.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }
        let rc = self.easy.response_code()?;
        let location = self.easy.redirect_url()?.map(|s| s.to_string());
        Ok(Response {
            status: rc,
            location,
            body: body_bytes,
        })
    }
}

/// Requests `url` and returns the body of the final response.
///
/// Redirects are followed up to [MAX_REDIRECTS] times. The request fails if
/// the final status is not 200 or the transport reports an error.
pub fn fetch<T: Transport + ?Sized>(transport: &mut T, url: &str) -> Result<Vec<u8>, Error> {
    fetch_bounded(transport, url, MAX_REDIRECTS)
}

/// Requests `url` following at most `limit` redirects.
pub fn fetch_bounded<T: Transport + ?Sized>(
    transport: &mut T,
    url: &str,
    limit: usize,
) -> Result<Vec<u8>, Error> {
    let mut current = url.to_string();
    let mut hops: usize = 0;
    loop {
        debug!("GET {}", current);
        let rsp = transport
            .get(&current)
            .map_err(|e| Error::Transport(current.clone(), LastError(e.to_string())))?;
        debug!("{} responded with status {}", current, rsp.get_status());

        if rsp.get_status() == RESPONSE_OKAY {
            return Ok(rsp.into_body());
        }
        let next = match (rsp.is_redirect(), rsp.get_location()) {
            (true, Some(loc)) => resolve_location(&current, loc)?,
            _ => return Err(Error::BadStatus(current, rsp.get_status())),
        };
        if hops == limit {
            return Err(Error::TooManyRedirects(url.to_string(), limit));
        }
        hops += 1;
        debug!("following redirect {} to {}", hops, next);
        current = next;
    }
}

/// Resolves a `Location` header value against the url that produced it.
fn resolve_location(base: &str, location: &str) -> Result<String, Error> {
    let to_err = |e: url::ParseError| Error::BadRedirect(base.to_string(), LastError(e.to_string()));
    let base_url = Url::parse(base).map_err(to_err)?;
    Ok(base_url.join(location).map_err(to_err)?.to_string())
}


#[cfg(test)]
mod test {
    use super::mock::Scripted;
    use super::*;

    const A: &str = "https://a.io/icons/rust.svg";
    const B: &str = "https://b.io/rust.svg";

    #[test]
    fn okay_returns_body() {
        let mut t = Scripted::new().route(A, Response::new(200).body(b"<svg/>"));
        assert_eq!(fetch(&mut t, A).unwrap(), b"<svg/>".to_vec());
        assert_eq!(t.get_requests(), &vec![A.to_string()]);
    }

    #[test]
    fn follows_redirect() {
        let mut t = Scripted::new()
            .route(A, Response::new(302).location(B))
            .route(B, Response::new(200).body(b"<svg>moved</svg>"));
        assert_eq!(fetch(&mut t, A).unwrap(), b"<svg>moved</svg>".to_vec());
        assert_eq!(t.get_requests(), &vec![A.to_string(), B.to_string()]);
    }

    #[test]
    fn follows_relative_redirect() {
        let mut t = Scripted::new()
            .route(A, Response::new(301).location("/v2/rust.svg"))
            .route("https://a.io/v2/rust.svg", Response::new(200).body(b"<svg/>"));
        assert_eq!(fetch(&mut t, A).unwrap(), b"<svg/>".to_vec());
    }

    #[test]
    fn non_okay_status_fails() {
        let mut t = Scripted::new();
        assert_eq!(
            fetch(&mut t, A).unwrap_err(),
            Error::BadStatus(A.to_string(), 404)
        );
        // a 2xx other than 200 is still a failure
        let mut t = Scripted::new().route(A, Response::new(204));
        assert_eq!(
            fetch(&mut t, A).unwrap_err(),
            Error::BadStatus(A.to_string(), 204)
        );
    }

    #[test]
    fn redirect_without_location_fails() {
        let mut t = Scripted::new().route(A, Response::new(302));
        assert_eq!(
            fetch(&mut t, A).unwrap_err(),
            Error::BadStatus(A.to_string(), 302)
        );
    }

    #[test]
    fn redirect_loop_is_bounded() {
        let mut t = Scripted::new()
            .route(A, Response::new(302).location(B))
            .route(B, Response::new(302).location(A));
        assert_eq!(
            fetch(&mut t, A).unwrap_err(),
            Error::TooManyRedirects(A.to_string(), MAX_REDIRECTS)
        );
        // the original request plus every permitted hop
        assert_eq!(t.get_requests().len(), MAX_REDIRECTS + 1);
    }

    #[test]
    fn transport_error_fails() {
        let mut t = Scripted::new().unreachable(A);
        let e = fetch(&mut t, A).unwrap_err();
        assert_eq!(e.is_transfer(), true);
        assert_eq!(
            e,
            Error::Transport(A.to_string(), LastError(String::from("Connection reset by peer")))
        );
    }
}
