// src/core/net.rs
// HTTP GET against the XML API, parsed into an owned tree.

use std::time::{Duration, Instant};

use reqwest::{Method, StatusCode, blocking::Client};
use tracing::debug;

use super::error::{Error, Result};
use super::xml::Element;
use crate::config::consts::USER_AGENT;

/// Anything that can answer `path?query` with an XML document.
/// The catalog only talks to this, so tests can hand it canned documents.
pub trait XmlSource {
    fn fetch(&self, path: &[&str], query: &[(&str, String)]) -> Result<Element>;
}

impl<T: XmlSource + ?Sized> XmlSource for &T {
    fn fetch(&self, path: &[&str], query: &[(&str, String)]) -> Result<Element> {
        (**self).fetch(path, query)
    }
}

/// Handle on one endpoint of a remote XML API.
///
/// Handles are immutable: [`XmlApi::endpoint`] returns a new handle one or
/// more segments deeper and shares the underlying connection pool.
#[derive(Clone, Debug)]
pub struct XmlApi {
    url: String,
    client: Client,
}

impl XmlApi {
    pub fn new(root: &str) -> Result<Self> {
        Self::with_timeout(root, None)
    }

    /// `None` disables the client's request timeout entirely.
    pub fn with_timeout(root: &str, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self::with_client(root, client))
    }

    pub fn with_client(root: &str, client: Client) -> Self {
        Self {
            url: root.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// `root/seg1/seg2/...`, each segment with trailing slashes removed.
    pub fn endpoint(&self, segments: &[&str]) -> Self {
        let mut url = self.url.clone();
        for seg in segments {
            url.push('/');
            url.push_str(seg.trim_end_matches('/'));
        }
        Self { url, client: self.client.clone() }
    }

    /// Send the request and return the body as-is.
    pub fn call_raw(&self, method: Method, query: &[(&str, String)]) -> Result<String> {
        let t = Instant::now();
        let res = self.client.request(method.clone(), &self.url).query(query).send()?;
        let status = res.status();
        debug!(%method, url = %res.url(), status = status.as_u16(), elapsed = ?t.elapsed(), "api call");

        if status != StatusCode::OK {
            return Err(Error::Http {
                status: status.as_u16(),
                url: res.url().to_string(),
            });
        }
        Ok(res.text()?)
    }

    /// Send the request and parse the body as XML.
    pub fn call(&self, method: Method, query: &[(&str, String)]) -> Result<Element> {
        let body = self.call_raw(method, query)?;
        Element::parse(&body)
    }

    pub fn get(&self, query: &[(&str, String)]) -> Result<Element> {
        self.call(Method::GET, query)
    }
}

impl XmlSource for XmlApi {
    fn fetch(&self, path: &[&str], query: &[(&str, String)]) -> Result<Element> {
        self.endpoint(path).get(query)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;

    /// Answer a single request on a loopback port, then hang up.
    fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut req = [0u8; 4096];
            let _ = stream.read(&mut req);
            let res = format!(
                "HTTP/1.1 {status}\r\nContent-Type: text/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(res.as_bytes()).unwrap();
        });
        format!("http://{addr}/xmlapi2")
    }

    fn local(root: &str) -> XmlApi {
        XmlApi::with_client(root, Client::builder().no_proxy().build().unwrap())
    }

    #[test]
    fn ok_body_is_parsed() {
        let root = serve_once(
            "200 OK",
            r#"<items total="1"><item type="boardgame" id="13"><name value="Catan"/></item></items>"#,
        );
        let doc = local(&root).endpoint(&["search"]).get(&[("query", "Catan".to_string())]).unwrap();
        assert_eq!(doc.name, "items");
        assert_eq!(doc.attr("total"), Some("1"));
        assert_eq!(doc.children_named("item").count(), 1);
    }

    #[test]
    fn non_200_is_an_http_error() {
        let root = serve_once("503 Service Unavailable", "busy");
        let err = local(&root).fetch(&["thing"], &[("id", "13".to_string())]).unwrap_err();
        assert!(
            matches!(err, Error::Http { status: 503, ref url } if url.contains("/xmlapi2/thing") && url.contains("id=13")),
            "got {err:?}"
        );
    }

    #[test]
    fn non_xml_body_is_an_xml_error() {
        let root = serve_once("200 OK", "<html><body>rate limited");
        let err = local(&root).get(&[]).unwrap_err();
        assert!(matches!(err, Error::Xml(_)), "got {err:?}");
    }

    #[test]
    fn root_and_segments_lose_trailing_slashes() {
        let api = XmlApi::with_client("https://api.example.com/xmlapi2//", Client::new());
        assert_eq!(api.url(), "https://api.example.com/xmlapi2");

        let thing = api.endpoint(&["thing/"]);
        assert_eq!(thing.url(), "https://api.example.com/xmlapi2/thing");

        let deep = api.endpoint(&["a/", "b"]).endpoint(&["c//"]);
        assert_eq!(deep.url(), "https://api.example.com/xmlapi2/a/b/c");

        // original handle untouched
        assert_eq!(api.url(), "https://api.example.com/xmlapi2");
    }
}
