use crate::error::{Result, SenvError};
use crate::fetch::PropertySource;
use crate::properties::PropertySet;
use std::io::{self, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use tiny_http::{Header, Response, Server};

/// Clonable in-memory sink standing in for a parent stream.
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        let buf = self.0.lock().unwrap_or_else(|poison| poison.into_inner());
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// What the config server received.
#[derive(Debug)]
pub(crate) struct RecordedRequest {
    pub(crate) method: String,
    pub(crate) url: String,
    /// Header names lower-cased.
    pub(crate) headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub(crate) fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP server that answers exactly one request with a canned response.
pub(crate) struct OneShotServer {
    pub(crate) port: u16,
    handle: JoinHandle<RecordedRequest>,
}

impl OneShotServer {
    /// Wait for the request to be served and return what was received.
    pub(crate) fn request(self) -> RecordedRequest {
        self.handle.join().unwrap()
    }
}

/// Serve one request with the given status code and JSON body.
pub(crate) fn serve_once(status: u16, body: impl Into<String>) -> OneShotServer {
    let body = body.into();
    let server = Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();

    let handle = thread::spawn(move || {
        let request = server.recv().unwrap();
        let recorded = RecordedRequest {
            method: request.method().to_string(),
            url: request.url().to_string(),
            headers: request
                .headers()
                .iter()
                .map(|h| {
                    (
                        h.field.as_str().as_str().to_ascii_lowercase(),
                        h.value.as_str().to_string(),
                    )
                })
                .collect(),
        };

        let content_type = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
        let response = Response::from_string(body)
            .with_status_code(status)
            .with_header(content_type);
        let _ = request.respond(response);

        recorded
    });

    OneShotServer { port, handle }
}

/// A port on localhost with nothing listening on it.
pub(crate) fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// Scripted [`PropertySource`] that records the calls made to it.
#[derive(Default)]
pub(crate) struct ScriptedSource {
    pub(crate) props: PropertySet,
    pub(crate) fetch_error: Option<String>,
    pub(crate) process_error: Option<String>,
    pub(crate) calls: Vec<&'static str>,
}

impl ScriptedSource {
    pub(crate) fn with_props(props: PropertySet) -> Self {
        Self {
            props,
            ..Default::default()
        }
    }
}

impl PropertySource for ScriptedSource {
    fn fetch(&mut self, _json: bool, _verbose: bool) -> Result<()> {
        self.calls.push("fetch");
        match &self.fetch_error {
            Some(msg) => Err(SenvError::ConfigFetch(msg.clone())),
            None => Ok(()),
        }
    }

    fn process(&mut self) -> Result<PropertySet> {
        self.calls.push("process");
        match &self.process_error {
            Some(msg) => Err(SenvError::ConfigFetch(msg.clone())),
            None => Ok(self.props.clone()),
        }
    }
}
