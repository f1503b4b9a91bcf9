// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter implementing the [`Transport`] port.
//!
//! Sends the form as `multipart/form-data` in a single POST. Any non-2xx
//! answer is a failure; the body of the answer is ignored.

use crate::application::port::{Transport, TransportError, TransportFuture};
use crate::config::UploadConfig;
use crate::domain::form::FormData;
use crate::error::{Error, Result};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Builds the client for the configured endpoint.
    ///
    /// When `timeout_secs` is set, requests that take longer fail with
    /// [`TransportError::Timeout`].
    pub fn new(config: &UploadConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn multipart_form(data: FormData) -> Form {
    let mut form = Form::new();
    for (name, value) in data.text_fields() {
        form = form.text(name, value);
    }
    let image = Part::bytes(data.image.bytes.to_vec()).file_name(data.image.name.clone());
    form.part(FormData::IMAGE_FIELD, image)
}

fn map_request_error(err: &reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Network(err.to_string())
    }
}

impl Transport for HttpTransport {
    fn submit(&self, data: FormData) -> TransportFuture {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();

        Box::pin(async move {
            log::debug!("POST {endpoint} ({} image bytes)", data.image.bytes.len());
            let response = client
                .post(&endpoint)
                .multipart(multipart_form(data))
                .send()
                .await
                .map_err(|e| map_request_error(&e))?;

            let status = response.status();
            if status.is_success() {
                Ok(())
            } else {
                Err(TransportError::Status(status.as_u16()))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::effect::Effect;
    use crate::domain::form::ImageFile;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::sync::oneshot;

    fn sample() -> FormData {
        FormData {
            image: ImageFile::new("cat.jpg", vec![0xFF, 0xD8, 0xFF, 0xD9]),
            hashtags: "#cat".into(),
            comment: "on the sofa".into(),
            effect: Effect::Sepia,
            effect_level: "0.3".into(),
            scale: "75%".into(),
        }
    }

    fn transport_for(addr: std::net::SocketAddr, timeout_secs: Option<u64>) -> HttpTransport {
        let config = UploadConfig {
            endpoint: format!("http://{addr}/upload"),
            timeout_secs,
        };
        HttpTransport::new(&config).expect("client builds")
    }

    /// Reads one request, headers and complete body.
    async fn read_request(stream: &mut TcpStream) -> String {
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).await.expect("read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request_complete(&request) {
                break;
            }
        }
        String::from_utf8_lossy(&request).into_owned()
    }

    fn request_complete(request: &[u8]) -> bool {
        let Some(head_end) = request.windows(4).position(|w| w == b"\r\n\r\n") else {
            return false;
        };
        let body = &request[head_end + 4..];
        let head = String::from_utf8_lossy(&request[..head_end]).to_ascii_lowercase();
        let content_length = head.lines().find_map(|line| {
            line.strip_prefix("content-length:")
                .and_then(|value| value.trim().parse::<usize>().ok())
        });
        match content_length {
            Some(len) => body.len() >= len,
            None => body.ends_with(b"0\r\n\r\n"),
        }
    }

    /// Serves a single request with `status_line` and hands back what was posted.
    async fn answer_once(
        status_line: &'static str,
    ) -> (std::net::SocketAddr, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let request = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
            );
            stream
                .write_all(response.as_bytes())
                .await
                .expect("write response");
            let _ = tx.send(request);
        });
        (addr, rx)
    }

    #[tokio::test]
    async fn success_status_resolves_ok_and_posts_every_field() {
        let (addr, posted) = answer_once("200 OK").await;

        let result = transport_for(addr, Some(5)).submit(sample()).await;
        assert_eq!(result, Ok(()));

        let request = posted.await.expect("request captured");
        assert!(request.starts_with("POST /upload "));
        assert!(request.contains("multipart/form-data"));
        for (name, _) in sample().text_fields() {
            assert!(
                request.contains(&format!("name=\"{name}\"")),
                "missing part {name}"
            );
        }
        assert!(request.contains(&format!(
            "name=\"{}\"; filename=\"cat.jpg\"",
            FormData::IMAGE_FIELD
        )));
        assert!(request.contains("on the sofa"));
        assert!(request.contains("75%"));
    }

    #[tokio::test]
    async fn server_error_maps_to_status() {
        let (addr, posted) = answer_once("500 Internal Server Error").await;

        let result = transport_for(addr, Some(5)).submit(sample()).await;
        assert_eq!(result, Err(TransportError::Status(500)));

        let request = posted.await.expect("request captured");
        assert!(request.contains("name=\"hashtags\""));
        assert!(request.contains("name=\"description\""));
        assert!(request.contains("name=\"filename\""));
    }

    #[tokio::test]
    async fn silent_server_maps_to_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let (hold_tx, hold_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let _ = read_request(&mut stream).await;
            // Keep the connection open without answering.
            let _ = hold_rx.await;
        });

        let result = transport_for(addr, Some(1)).submit(sample()).await;
        assert_eq!(result, Err(TransportError::Timeout));
        drop(hold_tx);
    }

    #[tokio::test]
    async fn refused_connection_maps_to_network() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let result = transport_for(addr, Some(5)).submit(sample()).await;
        assert!(matches!(result, Err(TransportError::Network(_))), "{result:?}");
    }

    #[test]
    fn new_uses_configured_endpoint() {
        let config = UploadConfig {
            endpoint: "http://127.0.0.1:9/upload".into(),
            timeout_secs: Some(1),
        };
        let transport = HttpTransport::new(&config).expect("client builds");
        assert_eq!(transport.endpoint(), "http://127.0.0.1:9/upload");
    }
}
