//! Shared HTTP plumbing for provider clients.
//!
//! Every family client funnels its single outbound call through
//! [`execute`], which owns the transport/status/shape error mapping so the
//! per-family code is just request construction and response normalization.

use meridian_models::invocation::InvocationError;
use serde::de::DeserializeOwned;

/// Sends a prepared request and parses the JSON response body.
///
/// Maps failures onto the invocation error taxonomy:
/// connectivity failures to [`InvocationError::Transport`] (or
/// [`InvocationError::Timeout`] on deadline expiry), non-success statuses to
/// [`InvocationError::Server`] carrying the status code, and bodies that fail
/// to parse to [`InvocationError::MalformedResponse`].
pub(crate) async fn execute<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, InvocationError> {
    let response = request.send().await.map_err(transport_error)?;

    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;

    if !status.is_success() {
        tracing::warn!(
            status = status.as_u16(),
            "model endpoint returned failure status"
        );
        return Err(InvocationError::Server {
            status: status.as_u16(),
            message: body,
        });
    }

    serde_json::from_str(&body).map_err(|err| {
        InvocationError::MalformedResponse(format!("failed to parse response: {err}\nBody: {body}"))
    })
}

fn transport_error(err: reqwest::Error) -> InvocationError {
    if err.is_timeout() {
        InvocationError::Timeout
    } else {
        InvocationError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Accepts one connection and answers with a raw HTTP response.
    async fn one_shot_server(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0_u8; 1024];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(response.as_bytes()).await;
        });
        url
    }

    #[tokio::test]
    async fn stalled_endpoint_surfaces_timeout() {
        // Bound but never served: the connection opens and then hangs.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let builder = reqwest::Client::new()
            .get(&url)
            .timeout(Duration::from_millis(100));
        let err = execute::<serde_json::Value>(builder).await.unwrap_err();
        assert_eq!(err, InvocationError::Timeout);
    }

    #[tokio::test]
    async fn unreachable_endpoint_surfaces_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let builder = reqwest::Client::new().get(&url);
        let err = execute::<serde_json::Value>(builder).await.unwrap_err();
        assert!(matches!(err, InvocationError::Transport(_)));
    }

    #[tokio::test]
    async fn failure_status_carries_the_body() {
        let url = one_shot_server(
            "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 8\r\n\r\noverload",
        )
        .await;

        let builder = reqwest::Client::new().get(&url);
        let err = execute::<serde_json::Value>(builder).await.unwrap_err();
        assert_eq!(
            err,
            InvocationError::Server {
                status: 500,
                message: "overload".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn unparsable_body_is_a_malformed_response() {
        let url = one_shot_server("HTTP/1.1 200 OK\r\ncontent-length: 8\r\n\r\nnot json").await;

        let builder = reqwest::Client::new().get(&url);
        let err = execute::<serde_json::Value>(builder).await.unwrap_err();
        match err {
            InvocationError::MalformedResponse(message) => {
                assert!(message.contains("not json"));
            }
            other => panic!("expected a malformed-response error, got {other:?}"),
        }
    }
}
