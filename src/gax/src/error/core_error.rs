// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::CredentialsError;
use super::rpc::Status;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The error returned by all the RPCs in the client libraries.
///
/// The client libraries report errors from multiple sources. The service may
/// return an error, the transport may be unable to create a connection, the
/// request may time out, the retry policy may be exhausted, or the library may
/// be unable to format the request because a required field is missing.
///
/// Most applications just return the error or log it. Applications that need
/// to react to specific failures can use the predicates (`is_timeout()`,
/// `is_exhausted()`, ...) and the accessors (`status()`,
/// `http_status_code()`, ...) on this type. The underlying problem is always
/// available via [source][std::error::Error::source].
///
/// # Example
/// ```
/// use gapic_gax::error::Error;
/// match example_function() {
///     Err(e) if e.status().is_some() => {
///         println!("service error {e}, debug using {:?}", e.status());
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     # use gapic_gax::error::rpc::{Code, Status};
///     # Err(Error::service(Status::default().set_code(Code::NotFound).set_message("NOT FOUND")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use gapic_gax::error::Error;
    /// use gapic_gax::error::rpc::{Code, Status};
    /// let status = Status::default().set_code(Code::NotFound).set_message("NOT FOUND");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: Status) -> Self {
        Self::service_with_http_metadata(status, None, None)
    }

    /// Creates an error representing a timeout.
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. The request may or may
    /// not have started, and it may or may not complete in the service.
    ///
    /// # Troubleshooting
    ///
    /// The bundled client configuration sets a per-attempt timeout for each
    /// RPC. Long running admin RPCs, such as `CreateTable`, may need a larger
    /// value, set it with `with_attempt_timeout()` on the request builder.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing an exhausted policy.
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Exhausted,
            source: Some(source.into()),
        }
    }

    /// The request could not complete before the retry policy expired.
    ///
    /// This is always a client-side generated error, but it may be the result
    /// of multiple errors received from the service. The source contains the
    /// last error.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// The client libraries handle unknown fields, so this typically indicates
    /// a response that is not JSON (for example, an HTML page from a proxy) or
    /// a bug in the client library.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This error is never transient, the serialization is deterministic.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// The [Status] payload associated with this error.
    ///
    /// # Examples
    /// ```
    /// use gapic_gax::error::{Error, rpc::{Code, Status}};
    /// let error = Error::service(Status::default().set_code(Code::NotFound));
    /// if let Some(status) = error.status() {
    ///     if status.code == Code::NotFound {
    ///         println!("cannot find the thing, more details in {:?}", status.details);
    ///     }
    /// }
    /// ```
    ///
    /// Google Cloud services return a detailed `Status` message including a
    /// numeric code for the error type, a human-readable message, and a
    /// sequence of details. See [AIP-193] for background.
    ///
    /// [AIP-193]: https://google.aip.dev/193
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.as_ref().status),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// Errors generated by proxies or load balancers do not include a
    /// [Status]. In such cases the client library returns the status code,
    /// headers and payload.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().status_code,
            ErrorKind::Service(d) => d.as_ref().status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&http::HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().headers.as_ref(),
            ErrorKind::Service(d) => d.as_ref().headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Create service errors including transport metadata.
    #[doc(hidden)]
    pub fn service_with_http_metadata(
        status: Status,
        status_code: Option<u16>,
        headers: Option<http::HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            status_code,
            headers,
            status,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot find a valid HTTP binding to make the request.
    #[doc(hidden)]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// The request was missing required parameters, or the parameters did not
    /// match the expected format.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a problem in the application. For example,
    /// calling `get_table()` without setting the `name` field, or setting it
    /// to a value that is not of the form
    /// `projects/{project}/instances/{instance}/tables/{table}`. Use the path
    /// helpers in each client to format resource names.
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot create the authentication headers.
    #[doc(hidden)]
    pub fn authentication(source: CredentialsError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// Could not create the authentication headers before sending the request.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a misconfigured authentication environment.
    /// The [Authenticate for using client libraries] guide describes how to
    /// set up the default credentials.
    ///
    /// [Authenticate for using client libraries]: https://cloud.google.com/docs/authentication/client-libraries
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem reported by the transport layer, with a full HTTP response.
    #[doc(hidden)]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include a broken connection after the request is sent.
    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Most often the solution is to use the right retry policy. This may
    /// involve changing the request to be idempotent, or configuring the
    /// policy to retry non-idempotent failures.
    pub fn is_io(&self) -> bool {
        matches!(
            &self.kind,
            ErrorKind::Transport(d) if matches!(**d, TransportDetails {
                status_code: None,
                headers: None,
                payload: None,
            })
        )
    }

    /// A problem in the transport layer.
    ///
    /// Examples include errors in a proxy, load balancer, or other network
    /// element generated before the service is able to send a full response.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport(_))
    }

    /// The error was generated before the RPC started and is transient.
    pub(crate) fn is_transient_and_before_rpc(&self) -> bool {
        if !matches!(&self.kind, ErrorKind::Authentication) {
            return false;
        }
        self.source
            .as_ref()
            .and_then(|e| e.downcast_ref::<CredentialsError>())
            .map(|e| e.is_transient())
            .unwrap_or(false)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot find a matching binding to send the request {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Exhausted, Some(e)) => write!(f, "{e}"),
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Service(d), _) => write!(
                f,
                "the service reports an error with code {} described as: {}",
                d.status.code, d.status.message
            ),
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Exhausted,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => match std::str::from_utf8(p.as_ref()) {
                Ok(message) => write!(f, "the HTTP transport reports a [{code}] error: {message}"),
                Err(_) => write!(f, "the HTTP transport reports a [{code}] error: {p:?}"),
            },
            (Some(source), _) => write!(f, "the transport reports an error: {source}"),
            (None, _) => unreachable!("no Error constructor allows this"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::Code;
    use std::error::Error as StdError;

    #[test]
    fn service() {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_message("NOT FOUND");
        let error = Error::service(status.clone());
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.status(), Some(&status));
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains(Code::NotFound.name()), "{error}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_headers().is_none(), "{error:?}");
    }

    #[test]
    fn service_with_http_metadata() {
        let status = Status::default()
            .set_code(Code::Unavailable)
            .set_message("try-again");
        let mut headers = HeaderMap::new();
        headers.insert("content-type", http::HeaderValue::from_static("application/json"));
        let error = Error::service_with_http_metadata(status.clone(), Some(503), Some(headers.clone()));
        assert_eq!(error.status(), Some(&status));
        assert_eq!(error.http_status_code(), Some(503));
        assert_eq!(error.http_headers(), Some(&headers));
        assert!(error.http_payload().is_none(), "{error:?}");
    }

    #[test]
    fn timeout() {
        let source = wkt::TimestampError::OutOfRange;
        let error = Error::timeout(source);
        assert!(error.is_timeout(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<wkt::TimestampError>());
        assert!(
            matches!(got, Some(wkt::TimestampError::OutOfRange)),
            "{error:?}"
        );
    }

    #[test]
    fn exhausted() {
        let inner = Error::service(Status::default().set_code(Code::Unavailable));
        let error = Error::exhausted(inner);
        assert!(error.is_exhausted(), "{error:?}");
        let got = error.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(got, Some(e) if e.status().map(|s| s.code) == Some(Code::Unavailable)),
            "{error:?}"
        );
    }

    #[test]
    fn serialization() {
        let error = Error::ser("bad field");
        assert!(error.is_serialization(), "{error:?}");
        assert!(error.to_string().contains("bad field"), "{error}");
    }

    #[test]
    fn deserialization() {
        let error = Error::deser("bad payload");
        assert!(error.is_deserialization(), "{error:?}");
        assert!(error.to_string().contains("bad payload"), "{error}");
    }

    #[test]
    fn binding() {
        let error = Error::binding("missing name");
        assert!(error.is_binding(), "{error:?}");
        assert!(error.to_string().contains("missing name"), "{error}");
        assert!(!error.is_transport(), "{error:?}");
    }

    #[test]
    fn authentication() {
        let error = Error::authentication(CredentialsError::from_msg(true, "try-again"));
        assert!(error.is_authentication(), "{error:?}");
        assert!(error.is_transient_and_before_rpc(), "{error:?}");
        assert!(error.to_string().contains("try-again"), "{error}");

        let error = Error::authentication(CredentialsError::from_msg(false, "bad key"));
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
    }

    #[test]
    fn http() {
        let mut headers = HeaderMap::new();
        headers.insert("x-test", http::HeaderValue::from_static("value"));
        let payload = bytes::Bytes::from_static(b"<html>bad gateway</html>");
        let error = Error::http(502, headers.clone(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(502));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.http_payload(), Some(&payload));
        assert!(error.to_string().contains("[502]"), "{error}");
        assert!(error.to_string().contains("bad gateway"), "{error}");
    }

    #[test]
    fn io() {
        let error = Error::io("connection reset");
        assert!(error.is_io(), "{error:?}");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.to_string().contains("connection reset"), "{error}");
    }

    #[test]
    fn not_transient_before_rpc() {
        let error = Error::io("connection reset");
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
    }
}
