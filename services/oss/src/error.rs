use bytes::Bytes;
use http::Response;
use ossign_core::Error;
use quick_xml::de;
use serde::Deserialize;

/// OssError is the error document returned by the oss service.
#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct OssError {
    code: String,
    message: String,
    request_id: String,
    host_id: String,
}

/// Turn a response with an unexpected status into an [`Error`].
///
/// The message starts with the status, like `403 Forbidden`, followed by the
/// decoded error document, or the raw body if it isn't one.
pub(crate) fn parse_error(resp: Response<Bytes>) -> Error {
    let (parts, body) = resp.into_parts();

    let detail = match de::from_reader::<_, OssError>(body.as_ref()) {
        Ok(oss_err) if !oss_err.code.is_empty() => format!(
            "{}: {} (request id: {}, host id: {})",
            oss_err.code.trim(),
            oss_err.message.trim(),
            oss_err.request_id.trim(),
            oss_err.host_id.trim()
        ),
        _ => String::from_utf8_lossy(&body).trim().to_string(),
    };

    let message = if detail.is_empty() {
        parts.status.to_string()
    } else {
        format!("{}: {detail}", parts.status)
    };

    Error::unexpected_status(parts.status, message)
}
