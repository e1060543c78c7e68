//! AWS Signature Version 4 for JSON `POST` requests.
//!
//! Only what Bedrock `InvokeModel` needs: no query string, signed headers
//! limited to `content-type`, `host`, `x-amz-date` and the optional
//! `x-amz-security-token`.

use super::error::{ErrorProvider, Result};
use crate::config::AwsCredentials;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

pub struct SigningParams<'a> {
    pub credentials: &'a AwsCredentials,
    pub region: &'a str,
    pub service: &'a str,
    pub time: DateTime<Utc>,
}

/// Percent-encodes one path segment, leaving only RFC 3986 unreserved bytes.
pub fn encode_path_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

/// Non-S3 services sign the path encoded once more than it is sent.
fn canonical_uri(path: &str) -> String {
    path.split('/')
        .map(encode_path_segment)
        .collect::<Vec<_>>()
        .join("/")
}

fn hmac(key: &[u8], data: &str) -> Result<Vec<u8>> {
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|e| ErrorProvider::Signing(e.to_string()))?;
    mac.update(data.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Signs a `POST` of `body` to `https://{host}{path}`.
///
/// `path` must already be percent-encoded as it will be sent. Returns the
/// headers to attach to the request besides `content-type`.
pub fn sign_post_json(
    params: &SigningParams<'_>,
    host: &str,
    path: &str,
    content_type: &str,
    body: &[u8],
) -> Result<Vec<(&'static str, String)>> {
    let amz_date = params.time.format("%Y%m%dT%H%M%SZ").to_string();
    let date = params.time.format("%Y%m%d").to_string();

    let mut headers = vec![
        ("content-type", content_type.to_string()),
        ("host", host.to_string()),
        ("x-amz-date", amz_date.clone()),
    ];
    if let Some(token) = &params.credentials.session_token {
        headers.push(("x-amz-security-token", token.clone()));
    }
    let canonical_headers: String = headers
        .iter()
        .map(|(name, value)| format!("{name}:{}\n", value.trim()))
        .collect();
    let signed_headers = headers
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(";");

    let canonical_request = format!(
        "POST\n{}\n\n{canonical_headers}\n{signed_headers}\n{}",
        canonical_uri(path),
        sha256_hex(body)
    );
    let scope = format!(
        "{date}/{}/{}/aws4_request",
        params.region, params.service
    );
    let string_to_sign = format!(
        "{ALGORITHM}\n{amz_date}\n{scope}\n{}",
        sha256_hex(canonical_request.as_bytes())
    );

    let secret = format!("AWS4{}", params.credentials.secret_access_key);
    let key = hmac(secret.as_bytes(), &date)?;
    let key = hmac(&key, params.region)?;
    let key = hmac(&key, params.service)?;
    let key = hmac(&key, "aws4_request")?;
    let signature = hex::encode(hmac(&key, &string_to_sign)?);

    let authorization = format!(
        "{ALGORITHM} Credential={}/{scope}, SignedHeaders={signed_headers}, Signature={signature}",
        params.credentials.access_key_id
    );

    let mut signed = vec![("x-amz-date", amz_date), ("authorization", authorization)];
    if let Some(token) = &params.credentials.session_token {
        signed.push(("x-amz-security-token", token.clone()));
    }
    Ok(signed)
}
