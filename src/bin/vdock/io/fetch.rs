use std::io::Read;
use std::time::Duration;

use viewdock::io::{Error, Fetcher};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Upper bound on a downloaded structure; ureq's own `into_string` stops at 10 MB.
const MAX_BODY_BYTES: u64 = 512 << 20;

/// Blocking HTTP(S) fetcher. A failed request is reported, never retried.
pub struct HttpFetcher {
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, Error> {
        let response = ureq::get(url)
            .timeout(self.timeout)
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => {
                    Error::fetch(url, format!("bad server response (HTTP {code})"))
                }
                other => Error::fetch(url, other.to_string()),
            })?;

        read_body(response.into_reader(), url, MAX_BODY_BYTES)
    }
}

/// Reads a whole response body, refusing anything longer than `limit` bytes.
fn read_body(reader: impl Read, url: &str, limit: u64) -> Result<String, Error> {
    let mut body = String::new();
    reader
        .take(limit + 1)
        .read_to_string(&mut body)
        .map_err(|e| Error::fetch(url, format!("failed to read response body: {e}")))?;

    if body.len() as u64 > limit {
        return Err(Error::fetch(
            url,
            format!("response body exceeds {} MiB", limit >> 20),
        ));
    }
    Ok(body)
}
