use std::sync::OnceLock;

use async_trait::async_trait;
use reqwest::{Client, redirect::Policy};
use tracing::debug;

use super::{RedirectResolver, ResolveError, ResolverConfig};
use crate::validator::utils::parse_lenient;

fn install_rustls_provider() {
    static PROVIDER_INSTALLED: OnceLock<()> = OnceLock::new();
    PROVIDER_INSTALLED.get_or_init(|| {
        if let Err(e) = rustls::crypto::aws_lc_rs::default_provider().install_default() {
            // can happen if another crate installed it first
            debug!(existing_provider = ?e, "rustls CryptoProvider already installed");
        }
    });
}

/// Resolves redirects with a body-less `HEAD` request.
#[derive(Debug, Clone)]
pub struct HttpRedirectResolver {
    client: Client,
}

impl HttpRedirectResolver {
    pub fn new(config: &ResolverConfig) -> Result<Self, reqwest::Error> {
        install_rustls_provider();

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self { client })
    }

    /// Wraps an existing client. Its redirect policy and timeouts are used as is.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RedirectResolver for HttpRedirectResolver {
    async fn resolve(&self, url: &str) -> Result<String, ResolveError> {
        let target = parse_lenient(url).map_err(|e| ResolveError::InvalidUrl {
            input: url.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(target.scheme(), "http" | "https") {
            return Err(ResolveError::InvalidUrl {
                input: url.to_owned(),
                reason: format!("unsupported scheme `{}`", target.scheme()),
            });
        }

        debug!(url = %url, "Resolving redirects");
        let response = self.client.head(target).send().await.map_err(|e| {
            if e.is_timeout() {
                ResolveError::Timeout {
                    url: url.to_owned(),
                }
            } else if e.is_redirect() {
                ResolveError::TooManyRedirects {
                    url: url.to_owned(),
                }
            } else {
                ResolveError::Network(e)
            }
        })?;

        let resolved = response.url().to_string();
        debug!(url = %url, resolved = %resolved, status = %response.status(), "Resolved");
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves `/short` as a redirect to `/watch?v=abc` and everything else as 200.
    async fn spawn_redirect_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 4096];
                    let mut read = 0;
                    loop {
                        let n = socket.read(&mut buf[read..]).await.unwrap_or(0);
                        if n == 0 {
                            return;
                        }
                        read += n;
                        if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                    let request = String::from_utf8_lossy(&buf[..read]);
                    let path = request.split_whitespace().nth(1).unwrap_or("/").to_owned();
                    let response = if path == "/short" {
                        "HTTP/1.1 301 Moved Permanently\r\nLocation: /watch?v=abc\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                    } else if path == "/loop" {
                        "HTTP/1.1 302 Found\r\nLocation: /loop\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                    } else {
                        "HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                    };
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_follows_redirect() {
        let base = spawn_redirect_server().await;
        let resolver = HttpRedirectResolver::new(&ResolverConfig::default()).unwrap();
        let resolved = resolver.resolve(&format!("{base}/short")).await.unwrap();
        assert_eq!(resolved, format!("{base}/watch?v=abc"));
    }

    #[tokio::test]
    async fn test_no_redirect_resolves_to_itself() {
        let base = spawn_redirect_server().await;
        let resolver = HttpRedirectResolver::new(&ResolverConfig::default()).unwrap();
        let url = format!("{base}/watch?list=x");
        assert_eq!(resolver.resolve(&url).await.unwrap(), url);
    }

    #[tokio::test]
    async fn test_redirect_loop_is_an_error() {
        let base = spawn_redirect_server().await;
        let config = ResolverConfig::default().with_max_redirects(3);
        let resolver = HttpRedirectResolver::new(&config).unwrap();
        let err = resolver.resolve(&format!("{base}/loop")).await.unwrap_err();
        assert!(matches!(err, ResolveError::TooManyRedirects { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn test_timeout_is_an_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            // accept and never answer
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let config = ResolverConfig::default().with_timeout(Duration::from_millis(200));
        let resolver = HttpRedirectResolver::new(&config).unwrap();
        let err = resolver
            .resolve(&format!("http://{addr}/short"))
            .await
            .unwrap_err();
        assert!(matches!(err, ResolveError::Timeout { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn test_rejects_non_http_scheme() {
        let resolver = HttpRedirectResolver::new(&ResolverConfig::default()).unwrap();
        let err = resolver.resolve("spotify:track:1").await.unwrap_err();
        assert!(matches!(err, ResolveError::InvalidUrl { .. }));
    }
}
