use crate::shared::errors::{AppError, AppResult};
use reqwest::StatusCode;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Retry configuration for external API calls
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(10),
            backoff_multiplier: 1.5,
            jitter: true,
        }
    }
}

/// Shared HTTP plumbing for every external collaborator client.
pub struct HttpHandler;

impl HttpHandler {
    /// Create an HTTP client with consistent timeout and user-agent settings.
    pub fn create_http_client(timeout_secs: u64, user_agent: &str) -> AppResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })
    }

    /// Execute an HTTP request, retrying transient failures with exponential
    /// backoff, and map the final status to an error if it is not a success.
    pub async fn execute_with_retry<F, Fut>(
        request_fn: F,
        provider_name: &str,
        operation_name: &str,
    ) -> AppResult<reqwest::Response>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
    {
        let config = RetryConfig::default();
        let operation = format!("{} {}", provider_name, operation_name);
        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            let outcome = match request_fn().await {
                Ok(response) => {
                    let status = response.status();
                    if Self::is_retryable_status(status) {
                        Err(Self::status_to_app_error(status, provider_name))
                    } else {
                        Ok(response)
                    }
                }
                Err(e) => Err(AppError::ExternalServiceError(format!(
                    "HTTP request failed: {}",
                    e
                ))),
            };

            match outcome {
                Ok(response) => {
                    if attempt > 0 {
                        debug!("{} succeeded after {} retries", operation, attempt);
                    }
                    Self::handle_response_status(response.status(), provider_name)?;
                    return Ok(response);
                }
                Err(error) => {
                    last_error = Some(error.clone());
                    if attempt < config.max_retries {
                        let delay = Self::calculate_delay(attempt, &config);
                        warn!(
                            "{} failed on attempt {} ({}), retrying in {:?}",
                            operation,
                            attempt + 1,
                            error,
                            delay
                        );
                        sleep(delay).await;
                    } else {
                        warn!(
                            "{} failed on final attempt {} ({}), giving up",
                            operation,
                            attempt + 1,
                            error
                        );
                    }
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| AppError::ExternalServiceError("All retries exhausted".to_string())))
    }

    /// Map HTTP response status codes consistently across all collaborators.
    pub fn handle_response_status(status: StatusCode, provider_name: &str) -> AppResult<()> {
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::status_to_app_error(status, provider_name))
        }
    }

    fn calculate_delay(attempt: u32, config: &RetryConfig) -> Duration {
        let exponential_delay =
            config.base_delay.as_millis() as f64 * config.backoff_multiplier.powi(attempt as i32);

        let mut delay = Duration::from_millis(exponential_delay as u64);

        if delay > config.max_delay {
            delay = config.max_delay;
        }

        // Jitter to prevent thundering herd
        if config.jitter {
            let jitter_factor = 0.1;
            let jitter_ms =
                (delay.as_millis() as f64 * jitter_factor * rand::random::<f64>()) as u64;
            delay = Duration::from_millis(delay.as_millis() as u64 + jitter_ms);
        }

        delay
    }

    fn is_retryable_status(status: StatusCode) -> bool {
        matches!(
            status,
            StatusCode::INTERNAL_SERVER_ERROR
                | StatusCode::BAD_GATEWAY
                | StatusCode::SERVICE_UNAVAILABLE
                | StatusCode::GATEWAY_TIMEOUT
                | StatusCode::TOO_MANY_REQUESTS
                | StatusCode::REQUEST_TIMEOUT
        )
    }

    fn status_to_app_error(status: StatusCode, provider_name: &str) -> AppError {
        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                AppError::RateLimitError(format!("{} rate limit exceeded", provider_name))
            }
            StatusCode::NOT_FOUND => AppError::NotFound("Resource not found".to_string()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::Unauthorized(format!(
                "Not authorized to access the {} API",
                provider_name
            )),
            StatusCode::BAD_REQUEST => {
                AppError::ApiError(format!("Bad request to the {} API", provider_name))
            }
            _ if status.is_server_error() => {
                AppError::ExternalServiceError(format!("{} service unavailable", provider_name))
            }
            _ => AppError::ApiError(format!(
                "Unexpected status code from {}: {}",
                provider_name, status
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_statuses() {
        assert!(HttpHandler::is_retryable_status(StatusCode::BAD_GATEWAY));
        assert!(HttpHandler::is_retryable_status(
            StatusCode::TOO_MANY_REQUESTS
        ));
        assert!(!HttpHandler::is_retryable_status(StatusCode::BAD_REQUEST));
        assert!(!HttpHandler::is_retryable_status(StatusCode::NOT_FOUND));
    }

    #[test]
    fn status_mapping_rate_limit() {
        let err = HttpHandler::status_to_app_error(StatusCode::TOO_MANY_REQUESTS, "AniList");
        assert!(matches!(err, AppError::RateLimitError(_)));
    }

    #[test]
    fn delay_is_capped() {
        let config = RetryConfig {
            max_retries: 10,
            base_delay: Duration::from_secs(5),
            max_delay: Duration::from_secs(10),
            backoff_multiplier: 3.0,
            jitter: false,
        };
        assert_eq!(
            HttpHandler::calculate_delay(8, &config),
            Duration::from_secs(10)
        );
    }
}
