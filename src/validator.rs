//! Password policy validator - entry points.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::Policy;
use crate::result::PolicyResult;

/// Validates a candidate against the unified password policy.
///
/// Every rule is evaluated; the result lists each failed rule in order
/// (length, uppercase, lowercase, digit). Never panics, for any input.
pub fn validate_password(candidate: &str) -> PolicyResult {
    let result = Policy::UNIFIED.validate(candidate);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        valid = result.is_valid(),
        violations = ?result.violations().iter().map(|v| v.code()).collect::<Vec<_>>(),
        "password policy evaluated"
    );

    result
}

/// Same as [`validate_password`] for a candidate held as a secret.
pub fn validate_secret_password(candidate: &SecretString) -> PolicyResult {
    validate_password(candidate.expose_secret())
}

/// Debounced validation for form inputs.
///
/// Waits briefly so fast typing does not trigger a check per keystroke,
/// then sends the result unless `token` was cancelled in the meantime.
#[cfg(feature = "async")]
pub async fn validate_password_tx(
    candidate: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PolicyResult>,
) {
    use std::time::Duration;

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password validation cancelled before debounce elapsed");
            return;
        }
        _ = tokio::time::sleep(Duration::from_millis(300)) => {}
    }

    let result = validate_secret_password(candidate);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password policy result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::result::Violation;

    #[tokio::test(start_paused = true)]
    async fn test_validate_password_tx_sends_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let pwd = SecretString::new("ABCDEFGH".to_string().into());

        validate_password_tx(&pwd, token, tx).await;

        let result = rx.recv().await.expect("Should receive result");
        assert_eq!(
            result.violations(),
            &[Violation::MissingLowercase, Violation::MissingDigit]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_validate_password_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();
        let pwd = SecretString::new("Abcdefg1".to_string().into());

        validate_password_tx(&pwd, token, tx).await;

        // Sender was dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_validate_password_tx_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let pwd = SecretString::new("Abcdefg1".to_string().into());

        // Must complete without panicking
        validate_password_tx(&pwd, CancellationToken::new(), tx).await;
    }
}
