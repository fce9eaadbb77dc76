#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use super::super::client_error::ClientError;
    use super::super::dispatcher::{ErrorDispatcher, MockNotifier};
    use super::super::types::{AppError, ErrorKind, messages};

    fn status_error(status: u16, body: serde_json::Value) -> ClientError {
        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or(messages::REQUEST_FAILED)
            .to_string();
        ClientError::Status {
            status,
            message,
            body,
        }
    }

    // ==================== Normalization Tests ====================

    #[test]
    fn test_auth_statuses_normalize_to_auth() {
        for status in [401, 403] {
            let err = AppError::from(&status_error(status, json!({})));
            assert_eq!(err.kind, ErrorKind::Auth);
            assert_eq!(err.status_code, Some(status));
        }
    }

    #[test]
    fn test_auth_messages_are_distinct() {
        let unauthorized = AppError::from(&status_error(401, json!({})));
        let forbidden = AppError::from(&status_error(403, json!({})));

        assert_eq!(unauthorized.message, messages::UNAUTHORIZED);
        assert_eq!(forbidden.message, messages::FORBIDDEN);
    }

    #[test]
    fn test_unprocessable_normalizes_to_validation() {
        let err = AppError::from(&status_error(422, json!({"message": "field missing"})));

        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, messages::VALIDATION);
        assert_eq!(err.status_code, Some(422));
    }

    #[test]
    fn test_server_errors_get_generic_message() {
        for status in [500, 502, 503, 599] {
            let err = AppError::from(&status_error(
                status,
                json!({"message": "stack trace leaked from the backend"}),
            ));

            assert_eq!(err.kind, ErrorKind::Api);
            assert_eq!(err.message, messages::SERVER_ERROR);
            assert_eq!(err.status_code, Some(status));
        }
    }

    #[test]
    fn test_api_error_uses_body_message() {
        let err = AppError::from(&status_error(400, json!({"message": "bad target"})));

        assert_eq!(err.kind, ErrorKind::Api);
        assert_eq!(err.message, "bad target");
    }

    #[test]
    fn test_api_error_falls_back_to_generic_message() {
        let err = AppError::from(&status_error(404, json!({})));

        assert_eq!(err.kind, ErrorKind::Api);
        assert_eq!(err.message, messages::REQUEST_FAILED);
    }

    #[test]
    fn test_response_body_propagates_as_details() {
        let body = json!({"message": "bad target", "field": "url"});
        let err = AppError::from(&status_error(400, body.clone()));

        assert_eq!(err.details, Some(body));
    }

    #[test]
    fn test_normalized_error_passes_through_unchanged() {
        let original = AppError::new(ErrorKind::Validation, "already normalized")
            .with_details(json!({"field": "target"}));

        let normalized = AppError::from(&ClientError::App(original.clone()));

        assert_eq!(normalized, original);
    }

    #[test]
    fn test_unclassified_error_becomes_unknown() {
        let err = AppError::from(&ClientError::Config("bad endpoint".to_string()));

        assert_eq!(err.kind, ErrorKind::Unknown);
        assert_eq!(err.message, "Configuration error: bad endpoint");
        assert!(err.details.is_some());
    }

    #[test]
    fn test_message_is_never_empty() {
        let err = AppError::new(ErrorKind::Unknown, "");
        assert_eq!(err.message, messages::UNKNOWN);
    }

    #[test]
    fn test_retryable_classification() {
        assert!(AppError::network().is_retryable());
        assert!(AppError::from(&status_error(500, json!({}))).is_retryable());

        assert!(!AppError::from(&status_error(400, json!({}))).is_retryable());
        assert!(!AppError::from(&status_error(401, json!({}))).is_retryable());
        assert!(!AppError::unknown("?").is_retryable());
    }

    // ==================== Dispatch Tests ====================

    #[test]
    fn test_registered_handler_invoked_once_not_fallback() {
        let dispatcher = ErrorDispatcher::new();
        let handled = Arc::new(AtomicUsize::new(0));
        let fallback_hits = Arc::new(AtomicUsize::new(0));

        let counter = handled.clone();
        dispatcher.register(ErrorKind::Network, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = fallback_hits.clone();
        dispatcher.set_global_handler(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        dispatcher.handle(AppError::network());

        assert_eq!(handled.load(Ordering::SeqCst), 1);
        assert_eq!(fallback_hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_fallback_handles_unregistered_kinds() {
        let dispatcher = ErrorDispatcher::new();
        let fallback_hits = Arc::new(AtomicUsize::new(0));

        let counter = fallback_hits.clone();
        dispatcher.set_global_handler(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        dispatcher.handle(status_error(422, json!({})));

        assert_eq!(fallback_hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_default_notifier_surfaces_message() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|m| m == messages::NETWORK)
            .times(1)
            .return_const(());

        let dispatcher = ErrorDispatcher::with_notifier(Arc::new(notifier));
        dispatcher.handle(AppError::network());
    }

    #[test]
    fn test_notifier_skipped_when_handler_registered() {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(0);

        let dispatcher = ErrorDispatcher::with_notifier(Arc::new(notifier));
        dispatcher.register(ErrorKind::Network, |_| {});
        dispatcher.handle(AppError::network());
    }

    #[test]
    fn test_last_registration_wins() {
        let dispatcher = ErrorDispatcher::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let counter = first.clone();
        dispatcher.register(ErrorKind::Api, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = second.clone();
        dispatcher.register(ErrorKind::Api, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        dispatcher.handle(status_error(400, json!({})));

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handle_returns_normalized_error() {
        let dispatcher = ErrorDispatcher::new();
        dispatcher.set_global_handler(|_| {});

        let err = dispatcher.handle(status_error(500, json!({})));

        assert_eq!(err.kind, ErrorKind::Api);
        assert_eq!(err.message, messages::SERVER_ERROR);
        assert_eq!(err.status_code, Some(500));
    }

    #[test]
    fn test_handle_is_idempotent_over_normalization() {
        // handle(normalize(x)) == handle(x)
        let dispatcher = ErrorDispatcher::new();
        dispatcher.set_global_handler(|_| {});
        let raw = || status_error(422, json!({"message": "nope"}));

        let direct = dispatcher.handle(raw());
        let pre_normalized = dispatcher.handle(AppError::from(&raw()));

        assert_eq!(direct, pre_normalized);
    }
}
