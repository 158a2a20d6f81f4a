//! Custom assertion macros and utilities
//!
//! Provides assertion macros for checking API responses with
//! descriptive failure messages.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert a response status, printing the body on mismatch
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {{
        let response = &$response;
        assert_eq!(
            response.status_code(),
            $status,
            "unexpected status, body: {}",
            response.text()
        );
    }};
}

/// Assert an error response's status and `{"error", "status"}` body
#[macro_export]
macro_rules! assert_api_error {
    ($response:expr, $status:expr) => {{
        let response = &$response;
        $crate::assert_status!(*response, $status);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], $status.as_u16());
        assert!(body["error"].is_string(), "missing error message: {}", body);
        body["error"].as_str().unwrap_or_default().to_string()
    }};
    ($response:expr, $status:expr, $message:expr) => {{
        let message = $crate::assert_api_error!($response, $status);
        assert_eq!(message, $message);
        message
    }};
}
