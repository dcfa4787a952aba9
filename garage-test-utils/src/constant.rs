//! Placeholder values shared by the test suites. None of these are real credentials.

/// Bearer token persisted for logged in test users
pub static TEST_TOKEN: &str = "test-token";

/// Base URL the mock backend pretends to serve
pub static TEST_API_BASE_URL: &str = "http://localhost:5000/api";

pub static TEST_GARAGE_ID: i64 = 7;

pub static TEST_PASSWORD: &str = "motdepasse";
