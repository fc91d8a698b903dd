//! Runtime tests for tinct-cli driven through in-memory streams.
