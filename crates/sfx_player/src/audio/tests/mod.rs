//! Integration tests for the play pipeline
