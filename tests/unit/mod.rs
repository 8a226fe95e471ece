/// Unit tests for the public API surface
mod public_api;
