//! REST API endpoint tests

mod get_artist_tests;
