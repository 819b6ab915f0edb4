//! Property tests

mod converters;
