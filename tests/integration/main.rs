mod common;
mod form_test;
