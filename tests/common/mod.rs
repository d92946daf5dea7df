//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_surface;

pub use mock_surface::{MockSurface, Script};

use dialogkit::modal::{DialogRequest, TextFieldSpec};
use std::time::Duration;

/// Poll `condition` until it holds or roughly a second has passed.
pub async fn eventually<F: Fn() -> bool>(condition: F) -> bool {
    for _ in 0..100 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

pub fn name_request() -> DialogRequest {
    DialogRequest::text_input("Name", TextFieldSpec::new("Your name", ""))
}

pub fn letters_request() -> DialogRequest {
    DialogRequest::multi_select("Letters", ["A", "B", "C", "D"], Vec::new())
}
