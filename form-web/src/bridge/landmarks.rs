//! Landmark storage and JS bridge
//!
//! Receives MediaPipe landmarks from JavaScript every frame and keeps the
//! latest one for classification. Each upload replaces the previous frame.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::error::FormResult;
use crate::pose::PoseFrame;

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static LANDMARKS: RefCell<Option<PoseFrame>> = RefCell::new(None);
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array of 99 values
/// (33 landmarks × x, y, z) or 132 values (with visibility).
/// Undetected points should be sent as NaN.
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) {
    let frame = match PoseFrame::from_flat(data) {
        Ok(frame) => Some(frame),
        Err(err) => {
            log::warn!("{}", err);
            None
        }
    };
    store_frame(frame);
}

/// Called from JavaScript when the pose model found nobody in the frame
#[wasm_bindgen]
pub fn clear_landmarks() {
    store_frame(None);
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

fn store_frame(frame: Option<PoseFrame>) {
    LANDMARKS.with(|store| *store.borrow_mut() = frame);
}

/// Run `f` against the latest frame (`None` when no pose is held)
pub fn with_current_frame<R>(f: impl FnOnce(Option<&PoseFrame>) -> R) -> R {
    LANDMARKS.with(|store| f(store.borrow().as_ref()))
}

/// Check if we have a frame to classify
pub fn has_landmarks() -> bool {
    LANDMARKS.with(|store| store.borrow().is_some())
}

/// Decode a per-call landmark array; an empty array means no pose
pub(crate) fn decode_frame(data: &[f32]) -> FormResult<Option<PoseFrame>> {
    if data.is_empty() {
        return Ok(None);
    }
    PoseFrame::from_flat(data).map(Some)
}
