//! Form Web - Exercise Form Checker
//!
//! Classifies MediaPipe pose landmarks, one frame at a time, as correct or
//! incorrect form for six exercises (squat, push-up, lunge, side plank,
//! lateral raise, sit-up), with coaching feedback and joint angles.
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! ```rust
//! use form_web::classifier::{classify_by_name, FormTargets};
//! use form_web::pose::{Landmark, PoseFrame};
//!
//! let frame = PoseFrame::new(vec![Landmark::new(0.5, 0.5); 33]);
//! let verdict = classify_by_name("Squats", Some(&frame), &FormTargets::STANDARD).unwrap();
//! assert_eq!(verdict.label, "Squat");
//! ```

mod bridge;
pub mod classifier;
pub mod error;
pub mod geometry;
pub mod pose;

use wasm_bindgen::prelude::*;

pub use classifier::{Exercise, FormTargets, FormVerdict};
pub use error::{FormError, FormResult};
pub use pose::{Landmark, PoseFrame};

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    active_targets, classify_current_frame, classify_frame, clear_landmarks, has_landmarks,
    reset_form_targets, select_exercise, selected_exercise, set_form_targets, update_landmarks,
    with_current_frame,
};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console.
///
/// Level: "trace", "debug", "info", "warn" or "error" (default "info").
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    let log_level = match level.to_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "warn" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    };

    wasm_logger::init(wasm_logger::Config::new(log_level));
    log::info!("✅ Form checker ready (log level: {})", log_level);
}

/// Library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
