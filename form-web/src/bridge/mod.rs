//! Bridge module - JS ↔ Rust communication
//! 
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod session;

pub use landmarks::{
    // WASM entry points
    update_landmarks,
    clear_landmarks,
    // Internal API
    with_current_frame,
    has_landmarks,
};

pub use session::{
    // WASM entry points
    select_exercise,
    set_form_targets,
    reset_form_targets,
    classify_current_frame,
    classify_frame,
    // Internal API
    selected_exercise,
    active_targets,
};
