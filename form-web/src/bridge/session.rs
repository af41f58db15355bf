//! Exercise session - selection, targets and per-frame classification
//!
//! Holds what the host chose (exercise name, target overrides). The
//! classification itself stays stateless: every call looks at one frame.

use serde::Serialize;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use super::landmarks::{decode_frame, with_current_frame};
use crate::classifier::{classify_by_name, Exercise, FormTargets, FormVerdict};
use crate::error::{FormError, FormResult};

struct SessionState {
    /// Name as sent by the host; unknown names still classify (to the stub)
    exercise: Option<String>,
    targets: FormTargets,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            exercise: None,
            targets: FormTargets::STANDARD,
        }
    }
}

thread_local! {
    static SESSION: RefCell<SessionState> = RefCell::new(SessionState::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Select the exercise by catalogue name. Returns whether it is supported.
#[wasm_bindgen]
pub fn select_exercise(name: &str) -> bool {
    let known = Exercise::from_name(name).is_some();
    if known {
        log::info!("Exercise selected: {}", name);
    } else {
        log::warn!("Unsupported exercise selected: '{}'", name);
    }
    SESSION.with(|s| s.borrow_mut().exercise = Some(name.to_string()));
    known
}

/// Replace the active targets with a JSON override document.
/// Fields left out keep their standard values.
#[wasm_bindgen]
pub fn set_form_targets(json: &str) -> Result<(), JsValue> {
    let targets = FormTargets::from_json(json)?;
    SESSION.with(|s| s.borrow_mut().targets = targets);
    log::info!("Form targets updated");
    Ok(())
}

/// Go back to the standard targets
#[wasm_bindgen]
pub fn reset_form_targets() {
    SESSION.with(|s| s.borrow_mut().targets = FormTargets::STANDARD);
}

/// Classify the latest uploaded frame for the selected exercise.
/// Returns the verdict object, or `null` when no pose is held.
#[wasm_bindgen]
pub fn classify_current_frame() -> Result<JsValue, JsValue> {
    let verdict = classify_stored()?;
    Ok(to_js(verdict.as_ref())?)
}

/// Stateless variant: classify `data` (flat landmarks, empty = no pose)
/// for the exercise `name`, using the active targets.
#[wasm_bindgen]
pub fn classify_frame(name: &str, data: &[f32]) -> Result<JsValue, JsValue> {
    let frame = decode_frame(data)?;
    let verdict = classify_by_name(name, frame.as_ref(), &active_targets());
    Ok(to_js(verdict.as_ref())?)
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

pub fn selected_exercise() -> Option<String> {
    SESSION.with(|s| s.borrow().exercise.clone())
}

pub fn active_targets() -> FormTargets {
    SESSION.with(|s| s.borrow().targets)
}

/// Verdict for the stored frame and selected exercise
pub(crate) fn classify_stored() -> FormResult<Option<FormVerdict>> {
    let name = selected_exercise().ok_or(FormError::NoExerciseSelected)?;
    let targets = active_targets();
    Ok(with_current_frame(|frame| {
        classify_by_name(&name, frame, &targets)
    }))
}

/// Plain JS object (not a `Map`) so the host can read `verdict.angles.leftKnee`
fn to_js(verdict: Option<&FormVerdict>) -> FormResult<JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    verdict
        .serialize(&serializer)
        .map_err(|err| FormError::Serialization(err.to_string()))
}
