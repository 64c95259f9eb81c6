use interaction_core::PointerSample;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Converts a DOM pointer event into a viewport-space sample timestamped in milliseconds.
pub(crate) fn pointer_sample(ev: &web_sys::PointerEvent) -> PointerSample {
    PointerSample::new(
        f64::from(ev.client_x()),
        f64::from(ev.client_y()),
        ev.time_stamp(),
    )
}

/// Whether the press should start a drag: primary mouse button, or the primary touch/pen contact.
pub(crate) fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}
