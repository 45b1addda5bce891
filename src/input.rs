use crate::core::to_ndc;
use glam::Vec2;
use web_sys as web;

/// Pointer position relative to the viewport, in NDC.
///
/// The particle canvas is a full-window background, so the window's inner
/// size is the reference box rather than the canvas rect.
#[inline]
pub fn pointer_ndc(ev: &web::PointerEvent) -> Vec2 {
    let (w, h) = web::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (width as f32, height as f32)
        })
        .unwrap_or((0.0, 0.0));
    to_ndc(ev.client_x() as f32, ev.client_y() as f32, w, h)
}

#[inline]
pub fn now_sec() -> f64 {
    instant::now() / 1000.0
}
