//! Browser entry point: renders into an HTML canvas, one frame per
//! `requestAnimationFrame` callback.
//!
//! ```js
//! import init, { start } from "./phyllo.js";
//! await init();
//! await start("canvas");
//! ```

use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::{prelude::*, JsCast};
use web_sys::HtmlCanvasElement;

use crate::{error::PhylloError, options::Options, FrameDriver, FrameHost};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A canvas plus the animation-frame callback that redraws it.
struct CanvasHost {
    window: web_sys::Window,
    canvas: HtmlCanvasElement,
    callback: FrameCallback,
}

impl CanvasHost {
    /// Match the canvas backing store to its CSS size times the device
    /// pixel ratio.
    fn fit_canvas(&self) {
        let (width, height) = self.surface_size();
        if self.canvas.width() != width || self.canvas.height() != height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }
    }
}

impl FrameHost for CanvasHost {
    fn surface_size(&self) -> (u32, u32) {
        let ratio = self.pixel_ratio();
        let width = (f64::from(self.canvas.client_width()) * ratio).floor();
        let height = (f64::from(self.canvas.client_height()) * ratio).floor();
        (width as u32, height as u32)
    }

    fn pixel_ratio(&self) -> f64 {
        self.window.device_pixel_ratio()
    }

    fn request_frame(&self) {
        if let Some(callback) = self.callback.borrow().as_ref() {
            let _ = self
                .window
                .request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }
}

/// Start the spiral on the canvas with id `canvas_id`, using default
/// options.
///
/// # Errors
///
/// Rejects with a message if the canvas is missing or WebGPU/WebGL can't be
/// initialized.
#[wasm_bindgen]
pub async fn start(canvas_id: String) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    run(&canvas_id, Options::default())
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Start the spiral on the canvas with id `canvas_id`.
///
/// The frame loop keeps itself alive through the animation-frame callback
/// and runs until the page goes away.
///
/// # Errors
///
/// Returns [`PhylloError::Viewer`] if the canvas can't be found and the
/// driver's configuration error if the GPU can't be set up.
pub async fn run(canvas_id: &str, options: Options) -> Result<(), PhylloError> {
    let window = web_sys::window()
        .ok_or_else(|| PhylloError::Viewer("no global window".into()))?;
    let canvas = window
        .document()
        .and_then(|doc| doc.get_element_by_id(canvas_id))
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or_else(|| {
            PhylloError::Viewer(format!("no canvas with id '{canvas_id}'"))
        })?;

    let host = Rc::new(CanvasHost {
        window,
        canvas,
        callback: Rc::new(RefCell::new(None)),
    });
    host.fit_canvas();

    let mut driver = FrameDriver::new(
        wgpu::SurfaceTarget::Canvas(host.canvas.clone()),
        host.surface_size(),
        host.pixel_ratio(),
        options,
    )
    .await?;

    // host -> callback -> closure -> host: the cycle is the loop's lifetime.
    let frame_host = Rc::clone(&host);
    *host.callback.borrow_mut() =
        Some(Closure::new(move |timestamp: f64| {
            frame_host.fit_canvas();
            let _ = driver.frame(frame_host.as_ref(), timestamp);
        }));
    host.request_frame();

    Ok(())
}
