use std::cell::RefCell;
use std::rc::Rc;

use aura_core::{AuraConfig, AuraEngine, AuraRng, AuraSprite, FrameLoop};
use wasm_bindgen::prelude::*;
use web_sys::Window;

mod canvas;
mod console_log;
mod raf;

pub use canvas::{CanvasError, CanvasSurface};
pub use raf::{FrameCallback, RafScheduler};

/// Everything the frame closure touches, shared with the JS-facing handle.
struct AuraState {
    engine: AuraEngine,
    frame_loop: FrameLoop<RafScheduler>,
    surface: CanvasSurface,
}

#[wasm_bindgen(start)]
pub fn init() {
    console_log::init(log::LevelFilter::Info);
}

/// Change the console log level ("error", "warn", "info", "debug", "trace", "off").
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    console_log::init(console_log::parse_level(level));
}

/// Weather aura animating a `<canvas>` element.
#[wasm_bindgen]
pub struct AuraCanvas {
    window: Window,
    state: Rc<RefCell<AuraState>>,
    callback: FrameCallback,
    sprites: Vec<AuraSprite>,
}

#[wasm_bindgen]
impl AuraCanvas {
    /// Attach to the canvas with id `canvas_id`. Without a `seed` the
    /// particles are seeded from browser entropy.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, seed: Option<u32>) -> Result<AuraCanvas, JsValue> {
        Ok(Self::build(canvas_id, AuraConfig::default(), seed)?)
    }

    /// Like the constructor, with an `AuraConfig` given as JSON. Missing
    /// fields keep their defaults.
    #[wasm_bindgen]
    pub fn with_config(
        canvas_id: &str,
        config_json: &str,
        seed: Option<u32>,
    ) -> Result<AuraCanvas, JsValue> {
        let config: AuraConfig =
            serde_json::from_str(config_json).map_err(CanvasError::from)?;
        Ok(Self::build(canvas_id, config, seed)?)
    }

    /// Initial surface size; resizes the canvas backing store too.
    #[wasm_bindgen]
    pub fn configure(&mut self, width: i32, height: i32) {
        let mut state = self.state.borrow_mut();
        state.engine.configure(width, height);
        let size = state.engine.surface_size();
        state.surface.resize(size);
    }

    /// Resize the canvas and the wraparound bounds in one call.
    #[wasm_bindgen]
    pub fn resize(&mut self, width: i32, height: i32) {
        let mut state = self.state.borrow_mut();
        state.engine.resize(width, height);
        let size = state.engine.surface_size();
        state.surface.resize(size);
    }

    /// Resize to `window.innerWidth` x `window.innerHeight`.
    #[wasm_bindgen]
    pub fn fit_to_window(&mut self) {
        let dimension = |v: Result<JsValue, JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as i32
        };
        let width = dimension(self.window.inner_width());
        let height = dimension(self.window.inner_height());
        self.resize(width, height);
    }

    /// Spawn the particles and start the `requestAnimationFrame` loop.
    /// Calling it again does nothing; the loop runs for the page's lifetime.
    #[wasm_bindgen]
    pub fn start(&mut self) {
        if self.state.borrow().engine.is_running() {
            return;
        }

        let state = Rc::clone(&self.state);
        *self.callback.borrow_mut() = Some(Closure::new(move || {
            let mut guard = state.borrow_mut();
            let AuraState {
                engine,
                frame_loop,
                surface,
            } = &mut *guard;
            if let Err(err) = frame_loop.tick(engine, surface) {
                log::warn!("aura frame failed: {err:?}");
            }
        }));

        let mut guard = self.state.borrow_mut();
        let AuraState {
            engine, frame_loop, ..
        } = &mut *guard;
        frame_loop.start(engine);
    }

    /// Switch the palette for a weather condition tag ("Clear", "Rain", ...).
    /// Returns whether the particles were recolored.
    #[wasm_bindgen]
    pub fn set_condition(&mut self, tag: &str) -> bool {
        self.state.borrow_mut().engine.set_condition(tag)
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.state.borrow_mut().engine.reset();
    }

    /// Active condition tag; "default" for unknown or unset conditions.
    #[wasm_bindgen]
    pub fn condition(&self) -> String {
        self.state.borrow().engine.condition().tag().to_string()
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.state.borrow().engine.particles().len()
    }

    #[wasm_bindgen]
    pub fn frames(&self) -> u64 {
        self.state.borrow().frame_loop.frames()
    }

    /// Copy the pool into the sprite buffer and return the sprite count.
    #[wasm_bindgen]
    pub fn snapshot_sprites(&mut self) -> usize {
        self.state.borrow().engine.write_sprites(&mut self.sprites);
        self.sprites.len()
    }

    #[wasm_bindgen]
    pub fn sprite_buffer_ptr(&self) -> *const f32 {
        self.sprites.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn sprite_buffer_byte_length(&self) -> usize {
        bytemuck::cast_slice::<AuraSprite, u8>(&self.sprites).len()
    }
}

impl AuraCanvas {
    fn build(canvas_id: &str, config: AuraConfig, seed: Option<u32>) -> Result<Self, CanvasError> {
        let window = web_sys::window().ok_or(CanvasError::NoWindow)?;
        let document = window.document().ok_or(CanvasError::NoDocument)?;
        let surface = CanvasSurface::from_element_id(&document, canvas_id)?;

        let rng = match seed {
            Some(seed) => AuraRng::from_seed_u64(seed as u64),
            None => AuraRng::from_entropy(),
        };
        let engine = AuraEngine::new(config, rng)?;

        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let frame_loop = FrameLoop::new(RafScheduler::new(window.clone(), Rc::clone(&callback)));

        log::info!(
            "aura attached to #{canvas_id} ({} particles, seed {seed:?})",
            engine.config().particle_count
        );

        Ok(Self {
            window,
            state: Rc::new(RefCell::new(AuraState {
                engine,
                frame_loop,
                surface,
            })),
            callback,
            sprites: Vec::new(),
        })
    }
}
