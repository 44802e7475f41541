//! Starfield entry point
//!
//! On the web this sets up the canvas and runs the animation loop. Natively it
//! runs the scene headless and reports what it drew.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

    use starfield::clock::{FPS_LOG_INTERVAL_FRAMES, FpsCounter};
    use starfield::renderer::CanvasSurface;
    use starfield::{Scene, Settings, Viewport};

    /// Canvas element the scene draws into
    const CANVAS_ID: &str = "spaceCanvas";

    /// Everything the animation loop needs between frames
    struct App {
        scene: Scene,
        surface: CanvasSurface,
        canvas: HtmlCanvasElement,
        fps: FpsCounter,
    }

    impl App {
        /// Match the canvas backing store to the window
        fn resize(&mut self, width: u32, height: u32) {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.scene.resize(width as f32, height as f32);
        }

        fn frame(&mut self, time: f64) {
            self.scene.frame(&mut self.surface);

            let fps = self.fps.record(time);
            if self.scene.ticks % FPS_LOG_INTERVAL_FRAMES == 0 {
                log::info!(
                    "frame {}: {} fps, {} particles",
                    self.scene.ticks,
                    fps,
                    self.scene.particles().len()
                );
            }
        }
    }

    fn viewport_size(window: &Window) -> (u32, u32) {
        let dim = |v: Result<JsValue, JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
        };
        (dim(window.inner_width()), dim(window.inner_height()))
    }

    fn find_or_create_canvas(document: &Document) -> Result<HtmlCanvasElement, JsValue> {
        if let Some(el) = document.get_element_by_id(CANVAS_ID) {
            return el
                .dyn_into::<HtmlCanvasElement>()
                .map_err(|_| JsValue::from_str("#spaceCanvas is not a <canvas>"));
        }

        log::info!("No #{} element, creating one", CANVAS_ID);
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_id(CANVAS_ID);
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no <body>"))?;
        body.append_child(&canvas)?;
        Ok(canvas)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Starfield starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas = find_or_create_canvas(&document)?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        // URL parameters override stored settings
        let mut settings = Settings::load();
        let query = window.location().search().unwrap_or_default();
        let overrides = settings.apply_query(&query);
        if overrides.changed {
            settings.save();
        }
        let seed = overrides.seed.unwrap_or_else(|| js_sys::Date::now() as u64);

        let (width, height) = viewport_size(&window);
        canvas.set_width(width);
        canvas.set_height(height);

        let scene = Scene::new(seed, Viewport::new(width as f32, height as f32), &settings);
        let app = Rc::new(RefCell::new(App {
            scene,
            surface: CanvasSurface::new(ctx),
            canvas,
            fps: FpsCounter::new(),
        }));

        setup_resize_handler(&window, app.clone())?;
        request_animation_frame(app);

        log::info!("Starfield running ({} quality)", settings.quality.as_str());
        Ok(())
    }

    fn setup_resize_handler(window: &Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let win = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = viewport_size(&win);
            app.borrow_mut().resize(width, height);
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, stopping animation");
            return;
        };
        let callback = Closure::once_into_js(move |time: f64| animate(app, time));
        if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }

    fn animate(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    web::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;
    use std::process::ExitCode;
    use std::time::{Instant, SystemTime, UNIX_EPOCH};

    use clap::Parser;

    use starfield::renderer::{DrawCommand, RecordingSurface};
    use starfield::{CelestialKind, QualityPreset, Scene, Settings, Viewport};

    /// Run the starfield scene without a window
    #[derive(Parser, Debug)]
    #[command(name = "starfield", about = "Starfield (headless)")]
    pub struct CliArgs {
        /// Ticks to simulate; the last one is recorded
        #[arg(long, default_value_t = 600)]
        pub ticks: u64,

        /// RNG seed (defaults to the current time)
        #[arg(long)]
        pub seed: Option<u64>,

        /// Viewport width in pixels
        #[arg(long, default_value_t = 800.0)]
        pub width: f32,

        /// Viewport height in pixels
        #[arg(long, default_value_t = 600.0)]
        pub height: f32,

        /// Quality preset (low, medium, high)
        #[arg(long)]
        pub quality: Option<String>,

        /// Settings JSON file
        #[arg(long)]
        pub settings: Option<PathBuf>,

        /// Print the final scene as JSON
        #[arg(long)]
        pub dump: bool,
    }

    pub fn run() -> ExitCode {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        let args = CliArgs::parse();

        log::info!("Starfield (headless) starting...");

        let mut settings = match &args.settings {
            Some(path) => Settings::load_from(path),
            None => Settings::load(),
        };
        if let Some(ref name) = args.quality {
            match QualityPreset::from_str(name) {
                Some(preset) => settings.apply_preset(preset),
                None => {
                    log::error!("Unknown quality preset {:?}", name);
                    return ExitCode::FAILURE;
                }
            }
        }

        let seed = args.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });

        let viewport = Viewport::new(args.width.max(0.0), args.height.max(0.0));
        let mut scene = Scene::new(seed, viewport, &settings);

        let started = Instant::now();
        for _ in 1..args.ticks {
            scene.step();
        }
        let mut surface = RecordingSurface::new();
        if args.ticks > 0 {
            scene.frame(&mut surface);
        }
        let elapsed = started.elapsed();

        log::info!(
            "{} ticks in {:.1?} ({} particles live, cap {})",
            scene.ticks,
            elapsed,
            scene.particles().len(),
            scene.max_particles()
        );
        for kind in CelestialKind::ALL {
            let count = scene.objects().iter().filter(|o| o.kind == kind).count();
            log::info!("  {:<8} x{}", kind.as_str(), count);
        }
        let strokes = surface
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeCircle { .. }))
            .count();
        log::info!(
            "Last frame: {} draw calls ({} fills, {} strokes)",
            surface.commands.len(),
            surface.fill_circles().count(),
            strokes
        );
        if !surface.is_neutral() {
            log::warn!("Paint state not restored after frame: {:?}", surface.state());
        }

        if args.dump {
            match serde_json::to_string_pretty(&scene.snapshot()) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    log::error!("Failed to serialize scene: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }

        ExitCode::SUCCESS
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
