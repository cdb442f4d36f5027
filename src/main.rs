//! Bounce Ball entry point
//!
//! On the web this mounts the widget into the page and drives it from a
//! 16 ms interval timer. Natively it runs a headless session and prints a
//! JSON summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_widget {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, MouseEvent, Window};

    use bounce_ball::consts::TICK_INTERVAL_MS;
    use bounce_ball::platform::WindowViewport;
    use bounce_ball::{RenderView, Widget};

    const SURFACE_STYLE: &str =
        "width:100vw;height:100vh;position:relative;overflow:hidden;background-color:white;";
    const INSTRUCTIONS_STYLE: &str = "position:absolute;top:50%;left:50%;\
        transform:translate(-50%,-50%);color:#00000088;font-size:24px;\
        text-align:center;user-select:none;";

    /// Recurring timer, cleared when dropped
    struct IntervalTimer {
        window: Window,
        handle: i32,
        _callback: Closure<dyn FnMut()>,
    }

    impl IntervalTimer {
        fn start(window: &Window, period_ms: i32, callback: Closure<dyn FnMut()>) -> Result<Self, JsValue> {
            let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period_ms,
            )?;
            Ok(Self {
                window: window.clone(),
                handle,
                _callback: callback,
            })
        }
    }

    impl Drop for IntervalTimer {
        fn drop(&mut self) {
            self.window.clear_interval_with_handle(self.handle);
        }
    }

    /// DOM nodes the widget draws into
    #[derive(Clone)]
    struct Surface {
        root: Element,
        ball: Element,
        instructions: Element,
    }

    impl Surface {
        fn create(document: &Document, parent: &Element) -> Result<Self, JsValue> {
            let root = document.create_element("div")?;
            root.set_id("canvas");
            root.set_attribute("style", SURFACE_STYLE)?;

            let ball = document.create_element("div")?;
            ball.set_id("ball");

            let instructions = document.create_element("div")?;
            instructions.set_id("instructions");
            instructions.set_text_content(Some("Click to launch the ball!"));

            root.append_child(&ball)?;
            root.append_child(&instructions)?;
            parent.append_child(&root)?;

            Ok(Self {
                root,
                ball,
                instructions,
            })
        }

        /// Project the view onto the DOM
        fn render(&self, view: &RenderView) {
            let ball_style = format!(
                "position:absolute;left:{}px;top:{}px;width:{d}px;height:{d}px;\
                 border-radius:50%;background:radial-gradient(circle at 35% 35%,#e6f570,#b5cc18);\
                 box-shadow:inset 0px 0px 14px rgba(0,0,0,0.5);",
                view.left,
                view.top,
                d = view.diameter,
            );
            let _ = self.ball.set_attribute("style", &ball_style);

            let display = if view.instructions_visible { "" } else { "display:none;" };
            let _ = self
                .instructions
                .set_attribute("style", &format!("{INSTRUCTIONS_STYLE}{display}"));
        }
    }

    /// A live widget: state, DOM and timer. Dropping it unmounts everything.
    struct Mounted {
        surface: Surface,
        click: Closure<dyn FnMut(MouseEvent)>,
        _timer: IntervalTimer,
    }

    impl Drop for Mounted {
        fn drop(&mut self) {
            let _ = self
                .surface
                .root
                .remove_event_listener_with_callback("click", self.click.as_ref().unchecked_ref());
            self.surface.root.remove();
            log::info!("Bounce Ball unmounted");
        }
    }

    fn mount(window: &Window, parent: &Element) -> Result<Mounted, JsValue> {
        let document = window.document().expect("no document");
        let surface = Surface::create(&document, parent)?;
        let widget = Rc::new(RefCell::new(Widget::new(WindowViewport)));
        surface.render(&widget.borrow().view());

        let click = {
            let widget = widget.clone();
            let root = surface.root.clone();
            Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = root.get_bounding_client_rect();
                let x = event.client_x() as f64 - rect.left();
                let y = event.client_y() as f64 - rect.top();
                widget.borrow_mut().click(x as f32, y as f32);
            })
        };
        surface
            .root
            .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;

        let tick = {
            let view = surface.clone();
            Closure::<dyn FnMut()>::new(move || {
                let mut w = widget.borrow_mut();
                w.tick();
                view.render(&w.view());
            })
        };
        let timer = IntervalTimer::start(window, TICK_INTERVAL_MS, tick)?;

        Ok(Mounted {
            surface,
            click,
            _timer: timer,
        })
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bounce Ball starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let body: Element = document.body().expect("no body").into();

        let mut mounted = match mount(&window, &body) {
            Ok(m) => Some(m),
            Err(e) => {
                log::error!("Failed to mount widget: {:?}", e);
                return;
            }
        };

        // Leaving the page unmounts the widget and releases its timer
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            mounted.take();
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();

        log::info!("Bounce Ball running!");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_widget::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bounce Ball (native) starting...");
    log::info!("Native mode runs a headless session - use `trunk serve` for the web widget");

    match headless::run() {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to encode summary: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use bounce_ball::{BallState, PhysicsParams, Viewport, Widget};
    use serde::Serialize;

    const VIEWPORT: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };
    const TARGET: (f32, f32) = (760.0, 40.0);
    /// Stop even if the ball is still moving (about a minute at 60 Hz)
    const MAX_TICKS: u64 = 3600;

    #[derive(Serialize)]
    struct Summary {
        viewport: Viewport,
        params: PhysicsParams,
        target: (f32, f32),
        ticks: u64,
        bounces: u64,
        at_rest: bool,
        ball: BallState,
    }

    /// Launch once, tick until rest, and describe the run as JSON
    pub fn run() -> serde_json::Result<String> {
        let mut widget = Widget::new(|| VIEWPORT);
        widget.click(TARGET.0, TARGET.1);

        while widget.ball().is_moving && widget.ticks() < MAX_TICKS {
            widget.tick();
        }

        let summary = Summary {
            viewport: VIEWPORT,
            params: *widget.params(),
            target: TARGET,
            ticks: widget.ticks(),
            bounces: widget.bounces(),
            at_rest: !widget.ball().is_moving,
            ball: widget.ball(),
        };
        serde_json::to_string_pretty(&summary)
    }
}
