//! Page handle: mounts the effects and owns their listeners and frame loop

use std::cell::RefCell;
use std::rc::Rc;

use folio_fx::starfield::ParticleRng;
use folio_fx::{
    AnimationClock, AnimationHost, Carousel, FolioError, GpuStarRenderer, PageConfig,
    PointerState, Starfield, Theme, Viewport,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom::DomCarouselSurface;
use crate::frame::FrameLoop;
use crate::listener::EventListener;
use crate::time::PerformanceTime;
use crate::util::{body_theme, current_viewport, log, to_js};

struct PageState {
    host: AnimationHost<GpuStarRenderer>,
    carousels: Vec<Carousel<DomCarouselSurface>>,
}

/// Mounted page effects
#[wasm_bindgen]
pub struct Portfolio {
    state: Rc<RefCell<PageState>>,
    config: PageConfig,
    listeners: Vec<EventListener>,
    frame_loop: Option<FrameLoop>,
}

/// Mount the starfields and carousels named by `config_json` (or the
/// defaults) and start animating. Missing page elements are skipped.
#[wasm_bindgen]
pub async fn mount(config_json: Option<String>) -> Result<Portfolio, JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let config = PageConfig::from_optional_json(config_json.as_deref()).map_err(to_js)?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let viewport = current_viewport(&window);
    let theme = body_theme(&document);

    log(&format!(
        "[folio] Mounting at {}x{} ({:?} theme)",
        viewport.width(),
        viewport.height(),
        theme
    ));

    let host = mount_starfields(&document, &config, viewport, theme).await;
    let carousels = mount_carousels(&document, &config, viewport);
    let state = Rc::new(RefCell::new(PageState { host, carousels }));
    let pointer = PointerState::new();

    let mut listeners = Vec::new();
    {
        let pointer = pointer.clone();
        listeners.push(EventListener::attach(&document, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<web_sys::MouseEvent>() {
                pointer.set(event.client_x() as f32, event.client_y() as f32);
            }
        })?);
    }
    {
        let state = state.clone();
        let resize_window = window.clone();
        listeners.push(EventListener::attach(&window, "resize", move |_| {
            let viewport = current_viewport(&resize_window);
            let mut state = state.borrow_mut();
            state.host.broadcast_resize(viewport);
            for carousel in &mut state.carousels {
                carousel.on_resize(viewport.width());
            }
        })?);
    }
    listeners.extend(attach_carousel_buttons(&state)?);

    let clock = AnimationClock::start(PerformanceTime::new(&window));
    let frame_state = state.clone();
    let frame_loop = FrameLoop::start(window, move || {
        let report = frame_state.borrow_mut().host.tick_from(&clock, &pointer);
        for (id, e) in report.skipped {
            if let FolioError::Gpu(_) = e {
                log(&format!("[folio] Starfield {} skipped a frame: {}", id, e));
            }
        }
    })?;

    let portfolio = Portfolio {
        state,
        config,
        listeners,
        frame_loop: Some(frame_loop),
    };
    log(&format!(
        "[folio] Mounted {} starfield(s), {} carousel(s)",
        portfolio.starfield_count(),
        portfolio.carousel_count()
    ));
    Ok(portfolio)
}

async fn mount_starfields(
    document: &web_sys::Document,
    config: &PageConfig,
    viewport: Viewport,
    theme: Theme,
) -> AnimationHost<GpuStarRenderer> {
    let mut host = AnimationHost::new();
    if config.starfields.is_empty() {
        return host;
    }

    let mut rng = ParticleRng::from_entropy().unwrap_or_else(|e| {
        log(&format!("[folio] {}, seeding particles from the clock", e));
        ParticleRng::seeded(js_sys::Date::now().to_bits())
    });

    for id in &config.starfields {
        let canvas = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok());
        let Some(canvas) = canvas else {
            log(&format!("[folio] No canvas #{}, skipping starfield", id));
            continue;
        };

        match GpuStarRenderer::new(canvas).await {
            Ok(renderer) => {
                let field = Starfield::new(
                    id.as_str(),
                    renderer,
                    &config.starfield,
                    viewport,
                    theme,
                    &mut rng,
                );
                let field_id = host.register(field);
                log(&format!("[folio] Starfield {} mounted on #{}", field_id, id));
            }
            Err(e) => log(&format!("[folio] Starfield #{} unavailable: {}", id, e)),
        }
    }
    host
}

fn mount_carousels(
    document: &web_sys::Document,
    config: &PageConfig,
    viewport: Viewport,
) -> Vec<Carousel<DomCarouselSurface>> {
    config
        .carousels
        .iter()
        .filter_map(|id| match DomCarouselSurface::find(document, id, &config.carousel) {
            Some(surface) => Some(Carousel::new(surface, viewport.width())),
            None => {
                log(&format!("[folio] Carousel #{} incomplete, skipping", id));
                None
            }
        })
        .collect()
}

fn attach_carousel_buttons(
    state: &Rc<RefCell<PageState>>,
) -> Result<Vec<EventListener>, JsValue> {
    let page = state.borrow();
    let mut listeners = Vec::with_capacity(page.carousels.len() * 2);

    for (i, carousel) in page.carousels.iter().enumerate() {
        let surface = carousel.surface();

        let next_state = state.clone();
        listeners.push(EventListener::attach(surface.next_button(), "click", move |_| {
            if let Some(carousel) = next_state.borrow_mut().carousels.get_mut(i) {
                carousel.next();
            }
        })?);

        let prev_state = state.clone();
        listeners.push(EventListener::attach(surface.prev_button(), "click", move |_| {
            if let Some(carousel) = prev_state.borrow_mut().carousels.get_mut(i) {
                carousel.previous();
            }
        })?);
    }
    Ok(listeners)
}

#[wasm_bindgen]
impl Portfolio {
    /// Recolor every starfield for the light or dark theme
    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&self, is_light: bool) {
        let theme = Theme::from_is_light(is_light);
        self.state.borrow_mut().host.broadcast_theme(theme);
    }

    #[wasm_bindgen(js_name = starfieldCount)]
    pub fn starfield_count(&self) -> usize {
        self.state.borrow().host.len()
    }

    #[wasm_bindgen(js_name = carouselCount)]
    pub fn carousel_count(&self) -> usize {
        self.state.borrow().carousels.len()
    }

    /// Effective configuration as JSON
    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> String {
        serde_json::to_string(&self.config).unwrap_or_else(|_| "{}".to_string())
    }

    /// Whether the frame loop is still running
    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.frame_loop.as_ref().is_some_and(|l| l.is_running())
    }

    /// Stop animating, remove every listener and release GPU resources
    pub fn dispose(&mut self) {
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.stop();
        }
        let listeners = self.listeners.len();
        self.listeners.clear();

        let mut state = self.state.borrow_mut();
        state.host.dispose();
        state.carousels.clear();
        log(&format!("[folio] Disposed ({} listeners removed)", listeners));
    }
}
