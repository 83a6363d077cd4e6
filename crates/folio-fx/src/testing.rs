//! In-memory backends for testing and headless previews
//!
//! [`RecordingRenderer`] stands in for the GPU renderer and
//! [`MemorySurface`] for a carousel's DOM. Neither draws anything; they
//! record what the engines asked for.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::carousel::{CarouselLayout, CarouselSurface};
use crate::error::FolioError;
use crate::starfield::{ParticleCloud, StarFrame, StarRenderer};

/// Calls observed by a [`RecordingRenderer`]
#[derive(Debug, Default)]
pub struct RenderLog {
    /// Number of particles in the last upload
    pub uploaded_particles: usize,
    /// `(width, height, pixel_ratio)` per resize
    pub resizes: Vec<(f32, f32, f32)>,
    /// Frames successfully rendered
    pub frames: Vec<StarFrame>,
    pub disposed: bool,
    fail_remaining: usize,
}

/// Renderer that records calls; clones share one log
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    log: Rc<RefCell<RenderLog>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> Ref<'_, RenderLog> {
        self.log.borrow()
    }

    /// Make the next `n` renders fail with a surface error
    pub fn fail_next_frames(&self, n: usize) {
        self.log.borrow_mut().fail_remaining = n;
    }
}

impl StarRenderer for RecordingRenderer {
    fn upload_particles(&mut self, cloud: &ParticleCloud) {
        self.log.borrow_mut().uploaded_particles = cloud.len();
    }

    fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.log.borrow_mut().resizes.push((width, height, pixel_ratio));
    }

    fn render(&mut self, frame: &StarFrame) -> Result<(), FolioError> {
        let mut log = self.log.borrow_mut();
        if log.fail_remaining > 0 {
            log.fail_remaining -= 1;
            return Err(FolioError::Surface("surface lost, skip frame".to_string()));
        }
        log.frames.push(frame.clone());
        Ok(())
    }

    fn dispose(&mut self) {
        self.log.borrow_mut().disposed = true;
    }
}

/// Carousel surface with a fixed container width and slide count
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    pub container_width: f32,
    pub slide_count: usize,
    /// Every layout applied, oldest first
    pub applied: Vec<CarouselLayout>,
}

impl MemorySurface {
    pub fn new(container_width: f32, slide_count: usize) -> Self {
        Self {
            container_width,
            slide_count,
            applied: Vec::new(),
        }
    }

    /// Most recently applied layout
    pub fn last(&self) -> Option<&CarouselLayout> {
        self.applied.last()
    }
}

impl CarouselSurface for MemorySurface {
    fn container_width(&self) -> f32 {
        self.container_width
    }

    fn slide_count(&self) -> usize {
        self.slide_count
    }

    fn apply(&mut self, layout: &CarouselLayout) {
        self.applied.push(layout.clone());
    }
}
