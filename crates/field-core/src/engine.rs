use crate::clock::ClockReading;
use crate::config::{validate_viewport, FieldParams};
use crate::constants::FRAME_MS;
use crate::error::FieldError;
use crate::force::{update_particle, FrameInputs};
use crate::layout::Layout;
use crate::particle::ParticleStore;
use crate::pointer::PointerTracker;
use crate::render::{render_pass, RenderSurface};
use crate::time_events::TimeEvents;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct FieldEngine {
    params: FieldParams,
    layout: Layout,
    store: ParticleStore,
    time_events: TimeEvents,
    pointer: PointerTracker,
    elapsed_ms: f64,
    resolved: bool,
    rng: StdRng,
}

impl FieldEngine {
    pub fn new(width: f32, height: f32, params: FieldParams) -> Result<Self, FieldError> {
        params.validate()?;
        validate_viewport(width, height)?;
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let layout = Layout::new(width, height, params.buffer, params.particle_count);
        let store = ParticleStore::generate(&layout, params.particle_count, &mut rng);
        log::info!(
            "[field] generated {} particles for {:.0}x{:.0} (step {:.3})",
            store.len(),
            width,
            height,
            layout.step
        );
        Ok(Self {
            params,
            layout,
            store,
            time_events: TimeEvents::new(),
            pointer: PointerTracker::new(),
            elapsed_ms: 0.0,
            resolved: false,
            rng,
        })
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), FieldError> {
        validate_viewport(width, height)?;
        self.layout = Layout::new(width, height, self.params.buffer, self.params.particle_count);
        self.store = ParticleStore::generate(&self.layout, self.params.particle_count, &mut self.rng);
        log::info!(
            "[resize] regenerated {} particles for {:.0}x{:.0}",
            self.store.len(),
            width,
            height
        );
        Ok(())
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.move_to(Vec2::new(x, y), self.resolved);
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.leave();
    }

    // Resolved latches: later frames passing false stay resolved.
    pub fn step(&mut self, clock: ClockReading, resolved: bool) {
        if resolved && !self.resolved {
            self.resolved = true;
            self.pointer.leave();
            log::info!("[field] resolved; freezing wave at {:.0} ms", self.elapsed_ms);
        }
        let frozen = self.resolved;
        if !frozen {
            self.elapsed_ms += FRAME_MS;
        }

        self.time_events.update(clock, frozen);
        self.pointer.step(frozen);

        let inputs = FrameInputs {
            elapsed_ms: self.elapsed_ms,
            second_pulse: self.time_events.second_pulse,
            minute_snap: self.time_events.minute_snap,
            hour_shift: self.time_events.hour_shift,
            resolved: frozen,
            pointer: self.pointer.lagged,
        };
        let layout = self.layout;
        for p in self.store.iter_mut() {
            update_particle(p, &layout, &inputs, &mut self.rng);
        }
    }

    pub fn render(&self, surface: &mut impl RenderSurface) {
        render_pass(&self.store, &self.layout, surface);
    }

    pub fn tick(&mut self, clock: ClockReading, resolved: bool, surface: &mut impl RenderSurface) {
        self.step(clock, resolved);
        self.render(surface);
    }

    pub fn particles(&self) -> &ParticleStore {
        &self.store
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn time_events(&self) -> &TimeEvents {
        &self.time_events
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}
