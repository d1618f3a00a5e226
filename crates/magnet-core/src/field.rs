//! The composition root: one grid, one pointer, one driver.
//!
//! `MagnetField` owns everything that changes over time so that several
//! independent fields can coexist and tests can drive one with a manual
//! clock. All methods run on the host's single event/frame timeline.

use crate::config::{ConfigError, MagnetConfig};
use crate::driver::{step_grid, DriverState, StepOutcome};
use crate::grid::{build_grid, teardown_grid, Grid};
use crate::pointer::{PointerInput, PointerState};
use crate::schedule::{FrameScheduler, ManualScheduler};
use crate::surface::Surface;
use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError<E> {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("surface error: {0:?}")]
    Surface(E),
}

pub struct MagnetField<S: Surface, F: FrameScheduler> {
    surface: S,
    scheduler: F,
    config: MagnetConfig,
    grid: Grid<S::Handle>,
    pointer: PointerState,
    state: DriverState,
    pending: Option<F::Handle>,
    viewport: Vec2,
    steps_this_run: u64,
}

impl<S: Surface, F: FrameScheduler> MagnetField<S, F> {
    /// Validate `config` and build the first grid for `viewport`. Starts `Idle`.
    pub fn new(
        mut surface: S,
        scheduler: F,
        config: MagnetConfig,
        viewport: Vec2,
    ) -> Result<Self, FieldError<S::Error>> {
        config.validate()?;
        let grid = build_grid(
            &mut surface,
            viewport.x,
            viewport.y,
            config.cell_size,
            &config.glyph,
            0,
        )
        .map_err(FieldError::Surface)?;
        Ok(Self {
            surface,
            scheduler,
            config,
            grid,
            pointer: PointerState::default(),
            state: DriverState::Idle,
            pending: None,
            viewport,
            steps_this_run: 0,
        })
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn grid(&self) -> &Grid<S::Handle> {
        &self.grid
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn config(&self) -> &MagnetConfig {
        &self.config
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    /// Record a new pointer position and make sure the driver is running.
    pub fn update_pointer(&mut self, position: Vec2) {
        self.pointer.update(position);
        self.request_run();
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.update_pointer(Vec2::new(x, y));
    }

    /// Only the first touch counts; an empty list changes nothing.
    pub fn touch_started(&mut self, touches: &[Vec2]) {
        self.handle_input(&PointerInput::TouchStart(touches.to_vec()));
    }

    pub fn handle_input(&mut self, input: &PointerInput) {
        if self.pointer.apply(input) {
            self.request_run();
        }
    }

    /// Replace the grid with one sized for the new viewport. A running driver
    /// keeps running with exactly one step pending.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), S::Error> {
        self.viewport = Vec2::new(width, height);
        let generation = self.grid.generation + 1;
        let old = std::mem::replace(
            &mut self.grid,
            Grid::empty(self.config.cell_size, generation),
        );
        teardown_grid(&mut self.surface, old);
        self.grid = build_grid(
            &mut self.surface,
            width,
            height,
            self.config.cell_size,
            &self.config.glyph,
            generation,
        )?;
        // the new markers have never seen the pointer
        self.pointer.mark_stale();
        if self.is_running() {
            if let Some(h) = self.pending.take() {
                self.scheduler.cancel_step(h);
            }
            self.schedule_next();
        }
        Ok(())
    }

    /// Run one scheduled step. A stale callback arriving while idle does nothing.
    pub fn step(&mut self) -> StepOutcome {
        if !self.is_running() {
            return StepOutcome::default();
        }
        let moved = self.pointer.moved();
        let outcome = step_grid(
            &mut self.grid,
            &mut self.surface,
            self.pointer.position,
            moved,
            &self.config,
        );
        self.pointer.commit_frame();
        self.steps_this_run += 1;

        if outcome.keep_running() {
            self.schedule_next();
        } else {
            if let Some(h) = self.pending.take() {
                self.scheduler.cancel_step(h);
            }
            self.state = DriverState::Idle;
            log::debug!("[driver] settled after {} steps", self.steps_this_run);
        }
        outcome
    }

    /// Tear down the grid and hand back the surface and scheduler.
    pub fn into_parts(mut self) -> (S, F) {
        if let Some(h) = self.pending.take() {
            self.scheduler.cancel_step(h);
        }
        teardown_grid(&mut self.surface, self.grid);
        (self.surface, self.scheduler)
    }

    fn request_run(&mut self) {
        if self.is_running() {
            return;
        }
        self.state = DriverState::Running;
        self.steps_this_run = 0;
        log::debug!("[driver] running");
        self.schedule_next();
    }

    fn schedule_next(&mut self) {
        self.pending = self.scheduler.schedule_step();
        if self.pending.is_none() {
            // nothing will call `step`, so allow the next trigger to retry
            log::warn!("[driver] host refused to schedule a step; going idle");
            self.state = DriverState::Idle;
        }
    }
}

impl<S: Surface> MagnetField<S, ManualScheduler> {
    /// Fire pending steps until the driver idles or `max_steps` have run.
    /// Returns the number of steps taken.
    pub fn pump(&mut self, max_steps: usize) -> usize {
        let mut n = 0;
        while n < max_steps && self.scheduler.fire() {
            self.step();
            n += 1;
        }
        n
    }
}
