//! Window, event loop and the per-frame driver.

use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::{StartCause, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::config::{FRAME_DELAY, TITLE_REFRESH_FRAMES, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::error::SimulationError;
use crate::fps::FpsCounter;
use crate::gpu::GpuState;
use crate::input::Input;
use crate::scene::Scene;

/// Open the window and run until it is closed.
///
/// Blocks the calling thread. Returns the first platform error hit while
/// running, if any.
pub fn run(seed: u64) -> Result<(), SimulationError> {
    log::info!("Seeding particles with {}", seed);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(Scene::new(seed));
    event_loop.run_app(&mut app)?;

    app.into_result()
}

/// How a frame continues after the surface failed to produce a texture.
#[derive(Debug)]
enum SurfaceRecovery {
    Reconfigure,
    Skip(wgpu::SurfaceError),
    Abort(SimulationError),
}

impl SurfaceRecovery {
    fn for_error(err: wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceRecovery::Reconfigure,
            wgpu::SurfaceError::OutOfMemory => SurfaceRecovery::Abort(err.into()),
            _ => SurfaceRecovery::Skip(err),
        }
    }
}

struct App {
    // Dropped before `window`.
    gpu_state: Option<GpuState>,
    window: Option<Arc<Window>>,
    scene: Scene,
    input: Input,
    fps: FpsCounter,
    error: Option<SimulationError>,
}

impl App {
    fn new(scene: Scene) -> Self {
        Self {
            gpu_state: None,
            window: None,
            scene,
            input: Input::new(),
            fps: FpsCounter::new(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: SimulationError) {
        self.error = Some(err);
        event_loop.exit();
    }

    /// Outcome of a finished event loop: the recorded failure, if any.
    fn into_result(self) -> Result<(), SimulationError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gpu_state) = &mut self.gpu_state else {
            return;
        };

        self.scene.advance(self.input.take_pressed());

        if let Err(e) = gpu_state.render(&self.scene) {
            match SurfaceRecovery::for_error(e) {
                SurfaceRecovery::Reconfigure => gpu_state.reconfigure(),
                SurfaceRecovery::Skip(e) => log::warn!("Render error: {:?}", e),
                SurfaceRecovery::Abort(err) => return self.fail(event_loop, err),
            }
        }

        self.fps.tick();
        if self.fps.frames() % TITLE_REFRESH_FRAMES == 0 {
            log::debug!("frame {} at {:.1} FPS", self.fps.frames(), self.fps.fps());
            if let Some(window) = &self.window {
                window.set_title(&format!("{} - {:.0} FPS", WINDOW_TITLE, self.fps.fps()));
            }
        }

        // Coarse pacing: wait a fixed delay after the work is done.
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + FRAME_DELAY));
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false);

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };
        self.window = Some(window.clone());

        match pollster::block_on(GpuState::new(window.clone(), self.scene.particles.len())) {
            Ok(gpu_state) => self.gpu_state = Some(gpu_state),
            Err(e) => return self.fail(event_loop, e.into()),
        }

        log::info!("Window open, simulating {} particles", self.scene.particles.len());
        window.request_redraw();
    }

    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput { .. } => {
                self.input.handle_event(&event);
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Graphics context first, then the window.
        self.gpu_state.take();
        self.window.take();
        log::info!("Shut down after {} frames", self.fps.frames());
    }
}
