//! Error types for particle-box.
//!
//! Only the platform boundary can fail: window and event loop creation, and
//! GPU setup. The simulation itself has no error paths.

use std::fmt;

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter(wgpu::RequestAdapterError),
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
    /// The surface reports no texture format or no alpha mode for this adapter.
    IncompatibleSurface,
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter(e) => write!(f, "No compatible GPU adapter found ({}). Ensure your system has a GPU with Vulkan/Metal/DX12 support.", e),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
            GpuError::IncompatibleSurface => {
                write!(f, "The window surface is not supported by the selected GPU adapter")
            }
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::NoAdapter(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::IncompatibleSurface => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for GpuError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        GpuError::NoAdapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when running the simulation.
#[derive(Debug)]
pub enum SimulationError {
    /// Failed to create or run the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// A frame could not be drawn and the run cannot continue.
    Render(wgpu::SurfaceError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::EventLoop(e) => write!(f, "Event loop error: {}", e),
            SimulationError::Window(e) => write!(f, "Failed to create window: {}", e),
            SimulationError::Gpu(e) => write!(f, "GPU error: {}", e),
            SimulationError::Render(e) => write!(f, "Render error: {}", e),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::EventLoop(e) => Some(e),
            SimulationError::Window(e) => Some(e),
            SimulationError::Gpu(e) => Some(e),
            SimulationError::Render(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for SimulationError {
    fn from(e: winit::error::EventLoopError) -> Self {
        SimulationError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for SimulationError {
    fn from(e: winit::error::OsError) -> Self {
        SimulationError::Window(e)
    }
}

impl From<GpuError> for SimulationError {
    fn from(e: GpuError) -> Self {
        SimulationError::Gpu(e)
    }
}

impl From<wgpu::SurfaceError> for SimulationError {
    fn from(e: wgpu::SurfaceError) -> Self {
        SimulationError::Render(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_event_loop_error_display_and_source() {
        let err = SimulationError::from(winit::error::EventLoopError::ExitFailure(3));
        let msg = err.to_string();
        assert!(msg.starts_with("Event loop error"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_out_of_memory_is_a_render_error() {
        let err = SimulationError::from(wgpu::SurfaceError::OutOfMemory);
        assert!(matches!(err, SimulationError::Render(wgpu::SurfaceError::OutOfMemory)));
        assert!(err.to_string().starts_with("Render error"));

        let source = err.source().map(|s| s.to_string());
        assert_eq!(source, Some(wgpu::SurfaceError::OutOfMemory.to_string()));
    }

    #[test]
    fn test_incompatible_surface_display() {
        let err = SimulationError::from(GpuError::IncompatibleSurface);
        assert!(err.to_string().starts_with("GPU error"));
        assert!(err.to_string().contains("not supported"));

        let gpu_err = err.source().and_then(|s| s.downcast_ref::<GpuError>());
        assert!(matches!(gpu_err, Some(GpuError::IncompatibleSurface)));
        assert!(GpuError::IncompatibleSurface.source().is_none());
    }
}
