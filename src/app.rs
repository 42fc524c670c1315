//! Editor window: winit event handling, GL context and the imgui frame.

use std::num::NonZeroU32;

use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, WindowSurface};
use glutin_winit::DisplayBuilder;
use imgui_glow_renderer::AutoRenderer;
use imgui_winit_support::{HiDpiMode, WinitPlatform};
use og_ir::CANVAS_PX;
use raw_window_handle::HasWindowHandle;
use tracing::{debug, info};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{Event, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::ui::{self, GuiState};

/// Room above the canvas for the toolbar rows.
const TOOLBAR_HEIGHT: f32 = 96.0;
/// Window padding around the canvas on each side.
const PADDING: f32 = 16.0;

/// Logical window size that fits the toolbar and the canvas at `scale`.
pub fn window_size(scale: f32) -> LogicalSize<f32> {
    let side = CANVAS_PX as f32 * scale;
    LogicalSize::new(side + 2.0 * PADDING, side + TOOLBAR_HEIGHT + 2.0 * PADDING)
}

/// Top-level event handler. The GUI state exists from startup; the window
/// and GL stack are created on the first `resumed`.
pub struct Editor {
    gui: GuiState,
    view: Option<View>,
}

impl Editor {
    pub fn new(gui: GuiState) -> Self {
        Self { gui, view: None }
    }
}

impl ApplicationHandler for Editor {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.view.is_none() {
            self.view = Some(View::open(event_loop, window_size(self.gui.scale)));
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(view) = &mut self.view else { return };
        view.forward(window_id, &event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => view.resize(size),
            WindowEvent::RedrawRequested => view.render(&mut self.gui),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(view) = &self.view {
            view.window.request_redraw();
        }
    }
}

/// Window, GL surface and the imgui stack drawing into it.
struct View {
    window: Window,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    imgui: imgui::Context,
    platform: WinitPlatform,
    renderer: AutoRenderer,
}

impl View {
    fn open(event_loop: &ActiveEventLoop, size: LogicalSize<f32>) -> Self {
        let mut imgui = imgui::Context::create();
        imgui.set_ini_filename(None);
        imgui.style_mut().use_dark_colors();
        imgui.fonts().add_font(&[imgui::FontSource::DefaultFontData {
            config: Some(imgui::FontConfig {
                size_pixels: 14.0,
                ..Default::default()
            }),
        }]);
        let mut platform = WinitPlatform::new(&mut imgui);

        let attributes = WindowAttributes::default()
            .with_inner_size(size)
            .with_resizable(false)
            .with_title("opgrid");
        let (window, config) = DisplayBuilder::new()
            .with_window_attributes(Some(attributes))
            .build(event_loop, ConfigTemplateBuilder::new(), |configs| {
                configs
                    .max_by_key(|c| c.num_samples())
                    .expect("display offers at least one GL config")
            })
            .expect("Failed to create GL window");
        let window = window.expect("display builder returns the window it was given");
        platform.attach_window(imgui.io_mut(), &window, HiDpiMode::Default);

        let (surface, context) = make_current(&window, &config);
        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|s| config.display().get_proc_address(s))
        };
        let renderer = AutoRenderer::new(gl, &mut imgui).expect("Failed to create imgui renderer");
        info!(width = size.width, height = size.height, "window opened");

        Self {
            window,
            surface,
            context,
            imgui,
            platform,
            renderer,
        }
    }

    fn forward(&mut self, window_id: WindowId, event: &WindowEvent) {
        let event: Event<()> = Event::WindowEvent {
            window_id,
            event: event.clone(),
        };
        self.platform.handle_event(self.imgui.io_mut(), &self.window, &event);
    }

    fn resize(&self, size: PhysicalSize<u32>) {
        if let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) {
            debug!(w = size.width, h = size.height, "resize");
            self.surface.resize(&self.context, w, h);
        }
    }

    fn render(&mut self, gui: &mut GuiState) {
        self.platform
            .prepare_frame(self.imgui.io_mut(), &self.window)
            .expect("prepare_frame failed");
        let frame = self.imgui.new_frame();
        ui::build_ui(frame, gui);
        self.platform.prepare_render(frame, &self.window);
        let draw_data = self.imgui.render();

        let background = gui.palette.background.to_f32();
        unsafe {
            let gl = self.renderer.gl_context();
            gl.clear_color(background[0], background[1], background[2], 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }
        self.renderer.render(draw_data).expect("imgui render failed");
        self.surface
            .swap_buffers(&self.context)
            .expect("swap_buffers failed");
    }
}

fn make_current(window: &Window, config: &Config) -> (Surface<WindowSurface>, PossiblyCurrentContext) {
    let handle = window
        .window_handle()
        .expect("Failed to get window handle")
        .as_raw();
    let display = config.display();

    let attributes = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
        .build(Some(handle));
    let context = unsafe {
        display
            .create_context(config, &attributes)
            .expect("Failed to create GL context")
    };

    let size = window.inner_size();
    let one = NonZeroU32::MIN;
    let surface_attributes = SurfaceAttributesBuilder::<WindowSurface>::new().build(
        handle,
        NonZeroU32::new(size.width).unwrap_or(one),
        NonZeroU32::new(size.height).unwrap_or(one),
    );
    let surface = unsafe {
        display
            .create_window_surface(config, &surface_attributes)
            .expect("Failed to create GL surface")
    };
    let context = context
        .make_current(&surface)
        .expect("Failed to make GL context current");

    (surface, context)
}
