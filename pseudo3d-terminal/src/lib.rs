/// Terminal front end for the pseudo-3D axes and grid
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use pseudo3d_core::{Projector, Scene, SceneConfig, ViewState};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::LineRenderer;

/// Radians per rotate key press
const ROTATE_STEP: f32 = 0.05;
/// Distance units per zoom key press
const ZOOM_STEP: f32 = 2.0;
/// Drag units per tilt key press, 5 degrees after drag sensitivity
const DRAG_STEP: f32 = 15.0;

const HELP: &str = "A/D=Rotate W/S=Distance I/J/K/L=Tilt P=Perspective G=Grid Q=Quit";

/// Main application struct for terminal rendering
pub struct TerminalApp {
    config: SceneConfig,
    scene: Scene,
    projector: Projector,
    view: ViewState,
    renderer: LineRenderer,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(config: SceneConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        log::debug!("Terminal size {}x{}", width, height);
        // Top row is the status line
        Ok(Self::with_size(config, width as usize, height.saturating_sub(1) as usize))
    }

    /// Build for a drawing area of `width` by `height` cells
    pub fn with_size(config: SceneConfig, width: usize, height: usize) -> Self {
        Self {
            scene: Scene::new(&config),
            projector: config.projector(),
            view: ViewState::from_config(&config),
            renderer: LineRenderer::new(width, height),
            config,
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            while event::poll(Duration::from_millis(0))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            self.render()?;

            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
            }
            KeyCode::Char('a') | KeyCode::Left => self.view.rotate_by(-ROTATE_STEP),
            KeyCode::Char('d') | KeyCode::Right => self.view.rotate_by(ROTATE_STEP),
            KeyCode::Char('w') | KeyCode::Up => self.view.zoom_by(-ZOOM_STEP),
            KeyCode::Char('s') | KeyCode::Down => self.view.zoom_by(ZOOM_STEP),
            // Tilt about X and Y, only visible when the config enables those axes
            KeyCode::Char('i') => self.view.drag(0.0, -DRAG_STEP),
            KeyCode::Char('k') => self.view.drag(0.0, DRAG_STEP),
            KeyCode::Char('j') => self.view.drag(-DRAG_STEP, 0.0),
            KeyCode::Char('l') => self.view.drag(DRAG_STEP, 0.0),
            KeyCode::Char('p') => {
                self.projector.perspective = !self.projector.perspective;
                let state = if self.projector.perspective { "on" } else { "off" };
                log::info!("Perspective {}", state);
            }
            KeyCode::Char('g') => self.toggle_grid(),
            _ => {}
        }
    }

    fn toggle_grid(&mut self) {
        if self.scene.grid.is_empty() {
            self.scene = Scene::new(&self.config);
        } else {
            self.scene.grid.clear();
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let lines = self.scene.project(&self.projector, &self.view);

        self.renderer.clear();
        self.renderer.render_lines(&lines);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 1))?;
        self.renderer.draw(&mut stdout)?;

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::CurrentLine),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Pseudo3D | FPS: {:.1} | angle {:.0}° distance {:.0} | {}",
                self.fps,
                self.view.rotation.z.to_degrees(),
                self.view.distance,
                HELP
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
