/// Terminal player for orbiting wireframe graphs
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use fov3d_core::{edges, Fov3dError, Frame, Graph};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

pub mod config;
pub mod renderer;

pub use config::{BuiltinGraph, Cli, GraphSource, RenderConfig};
pub use renderer::Canvas;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] Fov3dError),

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

/// Load the graph a configuration points at
pub fn load_graph(source: &GraphSource) -> Result<Graph, AppError> {
    let graph = match source {
        GraphSource::Builtin(BuiltinGraph::Cube) => Graph::cube(),
        GraphSource::Builtin(BuiltinGraph::DoubleTetrahedron) => Graph::double_tetrahedron(),
        GraphSource::File(path) => edges::load_graph(path)?,
    };
    info!(
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        "graph ready"
    );
    Ok(graph)
}

/// Print frames one after the other as plain text
pub fn dump_frames<W: Write>(
    frames: &[Frame],
    width: usize,
    height: usize,
    writer: &mut W,
) -> io::Result<()> {
    let mut canvas = Canvas::new(width, height);
    for frame in frames {
        canvas.clear();
        canvas.render_frame(frame);
        let position = frame.observer.position;
        writeln!(
            writer,
            "frame {}/{} (observer {:.2}, {:.2}, {:.2}; {} nodes visible)",
            frame.index + 1,
            frames.len(),
            position.x,
            position.y,
            position.z,
            frame.nodes.len()
        )?;
        writer.write_all(canvas.to_text().as_bytes())?;
    }
    writer.flush()
}

/// Interactive player cycling through pre-rendered orbit frames
pub struct TerminalApp {
    frames: Vec<Frame>,
    canvas: Canvas,
    current: usize,
    paused: bool,
    running: bool,
    frame_time: Duration,
    last_tick: Instant,
}

impl TerminalApp {
    pub fn new(frames: Vec<Frame>, fps: u32) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            frames,
            canvas: Canvas::new(width as usize, height as usize),
            current: 0,
            paused: false,
            running: true,
            frame_time: Duration::from_millis(1000 / fps.max(1) as u64),
            last_tick: Instant::now(),
        })
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
        while self.running {
            let frame_start = Instant::now();

            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            self.update();
            self.render()?;

            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_time {
                std::thread::sleep(self.frame_time - elapsed);
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char(' ') => {
                    self.paused = !self.paused;
                }
                KeyCode::Right | KeyCode::Char('d') => self.step(1),
                KeyCode::Left | KeyCode::Char('a') => self.step(-1),
                _ => {}
            },
            Event::Resize(width, height) => {
                self.canvas = Canvas::new(width as usize, height as usize);
            }
            _ => {}
        }
        Ok(())
    }

    fn step(&mut self, delta: isize) {
        if self.frames.is_empty() {
            return;
        }
        let len = self.frames.len() as isize;
        self.current = (self.current as isize + delta).rem_euclid(len) as usize;
    }

    fn update(&mut self) {
        if !self.paused && self.last_tick.elapsed() >= self.frame_time {
            self.step(1);
            self.last_tick = Instant::now();
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.canvas.clear();
        let Some(frame) = self.frames.get(self.current) else {
            return Ok(());
        };
        self.canvas.render_frame(frame);
        if frame.is_blank() {
            debug!(frame = frame.index, "nothing in view");
        }

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.canvas.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "FOV3D | frame {}/{} | {} nodes | Controls: Space=Pause Left/Right=Step Q=Quit",
                self.current + 1,
                self.frames.len(),
                frame.nodes.len()
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
