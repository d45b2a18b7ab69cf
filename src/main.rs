#![allow(clippy::too_many_lines)] // main() is long but well-structured

//! Breathing flower simulator.
//!
//! Opens a 2× scaled SDL window showing the flower, its control panel and a
//! header with an FPS counter, and runs a fixed-rate frame loop.
//!
//! # Controls (Simulator Mode)
//!
//! | Key | Action |
//! |-----|--------|
//! | `Left` / `Right` | Hold to drag the petal slider, release to snap |
//! | `Up` / `Down` | Breath duration ±0.1 s |
//! | `Space` / `A` | Breath |
//! | `X` | Toggle FPS display on/off |
//!
//! # Frame
//!
//! | Step | Work |
//! |------|------|
//! | Events | Keys become [`Command`]s applied to the model |
//! | Drag | A held arrow key moves the petal count continuously |
//! | Tick | Due breath steps fire |
//! | Animate | Tweens retarget to the new snapshot |
//! | Draw | Flower while it animates, header and panel when dirty |
//! | Present | Canvas copied to the window, then sleep to ~50 FPS |

use core::fmt::Write;
use std::thread;
use std::time::{Duration, Instant};

use breath_flower::animations::FlowerAnimator;
use breath_flower::breath::Trigger;
use breath_flower::canvas::Canvas;
use breath_flower::colors::BLACK;
use breath_flower::config::{FRAME_TIME, LOG_LEVEL, SCREEN_HEIGHT, SCREEN_WIDTH, Settings};
use breath_flower::input::{Command, Controls};
use breath_flower::profiling::{EventLog, LOG_LINE_LENGTH, ProfilingMetrics};
use breath_flower::render::{PanelState, PanelValues, render};
use breath_flower::state::ScreenState;
use breath_flower::widgets::{draw_flower, draw_header, draw_panel};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use tracing::{debug, error, info};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LOG_LEVEL)
        .with_target(false)
        .init();

    let settings = Settings::default();
    let mut screen = match ScreenState::new(&settings) {
        Ok(screen) => screen,
        Err(err) => {
            error!(%err, "invalid settings");
            return;
        }
    };

    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Breathe", &output_settings);
    display.clear(BLACK).ok();

    // Off-screen framebuffer; petals blend against it
    let mut canvas = Canvas::new(display.size());

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    let start = Instant::now();
    let mut last_frame = Duration::ZERO;

    let mut animator = FlowerAnimator::new(&screen.snapshot());
    let mut controls = Controls::new();

    // FPS counter state (X toggles)
    let mut show_fps = true;

    // Conditional redraw tracking for flower, header and panel
    let mut panel_state = PanelState::new();

    let mut metrics = ProfilingMetrics::new();
    let mut event_log = EventLog::new();
    event_log.push("Ready");
    info!(
        petals = settings.petal_count,
        breath = settings.breath_duration,
        reentry = ?settings.reentry,
        "breath flower started"
    );

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();
        let now = start.elapsed();
        let dt = now.saturating_sub(last_frame).as_secs_f32();
        last_frame = now;

        for ev in window.events() {
            let command = match ev {
                SimulatorEvent::Quit => {
                    info!(
                        frames = metrics.total_frames,
                        min_us = metrics.frame_time_min_us,
                        max_us = metrics.frame_time_max_us,
                        header_redraws = metrics.header_redraws,
                        panel_redraws = metrics.panel_redraws,
                        "window closed"
                    );
                    return;
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => controls.key_down(keycode, repeat),
                SimulatorEvent::KeyUp { keycode, .. } => controls.key_up(keycode),
                _ => None,
            };
            if let Some(command) = command {
                handle_command(command, &mut screen, &mut event_log, &mut show_fps, now);
            }
        }

        // Held arrow key: continuous slider drag
        if controls.is_dragging() {
            let value = screen.petal_count().get() + controls.drag_delta(dt);
            screen.drag_petals(value);
        }

        if screen.tick(now).finished {
            event_log.push("Breath done");
        }

        // ======================================================================
        // Animate and Draw
        // ======================================================================

        let snapshot = screen.snapshot();
        animator.sync(&snapshot, now);
        if panel_state.check_flower_dirty(animator.is_animating(now)) {
            let frame = render(&animator.pose(now), &settings);
            draw_flower(&mut canvas, &frame);
        }

        let fps = metrics.fps();
        if panel_state.check_header_dirty(show_fps, fps) {
            draw_header(&mut canvas, show_fps, fps);
            metrics.inc_header_redraws();
        }

        let values = PanelValues::new(
            snapshot.petal_count,
            snapshot.breath_duration.tenths(),
            snapshot.breathing,
            event_log.revision(),
        );
        if panel_state.check_panel_dirty(values) {
            draw_panel(&mut canvas, &snapshot, &event_log);
            metrics.inc_panel_redraws();
        }

        canvas.present(&mut display).ok();
        let render_time = frame_start.elapsed();

        panel_state.end_frame();
        window.update(&display);

        // Sleep to maintain target frame rate (~50 FPS)
        let pre_sleep = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(pre_sleep) {
            thread::sleep(remaining);
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);

        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
        if metrics.is_report_frame() {
            debug!(
                fps = metrics.fps(),
                frame_us = metrics.frame_time_us,
                avg_us = metrics.frame_time_avg_us(),
                min_us = metrics.frame_time_min_us,
                max_us = metrics.frame_time_max_us,
                render_us = metrics.render_time_us,
                sleep_us = metrics.sleep_time_us,
                header_redraws = metrics.header_redraws,
                panel_redraws = metrics.panel_redraws,
                "frame stats"
            );
        }
    }
}

/// Apply one input command to the model and log it.
fn handle_command(
    command: Command,
    screen: &mut ScreenState,
    log: &mut EventLog,
    show_fps: &mut bool,
    now: Duration,
) {
    debug!(?command, "input");
    let mut line: String<LOG_LINE_LENGTH> = String::new();

    match command {
        Command::Breathe => {
            let seconds = screen.breath_duration().seconds();
            let _ = match screen.breathe(now) {
                Trigger::Started => write!(line, "Breath {seconds:.1}s"),
                Trigger::Restarted => write!(line, "Restart {seconds:.1}s"),
                Trigger::Overlapped => write!(line, "Overlap {seconds:.1}s"),
                Trigger::Ignored => write!(line, "Busy, ignored"),
            };
        }
        Command::ToggleFps => {
            *show_fps = !*show_fps;
            let _ = write!(line, "FPS: {}", if *show_fps { "ON" } else { "OFF" });
        }
        Command::StepBreath(steps) => {
            screen.step_breath_duration(steps);
        }
        Command::EndPetalDrag => {
            let count = screen.end_petal_drag();
            let _ = write!(line, "Petals: {}", count.whole());
        }
    }

    if !line.is_empty() {
        log.push(&line);
    }
}
