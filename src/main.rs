//! Terminal runner (default binary).
//!
//! Fixed 16ms frame loop: render, poll input until the next tick, then
//! advance the game clock by the real elapsed time.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use falling_blocks::audio::MusicPlayer;
use falling_blocks::config::{Config, Launch, USAGE};
use falling_blocks::core::{GameSnapshot, GameState};
use falling_blocks::input::{handle_key_event, should_quit, KeyCommand};
use falling_blocks::term::{FrameBuffer, GameView, Hud, TerminalRenderer, Viewport};
use falling_blocks::types::TICK_MS;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::load(&args) {
        Ok(Launch::Play(config)) => config,
        Ok(Launch::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}", USAGE);
            return Err(e);
        }
    };

    let mut music = MusicPlayer::init().unwrap_or_else(|e| {
        eprintln!("[Audio] output unavailable, music disabled: {}", e);
        MusicPlayer::silent()
    });
    if config.music && !music.has_output() {
        eprintln!("[Audio] no output device; music toggle is silent");
    }
    music.set_playing(config.music);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut music);

    // Always try to restore terminal state.
    let _ = term.exit();
    music.shutdown();

    let score = result?;
    eprintln!("[Game] seed {} final score {}", config.seed, score);
    Ok(())
}

/// Play until quit; returns the score at that moment.
fn run(term: &mut TerminalRenderer, config: &Config, music: &mut MusicPlayer) -> Result<u32> {
    let mut game = GameState::new(config.seed)
        .with_drop_interval_ms(config.drop_interval_ms)
        .with_ghost(config.show_ghost);

    let view = GameView::default();
    let mut hud = Hud::new();
    hud.set_music(music.is_playing());

    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        hud.apply_all(game.drain_events());

        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into_with_hud(&snap, Some(&hud), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(game.score());
                    }
                    match handle_key_event(key) {
                        Some(cmd) if game.game_over() && !cmd.available_after_game_over() => {}
                        Some(KeyCommand::Game(action)) => {
                            game.apply_action(action);
                        }
                        Some(KeyCommand::ToggleMusic) => hud.set_music(music.toggle()),
                        None => {}
                    }
                }
                Event::FocusLost => {
                    game.pause_for_focus_loss();
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game.update(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX));
            hud.tick();
        }
    }
}
