mod puzzle;
mod render;

use std::time::Duration;

// The leading `::` keeps the rand crate from colliding with the `rand`
// module in macroquad's prelude.
use ::rand::thread_rng;
use macroquad::prelude::*;

use puzzle::Puzzle;
use render::{TILE_SIZE, WINDOW_SIZE};

const TARGET_FRAME_TIME: f32 = 1.0 / 60.0;
const SOLVED_PAUSE: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Running,
    SolvedPause,
    Terminated,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Puzzle Game".to_owned(),
        window_width: WINDOW_SIZE,
        window_height: WINDOW_SIZE,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Route window-close through the state machine instead of letting the
    // backend kill the process mid-frame.
    prevent_quit();

    let mut puzzle = Puzzle::shuffled(&mut thread_rng());
    let mut state = LoopState::Running;

    while state != LoopState::Terminated {
        match state {
            LoopState::Running => {
                if is_quit_requested() {
                    state = LoopState::Terminated;
                    continue;
                }

                if is_mouse_button_pressed(MouseButton::Left) {
                    let (x, y) = mouse_position();
                    let col = (x as i32 / TILE_SIZE) as usize;
                    let row = (y as i32 / TILE_SIZE) as usize;
                    puzzle.try_slide(row, col);
                }

                render::draw_puzzle(&puzzle);

                if puzzle.is_solved() {
                    render::draw_congratulations();
                    state = LoopState::SolvedPause;
                } else {
                    // Cap at 60 FPS; nothing is skipped, only delayed.
                    let frame_time = get_frame_time();
                    if frame_time < TARGET_FRAME_TIME {
                        std::thread::sleep(Duration::from_secs_f32(TARGET_FRAME_TIME - frame_time));
                    }
                }

                next_frame().await;
            }
            LoopState::SolvedPause => {
                // The congratulations frame is already on screen; hold it,
                // ignoring further input, then shut down.
                std::thread::sleep(SOLVED_PAUSE);
                state = LoopState::Terminated;
            }
            LoopState::Terminated => unreachable!(),
        }
    }
}
