use log::{debug, info};

use crate::Coords;
use crate::error::{GameError, Result};
use crate::input::{Command, InputSource, HELP_MESSAGE};
use crate::maze::Maze;
use crate::render::render;
use crate::snake::{GrowthMode, Outcome, Snake};
use crate::term::Screen;

/// Starting body as it lies in the maze, tail to head, facing right.
const INITIAL_SNAKE: [Coords; 3] = [(1, 3), (1, 4), (1, 5)];

/// How a session ended. Every variant is final.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEnd {
    Won,
    HitWall,
    HitSelf,
    Quit,
    Interrupted,
}

impl GameEnd {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GameEnd::Won => Some("You win! You found the exit."),
            GameEnd::HitWall => Some("You lose! You ran into a wall."),
            GameEnd::HitSelf => Some("You lose! You ran into yourself."),
            GameEnd::Quit => Some("Bye!"),
            GameEnd::Interrupted => None,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            GameEnd::Won | GameEnd::Quit | GameEnd::Interrupted => 0,
            GameEnd::HitWall => 2,
            GameEnd::HitSelf => 3,
        }
    }
}

pub struct Game<I, S> {
    input: I,
    screen: S,
    maze: Maze,
    snake: Snake,
}

impl<I: InputSource, S: Screen> Game<I, S> {
    pub fn new(input: I, screen: S, maze: Maze, snake: Snake) -> Result<Self> {
        if let Some(pos) = snake.body().iter().find(|&&pos| !maze.is_passable(pos)) {
            return Err(GameError::InvalidSnake(format!("segment {:?} is not on open floor", pos)));
        }

        if !maze.exit_reachable_from(snake.head()) {
            return Err(GameError::InvalidMaze("no exit reachable from the snake's head".into()));
        }

        Ok(Game { input, screen, maze, snake })
    }

    /// The hardcoded maze with the starting snake.
    pub fn with_defaults(input: I, screen: S, mode: GrowthMode) -> Result<Self> {
        let body = INITIAL_SNAKE.iter().rev().copied().collect();
        Self::new(input, screen, Maze::default_maze()?, Snake::new(body, mode)?)
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Plays until a terminal state. The screen is restored even when setup
    /// or playing fails, and their error wins over a failed restore.
    pub fn run(&mut self) -> Result<GameEnd> {
        info!("Starting game in {:?} mode", self.snake.mode());

        let res = self.screen.setup().and_then(|_| self.play());
        let restored = self.screen.restore();
        let end = res?;
        restored?;

        info!("Game over: {:?} with {} segments", end, self.snake.body().len());
        if let Some(msg) = end.message() {
            self.screen.show_status(msg)?;
        }

        Ok(end)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn play(&mut self) -> Result<GameEnd> {
        self.redraw()?;

        loop {
            let command = self.input.next_command()?;
            debug!("Command: {:?}", command);

            match command {
                Command::Quit => return Ok(GameEnd::Quit),
                Command::Interrupt => return Ok(GameEnd::Interrupted),
                Command::Invalid(_) => self.screen.show_status(HELP_MESSAGE)?,
                Command::Move(dir) => match self.snake.step(dir, &self.maze) {
                    Outcome::Win => return Ok(GameEnd::Won),
                    Outcome::WallHit => return Ok(GameEnd::HitWall),
                    Outcome::SelfHit => return Ok(GameEnd::HitSelf),
                    Outcome::Advance(snake) => {
                        debug!("Head now at {:?}", snake.head());
                        self.snake = snake;
                        self.redraw()?;
                    }
                },
            }
        }
    }

    fn redraw(&mut self) -> Result<()> {
        let frame = render(&self.maze, &self.snake);
        self.screen.draw_frame(&frame)
    }
}
