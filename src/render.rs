use crate::maze::{Cell, Maze};
use crate::snake::Snake;

pub const SNAKE_CHAR: char = 'S';
pub const WALL_CHAR: char = 'X';
pub const BLANK_CHAR: char = ' ';

/// Draws the whole board row by row, one char per cell, each row ending in
/// `\n`. A snake segment hides whatever cell is under it; exits look like
/// open floor.
pub fn render(maze: &Maze, snake: &Snake) -> String {
    let mut frame = String::with_capacity((maze.cols() + 1) * maze.rows());

    for row in 0..maze.rows() as i32 {
        for col in 0..maze.cols() as i32 {
            let pos = (row, col);
            let ch = if snake.occupies(pos) {
                SNAKE_CHAR
            } else if maze.cell_at(pos) == Some(Cell::Wall) {
                WALL_CHAR
            } else {
                BLANK_CHAR
            };
            frame.push(ch);
        }
        frame.push('\n');
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::GrowthMode;

    #[test]
    fn test_render_default_board() {
        let maze = Maze::default_maze().unwrap();
        let snake = Snake::new(vec![(1, 5), (1, 4), (1, 3)], GrowthMode::Growing).unwrap();

        let expected = concat!(
            "XXXXXXXXXX\n",
            "X  SSS   X\n",
            "X XXX    X\n",
            "X X      X\n",
            "X X X    X\n",
            "X   X    X\n",
            "XXXXXX   X\n",
            "X        X\n",
            "X         \n",
            "XXXXXXXXXX\n",
        );
        assert_eq!(render(&maze, &snake), expected);
    }

    #[test]
    fn test_render_is_idempotent() {
        let maze = Maze::default_maze().unwrap();
        let snake = Snake::new(vec![(7, 3), (7, 2)], GrowthMode::Translating).unwrap();
        assert_eq!(render(&maze, &snake), render(&maze, &snake));
    }

    #[test]
    fn test_snake_glyph_covers_exit() {
        let maze = Maze::from_layout(&["#.E#"]).unwrap();
        let snake = Snake::new(vec![(0, 2), (0, 1)], GrowthMode::Growing).unwrap();
        assert_eq!(render(&maze, &snake), "XSSX\n");
    }
}
