//! The GUI for the checkers engine, built with Iced.
//!
//! This file follows the Elm architecture, a Model-View-Update pattern:
//! - `CheckersApp` is the Model: It holds the entire state of the application.
//! - `Message` is the Update trigger: It defines all possible events that can change the state.
//! - `update` is the Update logic: It processes messages to transition the state.
//! - `view` is the View: It renders the UI based on the current state.

use iced::widget::canvas::{self, event, Frame, Geometry, Path, Program, Stroke};
use iced::widget::{text, Button, Column, Container, Row, TextInput};
use iced::{
    executor, mouse, Application, Command, Element, Length, Padding, Pixels, Point, Rectangle,
    Renderer, Settings, Size, Theme,
};

use crate::board::{logical_col, rc_to_sq, sq_to_rc, visual_col, Board};
use crate::constants::{Piece, Rank, Side};
use crate::game::Game;
use crate::r#move::Move;

const BOARD_SIZE: f32 = 560.0;
const SQUARE_SIZE: f32 = BOARD_SIZE / 8.0;
const PIECE_RADIUS: f32 = SQUARE_SIZE / 2.0 * 0.8;

/// Runs the GUI application.
pub fn run() -> iced::Result {
    CheckersApp::run(Settings {
        window: iced::window::Settings {
            size: Size::new(700.0, 760.0),
            ..iced::window::Settings::default()
        },
        ..Settings::default()
    })
}

/// Defines the messages that can be sent to the `update` function.
#[derive(Debug, Clone)]
enum Message {
    NewGame,
    SquareClicked(usize),
    SetupInputChanged(String),
    LoadSetup,
}

/// The main application state (the "Model").
struct CheckersApp {
    game: Game,

    // --- UI-specific state ---
    last_move: Option<Move>,
    winner: Option<Side>,
    setup_input: String,
    board_cache: canvas::Cache,
}

impl Application for CheckersApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let game = Game::new();
        let app = CheckersApp {
            setup_input: game.to_setup(),
            game,
            last_move: None,
            winner: None,
            board_cache: canvas::Cache::new(),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("Checkers")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::SquareClicked(sq) => self.handle_square_clicked(sq),
            Message::NewGame => self.handle_new_game(),
            Message::SetupInputChanged(new_setup) => {
                self.setup_input = new_setup;
                Command::none()
            }
            Message::LoadSetup => self.handle_load_setup(),
        }
    }

    fn view(&'_ self) -> Element<'_, Message> {
        let status_text = match self.winner {
            Some(Side::White) => String::from("White wins!"),
            Some(Side::Black) => String::from("Black wins!"),
            None => match self.game.turn() {
                Side::White => String::from("White to move"),
                Side::Black => String::from("Black to move"),
            },
        };

        let canvas = canvas::Canvas::new(BoardCanvas::new(&self.game, self.last_move))
            .width(Length::Fixed(BOARD_SIZE))
            .height(Length::Fixed(BOARD_SIZE));

        let controls = Row::new()
            .spacing(10)
            .push(Button::new(text("New Game")).on_press(Message::NewGame));

        let setup_controls = Row::new()
            .spacing(10)
            .padding(Padding {
                top: 0.0,
                right: 100.0,
                bottom: 0.0,
                left: 100.0,
            })
            .align_items(iced::Alignment::Center)
            .push(
                TextInput::new("Setup string...", &self.setup_input)
                    .on_input(Message::SetupInputChanged)
                    .width(Length::Fill),
            )
            .push(Button::new(text("Load Setup")).on_press(Message::LoadSetup));

        let content = Column::new()
            .spacing(20)
            .align_items(iced::Alignment::Center)
            .push(text(status_text).size(Pixels(24.0)))
            .push(canvas)
            .push(controls)
            .push(setup_controls);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .into()
    }
}

// --- Update Helper Functions ---

impl CheckersApp {
    /// Logic for when a playable square is clicked.
    fn handle_square_clicked(&mut self, sq: usize) -> Command<Message> {
        if self.winner.is_some() {
            return Command::none();
        }

        let (row, col) = sq_to_rc(sq);
        if let Some(mv) = self.game.handle_click(row, col) {
            self.last_move = Some(mv);
            self.setup_input = self.game.to_setup();
            // The side now to move loses when it has nothing left.
            if !self.game.side_has_moves() {
                self.winner = Some(self.game.turn().opponent());
            }
        }
        self.board_cache.clear(); // Redraw to show selection or the move
        Command::none()
    }

    /// Resets the application to the initial state for a new game.
    fn handle_new_game(&mut self) -> Command<Message> {
        self.game = Game::new();
        self.last_move = None;
        self.winner = None;
        self.setup_input = self.game.to_setup();
        self.board_cache.clear();
        Command::none()
    }

    /// Loads a new board state from the setup string in the input box.
    fn handle_load_setup(&mut self) -> Command<Message> {
        if let Some(game) = Game::from_setup(&self.setup_input) {
            self.winner = if game.side_has_moves() {
                None
            } else {
                Some(game.turn().opponent())
            };
            self.game = game;
            self.last_move = None;
            self.board_cache.clear();
        }
        Command::none()
    }
}

// --- Canvas Drawing Logic ---

struct BoardCanvas {
    board: Board,
    selected: Option<usize>,
    offered: Vec<Move>,
    last_move: Option<Move>,
}

impl BoardCanvas {
    fn new(game: &Game, last_move: Option<Move>) -> Self {
        Self {
            board: game.board().clone(),
            selected: game.selected(),
            offered: game.offered_moves().to_vec(),
            last_move,
        }
    }
}

impl Program<Message> for BoardCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        self.draw_squares(&mut frame);
        self.draw_highlights(&mut frame);
        self.draw_pieces(&mut frame);
        self.draw_selected_square_highlight(&mut frame);

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        _state: &mut Self::State,
        event: event::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        if let event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let Some(pos) = cursor.position_in(bounds) {
                let vis = (pos.x / SQUARE_SIZE).floor() as usize;
                let row = (pos.y / SQUARE_SIZE).floor() as usize;
                if row < 8 && vis < 8 {
                    // Light squares are dead space.
                    if let Some(col) = logical_col(row, vis) {
                        let sq = rc_to_sq(row, col);
                        return (event::Status::Captured, Some(Message::SquareClicked(sq)));
                    }
                }
            }
        }
        (event::Status::Ignored, None)
    }
}

// --- Canvas Drawing Helper Functions ---

impl BoardCanvas {
    fn square_origin(sq: usize) -> Point {
        let (row, col) = sq_to_rc(sq);
        Point::new(
            visual_col(row, col) as f32 * SQUARE_SIZE,
            row as f32 * SQUARE_SIZE,
        )
    }

    fn square_center(sq: usize) -> Point {
        let origin = Self::square_origin(sq);
        Point::new(origin.x + SQUARE_SIZE / 2.0, origin.y + SQUARE_SIZE / 2.0)
    }

    fn draw_squares(&self, frame: &mut Frame) {
        // Light background, dark playable squares.
        let background = Path::rectangle(Point::new(0.0, 0.0), frame.size());
        frame.fill(&background, iced::Color::from_rgb(1.0, 0.89, 0.67));

        for sq in 0..crate::board::SQUARES {
            let path = Path::rectangle(
                Self::square_origin(sq),
                Size::new(SQUARE_SIZE, SQUARE_SIZE),
            );
            frame.fill(&path, iced::Color::from_rgb(0.82, 0.55, 0.28));
        }
    }

    fn draw_highlights(&self, frame: &mut Frame) {
        // Highlight last move
        if let Some(mv) = self.last_move {
            let from_path = Path::rectangle(
                Self::square_origin(mv.from_sq()),
                Size::new(SQUARE_SIZE, SQUARE_SIZE),
            );
            frame.fill(&from_path, iced::Color::from_rgba(1.0, 1.0, 0.0, 0.3));

            let to_path = Path::rectangle(
                Self::square_origin(mv.to_sq()),
                Size::new(SQUARE_SIZE, SQUARE_SIZE),
            );
            frame.fill(&to_path, iced::Color::from_rgba(0.0, 1.0, 0.0, 0.3));
        }

        // Highlight the offered targets of the current selection.
        for mv in &self.offered {
            let path = Path::rectangle(
                Self::square_origin(mv.to_sq()),
                Size::new(SQUARE_SIZE, SQUARE_SIZE),
            );
            let color = if mv.is_capture() {
                iced::Color::from_rgba(1.0, 0.2, 0.2, 0.4)
            } else {
                iced::Color::from_rgba(0.0, 1.0, 0.0, 0.4)
            };
            frame.fill(&path, color);
        }
    }

    fn draw_pieces(&self, frame: &mut Frame) {
        for sq in 0..crate::board::SQUARES {
            let piece = self.board.get(sq);
            if piece == Piece::Empty {
                continue;
            }
            let center = Self::square_center(sq);
            let fill = if piece.side() == Some(Side::White) {
                iced::Color::from_rgb(1.0, 1.0, 1.0)
            } else {
                iced::Color::from_rgb(0.0, 0.0, 0.0)
            };

            let circle = Path::circle(center, PIECE_RADIUS);
            frame.fill(&circle, fill);
            frame.stroke(
                &circle,
                Stroke::default()
                    .with_width(2.0)
                    .with_color(iced::Color::from_rgb(0.3, 0.3, 0.3)),
            );

            // Kings carry an inner ring.
            if piece.rank() == Some(Rank::King) {
                let ring = Path::circle(center, PIECE_RADIUS * 0.5);
                let ring_color = if piece.side() == Some(Side::White) {
                    iced::Color::from_rgb(0.3, 0.3, 0.3)
                } else {
                    iced::Color::from_rgb(1.0, 1.0, 1.0)
                };
                frame.stroke(
                    &ring,
                    Stroke::default().with_width(2.0).with_color(ring_color),
                );
            }
        }
    }

    fn draw_selected_square_highlight(&self, frame: &mut Frame) {
        if let Some(sq) = self.selected {
            let path = Path::rectangle(
                Self::square_origin(sq),
                Size::new(SQUARE_SIZE, SQUARE_SIZE),
            );
            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(3.0)
                    .with_color(iced::Color::from_rgb(0.0, 1.0, 0.0)),
            );
        }
    }
}
