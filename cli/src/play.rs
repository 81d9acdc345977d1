use std::io::{BufRead, Write};

use anyhow::Context;
use gridpower_core::*;

use crate::render;

const HELP: &str = "\
Commands:
  <label>          click a tile, e.g. B2
  describe <label> describe a tile
  reset            restart the level
  solution         show the canonical solution
  next             go to the next level
  level <id>       switch to level 1-7 or daily
  help             show this text
  quit             leave the game";

#[derive(Debug, PartialEq)]
enum Input<'a> {
    Click(&'a str),
    Describe(&'a str),
    Reset,
    Solution,
    Next,
    Level(&'a str),
    Help,
    Quit,
}

impl<'a> Input<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let command = words.next()?;
        let argument = words.next();

        Some(match (command.to_ascii_lowercase().as_str(), argument) {
            ("describe", Some(label)) => Self::Describe(label),
            ("reset", None) => Self::Reset,
            ("solution", None) => Self::Solution,
            ("next", None) => Self::Next,
            ("level", Some(id)) => Self::Level(id),
            ("help", None) => Self::Help,
            ("quit" | "exit", None) => Self::Quit,
            (_, None) => Self::Click(command),
            _ => return None,
        })
    }
}

/// Runs a game on `level`, reading commands from `input` until it ends or `quit` is entered.
pub fn run(level: LevelId, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
    let mut session = Session::initialize(level)?;
    render::write_status(&session, out)?;

    for line in input.lines() {
        let line = line.context("could not read input")?;
        let Some(command) = Input::parse(&line) else {
            if !line.trim().is_empty() {
                writeln!(out, "Unrecognized command, type `help` for a list")?;
            }
            continue;
        };
        log::trace!("input: {:?}", command);

        match command {
            Input::Click(label) => {
                let coords = match parse_coord_label(label, session.board().side()) {
                    Ok(coords) => coords,
                    Err(err) => {
                        writeln!(out, "{}: {}", label, err)?;
                        continue;
                    }
                };
                let report = session.apply_move(coords)?;
                match report.status {
                    MoveStatus::Rejected => {
                        writeln!(out, "{} is black and cannot be clicked", coord_label(coords))?
                    }
                    MoveStatus::Continue => render::write_status(&session, out)?,
                    MoveStatus::Solved => {
                        render::write_status(&session, out)?;
                        if let Some(message) = session.completion_message() {
                            writeln!(out, "{}", message)?;
                        }
                        match session.next_level() {
                            Some(next) => writeln!(out, "Type `next` for {}", next.title())?,
                            None => writeln!(out, "That was the last level")?,
                        }
                    }
                }
            }
            Input::Describe(label) => {
                match parse_coord_label(label, session.board().side())
                    .and_then(|coords| session.describe_tile(coords))
                {
                    Ok(text) => writeln!(out, "{}: {}", label.to_ascii_uppercase(), text)?,
                    Err(err) => writeln!(out, "{}: {}", label, err)?,
                }
            }
            Input::Reset => {
                session.reset()?;
                render::write_status(&session, out)?;
            }
            Input::Solution => render::write_solution_steps(session.definition()?, out)?,
            Input::Next => match session.next_level() {
                Some(next) => {
                    session.change_level(next)?;
                    render::write_status(&session, out)?;
                }
                None => writeln!(out, "There is no next level")?,
            },
            Input::Level(id) => match id.parse() {
                Ok(level) => {
                    session.change_level(level)?;
                    render::write_status(&session, out)?;
                }
                Err(err) => writeln!(out, "{}: {}", id, err)?,
            },
            Input::Help => writeln!(out, "{}", HELP)?,
            Input::Quit => break,
        }
    }
    Ok(())
}
