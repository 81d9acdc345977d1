use std::io::Write;

use gridpower_core::*;

/// Board with column letters across the top and row numbers down the side.
pub fn board_with_labels(board: &Board) -> String {
    let mut out = String::from("   ");
    for col in 0..board.side() {
        let label = coord_label((0, col));
        out.push_str(&label[..1]);
        out.push(' ');
    }
    out.push('\n');

    let rendered = board.to_string();
    for (row, line) in rendered.lines().enumerate() {
        out.push_str(&format!("{:>2} {}\n", row + 1, line));
    }
    out
}

pub fn write_status(session: &Session, out: &mut impl Write) -> anyhow::Result<()> {
    let definition = session.definition()?;
    writeln!(
        out,
        "{}  moves: {}  par: {}",
        session.level().title(),
        session.move_count(),
        definition.moves_budget()
    )?;
    write!(out, "{}", board_with_labels(session.board()))?;
    Ok(())
}

pub fn write_solution_steps(definition: &LevelDefinition, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Solution in {} moves:", definition.moves_budget())?;
    for (step, text) in definition.solution_steps().enumerate() {
        writeln!(out, "{:>3}. {}", step + 1, text)?;
    }
    Ok(())
}

pub fn write_solution(level: LevelId, out: &mut impl Write) -> anyhow::Result<()> {
    let mut session = Session::initialize(level)?;
    let definition = session.definition()?;
    write_status(&session, out)?;

    for (step, &coords) in definition.solution.iter().enumerate() {
        let report = session.apply_move(coords)?;
        writeln!(
            out,
            "\nStep {}: click {} ({:?})",
            step + 1,
            coord_label(coords),
            report.status
        )?;
        write!(out, "{}", board_with_labels(&report.board))?;
    }

    if let Some(message) = session.completion_message() {
        writeln!(out, "\n{}", message)?;
    }
    Ok(())
}

pub fn write_levels(out: &mut impl Write) -> anyhow::Result<()> {
    for definition in all_levels() {
        let board = definition.initial_board()?;
        let powers: Vec<_> = board
            .power_tiles()
            .filter_map(|(coords, power)| {
                power
                    .border_name()
                    .map(|name| format!("{} {}", coord_label(coords), name))
            })
            .collect();
        let powers = if powers.is_empty() {
            String::from("none")
        } else {
            powers.join(", ")
        };

        writeln!(
            out,
            "{:<8} {:<16} {}x{}  par {}  powers: {}",
            definition.id.to_string(),
            definition.id.title(),
            definition.grid_size,
            definition.grid_size,
            definition.moves_budget(),
            powers
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_surround_the_board() {
        let board = Board::solved(3);

        assert_eq!(
            board_with_labels(&board),
            "   A B C \n 1 # # # \n 2 # # # \n 3 # # # \n"
        );
    }

    #[test]
    fn solve_ends_with_completion_message() {
        let mut out = Vec::new();

        write_solution(LevelId::Numbered(3), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Step 1: click C2 (Continue)"));
        assert!(text.contains("Step 4: click A4 (Solved)"));
        assert!(text.trim_end().ends_with("You completed level 3 in 4 moves!"));
    }

    #[test]
    fn level_list_names_power_tiles() {
        let mut out = Vec::new();

        write_levels(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), LevelId::ALL.len());
        assert!(text.contains("powers: C2 red"));
        assert!(text.contains("Daily Challenge"));
    }
}
