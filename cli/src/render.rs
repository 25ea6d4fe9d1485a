use pokegrid_core::{CellIndex, CellState, GridState};

const NUMBERS: [&str; 9] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight",
];
const POKEMONS: [&str; 6] = [
    "charizard",
    "cyndaquil",
    "pikachu",
    "psyduck",
    "togepi",
    "umbreon",
];

/// Turns a cell into something a view can draw.
pub trait CellRenderer {
    type Visual;

    fn render(&self, index: CellIndex, cell: CellState) -> Self::Visual;
}

/// Plain shapes, one character per cell.
#[derive(Copy, Clone, Debug, Default)]
pub struct GlyphRenderer;

impl CellRenderer for GlyphRenderer {
    type Visual = char;

    fn render(&self, _index: CellIndex, cell: CellState) -> char {
        match cell {
            CellState::Hidden => '~',
            CellState::Flagged => '@',
            CellState::Revealed(hint) => char::from_digit(hint.into(), 10).unwrap_or('?'),
            CellState::RevealedTarget => '☺',
        }
    }
}

/// Names of the image assets for each cell.
#[derive(Copy, Clone, Debug, Default)]
pub struct SpriteRenderer;

impl CellRenderer for SpriteRenderer {
    type Visual = String;

    fn render(&self, index: CellIndex, cell: CellState) -> String {
        match cell {
            CellState::Hidden => "unrevealed".to_owned(),
            CellState::Flagged => "pokeball".to_owned(),
            CellState::Revealed(hint) => match NUMBERS.get(usize::from(hint)) {
                Some(number) => format!("{number}_adjacent"),
                None => "unrevealed".to_owned(),
            },
            // keyed by index so a pokemon keeps its sprite across redraws
            CellState::RevealedTarget => {
                format!("pokemon_sprites/{}", POKEMONS[usize::from(index) % POKEMONS.len()])
            }
        }
    }
}

/// Lays the board out as text, one row per line, with row and column headers.
pub fn draw_board<R>(grid: &GridState, renderer: &R) -> String
where
    R: CellRenderer,
    R::Visual: std::fmt::Display,
{
    let size = usize::from(grid.grid_size());
    let width = grid
        .cells()
        .enumerate()
        .map(|(index, cell)| renderer.render(index as CellIndex, cell).to_string().chars().count())
        .max()
        .unwrap_or(1)
        .max(size.saturating_sub(1).to_string().len());

    let mut out = format!("{:>4}", "");
    for col in 0..size {
        out.push_str(&format!(" {col:>width$}"));
    }
    out.push('\n');

    for (index, cell) in grid.cells().enumerate() {
        if index % size == 0 {
            out.push_str(&format!("{:>4}", index / size));
        }
        let visual = renderer.render(index as CellIndex, cell);
        out.push_str(&format!(" {:>width$}", visual.to_string()));
        if index % size == size - 1 {
            out.push('\n');
        }
    }
    out
}
