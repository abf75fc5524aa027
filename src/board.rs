use std::{fmt, str::FromStr};

use crate::Error;

pub const SIZE: usize = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::X => "X",
            Symbol::O => "O",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Symbol::X),
            "O" => Ok(Symbol::O),
            other => Err(Error::InvalidSymbol(other.to_string())),
        }
    }
}

/// One board position. Once owned, the owner stays fixed until the board is reset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    owner: Option<Symbol>,
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(&self) -> Option<Symbol> {
        self.owner
    }

    pub fn has_owner(&self) -> bool {
        self.owner.is_some()
    }

    /// Fails with [`Error::InvalidOwner`] when the cell already belongs to a
    /// different symbol, or when clearing an owned cell.
    pub fn set_owner(&mut self, owner: Option<Symbol>) -> Result<(), Error> {
        match (self.owner, owner) {
            (Some(current), requested) if requested != Some(current) => {
                Err(Error::InvalidOwner(display_owner(requested).to_string()))
            }
            _ => {
                self.owner = owner;
                Ok(())
            }
        }
    }

    /// Parses a textual owner: `""` is empty, `"X"` and `"O"` are symbols.
    pub fn parse_owner(s: &str) -> Result<Option<Symbol>, Error> {
        match s {
            "" => Ok(None),
            other => other
                .parse::<Symbol>()
                .map(Some)
                .map_err(|_| Error::InvalidOwner(other.to_string())),
        }
    }
}

fn display_owner(owner: Option<Symbol>) -> &'static str {
    match owner {
        Some(symbol) => symbol.as_str(),
        None => "",
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from row-major owners. The slice must hold exactly nine entries.
    pub fn from_owners(owners: &[Option<Symbol>]) -> Result<Board, Error> {
        if owners.len() != SIZE * SIZE {
            return Err(Error::InvalidBoard(owners.len()));
        }
        let mut board = Board::new();
        for (index, owner) in owners.iter().enumerate() {
            board.cells[index / SIZE][index % SIZE].set_owner(*owner)?;
        }
        Ok(board)
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, Error> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .ok_or(Error::OutOfRange { row, col })
    }

    /// Writes `symbol` into the cell. Whether the cell may be written is the
    /// caller's decision; the cell itself still refuses to change owners.
    pub fn set_cell_owner(&mut self, row: usize, col: usize, symbol: Symbol) -> Result<(), Error> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(Error::OutOfRange { row, col })?;
        cell.set_owner(Some(symbol))
    }

    pub fn reset(&mut self) {
        *self = Board::new();
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (row, col, cell))
        })
    }

    pub fn owners(&self) -> [Option<Symbol>; SIZE * SIZE] {
        let mut owners = [None; SIZE * SIZE];
        for (owner, (_, _, cell)) in owners.iter_mut().zip(self.cells()) {
            *owner = cell.owner();
        }
        owners
    }

    pub fn is_full(&self) -> bool {
        self.cells().all(|(_, _, cell)| cell.has_owner())
    }

    pub fn is_empty(&self) -> bool {
        self.cells().all(|(_, _, cell)| !cell.has_owner())
    }

    fn display_squares(&self) -> [&'static str; SIZE * SIZE] {
        let mut display = [""; SIZE * SIZE];
        for (dsquare, square) in display.iter_mut().zip(self.owners()) {
            *dsquare = match square {
                Some(symbol) => symbol.as_str(),
                None => " ",
            };
        }
        display
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ds = self.display_squares();
        writeln!(f, " {} | {} | {}", ds[0], ds[1], ds[2])?;
        f.write_str("---+---+---\n")?;
        writeln!(f, " {} | {} | {}", ds[3], ds[4], ds[5])?;
        f.write_str("---+---+---\n")?;
        writeln!(f, " {} | {} | {}", ds[6], ds[7], ds[8])?;
        Ok(())
    }
}
