use ndarray::Array2;
use prospector_core::{Coord, Coord2, Renderer, Resource, StatusDisplay, TileType, ToNdIndex, Uses};
use std::collections::VecDeque;
use std::io::{self, Write};

/// Text board, hidden tiles stay `#` until a scan reveals them.
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    cells: Array2<Option<TileType>>,
}

impl TerminalRenderer {
    fn glyph(cell: Option<TileType>) -> char {
        match cell {
            None => '#',
            Some(TileType::Unset) => '?',
            Some(TileType::MinResource) => '.',
            Some(TileType::QuarterResource) => 'q',
            Some(TileType::HalfResource) => 'H',
            Some(TileType::MaxResource) => 'M',
        }
    }

    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        let (size_x, size_y) = self.cells.dim();

        write!(out, "    ")?;
        for x in 0..size_x {
            write!(out, "{:>3}", x)?;
        }
        writeln!(out)?;

        for y in 0..size_y {
            write!(out, "{:>3} ", y)?;
            for x in 0..size_x {
                write!(out, "{:>3}", Self::glyph(self.cells[[x, y]]))?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

impl Renderer for TerminalRenderer {
    fn on_tile_changed(&mut self, x: Coord, y: Coord, kind: TileType, discovered: bool) {
        if let Some(cell) = self.cells.get_mut((x, y).to_nd_index()) {
            *cell = discovered.then_some(kind);
        }
    }

    fn on_board_reset(&mut self, size: Coord2) {
        self.cells = Array2::from_elem(size.to_nd_index(), None);
    }
}

/// Status feed capped to the last few lines plus the stat block.
#[derive(Debug)]
pub struct TerminalDisplay {
    feed: VecDeque<String>,
    max_lines: usize,
    stats: (Resource, Uses, Uses),
}

impl TerminalDisplay {
    pub fn new(max_lines: usize) -> Self {
        Self {
            feed: VecDeque::with_capacity(max_lines + 1),
            max_lines,
            stats: (0, 0, 0),
        }
    }

    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        for line in &self.feed {
            writeln!(out, "{}", line)?;
        }
        let (resources, scans, extracts) = self.stats;
        writeln!(out)?;
        writeln!(out, "Resources: {}", resources)?;
        writeln!(out, "Scans Left: {}", scans)?;
        writeln!(out, "Extracts Left: {}", extracts)
    }
}

impl StatusDisplay for TerminalDisplay {
    fn on_log(&mut self, message: &str) {
        self.feed.push_back(message.to_owned());
        while self.feed.len() > self.max_lines {
            self.feed.pop_front();
        }
    }

    fn on_stats(&mut self, resource_counter: Resource, scans_left: Uses, extractions_left: Uses) {
        self.stats = (resource_counter, scans_left, extractions_left);
    }
}
