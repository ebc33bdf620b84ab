use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use libgame::Grid;
use tracing::debug;

/// Writes `generations` generations of `grid`, advancing it after each one.
pub fn write_generations<W>(grid: &mut Grid, generations: usize, writer: &mut W) -> io::Result<()>
where
    W: Write,
{
    for step in 0..generations {
        if step == 0 {
            write!(writer, "GAME OF LIFE\n\n#### T_0 ####\n\n")?;
        } else {
            write!(writer, "\n#### T_{step} ####\n\n")?;
        }

        writeln!(writer, "{grid}")?;
        debug!(step, population = grid.population(), "wrote generation");

        grid.advance();
    }

    Ok(())
}

/// Recreates the file at `path` and writes the run into it.
pub fn write_run_file<P>(path: P, grid: &mut Grid, generations: usize) -> anyhow::Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if path.exists() {
        fs::remove_file(path)
            .with_context(|| format!("Couldn't remove existing output {}", path.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("Couldn't create output {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    write_generations(grid, generations, &mut writer).context("Couldn't write generations")?;
    writer.flush().context("Couldn't flush output")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use libgame::Cell;
    use tempfile::TempDir;

    use super::*;

    fn written(grid: &mut Grid, generations: usize) -> String {
        let mut buffer = Vec::new();
        write_generations(grid, generations, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn headers_and_renders() {
        let mut grid = Grid::filled(2, 2, Cell::Alive).unwrap();

        // Every cell of a full 2x2 grid sees 2 or 3 alive neighbors.
        let expected = "GAME OF LIFE\n\n#### T_0 ####\n\n++\n++\n\n\
                        \n#### T_1 ####\n\n++\n++\n\n\
                        \n#### T_2 ####\n\n++\n++\n\n";
        assert_eq!(written(&mut grid, 3), expected);
    }

    #[test]
    fn grid_advances_once_per_generation() {
        let mut grid = Grid::from_str("---\n+++\n---\n").unwrap();
        let text = written(&mut grid, 2);

        assert!(text.ends_with("\n#### T_1 ####\n\n---\n-+-\n---\n\n"));
        assert_eq!(grid, Grid::filled(3, 3, Cell::Dead).unwrap());
    }

    #[test]
    fn zero_generations_write_nothing() {
        let mut grid = Grid::filled(3, 3, Cell::Alive).unwrap();
        assert_eq!(written(&mut grid, 0), "");
        assert_eq!(grid, Grid::filled(3, 3, Cell::Alive).unwrap());
    }

    #[test]
    fn existing_file_is_replaced() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("output.txt");
        fs::write(&path, "stale contents that are longer than the new run\n").unwrap();

        let mut grid = Grid::filled(1, 1, Cell::Dead).unwrap();
        write_run_file(&path, &mut grid, 1).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "GAME OF LIFE\n\n#### T_0 ####\n\n-\n\n");
    }

    #[test]
    fn unwritable_location_is_an_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("missing").join("output.txt");

        let mut grid = Grid::filled(1, 1, Cell::Dead).unwrap();
        assert!(write_run_file(&path, &mut grid, 1).is_err());
    }
}
