use std::fs;

use super::error::GridLoaderError;
use crate::grid::Grid;

/// Delimiter used when none is given on the command line.
pub const DEFAULT_DELIMITER: char = ',';

//─────────────────────────────────────────────────────────────────────────────

/// Loads a grid from a delimited text file.
pub fn load_grid_from_file(file_path: &str, delimiter: char) -> Result<Grid, GridLoaderError> {
    let file_content =
        fs::read_to_string(file_path).map_err(|e| GridLoaderError::ReadFile(file_path.into(), e))?;

    parse_grid(&file_content, delimiter)
}

/// Parses delimited text into a grid.
///
/// The token count of the first line fixes N; the text must then hold exactly
/// N lines of N integers each. Blank lines after the last row are ignored.
pub fn parse_grid(content: &str, delimiter: char) -> Result<Grid, GridLoaderError> {
    let lines: Vec<&str> = content.trim_end().lines().collect();

    match lines.first() {
        Some(first) if !first.trim().is_empty() => {}
        _ => return Err(GridLoaderError::Empty),
    }

    let rows = lines
        .iter()
        .enumerate()
        .map(|(row, line)| parse_row(row, line, delimiter))
        .collect::<Result<Vec<Vec<u16>>, GridLoaderError>>()?;

    Ok(Grid::from_rows(rows)?)
}

/// Splits a line on `delimiter`, trimming whitespace around each token.
///
/// An empty line still yields one (empty) token, as does a trailing delimiter.
pub fn tokenize(line: &str, delimiter: char) -> impl Iterator<Item = &str> {
    line.split(delimiter).map(str::trim)
}

fn parse_row(row: usize, line: &str, delimiter: char) -> Result<Vec<u16>, GridLoaderError> {
    tokenize(line, delimiter)
        .enumerate()
        .map(|(col, token)| {
            token.parse::<u16>().map_err(|_| GridLoaderError::InvalidValue {
                row,
                col,
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridError;
    use crate::snake::Point;

    #[test]
    fn tokenizer_keeps_empty_fields() {
        let tokens: Vec<&str> = tokenize("1,,3,", ',').collect();
        assert_eq!(tokens, vec!["1", "", "3", ""]);
        let tokens: Vec<&str> = tokenize(" 4 ; 5 ", ';').collect();
        assert_eq!(tokens, vec!["4", "5"]);
    }

    #[test]
    fn parses_square_grid() {
        let grid = parse_grid("1,2,3\n4,5,6\n7,8,256\n", ',').unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.value_at(Point::new(2, 2)), Some(256));
        assert_eq!(grid.value_at(Point::new(0, 1)), Some(4));
    }

    #[test]
    fn accepts_windows_line_endings_and_trailing_blank_lines() {
        let grid = parse_grid("1,2\r\n3,4\r\n\r\n\n", ',').unwrap();
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.value_at(Point::new(1, 1)), Some(4));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(parse_grid("", ','), Err(GridLoaderError::Empty)));
        assert!(matches!(parse_grid("  \n1,2", ','), Err(GridLoaderError::Empty)));
    }

    #[test]
    fn non_integer_token_is_reported_with_position() {
        match parse_grid("1,2\n3,x", ',') {
            Err(GridLoaderError::InvalidValue { row, col, token }) => {
                assert_eq!((row, col), (1, 1));
                assert_eq!(token, "x");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            parse_grid("1,-2\n3,4", ','),
            Err(GridLoaderError::InvalidValue { .. })
        ));
    }

    #[test]
    fn shape_and_range_errors_come_from_grid() {
        assert!(matches!(
            parse_grid("1,2\n3,4\n5,6", ','),
            Err(GridLoaderError::Grid(GridError::RowCount { rows: 3, width: 2 }))
        ));
        assert!(matches!(
            parse_grid("1,2\n3", ','),
            Err(GridLoaderError::Grid(GridError::RowLength { row: 1, .. }))
        ));
        assert!(matches!(
            parse_grid("1,2\n3,257", ','),
            Err(GridLoaderError::Grid(GridError::ValueTooLarge { value: 257, .. }))
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = load_grid_from_file("definitely/not/here.csv", DEFAULT_DELIMITER);
        assert!(matches!(result, Err(GridLoaderError::ReadFile(..))));
    }
}
