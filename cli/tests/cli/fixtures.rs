use statepath::grid::GridMap;
use std::io::Write;
use tempfile::NamedTempFile;

pub const DETOUR_MAP: &str = "S..#\n.#.#\n...G\n";

/// Diagonal shortcuts past weighted cells; Manhattan distance overestimates here
pub const DIAGONAL_MAP: &str = "S..5..\n#.5...\n#.#...\n#...5.\n.5..#5\n.....G\n";

pub const WEIGHTED_GRAPH: &str = r#"{
    "A": [["B", 1.0], ["C", 5.0]],
    "B": [["C", 1.0]],
    "C": []
}"#;

pub fn detour_map() -> GridMap {
    GridMap::parse(DETOUR_MAP).unwrap()
}

pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}
