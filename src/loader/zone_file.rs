// src/loader/zone_file.rs
use crate::error::EditorError;
use crate::tile::Tile;
use crate::zone::{Zone, MIN_ZONE_HEIGHT, MIN_ZONE_WIDTH};
use log::{debug, info};
use macroquad::prelude::Color;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Extension of zone files, without the dot.
pub const ZONE_EXTENSION: &str = "zone";

const NAME_HEADER: &str = "Zone Name: ";
const ACT_HEADER: &str = "Act Number: ";
const SPRITE_HEADER: &str = "Sprite Set: ";

/// Serialize a zone: three header lines then one line of tokens per row.
pub fn encode_zone(zone: &Zone) -> String {
    let mut out = String::with_capacity(zone.tiles().len() * 7 + 128);
    let _ = writeln!(out, "{}{}", NAME_HEADER, zone.name);
    let _ = writeln!(out, "{}{}", ACT_HEADER, zone.act);
    let _ = writeln!(out, "{}{}", SPRITE_HEADER, zone.tile_set);
    for row in zone.tiles().chunks(zone.width()) {
        for tile in row {
            let _ = write!(out, "0x{:04x} ", tile.to_token());
        }
        out.push('\n');
    }
    out
}

/// Write `zone` to `dir/<zone.file_name()>`, creating `dir` if needed.
pub fn save_zone(zone: &Zone, dir: &Path) -> Result<PathBuf, EditorError> {
    std::fs::create_dir_all(dir).map_err(|source| EditorError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(zone.file_name());
    std::fs::write(&path, encode_zone(zone)).map_err(|source| EditorError::Io {
        path: path.clone(),
        source,
    })?;
    info!("saved zone '{}' act {} to {}", zone.name, zone.act, path.display());
    Ok(path)
}

/// Read and parse a `.zone` file. The background colour is not stored in the
/// file, so the caller supplies it.
pub fn load_zone(path: &Path, background: Color) -> Result<Zone, EditorError> {
    if path.extension().and_then(|e| e.to_str()) != Some(ZONE_EXTENSION) {
        return Err(EditorError::UnsupportedFormat(path.display().to_string()));
    }
    let txt = std::fs::read_to_string(path).map_err(|source| EditorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let zone = decode_zone(&txt, path, background)?;
    info!(
        "loaded zone '{}' act {} ({}x{}) from {}",
        zone.name,
        zone.act,
        zone.width(),
        zone.height(),
        path.display()
    );
    Ok(zone)
}

/// Parse zone file text. `path` is only used in error messages.
pub fn decode_zone(txt: &str, path: &Path, background: Color) -> Result<Zone, EditorError> {
    let mut lines = txt.lines().enumerate().map(|(i, l)| (i + 1, l.trim_end_matches('\r')));

    let (_, name) = header(&mut lines, path, 1, NAME_HEADER)?;
    let (act_line, act_txt) = header(&mut lines, path, 2, ACT_HEADER)?;
    let act: u32 = act_txt
        .trim()
        .parse()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| EditorError::parse(path, act_line, format!("invalid act number '{}'", act_txt)))?;
    let (sprite_line, tile_set) = header(&mut lines, path, 3, SPRITE_HEADER)?;
    if tile_set.trim().is_empty() {
        return Err(EditorError::parse(path, sprite_line, "empty sprite set"));
    }

    let mut width = 0usize;
    let mut tiles = Vec::new();
    let mut rows = 0usize;
    for (line_no, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let before = tiles.len();
        for token in line.split_whitespace() {
            tiles.push(Tile::from_token(parse_token(token).ok_or_else(|| {
                EditorError::parse(path, line_no, format!("invalid cell token '{}'", token))
            })?));
        }
        let row_width = tiles.len() - before;
        if rows == 0 {
            width = row_width;
        } else if row_width != width {
            return Err(EditorError::parse(
                path,
                line_no,
                format!("row has {} cells, expected {}", row_width, width),
            ));
        }
        rows += 1;
    }

    if width < MIN_ZONE_WIDTH || rows < MIN_ZONE_HEIGHT {
        return Err(EditorError::parse(
            path,
            3 + rows,
            format!(
                "grid is {}x{}, must be at least {}x{}",
                width, rows, MIN_ZONE_WIDTH, MIN_ZONE_HEIGHT
            ),
        ));
    }
    debug!("decoded {} cells from {}", tiles.len(), path.display());

    Ok(Zone::from_tiles(name, act, background, tile_set, width, tiles))
}

fn header<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    path: &Path,
    expected_line: usize,
    prefix: &str,
) -> Result<(usize, String), EditorError> {
    let label = prefix.trim_end_matches([':', ' ']);
    match lines.next() {
        Some((line_no, line)) => line
            .strip_prefix(prefix)
            .map(|value| (line_no, value.to_owned()))
            .ok_or_else(|| EditorError::parse(path, line_no, format!("expected '{}' header", label))),
        None => Err(EditorError::parse(
            path,
            expected_line,
            format!("missing '{}' header", label),
        )),
    }
}

fn parse_token(token: &str) -> Option<u16> {
    let hex = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X"))?;
    if hex.is_empty() || hex.len() > 4 {
        return None;
    }
    u16::from_str_radix(hex, 16).ok()
}
