use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use itertools::Itertools;
use log::debug;

use crate::error::{Attribute, ObjError};

/// Unindexed triangle data: one entry per face corner in each stream, in face
/// order. The three streams are laid out separately, not interleaved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<f32>,
    pub uvs: Vec<f32>,
    pub normals: Vec<f32>,
}

impl MeshData {
    pub const POSITION_STRIDE: usize = 3;
    pub const UV_STRIDE: usize = 2;
    pub const NORMAL_STRIDE: usize = 3;

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / Self::POSITION_STRIDE
    }

    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Records collected while reading, resolved into a `MeshData` once the whole
/// file has been seen.
#[derive(Default)]
struct ObjSource {
    positions: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    normals: Vec<[f32; 3]>,

    // parallel 1-based index streams, one entry per face corner
    position_indices: Vec<u32>,
    uv_indices: Vec<u32>,
    normal_indices: Vec<u32>,
}

impl ObjSource {
    fn read_line(&mut self, line_no: usize, line: &str) -> Result<(), ObjError> {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => self
                .positions
                .push(components(&mut tokens, line_no, "v")?),
            // a third `w` component is allowed but dropped
            Some("vt") => self.uvs.push(components(&mut tokens, line_no, "vt")?),
            Some("vn") => self.normals.push(components(&mut tokens, line_no, "vn")?),
            Some("f") => self.read_face(tokens, line_no, line)?,
            // comments, objects, groups, materials, smoothing
            _ => (),
        }
        Ok(())
    }

    /// Only triangles with all three index slots per corner are accepted.
    fn read_face<'a>(
        &mut self,
        tokens: impl Iterator<Item = &'a str>,
        line_no: usize,
        line: &str,
    ) -> Result<(), ObjError> {
        let malformed = || ObjError::MalformedFace {
            line: line_no,
            text: line.trim().to_owned(),
        };

        let corners: (&str, &str, &str) = tokens.collect_tuple().ok_or_else(malformed)?;
        let mut triangle = [(0u32, 0u32, 0u32); 3];
        for (slot, corner) in triangle.iter_mut().zip([corners.0, corners.1, corners.2]) {
            let indices: Option<(Option<u32>, Option<u32>, Option<u32>)> = corner
                .split('/')
                .map(|index| index.parse::<u32>().ok())
                .collect_tuple();
            match indices {
                Some((Some(p), Some(t), Some(n))) => *slot = (p, t, n),
                _ => return Err(malformed()),
            }
        }

        for (p, t, n) in triangle {
            self.position_indices.push(p);
            self.uv_indices.push(t);
            self.normal_indices.push(n);
        }
        Ok(())
    }

    fn resolve(self) -> Result<MeshData, ObjError> {
        Ok(MeshData {
            positions: expand(&self.positions, &self.position_indices, Attribute::Position)?,
            uvs: expand(&self.uvs, &self.uv_indices, Attribute::TexCoord)?,
            normals: expand(&self.normals, &self.normal_indices, Attribute::Normal)?,
        })
    }
}

/// Reads the first `N` floats off `tokens`; anything after them is ignored.
fn components<'a, const N: usize>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line: usize,
    kind: &'static str,
) -> Result<[f32; N], ObjError> {
    let mut out = [0.0; N];
    for slot in &mut out {
        *slot = tokens
            .next()
            .and_then(|token| token.parse().ok())
            .ok_or(ObjError::MalformedRecord { line, kind })?;
    }
    Ok(out)
}

/// Looks every 1-based index up in `source` and flattens the hits in index order.
fn expand<const N: usize>(
    source: &[[f32; N]],
    indices: &[u32],
    attribute: Attribute,
) -> Result<Vec<f32>, ObjError> {
    let mut out = Vec::with_capacity(indices.len() * N);
    for &index in indices {
        let value = (index as usize)
            .checked_sub(1)
            .and_then(|slot| source.get(slot))
            .ok_or(ObjError::IndexOutOfRange {
                attribute,
                index,
                len: source.len(),
            })?;
        out.extend_from_slice(value);
    }
    Ok(out)
}

/// Parse the OBJ file at `path` into expanded triangle data
pub fn parse(path: impl AsRef<Path>) -> Result<MeshData, ObjError> {
    let file = File::open(path.as_ref())?;
    parse_reader(BufReader::new(file))
}

pub fn parse_str(source: &str) -> Result<MeshData, ObjError> {
    parse_reader(source.as_bytes())
}

/// Parse OBJ text from any buffered reader. Fails without partial output on
/// the first bad record.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<MeshData, ObjError> {
    let mut source = ObjSource::default();
    for (idx, line) in reader.lines().enumerate() {
        source.read_line(idx + 1, &line?)?;
    }

    debug!(
        "obj: {} positions, {} uvs, {} normals, {} corners",
        source.positions.len(),
        source.uvs.len(),
        source.normals.len(),
        source.position_indices.len()
    );
    source.resolve()
}
