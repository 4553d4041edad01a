//! Dense (coordinate, move) -> coordinate tables (§4.2): for a block with
//! `nc` corners and `ne` edges, the four sub-coordinate successor tables
//! `cp_table`/`co_table`/`ep_table`/`eo_table`, generated once per block and
//! cached on disk as raw little-endian `u32` arrays.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::block::{Block, CoordinateBlockCube};
use crate::coordinate::{binomial, factorial, ipow};
use crate::cubie::{CubieCube, ELEMENTARY_TRANSFORMATIONS};
use crate::error::{Error, Result};
use crate::moves::{Move, ALL_MOVES, N_MOVES};

fn table_dir(block_id: &str) -> PathBuf {
    Path::new("move_tables").join(block_id)
}

/// Loads a flat `u32` table from `path`, little-endian, failing with
/// [`Error::LoadError`]/[`Error::LoadIoError`] rather than panicking: the
/// caller treats table absence as an ordinary "go generate it" signal.
fn load_u32_table(path: &Path, expected_len: usize) -> Result<Vec<u32>> {
    let bytes = fs::read(path).map_err(|source| Error::LoadIoError {
        path: path.display().to_string(),
        source,
    })?;
    let expected_bytes = expected_len * 4;
    if bytes.len() != expected_bytes {
        return Err(Error::LoadError {
            path: path.display().to_string(),
            expected: expected_bytes,
            found: bytes.len(),
        });
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

fn write_u32_table(path: &Path, table: &[u32]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::LoadIoError {
            path: parent.display().to_string(),
            source,
        })?;
    }
    let mut file = fs::File::create(path).map_err(|source| Error::LoadIoError {
        path: path.display().to_string(),
        source,
    })?;
    for &v in table {
        file.write_all(&v.to_le_bytes())
            .map_err(|source| Error::LoadIoError {
                path: path.display().to_string(),
                source,
            })?;
    }
    Ok(())
}

/// The four move-successor tables for one block.
pub struct BlockMoveTable {
    n_cl: u64,
    n_cp: u64,
    n_co: u64,
    n_el: u64,
    n_ep: u64,
    n_eo: u64,
    cp_table: Vec<u32>,
    co_table: Vec<u32>,
    ep_table: Vec<u32>,
    eo_table: Vec<u32>,
}

impl BlockMoveTable {
    /// Loads the block's cached tables if present with the expected size,
    /// otherwise generates and persists them.
    pub fn new(block: &Block) -> Result<Self> {
        let nc = block.nc() as u32;
        let ne = block.ne() as u32;
        let n_cl = binomial(8, nc);
        let n_cp = factorial(nc);
        let n_co = ipow(3, nc);
        let n_el = binomial(12, ne);
        let n_ep = factorial(ne);
        let n_eo = ipow(2, ne);

        let dir = table_dir(&block.id);
        let cp_path = dir.join("cp_table.dat");
        let co_path = dir.join("co_table.dat");
        let ep_path = dir.join("ep_table.dat");
        let eo_path = dir.join("eo_table.dat");

        let cp_len = (n_cl * n_cp * N_MOVES as u64) as usize;
        let co_len = (n_cl * n_co * N_MOVES as u64) as usize;
        let ep_len = (n_el * n_ep * N_MOVES as u64) as usize;
        let eo_len = (n_el * n_eo * N_MOVES as u64) as usize;

        if let (Ok(cp_table), Ok(co_table), Ok(ep_table), Ok(eo_table)) = (
            load_u32_table(&cp_path, cp_len),
            load_u32_table(&co_path, co_len),
            load_u32_table(&ep_path, ep_len),
            load_u32_table(&eo_path, eo_len),
        ) {
            return Ok(Self {
                n_cl,
                n_cp,
                n_co,
                n_el,
                n_ep,
                n_eo,
                cp_table,
                co_table,
                ep_table,
                eo_table,
            });
        }

        println!(
            "move table for block {} not found on disk, building it",
            block.id
        );
        let (cp_table, co_table) = Self::compute_corner_tables(block, n_cl, n_cp, n_co);
        let (ep_table, eo_table) = Self::compute_edge_tables(block, n_el, n_ep, n_eo);

        write_u32_table(&cp_path, &cp_table)?;
        write_u32_table(&co_path, &co_table)?;
        write_u32_table(&ep_path, &ep_table)?;
        write_u32_table(&eo_path, &eo_table)?;

        Ok(Self {
            n_cl,
            n_cp,
            n_co,
            n_el,
            n_ep,
            n_eo,
            cp_table,
            co_table,
            ep_table,
            eo_table,
        })
    }

    fn compute_corner_tables(
        block: &Block,
        n_cl: u64,
        n_cp: u64,
        n_co: u64,
    ) -> (Vec<u32>, Vec<u32>) {
        let mut cp_table = vec![0u32; (n_cl * n_cp * N_MOVES as u64) as usize];
        for ccl in 0..n_cl {
            for ccp in 0..n_cp {
                let cbc = CoordinateBlockCube {
                    ccl,
                    ccp,
                    ..CoordinateBlockCube::default()
                };
                let cc = block.to_cubie_cube(&cbc);
                let row = (ccl * n_cp + ccp) as usize * N_MOVES;
                for (mi, &m) in ALL_MOVES.iter().enumerate() {
                    let mut cc_copy = cc;
                    cc_copy.corner_apply(&ELEMENTARY_TRANSFORMATIONS[m as usize]);
                    let next = block.to_coordinate_block_cube(&cc_copy);
                    cp_table[row + mi] = (next.ccl * n_cp + next.ccp) as u32;
                }
            }
        }

        let mut co_table = vec![0u32; (n_cl * n_co * N_MOVES as u64) as usize];
        for ccl in 0..n_cl {
            for cco in 0..n_co {
                let cbc = CoordinateBlockCube {
                    ccl,
                    cco,
                    ..CoordinateBlockCube::default()
                };
                let cc = block.to_cubie_cube(&cbc);
                let row = (ccl * n_co + cco) as usize * N_MOVES;
                for (mi, &m) in ALL_MOVES.iter().enumerate() {
                    let mut cc_copy = cc;
                    cc_copy.corner_apply(&ELEMENTARY_TRANSFORMATIONS[m as usize]);
                    let next = block.to_coordinate_block_cube(&cc_copy);
                    co_table[row + mi] = next.cco as u32;
                }
            }
        }

        (cp_table, co_table)
    }

    fn compute_edge_tables(block: &Block, n_el: u64, n_ep: u64, n_eo: u64) -> (Vec<u32>, Vec<u32>) {
        let mut ep_table = vec![0u32; (n_el * n_ep * N_MOVES as u64) as usize];
        for cel in 0..n_el {
            for cep in 0..n_ep {
                let cbc = CoordinateBlockCube {
                    cel,
                    cep,
                    ..CoordinateBlockCube::default()
                };
                let cc = block.to_cubie_cube(&cbc);
                let row = (cel * n_ep + cep) as usize * N_MOVES;
                for (mi, &m) in ALL_MOVES.iter().enumerate() {
                    let mut cc_copy = cc;
                    cc_copy.edge_apply(&ELEMENTARY_TRANSFORMATIONS[m as usize]);
                    let next = block.to_coordinate_block_cube(&cc_copy);
                    ep_table[row + mi] = (next.cel * n_ep + next.cep) as u32;
                }
            }
        }

        let mut eo_table = vec![0u32; (n_el * n_eo * N_MOVES as u64) as usize];
        for cel in 0..n_el {
            for ceo in 0..n_eo {
                let cbc = CoordinateBlockCube {
                    cel,
                    ceo,
                    ..CoordinateBlockCube::default()
                };
                let cc = block.to_cubie_cube(&cbc);
                let row = (cel * n_eo + ceo) as usize * N_MOVES;
                for (mi, &m) in ALL_MOVES.iter().enumerate() {
                    let mut cc_copy = cc;
                    cc_copy.edge_apply(&ELEMENTARY_TRANSFORMATIONS[m as usize]);
                    let next = block.to_coordinate_block_cube(&cc_copy);
                    eo_table[row + mi] = next.ceo as u32;
                }
            }
        }

        (ep_table, eo_table)
    }

    /// Advances `cbc` in place under `m`, looking up all four sub-coordinates
    /// from the *pre-move* layout coordinates (§4.2: `cco`/`ceo` depend on
    /// which slots the block pieces occupy before the move).
    pub fn apply(&self, m: Move, cbc: &mut CoordinateBlockCube) {
        let mi = m as u64;
        let old_ccl = cbc.ccl;
        let old_cel = cbc.cel;

        if self.n_cp > 0 {
            let idx = (N_MOVES as u64 * (old_ccl * self.n_cp + cbc.ccp) + mi) as usize;
            let packed = self.cp_table[idx] as u64;
            cbc.ccl = packed / self.n_cp;
            cbc.ccp = packed % self.n_cp;
        }
        if self.n_co > 0 {
            let idx = (N_MOVES as u64 * (old_ccl * self.n_co + cbc.cco) + mi) as usize;
            cbc.cco = self.co_table[idx] as u64;
        }
        if self.n_ep > 0 {
            let idx = (N_MOVES as u64 * (old_cel * self.n_ep + cbc.cep) + mi) as usize;
            let packed = self.ep_table[idx] as u64;
            cbc.cel = packed / self.n_ep;
            cbc.cep = packed % self.n_ep;
        }
        if self.n_eo > 0 {
            let idx = (N_MOVES as u64 * (old_cel * self.n_eo + cbc.ceo) + mi) as usize;
            cbc.ceo = self.eo_table[idx] as u64;
        }
    }

    pub fn apply_inverse(&self, m: Move, cbc: &mut CoordinateBlockCube) {
        self.apply(m.get_inverse(), cbc)
    }

    pub fn n_corner_states(&self) -> u64 {
        self.n_cl * self.n_cp * self.n_co
    }

    pub fn n_edge_states(&self) -> u64 {
        self.n_el * self.n_ep * self.n_eo
    }

    pub fn n_cl(&self) -> u64 {
        self.n_cl
    }
    pub fn n_cp(&self) -> u64 {
        self.n_cp
    }
    pub fn n_co(&self) -> u64 {
        self.n_co
    }
    pub fn n_el(&self) -> u64 {
        self.n_el
    }
    pub fn n_ep(&self) -> u64 {
        self.n_ep
    }
    pub fn n_eo(&self) -> u64 {
        self.n_eo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubie::{Corner, Edge};

    fn dlb_222() -> Block {
        Block::new("DLB_222", vec![Corner::Dlb], vec![Edge::Dl, Edge::Lb, Edge::Db])
    }

    #[test]
    fn move_table_matches_direct_cubie_application() {
        let block = dlb_222();
        let table = BlockMoveTable::new(&block).unwrap();
        let solved_cbc = block.solved();

        for &m in ALL_MOVES.iter() {
            let mut via_table = solved_cbc;
            table.apply(m, &mut via_table);

            let mut cc = CubieCube::default();
            cc.apply(&ELEMENTARY_TRANSFORMATIONS[m as usize]);
            let via_cubie = block.to_coordinate_block_cube(&cc);

            assert_eq!(via_table, via_cubie, "move {:?}", m);
        }
    }

    #[test]
    fn applying_a_move_then_its_inverse_is_identity() {
        let block = dlb_222();
        let table = BlockMoveTable::new(&block).unwrap();
        let solved_cbc = block.solved();

        for &m in ALL_MOVES.iter() {
            let mut cbc = solved_cbc;
            table.apply(m, &mut cbc);
            table.apply(m.get_inverse(), &mut cbc);
            assert_eq!(cbc, solved_cbc, "move {:?}", m);
        }
    }
}
