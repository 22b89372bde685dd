//! Magic bitboards for rook and bishop attacks.
//!
//! Every square gets a mask of the squares whose occupancy can change its
//! attack set (the rays, minus the final edge square of each ray). The masked
//! occupancy is hashed with `(occ * magic) >> shift` into a dense table that
//! was filled once by brute-force ray walking over every subset of the mask.
//! Shifts are fixed per slider (52 for rooks, 55 for bishops), so each square
//! owns a slot of 4096 or 512 entries.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::types::{Bitboard, Square};

const ROOK_MAGICS: [u64; 64] = [
    0x0080001020400080, 0x0040001000200040, 0x0080081000200080, 0x0080040800100080,
    0x0080020400080080, 0x0080010200040080, 0x0080008001000200, 0x0080002040800100,
    0x0000800020400080, 0x0000400020005000, 0x0000801000200080, 0x0000800800100080,
    0x0000800400080080, 0x0000800200040080, 0x0000800100020080, 0x0000800040800100,
    0x0000208000400080, 0x0000404000201000, 0x0000808010002000, 0x0000808008001000,
    0x0000808004000800, 0x0000808002000400, 0x0000010100020004, 0x0000020000408104,
    0x0000208080004000, 0x0000200040005000, 0x0000100080200080, 0x0000080080100080,
    0x0000040080080080, 0x0000020080040080, 0x0000010080800200, 0x0000800080004100,
    0x0000204000800080, 0x0000200040401000, 0x0000100080802000, 0x0000080080801000,
    0x0000040080800800, 0x0000020080800400, 0x0000020001010004, 0x0000800040800100,
    0x0000204000808000, 0x0000200040008080, 0x0000100020008080, 0x0000080010008080,
    0x0000040008008080, 0x0000020004008080, 0x0000010002008080, 0x0000004081020004,
    0x0000204000800080, 0x0000200040008080, 0x0000100020008080, 0x0000080010008080,
    0x0000040008008080, 0x0000020004008080, 0x0000800100020080, 0x0000800041000080,
    0x0000102040800101, 0x0000102040008101, 0x0000081020004101, 0x0000040810002101,
    0x0001000204080011, 0x0001000204000801, 0x0001000082000401, 0x0000002040810402,
];

const BISHOP_MAGICS: [u64; 64] = [
    0x0002020202020200, 0x0002020202020000, 0x0004010202000000, 0x0004040080000000,
    0x0001104000000000, 0x0000821040000000, 0x0000410410400000, 0x0000104104104000,
    0x0000040404040400, 0x0000020202020200, 0x0000040102020000, 0x0000040400800000,
    0x0000011040000000, 0x0000008210400000, 0x0000004104104000, 0x0000002082082000,
    0x0004000808080800, 0x0002000404040400, 0x0001000202020200, 0x0000800802004000,
    0x0000800400A00000, 0x0000200100884000, 0x0000400082082000, 0x0000200041041000,
    0x0002080010101000, 0x0001040008080800, 0x0000208004010400, 0x0000404004010200,
    0x0000840000802000, 0x0000404002011000, 0x0000808001041000, 0x0000404000820800,
    0x0001041000202000, 0x0000820800101000, 0x0000104400080800, 0x0000020080080080,
    0x0000404040040100, 0x0000808100020100, 0x0001010100020800, 0x0000808080010400,
    0x0000820820004000, 0x0000410410002000, 0x0000082088001000, 0x0000002011000800,
    0x0000080100400400, 0x0001010101000200, 0x0002020202000400, 0x0001010101000200,
    0x0000410410400000, 0x0000208208200000, 0x0000002084100000, 0x0000000020880000,
    0x0000001002020000, 0x0000040408020000, 0x0004040404040000, 0x0002020202020000,
    0x0000104104104000, 0x0000002082082000, 0x0000000020841000, 0x0000000000208800,
    0x0000000010020200, 0x0000000404080200, 0x0000040404040400, 0x0002020202020200,
];

/// The two sliding movement patterns; the queen is their union.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slider {
    Rook,
    Bishop,
}

impl Slider {
    const fn directions(self) -> [(i8, i8); 4] {
        match self {
            Slider::Rook => [(1, 0), (-1, 0), (0, 1), (0, -1)],
            Slider::Bishop => [(1, 1), (1, -1), (-1, 1), (-1, -1)],
        }
    }

    /// Index bits reserved per square: enough for the largest mask of this slider.
    const fn index_bits(self) -> u32 {
        match self {
            Slider::Rook => 12,
            Slider::Bishop => 9,
        }
    }

    const fn builtin_magics(self) -> &'static [u64; 64] {
        match self {
            Slider::Rook => &ROOK_MAGICS,
            Slider::Bishop => &BISHOP_MAGICS,
        }
    }
}

/// Walk every ray from `sq` until the board edge or the first occupied square (inclusive).
pub(crate) fn ray_walk(slider: Slider, sq: Square, occupancy: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for (dr, df) in slider.directions() {
        let mut cur = sq;
        while let Some(next) = cur.offset(dr, df) {
            attacks |= next.bitboard();
            if occupancy.contains(next) {
                break;
            }
            cur = next;
        }
    }
    attacks
}

/// Squares strictly between `sq` and the board edge along each ray. A blocker on
/// the edge square hides nothing behind it, so the edge square is left out.
pub(crate) fn relevant_mask(slider: Slider, sq: Square) -> Bitboard {
    let mut mask = Bitboard::EMPTY;
    for (dr, df) in slider.directions() {
        let mut cur = sq;
        while let Some(next) = cur.offset(dr, df) {
            if next.offset(dr, df).is_none() {
                break;
            }
            mask |= next.bitboard();
            cur = next;
        }
    }
    mask
}

/// Every subset of `mask`, starting with the empty set (carry-rippler enumeration).
pub(crate) fn subsets(mask: Bitboard) -> impl Iterator<Item = Bitboard> {
    let mask = mask.0;
    let mut next = Some(0u64);
    std::iter::from_fn(move || {
        let current = next?;
        let following = current.wrapping_sub(mask) & mask;
        next = (following != 0).then_some(following);
        Some(Bitboard(current))
    })
}

#[inline]
const fn magic_index(masked: u64, magic: u64, shift: u32) -> usize {
    (masked.wrapping_mul(magic) >> shift) as usize
}

/// Fill one square's slot with `magic`, or `None` if two occupancies with
/// different attack sets hash to the same index.
fn try_fill(entries: &[(Bitboard, Bitboard)], magic: u64, shift: u32) -> Option<Vec<Bitboard>> {
    let mut slot: Vec<Option<Bitboard>> = vec![None; 1usize << (64 - shift)];
    for &(occ, attacks) in entries {
        let idx = magic_index(occ.0, magic, shift);
        match slot[idx] {
            Some(existing) if existing != attacks => return None,
            _ => slot[idx] = Some(attacks),
        }
    }
    Some(slot.into_iter().map(Option::unwrap_or_default).collect())
}

/// Random sparse candidates until one hashes the square without destructive collisions.
fn search_magic(
    sq: Square,
    mask: Bitboard,
    entries: &[(Bitboard, Bitboard)],
    shift: u32,
) -> (u64, Vec<Bitboard>) {
    let mut rng = StdRng::seed_from_u64(0x9E37_79B9_7F4A_7C15 ^ sq.index() as u64);
    loop {
        let candidate = rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>();
        if (mask.0.wrapping_mul(candidate) >> 56).count_ones() < 6 {
            continue;
        }
        if let Some(slot) = try_fill(entries, candidate, shift) {
            return (candidate, slot);
        }
    }
}

/// Magic lookup table for one slider.
pub(crate) struct SliderTable {
    masks: [Bitboard; 64],
    magics: [u64; 64],
    shift: u32,
    attacks: Vec<Bitboard>,
}

impl SliderTable {
    pub(crate) fn build(slider: Slider) -> Self {
        let bits = slider.index_bits();
        let shift = 64 - bits;
        let stride = 1usize << bits;
        let mut masks = [Bitboard::EMPTY; 64];
        let mut magics = *slider.builtin_magics();
        let mut attacks = Vec::with_capacity(64 * stride);

        for sq in Square::all() {
            let mask = relevant_mask(slider, sq);
            let entries: Vec<(Bitboard, Bitboard)> = subsets(mask)
                .map(|occ| (occ, ray_walk(slider, sq, occ)))
                .collect();

            let slot = match try_fill(&entries, magics[sq.index()], shift) {
                Some(slot) => slot,
                None => {
                    let (magic, slot) = search_magic(sq, mask, &entries, shift);
                    log::warn!("{slider:?} magic for {sq} collides, replaced with {magic:#018x}");
                    magics[sq.index()] = magic;
                    slot
                }
            };
            masks[sq.index()] = mask;
            attacks.extend(slot);
        }

        SliderTable {
            masks,
            magics,
            shift,
            attacks,
        }
    }

    #[inline]
    pub(crate) fn attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        let i = sq.index();
        let idx = magic_index((occupancy & self.masks[i]).0, self.magics[i], self.shift);
        self.attacks[(i << (64 - self.shift)) + idx]
    }

    #[cfg(test)]
    pub(crate) fn mask(&self, sq: Square) -> Bitboard {
        self.masks[sq.index()]
    }

    #[cfg(test)]
    pub(crate) fn uses_builtin_magics(&self, slider: Slider) -> bool {
        self.magics == *slider.builtin_magics()
    }
}
