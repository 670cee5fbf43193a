//! Direction sets and unobstructed ray tables for the sliding pieces.
//!
//! The ray tables answer "could this slider ever reach that square" in one
//! mask test; blockers are resolved by walking the direction afterwards.

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub const ROOK_RAYS: [u64; 64] = generate_rays(&ROOK_DIRECTIONS);
pub const BISHOP_RAYS: [u64; 64] = generate_rays(&BISHOP_DIRECTIONS);
pub const QUEEN_RAYS: [u64; 64] = generate_queen_rays();

const fn generate_rays(directions: &[(i8, i8); 4]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let mut rays = 0u64;
        let mut i = 0usize;
        while i < directions.len() {
            rays |= trace_ray_const(sq as i32, directions[i].0 as i32, directions[i].1 as i32);
            i += 1;
        }
        table[sq] = rays;
        sq += 1;
    }

    table
}

const fn generate_queen_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = ROOK_RAYS[sq] | BISHOP_RAYS[sq];
        sq += 1;
    }

    table
}

const fn trace_ray_const(square: i32, row_step: i32, col_step: i32) -> u64 {
    let mut row = (square / 8) + row_step;
    let mut col = (square % 8) + col_step;
    let mut attacks = 0u64;

    while row >= 0 && row < 8 && col >= 0 && col < 8 {
        attacks |= 1u64 << ((row * 8 + col) as u32);
        row += row_step;
        col += col_step;
    }

    attacks
}
