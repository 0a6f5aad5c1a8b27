// wrap.rs - Toroidal index arithmetic

/// Map `index + offset` onto `[0, size)` so that -1 lands on `size - 1` and
/// `size` lands on 0. Any offset is accepted, not just -1..=1.
pub fn torus(index: usize, offset: isize, size: usize) -> usize {
    let size = size as isize;
    (((index as isize + offset) % size + size) % size) as usize
}
