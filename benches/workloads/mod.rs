pub mod dynamic;
pub mod searching;
pub mod sorting;
pub mod traversal;

/// Deterministic pseudo-random values so every run benches the same input.
pub fn scrambled(len: usize) -> Vec<u64> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            state >> 33
        })
        .collect()
}
