//! Naive reference arithmetic on raw coefficient vectors, independent of the
//! crate's polynomial type.

#![allow(dead_code)]

/// Strip trailing zeros
pub fn trim(mut v: Vec<u64>) -> Vec<u64> {
    while v.last() == Some(&0) {
        v.pop();
    }
    v
}

/// Schoolbook product mod p
pub fn mul(a: &[u64], b: &[u64], p: u64) -> Vec<u64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            out[i + j] = (out[i + j] + ai * bj) % p;
        }
    }
    trim(out)
}

/// x^3 + t^7 x + 1 mod p
pub fn curve_rhs(x: &[u64], p: u64) -> Vec<u64> {
    let x = trim(x.to_vec());
    let cube = mul(&mul(&x, &x, p), &x, p);
    let mut out = vec![0; cube.len().max(x.len() + 7).max(1)];
    for (i, &c) in cube.iter().enumerate() {
        out[i] = c;
    }
    for (i, &c) in x.iter().enumerate() {
        out[i + 7] = (out[i + 7] + c) % p;
    }
    out[0] = (out[0] + 1) % p;
    trim(out)
}

/// Whether some y of degree ≤ deg(target)/2 squares to `target`, by trying
/// every candidate
pub fn has_square_root_exhaustive(target: &[u64], p: u64) -> bool {
    if target.is_empty() {
        return true;
    }
    let len = (target.len() - 1) / 2 + 1;
    let mut y = vec![0u64; len];
    loop {
        if mul(&trim(y.clone()), &trim(y.clone()), p) == target {
            return true;
        }
        // plain odometer increment
        let mut i = 0;
        loop {
            if i == len {
                return false;
            }
            y[i] += 1;
            if y[i] < p {
                break;
            }
            y[i] = 0;
            i += 1;
        }
    }
}

/// Every tuple of {0..p}^len in lexicographic order
pub fn all_tuples(len: usize, p: u64) -> Vec<Vec<u64>> {
    let mut out = vec![Vec::new()];
    for _ in 0..len {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                (0..p).map(move |d| {
                    let mut t = prefix.clone();
                    t.push(d);
                    t
                })
            })
            .collect();
    }
    out
}
