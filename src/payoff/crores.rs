use crate::Utility;

/// Currency amount rendered in crores (10⁷) with two decimals, e.g. `-₹1.25 Cr`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crores(pub Utility);

impl std::fmt::Display for Crores {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let crores = self.0 / 1e7;
        let sign = if crores < 0. { "-" } else { "" };
        let text = format!("{}₹{:.2} Cr", sign, crores.abs());
        f.pad(&text)
    }
}
