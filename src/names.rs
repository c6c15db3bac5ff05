//! Entity name conversions.
//!
//! Three forms flow through the system: a normalized snake_case form used as
//! the stable lookup key (`barack_obama`), the canonical resource form the
//! graph store expects (`Barack_Obama`), and a human-readable display form
//! (`Barack Obama`).

/// Standard conversion from a name to a normalized name
/// (`Barack Obama` -> `barack_obama`).
pub fn normalized(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Convert a bare or normalized name into the canonical resource form
/// (`george_h._w._bush` -> `George_H._W._Bush`).
///
/// Whitespace becomes underscores and every letter that starts a word is
/// uppercased, where a word boundary is any non-alphabetic character. This
/// matches how the graph store names its resource pages, so initials like
/// `h._w.` capitalize correctly.
pub fn resource(name: &str) -> String {
    let spaced = name.trim().replace('_', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut at_boundary = true;
    for ch in spaced.chars() {
        if ch.is_alphabetic() {
            if at_boundary {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            at_boundary = false;
        } else {
            out.push(ch);
            at_boundary = true;
        }
    }
    out.replace(' ', "_")
}

/// Standard conversion from a normalized name to a display name
/// (`jacob_weber` -> `Jacob Weber`).
pub fn display(normalized_name: &str) -> String {
    let spaced = normalized_name.replace('_', " ");
    resource(&spaced).replace('_', " ")
}
