//! URL-safe identifier generation.
//!
//! Slugs are derived once, at creation time, from a human-readable field.
//! Repositories only call into this module when the caller did not supply
//! a slug; an existing slug is never recomputed on later saves.

/// Slugify a string: lowercase, keep alphanumerics, collapse every run of
/// other characters into a single hyphen, and trim leading/trailing hyphens.
///
/// # Examples
///
/// ```
/// use procura_core::slug::slugify;
///
/// assert_eq!(slugify("Road Rehabilitation — Phase 2"), "road-rehabilitation-phase-2");
/// assert_eq!(slugify("TDR-2025-0001"), "tdr-2025-0001");
/// assert_eq!(slugify("  Acme   Corp.  "), "acme-corp");
/// ```
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for ch in input.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }

    out
}

/// Slugify several source fields and join them with hyphens, skipping
/// parts that slugify to nothing.
///
/// Used for entities whose slug is derived from a composite of fields,
/// e.g. a bid slug from `(company name, tender number, bid number)`.
pub fn compound(parts: &[&str]) -> String {
    let mut out = String::new();
    for part in parts {
        let slug = slugify(part);
        if slug.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('-');
        }
        out.push_str(&slug);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Office Supplies 2025"), "office-supplies-2025");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slugify("IT -- Networking / Cabling"), "it-networking-cabling");
    }

    #[test]
    fn trims_edges() {
        assert_eq!(slugify("  (Draft)  "), "draft");
    }

    #[test]
    fn empty_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn idempotent_on_own_output() {
        let once = slugify("Supply & Delivery of Lab Equipment");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn compound_joins_parts() {
        assert_eq!(
            compound(&["Acme Ltd.", "TDR-2025-0007", "BID-001"]),
            "acme-ltd-tdr-2025-0007-bid-001"
        );
    }

    #[test]
    fn compound_skips_empty_parts() {
        assert_eq!(compound(&["", "Milestone", "3"]), "milestone-3");
    }
}
