use std::num::IntErrorKind;

/// The attribute references of one face corner, as written: `p`, `p/`, `p/t`, `p//n` or `p/t/n`.
///
/// Indices are kept exactly as written (1-based, possibly out of range); resolving them against
/// an [AttributeTable](crate::AttributeTable) is the welder's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Corner {
    pub position: i64,
    pub texcoord: Option<i64>,
    pub normal: Option<i64>,
}

impl Corner {
    /// Split a corner token on `/`.
    ///
    /// Returns `None` if the position part is missing or empty, if any non-empty part is not an
    /// integer, or if there are more than three parts. Integers too wide for `i64` saturate, so
    /// they still fail as out-of-range references rather than as malformed tokens.
    pub fn parse(token: &str) -> Option<Self> {
        let mut parts = token.split('/');
        let position = match parts.next() {
            Some(p) if !p.is_empty() => parse_index(p)?,
            _ => return None,
        };
        let texcoord = optional_part(parts.next())?;
        let normal = optional_part(parts.next())?;
        // stricter than "ignore the rest": a fourth part is almost always a typo
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            position,
            texcoord,
            normal,
        })
    }
}

/// `Some(None)` for an absent or empty part, `None` for a part that isn't an integer.
#[inline]
fn optional_part(part: Option<&str>) -> Option<Option<i64>> {
    match part {
        None | Some("") => Some(None),
        Some(p) => parse_index(p).map(Some),
    }
}

/// Parse an integer index, saturating on overflow.
fn parse_index(part: &str) -> Option<i64> {
    match part.parse::<i64>() {
        Ok(i) => Some(i),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::Corner;

    fn corner(position: i64, texcoord: Option<i64>, normal: Option<i64>) -> Corner {
        Corner {
            position,
            texcoord,
            normal,
        }
    }

    #[test]
    fn forms() {
        assert_eq!(Corner::parse("5"), Some(corner(5, None, None)));
        assert_eq!(Corner::parse("5/"), Some(corner(5, None, None)));
        assert_eq!(Corner::parse("5/2"), Some(corner(5, Some(2), None)));
        assert_eq!(Corner::parse("5//3"), Some(corner(5, None, Some(3))));
        assert_eq!(Corner::parse("5/2/3"), Some(corner(5, Some(2), Some(3))));
        assert_eq!(Corner::parse("5/2/"), Some(corner(5, Some(2), None)));
        assert_eq!(Corner::parse("5//"), Some(corner(5, None, None)));
    }

    #[test]
    fn out_of_range_is_not_malformed() {
        assert_eq!(Corner::parse("0"), Some(corner(0, None, None)));
        assert_eq!(Corner::parse("-1/-2"), Some(corner(-1, Some(-2), None)));
    }

    #[test]
    fn oversized_indices_saturate() {
        assert_eq!(
            Corner::parse("99999999999999999999"),
            Some(corner(i64::MAX, None, None))
        );
        assert_eq!(
            Corner::parse("1/-99999999999999999999/99999999999999999999"),
            Some(corner(1, Some(i64::MIN), Some(i64::MAX)))
        );
    }

    #[test]
    fn malformed() {
        assert_eq!(Corner::parse(""), None);
        assert_eq!(Corner::parse("/1"), None);
        assert_eq!(Corner::parse("//1"), None);
        assert_eq!(Corner::parse("a"), None);
        assert_eq!(Corner::parse("1/b"), None);
        assert_eq!(Corner::parse("1/2/c"), None);
        assert_eq!(Corner::parse("1.5"), None);
        assert_eq!(Corner::parse("1/2/3/4"), None);
    }
}
